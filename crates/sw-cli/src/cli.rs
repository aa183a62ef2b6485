use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use sw_models::{PhaseStatus, Priority, ProjectStatus};
use sw_queries::{TaskStatusFilter, WorkerStatusFilter};

/// Browse a construction-site dataset: projects, tasks, workers, phases, attendance
#[derive(Parser, Debug)]
#[command(name = "siteworks", version = env!("CARGO_PKG_VERSION"), long_about = None)]
pub struct Cli {
    /// Configuration file (TOML or JSON)
    #[arg(global = true, long)]
    pub config: Option<PathBuf>,

    /// Dataset file; overrides `data_path` from the configuration
    #[arg(global = true, long)]
    pub data: Option<PathBuf>,

    /// Reference date for overdue tasks and attendance (YYYY-MM-DD)
    #[arg(global = true, long)]
    pub today: Option<NaiveDate>,

    /// Emit log lines as JSON
    #[arg(global = true, long)]
    pub log_json: bool,

    /// Output format
    #[arg(global = true, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tasks
    Tasks {
        /// "All Tasks", "Not Started", "In Progress", "Completed" or "Overdue"
        #[arg(long, default_value = "All Tasks")]
        status: TaskStatusFilter,

        /// Case-insensitive text matched against titles, projects, subtasks and workers
        #[arg(long)]
        search: Option<String>,

        /// Project id
        #[arg(long)]
        project: Option<i64>,

        #[arg(long)]
        priority: Option<Priority>,

        /// Keep tasks with at least one assigned worker in this role
        #[arg(long)]
        role: Option<String>,
    },

    /// List workers
    Workers {
        /// "All Workers", "Active", "Inactive" or "Supervisors"
        #[arg(long, default_value = "All Workers")]
        status: WorkerStatusFilter,

        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// List projects
    Projects {
        #[arg(long)]
        status: Option<ProjectStatus>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        client: Option<String>,
    },

    /// List phases with their work packages
    Phases {
        /// "In Progress" or "Completed"
        #[arg(long)]
        status: Option<PhaseStatus>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Show the attendance sheet for one day
    Attendance {
        /// Day to show (YYYY-MM-DD); defaults to the reference date
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Also write the day's report as CSV to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Headline numbers across the whole dataset
    Overview,
}
