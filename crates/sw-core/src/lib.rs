//! # sw-core
//!
//! Core types, traits, and utilities for SiteWorks.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types and the validation error collection
//! - Result type aliases
//! - Typed identifiers and the `Identifiable` trait
//! - Derived progress values
//! - Configuration loading

pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
