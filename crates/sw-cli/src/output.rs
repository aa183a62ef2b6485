use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use sw_queries::FilterOutcome;

/// JSON shape of every list command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<R, S> {
    pub caption: String,
    pub shown: usize,
    pub total: usize,
    pub records: Vec<R>,
    pub summary: S,
}

impl<R, S> Listing<R, S> {
    pub fn new<T>(outcome: &FilterOutcome<'_, T>, noun: &str, records: Vec<R>, summary: S) -> Self {
        Self {
            caption: outcome.caption(noun),
            shown: outcome.shown(),
            total: outcome.total,
            records,
            summary,
        }
    }
}

pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

/// Shorten `text` to `width` characters, marking the cut with "..."
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Foundation", 20), "Foundation");
        assert_eq!(fit("Foundation Excavation", 10), "Foundat...");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("#EMP001"), "#EMP001");
    }
}
