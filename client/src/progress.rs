//! Progress payloads pushed by the server and their on-screen rendering.
//!
//! The channel carries plain text: `current/total`, the keep-alive `ping`,
//! or the terminal `DONE`. Anything else is tolerated and ignored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{DONE_SENTINEL, PING_SENTINEL};

/// First `digits/digits` occurrence anywhere in the payload.
static PROGRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)/(\d+)").expect("valid progress pattern"));

/// Files processed so far. `total == 0` means the run has not started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
}

impl Progress {
    pub fn new(current: u64, total: u64) -> Self {
        Self { current, total }
    }

    pub fn is_started(&self) -> bool {
        self.total > 0
    }

    /// `round(100 * current / total)`, or 0 before the run starts.
    pub fn percentage(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (self.current as f64 / self.total as f64 * 100.0).round() as u64
    }
}

/// A decoded progress-channel payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Update(Progress),
    KeepAlive,
    Done,
    /// Payload that matched nothing; dropped without surfacing an error.
    Unrecognized(String),
}

impl ProgressEvent {
    pub fn parse(data: &str) -> Self {
        if data == DONE_SENTINEL {
            return ProgressEvent::Done;
        }
        if data == PING_SENTINEL {
            return ProgressEvent::KeepAlive;
        }

        let Some(caps) = PROGRESS_PATTERN.captures(data) else {
            return ProgressEvent::Unrecognized(data.to_string());
        };
        match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
            (Ok(current), Ok(total)) => ProgressEvent::Update(Progress::new(current, total)),
            _ => ProgressEvent::Unrecognized(data.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressEvent::Done)
    }
}

/// What the progress container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressDisplay {
    pub text: String,
    pub percentage: u64,
    /// CSS width of the fill bar, capped at 100%.
    pub fill_width: String,
}

impl ProgressDisplay {
    /// Zero state shown before the first count arrives.
    pub fn preparing() -> Self {
        Self {
            text: "Preparing...".to_string(),
            percentage: 0,
            fill_width: "0%".to_string(),
        }
    }

    pub fn percentage_label(&self) -> String {
        format!("{}%", self.percentage)
    }
}

impl From<Progress> for ProgressDisplay {
    fn from(progress: Progress) -> Self {
        if !progress.is_started() {
            return Self::preparing();
        }
        let percentage = progress.percentage();
        Self {
            text: format!("Processing: {}/{} PDFs", progress.current, progress.total),
            percentage,
            fill_width: format!("{}%", percentage.min(100)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(ProgressEvent::parse("DONE"), ProgressEvent::Done);
        assert_eq!(ProgressEvent::parse("ping"), ProgressEvent::KeepAlive);
        assert!(ProgressEvent::parse("DONE").is_terminal());
        // Sentinels are exact matches.
        assert!(matches!(ProgressEvent::parse("done"), ProgressEvent::Unrecognized(_)));
    }

    #[test]
    fn test_parse_counts() {
        assert_eq!(
            ProgressEvent::parse("3/10"),
            ProgressEvent::Update(Progress::new(3, 10))
        );
        // The pattern is searched, not anchored.
        assert_eq!(
            ProgressEvent::parse("step 4/7 done"),
            ProgressEvent::Update(Progress::new(4, 7))
        );
    }

    #[test]
    fn test_parse_tolerates_garbage() {
        for data in ["", "hello", "3/", "/4", "a/b", "99999999999999999999999/1"] {
            assert!(
                matches!(ProgressEvent::parse(data), ProgressEvent::Unrecognized(_)),
                "{data:?} should be ignored"
            );
        }
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(ProgressDisplay::from(Progress::new(1, 3)).percentage_label(), "33%");
        assert_eq!(ProgressDisplay::from(Progress::new(2, 3)).percentage_label(), "67%");
        assert_eq!(ProgressDisplay::from(Progress::new(1, 2)).percentage_label(), "50%");
        assert_eq!(ProgressDisplay::from(Progress::new(2, 2)).percentage_label(), "100%");
    }

    #[test]
    fn test_zero_total_is_preparing() {
        for current in [0, 1, 42] {
            assert_eq!(
                ProgressDisplay::from(Progress::new(current, 0)),
                ProgressDisplay::preparing()
            );
        }
        assert_eq!(ProgressDisplay::preparing().text, "Preparing...");
        assert_eq!(ProgressDisplay::preparing().percentage_label(), "0%");
    }

    #[test]
    fn test_display_text_and_width() {
        let display = ProgressDisplay::from(Progress::new(1, 4));
        assert_eq!(display.text, "Processing: 1/4 PDFs");
        assert_eq!(display.fill_width, "25%");

        let overshoot = ProgressDisplay::from(Progress::new(5, 4));
        assert_eq!(overshoot.percentage, 125);
        assert_eq!(overshoot.fill_width, "100%");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let first = ProgressDisplay::from(Progress::new(3, 9));
        let second = ProgressDisplay::from(Progress::new(3, 9));
        assert_eq!(first, second);
    }
}
