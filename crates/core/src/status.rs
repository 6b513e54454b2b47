//! Submission lifecycle status.
//!
//! The status column is written exclusively by the external ingestion
//! worker; this system only ever reads it. Transitions are monotonic:
//! `processing → success` or `processing → error`, never back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a submission, as stored in `formai_db.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Processing,
    Success,
    Error,
}

impl SubmissionStatus {
    /// The exact string stored in the database for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Processing => "processing",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    /// Whether a client polling this submission should keep polling.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SubmissionStatus::Processing)
    }
}

impl FromStr for SubmissionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(SubmissionStatus::Processing),
            "success" => Ok(SubmissionStatus::Success),
            "error" => Ok(SubmissionStatus::Error),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status value in the store outside the known enum.
///
/// The store owns the column, so an unknown value means the ingestion
/// worker and this reader disagree about the schema.
#[derive(Debug, thiserror::Error)]
#[error("Unknown submission status: {0}")]
pub struct UnknownStatus(pub String);

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_all_known_statuses() {
        assert_eq!(
            "processing".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Processing
        );
        assert_eq!(
            "success".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Success
        );
        assert_eq!(
            "error".parse::<SubmissionStatus>().unwrap(),
            SubmissionStatus::Error
        );
    }

    #[test]
    fn rejects_unknown_status() {
        assert_matches!("done".parse::<SubmissionStatus>(), Err(UnknownStatus(s)) if s == "done");
    }

    #[test]
    fn round_trips_through_as_str() {
        for status in [
            SubmissionStatus::Processing,
            SubmissionStatus::Success,
            SubmissionStatus::Error,
        ] {
            assert_eq!(status.as_str().parse::<SubmissionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }

    #[test]
    fn only_processing_is_non_terminal() {
        assert!(!SubmissionStatus::Processing.is_terminal());
        assert!(SubmissionStatus::Success.is_terminal());
        assert!(SubmissionStatus::Error.is_terminal());
    }
}
