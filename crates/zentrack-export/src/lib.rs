//! zentrack-export
//!
//! CSV and plain-text exports of a user's assessment history.

pub mod error;
pub mod report;
pub mod tabular;

/// `Content-Disposition` file name for an export generated at `at`, e.g.
/// `zentrack_sessions_20260115.csv`.
pub fn attachment_name(kind: &str, extension: &str, at: jiff::Timestamp) -> String {
    format!("zentrack_{kind}_{}.{extension}", at.strftime("%Y%m%d"))
}
