use thiserror::Error;

/// Errors that can occur while building a report.
///
/// The reductions themselves are infallible over validated in-memory data;
/// only the rendering step can fail.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Chart backend failed to draw or serialize the figure.
    #[error("chart rendering failed: {0}")]
    Chart(String),
}
