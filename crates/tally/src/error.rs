#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Input path is not a file: {0}")]
    InputNotAFile(String),

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
