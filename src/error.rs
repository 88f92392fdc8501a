use std::path::PathBuf;

/// Failures the scaffolder reports to the user. Anything else (I/O while
/// copying or writing) travels as a plain `anyhow::Error` with path context.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("issue body is empty")]
    EmptyBody,

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("session directory already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("template directory not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("template document not found: {}", .0.display())]
    DocumentMissing(PathBuf),
}
