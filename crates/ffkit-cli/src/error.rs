use ffkit::forcefield::collection::ForceFieldError;
use ffkit::forcefield::terms::TermError;
use ffkit::io::FileError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("Term table validation failed: {0}")]
    Validation(#[from] ForceFieldError),

    #[error("Term evaluation failed: {0}")]
    Term(#[from] TermError),

    #[error("Invalid argument: {0}")]
    Argument(String),
}
