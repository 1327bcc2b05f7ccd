use thiserror::Error;

/// Library-level errors. Conflicting options never error; they are resolved
/// by `Options::normalized`, so the only failure mode is bad numeric input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Expected a finite number")]
    InvalidInput,
}

pub type Result<T> = std::result::Result<T, Error>;
