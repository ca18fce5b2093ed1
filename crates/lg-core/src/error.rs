use thiserror::Error;

pub type LgResult<T> = Result<T, LgError>;

#[derive(Error, Debug)]
pub enum LgError {
    /// A representation invariant was broken. Always a bug in the library,
    /// never a consequence of valid caller input.
    #[error("Invariant violated: {what}")]
    Invariant { what: String },

    /// Caller input rejected at an outer surface (e.g. a negative weight in
    /// a CLI script). The library operations themselves are total.
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
