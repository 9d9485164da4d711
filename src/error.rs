use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Wrong number of command-line arguments.
    #[error("syntax: cubic c3 c2 c1 c0\nIndicate missing terms with zeroes.")]
    UsageError,

    /// An argument is not a real-number literal. Holds the argument as given.
    #[error("cubic: cannot parse {0}")]
    ParseError(String),

    /// The leading coefficient is zero, so the equation is not a cubic.
    #[error("cubic: sorry buddy, that's a quadratic.")]
    DomainError,
}
