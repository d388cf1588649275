use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid expression")]
    InvalidExpression,

    #[error("Empty sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, CalcError>;
