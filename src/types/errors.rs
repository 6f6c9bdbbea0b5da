use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error: invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Parse error: invalid date '{0}'")]
    InvalidDate(String)
}
