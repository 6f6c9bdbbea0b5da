mod amount;
mod date;
mod errors;

pub use amount::{parse_amount_lossy, parse_amount_strict};
pub use date::parse_date;
pub use errors::ParseError;

pub type TransactionId = String;
