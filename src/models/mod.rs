mod errors;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::AnalyzerError;
pub use transaction::Transaction;

pub const DEBIT: &str = "debit";
pub const CREDIT: &str = "credit";

/// Which of the debit and credit transaction types occurs more often.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TypeBalance {
    Debit,
    Credit,
    Equal
}

impl Display for TypeBalance {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeBalance::Debit => DEBIT,
            TypeBalance::Credit => CREDIT,
            TypeBalance::Equal => "equal"
        };

        formatter.write_str(label)
    }
}
