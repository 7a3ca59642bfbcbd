//! The closed set of failures the domain model can produce.

use rust_decimal::Decimal;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// An error produced by the money domain.
///
/// These are synchronous, unrecoverable-at-the-point-of-call failures. The model never
/// swallows one of these and never logs; it is always the caller's decision whether to
/// recover (e.g. skip a transaction) or abort. Each variant carries the offending values
/// so callers can match on the kind rather than parse a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A currency was constructed from malformed input (bad name or short code).
    Validation { message: String },
    /// Two monetary values referencing different currencies were combined, either
    /// directly through arithmetic or by folding a transaction into a balance.
    IncorrectCurrency { ours: String, theirs: String },
    /// Division by a zero-amount `Money`.
    DivideByZero { amount: Decimal },
}

impl LedgerError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        LedgerError::Validation {
            message: message.into(),
        }
    }
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Validation { message } => write!(f, "{message}"),
            LedgerError::IncorrectCurrency { ours, theirs } => write!(
                f,
                "There is a mismatch of currencies. Got a {ours} but received a {theirs}"
            ),
            LedgerError::DivideByZero { amount } => {
                write!(f, "You can't divide {amount} by zero")
            }
        }
    }
}

impl Error for LedgerError {}
