//! Types that represent the core data model, such as `Money`, `Transaction` and `Account`.
//!
//! Everything here is single-threaded, in-memory and synchronous: no blocking I/O, no
//! shared mutable state, no logging. Failures surface as [`LedgerError`] values and are
//! always propagated to the caller.

mod account;
mod currency;
mod error;
mod money;
mod transaction;

pub use account::{Account, AccountKind, AccountOptions};
pub use currency::{usd, uyu, Currency, ShortCode};
pub use error::LedgerError;
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
