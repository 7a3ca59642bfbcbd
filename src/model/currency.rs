//! Currency identity tokens.
//!
//! A `Currency` is a pure identity token: two monetary values may only be combined when
//! they reference the *same* `Currency` handle. Equality is deliberately by handle
//! identity (`Arc::ptr_eq`) rather than by name or short code, so two independently
//! constructed "US Dollar" currencies are different currencies. Code that needs a shared
//! dollar should use [`usd`].

use crate::model::LedgerError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, OnceLock};

const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 15;
const SHORT_CODE_LEN: usize = 3;

/// The validated 3-letter abbreviation of a currency, e.g. `USD`.
///
/// Input is trimmed and uppercased; anything that is not exactly three characters long
/// after trimming is rejected.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn new(text: impl AsRef<str>) -> Result<Self, LedgerError> {
        let trimmed = text.as_ref().trim();
        if trimmed.chars().count() != SHORT_CODE_LEN {
            return Err(LedgerError::validation(format!(
                "The short name of a currency must be exactly {SHORT_CODE_LEN} characters long"
            )));
        }
        Ok(ShortCode(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monetary denomination: a display name plus a [`ShortCode`].
///
/// Constructed behind an `Arc` so that every `Money` using the currency shares one
/// handle. The struct itself is never mutated after construction.
#[derive(Debug)]
pub struct Currency {
    name: String,
    short: ShortCode,
}

impl Currency {
    /// Creates a new, distinct currency.
    ///
    /// The name must be between 3 and 15 characters after trimming. Note that the result
    /// is a fresh identity: it compares equal to clones of itself and to nothing else.
    pub fn new(name: impl Into<String>, short: impl AsRef<str>) -> Result<Arc<Self>, LedgerError> {
        let name = name.into().trim().to_string();
        let len = name.chars().count();
        if len < NAME_MIN_LEN {
            return Err(LedgerError::validation(format!(
                "The name of a currency must have at least {NAME_MIN_LEN} characters"
            )));
        }
        if len > NAME_MAX_LEN {
            return Err(LedgerError::validation(format!(
                "The name of a currency must have at most {NAME_MAX_LEN} characters"
            )));
        }
        Ok(Arc::new(Currency {
            name,
            short: ShortCode::new(short)?,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_code(&self) -> &str {
        self.short.as_str()
    }

    /// Whether two handles refer to the same currency. Identity, not structure.
    pub fn same_as(&self, other: &Arc<Currency>) -> bool {
        std::ptr::eq(self, Arc::as_ptr(other))
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short)
    }
}

/// The shared US Dollar instance. All callers get the same handle.
pub fn usd() -> Arc<Currency> {
    static USD: OnceLock<Arc<Currency>> = OnceLock::new();
    USD.get_or_init(|| {
        Currency::new("US Dollar", "USD").expect("the US Dollar definition is well formed")
    })
    .clone()
}

/// The shared Uruguayan Peso instance. All callers get the same handle.
pub fn uyu() -> Arc<Currency> {
    static UYU: OnceLock<Arc<Currency>> = OnceLock::new();
    UYU.get_or_init(|| {
        Currency::new("Uruguayan Peso", "UYU").expect("the Uruguayan Peso definition is well formed")
    })
    .clone()
}
