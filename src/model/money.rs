//! The `Money` value object: an immutable amount/currency pair with checked arithmetic.

use crate::model::{Currency, LedgerError};
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Neg;
use std::sync::Arc;

/// An immutable monetary value.
///
/// Every arithmetic operation returns a *new* `Money` and requires the operand to carry
/// the exact same currency handle as the receiver (see [`crate::model::Currency`] for the
/// identity semantics). The result always keeps the receiver's currency.
///
/// `Money::Null` is the "no money" sentinel. It behaves as an identity element on the
/// left of every operation, returning the operand unchanged. The behavior is asymmetric:
/// `null.add(x)` is `x`, but `x.add(null)` fails the currency check because the
/// sentinel's empty currency matches nothing.
///
/// ```
/// use billfold::model::{usd, Money};
/// use rust_decimal::Decimal;
///
/// let a = Money::new(Decimal::from(100), usd());
/// let b = Money::new(Decimal::from(20), usd());
/// assert_eq!(a.add(&b).unwrap().amount(), Decimal::from(120));
///
/// let nothing = Money::Null;
/// assert_eq!(nothing.add(&a).unwrap(), a);
/// ```
#[derive(Debug, Clone)]
pub enum Money {
    /// The "no money" sentinel with an empty currency.
    Null,
    /// An amount of a concrete currency.
    Money {
        amount: Decimal,
        currency: Arc<Currency>,
    },
}

impl Money {
    pub fn new(amount: Decimal, currency: Arc<Currency>) -> Self {
        Money::Money { amount, currency }
    }

    /// The numeric amount; zero for `Null`.
    pub fn amount(&self) -> Decimal {
        match self {
            Money::Null => Decimal::ZERO,
            Money::Money { amount, .. } => *amount,
        }
    }

    /// The currency handle; `None` for `Null`.
    pub fn currency(&self) -> Option<&Arc<Currency>> {
        match self {
            Money::Null => None,
            Money::Money { currency, .. } => Some(currency),
        }
    }

    pub fn add(&self, other: &Money) -> Result<Money, LedgerError> {
        match self {
            Money::Null => Ok(other.clone()),
            Money::Money { amount, currency } => {
                self.check_same_currency(other)?;
                Ok(Money::new(*amount + other.amount(), currency.clone()))
            }
        }
    }

    pub fn subtract(&self, other: &Money) -> Result<Money, LedgerError> {
        match self {
            Money::Null => Ok(other.clone()),
            Money::Money { amount, currency } => {
                self.check_same_currency(other)?;
                Ok(Money::new(*amount - other.amount(), currency.clone()))
            }
        }
    }

    pub fn multiply(&self, other: &Money) -> Result<Money, LedgerError> {
        match self {
            Money::Null => Ok(other.clone()),
            Money::Money { amount, currency } => {
                self.check_same_currency(other)?;
                Ok(Money::new(*amount * other.amount(), currency.clone()))
            }
        }
    }

    pub fn divide(&self, other: &Money) -> Result<Money, LedgerError> {
        match self {
            Money::Null => Ok(other.clone()),
            Money::Money { amount, currency } => {
                self.check_same_currency(other)?;
                if other.amount().is_zero() {
                    return Err(LedgerError::DivideByZero { amount: *amount });
                }
                Ok(Money::new(*amount / other.amount(), currency.clone()))
            }
        }
    }

    /// The currency's display name, or the empty sentinel name for `Null`.
    fn currency_name(&self) -> &str {
        match self {
            Money::Null => "",
            Money::Money { currency, .. } => currency.name(),
        }
    }

    fn check_same_currency(&self, other: &Money) -> Result<(), LedgerError> {
        let same = match (self.currency(), other.currency()) {
            (Some(ours), Some(theirs)) => ours.same_as(theirs),
            _ => false,
        };
        if same {
            Ok(())
        } else {
            Err(LedgerError::IncorrectCurrency {
                ours: self.currency_name().to_string(),
                theirs: other.currency_name().to_string(),
            })
        }
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        match self {
            Money::Null => Money::Null,
            Money::Money { amount, currency } => Money::Money {
                amount: -amount,
                currency,
            },
        }
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Money::Null, Money::Null) => true,
            (
                Money::Money {
                    amount: a1,
                    currency: c1,
                },
                Money::Money {
                    amount: a2,
                    currency: c2,
                },
            ) => a1 == a2 && c1.same_as(c2),
            _ => false,
        }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // The sentinel renders its empty currency code and zero amount.
            Money::Null => write!(f, " 0"),
            Money::Money { amount, currency } => write!(f, "{currency} {amount}"),
        }
    }
}
