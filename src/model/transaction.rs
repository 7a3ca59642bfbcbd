//! A single monetary movement: some money, a classification, a note and a date.

use crate::model::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// The closed set of movement classifications.
///
/// The textual forms are part of the contract (they appear in rendered summaries), so
/// each variant pins its exact string.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "Deposit")]
    Deposit,
    #[serde(rename = "Cash Withdrawal")]
    CashWithdrawal,
    #[serde(rename = "Point of sale")]
    PointOfSale,
    #[serde(rename = "Bank transfer")]
    BankTransfer,
    #[serde(rename = "Credit card purchase")]
    CreditCardPurchase,
}

serde_plain::derive_display_from_serialize!(TransactionKind);
serde_plain::derive_fromstr_from_deserialize!(TransactionKind);

/// An immutable record of one monetary movement.
///
/// A transaction is owned by exactly one account's history and holds no back-reference.
/// Construction cannot fail and performs no validation; currency consistency with the
/// owning account is checked only when a balance is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: Uuid,
    money: Money,
    kind: TransactionKind,
    notes: String,
    date: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction with a freshly generated id.
    pub fn new(
        money: Money,
        kind: TransactionKind,
        notes: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), money, kind, notes, date)
    }

    /// Creates a transaction with an explicit id, e.g. one that already exists elsewhere.
    pub fn with_id(
        id: Uuid,
        money: Money,
        kind: TransactionKind,
        notes: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            money,
            kind,
            notes: notes.into(),
            date,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn money(&self) -> &Money {
        &self.money
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// The calendar day of the transaction, without the time of day,
    /// e.g. `Sun Oct 22 2023`.
    pub fn date_string(&self) -> String {
        self.date.date_naive().format("%a %b %d %Y").to_string()
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id = {}; type = {}; notes = {}; date = {}; money = {}",
            self.id,
            self.kind,
            self.notes,
            self.date_string(),
            self.money
        )
    }
}
