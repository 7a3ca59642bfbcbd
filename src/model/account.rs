//! Accounts: a named container of an initial balance and a transaction history.

use crate::model::{usd, LedgerError, Money, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of account classifications.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum AccountKind {
    #[default]
    Checking,
    Savings,
}

serde_plain::derive_display_from_serialize!(AccountKind);
serde_plain::derive_fromstr_from_deserialize!(AccountKind);

/// Options for opening an [`Account`].
///
/// `name` and `kind` are required; the rest have documented defaults:
/// - `transactions` defaults to an empty history,
/// - `initial_balance` defaults to zero US dollars,
/// - `id` defaults to a freshly generated UUID.
///
/// ```
/// use billfold::model::{Account, AccountKind, AccountOptions};
///
/// let account = Account::new(AccountOptions {
///     name: "Groceries".to_string(),
///     kind: AccountKind::Checking,
///     ..AccountOptions::default()
/// });
/// assert!(account.transactions().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct AccountOptions {
    /// A human friendly name to identify the account.
    pub name: String,
    /// The corresponding account type.
    pub kind: AccountKind,
    /// The transactions performed with the account's money.
    pub transactions: Vec<Transaction>,
    /// The balance at the moment the account was registered.
    pub initial_balance: Option<Money>,
    /// An id to uniquely identify the account (when re-opening an existing one).
    pub id: Option<Uuid>,
}

/// A user's account.
///
/// The account owns its transactions in insertion order, which is not necessarily
/// chronological order. The current balance is never stored; it is derived on demand by
/// [`Account::current_balance`]. Instances are not synchronized: a caller sharing an
/// account across threads must serialize mutations externally.
#[derive(Debug, Clone)]
pub struct Account {
    id: Uuid,
    name: String,
    kind: AccountKind,
    initial_balance: Money,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(options: AccountOptions) -> Self {
        Self {
            id: options.id.unwrap_or_else(Uuid::new_v4),
            name: options.name,
            kind: options.kind,
            initial_balance: options
                .initial_balance
                .unwrap_or_else(|| Money::new(Decimal::ZERO, usd())),
            transactions: options.transactions,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: AccountKind) {
        self.kind = kind;
    }

    pub fn initial_balance(&self) -> &Money {
        &self.initial_balance
    }

    pub fn set_initial_balance(&mut self, balance: Money) {
        self.initial_balance = balance;
    }

    /// The transaction history in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Appends a transaction to the history.
    ///
    /// No currency check happens here; an incompatible transaction is only reported when
    /// the balance is next computed.
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Derives the current balance from the initial balance and the whole history.
    ///
    /// The history is copied and stable-sorted by date ascending (equal dates keep their
    /// insertion order; the stored list is never reordered). A `Deposit` contributes its
    /// money unchanged; every other kind is treated uniformly as a debit and contributes
    /// its negation. The signed sequence is then folded left to right with
    /// [`Money::add`], seeded by the initial balance.
    ///
    /// Fails with [`LedgerError::IncorrectCurrency`] at the first transaction whose
    /// currency differs from the balance accumulated so far; no partial result is
    /// observable.
    pub fn current_balance(&self) -> Result<Money, LedgerError> {
        let mut ordered: Vec<&Transaction> = self.transactions.iter().collect();
        ordered.sort_by_key(|tx| tx.date());

        let mut balance = self.initial_balance.clone();
        for tx in ordered {
            let signed = match tx.kind() {
                TransactionKind::Deposit => tx.money().clone(),
                _ => -tx.money().clone(),
            };
            balance = balance.add(&signed)?;
        }
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::uyu;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, d, 0, 0, 0).unwrap()
    }

    fn dollars(amount: i64) -> Money {
        Money::new(Decimal::from(amount), usd())
    }

    fn open(initial: Money, transactions: Vec<Transaction>) -> Account {
        Account::new(AccountOptions {
            name: "Test Checking".to_string(),
            kind: AccountKind::Checking,
            transactions,
            initial_balance: Some(initial),
            ..AccountOptions::default()
        })
    }

    #[test]
    fn test_defaults() {
        let account = Account::new(AccountOptions {
            name: "Savings".to_string(),
            kind: AccountKind::Savings,
            ..AccountOptions::default()
        });
        assert!(account.transactions().is_empty());
        assert_eq!(*account.initial_balance(), dollars(0));
        assert_eq!(account.kind(), AccountKind::Savings);
    }

    #[test]
    fn test_fresh_accounts_get_distinct_ids() {
        let a = Account::new(AccountOptions::default());
        let b = Account::new(AccountOptions::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_explicit_id_is_preserved() {
        let id = Uuid::new_v4();
        let account = Account::new(AccountOptions {
            id: Some(id),
            ..AccountOptions::default()
        });
        assert_eq!(account.id(), id);
    }

    #[test]
    fn test_balance_of_an_empty_history_is_the_initial_balance() {
        assert_eq!(open(dollars(100), vec![]).current_balance().unwrap(), dollars(100));
    }

    #[test]
    fn test_non_deposits_are_debits() {
        let account = open(
            dollars(100),
            vec![
                Transaction::new(dollars(10), TransactionKind::CashWithdrawal, "atm", day(2)),
                Transaction::new(
                    dollars(20),
                    TransactionKind::CreditCardPurchase,
                    "shoes",
                    day(5),
                ),
            ],
        );
        assert_eq!(account.current_balance().unwrap(), dollars(70));
    }

    #[test]
    fn test_deposits_are_credits() {
        let mut account = open(
            dollars(100),
            vec![
                Transaction::new(dollars(10), TransactionKind::CashWithdrawal, "atm", day(2)),
                Transaction::new(
                    dollars(20),
                    TransactionKind::CreditCardPurchase,
                    "shoes",
                    day(5),
                ),
            ],
        );
        account.record(Transaction::new(
            dollars(50),
            TransactionKind::Deposit,
            "payday",
            day(7),
        ));
        assert_eq!(account.current_balance().unwrap(), dollars(120));
    }

    #[test]
    fn test_bank_transfers_and_point_of_sale_are_debits_too() {
        let account = open(
            dollars(100),
            vec![
                Transaction::new(dollars(30), TransactionKind::BankTransfer, "rent", day(1)),
                Transaction::new(dollars(5), TransactionKind::PointOfSale, "coffee", day(2)),
            ],
        );
        assert_eq!(account.current_balance().unwrap(), dollars(65));
    }

    #[test]
    fn test_history_order_is_never_mutated() {
        let early = Transaction::new(dollars(10), TransactionKind::Deposit, "early", day(1));
        let late = Transaction::new(dollars(20), TransactionKind::Deposit, "late", day(9));
        let account = open(dollars(0), vec![late.clone(), early.clone()]);

        assert_eq!(account.current_balance().unwrap(), dollars(30));
        // Insertion order survives the chronological fold.
        assert_eq!(account.transactions(), &[late, early]);
    }

    #[test]
    fn test_equal_dates_fold_in_insertion_order() {
        // A Null initial balance adopts the currency of the first folded transaction, so
        // the error below tells us which same-day transaction was folded first.
        let account = open(
            Money::Null,
            vec![
                Transaction::new(
                    Money::new(Decimal::from(100), uyu()),
                    TransactionKind::Deposit,
                    "first",
                    day(4),
                ),
                Transaction::new(dollars(50), TransactionKind::Deposit, "second", day(4)),
            ],
        );
        assert_eq!(
            account.current_balance().unwrap_err(),
            LedgerError::IncorrectCurrency {
                ours: "Uruguayan Peso".to_string(),
                theirs: "US Dollar".to_string(),
            }
        );
    }

    #[test]
    fn test_foreign_currency_transaction_fails_the_fold() {
        let mut account = open(dollars(100), vec![]);
        // Appending never validates; only the balance computation does.
        account.record(Transaction::new(
            Money::new(Decimal::from(10), uyu()),
            TransactionKind::Deposit,
            "pesos",
            day(3),
        ));
        assert!(matches!(
            account.current_balance(),
            Err(LedgerError::IncorrectCurrency { .. })
        ));
    }

    #[test]
    fn test_kind_textual_forms() {
        assert_eq!(AccountKind::Checking.to_string(), "Checking");
        assert_eq!(AccountKind::Savings.to_string(), "Savings");
    }

    #[test]
    fn test_setters() {
        let mut account = Account::new(AccountOptions::default());
        account.set_name("Renamed");
        account.set_kind(AccountKind::Savings);
        account.set_initial_balance(dollars(5));
        assert_eq!(account.name(), "Renamed");
        assert_eq!(account.kind(), AccountKind::Savings);
        assert_eq!(*account.initial_balance(), dollars(5));
    }
}
