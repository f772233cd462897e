//! Shared-expense ledger.
//!
//! The engine turns one account's people and expenses into a net balance per
//! person and a list of payments that settles them:
//!
//! - [`split::share`] computes a participant's equal share of an expense.
//! - [`aggregate`] sums payer credits and participant debits into [`Balances`].
//! - [`settle`] greedily matches debtors to creditors.
//! - [`summarize`] runs both and labels the result with the people snapshot.
//!
//! Every function is a pure computation over a borrowed snapshot: nothing is
//! cached, persisted or shared between calls. Input validation lives in
//! [`Snapshot`], which the caller is expected to go through first.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use engine::{Expense, Money, Person, summarize};
//!
//! let a = Person::new("A", None);
//! let b = Person::new("B", None);
//! let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let people = vec![a.clone(), b.clone()];
//! let expenses = vec![Expense::new("dinner", Money::new(10_00), a.id, vec![a.id, b.id], date)];
//!
//! let summary = summarize(&people, &expenses);
//! assert_eq!(summary.balances[0].balance, Money::new(5_00));
//! assert_eq!(summary.settlements[0].from.id, b.id);
//! ```

pub use balances::{Balances, aggregate};
pub use error::EngineError;
pub use expenses::{Expense, ExpenseId};
pub use money::Money;
pub use people::{Person, PersonId};
pub use settlement::{Settlement, settle};
pub use snapshot::Snapshot;
pub use summary::{BalanceLine, Summary, Transfer, summarize};

mod balances;
mod error;
mod expenses;
mod money;
mod people;
mod settlement;
mod snapshot;
pub mod split;
mod summary;

pub type ResultEngine<T> = Result<T, EngineError>;
