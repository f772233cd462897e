//! Expense records.
//!
//! An [`Expense`] is money fronted by one person (the payer) on behalf of a
//! set of participants. The amount is always split equally between the
//! participants, the payer included.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Money, PersonId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Username of the owning account.
    pub owner: Option<String>,
    pub description: String,
    pub amount: Money,
    pub paid_by: PersonId,
    pub participants: Vec<PersonId>,
    /// Only used to order expenses for display.
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        paid_by: PersonId,
        participants: Vec<PersonId>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            owner: None,
            description: description.into(),
            amount,
            paid_by,
            participants,
            date,
        }
    }

    /// Equal share owed by each participant, see [`crate::split::share`].
    pub fn share(&self) -> Money {
        crate::split::share(self)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} paid by {})", self.description, self.amount, self.paid_by)
    }
}
