//! Combined balance list and settlement plan for one account.

use std::collections::HashMap;

use crate::{Expense, Money, Person, PersonId, aggregate, settle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceLine<'a> {
    pub person: &'a Person,
    pub balance: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer<'a> {
    pub from: &'a Person,
    pub to: &'a Person,
    pub amount: Money,
}

/// What the account owner sees: who is owed what, and who should pay whom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary<'a> {
    /// Every person exactly once, largest creditor first.
    pub balances: Vec<BalanceLine<'a>>,
    /// Payments in the order the matcher emitted them.
    pub settlements: Vec<Transfer<'a>>,
}

impl Summary<'_> {
    /// Sum of the settlements paid by `id`.
    pub fn paid_by(&self, id: PersonId) -> Money {
        self.settlements
            .iter()
            .filter(|t| t.from.id == id)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of the settlements received by `id`.
    pub fn received_by(&self, id: PersonId) -> Money {
        self.settlements
            .iter()
            .filter(|t| t.to.id == id)
            .map(|t| t.amount)
            .sum()
    }
}

/// Computes balances and settlements from a snapshot of `people` and
/// `expenses`, borrowing the snapshot for the returned labels.
pub fn summarize<'a>(people: &'a [Person], expenses: &[Expense]) -> Summary<'a> {
    let by_id: HashMap<PersonId, &'a Person> = people.iter().rev().map(|p| (p.id, p)).collect();

    let balances = aggregate(people, expenses);
    let settlements = settle(&balances);

    let lines = balances
        .ranked()
        .into_iter()
        .filter_map(|(id, balance)| {
            by_id
                .get(&id)
                .map(|&person| BalanceLine { person, balance })
        })
        .collect();

    let transfers = settlements
        .into_iter()
        .filter_map(|s| {
            Some(Transfer {
                from: by_id.get(&s.from).copied()?,
                to: by_id.get(&s.to).copied()?,
                amount: s.amount,
            })
        })
        .collect();

    Summary {
        balances: lines,
        settlements: transfers,
    }
}
