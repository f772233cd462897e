//! Net balance aggregation.
//!
//! A person's net balance is what they paid minus the shares they owe:
//! positive balances are owed money, negative balances owe money.

use std::collections::HashMap;

use crate::{Expense, Money, Person, PersonId};

/// Net balance per person, in the order of the people snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Balances {
    entries: Vec<(PersonId, Money)>,
    index: HashMap<PersonId, usize>,
}

impl Balances {
    /// Starts every person at zero, so people without expenses still show up.
    fn zeroed(people: &[Person]) -> Self {
        let mut balances = Self {
            entries: Vec::with_capacity(people.len()),
            index: HashMap::with_capacity(people.len()),
        };
        for person in people {
            if !balances.index.contains_key(&person.id) {
                balances.index.insert(person.id, balances.entries.len());
                balances.entries.push((person.id, Money::ZERO));
            }
        }
        balances
    }

    fn slot_mut(&mut self, id: PersonId) -> Option<&mut Money> {
        let idx = *self.index.get(&id)?;
        self.entries.get_mut(idx).map(|(_, balance)| balance)
    }

    /// Balance of `id`, `None` when the person is not part of the snapshot.
    pub fn get(&self, id: PersonId) -> Option<Money> {
        let idx = *self.index.get(&id)?;
        self.entries.get(idx).map(|(_, balance)| *balance)
    }

    /// Balances in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, Money)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every balance. Zero, up to the rounding residue of uneven splits.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, balance)| *balance).sum()
    }

    /// Balances sorted by descending amount, largest creditor first.
    ///
    /// The sort is stable: people with equal balances keep snapshot order.
    pub fn ranked(&self) -> Vec<(PersonId, Money)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        ranked
    }
}

/// Aggregates `expenses` into a net balance for each of `people`.
///
/// The payer is credited with the full amount and every participant, payer
/// included, is debited with the expense [`share`](crate::split::share). The
/// result does not depend on the order of `expenses`.
///
/// Expenses referencing someone outside `people` break the caller's contract:
/// the unknown side of the entry is skipped and a warning is logged.
pub fn aggregate(people: &[Person], expenses: &[Expense]) -> Balances {
    let mut balances = Balances::zeroed(people);

    for expense in expenses {
        let share = crate::split::share(expense);

        match balances.slot_mut(expense.paid_by) {
            Some(balance) => *balance += expense.amount,
            None => tracing::warn!(
                expense = %expense.id,
                person = %expense.paid_by,
                "payer not in snapshot, credit skipped"
            ),
        }

        for participant in &expense.participants {
            match balances.slot_mut(*participant) {
                Some(balance) => *balance -= share,
                None => tracing::warn!(
                    expense = %expense.id,
                    person = %participant,
                    "participant not in snapshot, debit skipped"
                ),
            }
        }
    }

    tracing::debug!(
        people = balances.len(),
        expenses = expenses.len(),
        residue = %balances.total(),
        "balances aggregated"
    );

    balances
}
