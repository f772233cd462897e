//! Settlement matching.
//!
//! Turns net balances into point-to-point payments that bring every balance
//! to zero. The matcher is a greedy sweep over debtors and creditors in
//! snapshot order; it does not look for the smallest number of payments.

use serde::{Deserialize, Serialize};

use crate::{Balances, Money, PersonId};

/// `from` pays `to` the given amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: PersonId,
    pub to: PersonId,
    pub amount: Money,
}

/// Derives the payments that settle `balances`.
///
/// Creditors (positive balance) and debtors (negative balance) keep the order
/// of the people snapshot. At each step the current debtor pays the current
/// creditor the smaller of their remaining amounts; whichever side reaches
/// zero is advanced, both when they tie. The sweep stops as soon as either
/// side runs out, so rounding residue left on the other side is not paid.
pub fn settle(balances: &Balances) -> Vec<Settlement> {
    let mut creditors: Vec<(PersonId, Money)> = Vec::new();
    let mut debtors: Vec<(PersonId, Money)> = Vec::new();
    for (id, balance) in balances.iter() {
        if balance.is_positive() {
            creditors.push((id, balance));
        } else if balance.is_negative() {
            debtors.push((id, -balance));
        }
    }

    let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());
    let (mut ci, mut di) = (0, 0);

    while let (Some(debtor), Some(creditor)) = (debtors.get(di).copied(), creditors.get(ci).copied())
    {
        let (debtor_id, debt) = debtor;
        let (creditor_id, credit) = creditor;
        let pay = debt.min(credit);

        settlements.push(Settlement {
            from: debtor_id,
            to: creditor_id,
            amount: pay,
        });

        let debt = debt - pay;
        let credit = credit - pay;

        if debt.is_zero() {
            di += 1;
        } else {
            debtors[di].1 = debt;
        }

        if credit.is_zero() {
            ci += 1;
        } else {
            creditors[ci].1 = credit;
        }
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        settlements = settlements.len(),
        "settlements matched"
    );

    settlements
}
