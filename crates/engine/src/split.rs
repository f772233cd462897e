//! Split calculator.

use crate::{Expense, Money};

/// Each participant's equal share of `expense`, rounded half-up to the cent.
///
/// Cents lost or gained by rounding are not assigned to anyone: the shares of
/// a `10.00` expense split three ways are `3.33` each, leaving `0.01` of the
/// amount uncovered. An expense without participants has a zero share.
pub fn share(expense: &Expense) -> Money {
    expense.amount.div_round_half_up(expense.participants.len())
}
