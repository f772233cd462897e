//! Mapping between wire types and engine types.

use api_types::{
    snapshot::{ExpenseDto, PersonDto, SnapshotFile},
    summary::{BalanceDto, SettlementDto, SummaryReport},
};
use engine::{Expense, ExpenseId, Person, PersonId, Snapshot, Summary};

use crate::error::{AppError, Result};

fn person(dto: PersonDto) -> Person {
    Person {
        id: PersonId(dto.id),
        name: dto.name,
        email: dto.email,
        owner: dto.owner,
    }
}

fn expense(dto: ExpenseDto) -> Result<Expense> {
    Ok(Expense {
        id: dto.id.map(ExpenseId).unwrap_or_default(),
        owner: dto.owner,
        description: dto.description,
        amount: dto.amount.parse()?,
        paid_by: PersonId(dto.paid_by),
        participants: dto.participants.into_iter().map(PersonId).collect(),
        date: dto.date,
    })
}

/// Validates a snapshot file for `owner` (or the owner recorded in the file).
pub fn snapshot(file: SnapshotFile, owner: Option<&str>) -> Result<Snapshot> {
    let owner = owner
        .map(ToString::to_string)
        .or(file.owner)
        .ok_or(AppError::MissingSetting("owner"))?;

    let people = file.people.into_iter().map(person).collect();
    let expenses = file
        .expenses
        .into_iter()
        .map(expense)
        .collect::<Result<Vec<_>>>()?;

    Ok(Snapshot::try_new(&owner, people, expenses)?)
}

pub fn report(owner: &str, summary: &Summary<'_>) -> SummaryReport {
    SummaryReport {
        owner: owner.to_string(),
        balances: summary
            .balances
            .iter()
            .map(|line| BalanceDto {
                person_id: line.person.id.0,
                name: line.person.display_name(),
                balance: line.balance.to_string(),
            })
            .collect(),
        settlements: summary
            .settlements
            .iter()
            .map(|t| SettlementDto {
                from: t.from.id.0,
                from_name: t.from.display_name(),
                to: t.to.id.0,
                to_name: t.to.display_name(),
                amount: t.amount.to_string(),
            })
            .collect(),
    }
}
