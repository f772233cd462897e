//! Validated snapshot of one account's people and expenses.
//!
//! The computations in this crate trust their input. A [`Snapshot`] is the
//! gate in front of them: it checks ownership, amounts and participant sets
//! once, so [`Snapshot::summarize`] only ever sees well-formed data.

use std::collections::HashSet;

use crate::{
    EngineError, Expense, Money, Person, PersonId, ResultEngine,
    summary::{Summary, summarize},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    owner: String,
    people: Vec<Person>,
    expenses: Vec<Expense>,
}

impl Snapshot {
    /// Validates `people` and `expenses` for `owner`.
    ///
    /// Records without an owner are stamped with `owner`. Duplicate
    /// participants collapse to one; their first position is kept.
    pub fn try_new(
        owner: &str,
        people: Vec<Person>,
        expenses: Vec<Expense>,
    ) -> ResultEngine<Self> {
        let owner = owner.trim();
        if owner.is_empty() {
            return Err(EngineError::OwnerMismatch(
                "owner username must not be empty".to_string(),
            ));
        }

        let mut ids = HashSet::with_capacity(people.len());
        let people = people
            .into_iter()
            .map(|person| {
                let person = normalize_person(owner, person)?;
                if !ids.insert(person.id) {
                    return Err(EngineError::ExistingKey(person.id.to_string()));
                }
                Ok(person)
            })
            .collect::<ResultEngine<Vec<_>>>()?;

        let mut expense_ids = HashSet::with_capacity(expenses.len());
        let expenses = expenses
            .into_iter()
            .map(|expense| {
                let expense = normalize_expense(owner, &ids, expense)?;
                if !expense_ids.insert(expense.id) {
                    return Err(EngineError::ExistingKey(expense.id.to_string()));
                }
                Ok(expense)
            })
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(Self {
            owner: owner.to_string(),
            people,
            expenses,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Makes sure the owner appears as a person (named after the username)
    /// and returns its id.
    pub fn ensure_owner_person(&mut self) -> PersonId {
        if let Some(me) = self.people.iter().find(|p| p.name == self.owner) {
            return me.id;
        }
        let me = Person::new(self.owner.as_str(), Some(self.owner.as_str()));
        let id = me.id;
        tracing::info!(owner = %self.owner, person = %id, "added owner to people");
        self.people.push(me);
        id
    }

    /// Expenses newest first; same-day expenses keep snapshot order.
    pub fn expenses_by_date(&self) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn summarize(&self) -> Summary<'_> {
        summarize(&self.people, &self.expenses)
    }
}

fn check_owner(owner: &str, record_owner: Option<String>, label: &str) -> ResultEngine<String> {
    match record_owner {
        None => Ok(owner.to_string()),
        Some(found) if found == owner => Ok(found),
        Some(found) => Err(EngineError::OwnerMismatch(format!(
            "{label} belongs to '{found}', not '{owner}'"
        ))),
    }
}

fn normalize_person(owner: &str, mut person: Person) -> ResultEngine<Person> {
    let name = person.name.trim();
    if name.is_empty() {
        return Err(EngineError::InvalidPerson(
            "person name must not be empty".to_string(),
        ));
    }
    person.name = name.to_string();
    person.owner = Some(check_owner(owner, person.owner.take(), "person")?);
    person.email = person
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string);
    Ok(person)
}

fn normalize_expense(
    owner: &str,
    people: &HashSet<PersonId>,
    mut expense: Expense,
) -> ResultEngine<Expense> {
    expense.owner = Some(check_owner(owner, expense.owner.take(), "expense")?);

    let description = expense.description.trim();
    if description.is_empty() {
        return Err(EngineError::InvalidExpense(
            "description must not be empty".to_string(),
        ));
    }
    expense.description = description.to_string();

    if expense.amount < Money::CENT {
        return Err(EngineError::InvalidAmount(format!(
            "expense amount must be at least 0.01, got {}",
            expense.amount
        )));
    }
    if expense.amount > Money::MAX_EXPENSE {
        return Err(EngineError::InvalidAmount(format!(
            "expense amount must be at most {}, got {}",
            Money::MAX_EXPENSE,
            expense.amount
        )));
    }

    let mut seen = HashSet::with_capacity(expense.participants.len());
    expense.participants.retain(|id| seen.insert(*id));

    if expense.participants.is_empty() {
        return Err(EngineError::InvalidExpense(
            "please select at least one participant for this expense".to_string(),
        ));
    }
    if !expense.participants.contains(&expense.paid_by) {
        return Err(EngineError::InvalidExpense(
            "the person who paid must also be included in the participants".to_string(),
        ));
    }
    if let Some(unknown) = expense.participants.iter().find(|id| !people.contains(id)) {
        return Err(EngineError::KeyNotFound(unknown.to_string()));
    }

    Ok(expense)
}
