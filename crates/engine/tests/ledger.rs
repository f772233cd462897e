use chrono::NaiveDate;
use proptest::prelude::*;

use engine::{Expense, Money, Person, PersonId, Settlement, Snapshot, aggregate, settle, summarize};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
}

fn people(names: &[&str]) -> Vec<Person> {
    names.iter().map(|name| Person::new(*name, Some("tester"))).collect()
}

fn money(raw: &str) -> Money {
    raw.parse().unwrap()
}

#[test]
fn two_way_split_settles_with_one_payment() {
    let p = people(&["A", "B"]);
    let expenses = vec![Expense::new("Dinner", money("10.00"), p[0].id, vec![p[0].id, p[1].id], date())];

    let balances = aggregate(&p, &expenses);
    assert_eq!(balances.get(p[0].id), Some(money("5.00")));
    assert_eq!(balances.get(p[1].id), Some(money("-5.00")));

    assert_eq!(
        settle(&balances),
        vec![Settlement {
            from: p[1].id,
            to: p[0].id,
            amount: money("5.00"),
        }]
    );
}

#[test]
fn three_way_split_leaves_one_cent_unsettled() {
    let p = people(&["A", "B", "C"]);
    let ids: Vec<PersonId> = p.iter().map(|person| person.id).collect();
    let expenses = vec![Expense::new("Taxi", money("10.00"), ids[0], ids.clone(), date())];

    assert_eq!(expenses[0].share(), money("3.33"));

    let balances = aggregate(&p, &expenses);
    assert_eq!(balances.get(ids[0]), Some(money("6.67")));
    assert_eq!(balances.get(ids[1]), Some(money("-3.33")));
    assert_eq!(balances.get(ids[2]), Some(money("-3.33")));
    assert_eq!(balances.total(), money("0.01"));

    let settlements = settle(&balances);
    assert_eq!(
        settlements,
        vec![
            Settlement { from: ids[1], to: ids[0], amount: money("3.33") },
            Settlement { from: ids[2], to: ids[0], amount: money("3.33") },
        ]
    );
    let paid: Money = settlements.iter().map(|s| s.amount).sum();
    assert_eq!(paid, money("6.66"));
    assert_eq!(money("6.67") - paid, money("0.01"));
}

#[test]
fn sole_creditor_is_paid_in_debtor_order() {
    let p = people(&["A", "B", "C"]);
    let expenses = vec![
        Expense::new("Hotel", money("12.00"), p[0].id, vec![p[0].id, p[1].id], date()),
        Expense::new("Train", money("8.00"), p[0].id, vec![p[0].id, p[2].id], date()),
    ];

    let balances = aggregate(&p, &expenses);
    assert_eq!(balances.get(p[0].id), Some(money("10.00")));
    assert_eq!(balances.get(p[1].id), Some(money("-6.00")));
    assert_eq!(balances.get(p[2].id), Some(money("-4.00")));

    assert_eq!(
        settle(&balances),
        vec![
            Settlement { from: p[1].id, to: p[0].id, amount: money("6.00") },
            Settlement { from: p[2].id, to: p[0].id, amount: money("4.00") },
        ]
    );
}

#[test]
fn settled_person_is_listed_but_never_pays() {
    let p = people(&["A", "B", "Z"]);
    let expenses = vec![Expense::new("Beer", money("7.00"), p[0].id, vec![p[0].id, p[1].id], date())];

    let summary = summarize(&p, &expenses);
    assert_eq!(summary.balances.len(), 3);
    let z = summary
        .balances
        .iter()
        .find(|line| line.person.id == p[2].id)
        .unwrap();
    assert_eq!(z.balance, Money::ZERO);
    assert!(
        summary
            .settlements
            .iter()
            .all(|t| t.from.id != p[2].id && t.to.id != p[2].id)
    );
}

#[test]
fn summary_lists_largest_creditor_first() {
    let p = people(&["A", "B", "C"]);
    let expenses = vec![
        Expense::new("Groceries", money("30.00"), p[2].id, vec![p[0].id, p[1].id, p[2].id], date()),
        Expense::new("Snacks", money("3.00"), p[1].id, vec![p[0].id, p[1].id, p[2].id], date()),
    ];

    let summary = summarize(&p, &expenses);
    let labels: Vec<(&str, Money)> = summary
        .balances
        .iter()
        .map(|line| (line.person.name.as_str(), line.balance))
        .collect();
    assert_eq!(
        labels,
        vec![("C", money("19.00")), ("B", money("-8.00")), ("A", money("-11.00"))]
    );
    assert_eq!(summary.paid_by(p[0].id), money("11.00"));
    assert_eq!(summary.paid_by(p[1].id), money("8.00"));
    assert_eq!(summary.received_by(p[2].id), money("19.00"));
}

#[test]
fn snapshot_summary_matches_raw_summary() {
    let p = people(&["tester", "Friend"]);
    let expenses = vec![Expense::new("Dinner", money("10.00"), p[0].id, vec![p[0].id, p[1].id], date())];

    let snapshot = Snapshot::try_new("tester", p.clone(), expenses.clone()).unwrap();
    let from_snapshot = snapshot.summarize();
    let raw = summarize(&p, &expenses);

    assert_eq!(from_snapshot.balances.len(), raw.balances.len());
    assert_eq!(from_snapshot.balances[0].person.display_name(), "Me (tester)");
    assert_eq!(from_snapshot.balances[0].balance, money("5.00"));
    assert_eq!(from_snapshot.balances[1].person.name, "Friend");
    assert_eq!(from_snapshot.balances[1].balance, money("-5.00"));
}

/// Random valid snapshot: `(people, expenses)` where every payer participates.
fn snapshot_strategy() -> impl Strategy<Value = (Vec<Person>, Vec<Expense>)> {
    (1usize..=6).prop_flat_map(|count| {
        let expense = (1i64..=50_000, 0..count, 1u32..(1u32 << count));
        (Just(count), prop::collection::vec(expense, 0..=25))
    })
    .prop_map(|(count, raw)| {
        let people: Vec<Person> = (0..count)
            .map(|idx| Person::new(format!("P{idx}"), None))
            .collect();
        let expenses = raw
            .into_iter()
            .map(|(cents, payer, mask)| {
                let mask = mask | (1 << payer);
                let participants = people
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| mask & (1 << idx) != 0)
                    .map(|(_, person)| person.id)
                    .collect();
                Expense::new("random", Money::new(cents), people[payer].id, participants, date())
            })
            .collect();
        (people, expenses)
    })
}

/// A valid snapshot together with a random permutation of its expenses.
fn shuffled_snapshot_strategy() -> impl Strategy<Value = (Vec<Person>, Vec<Expense>, Vec<Expense>)> {
    snapshot_strategy().prop_flat_map(|(people, expenses)| {
        let shuffled = Just(expenses.clone()).prop_shuffle();
        (Just(people), Just(expenses), shuffled)
    })
}

fn residue(expense: &Expense) -> Money {
    expense.amount - Money::new(expense.share().cents() * expense.participants.len() as i64)
}

proptest! {
    #[test]
    fn share_is_within_rounding_of_the_amount(cents in 1i64..=1_000_000, n in 1usize..=20) {
        let ids: Vec<PersonId> = (0..n).map(|_| PersonId::new()).collect();
        let expense = Expense::new("x", Money::new(cents), ids[0], ids, date());
        let spread = (expense.share().cents() * n as i64 - cents).abs();
        prop_assert!(spread < n as i64);
        if cents % n as i64 == 0 {
            prop_assert_eq!(spread, 0);
        }
    }

    #[test]
    fn balance_is_paid_minus_owed((people, expenses) in snapshot_strategy()) {
        let balances = aggregate(&people, &expenses);
        prop_assert_eq!(balances.len(), people.len());
        for person in &people {
            let paid: Money = expenses
                .iter()
                .filter(|e| e.paid_by == person.id)
                .map(|e| e.amount)
                .sum();
            let owed: Money = expenses
                .iter()
                .filter(|e| e.participants.contains(&person.id))
                .map(|e| e.share())
                .sum();
            prop_assert_eq!(balances.get(person.id), Some(paid - owed));
        }
    }

    #[test]
    fn total_is_the_rounding_residue((people, expenses) in snapshot_strategy()) {
        let balances = aggregate(&people, &expenses);
        let expected: Money = expenses.iter().map(residue).sum();
        prop_assert_eq!(balances.total(), expected);
        if expenses.iter().all(|e| e.amount.cents() % e.participants.len() as i64 == 0) {
            prop_assert_eq!(balances.total(), Money::ZERO);
        }
    }

    #[test]
    fn aggregation_ignores_expense_order((people, expenses, shuffled) in shuffled_snapshot_strategy()) {
        let forward = aggregate(&people, &expenses);
        prop_assert_eq!(&forward, &aggregate(&people, &shuffled));
        prop_assert_eq!(settle(&forward), settle(&aggregate(&people, &shuffled)));
    }

    #[test]
    fn repeated_calls_are_identical((people, expenses) in snapshot_strategy()) {
        let first = aggregate(&people, &expenses);
        prop_assert_eq!(&first, &aggregate(&people, &expenses));
        prop_assert_eq!(settle(&first), settle(&aggregate(&people, &expenses)));
    }

    #[test]
    fn settlements_never_exceed_balances((people, expenses) in snapshot_strategy()) {
        let balances = aggregate(&people, &expenses);
        let settlements = settle(&balances);
        prop_assert!(settlements.iter().all(|s| s.amount.is_positive()));

        let mut debtors_done = true;
        let mut creditors_done = true;
        for (id, balance) in balances.iter() {
            let paid: Money = settlements.iter().filter(|s| s.from == id).map(|s| s.amount).sum();
            let received: Money = settlements.iter().filter(|s| s.to == id).map(|s| s.amount).sum();
            if balance.is_negative() {
                prop_assert!(received.is_zero());
                prop_assert!(paid <= -balance);
                debtors_done &= paid == -balance;
            } else if balance.is_positive() {
                prop_assert!(paid.is_zero());
                prop_assert!(received <= balance);
                creditors_done &= received == balance;
            } else {
                prop_assert!(paid.is_zero() && received.is_zero());
            }
        }
        // The sweep only stops once one side is exhausted.
        prop_assert!(debtors_done || creditors_done);
        if balances.total().is_zero() {
            prop_assert!(debtors_done && creditors_done);
        }
    }
}
