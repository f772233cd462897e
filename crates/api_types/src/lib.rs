use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod snapshot {
    use super::*;

    /// One account's people and expenses, as exported by the storage layer.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct SnapshotFile {
        /// Username of the account. May be overridden by configuration.
        pub owner: Option<String>,
        #[serde(default)]
        pub people: Vec<PersonDto>,
        #[serde(default)]
        pub expenses: Vec<ExpenseDto>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct PersonDto {
        pub id: Uuid,
        pub name: String,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub owner: Option<String>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ExpenseDto {
        /// Generated when absent.
        #[serde(default)]
        pub id: Option<Uuid>,
        #[serde(default)]
        pub owner: Option<String>,
        pub description: String,
        /// Decimal string with at most two fractional digits, e.g. `"12.50"`.
        pub amount: String,
        pub paid_by: Uuid,
        pub participants: Vec<Uuid>,
        /// `YYYY-MM-DD`.
        pub date: NaiveDate,
    }
}

pub mod summary {
    use super::*;

    /// Balances and settlements computed for one account.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SummaryReport {
        pub owner: String,
        /// Largest creditor first.
        pub balances: Vec<BalanceDto>,
        pub settlements: Vec<SettlementDto>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BalanceDto {
        pub person_id: Uuid,
        pub name: String,
        /// Signed decimal string: positive is owed money, negative owes money.
        pub balance: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SettlementDto {
        pub from: Uuid,
        pub from_name: String,
        pub to: Uuid,
        pub to_name: String,
        pub amount: String,
    }
}
