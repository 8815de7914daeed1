//! Wire types shared with the remote entry store. JSON field names are
//! camelCase to match the store's API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod salary {
    use super::*;

    /// Request body for persisting one pay record: the raw form fields plus
    /// the derived monetary fields computed at submission time.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SalaryEntryNew {
        pub salary_rate: f64,
        pub in_time: String,
        pub out_time: String,
        pub regular_hours: f64,
        pub overtime_hours: f64,
        pub regular_hours_amount: f64,
        pub overtime_hours_amount: f64,
        pub total_amount: f64,
        pub pf: f64,
        pub total_salary: f64,
    }

    /// A persisted pay record as returned by the store.
    ///
    /// `id` and `date` are assigned by the store at creation time, never by
    /// the client. Derived fields are frozen at creation; there is no update.
    ///
    /// Numeric fields default to 0 when absent so one malformed or legacy
    /// stored document cannot fail a whole month's fetch; such a document
    /// then contributes 0 to every column it is missing.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SalaryEntry {
        #[serde(default)]
        pub id: Option<Uuid>,
        pub date: DateTime<Utc>,
        #[serde(default)]
        pub salary_rate: f64,
        #[serde(default)]
        pub in_time: String,
        #[serde(default)]
        pub out_time: String,
        #[serde(default)]
        pub regular_hours: f64,
        #[serde(default)]
        pub overtime_hours: f64,
        #[serde(default)]
        pub regular_hours_amount: f64,
        #[serde(default)]
        pub overtime_hours_amount: f64,
        #[serde(default)]
        pub total_amount: f64,
        #[serde(default)]
        pub pf: f64,
        #[serde(default)]
        pub total_salary: f64,
    }
}
