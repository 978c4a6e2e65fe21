use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five values a greeting is built from. Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingRequest {
    pub name: String,
    pub place: String,
    pub age: i64,
    pub from_date: NaiveDate,
    pub till_date: NaiveDate,
}

impl GreetingRequest {
    pub fn new(
        name: impl Into<String>,
        place: impl Into<String>,
        age: i64,
        from_date: NaiveDate,
        till_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            place: place.into(),
            age,
            from_date,
            till_date,
        }
    }
}
