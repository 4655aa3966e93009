//! Results collected by a CLI invocation, ready for rendering.

use serde::Serialize;
use serde_json::Value;

use super::UserRecord;
use crate::constants::{DEMO_NUMBERS, DEMO_USER_ID};
use crate::error::SampleError;
use crate::sample;

/// A summation together with the numbers that produced it.
///
/// Elements are kept wide: a JSON input may hold integers past `i64::MAX`
/// as long as the total fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumResult {
    pub numbers: Vec<i128>,
    pub total: i64,
}

/// Everything one command produced. Absent parts are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<SumResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
}

impl Report {
    /// Run the greeting, the sum of `[1, 2, 3, 4, 5]` and the lookup of
    /// user 123, in that order.
    pub fn demo() -> Result<Self, SampleError> {
        let greeting = sample::hello_world();
        let total = sample::sum_integers(&DEMO_NUMBERS)?;
        let user = sample::get_user_info(DEMO_USER_ID)?;

        let numbers = DEMO_NUMBERS.iter().map(|&n| i128::from(n)).collect();
        Ok(Report::default()
            .with_greeting(greeting)
            .with_sum(numbers, total)
            .with_user(user))
    }

    /// Sum `input` with the same checks as [`sample::calculate_sum`],
    /// keeping the validated numbers to show next to the total.
    pub fn sum_of(input: &Value) -> Result<Self, SampleError> {
        let numbers = sample::integers_from(input)?;
        let total = sample::total_of(&numbers)?;
        Ok(Report::default().with_sum(numbers, total))
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    pub fn with_sum(mut self, numbers: Vec<i128>, total: i64) -> Self {
        self.sum = Some(SumResult { numbers, total });
        self
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.user = Some(user);
        self
    }
}
