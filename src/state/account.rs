//! Account record returned by a successful sign-up

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A created account. Produced by the gateway and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque identifier assigned by the gateway
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creation date in the local timezone, for display
    pub fn created_date_display(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string()
    }
}
