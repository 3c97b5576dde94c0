use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Stop;

/// A saved trip as shared by the surrounding app: a name, travel dates,
/// and the ordered stop list the map consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub stops: Vec<Stop>,
}

impl Trip {
    /// Short date range for display, e.g. "May 03 - May 12"
    #[must_use]
    pub fn date_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_date.format("%b %d"),
            self.end_date.format("%b %d")
        )
    }
}
