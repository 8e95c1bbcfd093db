use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// Identity and demographics for one patient. Immutable from Chartview's
/// perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub last_visit: Option<NaiveDate>,
    pub total_visits: u32,
}
