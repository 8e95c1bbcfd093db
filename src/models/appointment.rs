use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

/// One scheduled or past visit belonging to a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    /// Free-text symptoms / reason for the visit.
    pub symptoms: String,
}

impl Appointment {
    /// Combined date + time, the chronological key for history ordering.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_combines_date_and_time() {
        let apt = Appointment {
            id: "a1".into(),
            patient_id: "p1".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            status: AppointmentStatus::Completed,
            symptoms: "Cough".into(),
        };
        assert_eq!(apt.starts_at().to_string(), "2024-01-10 09:00:00");
    }
}
