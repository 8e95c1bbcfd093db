use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A prescription issued to a patient.
///
/// `appointment_id` is a best-effort link determined at query time by the
/// data layer, not an enforced reference. A prescription also carries its
/// own stand-alone `date`, used as the fallback matching key when no
/// identifier link exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub patient_id: String,
    pub appointment_id: Option<String>,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub instructions: Option<String>,
    pub medications: Vec<Medication>,
    pub created_at: DateTime<Utc>,
}

/// One medication line item on a prescription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}
