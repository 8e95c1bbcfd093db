//! View rendering — pure mapping from loader snapshots to serializable
//! page trees.
//!
//! Each page is a three-phase state machine computed from the snapshot:
//! still loading, patient not found (which also covers the load-failure
//! degradation), or loaded. Phases are mutually exclusive and transitions
//! are one-directional within a load cycle.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::history::{self, HistoryEntry};
use crate::loader::LoadSnapshot;
use crate::models::{Medication, Patient, Prescription};

/// Patient profile page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ProfilePage {
    Loading,
    NotFound,
    Loaded { patient: PatientCard },
}

impl ProfilePage {
    pub fn render(snapshot: &LoadSnapshot) -> Self {
        if snapshot.loading {
            return ProfilePage::Loading;
        }
        match &snapshot.patient {
            None => ProfilePage::NotFound,
            Some(patient) => ProfilePage::Loaded {
                patient: PatientCard::from(patient),
            },
        }
    }
}

/// Medical history page. `entries` empty means "no past medical history
/// available" — a loaded state, distinct from loading and not-found.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum HistoryPage {
    Loading,
    NotFound,
    Loaded {
        patient: PatientCard,
        entries: Vec<VisitEntry>,
    },
}

impl HistoryPage {
    pub fn render(snapshot: &LoadSnapshot, now: NaiveDateTime) -> Self {
        if snapshot.loading {
            return HistoryPage::Loading;
        }
        match &snapshot.patient {
            None => HistoryPage::NotFound,
            Some(patient) => {
                let entries =
                    history::derive_history(&snapshot.appointments, &snapshot.prescriptions, now)
                        .into_iter()
                        .map(VisitEntry::from)
                        .collect();
                HistoryPage::Loaded {
                    patient: PatientCard::from(patient),
                    entries,
                }
            }
        }
    }
}

/// Patient summary card shown at the top of both pages.
#[derive(Debug, Clone, Serialize)]
pub struct PatientCard {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: &'static str,
    pub email: String,
    pub phone: String,
    pub last_visit: Option<String>,
    pub total_visits: u32,
}

impl From<&Patient> for PatientCard {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.name.clone(),
            age: patient.age,
            gender: patient.gender.label(),
            email: patient.email.clone(),
            phone: patient.phone.clone(),
            last_visit: patient.last_visit.map(format_date),
            total_visits: patient.total_visits,
        }
    }
}

/// One past visit. `prescription: None` renders the "no prescription
/// recorded for this visit" notice.
#[derive(Debug, Clone, Serialize)]
pub struct VisitEntry {
    pub appointment_id: String,
    pub visit_date: String,
    pub visit_time: String,
    pub symptoms: String,
    pub prescription: Option<PrescriptionCard>,
}

impl From<HistoryEntry> for VisitEntry {
    fn from(entry: HistoryEntry) -> Self {
        let starts_at = entry.appointment.starts_at();
        Self {
            appointment_id: entry.appointment.id,
            visit_date: format_weekday_date(starts_at),
            visit_time: format_time(starts_at),
            symptoms: entry.appointment.symptoms,
            prescription: entry.prescription.map(PrescriptionCard::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrescriptionCard {
    pub diagnosis: String,
    pub issued_on: String,
    pub instructions: Option<String>,
    pub medications: Vec<MedicationRow>,
}

impl From<Prescription> for PrescriptionCard {
    fn from(rx: Prescription) -> Self {
        Self {
            diagnosis: rx.diagnosis,
            issued_on: format_timestamp_date(rx.created_at),
            instructions: rx.instructions,
            medications: rx.medications.into_iter().map(MedicationRow::from).collect(),
        }
    }
}

/// One row of the nested medication table.
#[derive(Debug, Clone, Serialize)]
pub struct MedicationRow {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

impl From<Medication> for MedicationRow {
    fn from(med: Medication) -> Self {
        Self {
            name: med.name,
            dosage: med.dosage,
            frequency: med.frequency,
            duration: med.duration,
            instructions: med.instructions,
        }
    }
}

// ── Display formatting ──────────────────────────────────────────────────────

/// "Wednesday, Jan 10, 2024"
fn format_weekday_date(dt: NaiveDateTime) -> String {
    dt.format("%A, %b %-d, %Y").to_string()
}

/// "9:00 AM"
fn format_time(dt: NaiveDateTime) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// "Jan 10, 2024"
fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn format_timestamp_date(ts: DateTime<Utc>) -> String {
    format_date(ts.date_naive())
}
