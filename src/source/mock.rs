//! In-memory mock of the clinical data layer.
//!
//! All data is hardcoded and fictional. No external systems are contacted.
//! Fetches simulate a remote call with a short, slightly jittered delay so
//! the loading phase is observable in a live viewer.

use std::time::Duration;

use chrono::{Days, Local, NaiveTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::config;
use crate::models::{
    Appointment, AppointmentStatus, Gender, Medication, Patient, Prescription,
};
use crate::source::{RecordSource, SourceError};

pub struct MockApi {
    patients: Vec<Patient>,
    appointments: Vec<Appointment>,
    prescriptions: Vec<Prescription>,
    latency: Duration,
    fail: bool,
}

impl MockApi {
    /// Empty source with no latency. Fixture base for tests.
    pub fn empty() -> Self {
        Self {
            patients: Vec::new(),
            appointments: Vec::new(),
            prescriptions: Vec::new(),
            latency: Duration::ZERO,
            fail: false,
        }
    }

    /// Source whose every fetch fails, for exercising the loader's
    /// degradation path.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_patient(mut self, patient: Patient) -> Self {
        self.patients.push(patient);
        self
    }

    pub fn with_appointment(mut self, appointment: Appointment) -> Self {
        self.appointments.push(appointment);
        self
    }

    pub fn with_prescription(mut self, prescription: Prescription) -> Self {
        self.prescriptions.push(prescription);
        self
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Seeded fictional dataset for the demo server. Visit dates are laid
    /// out relative to today so the history page always has past entries
    /// and one upcoming appointment.
    pub fn with_seed_data() -> Self {
        let today = Local::now().date_naive();
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let half_two = NaiveTime::from_hms_opt(14, 30, 0).unwrap();

        let amara_id = new_id("pat");
        let tomas_id = new_id("pat");

        let visit_bronchitis = today.checked_sub_days(Days::new(45)).unwrap();
        let visit_followup = today.checked_sub_days(Days::new(14)).unwrap();
        let visit_upcoming = today.checked_add_days(Days::new(21)).unwrap();
        let visit_tomas = today.checked_sub_days(Days::new(90)).unwrap();

        let apt_bronchitis = new_id("apt");
        let apt_followup = new_id("apt");

        let mut mock = Self::empty().with_latency(Duration::from_millis(config::MOCK_LATENCY_MS));

        mock = mock
            .with_patient(Patient {
                id: amara_id.clone(),
                name: "Amara Diallo".into(),
                age: 42,
                gender: Gender::Female,
                email: "amara.diallo@example.org".into(),
                phone: "+1-555-0142".into(),
                last_visit: Some(visit_followup),
                total_visits: 6,
            })
            .with_patient(Patient {
                id: tomas_id.clone(),
                name: "Tomas Virtanen".into(),
                age: 58,
                gender: Gender::Male,
                email: "tomas.virtanen@example.org".into(),
                phone: "+1-555-0178".into(),
                last_visit: Some(visit_tomas),
                total_visits: 2,
            });

        mock = mock
            .with_appointment(Appointment {
                id: apt_bronchitis.clone(),
                patient_id: amara_id.clone(),
                date: visit_bronchitis,
                time: nine,
                status: AppointmentStatus::Completed,
                symptoms: "Persistent cough, low-grade fever".into(),
            })
            .with_appointment(Appointment {
                id: apt_followup.clone(),
                patient_id: amara_id.clone(),
                date: visit_followup,
                time: half_two,
                status: AppointmentStatus::Completed,
                symptoms: "Follow-up after bronchitis treatment".into(),
            })
            .with_appointment(Appointment {
                id: new_id("apt"),
                patient_id: amara_id.clone(),
                date: visit_upcoming,
                time: nine,
                status: AppointmentStatus::Scheduled,
                symptoms: "Annual checkup".into(),
            })
            .with_appointment(Appointment {
                id: new_id("apt"),
                patient_id: tomas_id.clone(),
                date: visit_tomas,
                time: nine,
                status: AppointmentStatus::Completed,
                symptoms: "Elevated blood pressure readings at home".into(),
            });

        mock = mock
            .with_prescription(Prescription {
                id: new_id("rx"),
                patient_id: amara_id.clone(),
                appointment_id: Some(apt_bronchitis),
                date: visit_bronchitis,
                diagnosis: "Acute bronchitis".into(),
                instructions: Some("Complete the full antibiotic course. Rest and fluids.".into()),
                medications: vec![
                    Medication {
                        id: new_id("med"),
                        name: "Amoxicillin".into(),
                        dosage: "500 mg".into(),
                        frequency: "3x daily".into(),
                        duration: "7 days".into(),
                        instructions: "Take with food".into(),
                    },
                    Medication {
                        id: new_id("med"),
                        name: "Dextromethorphan".into(),
                        dosage: "20 mg".into(),
                        frequency: "Every 6 hours as needed".into(),
                        duration: "Until cough resolves".into(),
                        instructions: "Do not exceed 120 mg per day".into(),
                    },
                ],
                created_at: Utc::now(),
            })
            // Fallback-linked: carries no appointment id, only a matching date.
            .with_prescription(Prescription {
                id: new_id("rx"),
                patient_id: amara_id,
                appointment_id: None,
                date: visit_followup,
                diagnosis: "Resolved bronchitis, mild residual cough".into(),
                instructions: None,
                medications: vec![Medication {
                    id: new_id("med"),
                    name: "Guaifenesin".into(),
                    dosage: "200 mg".into(),
                    frequency: "2x daily".into(),
                    duration: "5 days".into(),
                    instructions: "Drink a full glass of water with each dose".into(),
                }],
                created_at: Utc::now(),
            });

        mock
    }

    async fn simulate_latency(&self) {
        if self.latency.is_zero() {
            return;
        }
        let jitter_cap = (self.latency.as_millis() as u64 / 2).max(1);
        let jitter = rand::thread_rng().gen_range(0..jitter_cap);
        tokio::time::sleep(self.latency + Duration::from_millis(jitter)).await;
    }

    fn check_available(&self) -> Result<(), SourceError> {
        if self.fail {
            return Err(SourceError::Unavailable("mock source set to fail".into()));
        }
        Ok(())
    }
}

impl RecordSource for MockApi {
    async fn fetch_patients(&self) -> Result<Vec<Patient>, SourceError> {
        self.simulate_latency().await;
        self.check_available()?;
        Ok(self.patients.clone())
    }

    async fn fetch_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>, SourceError> {
        self.simulate_latency().await;
        self.check_available()?;
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn fetch_prescriptions(
        &self,
        patient_id: &str,
    ) -> Result<Vec<Prescription>, SourceError> {
        self.simulate_latency().await;
        self.check_available()?;
        Ok(self
            .prescriptions
            .iter()
            .filter(|p| p.patient_id == patient_id)
            .cloned()
            .collect())
    }
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn patient(id: &str) -> Patient {
        Patient {
            id: id.into(),
            name: "Test Patient".into(),
            age: 30,
            gender: Gender::Other,
            email: "test@example.org".into(),
            phone: "+1-555-0000".into(),
            last_visit: None,
            total_visits: 0,
        }
    }

    #[tokio::test]
    async fn fetch_appointments_filters_by_patient() {
        let mock = MockApi::empty()
            .with_appointment(Appointment {
                id: "a1".into(),
                patient_id: "p1".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                status: AppointmentStatus::Completed,
                symptoms: "Cough".into(),
            })
            .with_appointment(Appointment {
                id: "a2".into(),
                patient_id: "p2".into(),
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                status: AppointmentStatus::Completed,
                symptoms: "Checkup".into(),
            });

        let appts = mock.fetch_appointments("p1").await.unwrap();
        assert_eq!(appts.len(), 1);
        assert_eq!(appts[0].id, "a1");
    }

    #[tokio::test]
    async fn failing_source_errors_on_every_fetch() {
        let mock = MockApi::failing();
        assert!(mock.fetch_patients().await.is_err());
        assert!(mock.fetch_appointments("p1").await.is_err());
        assert!(mock.fetch_prescriptions("p1").await.is_err());
    }

    #[tokio::test]
    async fn seed_data_is_internally_consistent() {
        let mock = MockApi::with_seed_data();
        let patients = mock.patients().to_vec();
        assert!(!patients.is_empty());

        for p in &patients {
            for apt in mock.fetch_appointments(&p.id).await.unwrap() {
                assert_eq!(apt.patient_id, p.id);
            }
            for rx in mock.fetch_prescriptions(&p.id).await.unwrap() {
                assert_eq!(rx.patient_id, p.id);
                // Every stored appointment link must resolve.
                if let Some(apt_id) = &rx.appointment_id {
                    let appts = mock.fetch_appointments(&p.id).await.unwrap();
                    assert!(appts.iter().any(|a| &a.id == apt_id));
                }
            }
        }
    }

    #[tokio::test]
    async fn arc_wrapper_delegates() {
        let mock = std::sync::Arc::new(MockApi::empty().with_patient(patient("p1")));
        let patients = mock.fetch_patients().await.unwrap();
        assert_eq!(patients.len(), 1);
    }
}
