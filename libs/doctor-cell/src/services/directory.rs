use tracing::{debug, info};

use shared_config::AppConfig;

use crate::models::{Doctor, DoctorError};
use crate::seed::seed_doctors;

/// Read-only doctor roster, fixed after construction.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
    male_avatar: String,
    female_avatar: String,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>, config: &AppConfig) -> Self {
        info!("Doctor directory initialized with {} doctors", doctors.len());

        Self {
            doctors,
            male_avatar: config.male_doctor_avatar.clone(),
            female_avatar: config.female_doctor_avatar.clone(),
        }
    }

    /// Seeded roster, or an empty one when demo data is disabled.
    pub fn from_config(config: &AppConfig) -> Self {
        if config.seed_demo_data {
            Self::new(seed_doctors(), config)
        } else {
            Self::new(Vec::new(), config)
        }
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get_doctor(&self, doctor_id: &str) -> Result<&Doctor, DoctorError> {
        debug!("Looking up doctor: {}", doctor_id);

        self.doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or_else(|| DoctorError::NotFound(doctor_id.to_string()))
    }

    /// Stock image for male/female doctors, the doctor's own avatar otherwise.
    pub fn avatar_for(&self, doctor: &Doctor) -> String {
        match doctor.gender.to_lowercase().as_str() {
            "male" => self.male_avatar.clone(),
            "female" => self.female_avatar.clone(),
            _ => doctor.avatar.clone(),
        }
    }

    pub fn with_display_avatar(&self, doctor: &Doctor) -> Doctor {
        Doctor {
            avatar: self.avatar_for(doctor),
            ..doctor.clone()
        }
    }

    pub fn with_display_avatars(&self, doctors: &[Doctor]) -> Vec<Doctor> {
        doctors.iter().map(|d| self.with_display_avatar(d)).collect()
    }
}
