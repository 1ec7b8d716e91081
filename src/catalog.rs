use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use crate::models::Doctor;

/// Process-wide immutable doctor directory, loaded once at startup. The
/// source file never changes while the process runs, so there is no reload
/// path.
#[derive(Debug, Clone)]
pub struct Catalog {
    doctors: Vec<Doctor>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read doctor catalog at {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("invalid doctor catalog at {}", path.display()))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let doctors: Vec<Doctor> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for doctor in &doctors {
            anyhow::ensure!(
                doctor.id > 0,
                "doctor id must be a positive integer, got {}",
                doctor.id
            );
            anyhow::ensure!(seen.insert(doctor.id), "duplicate doctor id {}", doctor.id);
        }

        Ok(Self { doctors })
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
