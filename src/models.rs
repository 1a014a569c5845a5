//! Patients, doctors and their observations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single inflammation reading taken on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub day: usize,
    pub value: f64,
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A patient in an inflammation study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    #[serde(default)]
    pub observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observations: Vec::new(),
        }
    }

    /// A patient whose readings are one table row, starting on day 0.
    pub fn from_row(name: impl Into<String>, row: &[f64]) -> Self {
        Self {
            name: name.into(),
            observations: row
                .iter()
                .enumerate()
                .map(|(day, &value)| Observation { day, value })
                .collect(),
        }
    }

    /// Records a reading. Without an explicit `day` it follows the last
    /// observation, or lands on day 0 for the first one.
    pub fn add_observation(&mut self, value: f64, day: Option<usize>) -> Observation {
        let day = day.unwrap_or_else(|| self.last_observation().map_or(0, |o| o.day + 1));
        let observation = Observation { day, value };
        self.observations.push(observation);
        observation
    }

    pub fn last_observation(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Observation values in recorded order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A doctor and the patients under their care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    #[serde(default)]
    pub patients: Vec<Patient>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patients: Vec::new(),
        }
    }

    /// Adds a patient unless one with the same name is already listed.
    pub fn add_patient(&mut self, patient: Patient) -> Option<&Patient> {
        if self.patients.iter().any(|p| p.name == patient.name) {
            return None;
        }
        self.patients.push(patient);
        self.patients.last()
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
