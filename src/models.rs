use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DegreeType {
    Masters,
    PhD,
}

impl fmt::Display for DegreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeType::Masters => write!(f, "Masters"),
            DegreeType::PhD => write!(f, "PhD"),
        }
    }
}

/// Degree availability filter: `Both` requires a subject to offer a
/// Masters and a PhD within the filtered pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DegreeMode {
    #[default]
    Any,
    Masters,
    PhD,
    Both,
}

impl fmt::Display for DegreeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeMode::Any => write!(f, "Any"),
            DegreeMode::Masters => write!(f, "Masters"),
            DegreeMode::PhD => write!(f, "PhD"),
            DegreeMode::Both => write!(f, "Both"),
        }
    }
}

impl FromStr for DegreeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(DegreeMode::Any),
            "masters" => Ok(DegreeMode::Masters),
            "phd" => Ok(DegreeMode::PhD),
            "both" => Ok(DegreeMode::Both),
            other => Err(format!(
                "unknown degree mode '{other}' (expected any, masters, phd, or both)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub subject: String,
    pub degree_type: DegreeType,
    pub degree_name: String,
    pub sessions: Vec<String>,
    pub students: u32,
    pub funding_international: bool,
    pub assistantship: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub city: String,
    pub county: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub website: String,
    pub location: Location,
    pub address: String,
    pub grad_coordinator_email: String,
    pub programs: Vec<Program>,
}

/// Current user-chosen filter state. `selected_states` and
/// `selected_subjects` are ordered sets: insertion order is kept for
/// stable display, uniqueness is enforced on toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub selected_states: Vec<String>,
    pub selected_subjects: Vec<String>,
    pub degree_mode: DegreeMode,
    pub search_text: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            selected_states: Vec::new(),
            selected_subjects: vec!["Statistics".to_string()],
            degree_mode: DegreeMode::Any,
            search_text: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn toggle_state(&mut self, state: &str) {
        toggle(&mut self.selected_states, state);
    }

    pub fn toggle_subject(&mut self, subject: &str) {
        toggle(&mut self.selected_subjects, subject);
    }

    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}
