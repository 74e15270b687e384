//! Participant record types and field validation

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum admissible participant age (policy constant, not configurable)
pub const MIN_AGE: u32 = 10;

/// Accepted email shape: `local-part@domain.tld`
const EMAIL_PATTERN: &str = r"^[\w.\-]+@[\w.\-]+\.\w+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Check an email address against the required pattern
pub fn is_valid_email(email: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
    re.is_match(email)
}

/// Registration category for a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// School-level participant (persisted as "Colegio")
    #[serde(rename = "Colegio")]
    School,
    /// University-level participant (persisted as "Universidad")
    #[serde(rename = "Universidad")]
    University,
    /// Open registration (persisted as "Libre")
    #[serde(rename = "Libre")]
    Open,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 3] = [Category::School, Category::University, Category::Open];

    /// The localized name used in the persisted files
    pub fn wire_name(&self) -> &'static str {
        match self {
            Category::School => "Colegio",
            Category::University => "Universidad",
            Category::Open => "Libre",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::School => "School",
            Category::University => "University",
            Category::Open => "Open",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts both the English labels and the localized wire names,
    /// case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "school" | "colegio" => Ok(Category::School),
            "university" | "universidad" => Ok(Category::University),
            "open" | "libre" => Ok(Category::Open),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// A single registered participant
///
/// Field names in the persisted JSON stay localized for compatibility with
/// the existing data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Full name, free text
    #[serde(rename = "nombre")]
    pub full_name: String,

    /// Age in years
    #[serde(rename = "edad")]
    pub age: u32,

    /// Email address; unique key across the stored collection
    #[serde(rename = "correo")]
    pub email: String,

    /// Registration category
    #[serde(rename = "categoria")]
    pub category: Category,

    /// School or university the participant belongs to, free text
    #[serde(rename = "institucion")]
    pub institution: String,
}

impl Participant {
    /// Create a new participant record
    pub fn new(
        full_name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        category: Category,
        institution: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            age,
            email: email.into(),
            category,
            institution: institution.into(),
        }
    }

    /// Check the record's own fields (age and email shape).
    ///
    /// Email uniqueness is a collection property and is checked by the store
    /// on append.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.age < MIN_AGE {
            return Err(ValidationError::InvalidAge { age: self.age });
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        Ok(())
    }
}
