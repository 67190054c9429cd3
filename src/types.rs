use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single typed cell as read from the source table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Blank cells read as the empty string: no value, empty text, zero, or `false`.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Int(i) => *i == 0,
            CellValue::Float(f) => *f == 0.0,
            CellValue::Bool(b) => !*b,
        }
    }

    /// Text rendering of the cell, `None` when blank.
    pub fn text(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            // Registration numbers typed into a numeric column come back as floats
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

/// One data row, ordered like the header row. Rows may be shorter than the header.
pub type Row = Vec<CellValue>;

/// Fixed specialty taxonomy. Serializes to its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Cardiology,
    Dermatology,
    Neurology,
    Nephrology,
    Pulmonology,
    Gastroenterology,
    Endocrinology,
    Oncology,
    Pediatrics,
    Orthopedics,
    Psychiatry,
    Ophthalmology,
    Otolaryngology,
    Urology,
    #[serde(rename = "Obstetrics & Gynecology")]
    ObstetricsGynecology,
    #[serde(rename = "General Practice")]
    GeneralPractice,
}

impl Specialty {
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::Cardiology => "Cardiology",
            Specialty::Dermatology => "Dermatology",
            Specialty::Neurology => "Neurology",
            Specialty::Nephrology => "Nephrology",
            Specialty::Pulmonology => "Pulmonology",
            Specialty::Gastroenterology => "Gastroenterology",
            Specialty::Endocrinology => "Endocrinology",
            Specialty::Oncology => "Oncology",
            Specialty::Pediatrics => "Pediatrics",
            Specialty::Orthopedics => "Orthopedics",
            Specialty::Psychiatry => "Psychiatry",
            Specialty::Ophthalmology => "Ophthalmology",
            Specialty::Otolaryngology => "Otolaryngology",
            Specialty::Urology => "Urology",
            Specialty::ObstetricsGynecology => "Obstetrics & Gynecology",
            Specialty::GeneralPractice => "General Practice",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One deduplicated doctor record in the output directory.
///
/// Multi-valued fields are sorted sets, so merging repeated identities is a
/// plain union and serialization order is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorEntry {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub contacts: BTreeSet<String>,
    pub credentials: BTreeSet<String>,
    pub registration_numbers: BTreeSet<String>,
    pub source_file: String,
}

impl DoctorEntry {
    /// Fold a later record with the same id into this one.
    ///
    /// Multi-valued fields are unioned; `name`, `specialty` and `source_file`
    /// keep their first-seen values.
    pub fn merge(&mut self, other: DoctorEntry) {
        self.contacts.extend(other.contacts);
        self.credentials.extend(other.credentials);
        self.registration_numbers.extend(other.registration_numbers);
    }
}
