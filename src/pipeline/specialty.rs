use crate::types::Specialty;

/// Ordered (keyword, specialty) table. The first keyword found in the text
/// decides the specialty, so declaration order is the tie-break.
pub const SPECIALTY_KEYWORDS: [(&str, Specialty); 17] = [
    ("cardio", Specialty::Cardiology),
    ("derma", Specialty::Dermatology),
    ("dermato", Specialty::Dermatology),
    ("neuro", Specialty::Neurology),
    ("nephro", Specialty::Nephrology),
    ("pulmo", Specialty::Pulmonology),
    ("gastro", Specialty::Gastroenterology),
    ("endo", Specialty::Endocrinology),
    ("onco", Specialty::Oncology),
    ("pedi", Specialty::Pediatrics),
    ("ortho", Specialty::Orthopedics),
    ("psy", Specialty::Psychiatry),
    ("ophth", Specialty::Ophthalmology),
    ("ent", Specialty::Otolaryngology),
    ("uro", Specialty::Urology),
    ("obst", Specialty::ObstetricsGynecology),
    ("gyn", Specialty::ObstetricsGynecology),
];

/// Infer a specialty from free-text fields.
///
/// Non-empty fields are lowercased and space-joined, then scanned against
/// [`SPECIALTY_KEYWORDS`] in order. Falls back to General Practice.
pub fn infer_specialty(fields: &[&str]) -> Specialty {
    let combined = fields
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| field.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    SPECIALTY_KEYWORDS
        .iter()
        .find(|(keyword, _)| combined.contains(keyword))
        .map(|(_, specialty)| *specialty)
        .unwrap_or(Specialty::GeneralPractice)
}
