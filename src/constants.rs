/// Header names the source table must carry. Columns are resolved by name, so
/// their position in the sheet does not matter.
pub const DOCTOR_NAME_HEADER: &str = "Doctor Name";
pub const CONTACT_HEADER: &str = "Contact Information";
pub const CREDENTIALS_HEADER: &str = "Credentials/Specialty";
pub const REGISTRATION_HEADER: &str = "Registration Numbers";
pub const SOURCE_FILE_HEADER: &str = "Source File";

pub const REQUIRED_HEADERS: [&str; 5] = [
    DOCTOR_NAME_HEADER,
    CONTACT_HEADER,
    CREDENTIALS_HEADER,
    REGISTRATION_HEADER,
    SOURCE_FILE_HEADER,
];

// Default locations, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "doctors_database_20251126_211832.xlsx";
pub const DEFAULT_OUTPUT_PATH: &str = "public/data/doctors-directory.json";
pub const DEFAULT_CONFIG_FILE: &str = "doctor_directory.toml";

/// Placeholder labels that show up in the name column but are never names.
pub const NAME_STOPLIST: [&str; 3] = ["doctor name", "name", "(blank)"];

/// Lowercase substrings that mark a name cell as an organization, drug form,
/// or insurance/finance artifact.
pub const BLOCK_KEYWORDS: [&str; 28] = [
    "hospital",
    "medical",
    "clinic",
    "company",
    "co.",
    "est",
    "contracting",
    "insurance",
    "drops",
    "tablet",
    "capsule",
    "solution",
    "syrup",
    "pharma",
    "laboratory",
    "lab",
    "finance",
    "statement",
    "analysis",
    "services",
    "provider",
    "bupa",
    "tawnia",
    "claim",
    "eligibility",
    "response",
    "direct",
    "copy",
];

/// Minimum number of hyphen/comma/whitespace separated tokens in a name.
pub const MIN_NAME_TOKENS: usize = 2;

/// Length of the hex identifier derived from the identity digest.
pub const ENTRY_ID_LEN: usize = 12;
