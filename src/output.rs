use crate::error::Result;
use crate::types::DoctorEntry;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write the directory as a 2-space indented UTF-8 JSON array.
///
/// Parent directories are created when absent. Non-ASCII text is written as-is.
pub fn write_directory(path: &Path, entries: &[DoctorEntry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.flush()?;

    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Specialty;
    use std::collections::BTreeSet;

    fn entry(name: &str) -> DoctorEntry {
        DoctorEntry {
            id: "0123456789ab".to_string(),
            name: name.to_string(),
            specialty: Specialty::Dermatology,
            contacts: BTreeSet::new(),
            credentials: ["MBBS".to_string()].into_iter().collect(),
            registration_numbers: BTreeSet::new(),
            source_file: "scan.pdf".to_string(),
        }
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("data").join("directory.json");

        write_directory(&path, &[entry("John Doe")]).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.as_array().unwrap().len(), 1);
        assert_eq!(written[0]["credentials"], serde_json::json!(["MBBS"]));
        assert_eq!(written[0]["contacts"], serde_json::json!([]));
    }

    #[test]
    fn test_pretty_printed_with_unescaped_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.json");

        write_directory(&path, &[entry("د. سارة علي")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"0123456789ab\""));
        assert!(text.contains("\"name\": \"د. سارة علي\""));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_empty_directory_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.json");
        write_directory(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
