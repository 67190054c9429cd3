use crate::constants::{
    CONTACT_HEADER, CREDENTIALS_HEADER, DOCTOR_NAME_HEADER, REGISTRATION_HEADER,
    SOURCE_FILE_HEADER,
};
use crate::error::{DirectoryError, Result};
use crate::types::{CellValue, Row};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;
use tracing::{debug, info, instrument};

/// The first table of a source document: a header row plus ordered data rows.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl SourceTable {
    /// Build a table from in-memory rows; the first row is the header.
    ///
    /// Header text is kept verbatim, so required columns must match exactly.
    pub fn from_rows(mut rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            return Err(DirectoryError::EmptyTable);
        }
        let headers = rows.remove(0).iter().map(|cell| cell.to_string()).collect();
        Ok(Self { headers, rows })
    }

    /// Read the first sheet of a workbook, or a CSV file, by extension.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DirectoryError::InputNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let rows = match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook_rows(path)?,
            "csv" => read_csv_rows(path)?,
            other => {
                return Err(DirectoryError::UnsupportedFormat(if other.is_empty() {
                    path.display().to_string()
                } else {
                    format!(".{other}")
                }))
            }
        };

        let table = Self::from_rows(rows)?;
        info!(
            "Loaded source table: {} columns, {} data rows",
            table.headers.len(),
            table.rows.len()
        );
        Ok(table)
    }

    /// Position of a header by exact name.
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DirectoryError::MissingColumn(name.to_string()))
    }
}

fn read_workbook_rows(path: &Path) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DirectoryError::MissingSheet)??;
    debug!("Workbook range size {:?}", range.get_size());

    Ok(range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect())
}

fn read_csv_rows(path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from).collect());
    }
    Ok(rows)
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                CellValue::from(s.as_str())
            }
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(datetime) => CellValue::Text(datetime.to_string()),
                None => CellValue::Float(dt.as_f64()),
            },
        }
    }
}

/// Resolved positions of the columns the extraction reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryColumns {
    pub name: usize,
    pub contact: usize,
    pub credentials: usize,
    pub registration: usize,
    pub source_file: usize,
}

impl DirectoryColumns {
    /// Look up every required header; the first one missing aborts the run.
    pub fn resolve(table: &SourceTable) -> Result<Self> {
        Ok(Self {
            name: table.column(DOCTOR_NAME_HEADER)?,
            contact: table.column(CONTACT_HEADER)?,
            credentials: table.column(CREDENTIALS_HEADER)?,
            registration: table.column(REGISTRATION_HEADER)?,
            source_file: table.column(SOURCE_FILE_HEADER)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use std::fs;

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
    }

    fn text_row(cells: &[&str]) -> Row {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    #[test]
    fn test_columns_resolved_by_name_not_position() {
        let table = SourceTable::from_rows(vec![text_row(&[
            "Source File",
            "Registration Numbers",
            "Doctor Name",
            "Extra",
            "Credentials/Specialty",
            "Contact Information",
        ])])
        .unwrap();

        let columns = DirectoryColumns::resolve(&table).unwrap();
        assert_eq!(
            columns,
            DirectoryColumns {
                name: 2,
                contact: 5,
                credentials: 4,
                registration: 1,
                source_file: 0,
            }
        );
    }

    #[test]
    fn test_missing_column_is_reported() {
        let table = SourceTable::from_rows(vec![text_row(&[
            "Doctor Name",
            "Contact Information",
            "Credentials/Specialty",
            "Source File",
        ])])
        .unwrap();

        match DirectoryColumns::resolve(&table) {
            Err(DirectoryError::MissingColumn(name)) => assert_eq!(name, "Registration Numbers"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_header_names_must_match_exactly() {
        let table = SourceTable::from_rows(vec![text_row(&[" Doctor Name "])]).unwrap();
        assert!(matches!(
            table.column("Doctor Name"),
            Err(DirectoryError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_empty_table_is_fatal() {
        assert!(matches!(
            SourceTable::from_rows(Vec::new()),
            Err(DirectoryError::EmptyTable)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xlsx");
        match SourceTable::load(&path) {
            Err(DirectoryError::InputNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctors.numbers");
        fs::write(&path, b"not a spreadsheet").unwrap();
        assert!(matches!(
            SourceTable::load(&path),
            Err(DirectoryError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_ragged_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctors.csv");
        fs::write(
            &path,
            "Doctor Name,Contact Information,Credentials/Specialty,Registration Numbers,Source File\n\
             John Doe,a@x.com\n\
             Jane Roe,,MBBS,R9,b.pdf\n",
        )
        .unwrap();

        let table = SourceTable::load(&path).unwrap();
        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1][1], CellValue::Empty);
        assert_eq!(table.rows[1][3], CellValue::Text("R9".to_string()));
    }

    #[test]
    fn test_calamine_cell_conversion() {
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
        assert_eq!(CellValue::from(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(CellValue::from(&Data::Float(42.0)).to_string(), "42");
        assert_eq!(
            CellValue::from(&Data::String("Dr. A".to_string())),
            CellValue::Text("Dr. A".to_string())
        );
    }

    #[test]
    fn test_load_reads_first_sheet_only() {
        let table = SourceTable::load(&fixture("doctors_two_sheets.xlsx")).unwrap();

        assert_eq!(table.rows.len(), 4);
        let columns = DirectoryColumns::resolve(&table).unwrap();
        assert_eq!(columns.name, 0);
        assert_eq!(columns.source_file, 4);

        let names: Vec<String> = table
            .rows
            .iter()
            .map(|row| row[columns.name].to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Dr. Jane Smith", "Acme Medical Clinic", "John Doe", "John Doe"]
        );
        assert!(!names.iter().any(|n| n == "Other Sheet Person"));
    }

    #[test]
    fn test_workbook_numeric_cell_reads_as_integer_text() {
        let table = SourceTable::load(&fixture("doctors_two_sheets.xlsx")).unwrap();
        let columns = DirectoryColumns::resolve(&table).unwrap();

        let registration = &table.rows[0][columns.registration];
        assert_eq!(registration.text().as_deref(), Some("778812"));
        // gaps inside the sheet's used range come back as empty cells
        assert!(table.rows[1][columns.registration].is_blank());
    }

    #[test]
    fn test_datetime_cell_renders_as_timestamp() {
        let dt = ExcelDateTime::new(45621.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            CellValue::from(&Data::DateTime(dt)),
            CellValue::Text("2024-11-25 12:00:00".to_string())
        );
    }
}
