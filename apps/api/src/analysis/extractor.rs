use std::path::Path;

use crate::errors::AppError;

/// Converts an uploaded document into raw text.
/// PDF goes through `pdf-extract`; plain text is read as-is. Word documents
/// are rejected at the upload boundary before this function runs, but the
/// error here stays explicit in case a file slips past the filter.
pub fn extract_text(path: &Path) -> Result<String, AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| AppError::Validation(format!("Failed to extract text from PDF: {e}"))),
        "txt" => std::fs::read_to_string(path)
            .map_err(|e| AppError::Validation(format!("Failed to read text file: {e}"))),
        other => Err(AppError::Validation(format!(
            "Unsupported file format '.{other}'. Only PDF and TXT files are supported for analysis."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_txt_file_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Senior Rust Engineer, 8 years experience").unwrap();

        let text = extract_text(&path).unwrap();
        assert!(text.contains("Senior Rust Engineer"));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = extract_text(Path::new("resume.docx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let err = extract_text(Path::new("resume")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.TXT");
        std::fs::write(&path, "plain text resume").unwrap();

        assert!(extract_text(&path).is_ok());
    }
}
