//! Ingestion Module Tests
//!
//! Validates extractor selection and content extraction for uploads.
//!
//! ## Test Scopes
//! - **FileKind**: Extension-based extractor choice.
//! - **Extraction**: Plain text, CSV rows and PDF text, on and off the blocking pool.
//! - **Serialization**: Response shape for text and row payloads.

#[cfg(test)]
mod tests {
    use crate::ingestion::extract::{
        extract, extract_blocking, extract_csv, extract_pdf, extract_text, ExtractError,
    };
    use crate::ingestion::types::{ExtractedData, FileKind, UploadResponse};
    use axum::body::Bytes;

    /// One page, Helvetica, drawing "Hello PDF".
    const HELLO_PDF: &[u8] = include_bytes!("fixtures/hello.pdf");

    // ============================================================
    // FILE KIND TESTS
    // ============================================================

    #[test]
    fn test_file_kind_from_extension() {
        assert_eq!(FileKind::from_file_name("notes.txt").unwrap(), FileKind::Text);
        assert_eq!(FileKind::from_file_name("people.csv").unwrap(), FileKind::Csv);
        assert_eq!(FileKind::from_file_name("report.pdf").unwrap(), FileKind::Pdf);
    }

    #[test]
    fn test_file_kind_ignores_case() {
        assert_eq!(FileKind::from_file_name("PEOPLE.CSV").unwrap(), FileKind::Csv);
        assert_eq!(FileKind::from_file_name("Report.Pdf").unwrap(), FileKind::Pdf);
    }

    #[test]
    fn test_file_kind_unknown_extension() {
        let err = FileKind::from_file_name("sheet.xlsx").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: .xlsx");
    }

    #[test]
    fn test_file_kind_missing_extension() {
        let err = FileKind::from_file_name("README").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedExtension(ext) if ext == "."));
    }

    // ============================================================
    // TEXT EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_text() {
        let text = extract_text("line one\nline two".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_extract_text_rejects_invalid_utf8() {
        let err = extract_text(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ExtractError::Utf8(_)));
    }

    // ============================================================
    // CSV EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_csv_rows_keyed_by_header() {
        let csv = "firstName,lastName,salary\nJohn,Doe,50000\nJane,Smith,60000\n";
        let rows = extract_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["firstName"], "John");
        assert_eq!(rows[0]["salary"], "50000");
        assert_eq!(rows[1]["lastName"], "Smith");

        let columns: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(columns, vec!["firstName", "lastName", "salary"]);
    }

    #[test]
    fn test_extract_csv_quoted_fields() {
        let csv = "name,title\n\"Doe, John\",\"Senior \"\"Lead\"\"\"\n";
        let rows = extract_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows[0]["name"], "Doe, John");
        assert_eq!(rows[0]["title"], "Senior \"Lead\"");
    }

    #[test]
    fn test_extract_csv_ragged_rows() {
        let csv = "a,b,c\n1,2\n1,2,3,4\n";
        let rows = extract_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].len(), 2);
        assert!(rows[0].get("c").is_none());
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[1]["c"], "3");
    }

    #[test]
    fn test_extract_csv_header_only() {
        let rows = extract_csv("a,b\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_extract_csv_invalid_utf8() {
        let err = extract_csv(&[b'a', b'\n', 0xff, 0xfe, b'\n']).unwrap_err();
        assert!(matches!(err, ExtractError::Csv(_)));
    }

    // ============================================================
    // PDF EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_pdf_rejects_garbage() {
        let result = extract_pdf(b"this is not a pdf");
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_extract_pdf_text() {
        let text = extract_pdf(HELLO_PDF).unwrap();
        assert!(text.contains("Hello PDF"), "extracted: {:?}", text);
    }

    #[test]
    fn test_extract_dispatches_pdf() {
        match extract(FileKind::Pdf, HELLO_PDF).unwrap() {
            ExtractedData::Text(text) => assert!(text.contains("Hello")),
            other => panic!("Expected text, got {:?}", other),
        }
    }

    // ============================================================
    // DISPATCH AND SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_extract_dispatches_by_kind() {
        let text = extract(FileKind::Text, b"hello").unwrap();
        assert_eq!(text, ExtractedData::Text("hello".to_string()));

        let rows = extract(FileKind::Csv, b"k\nv\n").unwrap();
        match rows {
            ExtractedData::Rows(rows) => assert_eq!(rows[0]["k"], "v"),
            other => panic!("Expected rows, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_extract_blocking_matches_inline_extract() {
        let data = extract_blocking(FileKind::Csv, Bytes::from_static(b"k\nv\n"))
            .await
            .unwrap();
        assert_eq!(data, extract(FileKind::Csv, b"k\nv\n").unwrap());

        let err = extract_blocking(FileKind::Pdf, Bytes::from_static(b"not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }

    #[test]
    fn test_upload_response_serialization() {
        let response = UploadResponse {
            message: "File processed successfully".to_string(),
            data: extract(FileKind::Csv, b"k\nv\n").unwrap(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "File processed successfully",
                "data": [{ "k": "v" }]
            })
        );
    }
}
