use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::errors::AppError;

/// Extracts the text layer of a PDF held in memory.
///
/// pdf-extract panics on some malformed inputs instead of returning an error,
/// so the call is isolated and a panic is reported like any parse failure.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data)));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            Err(AppError::UnprocessableEntity(format!(
                "The PDF could not be read: {e}"
            )))
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            Err(AppError::UnprocessableEntity(
                "The PDF could not be read".to_string(),
            ))
        }
    }
}

/// Builds a single-page PDF showing `text` in Helvetica, with a valid xref table.
#[cfg(test)]
pub(crate) fn one_page_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_layer_is_extracted() {
        let text = extract_pdf_text(&one_page_pdf("Rust engineer")).unwrap();
        assert!(text.contains("Rust"), "extracted: {text:?}");
        assert!(text.contains("engineer"), "extracted: {text:?}");
    }

    #[test]
    fn test_truncated_pdf_is_unprocessable() {
        let err = extract_pdf_text(b"%PDF-1.4\n1 0 obj\n").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_empty_input_is_unprocessable() {
        assert!(extract_pdf_text(&[]).is_err());
    }
}
