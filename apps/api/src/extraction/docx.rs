use docx_rs::{
    DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};
use tracing::warn;

use crate::errors::AppError;

/// Extracts paragraph text from a DOCX held in memory, one line per paragraph.
/// Table cells are walked too since many resume templates lay out sections in tables.
pub fn extract_docx_text(data: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(data).map_err(|e| {
        warn!("DOCX extraction failed: {e}");
        AppError::UnprocessableEntity(format!("The DOCX could not be read: {e}"))
    })?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => lines.push(paragraph_text(p)),
            DocumentChild::Table(t) => collect_table_text(t, &mut lines),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

/// Hyperlinks (auto-linked emails, portfolio URLs) and tracked insertions nest
/// their runs one level down.
fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, text),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run_text(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[allow(irrefutable_let_patterns)]
fn collect_table_text(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else {
            continue;
        };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => lines.push(paragraph_text(p)),
                    TableCellContent::Table(nested) => collect_table_text(nested, lines),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Insert, TableCell, TableRow};

    fn build(docx: Docx) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let bytes = build(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
                .add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text("Rust "))
                        .add_run(Run::new().add_text("engineer")),
                ),
        );

        let text = extract_docx_text(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Jane Doe");
        assert!(lines[1].contains("Rust") && lines[1].contains("engineer"));
    }

    #[test]
    fn test_table_cells_are_included() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Skills"))),
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Docker, AWS"))),
        ])]);
        let bytes = build(Docx::new().add_table(table));

        let text = extract_docx_text(&bytes).unwrap();
        assert!(text.contains("Skills"));
        assert!(text.contains("Docker, AWS"));
    }

    #[test]
    fn test_hyperlink_text_is_included() {
        let bytes = build(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Email: "))
                    .add_hyperlink(
                        Hyperlink::new("mailto:jane@example.com", HyperlinkType::External)
                            .add_run(Run::new().add_text("jane@example.com")),
                    ),
            ),
        );

        let text = extract_docx_text(&bytes).unwrap();
        assert!(text.contains("Email:"));
        assert!(text.contains("jane@example.com"), "extracted: {text:?}");
    }

    #[test]
    fn test_tracked_insertion_text_is_included() {
        let bytes = build(Docx::new().add_paragraph(
            Paragraph::new().add_insert(Insert::new(Run::new().add_text("Kubernetes"))),
        ));

        let text = extract_docx_text(&bytes).unwrap();
        assert!(text.contains("Kubernetes"), "extracted: {text:?}");
    }

    #[test]
    fn test_not_a_docx() {
        let err = extract_docx_text(b"PK\x03\x04 definitely not a zip").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
