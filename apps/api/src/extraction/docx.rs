//! DOCX text: the run text of each top-level body paragraph in
//! `word/document.xml`, one paragraph per line.

use std::io::{Cursor, Read};

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractionError;

const BODY_PART: &str = "word/document.xml";

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(BODY_PART)
        .map_err(|e| ExtractionError::Docx(format!("{BODY_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(format!("{BODY_PART}: {e}")))?;

    paragraphs_text(&xml)
}

/// Paragraphs inside tables are skipped; only body paragraphs are kept.
fn paragraphs_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    let mut table_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_text = true,
                b"w:tbl" => table_depth += 1,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    let text = std::mem::take(&mut current);
                    if table_depth == 0 {
                        paragraphs.push(text);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" if table_depth == 0 => paragraphs.push(String::new()),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t.decode().map_err(|e| ExtractionError::Docx(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::GeneralRef(r)) if in_text => {
                if let Ok(Some(ch)) = r.resolve_char_ref() {
                    current.push(ch);
                } else {
                    let name = r.decode().map_err(|e| ExtractionError::Docx(e.to_string()))?;
                    if let Some(resolved) = resolve_predefined_entity(&name) {
                        current.push_str(resolved);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Docx(format!(
                    "{BODY_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Builds a minimal `.docx` archive around the given body XML.
#[cfg(test)]
pub(crate) fn docx_fixture(body_xml: &str) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body_xml}</w:body></w:document>"#
    );
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file(BODY_PART, options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Wraps each line in its own paragraph and run.
#[cfg(test)]
pub(crate) fn docx_from_lines(lines: &[&str]) -> Vec<u8> {
    let body: String = lines
        .iter()
        .map(|line| format!(r#"<w:p><w:r><w:t xml:space="preserve">{line}</w:t></w:r></w:p>"#))
        .collect();
    docx_fixture(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let bytes = docx_from_lines(&["Jane Doe", "Developed APIs in Python"]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Jane Doe\nDeveloped APIs in Python");
    }

    #[test]
    fn test_runs_entities_and_tabs() {
        let bytes = docx_fixture(
            r#"<w:p><w:r><w:t xml:space="preserve">Python </w:t></w:r><w:r><w:t>&amp; SQL</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Led</w:t><w:tab/><w:t>migration</w:t></w:r></w:p>"#,
        );
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Python & SQL\n\nLed\tmigration");
    }

    #[test]
    fn test_table_paragraphs_skipped() {
        let bytes = docx_fixture(
            "<w:p><w:r><w:t>Summary</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p><w:r><w:t>Skills</w:t></w:r></w:p>",
        );
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Summary\nSkills");
    }

    #[test]
    fn test_not_a_zip_archive() {
        assert!(matches!(
            extract_docx_text(b"plain bytes"),
            Err(ExtractionError::Docx(_))
        ));
    }

    #[test]
    fn test_archive_without_document_part() {
        use std::io::Write;
        use zip::write::SimpleFileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(err.to_string().contains(BODY_PART), "{err}");
    }
}
