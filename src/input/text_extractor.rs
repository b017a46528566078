//! Text extraction from various file formats

use crate::error::{Result, ScreenerError};
use pulldown_cmark::{Event, Parser, Tag};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ScreenerError::Extraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text.trim().to_string())
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| docx_error(path, e))?;
        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| docx_error(path, e))?
            .read_to_string(&mut document_xml)?;

        docx_xml_to_text(&document_xml).map_err(|e| docx_error(path, e))
    }
}

fn docx_error(path: &Path, cause: impl std::fmt::Display) -> ScreenerError {
    ScreenerError::Extraction(format!("Failed to extract text from DOCX '{}': {}", path.display(), cause))
}

/// Collect the run text of a WordprocessingML body, one line per paragraph
pub fn docx_xml_to_text(xml: &str) -> std::result::Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;
    let mut in_paragraph_properties = false;

    loop {
        match reader.read_event()? {
            XmlEvent::Start(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:pPr" => in_paragraph_properties = true,
                _ => {}
            },
            XmlEvent::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:pPr" => in_paragraph_properties = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            // Tab stops inside w:pPr are layout, not content
            XmlEvent::Empty(e) if !in_paragraph_properties => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            XmlEvent::Text(e) if in_text_run => text.push_str(&e.unescape()?),
            XmlEvent::Eof => break,
            _ => {}
        }
    }

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        String::from_utf8(bytes).map_err(|_| {
            ScreenerError::Extraction(format!("'{}' is not valid UTF-8 text", path.display()))
        })
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Strip Markdown syntax, keeping one line per block element
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                text.push('\n')
            }
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text() {
        let markdown = "# John Doe\n\n## Skills\n\n- **Rust**, `tokio`\n- Python\n\nBuilt *fast* services.\n";
        let text = markdown_to_text(markdown);

        assert_eq!(text, "John Doe\nSkills\nRust, tokio\nPython\nBuilt fast services.");
    }

    #[test]
    fn test_docx_xml_to_text() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>John Doe</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Rust &amp; </w:t></w:r><w:r><w:t>Go</w:t></w:r><w:r><w:tab/></w:r><w:r><w:t>AWS</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p>
</w:body></w:document>"#;

        let text = docx_xml_to_text(xml).unwrap();
        assert_eq!(text, "John Doe\nRust & Go\tAWS\nLine one\nLine two");
    }

    #[test]
    fn test_docx_xml_to_text_rejects_malformed_xml() {
        assert!(docx_xml_to_text("<w:document><w:body></w:p></w:document>").is_err());
    }
}
