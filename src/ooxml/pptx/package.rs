//! OPC package writing.
//!
//! Parts are collected in memory and written out in one pass so that
//! `[Content_Types].xml` always comes first and the archive is byte-stable:
//! every entry carries the same fixed timestamp.

use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};
use zip::DateTime;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Content types used by the parts of a presentation package.
pub mod content_type {
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    pub const CORE_PROPS: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

/// Relationship types used by a presentation package.
pub mod rel_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

/// A `.rels` part under construction.
///
/// Relationship ids are assigned sequentially from `rId1` in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Relationships {
    entries: Vec<(&'static str, String)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its id.
    pub fn add(&mut self, rel_type: &'static str, target: impl Into<String>) -> String {
        self.entries.push((rel_type, target.into()));
        format!("rId{}", self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.entries.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for (index, (rel_type, target)) in self.entries.iter().enumerate() {
            write!(
                xml,
                r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
                index + 1,
                rel_type,
                target
            )?;
        }
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

#[derive(Debug)]
struct Part {
    name: String,
    content_type: Option<&'static str>,
    data: Vec<u8>,
}

/// Builder for OPC packages (ZIP archives).
#[derive(Debug, Default)]
pub struct PackageWriter {
    parts: Vec<Part>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part with an explicit content type override.
    ///
    /// `name` is the part name without the leading slash, e.g. `ppt/presentation.xml`.
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        content_type: &'static str,
        data: impl Into<Vec<u8>>,
    ) {
        self.parts.push(Part {
            name: name.into(),
            content_type: Some(content_type),
            data: data.into(),
        });
    }

    /// Add a relationships part. Its content type comes from the `rels` default.
    pub fn add_relationships(
        &mut self,
        name: impl Into<String>,
        rels: &Relationships,
    ) -> Result<()> {
        self.parts.push(Part {
            name: name.into(),
            content_type: None,
            data: rels.to_xml()?.into_bytes(),
        });
        Ok(())
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    fn content_types_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512 + self.parts.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        write!(
            xml,
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            content_type::RELATIONSHIPS
        )?;
        write!(
            xml,
            r#"<Default Extension="xml" ContentType="{}"/>"#,
            content_type::XML
        )?;
        for part in &self.parts {
            if let Some(content_type) = part.content_type {
                write!(
                    xml,
                    r#"<Override PartName="/{}" ContentType="{}"/>"#,
                    part.name, content_type
                )?;
            }
        }
        xml.push_str("</Types>");
        Ok(xml)
    }

    /// Write the package into `writer` and return it.
    pub fn finish_into<W: Write + Seek>(self, writer: W) -> Result<W> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let content_types = self.content_types_xml()?;
        let mut zip = ZipWriter::new(writer);
        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(content_types.as_bytes())?;

        for part in &self.parts {
            zip.start_file(part.name.as_str(), options)?;
            zip.write_all(&part.data)?;
        }

        Ok(zip.finish()?)
    }

    /// Write the package into memory.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        Ok(self.finish_into(Cursor::new(Vec::new()))?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_relationship_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rel_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rel_type::SLIDE, "slides/slide1.xml"), "rId2");
        let xml = rels.to_xml().unwrap();
        assert!(xml.contains(r#"Id="rId2""#));
        assert!(xml.contains(r#"Target="slides/slide1.xml""#));
    }

    #[test]
    fn test_content_types_list_overrides_only_for_typed_parts() {
        let mut writer = PackageWriter::new();
        writer.add_part("ppt/presentation.xml", content_type::PRESENTATION, "<p/>");
        writer
            .add_relationships("_rels/.rels", &Relationships::new())
            .unwrap();
        let xml = writer.content_types_xml().unwrap();
        assert!(xml.contains(r#"PartName="/ppt/presentation.xml""#));
        assert!(!xml.contains("PartName=\"/_rels/.rels\""));
        assert!(xml.contains(r#"Extension="rels""#));
    }

    #[test]
    fn test_archive_layout() {
        let mut writer = PackageWriter::new();
        writer.add_part("ppt/presentation.xml", content_type::PRESENTATION, "<p/>");
        let bytes = writer.finish_to_bytes().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut body = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "<p/>");
    }

    #[test]
    fn test_output_is_byte_stable() {
        let build = || {
            let mut writer = PackageWriter::new();
            writer.add_part("a.xml", content_type::XML, "<a/>");
            writer.add_part("b.xml", content_type::XML, "<b/>");
            writer.finish_to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }
}
