/// Presentation writer for PPTX.
use super::super::package::{PackageWriter, Relationships, content_type as ct, rel_type as rt};
use super::super::template;
use super::slide::MutableSlide;
use crate::common::unit::units_to_emu;
use crate::export::DeckWriter;
use crate::layout::{Canvas, Color, PlacementCommand};
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

/// Id of the first slide in `p:sldIdLst`; lower values are reserved.
const FIRST_SLIDE_ID: u32 = 256;
const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// A PowerPoint presentation under construction.
///
/// Slides are appended in order and serialized into a complete `.pptx`
/// package by [`MutablePresentation::to_bytes`].
#[derive(Debug, Clone, PartialEq)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl MutablePresentation {
    /// Create an empty presentation sized for the default 16:9 canvas.
    pub fn new() -> Self {
        Self::for_canvas(Canvas::default())
    }

    /// Create an empty presentation sized for `canvas`.
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            slides: Vec::new(),
            slide_width: units_to_emu(canvas.width),
            slide_height: units_to_emu(canvas.height),
        }
    }

    /// Add a new slide to the end of the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        self.slides
            .push(MutableSlide::new(FIRST_SLIDE_ID + index as u32));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.slide_width = units_to_emu(canvas.width);
        self.slide_height = units_to_emu(canvas.height);
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rel_ids` holds the relationship id of each slide, in order.
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "expected {} slide relationship ids, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="rId1"/>"#,
            SLIDE_MASTER_ID
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the presentation into a `.pptx` package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut package = PackageWriter::new();

        let mut root_rels = Relationships::new();
        root_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        root_rels.add(rt::CORE_PROPS, "docProps/core.xml");
        root_rels.add(rt::EXTENDED_PROPS, "docProps/app.xml");
        package.add_relationships("_rels/.rels", &root_rels)?;
        package.add_part("docProps/core.xml", ct::CORE_PROPS, template::core_props_xml());
        package.add_part("docProps/app.xml", ct::EXTENDED_PROPS, template::app_props_xml());

        // The master must be rId1: presentation.xml refers to it by that id
        let mut pres_rels = Relationships::new();
        pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let number = index + 1;
            slide_rel_ids.push(pres_rels.add(rt::SLIDE, format!("slides/slide{number}.xml")));

            package.add_part(
                format!("ppt/slides/slide{number}.xml"),
                ct::SLIDE,
                slide.to_xml()?,
            );
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
            package.add_relationships(
                format!("ppt/slides/_rels/slide{number}.xml.rels"),
                &slide_rels,
            )?;
        }
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        package.add_part(
            "ppt/presentation.xml",
            ct::PRESENTATION,
            self.generate_presentation_xml(&slide_rel_ids)?,
        );
        package.add_relationships("ppt/_rels/presentation.xml.rels", &pres_rels)?;

        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        package.add_part(
            "ppt/slideMasters/slideMaster1.xml",
            ct::SLIDE_MASTER,
            template::slide_master_xml(),
        );
        package.add_relationships(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &master_rels,
        )?;

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        package.add_part(
            "ppt/slideLayouts/slideLayout1.xml",
            ct::SLIDE_LAYOUT,
            template::blank_layout_xml(),
        );
        package.add_relationships(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &layout_rels,
        )?;

        package.add_part("ppt/theme/theme1.xml", ct::THEME, template::theme_xml());
        package.add_part("ppt/presProps.xml", ct::PRES_PROPS, template::pres_props_xml());
        package.add_part("ppt/viewProps.xml", ct::VIEW_PROPS, template::view_props_xml());
        package.add_part(
            "ppt/tableStyles.xml",
            ct::TABLE_STYLES,
            template::table_styles_xml(),
        );

        let parts = package.part_count();
        let bytes = package.finish_to_bytes()?;
        tracing::debug!(
            slides = self.slides.len(),
            parts,
            bytes = bytes.len(),
            "serialized presentation package"
        );
        Ok(bytes)
    }

    fn current_slide(&mut self) -> Result<&mut MutableSlide> {
        self.slides
            .last_mut()
            .ok_or_else(|| OoxmlError::InvalidState("no slide has been started".to_string()))
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckWriter for MutablePresentation {
    fn begin_deck(&mut self, canvas: Canvas) -> crate::Result<()> {
        self.slides.clear();
        self.set_canvas(canvas);
        Ok(())
    }

    fn begin_slide(&mut self, background: Color) -> crate::Result<()> {
        self.add_slide().set_background(background);
        Ok(())
    }

    fn place(&mut self, command: &PlacementCommand) -> crate::Result<()> {
        self.current_slide()?.add_command(command);
        Ok(())
    }

    fn finish(&mut self) -> crate::Result<Vec<u8>> {
        let bytes = self.to_bytes()?;
        self.slides.clear();
        Ok(bytes)
    }
}
