/// Slide implementation for the PPTX writer.
use super::shape::MutableShape;
use crate::layout::{Color, PlacementCommand};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Id of the group shape that roots every shape tree.
const GROUP_SHAPE_ID: u32 = 1;

/// A slide under construction.
///
/// Shapes are kept in paint order: the first shape added is drawn at the back.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableSlide {
    /// Slide ID (unique within presentation)
    slide_id: u32,
    /// Solid background color in hex RGB
    background: Option<String>,
    shapes: Vec<MutableShape>,
    next_shape_id: u32,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
            next_shape_id: GROUP_SHAPE_ID + 1,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = Some(color.hex().to_string());
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Append a shape for `command` on top of everything placed so far.
    pub fn add_command(&mut self, command: &PlacementCommand) -> &MutableShape {
        let shape = MutableShape::from_command(self.next_shape_id, command);
        self.next_shape_id += 1;
        self.shapes.push(shape);
        &self.shapes[self.shapes.len() - 1]
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.shapes.len() * 640);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // The background must precede the shape tree
        if let Some(ref color) = self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                color
            )?;
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        write!(xml, r#"<p:cNvPr id="{}" name=""/>"#, GROUP_SHAPE_ID)?;
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::palette::{BACKGROUND, BODY};
    use crate::layout::{Rect, ShapeCommand, ShapeKind, TextCommand};

    #[test]
    fn test_shape_ids_start_after_group() {
        let mut slide = MutableSlide::new(256);
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        let first = slide
            .add_command(&ShapeCommand::solid(ShapeKind::Rectangle, rect, BACKGROUND).into())
            .shape_id();
        let second = slide
            .add_command(&TextCommand::new("x", rect, BODY).into())
            .shape_id();
        assert_eq!((first, second), (2, 3));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(BACKGROUND);
        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="0B1120"/>"#));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_no_background_element_when_unset() {
        let slide = MutableSlide::new(256);
        assert!(!slide.to_xml().unwrap().contains("<p:bg>"));
    }

    #[test]
    fn test_shapes_keep_paint_order() {
        let mut slide = MutableSlide::new(256);
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        slide.add_command(&TextCommand::new("back", rect, BODY).into());
        slide.add_command(&TextCommand::new("front", rect, BODY).into());
        let xml = slide.to_xml().unwrap();
        assert!(xml.find("back").unwrap() < xml.find("front").unwrap());
    }
}
