/// Shape types and XML generation for PPTX slides.
use crate::common::unit::{degrees_to_angle, units_to_emu};
use crate::common::xml::escape_xml;
use crate::layout::{PlacementCommand, Rect, ShapeCommand, ShapeKind, TextCommand};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{ParagraphFormat, TextFormat};

/// Largest value of the `roundRect` `adj` guide (a fully rounded end).
const MAX_CORNER_ADJ: i64 = 50_000;

/// Position and extent in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl From<&Rect> for Bounds {
    fn from(rect: &Rect) -> Self {
        Self {
            x: units_to_emu(rect.x),
            y: units_to_emu(rect.y),
            cx: units_to_emu(rect.w),
            cy: units_to_emu(rect.h),
        }
    }
}

/// Preset geometry of a filled shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Rect,
    Ellipse,
    /// Rounded rectangle with its `adj` guide value
    RoundRect { adj: i64 },
}

impl Preset {
    fn name(&self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::RoundRect { .. } => "roundRect",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Rect => "Rectangle",
            Self::Ellipse => "Ellipse",
            Self::RoundRect { .. } => "Rounded Rectangle",
        }
    }
}

/// `adj` guide for a corner radius: the radius as a share of the shorter side,
/// in 1/100000, capped at a half.
pub fn corner_adjust(radius: i64, cx: i64, cy: i64) -> i64 {
    let short_side = cx.min(cy);
    if short_side <= 0 {
        return 0;
    }
    let adj = (radius as f64 * 100_000.0 / short_side as f64).round() as i64;
    adj.clamp(0, MAX_CORNER_ADJ)
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeType {
    TextBox {
        text: String,
        bounds: Bounds,
        format: TextFormat,
        paragraph: ParagraphFormat,
    },
    Geometry {
        preset: Preset,
        bounds: Bounds,
        fill: String,
        line: Option<String>,
        /// Rotation in 60000ths of a degree
        rotation: Option<i64>,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, command: &TextCommand) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                text: command.content.clone(),
                bounds: Bounds::from(&command.rect),
                format: TextFormat::from(&command.style),
                paragraph: ParagraphFormat::from(&command.style),
            },
        }
    }

    pub(crate) fn new_geometry(shape_id: u32, command: &ShapeCommand) -> Self {
        let bounds = Bounds::from(&command.rect);
        let preset = match command.kind {
            ShapeKind::Rectangle => Preset::Rect,
            ShapeKind::Ellipse => Preset::Ellipse,
            ShapeKind::RoundedRectangle { radius } => Preset::RoundRect {
                adj: corner_adjust(units_to_emu(radius), bounds.cx, bounds.cy),
            },
        };
        Self {
            shape_id,
            shape_type: ShapeType::Geometry {
                preset,
                bounds,
                fill: command.fill.hex().to_string(),
                line: command.line.map(|c| c.hex().to_string()),
                rotation: command.rotation.map(degrees_to_angle),
            },
        }
    }

    /// Convert a placement command into a shape with the given id.
    pub fn from_command(shape_id: u32, command: &PlacementCommand) -> Self {
        match command {
            PlacementCommand::Shape(shape) => Self::new_geometry(shape_id, shape),
            PlacementCommand::Text(text) => Self::new_text_box(shape_id, text),
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn bounds(&self) -> Bounds {
        match &self.shape_type {
            ShapeType::TextBox { bounds, .. } | ShapeType::Geometry { bounds, .. } => *bounds,
        }
    }

    /// Append the `p:sp` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                text,
                bounds,
                format,
                paragraph,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id, self.shape_id
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, bounds, None)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(
                    r#"<a:bodyPr wrap="square" lIns="0" tIns="0" rIns="0" bIns="0" rtlCol="0" anchor="t"><a:noAutofit/></a:bodyPr>"#,
                );
                xml.push_str("<a:lstStyle/>");
                for line in text.split('\n') {
                    write_paragraph(xml, line, format, paragraph)?;
                }
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Geometry {
                preset,
                bounds,
                fill,
                line,
                rotation,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{} {}"/>"#,
                    self.shape_id,
                    preset.label(),
                    self.shape_id
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, bounds, *rotation)?;
                write!(xml, r#"<a:prstGeom prst="{}">"#, preset.name())?;
                match preset {
                    Preset::RoundRect { adj } => {
                        write!(xml, r#"<a:avLst><a:gd name="adj" fmla="val {}"/></a:avLst>"#, adj)?
                    },
                    _ => xml.push_str("<a:avLst/>"),
                }
                xml.push_str("</a:prstGeom>");
                write_solid_fill(xml, fill)?;
                match line {
                    Some(color) => {
                        xml.push_str(r#"<a:ln w="12700">"#);
                        write_solid_fill(xml, color)?;
                        xml.push_str("</a:ln>");
                    },
                    None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                }
                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, bounds: &Bounds, rotation: Option<i64>) -> Result<()> {
    match rotation {
        Some(rot) if rot != 0 => write!(xml, r#"<a:xfrm rot="{}">"#, rot)?,
        _ => xml.push_str("<a:xfrm>"),
    }
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, bounds.x, bounds.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, bounds.cx, bounds.cy)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: &str) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color
    )?;
    Ok(())
}

fn write_paragraph(
    xml: &mut String,
    line: &str,
    format: &TextFormat,
    paragraph: &ParagraphFormat,
) -> Result<()> {
    xml.push_str("<a:p>");

    if !paragraph.is_empty() {
        xml.push_str("<a:pPr");
        if let Some(align) = paragraph.align {
            write!(xml, r#" algn="{}""#, align)?;
        }
        xml.push('>');
        if let Some(spacing) = paragraph.line_spacing {
            write!(
                xml,
                r#"<a:lnSpc><a:spcPct val="{}"/></a:lnSpc>"#,
                spacing
            )?;
        }
        xml.push_str("</a:pPr>");
    }

    if !line.is_empty() {
        xml.push_str("<a:r>");
        write_run_properties(xml, "a:rPr", format)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
        xml.push_str("</a:r>");
    }
    write_run_properties(xml, "a:endParaRPr", format)?;

    xml.push_str("</a:p>");
    Ok(())
}

/// Run properties. Child order follows CT_TextCharacterProperties: fill before
/// the latin font.
fn write_run_properties(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="en-US""#, tag)?;
    if let Some(sz) = format.size_centipoints() {
        write!(xml, r#" sz="{}""#, sz)?;
    }
    if let Some(true) = format.bold {
        xml.push_str(r#" b="1""#);
    }
    if let Some(true) = format.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0">"#);

    if let Some(ref color) = format.color {
        write_solid_fill(xml, color)?;
    }
    if let Some(ref font) = format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }

    write!(xml, "</{}>", tag)?;
    Ok(())
}
