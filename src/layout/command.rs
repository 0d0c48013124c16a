//! Placement commands: the compiler's output and the deck writer's input.

use super::geometry::Rect;

/// A six-digit RGB hex color such as `"0B1120"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn hex(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    /// Rounded rectangle with the corner radius in canvas units
    RoundedRectangle { radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Draw a filled primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeCommand {
    pub kind: ShapeKind,
    pub rect: Rect,
    pub fill: Color,
    /// Outline color; `None` draws no outline
    pub line: Option<Color>,
    /// Clockwise rotation in degrees
    pub rotation: Option<f64>,
}

impl ShapeCommand {
    pub fn new(kind: ShapeKind, rect: Rect, fill: Color) -> Self {
        Self {
            kind,
            rect,
            fill,
            line: None,
            rotation: None,
        }
    }

    /// Fill and outline with the same color.
    pub fn solid(kind: ShapeKind, rect: Rect, color: Color) -> Self {
        Self::new(kind, rect, color).with_line(color)
    }

    pub fn with_line(mut self, line: Color) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }
}

/// Character and paragraph styling of a text command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
    pub font_face: Option<&'static str>,
    /// Line spacing as a multiple of single spacing
    pub line_spacing: Option<f64>,
    pub align: Option<Align>,
}

impl TextStyle {
    pub const fn new(font_size: f64, color: Color) -> Self {
        Self {
            font_size,
            bold: false,
            italic: false,
            color,
            font_face: None,
            line_spacing: None,
            align: None,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn with_face(mut self, face: &'static str) -> Self {
        self.font_face = Some(face);
        self
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub const fn with_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub const fn with_line_spacing(mut self, multiple: f64) -> Self {
        self.line_spacing = Some(multiple);
        self
    }

    pub const fn centered(mut self) -> Self {
        self.align = Some(Align::Center);
        self
    }
}

/// Draw text inside a rectangle. Newlines separate paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub content: String,
    pub rect: Rect,
    pub style: TextStyle,
}

impl TextCommand {
    pub fn new(content: impl Into<String>, rect: Rect, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            rect,
            style,
        }
    }
}

/// One primitive for the deck writer.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementCommand {
    Shape(ShapeCommand),
    Text(TextCommand),
}

impl PlacementCommand {
    pub fn rect(&self) -> &Rect {
        match self {
            Self::Shape(shape) => &shape.rect,
            Self::Text(text) => &text.rect,
        }
    }

    pub fn as_text(&self) -> Option<&TextCommand> {
        match self {
            Self::Text(text) => Some(text),
            Self::Shape(_) => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeCommand> {
        match self {
            Self::Shape(shape) => Some(shape),
            Self::Text(_) => None,
        }
    }
}

impl From<ShapeCommand> for PlacementCommand {
    fn from(shape: ShapeCommand) -> Self {
        Self::Shape(shape)
    }
}

impl From<TextCommand> for PlacementCommand {
    fn from(text: TextCommand) -> Self {
        Self::Text(text)
    }
}
