//! Slide compiler: header band, vertical cursor and section containers.

use super::archetype;
use super::command::{Color, PlacementCommand, ShapeCommand, ShapeKind, TextStyle};
use super::geometry::{Canvas, LayoutBox, Rect};
use super::height::section_height;
use super::palette::{
    BACKGROUND, CONTAINER_FILL, CONTAINER_LINE, DETAIL_TEXT, FONT_FACE, HERO_SHAPES, WHITE,
    accent_color,
};
use crate::content::Slide;

/// Left and right margin of the content column.
pub const MARGIN_X: f64 = 0.6;
pub const HEADER_HEIGHT: f64 = 1.2;
/// Vertical space between consecutive section containers.
pub const SECTION_GAP: f64 = 0.3;
/// Inset from a section container to its content box.
pub const CONTAINER_PADDING: f64 = 0.3;
const CONTAINER_RADIUS: f64 = 0.3;

const CURSOR_START: f64 = 1.8;
const CURSOR_START_WITH_SUBTITLE: f64 = 2.0;

const INDEX_LABEL_WIDTH: f64 = 2.0;
const INDEX_LABEL: TextStyle = TextStyle::new(16.0, BACKGROUND).bold().with_face(FONT_FACE);
const TITLE: TextStyle = TextStyle::new(32.0, WHITE).bold().with_face(FONT_FACE);
const SUBTITLE: TextStyle = TextStyle::new(14.0, DETAIL_TEXT).italic().with_face(FONT_FACE);

/// Where one section landed on the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlacement {
    /// Index of the section within the slide
    pub index: usize,
    pub kind: String,
    /// The container background rectangle
    pub container: Rect,
    /// Range of this section's commands in [`CompiledSlide::commands`]
    pub commands: std::ops::Range<usize>,
}

/// The output of compiling one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSlide {
    pub background: Color,
    pub accent: Color,
    pub commands: Vec<PlacementCommand>,
    /// Placed sections in order; unsupported sections are absent
    pub sections: Vec<SectionPlacement>,
}

impl CompiledSlide {
    /// Lowest edge reached by any section container.
    pub fn content_bottom(&self) -> f64 {
        self.sections
            .last()
            .map(|s| s.container.bottom())
            .unwrap_or(0.0)
    }
}

/// Compiles slides against a fixed canvas.
#[derive(Debug, Clone, Copy)]
pub struct SlideCompiler {
    canvas: Canvas,
}

impl SlideCompiler {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Compile the slide at zero-based `index` in its deck.
    pub fn compile(&self, index: usize, slide: &Slide) -> CompiledSlide {
        let width = self.canvas.width;
        let content_width = width - MARGIN_X * 2.0;
        let accent = accent_color(&slide.accent);
        let mut commands = Vec::new();

        emit_header(index, slide, width, content_width, accent, &mut commands);

        let mut cursor = if slide.subtitle.is_some() {
            CURSOR_START_WITH_SUBTITLE
        } else {
            CURSOR_START
        };
        let mut sections = Vec::with_capacity(slide.sections.len());

        for (section_index, section) in slide.sections.iter().enumerate() {
            if !section.is_supported() {
                tracing::warn!(
                    slide = %slide.id,
                    section = section_index,
                    kind = section.kind(),
                    "skipping unsupported section"
                );
                continue;
            }

            let height = section_height(section);
            let container = Rect::new(MARGIN_X, cursor, content_width, height);
            let start = commands.len();
            commands.push(
                ShapeCommand::new(
                    ShapeKind::RoundedRectangle {
                        radius: CONTAINER_RADIUS,
                    },
                    container,
                    CONTAINER_FILL,
                )
                .with_line(CONTAINER_LINE)
                .into(),
            );

            let area = LayoutBox::new(container.inset(CONTAINER_PADDING), accent);
            archetype::render(section, &area, &mut commands);

            sections.push(SectionPlacement {
                index: section_index,
                kind: section.kind().to_string(),
                container,
                commands: start..commands.len(),
            });
            cursor += height + SECTION_GAP;
        }

        tracing::debug!(
            slide = %slide.id,
            commands = commands.len(),
            sections = sections.len(),
            bottom = cursor - SECTION_GAP,
            "compiled slide"
        );

        CompiledSlide {
            background: BACKGROUND,
            accent,
            commands,
            sections,
        }
    }
}

impl Default for SlideCompiler {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}

/// Compile one slide for a canvas `canvas_width` units wide.
pub fn compile(slide: &Slide, index: usize, canvas_width: f64) -> CompiledSlide {
    let canvas = Canvas {
        width: canvas_width,
        ..Canvas::default()
    };
    SlideCompiler::new(canvas).compile(index, slide)
}

fn emit_header(
    index: usize,
    slide: &Slide,
    width: f64,
    content_width: f64,
    accent: Color,
    out: &mut Vec<PlacementCommand>,
) {
    out.push(
        ShapeCommand::solid(
            ShapeKind::Rectangle,
            Rect::new(0.0, 0.0, width, HEADER_HEIGHT),
            accent,
        )
        .into(),
    );
    for hero in HERO_SHAPES {
        out.push(
            ShapeCommand::solid(ShapeKind::Ellipse, hero.rect(width), hero.fill)
                .with_rotation(hero.rotation)
                .into(),
        );
    }
    out.push(archetype::single_line(
        format!("Slide {}", index + 1),
        MARGIN_X,
        0.25,
        INDEX_LABEL_WIDTH,
        INDEX_LABEL,
    ));
    out.push(archetype::single_line(
        slide.title.as_str(),
        MARGIN_X,
        1.0,
        content_width,
        TITLE,
    ));
    if let Some(subtitle) = &slide.subtitle {
        out.push(archetype::single_line(
            subtitle.as_str(),
            MARGIN_X,
            1.55,
            content_width,
            SUBTITLE,
        ));
    }
}
