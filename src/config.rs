//! Export configuration.
//!
//! The binary fills this from command line flags and environment variables;
//! library callers can start from [`ExportConfig::default`].

use crate::common::{Error, Result};
use crate::export::DECK_FILE_NAME;
use crate::layout::{CANVAS_HEIGHT, Canvas};
use std::path::PathBuf;

/// Where and how the deck is exported.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory the artifact is saved into
    pub output_dir: PathBuf,
    /// Canvas the slides are compiled against
    pub canvas: Canvas,
    /// File name of the saved artifact
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            canvas: Canvas::default(),
            file_name: DECK_FILE_NAME.to_string(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Use a canvas `width` units wide. The height stays at the 16:9 default.
    #[must_use]
    pub fn with_canvas_width(mut self, width: f64) -> Self {
        self.canvas = Canvas::new(width, CANVAS_HEIGHT);
        self
    }

    /// Full path of the artifact once saved.
    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Reject settings that cannot produce a usable deck.
    pub fn validate(&self) -> Result<()> {
        let Canvas { width, height } = self.canvas;
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(Error::Other(format!(
                "canvas must have a positive size, got {width} x {height}"
            )));
        }
        if self.file_name.is_empty() || self.file_name.contains(['/', '\\']) {
            return Err(Error::Other(format!(
                "invalid artifact file name: {:?}",
                self.file_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.canvas, Canvas::new(10.0, 5.625));
        assert_eq!(config.file_name, "Acid-Fast-Staining-Showcase.pptx");
        assert_eq!(
            config.target_path(),
            PathBuf::from("./Acid-Fast-Staining-Showcase.pptx")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_canvas_width_override() {
        let config = ExportConfig::default().with_canvas_width(13.333);
        assert_eq!(config.canvas.width, 13.333);
        assert_eq!(config.canvas.height, CANVAS_HEIGHT);
    }

    #[test]
    fn test_validate_rejects_bad_canvas() {
        assert!(ExportConfig::default().with_canvas_width(0.0).validate().is_err());
        assert!(
            ExportConfig::default()
                .with_canvas_width(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_validate_rejects_nested_file_name() {
        let config = ExportConfig {
            file_name: "decks/out.pptx".to_string(),
            ..ExportConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
