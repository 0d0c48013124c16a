use super::artifact::{Artifact, DECK_FILE_NAME};
use super::writer::DeckWriter;
use crate::common::Result;
use crate::config::ExportConfig;
use crate::content::Deck;
use crate::layout::{Canvas, SlideCompiler};
use parking_lot::Mutex;

/// Whether an export is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
}

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Completed(Artifact),
    /// Another export was already in flight; nothing was compiled or written
    Busy,
}

impl ExportOutcome {
    pub fn artifact(&self) -> Option<&Artifact> {
        match self {
            Self::Completed(artifact) => Some(artifact),
            Self::Busy => None,
        }
    }
}

/// Serializes export requests and drives the compile-then-write pipeline.
#[derive(Debug)]
pub struct ExportController {
    state: Mutex<ExportState>,
    compiler: SlideCompiler,
    file_name: String,
}

/// Marks the controller busy for as long as it lives.
struct InFlight<'a> {
    state: &'a Mutex<ExportState>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.state.lock() = ExportState::Idle;
    }
}

impl ExportController {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            state: Mutex::new(ExportState::Idle),
            compiler: SlideCompiler::new(canvas),
            file_name: DECK_FILE_NAME.to_string(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            file_name: config.file_name.clone(),
            ..Self::new(config.canvas)
        }
    }

    pub fn state(&self) -> ExportState {
        *self.state.lock()
    }

    pub fn is_exporting(&self) -> bool {
        self.state() == ExportState::Exporting
    }

    pub fn canvas(&self) -> Canvas {
        self.compiler.canvas()
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        let mut state = self.state.lock();
        match *state {
            ExportState::Exporting => None,
            ExportState::Idle => {
                *state = ExportState::Exporting;
                Some(InFlight { state: &self.state })
            },
        }
    }

    /// Compile every slide of `deck` and serialize it through `writer`.
    ///
    /// Returns [`ExportOutcome::Busy`] without touching `writer` when another
    /// export is in flight. The controller returns to idle on every exit path,
    /// including writer errors.
    pub fn export<W>(&self, deck: &Deck, writer: &mut W) -> Result<ExportOutcome>
    where
        W: DeckWriter + ?Sized,
    {
        let Some(_in_flight) = self.try_begin() else {
            tracing::warn!("export requested while another export is in flight");
            return Ok(ExportOutcome::Busy);
        };

        writer.begin_deck(self.compiler.canvas())?;
        for (index, slide) in deck.slides().iter().enumerate() {
            let compiled = self.compiler.compile(index, slide);
            writer.begin_slide(compiled.background)?;
            for command in &compiled.commands {
                writer.place(command)?;
            }
        }
        let bytes = writer.finish()?;

        tracing::info!(
            slides = deck.len(),
            bytes = bytes.len(),
            file = %self.file_name,
            "exported deck"
        );
        Ok(ExportOutcome::Completed(Artifact::new(
            self.file_name.as_str(),
            bytes,
        )))
    }
}

impl Default for ExportController {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::layout::{Color, PlacementCommand};
    use crate::ooxml::pptx::MutablePresentation;

    /// Records the call sequence instead of serializing.
    #[derive(Default)]
    struct RecordingWriter {
        canvas: Option<Canvas>,
        backgrounds: Vec<Color>,
        commands_per_slide: Vec<usize>,
        finished: bool,
    }

    impl DeckWriter for RecordingWriter {
        fn begin_deck(&mut self, canvas: Canvas) -> Result<()> {
            self.canvas = Some(canvas);
            Ok(())
        }

        fn begin_slide(&mut self, background: Color) -> Result<()> {
            self.backgrounds.push(background);
            self.commands_per_slide.push(0);
            Ok(())
        }

        fn place(&mut self, _command: &PlacementCommand) -> Result<()> {
            match self.commands_per_slide.last_mut() {
                Some(count) => {
                    *count += 1;
                    Ok(())
                },
                None => Err(Error::Export("place before begin_slide".to_string())),
            }
        }

        fn finish(&mut self) -> Result<Vec<u8>> {
            self.finished = true;
            Ok(vec![0xAF])
        }
    }

    /// Issues a nested export from inside the first one.
    struct ReentrantWriter<'a> {
        controller: &'a ExportController,
        deck: &'a Deck,
        nested: Option<ExportOutcome>,
    }

    impl DeckWriter for ReentrantWriter<'_> {
        fn begin_slide(&mut self, _background: Color) -> Result<()> {
            if self.nested.is_none() {
                let mut inner = RecordingWriter::default();
                self.nested = Some(self.controller.export(self.deck, &mut inner)?);
                assert!(inner.backgrounds.is_empty());
            }
            Ok(())
        }

        fn place(&mut self, _command: &PlacementCommand) -> Result<()> {
            Ok(())
        }

        fn finish(&mut self) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    struct FailingWriter;

    impl DeckWriter for FailingWriter {
        fn begin_slide(&mut self, _background: Color) -> Result<()> {
            Ok(())
        }

        fn place(&mut self, _command: &PlacementCommand) -> Result<()> {
            Err(Error::Export("disk on fire".to_string()))
        }

        fn finish(&mut self) -> Result<Vec<u8>> {
            unreachable!("place always fails")
        }
    }

    #[test]
    fn test_export_drives_writer_per_slide() {
        let deck = Deck::builtin().unwrap();
        let controller = ExportController::default();
        let mut writer = RecordingWriter::default();

        let outcome = controller.export(&deck, &mut writer).unwrap();
        let artifact = outcome.artifact().unwrap();
        assert_eq!(artifact.file_name(), DECK_FILE_NAME);
        assert_eq!(artifact.bytes(), [0xAFu8]);

        assert_eq!(writer.canvas, Some(Canvas::default()));
        assert_eq!(writer.backgrounds.len(), 8);
        assert!(writer.commands_per_slide.iter().all(|&n| n > 0));
        assert!(writer.finished);
        assert_eq!(controller.state(), ExportState::Idle);
    }

    #[test]
    fn test_request_while_exporting_is_busy() {
        let deck = Deck::builtin().unwrap();
        let controller = ExportController::default();
        let mut writer = ReentrantWriter {
            controller: &controller,
            deck: &deck,
            nested: None,
        };

        let outcome = controller.export(&deck, &mut writer).unwrap();
        assert!(matches!(outcome, ExportOutcome::Completed(_)));
        assert_eq!(writer.nested, Some(ExportOutcome::Busy));
        assert_eq!(controller.state(), ExportState::Idle);
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let deck = Deck::builtin().unwrap();
        let controller = ExportController::default();

        let err = controller.export(&deck, &mut FailingWriter).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
        assert!(!controller.is_exporting());

        // A later request proceeds normally
        let mut writer = RecordingWriter::default();
        let outcome = controller.export(&deck, &mut writer).unwrap();
        assert!(outcome.artifact().is_some());
    }

    #[test]
    fn test_concurrent_requests_admit_one_at_a_time() {
        let controller = ExportController::default();
        let first = controller.try_begin();
        assert!(first.is_some());
        assert!(controller.is_exporting());
        assert!(controller.try_begin().is_none());
        drop(first);
        assert!(controller.try_begin().is_some());
    }

    #[test]
    fn test_export_through_pptx_writer() {
        let deck = Deck::builtin().unwrap();
        let config = ExportConfig::default();
        let controller = ExportController::from_config(&config);
        let mut writer = MutablePresentation::new();

        let outcome = controller.export(&deck, &mut writer).unwrap();
        let artifact = outcome.artifact().unwrap();
        assert!(artifact.bytes().starts_with(b"PK"));

        let dir = tempfile::tempdir().unwrap();
        let path = artifact.save_in(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(&config.file_name));
    }

    #[test]
    fn test_export_accepts_trait_objects() {
        let deck = Deck::builtin().unwrap();
        let controller = ExportController::default();
        let mut writer = RecordingWriter::default();
        let dyn_writer: &mut dyn DeckWriter = &mut writer;
        assert!(controller.export(&deck, dyn_writer).is_ok());
    }
}
