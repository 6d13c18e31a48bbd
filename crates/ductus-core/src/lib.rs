#![forbid(unsafe_code)]

//! Stroke-based kerning for text with inline markup (headless).
//!
//! Every glyph is classified by the pen stroke at its left and right edge. The spacing between
//! two neighbours is derived from the weights of the two facing strokes and the font size of the
//! context the text lives in.
//!
//! Pipeline, per context:
//! - [`scanner::scan`] finds tag and entity tokens
//! - [`sequence::build_nodes`] turns the string into character / entity / tag nodes
//! - [`kerning::compute_pairs`] pairs neighbouring characters across tags
//! - [`tracker::OccurrenceTracker`] counts recurring nodes and pairs
//! - [`render::render_markup`] writes span-wrapped markup back out
//!
//! [`Kerner`] runs the whole pipeline and owns the per-context state.

pub mod catalog;
pub mod characters;
pub mod config;
pub mod error;
pub mod generated;
pub mod kerning;
pub mod render;
pub mod scanner;
pub mod sequence;
pub mod strokes;
pub mod tracker;

pub use catalog::{Catalog, CatalogSpec};
pub use config::{KernConfig, KernOptions};
pub use error::{Error, Result};
pub use kerning::{FixedFontSize, FontSizeProvider, LetterSpaceFormat, NodePair};
pub use sequence::{ContextId, Node, NodeKind, Sequence};
pub use tracker::{OccurrenceTracker, TrackerSnapshot};

use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::Arc;

/// Coordinator for a set of contexts.
///
/// The catalog is shared read-only (clone the `Arc` to build several kerners over one catalog);
/// the occurrence tracker and the per-context state belong to this instance alone.
#[derive(Debug, Clone)]
pub struct Kerner {
    catalog: Arc<Catalog>,
    options: KernOptions,
    format: LetterSpaceFormat,
    tracker: OccurrenceTracker,
    originals: IndexMap<ContextId, String>,
    sequences: IndexMap<ContextId, Sequence>,
}

impl Kerner {
    /// Built-in catalog with default options.
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(
            Arc::new(Catalog::builtin()?),
            KernOptions::default(),
        ))
    }

    pub fn with_catalog(catalog: Arc<Catalog>, options: KernOptions) -> Self {
        let format = LetterSpaceFormat::from(&options);
        Self {
            catalog,
            options,
            format,
            tracker: OccurrenceTracker::new(),
            originals: IndexMap::new(),
            sequences: IndexMap::new(),
        }
    }

    /// Built-in catalog with options read from `config` merged over the bundled defaults.
    pub fn from_config(config: &KernConfig) -> Result<Self> {
        let mut merged = generated::default_config();
        merged.deep_merge(config.as_value());
        let options = KernOptions::from_config(&merged)?;
        Ok(Self::with_catalog(Arc::new(Catalog::builtin()?), options))
    }

    pub fn with_options(mut self, options: KernOptions) -> Result<Self> {
        options.validate()?;
        self.format = LetterSpaceFormat::from(&options);
        self.options = options;
        Ok(self)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn options(&self) -> &KernOptions {
        &self.options
    }

    pub fn tracker(&self) -> &OccurrenceTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut OccurrenceTracker {
        &mut self.tracker
    }

    /// Kerns `text` for `context`, replacing any previous sequence and stored original.
    pub fn kern(
        &mut self,
        context: ContextId,
        text: &str,
        fonts: &dyn FontSizeProvider,
    ) -> &Sequence {
        self.originals.insert(context, text.to_string());
        self.run(context, text, fonts)
    }

    /// [`Kerner::kern`] with the configured default font size.
    pub fn kern_default(&mut self, context: ContextId, text: &str) -> &Sequence {
        let fonts = FixedFontSize(self.options.font_size);
        self.kern(context, text, &fonts)
    }

    /// Re-runs the pipeline from the stored original of `context` (never from rendered output).
    pub fn rekern(
        &mut self,
        context: ContextId,
        fonts: &dyn FontSizeProvider,
    ) -> Option<&Sequence> {
        let original = self.originals.get(&context)?.clone();
        Some(self.run(context, &original, fonts))
    }

    /// The original text most recently handed to [`Kerner::kern`] for `context`.
    pub fn restore(&self, context: ContextId) -> Option<&str> {
        self.originals.get(&context).map(String::as_str)
    }

    pub fn sequence(&self, context: ContextId) -> Option<&Sequence> {
        self.sequences.get(&context)
    }

    /// Sequences in first-kerned order.
    pub fn sequences(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.values()
    }

    pub fn render(&self, context: ContextId) -> Option<String> {
        self.sequences
            .get(&context)
            .map(|s| render::render_markup(s, &self.options))
    }

    fn run(&mut self, context: ContextId, text: &str, fonts: &dyn FontSizeProvider) -> &Sequence {
        let sequence = Sequence::build(context, text, &self.catalog, fonts, &self.format);
        tracing::debug!(
            %context,
            nodes = sequence.nodes.len(),
            pairs = sequence.pairs.len(),
            font_size = sequence.font_size,
            "kerned context"
        );

        if self.options.tracking {
            self.tracker.track_sequence(&sequence);
        }

        match self.sequences.entry(context) {
            Entry::Occupied(mut slot) => {
                slot.insert(sequence);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(sequence),
        }
    }
}
