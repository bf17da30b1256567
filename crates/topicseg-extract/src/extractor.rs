//! Keyword-anchored context extraction.
//!
//! Orchestrates the per-unit pipeline: sentence splitting, anchor scanning,
//! embedding, segmentation, labeling, and run collection. Units are
//! independent; a unit that fails to embed or segment is skipped with a
//! warning and contributes no runs.

use tracing::{debug, warn};

use topicseg_core::{labels_from_mask, segment_boundaries};
use topicseg_embeddings::{EmbeddingError, VectorSource};

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::sentence::SentenceSplitter;

/// A sentence containing a keyword, identified by unit and sentence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub unit: usize,
    pub sentence: usize,
}

/// The maximal contiguous run of sentences sharing the label at `sentence`.
///
/// `labels` is non-decreasing, so equal labels form one contiguous run.
/// Fails if the anchor sentence is out of range or the labels do not cover
/// the sentences.
pub fn label_run(
    sentences: &[String],
    labels: &[usize],
    sentence: usize,
) -> Result<Vec<String>, ExtractError> {
    if sentence >= labels.len() || labels.len() != sentences.len() {
        return Err(ExtractError::AnchorOutOfRange {
            sentence,
            len: labels.len(),
        });
    }
    let target = labels[sentence];
    Ok(sentences
        .iter()
        .zip(labels.iter())
        .filter(|(_, &label)| label == target)
        .map(|(s, _)| s.clone())
        .collect())
}

/// Extracts the sentence runs surrounding keyword occurrences.
pub struct KeywordContextExtractor {
    config: ExtractConfig,
    splitter: Box<dyn SentenceSplitter>,
    source: Box<dyn VectorSource>,
}

impl KeywordContextExtractor {
    pub fn new(
        config: ExtractConfig,
        splitter: Box<dyn SentenceSplitter>,
        source: Box<dyn VectorSource>,
    ) -> Self {
        Self {
            config,
            splitter,
            source,
        }
    }

    fn sentence_has_keyword(&self, sentence: &str) -> bool {
        // Case-sensitive substring match against the raw sentence text.
        self.config
            .keywords
            .iter()
            .any(|keyword| sentence.contains(keyword.as_str()))
    }

    /// Extract deduplicated keyword-context runs from the given units.
    ///
    /// Each unit is segmented independently. The returned runs appear in
    /// anchor encounter order with exact-content duplicates removed. An
    /// empty keyword set, or no keyword hit anywhere, yields an empty list.
    pub fn extract(&self, units: &[String]) -> Result<Vec<Vec<String>>, ExtractError> {
        self.config.segment.validate()?;

        let mut sentences: Vec<Vec<String>> = Vec::with_capacity(units.len());
        let mut anchors: Vec<Anchor> = Vec::new();
        for (unit, text) in units.iter().enumerate() {
            let unit_sentences = self.splitter.split(text);
            for (sentence, s) in unit_sentences.iter().enumerate() {
                if self.sentence_has_keyword(s) {
                    anchors.push(Anchor { unit, sentence });
                }
            }
            sentences.push(unit_sentences);
        }
        debug!(
            units = units.len(),
            anchors = anchors.len(),
            "Scanned units for keywords"
        );
        if anchors.is_empty() {
            return Ok(Vec::new());
        }

        // Label only the units that contain anchors. A unit whose embedding
        // or segmentation fails is skipped; its siblings still produce runs.
        let mut labels: Vec<Option<Vec<usize>>> = vec![None; units.len()];
        for anchor in &anchors {
            if labels[anchor.unit].is_some() {
                continue;
            }
            match self.label_unit(&sentences[anchor.unit]) {
                Ok(unit_labels) => labels[anchor.unit] = Some(unit_labels),
                Err(error) => {
                    warn!(unit = anchor.unit, %error, "Skipping unit that failed to segment");
                    labels[anchor.unit] = Some(Vec::new());
                }
            }
        }

        let mut runs: Vec<Vec<String>> = Vec::new();
        for anchor in &anchors {
            let Some(unit_labels) = labels[anchor.unit].as_deref() else {
                continue;
            };
            if unit_labels.is_empty() {
                continue; // unit was skipped
            }
            let run = label_run(&sentences[anchor.unit], unit_labels, anchor.sentence)?;
            if !runs.contains(&run) {
                runs.push(run);
            }
        }
        debug!(runs = runs.len(), "Extracted keyword contexts");
        Ok(runs)
    }

    fn label_unit(&self, unit_sentences: &[String]) -> Result<Vec<usize>, ExtractError> {
        let vectors = self.source.embed_batch(unit_sentences)?;
        // A source returning the wrong number of vectors is that unit's
        // failure, not a reason to abort its siblings.
        if vectors.len() != unit_sentences.len() {
            return Err(ExtractError::Embedding(EmbeddingError::Source(format!(
                "batch returned {} vectors for {} sentences",
                vectors.len(),
                unit_sentences.len()
            ))));
        }
        let mask = segment_boundaries(&vectors, &self.config.segment)?;
        Ok(labels_from_mask(&mask))
    }
}
