//! # topicseg-extract
//!
//! Keyword-anchored context extraction over segmented text.
//!
//! A unit (paragraph) is split into sentences, every sentence carrying a
//! configured keyword becomes an anchor, the unit is topically segmented, and
//! each anchor yields the maximal contiguous run of sentences sharing its
//! topic label. Runs are deduplicated in encounter order.
//!
//! Sentence splitting and sentence embedding are injected collaborators
//! ([`SentenceSplitter`], `VectorSource`), so callers can substitute a
//! trained embedder or a deterministic fake.

pub mod config;
pub mod error;
pub mod extractor;
pub mod sentence;

pub use config::ExtractConfig;
pub use error::ExtractError;
pub use extractor::{Anchor, KeywordContextExtractor};
pub use sentence::{RuleSentenceSplitter, SentenceSplitter};
