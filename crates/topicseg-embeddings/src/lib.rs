//! # topicseg-embeddings
//!
//! Sentence vector representation and vector sources for topic segmentation.
//!
//! The segmentation engine only needs one numeric vector per sentence; this
//! crate defines that vector type and the [`VectorSource`] seam through which
//! embeddings are supplied. Model inference lives behind the seam, outside
//! this workspace. A deterministic bag-of-words source is included for use
//! without a model and as a test double.
//!
//! ## Features
//! - Dense and sparse vectors behind one tagged type
//! - Cosine similarity with degenerate-vector handling
//! - `VectorSource` trait with batch embedding
//! - `TokenCountSource`: deterministic token-count vectors

pub mod error;
pub mod source;
pub mod vector;

pub use error::EmbeddingError;
pub use source::{SimpleTokenizer, TokenCountSource, Tokenizer, VectorSource};
pub use vector::SentenceVector;
