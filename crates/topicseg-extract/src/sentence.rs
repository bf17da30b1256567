//! Rule-based sentence boundary detection.
//!
//! Pattern-and-repair approach: dots that do not end a sentence (decimals,
//! abbreviations, "et al.") are first swapped for placeholder markers, the
//! text is split on sentence enders followed by whitespace, and the markers
//! are swapped back. Tuned for scientific prose, where decimals and
//! abbreviations are the dominant false boundaries.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Placeholder for a protected dot. Uses a zero-width no-break space pair
/// unlikely to occur in natural text.
const DOT: &str = "\u{FEFF}D\u{FEFF}";
/// Placeholder for suspension points (...).
const SUSPENSION: &str = "\u{FEFF}S\u{FEFF}";

static SUSPENSION_POINTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3}").unwrap());

// "et al." never ends the reference to the authors it abbreviates.
static ET_AL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bet al\.").unwrap());

// Floating-point numbers (3.14) and leading decimals (.625).
static FLOAT_POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<number>[0-9]+)\.(?P<decimal>[0-9]+)").unwrap());
static LEADING_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<space>\s)\.(?P<nums>[0-9]+)").unwrap());

// Dotted abbreviations with two or more letters (U.S.A., e.g., i.e.).
static ABBREVIATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:[A-Za-z]\.){2,}").unwrap());

/// Trait for splitting a unit of text into sentences.
///
/// Implementations must be deterministic for a given input.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Regex-protected rule-based splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSentenceSplitter;

impl RuleSentenceSplitter {
    fn protect(text: &str) -> String {
        let mut protected = SUSPENSION_POINTS.replace_all(text, SUSPENSION).into_owned();
        protected = ET_AL
            .replace_all(&protected, |caps: &Captures| {
                caps[0].replace('.', DOT)
            })
            .into_owned();
        protected = FLOAT_POINT
            .replace_all(&protected, |caps: &Captures| {
                format!("{}{}{}", &caps["number"], DOT, &caps["decimal"])
            })
            .into_owned();
        protected = LEADING_DECIMAL
            .replace_all(&protected, |caps: &Captures| {
                format!("{}{}{}", &caps["space"], DOT, &caps["nums"])
            })
            .into_owned();
        protected = ABBREVIATION
            .replace_all(&protected, |caps: &Captures| caps[0].replace('.', DOT))
            .into_owned();
        protected
    }

    fn repair(sentence: &str) -> String {
        sentence.replace(SUSPENSION, "...").replace(DOT, ".")
    }

    /// Split protected text after `.`, `!`, or `?` followed by whitespace.
    fn split_on_enders(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?') {
                let at_break = match chars.peek() {
                    Some(next) => next.is_whitespace(),
                    None => true,
                };
                if at_break {
                    sentences.push(std::mem::take(&mut current));
                    while chars.peek().is_some_and(|next| next.is_whitespace()) {
                        chars.next();
                    }
                }
            }
        }
        if !current.trim().is_empty() {
            sentences.push(current);
        }
        sentences
    }
}

impl SentenceSplitter for RuleSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let protected = Self::protect(text);
        Self::split_on_enders(&protected)
            .into_iter()
            .map(|s| Self::repair(s.trim()))
            .filter(|s| !s.is_empty())
            .collect()
    }
}
