//! Relevance scoring for filtered candidates.
//!
//! Every token is scored independently against the item's lowercased fields and
//! the contributions are summed. Repeated tokens contribute again. A single
//! bonus is added when the whole query is contained in the item name.
//!
//! Per token:
//! - +5: token in category
//! - +3: token in brand
//! - +2: token in name
//!   - +2: token is a whole word of the name
//!   - +1: name starts with token
//! - +1: token in keywords
//!
//! Per item:
//! - +3: every token in name (non-empty queries only)

use crate::catalog::CatalogItem;
use ahash::AHashSet;
use serde::Serialize;
use std::fmt;

pub const CATEGORY_WEIGHT: u32 = 5;
pub const BRAND_WEIGHT: u32 = 3;
pub const NAME_WEIGHT: u32 = 2;
pub const EXACT_WORD_WEIGHT: u32 = 2;
pub const NAME_START_WEIGHT: u32 = 1;
pub const KEYWORDS_WEIGHT: u32 = 1;
pub const ALL_TERMS_IN_NAME_WEIGHT: u32 = 3;

/// A scoring rule that fired for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    Category(String),
    Brand(String),
    Name(String),
    ExactWord(String),
    NameStart(String),
    Keywords(String),
    AllTermsInName,
}

impl MatchReason {
    /// Points this rule contributed.
    pub const fn weight(&self) -> u32 {
        match self {
            Self::Category(_) => CATEGORY_WEIGHT,
            Self::Brand(_) => BRAND_WEIGHT,
            Self::Name(_) => NAME_WEIGHT,
            Self::ExactWord(_) => EXACT_WORD_WEIGHT,
            Self::NameStart(_) => NAME_START_WEIGHT,
            Self::Keywords(_) => KEYWORDS_WEIGHT,
            Self::AllTermsInName => ALL_TERMS_IN_NAME_WEIGHT,
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.weight();
        match self {
            Self::Category(t) => write!(f, "{} in category: +{}", t, weight),
            Self::Brand(t) => write!(f, "{} in brand: +{}", t, weight),
            Self::Name(t) => write!(f, "{} in name: +{}", t, weight),
            Self::ExactWord(t) => write!(f, "{} exact match in name: +{}", t, weight),
            Self::NameStart(t) => write!(f, "{} at start of name: +{}", t, weight),
            Self::Keywords(t) => write!(f, "{} in keywords: +{}", t, weight),
            Self::AllTermsInName => write!(f, "all terms in name: +{}", weight),
        }
    }
}

impl Serialize for MatchReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered record of the rules that fired while scoring one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchTrace(Vec<MatchReason>);

impl MatchTrace {
    pub fn reasons(&self) -> &[MatchReason] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of all recorded weights.
    pub fn total(&self) -> u32 {
        self.0.iter().map(MatchReason::weight).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchReason> {
        self.0.iter()
    }
}

impl fmt::Display for MatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, reason) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", reason)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a MatchTrace {
    type Item = &'a MatchReason;
    type IntoIter = std::slice::Iter<'a, MatchReason>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Receives each rule as it fires.
trait Tally {
    fn record(&mut self, reason: impl FnOnce() -> MatchReason, weight: u32);
}

/// Accumulates only the score.
#[derive(Default)]
struct ScoreOnly(u32);

impl Tally for ScoreOnly {
    fn record(&mut self, _reason: impl FnOnce() -> MatchReason, weight: u32) {
        self.0 += weight;
    }
}

/// Accumulates the score and the trace.
#[derive(Default)]
struct Traced {
    score: u32,
    trace: Vec<MatchReason>,
}

impl Tally for Traced {
    fn record(&mut self, reason: impl FnOnce() -> MatchReason, weight: u32) {
        self.score += weight;
        self.trace.push(reason());
    }
}

fn score_into<T: Tally>(item: &CatalogItem, tokens: &[String], tally: &mut T) {
    if tokens.is_empty() {
        return;
    }

    let name = item.name_lower();
    let category = item.category_lower();
    let brand = item.brand_lower();
    let keywords = item.keywords_lower();

    let name_words: AHashSet<&str> = name.split_whitespace().collect();

    for token in tokens {
        let t = token.as_str();

        if category.contains(t) {
            tally.record(|| MatchReason::Category(token.clone()), CATEGORY_WEIGHT);
        }
        if brand.contains(t) {
            tally.record(|| MatchReason::Brand(token.clone()), BRAND_WEIGHT);
        }
        if name.contains(t) {
            tally.record(|| MatchReason::Name(token.clone()), NAME_WEIGHT);
            if name_words.contains(t) {
                tally.record(|| MatchReason::ExactWord(token.clone()), EXACT_WORD_WEIGHT);
            }
            if name.starts_with(t) {
                tally.record(|| MatchReason::NameStart(token.clone()), NAME_START_WEIGHT);
            }
        }
        if keywords.contains(t) {
            tally.record(|| MatchReason::Keywords(token.clone()), KEYWORDS_WEIGHT);
        }
    }

    // Once per item, not per token.
    if tokens.iter().all(|t| name.contains(t.as_str())) {
        tally.record(|| MatchReason::AllTermsInName, ALL_TERMS_IN_NAME_WEIGHT);
    }
}

/// Score an item against the query tokens, returning the score and its trace.
pub fn score(item: &CatalogItem, tokens: &[String]) -> (u32, MatchTrace) {
    let mut tally = Traced::default();
    score_into(item, tokens, &mut tally);

    let trace = MatchTrace(tally.trace);
    tracing::debug!("Score details for {}: {}", item.name(), trace);

    (tally.score, trace)
}

/// Score an item without building a trace.
pub fn score_value(item: &CatalogItem, tokens: &[String]) -> u32 {
    let mut tally = ScoreOnly::default();
    score_into(item, tokens, &mut tally);
    tally.0
}
