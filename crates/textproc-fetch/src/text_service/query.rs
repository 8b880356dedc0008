//! Generator kinds and query parameters.

use std::fmt;

/// What the service should generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerateKind {
    /// Band names from the `bands` pattern file.
    Bands,
    /// Markov-chain drug names.
    DrugNames,
    /// Markov-chain first names.
    FirstNames,
    Insults,
    /// A single fortune.
    Fortune,
    Madlib,
    Poem,
}

impl GenerateKind {
    /// Path segment the service routes on.
    pub const fn as_path_segment(self) -> &'static str {
        match self {
            Self::Bands => "bands",
            Self::DrugNames => "drugNames",
            Self::FirstNames => "firstNames",
            Self::Insults => "insults",
            Self::Fortune => "fortune",
            Self::Madlib => "madlib",
            Self::Poem => "poem",
        }
    }

    /// Whether the kind is produced from a character Markov chain, which is
    /// the only generator that reads `order` and `gender`.
    pub const fn is_word_producer(self) -> bool {
        matches!(self, Self::DrugNames | Self::FirstNames)
    }
}

impl fmt::Display for GenerateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

/// Name list used for [`GenerateKind::FirstNames`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// A generate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateQuery {
    pub kind: GenerateKind,
    /// Number of items to generate.
    pub count: u32,
    /// Markov chain order; the service defaults to 2.
    pub order: Option<u8>,
    pub gender: Option<Gender>,
}

impl GenerateQuery {
    pub const fn new(kind: GenerateKind, count: u32) -> Self {
        Self {
            kind,
            count,
            order: None,
            gender: None,
        }
    }

    #[must_use]
    pub const fn with_order(mut self, order: u8) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Count actually requested; a fortune is always a single item.
    pub const fn effective_count(&self) -> u32 {
        match self.kind {
            GenerateKind::Fortune => 1,
            _ => self.count,
        }
    }
}
