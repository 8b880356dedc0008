//! Subcommands.

use clap::{Subcommand, ValueEnum};
use textproc_fetch::{GenerateKind, GenerateQuery, Gender};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate drug names from a character Markov chain
    Drugs {
        /// Number of names to generate
        #[arg(short = 'n', long, default_value_t = 20)]
        count: u32,
        /// Markov chain order (service default: 2)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        order: Option<u8>,
    },

    /// Generate insults
    Insults {
        /// Number of insults to generate
        #[arg(short = 'n', long, default_value_t = 20)]
        count: u32,
    },

    /// Generate band names
    Bands {
        /// Number of band names to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        count: u32,
    },

    /// Generate first names from a character Markov chain
    FirstNames {
        /// Number of names to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        count: u32,
        /// Markov chain order (service default: 2)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        order: Option<u8>,
        /// Name list to learn from (service default: female)
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },

    /// Print a fortune
    Fortune,

    /// Generate madlibs
    Madlib {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },

    /// Generate poems
    Poem {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },

    /// Generate text from a part-of-speech pattern
    Pattern {
        /// Pattern to expand (e.g. "JJ NN")
        pattern: String,
        /// Number of results
        #[arg(short = 'n', long, default_value_t = 5)]
        count: u32,
    },

    /// Send a raw JSON request and print the classified outcome
    Get {
        /// Absolute URL to request
        url: String,
        /// HTTP method
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,
        /// Request body, sent verbatim
        #[arg(short = 'd', long)]
        data: Option<String>,
        /// Extra header as 'Name: value' (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },
}

/// `--gender` values.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenderArg {
    Female,
    Male,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Female => Self::Female,
            GenderArg::Male => Self::Male,
        }
    }
}

impl Commands {
    /// The generator request for generator subcommands; `None` for `pattern`
    /// and `get`.
    pub fn generate_query(&self) -> Option<GenerateQuery> {
        let query = match *self {
            Self::Drugs { count, order } => {
                with_order(GenerateQuery::new(GenerateKind::DrugNames, count), order)
            }
            Self::Insults { count } => GenerateQuery::new(GenerateKind::Insults, count),
            Self::Bands { count } => GenerateQuery::new(GenerateKind::Bands, count),
            Self::FirstNames {
                count,
                order,
                gender,
            } => {
                let query = with_order(GenerateQuery::new(GenerateKind::FirstNames, count), order);
                match gender {
                    Some(gender) => query.with_gender(gender.into()),
                    None => query,
                }
            }
            Self::Fortune => GenerateQuery::new(GenerateKind::Fortune, 1),
            Self::Madlib { count } => GenerateQuery::new(GenerateKind::Madlib, count),
            Self::Poem { count } => GenerateQuery::new(GenerateKind::Poem, count),
            Self::Pattern { .. } | Self::Get { .. } => return None,
        };
        Some(query)
    }
}

const fn with_order(query: GenerateQuery, order: Option<u8>) -> GenerateQuery {
    match order {
        Some(order) => query.with_order(order),
        None => query,
    }
}
