//! Greeklish detection and Greek spelling expansion for search queries.

pub mod classifier;
pub mod converter;
pub mod query;
pub mod settings;
pub mod table;
pub mod tokenizer;
pub mod unicode;

pub use classifier::{classify, is_greeklish, Classification, TextStats, Verdict};
pub use converter::{convert_to_greek_variants, dedup_preserving_order, GreeklishConverter};
pub use query::{
    expand_greeklish_query, expand_greeklish_query_default, is_greek_language,
    prepare_search_query, DEFAULT_MAX_VARIANTS,
};
