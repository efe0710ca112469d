//! parler-core: the conjugation-practice engine.
//!
//! Three pipelines share one authenticated Gemini gateway:
//! - `table`: a full tense/structure sentence table for a (pronoun, verb) pair,
//!   with strict interrogative normalization ("Est-ce que ... ?").
//! - `challenge`: one randomized exercise tuple plus its AI-generated answer.
//! - `export`: plain-text serialization of a generated table.
//!
//! Speech playback lives in the sibling `parler-voice` crate; it reuses the
//! gateway here for synthesis requests.

pub mod catalog;
pub mod challenge;
pub mod error;
pub mod export;
pub mod gemini;
pub mod prompts;
pub mod schema;
pub mod table;

pub use catalog::{
    random_challenge_params, ChallengeData, Pronoun, SentenceStructure, SentenceVariation,
    Tense, TenseGroup, VerbInfo,
};
pub use challenge::generate_challenge;
pub use error::{CoreError, CoreResult};
pub use gemini::GeminiClient;
pub use schema::Schema;
pub use table::{generate_table, normalize_interrogative};
