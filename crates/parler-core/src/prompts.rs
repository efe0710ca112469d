//! Prompt templates for the table and challenge pipelines.
//!
//! The interrogative rule ("Est-ce que ...?") is stated in both prompts, but
//! only the table pipeline enforces it locally afterwards; the challenge
//! pipeline trusts the model (see `challenge` module docs).

use crate::catalog::{Pronoun, SentenceStructure, Tense, VerbInfo};

/// Table prompt: one shared complement, all tenses, all structures.
pub const TABLE_TEMPLATE: &str = r#"You are a French teacher.
Task: Generate a complete list of French sentences for the Pronoun "{pronoun}" and the Verb "{verb}".

1. First, choose ONE natural, simple complement (e.g., "une pomme", "au cinéma", "demain") that fits this verb nicely.
2. Use EXACTLY the same complement for ALL sentences to show the grammatical changes clearly.
3. Generate sentences for ALL of the following tenses: {tenses}.
4. For EACH tense, generate the sentence in ALL 3 structures: {structures}.

CRITICAL RULES FOR STRUCTURES:
- Affirmative: Standard Subject + Verb structure.
- Négative: Use "ne ... pas" around the conjugated verb.
- Interrogative: YOU MUST ALWAYS START WITH "Est-ce que" (or "Est-ce qu'" before a vowel).
  - Example: "Est-ce que tu manges ?"
  - Example: "Est-ce qu'il aime ?"
  - Do NOT use inversion (e.g., "Manges-tu ?").
  - ALWAYS end with a question mark "?".

Output must be a JSON array where each item represents a Tense, containing an array of variations (structure + text)."#;

/// Challenge prompt: one sentence for a fixed (pronoun, verb, tense, structure) tuple.
pub const CHALLENGE_TEMPLATE: &str = r#"Create a challenge for a French student.
Parameters:
- Pronoun: {pronoun}
- Verb: {verb}
- Tense: {tense}
- Structure: {structure}

Task:
1. Create a grammatically correct French sentence using these parameters with a suitable complement.
2. If the structure is 'Interrogative', you MUST use the form starting with "Est-ce que" (or "Est-ce qu'") and end with "?".
3. Extract that specific complement.

Output JSON format:
{
  "complement": "the complement used (in French)",
  "fullSentence": "the full french sentence"
}"#;

fn join_labels<I: IntoIterator<Item = &'static str>>(labels: I) -> String {
    labels.into_iter().collect::<Vec<_>>().join(", ")
}

/// Build the table prompt for the given pair.
pub fn table_prompt(pronoun: Pronoun, verb: &VerbInfo) -> String {
    TABLE_TEMPLATE
        .replace("{pronoun}", pronoun.label())
        .replace("{verb}", &verb.infinitive)
        .replace("{tenses}", &join_labels(Tense::ALL.map(|t| t.label())))
        .replace(
            "{structures}",
            &join_labels(SentenceStructure::ALL.map(|s| s.label())),
        )
}

/// Build the challenge prompt for the given tuple.
pub fn challenge_prompt(
    pronoun: Pronoun,
    verb: &VerbInfo,
    tense: Tense,
    structure: SentenceStructure,
) -> String {
    CHALLENGE_TEMPLATE
        .replace("{pronoun}", pronoun.label())
        .replace("{verb}", &verb.infinitive)
        .replace("{tense}", tense.label())
        .replace("{structure}", structure.label())
}
