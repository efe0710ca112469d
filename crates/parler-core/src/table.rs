//! Sentence-table pipeline: full tense/structure table for a (pronoun, verb)
//! pair, with local enforcement of the "Est-ce que" interrogative rule.

use crate::catalog::{Pronoun, SentenceStructure, Tense, TenseGroup, VerbInfo};
use crate::error::CoreResult;
use crate::gemini::GeminiClient;
use crate::prompts;
use crate::schema::Schema;
use tracing::info;

/// Schema for the table response: array of {tense, variations: [{structure, text}]}.
fn table_schema() -> Schema {
    Schema::array(Schema::object([
        (
            "tense",
            Schema::string_enum(Tense::ALL.map(|t| t.label())),
        ),
        (
            "variations",
            Schema::array(Schema::object([
                (
                    "structure",
                    Schema::string_enum(SentenceStructure::ALL.map(|s| s.label())),
                ),
                ("text", Schema::string()),
            ])),
        ),
    ]))
}

/// Generate the normalized table. An empty response body is a valid empty
/// table; a malformed body is fatal.
pub async fn generate_table(
    client: &GeminiClient,
    pronoun: Pronoun,
    verb: &VerbInfo,
) -> CoreResult<Vec<TenseGroup>> {
    let prompt = prompts::table_prompt(pronoun, verb);
    let raw = client.generate(&prompt, Some(table_schema())).await?;
    let groups = parse_table(&raw)?;
    info!(%pronoun, verb = %verb.infinitive, tenses = groups.len(), "table generated");
    Ok(groups)
}

/// Parse and normalize a table response body. Split from the network call so
/// the empty/malformed contracts are unit-testable.
pub fn parse_table(raw: &str) -> CoreResult<Vec<TenseGroup>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut groups: Vec<TenseGroup> = serde_json::from_str(raw)?;
    for group in &mut groups {
        for variation in &mut group.variations {
            if variation.structure == SentenceStructure::Interrogative {
                variation.text = normalize_interrogative(&variation.text);
            }
        }
    }
    Ok(groups)
}

/// Force an interrogative sentence into the periphrastic "Est-ce que ... ?"
/// form. Idempotent; affirmative/negative texts never pass through here.
///
/// Only a trailing '?' or '.' is stripped before the final '?' is appended,
/// so a sentence ending in '!' keeps it and gains "!?". Observed behavior,
/// kept as-is until product intent says otherwise.
pub fn normalize_interrogative(text: &str) -> String {
    let mut clean = text.trim().to_string();
    if clean.ends_with('?') || clean.ends_with('.') {
        clean.pop();
    }
    let lower = clean.to_lowercase();
    if !lower.starts_with("est-ce que") && !lower.starts_with("est-ce qu'") {
        // Lowercase only the first char; the rest of the sentence is not re-cased.
        let mut chars = clean.chars();
        let first = chars
            .next()
            .map(|c| c.to_lowercase().to_string())
            .unwrap_or_default();
        clean = format!("Est-ce que {first}{}", chars.as_str());
    }
    clean.push('?');
    clean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SentenceVariation;

    #[test]
    fn prepends_marker_and_question_mark() {
        assert_eq!(
            normalize_interrogative("Tu manges une pomme"),
            "Est-ce que tu manges une pomme?"
        );
    }

    #[test]
    fn strips_a_trailing_period_before_rewriting() {
        assert_eq!(
            normalize_interrogative("Il aime le chocolat."),
            "Est-ce que il aime le chocolat?"
        );
    }

    #[test]
    fn keeps_an_already_correct_sentence() {
        assert_eq!(
            normalize_interrogative("Est-ce que tu manges une pomme ?"),
            "Est-ce que tu manges une pomme ?"
        );
        assert_eq!(
            normalize_interrogative("Est-ce qu'il aime le chocolat?"),
            "Est-ce qu'il aime le chocolat?"
        );
    }

    #[test]
    fn is_idempotent() {
        let once = normalize_interrogative("Nous parlons français.");
        let twice = normalize_interrogative(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "Est-ce que nous parlons français?");
    }

    #[test]
    fn lowercases_only_the_first_char() {
        assert_eq!(
            normalize_interrogative("Vous Aimez Paris"),
            "Est-ce que vous Aimez Paris?"
        );
    }

    #[test]
    fn handles_accented_first_chars() {
        assert_eq!(
            normalize_interrogative("Êtes venus hier"),
            "Est-ce que êtes venus hier?"
        );
    }

    // Pins the known quirk: '!' is not stripped, so the sentence gains "!?".
    #[test]
    fn exclamation_mark_survives_and_gains_a_question_mark() {
        assert_eq!(
            normalize_interrogative("Il aime le chocolat!"),
            "Est-ce que il aime le chocolat!?"
        );
    }

    #[test]
    fn empty_body_is_a_valid_empty_table() {
        assert!(parse_table("").unwrap().is_empty());
        assert!(parse_table("   \n").unwrap().is_empty());
    }

    #[test]
    fn malformed_body_is_fatal() {
        assert!(parse_table("not json").is_err());
        assert!(parse_table("{\"tense\": \"Présent\"}").is_err());
        // Valid JSON, label outside the closed tense set.
        assert!(parse_table(r#"[{"tense": "Subjonctif", "variations": []}]"#).is_err());
    }

    #[test]
    fn only_interrogative_variations_are_rewritten() {
        let raw = r#"[{
            "tense": "Présent",
            "variations": [
                { "structure": "Affirmative", "text": "Tu manges une pomme." },
                { "structure": "Négative", "text": "Tu ne manges pas une pomme." },
                { "structure": "Interrogative", "text": "Manges-tu une pomme ?" }
            ]
        }]"#;
        let groups = parse_table(raw).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tense, Tense::Present);
        assert_eq!(
            groups[0].variations[0],
            SentenceVariation {
                structure: SentenceStructure::Affirmative,
                text: "Tu manges une pomme.".to_string(),
            }
        );
        assert_eq!(
            groups[0].variations[1].text,
            "Tu ne manges pas une pomme."
        );
        // Only the trailing '?' is stripped; the space before it survives.
        assert_eq!(
            groups[0].variations[2].text,
            "Est-ce que manges-tu une pomme ?"
        );
    }

    #[test]
    fn upstream_ordering_is_preserved() {
        let raw = r#"[
            {"tense": "Futur simple", "variations": []},
            {"tense": "Présent", "variations": []}
        ]"#;
        let groups = parse_table(raw).unwrap();
        assert_eq!(groups[0].tense, Tense::FuturSimple);
        assert_eq!(groups[1].tense, Tense::Present);
    }

    #[test]
    fn table_schema_constrains_tense_labels() {
        let value = serde_json::to_value(table_schema()).unwrap();
        let tense_enum = &value["items"]["properties"]["tense"]["enum"];
        assert_eq!(tense_enum.as_array().unwrap().len(), 6);
        assert!(tense_enum
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("Passé composé")));
    }
}
