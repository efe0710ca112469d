//! Challenge pipeline: one generated exercise for a sampled
//! (pronoun, verb, tense, structure) tuple.
//!
//! Unlike the table pipeline, no local interrogative normalization is applied
//! here; the prompt states the "Est-ce que" rule and the model is trusted to
//! follow it. That asymmetry is inherited behavior and kept deliberately.

use crate::catalog::{ChallengeData, Pronoun, SentenceStructure, Tense, VerbInfo};
use crate::error::{CoreError, CoreResult};
use crate::gemini::GeminiClient;
use crate::prompts;
use crate::schema::Schema;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct ChallengeWire {
    complement: String,
    #[serde(rename = "fullSentence")]
    full_sentence: String,
}

fn challenge_schema() -> Schema {
    Schema::object([
        ("complement", Schema::string()),
        ("fullSentence", Schema::string()),
    ])
}

/// Generate one challenge answer for the given tuple. An empty response body
/// is fatal here: an exercise without an answer is a failed fetch, not an
/// empty result.
pub async fn generate_challenge(
    client: &GeminiClient,
    pronoun: Pronoun,
    verb: &VerbInfo,
    tense: Tense,
    structure: SentenceStructure,
) -> CoreResult<ChallengeData> {
    let prompt = prompts::challenge_prompt(pronoun, verb, tense, structure);
    let raw = client.generate(&prompt, Some(challenge_schema())).await?;
    let data = parse_challenge(&raw, pronoun, verb, tense, structure)?;
    info!(%pronoun, verb = %verb.infinitive, %tense, %structure, "challenge generated");
    Ok(data)
}

/// Parse a challenge response body. Split from the network call so the
/// empty-body contract is unit-testable.
pub fn parse_challenge(
    raw: &str,
    pronoun: Pronoun,
    verb: &VerbInfo,
    tense: Tense,
    structure: SentenceStructure,
) -> CoreResult<ChallengeData> {
    if raw.trim().is_empty() {
        return Err(CoreError::EmptyResponse);
    }
    let wire: ChallengeWire = serde_json::from_str(raw)?;
    if wire.full_sentence.trim().is_empty() {
        return Err(CoreError::EmptyResponse);
    }
    Ok(ChallengeData {
        pronoun,
        verb: verb.clone(),
        tense,
        structure,
        complement: wire.complement,
        full_sentence: wire.full_sentence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple() -> (Pronoun, VerbInfo, Tense, SentenceStructure) {
        (
            Pronoun::Tu,
            VerbInfo::by_infinitive("parler").unwrap(),
            Tense::Present,
            SentenceStructure::Affirmative,
        )
    }

    #[test]
    fn empty_body_is_fatal() {
        let (p, v, t, s) = tuple();
        assert!(matches!(
            parse_challenge("", p, &v, t, s),
            Err(CoreError::EmptyResponse)
        ));
    }

    #[test]
    fn blank_sentence_is_fatal() {
        let (p, v, t, s) = tuple();
        let raw = r#"{"complement": "une pomme", "fullSentence": "  "}"#;
        assert!(matches!(
            parse_challenge(raw, p, &v, t, s),
            Err(CoreError::EmptyResponse)
        ));
    }

    #[test]
    fn malformed_body_is_fatal() {
        let (p, v, t, s) = tuple();
        assert!(matches!(
            parse_challenge(r#"{"complement": "une pomme"}"#, p, &v, t, s),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn valid_body_carries_the_tuple_through() {
        let (p, v, t, s) = tuple();
        let raw = r#"{"complement": "une pomme", "fullSentence": "Tu manges une pomme."}"#;
        let data = parse_challenge(raw, p, &v, t, s).unwrap();
        assert_eq!(data.pronoun, p);
        assert_eq!(data.verb, v);
        assert_eq!(data.complement, "une pomme");
        assert_eq!(data.full_sentence, "Tu manges une pomme.");
    }

    // The asymmetry with the table pipeline: an inverted interrogative from
    // the model is passed through untouched here.
    #[test]
    fn no_interrogative_normalization_is_applied() {
        let (p, v, t, _) = tuple();
        let raw = r#"{"complement": "une pomme", "fullSentence": "Manges-tu une pomme ?"}"#;
        let data =
            parse_challenge(raw, p, &v, t, SentenceStructure::Interrogative).unwrap();
        assert_eq!(data.full_sentence, "Manges-tu une pomme ?");
    }

    #[test]
    fn challenge_schema_lists_both_fields() {
        let value = serde_json::to_value(challenge_schema()).unwrap();
        assert_eq!(
            value["required"],
            serde_json::json!(["complement", "fullSentence"])
        );
    }
}
