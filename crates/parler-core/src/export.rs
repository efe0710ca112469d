//! Plain-text export of a generated table: header with date/pronoun/verb,
//! then a bracketed heading per tense and one indented line per structure.

use crate::catalog::{Pronoun, TenseGroup, VerbInfo};
use crate::error::CoreResult;
use std::path::Path;

/// Serialize a table to the export text shape.
pub fn table_to_text(pronoun: Pronoun, verb: &VerbInfo, groups: &[TenseGroup]) -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    let mut out = String::new();
    out.push_str(&format!("Conjugation practice - {date}\n"));
    out.push_str(&format!("Pronoun: {pronoun}\n"));
    out.push_str(&format!(
        "Verb: {} (participle: {})\n\n",
        verb.infinitive, verb.participle
    ));
    for group in groups {
        out.push_str(&format!("[{}]\n", group.tense));
        for variation in &group.variations {
            out.push_str(&format!("  - {}: {}\n", variation.structure, variation.text));
        }
        out.push('\n');
    }
    out
}

/// Write the export to a UTF-8 text file.
pub fn write_table_file(
    path: &Path,
    pronoun: Pronoun,
    verb: &VerbInfo,
    groups: &[TenseGroup],
) -> CoreResult<()> {
    std::fs::write(path, table_to_text(pronoun, verb, groups))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SentenceStructure, SentenceVariation, Tense};

    fn sample_groups() -> Vec<TenseGroup> {
        vec![TenseGroup {
            tense: Tense::Present,
            variations: vec![
                SentenceVariation {
                    structure: SentenceStructure::Affirmative,
                    text: "Tu parles français.".to_string(),
                },
                SentenceVariation {
                    structure: SentenceStructure::Interrogative,
                    text: "Est-ce que tu parles français?".to_string(),
                },
            ],
        }]
    }

    #[test]
    fn export_has_header_headings_and_lines() {
        let verb = VerbInfo::by_infinitive("parler").unwrap();
        let text = table_to_text(Pronoun::Tu, &verb, &sample_groups());
        assert!(text.contains("Pronoun: Tu\n"));
        assert!(text.contains("Verb: parler (participle: parlé)\n"));
        assert!(text.contains("[Présent]\n"));
        assert!(text.contains("  - Affirmative: Tu parles français.\n"));
        assert!(text.contains("  - Interrogative: Est-ce que tu parles français?\n"));
    }

    #[test]
    fn export_writes_a_utf8_file() {
        let verb = VerbInfo::by_infinitive("être").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.txt");
        write_table_file(&path, Pronoun::Je, &verb, &sample_groups()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Verb: être (participle: été)"));
    }
}
