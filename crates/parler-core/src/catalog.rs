//! Fixed grammatical catalogs: pronouns, verbs, tenses, sentence structures.
//!
//! These sets are closed. The wire labels (serde renames) are the exact French
//! strings the generation schema constrains the model to, so responses
//! deserialize straight into the typed enums; any other label is a
//! malformed-response error.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical subject pronoun. Closed set of 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pronoun {
    Je,
    Tu,
    Il,
    Elle,
    On,
    Nous,
    Vous,
    Ils,
    Elles,
}

impl Pronoun {
    pub const ALL: [Pronoun; 9] = [
        Pronoun::Je,
        Pronoun::Tu,
        Pronoun::Il,
        Pronoun::Elle,
        Pronoun::On,
        Pronoun::Nous,
        Pronoun::Vous,
        Pronoun::Ils,
        Pronoun::Elles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Pronoun::Je => "Je",
            Pronoun::Tu => "Tu",
            Pronoun::Il => "Il",
            Pronoun::Elle => "Elle",
            Pronoun::On => "On",
            Pronoun::Nous => "Nous",
            Pronoun::Vous => "Vous",
            Pronoun::Ils => "Ils",
            Pronoun::Elles => "Elles",
        }
    }

    /// Case-insensitive lookup by label (CLI input).
    pub fn from_label(s: &str) -> Option<Pronoun> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Pronoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verb tense. Closed set of 6, labeled in French on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    #[serde(rename = "Présent")]
    Present,
    #[serde(rename = "Passé composé")]
    PasseCompose,
    #[serde(rename = "Imparfait")]
    Imparfait,
    #[serde(rename = "Plus-que-parfait")]
    PlusQueParfait,
    #[serde(rename = "Futur simple")]
    FuturSimple,
    #[serde(rename = "Futur proche")]
    FuturProche,
}

impl Tense {
    pub const ALL: [Tense; 6] = [
        Tense::Present,
        Tense::PasseCompose,
        Tense::Imparfait,
        Tense::PlusQueParfait,
        Tense::FuturSimple,
        Tense::FuturProche,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tense::Present => "Présent",
            Tense::PasseCompose => "Passé composé",
            Tense::Imparfait => "Imparfait",
            Tense::PlusQueParfait => "Plus-que-parfait",
            Tense::FuturSimple => "Futur simple",
            Tense::FuturProche => "Futur proche",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentence structure. Closed set of 3, labeled in French on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentenceStructure {
    Affirmative,
    #[serde(rename = "Négative")]
    Negative,
    Interrogative,
}

impl SentenceStructure {
    pub const ALL: [SentenceStructure; 3] = [
        SentenceStructure::Affirmative,
        SentenceStructure::Negative,
        SentenceStructure::Interrogative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SentenceStructure::Affirmative => "Affirmative",
            SentenceStructure::Negative => "Négative",
            SentenceStructure::Interrogative => "Interrogative",
        }
    }
}

impl fmt::Display for SentenceStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One verb from the fixed catalog: infinitive plus past participle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbInfo {
    pub infinitive: String,
    pub participle: String,
}

/// The fixed (infinitive, participle) catalog.
const VERB_CATALOG: [(&str, &str); 22] = [
    ("être", "été"),
    ("avoir", "eu"),
    ("faire", "fait"),
    ("aller", "allé"),
    ("dire", "dit"),
    ("pouvoir", "pu"),
    ("vouloir", "voulu"),
    ("savoir", "su"),
    ("voir", "vu"),
    ("venir", "venu"),
    ("prendre", "pris"),
    ("devoir", "dû"),
    ("falloir", "fallu"),
    ("donner", "donné"),
    ("mettre", "mis"),
    ("parler", "parlé"),
    ("penser", "pensé"),
    ("trouver", "trouvé"),
    ("aimer", "aimé"),
    ("comprendre", "compris"),
    ("se souvenir", "souvenu"),
    ("s'en aller", "allé"),
];

impl VerbInfo {
    /// The full fixed catalog, in its canonical order.
    pub fn catalog() -> Vec<VerbInfo> {
        VERB_CATALOG
            .iter()
            .map(|(inf, part)| VerbInfo {
                infinitive: (*inf).to_string(),
                participle: (*part).to_string(),
            })
            .collect()
    }

    /// Lookup by infinitive (CLI input). Exact match on the catalog spelling.
    pub fn by_infinitive(infinitive: &str) -> Option<VerbInfo> {
        let wanted = infinitive.trim();
        VERB_CATALOG
            .iter()
            .find(|(inf, _)| *inf == wanted)
            .map(|(inf, part)| VerbInfo {
                infinitive: (*inf).to_string(),
                participle: (*part).to_string(),
            })
    }
}

/// One generated sentence for a given structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceVariation {
    pub structure: SentenceStructure,
    pub text: String,
}

/// The per-tense unit returned by the table pipeline: one variation per structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseGroup {
    pub tense: Tense,
    pub variations: Vec<SentenceVariation>,
}

/// One generated exercise instance plus its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeData {
    pub pronoun: Pronoun,
    pub verb: VerbInfo,
    pub tense: Tense,
    pub structure: SentenceStructure,
    pub complement: String,
    pub full_sentence: String,
}

/// Sample a challenge tuple: independent uniform draws over each catalog,
/// with replacement, so every pronoun/verb/tense/structure combination is
/// reachable.
pub fn random_challenge_params() -> (Pronoun, VerbInfo, Tense, SentenceStructure) {
    let mut rng = rand::thread_rng();
    let verbs = VerbInfo::catalog();
    let pronoun = Pronoun::ALL[rng.gen_range(0..Pronoun::ALL.len())];
    let verb = verbs[rng.gen_range(0..verbs.len())].clone();
    let tense = Tense::ALL[rng.gen_range(0..Tense::ALL.len())];
    let structure = SentenceStructure::ALL[rng.gen_range(0..SentenceStructure::ALL.len())];
    (pronoun, verb, tense, structure)
}
