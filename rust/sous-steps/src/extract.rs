//! Entity extraction: what a single instruction sentence mentions.
//!
//! Given one sentence and the recipe's vocabularies, the [`Extractor`] finds:
//!
//! 1. **Ingredients**, by fuzzy partial-ratio match of every normalized
//!    ingredient name against the sentence, ranked best first.
//! 2. **Tools**, by plain case-insensitive containment.
//! 3. **Actions**, one per token whose lemma is a cooking verb.
//! 4. **Time**, from `<number> <second|minute|hour>` phrases.
//! 5. **Temperature**, from `<number>°F`-style readings and stove heat levels.
//!
//! Nothing here fails: empty vocabularies simply produce empty results.

use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use sous_nlp::{Lemmatizer, Lexicon, PartialRatio, RuleLemmatizer, Score, Similarity, tokenize};
use tracing::trace;

use crate::config::ExtractorConfig;
use crate::model::{Action, IngredientMention, TemperatureSpec, TimeSpec};

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical regex"));

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(seconds?|minutes?|hours?)")
        .expect("valid duration regex")
});

static DURATION_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:-|–|to)\s*(\d+(?:\.\d+)?)\s*(seconds?|minutes?|hours?)")
        .expect("valid duration range regex")
});

static DEGREES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{2,3})\s*(?:°|degrees)\s*[cf]\b").expect("valid degrees regex")
});

static HEAT_LEVEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:(?:over|on|to|at)\s+)?
        (?:
            (?P<med_low>med(?:ium)?[-\s]?low) |
            (?P<med_high>med(?:ium)?[-\s]?high) |
            (?P<low>(?:very\s+)?low) |
            (?P<medium>med(?:ium)?) |
            (?P<high>(?:very\s+)?high)
        )
        (?:[-\s]?heat)?
        \b",
    )
    .expect("valid heat level regex")
});

/// Heat-level capture groups and the token each one produces, in the order
/// they are checked.
const HEAT_LEVELS: &[(&str, &str)] = &[
    ("med_low", "MED_LOW"),
    ("med_high", "MED_HIGH"),
    ("low", "LOW"),
    ("medium", "MEDIUM"),
    ("high", "HIGH"),
];

/// Normalize an ingredient name for matching: lowercase, drop parenthetical
/// asides and punctuation, collapse whitespace.
///
/// Hyphens and apostrophes inside words are kept ("all-purpose").
pub fn normalize_ingredient(name: &str) -> String {
    let lower = name.to_lowercase();
    let without_asides = PARENTHETICAL.replace_all(&lower, " ");
    let cleaned: String = without_asides
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The ingredient and tool names a recipe knows about.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    pub ingredients: Vec<IngredientMention>,
    pub tools: Vec<String>,
}

impl Vocabulary {
    pub fn new(ingredients: Vec<IngredientMention>, tools: Vec<String>) -> Self {
        Vocabulary { ingredients, tools }
    }

    /// Build a vocabulary from bare ingredient names (no quantities).
    pub fn from_names<I, S>(ingredients: I, tools: Vec<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Vocabulary {
            ingredients: ingredients
                .into_iter()
                .map(IngredientMention::named)
                .collect(),
            tools,
        }
    }
}

/// A normalized ingredient name, with the recipe mention it came from (staple
/// ingredients have none).
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    mention: Option<IngredientMention>,
}

/// An ingredient found in a sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientMatch {
    /// The normalized ingredient name.
    pub name: String,
    pub score: Score,
    /// The recipe's listing for this ingredient, with its name normalized.
    pub mention: IngredientMention,
}

/// Everything extracted from one sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub ingredients: Vec<IngredientMention>,
    pub tools: Vec<String>,
    pub actions: Vec<Action>,
    pub time: Option<TimeSpec>,
    pub temperature: Option<TemperatureSpec>,
}

/// Finds ingredients, tools, actions, time and temperature in a sentence.
pub struct Extractor {
    entries: Vec<Entry>,
    tools: Vec<String>,
    threshold: f64,
    lexicon: Lexicon,
    lemmatizer: Rc<dyn Lemmatizer>,
    similarity: Rc<dyn Similarity>,
}

impl Extractor {
    pub fn new(vocabulary: Vocabulary, config: &ExtractorConfig) -> Self {
        let mut entries: Vec<Entry> = Vec::new();
        for mention in vocabulary.ingredients {
            let name = normalize_ingredient(&mention.name);
            if name.is_empty() || entries.iter().any(|e| e.name == name) {
                continue;
            }
            entries.push(Entry {
                mention: Some(IngredientMention {
                    name: name.clone(),
                    ..mention
                }),
                name,
            });
        }
        for staple in &config.staples {
            let name = normalize_ingredient(staple);
            if name.is_empty() || entries.iter().any(|e| e.name == name) {
                continue;
            }
            entries.push(Entry {
                name,
                mention: None,
            });
        }

        let tools = vocabulary
            .tools
            .iter()
            .map(|tool| tool.trim().to_lowercase())
            .filter(|tool| !tool.is_empty())
            .collect();

        let lexicon = config
            .cooking_verbs
            .iter()
            .fold(Lexicon::default(), |lexicon, verb| lexicon.with_cooking_verb(verb.as_str()));

        Extractor {
            entries,
            tools,
            threshold: config.fuzzy_threshold,
            lemmatizer: Rc::new(RuleLemmatizer::new(lexicon.clone())),
            lexicon,
            similarity: Rc::new(PartialRatio),
        }
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Rc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_similarity(mut self, similarity: Rc<dyn Similarity>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn lemmatizer(&self) -> Rc<dyn Lemmatizer> {
        Rc::clone(&self.lemmatizer)
    }

    /// Ingredients mentioned in the sentence, best match first. Equal scores
    /// keep vocabulary order, with staples after the recipe's own list.
    pub fn ingredients(&self, sentence: &str) -> Vec<IngredientMatch> {
        let lower = sentence.to_lowercase();
        let mut matches: Vec<IngredientMatch> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = self.similarity.similarity(&entry.name, &lower);
                score.meets(self.threshold).then(|| IngredientMatch {
                    name: entry.name.clone(),
                    score,
                    mention: entry
                        .mention
                        .clone()
                        .unwrap_or_else(|| IngredientMention::named(entry.name.clone())),
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        trace!(sentence, matched = ?matches.iter().map(|m| &m.name).collect::<Vec<_>>(), "ingredients");
        matches
    }

    /// Tools named in the sentence, in vocabulary order.
    pub fn tools(&self, sentence: &str) -> Vec<String> {
        let lower = sentence.to_lowercase();
        self.tools
            .iter()
            .filter(|tool| lower.contains(tool.as_str()))
            .cloned()
            .collect()
    }

    /// One action per cooking-verb token, in text order.
    pub fn actions(&self, sentence: &str, ingredients: &[String], tool: Option<&str>) -> Vec<Action> {
        tokenize(sentence)
            .iter()
            .filter(|token| token.is_word())
            .map(|token| self.lemmatizer.lemmatize(&token.value))
            .filter(|lemma| self.lexicon.is_cooking_verb(lemma))
            .map(|verb| Action {
                verb,
                ingredients: ingredients.to_vec(),
                tool: tool.map(str::to_string),
            })
            .collect()
    }

    pub fn extract(&self, sentence: &str) -> Extraction {
        let matches = self.ingredients(sentence);
        let names: Vec<String> = matches.iter().map(|m| m.name.clone()).collect();
        let tools = self.tools(sentence);
        let actions = self.actions(sentence, &names, tools.first().map(String::as_str));

        Extraction {
            ingredients: matches.into_iter().map(|m| m.mention).collect(),
            actions,
            time: extract_time(sentence),
            temperature: extract_temperature(sentence, &names),
            tools,
        }
    }
}

fn to_minutes(value: f64, unit: &str) -> f64 {
    if unit.starts_with("second") {
        value / 60.0
    } else if unit.starts_with("hour") {
        value * 60.0
    } else {
        value
    }
}

/// Durations mentioned in a sentence.
///
/// Several durations are joined into one comma-separated string. A sentence
/// whose only timing is a single range ("10 to 12 minutes") yields
/// [`TimeSpec::Range`] in minutes instead.
pub fn extract_time(sentence: &str) -> Option<TimeSpec> {
    let durations: Vec<String> = DURATION
        .captures_iter(sentence)
        .map(|caps| format!("{} {}", &caps[1], caps[2].to_lowercase()))
        .collect();

    if durations.is_empty() {
        return None;
    }

    let ranges: Vec<Captures<'_>> = DURATION_RANGE.captures_iter(sentence).collect();
    if let ([range], [_]) = (ranges.as_slice(), durations.as_slice()) {
        let unit = range[3].to_lowercase();
        if let (Ok(min), Ok(max)) = (range[1].parse::<f64>(), range[2].parse::<f64>()) {
            return Some(TimeSpec::Range {
                min: to_minutes(min, &unit),
                max: to_minutes(max, &unit),
            });
        }
    }

    Some(TimeSpec::duration(durations.join(", ")))
}

/// Temperatures mentioned in a sentence.
///
/// A degree reading goes to "oven" when the sentence mentions the oven, else
/// to whichever matched ingredient appears earliest in the text. A stove heat
/// level goes to "stove/burner". Both can be present.
pub fn extract_temperature(sentence: &str, ingredients: &[String]) -> Option<TemperatureSpec> {
    let lower = sentence.to_lowercase();
    let mut spec = TemperatureSpec::new();

    if let Some(caps) = DEGREES.captures(sentence) {
        let reading = format!("{}°", &caps[1]);
        if lower.contains("oven") {
            spec.set(TemperatureSpec::OVEN, reading);
        } else if let Some((_, ingredient)) = ingredients
            .iter()
            .filter_map(|name| lower.find(name.as_str()).map(|pos| (pos, name)))
            .min_by_key(|(pos, _)| *pos)
        {
            spec.set(ingredient.clone(), reading);
        }
    }

    let level = HEAT_LEVEL.captures(sentence).and_then(|caps| {
        HEAT_LEVELS
            .iter()
            .find(|(group, _)| caps.name(group).is_some())
            .map(|(_, level)| *level)
    });
    if let Some(level) = level {
        spec.set(TemperatureSpec::STOVE, level);
    }

    (!spec.is_empty()).then_some(spec)
}
