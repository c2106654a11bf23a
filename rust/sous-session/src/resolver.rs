//! Vague references: "how long do I cook it?", "what can I use instead of
//! that?".
//!
//! A query with a pronoun in it is about the current step. Three question
//! shapes are answered directly from the step's data; anything else is
//! rewritten with a phrase describing the step ("whisk the eggs, milk") in
//! place of the pronoun and answered as an informational question.

use std::sync::LazyLock;

use regex::Regex;
use sous_nlp::{Lemmatizer, RuleLemmatizer, tokenize};
use sous_steps::Step;
use tracing::debug;

static VAGUE_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:it|that|this|them)\b").expect("valid vague term regex"));

/// Navigation commands whose pronoun belongs to the command.
static NAVIGATION_IDIOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:repeat\s+(?:that|it|this)|say\s+(?:that|it|this)\s+again)\b")
        .expect("valid navigation idiom regex")
});

static HOW_MUCH_OF_IT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhow\s+(?:much|many)\s+(?:of\s+)?(?:it|that|this|them)\b")
        .expect("valid quantity reference regex")
});

static HOW_LONG_IT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhow\s+long\b.*\b(it|that|this|them)\b").expect("valid duration reference regex")
});

static HOW_LONG_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bhow\s+long\s+(?:do|does|should|must|can|will)\s+(?:i|you|we)\s+(\w+)")
        .expect("valid duration verb regex")
});

static SUBSTITUTE_IT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:use|substitute|replace|instead\s+of)\b.*\b(?:it|that|this|them)\b")
        .expect("valid substitution reference regex")
});

/// Whether a query leans on a pronoun for its subject.
pub fn has_vague_reference(query: &str) -> bool {
    let query = NAVIGATION_IDIOM.replace_all(query, " ");
    VAGUE_TERM.is_match(&query)
}

/// A phrase that stands in for the current step: `<verb> the <ingredients>`
/// from its first action, the bare verb, or the whole description.
pub fn replacement_phrase(step: &Step) -> String {
    match step.actions.first() {
        Some(action) if !action.verb.is_empty() && !action.ingredients.is_empty() => {
            format!("{} the {}", action.verb, action.ingredients.join(", "))
        }
        Some(action) if !action.verb.is_empty() => action.verb.clone(),
        _ => step.description.clone(),
    }
}

/// Replace every whole-word vague term with `phrase`.
pub fn rewrite(query: &str, phrase: &str) -> String {
    VAGUE_TERM.replace_all(query, regex::NoExpand(phrase)).into_owned()
}

/// What the resolver made of a vague query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// "how much of it": quantity of the primary ingredient.
    Quantity,
    /// "how long ... it": the step's duration.
    Duration,
    /// "use instead of it": substitutes for the primary ingredient.
    Substitution,
    /// No specific shape; answer this rewritten query instead.
    Rewritten(String),
}

/// Classify a vague query against the current step.
pub fn resolve(query: &str, step: &Step) -> Resolution {
    let resolution = if HOW_MUCH_OF_IT.is_match(query) {
        Resolution::Quantity
    } else if HOW_LONG_IT.is_match(query) {
        Resolution::Duration
    } else if SUBSTITUTE_IT.is_match(query) {
        Resolution::Substitution
    } else {
        Resolution::Rewritten(rewrite(query, &replacement_phrase(step)))
    };
    debug!(query, ?resolution, "resolved vague reference");
    resolution
}

/// "You need 2 cups of milk." for the step's primary ingredient, searching
/// every step's listed ingredients for quantity metadata.
pub fn quantity_answer(step: &Step, steps: &[Step]) -> String {
    let Some(name) = step.primary_ingredient() else {
        return "Sorry, I'm not sure which ingredient you mean.".to_string();
    };

    steps
        .iter()
        .flat_map(|step| step.ingredients.iter())
        .filter(|mention| mention.name == name)
        .find_map(|mention| mention.amount())
        .map(|amount| format!("You need {amount} of {name}."))
        .unwrap_or_else(|| format!("Sorry, I don't know how much {name} you need."))
}

/// The cooking verb a duration question asks about: the word after "do I"
/// when it is a cooking verb, else the first cooking verb anywhere in the
/// query. Returned as a lemma.
fn asked_verb(query: &str) -> Option<String> {
    let lemmatizer = RuleLemmatizer::default();
    let cooking = |word: &str| {
        let lemma = lemmatizer.lemmatize(word);
        lemmatizer.lexicon().is_cooking_verb(&lemma).then_some(lemma)
    };

    HOW_LONG_VERB
        .captures(query)
        .and_then(|caps| cooking(&caps[1]))
        .or_else(|| {
            tokenize(query)
                .iter()
                .filter(|token| token.is_word())
                .find_map(|token| cooking(&token.value))
        })
}

/// "You should bake it for 20 minutes." The verb is the cooking verb the
/// user asked about, else the step's first action, else "cook".
pub fn duration_answer(query: &str, step: &Step) -> String {
    let Some(time) = &step.time else {
        return "Sorry, no duration is specified for this step.".to_string();
    };

    let pronoun = HOW_LONG_IT
        .captures(query)
        .map(|caps| caps[1].to_lowercase())
        .unwrap_or_else(|| "it".to_string());
    let verb = asked_verb(query)
        .or_else(|| step.actions.first().map(|action| action.verb.clone()))
        .unwrap_or_else(|| "cook".to_string());

    format!("You should {verb} {pronoun} for {time}.")
}
