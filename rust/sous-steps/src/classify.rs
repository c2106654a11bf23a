//! Actionability: is a sentence an instruction or an aside?
//!
//! Recipe instructions are imperative by convention, so the classifier leans
//! towards "actionable" and only says otherwise when a sentence carries one of
//! the cue phrases that mark warnings, tips and observations. The cue check
//! runs first, so "Do not stir the sauce" stays an aside even though it
//! contains a cooking verb.
//!
//! Without a syntactic parser the root verb is approximated as the first token
//! whose lemma is a known verb, and its clause as everything after the last
//! comma in front of it ("In a large bowl, whisk the eggs"). A sentence that
//! opens with a verb has nothing in front of its root, so it is always
//! reported as [`Verdict::Imperative`].

use std::rc::Rc;

use sous_nlp::{Lemmatizer, Lexicon, RuleLemmatizer, Token, tokenize};
use tracing::debug;

/// Phrases that mark a sentence as a warning, tip or observation.
pub const ASIDE_CUES: &[&str] = &[
    "be careful",
    "careful",
    "avoid",
    "do not",
    "don't",
    "never",
    "be sure",
    "make sure",
    "you can",
    "you could",
    "optional",
    "can substitute",
    "you may",
    "if you prefer",
    "will thicken",
    "will change",
    "will form",
    "should look",
    "you'll see",
    "you will see",
    "as it",
    "it will",
    "it should",
];

const SUBJECT_PRONOUNS: &[&str] = &[
    "i", "you", "we", "he", "she", "it", "they", "this", "that", "these", "those",
];

const DETERMINERS: &[&str] = &["the", "a", "an", "your", "my", "its", "their"];

/// Why a sentence was classified the way it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Contains a warning/tip cue phrase.
    Aside { cue: &'static str },
    /// Root verb with no subject in front of it, including a sentence that
    /// opens with a verb.
    Imperative { verb: String },
    /// Mentions a cooking verb somewhere.
    CookingVerb { verb: String },
    /// Nothing decisive; instructions are the safer guess.
    Default,
}

impl Verdict {
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Verdict::Aside { .. })
    }
}

pub struct Classifier {
    lexicon: Lexicon,
    lemmatizer: Rc<dyn Lemmatizer>,
}

impl Default for Classifier {
    fn default() -> Self {
        let lexicon = Lexicon::default();
        Classifier {
            lemmatizer: Rc::new(RuleLemmatizer::new(lexicon.clone())),
            lexicon,
        }
    }
}

impl Classifier {
    pub fn new(lexicon: Lexicon, lemmatizer: Rc<dyn Lemmatizer>) -> Self {
        Classifier {
            lexicon,
            lemmatizer,
        }
    }

    pub fn is_actionable(&self, sentence: &str) -> bool {
        self.classify(sentence).is_actionable()
    }

    pub fn classify(&self, sentence: &str) -> Verdict {
        let verdict = self.decide(sentence);
        debug!(sentence, ?verdict, "classified");
        verdict
    }

    fn decide(&self, sentence: &str) -> Verdict {
        let lower = sentence.trim().to_lowercase().replace('’', "'");
        if let Some(cue) = ASIDE_CUES.iter().copied().find(|cue| lower.contains(cue)) {
            return Verdict::Aside { cue };
        }

        let tokens = tokenize(sentence);
        let lemmas: Vec<(usize, String)> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_word())
            .map(|(i, token)| (i, self.lemmatizer.lemmatize(&token.value)))
            .collect();

        if let Some((root, verb)) = lemmas.iter().find(|(_, lemma)| self.lexicon.is_verb(lemma)) {
            if !has_subject(&tokens[..*root]) {
                return Verdict::Imperative { verb: verb.clone() };
            }
        }

        if let Some((_, verb)) = lemmas.iter().find(|(_, lemma)| self.lexicon.is_cooking_verb(lemma)) {
            return Verdict::CookingVerb { verb: verb.clone() };
        }

        Verdict::Default
    }
}

/// Whether the clause in front of a root verb supplies its subject.
fn has_subject(before_root: &[Token]) -> bool {
    let clause_start = before_root
        .iter()
        .rposition(|token| token.original.ends_with(','))
        .map_or(0, |i| i + 1);
    let clause: Vec<&str> = before_root[clause_start..]
        .iter()
        .filter(|token| token.is_word())
        .map(|token| token.value.as_str())
        .collect();

    clause.iter().any(|word| SUBJECT_PRONOUNS.contains(word))
        || clause.first().is_some_and(|word| DETERMINERS.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn verdict(sentence: &str) -> Verdict {
        Classifier::default().classify(sentence)
    }

    #[test]
    fn imperative_instruction() {
        assert_eq!(
            verdict("Preheat the oven to 350 degrees F."),
            Verdict::Imperative {
                verb: "preheat".into()
            }
        );
    }

    #[test]
    fn opening_verb_is_imperative_despite_later_subject() {
        assert_eq!(
            verdict("Stir until it thickens."),
            Verdict::Imperative {
                verb: "stir".into()
            }
        );
        assert_eq!(
            verdict("Let the dough rest."),
            Verdict::Imperative {
                verb: "let".into()
            }
        );
    }

    #[test]
    fn introductory_phrase_does_not_count_as_subject() {
        assert_eq!(
            verdict("In a large bowl, whisk together the eggs and milk."),
            Verdict::Imperative {
                verb: "whisk".into()
            }
        );
    }

    #[test]
    fn cue_phrase_wins_over_cooking_verb() {
        assert_eq!(
            verdict("Do not stir the rice while it cooks."),
            Verdict::Aside { cue: "do not" }
        );
        assert!(!Classifier::default().is_actionable("Don’t overmix the batter."));
    }

    #[test]
    fn observations_are_asides() {
        let classifier = Classifier::default();
        assert!(!classifier.is_actionable("The sauce will thicken as it cools."));
        assert!(!classifier.is_actionable("You can substitute margarine."));
        assert!(!classifier.is_actionable("Make sure the pan is hot."));
    }

    #[test]
    fn sentence_with_subject_falls_through() {
        assert_eq!(verdict("The chicken needs to rest."), Verdict::Default);
        assert_eq!(
            verdict("We usually bake these on Sundays."),
            Verdict::CookingVerb {
                verb: "bake".into()
            }
        );
    }

    #[test]
    fn ambiguous_sentences_default_to_actionable() {
        assert!(Classifier::default().is_actionable("Enjoy!"));
    }
}
