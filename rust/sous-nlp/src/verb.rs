//! Verb lexicon: which lemmas count as verbs, and which of those are
//! cooking methods.
//!
//! Two word lists drive the annotation pipeline:
//!
//! - **Cooking verbs** become action verbs on an annotated step and are the
//!   last positive signal in actionability classification.
//! - **Instruction verbs** are the wider set of verbs that commonly open a
//!   recipe instruction ("let", "set", "transfer", "serve", ...). They are used
//!   to find the root verb of a sentence without a syntactic parser.
//!
//! A lemma in both lists counts as a cooking verb.

/// Cooking-method verbs recognized as step actions.
pub const COOKING_VERBS: &[&str] = &[
    "mix", "bake", "grill", "stir", "preheat", "add", "chop", "saute", "boil", "fry",
    "sprinkle", "layer", "remove", "pour", "place", "cook", "simmer", "blend", "roast",
    "whisk", "knead", "marinate", "sear", "steam", "broil", "beat", "fold", "melt",
    "combine", "drain", "slice", "dice", "mince", "toss", "spread",
];

/// Verbs that are not cooking methods but routinely start an instruction.
/// Noun homographs ("heat", "brown") live here so that "over medium heat"
/// does not become an action.
const INSTRUCTION_VERBS: &[&str] = &[
    "heat", "brown", "season", "cover", "let", "set", "transfer", "serve", "put", "bring",
    "reduce", "return", "turn",
    "allow", "arrange", "top", "garnish", "repeat", "cut", "lay", "spoon", "line",
    "grease", "rinse", "wash", "peel", "cool", "chill", "refrigerate", "store", "use",
    "keep", "divide", "shape", "roll", "press", "flip", "check", "continue", "discard",
    "taste", "adjust", "measure", "prepare", "stuff", "wrap", "insert", "scrape",
    "squeeze", "strain", "whip", "dust", "brush", "drizzle", "microwave", "soak",
    "rest", "lower", "raise", "increase", "decrease", "spray", "dissolve", "shake",
    "mash", "grate", "shred", "crack", "separate", "sift", "dip", "coat", "fill",
    "make", "take", "move", "pat", "thicken", "change", "form", "look", "see", "be",
    "do", "double", "rise", "become",
];

/// The grammatical class a lemma was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbClass {
    /// A cooking method ("bake", "stir").
    Cooking,
    /// Any other verb that can head an instruction ("let", "serve").
    Instruction,
}

/// Lookup over the verb word lists.
///
/// The default lexicon holds [`COOKING_VERBS`] plus the built-in instruction
/// verbs. Extra cooking verbs can be layered on with
/// [`Lexicon::with_cooking_verb`].
#[derive(Debug, Clone)]
pub struct Lexicon {
    cooking: Vec<String>,
    instruction: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            cooking: COOKING_VERBS.iter().map(|v| v.to_string()).collect(),
            instruction: INSTRUCTION_VERBS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cooking_verb(mut self, verb: impl Into<String>) -> Self {
        let verb = verb.into().to_lowercase();
        if !self.cooking.contains(&verb) {
            self.cooking.push(verb);
        }
        self
    }

    /// Classify a lemma, if it is a known verb.
    pub fn classify(&self, lemma: &str) -> Option<VerbClass> {
        if self.cooking.iter().any(|v| v == lemma) {
            Some(VerbClass::Cooking)
        } else if self.instruction.iter().any(|v| v == lemma) {
            Some(VerbClass::Instruction)
        } else {
            None
        }
    }

    pub fn is_cooking_verb(&self, lemma: &str) -> bool {
        self.classify(lemma) == Some(VerbClass::Cooking)
    }

    pub fn is_verb(&self, lemma: &str) -> bool {
        self.classify(lemma).is_some()
    }

    /// All lemmas known to the lexicon, cooking verbs first.
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.cooking
            .iter()
            .chain(self.instruction.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooking_verb_is_classified_first() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.classify("bake"), Some(VerbClass::Cooking));
        assert_eq!(lexicon.classify("serve"), Some(VerbClass::Instruction));
        assert_eq!(lexicon.classify("sauce"), None);
    }

    #[test]
    fn noun_homographs_are_instruction_verbs() {
        let lexicon = Lexicon::default();
        for word in ["heat", "brown", "season", "cover"] {
            assert_eq!(lexicon.classify(word), Some(VerbClass::Instruction), "{word}");
        }
    }

    #[test]
    fn added_cooking_verb_is_recognized() {
        let lexicon = Lexicon::default().with_cooking_verb("Flambe");
        assert!(lexicon.is_cooking_verb("flambe"));
    }

    #[test]
    fn every_cooking_verb_is_a_verb() {
        let lexicon = Lexicon::default();
        for verb in COOKING_VERBS {
            assert!(lexicon.is_verb(verb), "{verb} should be a verb");
        }
    }
}
