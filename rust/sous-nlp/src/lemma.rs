//! Lemmatization: reducing inflected words to their dictionary form.
//!
//! The annotation pipeline only ever needs lemmas for verb recognition, so the
//! default [`RuleLemmatizer`] is driven by the verb [`Lexicon`]: it generates
//! candidate base forms by stripping common English suffixes and keeps the
//! first candidate the lexicon knows. Words that never reduce to a known verb
//! are returned lowercased but otherwise untouched.

use crate::verb::Lexicon;

/// Anything that can map a word to its lemma.
pub trait Lemmatizer {
    fn lemmatize(&self, word: &str) -> String;
}

/// Irregular inflections that suffix stripping cannot recover.
const IRREGULAR: &[(&str, &str)] = &[
    ("laid", "lay"),
    ("brought", "bring"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("beaten", "beat"),
    ("risen", "rise"),
    ("rose", "rise"),
    ("kept", "keep"),
    ("fried", "fry"),
    ("fries", "fry"),
    ("frying", "fry"),
    ("shaken", "shake"),
    ("became", "become"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("saw", "see"),
    ("seen", "see"),
];

/// Suffix-stripping lemmatizer backed by a verb lexicon.
#[derive(Debug, Clone, Default)]
pub struct RuleLemmatizer {
    lexicon: Lexicon,
}

impl RuleLemmatizer {
    pub fn new(lexicon: Lexicon) -> Self {
        RuleLemmatizer { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn candidates(word: &str) -> Vec<String> {
        let mut candidates = vec![word.to_string()];

        for suffix in ["ing", "ed"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() < 2 {
                    continue;
                }
                candidates.push(stem.to_string());
                candidates.push(format!("{stem}e"));
                // stirring -> stirr -> stir
                let mut chars = stem.chars().rev();
                if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
                    if last == prev {
                        candidates.push(stem[..stem.len() - last.len_utf8()].to_string());
                    }
                }
            }
        }

        if let Some(stem) = word.strip_suffix("es") {
            candidates.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix('s') {
            candidates.push(stem.to_string());
        }

        candidates
    }
}

/// Lowercase and fold the accented letters that show up in recipe verbs
/// ("sauté", "flambé").
pub fn fold(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' => 'e',
            'à' | 'â' => 'a',
            'î' | 'ï' => 'i',
            'ô' => 'o',
            'û' | 'ù' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        let word = fold(word);

        if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
            return lemma.to_string();
        }

        Self::candidates(&word)
            .into_iter()
            .find(|candidate| self.lexicon.is_verb(candidate))
            .unwrap_or(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        RuleLemmatizer::default().lemmatize(word)
    }

    #[test]
    fn strips_progressive_suffix() {
        assert_eq!(lemma("mixing"), "mix");
        assert_eq!(lemma("baking"), "bake");
        assert_eq!(lemma("stirring"), "stir");
    }

    #[test]
    fn strips_past_suffix() {
        assert_eq!(lemma("chopped"), "chop");
        assert_eq!(lemma("poured"), "pour");
        assert_eq!(lemma("placed"), "place");
    }

    #[test]
    fn strips_third_person_suffix() {
        assert_eq!(lemma("bakes"), "bake");
        assert_eq!(lemma("mixes"), "mix");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(lemma("Sauté"), "saute");
        assert_eq!(lemma("sautéed"), "saute");
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(lemma("laid"), "lay");
        assert_eq!(lemma("fried"), "fry");
    }

    #[test]
    fn unknown_words_pass_through() {
        assert_eq!(lemma("Onions"), "onions");
        assert_eq!(lemma("the"), "the");
    }
}
