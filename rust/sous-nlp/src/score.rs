//! Fuzzy similarity scoring.
//!
//! Ingredient names in a recipe's ingredient list rarely appear verbatim in
//! the instructions ("2 cups shredded mozzarella cheese" vs. "top with the
//! mozzarella"), so ingredient detection is a fuzzy match. The default
//! scorer is a *partial ratio*: the shorter string is slid across the longer
//! one and the best character-level similarity of any alignment wins.
//!
//! Scores are on a 0–100 scale.

use similar::TextDiff;

/// A similarity score in the range [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(pub f64);

impl Score {
    pub const MAX: Score = Score(100.0);

    pub fn new(value: f64) -> Self {
        Score(value.clamp(0.0, 100.0))
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

/// Anything that can score how similar two strings are.
pub trait Similarity {
    fn similarity(&self, a: &str, b: &str) -> Score;
}

/// Plain ratio of two whole strings: `2 * matching / (len(a) + len(b))`,
/// scaled to 0–100.
pub fn ratio(a: &str, b: &str) -> Score {
    if a.is_empty() && b.is_empty() {
        return Score::MAX;
    }
    let diff = TextDiff::from_chars(a, b);
    Score::new(f64::from(diff.ratio()) * 100.0)
}

/// Best-alignment partial ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

impl PartialRatio {
    fn windows(longer: &[char], width: usize) -> impl Iterator<Item = String> + '_ {
        let len = longer.len();
        // Partial overlaps at both edges, then every full-width window.
        let heads = (1..width).map(move |k| longer[..k].iter().collect::<String>());
        let tails = (1..width).map(move |k| longer[len - k..].iter().collect::<String>());
        let full = (0..=len - width).map(move |start| {
            longer[start..start + width].iter().collect::<String>()
        });
        full.chain(heads).chain(tails)
    }
}

impl Similarity for PartialRatio {
    fn similarity(&self, a: &str, b: &str) -> Score {
        let (shorter, longer) = if a.chars().count() <= b.chars().count() {
            (a, b)
        } else {
            (b, a)
        };

        if shorter.is_empty() {
            return if longer.is_empty() { Score::MAX } else { Score(0.0) };
        }
        if longer.contains(shorter) {
            return Score::MAX;
        }

        let longer: Vec<char> = longer.chars().collect();
        let width = shorter.chars().count();

        let mut best = Score(0.0);
        for window in Self::windows(&longer, width) {
            let score = ratio(shorter, &window);
            if score > best {
                best = score;
            }
        }
        best
    }
}
