//! Ingredient substitutions.
//!
//! A substitution question names an ingredient loosely ("butter", "eggs").
//! The term is matched against the ingredients the recipe's actions actually
//! use, current step first, so the answer is about the recipe's own
//! "unsalted butter" rather than butter in general.

use std::sync::LazyLock;

use regex::Regex;
use sous_steps::Step;
use tracing::debug;

use crate::lookup::SubstitutionTable;
use crate::navigator::StepNavigator;
use crate::search::SearchLink;

static REQUESTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bsubstitute\s+for\s+(.+)",
        r"(?i)\buse\s+instead\s+of\s+(.+)",
        r"(?i)\breplacement\s+for\s+(.+)",
        r"(?i)\bwhat\s+can\s+i\s+use\s+for\s+(.+)",
        r"(?i)\bwhat\s+can\s+i\s+use\s+instead\s+of\s+(.+)",
        r"(?i)\bwhat\s+is\s+a\s+good\s+substitute\s+for\s+(.+)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid substitution regex"))
    .collect()
});

/// The ingredient term of a substitution question, lowercased, without
/// trailing punctuation, a leading article, or a plural "s".
pub fn requested_term(query: &str) -> Option<String> {
    let caps = REQUESTS.iter().find_map(|pattern| pattern.captures(query))?;
    let term = caps[1]
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_lowercase();
    let term = ["the ", "a ", "an ", "some "]
        .iter()
        .find_map(|article| term.strip_prefix(article))
        .unwrap_or(&term)
        .trim();
    let term = singular(term);
    (!term.is_empty()).then(|| term.to_string())
}

/// Drop one trailing "s".
fn singular(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

/// The first action ingredient containing `term`: the current step's, then
/// the whole recipe's.
pub fn find_ingredient<'a>(term: &str, current: Option<&'a Step>, steps: &'a [Step]) -> Option<&'a str> {
    current
        .into_iter()
        .flat_map(Step::action_ingredients)
        .chain(steps.iter().flat_map(Step::action_ingredients))
        .find(|ingredient| ingredient.contains(term))
}

/// `a`, `a, or b`, `a, b, or c`.
pub fn format_substitutes(substitutes: &[String]) -> String {
    match substitutes {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => {
            let mut list = String::new();
            for item in rest {
                list.push_str(item);
                list.push_str(", ");
            }
            list.push_str("or ");
            list.push_str(last);
            list
        }
    }
}

/// Answer a substitution question about `term`.
pub fn answer(
    term: &str,
    navigator: &StepNavigator,
    table: &SubstitutionTable,
    web_search: &SearchLink,
) -> String {
    let Some(ingredient) = find_ingredient(term, navigator.current_step(), navigator.steps()) else {
        debug!(term, "no recipe ingredient matches substitution term");
        return format!("Sorry, I could not find ingredient \"{term}\" in this recipe.");
    };

    let substitutes = [ingredient, singular(ingredient), term]
        .into_iter()
        .find_map(|key| table.get(key))
        .filter(|substitutes| !substitutes.is_empty());

    match substitutes {
        Some(substitutes) => format!(
            "You can substitute {ingredient} with: {}.",
            format_substitutes(substitutes)
        ),
        None => format!(
            "Sorry, I don't know a substitute for {ingredient}. Try searching online!\nGoogle search: {}",
            web_search.link(&format!("substitute for {ingredient}"))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sous_steps::Action;

    fn step(number: u32, verb: &str, ingredients: &[&str]) -> Step {
        let mut step = Step::new(number, format!("{number}.1"), format!("{verb} things."));
        let action = ingredients
            .iter()
            .fold(Action::new(verb), |action, name| action.ingredient(*name));
        step.actions.push(action);
        step
    }

    #[test]
    fn formats_lists() {
        let list = |items: &[&str]| {
            format_substitutes(&items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
        };
        assert_eq!(list(&["a"]), "a");
        assert_eq!(list(&["margarine", "oil"]), "margarine, or oil");
        assert_eq!(list(&["a", "b", "c"]), "a, b, or c");
        assert_eq!(list(&[]), "");
    }

    #[test]
    fn extracts_requested_term() {
        assert_eq!(requested_term("What can I use instead of butter?"), Some("butter".into()));
        assert_eq!(requested_term("substitute for the eggs"), Some("egg".into()));
        assert_eq!(
            requested_term("what is a good substitute for heavy cream?!"),
            Some("heavy cream".into())
        );
        assert_eq!(requested_term("what is a whisk"), None);
    }

    #[test]
    fn current_step_is_searched_first() {
        let steps = vec![
            step(1, "melt", &["unsalted butter"]),
            step(2, "add", &["peanut butter", "sugar"]),
        ];
        assert_eq!(find_ingredient("butter", Some(&steps[1]), &steps), Some("peanut butter"));
        assert_eq!(find_ingredient("butter", Some(&steps[0]), &steps), Some("unsalted butter"));
        assert_eq!(find_ingredient("sugar", Some(&steps[0]), &steps), Some("sugar"));
        assert_eq!(find_ingredient("flour", Some(&steps[0]), &steps), None);
    }

    #[test]
    fn answers_from_table() {
        let navigator = StepNavigator::new(vec![step(1, "beat", &["eggs", "butter"])]);
        let table = SubstitutionTable::parse("butter: margarine, oil\negg: applesauce\n");
        let search = SearchLink::google();

        assert_eq!(
            answer("butter", &navigator, &table, &search),
            "You can substitute butter with: margarine, or oil."
        );
        assert_eq!(
            answer("egg", &navigator, &table, &search),
            "You can substitute eggs with: applesauce."
        );
        assert!(answer("flour", &navigator, &table, &search).contains("could not find ingredient"));
    }

    #[test]
    fn unknown_substitute_links_a_search() {
        let navigator = StepNavigator::new(vec![step(1, "stir", &["saffron"])]);
        let reply = answer("saffron", &navigator, &SubstitutionTable::default(), &SearchLink::google());
        assert!(reply.starts_with("Sorry, I don't know a substitute for saffron."));
        assert!(reply.ends_with("https://www.google.com/search?q=substitute+for+saffron"));
    }
}
