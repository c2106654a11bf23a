//! Query routing.
//!
//! A query is offered to each [`Route`] in [`ROUTES`] order. The first route
//! whose predicate accepts the query and whose handler produces a reply wins;
//! if none does, the reply is a generic web-search link. Every query gets
//! exactly one reply.
//!
//! The order is part of the behaviour. "What is the first step?" is
//! navigation, not a definition, because navigation is tried first; "what can
//! I use instead of it" is a substitution for the current step's ingredient
//! because vague references are resolved before anything else.
//!
//! A vague query the resolver rewrites goes through [`REWRITTEN_ROUTES`] only.
//! The replacement phrase can be a step description ("let stand before
//! serving"), and it must not be mistaken for a navigation command.

use std::sync::LazyLock;

use regex::Regex;
use sous_steps::TemperatureSpec;
use tracing::debug;

use crate::lookup::Definition;
use crate::navigator::Move;
use crate::resolver::{self, Resolution};
use crate::session::Session;
use crate::substitute;

static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\btemperature\b|\bhow\s+hot\b").expect("valid temperature regex")
});

static WHAT_IS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^what\s+(?:is|does)\s+(.+?)(?:\s+mean)?[?\s]*$").expect("valid what-is regex")
});

static HOW_DO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^how\s+(?:do|to)\s+(?:i\s+)?(.+?)[?\s]*$").expect("valid how-do regex")
});

static HOW_MUCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^how\s+(?:much|many)\s+(?:of\s+)?(.+?)(?:\s+(?:do|does|should|will|must)\s+(?:i|you|we)\s+\w+)?[?\s]*$",
    )
    .expect("valid how-much regex")
});

static CAN_I: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^can\s+i\s+(.+?)[?\s]*$").expect("valid can-i regex"));

/// One entry in the routing table.
#[derive(Clone, Copy)]
pub struct Route {
    pub label: &'static str,
    /// Cheap check on the query text.
    pub matches: fn(&str) -> bool,
    /// Produces the reply, or `None` to let later routes try.
    pub handle: fn(&mut Session<'_>, &str) -> Option<String>,
}

const INFORMATIONAL: Route = Route {
    label: "informational",
    matches: always,
    handle: informational,
};

/// The routing table, highest priority first.
pub const ROUTES: &[Route] = &[
    Route {
        label: "vague-reference",
        matches: resolver::has_vague_reference,
        handle: resolve_reference,
    },
    Route {
        label: "temperature",
        matches: is_temperature_query,
        handle: temperature,
    },
    Route {
        label: "substitution",
        matches: is_substitution_query,
        handle: substitution,
    },
    Route {
        label: "navigation",
        matches: is_navigation_query,
        handle: navigation,
    },
    INFORMATIONAL,
];

/// Routes for a query rewritten by the resolver.
pub const REWRITTEN_ROUTES: &[Route] = &[INFORMATIONAL];

/// Route a query through the full table.
pub fn dispatch(session: &mut Session<'_>, query: &str) -> String {
    dispatch_with(session, query, ROUTES)
}

/// Route a query through `routes`, falling back to a web-search link.
pub fn dispatch_with(session: &mut Session<'_>, query: &str, routes: &[Route]) -> String {
    let query = query.trim();
    for route in routes {
        if !(route.matches)(query) {
            continue;
        }
        if let Some(reply) = (route.handle)(session, query) {
            debug!(route = route.label, query, "routed");
            return reply;
        }
    }
    debug!(query, "no route answered; falling back to search");
    format!(
        "Sorry, I couldn't find an answer. Try searching online!\nGoogle search: {}",
        session.config.web_search.link(query)
    )
}

fn always(_: &str) -> bool {
    true
}

fn is_temperature_query(query: &str) -> bool {
    TEMPERATURE.is_match(query)
}

fn is_substitution_query(query: &str) -> bool {
    substitute::requested_term(query).is_some()
}

fn is_navigation_query(query: &str) -> bool {
    Move::parse(query).is_some()
}

fn resolve_reference(session: &mut Session<'_>, query: &str) -> Option<String> {
    let step = session.navigator.current_step()?;
    let reply = match resolver::resolve(query, step) {
        Resolution::Quantity => resolver::quantity_answer(step, session.navigator.steps()),
        Resolution::Duration => resolver::duration_answer(query, step),
        Resolution::Substitution => match step.primary_ingredient() {
            Some(ingredient) => substitute::answer(
                ingredient,
                &session.navigator,
                &session.tables.substitutions,
                &session.config.web_search,
            ),
            None => "Sorry, I'm not sure which ingredient you mean.".to_string(),
        },
        Resolution::Rewritten(rewritten) => dispatch_with(session, &rewritten, REWRITTEN_ROUTES),
    };
    Some(reply)
}

fn temperature(session: &mut Session<'_>, _query: &str) -> Option<String> {
    let mut combined = TemperatureSpec::new();
    for spec in session.navigator.current().filter_map(|step| step.temperature.as_ref()) {
        for (target, value) in spec.iter() {
            combined.set(target, value);
        }
    }

    Some(if combined.is_empty() {
        "Sorry, there are no temperatures to give for this step.".to_string()
    } else {
        combined.to_string()
    })
}

fn substitution(session: &mut Session<'_>, query: &str) -> Option<String> {
    let term = substitute::requested_term(query)?;
    Some(substitute::answer(
        &term,
        &session.navigator,
        &session.tables.substitutions,
        &session.config.web_search,
    ))
}

fn navigation(session: &mut Session<'_>, query: &str) -> Option<String> {
    let movement = Move::parse(query)?;
    Some(session.navigator.respond(movement))
}

fn informational(session: &mut Session<'_>, query: &str) -> Option<String> {
    if let Some(caps) = WHAT_IS.captures(query) {
        let term = strip_article(&caps[1].to_lowercase()).to_string();
        return Some(define(session, &term, "a definition for"));
    }
    if let Some(caps) = HOW_DO.captures(query) {
        let procedure = caps[1].to_lowercase();
        return Some(define(session, &procedure, "info for"));
    }
    if let Some(caps) = HOW_MUCH.captures(query) {
        let target = strip_article(&caps[1].to_lowercase()).to_string();
        return Some(how_much(session, &target));
    }
    if let Some(caps) = CAN_I.captures(query) {
        let action = caps[1].to_lowercase();
        return Some(match session.tables.dictionary.get(&action) {
            Some(definition) => format!("Yes, you can {action}: {definition}"),
            None => format!("Sorry, I couldn't find information about {action}"),
        });
    }
    None
}

fn strip_article(term: &str) -> &str {
    ["the ", "a ", "an "]
        .iter()
        .find_map(|article| term.strip_prefix(article))
        .unwrap_or(term)
        .trim()
}

fn define(session: &Session<'_>, term: &str, missing: &str) -> String {
    match session.tables.define(term) {
        Some(Definition::Term(definition)) => format!("{term} means {definition}"),
        Some(Definition::Tool(description)) => format!("{term}: {description}"),
        None => format!(
            "Sorry, I couldn't find {missing} {term}. Try searching online!\nYouTube search: {}",
            session.config.video_search.link(term)
        ),
    }
}

/// Quantity of a named ingredient: the current step's listing first, then the
/// rest of the recipe.
fn how_much(session: &Session<'_>, target: &str) -> String {
    let navigator = &session.navigator;
    navigator
        .current()
        .chain(navigator.steps().iter())
        .flat_map(|step| step.ingredients.iter())
        .filter(|mention| mention.name.to_lowercase().contains(target))
        .find_map(|mention| {
            mention
                .amount()
                .map(|amount| format!("You typically need {amount} of {}.", mention.name))
        })
        .unwrap_or_else(|| format!("Sorry, I don't know how much {target} you need."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_in_priority_order() {
        let labels: Vec<&str> = ROUTES.iter().map(|route| route.label).collect();
        assert_eq!(
            labels,
            vec!["vague-reference", "temperature", "substitution", "navigation", "informational"]
        );
    }

    #[test]
    fn rewritten_queries_skip_navigation() {
        let labels: Vec<&str> = REWRITTEN_ROUTES.iter().map(|route| route.label).collect();
        assert_eq!(labels, vec!["informational"]);
    }

    #[test]
    fn strips_leading_article() {
        assert_eq!(strip_article("a whisk"), "whisk");
        assert_eq!(strip_article("the dutch oven"), "dutch oven");
        assert_eq!(strip_article("anise"), "anise");
    }

    #[test]
    fn informational_patterns_capture_terms() {
        let term = |re: &Regex, q: &str| re.captures(q).map(|caps| caps[1].to_string());
        assert_eq!(term(&WHAT_IS, "what does fold mean?"), Some("fold".into()));
        assert_eq!(term(&WHAT_IS, "What is a whisk?"), Some("a whisk".into()));
        assert_eq!(term(&HOW_DO, "how do I blanch almonds?"), Some("blanch almonds".into()));
        assert_eq!(term(&HOW_MUCH, "how much butter do I need?"), Some("butter".into()));
        assert_eq!(term(&HOW_MUCH, "how many of the eggs"), Some("the eggs".into()));
        assert_eq!(term(&CAN_I, "can I freeze this"), Some("freeze this".into()));
    }
}
