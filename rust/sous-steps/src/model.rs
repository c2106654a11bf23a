//! Annotated step records.
//!
//! A [`Step`] is one actionable instruction with everything the pipeline
//! could pull out of it. Optional fields are modelled as `Option` and are
//! left out of serialized output when absent.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ingredient as listed by a recipe, or as matched inside a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientMention {
    #[serde(default)]
    pub qty: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub name: String,
}

impl IngredientMention {
    pub fn named(name: impl Into<String>) -> Self {
        IngredientMention {
            qty: None,
            unit: None,
            name: name.into(),
        }
    }

    pub fn with_quantity(mut self, qty: impl Into<String>, unit: impl Into<String>) -> Self {
        self.qty = Some(qty.into());
        self.unit = Some(unit.into());
        self
    }

    /// The "qty unit" part, if the mention carries any quantity metadata.
    pub fn amount(&self) -> Option<String> {
        let amount = [self.qty.as_deref(), self.unit.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!amount.is_empty()).then_some(amount)
    }
}

impl fmt::Display for IngredientMention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount() {
            Some(amount) => write!(f, "{amount} {}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A single verb within a step, with the ingredients and tool it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub verb: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tool: Option<String>,
}

impl Action {
    pub fn new(verb: impl Into<String>) -> Self {
        Action {
            verb: verb.into(),
            ingredients: Vec::new(),
            tool: None,
        }
    }

    pub fn ingredient(mut self, name: impl Into<String>) -> Self {
        self.ingredients.push(name.into());
        self
    }

    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }
}

/// How long a step takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSpec {
    /// Free-form durations, e.g. "20 minutes, 2 hours".
    Duration { duration: String },
    /// A range in minutes, e.g. "10 to 12 minutes".
    Range { min: f64, max: f64 },
}

impl TimeSpec {
    pub fn duration(duration: impl Into<String>) -> Self {
        TimeSpec::Duration {
            duration: duration.into(),
        }
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSpec::Duration { duration } => write!(f, "{duration}"),
            TimeSpec::Range { min, max } => write!(f, "{min} to {max} minutes"),
        }
    }
}

/// Heat settings for a step, keyed by target ("oven", an ingredient name, or
/// "stove/burner"). Entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemperatureSpec(IndexMap<String, String>);

impl TemperatureSpec {
    /// Key used for stove heat levels.
    pub const STOVE: &'static str = "stove/burner";
    /// Key used for oven temperatures.
    pub const OVEN: &'static str = "oven";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, target: impl Into<String>, value: impl Into<String>) {
        self.0.insert(target.into(), value.into());
    }

    pub fn with(mut self, target: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(target, value);
        self
    }

    pub fn get(&self, target: &str) -> Option<&str> {
        self.0.get(target).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Renders as `set <key> to <value>, set <key2> to <value2>`.
impl fmt::Display for TemperatureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (target, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "set {target} to {value}")?;
        }
        Ok(())
    }
}

/// One actionable instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step_number: u32,
    pub substep_number: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientMention>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureSpec>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Step {
    pub fn new(
        step_number: u32,
        substep_number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Step {
            step_number,
            substep_number: substep_number.into(),
            description: description.into(),
            ingredients: Vec::new(),
            actions: Vec::new(),
            time: None,
            temperature: None,
            notes: Vec::new(),
        }
    }

    /// The first ingredient of the first action, which is what vague
    /// references like "it" usually point at.
    pub fn primary_ingredient(&self) -> Option<&str> {
        self.actions
            .first()
            .and_then(|action| action.ingredients.first())
            .map(String::as_str)
    }

    /// Every ingredient named by any action of this step, in order.
    pub fn action_ingredients(&self) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .flat_map(|action| action.ingredients.iter().map(String::as_str))
    }
}

/// Renders the description followed by any notes, one per line.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.step_number, self.description)?;
        for note in &self.notes {
            write!(f, "\n  Note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn temperature_renders_in_insertion_order() {
        let spec = TemperatureSpec::new()
            .with(TemperatureSpec::OVEN, "350°")
            .with(TemperatureSpec::STOVE, "MEDIUM");
        assert_eq!(spec.to_string(), "set oven to 350°, set stove/burner to MEDIUM");
    }

    #[test]
    fn time_range_renders_in_minutes() {
        let time = TimeSpec::Range { min: 10.0, max: 12.5 };
        assert_eq!(time.to_string(), "10 to 12.5 minutes");
    }

    #[test]
    fn step_renders_notes_after_description() {
        let mut step = Step::new(2, "1.2", "Stir the sauce.");
        step.notes.push("Be careful not to scorch it.".into());
        assert_eq!(
            step.to_string(),
            "Step 2: Stir the sauce.\n  Note: Be careful not to scorch it."
        );
    }

    #[test]
    fn mention_amount_skips_missing_parts() {
        let mention = IngredientMention {
            qty: Some("2".into()),
            unit: None,
            name: "eggs".into(),
        };
        assert_eq!(mention.amount().as_deref(), Some("2"));
        assert_eq!(IngredientMention::named("salt").amount(), None);
        assert_eq!(mention.to_string(), "2 eggs");
    }

    #[test]
    fn step_serializes_without_absent_fields() {
        let step = Step::new(1, "1.1", "Chop the onions.");
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("time").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["notes"], serde_json::json!([]));
    }

    #[test]
    fn time_spec_deserializes_either_shape() {
        let duration: TimeSpec = serde_json::from_str(r#"{"duration":"20 minutes"}"#).unwrap();
        assert_eq!(duration, TimeSpec::duration("20 minutes"));
        let range: TimeSpec = serde_json::from_str(r#"{"min":5,"max":7}"#).unwrap();
        assert_eq!(range, TimeSpec::Range { min: 5.0, max: 7.0 });
    }
}
