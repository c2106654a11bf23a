//! Step assembly: one forward pass from sentence units to annotated steps.
//!
//! Every actionable sentence opens a new [`Step`], numbered sequentially from
//! 1 regardless of the source numbering. Asides are attached as notes to the
//! step opened most recently; an aside before the first instruction has
//! nowhere to go and is dropped.
//!
//! Heat and timing context carries forward: a step that names no temperature
//! (or no time) inherits the previous step's.

use tracing::{debug, info};

use crate::classify::Classifier;
use crate::config::ExtractorConfig;
use crate::extract::{Extractor, Vocabulary};
use crate::model::Step;
use crate::recipe::{Recipe, SentenceUnit};

pub struct Assembler {
    extractor: Extractor,
    classifier: Classifier,
}

impl Assembler {
    pub fn new(vocabulary: Vocabulary, config: &ExtractorConfig) -> Self {
        let extractor = Extractor::new(vocabulary, config);
        let classifier = Classifier::new(extractor.lexicon().clone(), extractor.lemmatizer());
        Assembler {
            extractor,
            classifier,
        }
    }

    /// An assembler whose ingredient vocabulary is the recipe's own list.
    pub fn for_recipe(recipe: &Recipe, tools: Vec<String>, config: &ExtractorConfig) -> Self {
        Self::new(Vocabulary::new(recipe.ingredients.clone(), tools), config)
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Annotate a whole recipe.
    pub fn annotate(&self, recipe: &Recipe) -> Vec<Step> {
        self.assemble(&recipe.sentence_units())
    }

    pub fn assemble(&self, units: &[SentenceUnit]) -> Vec<Step> {
        let mut steps: Vec<Step> = Vec::new();

        for unit in units {
            if !self.classifier.is_actionable(&unit.text) {
                match steps.last_mut() {
                    Some(step) => step.notes.push(unit.text.clone()),
                    None => debug!(substep = %unit.substep_number, "dropping aside before first step"),
                }
                continue;
            }

            let step = self.build_step(steps.len() as u32 + 1, unit, steps.last());
            steps.push(step);
        }

        info!(sentences = units.len(), steps = steps.len(), "assembled recipe steps");
        steps
    }

    fn build_step(&self, step_number: u32, unit: &SentenceUnit, previous: Option<&Step>) -> Step {
        let extraction = self.extractor.extract(&unit.text);

        let mut step = Step::new(step_number, unit.substep_number.clone(), unit.text.clone());
        step.ingredients = extraction.ingredients;
        step.actions = extraction.actions;
        step.time = extraction.time;
        step.temperature = extraction.temperature;

        if let Some(previous) = previous {
            if step.temperature.is_none() {
                step.temperature = previous.temperature.clone();
            }
            if step.time.is_none() {
                step.time = previous.time.clone();
            }
        }

        step
    }
}
