//! End-to-end annotation of recipe input.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sous_steps::{Assembler, ExtractorConfig, Recipe, SentenceUnit, TemperatureSpec, TimeSpec};
use testresult::TestResult;

const INSTRUCTIONS: &[&str] = &[
    "Preheat the oven to 375°F.",
    "Chop the onion.",
    "Stir in the garlic and cook for 2 minutes.",
    "Layer the noodles in a baking dish.",
    "Sprinkle with cheese.",
    "Bring the sauce to a simmer over medium heat.",
];

const ASIDES: &[&str] = &[
    "Be careful not to burn the garlic.",
    "The sauce will thicken as it cools.",
    "You can use any short pasta.",
    "Make sure the oven rack is centered.",
    "Avoid overcrowding the pan.",
];

const LASAGNA: &str = r#"{
    "title": "Easy Lasagna",
    "total_time": "1 hr 15 mins",
    "yield": "8",
    "ingredients": [
        {"qty": "12", "unit": null, "name": "lasagna noodles"},
        {"qty": "1", "unit": "pound", "name": "ground beef"},
        {"qty": "2", "unit": "cups", "name": "mozzarella cheese (shredded)"}
    ],
    "steps": [
        {"step_number": 1, "text": "", "substeps": [
            {"sub_number": "1.1", "text": "Preheat the oven to 350 degrees F."},
            {"sub_number": "1.2", "text": "Cook the ground beef over medium-high heat."},
            {"sub_number": "1.3", "text": "Be careful, the fat may splatter."}
        ]},
        {"step_number": 2, "text": "", "substeps": [
            {"sub_number": "2.1", "text": "Layer the lasagna noodles and the mozzarella cheese."},
            {"sub_number": "2.2", "text": "Bake for 25 to 30 minutes."}
        ]}
    ]
}"#;

fn assembler() -> Assembler {
    Assembler::new(
        sous_steps::Vocabulary::from_names(
            ["onion", "garlic", "noodles", "cheese", "sauce"],
            vec!["baking dish".into()],
        ),
        &ExtractorConfig::default(),
    )
}

fn units(picks: &[(bool, usize)]) -> Vec<SentenceUnit> {
    picks
        .iter()
        .enumerate()
        .map(|(i, (actionable, pick))| {
            let text = if *actionable {
                INSTRUCTIONS[pick % INSTRUCTIONS.len()]
            } else {
                ASIDES[pick % ASIDES.len()]
            };
            SentenceUnit::new(i as u32 + 1, format!("{}.1", i + 1), text)
        })
        .collect()
}

proptest! {
    #[test]
    fn step_numbers_are_contiguous(picks in prop::collection::vec((any::<bool>(), 0usize..8), 0..24)) {
        let steps = assembler().assemble(&units(&picks));
        let numbers: Vec<u32> = steps.iter().map(|s| s.step_number).collect();
        let expected: Vec<u32> = (1..=steps.len() as u32).collect();
        prop_assert_eq!(numbers, expected);
        prop_assert_eq!(steps.len(), picks.iter().filter(|(actionable, _)| *actionable).count());
    }

    #[test]
    fn asides_become_notes_in_order(picks in prop::collection::vec((any::<bool>(), 0usize..8), 0..24)) {
        let units = units(&picks);
        let steps = assembler().assemble(&units);

        let mut expected: Vec<Vec<String>> = Vec::new();
        for (unit, (actionable, _)) in units.iter().zip(&picks) {
            if *actionable {
                expected.push(Vec::new());
            } else if let Some(notes) = expected.last_mut() {
                notes.push(unit.text.clone());
            }
        }

        let notes: Vec<Vec<String>> = steps.into_iter().map(|s| s.notes).collect();
        prop_assert_eq!(notes, expected);
    }
}

#[test_log::test]
fn annotates_scraped_recipe() -> TestResult {
    let recipe = Recipe::from_json(LASAGNA)?;
    let assembler = Assembler::for_recipe(&recipe, vec!["baking dish".into()], &ExtractorConfig::default());
    let steps = assembler.annotate(&recipe);

    assert_eq!(steps.len(), 4);
    assert_eq!(
        steps.iter().map(|s| s.substep_number.as_str()).collect::<Vec<_>>(),
        vec!["1.1", "1.2", "2.1", "2.2"]
    );
    assert_eq!(steps[1].notes, vec!["Be careful, the fat may splatter.".to_string()]);

    let beef = &steps[1];
    assert_eq!(beef.ingredients[0].name, "ground beef");
    assert_eq!(beef.ingredients[0].amount().as_deref(), Some("1 pound"));
    assert_eq!(
        beef.temperature,
        Some(TemperatureSpec::new().with("stove/burner", "MED_HIGH"))
    );

    let layer = &steps[2];
    assert_eq!(layer.actions[0].verb, "layer");
    assert!(layer.actions[0].ingredients.contains(&"mozzarella cheese".to_string()));
    assert_eq!(layer.temperature, beef.temperature);

    assert_eq!(steps[3].time, Some(TimeSpec::Range { min: 25.0, max: 30.0 }));
    Ok(())
}

#[test]
fn annotated_steps_serialize_as_records() -> TestResult {
    let recipe = Recipe::from_json(LASAGNA)?;
    let steps = Assembler::for_recipe(&recipe, vec![], &ExtractorConfig::default()).annotate(&recipe);
    let json = serde_json::to_value(&steps)?;

    assert_eq!(json[0]["step_number"], 1);
    assert_eq!(json[0]["temperature"]["oven"], "350°");
    assert_eq!(json[3]["time"]["min"], 25.0);
    assert!(json[0].get("time").is_none());
    Ok(())
}
