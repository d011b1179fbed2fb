//! Intent Detection and Slot Filling
//!
//! Maps analyzed free text onto the four filter intents and their slot
//! values. Each category runs two independent passes:
//!
//! 1. trigger scan: the intent fires when any token lemma equals a trigger
//!    keyword (category base keywords plus every synonym in the category's
//!    table);
//! 2. label resolution: a case-insensitive substring scan of the *raw*
//!    input against the synonym table, in declaration order.
//!
//! The passes are deliberately independent: an intent can fire without any
//! label resolving, leaving the slot unset for that turn.

use std::collections::HashSet;
use std::sync::Arc;

use travel_agent_config::synonyms::{capitalize, title_case};
use travel_agent_config::{SynonymConfig, SynonymTable};
use travel_agent_core::{ConversationContext, Intent, LinguisticAnalyzer, Result, Token};

/// Base trigger keywords per category, on top of the synonym tables
const TYPE_KEYWORDS: &[&str] = &[
    "type", "kind", "like", "want", "city", "island", "beach", "mountain", "countryside",
    "coastal", "lake", "region", "site",
];

const BUDGET_KEYWORDS: &[&str] = &[
    "budget",
    "cheap",
    "inexpensive",
    "affordable",
    "luxury",
    "expensive",
    "costly",
    "budget-friendly",
    "mid-range",
    "moderate",
    "low",
    "high",
];

const STYLE_KEYWORDS: &[&str] = &[
    "style",
    "travel",
    "vacation",
    "vacation style",
    "travel style",
    "like",
    "want",
    "adventure",
    "relax",
    "cultural",
    "romantic",
    "nature",
    "historical",
    "foodie",
    "wellness",
];

/// Intent and slot extractor
///
/// Holds the flattened trigger sets, built once from the synonym config.
pub struct IntentExtractor {
    synonyms: Arc<SynonymConfig>,
    type_triggers: HashSet<String>,
    budget_triggers: HashSet<String>,
    style_triggers: HashSet<String>,
    suitable_for_triggers: HashSet<String>,
}

impl IntentExtractor {
    /// Build the extractor from the loaded synonym tables
    pub fn new(synonyms: Arc<SynonymConfig>) -> Self {
        let type_triggers = build_triggers(TYPE_KEYWORDS, &synonyms.dest_type);
        let budget_triggers = build_triggers(BUDGET_KEYWORDS, &synonyms.budget);
        let style_triggers = build_triggers(STYLE_KEYWORDS, &synonyms.style);
        let suitable_for_triggers = build_triggers(&[], &synonyms.suitable_for);

        Self {
            synonyms,
            type_triggers,
            budget_triggers,
            style_triggers,
            suitable_for_triggers,
        }
    }

    /// Detect intents in `text` and merge slot values into `context`
    ///
    /// Returns the intents detected this turn. The context only grows:
    /// scalar slots overwrite, set slots union, intents accumulate.
    pub fn extract(
        &self,
        analyzer: &dyn LinguisticAnalyzer,
        text: &str,
        context: &mut ConversationContext,
    ) -> Result<Vec<Intent>> {
        let tokens = analyzer.analyze(text)?;
        let lower = text.to_lowercase();
        let mut detected = Vec::new();

        if self.triggered(&tokens, &self.type_triggers) {
            detected.push(Intent::RecommendType);
            if let Some(label) = resolve_scalar(&self.synonyms.dest_type, &lower) {
                context.set_dest_type(title_case(label));
            }
        }

        if self.triggered(&tokens, &self.budget_triggers) {
            detected.push(Intent::RecommendBudget);
            if let Some(label) = resolve_scalar(&self.synonyms.budget, &lower) {
                context.set_budget(capitalize(label));
            }
        }

        if self.triggered(&tokens, &self.style_triggers) {
            detected.push(Intent::RecommendStyle);
            for label in resolve_set(&self.synonyms.style, &lower) {
                context.add_style(capitalize(label));
            }
        }

        if self.triggered(&tokens, &self.suitable_for_triggers) {
            detected.push(Intent::RecommendSuitableFor);
            for label in resolve_set(&self.synonyms.suitable_for, &lower) {
                context.add_suitable_for(capitalize(label));
            }
        }

        for intent in &detected {
            context.record_intent(*intent);
        }

        tracing::debug!(?detected, "intent extraction complete");
        Ok(detected)
    }

    fn triggered(&self, tokens: &[Token], triggers: &HashSet<String>) -> bool {
        tokens.iter().any(|t| triggers.contains(&t.lemma))
    }
}

fn build_triggers(base: &[&str], table: &SynonymTable) -> HashSet<String> {
    let mut triggers: HashSet<String> = base.iter().map(|k| k.to_lowercase()).collect();
    triggers.extend(table.all_synonyms().map(|s| s.to_lowercase()));
    triggers
}

/// First synonym substring hit wins across the whole table, then stop
fn resolve_scalar<'a>(table: &'a SynonymTable, lower_input: &str) -> Option<&'a str> {
    for entry in table.iter() {
        for synonym in &entry.synonyms {
            if lower_input.contains(&synonym.to_lowercase()) {
                return Some(&entry.label);
            }
        }
    }
    None
}

/// Every label with at least one synonym substring hit, in table order
fn resolve_set<'a>(table: &'a SynonymTable, lower_input: &str) -> Vec<&'a str> {
    let mut labels = Vec::new();
    for entry in table.iter() {
        if entry
            .synonyms
            .iter()
            .any(|synonym| lower_input.contains(&synonym.to_lowercase()))
        {
            labels.push(entry.label.as_str());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::RuleAnalyzer;

    fn extractor() -> IntentExtractor {
        IntentExtractor::new(Arc::new(SynonymConfig::default()))
    }

    fn run(text: &str, context: &mut ConversationContext) -> Vec<Intent> {
        extractor()
            .extract(&RuleAnalyzer::new(), text, context)
            .unwrap()
    }

    #[test]
    fn test_cheap_beach_vacation_scenario() {
        let mut ctx = ConversationContext::new();
        let detected = run("I want a cheap beach vacation", &mut ctx);

        assert!(detected.contains(&Intent::RecommendBudget));
        assert!(detected.contains(&Intent::RecommendStyle));
        assert_eq!(ctx.budget(), Some("Budget-friendly"));
        assert!(ctx.style().contains(&"Beach".to_string()));
    }

    #[test]
    fn test_type_resolution_is_first_match_wins() {
        let mut ctx = ConversationContext::new();
        run("an urban island escape", &mut ctx);

        // "city" is declared before "island"; its synonym "urban" wins and
        // the scan stops there.
        assert_eq!(ctx.dest_type(), Some("City"));
    }

    #[test]
    fn test_title_casing_of_type_label() {
        let mut ctx = ConversationContext::new();
        run("somewhere alpine please", &mut ctx);
        assert_eq!(ctx.dest_type(), Some("Mountain Region"));
    }

    #[test]
    fn test_intent_fires_without_label() {
        let mut ctx = ConversationContext::new();
        let detected = run("what kind do you have", &mut ctx);

        assert!(detected.contains(&Intent::RecommendType));
        assert!(ctx.dest_type().is_none());
        assert!(ctx.has_intent(Intent::RecommendType));
    }

    #[test]
    fn test_style_labels_accumulate_across_turns() {
        let mut ctx = ConversationContext::new();
        run("a romantic getaway", &mut ctx);
        run("with some hiking", &mut ctx);

        assert!(ctx.style().contains(&"Romantic".to_string()));
        assert!(ctx.style().contains(&"Hiking".to_string()));
        // Repeating a turn adds nothing
        let before = ctx.style().len();
        run("a romantic getaway", &mut ctx);
        assert_eq!(ctx.style().len(), before);
    }

    #[test]
    fn test_budget_overwrites_on_later_turn() {
        let mut ctx = ConversationContext::new();
        run("something cheap", &mut ctx);
        assert_eq!(ctx.budget(), Some("Budget-friendly"));

        run("actually make it luxury", &mut ctx);
        assert_eq!(ctx.budget(), Some("Luxury"));
        // The earlier intent is still recorded exactly once
        assert_eq!(
            ctx.intents()
                .iter()
                .filter(|i| **i == Intent::RecommendBudget)
                .count(),
            1
        );
    }

    #[test]
    fn test_hyphenated_trigger_fires_budget() {
        let mut ctx = ConversationContext::new();
        let detected = run("a mid-range trip", &mut ctx);

        assert!(detected.contains(&Intent::RecommendBudget));
        assert_eq!(ctx.budget(), Some("Moderate"));
    }

    #[test]
    fn test_suitable_for_via_synonym() {
        let mut ctx = ConversationContext::new();
        let detected = run("good for a family", &mut ctx);

        assert!(detected.contains(&Intent::RecommendSuitableFor));
        assert!(ctx.suitable_for().contains(&"Families".to_string()));
    }

    #[test]
    fn test_no_triggers_no_intents() {
        let mut ctx = ConversationContext::new();
        let detected = run("hello there", &mut ctx);

        assert!(detected.is_empty());
        assert!(ctx.is_empty());
    }
}
