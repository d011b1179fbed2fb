//! Recommendation Filter
//!
//! Applies the conversation context to the destination dataset. Filtering
//! runs only for active intents, in the fixed order type -> budget ->
//! suitable-for -> style, each stage narrowing the previous one's output.
//! An active intent whose slot is still empty aborts with a targeted
//! clarifying question instead of querying.
//!
//! Set categories (style, suitable-for) use relaxation-then-fallback: a
//! broad synonym substring pass first, and only when that finds nothing a
//! stricter pass on the canonical names. The relaxed pass unions hits
//! across labels while the fallback narrows sequentially; the asymmetry is
//! intentional and covered by tests (see DESIGN.md).

use std::sync::Arc;

use travel_agent_config::{SynonymConfig, SynonymTable};
use travel_agent_core::{
    ConversationContext, Destination, Intent, MissingSlot, Recommendation, Sampler,
};
use travel_agent_dataset::DestinationStore;

/// Rows returned for a general (no-intent) request
const GENERAL_SAMPLE: usize = 3;
/// Rows returned after filtering
const FILTERED_SAMPLE: usize = 4;

/// Context-driven dataset filter
pub struct RecommendationFilter {
    synonyms: Arc<SynonymConfig>,
}

impl RecommendationFilter {
    /// Build the filter over the loaded synonym tables
    pub fn new(synonyms: Arc<SynonymConfig>) -> Self {
        Self { synonyms }
    }

    /// Filter the dataset for the given context
    pub fn recommend(
        &self,
        context: &ConversationContext,
        store: &DestinationStore,
        sampler: &dyn Sampler,
    ) -> Recommendation {
        if context.intents().is_empty() {
            let rows = store.rows();
            let picked = sampler.pick(rows.len(), GENERAL_SAMPLE);
            tracing::debug!(sampled = picked.len(), "general recommendation");
            return Recommendation::General(
                picked.into_iter().map(|i| rows[i].summary()).collect(),
            );
        }

        let mut candidates: Vec<&Destination> = store.rows().iter().collect();

        if context.has_intent(Intent::RecommendType) {
            let Some(dest_type) = context.dest_type() else {
                return Recommendation::NeedMoreInfo(MissingSlot::DestType);
            };
            candidates.retain(|row| row.dest_type.eq_ignore_ascii_case(dest_type));
        }

        if context.has_intent(Intent::RecommendBudget) {
            let Some(budget) = context.budget() else {
                return Recommendation::NeedMoreInfo(MissingSlot::Budget);
            };
            candidates.retain(|row| row.budget.eq_ignore_ascii_case(budget));
        }

        if context.has_intent(Intent::RecommendSuitableFor) {
            if context.suitable_for().is_empty() {
                return Recommendation::NeedMoreInfo(MissingSlot::SuitableFor);
            }
            candidates = relax_then_fall_back(
                &self.synonyms.suitable_for,
                context.suitable_for(),
                candidates,
                |row| &row.suitable_for,
            );
        }

        if context.has_intent(Intent::RecommendStyle) {
            if context.style().is_empty() {
                return Recommendation::NeedMoreInfo(MissingSlot::Style);
            }
            candidates = relax_then_fall_back(
                &self.synonyms.style,
                context.style(),
                candidates,
                |row| &row.travel_style,
            );
        }

        tracing::debug!(candidates = candidates.len(), "filters applied");
        let picked = sampler.pick(candidates.len(), FILTERED_SAMPLE);
        Recommendation::Matches(
            picked
                .into_iter()
                .map(|i| candidates[i].summary())
                .collect(),
        )
    }
}

/// Relaxed synonym pass, falling back to canonical-name narrowing when the
/// relaxed pass finds nothing at all
fn relax_then_fall_back<'a, F>(
    table: &SynonymTable,
    labels: &[String],
    candidates: Vec<&'a Destination>,
    field: F,
) -> Vec<&'a Destination>
where
    F: Fn(&Destination) -> &str,
{
    // Relaxed: union of per-synonym hits across all labels, preserving the
    // candidate order and deduplicating rows.
    let mut relaxed: Vec<&Destination> = Vec::new();
    for label in labels {
        let Some(synonyms) = table.synonyms_for(label) else {
            continue;
        };
        for &row in &candidates {
            let tags = field(row).to_lowercase();
            if synonyms.iter().any(|s| tags.contains(&s.to_lowercase()))
                && !relaxed.iter().any(|seen| seen.id == row.id)
            {
                relaxed.push(row);
            }
        }
    }
    if !relaxed.is_empty() {
        return relaxed;
    }

    // Fallback: sequentially narrow on the labels' own canonical names.
    let mut narrowed = candidates;
    for label in labels {
        let lower = label.to_lowercase();
        narrowed.retain(|&row| field(row).to_lowercase().contains(&lower));
    }
    narrowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_agent_core::TakeFirstSampler;

    fn dest(
        id: u32,
        name: &str,
        dest_type: &str,
        budget: &str,
        style: &str,
        suitable_for: &str,
    ) -> Destination {
        Destination {
            id,
            name: name.into(),
            country: "Spain".into(),
            dest_type: dest_type.into(),
            budget: budget.into(),
            travel_style: style.into(),
            suitable_for: suitable_for.into(),
            best_time: None,
            latitude: 0.0,
            longitude: 0.0,
            description: None,
            pois: Vec::new(),
        }
    }

    fn store() -> DestinationStore {
        DestinationStore::from_rows(vec![
            dest(1, "Barcelona", "City", "Moderate", "urban, tapas, nightlife vibe", "young adult, couple"),
            dest(2, "Ibiza", "Island", "Luxury", "beach lovers, clubs", "group, nightlife seeker"),
            dest(3, "Granada", "City", "Budget-friendly", "historic, tapas", "history buff, budget traveler"),
            dest(4, "Mallorca", "Island", "Moderate", "sandy beaches, relaxed", "family, beach lover"),
        ])
    }

    fn filter() -> RecommendationFilter {
        RecommendationFilter::new(Arc::new(SynonymConfig::default()))
    }

    fn names(rec: &Recommendation) -> Vec<String> {
        match rec {
            Recommendation::General(rows) | Recommendation::Matches(rows) => {
                rows.iter().map(|r| r.name.clone()).collect()
            }
            Recommendation::NeedMoreInfo(_) => Vec::new(),
        }
    }

    #[test]
    fn test_no_intents_samples_general() {
        let ctx = ConversationContext::new();
        let rec = filter().recommend(&ctx, &store(), &TakeFirstSampler);

        match &rec {
            Recommendation::General(rows) => assert_eq!(rows.len(), 3),
            other => panic!("expected general recommendation, got {other:?}"),
        }
    }

    #[test]
    fn test_type_filter_case_insensitive_equality() {
        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendType);
        ctx.set_dest_type("city");

        let rec = filter().recommend(&ctx, &store(), &TakeFirstSampler);
        assert_eq!(names(&rec), vec!["Barcelona", "Granada"]);
    }

    #[test]
    fn test_active_intent_with_empty_slot_asks() {
        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendType);
        ctx.set_dest_type("City");
        ctx.record_intent(Intent::RecommendBudget);

        let rec = filter().recommend(&ctx, &store(), &TakeFirstSampler);
        match rec {
            Recommendation::NeedMoreInfo(slot) => assert_eq!(slot, MissingSlot::Budget),
            other => panic!("expected clarifying question, got {other:?}"),
        }
    }

    #[test]
    fn test_filters_narrow_sequentially() {
        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendType);
        ctx.set_dest_type("Island");
        ctx.record_intent(Intent::RecommendBudget);
        ctx.set_budget("Moderate");

        let rec = filter().recommend(&ctx, &store(), &TakeFirstSampler);
        assert_eq!(names(&rec), vec!["Mallorca"]);
    }

    #[test]
    fn test_style_relaxed_pass_unions_across_labels() {
        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendStyle);
        ctx.add_style("Beach");
        ctx.add_style("Nightlife");

        // "Beach" synonyms hit Ibiza and Mallorca; "Nightlife" synonyms hit
        // Barcelona and Ibiza. The relaxed pass unions, it does not
        // intersect.
        let rec = filter().recommend(&ctx, &store(), &TakeFirstSampler);
        let mut got = names(&rec);
        got.sort();
        assert_eq!(got, vec!["Barcelona", "Ibiza", "Mallorca"]);
    }

    #[test]
    fn test_style_fallback_narrows_on_canonical_names() {
        // A label with no synonym hits anywhere forces the fallback pass,
        // which matches the canonical name itself as a substring.
        let rows = vec![
            dest(1, "A", "City", "Moderate", "quiet historic center", "couple"),
            dest(2, "B", "City", "Moderate", "modern", "couple"),
        ];
        let store = DestinationStore::from_rows(rows);

        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendStyle);
        ctx.add_style("Historic center");

        let rec = filter().recommend(&ctx, &store, &TakeFirstSampler);
        assert_eq!(names(&rec), vec!["A"]);
    }

    #[test]
    fn test_zero_matches_returned_as_empty() {
        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendType);
        ctx.set_dest_type("Lake Region");

        let rec = filter().recommend(&ctx, &store(), &TakeFirstSampler);
        match rec {
            Recommendation::Matches(rows) => assert!(rows.is_empty()),
            other => panic!("expected empty matches, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_candidate_before_sampling() {
        // A row with matching type/budget must survive into the candidate
        // set; with the deterministic sampler it is always returned.
        let mut rows = store().rows().to_vec();
        rows.push(dest(9, "Valencia", "City", "Moderate", "beach", "family"));
        let store = DestinationStore::from_rows(rows);

        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendType);
        ctx.set_dest_type("City");
        ctx.record_intent(Intent::RecommendBudget);
        ctx.set_budget("Moderate");

        let rec = filter().recommend(&ctx, &store, &TakeFirstSampler);
        assert!(names(&rec).contains(&"Valencia".to_string()));
    }

    #[test]
    fn test_matches_capped_at_four() {
        let rows: Vec<Destination> = (0..10)
            .map(|i| dest(i, &format!("City{i}"), "City", "Moderate", "urban", "couple"))
            .collect();
        let store = DestinationStore::from_rows(rows);

        let mut ctx = ConversationContext::new();
        ctx.record_intent(Intent::RecommendType);
        ctx.set_dest_type("City");

        let rec = filter().recommend(&ctx, &store, &TakeFirstSampler);
        assert_eq!(rec.len(), 4);
    }
}
