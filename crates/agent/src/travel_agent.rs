//! Travel Agent Facade
//!
//! The single entry point a request handler talks to. Operations are total:
//! every failure class maps to a conversational reply and `handle_turn`
//! never leaves the context half-updated on error.

use std::sync::Arc;

use travel_agent_config::SynonymConfig;
use travel_agent_core::{
    ConversationContext, Error, LinguisticAnalyzer, PointOfInterest, RandomSampler, Sampler,
};
use travel_agent_dataset::DestinationStore;
use travel_agent_nlu::{IntentExtractor, RuleAnalyzer};

use crate::composer::{compose, TurnReply};
use crate::filter::RecommendationFilter;

/// The conversational travel agent
pub struct TravelAgent {
    store: Arc<DestinationStore>,
    extractor: IntentExtractor,
    filter: RecommendationFilter,
    analyzer: Box<dyn LinguisticAnalyzer>,
    sampler: Box<dyn Sampler>,
}

impl TravelAgent {
    /// Build an agent with the default analyzer and random sampling
    pub fn new(store: Arc<DestinationStore>, synonyms: Arc<SynonymConfig>) -> Self {
        Self::with_parts(
            store,
            synonyms,
            Box::new(RuleAnalyzer::new()),
            Box::new(RandomSampler),
        )
    }

    /// Build an agent with explicit analyzer and sampler implementations
    pub fn with_parts(
        store: Arc<DestinationStore>,
        synonyms: Arc<SynonymConfig>,
        analyzer: Box<dyn LinguisticAnalyzer>,
        sampler: Box<dyn Sampler>,
    ) -> Self {
        Self {
            store,
            extractor: IntentExtractor::new(Arc::clone(&synonyms)),
            filter: RecommendationFilter::new(synonyms),
            analyzer,
            sampler,
        }
    }

    /// Process one conversational turn, mutating the context in place
    ///
    /// Always returns a reply. Blank input, an unavailable analyzer and an
    /// empty dataset each produce their own conversational message; in the
    /// first two cases the context is left untouched.
    pub fn handle_turn(&self, raw_text: &str, context: &mut ConversationContext) -> TurnReply {
        match self.try_handle_turn(raw_text, context) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "turn degraded to a fallback reply");
                TurnReply::text(fallback_reply(&e))
            }
        }
    }

    fn try_handle_turn(
        &self,
        raw_text: &str,
        context: &mut ConversationContext,
    ) -> travel_agent_core::Result<TurnReply> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(Error::InputEmpty);
        }
        if self.store.is_empty() {
            return Err(Error::DatasetEmpty);
        }

        // extract analyzes before mutating, so an analyzer failure leaves
        // the context untouched
        let detected = self.extractor.extract(self.analyzer.as_ref(), text, context)?;
        tracing::debug!(turn_intents = detected.len(), "turn extracted");

        let result = self.filter.recommend(context, &self.store, self.sampler.as_ref());
        Ok(compose(&result, context))
    }

    /// Description text for a destination, by numeric id or name
    ///
    /// Unknown keys and missing descriptions both degrade to readable text.
    pub fn lookup_description(&self, key: &str) -> String {
        match self.find(key) {
            Some(row) => row.description(),
            None => {
                tracing::debug!(error = %Error::LocationNotFound(key.to_string()), "lookup miss");
                format!("Sorry, I couldn't find any information about '{}'.", key.trim())
            }
        }
    }

    /// Points of interest for a destination, by numeric id or name
    ///
    /// Empty when the destination is unknown or carries no POI rows.
    pub fn lookup_points_of_interest(&self, key: &str) -> Vec<PointOfInterest> {
        self.find(key).map(|row| row.pois.clone()).unwrap_or_default()
    }

    fn find(&self, key: &str) -> Option<&travel_agent_core::Destination> {
        let key = key.trim();
        if let Ok(id) = key.parse::<u32>() {
            return self.store.get(id);
        }
        self.store.find_by_name(key)
    }
}

fn fallback_reply(error: &Error) -> &'static str {
    match error {
        Error::InputEmpty => "Hmm, I didn't quite catch that. Can you rephrase?",
        Error::AnalyzerUnavailable(_) => {
            "Sorry, I'm having trouble understanding language right now. Can you be more specific?"
        }
        Error::DatasetEmpty => "Sorry, I don't have any destination data available right now.",
        Error::LocationNotFound(_) => "Sorry, I couldn't find that location.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_agent_core::{Destination, Result, TakeFirstSampler, Token};

    struct BrokenAnalyzer;

    impl LinguisticAnalyzer for BrokenAnalyzer {
        fn analyze(&self, _text: &str) -> Result<Vec<Token>> {
            Err(Error::AnalyzerUnavailable("model missing".into()))
        }
    }

    fn dest(id: u32, name: &str) -> Destination {
        Destination {
            id,
            name: name.into(),
            country: "Portugal".into(),
            dest_type: "City".into(),
            budget: "Moderate".into(),
            travel_style: "food, historical".into(),
            suitable_for: "couples".into(),
            best_time: Some("Spring".into()),
            latitude: 38.72,
            longitude: -9.14,
            description: Some("Hilly coastal capital.".into()),
            pois: vec![PointOfInterest {
                name: "Belem Tower".into(),
                poi_type: "landmark".into(),
                lat: 38.69,
                lng: -9.21,
                description: None,
            }],
        }
    }

    fn agent_with(rows: Vec<Destination>) -> TravelAgent {
        TravelAgent::with_parts(
            Arc::new(DestinationStore::from_rows(rows)),
            Arc::new(SynonymConfig::default()),
            Box::new(RuleAnalyzer::new()),
            Box::new(TakeFirstSampler),
        )
    }

    #[test]
    fn test_blank_input_leaves_context_untouched() {
        let agent = agent_with(vec![dest(1, "Lisbon")]);
        let mut ctx = ConversationContext::new();

        let reply = agent.handle_turn("   \t  ", &mut ctx);
        assert!(reply.reply.contains("didn't quite catch"));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_analyzer_failure_leaves_context_untouched() {
        let agent = TravelAgent::with_parts(
            Arc::new(DestinationStore::from_rows(vec![dest(1, "Lisbon")])),
            Arc::new(SynonymConfig::default()),
            Box::new(BrokenAnalyzer),
            Box::new(TakeFirstSampler),
        );
        let mut ctx = ConversationContext::new();

        let reply = agent.handle_turn("recommend a cheap city", &mut ctx);
        assert!(reply.reply.contains("trouble understanding"));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_empty_dataset_always_reports_unavailable() {
        let agent = agent_with(Vec::new());
        let mut ctx = ConversationContext::new();

        for input in ["recommend a city", "anything at all"] {
            let reply = agent.handle_turn(input, &mut ctx);
            assert!(reply.reply.contains("destination data available"));
            assert!(reply.locations.is_empty());
        }
    }

    #[test]
    fn test_lookup_description_by_id_and_name() {
        let agent = agent_with(vec![dest(1, "Lisbon")]);
        assert_eq!(agent.lookup_description("1"), "Hilly coastal capital.");
        assert_eq!(agent.lookup_description("lisbon"), "Hilly coastal capital.");
        assert!(agent.lookup_description("Atlantis").contains("couldn't find"));
    }

    #[test]
    fn test_lookup_pois_unknown_key_is_empty() {
        let agent = agent_with(vec![dest(1, "Lisbon")]);
        assert_eq!(agent.lookup_points_of_interest("Lisbon").len(), 1);
        assert!(agent.lookup_points_of_interest("Atlantis").is_empty());
    }
}
