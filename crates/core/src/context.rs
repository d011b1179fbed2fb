//! Conversation Context
//!
//! Per-session dialogue state for the travel agent. Scalar slots (destination
//! type, budget) are overwritten by later turns; set slots (style, suitable
//! for) and the intent list only ever grow, preserving first-seen order.
//! Nothing is cleared except by an explicit session reset.

use serde::{Deserialize, Serialize};

/// Filter dimensions the user can ask along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Filter by destination type (city, island, ...)
    RecommendType,
    /// Filter by budget tier
    RecommendBudget,
    /// Filter by travel style tags
    RecommendStyle,
    /// Filter by audience tags
    RecommendSuitableFor,
    /// No specific dimension requested; sample from the whole dataset.
    /// Never stored in the context, only reported by the filter.
    RecommendGeneral,
}

impl Intent {
    /// Stable string form, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::RecommendType => "recommend_type",
            Intent::RecommendBudget => "recommend_budget",
            Intent::RecommendStyle => "recommend_style",
            Intent::RecommendSuitableFor => "recommend_suitable_for",
            Intent::RecommendGeneral => "recommend_general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel Conversation Context
///
/// Tracks the active intents and slot values accumulated across a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Active intents, union-accumulated across turns, never removed
    intents: Vec<Intent>,
    /// Canonical destination-type label (e.g. "City")
    dest_type: Option<String>,
    /// Canonical budget label (e.g. "Luxury")
    budget: Option<String>,
    /// Canonical travel-style labels, union-accumulated
    style: Vec<String>,
    /// Canonical audience labels, union-accumulated
    suitable_for: Vec<String>,
}

impl ConversationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Active intents in first-seen order
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Whether the given intent has fired this session
    pub fn has_intent(&self, intent: Intent) -> bool {
        self.intents.contains(&intent)
    }

    /// Record an intent if not already recorded
    pub fn record_intent(&mut self, intent: Intent) {
        if !self.intents.contains(&intent) {
            self.intents.push(intent);
        }
    }

    /// Canonical destination-type label
    pub fn dest_type(&self) -> Option<&str> {
        self.dest_type.as_deref()
    }

    /// Overwrite the destination-type slot
    pub fn set_dest_type(&mut self, value: impl Into<String>) {
        self.dest_type = Some(value.into());
    }

    /// Canonical budget label
    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    /// Overwrite the budget slot
    pub fn set_budget(&mut self, value: impl Into<String>) {
        self.budget = Some(value.into());
    }

    /// Accumulated travel-style labels in first-seen order
    pub fn style(&self) -> &[String] {
        &self.style
    }

    /// Add a style label if not already present
    pub fn add_style(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.style.contains(&value) {
            self.style.push(value);
        }
    }

    /// Accumulated audience labels in first-seen order
    pub fn suitable_for(&self) -> &[String] {
        &self.suitable_for
    }

    /// Add an audience label if not already present
    pub fn add_suitable_for(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.suitable_for.contains(&value) {
            self.suitable_for.push(value);
        }
    }

    /// Whether any specific intent has fired this session
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Explicit session reset; the only way state is ever cleared
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
