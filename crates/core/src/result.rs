//! Recommendation Results
//!
//! What the filter hands to the composer: either a result set or a signal
//! that more information is needed before any dataset query makes sense.

use serde::{Deserialize, Serialize};

use crate::destination::DestinationSummary;

/// Which required slot is empty for an active intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSlot {
    DestType,
    Budget,
    Style,
    SuitableFor,
}

impl MissingSlot {
    /// The literal clarifying question rendered for this slot
    pub fn question(&self) -> &'static str {
        match self {
            MissingSlot::DestType => {
                "Could you please specify what type of destination you are looking for (e.g., city, beach)?"
            }
            MissingSlot::Budget => {
                "Could you please specify your budget level (e.g., budget-friendly, mid-range, luxury)?"
            }
            MissingSlot::Style | MissingSlot::SuitableFor => {
                "Could you please specify what travel style you are looking for (e.g., adventure, relaxing)?"
            }
        }
    }
}

/// Outcome of a filtering pass
#[derive(Debug, Clone)]
pub enum Recommendation {
    /// An active intent has an empty slot; ask before querying
    NeedMoreInfo(MissingSlot),
    /// No intents active: up to 3 rows sampled from the whole dataset
    General(Vec<DestinationSummary>),
    /// Filtered result set, up to 4 sampled rows; empty means zero matches
    Matches(Vec<DestinationSummary>),
}

impl Recommendation {
    /// Number of rows carried, zero for clarifying questions
    pub fn len(&self) -> usize {
        match self {
            Recommendation::NeedMoreInfo(_) => 0,
            Recommendation::General(rows) | Recommendation::Matches(rows) => rows.len(),
        }
    }

    /// Whether this result carries no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
