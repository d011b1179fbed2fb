//! Response Composer
//!
//! Turns a filtering outcome into the reply text and the list of location
//! buttons the client renders. Pure function of the recommendation and the
//! context; all wording lives here and nowhere else.

use serde::{Deserialize, Serialize};

use travel_agent_core::{ConversationContext, DestinationSummary, Recommendation};

/// Maximum buttons rendered for a large result set
const TOP_BUTTONS: usize = 5;

/// One clickable destination in the client UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationButton {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<&DestinationSummary> for LocationButton {
    fn from(row: &DestinationSummary) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            lat: row.latitude,
            lng: row.longitude,
        }
    }
}

/// A composed conversational turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReply {
    /// Reply text shown in the chat transcript
    pub reply: String,
    /// Destinations offered as buttons alongside the reply
    pub locations: Vec<LocationButton>,
}

impl TurnReply {
    /// A text-only reply with no location buttons
    pub fn text(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            locations: Vec::new(),
        }
    }
}

/// Render a recommendation into reply text plus location buttons
pub fn compose(result: &Recommendation, context: &ConversationContext) -> TurnReply {
    match result {
        Recommendation::NeedMoreInfo(slot) => TurnReply::text(slot.question()),
        Recommendation::General(rows) => compose_general(rows),
        Recommendation::Matches(rows) if rows.is_empty() => compose_no_matches(context),
        Recommendation::Matches(rows) if rows.len() > 3 => compose_many(rows, context),
        Recommendation::Matches(rows) => compose_few(rows),
    }
}

fn compose_general(rows: &[DestinationSummary]) -> TurnReply {
    if rows.is_empty() {
        return TurnReply::text("Sorry, no general recommendations at the moment.");
    }

    let mut lines = vec!["Here are some general recommendations:".to_string()];
    for row in rows {
        lines.push(format!(
            "- {}, {} ({}, Budget: {})",
            row.name, row.country, row.dest_type, row.budget
        ));
    }
    TurnReply::text(lines.join("\n"))
}

fn compose_no_matches(context: &ConversationContext) -> TurnReply {
    let all_set = context.dest_type().is_some()
        && context.budget().is_some()
        && !context.style().is_empty();

    let hint = if all_set {
        "Maybe try adjusting the type, budget, or style?"
    } else {
        "Could you tell me more about the type, budget, or style you're looking for?"
    };
    TurnReply::text(format!(
        "No destination from my list matches your preferences. {hint}"
    ))
}

fn compose_many(rows: &[DestinationSummary], context: &ConversationContext) -> TurnReply {
    // A broad result set means a slot is probably still open; narrow before
    // listing.
    let Some(dest_type) = context.dest_type() else {
        return TurnReply::text(
            "What type of destination are you looking for? (e.g., city, beach, mountain, island)",
        );
    };
    let Some(budget) = context.budget() else {
        return TurnReply::text("What is your ideal budget? (e.g., affordable, mid-range, luxury)");
    };
    if context.style().is_empty() {
        return TurnReply::text(
            "What style of destination are you looking for? (e.g., relaxing, adventurous, historical)",
        );
    }

    let mut reply = format!(
        "Found quite a few options! Here are some top suggestions for a {} {} trip matching your style:",
        budget.to_lowercase(),
        dest_type.to_lowercase()
    );
    if rows.len() > TOP_BUTTONS {
        reply.push_str(&format!("\n(Showing {TOP_BUTTONS} of {} matches)", rows.len()));
    }

    TurnReply {
        reply,
        locations: rows.iter().take(TOP_BUTTONS).map(LocationButton::from).collect(),
    }
}

fn compose_few(rows: &[DestinationSummary]) -> TurnReply {
    let mut lines = vec!["Based on your preferences, here are a few ideas:".to_string()];
    for row in rows {
        let mut line = format!(
            "- {} in {} ({}, {}).",
            row.name, row.country, row.dest_type, row.budget
        );
        if let Some(best_time) = row.best_time.as_deref().filter(|s| !s.trim().is_empty()) {
            line.push_str(&format!(" Best time to visit: {best_time}."));
        }
        lines.push(line);
    }

    TurnReply {
        reply: lines.join("\n"),
        locations: rows.iter().map(LocationButton::from).collect(),
    }
}
