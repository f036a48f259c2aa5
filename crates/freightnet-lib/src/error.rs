use thiserror::Error;

/// Convenient result alias for the freightnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a node name could not be found in the network.
    #[error("unknown node: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when removing or simulating an edge that does not exist.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    /// Raised when a scenario declares an edge with a negative or non-finite cost.
    #[error("invalid cost {cost} on edge {from} -> {to}")]
    InvalidCost { from: String, to: String, cost: f64 },

    /// Raised when a computed route plan lacks any stops.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
