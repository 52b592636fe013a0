use thiserror::Error;

/// Convenient result alias for the fuelroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a point name could not be found in the roadmap.
    #[error("unknown map point: {name}{}", format_suggestions(.suggestions))]
    UnknownPoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route reaches the destination under the fuel constraints.
    #[error("no solution for route from {start} to {goal}")]
    NoSolution { start: String, goal: String },

    /// Raised when truck data fails validation.
    #[error("invalid truck state: {message}")]
    TruckValidation { message: String },

    /// Raised when a roadmap or roadmap document fails validation.
    #[error("invalid roadmap: {message}")]
    MapValidation { message: String },

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_point_without_suggestions() {
        let error = Error::UnknownPoint {
            name: "Springfield".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(error.to_string(), "unknown map point: Springfield");
    }

    #[test]
    fn unknown_point_with_suggestions() {
        let error = Error::UnknownPoint {
            name: "Sprangfield".to_string(),
            suggestions: vec!["Springfield".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "unknown map point: Sprangfield. Did you mean 'Springfield'?"
        );
    }
}
