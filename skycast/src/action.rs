//! Actions
//!
//! Naming convention:
//! - Prefix groups related actions: `Weather*`, `Search*`, `Ui*`
//! - "Did" marks the result of an async effect
//! - Result actions carry the sequence number of the submission that started them

use skycast_core::ActionSummary;

use crate::state::WeatherReport;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Search =====
    /// The search field text changed
    SearchQueryChange(String),

    /// Intent: look up weather for a city (ignored when blank)
    LocationSubmit(String),

    // ===== Weather =====
    /// Result: both remote calls succeeded
    WeatherDidLoad { seq: u64, report: WeatherReport },

    /// Result: either remote call failed. `message` is for logs only.
    WeatherDidError { seq: u64, message: String },

    // ===== UI =====
    /// Terminal was resized
    UiTerminalResize(u16, u16),

    // ===== Global =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}

impl skycast_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SearchQueryChange(_) => "SearchQueryChange",
            Action::LocationSubmit(_) => "LocationSubmit",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::UiTerminalResize(..) => "UiTerminalResize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}

/// Concise summaries for the action log
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad { seq, report } => format!(
                "WeatherDidLoad {{ seq: {}, location: {:?}, weather: {:?}, temp: {:.1} }}",
                seq, report.location, report.weather, report.temperature
            ),
            Action::WeatherDidError { seq, message } => {
                let msg = if message.chars().count() > 40 {
                    format!("{}...", message.chars().take(37).collect::<String>())
                } else {
                    message.clone()
                };
                format!("WeatherDidError {{ seq: {}, message: {:?} }}", seq, msg)
            }
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::Action as _;

    #[test]
    fn test_names() {
        assert_eq!(Action::Tick.name(), "Tick");
        assert_eq!(
            Action::LocationSubmit("Oslo".into()).name(),
            "LocationSubmit"
        );
    }

    #[test]
    fn test_error_summary_truncates() {
        let action = Action::WeatherDidError {
            seq: 3,
            message: "x".repeat(100),
        };
        let summary = action.summary();
        assert!(summary.contains("seq: 3"));
        assert!(summary.contains("..."));
        assert!(summary.len() < 100);
    }

    #[test]
    fn test_load_summary_is_compact() {
        let action = Action::WeatherDidLoad {
            seq: 1,
            report: WeatherReport {
                location: "London".into(),
                weather: "Clear".into(),
                temperature: 18.44,
            },
        };
        assert_eq!(
            action.summary(),
            "WeatherDidLoad { seq: 1, location: \"London\", weather: \"Clear\", temp: 18.4 }"
        );
    }
}
