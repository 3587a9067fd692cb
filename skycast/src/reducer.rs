//! Reducer - the only writer of `AppState`
//!
//! - fn(state: &mut AppState, action: Action) -> DispatchResult<Effect>
//! - `changed` tells the runtime to re-render
//! - Network work is returned as an `Effect`, never performed here

use skycast_core::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search =====
        Action::SearchQueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::LocationSubmit(city) => {
            let city = city.trim();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }

            state.request_seq += 1;
            state.loading = true;
            state.error = false;
            state.query.clear();
            DispatchResult::changed_with(Effect::LookupWeather {
                seq: state.request_seq,
                city: city.to_string(),
            })
        }

        // ===== Weather =====
        Action::WeatherDidLoad { seq, report } => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.apply_report(report);
            state.loading = false;
            state.error = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError { seq, .. } => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.loading = false;
            state.error = true;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render for the spinner
            if state.loading {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherReport;

    fn london() -> WeatherReport {
        WeatherReport {
            location: "London".into(),
            weather: "Clear".into(),
            temperature: 18.4,
        }
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        for input in ["", " ", "\t", "  \n "] {
            let mut state = AppState::default();
            let before = state.clone();

            let result = reducer(&mut state, Action::LocationSubmit(input.into()));

            assert!(!result.changed);
            assert!(!result.has_effects());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_submit_enters_loading() {
        let mut state = AppState {
            error: true,
            query: "  Oslo ".into(),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::LocationSubmit("  Oslo ".into()));

        assert!(result.changed);
        assert!(state.loading);
        assert!(!state.error);
        assert!(state.query.is_empty());
        assert_eq!(state.request_seq, 1);
        assert_eq!(
            result.effects,
            vec![Effect::LookupWeather {
                seq: 1,
                city: "Oslo".into()
            }]
        );
    }

    #[test]
    fn test_did_load_populates_result() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationSubmit("London".into()));

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                seq: 1,
                report: london(),
            },
        );

        assert!(result.changed);
        assert!(!state.loading);
        assert!(!state.error);
        assert_eq!(state.location, "London");
        assert_eq!(state.weather, "Clear");
        assert_eq!(state.temperature, 18.4);
        assert!(state.has_result());
    }

    #[test]
    fn test_did_load_with_empty_location_name_is_a_result() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationSubmit("Somewhere".into()));

        reducer(
            &mut state,
            Action::WeatherDidLoad {
                seq: 1,
                report: WeatherReport {
                    location: String::new(),
                    ..london()
                },
            },
        );

        assert!(state.loaded);
        assert!(state.has_result());
        assert_eq!(state.weather, "Clear");
    }

    #[test]
    fn test_did_error_sets_error() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationSubmit("Zzzqx".into()));

        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                seq: 1,
                message: "city not found".into(),
            },
        );

        assert!(result.changed);
        assert!(!state.loading);
        assert!(state.error);
        assert!(!state.has_result());
    }

    #[test]
    fn test_error_keeps_but_hides_previous_result() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationSubmit("London".into()));
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                seq: 1,
                report: london(),
            },
        );
        reducer(&mut state, Action::LocationSubmit("Zzzqx".into()));
        reducer(
            &mut state,
            Action::WeatherDidError {
                seq: 2,
                message: "not found".into(),
            },
        );

        assert_eq!(state.location, "London");
        assert!(state.error);
        assert!(!state.has_result());
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationSubmit("London".into()));
        reducer(&mut state, Action::LocationSubmit("Paris".into()));
        assert_eq!(state.request_seq, 2);

        // The London lookup finishes late
        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                seq: 1,
                report: london(),
            },
        );
        assert!(!result.changed);
        assert!(state.loading);
        assert!(state.location.is_empty());
        assert!(!state.loaded);

        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                seq: 1,
                message: "late".into(),
            },
        );
        assert!(!result.changed);
        assert!(!state.error);
    }

    #[test]
    fn test_query_change() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::SearchQueryChange("Lon".into())).changed);
        assert_eq!(state.query, "Lon");

        assert!(!reducer(&mut state, Action::SearchQueryChange("Lon".into())).changed);
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = AppState::default();
        assert_eq!(state.terminal_size, (80, 24));

        assert!(reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
        assert_eq!(state.terminal_size, (100, 40));

        assert!(!reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
    }

    #[test]
    fn test_tick_only_rerenders_when_loading() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);

        state.loading = true;
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 2);
    }
}
