//! Glue between the reducer and the outside world
//!
//! - [`initial_actions`]: what the screen dispatches when it mounts
//! - [`lookup_action`]: turns a pipeline outcome into a result action
//! - [`handle_effect`]: runs effects on the task manager

use skycast_core::EffectContext;

use crate::action::Action;
use crate::api::{LookupError, WeatherService};
use crate::effect::Effect;
use crate::state::WeatherReport;

/// Shown for every lookup failure; the cause only goes to the log
pub const ERROR_MESSAGE: &str = "Could not load weather, try a different city.";

/// Task key for the in-flight lookup. Respawning under it aborts the previous one.
pub const LOOKUP_TASK: &str = "lookup";

/// Exactly one lookup, for the default city, on mount
pub fn initial_actions(default_city: &str) -> Vec<Action> {
    vec![Action::LocationSubmit(default_city.to_string())]
}

pub fn lookup_action(seq: u64, outcome: Result<WeatherReport, LookupError>) -> Action {
    match outcome {
        Ok(report) => {
            tracing::info!(
                seq,
                location = %report.location,
                weather = %report.weather,
                "Lookup finished"
            );
            Action::WeatherDidLoad { seq, report }
        }
        Err(error) => {
            tracing::warn!(seq, %error, "Lookup failed");
            Action::WeatherDidError {
                seq,
                message: error.to_string(),
            }
        }
    }
}

pub fn handle_effect(service: &WeatherService, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LookupWeather { seq, city } => {
            tracing::info!(seq, %city, "Lookup started");
            let service = service.clone();
            ctx.tasks().spawn(LOOKUP_TASK, async move {
                lookup_action(seq, service.lookup(&city).await)
            });
        }
    }
}
