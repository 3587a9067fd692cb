//! skycast - terminal weather lookup
//!
//! Type a city, get its current condition and temperature. Built on the
//! `skycast-core` dispatch runtime:
//! 1. Event (keyboard) -> Component.handle_event() -> Actions
//! 2. Actions dispatched to the EffectStore
//! 3. Reducer updates state and returns effects
//! 4. Effects run as keyed tasks (geocode -> weather)
//! 5. If state changed, re-render

pub mod action;
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod effect;
pub mod format;
pub mod images;
pub mod logging;
pub mod reducer;
pub mod state;
