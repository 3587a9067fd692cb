//! Dispatch runtime for the skycast weather TUI
//!
//! A small Redux/Elm-style core: all state lives in one store, every mutation
//! goes through a reducer, and side effects are returned from the reducer as
//! data instead of being performed inline.
//!
//! # Core Concepts
//!
//! - **Action**: Describes something that happened (user input or async result)
//! - **EffectStore**: Owns the state and runs the reducer
//! - **Effect**: Declarative side effect returned by the reducer
//! - **TaskManager**: Runs effects as keyed async tasks that report back with actions
//! - **Component**: Pure UI element rendering from props and emitting actions
//! - **EffectRuntime**: The event → action → reducer → effect → render loop
//!
//! # Async Pattern
//!
//! Async work uses a two-phase action pattern:
//!
//! 1. **Intent actions** change state and return an effect (e.g., `LocationSubmit`)
//! 2. **Result actions** carry the outcome back (e.g., `WeatherDidLoad`, `WeatherDidError`)
//!
//! ```ignore
//! fn reducer(state: &mut State, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::DataFetch => {
//!             state.loading = true;
//!             DispatchResult::changed_with(Effect::Fetch)
//!         }
//!         Action::DataDidLoad(data) => {
//!             state.loading = false;
//!             state.data = Some(data);
//!             DispatchResult::changed()
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod runtime;
pub mod tasks;
pub mod testing;

pub use action::{Action, ActionSummary};
pub use component::Component;
pub use effect::{
    DispatchResult, EffectReducer, EffectStore, Middleware, NoopMiddleware, TracingMiddleware,
};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome};
pub use tasks::{TaskKey, TaskManager};

pub use ratatui::{layout::Rect, Frame};
