//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions represent intents to change state. They should be:
/// - Clone: Actions may be logged or handed to middleware before the reducer
/// - Debug: For debugging and logging
/// - Send + 'static: Async tasks send them back across threads
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Human-readable one-line description of an action for logs.
///
/// The default uses `Debug`; override it for actions that carry bulky payloads.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
