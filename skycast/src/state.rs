//! Application state - single source of truth
//!
//! - Components receive `&AppState` as props
//! - Only the reducer mutates state
//! - The reducer reports whether a re-render is needed

/// Spinner frame period while a lookup is in flight
pub const LOADING_ANIM_TICK_MS: u64 = 80;

/// Normalized result of one successful lookup
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherReport {
    /// Display name of the resolved location
    pub location: String,
    /// Condition string, e.g. "Clear" or "Rain"
    pub weather: String,
    /// Provider's native unit, unrounded
    pub temperature: f64,
}

/// Everything the UI needs to render
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub location: String,
    pub loading: bool,
    /// When set, the result fields below are stale and must not be shown
    pub error: bool,
    pub temperature: f64,
    pub weather: String,
    /// Set once a lookup has succeeded; the result fields are only meaningful then
    pub loaded: bool,

    /// Current search field text
    pub query: String,
    /// Sequence number of the latest accepted submission; older results are dropped
    pub request_seq: u64,
    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,
    /// Terminal dimensions
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new() -> Self {
        Self {
            location: String::new(),
            loading: false,
            error: false,
            temperature: 0.0,
            weather: String::new(),
            loaded: false,
            query: String::new(),
            request_seq: 0,
            tick_count: 0,
            terminal_size: (80, 24),
        }
    }

    /// True once a lookup has succeeded and nothing has superseded it
    pub fn has_result(&self) -> bool {
        !self.loading && !self.error && self.loaded
    }

    /// Merge a successful lookup into the result fields
    pub fn apply_report(&mut self, report: WeatherReport) {
        let WeatherReport {
            location,
            weather,
            temperature,
        } = report;
        self.location = location;
        self.weather = weather;
        self.temperature = temperature;
        self.loaded = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
