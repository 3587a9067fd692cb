//! Effects - side effects declared by the reducer
//!
//! The reducer returns these; the main loop turns them into async tasks.

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the geocode → weather pipeline for `city`, tagged with submission `seq`
    LookupWeather { seq: u64, city: String },
}
