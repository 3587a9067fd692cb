pub mod help_bar;
pub mod search_input;
pub mod weather_body;
pub mod weather_screen;

// Re-export core Component trait
pub use skycast_core::Component;

pub use help_bar::{HelpBar, HelpBarProps};
pub use search_input::{PLACEHOLDER, SearchInput, SearchInputProps};
pub use weather_body::{ERROR_ICON, SPINNERS, WeatherBody, WeatherBodyProps};
pub use weather_screen::{WeatherScreen, WeatherScreenProps};
