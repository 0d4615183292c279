//! UI components
//!
//! Each component renders from read-only props and reports user input
//! as actions. The search bar owns cursor position; everything else is
//! stateless.

pub mod backdrop;
pub mod help_bar;
pub mod search_bar;
pub mod weather_panel;

pub use backdrop::Backdrop;
pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
