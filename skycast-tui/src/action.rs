//! Actions

use skycast_core::WeatherRecord;

/// Everything that can happen in the application.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The search field value changed.
    SearchInput(String),
    /// Focus moved into the search field.
    SearchFocus,
    /// Focus left the search field without submitting.
    SearchBlur,
    /// The user submitted a city name.
    SearchSubmit(String),
    /// Re-fetch the currently shown city.
    WeatherRefresh,
    /// A lookup completed; `push` records it as a new history entry.
    WeatherDidLoad {
        record: Box<WeatherRecord>,
        push: bool,
    },
    /// A lookup failed; payload is the underlying error text (logged,
    /// never shown verbatim).
    WeatherDidError(String),
    /// The user asked to use their current location.
    LocateRequest,
    /// Locating failed; payload is the underlying error text.
    LocateDidError(String),
    /// Step back in the lookup history.
    NavBack,
    /// Step forward in the lookup history.
    NavForward,
    /// A city requested on the command line at startup.
    NavDeepLink(String),
    /// Dismiss the current error message.
    UiDismissError,
    /// The terminal was resized.
    UiResize(u16, u16),
    /// Animation timer tick.
    Tick,
    /// Exit the application.
    Quit,
}

impl crate::dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::SearchInput(_) => "search_input",
            Action::SearchFocus => "search_focus",
            Action::SearchBlur => "search_blur",
            Action::SearchSubmit(_) => "search_submit",
            Action::WeatherRefresh => "weather_refresh",
            Action::WeatherDidLoad { .. } => "weather_did_load",
            Action::WeatherDidError(_) => "weather_did_error",
            Action::LocateRequest => "locate_request",
            Action::LocateDidError(_) => "locate_did_error",
            Action::NavBack => "nav_back",
            Action::NavForward => "nav_forward",
            Action::NavDeepLink(_) => "nav_deep_link",
            Action::UiDismissError => "ui_dismiss_error",
            Action::UiResize(_, _) => "ui_resize",
            Action::Tick => "tick",
            Action::Quit => "quit",
        }
    }
}
