//! Application state module

mod app_state;
mod forms;
mod notifications;
mod request;
mod settings_state;
mod theme;

pub use app_state::*;
pub use forms::*;
pub use notifications::*;
pub use request::*;
pub use settings_state::*;
pub use theme::*;
