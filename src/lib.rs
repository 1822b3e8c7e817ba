mod consts;
mod dispatcher;
mod dom_api;
mod error;
mod instance;
#[cfg(test)]
mod testing;
pub mod types;
mod web;

pub use dispatcher::{best_effort, FocusDispatcher};
pub use dom_api::BrowserHost;
pub use error::FocusError;
pub use instance::{configure_focus, focus_element};
