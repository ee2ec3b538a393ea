//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state and the keyboard event loop
//! - **[`playback`]**: the cursor over the recorded steps (play, pause, seek, speed)
//! - **[`panes`]**: stateless render functions, one per kind of structure plus the step
//!   log, info card and status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and call
//! [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod playback;
pub mod theme;

pub use app::App;
