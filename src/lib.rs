//! Tov: a terminal shell for tenants and landlords.
//!
//! The navigation core lives in [`session`] and [`nav`]; [`app`], [`input`]
//! and [`ui`] wrap it in a ratatui application.

pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod nav;
pub mod panels;
pub mod session;
pub mod ui;

pub use app::App;
pub use nav::{build_menu, resolve_view, MenuEntry, Role, TabId, ViewId};
pub use session::{Session, SessionError};
