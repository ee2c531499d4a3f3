//! Navigation core: roles, tab ids, menu building and view dispatch

pub mod dispatch;
pub mod menu;
pub mod types;

pub use dispatch::{resolve_view, resolve_view_id, ViewId};
pub use menu::{build_menu, MenuEntry};
pub use types::{Icon, ParseRoleError, ParseTabError, Role, TabId};
