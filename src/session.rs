//! Session/role controller
//!
//! Two states: logged out, and logged in with a role and an active tab.
//! The menu is derived from the role and rebuilt inside every transition
//! that touches the role, so no caller can observe a stale menu.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::nav::{build_menu, resolve_view, MenuEntry, Role, TabId, ViewId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("not logged in")]
    NotLoggedIn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    role: Role,
    active_tab: TabId,
    menu: Vec<MenuEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    /// Visible menu entries; empty while logged out
    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    pub fn is_tab_visible(&self, tab: TabId) -> bool {
        self.menu.iter().any(|entry| entry.id == tab)
    }

    /// Panel to render, or `None` while the landing screen is shown
    pub fn current_view(&self) -> Option<ViewId> {
        self.logged_in.then(|| resolve_view(self.active_tab, self.role))
    }

    pub fn login(&mut self, role: Role) {
        self.logged_in = true;
        self.role = role;
        self.active_tab = TabId::Dashboard;
        self.menu = build_menu(role);
        info!(role = %role, "logged in");
    }

    pub fn logout(&mut self) {
        let role = self.role;
        *self = Self::new();
        info!(role = %role, "logged out");
    }

    /// Switch the role of a logged-in session; the active tab is kept even
    /// when the new role's menu does not offer it.
    pub fn set_role(&mut self, role: Role) -> Result<(), SessionError> {
        if !self.logged_in {
            warn!(role = %role, "role switch rejected while logged out");
            return Err(SessionError::NotLoggedIn);
        }
        self.role = role;
        self.menu = build_menu(role);
        info!(role = %role, tab = %self.active_tab, "role switched");
        Ok(())
    }

    /// Select any tab, visible or not.
    pub fn set_active_tab(&mut self, tab: TabId) -> Result<(), SessionError> {
        if !self.logged_in {
            warn!(tab = %tab, "tab selection rejected while logged out");
            return Err(SessionError::NotLoggedIn);
        }
        self.active_tab = tab;
        debug!(tab = %tab, visible = self.is_tab_visible(tab), "tab selected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.role(), Role::Tenant);
        assert_eq!(session.active_tab(), TabId::Dashboard);
        assert!(session.menu().is_empty());
        assert_eq!(session.current_view(), None);
    }

    #[test]
    fn test_login_as_tenant() {
        let mut session = Session::new();
        session.login(Role::Tenant);
        assert!(session.is_logged_in());
        assert_eq!(session.role(), Role::Tenant);
        assert_eq!(session.active_tab(), TabId::Dashboard);
        assert_eq!(session.menu().len(), 7);
    }

    #[test]
    fn test_login_resets_active_tab() {
        let mut session = Session::new();
        session.login(Role::Landlord);
        session.set_active_tab(TabId::Valuation).unwrap();
        session.login(Role::Tenant);
        assert_eq!(session.active_tab(), TabId::Dashboard);
        assert_eq!(session.menu(), build_menu(Role::Tenant).as_slice());
    }

    #[test]
    fn test_logout_is_full_reset() {
        let mut session = Session::new();
        session.login(Role::Landlord);
        session.set_active_tab(TabId::Payments).unwrap();
        session.logout();
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_relogin_with_same_role_rebuilds_menu() {
        let mut session = Session::new();
        session.login(Role::Tenant);
        session.logout();
        session.login(Role::Tenant);
        assert_eq!(session.menu().len(), 7);
    }

    #[test]
    fn test_set_role_keeps_active_tab() {
        let mut session = Session::new();
        session.login(Role::Landlord);
        session.set_active_tab(TabId::Screening).unwrap();
        session.set_role(Role::Tenant).unwrap();
        assert_eq!(session.active_tab(), TabId::Screening);
        assert!(!session.is_tab_visible(TabId::Screening));
        assert_eq!(session.current_view(), Some(ViewId::TenantScreening));
    }

    #[test]
    fn test_set_role_does_not_accumulate_entries() {
        let mut session = Session::new();
        session.login(Role::Tenant);
        session.set_role(Role::Landlord).unwrap();
        session.set_role(Role::Landlord).unwrap();
        assert_eq!(session.menu().len(), 10);
        session.set_role(Role::Tenant).unwrap();
        assert_eq!(session.menu().len(), 7);
    }

    #[test]
    fn test_transitions_rejected_while_logged_out() {
        let mut session = Session::new();
        assert_eq!(session.set_role(Role::Landlord), Err(SessionError::NotLoggedIn));
        assert_eq!(
            session.set_active_tab(TabId::Leases),
            Err(SessionError::NotLoggedIn)
        );
        assert_eq!(session, Session::new());
    }
}
