//! End-to-end navigation flows through the public session API

use pretty_assertions::assert_eq;
use tov::nav::menu::LANDLORD_ONLY;
use tov::{build_menu, resolve_view, Role, Session, TabId, ViewId};

#[test]
fn test_landlord_session_scenario() {
    let mut session = Session::new();
    assert!(!session.is_logged_in());

    session.login(Role::Landlord);
    assert_eq!(session.menu().len(), 10);
    assert_eq!(session.active_tab(), TabId::Dashboard);
    assert_eq!(session.current_view(), Some(ViewId::LandlordDashboard));

    session.set_active_tab(TabId::Payments).unwrap();
    assert_eq!(session.current_view(), Some(ViewId::FinancialAnalytics));

    session.logout();
    assert!(!session.is_logged_in());
    assert!(session.menu().is_empty());
    assert_eq!(session.role(), Role::Tenant);
    assert_eq!(session.active_tab(), TabId::Dashboard);
}

#[test]
fn test_hidden_tab_survives_role_switch() {
    let mut session = Session::new();
    session.login(Role::Landlord);
    session.set_active_tab(TabId::Screening).unwrap();
    session.set_role(Role::Tenant).unwrap();

    assert_eq!(session.active_tab(), TabId::Screening);
    assert!(session.menu().iter().all(|entry| entry.id != TabId::Screening));
    assert_eq!(
        resolve_view(TabId::Screening, Role::Tenant),
        ViewId::TenantScreening
    );
    assert_eq!(session.current_view(), Some(ViewId::TenantScreening));
}

#[test]
fn test_menu_follows_every_role_change() {
    let mut session = Session::new();
    session.login(Role::Tenant);
    for role in [Role::Landlord, Role::Tenant, Role::Landlord] {
        session.set_role(role).unwrap();
        assert_eq!(session.menu(), build_menu(role).as_slice());
    }
}

#[test]
fn test_landlord_only_tabs_dispatch_for_both_roles() {
    for tab in LANDLORD_ONLY {
        let tenant = resolve_view(tab, Role::Tenant);
        assert_eq!(tenant, resolve_view(tab, Role::Landlord));
    }
}

#[test]
fn test_dashboard_diverges_leases_does_not() {
    assert_ne!(
        resolve_view(TabId::Dashboard, Role::Tenant),
        resolve_view(TabId::Dashboard, Role::Landlord)
    );
    assert_eq!(
        resolve_view(TabId::Leases, Role::Tenant),
        resolve_view(TabId::Leases, Role::Landlord)
    );
}
