//! Navigation menu derived from the active role

use super::{Icon, Role, TabId};

/// One navigable destination shown in the nav bar and the menu modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: TabId,
    pub label: &'static str,
    pub icon: Icon,
}

impl MenuEntry {
    const fn new(id: TabId, label: &'static str, icon: Icon) -> Self {
        Self { id, label, icon }
    }
}

/// Tabs only landlords see, appended after the common entries
pub const LANDLORD_ONLY: [TabId; 3] = [TabId::Analytics, TabId::Screening, TabId::Valuation];

/// Build the ordered menu for a role.
///
/// Tenants get the seven common entries; landlords get the same seven
/// followed by analytics, screening and valuation.
pub fn build_menu(role: Role) -> Vec<MenuEntry> {
    let tenant = role == Role::Tenant;
    let mut entries = vec![
        MenuEntry::new(TabId::Dashboard, "Dashboard", Icon::Home),
        MenuEntry::new(
            TabId::Properties,
            if tenant { "Rental History" } else { "Properties" },
            Icon::Building,
        ),
        MenuEntry::new(TabId::Leases, "Leases", Icon::FileText),
        MenuEntry::new(TabId::Maintenance, "Maintenance", Icon::Wrench),
        MenuEntry::new(
            TabId::Payments,
            if tenant { "Rent Payment" } else { "Financials" },
            Icon::Banknote,
        ),
        MenuEntry::new(TabId::Documents, "Documents", Icon::FileText),
        MenuEntry::new(TabId::Communication, "Communication", Icon::MessageSquare),
    ];

    if role == Role::Landlord {
        entries.extend([
            MenuEntry::new(TabId::Analytics, "Analytics", Icon::BarChart),
            MenuEntry::new(TabId::Screening, "Tenant Screening", Icon::Users),
            MenuEntry::new(TabId::Valuation, "Property Valuation", Icon::Building),
        ]);
    }

    entries
}

/// Position of a tab in a menu, if the menu offers it
pub fn position(menu: &[MenuEntry], id: TabId) -> Option<usize> {
    menu.iter().position(|entry| entry.id == id)
}

/// Next (or previous) entry after `current`, wrapping around.
///
/// When `current` is not offered by the menu the walk starts at the first
/// entry going forward and at the last entry going backward.
pub fn step(menu: &[MenuEntry], current: TabId, forward: bool) -> Option<TabId> {
    if menu.is_empty() {
        return None;
    }
    let len = menu.len();
    let idx = match (position(menu, current), forward) {
        (Some(idx), true) => (idx + 1) % len,
        (Some(idx), false) => (idx + len - 1) % len,
        (None, true) => 0,
        (None, false) => len - 1,
    };
    Some(menu[idx].id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(menu: &[MenuEntry]) -> Vec<TabId> {
        menu.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn test_tenant_menu_order() {
        assert_eq!(
            ids(&build_menu(Role::Tenant)),
            vec![
                TabId::Dashboard,
                TabId::Properties,
                TabId::Leases,
                TabId::Maintenance,
                TabId::Payments,
                TabId::Documents,
                TabId::Communication,
            ]
        );
    }

    #[test]
    fn test_landlord_menu_extends_tenant_menu() {
        let tenant = build_menu(Role::Tenant);
        let landlord = build_menu(Role::Landlord);
        assert_eq!(tenant.len(), 7);
        assert_eq!(landlord.len(), 10);

        let head: Vec<(TabId, Icon)> = landlord[..7].iter().map(|e| (e.id, e.icon)).collect();
        let common: Vec<(TabId, Icon)> = tenant.iter().map(|e| (e.id, e.icon)).collect();
        assert_eq!(head, common);
        assert_eq!(ids(&landlord[7..]), LANDLORD_ONLY.to_vec());
    }

    #[test]
    fn test_tenant_ids_are_strict_subset() {
        let landlord = ids(&build_menu(Role::Landlord));
        let tenant = ids(&build_menu(Role::Tenant));
        assert!(tenant.iter().all(|id| landlord.contains(id)));
        assert!(tenant.len() < landlord.len());
    }

    #[test]
    fn test_role_sensitive_labels() {
        let tenant = build_menu(Role::Tenant);
        let landlord = build_menu(Role::Landlord);
        assert_eq!(tenant[1].label, "Rental History");
        assert_eq!(landlord[1].label, "Properties");
        assert_eq!(tenant[4].label, "Rent Payment");
        assert_eq!(landlord[4].label, "Financials");
        assert_eq!(tenant[2].label, landlord[2].label);
    }

    #[test]
    fn test_build_menu_is_idempotent() {
        for role in Role::ALL {
            assert_eq!(build_menu(role), build_menu(role));
        }
    }

    #[test]
    fn test_step_wraps_and_recovers() {
        let menu = build_menu(Role::Tenant);
        assert_eq!(step(&menu, TabId::Dashboard, true), Some(TabId::Properties));
        assert_eq!(step(&menu, TabId::Dashboard, false), Some(TabId::Communication));
        assert_eq!(step(&menu, TabId::Communication, true), Some(TabId::Dashboard));
        assert_eq!(step(&menu, TabId::Screening, true), Some(TabId::Dashboard));
        assert_eq!(step(&menu, TabId::Screening, false), Some(TabId::Communication));
        assert_eq!(step(&[], TabId::Dashboard, true), None);
    }
}
