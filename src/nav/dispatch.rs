//! Maps (active tab, role) to the panel that gets rendered

use super::{Role, TabId};

/// The fourteen panels the shell can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    TenantDashboard,
    LandlordDashboard,
    RentalHistory,
    PropertyListing,
    LeaseManagement,
    MaintenanceRequestForm,
    MaintenanceSchedule,
    RentPayment,
    FinancialAnalytics,
    DocumentCenter,
    PropertyAnalytics,
    TenantScreening,
    PropertyValuation,
    CommunicationPortal,
}

impl ViewId {
    pub const ALL: [ViewId; 14] = [
        ViewId::TenantDashboard,
        ViewId::LandlordDashboard,
        ViewId::RentalHistory,
        ViewId::PropertyListing,
        ViewId::LeaseManagement,
        ViewId::MaintenanceRequestForm,
        ViewId::MaintenanceSchedule,
        ViewId::RentPayment,
        ViewId::FinancialAnalytics,
        ViewId::DocumentCenter,
        ViewId::PropertyAnalytics,
        ViewId::TenantScreening,
        ViewId::PropertyValuation,
        ViewId::CommunicationPortal,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewId::TenantDashboard => "Tenant Dashboard",
            ViewId::LandlordDashboard => "Landlord Dashboard",
            ViewId::RentalHistory => "Rental History",
            ViewId::PropertyListing => "Property Listing",
            ViewId::LeaseManagement => "Lease Management",
            ViewId::MaintenanceRequestForm => "Maintenance Request",
            ViewId::MaintenanceSchedule => "Maintenance Schedule",
            ViewId::RentPayment => "Rent Payment",
            ViewId::FinancialAnalytics => "Financial Analytics",
            ViewId::DocumentCenter => "Document Center",
            ViewId::PropertyAnalytics => "Property Analytics",
            ViewId::TenantScreening => "Tenant Screening",
            ViewId::PropertyValuation => "AI Property Valuation",
            ViewId::CommunicationPortal => "Communication Portal",
        }
    }
}

/// Resolve the panel for a tab.
///
/// Total over the closed tab set and independent of which tabs the role's
/// menu currently offers.
pub fn resolve_view(tab: TabId, role: Role) -> ViewId {
    let tenant = role == Role::Tenant;
    match tab {
        TabId::Dashboard if tenant => ViewId::TenantDashboard,
        TabId::Dashboard => ViewId::LandlordDashboard,
        TabId::Properties if tenant => ViewId::RentalHistory,
        TabId::Properties => ViewId::PropertyListing,
        TabId::Leases => ViewId::LeaseManagement,
        TabId::Maintenance if tenant => ViewId::MaintenanceRequestForm,
        TabId::Maintenance => ViewId::MaintenanceSchedule,
        TabId::Payments if tenant => ViewId::RentPayment,
        TabId::Payments => ViewId::FinancialAnalytics,
        TabId::Documents => ViewId::DocumentCenter,
        TabId::Analytics => ViewId::PropertyAnalytics,
        TabId::Screening => ViewId::TenantScreening,
        TabId::Valuation => ViewId::PropertyValuation,
        TabId::Communication => ViewId::CommunicationPortal,
    }
}

/// Resolve from a raw tab id; unknown ids render nothing
pub fn resolve_view_id(id: &str, role: Role) -> Option<ViewId> {
    id.parse::<TabId>().ok().map(|tab| resolve_view(tab, role))
}
