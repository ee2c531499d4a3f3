//! Panels
//!
//! Each panel implements the Module trait and handles its own:
//! - Key input processing
//! - Rendering
//!
//! Panels:
//! - dashboard: quadrant overviews for tenants and landlords
//! - record: list + detail panel shared by the feature views
//! - tenant / landlord / shared: content of each feature view

pub mod dashboard;
pub mod landlord;
pub mod record;
pub mod shared;
pub mod tenant;

use crate::core::Module;
use crate::nav::ViewId;

pub use dashboard::Dashboard;
pub use record::{Record, RecordPanel};

/// One instance of every panel; state survives tab switches
#[derive(Debug, Clone)]
pub struct Panels {
    tenant_dashboard: Dashboard,
    landlord_dashboard: Dashboard,
    rental_history: RecordPanel,
    property_listing: RecordPanel,
    lease_management: RecordPanel,
    maintenance_request_form: RecordPanel,
    maintenance_schedule: RecordPanel,
    rent_payment: RecordPanel,
    financial_analytics: RecordPanel,
    document_center: RecordPanel,
    property_analytics: RecordPanel,
    tenant_screening: RecordPanel,
    property_valuation: RecordPanel,
    communication_portal: RecordPanel,
}

impl Default for Panels {
    fn default() -> Self {
        Self::new()
    }
}

impl Panels {
    pub fn new() -> Self {
        Self {
            tenant_dashboard: Dashboard::tenant(),
            landlord_dashboard: Dashboard::landlord(),
            rental_history: tenant::rental_history(),
            property_listing: landlord::property_listing(),
            lease_management: shared::lease_management(),
            maintenance_request_form: tenant::maintenance_request_form(),
            maintenance_schedule: landlord::maintenance_schedule(),
            rent_payment: tenant::rent_payment(),
            financial_analytics: landlord::financial_analytics(),
            document_center: shared::document_center(),
            property_analytics: landlord::property_analytics(),
            tenant_screening: landlord::tenant_screening(),
            property_valuation: landlord::property_valuation(),
            communication_portal: shared::communication_portal(),
        }
    }

    pub fn get(&self, view: ViewId) -> &dyn Module {
        match view {
            ViewId::TenantDashboard => &self.tenant_dashboard,
            ViewId::LandlordDashboard => &self.landlord_dashboard,
            ViewId::RentalHistory => &self.rental_history,
            ViewId::PropertyListing => &self.property_listing,
            ViewId::LeaseManagement => &self.lease_management,
            ViewId::MaintenanceRequestForm => &self.maintenance_request_form,
            ViewId::MaintenanceSchedule => &self.maintenance_schedule,
            ViewId::RentPayment => &self.rent_payment,
            ViewId::FinancialAnalytics => &self.financial_analytics,
            ViewId::DocumentCenter => &self.document_center,
            ViewId::PropertyAnalytics => &self.property_analytics,
            ViewId::TenantScreening => &self.tenant_screening,
            ViewId::PropertyValuation => &self.property_valuation,
            ViewId::CommunicationPortal => &self.communication_portal,
        }
    }

    pub fn get_mut(&mut self, view: ViewId) -> &mut dyn Module {
        match view {
            ViewId::TenantDashboard => &mut self.tenant_dashboard,
            ViewId::LandlordDashboard => &mut self.landlord_dashboard,
            ViewId::RentalHistory => &mut self.rental_history,
            ViewId::PropertyListing => &mut self.property_listing,
            ViewId::LeaseManagement => &mut self.lease_management,
            ViewId::MaintenanceRequestForm => &mut self.maintenance_request_form,
            ViewId::MaintenanceSchedule => &mut self.maintenance_schedule,
            ViewId::RentPayment => &mut self.rent_payment,
            ViewId::FinancialAnalytics => &mut self.financial_analytics,
            ViewId::DocumentCenter => &mut self.document_center,
            ViewId::PropertyAnalytics => &mut self.property_analytics,
            ViewId::TenantScreening => &mut self.tenant_screening,
            ViewId::PropertyValuation => &mut self.property_valuation,
            ViewId::CommunicationPortal => &mut self.communication_portal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_titles_match_views() {
        let panels = Panels::new();
        for view in ViewId::ALL {
            assert_eq!(panels.get(view).title(), view.title(), "{view:?}");
        }
    }
}
