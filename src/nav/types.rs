//! Closed vocabularies shared by the navigation core

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User role the shell is rendered for
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Tenant,
    Landlord,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Tenant, Role::Landlord];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tenant => "tenant",
            Role::Landlord => "landlord",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Tenant => "Tenant",
            Role::Landlord => "Landlord",
        }
    }

    /// The other role, used by the two-valued role selector
    pub fn toggled(&self) -> Role {
        match self {
            Role::Tenant => Role::Landlord,
            Role::Landlord => Role::Tenant,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}` (expected tenant or landlord)")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tenant" => Ok(Role::Tenant),
            "landlord" => Ok(Role::Landlord),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Navigation targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Dashboard,
    Properties,
    Leases,
    Maintenance,
    Payments,
    Documents,
    Analytics,
    Screening,
    Valuation,
    Communication,
}

impl TabId {
    pub const ALL: [TabId; 10] = [
        TabId::Dashboard,
        TabId::Properties,
        TabId::Leases,
        TabId::Maintenance,
        TabId::Payments,
        TabId::Documents,
        TabId::Analytics,
        TabId::Screening,
        TabId::Valuation,
        TabId::Communication,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Dashboard => "dashboard",
            TabId::Properties => "properties",
            TabId::Leases => "leases",
            TabId::Maintenance => "maintenance",
            TabId::Payments => "payments",
            TabId::Documents => "documents",
            TabId::Analytics => "analytics",
            TabId::Screening => "screening",
            TabId::Valuation => "valuation",
            TabId::Communication => "communication",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab `{0}`")]
pub struct ParseTabError(pub String);

impl FromStr for TabId {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        TabId::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == needle)
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// Icon identifiers carried by menu entries; glyphs live in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Building,
    FileText,
    Wrench,
    Banknote,
    BarChart,
    Users,
    MessageSquare,
}
