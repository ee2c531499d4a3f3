//! Landlord-facing panels

use super::record::{Record, RecordPanel};

pub fn property_listing() -> RecordPanel {
    RecordPanel::new(
        "Property Listing",
        vec![
            Record::new("Plot 1234, Extension 9, Gaborone", "occupied")
                .with("Type", "2 bed apartment")
                .with("Rent", "P 6,500"),
            Record::new("Plot 55, Phakalane", "occupied")
                .with("Type", "4 bed house")
                .with("Rent", "P 14,000"),
            Record::new("Unit 7, Area W, Francistown", "vacant")
                .with("Type", "1 bed flat")
                .with("Rent", "P 3,900"),
            Record::new("Plot 902, Boseja, Maun", "occupied")
                .with("Type", "3 bed house")
                .with("Rent", "P 7,200"),
        ],
    )
    .summary(&["12 properties, 38 units across Botswana"])
}

pub fn maintenance_schedule() -> RecordPanel {
    RecordPanel::new(
        "Maintenance Schedule",
        vec![
            Record::new("Geyser inspection, Plot 1234", "Thu 10:00")
                .with("Contractor", "Mosweu Plumbing")
                .with("Cost", "P 450"),
            Record::new("Roof repair, Plot 55 Phakalane", "next week")
                .with("Contractor", "Kalahari Roofing")
                .with("Cost", "P 3,800"),
            Record::new("Garden service, all Gaborone units", "monthly")
                .with("Contractor", "Green Thumb")
                .with("Cost", "P 1,200"),
        ],
    )
}

pub fn financial_analytics() -> RecordPanel {
    RecordPanel::new(
        "Financial Analytics",
        vec![
            Record::new("Rental income", "P 187,500")
                .with("Period", "month to date")
                .with("Change", "+4% on last month"),
            Record::new("Expenses", "P 31,200")
                .with("Largest", "roof repair, Phakalane"),
            Record::new("Net operating income", "P 156,300"),
            Record::new("Arrears", "P 26,500").with("Tenants", "3"),
        ],
    )
    .summary(&["Amounts in Pula (BWP)"])
}

pub fn property_analytics() -> RecordPanel {
    RecordPanel::new(
        "Property Analytics",
        vec![
            Record::new("Occupancy rate", "92%").with("Trend", "steady"),
            Record::new("Average days vacant", "18").with("Best", "Gaborone"),
            Record::new("Average rent per unit", "P 5,630"),
            Record::new("Tenant turnover", "11% / year"),
        ],
    )
}

pub fn tenant_screening() -> RecordPanel {
    RecordPanel::new(
        "Tenant Screening",
        vec![
            Record::new("O. Kgathi", "pending")
                .with("Applied for", "Unit 7, Francistown")
                .with("Income", "P 18,000 / month")
                .with("References", "2 of 2 received"),
            Record::new("T. Molefe", "approved")
                .with("Applied for", "Plot 902, Maun")
                .with("Income", "P 22,500 / month"),
            Record::new("B. Sebele", "declined")
                .with("Reason", "incomplete documents"),
        ],
    )
    .summary(&["Applications awaiting a decision"])
}

pub fn property_valuation() -> RecordPanel {
    RecordPanel::new(
        "AI Property Valuation",
        vec![
            Record::new("Plot 55, Phakalane", "P 2.4m")
                .with("Confidence", "high")
                .with("Suggested rent", "P 14,500"),
            Record::new("Plot 1234, Gaborone", "P 1.1m")
                .with("Confidence", "medium")
                .with("Suggested rent", "P 6,800"),
            Record::new("Plot 902, Maun", "P 950k")
                .with("Confidence", "medium")
                .with("Suggested rent", "P 7,000"),
        ],
    )
    .summary(&["Estimates from recent comparable sales"])
}
