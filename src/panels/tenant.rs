//! Tenant-facing panels

use super::record::{Record, RecordPanel};

pub fn rental_history() -> RecordPanel {
    RecordPanel::new(
        "Rental History",
        vec![
            Record::new("Plot 1234, Extension 9, Gaborone", "2023 - now")
                .with("Landlord", "Kgosi Properties")
                .with("Rent", "P 6,500 / month")
                .with("Deposit", "P 6,500 held"),
            Record::new("Unit 4, Block 8, Gaborone", "2020 - 2023")
                .with("Landlord", "M. Seretse")
                .with("Rent", "P 4,800 / month")
                .with("Deposit", "returned in full"),
            Record::new("Flat 2, Area W, Francistown", "2018 - 2020")
                .with("Landlord", "Northern Homes")
                .with("Rent", "P 3,900 / month")
                .with("Reference", "on file"),
        ],
    )
    .summary(&["Your previous and current tenancies"])
}

pub fn maintenance_request_form() -> RecordPanel {
    RecordPanel::new(
        "Maintenance Request",
        vec![
            Record::new("Leaking kitchen tap", "in progress")
                .with("Logged", "3 days ago")
                .with("Priority", "medium")
                .with("Assigned", "Mosweu Plumbing"),
            Record::new("Geyser inspection", "scheduled")
                .with("Logged", "last week")
                .with("Priority", "low")
                .with("Visit", "Thursday 10:00"),
            Record::new("Broken bedroom window latch", "resolved")
                .with("Logged", "last month")
                .with("Priority", "high"),
        ],
    )
    .summary(&[
        "Describe the issue, pick a category and priority.",
        "Requests go straight to your landlord.",
    ])
}

pub fn rent_payment() -> RecordPanel {
    RecordPanel::new(
        "Rent Payment",
        vec![
            Record::new("This month", "P 6,500 due")
                .with("Due", "1st of the month")
                .with("Methods", "Orange Money, MyZaka, EFT"),
            Record::new("Last month", "P 6,500 paid")
                .with("Paid via", "Orange Money")
                .with("Receipt", "TOV-2024-0311"),
            Record::new("Two months ago", "P 6,500 paid")
                .with("Paid via", "EFT")
                .with("Receipt", "TOV-2024-0210"),
        ],
    )
    .summary(&["Amounts in Pula (BWP)"])
}
