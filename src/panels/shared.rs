//! Panels shown to both roles

use super::record::{Record, RecordPanel};

pub fn lease_management() -> RecordPanel {
    RecordPanel::new(
        "Lease Management",
        vec![
            Record::new("Plot 1234, Extension 9, Gaborone", "ends Dec 2025")
                .with("Term", "24 months")
                .with("Rent", "P 6,500")
                .with("Escalation", "8% yearly"),
            Record::new("Plot 55, Phakalane", "ends Jun 2025")
                .with("Term", "12 months")
                .with("Rent", "P 14,000")
                .with("Renewal", "offer sent"),
            Record::new("Plot 902, Boseja, Maun", "ends Mar 2026")
                .with("Term", "24 months")
                .with("Rent", "P 7,200"),
        ],
    )
}

pub fn document_center() -> RecordPanel {
    RecordPanel::new(
        "Document Center",
        vec![
            Record::new("Lease agreement", "PDF")
                .with("Signed", "both parties"),
            Record::new("Inspection report (move-in)", "PDF"),
            Record::new("Rent receipts", "12 files"),
            Record::new("Omang copy", "ID").with("Status", "verified"),
        ],
    )
    .summary(&["Leases, receipts and Botswana-specific forms"])
}

pub fn communication_portal() -> RecordPanel {
    RecordPanel::new(
        "Communication Portal",
        vec![
            Record::new("Kgosi Properties", "2 unread")
                .with("Last", "Geyser visit confirmed for Thursday"),
            Record::new("Mosweu Plumbing", "read")
                .with("Last", "Parts ordered for the kitchen tap"),
            Record::new("Estate notices", "1 unread")
                .with("Last", "Water interruption on Tuesday"),
        ],
    )
}
