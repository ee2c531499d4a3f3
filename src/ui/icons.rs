//! Glyph lookup for icon identifiers

use crate::nav::Icon;

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::Building => "▦",
        Icon::FileText => "≡",
        Icon::Wrench => "⚒",
        Icon::Banknote => "¤",
        Icon::BarChart => "▤",
        Icon::Users => "☺",
        Icon::MessageSquare => "✉",
    }
}
