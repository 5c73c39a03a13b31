//! Text rendering of the indicator menu.
//!
//! The menu is laid out the way the tray menu is: status label first, then
//! the refresh time, the top listing, the exchange section, the market and
//! network fields, the scraped markets, the links and the quit entry. The
//! field mirrored onto the status label is marked with `*`.
use std::fmt::Write;

use indicator_common::FieldId;
use indicator_common::fields::FieldGroup;
use indicator_common::net::LINKS;
use indicator_feed::DisplayState;
use strum::IntoEnumIterator;

const RULE: &str = "----";

/// Renders the whole menu as text lines.
pub fn render(display: &DisplayState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", display.status_label());
    let _ = writeln!(out, "{}", display.last_updated_label());
    let _ = writeln!(out, "Refresh (refresh)");
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "Top 20");
    for line in display.top_listing() {
        let _ = writeln!(out, "  {}", line);
    }

    let _ = writeln!(out, "Exchanges");
    let _ = writeln!(out, "  {} (notify)", display.notify_toggle_label());
    write_group(&mut out, display, FieldGroup::Exchange);

    let _ = writeln!(out, "{}", RULE);
    write_group(&mut out, display, FieldGroup::Market);
    let _ = writeln!(out, "{}", RULE);
    write_group(&mut out, display, FieldGroup::Network);

    if !display.market_list().is_empty() {
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Markets");
        for line in display.market_list() {
            let _ = writeln!(out, "  {}", line);
        }
    }

    let _ = writeln!(out, "{}", RULE);
    write_group(&mut out, display, FieldGroup::About);
    let _ = writeln!(out, "Links");
    for (i, label) in LINKS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} (open {})", i + 1, label, i + 1);
    }
    let _ = writeln!(out, "Quit (quit)");
    out
}

fn write_group(out: &mut String, display: &DisplayState, group: FieldGroup) {
    for field in FieldId::iter().filter(|f| f.group() == group) {
        let marker = if field == display.default_field() { '*' } else { ' ' };
        let _ = writeln!(out, "{} {} (default {})", marker, display.label(field), field);
    }
}
