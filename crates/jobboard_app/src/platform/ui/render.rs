use jobboard_core::{AppViewModel, CartRowView, Durability, JobCardView};

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let storage_note = match view.durability {
        Durability::Persisted => "",
        Durability::MemoryOnly => "  (not saved: storage unavailable)",
    };
    lines.push(format!("[{}]{}", cart_label(view.cart_count), storage_note));

    let search = &view.search;
    if !search.title.trim().is_empty() || !search.location.trim().is_empty() {
        lines.push(format!(
            "Search: title {:?}, location {:?} ({} of {} shown)",
            search.title,
            search.location,
            view.visible_count,
            view.cards.len()
        ));
    }

    if view.cards.is_empty() {
        lines.push("No jobs posted yet.".to_string());
    }
    for card in view.cards.iter().filter(|card| card.visible) {
        lines.extend(format_card(card));
    }

    if let Some(rows) = &view.cart {
        lines.extend(format_cart(rows));
    }

    if view.form_open {
        lines.push("--- Add New Job ---".to_string());
        lines.push("post <title> | <company> | <location> | <description>, or cancel".to_string());
    }

    lines
}

/// Header badge text.
pub fn cart_label(count: usize) -> String {
    format!("Cart ({count})")
}

fn format_card(card: &JobCardView) -> Vec<String> {
    let applied = if card.in_cart { "  [applied]" } else { "" };
    let mut lines = vec![format!(
        "#{id} {title} - {company}{applied}",
        id = card.card_id,
        title = card.title,
        company = card.company,
    )];
    if !card.location.is_empty() {
        lines.push(format!("    {}", card.location));
    }
    if !card.details.is_empty() {
        lines.push(format!("    {}", card.details));
    }
    lines
}

fn format_cart(rows: &[CartRowView]) -> Vec<String> {
    let mut lines = vec![
        "--- Your Cart ---".to_string(),
        "Jobs you've applied for:".to_string(),
    ];
    if rows.is_empty() {
        lines.push("Your cart is empty!".to_string());
    }
    for row in rows {
        lines.push(format!("[{}] {}", row.entry_id, row.title));
        lines.push(format!("    Company: {}", row.company));
        lines.push(format!("    Details: {}", row.details));
    }
    lines.push("(remove <entry> | close)".to_string());
    lines
}
