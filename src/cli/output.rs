//! Output formatting utilities for the CLI.

use comfy_table::{presets, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::domain::models::Customer;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to a maximum number of characters, appending "..."
/// if truncated. Operates on char boundaries so multi-byte names (common
/// in customer data) never split mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render customers as a table.
pub fn customer_table(customers: &[Customer]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "COMPANY", "CONTACT", "CITY", "COUNTRY", "PHONE"]);

    for customer in customers {
        table.add_row(vec![
            Cell::new(customer.id.as_str()),
            Cell::new(truncate(&customer.company_name, 30)),
            Cell::new(customer.contact_name.as_deref().unwrap_or("-")),
            Cell::new(customer.city.as_deref().unwrap_or("-")),
            Cell::new(customer.country.as_deref().unwrap_or("-")),
            Cell::new(customer.phone.as_deref().unwrap_or("-")),
        ]);
    }

    table.to_string()
}
