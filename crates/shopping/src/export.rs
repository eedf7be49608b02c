use fridgeplan_shared::CategoryConfig;

use crate::list::GroceryList;

/// Base URL the links export appends encoded item names to. Any search
/// engine or store search endpoint that takes the query in `q` works.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.google.com/search?q=";

/// Render the list as plain text, grouped under `### Section ###` headers
/// in the given display order, with a blank line between sections.
pub fn export_text(list: &GroceryList, order: &[CategoryConfig]) -> String {
    let mut out = String::new();
    for (section, items) in list.grouped(order) {
        out.push_str(&format!("### {} ###\n", section.name));
        for item in items {
            out.push_str(&format!("{} {} {}\n", item.name, item.quantity, item.unit));
        }
        out.push('\n');
    }
    out
}

/// Render one search link per item, in list order.
pub fn export_links(list: &GroceryList, base_url: &str) -> String {
    let mut out = String::new();
    for item in list.items() {
        out.push_str(base_url);
        out.push_str(&urlencoding::encode(&item.name));
        out.push('\n');
    }
    out
}
