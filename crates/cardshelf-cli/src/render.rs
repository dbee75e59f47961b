//! Plain-text rendering for the command line views.

use cardshelf_core::Item;
use cardshelf_engine::Page;

pub fn render_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "no categories (collection is empty)".to_string();
    }
    categories.join("\n")
}

pub fn render_page(page: &Page, total_items: usize) -> String {
    let mut out = String::new();
    for item in &page.items {
        out.push_str(&item_line(item));
        out.push('\n');
    }
    if page.items.is_empty() {
        out.push_str("no items match\n");
    }
    out.push_str(&format!(
        "page {} of {} ({total_items} items)",
        page.current_page, page.total_pages
    ));
    out
}

pub fn render_featured(items: &[Item]) -> String {
    if items.is_empty() {
        return "nothing to feature (collection is empty)".to_string();
    }
    items.iter().map(|item| item_line(item) + "\n").collect()
}

fn item_line(item: &Item) -> String {
    let mut line = format!(
        "{:<40} {:<24} {:>10}",
        item.name,
        item.category,
        format!("${:.2}", item.market_price),
    );
    if item.quantity != 1 {
        line.push_str(&format!("  x{}", item.quantity));
    }
    if !item.condition.trim().is_empty() {
        line.push_str(&format!("  [{}]", item.condition));
    }
    line
}
