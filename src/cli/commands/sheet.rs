//! Sheet command handlers: editing fields and selectors, listing, showing
//!
//! Every edit loads the sheet, applies one change, and saves it straight back.

use crate::commands::{confirm, fail};
use credit_tally::core::models::{Category, SecondLanguage, DEPARTMENTS};
use credit_tally::core::report::{ReportContext, ReportGenerator, TextReporter};
use credit_tally::core::sheet::{SelectorKind, Sheet};
use credit_tally::{info, verbose, warn};
use std::path::Path;

/// Load the sheet or exit with an error
pub fn load_or_exit(path: &Path) -> Sheet {
    Sheet::load(path).unwrap_or_else(|e| fail(&format!("Failed to load sheet {}: {e}", path.display())))
}

fn save_or_exit(sheet: &Sheet, path: &Path) {
    if let Err(e) = sheet.save(path) {
        fail(&format!("Failed to save sheet {}: {e}", path.display()));
    }
    verbose!("Sheet saved: {}", path.display());
}

/// `set FIELD CREDITS`
pub fn run_set(path: &Path, field: &str, credits: &str) {
    let mut sheet = load_or_exit(path);
    let category = sheet.set_credit(field, credits).unwrap_or_else(|e| fail(&e));
    save_or_exit(&sheet, path);

    match sheet.credits.get(category) {
        Some(value) => println!("✓ {category} = {value}"),
        None => println!("✓ {category} cleared"),
    }
    info!("Field '{category}' updated");
    print_total(&sheet);
}

/// `unset FIELD`
pub fn run_unset(path: &Path, field: &str) {
    let mut sheet = load_or_exit(path);
    let category = sheet.unset_credit(field).unwrap_or_else(|e| fail(&e));
    save_or_exit(&sheet, path);
    println!("✓ {category} cleared");
    print_total(&sheet);
}

/// `select SELECTOR [VALUE]`
pub fn run_select(path: &Path, selector: &str, value: Option<&str>) {
    let kind: SelectorKind = selector.parse().unwrap_or_else(|e: String| fail(&e));
    let mut sheet = load_or_exit(path);
    sheet
        .select(kind, value.unwrap_or_default())
        .unwrap_or_else(|e| fail(&e));
    save_or_exit(&sheet, path);

    let shown = match kind {
        SelectorKind::Department => sheet.selectors.department.clone(),
        SelectorKind::Grade => sheet.selectors.grade.map(|g| g.to_string()),
        SelectorKind::Language => sheet.selectors.second_language.map(|l| l.to_string()),
    };
    match shown {
        Some(v) => println!("✓ {kind} = {v}"),
        None => println!("✓ {kind} cleared"),
    }

    let stale = sheet.credits.stale_categories(&sheet.selectors);
    if !stale.is_empty() {
        let keys: Vec<&str> = stale.iter().map(|c| c.key()).collect();
        warn!("Entered but not counted now: {}", keys.join(", "));
    }
    print_total(&sheet);
}

/// `fields`
pub fn run_fields(path: &Path) {
    let sheet = load_or_exit(path);

    println!("\n=== Fields ===\n");
    for category in Category::ALL {
        let mark = if category.is_active(&sheet.selectors) { "●" } else { "○" };
        let value = sheet
            .credits
            .get(category)
            .map_or_else(String::new, |v| format!(" = {v}"));
        println!(
            "{mark} {:<15}{value:<6} {}",
            category.key(),
            category.label_for(&sheet.selectors)
        );
    }
    println!("\n● counts under the current selectors, ○ does not");

    println!("\n=== Selectors ===\n");
    let departments: Vec<String> = DEPARTMENTS
        .iter()
        .map(|d| format!("{} ({})", d.code, d.name))
        .collect();
    println!("department: {}", departments.join(", "));
    println!("grade:      1, 2, 3, 4");
    let languages: Vec<String> = SecondLanguage::ALL
        .iter()
        .map(|l| format!("{} ({})", l.code(), l.display_name()))
        .collect();
    println!("language:   {}", languages.join(", "));
}

/// `show`
pub fn run_show(path: &Path) {
    let sheet = load_or_exit(path);
    let ctx = ReportContext::new(&sheet);
    match TextReporter::new().render(&ctx) {
        Ok(text) => print!("{text}"),
        Err(e) => fail(&format!("Failed to render table: {e}")),
    }
}

/// `clear`
pub fn run_clear(path: &Path, yes: bool) {
    if !path.exists() {
        println!("✓ Sheet is already empty");
        return;
    }
    if !yes && !confirm("Clear every selector and field?") {
        println!("✗ Clear cancelled");
        return;
    }
    let mut sheet = load_or_exit(path);
    sheet.clear();
    save_or_exit(&sheet, path);
    println!("✓ Sheet cleared");
}

fn print_total(sheet: &Sheet) {
    let totals = sheet.totals();
    println!(
        "  合計 {} / {}",
        totals.grand_total,
        sheet.requirement().total
    );
}
