//! Ingredient normalization
//!
//! Turns the fixed ingredient slots of a detail record into one readable line.

use crate::types::IngredientSlots;

/// Separator between ingredients in the display string.
pub const INGREDIENT_SEPARATOR: &str = ", ";

/// Build the display string for a record's ingredient slots.
///
/// Slots are visited in order 1..=13; absent, empty and whitespace-only slots
/// are skipped, every surviving value is title-cased, and the results are
/// joined with `", "`. Duplicates are kept. All-empty input yields `""`.
pub fn normalize_ingredients(slots: &IngredientSlots) -> String {
    slots
        .iter_present()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(INGREDIENT_SEPARATOR)
}

/// Uppercase the first letter of every whitespace-delimited word and
/// lowercase the rest. Whitespace is preserved as-is.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
