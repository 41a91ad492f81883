//! Public record types
//!
//! These are the decoded, provider-independent shapes. The wire format lives
//! next to the client that speaks it (`providers::themealdb::types`).

use serde::{Deserialize, Serialize};

use crate::ingredients::normalize_ingredients;

/// Number of positional ingredient fields on a detail record.
pub const INGREDIENT_SLOT_COUNT: usize = 13;

// ============ List ============

/// Recipe summary shown in the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

/// Envelope of a catalog lookup. Items keep the server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<ListItem>,
}

impl ListResponse {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============ Detail ============

/// The 13 ingredient slots of a detail record, in slot order.
///
/// A slot is `None` when the field was absent or `null` in the response.
/// Empty strings are kept as-is; [`iter_present`](Self::iter_present) skips them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSlots([Option<String>; INGREDIENT_SLOT_COUNT]);

impl IngredientSlots {
    pub fn new(slots: [Option<String>; INGREDIENT_SLOT_COUNT]) -> Self {
        Self(slots)
    }

    /// Slot at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).and_then(Option::as_deref)
    }

    /// All slots, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(Option::as_deref)
    }

    /// Non-empty slot values, trimmed, in slot order.
    pub fn iter_present(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter_map(Option::as_deref)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether every slot is absent or blank.
    pub fn is_blank(&self) -> bool {
        self.iter_present().next().is_none()
    }
}

impl<S: Into<String>> FromIterator<S> for IngredientSlots {
    /// Fills slots in order; extra values beyond the 13th are dropped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut slots: [Option<String>; INGREDIENT_SLOT_COUNT] = Default::default();
        for (slot, value) in slots.iter_mut().zip(iter) {
            *slot = Some(value.into());
        }
        Self(slots)
    }
}

/// Full recipe record shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailItem {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub instructions: String,
    pub ingredients: IngredientSlots,
}

impl DetailItem {
    /// Ingredient list as a single display string, e.g. `"Sugar, Flour, Butter"`.
    pub fn ingredients_display(&self) -> String {
        normalize_ingredients(&self.ingredients)
    }
}

/// Envelope of a detail lookup.
///
/// Always wraps a sequence; for a valid id it holds zero or one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub items: Vec<DetailItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[&str]) -> IngredientSlots {
        values.iter().copied().collect()
    }

    #[test]
    fn iter_present_skips_empty_and_whitespace() {
        let s = slots(&["sugar", "", " ", "flour"]);
        let present: Vec<&str> = s.iter_present().collect();
        assert_eq!(present, vec!["sugar", "flour"]);
    }

    #[test]
    fn iter_present_trims() {
        let s = slots(&["  cream cheese "]);
        assert_eq!(s.iter_present().next(), Some("cream cheese"));
    }

    #[test]
    fn from_iter_fills_in_order_and_caps_at_thirteen() {
        let values: Vec<String> = (1..=15).map(|i| format!("item{i}")).collect();
        let s: IngredientSlots = values.into_iter().collect();
        assert_eq!(s.get(0), Some("item1"));
        assert_eq!(s.get(12), Some("item13"));
        assert_eq!(s.get(13), None);
        assert_eq!(s.iter().count(), INGREDIENT_SLOT_COUNT);
    }

    #[test]
    fn default_is_blank() {
        assert!(IngredientSlots::default().is_blank());
        assert!(slots(&["", "  "]).is_blank());
        assert!(!slots(&["", "egg"]).is_blank());
    }

    #[test]
    fn detail_item_display_uses_normalizer() {
        let item = DetailItem {
            id: "1".into(),
            name: "Tart".into(),
            thumbnail_url: "https://example.com/t.jpg".into(),
            instructions: "Bake.".into(),
            ingredients: slots(&["plain flour", "", "egg yolks"]),
        };
        assert_eq!(item.ingredients_display(), "Plain Flour, Egg Yolks");
    }
}
