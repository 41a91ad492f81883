//! TheMealDB API 类型定义

use serde::{Deserialize, Deserializer};

use crate::error::{FetchError, Result};
use crate::http_client::HttpUtils;
use crate::types::{DetailItem, DetailResponse, IngredientSlots, ListItem, ListResponse};

/// TheMealDB 通用响应
///
/// `meals` must be present; `null` (unknown id) is read as an empty list.
#[derive(Debug, Deserialize)]
pub struct MealDbResponse<T> {
    #[serde(
        deserialize_with = "nullable_seq",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub meals: Vec<T>,
}

fn nullable_seq<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `filter.php` 条目
#[derive(Debug, Deserialize)]
pub struct MealDbMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

/// `lookup.php` 条目
///
/// Ingredient fields are optional: older records omit the trailing ones and
/// many carry `null` or `""`.
#[derive(Debug, Deserialize)]
pub struct MealDbMealDetail {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
    #[serde(rename = "strInstructions")]
    pub instructions: String,
    #[serde(rename = "strIngredient1", default)]
    pub ingredient1: Option<String>,
    #[serde(rename = "strIngredient2", default)]
    pub ingredient2: Option<String>,
    #[serde(rename = "strIngredient3", default)]
    pub ingredient3: Option<String>,
    #[serde(rename = "strIngredient4", default)]
    pub ingredient4: Option<String>,
    #[serde(rename = "strIngredient5", default)]
    pub ingredient5: Option<String>,
    #[serde(rename = "strIngredient6", default)]
    pub ingredient6: Option<String>,
    #[serde(rename = "strIngredient7", default)]
    pub ingredient7: Option<String>,
    #[serde(rename = "strIngredient8", default)]
    pub ingredient8: Option<String>,
    #[serde(rename = "strIngredient9", default)]
    pub ingredient9: Option<String>,
    #[serde(rename = "strIngredient10", default)]
    pub ingredient10: Option<String>,
    #[serde(rename = "strIngredient11", default)]
    pub ingredient11: Option<String>,
    #[serde(rename = "strIngredient12", default)]
    pub ingredient12: Option<String>,
    #[serde(rename = "strIngredient13", default)]
    pub ingredient13: Option<String>,
}

impl From<MealDbMeal> for ListItem {
    fn from(meal: MealDbMeal) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            thumbnail_url: meal.thumbnail_url,
        }
    }
}

impl From<MealDbMealDetail> for DetailItem {
    fn from(meal: MealDbMealDetail) -> Self {
        let ingredients = IngredientSlots::new([
            meal.ingredient1,
            meal.ingredient2,
            meal.ingredient3,
            meal.ingredient4,
            meal.ingredient5,
            meal.ingredient6,
            meal.ingredient7,
            meal.ingredient8,
            meal.ingredient9,
            meal.ingredient10,
            meal.ingredient11,
            meal.ingredient12,
            meal.ingredient13,
        ]);

        Self {
            id: meal.id,
            name: meal.name,
            thumbnail_url: meal.thumbnail_url,
            instructions: meal.instructions,
            ingredients,
        }
    }
}

impl From<MealDbResponse<MealDbMeal>> for ListResponse {
    fn from(response: MealDbResponse<MealDbMeal>) -> Self {
        Self {
            items: response.meals.into_iter().map(ListItem::from).collect(),
        }
    }
}

impl From<MealDbResponse<MealDbMealDetail>> for DetailResponse {
    fn from(response: MealDbResponse<MealDbMealDetail>) -> Self {
        Self {
            items: response.meals.into_iter().map(DetailItem::from).collect(),
        }
    }
}

// ============ Decoding ============

impl ListResponse {
    /// Decode a `filter.php` body.
    pub fn from_json(text: &str) -> Result<Self> {
        HttpUtils::parse_json::<MealDbResponse<MealDbMeal>>(text).map(Self::from)
    }
}

impl DetailResponse {
    /// Decode a `lookup.php` body.
    pub fn from_json(text: &str) -> Result<Self> {
        HttpUtils::parse_json::<MealDbResponse<MealDbMealDetail>>(text).map(Self::from)
    }

    /// The single record of a lookup by `id`.
    ///
    /// Zero items is [`FetchError::NotFound`]. Should the server ever return
    /// more than one, the first wins.
    pub fn into_single(self, id: &str) -> Result<DetailItem> {
        if self.items.len() > 1 {
            log::warn!(
                "lookup for '{id}' returned {} records, using the first",
                self.items.len()
            );
        }
        self.items
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "meals": [
            {"strMeal": "Apam balik", "strMealThumb": "https://www.themealdb.com/images/media/meals/adxcbq1619787919.jpg", "idMeal": "53049"},
            {"strMeal": "Apple & Blackberry Crumble", "strMealThumb": "https://www.themealdb.com/images/media/meals/xvsurr1511719182.jpg", "idMeal": "52893"}
        ]
    }"#;

    const DETAIL_JSON: &str = r#"{
        "meals": [{
            "idMeal": "52893",
            "strMeal": "Apple & Blackberry Crumble",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/xvsurr1511719182.jpg",
            "strInstructions": "Heat oven to 190C/170C fan/gas 5.",
            "strIngredient1": "Plain Flour",
            "strIngredient2": "Caster Sugar",
            "strIngredient3": "Butter",
            "strIngredient4": "Braeburn Apples",
            "strIngredient5": "Butter",
            "strIngredient6": "Demerara Sugar",
            "strIngredient7": "Blackberrys",
            "strIngredient8": "Cinnamon",
            "strIngredient9": "Ice Cream",
            "strIngredient10": "",
            "strIngredient11": "",
            "strIngredient12": null,
            "strIngredient13": null,
            "strIngredient14": "",
            "strArea": "British"
        }]
    }"#;

    #[test]
    fn catalog_decodes_in_server_order() {
        let response = require_ok!(ListResponse::from_json(CATALOG_JSON));
        assert_eq!(response.len(), 2);
        assert_eq!(response.items[0].id, "53049");
        assert_eq!(response.items[0].name, "Apam balik");
        assert_eq!(response.items[1].id, "52893");
        assert!(response.items[1].thumbnail_url.ends_with("xvsurr1511719182.jpg"));
    }

    #[test]
    fn catalog_missing_name_is_decode_error() {
        let json = r#"{"meals": [{"strMealThumb": "x", "idMeal": "1"}]}"#;
        let result = ListResponse::from_json(json);
        assert!(
            matches!(&result, Err(FetchError::Decode { detail }) if detail.contains("strMeal")),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn catalog_wrong_type_is_decode_error() {
        let json = r#"{"meals": [{"strMeal": "x", "strMealThumb": "x", "idMeal": 1}]}"#;
        assert!(matches!(
            ListResponse::from_json(json),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn missing_envelope_is_decode_error() {
        assert!(matches!(
            ListResponse::from_json("{}"),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn envelope_decodes_for_both_record_types() {
        let list: MealDbResponse<MealDbMeal> = require_ok!(serde_json::from_str(CATALOG_JSON));
        assert_eq!(list.meals.len(), 2);

        let detail: MealDbResponse<MealDbMealDetail> =
            require_ok!(serde_json::from_str(r#"{"meals": null}"#));
        assert!(detail.meals.is_empty());
    }

    #[test]
    fn null_meals_is_empty() {
        let response = require_ok!(ListResponse::from_json(r#"{"meals": null}"#));
        assert!(response.is_empty());
    }

    #[test]
    fn detail_decodes_slots() {
        let response = require_ok!(DetailResponse::from_json(DETAIL_JSON));
        let item = require_ok!(response.into_single("52893"));
        assert_eq!(item.name, "Apple & Blackberry Crumble");
        assert_eq!(item.ingredients.get(0), Some("Plain Flour"));
        assert_eq!(item.ingredients.get(9), Some(""));
        assert_eq!(item.ingredients.get(12), None);
        assert_eq!(
            item.ingredients_display(),
            "Plain Flour, Caster Sugar, Butter, Braeburn Apples, Butter, Demerara Sugar, Blackberrys, Cinnamon, Ice Cream"
        );
    }

    #[test]
    fn detail_missing_trailing_slots_is_fine() {
        let json = r#"{"meals": [{
            "idMeal": "1", "strMeal": "Fudge", "strMealThumb": "t",
            "strInstructions": "Stir.", "strIngredient1": "sugar"
        }]}"#;
        let response = require_ok!(DetailResponse::from_json(json));
        let item = require_ok!(response.into_single("1"));
        assert_eq!(item.ingredients_display(), "Sugar");
    }

    #[test]
    fn detail_empty_array_is_not_found() {
        let response = require_ok!(DetailResponse::from_json(r#"{"meals": []}"#));
        assert_eq!(
            response.into_single("99999"),
            Err(FetchError::NotFound {
                id: "99999".to_string()
            })
        );
    }

    #[test]
    fn detail_null_meals_is_not_found() {
        let response = require_ok!(DetailResponse::from_json(r#"{"meals": null}"#));
        assert!(matches!(
            response.into_single("abc"),
            Err(FetchError::NotFound { .. })
        ));
    }

    #[test]
    fn detail_missing_instructions_is_decode_error() {
        let json = r#"{"meals": [{"idMeal": "1", "strMeal": "x", "strMealThumb": "t"}]}"#;
        assert!(matches!(
            DetailResponse::from_json(json),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn detail_multiple_items_takes_first() {
        let json = r#"{"meals": [
            {"idMeal": "1", "strMeal": "First", "strMealThumb": "t", "strInstructions": "a"},
            {"idMeal": "2", "strMeal": "Second", "strMealThumb": "t", "strInstructions": "b"}
        ]}"#;
        let response = require_ok!(DetailResponse::from_json(json));
        let item = require_ok!(response.into_single("1"));
        assert_eq!(item.name, "First");
    }
}
