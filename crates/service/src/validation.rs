//! Field validation for menu item bodies.
//!
//! Every field is checked and every failure is returned, so a client sees the
//! complete list in one round trip. Each field contributes at most one
//! violation: the first rule it breaks.

use models::{Category, MenuItemInput, Rule, Violation};
use serde_json::{Map, Value};

use crate::errors::ServiceError;

pub const NAME_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Check a raw JSON body against the menu item rules.
///
/// Violations come back in field order: name, description, price, category,
/// ingredients, available. `id` and unknown keys are not inspected.
pub fn validate_menu_item(body: &Value) -> Vec<Violation> {
    let empty = Map::new();
    let obj = body.as_object().unwrap_or(&empty);

    [
        check_text(obj, "name", NAME_MIN_LEN),
        check_text(obj, "description", DESCRIPTION_MIN_LEN),
        check_price(obj),
        check_category(obj),
        check_ingredients(obj),
        check_available(obj),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Validate and convert a body into a typed candidate.
pub fn parse_menu_item(body: &Value) -> Result<MenuItemInput, ServiceError> {
    let violations = validate_menu_item(body);
    if !violations.is_empty() {
        return Err(ServiceError::Validation(violations));
    }
    serde_json::from_value(body.clone()).map_err(|e| {
        ServiceError::Validation(vec![Violation::new("body", Rule::MalformedJson, e.to_string())])
    })
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn missing(field: &str) -> Violation {
    Violation::new(field, Rule::Missing, format!("{field} is required"))
}

fn check_text(obj: &Map<String, Value>, field: &str, min: usize) -> Option<Violation> {
    let Some(value) = present(obj, field) else {
        return Some(missing(field));
    };
    match value {
        Value::String(s) if s.chars().count() >= min => None,
        Value::String(_) => Some(
            Violation::new(field, Rule::TooShort, format!("{field} must be at least {min} characters long"))
                .with_value(value),
        ),
        _ => Some(Violation::new(field, Rule::NotText, format!("{field} must be a string")).with_value(value)),
    }
}

fn check_price(obj: &Map<String, Value>) -> Option<Violation> {
    let Some(value) = present(obj, "price") else {
        return Some(missing("price"));
    };
    match value.as_f64() {
        Some(p) if p > 0.0 => None,
        Some(_) => Some(
            Violation::new("price", Rule::NotPositive, "price must be greater than 0").with_value(value),
        ),
        None => Some(Violation::new("price", Rule::NotNumber, "price must be a number").with_value(value)),
    }
}

fn check_category(obj: &Map<String, Value>) -> Option<Violation> {
    let Some(value) = present(obj, "category") else {
        return Some(missing("category"));
    };
    if value.as_str().and_then(|s| s.parse::<Category>().ok()).is_some() {
        return None;
    }
    let allowed: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    Some(
        Violation::new(
            "category",
            Rule::UnknownCategory,
            format!("category must be one of: {}", allowed.join(", ")),
        )
        .with_value(value),
    )
}

fn check_ingredients(obj: &Map<String, Value>) -> Option<Violation> {
    let Some(value) = present(obj, "ingredients") else {
        return Some(missing("ingredients"));
    };
    let Value::Array(list) = value else {
        return Some(
            Violation::new("ingredients", Rule::NotList, "ingredients must be a list").with_value(value),
        );
    };
    if list.is_empty() {
        return Some(
            Violation::new("ingredients", Rule::EmptyList, "ingredients must contain at least 1 item")
                .with_value(value),
        );
    }
    if list.iter().any(|i| !i.is_string()) {
        return Some(
            Violation::new("ingredients", Rule::IngredientNotText, "every ingredient must be a string")
                .with_value(value),
        );
    }
    None
}

fn check_available(obj: &Map<String, Value>) -> Option<Violation> {
    match present(obj, "available") {
        None | Some(Value::Bool(_)) => None,
        Some(value) => Some(
            Violation::new("available", Rule::NotBoolean, "available must be a boolean").with_value(value),
        ),
    }
}
