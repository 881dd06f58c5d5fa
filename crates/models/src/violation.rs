use serde::Serialize;
use serde_json::Value;

/// Which check a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Missing,
    NotText,
    TooShort,
    NotNumber,
    NotPositive,
    UnknownCategory,
    NotList,
    EmptyList,
    IngredientNotText,
    NotBoolean,
    MalformedJson,
}

/// One failed field check, reported back to the client as part of `errors`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub location: &'static str,
}

impl Violation {
    pub fn new(field: impl Into<String>, rule: Rule, msg: impl Into<String>) -> Self {
        Self { field: field.into(), rule, msg: msg.into(), value: None, location: "body" }
    }

    pub fn with_value(mut self, value: &Value) -> Self {
        self.value = Some(value.clone());
        self
    }
}
