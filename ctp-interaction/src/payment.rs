use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The parts of a platform payment the handlers read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFields {
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Payment {
    /// Value of the custom field `name`, if the payment has one.
    pub fn custom_field(&self, name: &str) -> Option<&Value> {
        self.custom.as_ref()?.fields.get(name)
    }

    /// Sets a custom field, creating the custom container when needed.
    pub fn set_custom_field(&mut self, name: impl Into<String>, value: Value) {
        self.custom
            .get_or_insert_with(CustomFields::default)
            .fields
            .insert(name.into(), value);
    }
}
