use serde_json::Value;

/// Serialization capability for everything that crosses an app boundary.
///
/// Objects are posted as the text produced by `to_json` and rebuilt on the
/// receiving side with `from_json`; round-tripping must preserve every field.
pub trait ApiObject: Sized {
    type Error;

    fn to_json(&self) -> String;

    fn from_json(value: &Value) -> Result<Self, Self::Error>;
}
