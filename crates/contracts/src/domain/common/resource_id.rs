//! Resource identifiers arrive as JSON numbers or strings depending on the
//! collection; the admin panel treats both as opaque strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Uint(u64),
    Str(String),
}

/// `#[serde(deserialize_with = "deserialize_id")]` helper.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
        RawId::Str(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let row: Row = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(row.id, "42");
        let row: Row = serde_json::from_str(r#"{"id": "wd_9f3"}"#).unwrap();
        assert_eq!(row.id, "wd_9f3");
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<Row>(r#"{"id": true}"#).is_err());
    }
}
