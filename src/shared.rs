use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json as json;

/// Introspection responses use `null` for lists that do not apply to a kind (`fields` on a
/// scalar, `inputFields` on an object...). Absent and `null` both become an empty list.
pub fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps a value only if it has the expected shape, instead of failing the whole document.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = json::Value::deserialize(deserializer)?;
    Ok(json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, deserialize_with = "nullable_list")]
        items: Vec<u32>,
        #[serde(default, deserialize_with = "lenient")]
        tag: Option<String>,
    }

    #[test]
    fn null_and_missing_lists_are_empty() {
        let holder: Holder = json::from_value(json!({ "items": null })).unwrap();
        assert_eq!(holder.items, Vec::<u32>::new());

        let holder: Holder = json::from_value(json!({})).unwrap();
        assert_eq!(holder.items, Vec::<u32>::new());
    }

    #[test]
    fn misshapen_values_are_dropped() {
        let holder: Holder = json::from_value(json!({ "items": [1, 2], "tag": 33 })).unwrap();
        assert_eq!(
            holder,
            Holder {
                items: vec![1, 2],
                tag: None,
            }
        );
    }
}
