use indexmap::IndexMap;
use serde_json::Value;

/// Ordered property bag attached to every visual node.
pub type PropBag = IndexMap<String, Value>;

/// Collects `(name, value)` pairs into a [`PropBag`].
///
/// ```
/// use buridan_charts::core::prop_bag;
///
/// let bag = prop_bag([("fontSize", "12px"), ("fontWeight", "bold")]);
/// assert_eq!(bag.len(), 2);
/// ```
pub fn prop_bag<I, K, V>(pairs: I) -> PropBag
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Inserts `value` under `name` only when it is present.
pub(crate) fn insert_present<T: Into<Value>>(bag: &mut PropBag, name: &str, value: Option<T>) {
    if let Some(value) = value {
        bag.insert(name.to_owned(), value.into());
    }
}

/// Merges caller passthrough attributes over `bag`, then drops every key whose
/// value is `null`. A `null` passthrough therefore unsets a typed property.
pub(crate) fn merge_passthrough(bag: &mut PropBag, passthrough: &PropBag) {
    for (name, value) in passthrough {
        bag.insert(name.clone(), value.clone());
    }
    bag.retain(|_, value| !value.is_null());
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn passthrough_overrides_and_null_unsets() {
        let mut bag = prop_bag([
            ("stroke", json!("var(--chart-1)")),
            ("isAnimationActive", json!(true)),
        ]);
        let passthrough = prop_bag([("stroke", json!("red")), ("isAnimationActive", Value::Null)]);

        merge_passthrough(&mut bag, &passthrough);

        assert_eq!(bag.get("stroke"), Some(&json!("red")));
        assert!(!bag.contains_key("isAnimationActive"));
    }

    #[test]
    fn insert_present_skips_absent_values() {
        let mut bag = PropBag::new();
        insert_present::<u32>(&mut bag, "barSize", None);
        insert_present(&mut bag, "name", Some("Desktop"));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("name"), Some(&json!("Desktop")));
    }
}
