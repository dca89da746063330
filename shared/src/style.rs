//! # Style Maps
//!
//! Ordered CSS property/value sets. Keys are stored as kebab-case CSS
//! property names so they can be handed straight to
//! `CSSStyleDeclaration.setProperty`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered set of CSS declarations.
///
/// Setting an existing property replaces its value in place, the same way a
/// shallow object merge keeps the first key's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Accepts `fontSize` or `font-size`.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let name = css_property_name(property);
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style variant of [`StyleMap::set`]
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        let name = css_property_name(property);
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Shallow merge: every entry of `other` wins over ours
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in &other.entries {
            self.set(key, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in iter {
            map.set(key.as_ref(), value);
        }
        map
    }
}

/// Convert a DOM style property name (`fontWeight`, `WebkitTransform`) to its
/// CSS form (`font-weight`, `-webkit-transform`). Names that already contain a
/// dash are returned unchanged.
pub fn css_property_name(property: &str) -> String {
    if property.contains('-') {
        return property.to_string();
    }
    let mut name = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Render a loosely typed option value the way it would be written into a
/// style property: strings verbatim, numbers in their shortest form.
pub(crate) fn style_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of CSS properties to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
                let mut styles = StyleMap::new();
                while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
                    styles.set(&key, style_value(&value));
                }
                Ok(styles)
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}
