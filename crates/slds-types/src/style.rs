use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Inline style declarations, kept in insertion order.
///
/// Tables deserialize in document order, so `{ width = .., color = .. }`
/// renders `width` first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap(Vec<(String, String)>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. A property already present is overwritten in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.0.push((property, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Render as a CSS declaration block, e.g. `color:red;width:1rem;`.
    pub fn to_css(&self) -> String {
        self.iter().map(|(p, v)| format!("{p}:{v};")).collect()
    }

    /// The `style` attribute value, or `None` when there is nothing to apply.
    pub fn to_attribute(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_css())
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut style = StyleMap::new();
        for (p, v) in iter {
            style.set(p, v);
        }
        style
    }
}

impl<const N: usize> From<[(&str, &str); N]> for StyleMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Vec<(String, String)>> for StyleMap {
    fn from(pairs: Vec<(String, String)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for StyleMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl Serialize for StyleMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DeclarationsVisitor;

        impl<'de> Visitor<'de> for DeclarationsVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of style properties to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut style = StyleMap::new();
                while let Some((property, value)) = map.next_entry::<String, String>()? {
                    style.set(property, value);
                }
                Ok(style)
            }
        }

        deserializer.deserialize_map(DeclarationsVisitor)
    }
}
