use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Caller-supplied class names.
///
/// Mirrors the three shapes a class prop may take: one token, an ordered
/// list of tokens, or an ordered set of tokens each switched on or off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassSpec {
    Single(String),
    Many(Vec<String>),
    Conditional(
        #[serde(serialize_with = "flags_as_map", deserialize_with = "ordered_flags")]
        Vec<(String, bool)>,
    ),
}

impl Default for ClassSpec {
    fn default() -> Self {
        ClassSpec::Many(Vec::new())
    }
}

impl ClassSpec {
    /// Active tokens in the caller's order. Empty tokens are skipped.
    pub fn tokens(&self) -> Vec<&str> {
        let tokens: Vec<&str> = match self {
            ClassSpec::Single(token) => vec![token.as_str()],
            ClassSpec::Many(tokens) => tokens.iter().map(String::as_str).collect(),
            ClassSpec::Conditional(flags) => flags
                .iter()
                .filter(|(_, on)| *on)
                .map(|(token, _)| token.as_str())
                .collect(),
        };
        tokens.into_iter().filter(|token| !token.is_empty()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }
}

impl From<&str> for ClassSpec {
    fn from(token: &str) -> Self {
        ClassSpec::Single(token.to_string())
    }
}

impl From<String> for ClassSpec {
    fn from(token: String) -> Self {
        ClassSpec::Single(token)
    }
}

impl From<Vec<String>> for ClassSpec {
    fn from(tokens: Vec<String>) -> Self {
        ClassSpec::Many(tokens)
    }
}

impl From<Vec<&str>> for ClassSpec {
    fn from(tokens: Vec<&str>) -> Self {
        ClassSpec::Many(tokens.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassSpec {
    fn from(tokens: [&str; N]) -> Self {
        ClassSpec::Many(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl From<Vec<(String, bool)>> for ClassSpec {
    fn from(flags: Vec<(String, bool)>) -> Self {
        ClassSpec::Conditional(flags)
    }
}

impl From<Vec<(&str, bool)>> for ClassSpec {
    fn from(flags: Vec<(&str, bool)>) -> Self {
        ClassSpec::Conditional(flags.into_iter().map(|(t, on)| (t.to_string(), on)).collect())
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassSpec {
    fn from(flags: [(&str, bool); N]) -> Self {
        ClassSpec::Conditional(flags.iter().map(|(t, on)| (t.to_string(), *on)).collect())
    }
}

/// Ordered union of the base token, the optional color token, and the
/// caller's tokens.
pub fn compose_class_list<'a>(
    base: &'a str,
    color: Option<&'a str>,
    caller: &'a ClassSpec,
) -> Vec<&'a str> {
    let mut tokens = vec![base];
    tokens.extend(color);
    tokens.extend(caller.tokens());
    tokens
}

/// [`compose_class_list`] joined into a `class` attribute value.
pub fn compose_class_name(base: &str, color: Option<&str>, caller: &ClassSpec) -> String {
    compose_class_list(base, color, caller).join(" ")
}

fn flags_as_map<S>(flags: &[(String, bool)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(flags.iter().map(|(token, on)| (token, on)))
}

/// Deserialize a map of `token -> bool` keeping the document's key order.
fn ordered_flags<'de, D>(deserializer: D) -> Result<Vec<(String, bool)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagsVisitor;

    impl<'de> Visitor<'de> for FlagsVisitor {
        type Value = Vec<(String, bool)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of class names to booleans")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut flags = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((token, on)) = map.next_entry::<String, bool>()? {
                flags.push((token, on));
            }
            Ok(flags)
        }
    }

    deserializer.deserialize_map(FlagsVisitor)
}
