use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `replace:` rules, kept in the order they are written.
///
/// Rules chain: each one sees the output of the previous, so `"\\\\"`
/// listed before `"\\n"` behaves differently from the reverse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceRules(pub Vec<(String, String)>);

impl ReplaceRules {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ReplaceRules
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Serialize for ReplaceRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (from, to) in &self.0 {
            map.serialize_entry(from, to)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ReplaceRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = ReplaceRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of text to its replacement")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ReplaceRules::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut rules = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(rule) = access.next_entry::<String, String>()? {
                    rules.push(rule);
                }
                Ok(ReplaceRules(rules))
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}
