use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;

use crate::init::UrlPatternInput;

/// Captured groups of one component, in group order.
///
/// A group that did not participate in the match is kept with a `None` value
/// rather than an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchGroups {
    entries: SmallVec<[(String, Option<String>); 4]>,
}

impl MatchGroups {
    /// Outer `None`: no such group. Inner `None`: the group did not participate.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl FromIterator<(String, Option<String>)> for MatchGroups {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for MatchGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ComponentResult {
    pub input: String,
    pub groups: MatchGroups,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchResult {
    /// The matched input, followed by the base URL string when one was given.
    pub inputs: Vec<UrlPatternInput>,
    pub protocol: ComponentResult,
    pub username: ComponentResult,
    pub password: ComponentResult,
    pub hostname: ComponentResult,
    pub port: ComponentResult,
    pub pathname: ComponentResult,
    pub search: ComponentResult,
    pub hash: ComponentResult,
}
