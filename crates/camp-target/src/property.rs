//! Property restrictions — OR of AND-groups over key/value properties.

use camp_units::PropertyMap;

/// A restriction expression over a [`PropertyMap`].
///
/// Each group is a conjunction of `key=value` pairs; a map qualifies when at
/// least one group matches entirely.  An empty restriction qualifies
/// everything.  The same expression form restricts individual properties
/// (targeting stage 2 feeds the candidate's map) and node properties
/// (stage 1 feeds the unit's map).
#[derive(Clone, Debug, Default)]
pub struct PropertyRestrictions {
    groups: Vec<Vec<(String, String)>>,
}

impl PropertyRestrictions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one AND-group of `key=value` pairs.
    pub fn push_group<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.groups.push(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// `true` if `properties` satisfies at least one group (or no groups exist).
    pub fn qualifies(&self, properties: &PropertyMap) -> bool {
        if self.groups.is_empty() {
            return true;
        }
        self.groups.iter().any(|group| {
            group.iter().all(|(key, value)| properties.matches(key, value))
        })
    }
}
