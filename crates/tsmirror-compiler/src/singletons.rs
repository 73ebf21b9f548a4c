//! Types emitted as a single exported global instance.

use indexmap::IndexMap;

/// Declaration name to exported global name.
///
/// A registered declaration is emitted without `export` and followed by
/// `export const <Global>: <Name> = {} as <Name>;`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingletonRegistry {
    entries: IndexMap<String, String>,
}

impl Default for SingletonRegistry {
    /// The CustomNPC scripting globals.
    fn default() -> Self {
        [
            ("AbstractNpcAPI", "API"),
            ("AbstractExtendedAPI", "extAPI"),
            ("IAnimationType", "AnimationType"),
            ("IAttributeSection", "AttributeSection"),
            ("IAttributeValueType", "AttributeValueType"),
            ("IColorCode", "Color"),
            ("IEntityType", "EntityType"),
            ("IJobType", "Job"),
            ("IKeys", "Key"),
            ("IRoleType", "Role"),
            ("IParticleType", "Particle"),
            ("IItemUseAction", "UseAction"),
            ("IMouseButton", "MouseButton"),
        ]
        .into_iter()
        .fold(Self::empty(), |registry, (name, global)| {
            registry.with(name, global)
        })
    }
}

impl SingletonRegistry {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register `name` under the global `global`.
    pub fn with(mut self, name: impl Into<String>, global: impl Into<String>) -> Self {
        self.entries.insert(name.into(), global.into());
        self
    }

    /// The global name for `name`, if it is a singleton.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
