//! Namespaced identifiers such as `minecraft:overworld` or `minecraft:stone`.

use std::borrow::Cow;
use std::fmt;

/// The namespace used when an identifier is written without one.
pub const VANILLA_NAMESPACE: &str = "minecraft";

/// A `namespace:path` key for worlds, blocks and biomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path inside the namespace.
    pub path: Cow<'static, str>,
}

impl Identifier {
    /// Creates an identifier from its two parts without validation.
    #[must_use]
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        path: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Creates an identifier in the `minecraft` namespace.
    #[must_use]
    pub fn vanilla(path: impl Into<Cow<'static, str>>) -> Self {
        Self::new(VANILLA_NAMESPACE, path)
    }

    /// Creates a `minecraft` identifier usable in `const` and `static` items.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }
}

/// Reads a name as server owners write it, without restricting characters.
///
/// `namespace:path` is split on the first colon. Anything else, including
/// names like `Main World`, becomes a path in the `minecraft` namespace.
impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        match name.split_once(':') {
            Some((namespace, path)) if !namespace.is_empty() && !path.is_empty() => {
                Self::new(namespace.to_string(), path.to_string())
            }
            _ => Self::vanilla(name.to_string()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}
