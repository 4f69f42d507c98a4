//! The catalog of previewable component archetypes.

use std::fmt;

/// A component archetype. Parsing is total: any id outside the catalog
/// becomes [`ComponentKind::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ComponentKind {
    Button,
    Card,
    Badge,
    Input,
    Avatar,
    Progress,
    Toggle,
    Alert,
    Skeleton,
    Generic,
}

impl ComponentKind {
    /// The concrete kinds, excluding the fallback.
    pub const CATALOG: [Self; 9] = [
        Self::Button,
        Self::Card,
        Self::Badge,
        Self::Input,
        Self::Avatar,
        Self::Progress,
        Self::Toggle,
        Self::Alert,
        Self::Skeleton,
    ];

    /// Resolve an id such as `"button"`. Case-insensitive.
    pub fn parse(id: &str) -> Self {
        let id = id.trim();
        let kind = Self::CATALOG
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(id));
        match kind {
            Some(kind) => kind,
            None => {
                tracing::debug!(id, "unrecognized component kind, using generic");
                Self::Generic
            }
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Card => "card",
            Self::Badge => "badge",
            Self::Input => "input",
            Self::Avatar => "avatar",
            Self::Progress => "progress",
            Self::Toggle => "toggle",
            Self::Alert => "alert",
            Self::Skeleton => "skeleton",
            Self::Generic => "generic",
        }
    }

    /// Human-readable name, also used as the export file stem.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Card => "Card",
            Self::Badge => "Badge",
            Self::Input => "Input",
            Self::Avatar => "Avatar",
            Self::Progress => "Progress",
            Self::Toggle => "Toggle",
            Self::Alert => "Alert",
            Self::Skeleton => "Skeleton",
            Self::Generic => "Component",
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic)
    }
}

impl Default for ComponentKind {
    fn default() -> Self {
        Self::Button
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<&str> for ComponentKind {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}
