//! Fixed structural templates for each component kind.
//!
//! The generator and the preview renderer both walk these descriptors, so a
//! card always has a title/description split and a skeleton always has two
//! placeholder bars, whichever side draws it.

use crate::kind::ComponentKind;
use crate::style::ResolvedStyle;
use crate::tokens::BackgroundColor;

/// What a skeleton part is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PartRole {
    /// Clickable or inline label text.
    Label,
    Title,
    Description,
    /// Input placeholder text.
    Placeholder,
    /// Avatar fallback initials.
    Fallback,
    /// Progress fill.
    Indicator,
    /// Toggle track carrying the thumb.
    Track,
    /// Loading placeholder bar.
    Bar,
}

impl PartRole {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Title => "title",
            Self::Description => "description",
            Self::Placeholder => "placeholder",
            Self::Fallback => "fallback",
            Self::Indicator => "indicator",
            Self::Track => "track",
            Self::Bar => "bar",
        }
    }
}

/// One part of a skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonPart {
    pub role: PartRole,
    pub text: Option<&'static str>,
    /// Extent along the main axis in percent (progress value, bar width).
    pub extent: Option<u8>,
}

impl SkeletonPart {
    const fn text(role: PartRole, text: &'static str) -> Self {
        Self {
            role,
            text: Some(text),
            extent: None,
        }
    }

    const fn extent(role: PartRole, extent: u8) -> Self {
        Self {
            role,
            text: None,
            extent: Some(extent),
        }
    }

    const fn bare(role: PartRole) -> Self {
        Self {
            role,
            text: None,
            extent: None,
        }
    }

    /// Part-level sizing classes.
    pub fn classes(&self) -> Vec<String> {
        match (self.role, self.extent) {
            (PartRole::Bar, Some(extent)) => vec!["h-4".to_string(), fraction_class(extent)],
            _ => Vec::new(),
        }
    }
}

/// Tailwind fraction class for a percentage width (`75` → `w-3/4`).
pub fn fraction_class(percent: u8) -> String {
    match percent {
        100 => "w-full".to_string(),
        75 => "w-3/4".to_string(),
        50 => "w-1/2".to_string(),
        25 => "w-1/4".to_string(),
        other => format!("w-[{}%]", other),
    }
}

/// Which elements carry the config-derived style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    /// The component root.
    Root,
    /// Every part with this role; the root becomes a plain layout wrapper.
    Parts(PartRole),
}

/// A fixed accent border drawn on one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub width_px: u32,
    pub color: BackgroundColor,
    pub classes: &'static [&'static str],
}

/// The structural template of a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skeleton {
    pub kind: ComponentKind,
    /// Appended after the derived classes on every styled element.
    pub extra_classes: &'static [&'static str],
    /// Layout classes of the wrapper when styling targets parts.
    pub wrapper_classes: &'static [&'static str],
    pub styled: StyleTarget,
    /// Left accent border, drawn in addition to the configured border.
    pub accent: Option<Accent>,
    pub parts: &'static [SkeletonPart],
}

impl Skeleton {
    /// Skeleton for a kind; `Generic` gets the fallback skeleton.
    pub fn for_kind(kind: ComponentKind) -> &'static Skeleton {
        match kind {
            ComponentKind::Button => &BUTTON,
            ComponentKind::Card => &CARD,
            ComponentKind::Badge => &BADGE,
            ComponentKind::Input => &INPUT,
            ComponentKind::Avatar => &AVATAR,
            ComponentKind::Progress => &PROGRESS,
            ComponentKind::Toggle => &TOGGLE,
            ComponentKind::Alert => &ALERT,
            ComponentKind::Skeleton => &LOADING,
            ComponentKind::Generic => &GENERIC,
        }
    }

    /// Parts with a given role.
    pub fn parts_with(&self, role: PartRole) -> impl Iterator<Item = &SkeletonPart> {
        self.parts.iter().filter(move |part| part.role == role)
    }

    /// First text of a role, if present.
    pub fn text_of(&self, role: PartRole) -> Option<&'static str> {
        self.parts_with(role).find_map(|part| part.text)
    }

    /// Every literal text the skeleton shows, in order.
    pub fn texts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parts.iter().filter_map(|part| part.text)
    }

    /// Class list of an element carrying the derived style: the resolved
    /// classes, then kind extras, part sizing and the accent border.
    pub fn styled_classes(&self, style: &ResolvedStyle, part: Option<&SkeletonPart>) -> Vec<String> {
        let mut classes = style.classes().into_vec();
        classes.extend(self.extra_classes.iter().map(|class| class.to_string()));
        if let Some(part) = part {
            classes.extend(part.classes());
        }
        if let Some(accent) = &self.accent {
            classes.extend(accent.classes.iter().map(|class| class.to_string()));
        }
        classes
    }

    /// Number of elements that carry the derived style.
    pub fn styled_count(&self) -> usize {
        match self.styled {
            StyleTarget::Root => 1,
            StyleTarget::Parts(role) => self.parts_with(role).count(),
        }
    }
}

static BUTTON: Skeleton = Skeleton {
    kind: ComponentKind::Button,
    extra_classes: &[],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: None,
    parts: &[SkeletonPart::text(PartRole::Label, "Click me")],
};

static CARD: Skeleton = Skeleton {
    kind: ComponentKind::Card,
    extra_classes: &[],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: None,
    parts: &[
        SkeletonPart::text(PartRole::Title, "Card Title"),
        SkeletonPart::text(PartRole::Description, "Card description goes here"),
    ],
};

static BADGE: Skeleton = Skeleton {
    kind: ComponentKind::Badge,
    extra_classes: &[],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: None,
    parts: &[SkeletonPart::text(PartRole::Label, "Badge")],
};

static INPUT: Skeleton = Skeleton {
    kind: ComponentKind::Input,
    extra_classes: &[],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: None,
    parts: &[SkeletonPart::text(PartRole::Placeholder, "Enter text...")],
};

static AVATAR: Skeleton = Skeleton {
    kind: ComponentKind::Avatar,
    extra_classes: &["flex", "items-center", "justify-center"],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: None,
    parts: &[SkeletonPart::text(PartRole::Fallback, "A")],
};

static PROGRESS: Skeleton = Skeleton {
    kind: ComponentKind::Progress,
    extra_classes: &["overflow-hidden"],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: None,
    parts: &[SkeletonPart::extent(PartRole::Indicator, 75)],
};

static TOGGLE: Skeleton = Skeleton {
    kind: ComponentKind::Toggle,
    extra_classes: &[],
    wrapper_classes: &["flex", "items-center", "space-x-2"],
    styled: StyleTarget::Parts(PartRole::Track),
    accent: None,
    parts: &[
        SkeletonPart::bare(PartRole::Track),
        SkeletonPart::text(PartRole::Label, "Toggle"),
    ],
};

static ALERT: Skeleton = Skeleton {
    kind: ComponentKind::Alert,
    extra_classes: &[],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: Some(Accent {
        width_px: 4,
        color: BackgroundColor::Yellow,
        classes: &["border-l-4", "border-yellow-500"],
    }),
    parts: &[
        SkeletonPart::text(PartRole::Title, "Alert Title"),
        SkeletonPart::text(PartRole::Description, "This is an alert message"),
    ],
};

static LOADING: Skeleton = Skeleton {
    kind: ComponentKind::Skeleton,
    extra_classes: &[],
    wrapper_classes: &["space-y-2"],
    styled: StyleTarget::Parts(PartRole::Bar),
    accent: None,
    parts: &[
        SkeletonPart::extent(PartRole::Bar, 75),
        SkeletonPart::extent(PartRole::Bar, 50),
    ],
};

static GENERIC: Skeleton = Skeleton {
    kind: ComponentKind::Generic,
    extra_classes: &[],
    wrapper_classes: &[],
    styled: StyleTarget::Root,
    accent: None,
    parts: &[SkeletonPart::text(PartRole::Label, "Custom Component")],
};
