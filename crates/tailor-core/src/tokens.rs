//! Closed catalogs for the enumerated configuration fields.
//!
//! Every token is identified by the utility class the browser UI stores
//! (`"font-medium"`, `"bg-blue-500"`, ...) and also accepts a few bare
//! aliases (`"medium"`, `"blue"`).

use crate::color::Color;

/// A member of a closed token catalog.
pub trait Token: Sized + Copy + 'static {
    /// Catalog name used in diagnostics.
    const CATALOG: &'static str;

    /// Every member, in editor order.
    fn all() -> &'static [Self];

    /// The utility class this token stands for.
    fn class(&self) -> &'static str;

    /// Parse a class token or one of its aliases.
    fn from_token(token: &str) -> Option<Self>;

    /// Lenient parse; see [`parse_or_default`].
    fn parse_or_default(token: &str) -> Self
    where
        Self: Default,
    {
        parse_or_default(token)
    }
}

/// Parse leniently, falling back to the catalog default on unknown input.
pub fn parse_or_default<T: Token + Default>(token: &str) -> T {
    T::from_token(token).unwrap_or_else(|| {
        let fallback = T::default();
        tracing::warn!(
            catalog = T::CATALOG,
            token,
            fallback = fallback.class(),
            "unknown token, using catalog default"
        );
        fallback
    })
}

/// Parse an optional token where empty input and `"none"` mean absent.
/// Unknown tokens also resolve to absent.
pub fn parse_optional<T: Token>(token: &str) -> Option<T> {
    let token = token.trim();
    if token.is_empty() || token == "none" {
        return None;
    }
    let parsed = T::from_token(token);
    if parsed.is_none() {
        tracing::warn!(catalog = T::CATALOG, token, "unknown token, treating as none");
    }
    parsed
}

macro_rules! token_catalog {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $class:literal $(| $alias:literal)*,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl Token for $name {
            const CATALOG: &'static str = stringify!($name);

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn class(&self) -> &'static str {
                match self {
                    $(Self::$variant => $class,)+
                }
            }

            fn from_token(token: &str) -> Option<Self> {
                match token.trim() {
                    $($class $(| $alias)* => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.class())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.class())
            }
        }
    };
}

token_catalog! {
    /// Font weight preset.
    pub enum FontWeight {
        Thin => "font-thin" | "thin",
        Light => "font-light" | "light",
        Normal => "font-normal" | "normal",
        Medium => "font-medium" | "medium",
        Semibold => "font-semibold" | "semibold",
        Bold => "font-bold" | "bold",
        Extrabold => "font-extrabold" | "extrabold" | "extra-bold",
    }
}

impl FontWeight {
    /// Numeric CSS `font-weight`.
    pub fn css_weight(&self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::Extrabold => 800,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::Medium
    }
}

token_catalog! {
    /// Background palette selection.
    pub enum BackgroundColor {
        /// Theme primary.
        Primary => "bg-primary" | "primary",
        Slate => "bg-slate-500" | "slate",
        Red => "bg-red-500" | "red",
        Orange => "bg-orange-500" | "orange",
        Yellow => "bg-yellow-500" | "yellow",
        Green => "bg-green-500" | "green",
        Blue => "bg-blue-500" | "blue",
        Indigo => "bg-indigo-500" | "indigo",
        Purple => "bg-purple-500" | "purple",
        Pink => "bg-pink-500" | "pink",
        Cyan => "bg-cyan-500" | "cyan",
    }
}

impl BackgroundColor {
    /// Concrete fill color.
    pub fn color(&self) -> Color {
        let (r, g, b) = match self {
            Self::Primary => (0x0f, 0x17, 0x2a),
            Self::Slate => (0x64, 0x74, 0x8b),
            Self::Red => (0xef, 0x44, 0x44),
            Self::Orange => (0xf9, 0x73, 0x16),
            Self::Yellow => (0xea, 0xb3, 0x08),
            Self::Green => (0x22, 0xc5, 0x5e),
            Self::Blue => (0x3b, 0x82, 0xf6),
            Self::Indigo => (0x63, 0x66, 0xf1),
            Self::Purple => (0xa8, 0x55, 0xf7),
            Self::Pink => (0xec, 0x48, 0x99),
            Self::Cyan => (0x06, 0xb6, 0xd4),
        };
        Color::from_rgb8(r, g, b)
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::Primary
    }
}

token_catalog! {
    /// Text palette selection.
    pub enum TextColor {
        White => "text-white" | "white",
        Black => "text-black" | "black",
        Primary => "text-primary" | "primary",
        Secondary => "text-secondary" | "secondary",
        Muted => "text-muted-foreground" | "muted" | "muted-foreground",
        PrimaryForeground => "text-primary-foreground" | "primary-foreground",
    }
}

impl TextColor {
    /// Concrete text color.
    pub fn color(&self) -> Color {
        let (r, g, b) = match self {
            Self::White => (0xff, 0xff, 0xff),
            Self::Black => (0x00, 0x00, 0x00),
            Self::Primary => (0x0f, 0x17, 0x2a),
            Self::Secondary => (0xf1, 0xf5, 0xf9),
            Self::Muted => (0x64, 0x74, 0x8b),
            Self::PrimaryForeground => (0xf8, 0xfa, 0xfc),
        };
        Color::from_rgb8(r, g, b)
    }
}

impl Default for TextColor {
    fn default() -> Self {
        Self::PrimaryForeground
    }
}

token_catalog! {
    /// Box shadow preset.
    pub enum Shadow {
        None => "shadow-none" | "none",
        Sm => "shadow-sm" | "sm",
        Md => "shadow-md" | "md",
        Lg => "shadow-lg" | "lg",
        Xl => "shadow-xl" | "xl",
        Xl2 => "shadow-2xl" | "2xl",
        Inner => "shadow-inner" | "inner",
    }
}

impl Shadow {
    /// CSS `box-shadow` value for the preset.
    pub fn css(&self) -> &'static str {
        match self {
            Self::None => "0 0 #0000",
            Self::Sm => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            Self::Md => "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
            Self::Lg => "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
            Self::Xl => "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
            Self::Xl2 => "0 25px 50px -12px rgb(0 0 0 / 0.25)",
            Self::Inner => "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)",
        }
    }

    /// Class used when the shadow only applies on hover.
    pub fn hover_class(&self) -> String {
        format!("hover:{}", self.class())
    }

    /// Parse a hover shadow token (`"hover:shadow-lg"`, `"shadow-lg"`, `"lg"`).
    /// Empty input, `"none"` and unknown tokens mean no hover override.
    pub fn parse_hover(token: &str) -> Option<Self> {
        let token = token.trim();
        let bare = token.strip_prefix("hover:").unwrap_or(token);
        match parse_optional::<Self>(bare) {
            Some(Self::None) => None,
            other => other,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::Sm
    }
}

token_catalog! {
    /// CSS positioning intent.
    pub enum Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::Relative
    }
}

token_catalog! {
    /// Hover or continuous animation preset.
    pub enum Animation {
        ScaleUp => "hover:scale-105" | "scale-105",
        ScaleUpMore => "hover:scale-110" | "scale-110",
        ShadowLift => "hover:shadow-xl" | "shadow-lift",
        Lift => "hover:-translate-y-1" | "lift",
        Tilt => "hover:rotate-1" | "tilt",
        Pulse => "animate-pulse" | "pulse",
        Bounce => "animate-bounce" | "bounce",
    }
}

impl Animation {
    /// Whether the animation only plays on hover.
    pub fn is_hover(&self) -> bool {
        self.class().starts_with("hover:")
    }
}

/// Sizing intent for width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Auto,
    #[default]
    Fit,
    Px128,
    Px192,
    Px256,
    Full,
}

impl Size {
    pub const ALL: &'static [Self] = &[
        Self::Auto,
        Self::Fit,
        Self::Px128,
        Self::Px192,
        Self::Px256,
        Self::Full,
    ];

    fn suffix(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Fit => "fit",
            Self::Px128 => "32",
            Self::Px192 => "48",
            Self::Px256 => "64",
            Self::Full => "full",
        }
    }

    /// Class when used as a width (`w-*`).
    pub fn width_class(&self) -> String {
        format!("w-{}", self.suffix())
    }

    /// Class when used as a height (`h-*`).
    pub fn height_class(&self) -> String {
        format!("h-{}", self.suffix())
    }

    /// Fixed pixel extent, if any.
    pub fn px(&self) -> Option<u32> {
        match self {
            Self::Px128 => Some(128),
            Self::Px192 => Some(192),
            Self::Px256 => Some(256),
            _ => None,
        }
    }

    /// CSS length for the extent.
    pub fn css(&self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Fit => "fit-content".to_string(),
            Self::Full => "100%".to_string(),
            fixed => format!("{}px", fixed.px().unwrap_or_default()),
        }
    }

    /// Parse `w-32`, `h-32`, `fixed-128px`, `128px`, `fit` and friends.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        let bare = token
            .strip_prefix("w-")
            .or_else(|| token.strip_prefix("h-"))
            .unwrap_or(token);
        let bare = bare.strip_prefix("fixed-").unwrap_or(bare);
        match bare {
            "auto" => Some(Self::Auto),
            "fit" | "fit-content" => Some(Self::Fit),
            "32" | "128px" => Some(Self::Px128),
            "48" | "192px" => Some(Self::Px192),
            "64" | "256px" => Some(Self::Px256),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

/// Serialized as its CSS length; config fields use the `w-*`/`h-*` tokens.
#[cfg(feature = "serde")]
impl serde::Serialize for Size {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_and_alias_parse() {
        assert_eq!(FontWeight::from_token("font-bold"), Some(FontWeight::Bold));
        assert_eq!(FontWeight::from_token("extra-bold"), Some(FontWeight::Extrabold));
        assert_eq!(BackgroundColor::from_token(" blue "), Some(BackgroundColor::Blue));
        assert_eq!(TextColor::from_token("muted"), Some(TextColor::Muted));
        assert_eq!(Shadow::from_token("shadow-2xl"), Some(Shadow::Xl2));
        assert_eq!(Position::from_token("sticky"), Some(Position::Sticky));
        assert_eq!(FontWeight::from_token("font-heavy"), None);
    }

    #[test]
    fn test_every_class_parses_back() {
        for weight in FontWeight::ALL {
            assert_eq!(FontWeight::from_token(weight.class()), Some(*weight));
        }
        for bg in BackgroundColor::ALL {
            assert_eq!(BackgroundColor::from_token(bg.class()), Some(*bg));
        }
        for animation in Animation::ALL {
            assert_eq!(Animation::from_token(animation.class()), Some(*animation));
        }
    }

    #[test]
    fn test_lenient_parse_falls_back() {
        assert_eq!(parse_or_default::<Shadow>("shadow-huge"), Shadow::Sm);
        assert_eq!(parse_or_default::<TextColor>("text-white"), TextColor::White);
        assert_eq!(FontWeight::parse_or_default("font-heavy"), FontWeight::default());
    }

    #[test]
    fn test_optional_tokens() {
        assert_eq!(parse_optional::<Animation>(""), None);
        assert_eq!(parse_optional::<Animation>("none"), None);
        assert_eq!(parse_optional::<Animation>("animate-bounce"), Some(Animation::Bounce));
        assert!(Animation::ScaleUp.is_hover());
        assert!(!Animation::Pulse.is_hover());
    }

    #[test]
    fn test_hover_shadow() {
        assert_eq!(Shadow::parse_hover("hover:shadow-lg"), Some(Shadow::Lg));
        assert_eq!(Shadow::parse_hover("md"), Some(Shadow::Md));
        assert_eq!(Shadow::parse_hover("hover:shadow-none"), None);
        assert_eq!(Shadow::parse_hover(""), None);
        assert_eq!(Shadow::Lg.hover_class(), "hover:shadow-lg");
    }

    #[test]
    fn test_size_tokens() {
        assert_eq!(Size::from_token("w-32"), Some(Size::Px128));
        assert_eq!(Size::from_token("h-full"), Some(Size::Full));
        assert_eq!(Size::from_token("fixed-192px"), Some(Size::Px192));
        assert_eq!(Size::from_token("w-96"), None);
        assert_eq!(Size::Px256.width_class(), "w-64");
        assert_eq!(Size::Fit.height_class(), "h-fit");
        assert_eq!(Size::Px128.css(), "128px");
        assert_eq!(Size::Full.px(), None);
    }

    #[test]
    fn test_palette_colors() {
        assert_eq!(BackgroundColor::Blue.color().to_hex(), "#3b82f6");
        assert_eq!(TextColor::White.color(), Color::WHITE);
        assert_eq!(FontWeight::Semibold.css_weight(), 600);
    }
}
