//! Resolution of a configuration into concrete visual attributes.
//!
//! [`resolve_visual_attributes`] is the only place utility classes and
//! inline values are derived. The code generator embeds its output as text
//! and the preview renderer copies it onto render nodes, which keeps the two
//! visually equivalent.

use convert_case::{Case, Casing};
use smallvec::SmallVec;

use crate::color::Color;
use crate::config::{ComponentConfig, Spacing};
use crate::tokens::{Animation, BackgroundColor, FontWeight, Position, Shadow, Size, TextColor, Token};

/// Pixel size of one spacing/radius step of the utility framework.
pub const SPACING_UNIT: u32 = 4;

/// Fully computed, unit-concrete visual attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub width: Size,
    pub height: Size,
    /// Horizontal/vertical padding in px, on the 4px grid.
    pub padding: Spacing,
    /// Horizontal/vertical margin in px, on the 4px grid.
    pub margin: Spacing,
    pub font_size_px: u32,
    pub font_weight: FontWeight,
    pub background: BackgroundColor,
    pub text_color: TextColor,
    pub border_width_px: u32,
    pub border_radius_px: u32,
    pub shadow: Shadow,
    pub hover_shadow: Option<Shadow>,
    pub opacity_percent: u32,
    pub scale_percent: u32,
    pub rotate_deg: i32,
    pub position: Position,
    pub animation: Option<Animation>,
}

/// Resolve a configuration. Out-of-range numbers are normalized first, so
/// any input produces a legal style.
pub fn resolve_visual_attributes(config: &ComponentConfig) -> ResolvedStyle {
    let config = config.normalized();
    ResolvedStyle {
        width: config.width,
        height: config.height,
        padding: config.padding,
        margin: config.margin,
        font_size_px: config.font_size,
        font_weight: config.font_weight,
        background: config.background_color,
        text_color: config.text_color,
        border_width_px: config.border_width,
        border_radius_px: config.border_radius,
        shadow: config.box_shadow,
        hover_shadow: config.hover_shadow,
        opacity_percent: config.opacity,
        scale_percent: config.scale,
        rotate_deg: config.rotate,
        position: config.position,
        animation: config.animation,
    }
}

impl ResolvedStyle {
    /// Opacity as a fraction in `0.0..=1.0`.
    pub fn opacity(&self) -> f64 {
        self.opacity_percent as f64 / 100.0
    }

    /// Scale factor (`1.0` = unscaled).
    pub fn scale(&self) -> f64 {
        self.scale_percent as f64 / 100.0
    }

    /// `round(radius / 4)`, the `rounded-*` bucket.
    pub fn radius_bucket(&self) -> u32 {
        (self.border_radius_px + SPACING_UNIT / 2) / SPACING_UNIT
    }

    pub fn background_color(&self) -> Color {
        self.background.color()
    }

    pub fn foreground_color(&self) -> Color {
        self.text_color.color()
    }

    /// CSS transform, e.g. `scale(1.05) rotate(-15deg)`.
    pub fn transform(&self) -> String {
        format!(
            "scale({}) rotate({}deg)",
            format_number(self.scale()),
            self.rotate_deg
        )
    }

    /// The utility class list, in emission order.
    pub fn classes(&self) -> SmallVec<[String; 24]> {
        let mut classes = SmallVec::new();
        let unit = SPACING_UNIT;

        classes.push(format!("px-{}", self.padding.x / unit));
        classes.push(format!("py-{}", self.padding.y / unit));
        classes.push(format!("mx-{}", self.margin.x / unit));
        classes.push(format!("my-{}", self.margin.y / unit));

        classes.push(self.width.width_class());
        classes.push(self.height.height_class());

        classes.push(self.background.class().to_string());
        classes.push(self.text_color.class().to_string());
        classes.push(self.font_weight.class().to_string());
        classes.push(self.shadow.class().to_string());

        if self.border_width_px > 0 {
            classes.push(format!("border-{}", self.border_width_px));
        }
        classes.push(format!("rounded-{}", self.radius_bucket()));

        classes.push(format!("opacity-{}", self.opacity_percent));
        if let Some(animation) = self.animation {
            classes.push(animation.class().to_string());
        }
        if let Some(hover) = self.hover_shadow {
            classes.push(hover.hover_class());
        }

        classes.push(format!("scale-{}", self.scale_percent));
        classes.push(if self.rotate_deg < 0 {
            format!("-rotate-{}", self.rotate_deg.unsigned_abs())
        } else {
            format!("rotate-{}", self.rotate_deg)
        });

        classes.push(self.position.class().to_string());
        classes.push("transition-all".to_string());
        classes.push("duration-200".to_string());
        classes
    }

    /// Space-joined class list.
    pub fn class_name(&self) -> String {
        self.classes().join(" ")
    }

    /// The exact inline values that accompany the class list.
    pub fn inline_style(&self) -> InlineStyle {
        let mut style = InlineStyle::default();
        style.push("fontSize", StyleValue::px(self.font_size_px));
        style.push("padding", StyleValue::spacing(self.padding));
        style.push("margin", StyleValue::spacing(self.margin));
        style.push("borderRadius", StyleValue::px(self.border_radius_px));
        style.push("borderWidth", StyleValue::px(self.border_width_px));
        style.push("opacity", StyleValue::Number(self.opacity()));
        style.push("transform", StyleValue::Text(self.transform()));
        style
    }
}

/// A single inline style value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    /// A CSS string such as `"8px"`.
    Text(String),
    /// A unitless number such as an opacity fraction.
    Number(f64),
}

impl StyleValue {
    fn px(value: u32) -> Self {
        Self::Text(format!("{}px", value))
    }

    // CSS shorthand is vertical first.
    fn spacing(spacing: Spacing) -> Self {
        Self::Text(format!("{}px {}px", spacing.y, spacing.x))
    }

    /// Pixel value of a single `Npx` length.
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Text(text) => text.strip_suffix("px")?.parse().ok(),
            Self::Number(_) => None,
        }
    }

    /// Every `Npx` length in a (possibly shorthand) value.
    pub fn px_list(&self) -> Vec<f64> {
        match self {
            Self::Text(text) => text
                .split_whitespace()
                .filter_map(|part| part.strip_suffix("px")?.parse().ok())
                .collect(),
            Self::Number(_) => Vec::new(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// CSS text of the value.
    pub fn css(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => format_number(*n),
        }
    }
}

/// Ordered inline style declarations, keyed by camelCase property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineStyle {
    entries: SmallVec<[(&'static str, StyleValue); 8]>,
}

impl InlineStyle {
    fn push(&mut self, key: &'static str, value: StyleValue) {
        self.entries.push((key, value));
    }

    pub fn entries(&self) -> &[(&'static str, StyleValue)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declarations as CSS text (`font-size: 16px; ...`).
    pub fn to_css(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}: {}", key.to_case(Case::Kebab), value.css()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InlineStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Shortest decimal form of a number (`1`, `0.5`, `1.05`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComponentConfig;

    #[test]
    fn test_default_class_name() {
        let style = resolve_visual_attributes(&ComponentConfig::default());
        assert_eq!(
            style.class_name(),
            "px-4 py-4 mx-0 my-0 w-fit h-fit bg-primary text-primary-foreground font-medium \
             shadow-sm rounded-2 opacity-100 scale-100 rotate-0 relative transition-all duration-200"
        );
    }

    #[test]
    fn test_default_inline_style() {
        let style = resolve_visual_attributes(&ComponentConfig::default()).inline_style();
        assert_eq!(style.get("borderRadius").unwrap().as_px(), Some(8.0));
        assert_eq!(style.get("opacity").unwrap().as_number(), Some(1.0));
        assert_eq!(
            style.get("transform").unwrap().as_text(),
            Some("scale(1) rotate(0deg)")
        );
        assert_eq!(style.get("padding").unwrap().px_list(), vec![16.0, 16.0]);
        assert_eq!(style.len(), 7);
    }

    #[test]
    fn test_fractional_values() {
        let config = ComponentConfig {
            opacity: 45,
            scale: 105,
            rotate: -45,
            ..ComponentConfig::default()
        };
        let style = resolve_visual_attributes(&config);
        assert_eq!(style.transform(), "scale(1.05) rotate(-45deg)");
        assert_eq!(style.opacity(), 0.45);
        let classes = style.classes();
        assert!(classes.iter().any(|c| c == "-rotate-45"));
        assert!(classes.iter().any(|c| c == "opacity-45"));
    }

    #[test]
    fn test_radius_bucket_rounds_half_up() {
        for (radius, bucket) in [(0, 0), (1, 0), (2, 1), (6, 2), (8, 2), (10, 3), (64, 16)] {
            let config = ComponentConfig {
                border_radius: radius,
                ..ComponentConfig::default()
            };
            assert_eq!(resolve_visual_attributes(&config).radius_bucket(), bucket, "radius {radius}");
        }
    }

    #[test]
    fn test_border_class_only_when_positive() {
        let mut config = ComponentConfig::default();
        let style = resolve_visual_attributes(&config);
        assert!(!style.classes().iter().any(|c| c.starts_with("border-")));
        config.border_width = 2;
        let style = resolve_visual_attributes(&config);
        assert!(style.classes().iter().any(|c| c == "border-2"));
    }

    #[test]
    fn test_spacing_shorthand_is_vertical_first() {
        let config = ComponentConfig {
            padding: Spacing::new(24, 8),
            ..ComponentConfig::default()
        };
        let style = resolve_visual_attributes(&config);
        assert_eq!(style.inline_style().get("padding").unwrap().css(), "8px 24px");
        assert!(style.classes().iter().any(|c| c == "px-6"));
        assert!(style.classes().iter().any(|c| c == "py-2"));
    }

    #[test]
    fn test_unclamped_input_is_normalized() {
        let config = ComponentConfig {
            padding: Spacing::new(15, 15),
            font_size: 500,
            opacity: 300,
            ..ComponentConfig::default()
        };
        let style = resolve_visual_attributes(&config);
        assert_eq!(style.padding, Spacing::new(16, 16));
        assert_eq!(style.font_size_px, 72);
        assert_eq!(style.opacity(), 1.0);
    }

    #[test]
    fn test_to_css() {
        let css = resolve_visual_attributes(&ComponentConfig::default())
            .inline_style()
            .to_css();
        assert!(css.starts_with("font-size: 16px; padding: 16px 16px;"));
        assert!(css.ends_with("opacity: 1; transform: scale(1) rotate(0deg)"));
        assert!(css.contains("; border-radius: 8px; border-width: 0px;"));
    }
}
