//! The editable component configuration.

use crate::errors::{ConfigError, Result};
use crate::field::{ConfigField, FieldValue};
use crate::tokens::{Animation, BackgroundColor, FontWeight, Position, Shadow, Size, TextColor, Token};

/// An inclusive integer range with an editor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl NumericRange {
    pub const fn new(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }

    /// Clamp to the nearest bound.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Round to the nearest step (measured from `min`, halves round up),
    /// then clamp.
    pub fn snap(&self, value: i64) -> i64 {
        if self.step <= 1 {
            return self.clamp(value);
        }
        let offset = self.clamp(value) - self.min;
        let snapped = (offset + self.step / 2).div_euclid(self.step) * self.step;
        self.clamp(self.min + snapped)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const SPACING_RANGE: NumericRange = NumericRange::new(0, 64, 4);
pub const FONT_SIZE_RANGE: NumericRange = NumericRange::new(8, 72, 1);
pub const BORDER_WIDTH_RANGE: NumericRange = NumericRange::new(0, 16, 1);
pub const BORDER_RADIUS_RANGE: NumericRange = NumericRange::new(0, 64, 1);
pub const OPACITY_RANGE: NumericRange = NumericRange::new(0, 100, 5);
pub const SCALE_RANGE: NumericRange = NumericRange::new(50, 200, 5);
pub const ROTATE_RANGE: NumericRange = NumericRange::new(-180, 180, 15);

impl ConfigField {
    /// Declared range for numeric fields; `None` for enumerated ones.
    pub fn range(&self) -> Option<NumericRange> {
        match self {
            Self::Padding | Self::Margin => Some(SPACING_RANGE),
            Self::FontSize => Some(FONT_SIZE_RANGE),
            Self::BorderWidth => Some(BORDER_WIDTH_RANGE),
            Self::BorderRadius => Some(BORDER_RADIUS_RANGE),
            Self::Opacity => Some(OPACITY_RANGE),
            Self::Scale => Some(SCALE_RANGE),
            Self::Rotate => Some(ROTATE_RANGE),
            _ => None,
        }
    }

    /// Bring a numeric input to the nearest legal value: clamped to the
    /// range and snapped to the field's step.
    pub fn normalize(&self, value: i64) -> i64 {
        match self.range() {
            Some(range) => range.snap(value),
            None => value,
        }
    }
}

/// Horizontal and vertical spacing in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "[u32; 2]"))]
pub struct Spacing {
    pub x: u32,
    pub y: u32,
}

impl Spacing {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<[u32; 2]> for Spacing {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Spacing> for [u32; 2] {
    fn from(spacing: Spacing) -> Self {
        [spacing.x, spacing.y]
    }
}

/// The flat record of visual properties edited in the property panel.
///
/// With the `serde` feature it uses the browser's camelCase shape with class
/// tokens. Missing fields take their default and numbers are normalized on
/// the way in, so any host value deserializes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(remote = "Self", rename_all = "camelCase", default))]
pub struct ComponentConfig {
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::width"))]
    pub width: Size,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::height"))]
    pub height: Size,
    pub padding: Spacing,
    pub margin: Spacing,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::unsigned"))]
    pub font_size: u32,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::token"))]
    pub font_weight: FontWeight,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::token"))]
    pub background_color: BackgroundColor,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::token"))]
    pub text_color: TextColor,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::unsigned"))]
    pub border_width: u32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::unsigned"))]
    pub border_radius: u32,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::token"))]
    pub box_shadow: Shadow,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::unsigned"))]
    pub opacity: u32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::unsigned"))]
    pub scale: u32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::signed"))]
    pub rotate: i32,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::token"))]
    pub position: Position,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::optional_token", default))]
    pub animation: Option<Animation>,
    #[cfg_attr(feature = "serde", serde(with = "serde_impl::hover_shadow", default))]
    pub hover_shadow: Option<Shadow>,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            width: Size::Fit,
            height: Size::Fit,
            padding: Spacing::new(16, 16),
            margin: Spacing::new(0, 0),
            font_size: 16,
            font_weight: FontWeight::Medium,
            background_color: BackgroundColor::Primary,
            text_color: TextColor::PrimaryForeground,
            border_width: 0,
            border_radius: 8,
            box_shadow: Shadow::Sm,
            opacity: 100,
            scale: 100,
            rotate: 0,
            position: Position::Relative,
            animation: None,
            hover_shadow: None,
        }
    }
}

impl ComponentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and apply a single edit.
    ///
    /// Numeric values are normalized into range; unknown tokens are
    /// rejected and leave the configuration untouched. Returns whether the
    /// stored value changed.
    pub fn apply(&mut self, field: ConfigField, value: &FieldValue) -> Result<bool> {
        let before = self.clone();
        match field {
            ConfigField::Padding => self.padding = spacing(field, value)?,
            ConfigField::Margin => self.margin = spacing(field, value)?,
            ConfigField::FontSize => self.font_size = unsigned(field, value)?,
            ConfigField::BorderWidth => self.border_width = unsigned(field, value)?,
            ConfigField::BorderRadius => self.border_radius = unsigned(field, value)?,
            ConfigField::Opacity => self.opacity = unsigned(field, value)?,
            ConfigField::Scale => self.scale = unsigned(field, value)?,
            ConfigField::Rotate => self.rotate = integer(field, value)? as i32,
            ConfigField::Width => {
                let text = token(field, value)?;
                self.width = Size::from_token(text).ok_or_else(|| invalid(field, text))?;
            }
            ConfigField::Height => {
                let text = token(field, value)?;
                self.height = Size::from_token(text).ok_or_else(|| invalid(field, text))?;
            }
            ConfigField::FontWeight => self.font_weight = catalog(field, value)?,
            ConfigField::BackgroundColor => self.background_color = catalog(field, value)?,
            ConfigField::TextColor => self.text_color = catalog(field, value)?,
            ConfigField::BoxShadow => self.box_shadow = catalog(field, value)?,
            ConfigField::Position => self.position = catalog(field, value)?,
            ConfigField::Animation => {
                let text = token(field, value)?;
                self.animation = optional(field, text, Animation::from_token)?;
            }
            ConfigField::HoverShadow => {
                let text = token(field, value)?;
                let bare = text.trim().strip_prefix("hover:").unwrap_or(text);
                self.hover_shadow = match optional(field, bare, Shadow::from_token)? {
                    Some(Shadow::None) => None,
                    other => other,
                };
            }
        }
        Ok(*self != before)
    }

    /// A copy with every numeric field brought into its declared range.
    pub fn normalized(&self) -> Self {
        let norm = |field: ConfigField, value: i64| field.normalize(value);
        let mut out = self.clone();
        out.padding = Spacing::new(
            norm(ConfigField::Padding, self.padding.x.into()) as u32,
            norm(ConfigField::Padding, self.padding.y.into()) as u32,
        );
        out.margin = Spacing::new(
            norm(ConfigField::Margin, self.margin.x.into()) as u32,
            norm(ConfigField::Margin, self.margin.y.into()) as u32,
        );
        out.font_size = norm(ConfigField::FontSize, self.font_size.into()) as u32;
        out.border_width = norm(ConfigField::BorderWidth, self.border_width.into()) as u32;
        out.border_radius = norm(ConfigField::BorderRadius, self.border_radius.into()) as u32;
        out.opacity = norm(ConfigField::Opacity, self.opacity.into()) as u32;
        out.scale = norm(ConfigField::Scale, self.scale.into()) as u32;
        out.rotate = norm(ConfigField::Rotate, self.rotate.into()) as i32;
        out
    }

    /// Whether every numeric field already lies in its legal set.
    pub fn is_normalized(&self) -> bool {
        *self == self.normalized()
    }
}

fn invalid(field: ConfigField, token: &str) -> ConfigError {
    ConfigError::InvalidFieldValue {
        field,
        token: token.to_string(),
    }
}

fn integer(field: ConfigField, value: &FieldValue) -> Result<i64> {
    match value {
        FieldValue::Integer(v) => Ok(field.normalize(*v)),
        _ => Err(ConfigError::TypeMismatch {
            field,
            expected: "an integer",
        }),
    }
}

fn unsigned(field: ConfigField, value: &FieldValue) -> Result<u32> {
    // Every unsigned field has a non-negative minimum, so the normalized
    // value always fits.
    integer(field, value).map(|v| v.max(0) as u32)
}

fn spacing(field: ConfigField, value: &FieldValue) -> Result<Spacing> {
    match value {
        FieldValue::Pair(x, y) => Ok(Spacing::new(
            field.normalize(*x) as u32,
            field.normalize(*y) as u32,
        )),
        // A single number sets both axes.
        FieldValue::Integer(v) => {
            let v = field.normalize(*v) as u32;
            Ok(Spacing::new(v, v))
        }
        FieldValue::Token(_) => Err(ConfigError::TypeMismatch {
            field,
            expected: "a [horizontal, vertical] pair",
        }),
    }
}

fn token(field: ConfigField, value: &FieldValue) -> Result<&str> {
    match value {
        FieldValue::Token(text) => Ok(text.as_str()),
        _ => Err(ConfigError::TypeMismatch {
            field,
            expected: "a catalog token",
        }),
    }
}

fn catalog<T: Token>(field: ConfigField, value: &FieldValue) -> Result<T> {
    let text = token(field, value)?;
    T::from_token(text).ok_or_else(|| invalid(field, text))
}

fn optional<T>(
    field: ConfigField,
    text: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "none" {
        return Ok(None);
    }
    parse(trimmed).map(Some).ok_or_else(|| invalid(field, text))
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serializer};

    use serde::Serialize;

    use super::{ComponentConfig, Shadow, Size, Spacing, Token};
    use crate::tokens::{parse_optional, parse_or_default};

    // Host numbers may be negative, huge or fractional. They saturate here
    // and reach their legal value when the whole config is normalized.
    fn saturate(value: f64) -> i64 {
        value.round() as i64
    }

    fn to_u32(value: f64) -> u32 {
        saturate(value).clamp(0, u32::MAX.into()) as u32
    }

    pub fn unsigned<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        f64::deserialize(d).map(to_u32)
    }

    pub fn signed<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
        f64::deserialize(d).map(|v| saturate(v).clamp(i32::MIN.into(), i32::MAX.into()) as i32)
    }

    impl Serialize for ComponentConfig {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            ComponentConfig::serialize(self, s)
        }
    }

    impl<'de> Deserialize<'de> for ComponentConfig {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            ComponentConfig::deserialize(d).map(|config| config.normalized())
        }
    }

    impl<'de> Deserialize<'de> for Spacing {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let [x, y] = <[f64; 2]>::deserialize(d)?;
            Ok(Spacing::new(to_u32(x), to_u32(y)))
        }
    }

    pub mod token {
        use super::*;

        pub fn serialize<T: Token, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(value.class())
        }

        pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
        where
            T: Token + Default,
            D: Deserializer<'de>,
        {
            let text = String::deserialize(d)?;
            Ok(parse_or_default(&text))
        }
    }

    pub mod optional_token {
        use super::*;

        pub fn serialize<T: Token, S: Serializer>(
            value: &Option<T>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            s.serialize_str(value.map(|v| v.class()).unwrap_or(""))
        }

        pub fn deserialize<'de, T, D>(d: D) -> Result<Option<T>, D::Error>
        where
            T: Token,
            D: Deserializer<'de>,
        {
            let text = Option::<String>::deserialize(d)?.unwrap_or_default();
            Ok(parse_optional(&text))
        }
    }

    pub mod hover_shadow {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Option<Shadow>, s: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(shadow) => s.serialize_str(&shadow.hover_class()),
                None => s.serialize_str(""),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Shadow>, D::Error> {
            let text = Option::<String>::deserialize(d)?.unwrap_or_default();
            Ok(Shadow::parse_hover(&text))
        }
    }

    fn size_or_default(text: &str) -> Size {
        Size::from_token(text).unwrap_or_else(|| {
            tracing::warn!(token = text, "unknown size token, using fit");
            Size::Fit
        })
    }

    pub mod width {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Size, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&value.width_class())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Size, D::Error> {
            Ok(size_or_default(&String::deserialize(d)?))
        }
    }

    pub mod height {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Size, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&value.height_class())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Size, D::Error> {
            Ok(size_or_default(&String::deserialize(d)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(SPACING_RANGE.snap(15), 16);
        assert_eq!(SPACING_RANGE.snap(14), 16);
        assert_eq!(SPACING_RANGE.snap(13), 12);
        assert_eq!(SPACING_RANGE.snap(1), 0);
        assert_eq!(SPACING_RANGE.snap(-7), 0);
        assert_eq!(SPACING_RANGE.snap(100), 64);
    }

    #[test]
    fn test_clamp_font_size_and_opacity() {
        let mut config = ComponentConfig::default();
        config.apply(ConfigField::FontSize, &999.into()).unwrap();
        assert_eq!(config.font_size, 72);
        config.apply(ConfigField::Opacity, &(-5).into()).unwrap();
        assert_eq!(config.opacity, 0);
        config.apply(ConfigField::Rotate, &(-500).into()).unwrap();
        assert_eq!(config.rotate, -180);
    }

    #[test]
    fn test_stepped_fields_snap_to_nearest_step() {
        let mut config = ComponentConfig::default();
        config.apply(ConfigField::Opacity, &37.into()).unwrap();
        assert_eq!(config.opacity, 35);
        config.apply(ConfigField::Rotate, &10.into()).unwrap();
        assert_eq!(config.rotate, 15);
        config.apply(ConfigField::Rotate, &(-172).into()).unwrap();
        assert_eq!(config.rotate, -165);
        config.apply(ConfigField::Scale, &103.into()).unwrap();
        assert_eq!(config.scale, 105);
        config.apply(ConfigField::FontSize, &17.into()).unwrap();
        assert_eq!(config.font_size, 17);
    }

    #[test]
    fn test_snap_from_negative_min() {
        assert_eq!(ROTATE_RANGE.snap(10), 15);
        assert_eq!(ROTATE_RANGE.snap(-7), 0);
        assert_eq!(ROTATE_RANGE.snap(-8), -15);
        assert_eq!(ROTATE_RANGE.snap(999), 180);
        assert_eq!(OPACITY_RANGE.snap(37), 35);
        assert_eq!(SCALE_RANGE.snap(12), 50);
    }

    #[test]
    fn test_padding_pair_and_single() {
        let mut config = ComponentConfig::default();
        assert!(config.apply(ConfigField::Padding, &(15, 70).into()).unwrap());
        assert_eq!(config.padding, Spacing::new(16, 64));
        config.apply(ConfigField::Margin, &8.into()).unwrap();
        assert_eq!(config.margin, Spacing::new(8, 8));
    }

    #[test]
    fn test_unknown_token_rejected_and_unchanged() {
        let mut config = ComponentConfig::default();
        let err = config
            .apply(ConfigField::BackgroundColor, &"bg-chartreuse-500".into())
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFieldValue { field: ConfigField::BackgroundColor, .. }));
        assert_eq!(config, ComponentConfig::default());
    }

    #[test]
    fn test_type_mismatch() {
        let mut config = ComponentConfig::default();
        let err = config.apply(ConfigField::FontSize, &"large".into()).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { field: ConfigField::FontSize, .. }));
        let err = config.apply(ConfigField::Position, &3.into()).unwrap_err();
        assert!(matches!(err, ConfigError::TypeMismatch { .. }));
    }

    #[test]
    fn test_optional_fields() {
        let mut config = ComponentConfig::default();
        config.apply(ConfigField::Animation, &"animate-pulse".into()).unwrap();
        assert_eq!(config.animation, Some(Animation::Pulse));
        config.apply(ConfigField::Animation, &"none".into()).unwrap();
        assert_eq!(config.animation, None);
        config.apply(ConfigField::HoverShadow, &"hover:shadow-xl".into()).unwrap();
        assert_eq!(config.hover_shadow, Some(Shadow::Xl));
        config.apply(ConfigField::HoverShadow, &"".into()).unwrap();
        assert_eq!(config.hover_shadow, None);
        assert!(config.apply(ConfigField::Animation, &"wiggle".into()).is_err());
    }

    #[test]
    fn test_apply_reports_change() {
        let mut config = ComponentConfig::default();
        assert!(!config.apply(ConfigField::FontSize, &16.into()).unwrap());
        assert!(config.apply(ConfigField::FontSize, &18.into()).unwrap());
    }

    #[test]
    fn test_normalized() {
        let config = ComponentConfig {
            padding: Spacing::new(15, 200),
            scale: 10,
            border_width: 99,
            ..ComponentConfig::default()
        };
        assert!(!config.is_normalized());
        let normalized = config.normalized();
        assert_eq!(normalized.padding, Spacing::new(16, 64));
        assert_eq!(normalized.scale, 50);
        assert_eq!(normalized.border_width, 16);
        assert!(normalized.is_normalized());
        assert!(ComponentConfig::default().is_normalized());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_out_of_range_json_is_clamped() {
        let config: ComponentConfig = serde_json::from_str(
            r#"{"opacity":-5,"rotate":-999,"fontSize":999,"scale":12.4,"padding":[-8,70]}"#,
        )
        .unwrap();
        assert_eq!(config.opacity, 0);
        assert_eq!(config.rotate, -180);
        assert_eq!(config.font_size, 72);
        assert_eq!(config.scale, 50);
        assert_eq!(config.padding, Spacing::new(0, 64));
        assert_eq!(config.width, Size::Fit);
        assert!(config.is_normalized());
    }
}
