//! Field keys and edit values.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// A key of [`ComponentConfig`](crate::ComponentConfig), named as the
/// browser editor names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ConfigField {
    Width,
    Height,
    Padding,
    Margin,
    FontSize,
    FontWeight,
    BackgroundColor,
    TextColor,
    BorderWidth,
    BorderRadius,
    BoxShadow,
    Opacity,
    Scale,
    Rotate,
    Position,
    Animation,
    HoverShadow,
}

impl ConfigField {
    pub const ALL: &'static [Self] = &[
        Self::Width,
        Self::Height,
        Self::Padding,
        Self::Margin,
        Self::FontSize,
        Self::FontWeight,
        Self::BackgroundColor,
        Self::TextColor,
        Self::BorderWidth,
        Self::BorderRadius,
        Self::BoxShadow,
        Self::Opacity,
        Self::Scale,
        Self::Rotate,
        Self::Position,
        Self::Animation,
        Self::HoverShadow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::BackgroundColor => "backgroundColor",
            Self::TextColor => "textColor",
            Self::BorderWidth => "borderWidth",
            Self::BorderRadius => "borderRadius",
            Self::BoxShadow => "boxShadow",
            Self::Opacity => "opacity",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Position => "position",
            Self::Animation => "animation",
            Self::HoverShadow => "hoverShadow",
        }
    }

    /// Whether the field takes a catalog token rather than a number.
    pub fn is_enumerated(&self) -> bool {
        matches!(
            self,
            Self::Width
                | Self::Height
                | Self::FontWeight
                | Self::BackgroundColor
                | Self::TextColor
                | Self::BoxShadow
                | Self::Position
                | Self::Animation
                | Self::HoverShadow
        )
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownField(s.to_string()))
    }
}

/// A value submitted by an editor control.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    /// Slider value; may be out of range and is clamped on apply.
    Integer(i64),
    /// Horizontal/vertical pair for padding and margin.
    Pair(i64, i64),
    /// Catalog token for enumerated fields.
    Token(String),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<(i64, i64)> for FieldValue {
    fn from((x, y): (i64, i64)) -> Self {
        Self::Pair(x, y)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in ConfigField::ALL {
            assert_eq!(field.as_str().parse::<ConfigField>().unwrap(), *field);
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = "letterSpacing".parse::<ConfigField>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownField("letterSpacing".to_string()));
    }

    #[test]
    fn test_enumerated_fields() {
        assert!(ConfigField::BoxShadow.is_enumerated());
        assert!(!ConfigField::Padding.is_enumerated());
        assert!(!ConfigField::Rotate.is_enumerated());
    }
}
