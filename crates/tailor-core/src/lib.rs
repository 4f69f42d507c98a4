//! Core types for the Tailor component editor.
//!
//! This crate holds the editable [`ComponentConfig`], the closed token
//! catalogs its enumerated fields draw from, the [`ComponentKind`] catalog
//! with each kind's [`Skeleton`], and [`resolve_visual_attributes`], the one
//! derivation that both code generation and live preview read from.

pub mod color;
pub mod config;
pub mod errors;
pub mod field;
pub mod kind;
pub mod skeleton;
pub mod style;
pub mod tokens;

pub use color::Color;
pub use config::{ComponentConfig, NumericRange, Spacing};
pub use errors::{ConfigError, Result};
pub use field::{ConfigField, FieldValue};
pub use kind::ComponentKind;
pub use skeleton::{fraction_class, Accent, PartRole, Skeleton, SkeletonPart, StyleTarget};
pub use style::{format_number, resolve_visual_attributes, InlineStyle, ResolvedStyle, StyleValue};
pub use tokens::{Animation, BackgroundColor, FontWeight, Position, Shadow, Size, TextColor, Token};
