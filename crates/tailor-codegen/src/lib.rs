//! # Tailor Codegen
//!
//! Turns a component kind and a [`ComponentConfig`](tailor_core::ComponentConfig)
//! into React source text.
//!
//! Every kind owns a handlebars template registered once in a
//! [`SkeletonRegistry`]; unknown kinds use the mandatory fallback entry, so
//! [`CodeGenerator::generate`] never fails. Classes and inline values come
//! from [`tailor_core::resolve_visual_attributes`], the same derivation the
//! preview renderer uses.

pub mod error;
pub mod export;
pub mod generators;
pub mod inspect;
pub mod options;
pub mod registry;

pub use error::{CodegenError, Result};
pub use generators::{CodeGenerator, GeneratedCode, TemplateEngine};
pub use options::{CodegenOptions, Language};
pub use registry::{KindTemplate, SkeletonRegistry, UiImport};
