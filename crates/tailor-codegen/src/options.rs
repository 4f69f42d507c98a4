//! Generation options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source language of the emitted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    TypeScript,
    JavaScript,
}

impl Language {
    /// File extension of a component module.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "tsx",
            Self::JavaScript => "jsx",
        }
    }

    /// Parse `"typescript"`, `"ts"`, `"tsx"` and the JavaScript equivalents.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ts" | "tsx" => Some(Self::TypeScript),
            "javascript" | "js" | "jsx" => Some(Self::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeScript => write!(f, "typescript"),
            Self::JavaScript => write!(f, "javascript"),
        }
    }
}

/// Options for component generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenOptions {
    /// Output language.
    pub language: Language,
    /// Prepended to the kind's display name to form the component name.
    pub name_prefix: String,
    /// Module path the UI primitives are imported from.
    pub import_root: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            language: Language::TypeScript,
            name_prefix: "Custom".to_string(),
            import_root: "@/components/ui".to_string(),
        }
    }
}

impl CodegenOptions {
    pub fn javascript() -> Self {
        Self {
            language: Language::JavaScript,
            ..Self::default()
        }
    }
}
