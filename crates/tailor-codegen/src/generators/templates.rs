//! Template engine for code generation.

use convert_case::{Case, Casing};

use crate::error::{CodegenError, Result};
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;

/// Template engine using Handlebars.
///
/// Output is JSX, not HTML, so escaping is disabled and strict mode makes a
/// missing template variable an error instead of an empty string.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.has_template(name) {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    fn register_helpers(handlebars: &mut Handlebars) {
        handlebars.register_helper("pascal_case", Box::new(pascal_case_helper));
        handlebars.register_helper("indent", Box::new(indent_helper));
    }
}

// {{pascal_case "custom button"}} -> CustomButton
handlebars_helper!(pascal_case_helper: |name: str| to_pascal_case(name));

// {{indent block 6}} prefixes every non-blank line of `block`.
handlebars_helper!(indent_helper: |block: str, spaces: u64| indent(block, spaces as usize));

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn to_pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

pub(crate) fn to_kebab_case(s: &str) -> String {
    s.to_case(Case::Kebab)
}

pub(crate) fn indent(content: &str, spaces: usize) -> String {
    let prefix = " ".repeat(spaces);
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
