//! Component source generation.

pub(crate) mod react;
mod templates;

pub use templates::TemplateEngine;

use indexmap::IndexMap;
use serde::Serialize;
use tailor_core::{
    resolve_visual_attributes, ComponentConfig, ComponentKind, InlineStyle, PartRole, Skeleton,
    SkeletonPart, StyleTarget, StyleValue,
};

use crate::error::Result;
use crate::export;
use crate::options::{CodegenOptions, Language};
use crate::registry::{KindTemplate, SkeletonRegistry};
use templates::{indent, to_kebab_case, to_pascal_case};

/// A generated component module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    /// Kind the source was generated for; `Generic` after a fallback.
    pub kind: ComponentKind,
    /// Exported function name, e.g. `CustomButton`.
    pub component_name: String,
    /// Download file name, e.g. `Button.tsx`.
    pub file_name: String,
    pub language: Language,
    pub source: String,
}

#[derive(Serialize)]
struct TemplateData<'a> {
    name: &'a str,
    imports: String,
    class_name: String,
    style_attr: &'a str,
    wrapper_class: String,
    element_id: String,
    value_expr: String,
    texts: IndexMap<&'static str, &'static str>,
    parts: String,
}

#[derive(Serialize)]
struct PartData<'a> {
    class_name: String,
    style_attr: &'a str,
}

/// React component generator.
///
/// Templates are registered once at construction; generation itself is a
/// pure function of the kind and the configuration.
pub struct CodeGenerator<'a> {
    engine: TemplateEngine<'a>,
    registry: SkeletonRegistry,
    options: CodegenOptions,
}

impl<'a> CodeGenerator<'a> {
    /// Create a generator with the built-in React templates.
    pub fn new(options: CodegenOptions) -> Result<Self> {
        Self::with_registry(options, SkeletonRegistry::react())
    }

    /// Create a generator over a custom template registry.
    pub fn with_registry(options: CodegenOptions, registry: SkeletonRegistry) -> Result<Self> {
        let mut engine = TemplateEngine::new();
        for template in registry.templates() {
            engine.register_template(template.name, template.source)?;
            if let Some((name, source)) = template.part {
                engine.register_template(name, source)?;
            }
        }
        Ok(Self {
            engine,
            registry,
            options,
        })
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    pub fn registry(&self) -> &SkeletonRegistry {
        &self.registry
    }

    /// Generate source text for a kind. Never fails and never returns an
    /// empty string.
    pub fn generate(&self, kind: ComponentKind, config: &ComponentConfig) -> String {
        match self.generate_code(kind, config) {
            Ok(code) => code.source,
            Err(err) => {
                tracing::error!(%kind, %err, "template rendering failed, emitting plain component");
                self.plain_component(config)
            }
        }
    }

    /// Generate a component module with its name and file name.
    pub fn generate_code(&self, kind: ComponentKind, config: &ComponentConfig) -> Result<GeneratedCode> {
        // Kinds without a template use the generic skeleton, so the fallback
        // template always finds the data it expects.
        let kind = if self.registry.contains(kind) {
            kind
        } else {
            ComponentKind::Generic
        };
        let template = self.registry.resolve(kind);
        let skeleton = Skeleton::for_kind(kind);
        let style = resolve_visual_attributes(config);
        let style_attr = style_attribute(&style.inline_style());

        let styled_parts: Vec<&SkeletonPart> = match skeleton.styled {
            StyleTarget::Root => Vec::new(),
            StyleTarget::Parts(role) => skeleton.parts_with(role).collect(),
        };
        let parts = match template.part {
            Some((part_template, _)) => styled_parts
                .iter()
                .map(|part| {
                    let data = PartData {
                        class_name: skeleton.styled_classes(&style, Some(part)).join(" "),
                        style_attr: &style_attr,
                    };
                    self.engine.render(part_template, &data)
                })
                .collect::<Result<Vec<_>>>()?
                .join("\n"),
            None => String::new(),
        };

        let name = self.display_name(kind);
        let data = TemplateData {
            name: &name,
            imports: self.imports(template),
            class_name: skeleton
                .styled_classes(&style, styled_parts.first().copied())
                .join(" "),
            style_attr: &style_attr,
            wrapper_class: skeleton.wrapper_classes.join(" "),
            element_id: to_kebab_case(&name),
            value_expr: indicator_value(skeleton),
            texts: skeleton
                .parts
                .iter()
                .filter_map(|part| part.text.map(|text| (part.role.key(), text)))
                .collect(),
            parts,
        };

        let source = self.engine.render(template.name, &data)?;
        tracing::trace!(%kind, template = template.name, bytes = source.len(), "generated component");

        Ok(GeneratedCode {
            kind,
            component_name: to_pascal_case(&name),
            file_name: export::file_name(kind, self.options.language),
            language: self.options.language,
            source,
        })
    }

    /// Exported function name for a kind.
    pub fn component_name(&self, kind: ComponentKind) -> String {
        to_pascal_case(&self.display_name(kind))
    }

    fn display_name(&self, kind: ComponentKind) -> String {
        format!("{} {}", self.options.name_prefix, kind.display_name())
    }

    fn imports(&self, template: &KindTemplate) -> String {
        let root = self.options.import_root.trim_end_matches('/');
        template
            .imports
            .iter()
            .map(|import| {
                format!(
                    "import {{ {} }} from \"{}/{}\"",
                    import.names.join(", "),
                    root,
                    import.module
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Template-free rendition of the generic skeleton.
    fn plain_component(&self, config: &ComponentConfig) -> String {
        let skeleton = Skeleton::for_kind(ComponentKind::Generic);
        let style = resolve_visual_attributes(config);
        let mut lines = vec![
            format!("export function {}() {{", self.component_name(ComponentKind::Generic)),
            "  return (".to_string(),
            "    <div".to_string(),
            format!("      className=\"{}\"", skeleton.styled_classes(&style, None).join(" ")),
            indent(&style_attribute(&style.inline_style()), 6),
            "    >".to_string(),
        ];
        if let Some(label) = skeleton.text_of(PartRole::Label) {
            lines.push(format!("      {}", label));
        }
        lines.extend(["    </div>", "  )", "}", ""].map(String::from));
        lines.join("\n")
    }
}

/// JSX `style={{ ... }}` attribute, one declaration per line.
fn style_attribute(style: &InlineStyle) -> String {
    let mut lines = Vec::with_capacity(style.len() + 2);
    lines.push("style={{".to_string());
    for (key, value) in style.entries() {
        lines.push(format!("  {}: {},", key, js_literal(value)));
    }
    lines.push("}}".to_string());
    lines.join("\n")
}

fn js_literal(value: &StyleValue) -> String {
    match value {
        StyleValue::Text(text) => format!("\"{}\"", text),
        StyleValue::Number(_) => value.css(),
    }
}

fn indicator_value(skeleton: &Skeleton) -> String {
    skeleton
        .parts_with(PartRole::Indicator)
        .find_map(|part| part.extent)
        .map(|extent| format!("{{{}}}", extent))
        .unwrap_or_default()
}
