//! Registry mapping component kinds to their templates.

use indexmap::IndexMap;
use tailor_core::ComponentKind;

use crate::generators::react;

/// Named exports pulled from one UI module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiImport {
    /// Module under the import root, e.g. `"button"`.
    pub module: &'static str,
    pub names: &'static [&'static str],
}

/// The template set of one component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindTemplate {
    /// Name the template is registered under.
    pub name: &'static str,
    pub source: &'static str,
    pub imports: &'static [UiImport],
    /// Rendered once per styled part and passed to `source` as `parts`.
    pub part: Option<(&'static str, &'static str)>,
}

impl KindTemplate {
    const fn single(name: &'static str, source: &'static str, imports: &'static [UiImport]) -> Self {
        Self {
            name,
            source,
            imports,
            part: None,
        }
    }
}

/// A registry of kind templates with a mandatory fallback.
#[derive(Debug, Clone)]
pub struct SkeletonRegistry {
    templates: IndexMap<ComponentKind, KindTemplate>,
    fallback: KindTemplate,
}

impl SkeletonRegistry {
    /// Create a registry holding only the fallback.
    pub fn new(fallback: KindTemplate) -> Self {
        Self {
            templates: IndexMap::new(),
            fallback,
        }
    }

    /// The built-in React template set covering the whole catalog.
    pub fn react() -> Self {
        let mut registry = Self::new(KindTemplate::single("generic", react::GENERIC, &[]));
        registry.register(
            ComponentKind::Button,
            KindTemplate::single(
                "button",
                react::BUTTON,
                &[UiImport {
                    module: "button",
                    names: &["Button"],
                }],
            ),
        );
        registry.register(
            ComponentKind::Card,
            KindTemplate::single(
                "card",
                react::CARD,
                &[UiImport {
                    module: "card",
                    names: &["Card", "CardContent", "CardHeader", "CardTitle"],
                }],
            ),
        );
        registry.register(
            ComponentKind::Badge,
            KindTemplate::single(
                "badge",
                react::BADGE,
                &[UiImport {
                    module: "badge",
                    names: &["Badge"],
                }],
            ),
        );
        registry.register(
            ComponentKind::Input,
            KindTemplate::single(
                "input",
                react::INPUT,
                &[UiImport {
                    module: "input",
                    names: &["Input"],
                }],
            ),
        );
        registry.register(
            ComponentKind::Avatar,
            KindTemplate::single(
                "avatar",
                react::AVATAR,
                &[UiImport {
                    module: "avatar",
                    names: &["Avatar", "AvatarFallback"],
                }],
            ),
        );
        registry.register(
            ComponentKind::Progress,
            KindTemplate::single(
                "progress",
                react::PROGRESS,
                &[UiImport {
                    module: "progress",
                    names: &["Progress"],
                }],
            ),
        );
        registry.register(
            ComponentKind::Toggle,
            KindTemplate::single(
                "toggle",
                react::TOGGLE,
                &[
                    UiImport {
                        module: "switch",
                        names: &["Switch"],
                    },
                    UiImport {
                        module: "label",
                        names: &["Label"],
                    },
                ],
            ),
        );
        registry.register(
            ComponentKind::Alert,
            KindTemplate::single(
                "alert",
                react::ALERT,
                &[UiImport {
                    module: "alert",
                    names: &["Alert", "AlertDescription", "AlertTitle"],
                }],
            ),
        );
        registry.register(
            ComponentKind::Skeleton,
            KindTemplate {
                name: "skeleton",
                source: react::SKELETON,
                imports: &[UiImport {
                    module: "skeleton",
                    names: &["Skeleton"],
                }],
                part: Some(("skeleton_bar", react::SKELETON_BAR)),
            },
        );
        registry
    }

    /// Register a template, returning the one it replaces.
    pub fn register(&mut self, kind: ComponentKind, template: KindTemplate) -> Option<KindTemplate> {
        if kind.is_generic() {
            return Some(std::mem::replace(&mut self.fallback, template));
        }
        self.templates.insert(kind, template)
    }

    /// Get a registered template.
    pub fn get(&self, kind: ComponentKind) -> Option<&KindTemplate> {
        self.templates.get(&kind)
    }

    /// Template for a kind, or the fallback when none is registered.
    pub fn resolve(&self, kind: ComponentKind) -> &KindTemplate {
        match self.templates.get(&kind) {
            Some(template) => template,
            None => {
                if !kind.is_generic() {
                    tracing::debug!(%kind, "no template registered, using fallback");
                }
                &self.fallback
            }
        }
    }

    pub fn fallback(&self) -> &KindTemplate {
        &self.fallback
    }

    /// Check if a kind has its own template.
    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.templates.contains_key(&kind)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.templates.keys().copied()
    }

    /// Every template including the fallback.
    pub fn templates(&self) -> impl Iterator<Item = &KindTemplate> {
        self.templates.values().chain(std::iter::once(&self.fallback))
    }

    /// Number of registered kinds, excluding the fallback.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for SkeletonRegistry {
    fn default() -> Self {
        Self::react()
    }
}
