//! Registry mapping component kinds to their node builders.

use indexmap::IndexMap;
use tailor_core::ComponentKind;

use crate::builders::{self, BuildFn};

/// A registry of builders with a mandatory fallback.
#[derive(Clone)]
pub struct BuilderRegistry {
    builders: IndexMap<ComponentKind, BuildFn>,
    fallback: BuildFn,
}

impl BuilderRegistry {
    /// Create a registry holding only the fallback.
    pub fn new(fallback: BuildFn) -> Self {
        Self {
            builders: IndexMap::new(),
            fallback,
        }
    }

    /// Builders for the whole catalog.
    pub fn standard() -> Self {
        let mut registry = Self::new(builders::generic);
        registry.register(ComponentKind::Button, builders::button);
        registry.register(ComponentKind::Card, builders::card);
        registry.register(ComponentKind::Badge, builders::badge);
        registry.register(ComponentKind::Input, builders::input);
        registry.register(ComponentKind::Avatar, builders::avatar);
        registry.register(ComponentKind::Progress, builders::progress);
        registry.register(ComponentKind::Toggle, builders::toggle);
        registry.register(ComponentKind::Alert, builders::alert);
        registry.register(ComponentKind::Skeleton, builders::skeleton);
        registry
    }

    /// Register a builder. Registering `Generic` replaces the fallback.
    pub fn register(&mut self, kind: ComponentKind, build: BuildFn) {
        if kind.is_generic() {
            self.fallback = build;
        } else {
            self.builders.insert(kind, build);
        }
    }

    pub fn get(&self, kind: ComponentKind) -> Option<BuildFn> {
        self.builders.get(&kind).copied()
    }

    pub fn fallback(&self) -> BuildFn {
        self.fallback
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.builders.contains_key(&kind)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.builders.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("kinds", &self.builders.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
