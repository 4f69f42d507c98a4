//! Preview rendering entry point.

use glam::UVec2;
use tailor_core::{resolve_visual_attributes, ComponentConfig, ComponentKind, Skeleton};

use crate::builders::BuildContext;
use crate::registry::BuilderRegistry;
use crate::tree::RenderTree;
use crate::viewport::{Frame, ViewportMode, DEFAULT_ZOOM, FLUID_SIZE};

/// Preview settings that do not come from the component configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PreviewOptions {
    /// Layout size of the fluid desktop frame.
    pub fluid_size: UVec2,
    /// Canvas zoom in percent.
    pub zoom: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            fluid_size: FLUID_SIZE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Maps a kind, a configuration and a viewport to a render tree.
///
/// Rendering is total and deterministic: unknown kinds use the generic
/// builder, out-of-range values are clamped by the shared derivation.
#[derive(Debug, Clone, Default)]
pub struct PreviewRenderer {
    registry: BuilderRegistry,
    options: PreviewOptions,
}

impl PreviewRenderer {
    pub fn new(options: PreviewOptions) -> Self {
        Self::with_registry(options, BuilderRegistry::standard())
    }

    pub fn with_registry(options: PreviewOptions, registry: BuilderRegistry) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    pub fn set_zoom(&mut self, percent: i64) {
        self.options.zoom = Frame::default().with_zoom(percent).zoom_percent;
    }

    pub fn registry(&self) -> &BuilderRegistry {
        &self.registry
    }

    /// Frame for a viewport under the current options.
    pub fn frame(&self, viewport: ViewportMode) -> Frame {
        Frame::new(viewport)
            .with_fluid_size(self.options.fluid_size)
            .with_zoom(self.options.zoom as i64)
    }

    /// Render a component preview.
    pub fn render(&self, kind: ComponentKind, config: &ComponentConfig, viewport: ViewportMode) -> RenderTree {
        self.render_in(kind, config, self.frame(viewport))
    }

    /// Render into an explicit frame.
    pub fn render_in(&self, kind: ComponentKind, config: &ComponentConfig, frame: Frame) -> RenderTree {
        let (kind, build) = match self.registry.get(kind) {
            Some(build) => (kind, build),
            None => {
                if !kind.is_generic() {
                    tracing::debug!(%kind, "no preview builder registered, using fallback");
                }
                (ComponentKind::Generic, self.registry.fallback())
            }
        };
        let style = resolve_visual_attributes(config);
        let component = build(&BuildContext::new(Skeleton::for_kind(kind), &style));
        tracing::trace!(%kind, viewport = %frame.mode, zoom = frame.zoom_percent, "rendered preview");
        RenderTree {
            kind,
            frame,
            component,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders;

    #[test]
    fn test_render_uses_viewport_frame() {
        let renderer = PreviewRenderer::default();
        let tree = renderer.render(ComponentKind::Button, &ComponentConfig::default(), ViewportMode::Mobile);
        assert_eq!(tree.frame.size(), UVec2::new(375, 667));
        assert_eq!(tree.frame.zoom_percent, 100);
        assert_eq!(tree.kind, ComponentKind::Button);
    }

    #[test]
    fn test_zoom_option_is_snapped() {
        let mut renderer = PreviewRenderer::default();
        renderer.set_zoom(60);
        assert_eq!(renderer.options().zoom, 50);
        let tree = renderer.render(ComponentKind::Card, &ComponentConfig::default(), ViewportMode::Tablet);
        assert_eq!(tree.frame.zoom(), 0.5);
    }

    #[test]
    fn test_zoom_leaves_component_style_alone() {
        let config = ComponentConfig::default();
        let mut renderer = PreviewRenderer::default();
        let plain = renderer.render(ComponentKind::Badge, &config, ViewportMode::Desktop);
        renderer.set_zoom(200);
        let zoomed = renderer.render(ComponentKind::Badge, &config, ViewportMode::Desktop);
        assert_eq!(plain.component, zoomed.component);
        assert_ne!(plain.frame, zoomed.frame);
    }

    #[test]
    fn test_missing_builder_falls_back() {
        let renderer = PreviewRenderer::with_registry(
            PreviewOptions::default(),
            BuilderRegistry::new(builders::generic),
        );
        let tree = renderer.render(ComponentKind::Card, &ComponentConfig::default(), ViewportMode::Desktop);
        assert_eq!(tree.kind, ComponentKind::Generic);
        assert_eq!(tree.texts().collect::<Vec<_>>(), vec!["Custom Component"]);
    }
}
