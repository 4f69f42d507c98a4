//! An editing session: one store, one generator, one renderer.
//!
//! The session is the native core of the browser bindings. Everything the
//! property panel, preview pane and code panel need goes through it, so it
//! can be exercised without a browser.

use serde::Serialize;
use tailor_codegen::{export, CodeGenerator, CodegenOptions, GeneratedCode};
use tailor_core::{ComponentConfig, ComponentKind, ConfigField, FieldValue};
use tailor_preview::{to_html, PreviewOptions, PreviewRenderer, RenderTree, ViewportMode};
use tailor_store::{ConfigChange, ConfigStore, EditCoalescer, FlushReport, SubscriptionId};

use crate::error::Result;

/// MIME type of downloaded component files.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// One selectable entry of the component picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

impl From<ComponentKind> for CatalogEntry {
    fn from(kind: ComponentKind) -> Self {
        Self {
            id: kind.id(),
            name: kind.display_name(),
        }
    }
}

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// The state behind one editor page.
pub struct EditorSession {
    store: ConfigStore,
    edits: EditCoalescer,
    generator: CodeGenerator<'static>,
    renderer: PreviewRenderer,
    kind: ComponentKind,
    viewport: ViewportMode,
}

impl EditorSession {
    /// A session on the default configuration, editing a button on desktop.
    pub fn new() -> Result<Self> {
        Self::with_options(CodegenOptions::default(), PreviewOptions::default())
    }

    pub fn with_options(codegen: CodegenOptions, preview: PreviewOptions) -> Result<Self> {
        Ok(Self {
            store: ConfigStore::new(),
            edits: EditCoalescer::new(),
            generator: CodeGenerator::new(codegen)?,
            renderer: PreviewRenderer::new(preview),
            kind: ComponentKind::Button,
            viewport: ViewportMode::Desktop,
        })
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn viewport(&self) -> ViewportMode {
        self.viewport
    }

    /// Canvas zoom in percent.
    pub fn zoom(&self) -> u32 {
        self.renderer.options().zoom
    }

    /// Committed configuration. Queued edits are not visible until flushed.
    pub fn config(&self) -> &ComponentConfig {
        self.store.config()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Apply one edit immediately. Queued edits are flushed first so that
    /// edits land in the order they were made.
    pub fn set(&mut self, field: ConfigField, value: impl Into<FieldValue>) -> Result<bool> {
        self.flush();
        Ok(self.store.set(field, value)?)
    }

    /// Like [`set`](Self::set) with the field given by its editor key.
    pub fn set_key(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<bool> {
        let field = key.parse::<ConfigField>()?;
        self.set(field, value)
    }

    /// Queue an edit from a continuous control such as a slider drag.
    pub fn queue(&mut self, field: ConfigField, value: impl Into<FieldValue>) {
        self.edits.push(field, value);
    }

    pub fn has_pending(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Commit queued edits, keeping the last value per field.
    pub fn flush(&mut self) -> FlushReport {
        self.edits.flush(&mut self.store)
    }

    /// Discard queued edits and restore the default configuration.
    pub fn reset(&mut self) {
        self.edits.clear();
        self.store.reset();
    }

    /// Replace the whole configuration.
    pub fn load(&mut self, config: ComponentConfig) {
        self.edits.clear();
        self.store.replace(config);
    }

    /// Replace the configuration from its camelCase JSON form. Unknown
    /// tokens fall back to the field default.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let config: ComponentConfig = serde_json::from_str(json)?;
        self.load(config);
        Ok(())
    }

    pub fn config_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self.store.config())?)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ConfigChange, &ComponentConfig) + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Select the component being edited. The configuration is kept.
    pub fn select_kind(&mut self, kind: ComponentKind) {
        if kind != self.kind {
            tracing::debug!(from = %self.kind, to = %kind, "component selected");
            self.kind = kind;
        }
    }

    /// Select by picker id; unknown ids select the generic component.
    pub fn select_kind_id(&mut self, id: &str) -> ComponentKind {
        self.select_kind(ComponentKind::parse(id));
        self.kind
    }

    pub fn set_viewport(&mut self, viewport: ViewportMode) {
        self.viewport = viewport;
    }

    /// Set the canvas zoom, returning the stored (clamped, stepped) value.
    pub fn set_zoom(&mut self, percent: i64) -> u32 {
        self.renderer.set_zoom(percent);
        self.zoom()
    }

    pub fn zoom_in(&mut self) -> u32 {
        let zoom = self.renderer.frame(self.viewport).zoom_in().zoom_percent;
        self.set_zoom(zoom as i64)
    }

    pub fn zoom_out(&mut self) -> u32 {
        let zoom = self.renderer.frame(self.viewport).zoom_out().zoom_percent;
        self.set_zoom(zoom as i64)
    }

    /// Source of the selected component.
    pub fn code(&self) -> String {
        self.generator.generate(self.kind, self.store.config())
    }

    pub fn generated(&self) -> Result<GeneratedCode> {
        Ok(self.generator.generate_code(self.kind, self.store.config())?)
    }

    /// Preview of the selected component in the current viewport.
    pub fn preview(&self) -> RenderTree {
        self.renderer.render(self.kind, self.store.config(), self.viewport)
    }

    pub fn preview_html(&self) -> String {
        to_html(&self.preview())
    }

    /// The selected component as a downloadable file.
    pub fn download(&self) -> Download {
        match self.generated() {
            Ok(code) => Download {
                file_name: code.file_name,
                mime_type: DOWNLOAD_MIME_TYPE,
                contents: code.source,
            },
            Err(_) => Download {
                // `code()` logs the failure and falls back to a plain component.
                file_name: export::file_name(ComponentKind::Generic, self.generator.options().language),
                mime_type: DOWNLOAD_MIME_TYPE,
                contents: self.code(),
            },
        }
    }

    /// Every selectable component.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        ComponentKind::CATALOG.iter().copied().map(CatalogEntry::from).collect()
    }

    /// Catalog entries whose id or name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let query = query.trim().to_lowercase();
        self.catalog()
            .into_iter()
            .filter(|entry| {
                query.is_empty()
                    || entry.id.contains(&query)
                    || entry.name.to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("kind", &self.kind)
            .field("viewport", &self.viewport)
            .field("zoom", &self.zoom())
            .field("revision", &self.revision())
            .field("pending", &self.edits.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailor_core::Spacing;

    fn session() -> EditorSession {
        EditorSession::new().unwrap()
    }

    #[test]
    fn test_defaults() {
        let session = session();
        assert_eq!(session.kind(), ComponentKind::Button);
        assert_eq!(session.viewport(), ViewportMode::Desktop);
        assert_eq!(session.zoom(), 100);
        assert_eq!(session.config(), &ComponentConfig::default());
    }

    #[test]
    fn test_set_updates_code_and_preview() {
        let mut session = session();
        assert!(session.set_key("borderRadius", 12).unwrap());
        assert!(session.code().contains("borderRadius: \"12px\","));
        let tree = session.preview();
        let style = tree.styled_nodes().next().and_then(|node| node.style.as_ref()).unwrap();
        assert_eq!(style.border_radius, 12.0);
    }

    #[test]
    fn test_rejected_edit_keeps_config() {
        let mut session = session();
        assert!(session.set_key("backgroundColor", "bg-chartreuse").is_err());
        assert!(session.set_key("letterSpacing", 2).is_err());
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_queued_edits_apply_in_order() {
        let mut session = session();
        for value in [20i64, 28, 36] {
            session.queue(ConfigField::Padding, (value, 8i64));
        }
        assert!(session.has_pending());
        assert_eq!(session.config().padding, Spacing::new(16, 16));

        session.set(ConfigField::Opacity, 50).unwrap();
        assert!(!session.has_pending());
        assert_eq!(session.config().padding, Spacing::new(36, 8));
        assert_eq!(session.config().opacity, 50);
        assert_eq!(session.revision(), 2);
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut session = session();
        session.set(ConfigField::Rotate, 45).unwrap();
        session.queue(ConfigField::Scale, 150);
        session.reset();
        assert!(!session.has_pending());
        assert_eq!(session.config(), &ComponentConfig::default());
    }

    #[test]
    fn test_select_kind_keeps_config() {
        let mut session = session();
        session.set(ConfigField::FontSize, 20).unwrap();
        assert_eq!(session.select_kind_id("card"), ComponentKind::Card);
        assert_eq!(session.config().font_size, 20);
        assert!(session.code().contains("export function CustomCard()"));
        assert_eq!(session.select_kind_id("carousel"), ComponentKind::Generic);
    }

    #[test]
    fn test_zoom_steps() {
        let mut session = session();
        assert_eq!(session.zoom_in(), 125);
        assert_eq!(session.set_zoom(10), 25);
        assert_eq!(session.zoom_out(), 25);
        assert_eq!(session.set_zoom(999), 200);
        assert_eq!(session.preview().frame.zoom_percent, 200);
    }

    #[test]
    fn test_download() {
        let mut session = session();
        session.select_kind(ComponentKind::Alert);
        let download = session.download();
        assert_eq!(download.file_name, "Alert.tsx");
        assert_eq!(download.mime_type, "text/plain");
        assert_eq!(download.contents, session.code());
    }

    #[test]
    fn test_search() {
        let session = session();
        assert_eq!(session.catalog().len(), ComponentKind::CATALOG.len());
        let ids: Vec<_> = session.search("TOG").iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec!["toggle"]);
        assert_eq!(session.search("  ").len(), ComponentKind::CATALOG.len());
        assert!(session.search("carousel").is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut session = session();
        session.set(ConfigField::BackgroundColor, "bg-pink-500").unwrap();
        let json = session.config_json().unwrap();
        session.reset();
        session.load_json(&json).unwrap();
        assert_eq!(session.config().background_color.to_string(), "bg-pink-500");
        assert!(session.load_json("{").is_err());
    }
}
