//! WebAssembly bindings for the Tailor component editor.
//!
//! ## Example
//!
//! ```js
//! import { TailorEditor } from 'tailor-wasm';
//!
//! const editor = new TailorEditor();
//! editor.selectKind('button');
//! editor.setField('borderRadius', 12);
//! editor.setViewport('mobile');
//!
//! const code = editor.code();
//! const tree = editor.preview();
//! const { fileName, contents } = editor.download();
//! ```

pub mod error;
pub mod session;

pub use error::{Result, SessionError};
pub use session::{CatalogEntry, Download, EditorSession, DOWNLOAD_MIME_TYPE};

use serde::Serialize;
use tailor_core::{ComponentConfig, ConfigField, FieldValue};
use tailor_preview::ViewportMode;
use wasm_bindgen::prelude::*;

/// Outcome of flushing queued edits, as seen from JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FlushSummary {
    changed: Vec<String>,
    rejected: Vec<String>,
}

/// The editor interface for JavaScript.
#[wasm_bindgen]
pub struct TailorEditor {
    session: EditorSession,
}

#[wasm_bindgen]
impl TailorEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> std::result::Result<TailorEditor, JsError> {
        let session = EditorSession::new().map_err(to_js_error)?;
        Ok(Self { session })
    }

    /// Get the version of the editor bindings.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Apply one edit. `value` is a number, a `[x, y]` pair or a token string.
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, key: &str, value: JsValue) -> std::result::Result<bool, JsError> {
        let value = field_value(value)?;
        self.session.set_key(key, value).map_err(to_js_error)
    }

    /// Queue an edit from a continuous control; see `flush`.
    #[wasm_bindgen(js_name = queueField)]
    pub fn queue_field(&mut self, key: &str, value: JsValue) -> std::result::Result<(), JsError> {
        let field = key
            .parse::<ConfigField>()
            .map_err(|e| JsError::new(&e.to_string()))?;
        let value = field_value(value)?;
        self.session.queue(field, value);
        Ok(())
    }

    /// Commit queued edits. Returns `{ changed, rejected }` field names.
    #[wasm_bindgen]
    pub fn flush(&mut self) -> std::result::Result<JsValue, JsError> {
        let report = self.session.flush();
        let summary = FlushSummary {
            changed: report.changed.iter().map(ToString::to_string).collect(),
            rejected: report.rejected.iter().map(|(field, _)| field.to_string()).collect(),
        };
        to_js(&summary)
    }

    /// Restore the default configuration.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// The current configuration in its camelCase JSON shape.
    #[wasm_bindgen]
    pub fn config(&self) -> std::result::Result<JsValue, JsError> {
        to_js(self.session.config())
    }

    /// Replace the configuration.
    #[wasm_bindgen(js_name = loadConfig)]
    pub fn load_config(&mut self, config: JsValue) -> std::result::Result<(), JsError> {
        let config: ComponentConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
        self.session.load(config);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn revision(&self) -> f64 {
        self.session.revision() as f64
    }

    /// Select a component by id. Returns the id actually selected.
    #[wasm_bindgen(js_name = selectKind)]
    pub fn select_kind(&mut self, id: &str) -> String {
        self.session.select_kind_id(id).id().to_string()
    }

    /// Set the viewport mode. Returns the mode actually selected.
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, mode: &str) -> String {
        let mode = ViewportMode::parse(mode);
        self.session.set_viewport(mode);
        mode.id().to_string()
    }

    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, percent: i32) -> u32 {
        self.session.set_zoom(percent.into())
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) -> u32 {
        self.session.zoom_in()
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) -> u32 {
        self.session.zoom_out()
    }

    /// Source of the selected component.
    #[wasm_bindgen]
    pub fn code(&self) -> String {
        self.session.code()
    }

    /// Render tree of the selected component.
    #[wasm_bindgen]
    pub fn preview(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&self.session.preview())
    }

    /// Static markup of the preview, for a DOM surface.
    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> String {
        self.session.preview_html()
    }

    /// Draw commands of the preview, for a canvas surface.
    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&self.session.preview().display_list())
    }

    /// `{ fileName, mimeType, contents }` of the selected component.
    #[wasm_bindgen]
    pub fn download(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&self.session.download())
    }

    #[wasm_bindgen]
    pub fn catalog(&self) -> std::result::Result<JsValue, JsError> {
        to_js(&self.session.catalog())
    }

    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> std::result::Result<JsValue, JsError> {
        to_js(&self.session.search(query))
    }
}

fn field_value(value: JsValue) -> std::result::Result<FieldValue, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("Invalid field value: {}", e)))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> std::result::Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn to_js_error(err: SessionError) -> JsError {
    JsError::new(&err.to_string())
}
