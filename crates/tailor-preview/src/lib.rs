//! Live preview of a customized component.
//!
//! [`PreviewRenderer::render`] maps a kind, a configuration and a viewport
//! mode to a [`RenderTree`]: a description of what to draw, mirroring the
//! structure the code generator emits. Drawing is left to the host; the tree
//! can be flattened to a [`DrawCommand`] list or serialized to static HTML.

pub mod builders;
pub mod display;
pub mod html;
pub mod registry;
pub mod renderer;
pub mod tree;
pub mod viewport;

pub use builders::{BuildContext, BuildFn};
pub use display::{Border, Bounds, DisplayList, DrawCommand, RectCommand, TextCommand};
pub use html::to_html;
pub use registry::BuilderRegistry;
pub use renderer::{PreviewOptions, PreviewRenderer};
pub use tree::{EdgeAccent, ElementKind, NodeRole, NodeStyle, RenderNode, RenderTree};
pub use viewport::{Frame, ViewportMode, ZOOM_RANGE};
