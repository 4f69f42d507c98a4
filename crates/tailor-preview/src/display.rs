//! Flattening a render tree into draw commands.
//!
//! Layout is deliberately approximate: text is measured from its character
//! count, children stack with a fixed gap and the component is centered at
//! the top of its frame. It is enough for a host without a DOM to draw a
//! faithful thumbnail.

use glam::{Affine2, Vec2};
use tailor_core::{BackgroundColor, Color, PartRole, Shadow, Size};

use crate::tree::{ElementKind, NodeRole, RenderNode, RenderTree};

const GAP: f32 = 8.0;
const FRAME_PADDING: f32 = 32.0;
const CHAR_WIDTH: f32 = 0.6;
const LINE_HEIGHT: f32 = 1.5;
const THUMB_SIZE: f32 = 16.0;
const TRACK_SIZE: Vec2 = Vec2::new(192.0, 8.0);
const BAR_HEIGHT: f32 = 16.0;
const DEFAULT_FONT_SIZE: f32 = 14.0;

/// An axis-aligned rectangle in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.origin() + self.size() * 0.5
    }

    /// Shrink by `amount` on each side, never below zero size.
    pub fn inset(&self, amount: Vec2) -> Self {
        let size = (self.size() - amount * 2.0).max(Vec2::ZERO);
        Self::from_origin_size(self.origin() + amount, size)
    }
}

/// A stroked outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// A filled, optionally rounded and stroked rectangle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RectCommand {
    pub bounds: Bounds,
    pub fill: Color,
    pub radius: f32,
    pub border: Option<Border>,
    pub shadow: Shadow,
}

/// A single run of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextCommand {
    /// Top-left of the line box.
    pub origin: Vec2,
    pub content: String,
    pub font_size: f32,
    pub weight: u16,
    pub color: Color,
}

/// Something to draw, in painter's order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DrawCommand {
    /// Begin the viewport frame; everything until `PopFrame` is scaled by
    /// `zoom` about the frame's top center.
    PushFrame { bounds: Bounds, zoom: f32 },
    PopFrame,
    PushTransform(Affine2),
    PopTransform,
    /// Opacity for subsequent commands.
    SetOpacity(f32),
    Rect(RectCommand),
    Text(TextCommand),
}

/// An ordered list of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectCommand> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl IntoIterator for DisplayList {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl RenderTree {
    /// Lay the tree out in its frame and flatten it to draw commands.
    pub fn display_list(&self) -> DisplayList {
        let frame_size = self.frame.size().as_vec2();
        let mut builder = DisplayBuilder {
            list: DisplayList::default(),
        };
        builder.list.push(DrawCommand::PushFrame {
            bounds: Bounds::from_origin_size(Vec2::ZERO, frame_size),
            zoom: self.frame.zoom(),
        });

        let available = (frame_size.x - FRAME_PADDING * 2.0).max(0.0);
        let text = TextStyle::default();
        let size = measure(&self.component, text, available);
        let origin = Vec2::new(((frame_size.x - size.x) * 0.5).max(0.0), FRAME_PADDING);
        builder.draw(&self.component, Bounds::from_origin_size(origin, size), text);

        builder.list.push(DrawCommand::PopFrame);
        builder.list
    }
}

/// Text attributes inherited down the tree.
#[derive(Debug, Clone, Copy)]
struct TextStyle {
    font_size: f32,
    weight: u16,
    color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            weight: 400,
            color: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

impl TextStyle {
    fn inherit(self, node: &RenderNode) -> Self {
        match &node.style {
            Some(style) => Self {
                font_size: style.font_size,
                weight: style.font_weight,
                color: style.foreground,
            },
            None => self,
        }
    }
}

struct DisplayBuilder {
    list: DisplayList,
}

impl DisplayBuilder {
    /// Draw `node` into `bounds`, which excludes its margin.
    fn draw(&mut self, node: &RenderNode, bounds: Bounds, text: TextStyle) {
        let text = text.inherit(node);
        let style = node.style.as_ref();

        if let Some(style) = style {
            if style.opacity <= 0.0 {
                return;
            }
            if style.opacity < 1.0 {
                self.list.push(DrawCommand::SetOpacity(style.opacity));
            }
            if style.has_transform() {
                self.list
                    .push(DrawCommand::PushTransform(style.transform_about(bounds.center())));
            }
            self.list.push(DrawCommand::Rect(RectCommand {
                bounds,
                fill: style.background,
                radius: style.border_radius,
                border: (style.border_width > 0.0).then(|| Border {
                    width: style.border_width,
                    color: style.foreground,
                }),
                shadow: style.shadow,
            }));
            if let Some(accent) = style.accent {
                self.list.push(DrawCommand::Rect(RectCommand {
                    bounds: Bounds::new(bounds.x, bounds.y, accent.width, bounds.height),
                    fill: accent.color,
                    radius: 0.0,
                    border: None,
                    shadow: Shadow::None,
                }));
            }
        } else if let Some(fill) = plain_fill(node) {
            self.list.push(DrawCommand::Rect(RectCommand {
                bounds,
                fill,
                radius: if node.role == NodeRole::Thumb { THUMB_SIZE * 0.5 } else { 0.0 },
                border: None,
                shadow: Shadow::None,
            }));
        }

        let padding = style.map(|style| style.padding).unwrap_or(Vec2::ZERO);
        let content = bounds.inset(padding);

        if let Some(content_text) = &node.text {
            let color = if node.element == ElementKind::Input {
                Color::rgba(text.color.r, text.color.g, text.color.b, text.color.a * 0.5)
            } else {
                text.color
            };
            self.list.push(DrawCommand::Text(TextCommand {
                origin: content.origin(),
                content: content_text.clone(),
                font_size: text.font_size,
                weight: text.weight,
                color,
            }));
        }

        let row = is_row(node);
        let mut cursor = content.origin();
        for child in &node.children {
            let margin = margin_of(child);
            let size = match (child.role, child.extent) {
                (NodeRole::Part(PartRole::Indicator), Some(extent)) => {
                    Vec2::new(content.width * extent as f32 / 100.0, content.height)
                }
                _ => measure(child, text, content.width),
            };
            let mut origin = cursor + margin;
            if row {
                origin.y = content.y + ((content.height - size.y) * 0.5).max(0.0);
            }
            self.draw(child, Bounds::from_origin_size(origin, size), text);
            if row {
                cursor.x += size.x + margin.x * 2.0 + GAP;
            } else {
                cursor.y += size.y + margin.y * 2.0 + GAP;
            }
        }

        if let Some(style) = style {
            if style.has_transform() {
                self.list.push(DrawCommand::PopTransform);
            }
            if style.opacity < 1.0 {
                self.list.push(DrawCommand::SetOpacity(1.0));
            }
        }
    }
}

/// Size of a node excluding its margin.
fn measure(node: &RenderNode, text: TextStyle, available: f32) -> Vec2 {
    let text = text.inherit(node);

    if node.role == NodeRole::Thumb {
        return Vec2::splat(THUMB_SIZE);
    }

    let padding = node.style.as_ref().map(|style| style.padding).unwrap_or(Vec2::ZERO);
    let inner = (available - padding.x * 2.0).max(0.0);
    let mut size = content_size(node, text, inner) + padding * 2.0;

    // Block wrappers span the available width.
    if node.role == NodeRole::Wrapper && !is_row(node) {
        size.x = size.x.max(available);
    }
    if let (NodeRole::Part(PartRole::Bar), Some(extent)) = (node.role, node.extent) {
        size.x = size.x.max(available * extent as f32 / 100.0);
        size.y = size.y.max(BAR_HEIGHT);
    }

    if let Some(style) = &node.style {
        size.x = resolve_extent(style.width, size.x, available);
        size.y = resolve_extent(style.height, size.y, size.y);
    }
    size
}

fn content_size(node: &RenderNode, text: TextStyle, available: f32) -> Vec2 {
    let mut size = node
        .text
        .as_deref()
        .map(|content| text_size(content, text.font_size))
        .unwrap_or(Vec2::ZERO);

    if node
        .children
        .iter()
        .any(|child| child.role == NodeRole::Part(PartRole::Indicator))
    {
        return size.max(TRACK_SIZE);
    }

    let row = is_row(node);
    let mut children = Vec2::ZERO;
    for (index, child) in node.children.iter().enumerate() {
        let child_size = measure(child, text, available) + margin_of(child) * 2.0;
        let gap = if index == 0 { 0.0 } else { GAP };
        if row {
            children.x += child_size.x + gap;
            children.y = children.y.max(child_size.y);
        } else {
            children.x = children.x.max(child_size.x);
            children.y += child_size.y + gap;
        }
    }

    size.x = size.x.max(children.x);
    size.y += children.y;
    size
}

fn resolve_extent(extent: Size, content: f32, available: f32) -> f32 {
    match extent {
        Size::Full => available.max(content),
        Size::Auto | Size::Fit => content,
        fixed => fixed.px().map(|px| px as f32).unwrap_or(content),
    }
}

fn text_size(content: &str, font_size: f32) -> Vec2 {
    Vec2::new(
        content.chars().count() as f32 * font_size * CHAR_WIDTH,
        font_size * LINE_HEIGHT,
    )
}

fn margin_of(node: &RenderNode) -> Vec2 {
    node.style.as_ref().map(|style| style.margin).unwrap_or(Vec2::ZERO)
}

fn is_row(node: &RenderNode) -> bool {
    (node.has_class("flex") && !node.has_class("flex-col")) || node.element == ElementKind::Switch
}

/// Fill of unstyled nodes that still paint something.
fn plain_fill(node: &RenderNode) -> Option<Color> {
    match node.role {
        NodeRole::Thumb => Some(Color::rgb(1.0, 1.0, 1.0)),
        NodeRole::Part(PartRole::Indicator) => Some(BackgroundColor::Primary.color()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PreviewRenderer;
    use crate::viewport::ViewportMode;
    use tailor_core::{ComponentConfig, ComponentKind};

    fn list(kind: ComponentKind, config: &ComponentConfig) -> DisplayList {
        PreviewRenderer::default()
            .render(kind, config, ViewportMode::Mobile)
            .display_list()
    }

    #[test]
    fn test_frame_brackets_commands() {
        let list = list(ComponentKind::Button, &ComponentConfig::default());
        assert!(matches!(
            list.commands().first(),
            Some(DrawCommand::PushFrame { zoom, .. }) if *zoom == 1.0
        ));
        assert_eq!(list.commands().last(), Some(&DrawCommand::PopFrame));
    }

    #[test]
    fn test_button_rect_and_label() {
        let list = list(ComponentKind::Button, &ComponentConfig::default());
        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].radius, 8.0);
        assert!(rects[0].border.is_none());
        // 8 chars at 16px plus 16px padding on each side.
        assert_eq!(rects[0].bounds.width, 8.0 * 16.0 * CHAR_WIDTH + 32.0);

        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].content, "Click me");
        assert_eq!(texts[0].origin, rects[0].bounds.origin() + Vec2::splat(16.0));
    }

    #[test]
    fn test_opacity_is_reset() {
        let config = ComponentConfig {
            opacity: 40,
            ..ComponentConfig::default()
        };
        let list = list(ComponentKind::Badge, &config);
        let opacities: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::SetOpacity(value) => Some(*value),
                _ => None,
            })
            .collect();
        assert_eq!(opacities, vec![0.4, 1.0]);
    }

    #[test]
    fn test_transparent_component_draws_nothing() {
        let config = ComponentConfig {
            opacity: 0,
            ..ComponentConfig::default()
        };
        let list = list(ComponentKind::Card, &config);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_transform_is_balanced() {
        let config = ComponentConfig {
            rotate: 45,
            ..ComponentConfig::default()
        };
        let list = list(ComponentKind::Alert, &config);
        let pushes = list
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::PushTransform(_)))
            .count();
        let pops = list
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::PopTransform))
            .count();
        assert_eq!((pushes, pops), (1, 1));
    }

    #[test]
    fn test_progress_fill_extent() {
        let list = list(ComponentKind::Progress, &ComponentConfig::default());
        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects.len(), 2);
        let track = rects[0].bounds.inset(Vec2::splat(16.0));
        assert_eq!(rects[1].bounds.width, track.width * 0.75);
        assert_eq!(rects[1].bounds.height, track.height);
    }

    #[test]
    fn test_alert_draws_accent() {
        let list = list(ComponentKind::Alert, &ComponentConfig::default());
        let accent = list.rects().nth(1).unwrap();
        assert_eq!(accent.bounds.width, 4.0);
        assert_eq!(accent.fill, BackgroundColor::Yellow.color());
    }

    #[test]
    fn test_skeleton_draws_one_rect_per_bar() {
        let list = list(ComponentKind::Skeleton, &ComponentConfig::default());
        let widths: Vec<_> = list.rects().map(|rect| rect.bounds.width).collect();
        // Mobile frame is 375px wide with 32px frame padding.
        assert_eq!(widths, vec![311.0 * 0.75, 311.0 * 0.5]);
    }
}
