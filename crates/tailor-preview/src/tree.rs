//! The render tree handed to a drawing surface.

use glam::{Affine2, Vec2};
use tailor_core::{
    Accent, Animation, Color, ComponentKind, InlineStyle, PartRole, Position, ResolvedStyle,
    Shadow, Size,
};

use crate::viewport::{Frame, ViewportMode};

/// What a node is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementKind {
    Box,
    Button,
    Input,
    Switch,
    Heading,
    Paragraph,
    Span,
    Label,
}

/// Structural role of a node within its component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeRole {
    /// The component root.
    Root,
    /// Layout-only container around styled parts.
    Wrapper,
    Header,
    Body,
    /// Toggle thumb inside the track.
    Thumb,
    Part(PartRole),
}

/// A fixed border on the left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EdgeAccent {
    pub width: f32,
    pub color: Color,
}

/// Resolved visual attributes of a styled node, in concrete units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NodeStyle {
    pub width: Size,
    pub height: Size,
    /// Horizontal/vertical padding in px.
    pub padding: Vec2,
    /// Horizontal/vertical margin in px.
    pub margin: Vec2,
    pub font_size: f32,
    pub font_weight: u16,
    pub background: Color,
    pub foreground: Color,
    pub border_width: f32,
    pub border_radius: f32,
    pub shadow: Shadow,
    pub hover_shadow: Option<Shadow>,
    /// Fraction in `0.0..=1.0`.
    pub opacity: f32,
    /// Scale factor, `1.0` unscaled.
    pub scale: f32,
    pub rotate_deg: f32,
    pub position: Position,
    pub animation: Option<Animation>,
    pub accent: Option<EdgeAccent>,
    /// Inline declarations, identical to the generated `style` block.
    pub inline: InlineStyle,
}

impl NodeStyle {
    pub fn from_resolved(style: &ResolvedStyle, accent: Option<&Accent>) -> Self {
        Self {
            width: style.width,
            height: style.height,
            padding: Vec2::new(style.padding.x as f32, style.padding.y as f32),
            margin: Vec2::new(style.margin.x as f32, style.margin.y as f32),
            font_size: style.font_size_px as f32,
            font_weight: style.font_weight.css_weight(),
            background: style.background_color(),
            foreground: style.foreground_color(),
            border_width: style.border_width_px as f32,
            border_radius: style.border_radius_px as f32,
            shadow: style.shadow,
            hover_shadow: style.hover_shadow,
            opacity: style.opacity() as f32,
            scale: style.scale() as f32,
            rotate_deg: style.rotate_deg as f32,
            position: style.position,
            animation: style.animation,
            accent: accent.map(|accent| EdgeAccent {
                width: accent.width_px as f32,
                color: accent.color.color(),
            }),
            inline: style.inline_style(),
        }
    }

    /// Scale then rotate about the origin.
    pub fn transform(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(
            Vec2::splat(self.scale),
            self.rotate_deg.to_radians(),
            Vec2::ZERO,
        )
    }

    /// The same transform applied about `pivot`, as CSS does about the
    /// element center.
    pub fn transform_about(&self, pivot: Vec2) -> Affine2 {
        Affine2::from_translation(pivot) * self.transform() * Affine2::from_translation(-pivot)
    }

    pub fn has_transform(&self) -> bool {
        self.scale != 1.0 || self.rotate_deg != 0.0
    }
}

/// One node of a render tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderNode {
    pub element: ElementKind,
    pub role: NodeRole,
    pub classes: Vec<String>,
    /// Present on nodes carrying the config-derived style.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub style: Option<NodeStyle>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
    /// Extent along the main axis in percent.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub extent: Option<u8>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(element: ElementKind, role: NodeRole) -> Self {
        Self {
            element,
            role,
            classes: Vec::new(),
            style: None,
            text: None,
            extent: None,
            children: Vec::new(),
        }
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_text(mut self, text: Option<&str>) -> Self {
        self.text = text.map(str::to_string);
        self
    }

    pub fn with_extent(mut self, extent: Option<u8>) -> Self {
        self.extent = extent;
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Depth-first, pre-order traversal including `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// First node with a role, in traversal order.
    pub fn find(&self, role: NodeRole) -> Option<&RenderNode> {
        self.walk().find(|node| node.role == role)
    }
}

/// Iterator returned by [`RenderNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a RenderNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a RenderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A component preview nested in its viewport frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderTree {
    /// Kind actually rendered; `Generic` after a fallback.
    pub kind: ComponentKind,
    pub frame: Frame,
    pub component: RenderNode,
}

impl RenderTree {
    pub fn viewport(&self) -> ViewportMode {
        self.frame.mode
    }

    /// Every node of the component, pre-order.
    pub fn nodes(&self) -> Walk<'_> {
        self.component.walk()
    }

    /// Nodes carrying the config-derived style.
    pub fn styled_nodes(&self) -> impl Iterator<Item = &RenderNode> {
        self.nodes().filter(|node| node.style.is_some())
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Every text the preview shows, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes().filter_map(|node| node.text.as_deref())
    }
}
