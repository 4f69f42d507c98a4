//! Per-kind construction of component nodes.
//!
//! Each builder mirrors its kind's skeleton: the same parts, texts and
//! styled elements the generated source has.

use tailor_core::{fraction_class, PartRole, ResolvedStyle, Skeleton, SkeletonPart};

use crate::tree::{ElementKind, NodeRole, NodeStyle, RenderNode};

/// Input shared by every builder.
pub struct BuildContext<'a> {
    pub skeleton: &'static Skeleton,
    pub style: &'a ResolvedStyle,
}

impl<'a> BuildContext<'a> {
    pub fn new(skeleton: &'static Skeleton, style: &'a ResolvedStyle) -> Self {
        Self { skeleton, style }
    }

    /// A node carrying the derived classes and style.
    pub fn styled(&self, element: ElementKind, role: NodeRole, part: Option<&SkeletonPart>) -> RenderNode {
        RenderNode::new(element, role)
            .with_classes(self.skeleton.styled_classes(self.style, part))
            .with_style(NodeStyle::from_resolved(self.style, self.skeleton.accent.as_ref()))
    }

    /// Layout-only wrapper for kinds that style their parts.
    pub fn wrapper(&self) -> RenderNode {
        RenderNode::new(ElementKind::Box, NodeRole::Wrapper)
            .with_classes(self.skeleton.wrapper_classes.iter().copied())
    }

    pub fn text(&self, role: PartRole) -> Option<&'static str> {
        self.skeleton.text_of(role)
    }

    fn part(&self, element: ElementKind, role: PartRole) -> RenderNode {
        RenderNode::new(element, NodeRole::Part(role)).with_text(self.text(role))
    }
}

/// Builds the component node of one kind.
pub type BuildFn = fn(&BuildContext<'_>) -> RenderNode;

pub fn button(cx: &BuildContext<'_>) -> RenderNode {
    cx.styled(ElementKind::Button, NodeRole::Root, None)
        .with_text(cx.text(PartRole::Label))
}

pub fn badge(cx: &BuildContext<'_>) -> RenderNode {
    cx.styled(ElementKind::Span, NodeRole::Root, None)
        .with_text(cx.text(PartRole::Label))
}

pub fn card(cx: &BuildContext<'_>) -> RenderNode {
    cx.styled(ElementKind::Box, NodeRole::Root, None)
        .with_child(
            RenderNode::new(ElementKind::Box, NodeRole::Header)
                .with_child(cx.part(ElementKind::Heading, PartRole::Title)),
        )
        .with_child(
            RenderNode::new(ElementKind::Box, NodeRole::Body)
                .with_child(cx.part(ElementKind::Paragraph, PartRole::Description)),
        )
}

pub fn input(cx: &BuildContext<'_>) -> RenderNode {
    // Placeholder text is shown muted, not as a value.
    cx.styled(ElementKind::Input, NodeRole::Root, None)
        .with_text(cx.text(PartRole::Placeholder))
}

pub fn avatar(cx: &BuildContext<'_>) -> RenderNode {
    cx.styled(ElementKind::Box, NodeRole::Root, None)
        .with_child(cx.part(ElementKind::Span, PartRole::Fallback))
}

pub fn progress(cx: &BuildContext<'_>) -> RenderNode {
    let extent = cx
        .skeleton
        .parts_with(PartRole::Indicator)
        .find_map(|part| part.extent);
    let mut indicator = RenderNode::new(ElementKind::Box, NodeRole::Part(PartRole::Indicator))
        .with_classes(["h-full", "bg-primary"])
        .with_extent(extent);
    if let Some(extent) = extent {
        indicator = indicator.with_classes([fraction_class(extent)]);
    }
    cx.styled(ElementKind::Box, NodeRole::Root, None)
        .with_child(indicator)
}

pub fn toggle(cx: &BuildContext<'_>) -> RenderNode {
    let mut root = cx.wrapper();
    for part in cx.skeleton.parts {
        let node = match part.role {
            PartRole::Track => cx
                .styled(ElementKind::Switch, NodeRole::Part(PartRole::Track), Some(part))
                .with_child(
                    RenderNode::new(ElementKind::Box, NodeRole::Thumb)
                        .with_classes(["h-4", "w-4", "rounded-full", "bg-background"]),
                ),
            role => cx.part(ElementKind::Label, role),
        };
        root = root.with_child(node);
    }
    root
}

pub fn alert(cx: &BuildContext<'_>) -> RenderNode {
    cx.styled(ElementKind::Box, NodeRole::Root, None)
        .with_child(cx.part(ElementKind::Heading, PartRole::Title))
        .with_child(cx.part(ElementKind::Paragraph, PartRole::Description))
}

pub fn skeleton(cx: &BuildContext<'_>) -> RenderNode {
    let bars = cx.skeleton.parts_with(PartRole::Bar).map(|part| {
        cx.styled(ElementKind::Box, NodeRole::Part(PartRole::Bar), Some(part))
            .with_extent(part.extent)
    });
    cx.wrapper().with_children(bars)
}

pub fn generic(cx: &BuildContext<'_>) -> RenderNode {
    cx.styled(ElementKind::Box, NodeRole::Root, None)
        .with_text(cx.text(PartRole::Label))
}
