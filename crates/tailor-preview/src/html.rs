//! Static HTML rendition of a render tree.

use crate::tree::{ElementKind, RenderNode, RenderTree};

/// Serialize a preview to indented HTML, frame included.
pub fn to_html(tree: &RenderTree) -> String {
    let mut writer = HtmlWriter {
        html: String::new(),
        indent: 0,
    };

    let attrs = vec![
        format!("class=\"{}\"", escape(&tree.frame.classes().join(" "))),
        format!("style=\"{}\"", escape(&tree.frame.css())),
        format!("data-viewport=\"{}\"", tree.frame.mode),
    ];
    writer.write_indent();
    writer.html.push_str(&format!("<div {}>\n", attrs.join(" ")));
    writer.indent += 1;
    writer.write_node(&tree.component);
    writer.indent -= 1;
    writer.html.push_str("</div>\n");

    writer.html
}

struct HtmlWriter {
    html: String,
    indent: usize,
}

impl HtmlWriter {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.html.push_str("  ");
        }
    }

    fn write_node(&mut self, node: &RenderNode) {
        let tag = tag_name(node.element);
        let mut attrs = Vec::new();

        match node.element {
            ElementKind::Input => attrs.push("type=\"text\"".to_string()),
            ElementKind::Switch => {
                attrs.push("type=\"button\"".to_string());
                attrs.push("role=\"switch\"".to_string());
                attrs.push("aria-checked=\"false\"".to_string());
            }
            _ => {}
        }
        if !node.classes.is_empty() {
            attrs.push(format!("class=\"{}\"", escape(&node.class_name())));
        }
        if let Some(style) = &node.style {
            attrs.push(format!("style=\"{}\"", escape(&style.inline.to_css())));
        }
        if let Some(extent) = node.extent {
            attrs.push(format!("data-extent=\"{}\"", extent));
        }

        let open = if attrs.is_empty() {
            format!("<{}", tag)
        } else {
            format!("<{} {}", tag, attrs.join(" "))
        };

        self.write_indent();
        if node.element == ElementKind::Input {
            match &node.text {
                Some(text) => self
                    .html
                    .push_str(&format!("{} placeholder=\"{}\" />\n", open, escape(text))),
                None => self.html.push_str(&format!("{} />\n", open)),
            }
            return;
        }

        if node.children.is_empty() {
            let text = node.text.as_deref().map(escape).unwrap_or_default();
            self.html.push_str(&format!("{}>{}</{}>\n", open, text, tag));
            return;
        }

        self.html.push_str(&format!("{}>\n", open));
        self.indent += 1;
        if let Some(text) = &node.text {
            self.write_indent();
            self.html.push_str(&escape(text));
            self.html.push('\n');
        }
        for child in &node.children {
            self.write_node(child);
        }
        self.indent -= 1;
        self.write_indent();
        self.html.push_str(&format!("</{}>\n", tag));
    }
}

fn tag_name(element: ElementKind) -> &'static str {
    match element {
        ElementKind::Box => "div",
        ElementKind::Button | ElementKind::Switch => "button",
        ElementKind::Input => "input",
        ElementKind::Heading => "h3",
        ElementKind::Paragraph => "p",
        ElementKind::Span => "span",
        ElementKind::Label => "label",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PreviewRenderer;
    use crate::viewport::ViewportMode;
    use tailor_core::{ComponentConfig, ComponentKind};

    fn html(kind: ComponentKind, viewport: ViewportMode) -> String {
        to_html(&PreviewRenderer::default().render(kind, &ComponentConfig::default(), viewport))
    }

    #[test]
    fn test_frame_wraps_component() {
        let html = html(ComponentKind::Button, ViewportMode::Mobile);
        assert!(html.starts_with(
            "<div class=\"w-[375px] h-[667px]\" style=\"width: 375px; height: 667px\" data-viewport=\"mobile\">\n"
        ));
        assert!(html.ends_with("</div>\n"));
        assert!(html.contains("  <button class=\"px-4 py-4 "));
        assert!(html.contains(">Click me</button>\n"));
    }

    #[test]
    fn test_inline_style_attribute() {
        let html = html(ComponentKind::Badge, ViewportMode::Desktop);
        assert!(html.contains(
            "style=\"font-size: 16px; padding: 16px 16px; margin: 0px 0px; border-radius: 8px; \
             border-width: 0px; opacity: 1; transform: scale(1) rotate(0deg)\""
        ));
    }

    #[test]
    fn test_input_is_void() {
        let html = html(ComponentKind::Input, ViewportMode::Desktop);
        assert!(html.contains("<input type=\"text\" class=\""));
        assert!(html.contains("placeholder=\"Enter text...\" />"));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_toggle_switch() {
        let html = html(ComponentKind::Toggle, ViewportMode::Tablet);
        assert!(html.contains("<div class=\"flex items-center space-x-2\">"));
        assert!(html.contains("role=\"switch\""));
        assert!(html.contains("<label>Toggle</label>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < \"b\" & c"), "a &lt; &quot;b&quot; &amp; c");
    }
}
