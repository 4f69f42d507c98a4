//! Generated code and previews must describe the same component.

use proptest::prelude::*;

use tailor_codegen::inspect::parse_inline_styles;
use tailor_core::{ComponentConfig, ComponentKind, ConfigField, Spacing};
use tailor_preview::ViewportMode;
use tailor_wasm::EditorSession;

fn arbitrary_config() -> impl Strategy<Value = ComponentConfig> {
    (
        (0u32..80, 0u32..80),
        (0u32..80, 0u32..80),
        0u32..100,
        0u32..20,
        0u32..80,
        0u32..120,
        30u32..230,
        -200i32..200,
    )
        .prop_map(
            |((px, py), (mx, my), font_size, border_width, border_radius, opacity, scale, rotate)| {
                ComponentConfig {
                    padding: Spacing::new(px, py),
                    margin: Spacing::new(mx, my),
                    font_size,
                    border_width,
                    border_radius,
                    opacity,
                    scale,
                    rotate,
                    ..ComponentConfig::default()
                }
            },
        )
}

fn any_kind() -> impl Strategy<Value = ComponentKind> {
    prop::sample::select(ComponentKind::CATALOG.to_vec())
}

#[test]
fn mobile_button_example() {
    let mut session = EditorSession::new().unwrap();
    session.select_kind(ComponentKind::Button);
    session.set_viewport(ViewportMode::Mobile);

    let code = session.code();
    assert!(code.contains("<Button"));
    assert!(code.contains("borderRadius: \"8px\","));
    assert!(code.contains("opacity: 1,"));
    assert!(code.contains("transform: \"scale(1) rotate(0deg)\","));

    let tree = session.preview();
    assert_eq!(tree.frame.classes(), vec!["w-[375px]", "h-[667px]"]);
    let node = tree.styled_nodes().next().unwrap();
    let style = node.style.as_ref().unwrap();
    assert_eq!(style.border_radius, 8.0);
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.transform(), glam::Affine2::IDENTITY);
}

#[test]
fn edits_reach_code_and_preview_alike() {
    let mut session = EditorSession::new().unwrap();
    session.set(ConfigField::Rotate, -45).unwrap();
    session.set(ConfigField::Opacity, 60).unwrap();
    session.set_key("padding", (24i64, 8i64)).unwrap();

    let code = session.code();
    assert!(code.contains("-rotate-45"));
    assert!(code.contains("padding: \"8px 24px\","));

    let tree = session.preview();
    let style = tree.styled_nodes().next().and_then(|node| node.style.as_ref()).unwrap();
    assert_eq!(style.rotate_deg, -45.0);
    assert_eq!(style.opacity, 0.6);
    assert_eq!(style.padding, glam::Vec2::new(24.0, 8.0));
    assert!(tree.styled_nodes().next().unwrap().has_class("-rotate-45"));
}

#[test]
fn out_of_range_json_loads_clamped() {
    let mut session = EditorSession::new().unwrap();
    session
        .load_json(r#"{"opacity":-5,"rotate":-999,"fontSize":999,"padding":[-4,70.6]}"#)
        .unwrap();

    let config = session.config();
    assert_eq!(config.opacity, 0);
    assert_eq!(config.rotate, -180);
    assert_eq!(config.font_size, 72);
    assert_eq!(config.padding, Spacing::new(0, 64));
    assert_eq!(config.background_color, ComponentConfig::default().background_color);

    let code = session.code();
    assert!(code.contains("opacity-0"));
    assert!(code.contains("-rotate-180"));
    assert!(code.contains("fontSize: \"72px\","));
}

#[test]
fn off_step_edits_snap_everywhere() {
    let mut session = EditorSession::new().unwrap();
    session.set(ConfigField::Rotate, 10).unwrap();
    session.set(ConfigField::Opacity, 37).unwrap();
    session.set(ConfigField::Scale, 103).unwrap();
    assert_eq!(session.config().rotate, 15);
    assert_eq!(session.config().opacity, 35);
    assert_eq!(session.config().scale, 105);

    let code = session.code();
    assert!(code.contains(" rotate-15 "));
    assert!(code.contains(" opacity-35 "));
    assert!(!code.contains("rotate-10"));

    let tree = session.preview();
    let style = tree.styled_nodes().next().and_then(|node| node.style.as_ref()).unwrap();
    assert_eq!(style.rotate_deg, 15.0);
    assert!((style.opacity - 0.35).abs() < 1e-6);
}

#[test]
fn download_matches_code() {
    let mut session = EditorSession::new().unwrap();
    for entry in session.catalog() {
        session.select_kind_id(entry.id);
        let download = session.download();
        assert_eq!(download.file_name, format!("{}.tsx", entry.name));
        assert_eq!(download.contents, session.code());
    }
}

#[test]
fn preview_serializes_for_the_browser() {
    let mut session = EditorSession::new().unwrap();
    session.select_kind(ComponentKind::Card);
    session.set_viewport(ViewportMode::Tablet);

    let json = serde_json::to_value(session.preview()).unwrap();
    assert_eq!(json["kind"], "card");
    assert_eq!(json["frame"]["mode"], "tablet");
    assert_eq!(json["frame"]["zoomPercent"], 100);
    assert_eq!(json["component"]["style"]["inline"]["borderRadius"], "8px");
    assert_eq!(json["component"]["style"]["inline"]["opacity"], 1.0);
    assert_eq!(json["component"]["style"]["width"], "fit-content");
    assert_eq!(
        json["component"]["children"][0]["children"][0]["text"],
        "Card Title"
    );

    let download = serde_json::to_value(session.download()).unwrap();
    assert_eq!(download["fileName"], "Card.tsx");
    assert_eq!(download["mimeType"], "text/plain");
}

#[test]
fn catalog_search_json() {
    let session = EditorSession::new().unwrap();
    insta::assert_json_snapshot!(session.search("a"), @r###"
    [
      {
        "id": "card",
        "name": "Card"
      },
      {
        "id": "badge",
        "name": "Badge"
      },
      {
        "id": "avatar",
        "name": "Avatar"
      },
      {
        "id": "alert",
        "name": "Alert"
      }
    ]
    "###);
}

proptest! {
    #[test]
    fn code_and_preview_share_style(kind in any_kind(), config in arbitrary_config()) {
        let mut session = EditorSession::new().unwrap();
        session.select_kind(kind);
        session.load(config);

        let code = session.code();
        let tree = session.preview();
        let blocks = parse_inline_styles(&code).unwrap();
        let styled: Vec<_> = tree.styled_nodes().collect();
        prop_assert_eq!(blocks.len(), styled.len());

        for (block, node) in blocks.iter().zip(styled) {
            let style = node.style.as_ref().unwrap();
            let padding = block["padding"].px_list();
            prop_assert_eq!(padding, vec![style.padding.y as f64, style.padding.x as f64]);
            let margin = block["margin"].px_list();
            prop_assert_eq!(margin, vec![style.margin.y as f64, style.margin.x as f64]);
            prop_assert_eq!(block["fontSize"].as_px(), Some(style.font_size as f64));
            prop_assert_eq!(block["borderRadius"].as_px(), Some(style.border_radius as f64));
            prop_assert_eq!(block["borderWidth"].as_px(), Some(style.border_width as f64));
            let opacity = block["opacity"].as_number().unwrap();
            prop_assert!((opacity - style.opacity as f64).abs() < 1e-6);
            prop_assert_eq!(
                block["transform"].as_text(),
                style.inline.get("transform").and_then(|value| value.as_text())
            );

            // Every class of the styled element appears in the generated source.
            for class in &node.classes {
                prop_assert!(code.contains(class.as_str()), "{} missing {}", kind, class);
            }
        }
    }
}
