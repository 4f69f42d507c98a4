use tailor_core::{fraction_class, ComponentKind, PartRole, Skeleton};

#[test]
fn fraction_classes() {
    assert_eq!(fraction_class(100), "w-full");
    assert_eq!(fraction_class(75), "w-3/4");
    assert_eq!(fraction_class(25), "w-1/4");
    assert_eq!(fraction_class(60), "w-[60%]");
}

#[test]
fn bars_size_by_their_extent() {
    let skeleton = Skeleton::for_kind(ComponentKind::Skeleton);
    let bars: Vec<_> = skeleton.parts_with(PartRole::Bar).collect();
    assert_eq!(bars.len(), 2);
    for bar in bars {
        let extent = bar.extent.unwrap();
        assert_eq!(bar.classes(), vec!["h-4".to_string(), fraction_class(extent)]);
    }
}

#[test]
fn progress_indicator_has_an_extent() {
    let skeleton = Skeleton::for_kind(ComponentKind::Progress);
    let indicator = skeleton.parts_with(PartRole::Indicator).next().unwrap();
    assert_eq!(indicator.extent.map(fraction_class), Some("w-3/4".to_string()));
}
