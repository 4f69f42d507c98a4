use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use tailor_core::{ConfigField, FieldValue};
use tailor_store::{ConfigStore, EditCoalescer};

fn edit() -> impl Strategy<Value = (ConfigField, i64)> {
    (
        prop::sample::select(vec![
            ConfigField::FontSize,
            ConfigField::BorderWidth,
            ConfigField::BorderRadius,
            ConfigField::Opacity,
            ConfigField::Scale,
            ConfigField::Rotate,
        ]),
        -500i64..500,
    )
}

proptest! {
    #[test]
    fn store_always_holds_a_legal_config(edits in prop::collection::vec(edit(), 0..40)) {
        let mut store = ConfigStore::new();
        for (field, value) in edits {
            store.set(field, value).unwrap();
            prop_assert!(store.get().is_normalized());
        }
    }

    #[test]
    fn revision_counts_notifications(edits in prop::collection::vec(edit(), 0..40)) {
        let mut store = ConfigStore::new();
        let revisions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&revisions);
        store.subscribe(move |change, _| sink.borrow_mut().push(change.revision));
        for (field, value) in edits {
            store.set(field, value).unwrap();
        }
        let seen = revisions.borrow();
        prop_assert_eq!(seen.len() as u64, store.revision());
        prop_assert!(seen.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    #[test]
    fn coalesced_edits_match_direct_edits(edits in prop::collection::vec(edit(), 0..40)) {
        let mut direct = ConfigStore::new();
        let mut coalesced = ConfigStore::new();
        let mut coalescer = EditCoalescer::new();
        for (field, value) in &edits {
            direct.set(*field, FieldValue::Integer(*value)).unwrap();
            coalescer.push(*field, *value);
        }
        let report = coalescer.flush(&mut coalesced);
        prop_assert!(report.is_clean());
        prop_assert_eq!(direct.get(), coalesced.get());
    }
}
