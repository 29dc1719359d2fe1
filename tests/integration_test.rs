//! Integration tests for asset-picker
//!
//! These tests drive the controller the way a grid view and toolbar would,
//! against in-memory groups and temporary media directories.

use asset_picker::assets::{GroupLoader, LoadProgress};
use asset_picker::{
    Asset, AssetGroup, AssetId, AssetProvider, AssetSlot, AssetsController, ControllerError,
    ControllerOptions, MediaFilter, MediaKind, SelectionChange, SelectionError,
};
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

/// Helper function to build a complete group of photos
fn photo_group(ids: &[&str]) -> AssetGroup {
    AssetGroup::with_assets(
        "integration",
        ids.iter()
            .map(|id| Asset::new(*id, format!("{id}.jpg"), MediaKind::Photo))
            .collect(),
    )
}

/// Helper function to create a directory of empty media files
fn media_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

fn ids(assets: &[Asset]) -> Vec<&str> {
    assets.iter().map(|a| a.id.as_str()).collect()
}

fn tap_index(ctrl: &AssetsController<AssetGroup>, id: &str) -> usize {
    (0..ctrl.item_count())
        .find(|&i| {
            ctrl.provider()
                .asset_at(i)
                .and_then(|slot| slot.asset().map(|a| a.id.as_str() == id))
                .unwrap_or(false)
        })
        .unwrap()
}

#[test]
fn test_tap_toggle_fires_selection_changed_twice() {
    let mut ctrl = AssetsController::new(photo_group(&["X"]), ControllerOptions::default());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    ctrl.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    assert!(ctrl.on_item_tapped(0).unwrap());
    assert!(!ctrl.on_item_tapped(0).unwrap());

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].count, 1);
    assert_eq!(ids(&events[0].selected), vec!["X"]);
    assert_eq!(events[1].change, SelectionChange::Deselected(AssetId::from("X")));
    assert!(events[1].selected.is_empty());
}

#[test]
fn test_order_preservation_through_grid() {
    let mut ctrl = AssetsController::new(photo_group(&["A", "B", "C"]), ControllerOptions::default());

    for index in [0, 1, 2] {
        ctrl.on_item_tapped(index).unwrap();
    }
    assert_eq!(ids(&ctrl.selected_assets()), vec!["A", "B", "C"]);

    ctrl.on_item_tapped(1).unwrap();
    ctrl.on_item_tapped(1).unwrap();
    assert_eq!(ids(&ctrl.selected_assets()), vec!["A", "C", "B"]);
}

#[test]
fn test_capacity_enforcement() {
    let options = ControllerOptions {
        capacity: Some(2),
        ..ControllerOptions::default()
    };
    let mut ctrl = AssetsController::new(photo_group(&["A", "B", "C"]), options);

    ctrl.on_item_tapped(0).unwrap();
    ctrl.on_item_tapped(1).unwrap();
    let err = ctrl.on_item_tapped(2).unwrap_err();

    assert!(matches!(
        err,
        ControllerError::Selection(SelectionError::SelectionLimitExceeded { capacity: 2 })
    ));
    assert_eq!(ctrl.count(), 2);
    assert!(!ctrl.is_selected_at(2));
}

#[test]
fn test_deletion_reconciliation() {
    let mut ctrl = AssetsController::new(photo_group(&["A", "B"]), ControllerOptions::default());
    ctrl.on_item_tapped(0).unwrap();
    ctrl.on_item_tapped(1).unwrap();

    ctrl.on_toolbar_item_deleted(&AssetId::from("A"));

    assert_eq!(ctrl.count(), 1);
    assert!(!ctrl.store().is_selected(&AssetId::from("A")));
    assert_eq!(ids(&ctrl.selected_assets()), vec!["B"]);
}

#[test]
fn test_group_deletion_updates_grid_and_toolbar() {
    let mut ctrl = AssetsController::new(
        photo_group(&["A", "B", "C", "D", "E"]),
        ControllerOptions {
            capacity: None,
            columns: 2,
        },
    );
    ctrl.on_item_tapped(1).unwrap();
    ctrl.on_item_tapped(4).unwrap();
    assert_eq!(ctrl.row_count(), 3);

    ctrl.on_asset_removed_from_group(&AssetId::from("B"));

    assert_eq!(ctrl.row_count(), 2);
    assert_eq!(ids(&ctrl.selected_assets()), vec!["E"]);
    let last_row = ctrl.items_in_row(1);
    assert_eq!(last_row.len(), 2);
    assert!(last_row[1].selected);
}

#[test]
fn test_streaming_load_from_directory() {
    let dir = media_dir(&["01.jpg", "02.png", "03.mov", "04.jpg", "05.gif", "notes.txt"]);
    let mut loader = GroupLoader::spawn(dir.path(), MediaFilter::All, 2).unwrap();
    let mut ctrl = AssetsController::new(
        AssetGroup::new("streamed", MediaFilter::All),
        ControllerOptions::default(),
    );

    while ctrl.poll_loader(&mut loader).unwrap() == LoadProgress::Loading {
        // Pending cells never report as selected while pages arrive
        for index in 0..ctrl.item_count() {
            if matches!(ctrl.provider().asset_at(index), Some(AssetSlot::Pending)) {
                assert!(!ctrl.is_selected_at(index));
            }
        }
        std::thread::yield_now();
    }

    assert!(ctrl.provider().is_complete());
    assert_eq!(ctrl.item_count(), 5);
    assert_eq!(ctrl.row_count(), 2);

    let first = dir.path().join("03.mov").to_string_lossy().into_owned();
    let index = tap_index(&ctrl, &first);
    assert!(ctrl.on_item_tapped(index).unwrap());
    assert_eq!(ctrl.selected_assets()[0].kind, MediaKind::Video);
}

#[test]
fn test_filtered_directory_load() {
    let dir = media_dir(&["a.jpg", "b.mp4", "c.webm"]);
    let mut loader = GroupLoader::spawn(dir.path(), MediaFilter::Videos, 10).unwrap();
    let mut ctrl = AssetsController::new(
        AssetGroup::new("videos", MediaFilter::Videos),
        ControllerOptions::default(),
    );

    ctrl.wait_for_loader(&mut loader).unwrap();

    assert_eq!(ctrl.item_count(), 2);
    assert!(ctrl
        .provider()
        .assets()
        .iter()
        .all(|a| a.kind == MediaKind::Video));
}

/// Provider whose backing list is shared with the test, like an external
/// library that can change underneath the controller
struct SharedProvider(Rc<RefCell<Vec<Asset>>>);

impl AssetProvider for SharedProvider {
    fn group_asset_count(&self) -> usize {
        self.0.borrow().len()
    }

    fn asset_at(&self, index: usize) -> Option<AssetSlot> {
        self.0.borrow().get(index).cloned().map(AssetSlot::Ready)
    }
}

#[test]
fn test_stale_entries_skipped_then_reconciled() {
    let backing = Rc::new(RefCell::new(
        ["A", "B", "C"]
            .iter()
            .map(|id| Asset::new(*id, format!("{id}.jpg"), MediaKind::Photo))
            .collect::<Vec<_>>(),
    ));
    let mut ctrl = AssetsController::new(SharedProvider(Rc::clone(&backing)), ControllerOptions::default());
    for index in [0, 1, 2] {
        ctrl.on_item_tapped(index).unwrap();
    }

    backing.borrow_mut().remove(1);

    // Stale "B" is skipped but still counted until reconciled
    assert_eq!(ids(&ctrl.selected_assets()), vec!["A", "C"]);
    assert_eq!(ctrl.count(), 3);

    assert_eq!(ctrl.reconcile(), vec![AssetId::from("B")]);
    assert_eq!(ctrl.count(), 2);
    assert_eq!(ids(&ctrl.finish()), vec!["A", "C"]);
}
