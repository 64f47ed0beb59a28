use super::*;
use approx::assert_relative_eq;

fn right_angle_store() -> (SegmentStore, SegmentId, SegmentId) {
    // Zwei Strecken ab (0, 0): eine entlang +x, eine entlang +y
    let mut store = SegmentStore::new();
    let along_x = store.add(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
    let along_y = store.add(Vec2::new(0.0, 0.0), Vec2::new(0.0, 50.0));
    (store, along_x, along_y)
}

#[test]
fn add_caches_length_and_horizontal_angle() {
    let mut store = SegmentStore::new();

    let id = store.add(Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0));
    let segment = store.get(id).expect("Segment erwartet");

    assert_relative_eq!(segment.length, 50.0);
    assert_relative_eq!(segment.horizontal_angle, 53.13, epsilon = 0.01);
    assert!(segment.ratio_display.is_none());
}

#[test]
fn ids_are_stable_and_survive_removal() {
    let mut store = SegmentStore::new();
    let first = store.add(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    let second = store.add(Vec2::new(20.0, 0.0), Vec2::new(30.0, 0.0));
    let third = store.add(Vec2::new(40.0, 0.0), Vec2::new(50.0, 0.0));

    store.remove_by_id(second);

    assert!(store.get(second).is_none());
    assert_eq!(store.get(first).map(|s| s.id), Some(first));
    assert_eq!(store.get(third).map(|s| s.id), Some(third));
    // Reihenfolge bleibt Erstellungsreihenfolge
    let ids: Vec<SegmentId> = store.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first, third]);
}

#[test]
fn reference_gives_every_segment_a_ratio() {
    let (mut store, along_x, along_y) = right_angle_store();

    assert!(store.set_reference(Some(along_y)));

    // Referenz selbst zeigt 1.00, die doppelt so lange Strecke 2.00
    assert_eq!(
        store.get(along_y).unwrap().ratio_display.as_deref(),
        Some("1.00")
    );
    assert_eq!(
        store.get(along_x).unwrap().ratio_display.as_deref(),
        Some("2.00")
    );
}

#[test]
fn clearing_reference_removes_all_ratios() {
    let (mut store, along_x, along_y) = right_angle_store();
    store.set_reference(Some(along_x));

    assert!(store.set_reference(None));

    assert!(store.get(along_x).unwrap().ratio_display.is_none());
    assert!(store.get(along_y).unwrap().ratio_display.is_none());
}

#[test]
fn set_reference_rejects_unknown_id() {
    let (mut store, along_x, _) = right_angle_store();
    store.set_reference(Some(along_x));

    assert!(!store.set_reference(Some(999)));
    assert_eq!(store.reference_id(), Some(along_x));
}

#[test]
fn toggle_reference_switches_and_clears() {
    let (mut store, along_x, along_y) = right_angle_store();

    store.toggle_reference(along_x);
    assert_eq!(store.reference_id(), Some(along_x));

    store.toggle_reference(along_y);
    assert_eq!(store.reference_id(), Some(along_y));

    store.toggle_reference(along_y);
    assert_eq!(store.reference_id(), None);
}

#[test]
fn perpendicular_pair_has_90_degree_intersection_on_both_sides() {
    let (store, along_x, along_y) = right_angle_store();

    let a = store.get(along_x).unwrap();
    let b = store.get(along_y).unwrap();

    assert_eq!(a.intersection_angles.len(), 1);
    assert_eq!(b.intersection_angles.len(), 1);
    assert_eq!(a.intersection_angles[0].peer_id, along_y);
    assert_eq!(b.intersection_angles[0].peer_id, along_x);
    assert_relative_eq!(a.intersection_angles[0].degrees, 90.0, epsilon = 1e-3);
    assert_eq!(a.intersection_angles[0].vertex, Vec2::new(0.0, 0.0));
}

#[test]
fn disjoint_segments_have_no_intersections() {
    let mut store = SegmentStore::new();
    let a = store.add(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    let b = store.add(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0));

    assert!(store.get(a).unwrap().intersection_angles.is_empty());
    assert!(store.get(b).unwrap().intersection_angles.is_empty());
}

#[test]
fn intersections_update_when_a_segment_is_removed() {
    let (mut store, along_x, along_y) = right_angle_store();

    store.remove_by_id(along_y);

    assert!(store.get(along_x).unwrap().intersection_angles.is_empty());
}

#[test]
fn removing_the_reference_clears_it_and_the_ratios() {
    let (mut store, along_x, along_y) = right_angle_store();
    store.set_reference(Some(along_x));

    let removed = store.remove_by_id(along_x);

    assert!(removed.is_some());
    assert_eq!(store.reference_id(), None);
    assert!(store.get(along_y).unwrap().ratio_display.is_none());
}

#[test]
fn remove_last_pops_in_creation_order() {
    let (mut store, _, along_y) = right_angle_store();

    let removed = store.remove_last().expect("Segment erwartet");

    assert_eq!(removed.id, along_y);
    assert_eq!(store.len(), 1);
    assert!(store.remove_last().is_some());
    assert!(store.remove_last().is_none());
}

#[test]
fn recomputation_is_idempotent() {
    let (mut store, along_x, _) = right_angle_store();
    store.set_reference(Some(along_x));

    let snapshot: Vec<(Option<String>, Vec<IntersectionAngle>)> = store
        .iter()
        .map(|s| (s.ratio_display.clone(), s.intersection_angles.clone()))
        .collect();

    store.recompute_ratios();
    store.recompute_intersections();
    store.recompute_ratios();
    store.recompute_intersections();

    let after: Vec<(Option<String>, Vec<IntersectionAngle>)> = store
        .iter()
        .map(|s| (s.ratio_display.clone(), s.intersection_angles.clone()))
        .collect();

    assert_eq!(snapshot, after);
}

#[test]
fn clear_resets_to_fresh_state() {
    let (mut store, along_x, _) = right_angle_store();
    store.set_reference(Some(along_x));

    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.reference_id(), None);
    assert!(store.vertex_index().is_empty());
    // ID-Vergabe beginnt wieder bei 1 — wie eine frische Sitzung
    let id = store.add(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0));
    assert_eq!(id, 1);
}

#[test]
fn vertex_index_tracks_mutations() {
    let mut store = SegmentStore::new();
    assert!(store.vertex_index().is_empty());

    let id = store.add(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    assert_eq!(store.vertex_index().len(), 2);

    store.remove_by_id(id);
    assert!(store.vertex_index().is_empty());
}
