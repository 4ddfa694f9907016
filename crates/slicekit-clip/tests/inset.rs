//! Wall inset generation against the real offset engine.

use slicekit_clip::{Clip, ClipperClip};
use slicekit_core::{LayerPart, Micrometer, MicroPoint, Path};

fn square_part(size: Micrometer) -> LayerPart {
    LayerPart::new(Path::from(vec![
        MicroPoint::new(0, 0),
        MicroPoint::new(size, 0),
        MicroPoint::new(size, size),
        MicroPoint::new(0, size),
    ]))
}

#[test]
fn first_wall_is_centered_half_a_line_width_inward() {
    let clip = ClipperClip::new();
    let insets = clip.inset(&square_part(20_000), 400, 1);

    assert_eq!(insets.len(), 1);
    assert_eq!(insets[0].len(), 1);
    assert_eq!(insets[0][0].len(), 1);

    let b = insets[0][0].paths()[0].bounds().unwrap();
    assert_eq!(b.min, MicroPoint::new(200, 200));
    assert_eq!(b.max, MicroPoint::new(19_800, 19_800));
}

#[test]
fn convex_part_insets_shrink_strictly() {
    let clip = ClipperClip::new();
    let insets = clip.inset(&square_part(20_000), 400, 4);

    assert!(!insets.is_empty());
    let wall = &insets[0];
    assert_eq!(wall.len(), 4);

    let mut last_area = i128::MAX;
    for level in wall {
        assert_eq!(level.len(), 1);
        let area = level.paths()[0].area();
        assert!(area < last_area, "each inset level must be smaller");
        last_area = area;
    }
}

#[test]
fn wall_levels_stay_dense_when_offsetting_stops_early() {
    let clip = ClipperClip::new();

    // 1.9 mm square with 0.4 mm walls: level 0 shrinks by 0.2 mm per
    // side, level 1 by 0.6 mm, level 2 would need 1.0 mm per side and
    // has no room. Two levels attempted out of three requested.
    let insets = clip.inset(&square_part(1_900), 400, 3);

    assert!(!insets.is_empty());
    for wall in &insets {
        assert_eq!(wall.len(), 2);
    }
}

#[test]
fn too_thin_part_gets_zero_walls() {
    let clip = ClipperClip::new();
    let insets = clip.inset(&square_part(300), 400, 3);
    assert!(insets.is_empty());
}

#[test]
fn hole_contour_gets_its_own_wall_index() {
    let clip = ClipperClip::new();

    let mut part = square_part(20_000);
    // Hole wound clockwise, as partitioning produces them.
    part.add_hole(Path::from(vec![
        MicroPoint::new(5_000, 5_000),
        MicroPoint::new(5_000, 15_000),
        MicroPoint::new(15_000, 15_000),
        MicroPoint::new(15_000, 5_000),
    ]));

    let insets = clip.inset(&part, 400, 1);
    assert_eq!(insets.len(), 2);
    for wall in &insets {
        assert_eq!(wall.len(), 1);
        assert_eq!(wall[0].len(), 1);
    }
}

#[test]
fn wall_length_invariant_holds_across_walls() {
    let clip = ClipperClip::new();

    let mut part = square_part(20_000);
    part.add_hole(Path::from(vec![
        MicroPoint::new(8_000, 2_000),
        MicroPoint::new(8_000, 18_000),
        MicroPoint::new(12_000, 18_000),
        MicroPoint::new(12_000, 2_000),
    ]));

    let insets = clip.inset(&part, 400, 5);
    assert!(!insets.is_empty());

    let levels = insets[0].len();
    assert!(levels <= 5);
    for wall in &insets {
        assert_eq!(wall.len(), levels, "all walls must record equal level counts");
    }
}

#[test]
fn inset_layer_covers_every_part_in_order() {
    let clip = ClipperClip::new();

    let mut layer = slicekit_core::PartitionedLayer::new();
    layer.push(square_part(20_000));
    layer.push(square_part(300));

    let all = clip.inset_layer(&layer, 400, 2);
    assert_eq!(all.len(), 2);
    assert!(!all[0].is_empty());
    assert!(all[1].is_empty());
}
