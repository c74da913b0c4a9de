use tui_voxel::core::{default_world, flat_world, Extent, World};
use tui_voxel::types::{BlockKind, Vec3, SPAWN_POSITION, X_BLOCKS, Y_BLOCKS, Z_BLOCKS};

#[test]
fn default_extent_is_twenty_by_twenty_by_ten() {
    let world = World::new();
    assert_eq!(world.extent(), Extent::new(X_BLOCKS, Y_BLOCKS, Z_BLOCKS));
    assert_eq!(world.cells().len(), 20 * 20 * 10);
    assert_eq!(world.occupied_count(), 0);
}

#[test]
fn cell_at_point_truncates_and_rejects_outside() {
    let mut world = World::with_extent(Extent::new(3, 3, 3));
    world.set(2, 1, 0, Some(BlockKind::Leaves));

    assert_eq!(world.cell_at_point(Vec3::new(2.99, 1.5, 0.01)), Some(Some(BlockKind::Leaves)));
    assert_eq!(world.cell_at_point(Vec3::new(1.99, 1.5, 0.01)), Some(None));
    assert_eq!(world.cell_at_point(Vec3::new(3.0, 1.5, 0.5)), None);
    assert_eq!(world.cell_at_point(Vec3::new(2.5, 1.5, -0.01)), None);
}

#[test]
fn get_and_set_reject_out_of_range() {
    let mut world = World::with_extent(Extent::new(2, 2, 2));
    assert!(!world.set(2, 0, 0, Some(BlockKind::Stone)));
    assert_eq!(world.get(0, 0, 2), None);
    assert!(!world.is_occupied(5, 5, 5));

    assert!(world.set(1, 1, 1, Some(BlockKind::Stone)));
    assert!(world.is_occupied(1, 1, 1));
    world.clear();
    assert_eq!(world.occupied_count(), 0);
}

#[test]
fn flat_world_fills_only_the_bottom_layers() {
    let world = flat_world(Extent::new(5, 4, 6), 2, BlockKind::Dirt);
    assert_eq!(world.count_kind(BlockKind::Dirt), 5 * 4 * 2);
    assert!(world.is_occupied(4, 3, 1));
    assert!(!world.is_occupied(0, 0, 2));

    assert_eq!(flat_world(Extent::new(5, 4, 6), 0, BlockKind::Dirt).occupied_count(), 0);
}

#[test]
fn default_world_has_ground_and_structures() {
    let world = default_world();
    for kind in BlockKind::ALL {
        assert!(world.count_kind(kind) > 0, "no {kind:?} in default world");
    }

    // Air above the spawn column, ground right under the feet.
    let (x, y) = (SPAWN_POSITION.x as usize, SPAWN_POSITION.y as usize);
    for z in 4..Z_BLOCKS {
        assert_eq!(world.get(x, y, z), Some(None));
    }
    assert!(world.is_occupied(x, y, 3));
}
