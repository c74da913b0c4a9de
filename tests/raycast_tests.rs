//! Raycaster behaviour against small hand-built worlds.

use tui_voxel::core::{flat_world, normalize, raytrace, Extent, Raycaster, World};
use tui_voxel::types::{BlockKind, Pixel, Vec3};

fn world_with(extent: Extent, blocks: &[((usize, usize, usize), BlockKind)]) -> World {
    let mut world = World::with_extent(extent);
    for &((x, y, z), kind) in blocks {
        assert!(world.set(x, y, z, Some(kind)));
    }
    world
}

#[test]
fn ray_starting_outside_is_empty_without_looking() {
    // Every cell is solid: any lookup would resolve to a block.
    let world = flat_world(Extent::new(4, 4, 4), 4, BlockKind::Stone);
    let rc = Raycaster::default();

    let origins = [
        Vec3::new(-0.5, 1.0, 1.0),
        Vec3::new(1.0, 4.0, 1.0),
        Vec3::new(1.0, 1.0, 4.5),
        Vec3::new(100.0, -3.0, 2.0),
    ];
    for origin in origins {
        // Aimed straight into the solid volume.
        let dir = normalize(Vec3::new(2.0, 2.0, 2.0) - origin);
        let trace = rc.trace_detailed(origin, dir, &world);
        assert_eq!(trace.pixel, Pixel::Empty, "origin {origin:?}");
        assert_eq!(trace.steps, 0);
    }
}

#[test]
fn ray_through_empty_world_exits_within_diagonal_bound() {
    let extent = Extent::new(20, 20, 10);
    let world = World::with_extent(extent);
    let rc = Raycaster::default();
    let bound = (extent.x + extent.y + extent.z) as u32 + 1;

    let dirs = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 0.3, -0.2),
        Vec3::new(0.005, 1.0, -0.004),
        Vec3::new(-0.7, -0.7, 0.1),
    ];
    for dir in dirs {
        let dir = normalize(dir);
        let trace = rc.trace_detailed(Vec3::new(10.5, 10.5, 5.5), dir, &world);
        assert_eq!(trace.pixel, Pixel::Empty, "dir {dir:?}");
        assert!(trace.steps <= bound, "dir {dir:?} took {} steps", trace.steps);
        assert!(trace.steps > 0);
    }
}

#[test]
fn ray_from_cell_corner_in_empty_world_terminates() {
    let world = World::new();
    let rc = Raycaster::default();
    let trace = rc.trace_detailed(Vec3::new(5.0, 5.0, 5.0), normalize(Vec3::new(-1.0, -1.0, -1.0)), &world);
    assert_eq!(trace.pixel, Pixel::Empty);
    assert!(trace.steps <= 51);
}

#[test]
fn face_center_hit_returns_block_label() {
    let world = world_with(Extent::new(3, 3, 3), &[((1, 1, 1), BlockKind::Wood)]);

    // Along +x, through the middle of the block's -x face.
    let hit = raytrace(Vec3::new(0.5, 1.5, 1.5), Vec3::new(1.0, 0.0, 0.0), &world);
    assert_eq!(hit, Pixel::Block(BlockKind::Wood));

    // Down onto the middle of its top face.
    let hit = raytrace(Vec3::new(1.5, 1.5, 2.7), Vec3::new(0.0, 0.0, -1.0), &world);
    assert_eq!(hit, Pixel::Block(BlockKind::Wood));
}

#[test]
fn hit_near_two_edges_returns_border_marker() {
    let world = world_with(Extent::new(3, 3, 3), &[((1, 1, 1), BlockKind::Grass)]);

    // Enters through the x face 0.02 away from the y = 1 edge.
    let hit = raytrace(Vec3::new(0.5, 1.02, 1.5), Vec3::new(1.0, 0.0, 0.0), &world);
    assert_eq!(hit, Pixel::Border);

    // Near the z = 2 edge of the same face.
    let hit = raytrace(Vec3::new(0.5, 1.5, 1.97), Vec3::new(1.0, 0.0, 0.0), &world);
    assert_eq!(hit, Pixel::Border);

    // Just outside the threshold on y: back to the face label.
    let hit = raytrace(Vec3::new(0.5, 1.06, 1.5), Vec3::new(1.0, 0.0, 0.0), &world);
    assert_eq!(hit, Pixel::Block(BlockKind::Grass));
}

#[test]
fn ray_stops_at_first_block() {
    let world = world_with(
        Extent::new(6, 1, 1),
        &[((2, 0, 0), BlockKind::Dirt), ((4, 0, 0), BlockKind::Stone)],
    );
    let hit = raytrace(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0), &world);
    assert_eq!(hit, Pixel::Block(BlockKind::Dirt));

    let hit = raytrace(Vec3::new(5.5, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0), &world);
    assert_eq!(hit, Pixel::Block(BlockKind::Stone));
}

#[test]
fn ray_starting_inside_block_resolves_immediately() {
    let world = world_with(Extent::new(2, 2, 2), &[((0, 0, 0), BlockKind::Leaves)]);
    let trace = Raycaster::default().trace_detailed(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        &world,
    );
    assert_eq!(trace.pixel, Pixel::Block(BlockKind::Leaves));
    assert_eq!(trace.steps, 0);
}

#[test]
fn dead_zone_axis_does_not_stall_traversal() {
    // A wall of blocks one row over on y. The y component is inside the dead
    // zone, so only x boundaries bound the steps; the ray stays in row 0 and
    // leaves through +x.
    let mut world = World::with_extent(Extent::new(10, 2, 1));
    world.fill((0, 1, 0), (9, 1, 0), Some(BlockKind::Stone));

    let dir = normalize(Vec3::new(1.0, 0.004, 0.0));
    let hit = raytrace(Vec3::new(0.5, 0.5, 0.5), dir, &world);
    assert_eq!(hit, Pixel::Empty);
}

#[test]
fn single_block_seen_along_the_diagonal() {
    // A lone block in the corner, viewed from the opposite corner along the
    // main diagonal: the ray arrives at the block's far corner.
    let world = world_with(Extent::new(6, 6, 6), &[((0, 0, 0), BlockKind::Stone)]);
    let dir = normalize(Vec3::new(-1.0, -1.0, -1.0));

    let first = raytrace(Vec3::new(5.0, 5.0, 5.0), dir, &world);
    assert_eq!(first, Pixel::Border);
    for _ in 0..10 {
        assert_eq!(raytrace(Vec3::new(5.0, 5.0, 5.0), dir, &world), first);
    }

    // Off-diagonal rays are just as reproducible.
    let off = normalize(Vec3::new(-1.0, -1.0, -1.3));
    assert_eq!(
        raytrace(Vec3::new(5.3, 5.6, 5.5), off, &world),
        raytrace(Vec3::new(5.3, 5.6, 5.5), off, &world)
    );
}

#[test]
fn one_cell_world_viewed_from_outside_is_empty() {
    // The ray origin lies outside the 1x1x1 grid, so nothing is traced.
    let world = world_with(Extent::new(1, 1, 1), &[((0, 0, 0), BlockKind::Stone)]);
    let dir = normalize(Vec3::new(-1.0, -1.0, -1.0));
    assert_eq!(raytrace(Vec3::new(5.0, 5.0, 5.0), dir, &world), Pixel::Empty);
}
