//! Startup world.
//!
//! The world is static for the whole session; this is the layout every
//! session starts from.

use crate::types::BlockKind;
use crate::world::{Extent, World};

/// Height of the ground surface: layers `0..GROUND_LEVEL` are solid.
pub const GROUND_LEVEL: usize = 4;

/// Default world: stone and dirt underground, a grass surface, a tree and a
/// small wall to look at from the spawn point.
pub fn default_world() -> World {
    let mut world = World::with_extent(Extent::default());
    let Extent { x, y, .. } = world.extent();
    let (max_x, max_y) = (x - 1, y - 1);

    world.fill((0, 0, 0), (max_x, max_y, 1), Some(BlockKind::Stone));
    world.fill((0, 0, 2), (max_x, max_y, 2), Some(BlockKind::Dirt));
    world.fill((0, 0, 3), (max_x, max_y, GROUND_LEVEL - 1), Some(BlockKind::Grass));

    // Tree in front of the spawn point.
    world.fill((12, 4, 4), (12, 4, 6), Some(BlockKind::Wood));
    world.fill((11, 3, 7), (13, 5, 7), Some(BlockKind::Leaves));
    world.set(12, 4, 8, Some(BlockKind::Leaves));

    // Low stone wall off to the side.
    world.fill((9, 8, 4), (14, 8, 4), Some(BlockKind::Stone));
    world.fill((9, 8, 5), (9, 8, 5), Some(BlockKind::Stone));

    world
}

/// Flat world of `depth` solid layers of `kind` in the given extent.
pub fn flat_world(extent: Extent, depth: usize, kind: BlockKind) -> World {
    let mut world = World::with_extent(extent);
    if depth > 0 && extent.volume() > 0 {
        world.fill(
            (0, 0, 0),
            (extent.x - 1, extent.y - 1, depth - 1),
            Some(kind),
        );
    }
    world
}
