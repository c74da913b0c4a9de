use tui_voxel::core::{
    default_world, flat_world, Camera, DirectionField, Extent, FieldOfView, FrameRenderer, Picture,
    PoseIntegrator, RayParams,
};
use tui_voxel::types::{BlockKind, InputSnapshot, LookAction, Orientation, Pixel};

#[test]
fn flat_ground_fills_the_bottom_and_leaves_the_sky_empty() {
    let world = flat_world(Extent::new(20, 20, 10), 4, BlockKind::Grass);
    let camera = Camera::spawn();
    let mut renderer = FrameRenderer::new();

    let pic = renderer.render(&camera, &world, 40, 12);

    for y in 0..pic.height() {
        let looks_up = renderer.field().row(y as usize).iter().all(|d| d.z > 0.0);
        if !looks_up {
            continue;
        }
        for x in 0..pic.width() {
            assert_eq!(pic.get(x, y), Some(Pixel::Empty), "sky pixel ({x}, {y})");
        }
    }

    let bottom = pic.height() - 1;
    for x in 0..pic.width() {
        assert_ne!(pic.get(x, bottom), Some(Pixel::Empty), "ground pixel ({x}, {bottom})");
    }
    assert!(pic.count(|p| p == Pixel::Block(BlockKind::Grass)) > 0);
}

#[test]
fn looking_straight_up_sees_nothing() {
    let world = default_world();
    let camera = Camera::new(Camera::spawn().position, Orientation::new(1.2, 0.0));
    let pic = FrameRenderer::new().render(&camera, &world, 30, 10);
    assert_eq!(pic.count(|p| !p.is_empty()), 0);
}

#[test]
fn parallel_render_matches_sequential() {
    let world = default_world();
    let mut camera = Camera::spawn();
    let integrator = PoseIntegrator::default();
    let down = InputSnapshot::from_actions([LookAction::TiltDown, LookAction::YawRight]);

    let mut seq = FrameRenderer::new();
    let mut par = FrameRenderer::new().with_parallel(true);
    assert!(par.is_parallel());

    for _ in 0..4 {
        let a = seq.render(&camera, &world, 64, 20);
        let b = par.render(&camera, &world, 64, 20);
        assert_eq!(a, b);
        integrator.integrate(&mut camera, &world, &down);
    }
}

#[test]
fn rendering_is_deterministic() {
    let world = default_world();
    let camera = Camera::new(Camera::spawn().position, Orientation::new(-0.3, 0.2));
    let mut renderer = FrameRenderer::new();

    let first = renderer.render(&camera, &world, 50, 16);
    for _ in 0..3 {
        assert_eq!(renderer.render(&camera, &world, 50, 16), first);
    }
    assert!(first.count(|p| !p.is_empty()) > 0);
}

#[test]
fn render_into_follows_picture_resizes() {
    let world = default_world();
    let camera = Camera::spawn();
    let mut renderer = FrameRenderer::new();
    let mut pic = Picture::new(10, 4);

    renderer.render_into(&camera, &world, &mut pic);
    assert_eq!((renderer.field().rows(), renderer.field().cols()), (4, 10));

    pic.resize(24, 9);
    renderer.render_into(&camera, &world, &mut pic);
    assert_eq!((renderer.field().rows(), renderer.field().cols()), (9, 24));
    assert_eq!(pic, renderer.render(&camera, &world, 24, 9));
}

#[test]
fn tree_shows_up_in_front_of_spawn() {
    let world = default_world();
    // Face the tree at (12, 4) from the spawn column.
    let camera = Camera::new(Camera::spawn().position, Orientation::new(0.0, -0.07));
    let pic = FrameRenderer::new().render(&camera, &world, 80, 24);

    assert!(pic.count(|p| p == Pixel::Block(BlockKind::Wood)) > 0);
}

#[test]
fn custom_field_of_view_drives_the_direction_field() {
    let world = default_world();
    let camera = Camera::new(Camera::spawn().position, Orientation::new(-0.1, 0.4));
    let fov = FieldOfView::symmetric(0.3, 0.6);
    let mut renderer = FrameRenderer::with_config(fov, RayParams::default());
    assert_eq!(renderer.fov(), fov);
    assert_ne!(FrameRenderer::new().fov(), fov);

    renderer.render(&camera, &world, 12, 5);
    assert_eq!(*renderer.field(), DirectionField::for_view(camera.view, renderer.fov(), 5, 12));
}
