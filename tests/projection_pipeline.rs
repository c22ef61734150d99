//! World points through the camera onto a canvas.

use approx::assert_relative_eq;
use termgfx::math::point::Point;
use termgfx::prelude::*;

fn overhead(focal: i32) -> PerspectiveProjection {
    PerspectiveProjection::new(Camera::new(Vec3::new(0.0, 0.0, 10.0), focal)).unwrap()
}

#[test]
fn projected_points_land_on_expected_cells() {
    let projector = overhead(10);
    let mut canvas = Canvas::new(HeadlessTerminal::new(20, 10)).unwrap();

    let world = [Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0), Vec3::new(3.0, 0.0, 0.0)];
    let image = projector.project_multiple_world_points(&world).unwrap();
    assert_relative_eq!(image[1].x, 4.0);
    assert_relative_eq!(image[2].y, -1.5);

    let cells: Vec<usize> = image
        .iter()
        .filter_map(|p| canvas.draw_point(p.to_point(), 'o'))
        .collect();
    let screen: Vec<Point> = cells
        .iter()
        .map(|&i| canvas.framebuffer().decode(i))
        .collect();
    assert_eq!(
        screen,
        vec![Point::new(10, 5), Point::new(14, 5), Point::new(10, 6)]
    );
}

#[test]
fn orbiting_a_cube_keeps_it_on_screen() {
    let (width, height) = (60, 30);
    let mut scene = Scene::new(Mesh::cube(1.0), Camera::new(Vec3::new(6.0, 2.0, 3.0), 20)).unwrap();
    let mut canvas = Canvas::new(HeadlessTerminal::new(width, height)).unwrap();

    for _ in 0..12 {
        let image = scene
            .projector()
            .project_multiple_world_points(scene.mesh().vertices())
            .unwrap();
        for p in &image {
            assert!(p.x.abs() < (width / 2) as f32 && p.y.abs() < (height / 2) as f32);
        }

        canvas.clear();
        scene.draw(&mut canvas).unwrap();
        let frame = canvas.render();
        assert!(frame.contains('o'));
        assert!(frame.contains('.'));
        scene.orbit(30f32.to_radians()).unwrap();
    }
    assert_relative_eq!(
        scene.camera().location,
        Vec3::new(6.0, 2.0, 3.0),
        epsilon = 1e-3
    );
}

#[test]
fn bresenham_canvas_closes_segments() {
    let mut canvas = Canvas::new(HeadlessTerminal::new(20, 10))
        .unwrap()
        .with_rasterizer(RasterizerType::Bresenham);
    let touched = canvas.draw_line(Point::new(-3, 0), Point::new(3, 0), BLANK);
    assert_eq!(touched.len(), 7);
}
