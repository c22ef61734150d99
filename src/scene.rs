//! A mesh seen through a perspective camera, drawn onto a [`Canvas`].

use log::debug;

use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::math::point::Point;
use crate::math::vec2::Vec2;
use crate::mesh::Mesh;
use crate::projection::PerspectiveProjection;
use crate::render::BLANK;
use crate::terminal::Terminal;

/// Vertex marker for points at or above the world XY plane.
pub const UPPER_VERTEX: char = 'o';
/// Vertex marker for points below the world XY plane.
pub const LOWER_VERTEX: char = 'x';

/// What a [`Scene`] draws each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderMode {
    /// Edges only, shaded by overdraw.
    Wireframe,
    /// Edges with vertex markers on top.
    #[default]
    WireframeVertices,
    /// Vertex markers only.
    Vertices,
}

impl RenderMode {
    fn edges(self) -> bool {
        matches!(self, Self::Wireframe | Self::WireframeVertices)
    }

    fn vertices(self) -> bool {
        matches!(self, Self::WireframeVertices | Self::Vertices)
    }
}

pub struct Scene {
    mesh: Mesh,
    projector: PerspectiveProjection,
    render_mode: RenderMode,
}

impl Scene {
    pub fn new(mesh: Mesh, camera: Camera) -> Result<Self> {
        Ok(Self {
            mesh,
            projector: PerspectiveProjection::new(camera)?,
            render_mode: RenderMode::default(),
        })
    }

    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn projector(&self) -> &PerspectiveProjection {
        &self.projector
    }

    pub fn camera(&self) -> &Camera {
        self.projector.camera()
    }

    /// Moves the camera `angle` radians around the world Z axis. On error the
    /// previous camera stays in place.
    pub fn orbit(&mut self, angle: f32) -> Result<()> {
        let camera = self.projector.camera().orbited(angle);
        self.projector.update_camera(camera)
    }

    /// Projects every vertex and draws the mesh. Nothing is drawn when any
    /// vertex fails to project.
    pub fn draw<T: Terminal>(&self, canvas: &mut Canvas<T>) -> Result<()> {
        let projected = self
            .projector
            .project_multiple_world_points_with_z_world(self.mesh.vertices())?;
        let points: Vec<Point> = projected
            .iter()
            .map(|p| Vec2::new(p.x, p.y).to_point())
            .collect();

        if self.render_mode.edges() {
            for &(a, b) in self.mesh.edges() {
                canvas.draw_line(points[a], points[b], BLANK);
            }
        }
        if self.render_mode.vertices() {
            for (point, projected) in points.iter().zip(&projected) {
                let glyph = if projected.z >= 0.0 {
                    UPPER_VERTEX
                } else {
                    LOWER_VERTEX
                };
                canvas.draw_point(*point, glyph);
            }
        }

        debug!(
            "Drew {} vertices, {} edges",
            points.len(),
            self.mesh.edges().len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::math::vec3::Vec3;
    use crate::terminal::HeadlessTerminal;

    fn overhead_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 10.0), 10)
    }

    fn segment() -> Mesh {
        Mesh::new(vec![Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0)], [(0, 1)])
    }

    #[test]
    fn draws_edge_then_vertices() {
        let scene = Scene::new(segment(), overhead_camera()).unwrap();
        let mut canvas = Canvas::new(HeadlessTerminal::new(20, 10)).unwrap();
        scene.draw(&mut canvas).unwrap();

        let rows = canvas.framebuffer().rows();
        assert_eq!(&rows[5][10..13], "o.o");
    }

    #[test]
    fn wireframe_mode_skips_markers() {
        let scene = Scene::new(segment(), overhead_camera())
            .unwrap()
            .with_render_mode(RenderMode::Wireframe);
        let mut canvas = Canvas::new(HeadlessTerminal::new(20, 10)).unwrap();
        scene.draw(&mut canvas).unwrap();

        let rows = canvas.framebuffer().rows();
        assert_eq!(&rows[5][10..13], ".. ");
    }

    #[test]
    fn lower_vertices_use_their_own_marker() {
        let mesh = Mesh::new(vec![Vec3::new(0.0, 0.0, -1.0)], []);
        let scene = Scene::new(mesh, overhead_camera())
            .unwrap()
            .with_render_mode(RenderMode::Vertices);
        let mut canvas = Canvas::new(HeadlessTerminal::new(20, 10)).unwrap();
        scene.draw(&mut canvas).unwrap();

        assert_eq!(canvas.framebuffer().rows()[5].chars().nth(10), Some(LOWER_VERTEX));
    }

    #[test]
    fn vertex_at_camera_depth_zero_is_an_error() {
        let mesh = Mesh::new(vec![Vec3::new(0.0, 0.0, 10.0)], []);
        let scene = Scene::new(mesh, overhead_camera()).unwrap();
        let mut canvas = Canvas::new(HeadlessTerminal::new(20, 10)).unwrap();

        assert!(matches!(scene.draw(&mut canvas), Err(Error::ZeroDepth)));
        assert!(canvas.render().trim().is_empty());
    }

    #[test]
    fn vertex_grazing_the_camera_plane_is_clamped() {
        // Camera-space depth of about 1.2e-7 throws x far past i32::MAX.
        let mesh = Mesh::new(
            vec![Vec3::ZERO, Vec3::new(0.0, 50.0, 0.9999999)],
            [(0, 1)],
        );
        let camera = Camera::new(Vec3::new(0.0, 0.0, 1.0), 10);
        let scene = Scene::new(mesh, camera).unwrap();
        let image = scene
            .projector()
            .project_world_point(scene.mesh().vertices()[1])
            .unwrap();
        assert!(image.x > i32::MAX as f32);

        let mut canvas = Canvas::new(HeadlessTerminal::new(20, 10)).unwrap();
        scene.draw(&mut canvas).unwrap();

        let frame = canvas.render();
        assert_eq!(frame.chars().count(), 200);
        let rows = canvas.framebuffer().rows();
        assert_eq!(rows[5], format!("{}o{}", " ".repeat(10), ".".repeat(9)));
        assert!(rows.iter().enumerate().all(|(y, row)| y == 5 || row.trim().is_empty()));
    }

    #[test]
    fn orbit_keeps_distance() {
        let camera = Camera::new(Vec3::new(6.0, 2.0, 3.0), 60);
        let mut scene = Scene::new(Mesh::cube(1.0), camera).unwrap();
        let before = scene.camera().distance();
        scene.orbit(0.3).unwrap();
        approx::assert_relative_eq!(scene.camera().distance(), before, epsilon = 1e-4);
        assert_ne!(scene.camera().location, Vec3::new(6.0, 2.0, 3.0));
    }
}
