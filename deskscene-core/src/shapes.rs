//! Procedural geometry for the basic meshes every scene object is built from.
//!
//! All shapes are produced as indexed triangle lists with counter-clockwise front faces. Sizes
//! are chosen so that a transform's scale reads as the object's extent:
//!
//! - box: unit cube centred on the origin
//! - plane: 2x2 quad in the XZ plane facing +Y
//! - cylinder and tapered cylinder: standing on y = 0, one unit tall, radius 1 at the bottom
//! - cone: base of radius 1 on y = 0, apex at y = 1
//! - sphere: radius 1 centred on the origin

use glam::{Vec2, Vec3};

const SEGMENTS: u32 = 36;
const SPHERE_STACKS: u32 = 18;

/// One of the primitive shapes the scene can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicMesh {
    Box,
    Plane,
    Cylinder,
    TaperedCylinder,
    Cone,
    Sphere,
}

impl BasicMesh {
    pub const ALL: [BasicMesh; 6] = [
        BasicMesh::Box,
        BasicMesh::Plane,
        BasicMesh::Cylinder,
        BasicMesh::TaperedCylinder,
        BasicMesh::Cone,
        BasicMesh::Sphere,
    ];

    /// Generates the vertex and index data of the shape.
    pub fn build(self) -> ShapeData {
        match self {
            BasicMesh::Box => build_box(),
            BasicMesh::Plane => build_plane(),
            BasicMesh::Cylinder => build_frustum(1.0, 1.0),
            BasicMesh::TaperedCylinder => build_frustum(1.0, 0.5),
            BasicMesh::Cone => build_frustum(1.0, 0.0),
            BasicMesh::Sphere => build_sphere(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ShapeVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// CPU-side geometry of a basic mesh.
#[derive(Clone, Debug, Default)]
pub struct ShapeData {
    pub vertices: Vec<ShapeVertex>,
    pub indices: Vec<u32>,
}

impl ShapeData {
    fn vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        self.vertices.push(ShapeVertex {
            position,
            normal,
            uv,
        });
        (self.vertices.len() - 1) as u32
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Adds a quad centred on `center` spanned by the half extents `u` and `v`.
    /// `u x v` must point along the face normal.
    fn quad(&mut self, center: Vec3, u: Vec3, v: Vec3) {
        let normal = u.cross(v).normalize();
        let a = self.vertex(center - u - v, normal, Vec2::new(0.0, 0.0));
        let b = self.vertex(center + u - v, normal, Vec2::new(1.0, 0.0));
        let c = self.vertex(center + u + v, normal, Vec2::new(1.0, 1.0));
        let d = self.vertex(center - u + v, normal, Vec2::new(0.0, 1.0));
        self.triangle(a, b, c);
        self.triangle(a, c, d);
    }
}

fn build_box() -> ShapeData {
    let mut data = ShapeData::default();
    let h = 0.5;
    data.quad(Vec3::X * h, Vec3::NEG_Z * h, Vec3::Y * h);
    data.quad(Vec3::NEG_X * h, Vec3::Z * h, Vec3::Y * h);
    data.quad(Vec3::Y * h, Vec3::X * h, Vec3::NEG_Z * h);
    data.quad(Vec3::NEG_Y * h, Vec3::X * h, Vec3::Z * h);
    data.quad(Vec3::Z * h, Vec3::X * h, Vec3::Y * h);
    data.quad(Vec3::NEG_Z * h, Vec3::NEG_X * h, Vec3::Y * h);
    data
}

fn build_plane() -> ShapeData {
    let mut data = ShapeData::default();
    data.quad(Vec3::ZERO, Vec3::X, Vec3::NEG_Z);
    data
}

/// Builds a capped frustum from y = 0 to y = 1. A top radius of zero gives a cone.
fn build_frustum(bottom_radius: f32, top_radius: f32) -> ShapeData {
    let mut data = ShapeData::default();
    let ring = |i: u32| {
        let theta = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        (theta.cos(), theta.sin())
    };

    // side
    let side_start = data.vertices.len() as u32;
    for i in 0..=SEGMENTS {
        let (c, s) = ring(i);
        let normal = Vec3::new(c, bottom_radius - top_radius, s).normalize();
        let u = i as f32 / SEGMENTS as f32;
        data.vertex(
            Vec3::new(c * bottom_radius, 0.0, s * bottom_radius),
            normal,
            Vec2::new(u, 0.0),
        );
        data.vertex(
            Vec3::new(c * top_radius, 1.0, s * top_radius),
            normal,
            Vec2::new(u, 1.0),
        );
    }
    for i in 0..SEGMENTS {
        let bottom = side_start + i * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        if top_radius > 0.0 {
            data.triangle(bottom, top, next_top);
        }
        data.triangle(bottom, next_top, next_bottom);
    }

    // bottom cap
    let center = data.vertex(Vec3::ZERO, Vec3::NEG_Y, Vec2::splat(0.5));
    let cap_start = data.vertices.len() as u32;
    for i in 0..=SEGMENTS {
        let (c, s) = ring(i);
        data.vertex(
            Vec3::new(c * bottom_radius, 0.0, s * bottom_radius),
            Vec3::NEG_Y,
            Vec2::new(0.5 + 0.5 * c, 0.5 + 0.5 * s),
        );
    }
    for i in 0..SEGMENTS {
        data.triangle(center, cap_start + i, cap_start + i + 1);
    }

    if top_radius > 0.0 {
        let center = data.vertex(Vec3::Y, Vec3::Y, Vec2::splat(0.5));
        let cap_start = data.vertices.len() as u32;
        for i in 0..=SEGMENTS {
            let (c, s) = ring(i);
            data.vertex(
                Vec3::new(c * top_radius, 1.0, s * top_radius),
                Vec3::Y,
                Vec2::new(0.5 + 0.5 * c, 0.5 + 0.5 * s),
            );
        }
        for i in 0..SEGMENTS {
            data.triangle(center, cap_start + i + 1, cap_start + i);
        }
    }

    data
}

fn build_sphere() -> ShapeData {
    let mut data = ShapeData::default();
    let columns = SEGMENTS + 1;

    for stack in 0..=SPHERE_STACKS {
        let phi = stack as f32 / SPHERE_STACKS as f32 * std::f32::consts::PI;
        let (ring_radius, y) = (phi.sin(), phi.cos());
        for segment in 0..=SEGMENTS {
            let theta = segment as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
            let position = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            let uv = Vec2::new(
                segment as f32 / SEGMENTS as f32,
                1.0 - stack as f32 / SPHERE_STACKS as f32,
            );
            data.vertex(position, position.normalize_or(Vec3::Y), uv);
        }
    }

    for stack in 0..SPHERE_STACKS {
        for segment in 0..SEGMENTS {
            let upper = stack * columns + segment;
            let lower = upper + columns;
            if stack != 0 {
                data.triangle(lower, upper, upper + 1);
            }
            if stack != SPHERE_STACKS - 1 {
                data.triangle(lower, upper + 1, lower + 1);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_in_range() {
        for mesh in BasicMesh::ALL {
            let data = mesh.build();
            assert_eq!(data.indices.len() % 3, 0, "{mesh:?}");
            let count = data.vertices.len() as u32;
            assert!(data.indices.iter().all(|&i| i < count), "{mesh:?}");
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for mesh in BasicMesh::ALL {
            for vertex in mesh.build().vertices {
                assert!((vertex.normal.length() - 1.0).abs() < 1e-4, "{mesh:?}");
            }
        }
    }

    #[test]
    fn test_winding_matches_normals() {
        for mesh in BasicMesh::ALL {
            let data = mesh.build();
            for tri in data.indices.chunks(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| data.vertices[i as usize]);
                let face = (b.position - a.position).cross(c.position - a.position);
                assert!(face.length() > 1e-7, "{mesh:?} has a degenerate triangle");
                let normal = a.normal + b.normal + c.normal;
                assert!(face.dot(normal) > 0.0, "{mesh:?} has an inverted triangle");
            }
        }
    }

    #[test]
    fn test_box_extents() {
        let data = BasicMesh::Box.build();
        assert_eq!(data.vertices.len(), 24);
        assert_eq!(data.indices.len(), 36);
        for vertex in &data.vertices {
            assert_eq!(vertex.position.abs(), Vec3::splat(0.5));
        }
    }

    #[test]
    fn test_plane_faces_up() {
        let data = BasicMesh::Plane.build();
        assert_eq!(data.vertices.len(), 4);
        assert!(data.vertices.iter().all(|v| v.normal == Vec3::Y && v.position.y == 0.0));
    }

    #[test]
    fn test_frustum_heights() {
        for mesh in [BasicMesh::Cylinder, BasicMesh::TaperedCylinder, BasicMesh::Cone] {
            let data = mesh.build();
            let max_y = data.vertices.iter().map(|v| v.position.y).fold(f32::MIN, f32::max);
            let min_y = data.vertices.iter().map(|v| v.position.y).fold(f32::MAX, f32::min);
            assert_eq!((min_y, max_y), (0.0, 1.0), "{mesh:?}");
        }

        let tapered = BasicMesh::TaperedCylinder.build();
        let top_radius = tapered
            .vertices
            .iter()
            .filter(|v| v.position.y == 1.0)
            .map(|v| v.position.with_y(0.0).length())
            .fold(0.0, f32::max);
        assert!((top_radius - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_radius() {
        for vertex in BasicMesh::Sphere.build().vertices {
            assert!((vertex.position.length() - 1.0).abs() < 1e-5);
        }
    }
}
