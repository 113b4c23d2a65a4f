//! Logo mesh generation.
//!
//! Every box contributes six faces of two triangles each, wound
//! counter-clockwise seen from outside, as a plain triangle list.

use super::types::{LogoBox, LogoVertex, LOGO_BOXES};

/// Vertices per box: 6 faces × 2 triangles × 3 vertices.
pub const VERTICES_PER_BOX: usize = 36;

/// Generate the full logo mesh.
pub fn generate_logo_mesh() -> Vec<LogoVertex> {
    generate_box_mesh(&LOGO_BOXES)
}

/// Generate a flat-shaded triangle list for a set of boxes.
pub fn generate_box_mesh(boxes: &[LogoBox]) -> Vec<LogoVertex> {
    let mut vertices = Vec::with_capacity(boxes.len() * VERTICES_PER_BOX);
    for b in boxes {
        for axis in 0..3 {
            for sign in [1.0, -1.0] {
                push_face(&mut vertices, b, axis, sign);
            }
        }
    }
    vertices
}

fn push_face(out: &mut Vec<LogoVertex>, b: &LogoBox, axis: usize, sign: f32) {
    let u = (axis + 1) % 3;
    let v = (axis + 2) % 3;
    let half = [b.size[0] * 0.5, b.size[1] * 0.5, b.size[2] * 0.5];

    let mut normal = [0.0; 3];
    normal[axis] = sign;

    // Flipping the `u` direction on the negative face keeps u × v == normal.
    let corner = |su: f32, sv: f32| {
        let mut p = b.center;
        p[axis] += sign * half[axis];
        p[u] += sign * su * half[u];
        p[v] += sv * half[v];
        p
    };
    let quad = [
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
    ];

    for i in [0, 1, 2, 0, 2, 3] {
        out.push(LogoVertex {
            position: quad[i],
            normal,
        });
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use starfield_field::vector as v;

    #[test]
    fn logo_mesh_vertex_count() {
        assert_eq!(generate_logo_mesh().len(), 6 * VERTICES_PER_BOX);
    }

    #[test]
    fn logo_mesh_bounds() {
        let mesh = generate_logo_mesh();
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for vert in &mesh {
            for i in 0..3 {
                min[i] = min[i].min(vert.position[i]);
                max[i] = max[i].max(vert.position[i]);
            }
        }
        assert_eq!(min, [-2.25, -1.5, -0.25]);
        assert_eq!(max, [2.75, 1.5, 0.25]);
    }

    #[test]
    fn triangles_wind_outward() {
        let mesh = generate_logo_mesh();
        for tri in mesh.chunks_exact(3) {
            let e1 = v::sub(tri[1].position, tri[0].position);
            let e2 = v::sub(tri[2].position, tri[0].position);
            let cross = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let facing: f32 = (0..3).map(|i| cross[i] * tri[0].normal[i]).sum();
            assert!(facing > 0.0, "triangle {tri:?} winds inward");
        }
    }

    #[test]
    fn normals_are_axis_aligned_units() {
        for vert in generate_logo_mesh() {
            assert!((v::length(vert.normal) - 1.0).abs() < 1e-6);
            assert_eq!(vert.normal.iter().filter(|c| **c != 0.0).count(), 1);
        }
    }

    #[test]
    fn single_unit_box_faces_touch_its_surface() {
        let unit = LogoBox {
            size: [1.0, 1.0, 1.0],
            center: [0.0, 0.0, 0.0],
        };
        for vert in generate_box_mesh(&[unit]) {
            let along: f32 = (0..3).map(|i| vert.position[i] * vert.normal[i]).sum();
            assert!((along - 0.5).abs() < 1e-6);
        }
    }
}
