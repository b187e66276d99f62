//! Axis rotations
use crate::geometry::Vertex;

/// One of the three coordinate axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Rotate `v` by `theta` radians about the X axis
pub fn rotate_x(v: &Vertex, theta: f32) -> Vertex {
    let (sin, cos) = theta.sin_cos();
    let p = v.position;
    Vertex::new(p.x, cos * p.y - sin * p.z, sin * p.y + cos * p.z)
}

/// Rotate `v` by `theta` radians about the Y axis
pub fn rotate_y(v: &Vertex, theta: f32) -> Vertex {
    let (sin, cos) = theta.sin_cos();
    let p = v.position;
    Vertex::new(cos * p.x + sin * p.z, p.y, -sin * p.x + cos * p.z)
}

/// Rotate `v` by `theta` radians about the Z axis
pub fn rotate_z(v: &Vertex, theta: f32) -> Vertex {
    let (sin, cos) = theta.sin_cos();
    let p = v.position;
    Vertex::new(cos * p.x - sin * p.y, sin * p.x + cos * p.y, p.z)
}

pub fn rotate(v: &Vertex, axis: Axis, theta: f32) -> Vertex {
    match axis {
        Axis::X => rotate_x(v, theta),
        Axis::Y => rotate_y(v, theta),
        Axis::Z => rotate_z(v, theta),
    }
}

/// Rotate about X, then Y, then Z by the same angle.
///
/// Each stage consumes the output of the previous one; changing the order
/// changes the visible motion.
pub fn rotate_xyz(v: &Vertex, theta: f32) -> Vertex {
    let v = rotate_x(v, theta);
    let v = rotate_y(&v, theta);
    rotate_z(&v, theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Matrix4, Vector3};
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: &Vertex, b: &Vertex) {
        assert!(
            (a.position - b.position).norm() < 1e-5,
            "{:?} != {:?}",
            a.position,
            b.position
        );
    }

    #[test]
    fn test_quarter_turns() {
        let v = Vertex::new(1.0, 0.0, 0.0);
        assert_close(&rotate_z(&v, FRAC_PI_2), &Vertex::new(0.0, 1.0, 0.0));
        assert_close(&rotate_y(&v, FRAC_PI_2), &Vertex::new(0.0, 0.0, -1.0));

        let v = Vertex::new(0.0, 1.0, 0.0);
        assert_close(&rotate_x(&v, FRAC_PI_2), &Vertex::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rotation_round_trip() {
        let v = Vertex::new(0.25, -0.4, 0.1);
        for theta in [0.3f32, 1.7, -2.5, 10.0] {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let back = rotate(&rotate(&v, axis, theta), axis, -theta);
                assert_close(&back, &v);
            }
        }
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let v = Vertex::new(0.25, -0.25, 0.25);
        assert_eq!(rotate_xyz(&v, 0.0), v);
    }

    #[test]
    fn test_order_matters() {
        let v = Vertex::new(0.25, 0.25, 0.25);
        let theta = 0.8;
        let zyx = rotate_x(&rotate_y(&rotate_z(&v, theta), theta), theta);
        assert!((rotate_xyz(&v, theta).position - zyx.position).norm() > 1e-3);
    }

    #[test]
    fn test_matches_composed_matrix() {
        let theta = 1.1;
        let rx = Matrix4::new_rotation(Vector3::new(theta, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, theta, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, theta));
        // X is applied first, Z last
        let matrix = rz * ry * rx;

        let v = Vertex::new(0.25, -0.25, 0.25);
        let expected = Vertex {
            position: matrix.transform_point(&v.position),
        };
        assert_close(&rotate_xyz(&v, theta), &expected);
    }

    #[test]
    fn test_nan_propagates() {
        let v = Vertex::new(f32::NAN, 0.0, 0.0);
        assert!(rotate_z(&v, 0.5).x().is_nan());
    }
}
