//! Direct manipulation: orbit around and zoom toward the scene origin.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::CameraState;

/// Margin keeping the polar angle away from the poles.
pub const POLE_EPSILON: f32 = 0.01;

/// Orbit/zoom tuning shared by mouse, touch and wheel input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    /// Radians per pixel of drag.
    pub rotate_sensitivity: f32,
    /// Distance units per unit of zoom delta.
    pub zoom_sensitivity: f32,
    /// Closest allowed distance from the origin.
    pub min_distance: f32,
    /// Farthest allowed distance from the origin.
    pub max_distance: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            rotate_sensitivity: 0.005,
            zoom_sensitivity: 0.5,
            min_distance: 10.0,
            max_distance: 3000.0,
        }
    }
}

impl OrbitControls {
    /// Orbit the camera by a pixel delta.
    ///
    /// Horizontal motion decreases the azimuth, vertical motion increases the
    /// polar angle, which is clamped to `[POLE_EPSILON, PI - POLE_EPSILON]`.
    /// The camera is re-aimed at the origin.
    pub fn rotate(&self, camera: &mut CameraState, delta: Vec2) {
        let radius = camera.position.length();
        if radius <= f32::EPSILON {
            return;
        }
        let p = camera.position;
        let mut azimuth = p.x.atan2(p.z);
        let mut polar = (p.y / radius).clamp(-1.0, 1.0).acos();

        azimuth -= delta.x * self.rotate_sensitivity;
        polar += delta.y * self.rotate_sensitivity;
        polar = polar.clamp(POLE_EPSILON, PI - POLE_EPSILON);

        camera.position = Vec3::new(
            radius * polar.sin() * azimuth.sin(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.cos(),
        );
        camera.target = Vec3::ZERO;
    }

    /// Move along the current direction from the origin. Positive zooms in.
    ///
    /// Distance is clamped to `[min_distance, max_distance]`.
    pub fn zoom(&self, camera: &mut CameraState, delta: f32) {
        let radius = camera.position.length();
        let direction = if radius > f32::EPSILON {
            camera.position / radius
        } else {
            Vec3::Z
        };
        let distance =
            (radius - delta * self.zoom_sensitivity).clamp(self.min_distance, self.max_distance);
        camera.position = direction * distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Polar angle of a position measured from +Y.
    fn polar_angle(p: Vec3) -> f32 {
        (p.y / p.length()).clamp(-1.0, 1.0).acos()
    }

    fn camera() -> CameraState {
        CameraState::new(Vec3::new(0.0, 0.0, 100.0))
    }

    #[test]
    fn test_horizontal_drag_decreases_azimuth() {
        let controls = OrbitControls::default();
        let mut cam = camera();
        controls.rotate(&mut cam, Vec2::new(100.0, 0.0));
        let azimuth = cam.position.x.atan2(cam.position.z);
        assert!((azimuth - -0.5).abs() < 1e-4, "azimuth {azimuth}");
        assert!((cam.distance() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_drag_increases_polar() {
        let controls = OrbitControls::default();
        let mut cam = camera();
        let before = polar_angle(cam.position);
        controls.rotate(&mut cam, Vec2::new(0.0, 20.0));
        let after = polar_angle(cam.position);
        assert!((after - before - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_never_reaches_poles() {
        let controls = OrbitControls::default();
        let mut cam = camera();
        for dy in [1e6_f32, -1e6, 5e4, -5e4] {
            controls.rotate(&mut cam, Vec2::new(3.0, dy));
            let polar = polar_angle(cam.position);
            assert!(polar > 0.0 && polar < PI, "polar {polar}");
            let at_low = (polar - POLE_EPSILON).abs() < 1e-3;
            let at_high = (polar - (PI - POLE_EPSILON)).abs() < 1e-3;
            assert!(at_low || at_high, "polar {polar}");
            assert!(cam.position.x != 0.0 || cam.position.z != 0.0);
        }
    }

    #[test]
    fn test_rotate_reaims_at_origin() {
        let controls = OrbitControls::default();
        let mut cam = camera();
        cam.target = Vec3::new(5.0, 5.0, 5.0);
        controls.rotate(&mut cam, Vec2::new(1.0, 1.0));
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn test_zoom_in_moves_closer_preserving_direction() {
        let controls = OrbitControls::default();
        let mut cam = CameraState::new(Vec3::new(0.0, 60.0, 80.0));
        let dir = cam.position.normalize();
        controls.zoom(&mut cam, 40.0);
        assert!((cam.distance() - 80.0).abs() < 1e-3);
        assert!((cam.position.normalize() - dir).length() < 1e-5);
    }

    #[test]
    fn test_zoom_stays_within_bounds() {
        let controls = OrbitControls::default();
        let mut cam = camera();
        for _ in 0..100 {
            controls.zoom(&mut cam, 1e5);
            assert!(cam.distance() >= controls.min_distance - 1e-3);
        }
        assert!((cam.distance() - controls.min_distance).abs() < 1e-3);
        for _ in 0..100 {
            controls.zoom(&mut cam, -1e5);
            assert!(cam.distance() <= controls.max_distance + 1e-2);
        }
        assert!((cam.distance() - controls.max_distance).abs() < 1e-2);
    }

    #[test]
    fn test_zoom_from_origin_uses_fallback_direction() {
        let controls = OrbitControls::default();
        let mut cam = CameraState::new(Vec3::ZERO);
        controls.zoom(&mut cam, 0.0);
        assert_eq!(cam.position, Vec3::Z * controls.min_distance);
    }
}
