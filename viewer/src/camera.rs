//! Orbiting camera for the ball box
//!
//! Z is up, matching the simulation's gravity axis. Angles are in degrees.

use glam::{Mat4, Vec2, Vec3};
use sim_core::Bounds;

const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Camera circling the box centre
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub elev: f32,
    pub azim: f32,
    pub distance: f32,
    pub target: Vec3,
    pub aspect: f32,
}

impl OrbitCamera {
    /// Camera looking at the centre of `bounds` from far enough to see all of it
    pub fn around(bounds: &Bounds, elev: f32, azim: f32, aspect: f32) -> Self {
        Self {
            elev,
            azim,
            distance: bounds.extent().length() as f32 * 1.5,
            target: bounds.center().as_vec3(),
            aspect,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (elev, azim) = (self.elev.to_radians(), self.azim.to_radians());
        let dir = Vec3::new(elev.cos() * azim.cos(), elev.cos() * azim.sin(), elev.sin());
        self.target + dir * self.distance
    }

    /// Spin the view around the vertical axis by `t / 2` degrees
    pub fn rotate(&mut self, t: f32) {
        self.azim += t / 2.0;
    }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.target, Vec3::Z);
        let projection =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), self.aspect, Z_NEAR, Z_FAR);
        projection * view
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns `None` for points behind the camera or outside the view volume.
    pub fn project(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let visible = ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z);
        visible.then(|| ndc.truncate())
    }
}
