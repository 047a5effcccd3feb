use glam::{Mat4, Vec3, Vec4};

use super::viewport::ViewportConfig;

/// Vertical field of view.
pub const FOV_DEGREES: f32 = 75.0;
/// Near clip distance.
pub const NEAR: f32 = 0.1;
/// Far clip distance.
pub const FAR: f32 = 1000.0;
/// Camera position.
pub const EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// A point after projection onto the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	/// Pixels from the left edge.
	pub x: f64,
	/// Pixels from the top edge.
	pub y: f64,
	/// Distance along the view direction.
	pub depth: f32,
	/// Surface pixels per world unit at this depth.
	pub scale: f64,
}

/// Fixed perspective camera looking down -z.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
	/// Vertical field of view in degrees.
	pub fov_degrees: f32,
	/// Width over height, exactly as supplied.
	pub aspect: f64,
	/// Near clip distance.
	pub near: f32,
	/// Far clip distance.
	pub far: f32,
	/// Eye position in world space.
	pub position: Vec3,
	width: f64,
	height: f64,
}

impl PerspectiveCamera {
	/// Camera for a surface of `config`'s size.
	pub fn new(config: &ViewportConfig) -> Self {
		Self {
			fov_degrees: FOV_DEGREES,
			aspect: config.aspect(),
			near: NEAR,
			far: FAR,
			position: EYE,
			width: config.width() as f64,
			height: config.height() as f64,
		}
	}

	/// World to camera space.
	pub fn view_matrix(&self) -> Mat4 {
		Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
	}

	/// Camera to clip space.
	pub fn projection_matrix(&self) -> Mat4 {
		Mat4::perspective_rh(
			self.fov_degrees.to_radians(),
			self.aspect as f32,
			self.near,
			self.far,
		)
	}

	/// Project a world-space point to surface pixels. Points outside the
	/// near/far range (including anything behind the camera) are culled.
	pub fn project(&self, world: Vec3) -> Option<Projected> {
		let clip = self.projection_matrix() * self.view_matrix() * Vec4::from((world, 1.0));
		let depth = clip.w;
		if depth < self.near || depth > self.far {
			return None;
		}

		let (ndc_x, ndc_y) = ((clip.x / depth) as f64, (clip.y / depth) as f64);
		let half_fov = (self.fov_degrees.to_radians() / 2.0).tan() as f64;
		Some(Projected {
			x: (ndc_x + 1.0) * 0.5 * self.width,
			y: (1.0 - ndc_y) * 0.5 * self.height,
			depth,
			scale: self.height / (2.0 * half_fov * depth as f64),
		})
	}
}
