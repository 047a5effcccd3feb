//! Viewport lifecycle: one surface, camera and scene per configuration.
//!
//! The viewport is either uninitialized or holds exactly one
//! [`ViewportBundle`]. Syncing with a new configuration or new data tears the
//! current bundle down before building the next one; dropping the viewport
//! tears it down too, so a pending frame is always cancelled before its
//! surface is released.

use log::{debug, info};
use thiserror::Error;

use super::camera::PerspectiveCamera;
use super::scene::Scene;
use super::types::GraphData;

/// Simulation step applied per displayed frame.
pub const FRAME_DT: f32 = 0.016;

/// Errors raised while building or driving a viewport.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
	/// Width or height was zero.
	#[error("viewport size must be positive, got {width}x{height}")]
	InvalidSize {
		/// Requested width.
		width: u32,
		/// Requested height.
		height: u32,
	},

	/// A browser call failed.
	#[error("dom error: {0}")]
	Dom(String),
}

/// What the scene shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStrategy {
	/// A spinning cube, no graph.
	Placeholder,
	/// The citation graph under a live force simulation.
	#[default]
	ForceLayout,
}

/// Everything that decides whether the viewport must be rebuilt.
///
/// Only [`ViewportConfig::new`] builds one, so width and height are never
/// zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportConfig {
	width: u32,
	height: u32,
	strategy: RenderStrategy,
}

impl ViewportConfig {
	/// Validated configuration; zero sizes are rejected.
	pub fn new(width: u32, height: u32, strategy: RenderStrategy) -> Result<Self, ViewportError> {
		if width == 0 || height == 0 {
			return Err(ViewportError::InvalidSize { width, height });
		}
		Ok(Self {
			width,
			height,
			strategy,
		})
	}

	/// Surface width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Surface height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// What the scene shows.
	pub fn strategy(&self) -> RenderStrategy {
		self.strategy
	}

	/// Width over height.
	pub fn aspect(&self) -> f64 {
		self.width as f64 / self.height as f64
	}
}

/// Handle returned when a frame is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Where surfaces live and how frames get scheduled.
pub trait SurfaceHost {
	/// A drawable attached to the host.
	type Surface;

	/// Create a surface sized to `config` and attach it.
	fn attach(&mut self, config: &ViewportConfig) -> Result<Self::Surface, ViewportError>;
	/// Remove a surface from the host.
	fn detach(&mut self, surface: Self::Surface);
	/// Render `scene` through `camera` onto `surface`.
	fn draw(&mut self, surface: &mut Self::Surface, scene: &Scene, camera: &PerspectiveCamera);
	/// Ask for one callback on the next display refresh.
	fn request_frame(&mut self) -> Result<FrameHandle, ViewportError>;
	/// Drop a callback that has not fired yet.
	fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Resources owned while initialized.
pub struct ViewportBundle<S> {
	/// Configuration the bundle was built for.
	pub config: ViewportConfig,
	/// Graph the scene was built from.
	pub data: GraphData,
	/// Scene root.
	pub scene: Scene,
	/// Camera sized to the configuration.
	pub camera: PerspectiveCamera,
	surface: S,
	pending_frame: Option<FrameHandle>,
}

/// Outcome of [`Viewport::sync`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
	/// First setup from the uninitialized state.
	Built,
	/// The previous bundle was released and a new one built.
	Rebuilt,
	/// Configuration and data already matched.
	Unchanged,
}

/// Graph viewport: uninitialized, or one live [`ViewportBundle`].
pub struct Viewport<H: SurfaceHost> {
	host: H,
	bundle: Option<ViewportBundle<H::Surface>>,
}

impl<H: SurfaceHost> Viewport<H> {
	/// Uninitialized viewport on `host`.
	pub fn new(host: H) -> Self {
		Self { host, bundle: None }
	}

	/// Whether a bundle is live.
	pub fn is_initialized(&self) -> bool {
		self.bundle.is_some()
	}

	/// The live bundle, if any.
	pub fn bundle(&self) -> Option<&ViewportBundle<H::Surface>> {
		self.bundle.as_ref()
	}

	/// Handle of the frame scheduled but not yet fired.
	pub fn pending_frame(&self) -> Option<FrameHandle> {
		self.bundle.as_ref().and_then(|b| b.pending_frame)
	}

	/// Bring the viewport in line with `config` and `data`. A no-op when both
	/// match what is already built.
	pub fn sync(
		&mut self,
		config: ViewportConfig,
		data: &GraphData,
	) -> Result<SyncOutcome, ViewportError> {
		let outcome = match &self.bundle {
			Some(b) if b.config == config && b.data == *data => {
				return Ok(SyncOutcome::Unchanged);
			}
			Some(_) => SyncOutcome::Rebuilt,
			None => SyncOutcome::Built,
		};
		self.teardown();

		let mut surface = self.host.attach(&config)?;
		let scene = Scene::new(config.strategy(), data);
		let camera = PerspectiveCamera::new(&config);
		self.host.draw(&mut surface, &scene, &camera);
		let pending_frame = match self.host.request_frame() {
			Ok(handle) => Some(handle),
			Err(err) => {
				self.host.detach(surface);
				return Err(err);
			}
		};

		info!(
			"viewport {:?}: {}x{} {:?}, {} nodes",
			outcome,
			config.width(),
			config.height(),
			config.strategy(),
			data.node_count()
		);
		self.bundle = Some(ViewportBundle {
			config,
			data: data.clone(),
			scene,
			camera,
			surface,
			pending_frame,
		});
		Ok(outcome)
	}

	/// One display refresh: step the scene, draw it, schedule the next frame.
	pub fn frame(&mut self) -> Result<(), ViewportError> {
		let Some(bundle) = self.bundle.as_mut() else {
			return Ok(());
		};
		bundle.pending_frame = None;
		bundle.scene.tick(FRAME_DT);
		self.host.draw(&mut bundle.surface, &bundle.scene, &bundle.camera);
		bundle.pending_frame = Some(self.host.request_frame()?);
		Ok(())
	}

	/// Cancel the pending frame and release the surface.
	pub fn teardown(&mut self) {
		let Some(bundle) = self.bundle.take() else {
			return;
		};
		if let Some(handle) = bundle.pending_frame {
			self.host.cancel_frame(handle);
		}
		self.host.detach(bundle.surface);
		debug!(
			"viewport released {}x{}",
			bundle.config.width(),
			bundle.config.height()
		);
	}
}

impl<H: SurfaceHost> Drop for Viewport<H> {
	fn drop(&mut self) {
		self.teardown();
	}
}
