use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use super::camera::PerspectiveCamera;
use super::render;
use super::scene::Scene;
use super::viewport::{FrameHandle, SurfaceHost, ViewportConfig, ViewportError};

fn dom_err(value: JsValue) -> ViewportError {
	ViewportError::Dom(format!("{value:?}"))
}

/// A canvas appended to the host element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

/// Surfaces are canvases inside `container`; frames come from
/// `requestAnimationFrame` and always invoke `on_frame`.
pub struct DomHost {
	container: HtmlElement,
	window: Window,
	on_frame: Closure<dyn FnMut(f64)>,
}

impl DomHost {
	/// Host on `container`; fails without a browser window.
	pub fn new(
		container: HtmlElement,
		on_frame: Closure<dyn FnMut(f64)>,
	) -> Result<Self, ViewportError> {
		let window = web_sys::window().ok_or_else(|| ViewportError::Dom("no window".into()))?;
		Ok(Self {
			container,
			window,
			on_frame,
		})
	}
}

impl SurfaceHost for DomHost {
	type Surface = CanvasSurface;

	fn attach(&mut self, config: &ViewportConfig) -> Result<CanvasSurface, ViewportError> {
		let document = self
			.window
			.document()
			.ok_or_else(|| ViewportError::Dom("no document".into()))?;
		let canvas: HtmlCanvasElement = document
			.create_element("canvas")
			.map_err(dom_err)?
			.dyn_into()
			.map_err(|_| ViewportError::Dom("created element is not a canvas".into()))?;
		canvas.set_width(config.width());
		canvas.set_height(config.height());
		canvas
			.style()
			.set_property("display", "block")
			.map_err(dom_err)?;

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.map_err(dom_err)?
			.ok_or_else(|| ViewportError::Dom("2d context unavailable".into()))?
			.dyn_into()
			.map_err(|_| ViewportError::Dom("context is not 2d".into()))?;

		self.container.append_child(&canvas).map_err(dom_err)?;
		Ok(CanvasSurface {
			canvas,
			ctx,
			width: config.width() as f64,
			height: config.height() as f64,
		})
	}

	fn detach(&mut self, surface: CanvasSurface) {
		surface.canvas.remove();
	}

	fn draw(&mut self, surface: &mut CanvasSurface, scene: &Scene, camera: &PerspectiveCamera) {
		let primitives = render::compose(scene, camera);
		render::paint(&surface.ctx, surface.width, surface.height, &primitives);
	}

	fn request_frame(&mut self) -> Result<FrameHandle, ViewportError> {
		self.window
			.request_animation_frame(self.on_frame.as_ref().unchecked_ref())
			.map(FrameHandle)
			.map_err(dom_err)
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle.0);
	}
}
