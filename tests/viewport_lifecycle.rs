#![allow(unused_crate_dependencies)]

use std::cell::RefCell;
use std::rc::Rc;

use citegraph_site::components::citegraph::{
	FrameHandle, GraphData, PerspectiveCamera, RenderStrategy, Scene, SceneObject, SurfaceHost,
	SyncOutcome, Viewport, ViewportConfig, ViewportError, seeded_citation_tree,
};

/// What the recording host has seen. Shared so it survives the viewport.
#[derive(Default, Debug)]
struct Log {
	attached: Vec<u32>,
	attach_calls: usize,
	detach_calls: usize,
	draws: usize,
	next_frame: i32,
	pending: Vec<FrameHandle>,
	cancelled: Vec<FrameHandle>,
	fail_attach: bool,
	fail_frames: bool,
}

#[derive(Clone, Default)]
struct RecordingHost(Rc<RefCell<Log>>);

struct Surface {
	id: u32,
}

impl SurfaceHost for RecordingHost {
	type Surface = Surface;

	fn attach(&mut self, config: &ViewportConfig) -> Result<Surface, ViewportError> {
		let mut log = self.0.borrow_mut();
		if log.fail_attach {
			return Err(ViewportError::Dom("no document".into()));
		}
		log.attach_calls += 1;
		let id = log.attach_calls as u32 * 1000 + config.width();
		log.attached.push(id);
		Ok(Surface { id })
	}

	fn detach(&mut self, surface: Surface) {
		let mut log = self.0.borrow_mut();
		log.detach_calls += 1;
		log.attached.retain(|&id| id != surface.id);
	}

	fn draw(&mut self, _surface: &mut Surface, _scene: &Scene, _camera: &PerspectiveCamera) {
		self.0.borrow_mut().draws += 1;
	}

	fn request_frame(&mut self) -> Result<FrameHandle, ViewportError> {
		let mut log = self.0.borrow_mut();
		if log.fail_frames {
			return Err(ViewportError::Dom("requestAnimationFrame failed".into()));
		}
		log.next_frame += 1;
		let handle = FrameHandle(log.next_frame);
		log.pending.push(handle);
		Ok(handle)
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		let mut log = self.0.borrow_mut();
		log.pending.retain(|&h| h != handle);
		log.cancelled.push(handle);
	}
}

fn config(width: u32, height: u32) -> ViewportConfig {
	ViewportConfig::new(width, height, RenderStrategy::ForceLayout).unwrap()
}

fn viewport() -> (Viewport<RecordingHost>, Rc<RefCell<Log>>) {
	let host = RecordingHost::default();
	let log = host.0.clone();
	(Viewport::new(host), log)
}

/// Simulates the browser firing the oldest pending frame.
fn fire_frame(viewport: &mut Viewport<RecordingHost>, log: &Rc<RefCell<Log>>) {
	{
		let mut log = log.borrow_mut();
		assert!(!log.pending.is_empty(), "no frame scheduled");
		log.pending.remove(0);
	}
	viewport.frame().unwrap();
}

#[test]
fn starts_uninitialized() {
	let (viewport, log) = viewport();
	assert!(!viewport.is_initialized());
	assert_eq!(viewport.pending_frame(), None);
	assert!(log.borrow().attached.is_empty());
}

#[test]
fn first_sync_attaches_exactly_one_surface() {
	let (mut viewport, log) = viewport();
	let data = seeded_citation_tree(300, 1);

	assert_eq!(viewport.sync(config(500, 500), &data), Ok(SyncOutcome::Built));
	assert!(viewport.is_initialized());
	assert_eq!(log.borrow().attached.len(), 1);
	assert_eq!(log.borrow().pending.len(), 1);
}

#[test]
fn camera_aspect_matches_requested_size() {
	let (mut viewport, _log) = viewport();
	viewport
		.sync(config(900, 500), &GraphData::default())
		.unwrap();
	let bundle = viewport.bundle().unwrap();
	assert_eq!(bundle.camera.aspect, 900.0 / 500.0);
	assert_eq!(bundle.camera.fov_degrees, 75.0);
	assert_eq!(bundle.camera.near, 0.1);
	assert_eq!(bundle.camera.far, 1000.0);
	assert_eq!(bundle.camera.position.z, 5.0);
}

#[test]
fn repeated_sync_with_same_inputs_is_a_no_op() {
	let (mut viewport, log) = viewport();
	let data = seeded_citation_tree(50, 3);
	viewport.sync(config(500, 500), &data).unwrap();

	assert_eq!(
		viewport.sync(config(500, 500), &data),
		Ok(SyncOutcome::Unchanged)
	);
	let log = log.borrow();
	assert_eq!(log.attach_calls, 1);
	assert_eq!(log.detach_calls, 0);
	assert_eq!(log.attached.len(), 1);
	assert_eq!(log.pending.len(), 1);
}

#[test]
fn resizing_tears_down_before_rebuilding() {
	let (mut viewport, log) = viewport();
	let data = seeded_citation_tree(50, 3);
	viewport.sync(config(500, 500), &data).unwrap();
	let first_frame = viewport.pending_frame().unwrap();

	assert_eq!(
		viewport.sync(config(800, 400), &data),
		Ok(SyncOutcome::Rebuilt)
	);
	{
		let log = log.borrow();
		assert_eq!(log.attach_calls, 2);
		assert_eq!(log.detach_calls, 1);
		assert_eq!(log.attached, vec![2800]);
		assert_eq!(log.cancelled, vec![first_frame]);
		assert_eq!(log.pending.len(), 1);
	}
	assert_eq!(viewport.bundle().unwrap().camera.aspect, 2.0);
}

#[test]
fn new_data_rebuilds() {
	let (mut viewport, log) = viewport();
	viewport
		.sync(config(500, 500), &seeded_citation_tree(50, 1))
		.unwrap();
	assert_eq!(
		viewport.sync(config(500, 500), &seeded_citation_tree(50, 2)),
		Ok(SyncOutcome::Rebuilt)
	);
	assert_eq!(log.borrow().attached.len(), 1);
}

#[test]
fn switching_strategy_swaps_the_scene_object() {
	let (mut viewport, _log) = viewport();
	let data = seeded_citation_tree(10, 1);
	viewport.sync(config(500, 500), &data).unwrap();
	assert!(matches!(
		viewport.bundle().unwrap().scene.objects[0],
		SceneObject::Layout(_)
	));

	let placeholder = ViewportConfig::new(500, 500, RenderStrategy::Placeholder).unwrap();
	assert_eq!(viewport.sync(placeholder, &data), Ok(SyncOutcome::Rebuilt));
	assert!(matches!(
		viewport.bundle().unwrap().scene.objects[0],
		SceneObject::Placeholder(_)
	));
}

#[test]
fn each_frame_steps_draws_and_reschedules_once() {
	let (mut viewport, log) = viewport();
	viewport
		.sync(config(500, 500), &seeded_citation_tree(20, 8))
		.unwrap();
	let draws_after_setup = log.borrow().draws;

	for _ in 0..3 {
		fire_frame(&mut viewport, &log);
		assert_eq!(log.borrow().pending.len(), 1);
	}

	assert_eq!(log.borrow().draws, draws_after_setup + 3);
	let SceneObject::Layout(layout) = &viewport.bundle().unwrap().scene.objects[0] else {
		panic!("expected the force layout");
	};
	assert_eq!(layout.ticks, 3);
}

#[test]
fn frame_before_setup_does_nothing() {
	let (mut viewport, log) = viewport();
	assert_eq!(viewport.frame(), Ok(()));
	assert_eq!(log.borrow().draws, 0);
	assert!(log.borrow().pending.is_empty());
}

#[test]
fn teardown_leaves_no_surface_and_no_frame() {
	let (mut viewport, log) = viewport();
	viewport
		.sync(config(500, 500), &seeded_citation_tree(300, 1))
		.unwrap();
	fire_frame(&mut viewport, &log);

	viewport.teardown();
	assert!(!viewport.is_initialized());
	let log = log.borrow();
	assert!(log.attached.is_empty());
	assert!(log.pending.is_empty());
	assert_eq!(log.cancelled.len(), 1);
}

#[test]
fn teardown_twice_is_harmless() {
	let (mut viewport, log) = viewport();
	viewport.sync(config(500, 500), &GraphData::default()).unwrap();
	viewport.teardown();
	viewport.teardown();
	assert_eq!(log.borrow().detach_calls, 1);
}

#[test]
fn dropping_the_viewport_releases_everything() {
	let (mut viewport, log) = viewport();
	viewport.sync(config(500, 500), &GraphData::default()).unwrap();
	drop(viewport);

	let log = log.borrow();
	assert!(log.attached.is_empty());
	assert!(log.pending.is_empty());
}

#[test]
fn failed_attach_leaves_viewport_uninitialized() {
	let (mut viewport, log) = viewport();
	log.borrow_mut().fail_attach = true;
	assert!(viewport.sync(config(500, 500), &GraphData::default()).is_err());
	assert!(!viewport.is_initialized());

	log.borrow_mut().fail_attach = false;
	assert_eq!(
		viewport.sync(config(500, 500), &GraphData::default()),
		Ok(SyncOutcome::Built)
	);
}

#[test]
fn failed_first_frame_releases_the_surface() {
	let (mut viewport, log) = viewport();
	log.borrow_mut().fail_frames = true;
	assert!(viewport.sync(config(500, 500), &GraphData::default()).is_err());
	assert!(!viewport.is_initialized());
	assert!(log.borrow().attached.is_empty());
}

#[test]
fn zero_size_never_reaches_the_host() {
	let (mut viewport, log) = viewport();
	viewport
		.sync(config(640, 480), &GraphData::default())
		.unwrap();

	assert!(ViewportConfig::new(0, 480, RenderStrategy::ForceLayout).is_err());
	assert!(viewport.is_initialized());
	assert_eq!(log.borrow().attach_calls, 1);
	assert!(viewport.bundle().unwrap().camera.aspect.is_finite());
}
