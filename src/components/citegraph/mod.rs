//! Citation graph: data, scene, camera and the animated viewport.

mod camera;
mod component;
mod data;
mod dom;
mod render;
mod scene;
mod types;
mod viewport;

pub use camera::{PerspectiveCamera, Projected};
pub use component::GraphViewport;
pub use data::{CITATION_NODES, citation_tree, seeded_citation_tree};
pub use dom::{CanvasSurface, DomHost};
pub use render::{Primitive, compose};
pub use scene::{LayoutObject, Scene, SceneObject, SpinningCube};
pub use types::{GraphData, GraphLink, GraphNode};
pub use viewport::{
	FRAME_DT, FrameHandle, RenderStrategy, SurfaceHost, SyncOutcome, Viewport, ViewportBundle,
	ViewportConfig, ViewportError,
};
