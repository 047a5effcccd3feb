use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;

use super::dom::DomHost;
use super::types::GraphData;
use super::viewport::{RenderStrategy, Viewport, ViewportConfig};

type ViewportCell = Rc<RefCell<Option<Viewport<DomHost>>>>;

/// Runs once per display refresh. Holds the viewport weakly so dropping it
/// ends the loop.
fn frame_callback(cell: Weak<RefCell<Option<Viewport<DomHost>>>>) -> Closure<dyn FnMut(f64)> {
	Closure::new(move |_timestamp: f64| {
		let Some(cell) = cell.upgrade() else {
			return;
		};
		let Ok(mut slot) = cell.try_borrow_mut() else {
			return;
		};
		if let Some(viewport) = slot.as_mut() {
			if let Err(err) = viewport.frame() {
				error!("citegraph frame failed: {err}");
			}
		}
	})
}

/// Canvas viewport for a citation graph.
///
/// Rebuilds whenever size, strategy or data change and releases the canvas
/// and the pending animation frame on unmount.
#[component]
pub fn GraphViewport(
	/// Surface width in pixels.
	#[prop(into)]
	width: Signal<u32>,
	/// Surface height in pixels.
	#[prop(into)]
	height: Signal<u32>,
	/// Graph to lay out.
	#[prop(into)]
	data: Signal<GraphData>,
	/// Placeholder cube or force layout.
	#[prop(into)]
	strategy: Signal<RenderStrategy>,
) -> impl IntoView {
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let cell: ViewportCell = Rc::new(RefCell::new(None));
	let cell_effect = cell.clone();

	Effect::new(move |_| {
		let Some(container) = host_ref.get() else {
			return;
		};
		let graph = data.get();
		let config = match ViewportConfig::new(width.get(), height.get(), strategy.get()) {
			Ok(config) => config,
			Err(err) => {
				warn!("citegraph viewport skipped: {err}");
				cell_effect.borrow_mut().take();
				return;
			}
		};

		let mut slot = cell_effect.borrow_mut();
		if slot.is_none() {
			match DomHost::new(container.into(), frame_callback(Rc::downgrade(&cell_effect))) {
				Ok(host) => *slot = Some(Viewport::new(host)),
				Err(err) => {
					error!("citegraph host unavailable: {err}");
					return;
				}
			}
		}
		if let Some(viewport) = slot.as_mut() {
			if let Err(err) = viewport.sync(config, &graph) {
				error!("citegraph viewport setup failed: {err}");
			}
		}
	});

	let stored = StoredValue::new_local(cell);
	on_cleanup(move || {
		stored.try_with_value(|cell| {
			if let Some(mut viewport) = cell.borrow_mut().take() {
				viewport.teardown();
			}
		});
	});

	view! {
		<div
			node_ref=host_ref
			class="citegraph-viewport"
			style=move || format!("width: {}px; height: {}px;", width.get(), height.get())
		/>
	}
}
