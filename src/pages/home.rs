use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use web_sys::{Event, MouseEvent};

use crate::components::citegraph::{
	CITATION_NODES, GraphViewport, RenderStrategy, seeded_citation_tree,
};
use crate::components::site::{FeatureBadges, LocaleSelect, SiteFooter};
use crate::i18n::{self, Locale};

const VIEWPORT_WIDTH: u32 = 900;
const VIEWPORT_HEIGHT: u32 = 500;

fn browser_locale() -> Locale {
	web_sys::window()
		.and_then(|w| w.navigator().language())
		.and_then(|tag| Locale::negotiate(&tag))
		.unwrap_or_default()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let locale = RwSignal::new(browser_locale());
	let seed = RwSignal::new(js_sys::Date::now() as u64);
	let strategy = RwSignal::new(RenderStrategy::default());
	// Only a new seed produces new data.
	let graph = Memo::new(move |_| seeded_citation_tree(CITATION_NODES, seed.get()));

	let on_regenerate = move |_: MouseEvent| seed.update(|s| *s = s.wrapping_add(1));
	let on_placeholder = move |ev: Event| {
		strategy.set(if event_target_checked(&ev) {
			RenderStrategy::Placeholder
		} else {
			RenderStrategy::ForceLayout
		});
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<Title text=move || i18n::title(locale.get()) />
			<Meta name="description" content=move || i18n::head_description(locale.get()) />

			<main class="home">
				<header class="home-header">
					<h1>{move || i18n::title(locale.get())}</h1>
					<LocaleSelect locale=locale />
				</header>
				<FeatureBadges locale=locale />
				<nav class="toc">
					<h2>{move || i18n::table_of_contents_title(locale.get())}</h2>
					<a href="#citation-graph">"Citation graph"</a>
				</nav>

				<h2 id="citation-graph">"Citation graph"</h2>
				<GraphViewport
					width=VIEWPORT_WIDTH
					height=VIEWPORT_HEIGHT
					data=graph
					strategy=strategy
				/>
				<div class="graph-controls">
					<button on:click=on_regenerate>"Regenerate"</button>
					<label>
						<input
							type="checkbox"
							prop:checked=move || strategy.get() == RenderStrategy::Placeholder
							on:change=on_placeholder
						/>
						" Placeholder cube"
					</label>
				</div>

				<SiteFooter locale=locale />
			</main>
		</ErrorBoundary>
	}
}
