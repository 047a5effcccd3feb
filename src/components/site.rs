//! Page chrome driven by the translation tables.

use leptos::prelude::*;
use log::warn;
use web_sys::Event;

use crate::config::site_url;
use crate::i18n::{self, Feature, Locale};

/// Locale picker listing every language by its native name.
#[component]
pub fn LocaleSelect(
	/// Current locale, written on change.
	locale: RwSignal<Locale>,
) -> impl IntoView {
	let on_change = move |ev: Event| match event_target_value(&ev).parse::<Locale>() {
		Ok(next) => locale.set(next),
		Err(err) => warn!("{err}"),
	};

	view! {
		<select class="locale-select" on:change=on_change>
			{Locale::ALL
				.into_iter()
				.map(|l| {
					view! {
						<option value=l.code() selected=move || locale.get() == l>
							{l.native_name()}
						</option>
					}
				})
				.collect_view()}
		</select>
	}
}

/// Feature badges in the current locale.
#[component]
pub fn FeatureBadges(
	/// Display locale.
	#[prop(into)]
	locale: Signal<Locale>,
) -> impl IntoView {
	view! {
		<ul class="feature-badges">
			{move || {
				let l = locale.get();
				Feature::ALL
					.into_iter()
					.map(|f| view! { <li>{i18n::feature(l, f)}</li> })
					.collect_view()
			}}
		</ul>
	}
}

/// Attribution link plus the feedback prompt.
#[component]
pub fn SiteFooter(
	/// Display locale.
	#[prop(into)]
	locale: Signal<Locale>,
) -> impl IntoView {
	let footer = move || i18n::footer_text(locale.get());

	view! {
		<footer class="site-footer">
			<a href=move || format!("{}/?utm_source={}", site_url(), footer().utm_source)>
				{move || footer().text}
				" "
				<strong>"CiteGraph"</strong>
				{move || footer().suffix.map(|s| format!(" {s}"))}
			</a>
			<p class="feedback">{move || i18n::feedback_link(locale.get())}</p>
			<p class="edit-link">{move || i18n::edit_text(locale.get())}</p>
		</footer>
	}
}
