//! Browser entry point for the CiteGraph site.
#![allow(unused_crate_dependencies)]

use citegraph_site::{App, init_logging};
use leptos::mount::mount_to_body;

fn main() {
	init_logging();
	mount_to_body(App);
}
