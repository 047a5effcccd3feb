//! Writes `sitemap.xml` and `robots.txt` for the built site.
//!
//! Usage: `sitemap [OUT_DIR]` (default `dist`). `SITE_URL` overrides the
//! canonical URL.
#![allow(unused_crate_dependencies)]

use std::path::PathBuf;
use std::{env, fs, io};

use citegraph_site::config::{ROUTES, SitemapConfig};

fn main() -> io::Result<()> {
	let out_dir = env::args()
		.nth(1)
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from("dist"));
	fs::create_dir_all(&out_dir)?;

	let config = SitemapConfig::from_env();
	let sitemap = out_dir.join("sitemap.xml");
	fs::write(&sitemap, config.sitemap_xml(ROUTES))?;
	println!("wrote {}", sitemap.display());

	if let Some(robots) = config.robots_txt() {
		let path = out_dir.join("robots.txt");
		fs::write(&path, robots)?;
		println!("wrote {}", path.display());
	}
	Ok(())
}
