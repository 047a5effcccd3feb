//! Site configuration: canonical URL and sitemap/robots generation.

use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

/// Used when `SITE_URL` is not set.
pub const DEFAULT_SITE_URL: &str = "https://citegraph.org";

/// Routes listed in the sitemap.
pub const ROUTES: &[&str] = &["/"];

/// Priority written for every sitemap entry.
pub const SITEMAP_PRIORITY: f32 = 0.7;

/// Canonical site URL baked in at compile time.
pub fn site_url() -> &'static str {
	option_env!("SITE_URL").unwrap_or(DEFAULT_SITE_URL)
}

/// `<changefreq>` values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ChangeFreq {
	Always,
	Hourly,
	#[default]
	Daily,
	Weekly,
	Monthly,
	Yearly,
	Never,
}

impl ChangeFreq {
	/// Value as written in the sitemap.
	pub fn as_str(self) -> &'static str {
		match self {
			ChangeFreq::Always => "always",
			ChangeFreq::Hourly => "hourly",
			ChangeFreq::Daily => "daily",
			ChangeFreq::Weekly => "weekly",
			ChangeFreq::Monthly => "monthly",
			ChangeFreq::Yearly => "yearly",
			ChangeFreq::Never => "never",
		}
	}
}

/// Sitemap generation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SitemapConfig {
	/// Absolute base URL, no trailing slash.
	pub site_url: String,
	/// Change frequency hint for every route.
	pub changefreq: ChangeFreq,
	/// Whether `robots.txt` is produced alongside the sitemap.
	pub generate_robots_txt: bool,
	/// `<lastmod>` stamped on every route, omitted when `None`.
	pub lastmod: Option<String>,
}

impl Default for SitemapConfig {
	fn default() -> Self {
		Self::new(site_url())
	}
}

impl SitemapConfig {
	/// Daily sitemap with robots file for `site_url`.
	pub fn new(site_url: &str) -> Self {
		Self {
			site_url: site_url.trim_end_matches('/').to_owned(),
			changefreq: ChangeFreq::Daily,
			generate_robots_txt: true,
			lastmod: None,
		}
	}

	/// Read `SITE_URL` at runtime, falling back to the compiled-in URL, and
	/// stamp the current time as `lastmod`.
	pub fn from_env() -> Self {
		let mut config = match std::env::var("SITE_URL") {
			Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
			_ => Self::default(),
		};
		config.lastmod = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.ok()
			.map(|d| utc_timestamp(d.as_secs()));
		config
	}

	/// Absolute URL for a route.
	pub fn url_for(&self, route: &str) -> String {
		if route == "/" {
			self.site_url.clone()
		} else {
			format!("{}/{}", self.site_url, route.trim_start_matches('/'))
		}
	}

	/// Render `sitemap.xml` for `routes`.
	pub fn sitemap_xml(&self, routes: &[&str]) -> String {
		let mut xml = String::from(
			"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
			 <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
		);
		for route in routes {
			let _ = write!(
				xml,
				"<url><loc>{}</loc><changefreq>{}</changefreq><priority>{}</priority>",
				escape_xml(&self.url_for(route)),
				self.changefreq.as_str(),
				SITEMAP_PRIORITY
			);
			if let Some(lastmod) = &self.lastmod {
				let _ = write!(xml, "<lastmod>{}</lastmod>", escape_xml(lastmod));
			}
			xml.push_str("</url>\n");
		}
		xml.push_str("</urlset>\n");
		xml
	}

	/// Render `robots.txt`, or `None` when disabled.
	pub fn robots_txt(&self) -> Option<String> {
		self.generate_robots_txt.then(|| {
			format!(
				"# *\nUser-agent: *\nAllow: /\n\n# Host\nHost: {url}\n\n# Sitemaps\nSitemap: {url}/sitemap.xml\n",
				url = self.site_url
			)
		})
	}
}

/// W3C datetime in UTC, e.g. `2023-11-14T22:13:20Z`.
pub fn utc_timestamp(unix_secs: u64) -> String {
	let days = (unix_secs / 86_400) as i64;
	let secs = unix_secs % 86_400;

	// Civil date from days since 1970-01-01, proleptic Gregorian.
	let z = days + 719_468;
	let era = z.div_euclid(146_097);
	let doe = z.rem_euclid(146_097);
	let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
	let mp = (5 * doy + 2) / 153;
	let day = doy - (153 * mp + 2) / 5 + 1;
	let month = if mp < 10 { mp + 3 } else { mp - 9 };
	let year = yoe + era * 400 + i64::from(month <= 2);

	format!(
		"{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
		secs / 3_600,
		secs / 60 % 60,
		secs % 60
	)
}

fn escape_xml(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&apos;")
}
