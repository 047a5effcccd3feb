//! Locale-keyed UI strings.
//!
//! Coverage is uneven across locales. Every lookup falls back to
//! [`DEFAULT_LOCALE`], and feature badges fall back key by key.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Supported site locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
	/// English (default).
	#[default]
	EnUs,
	/// Spanish.
	EsEs,
	/// French.
	FrFr,
	/// Brazilian Portuguese.
	PtBr,
	/// Simplified Chinese.
	ZhCn,
	/// Japanese.
	Ja,
	/// Korean.
	Ko,
	/// Russian.
	Ru,
}

/// Locale used when a table has no entry for the requested one.
pub const DEFAULT_LOCALE: Locale = Locale::EnUs;

impl Locale {
	/// Every locale, in selector order.
	pub const ALL: [Locale; 8] = [
		Locale::EnUs,
		Locale::EsEs,
		Locale::FrFr,
		Locale::PtBr,
		Locale::ZhCn,
		Locale::Ja,
		Locale::Ko,
		Locale::Ru,
	];

	/// BCP 47 code.
	pub fn code(self) -> &'static str {
		match self {
			Locale::EnUs => "en-US",
			Locale::EsEs => "es-ES",
			Locale::FrFr => "fr-FR",
			Locale::PtBr => "pt-BR",
			Locale::ZhCn => "zh-CN",
			Locale::Ja => "ja",
			Locale::Ko => "ko",
			Locale::Ru => "ru",
		}
	}

	/// Name of the language in that language.
	pub fn native_name(self) -> &'static str {
		match self {
			Locale::EnUs => "English",
			Locale::EsEs => "Español",
			Locale::FrFr => "Français",
			Locale::PtBr => "Português Brasileiro",
			Locale::ZhCn => "简体中文",
			Locale::Ja => "日本語",
			Locale::Ko => "한국어",
			Locale::Ru => "Русский",
		}
	}
}

impl Locale {
	/// Best match for a browser language tag: an exact code first, then the
	/// first locale sharing the primary language subtag.
	pub fn negotiate(tag: &str) -> Option<Locale> {
		if let Ok(locale) = tag.parse() {
			return Some(locale);
		}
		let primary = tag.trim().split(['-', '_']).next()?;
		Locale::ALL.into_iter().find(|l| {
			l.code()
				.split('-')
				.next()
				.is_some_and(|p| p.eq_ignore_ascii_case(primary))
		})
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Returned when a locale code is not one of [`Locale::ALL`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
	type Err = UnknownLocale;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::ALL
			.into_iter()
			.find(|l| l.code().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownLocale(s.to_owned()))
	}
}

/// Feature badge keys, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
	/// Small bundle.
	Lightweight,
	/// Live updates.
	Realtime,
	/// Suspense support.
	Suspense,
	/// Paginated fetching.
	Pagination,
	/// Works with any backend.
	BackendAgnostic,
	/// SSR / SSG.
	RenderingStrategies,
	/// Typed API.
	TypeScript,
	/// Remote and local data.
	RemoteLocal,
}

impl Feature {
	/// Every feature badge.
	pub const ALL: [Feature; 8] = [
		Feature::Lightweight,
		Feature::Realtime,
		Feature::Suspense,
		Feature::Pagination,
		Feature::BackendAgnostic,
		Feature::RenderingStrategies,
		Feature::TypeScript,
		Feature::RemoteLocal,
	];
}

/// Footer attribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterText {
	/// `utm_source` query value for the attribution link.
	pub utm_source: &'static str,
	/// Text before the brand.
	pub text: &'static str,
	/// Text after the brand, where the grammar needs it.
	pub suffix: Option<&'static str>,
}

// Tables list the default locale first.
fn lookup<T: Copy>(table: &[(Locale, T)], locale: Locale) -> T {
	table
		.iter()
		.find(|(l, _)| *l == locale)
		.unwrap_or(&table[0])
		.1
}

const TITLE: &[(Locale, &str)] = &[
	(Locale::EnUs, "Transfomer family"),
	(Locale::EsEs, "Biblioteca CiteGraph Hooks para la obtención de datos"),
	(Locale::FrFr, "Bibliothèque de CiteGraph Hooks pour la récupération de données"),
	(Locale::PtBr, "CiteGraph Hooks para Data Fetching"),
	(Locale::ZhCn, "用于数据请求的 CiteGraph Hooks 库"),
	(Locale::Ja, "データ取得のための CiteGraph Hooks ライブラリ"),
	(Locale::Ko, "데이터 가져오기를 위한 CiteGraph Hooks"),
	(Locale::Ru, "CiteGraph хуки для выборки данных"),
];

const HEAD_DESCRIPTION: &[(Locale, &str)] = &[
	(
		Locale::EnUs,
		"CiteGraph is a CiteGraph Hooks library for data fetching. CiteGraph first returns the data from cache (stale), then sends the fetch request (revalidate), and finally comes with the up-to-date data again.",
	),
	(
		Locale::FrFr,
		"CiteGraph est une libraire de CiteGraph Hooks pour récupérer des données. CiteGraph retourne d'abord les données en cache (stale), puis envoie la requête (revalidate), et enfin retourne les données à jour.",
	),
	(
		Locale::PtBr,
		"CiteGraph é uma biblioteca CiteGraph Hooks para data fetching. CiteGraph primeiro retorna os dados do cache (stale), então envia a requisição de busca (revalidate), e finalmente vem com os dados atualizados novamente.",
	),
	(
		Locale::Ru,
		"CiteGraph — это библиотека CiteGraph хуков для получения данных. CiteGraph сначала возвращает данные из кеша (устаревшие), затем отправляет запрос на выборку (ревалидация) и, наконец, снова получает актуальные данные.",
	),
];

const FEEDBACK_LINK: &[(Locale, &str)] = &[
	(Locale::EnUs, "Question? Give us feedback →"),
	(Locale::EsEs, "¿Dudas? Danos tu feedback →"),
	(Locale::FrFr, "Question? Donnez-nous votre avis →"),
	(Locale::PtBr, "Dúvidas? Nos dê feedback →"),
	(Locale::ZhCn, "有疑问？给我们反馈 →"),
	(Locale::Ko, "질문이 있으신가요? 피드백을 남겨주세요 →"),
	(Locale::Ru, "Вопросы? Оставьте нам отзыв →"),
];

const EDIT_TEXT: &[(Locale, &str)] = &[
	(Locale::EnUs, "Edit this page on GitHub →"),
	(Locale::EsEs, "Edite esta página en GitHub →"),
	(Locale::FrFr, "Modifier cette page sur GitHub →"),
	(Locale::PtBr, "Edite essa página no GitHub →"),
	(Locale::ZhCn, "在 GitHub 上编辑本页 →"),
	(Locale::Ja, "Github で編集する →"),
	(Locale::Ko, "Github에서 이 페이지 편집하기 →"),
	(Locale::Ru, "Редактировать эту страницу на GitHub →"),
];

const FOOTER: &[(Locale, FooterText)] = &[
	(Locale::EnUs, footer("citegraph", "Powered by", None)),
	(Locale::EsEs, footer("citegraph_es-es", "Desarrollado por", None)),
	(Locale::FrFr, footer("citegraph_fr-fr", "Propulsé par", None)),
	(Locale::PtBr, footer("citegraph_pt-br", "Desenvolvido por", None)),
	(Locale::ZhCn, footer("citegraph_zh-cn", "由", Some("驱动"))),
	(Locale::Ja, footer("citegraph_ja", "提供", None)),
	(Locale::Ko, footer("citegraph_ko", "Powered by", None)),
	(Locale::Ru, footer("citegraph_ru", "Работает на", None)),
];

const fn footer(
	utm_source: &'static str,
	text: &'static str,
	suffix: Option<&'static str>,
) -> FooterText {
	FooterText {
		utm_source,
		text,
		suffix,
	}
}

const TABLE_OF_CONTENTS_TITLE: &[(Locale, &str)] = &[
	(Locale::EnUs, "On This Page"),
	(Locale::EsEs, "En esta página"),
	(Locale::FrFr, "Sur cette page"),
	(Locale::PtBr, "Nessa página"),
	(Locale::Ru, "На этой странице"),
];

const SEARCH_PLACEHOLDER: &[(Locale, &str)] = &[
	(Locale::EnUs, "Search documentation..."),
	(Locale::EsEs, "Buscar documento..."),
	(Locale::FrFr, "Rechercher dans la doc..."),
	(Locale::PtBr, "Buscar documentação..."),
	(Locale::Ko, "문서 검색..."),
	(Locale::Ru, "Искать в документации..."),
];

const GIT_TIMESTAMP: &[(Locale, &str)] = &[
	(Locale::EnUs, "Last updated on"),
	(Locale::FrFr, "Dernière mise à jour le"),
	(Locale::Ru, "Последнее обновление"),
];

/// Feature labels per locale; `None` means the locale has no translation.
fn feature_entry(locale: Locale, feature: Feature) -> Option<&'static str> {
	use Feature::*;
	match (locale, feature) {
		(Locale::EnUs, Lightweight) => Some("Lightweight"),
		(Locale::EnUs, Realtime) => Some("Realtime"),
		(Locale::EnUs, Suspense) => Some("Suspense"),
		(Locale::EnUs, Pagination) => Some("Pagination"),
		(Locale::EnUs, BackendAgnostic) => Some("Backend Agnostic"),
		(Locale::EnUs, RenderingStrategies) => Some("SSR / SSG Ready"),
		(Locale::EnUs, TypeScript) => Some("TypeScript Ready"),
		(Locale::EnUs, RemoteLocal) => Some("Remote + Local"),

		(Locale::FrFr, Lightweight) => Some("Léger"),
		(Locale::FrFr, Realtime) => Some("Temps réel"),
		(Locale::FrFr, BackendAgnostic) => Some("Indépendant du Backend"),

		(Locale::PtBr, Lightweight) => Some("Leve"),
		(Locale::PtBr, Realtime) => Some("Tempo-real"),
		(Locale::PtBr, Suspense) => Some("Suspense"),
		(Locale::PtBr, Pagination) => Some("Paginação"),
		(Locale::PtBr, BackendAgnostic) => Some("Backend Agnóstico"),
		(Locale::PtBr, RenderingStrategies) => Some("Pronto para SSR / SSG"),
		(Locale::PtBr, TypeScript) => Some("Pronto para TypeScript"),
		(Locale::PtBr, RemoteLocal) => Some("Remoto + Local"),

		(Locale::Ru, Lightweight) => Some("Лёгкий"),
		(Locale::Ru, Realtime) => Some("В реальном времени"),
		(Locale::Ru, Suspense) => Some("Задержка"),
		(Locale::Ru, Pagination) => Some("Пагинация"),
		(Locale::Ru, BackendAgnostic) => Some("Бэкэнд-независимый"),
		(Locale::Ru, RenderingStrategies) => Some("SSR / SSG"),
		(Locale::Ru, TypeScript) => Some("TypeScript"),
		(Locale::Ru, RemoteLocal) => Some("Удалённо + Локально"),

		_ => None,
	}
}

/// Site title.
pub fn title(locale: Locale) -> &'static str {
	lookup(TITLE, locale)
}

/// `<meta name="description">` text.
pub fn head_description(locale: Locale) -> &'static str {
	lookup(HEAD_DESCRIPTION, locale)
}

/// Feedback link label.
pub fn feedback_link(locale: Locale) -> &'static str {
	lookup(FEEDBACK_LINK, locale)
}

/// "Edit this page" link label.
pub fn edit_text(locale: Locale) -> &'static str {
	lookup(EDIT_TEXT, locale)
}

/// Footer attribution.
pub fn footer_text(locale: Locale) -> FooterText {
	lookup(FOOTER, locale)
}

/// Table-of-contents heading.
pub fn table_of_contents_title(locale: Locale) -> &'static str {
	lookup(TABLE_OF_CONTENTS_TITLE, locale)
}

/// Search box placeholder.
pub fn search_placeholder(locale: Locale) -> &'static str {
	lookup(SEARCH_PLACEHOLDER, locale)
}

/// Label in front of the last-updated date.
pub fn git_timestamp(locale: Locale) -> &'static str {
	lookup(GIT_TIMESTAMP, locale)
}

/// Badge label for `feature`, falling back to the default locale's label.
pub fn feature(locale: Locale, feature: Feature) -> &'static str {
	feature_entry(locale, feature)
		.or_else(|| feature_entry(DEFAULT_LOCALE, feature))
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_round_trip_through_parse() {
		for locale in Locale::ALL {
			assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
		}
	}

	#[test]
	fn parse_ignores_case_and_whitespace() {
		assert_eq!(" PT-br ".parse::<Locale>(), Ok(Locale::PtBr));
	}

	#[test]
	fn negotiate_falls_back_to_primary_language() {
		assert_eq!(Locale::negotiate("fr-CA"), Some(Locale::FrFr));
		assert_eq!(Locale::negotiate("ja-JP"), Some(Locale::Ja));
		assert_eq!(Locale::negotiate("zh_TW"), Some(Locale::ZhCn));
		assert_eq!(Locale::negotiate("ko"), Some(Locale::Ko));
		assert_eq!(Locale::negotiate("de-DE"), None);
	}

	#[test]
	fn unknown_code_is_an_error() {
		assert_eq!(
			"de-DE".parse::<Locale>(),
			Err(UnknownLocale("de-DE".into()))
		);
	}

	#[test]
	fn every_table_starts_with_the_default_locale() {
		for table in [
			TITLE,
			HEAD_DESCRIPTION,
			FEEDBACK_LINK,
			EDIT_TEXT,
			TABLE_OF_CONTENTS_TITLE,
			SEARCH_PLACEHOLDER,
			GIT_TIMESTAMP,
		] {
			assert_eq!(table[0].0, DEFAULT_LOCALE);
		}
		assert_eq!(FOOTER[0].0, DEFAULT_LOCALE);
		for f in Feature::ALL {
			assert!(feature_entry(DEFAULT_LOCALE, f).is_some());
		}
	}

	#[test]
	fn missing_strings_fall_back_to_english() {
		assert_eq!(git_timestamp(Locale::Ja), "Last updated on");
		assert_eq!(head_description(Locale::ZhCn), head_description(Locale::EnUs));
		assert_eq!(feedback_link(Locale::Ja), "Question? Give us feedback →");
	}

	#[test]
	fn page_chrome_falls_back_per_table() {
		assert_eq!(edit_text(Locale::Ja), "Github で編集する →");
		assert_eq!(edit_text(Locale::Ko), "Github에서 이 페이지 편집하기 →");
		assert_eq!(table_of_contents_title(Locale::Ru), "На этой странице");
		assert_eq!(table_of_contents_title(Locale::Ja), "On This Page");
		assert_eq!(table_of_contents_title(Locale::ZhCn), "On This Page");
	}

	#[test]
	fn translated_strings_win() {
		assert_eq!(git_timestamp(Locale::FrFr), "Dernière mise à jour le");
		assert_eq!(search_placeholder(Locale::Ko), "문서 검색...");
	}

	#[test]
	fn features_fall_back_per_key() {
		assert_eq!(feature(Locale::FrFr, Feature::Lightweight), "Léger");
		assert_eq!(feature(Locale::FrFr, Feature::Suspense), "Suspense");
		assert_eq!(feature(Locale::FrFr, Feature::TypeScript), "TypeScript Ready");
		assert_eq!(feature(Locale::Ja, Feature::Pagination), "Pagination");
	}

	#[test]
	fn chinese_footer_has_suffix() {
		let footer = footer_text(Locale::ZhCn);
		assert_eq!(footer.text, "由");
		assert_eq!(footer.suffix, Some("驱动"));
		assert_eq!(footer_text(Locale::EnUs).suffix, None);
	}
}
