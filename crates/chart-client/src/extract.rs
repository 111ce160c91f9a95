//! Chart page extraction: locate repeated row elements and pull the base
//! track fields plus the raw album-detail reference out of each one.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::profile::SiteProfile;
use crate::types::{SiteId, TrackRecord};

/// One extracted chart row. `detail_ref` is the raw attribute value the
/// album id is later derived from; which attribute carries it depends on the
/// site.
#[derive(Debug, Clone, Default)]
pub struct ChartRow {
    pub record: TrackRecord,
    pub detail_ref: Option<String>,
}

/// Extract all chart rows from a fetched page, in document order. A row's
/// position in the returned vec is its chart rank. Missing field matches
/// degrade to empty strings; they never fail the page.
#[must_use]
pub fn extract_chart(html: &str, profile: &SiteProfile) -> Vec<ChartRow> {
    let document = Html::parse_document(html);
    let Some(rows) = parse_selector(&profile.row_selector) else {
        return Vec::new();
    };

    document
        .select(&rows)
        .map(|row| extract_row(row, profile))
        .collect()
}

/// Per-site field extraction. The set of sites is closed: each arm encodes
/// how that site lays out its text fields and which attribute carries the
/// album-detail reference.
fn extract_row(row: ElementRef<'_>, profile: &SiteProfile) -> ChartRow {
    let mut out = ChartRow::default();

    match profile.site {
        SiteId::Melon => {
            // Song info text is nested under a per-row wrapper; the detail
            // href is read from the row root, where the album anchor repeats.
            let scope = profile
                .row_scope
                .as_deref()
                .and_then(parse_selector)
                .and_then(|sel| row.select(&sel).next());
            if let Some(scope) = scope {
                out.record.name = select_text(scope, &profile.name_selector);
                out.record.singer = select_text(scope, &profile.singer_selector);
                out.record.album = select_text(scope, &profile.album_selector);
            }
            out.detail_ref = select_attr(row, &profile.album_selector, "href");
        }
        SiteId::Genie => {
            out.record.name = select_text(row, &profile.name_selector).trim().to_string();
            out.record.singer = select_text(row, &profile.singer_selector);
            out.record.album = select_text(row, &profile.album_selector);
            out.detail_ref = select_attr(row, &profile.album_selector, "onclick");
        }
        SiteId::Vibe => {
            // Text fields stay empty for this site; only the album element's
            // src attribute is usable, and it carries the album id.
            out.detail_ref = select_attr(row, &profile.album_selector, "src");
        }
    }

    out
}

/// Parse a profile selector. Profiles are validated by construction, so a
/// failure here means a malformed profile; log it and degrade.
pub(crate) fn parse_selector(raw: &str) -> Option<Selector> {
    match Selector::parse(raw) {
        Ok(selector) => Some(selector),
        Err(error) => {
            warn!(selector = raw, error = %error, "invalid selector in site profile");
            None
        }
    }
}

/// Text content of the first match under `root`, or empty.
fn select_text(root: ElementRef<'_>, raw: &str) -> String {
    parse_selector(raw)
        .and_then(|selector| root.select(&selector).next())
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

/// Attribute value of the first match under `root`.
fn select_attr(root: ElementRef<'_>, raw: &str, attr: &str) -> Option<String> {
    let selector = parse_selector(raw)?;
    root.select(&selector)
        .next()?
        .value()
        .attr(attr)
        .map(str::to_string)
}
