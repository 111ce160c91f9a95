//! Album-detail enrichment: derive an album id from a raw chart-row
//! reference, fetch the detail page, and read publisher/agency out of it.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::error::DetailError;
use crate::extract::parse_selector;
use crate::fetch::PageFetcher;
use crate::profile::AlbumDetailProfile;
use crate::types::AlbumDetail;

static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit regex"));

/// Derive the album id from a raw detail reference by concatenating every
/// digit in order of appearance: `"album123view"` becomes `"123"`. Non-digit
/// characters are discarded, not used as separators.
#[must_use]
pub fn derive_album_id(reference: &str) -> Option<String> {
    let digits: String = DIGIT_RE
        .find_iter(reference)
        .map(|m| m.as_str())
        .collect();

    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Fetch and extract publisher/agency for one chart row. Each failure mode
/// maps to one [`DetailError`] variant; callers log it and leave the row's
/// base fields untouched.
pub async fn fetch_album_detail(
    fetcher: &PageFetcher,
    detail_ref: Option<&str>,
    profile: &AlbumDetailProfile,
) -> Result<AlbumDetail, DetailError> {
    let reference = detail_ref
        .filter(|reference| !reference.is_empty())
        .ok_or(DetailError::MissingReference)?;

    let album_id = derive_album_id(reference)
        .ok_or_else(|| DetailError::MissingIdentifier(reference.to_string()))?;

    let body = fetcher
        .fetch_page(&profile.url_prefix, Some(&album_id))
        .await
        .ok_or_else(|| DetailError::DetailFetchFailed(album_id.clone()))?;

    Ok(extract_album_detail(&body, profile))
}

/// Positional extraction from a fetched detail page: within each detail row,
/// elements matching the field selector form an ordered candidate list, and
/// publisher/agency are read from fixed indices into it. An out-of-range
/// index yields an empty string. When several rows match, the last one wins.
#[must_use]
pub fn extract_album_detail(html: &str, profile: &AlbumDetailProfile) -> AlbumDetail {
    let mut detail = AlbumDetail::default();

    let document = Html::parse_document(html);
    let (Some(rows), Some(fields)) = (
        parse_selector(&profile.row_selector),
        parse_selector(&profile.field_selector),
    ) else {
        return detail;
    };

    for row in document.select(&rows) {
        let values: Vec<ElementRef<'_>> = row.select(&fields).collect();
        detail.publisher = Some(value_at(&values, profile.publisher_index));
        detail.agency = Some(value_at(&values, profile.agency_index));
    }

    detail
}

fn value_at(values: &[ElementRef<'_>], index: usize) -> String {
    values
        .get(index)
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_profile() -> AlbumDetailProfile {
        AlbumDetailProfile {
            url_prefix: "http://chart.test/album/".to_string(),
            row_selector: "dl.meta".to_string(),
            field_selector: "dd".to_string(),
            publisher_index: 2,
            agency_index: 3,
        }
    }

    #[test]
    fn album_id_concatenates_digits_in_order() {
        assert_eq!(derive_album_id("album123view").as_deref(), Some("123"));
        assert_eq!(
            derive_album_id("javascript:albumInfo(10423715)").as_deref(),
            Some("10423715")
        );
        assert_eq!(
            derive_album_id("https://img.test/1a2b/3.jpg").as_deref(),
            Some("123")
        );
    }

    #[test]
    fn album_id_requires_at_least_one_digit() {
        assert_eq!(derive_album_id("no-digits-here"), None);
        assert_eq!(derive_album_id(""), None);
    }

    #[test]
    fn publisher_and_agency_come_from_configured_indices() {
        let html = r#"
            <dl class="meta">
              <dd>2024.01.01</dd>
              <dd>Dance</dd>
              <dd>Some Publisher</dd>
              <dd>Some Agency</dd>
            </dl>
        "#;

        let detail = extract_album_detail(html, &detail_profile());
        assert_eq!(detail.publisher.as_deref(), Some("Some Publisher"));
        assert_eq!(detail.agency.as_deref(), Some("Some Agency"));
    }

    #[test]
    fn short_candidate_list_degrades_to_empty_strings() {
        let html = r#"<dl class="meta"><dd>2024.01.01</dd><dd>Dance</dd><dd>Only Publisher</dd></dl>"#;

        let detail = extract_album_detail(html, &detail_profile());
        assert_eq!(detail.publisher.as_deref(), Some("Only Publisher"));
        assert_eq!(detail.agency.as_deref(), Some(""));
    }

    #[test]
    fn page_without_detail_rows_leaves_fields_absent() {
        let detail = extract_album_detail("<html><body></body></html>", &detail_profile());
        assert_eq!(detail.publisher, None);
        assert_eq!(detail.agency, None);
    }

    #[test]
    fn later_detail_rows_overwrite_earlier_ones() {
        let html = r#"
            <dl class="meta">
              <dd>a</dd><dd>b</dd><dd>First Publisher</dd><dd>First Agency</dd>
            </dl>
            <dl class="meta">
              <dd>a</dd><dd>b</dd><dd>Last Publisher</dd><dd>Last Agency</dd>
            </dl>
        "#;

        let detail = extract_album_detail(html, &detail_profile());
        assert_eq!(detail.publisher.as_deref(), Some("Last Publisher"));
        assert_eq!(detail.agency.as_deref(), Some("Last Agency"));
    }

    #[tokio::test]
    async fn missing_reference_fails_before_any_fetch() {
        let fetcher = PageFetcher::new();
        let profile = detail_profile();

        let absent = fetch_album_detail(&fetcher, None, &profile).await;
        assert_eq!(absent, Err(DetailError::MissingReference));

        let empty = fetch_album_detail(&fetcher, Some(""), &profile).await;
        assert_eq!(empty, Err(DetailError::MissingReference));
    }

    #[tokio::test]
    async fn digitless_reference_fails_with_missing_identifier() {
        let fetcher = PageFetcher::new();
        let outcome = fetch_album_detail(&fetcher, Some("no-id-at-all"), &detail_profile()).await;
        assert_eq!(
            outcome,
            Err(DetailError::MissingIdentifier("no-id-at-all".to_string()))
        );
    }
}
