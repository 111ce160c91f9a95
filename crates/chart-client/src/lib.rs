//! Fetch and aggregate music chart data from the supported sites.
//!
//! The pipeline per site: fetch the chart page, extract ranked rows, then
//! enrich every row with publisher/agency from its album detail page. All
//! failures degrade: a failed site contributes an empty list, a failed row
//! keeps its base fields.

pub mod detail;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod profile;
pub mod types;

pub use error::DetailError;
pub use fetch::PageFetcher;
pub use profile::{default_profiles, AlbumDetailProfile, SiteProfile};
pub use types::{AggregateResult, AlbumDetail, SiteId, TrackRecord};

use futures::future::join_all;
use tracing::{instrument, warn};

use extract::extract_chart;

/// Aggregating facade over the per-site chart pipeline. Holds no per-request
/// state; every [`aggregate`](Self::aggregate) call builds its result from
/// scratch.
#[derive(Debug, Clone)]
pub struct ChartService {
    fetcher: PageFetcher,
    profiles: Vec<SiteProfile>,
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartService {
    /// Service over the production site registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_profiles(default_profiles())
    }

    /// Service over a custom profile set.
    #[must_use]
    pub fn with_profiles(profiles: Vec<SiteProfile>) -> Self {
        Self {
            fetcher: PageFetcher::new(),
            profiles,
        }
    }

    /// Fetch and enrich every registered site's chart. The returned map has
    /// one entry per registered site; a site whose chart fetch failed keeps
    /// an empty list rather than dropping out.
    #[instrument(name = "chart_service.aggregate", skip(self))]
    pub async fn aggregate(&self) -> AggregateResult {
        let charts = join_all(self.profiles.iter().map(|profile| self.site_chart(profile))).await;
        self.profiles
            .iter()
            .zip(charts)
            .map(|(profile, records)| (profile.site, records))
            .collect()
    }

    /// One site's chart with per-row detail enrichment. Rows are extracted
    /// synchronously in document order before any detail fetch starts, and
    /// each enrichment writes into its own pre-assigned slot, so detail
    /// completion order cannot reorder ranks.
    #[instrument(
        name = "chart_service.site_chart",
        skip(self, profile),
        fields(site = %profile.site)
    )]
    async fn site_chart(&self, profile: &SiteProfile) -> Vec<TrackRecord> {
        let Some(body) = self.fetcher.fetch_page(&profile.chart_url, None).await else {
            warn!(site = %profile.site, "chart page fetch failed; leaving site empty");
            return Vec::new();
        };

        let rows = extract_chart(&body, profile);
        let mut records: Vec<TrackRecord> = rows.iter().map(|row| row.record.clone()).collect();

        let lookups = rows.iter().enumerate().map(|(index, row)| async move {
            let outcome =
                detail::fetch_album_detail(&self.fetcher, row.detail_ref.as_deref(), &profile.detail)
                    .await;
            (index, outcome)
        });

        for (index, outcome) in join_all(lookups).await {
            match outcome {
                Ok(found) => {
                    if let Some(record) = records.get_mut(index) {
                        record.publisher = found.publisher;
                        record.agency = found.agency;
                    }
                }
                Err(error) => {
                    warn!(
                        site = %profile.site,
                        index,
                        error = %error,
                        "album detail enrichment failed"
                    );
                }
            }
        }

        records
    }
}
