//! Declarative per-site configuration: chart URLs, row/field selectors, and
//! the album-detail lookup for each supported site.
//!
//! Supporting a new site means adding one profile here plus one arm in the
//! row-extraction dispatch in [`crate::extract`]; nothing else changes.

use crate::types::SiteId;

/// Selector/URL configuration for one chart site. Pure data, fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub site: SiteId,
    pub chart_url: String,
    /// Matches one element per chart row, in document order.
    pub row_selector: String,
    /// Extra wrapper under the row that field selectors are scoped to.
    /// Only Melon nests its song info this way.
    pub row_scope: Option<String>,
    pub name_selector: String,
    pub singer_selector: String,
    pub album_selector: String,
    pub detail: AlbumDetailProfile,
}

/// Where and how to read publisher/agency from an album detail page.
#[derive(Debug, Clone)]
pub struct AlbumDetailProfile {
    /// The album id is appended to this prefix verbatim.
    pub url_prefix: String,
    pub row_selector: String,
    /// Candidate value elements within a detail row; publisher and agency
    /// are read positionally from the matches.
    pub field_selector: String,
    pub publisher_index: usize,
    pub agency_index: usize,
}

/// The production site registry: Melon, Genie, Vibe.
#[must_use]
pub fn default_profiles() -> Vec<SiteProfile> {
    vec![
        SiteProfile {
            site: SiteId::Melon,
            chart_url: "https://www.melon.com/chart/index.htm".to_string(),
            row_selector: "div.service_list_song.type02.d_song_list table tbody tr#lst50.lst50"
                .to_string(),
            row_scope: Some("td div.wrap div.wrap_song_info".to_string()),
            name_selector: "div.ellipsis.rank01 span a".to_string(),
            singer_selector: "div.ellipsis.rank02 span.checkEllipsis".to_string(),
            album_selector: "div.ellipsis.rank03 a".to_string(),
            detail: AlbumDetailProfile {
                url_prefix: "https://www.melon.com/album/detail.htm?albumId=".to_string(),
                row_selector: "div.section_info div.wrap_info div.entry div.meta dl.list"
                    .to_string(),
                field_selector: "dd".to_string(),
                publisher_index: 2,
                agency_index: 3,
            },
        },
        SiteProfile {
            site: SiteId::Genie,
            chart_url: "https://www.genie.co.kr/chart/top200".to_string(),
            row_selector: "div.music-list-wrap table.list-wrap tbody tr.list td.info".to_string(),
            row_scope: None,
            name_selector: "a.title.ellipsis".to_string(),
            singer_selector: "a.artist.ellipsis".to_string(),
            album_selector: "a.albumtitle.ellipsis".to_string(),
            detail: AlbumDetailProfile {
                url_prefix: "https://www.genie.co.kr/detail/albumInfo?axnm=".to_string(),
                row_selector: "div.album-detail-infos div.info-zone ul.info-data".to_string(),
                field_selector: "span.value".to_string(),
                publisher_index: 2,
                agency_index: 3,
            },
        },
        SiteProfile {
            site: SiteId::Vibe,
            chart_url: "https://vibe.naver.com/chart/total".to_string(),
            row_selector: "div.track_section div div.tracklist table tbody tr".to_string(),
            row_scope: None,
            name_selector: "td.song div.title_badge_wrap sap.inner_cell a.link_text".to_string(),
            singer_selector: "td.artist span.innder span span a.link_artist span.text".to_string(),
            album_selector: "td.album a.link".to_string(),
            detail: AlbumDetailProfile {
                url_prefix: "https://vibe.naver.com/album/".to_string(),
                row_selector:
                    "div.track_section div div.tracklist table tbody tr td.thumb div.inner"
                        .to_string(),
                field_selector: "img.img_thumb".to_string(),
                publisher_index: 2,
                agency_index: 3,
            },
        },
    ]
}
