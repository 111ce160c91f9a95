use std::collections::BTreeMap;

use serde::Serialize;

/// Supported chart sites. Declaration order is registry order, and `Ord`
/// follows it, so an [`AggregateResult`] iterates sites in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SiteId {
    Melon,
    Genie,
    Vibe,
}

impl SiteId {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Melon => "Melon",
            Self::Genie => "Genie",
            Self::Vibe => "Vibe",
        }
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One chart entry. `publisher` and `agency` stay absent until album-detail
/// enrichment succeeds for the row, and are omitted from the serialized form
/// while absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackRecord {
    pub name: String,
    pub singer: String,
    pub album: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
}

/// Publisher/agency pair read from an album detail page. Fields are `None`
/// when the page had no matching detail row at all, and `Some("")` when a row
/// matched but the configured index was out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumDetail {
    pub publisher: Option<String>,
    pub agency: Option<String>,
}

/// Per-site chart listings, index-correlated with chart rank. Built fresh for
/// every request; every registered site has an entry even when its fetch
/// failed.
pub type AggregateResult = BTreeMap<SiteId, Vec<TrackRecord>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_record_serializes_pascal_case_and_omits_absent_fields() {
        let record = TrackRecord {
            name: "Song".to_string(),
            singer: "Artist".to_string(),
            album: "Album".to_string(),
            publisher: None,
            agency: None,
        };

        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["Name"], "Song");
        assert_eq!(value["Singer"], "Artist");
        assert_eq!(value["Album"], "Album");
        let keys: Vec<&String> = value.as_object().expect("object").keys().collect();
        assert_eq!(keys, ["Album", "Name", "Singer"]);
    }

    #[test]
    fn track_record_serializes_enriched_fields_when_present() {
        let record = TrackRecord {
            publisher: Some("Label".to_string()),
            agency: Some(String::new()),
            ..TrackRecord::default()
        };

        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["Publisher"], "Label");
        assert_eq!(value["Agency"], "");
    }

    #[test]
    fn aggregate_result_keys_serialize_as_site_names_in_registry_order() {
        let mut result = AggregateResult::new();
        result.insert(SiteId::Vibe, Vec::new());
        result.insert(SiteId::Genie, Vec::new());
        result.insert(SiteId::Melon, Vec::new());

        let json = serde_json::to_string(&result).expect("serialize");
        let melon = json.find("Melon").expect("Melon key");
        let genie = json.find("Genie").expect("Genie key");
        let vibe = json.find("Vibe").expect("Vibe key");
        assert!(melon < genie && genie < vibe);
    }
}
