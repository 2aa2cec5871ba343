use serde::{Deserialize, Serialize};
use std::fmt;

/// Artifact attribute the listing can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    #[default]
    Name,
    Group,
    Description,
    Labels,
}

/// All filter fields in dropdown order.
pub const ALL_FILTER_FIELDS: &[FilterField] = &[
    FilterField::Name,
    FilterField::Group,
    FilterField::Description,
    FilterField::Labels,
];

impl FilterField {
    /// Wire identifier, as sent in search criteria.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Group => "group",
            FilterField::Description => "description",
            FilterField::Labels => "labels",
        }
    }

    /// Human-readable name for the dropdown toggle and items.
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Group => "Group",
            FilterField::Description => "Description",
            FilterField::Labels => "Labels",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and sort description pushed to the page whenever the toolbar commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsCriteria {
    #[serde(rename = "type")]
    pub filter_type: FilterField,
    pub value: String,
    pub sort_ascending: bool,
}

impl Default for ArtifactsCriteria {
    fn default() -> Self {
        Self {
            filter_type: FilterField::Name,
            value: String::new(),
            sort_ascending: true,
        }
    }
}

/// Page selection owned by the artifacts page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page: i64,
    pub page_size: i64,
}

/// Page sizes offered by the per-page chooser.
pub const PAGE_SIZE_OPTIONS: &[i64] = &[10, 20, 50, 100];

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl Paging {
    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> usize {
        ((self.page.max(1) - 1) * self.page_size.max(0)) as usize
    }
}

/// One row of an artifact search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedArtifact {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_on: String,
    pub created_by: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default)]
    pub labels: Vec<String>,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl SearchedArtifact {
    /// Name shown in listings: the artifact name, else its id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A page of artifact search results plus the total match count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsSearchResults {
    pub artifacts: Vec<SearchedArtifact>,
    pub count: i64,
    pub page: i64,
    pub page_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filter_fields_serialize_as_their_wire_ids() {
        for field in ALL_FILTER_FIELDS {
            assert_eq!(
                serde_json::to_value(field).unwrap(),
                serde_json::json!(field.as_str())
            );
            assert_eq!(field.to_string(), field.as_str());
        }
    }

    #[test]
    fn unknown_wire_ids_are_rejected() {
        assert!(serde_json::from_str::<FilterField>(r#""owner""#).is_err());
    }

    #[test]
    fn criteria_serializes_with_wire_names() {
        let criteria = ArtifactsCriteria {
            filter_type: FilterField::Group,
            value: "foo".into(),
            sort_ascending: true,
        };
        assert_eq!(
            serde_json::to_value(&criteria).unwrap(),
            serde_json::json!({ "type": "group", "value": "foo", "sortAscending": true })
        );
    }

    #[test]
    fn default_criteria_matches_initial_toolbar() {
        let criteria = ArtifactsCriteria::default();
        assert_eq!(criteria.filter_type, FilterField::Name);
        assert!(criteria.value.is_empty());
        assert!(criteria.sort_ascending);
    }

    #[test]
    fn paging_offset_starts_at_zero() {
        let paging = Paging {
            page: 3,
            page_size: 20,
        };
        assert_eq!(paging.offset(), 40);
        assert_eq!(Paging { page: 0, page_size: 10 }.offset(), 0);
    }

    #[test]
    fn search_results_deserialize_from_registry_json() {
        let json = r#"{
            "artifacts": [{
                "id": "petstore",
                "groupId": "examples",
                "createdOn": "2020-07-01T12:00:00Z",
                "createdBy": "jdoe",
                "type": "OPENAPI",
                "state": "ENABLED"
            }],
            "count": 1,
            "page": 1,
            "pageSize": 10
        }"#;
        let results: ArtifactsSearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.artifacts[0].display_name(), "petstore");
        assert!(results.artifacts[0].labels.is_empty());
    }
}
