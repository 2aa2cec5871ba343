//! In-memory artifact search used when the console runs without a registry
//! backend.

use crate::artifact::{
    ArtifactsCriteria, ArtifactsSearchResults, FilterField, Paging, SearchedArtifact,
};

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// Whether `artifact` matches the criteria's filter. An empty value matches everything.
pub fn matches(artifact: &SearchedArtifact, criteria: &ArtifactsCriteria) -> bool {
    let needle = criteria.value.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    match criteria.filter_type {
        FilterField::Name => {
            contains_ci(artifact.name.as_deref(), &needle)
                || contains_ci(Some(&artifact.id), &needle)
        }
        FilterField::Group => contains_ci(artifact.group_id.as_deref(), &needle),
        FilterField::Description => contains_ci(artifact.description.as_deref(), &needle),
        FilterField::Labels => artifact
            .labels
            .iter()
            .any(|label| label.to_lowercase().contains(&needle)),
    }
}

impl ArtifactsSearchResults {
    /// Filter, sort and page `catalog` the way the registry search endpoint does.
    pub fn search(
        catalog: &[SearchedArtifact],
        criteria: &ArtifactsCriteria,
        paging: &Paging,
    ) -> Self {
        let mut hits: Vec<&SearchedArtifact> =
            catalog.iter().filter(|a| matches(a, criteria)).collect();

        hits.sort_by(|a, b| {
            let ord = a
                .display_name()
                .to_lowercase()
                .cmp(&b.display_name().to_lowercase());
            if criteria.sort_ascending {
                ord
            } else {
                ord.reverse()
            }
        });

        let count = hits.len() as i64;
        let artifacts = hits
            .into_iter()
            .skip(paging.offset())
            .take(paging.page_size.max(0) as usize)
            .cloned()
            .collect();

        Self {
            artifacts,
            count,
            page: paging.page,
            page_size: paging.page_size,
        }
    }
}
