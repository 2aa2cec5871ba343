use dioxus::prelude::*;
use shared_types::{ArtifactsCriteria, ArtifactsSearchResults, Feature, Paging, SearchedArtifact};
use shared_ui::components::{Button, ButtonVariant};

use super::catalog::sample_artifacts;
use super::toolbar::ArtifactsPageToolbar;
use crate::gates::IfFeature;

/// Artifact listing: the toolbar plus the current page of matches.
#[component]
pub fn ArtifactsPage() -> Element {
    let catalog = use_hook(sample_artifacts);
    let mut criteria = use_signal(ArtifactsCriteria::default);
    let mut paging = use_signal(Paging::default);
    let mut upload_requested = use_signal(|| false);

    let results = use_memo(move || {
        ArtifactsSearchResults::search(&catalog, &criteria.read(), &paging.read())
    });

    let handle_change = move |next: ArtifactsCriteria| {
        tracing::debug!("[ArtifactsPage] Criteria changed: {next:?}");
        criteria.set(next);
        paging.write().page = 1;
    };

    let handle_set_page = move |page: i64| {
        paging.write().page = page;
    };

    let handle_per_page = move |page_size: i64| {
        paging.set(Paging { page: 1, page_size });
    };

    let handle_upload = move |_| {
        tracing::info!("[ArtifactsPage] Upload artifact requested.");
        upload_requested.set(true);
    };

    let current = results.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./artifacts.css") }
        div { class: "artifacts-page",
            IfFeature { feature: Feature::Breadcrumbs,
                nav { class: "breadcrumbs", aria_label: "Breadcrumb",
                    span { "Registry" }
                    span { class: "breadcrumbs-separator", "/" }
                    span { class: "breadcrumbs-current", "Artifacts" }
                }
            }
            h1 { class: "artifacts-title", "Artifacts" }

            ArtifactsPageToolbar {
                artifacts: current.clone(),
                paging: *paging.read(),
                on_change: handle_change,
                on_set_page: handle_set_page,
                on_per_page_select: handle_per_page,
                on_upload_artifact: handle_upload,
            }

            if *upload_requested.read() {
                div { class: "artifacts-notice", role: "status",
                    span { "Uploading requires a connected registry." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| upload_requested.set(false),
                        "Dismiss"
                    }
                }
            }

            ArtifactList { artifacts: current.artifacts }
        }
    }
}

#[component]
fn ArtifactList(artifacts: Vec<SearchedArtifact>) -> Element {
    if artifacts.is_empty() {
        return rsx! {
            div { class: "artifacts-empty",
                h2 { "No artifacts found" }
                p { "No artifacts match your filter settings. Change your filter or perhaps upload a new artifact." }
            }
        };
    }

    rsx! {
        ul { class: "artifact-list",
            for artifact in artifacts {
                li { key: "{artifact.id}", class: "artifact-row",
                    div { class: "artifact-heading",
                        span { class: "artifact-name", "{artifact.display_name()}" }
                        if let Some(group) = &artifact.group_id {
                            span { class: "artifact-group", "{group}" }
                        }
                        span { class: "artifact-type", "{artifact.artifact_type}" }
                    }
                    if let Some(description) = &artifact.description {
                        p { class: "artifact-description", "{description}" }
                    }
                    div { class: "artifact-labels",
                        for label in artifact.labels.iter() {
                            span { key: "{label}", class: "artifact-label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::FeatureFlags;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn first_page_lists_sample_artifacts_sorted_by_name() {
        fn app() -> Element {
            rsx! { ArtifactsPage {} }
        }
        let html = render(app);
        let total = sample_artifacts().len();
        assert!(html.contains(&format!(">{total}</b>")), "{html}");
        let account = html.find("AccountSnapshot").expect("first artifact listed");
        let address = html.find(">Address<").expect("second artifact listed");
        assert!(account < address, "{html}");
        assert!(!html.contains("Petstore API"), "petstore is on page 2: {html}");
    }

    #[test]
    fn breadcrumbs_follow_feature_flag() {
        fn with_breadcrumbs() -> Element {
            use_context_provider(|| FeatureFlags {
                breadcrumbs: true,
                ..FeatureFlags::default()
            });
            rsx! { ArtifactsPage {} }
        }
        fn without_breadcrumbs() -> Element {
            rsx! { ArtifactsPage {} }
        }
        assert!(render(with_breadcrumbs).contains("breadcrumbs-current"));
        assert!(!render(without_breadcrumbs).contains("breadcrumbs-current"));
    }

    #[test]
    fn empty_list_explains_itself() {
        fn app() -> Element {
            rsx! { ArtifactList { artifacts: Vec::new() } }
        }
        assert!(render(app).contains("No artifacts found"));
    }
}
