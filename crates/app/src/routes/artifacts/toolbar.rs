use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowDownAZ, LdArrowDownZA, LdSearch};
use dioxus_free_icons::Icon;
use shared_types::{
    ArtifactsCriteria, ArtifactsSearchResults, Feature, FilterField, Paging, ALL_FILTER_FIELDS,
    PAGE_SIZE_OPTIONS,
};
use shared_ui::components::{
    Button, ButtonVariant, ChoiceDropdown, Input, Pagination, SearchForm, Toolbar, ToolbarButton,
    ToolbarContent, ToolbarItem,
};

use super::toolbar_state::{ToolbarAction, ToolbarState};
use crate::gates::{IfAuth, IfFeature};

/// Apply `action` to the toolbar state and forward committed criteria to `on_change`.
fn dispatch_action(
    mut state: Signal<ToolbarState>,
    on_change: Option<EventHandler<ArtifactsCriteria>>,
    action: ToolbarAction,
) {
    let published = state.write().apply(action);
    if let (Some(criteria), Some(handler)) = (published, on_change) {
        handler.call(criteria);
    }
}

/// Toolbar of the artifacts page: filter, sort, upload and pagination.
///
/// Filter and sort changes are reported through `on_change`; paging and
/// upload requests are relayed to their callbacks unchanged.
#[component]
pub fn ArtifactsPageToolbar(
    #[props(default)] artifacts: Option<ArtifactsSearchResults>,
    paging: Paging,
    #[props(default)] on_change: Option<EventHandler<ArtifactsCriteria>>,
    #[props(default)] on_per_page_select: EventHandler<i64>,
    #[props(default)] on_set_page: EventHandler<i64>,
    #[props(default)] on_upload_artifact: EventHandler<()>,
) -> Element {
    let state = use_signal(ToolbarState::default);
    let dispatch = move |action: ToolbarAction| dispatch_action(state, on_change, action);

    let current = state.read().clone();
    let sort_label = if current.ascending {
        "Sort descending"
    } else {
        "Sort ascending"
    };
    let item_count = artifacts.as_ref().map(|a| a.count).unwrap_or(0);
    let filter_items: Vec<(FilterField, String)> = ALL_FILTER_FIELDS
        .iter()
        .map(|field| (*field, field.display_name().to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./toolbar.css") }
        div { class: "artifacts-toolbar",
            Toolbar { id: "artifacts-toolbar-1", aria_label: "Artifact filters",
                ToolbarContent {
                    ToolbarItem { class: "filter-item",
                        SearchForm {
                            onsubmit: move |_| dispatch(ToolbarAction::Submit),
                            ChoiceDropdown::<FilterField> {
                                id: "toolbar-filter-toggle",
                                open: current.filter_is_expanded,
                                label: current.filter_label().to_string(),
                                items: filter_items,
                                on_open_change: move |open: bool| {
                                    dispatch(ToolbarAction::ToggleFilter(open))
                                },
                                on_select: move |field: FilterField| {
                                    dispatch(ToolbarAction::SelectFilter(field))
                                },
                            }
                            Input {
                                id: "filterValue",
                                name: "filterValue",
                                input_type: "search",
                                value: current.filter_value.clone(),
                                aria_label: "search input example",
                                on_input: move |value: String| {
                                    dispatch(ToolbarAction::SetFilterValue(value))
                                },
                            }
                            Button {
                                id: "toolbar-btn-filter-search",
                                variant: ButtonVariant::Control,
                                aria_label: "search button for search input",
                                onclick: move |_| dispatch(ToolbarAction::Submit),
                                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                            }
                        }
                    }
                    ToolbarItem { class: "sort-icon-item",
                        ToolbarButton {
                            id: "toolbar-btn-sort",
                            index: 0usize,
                            aria_label: sort_label,
                            on_click: move |_| dispatch(ToolbarAction::ToggleAscending),
                            if current.ascending {
                                Icon::<LdArrowDownAZ> { icon: LdArrowDownAZ, width: 18, height: 18 }
                            } else {
                                Icon::<LdArrowDownZA> { icon: LdArrowDownZA, width: 18, height: 18 }
                            }
                        }
                    }
                    ToolbarItem { class: "upload-artifact-item",
                        IfAuth { is_developer: true,
                            IfFeature { feature: Feature::ReadOnly, is_not: true,
                                Button {
                                    id: "btn-header-upload-artifact",
                                    class: "btn-header-upload-artifact",
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| on_upload_artifact.call(()),
                                    "Upload artifact"
                                }
                            }
                        }
                    }
                    ToolbarItem { class: "artifact-paging-item",
                        Pagination {
                            id: "artifact-list-pagination",
                            class: "artifact-list-pagination",
                            item_count,
                            page: paging.page,
                            page_size: paging.page_size,
                            per_page_options: PAGE_SIZE_OPTIONS.to_vec(),
                            on_set_page: move |page: i64| on_set_page.call(page),
                            on_per_page_select: move |size: i64| on_per_page_select.call(size),
                        }
                    }
                }
            }
        }
    }
}
