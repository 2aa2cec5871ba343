//! Local state of the artifacts toolbar and its transitions.
//!
//! Every user interaction is a [`ToolbarAction`]. Applying one mutates the
//! state and, for commits, returns the criteria built from the updated
//! values, so the page is always told about the state it will render next.

use shared_types::{ArtifactsCriteria, FilterField};

/// A user interaction with the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    /// The filter dropdown toggle was clicked or the menu was dismissed.
    ToggleFilter(bool),
    /// A field was picked from the filter dropdown.
    SelectFilter(FilterField),
    /// The filter text changed.
    SetFilterValue(String),
    /// The filter form was submitted (Enter or the search button).
    Submit,
    /// The sort button was clicked.
    ToggleAscending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarState {
    pub filter_is_expanded: bool,
    pub filter_selection: FilterField,
    pub filter_value: String,
    pub ascending: bool,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            filter_is_expanded: false,
            filter_selection: FilterField::Name,
            filter_value: String::new(),
            ascending: true,
        }
    }
}

impl ToolbarState {
    /// Criteria describing the current state.
    pub fn criteria(&self) -> ArtifactsCriteria {
        ArtifactsCriteria {
            filter_type: self.filter_selection,
            value: self.filter_value.clone(),
            sort_ascending: self.ascending,
        }
    }

    /// Text shown on the filter dropdown toggle.
    pub fn filter_label(&self) -> &'static str {
        self.filter_selection.display_name()
    }

    /// Apply `action`, returning the criteria to publish if it is a commit.
    pub fn apply(&mut self, action: ToolbarAction) -> Option<ArtifactsCriteria> {
        match action {
            ToolbarAction::ToggleFilter(is_expanded) => {
                tracing::debug!("[ArtifactsPageToolbar] Toggling filter dropdown.");
                self.filter_is_expanded = is_expanded;
                None
            }
            ToolbarAction::SelectFilter(field) => {
                tracing::debug!("[ArtifactsPageToolbar] Setting filter type to: {field}");
                self.filter_is_expanded = false;
                self.filter_selection = field;
                Some(self.criteria())
            }
            ToolbarAction::SetFilterValue(value) => {
                tracing::debug!("[ArtifactsPageToolbar] Setting filter value: {value:?}");
                self.filter_value = value;
                None
            }
            ToolbarAction::Submit => {
                tracing::debug!("[ArtifactsPageToolbar] Filter SUBMIT!");
                Some(self.criteria())
            }
            ToolbarAction::ToggleAscending => {
                tracing::debug!("[ArtifactsPageToolbar] Toggle the ascending flag.");
                self.ascending = !self.ascending;
                Some(self.criteria())
            }
        }
    }
}
