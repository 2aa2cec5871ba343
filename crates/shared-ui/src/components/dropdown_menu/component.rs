use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCaretDown;
use dioxus_free_icons::Icon;
use dioxus_primitives::dropdown_menu as prim;

#[component]
pub fn DropdownMenu(mut props: prim::DropdownMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { ..props }
    }
}

#[component]
pub fn DropdownMenuTrigger(mut props: prim::DropdownMenuTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu-trigger", None, false));

    rsx! {
        prim::DropdownMenuTrigger { ..props }
    }
}

#[component]
pub fn DropdownMenuContent(mut props: prim::DropdownMenuContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu-content", None, false));

    rsx! {
        prim::DropdownMenuContent { ..props }
    }
}

#[component]
pub fn DropdownMenuItem<T: Clone + PartialEq + 'static>(
    mut props: prim::DropdownMenuItemProps<T>,
) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu-item", None, false));

    rsx! {
        prim::DropdownMenuItem { ..props }
    }
}

/// A controlled single-choice dropdown: a toggle showing `label` and one item
/// per `(value, text)` pair.
///
/// The open state is owned by the caller. `on_open_change` reports toggle
/// clicks and dismissals, `on_select` reports the chosen value.
#[component]
pub fn ChoiceDropdown<T: Clone + PartialEq + 'static>(
    open: bool,
    label: String,
    items: Vec<(T, String)>,
    #[props(default)] on_open_change: EventHandler<bool>,
    #[props(default)] on_select: EventHandler<T>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        DropdownMenu {
            open: open,
            on_open_change: move |next: bool| on_open_change.call(next),
            DropdownMenuTrigger { ..attributes,
                span { class: "dropdown-menu-label", "{label}" }
                Icon::<FaCaretDown> { icon: FaCaretDown, width: 10, height: 10 }
            }
            DropdownMenuContent {
                for (index, (value, text)) in items.into_iter().enumerate() {
                    DropdownMenuItem::<T> {
                        key: "{index}",
                        value: value,
                        index: index,
                        on_select: move |chosen: T| on_select.call(chosen),
                        "{text}"
                    }
                }
            }
        }
    }
}
