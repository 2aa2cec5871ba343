use dioxus::prelude::*;
use dioxus_primitives::toolbar as prim;

#[component]
pub fn Toolbar(mut props: prim::ToolbarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "toolbar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Toolbar { ..props }
    }
}

#[component]
pub fn ToolbarButton(mut props: prim::ToolbarButtonProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "toolbar-button", None, false));

    rsx! {
        prim::ToolbarButton { ..props }
    }
}

/// Horizontal row holding the toolbar's items.
#[component]
pub fn ToolbarContent(children: Element) -> Element {
    rsx! {
        div { class: "toolbar-content", {children} }
    }
}

/// One slot of a [`ToolbarContent`] row. Extra classes position the slot.
#[component]
pub fn ToolbarItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "toolbar-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}
