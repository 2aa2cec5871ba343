use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaAngleLeft, FaAngleRight};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};
use crate::components::form_select::FormSelect;

/// One-based index of the first and last item shown on `page`.
///
/// Returns `(0, 0)` when there is nothing to show.
pub fn item_range(page: i64, page_size: i64, item_count: i64) -> (i64, i64) {
    if item_count <= 0 || page_size <= 0 {
        return (0, 0);
    }
    let first = (page.max(1) - 1) * page_size + 1;
    if first > item_count {
        return (0, 0);
    }
    (first, (first + page_size - 1).min(item_count))
}

/// Number of pages needed for `item_count` items; never less than one.
pub fn page_count(page_size: i64, item_count: i64) -> i64 {
    if page_size > 0 {
        ((item_count + page_size - 1) / page_size).max(1)
    } else {
        1
    }
}

/// Page-number pagination with a per-page chooser.
///
/// Purely presentational: the current `page` and `page_size` are owned by the
/// caller, and every navigation is relayed through `on_set_page` /
/// `on_per_page_select` without touching local state.
#[component]
pub fn Pagination(
    item_count: i64,
    page: i64,
    page_size: i64,
    #[props(default)] on_set_page: EventHandler<i64>,
    #[props(default)] on_per_page_select: EventHandler<i64>,
    #[props(default = vec![10, 20, 50, 100])] per_page_options: Vec<i64>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let (first, last) = item_range(page, page_size, item_count);
    let total_pages = page_count(page_size, item_count);
    let options: Vec<(String, String)> = per_page_options
        .iter()
        .map(|n| (n.to_string(), format!("{n} per page")))
        .collect();

    let base = vec![Attribute::new("class", "pagination", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            span { class: "pagination-info",
                "{first} - {last} of "
                b { class: "pagination-count", "{item_count}" }
            }
            FormSelect {
                value: page_size.to_string(),
                options,
                on_change: move |value: String| {
                    if let Ok(size) = value.parse::<i64>() {
                        on_per_page_select.call(size);
                    }
                },
            }
            Button {
                variant: ButtonVariant::Plain,
                disabled: page <= 1,
                aria_label: "Go to previous page",
                onclick: move |_| on_set_page.call(page - 1),
                Icon::<FaAngleLeft> { icon: FaAngleLeft, width: 14, height: 14 }
            }
            span { class: "pagination-page", "Page {page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Plain,
                disabled: page >= total_pages,
                aria_label: "Go to next page",
                onclick: move |_| on_set_page.call(page + 1),
                Icon::<FaAngleRight> { icon: FaAngleRight, width: 14, height: 14 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn item_range_covers_partial_last_page() {
        assert_eq!(item_range(1, 10, 25), (1, 10));
        assert_eq!(item_range(3, 10, 25), (21, 25));
    }

    #[test]
    fn item_range_is_empty_without_items() {
        assert_eq!(item_range(1, 10, 0), (0, 0));
        assert_eq!(item_range(4, 10, 25), (0, 0));
        assert_eq!(item_range(1, 0, 25), (0, 0));
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(10, 0), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(10, 11), 2);
        assert_eq!(page_count(0, 11), 1);
    }

    #[test]
    fn renders_count_and_page() {
        fn app() -> Element {
            rsx! { Pagination { item_count: 42, page: 2, page_size: 20 } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("21 - 40 of "), "{html}");
        assert!(html.contains(">42</b>"), "{html}");
        assert!(html.contains("Page 2 of 3"), "{html}");
        assert!(html.contains("50 per page"), "{html}");
    }
}
