use dioxus::prelude::*;

/// A themed native select element.
///
/// Simpler than a primitive-backed listbox: wraps a native `<select>` with
/// `appearance: none`. `options` are `(value, label)` pairs and `on_change`
/// receives the chosen value.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Choices as `(value, label)` pairs, in display order.
    options: Vec<(String, String)>,
    /// Called with the new value when the selection changes.
    #[props(default)]
    on_change: EventHandler<String>,
    /// Optional label displayed before the select.
    #[props(default)]
    label: String,
    #[props(default = false)]
    disabled: bool,
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                disabled: disabled,
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                ..merged,
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_the_current_value_selected() {
        fn app() -> Element {
            rsx! {
                FormSelect {
                    value: "20",
                    options: vec![
                        ("10".to_string(), "10 per page".to_string()),
                        ("20".to_string(), "20 per page".to_string()),
                    ],
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("10 per page"), "{html}");
        assert!(html.contains("20 per page"), "{html}");
        assert_eq!(html.matches("selected").count(), 1, "{html}");
    }
}
