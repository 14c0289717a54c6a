use dioxus::prelude::*;
use slds_types::IconRecord;

/// Render an icon record as an inline SVG.
#[component]
pub fn Icon(
    record: IconRecord,
    /// Width and height in pixels. Unsized icons fill their container.
    #[props(default)]
    size: Option<u32>,
    #[props(default, into)] class: String,
) -> Element {
    let size = size.map(|px| px.to_string());
    let class = if class.is_empty() {
        "slds-icon".to_string()
    } else {
        format!("slds-icon {class}")
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "{record.view_box}",
            width: size.clone(),
            height: size,
            "aria-hidden": "true",
            for (index, segment) in record.paths.iter().enumerate() {
                path {
                    key: "{index}",
                    d: "{segment.d}",
                    fill: segment.fill.as_deref().map(str::to_string),
                    opacity: segment.opacity.as_deref().map(str::to_string),
                }
            }
        }
    }
}
