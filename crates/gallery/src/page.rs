use std::rc::Rc;

use dioxus::document::{Document, NoOpDocument};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaCheck, FaStar};
use slds_types::{icons, BadgeSettings, UiSettings};
use slds_ui::{Badge, IdSource, BADGE_STYLESHEET};

/// Pixel size for Font Awesome glyphs inside a badge.
const GLYPH_SIZE: u32 = 12;

/// Resolve an icon key to a node. `fa/<name>` selects a Font Awesome glyph,
/// anything else is looked up among the bundled icon records.
pub fn icon_node(key: &str) -> Option<Element> {
    let node = match key {
        "fa/star" => rsx! { dioxus_free_icons::Icon { width: GLYPH_SIZE, height: GLYPH_SIZE, icon: FaStar } },
        "fa/bell" => rsx! { dioxus_free_icons::Icon { width: GLYPH_SIZE, height: GLYPH_SIZE, icon: FaBell } },
        "fa/check" => rsx! { dioxus_free_icons::Icon { width: GLYPH_SIZE, height: GLYPH_SIZE, icon: FaCheck } },
        other => {
            let record = icons::by_name(other)?;
            rsx! { slds_ui::Icon { record: record.clone() } }
        }
    };
    Some(node)
}

#[component]
fn GalleryBadge(badge: BadgeSettings) -> Element {
    let icon = badge.icon.as_deref().and_then(|key| {
        let node = icon_node(key);
        if node.is_none() {
            tracing::warn!(icon = key, "unknown icon, rendering an empty icon wrapper");
        }
        node
    });
    let content = badge.content.clone().map(|text| rsx! { "{text}" });

    rsx! {
        li { class: "gallery-entry",
            Badge {
                id: badge.id.clone().unwrap_or_default(),
                color: badge.color,
                icon_alignment: badge.icon_alignment,
                content: rsx! { {content} },
                icon: rsx! { {icon} },
                class: badge.class.clone(),
                style: badge.style.clone(),
            }
        }
    }
}

/// Every badge listed in the settings, sharing one id source.
#[component]
pub fn Gallery(settings: UiSettings) -> Element {
    use_context_provider(|| IdSource::from_settings(&settings.ids));

    rsx! {
        ul { class: "gallery",
            for (index, badge) in settings.badges.iter().enumerate() {
                GalleryBadge { key: "{index}", badge: badge.clone() }
            }
        }
    }
}

/// Server-render the gallery into a standalone HTML document.
///
/// Components link their stylesheets through `document::Link`, which has no
/// `<head>` to write into here, so the page links them itself.
pub fn render_page(settings: UiSettings) -> String {
    let count = settings.badges.len();
    let mut vdom = VirtualDom::new_with_props(Gallery, GalleryProps { settings });
    vdom.provide_root_context(Rc::new(NoOpDocument) as Rc<dyn Document>);
    vdom.rebuild_in_place();
    let body = dioxus_ssr::render(&vdom);
    tracing::info!(badges = count, "rendered gallery");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Badge Gallery</title>
    <link rel="stylesheet" href="{BADGE_STYLESHEET}">
</head>
<body>
    {body}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slds_types::{BadgeColor, IconAlignment, IdSettings, IdStrategy};

    fn sequential(badges: Vec<BadgeSettings>) -> UiSettings {
        UiSettings {
            ids: IdSettings {
                strategy: IdStrategy::Sequential,
                prefix: Some("g".into()),
            },
            badges,
        }
    }

    #[test]
    fn known_icon_keys_resolve() {
        assert!(icon_node("fa/star").is_some());
        assert!(icon_node("doctype/gform").is_some());
        assert!(icon_node("fa/unknown").is_none());
    }

    #[test]
    fn page_lists_every_badge() {
        let html = render_page(sequential(vec![
            BadgeSettings {
                content: Some("One".into()),
                ..Default::default()
            },
            BadgeSettings {
                content: Some("Two".into()),
                color: BadgeColor::Inverse,
                icon_alignment: IconAlignment::Right,
                icon: Some("fa/star".into()),
                ..Default::default()
            },
        ]));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("gallery-entry").count(), 2);
        assert!(html.contains(r#"id="g-1""#), "{html}");
        assert!(html.contains(r#"id="g-2""#), "{html}");
        assert!(html.contains(r#"class="slds-badge slds-badge_inverse""#), "{html}");
        assert!(html.contains("slds-badge__icon_right"), "{html}");
    }

    #[test]
    fn head_links_badge_stylesheet() {
        let html = render_page(sequential(Vec::new()));
        let link = format!(r#"<link rel="stylesheet" href="{BADGE_STYLESHEET}">"#);
        let at = html.find(&link).unwrap_or_else(|| panic!("no stylesheet link in {html}"));
        let head_end = html.find("</head>").unwrap();
        assert!(at < head_end, "{html}");
        assert_eq!(html.matches(r#"rel="stylesheet""#).count(), 1, "{html}");
    }

    #[test]
    fn unknown_icon_still_renders_wrapper() {
        let html = render_page(sequential(vec![BadgeSettings {
            content: Some("Lost".into()),
            icon: Some("doctype/missing".into()),
            ..Default::default()
        }]));
        assert!(
            html.contains(r#"class="slds-badge__icon slds-badge__icon_left""#),
            "{html}"
        );
    }

    #[test]
    fn supplied_id_is_kept() {
        let html = render_page(sequential(vec![BadgeSettings {
            id: Some("approved".into()),
            ..Default::default()
        }]));
        assert!(html.contains(r#"id="approved""#), "{html}");
    }
}
