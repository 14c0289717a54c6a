use dioxus::prelude::*;
use slds_types::{BadgeColor, ClassSpec, IconAlignment, StyleMap};

use super::{BadgeFrame, BadgeSlot};
use crate::identity::use_generated_id;

/// Stylesheet for `slds-badge` and its icon wrapper.
///
/// [`Badge`] links it through `document::Link`; renderers without a document
/// (plain server-side rendering) can place it in their own `<head>`.
pub const BADGE_STYLESHEET: Asset = asset!("./style.css");

/// Lightning badge: a `span.slds-badge` holding an icon wrapper and content.
///
/// The icon wrapper is rendered even when `icon` is omitted, on the side
/// given by `icon_alignment`. `style` applies to the icon wrapper only.
/// When `id` is empty the badge uses an id generated once for this instance
/// from the [`IdSource`](crate::identity::IdSource) in context.
#[component]
pub fn Badge(
    #[props(default, into)] id: String,
    #[props(default, into)] color: BadgeColor,
    #[props(default)] icon_alignment: IconAlignment,
    #[props(default)] content: Option<Element>,
    #[props(default)] icon: Option<Element>,
    #[props(default, into)] class: ClassSpec,
    #[props(default, into)] style: StyleMap,
) -> Element {
    let generated_id = use_generated_id();
    let frame = BadgeFrame::resolve(
        Some(id.as_str()),
        &generated_id,
        color,
        icon_alignment,
        &class,
        &style,
    );

    let icon_wrapper = rsx! {
        span { class: "{frame.icon_class}", style: frame.icon_style.clone(), {icon} }
    };
    let [first, second] = frame.order.map(|slot| match slot {
        BadgeSlot::Icon => icon_wrapper.clone(),
        BadgeSlot::Content => rsx! { {content.clone()} },
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BADGE_STYLESHEET }
        span { id: "{frame.id}", class: "{frame.class}",
            {first}
            {second}
        }
    }
}
