use slds_types::{
    compose_class_name, BadgeColor, ClassSpec, IconAlignment, StyleMap, BADGE_CLASS,
    BADGE_ICON_CLASS,
};

use crate::identity::{resolve_id, IdGenerator};

/// The two logical children of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSlot {
    Icon,
    Content,
}

/// Child order for an alignment. The icon wrapper is always one of the two
/// children, whether or not an icon is supplied.
pub fn compose_layout(alignment: IconAlignment) -> [BadgeSlot; 2] {
    match alignment {
        IconAlignment::Left => [BadgeSlot::Icon, BadgeSlot::Content],
        IconAlignment::Right => [BadgeSlot::Content, BadgeSlot::Icon],
    }
}

/// Class attribute for the icon wrapper, e.g. `slds-badge__icon slds-badge__icon_left`.
pub fn icon_wrapper_class(alignment: IconAlignment) -> String {
    format!("{BADGE_ICON_CLASS} {}", alignment.icon_class())
}

/// Everything a badge renders apart from its icon and content nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeFrame {
    pub id: String,
    pub class: String,
    pub icon_class: String,
    pub icon_style: Option<String>,
    pub order: [BadgeSlot; 2],
}

impl BadgeFrame {
    pub fn resolve(
        supplied_id: Option<&str>,
        generated_id: &str,
        color: BadgeColor,
        alignment: IconAlignment,
        class: &ClassSpec,
        style: &StyleMap,
    ) -> Self {
        Self {
            id: resolve_id(supplied_id, generated_id).to_string(),
            class: compose_class_name(BADGE_CLASS, color.class(), class),
            icon_class: icon_wrapper_class(alignment),
            icon_style: style.to_attribute(),
            order: compose_layout(alignment),
        }
    }
}

/// Non-visual properties of a badge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BadgeOptions {
    pub id: Option<String>,
    pub color: BadgeColor,
    pub icon_alignment: IconAlignment,
    pub class: ClassSpec,
    pub style: StyleMap,
}

/// A badge outside of any view tree: holds the id generated when the
/// instance was created and resolves a [`BadgeFrame`] on every render.
#[derive(Debug, Clone)]
pub struct BadgeInstance {
    generated_id: String,
}

impl BadgeInstance {
    pub fn new(ids: &dyn IdGenerator) -> Self {
        Self {
            generated_id: ids.next(),
        }
    }

    pub fn generated_id(&self) -> &str {
        &self.generated_id
    }

    pub fn render(&self, options: &BadgeOptions) -> BadgeFrame {
        BadgeFrame::resolve(
            options.id.as_deref(),
            &self.generated_id,
            options.color,
            options.icon_alignment,
            &options.class,
            &options.style,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SequentialIdGenerator;
    use pretty_assertions::assert_eq;

    #[test]
    fn left_puts_icon_first() {
        assert_eq!(
            compose_layout(IconAlignment::Left),
            [BadgeSlot::Icon, BadgeSlot::Content]
        );
    }

    #[test]
    fn right_puts_content_first() {
        assert_eq!(
            compose_layout(IconAlignment::Right),
            [BadgeSlot::Content, BadgeSlot::Icon]
        );
    }

    #[test]
    fn icon_wrapper_is_always_laid_out() {
        for alignment in [IconAlignment::Left, IconAlignment::Right] {
            assert!(compose_layout(alignment).contains(&BadgeSlot::Icon));
        }
    }

    #[test]
    fn generated_id_is_stable_across_renders() {
        let ids = SequentialIdGenerator::new("badge");
        let badge = BadgeInstance::new(&ids);
        let options = BadgeOptions::default();

        let first = badge.render(&options);
        for _ in 0..10 {
            assert_eq!(badge.render(&options).id, first.id);
        }
        assert_eq!(first.id, "badge-1");
        assert_eq!(badge.generated_id(), "badge-1");
    }

    #[test]
    fn instances_get_distinct_ids() {
        let ids = SequentialIdGenerator::new("badge");
        let a = BadgeInstance::new(&ids);
        let b = BadgeInstance::new(&ids);
        assert_ne!(a.generated_id(), b.generated_id());
    }

    #[test]
    fn supplied_id_takes_precedence() {
        let ids = SequentialIdGenerator::new("badge");
        let badge = BadgeInstance::new(&ids);
        let frame = badge.render(&BadgeOptions {
            id: Some("unread-count".into()),
            ..Default::default()
        });
        assert_eq!(frame.id, "unread-count");
    }

    #[test]
    fn default_frame() {
        let frame = BadgeFrame::resolve(
            None,
            "badge-7",
            BadgeColor::Default,
            IconAlignment::Left,
            &ClassSpec::default(),
            &StyleMap::default(),
        );
        assert_eq!(
            frame,
            BadgeFrame {
                id: "badge-7".into(),
                class: "slds-badge".into(),
                icon_class: "slds-badge__icon slds-badge__icon_left".into(),
                icon_style: None,
                order: [BadgeSlot::Icon, BadgeSlot::Content],
            }
        );
    }

    #[test]
    fn light_badge_with_caller_classes_and_style() {
        let frame = BadgeFrame::resolve(
            None,
            "badge-1",
            BadgeColor::Light,
            IconAlignment::Right,
            &ClassSpec::from(["x", "y"]),
            &StyleMap::from([("fill", "red")]),
        );
        assert_eq!(frame.class, "slds-badge slds-badge_lightest x y");
        assert_eq!(frame.icon_class, "slds-badge__icon slds-badge__icon_right");
        assert_eq!(frame.icon_style.as_deref(), Some("fill:red;"));
    }

    #[test]
    fn unknown_color_string_adds_no_token() {
        let frame = BadgeFrame::resolve(
            None,
            "badge-1",
            BadgeColor::from("neon"),
            IconAlignment::Left,
            &ClassSpec::default(),
            &StyleMap::default(),
        );
        assert_eq!(frame.class, "slds-badge");
    }
}
