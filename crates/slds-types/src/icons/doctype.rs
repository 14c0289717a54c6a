use std::borrow::Cow;

use crate::{IconPath, IconRecord};

const fn path(
    d: &'static str,
    fill: Option<&'static str>,
    opacity: Option<&'static str>,
) -> IconPath {
    IconPath {
        d: Cow::Borrowed(d),
        fill: match fill {
            Some(f) => Some(Cow::Borrowed(f)),
            None => None,
        },
        opacity: match opacity {
            Some(o) => Some(Cow::Borrowed(o)),
            None => None,
        },
    }
}

const GFORM_PATHS: &[IconPath] = &[
    path(
        "M3.4 0c-1 0-1.9.8-1.9 1.9v20.2c0 1 .9 1.9 1.9 1.9h17.2c1 0 1.9-.9 1.9-1.9V7.6L15.4 0h-12z",
        Some("#673AB7"),
        None,
    ),
    path(
        "M22.5 7.6V8h-4.8s-2.4-.5-2.3-2.5c0 0 .1 2.1 2.2 2.1h4.9z",
        Some("#45317C"),
        None,
    ),
    path(
        "M15.4 0v5.5c0 .6.4 2.1 2.3 2.1h4.8L15.4 0z",
        Some("#fff"),
        Some(".5"),
    ),
    path(
        "M6.3 14.8c0-.2-.1-.3-.3-.3h-.5c-.1 0-.2.1-.2.3v.5c0 .1.1.2.2.2H6c.2 0 .3-.1.3-.2v-.5zm7 0c0-.2-.1-.3-.2-.3H7.2c-.2 0-.3.1-.3.3v.5c0 .1.1.2.3.2h5.9c.1 0 .2-.1.2-.2v-.5zm-7 2.3c0-.1-.1-.2-.3-.2h-.5c-.1 0-.2.1-.2.2v.5c0 .2.1.3.2.3H6c.2 0 .3-.1.3-.3v-.5zm7 0c0-.1-.1-.2-.3-.2H7.2c-.1 0-.3.1-.3.2v.5c0 .2.2.3.3.3H13c.2 0 .3-.1.3-.3v-.5zm-7 2.4c0-.2-.1-.3-.3-.3h-.5c-.1 0-.2.1-.2.3v.5c0 .1.1.2.2.2H6c.2 0 .3-.1.3-.2v-.5zm7 0c0-.2-.1-.3-.2-.3H7.2c-.2 0-.3.1-.3.3v.5c0 .1.1.2.3.2h5.9c.1 0 .2-.1.2-.2v-.5z",
        Some("#fff"),
        None,
    ),
];

static GFORM: IconRecord = IconRecord {
    view_box: Cow::Borrowed("0 0 24 24"),
    paths: Cow::Borrowed(GFORM_PATHS),
};

/// Google Forms document type icon.
pub fn gform() -> &'static IconRecord {
    &GFORM
}
