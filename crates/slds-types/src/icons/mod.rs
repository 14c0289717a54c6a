//! Bundled icon records.

pub mod doctype;

use crate::IconRecord;

/// Look up a bundled icon by its `<category>/<name>` key, e.g. `doctype/gform`.
pub fn by_name(name: &str) -> Option<&'static IconRecord> {
    match name {
        "doctype/gform" => Some(doctype::gform()),
        _ => None,
    }
}
