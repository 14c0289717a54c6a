use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use slds_types::{IdSettings, IdStrategy};
use uuid::Uuid;

/// Source of instance identifiers.
///
/// Implementations must make collisions between live instances unlikely.
/// Each component instance calls [`IdGenerator::next`] once, when it is
/// created.
pub trait IdGenerator {
    fn next(&self) -> String;
}

fn with_prefix(prefix: Option<&str>, token: impl fmt::Display) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}-{token}"),
        _ => token.to_string(),
    }
}

/// UUID v4 tokens in their 32-character simple form.
#[derive(Debug, Clone, Default)]
pub struct RandomIdGenerator {
    prefix: Option<String>,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next(&self) -> String {
        with_prefix(self.prefix.as_deref(), Uuid::new_v4().simple())
    }
}

/// `prefix-1`, `prefix-2`, ... in creation order.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: Option<String>,
    counter: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            counter: Cell::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next(&self) -> String {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        with_prefix(self.prefix.as_deref(), n)
    }
}

/// Shared handle to an [`IdGenerator`], provided to the component tree as
/// context.
///
/// ```ignore
/// use_context_provider(|| IdSource::sequential("badge"));
/// ```
#[derive(Clone)]
pub struct IdSource(Rc<dyn IdGenerator>);

impl IdSource {
    pub fn new(generator: impl IdGenerator + 'static) -> Self {
        Self(Rc::new(generator))
    }

    pub fn sequential(prefix: impl Into<String>) -> Self {
        Self::new(SequentialIdGenerator::new(prefix))
    }

    pub fn from_settings(settings: &IdSettings) -> Self {
        let prefix = settings.prefix.clone();
        match settings.strategy {
            IdStrategy::Random => Self::new(RandomIdGenerator { prefix }),
            IdStrategy::Sequential => Self::new(SequentialIdGenerator {
                prefix,
                counter: Cell::new(0),
            }),
        }
    }

    pub fn next(&self) -> String {
        self.0.next()
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::new(RandomIdGenerator::new())
    }
}

impl fmt::Debug for IdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdSource")
    }
}

/// Draw an id for the calling component instance.
///
/// The id is generated on the first render and kept in the instance's hook
/// slot, so every later render returns the same value. Uses the [`IdSource`]
/// in context, or a random generator when none is provided.
pub fn use_generated_id() -> String {
    use_hook(|| {
        let id = try_consume_context::<IdSource>().unwrap_or_default().next();
        tracing::trace!(id = %id, "generated instance id");
        id
    })
}

/// The caller's id when it is present and non-empty, otherwise the
/// generated one.
pub fn resolve_id<'a>(supplied: Option<&'a str>, generated: &'a str) -> &'a str {
    match supplied {
        Some(id) if !id.is_empty() => id,
        _ => generated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn supplied_id_wins() {
        assert_eq!(resolve_id(Some("save-badge"), "generated"), "save-badge");
    }

    #[test]
    fn missing_or_empty_id_falls_back() {
        assert_eq!(resolve_id(None, "generated"), "generated");
        assert_eq!(resolve_id(Some(""), "generated"), "generated");
    }

    #[test]
    fn random_ids_are_unique() {
        let generator = RandomIdGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| generator.next()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn random_ids_carry_prefix() {
        let id = RandomIdGenerator::with_prefix("badge").next();
        assert!(id.starts_with("badge-"), "id: {id}");
        assert_eq!(id.len(), "badge-".len() + 32);
    }

    #[test]
    fn sequential_ids_count_up() {
        let generator = SequentialIdGenerator::new("badge");
        assert_eq!(generator.next(), "badge-1");
        assert_eq!(generator.next(), "badge-2");
    }

    #[test]
    fn source_from_settings() {
        let source = IdSource::from_settings(&IdSettings {
            strategy: IdStrategy::Sequential,
            prefix: None,
        });
        assert_eq!(source.next(), "1");
        assert_eq!(source.clone().next(), "2");
    }
}
