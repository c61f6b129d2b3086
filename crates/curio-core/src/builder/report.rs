///
/// BuildReport
///
/// What one build did with each metadata key.
/// `applied`, `relations` and `skipped` are disjoint and together cover
/// every key of the input bag.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuildReport {
    pub entity: &'static str,
    /// Whitelisted fields copied onto the entity, in whitelist order.
    pub applied: Vec<&'static str>,
    /// Keys consumed by the build hook.
    pub relations: Vec<String>,
    /// Keys neither whitelisted nor reserved; never written.
    pub skipped: Vec<String>,
}

impl BuildReport {
    /// True when every key in the bag was either applied or consumed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    #[must_use]
    pub fn was_skipped(&self, key: &str) -> bool {
        self.skipped.iter().any(|k| k == key)
    }
}

///
/// Built
///

#[derive(Clone, Debug)]
pub struct Built<E> {
    pub entity: E,
    pub report: BuildReport,
}

impl<E> Built<E> {
    #[must_use]
    pub fn into_entity(self) -> E {
        self.entity
    }
}
