//! Partner rule contract
//!
//! A partner rule set is the second extension point next to
//! [`ObjectMapper`](crate::mapper::ObjectMapper). It runs after mapping:
//! `apply` normalizes the mapped target in place, `validate` inspects it.

/// Partner-specific "apply mutations, then validate" step for a target type
///
/// # Contract
///
/// - `apply` must be idempotent: applying it to its own output changes nothing.
/// - `validate` must not mutate and must depend only on the target's current
///   field values. It reports every violation in one pass, as an ordered list
///   of distinct human-readable messages. An empty list means valid.
pub trait PartnerRules<T>: Send + Sync {
    /// Key of the partner these rules belong to
    fn partner(&self) -> &str;

    /// Applies partner-specific normalizations to the mapped target
    fn apply(&self, target: &mut T);

    /// Validates the target against partner constraints
    fn validate(&self, target: &T) -> Vec<String>;
}
