//! Map Handler
//!
//! The client-facing façade over a [`MapperRegistry`]. It resolves the mapper
//! for a type pair and applies it to single objects or collections, optionally
//! followed by a partner rule step:
//!
//! ```text
//! map(source) ─► registry.resolve(S, T) ─► mapper.map ─► rules.apply ─► rules.validate ─► MappingResult
//! ```
//!
//! Mapping, rule application and validation run strictly in that order for
//! each element. Validation never mutates.
//!
//! Inputs that may be absent at the call site go through [`MapRequest`], which
//! reports a missing required input as [`MappingError::NullInput`]. The direct
//! handler methods delegate to it.

use std::any::Any;
use std::sync::Arc;

use tracing::debug;

use crate::error::MappingError;
use crate::registry::MapperRegistry;
use crate::result::MappingResult;
use crate::rules::PartnerRules;
use crate::types::TypePair;

/// Resolves and applies registered mappers
#[derive(Debug, Clone)]
pub struct MapHandler {
    registry: Arc<MapperRegistry>,
}

impl MapHandler {
    /// Creates a handler over a shared registry
    pub fn new(registry: Arc<MapperRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the registry this handler resolves from
    pub fn registry(&self) -> &MapperRegistry {
        &self.registry
    }

    /// Maps one source value with the mapper registered for `S → T`
    ///
    /// # Errors
    ///
    /// Propagates the registry's resolve error if no mapper is registered.
    pub fn map<S, T>(&self, source: &S) -> Result<T, MappingError>
    where
        S: Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        self.registry.resolve::<S, T>()?.map(source)
    }

    /// Maps one source value whose types are only known at run time
    ///
    /// Uses the same table and mapper as [`MapHandler::map`], so the boxed
    /// output downcasts to exactly what the typed path returns.
    pub fn map_dyn(
        &self,
        source: &(dyn Any + Send + Sync),
        pair: TypePair,
    ) -> Result<Box<dyn Any + Send + Sync>, MappingError> {
        self.registry.resolve_dyn(pair)?.map_erased(source)
    }

    /// Maps every element of `sources`, preserving order
    ///
    /// The mapper is resolved once per call, not once per element.
    pub fn map_collection<'a, S, T, I>(&'a self, sources: I) -> Result<Vec<T>, MappingError>
    where
        S: Send + Sync + 'static,
        T: Send + Sync + 'static,
        I: IntoIterator<Item = &'a S>,
    {
        self.request::<S, T>().sources(sources).map_all()
    }

    /// Maps every element of `sources` and applies `rules` to each result
    pub fn map_collection_with_rules<'a, S, T, I, R>(
        &'a self,
        sources: I,
        rules: &'a R,
    ) -> Result<Vec<T>, MappingError>
    where
        S: Send + Sync + 'static,
        T: Send + Sync + 'static,
        I: IntoIterator<Item = &'a S>,
        R: PartnerRules<T>,
    {
        self.request::<S, T>()
            .sources(sources)
            .rules(rules)
            .map_all_with_rules()
    }

    /// Maps one source, applies `rules`, then validates
    ///
    /// A failed validation is returned as an invalid [`MappingResult`], never
    /// as an error.
    pub fn map_and_validate<'a, S, T, R>(
        &'a self,
        source: &'a S,
        rules: &'a R,
    ) -> Result<MappingResult<T>, MappingError>
    where
        S: Send + Sync + 'static,
        T: Send + Sync + 'static,
        R: PartnerRules<T>,
    {
        self.request::<S, T>()
            .source(source)
            .rules(rules)
            .map_and_validate()
    }

    /// Starts a request whose inputs may be absent
    pub fn request<S, T>(&self) -> MapRequest<'_, S, T> {
        MapRequest {
            registry: &self.registry,
            source: None,
            sources: None,
            rules: None,
        }
    }
}

/// A mapping call assembled from optional inputs
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use core_kernel::{MapHandler, MapperRegistry, MappingError};
///
/// let handler = MapHandler::new(Arc::new(MapperRegistry::new()));
/// let missing: Option<&Vec<u8>> = None;
///
/// let err = handler
///     .request::<u8, u16>()
///     .maybe_sources(missing)
///     .map_all()
///     .unwrap_err();
/// assert_eq!(err, MappingError::NullInput { argument: "sources" });
/// ```
pub struct MapRequest<'a, S, T> {
    registry: &'a MapperRegistry,
    source: Option<&'a S>,
    sources: Option<Vec<&'a S>>,
    rules: Option<&'a dyn PartnerRules<T>>,
}

impl<'a, S, T> MapRequest<'a, S, T>
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    /// Sets the single source value
    pub fn source(self, source: &'a S) -> Self {
        self.maybe_source(Some(source))
    }

    pub fn maybe_source(mut self, source: Option<&'a S>) -> Self {
        self.source = source;
        self
    }

    /// Sets the source sequence
    pub fn sources<I>(self, sources: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
    {
        self.maybe_sources(Some(sources))
    }

    pub fn maybe_sources<I>(mut self, sources: Option<I>) -> Self
    where
        I: IntoIterator<Item = &'a S>,
    {
        self.sources = sources.map(|items| items.into_iter().collect());
        self
    }

    /// Sets the partner rules
    pub fn rules<R>(self, rules: &'a R) -> Self
    where
        R: PartnerRules<T>,
    {
        self.maybe_rules(Some(rules))
    }

    pub fn maybe_rules(mut self, rules: Option<&'a dyn PartnerRules<T>>) -> Self {
        self.rules = rules;
        self
    }

    /// Maps the single source
    ///
    /// # Errors
    ///
    /// - [`MappingError::NullInput`] if no source was supplied
    /// - the registry's resolve error if no mapper is registered
    pub fn map_one(self) -> Result<T, MappingError> {
        let source = self.source.ok_or_else(|| MappingError::null_input("source"))?;
        self.registry.resolve::<S, T>()?.map(source)
    }

    /// Maps every source in order, applying the rules to each result when
    /// rules were supplied
    ///
    /// # Errors
    ///
    /// - [`MappingError::NullInput`] if no source sequence was supplied
    /// - the registry's resolve error if no mapper is registered
    pub fn map_all(self) -> Result<Vec<T>, MappingError> {
        let sources = self.sources.ok_or_else(|| MappingError::null_input("sources"))?;
        let mapper = self.registry.resolve::<S, T>()?;

        let mut targets = Vec::with_capacity(sources.len());
        for source in sources {
            let mut target = mapper.map(source)?;
            if let Some(rules) = self.rules {
                rules.apply(&mut target);
            }
            targets.push(target);
        }

        debug!(
            pair = %mapper.type_pair(),
            count = targets.len(),
            partner = self.rules.map(|rules| rules.partner()),
            "Mapped collection"
        );
        Ok(targets)
    }

    /// Like [`MapRequest::map_all`], but the rules are required
    ///
    /// # Errors
    ///
    /// [`MappingError::NullInput`] if the source sequence or the rules were
    /// not supplied, checked in that order.
    pub fn map_all_with_rules(self) -> Result<Vec<T>, MappingError> {
        if self.sources.is_none() {
            return Err(MappingError::null_input("sources"));
        }
        if self.rules.is_none() {
            return Err(MappingError::null_input("rules"));
        }
        self.map_all()
    }

    /// Maps the single source, applies the rules, then validates
    ///
    /// # Errors
    ///
    /// - [`MappingError::NullInput`] if the source or the rules were not
    ///   supplied, checked in that order
    /// - the registry's resolve error if no mapper is registered
    pub fn map_and_validate(self) -> Result<MappingResult<T>, MappingError> {
        let source = self.source.ok_or_else(|| MappingError::null_input("source"))?;
        let rules = self.rules.ok_or_else(|| MappingError::null_input("rules"))?;

        let mut target = self.registry.resolve::<S, T>()?.map(source)?;
        rules.apply(&mut target);
        let errors = rules.validate(&target);

        if !errors.is_empty() {
            debug!(
                partner = rules.partner(),
                errors = errors.len(),
                "Mapped object failed partner validation"
            );
        }
        Ok(MappingResult::new(target, errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::ObjectMapper;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        code: String,
        quantity: u32,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Shipment {
        reference: String,
        units: u32,
    }

    #[derive(Default)]
    struct OrderToShipment;

    impl ObjectMapper for OrderToShipment {
        type Source = Order;
        type Target = Shipment;

        fn map(&self, source: &Order) -> Shipment {
            Shipment {
                reference: source.code.clone(),
                units: source.quantity,
            }
        }
    }

    struct CarrierRules;

    impl PartnerRules<Shipment> for CarrierRules {
        fn partner(&self) -> &str {
            "carrier"
        }

        fn apply(&self, target: &mut Shipment) {
            if !target.reference.starts_with("SHP-") {
                target.reference = format!("SHP-{}", target.reference);
            }
        }

        fn validate(&self, target: &Shipment) -> Vec<String> {
            let mut errors = Vec::new();
            if target.units == 0 {
                errors.push("units must be positive".to_string());
            }
            if target.units > 100 {
                errors.push("units exceed carrier limit".to_string());
            }
            errors
        }
    }

    fn order(code: &str, quantity: u32) -> Order {
        Order {
            code: code.to_string(),
            quantity,
        }
    }

    fn handler() -> MapHandler {
        let registry = MapperRegistry::new();
        registry.register(OrderToShipment).unwrap();
        MapHandler::new(Arc::new(registry))
    }

    #[test]
    fn test_map_applies_registered_mapper() {
        let shipment: Shipment = handler().map(&order("A1", 3)).unwrap();
        assert_eq!(shipment.reference, "A1");
        assert_eq!(shipment.units, 3);
    }

    #[test]
    fn test_map_without_mapper_fails() {
        let handler = MapHandler::new(Arc::new(MapperRegistry::new()));
        let err = handler.map::<Order, Shipment>(&order("A1", 3)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_map_dyn_matches_typed_path() {
        let handler = handler();
        let source = order("B2", 9);

        let typed: Shipment = handler.map(&source).unwrap();
        let erased = handler
            .map_dyn(&source, TypePair::of::<Order, Shipment>())
            .unwrap();
        assert_eq!(*erased.downcast::<Shipment>().unwrap(), typed);
    }

    #[test]
    fn test_map_dyn_rejects_wrong_source() {
        let err = handler()
            .map_dyn(&42u8, TypePair::of::<Order, Shipment>())
            .unwrap_err();
        assert!(matches!(err, MappingError::TypeMismatch { .. }));
    }

    #[test]
    fn test_map_collection_preserves_order() {
        let orders = vec![order("1", 1), order("2", 2), order("3", 3)];
        let shipments: Vec<Shipment> = handler().map_collection(&orders).unwrap();
        let references: Vec<_> = shipments.iter().map(|s| s.reference.as_str()).collect();
        assert_eq!(references, ["1", "2", "3"]);
    }

    #[test]
    fn test_map_collection_empty_input() {
        let orders: Vec<Order> = Vec::new();
        let shipments: Vec<Shipment> = handler().map_collection(&orders).unwrap();
        assert!(shipments.is_empty());
    }

    #[test]
    fn test_map_collection_with_rules_applies_each() {
        let orders = vec![order("1", 1), order("SHP-2", 2)];
        let shipments: Vec<Shipment> = handler()
            .map_collection_with_rules(&orders, &CarrierRules)
            .unwrap();
        assert_eq!(shipments[0].reference, "SHP-1");
        assert_eq!(shipments[1].reference, "SHP-2");
    }

    #[test]
    fn test_map_and_validate_valid() {
        let result = handler()
            .map_and_validate(&order("9", 5), &CarrierRules)
            .unwrap();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.value().reference, "SHP-9");
    }

    #[test]
    fn test_map_and_validate_invalid_is_not_an_error() {
        let result = handler()
            .map_and_validate(&order("9", 0), &CarrierRules)
            .unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["units must be positive"]);
    }

    #[test]
    fn test_request_missing_source() {
        let err = handler()
            .request::<Order, Shipment>()
            .rules(&CarrierRules)
            .map_and_validate()
            .unwrap_err();
        assert_eq!(err, MappingError::NullInput { argument: "source" });
    }

    #[test]
    fn test_request_missing_rules() {
        let source = order("1", 1);
        let err = handler()
            .request::<Order, Shipment>()
            .source(&source)
            .map_and_validate()
            .unwrap_err();
        assert_eq!(err, MappingError::NullInput { argument: "rules" });
    }

    #[test]
    fn test_request_sources_checked_before_rules() {
        let err = handler()
            .request::<Order, Shipment>()
            .map_all_with_rules()
            .unwrap_err();
        assert_eq!(err, MappingError::NullInput { argument: "sources" });
    }

    #[test]
    fn test_request_map_one() {
        let source = order("7", 7);
        let shipment = handler()
            .request::<Order, Shipment>()
            .maybe_source(Some(&source))
            .map_one()
            .unwrap();
        assert_eq!(shipment.units, 7);
    }
}
