//! Mapping contract and the typed/erased bridge
//!
//! The registry stores heterogeneous mappers in one table, so every typed
//! [`ObjectMapper`] is wrapped in a [`MapperAdapter`] and stored as an
//! `Arc<dyn ErasedMapper>`. On the way out, [`TypedMapper`] restores the
//! static types with a single checked downcast.
//!
//! ```text
//!   register(M: ObjectMapper)            resolve::<S, T>()
//!            │                                   ▲
//!            ▼                                   │
//!   MapperAdapter<M> ──► Arc<dyn ErasedMapper> ──► TypedMapper<S, T>
//! ```

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::MappingError;
use crate::types::TypePair;

/// A whole-object transform from one source record to one target record
///
/// Implementations should be stateless: the registry shares a single instance
/// between every caller.
///
/// # Example
///
/// ```rust
/// use core_kernel::ObjectMapper;
///
/// #[derive(Default)]
/// struct CelsiusToFahrenheit;
///
/// impl ObjectMapper for CelsiusToFahrenheit {
///     type Source = f64;
///     type Target = i64;
///
///     fn map(&self, source: &f64) -> i64 {
///         (source * 9.0 / 5.0 + 32.0).round() as i64
///     }
/// }
///
/// assert_eq!(CelsiusToFahrenheit.map(&100.0), 212);
/// ```
pub trait ObjectMapper: Send + Sync + 'static {
    type Source: Send + Sync + 'static;
    type Target: Send + Sync + 'static;

    fn map(&self, source: &Self::Source) -> Self::Target;
}

mod sealed {
    pub trait Sealed {}
}

/// Type-erased mapping capability stored by the registry
///
/// Sealed: [`MapperAdapter`] is the only implementation, so a stored mapper
/// always reports the pair of the typed mapper it wraps.
pub trait ErasedMapper: sealed::Sealed + Send + Sync + 'static {
    /// The (source, target) pair this mapper was registered under
    fn type_pair(&self) -> TypePair;

    /// Maps an opaque source value to an opaque target value
    ///
    /// Fails with [`MappingError::TypeMismatch`] if `source` is not of the
    /// declared source type.
    fn map_erased(
        &self,
        source: &(dyn Any + Send + Sync),
    ) -> Result<Box<dyn Any + Send + Sync>, MappingError>;
}

/// Wraps a typed mapper behind the [`ErasedMapper`] capability
pub struct MapperAdapter<M>
where
    M: ObjectMapper,
{
    inner: M,
}

impl<M> MapperAdapter<M>
where
    M: ObjectMapper,
{
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: ObjectMapper> sealed::Sealed for MapperAdapter<M> {}

impl<M> ErasedMapper for MapperAdapter<M>
where
    M: ObjectMapper,
{
    fn type_pair(&self) -> TypePair {
        TypePair::of::<M::Source, M::Target>()
    }

    fn map_erased(
        &self,
        source: &(dyn Any + Send + Sync),
    ) -> Result<Box<dyn Any + Send + Sync>, MappingError> {
        match source.downcast_ref::<M::Source>() {
            Some(typed) => Ok(Box::new(self.inner.map(typed))),
            None => Err(MappingError::type_mismatch(
                type_name::<M::Source>(),
                format!("source handed to mapper for {}", self.type_pair()),
            )),
        }
    }
}

impl<M: ObjectMapper> fmt::Debug for MapperAdapter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperAdapter")
            .field("mapper", &type_name::<M>())
            .field("pair", &self.type_pair())
            .finish()
    }
}

/// Statically typed view over a stored mapper, returned by
/// [`MapperRegistry::resolve`](crate::registry::MapperRegistry::resolve)
pub struct TypedMapper<S, T> {
    inner: Arc<dyn ErasedMapper>,
    _types: PhantomData<fn(&S) -> T>,
}

impl<S, T> TypedMapper<S, T>
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    /// Wraps an erased mapper after checking it declares the `(S, T)` pair
    pub(crate) fn new(inner: Arc<dyn ErasedMapper>) -> Result<Self, MappingError> {
        let declared = inner.type_pair();
        if !declared.is::<S, T>() {
            return Err(MappingError::type_mismatch(
                type_name::<T>(),
                format!("stored mapper declares {declared}"),
            ));
        }
        Ok(Self {
            inner,
            _types: PhantomData,
        })
    }

    /// Maps one source value
    pub fn map(&self, source: &S) -> Result<T, MappingError> {
        let output = self.inner.map_erased(source)?;
        output.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
            MappingError::type_mismatch(
                type_name::<T>(),
                format!("output of mapper for {}", self.inner.type_pair()),
            )
        })
    }

    pub fn type_pair(&self) -> TypePair {
        self.inner.type_pair()
    }
}

impl<S, T> Clone for TypedMapper<S, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _types: PhantomData,
        }
    }
}

impl<S, T> fmt::Debug for TypedMapper<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedMapper")
            .field("pair", &self.inner.type_pair())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Celsius(i32);
    #[derive(Debug, PartialEq)]
    struct Kelvin(i32);

    #[derive(Default)]
    struct CelsiusToKelvin;

    impl ObjectMapper for CelsiusToKelvin {
        type Source = Celsius;
        type Target = Kelvin;

        fn map(&self, source: &Celsius) -> Kelvin {
            Kelvin(source.0 + 273)
        }
    }

    #[test]
    fn test_adapter_reports_declared_pair() {
        let adapter = MapperAdapter::new(CelsiusToKelvin);
        assert!(adapter.type_pair().is::<Celsius, Kelvin>());
    }

    #[test]
    fn test_adapter_maps_matching_source() {
        let adapter = MapperAdapter::new(CelsiusToKelvin);
        let output = adapter.map_erased(&Celsius(0)).unwrap();
        assert_eq!(*output.downcast::<Kelvin>().unwrap(), Kelvin(273));
    }

    #[test]
    fn test_adapter_rejects_wrong_source_type() {
        let adapter = MapperAdapter::new(CelsiusToKelvin);
        let err = adapter.map_erased(&Kelvin(0)).unwrap_err();
        assert!(matches!(err, MappingError::TypeMismatch { .. }));
        assert!(err.to_string().contains("Celsius"));
    }

    #[test]
    fn test_typed_mapper_round_trips_through_erasure() {
        let erased: Arc<dyn ErasedMapper> = Arc::new(MapperAdapter::new(CelsiusToKelvin));
        let typed = TypedMapper::<Celsius, Kelvin>::new(erased).unwrap();
        assert_eq!(typed.map(&Celsius(27)).unwrap(), Kelvin(300));
    }

    #[test]
    fn test_typed_mapper_rejects_mismatched_pair() {
        let erased: Arc<dyn ErasedMapper> = Arc::new(MapperAdapter::new(CelsiusToKelvin));
        let err = TypedMapper::<Kelvin, Celsius>::new(erased).unwrap_err();
        assert!(matches!(err, MappingError::TypeMismatch { .. }));
    }

    #[test]
    fn test_adapter_debug_names_mapper() {
        let adapter = MapperAdapter::new(CelsiusToKelvin);
        assert!(format!("{adapter:?}").contains("CelsiusToKelvin"));
    }
}
