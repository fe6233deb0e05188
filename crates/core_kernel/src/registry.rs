//! Mapper Registry
//!
//! This module provides the catalog that associates an ordered (source, target)
//! [`TypePair`] with exactly one mapping implementation.
//!
//! # Architecture
//!
//! Manual registration ([`MapperRegistry::register`]) and discovery
//! ([`MapperRegistry::register_from_source`]) write into the same table and go
//! through the same duplicate check, so a pair can only ever be claimed once,
//! whichever path claimed it. Resolution comes in two views over that table:
//!
//! - [`MapperRegistry::resolve`] for call sites that know both types statically
//! - [`MapperRegistry::resolve_dyn`] for call sites that only hold a [`TypePair`]
//!
//! The table sits behind a readers-writer lock: registration is rare and takes
//! the write lock, resolution is the hot path and only reads.
//!
//! # Usage
//!
//! ```rust
//! use core_kernel::{MapperRegistry, ObjectMapper, MappingError};
//!
//! #[derive(Default)]
//! struct Length;
//!
//! impl ObjectMapper for Length {
//!     type Source = String;
//!     type Target = usize;
//!
//!     fn map(&self, source: &String) -> usize {
//!         source.len()
//!     }
//! }
//!
//! let registry = MapperRegistry::new();
//! registry.register(Length).unwrap();
//!
//! // A second mapper for the same pair is rejected
//! let err = registry.register(Length).unwrap_err();
//! assert!(matches!(err, MappingError::DuplicateMapping { .. }));
//!
//! let mapper = registry.resolve::<String, usize>().unwrap();
//! assert_eq!(mapper.map(&"four".to_string()).unwrap(), 4);
//! ```

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

use crate::catalog::MapperCatalog;
use crate::error::MappingError;
use crate::mapper::{ErasedMapper, MapperAdapter, ObjectMapper, TypedMapper};
use crate::types::TypePair;

/// Type-pair keyed table of mapping implementations
///
/// Created empty, grows monotonically, and has no unregister operation.
/// Share it between components by wrapping it in an `Arc`.
#[derive(Default)]
pub struct MapperRegistry {
    mappers: RwLock<HashMap<TypePair, Arc<dyn ErasedMapper>>>,
}

impl MapperRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a typed mapper under its (source, target) pair
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::DuplicateMapping`] if the pair already has a
    /// mapper. The existing mapper is kept.
    pub fn register<M>(&self, mapper: M) -> Result<(), MappingError>
    where
        M: ObjectMapper,
    {
        self.register_erased(Arc::new(MapperAdapter::new(mapper)))
    }

    fn register_erased(&self, mapper: Arc<dyn ErasedMapper>) -> Result<(), MappingError> {
        let pair = mapper.type_pair();
        let mut mappers = self.mappers.write();

        match mappers.entry(pair) {
            Entry::Occupied(_) => {
                warn!(%pair, "Rejected duplicate mapper registration");
                Err(MappingError::duplicate(&pair))
            }
            Entry::Vacant(slot) => {
                slot.insert(mapper);
                debug!(%pair, "Registered mapper");
                Ok(())
            }
        }
    }

    /// Resolves the mapper for `S → T`
    ///
    /// Lookup is exact: a mapper registered for a different pair is never
    /// returned, however closely related its types are.
    ///
    /// # Errors
    ///
    /// - [`MappingError::MappingNotFound`] if no mapper is registered for the pair
    /// - [`MappingError::TypeMismatch`] if the stored mapper declares another pair
    pub fn resolve<S, T>(&self) -> Result<TypedMapper<S, T>, MappingError>
    where
        S: Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        let mapper = self.resolve_dyn(TypePair::of::<S, T>())?;
        TypedMapper::new(mapper)
    }

    /// Resolves the type-erased mapper registered for `pair`
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MappingNotFound`] if no mapper is registered for
    /// the pair.
    #[instrument(level = "trace", skip_all, fields(pair = %pair))]
    pub fn resolve_dyn(&self, pair: TypePair) -> Result<Arc<dyn ErasedMapper>, MappingError> {
        self.mappers
            .read()
            .get(&pair)
            .cloned()
            .ok_or_else(|| MappingError::not_found(&pair))
    }

    /// Registers every mapper listed in a catalog
    ///
    /// Each entry is constructed through `Default` and stored exactly as a
    /// manual registration would store it. The catalog is applied as a whole:
    /// if any of its pairs is already registered, or appears twice in the
    /// catalog, nothing is registered. Scanning the same catalog twice is
    /// therefore a duplicate registration like any other.
    ///
    /// # Returns
    ///
    /// The number of mappers registered; zero for an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::DuplicateMapping`] for the first colliding pair.
    #[instrument(level = "debug", skip_all, fields(catalog = %catalog.name()))]
    pub fn register_from_source(&self, catalog: &MapperCatalog) -> Result<usize, MappingError> {
        let mut mappers = self.mappers.write();

        let mut claimed = HashSet::with_capacity(catalog.len());
        for entry in catalog.entries() {
            if mappers.contains_key(&entry.pair) || !claimed.insert(entry.pair) {
                warn!(pair = %entry.pair, mapper = entry.mapper, "Catalog contains a duplicate mapper");
                return Err(MappingError::duplicate(&entry.pair));
            }
        }

        for entry in catalog.entries() {
            mappers.insert(entry.pair, (entry.factory)());
            debug!(pair = %entry.pair, mapper = entry.mapper, "Registered mapper from catalog");
        }

        Ok(catalog.len())
    }

    /// Snapshot of the registered type pairs
    ///
    /// The iterator is finite and can be cloned to restart it. Order is
    /// unspecified.
    pub fn registered_mappers(&self) -> impl Iterator<Item = TypePair> + Clone {
        self.mappers.read().keys().copied().collect::<Vec<_>>().into_iter()
    }

    /// Returns true if a mapper is registered for `S → T`
    pub fn contains<S: 'static, T: 'static>(&self) -> bool {
        self.contains_pair(&TypePair::of::<S, T>())
    }

    pub fn contains_pair(&self, pair: &TypePair) -> bool {
        self.mappers.read().contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.mappers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.read().is_empty()
    }
}

impl fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperRegistry")
            .field("pairs", &self.mappers.read().keys().collect::<Vec<_>>())
            .finish()
    }
}
