//! Mapper catalogs
//!
//! A [`MapperCatalog`] is the explicit, finite list of mappers a crate exposes
//! for discovery. It is built once at startup and handed to
//! [`MapperRegistry::register_from_source`](crate::registry::MapperRegistry::register_from_source),
//! which instantiates every entry through `Default` and registers it.
//!
//! Only [`ObjectMapper`] implementations can be listed, so the registry's own
//! adapter and wrapper types never end up in a catalog.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{MapperCatalog, MapperRegistry, ObjectMapper};
//!
//! #[derive(Default)]
//! struct Stringify;
//!
//! impl ObjectMapper for Stringify {
//!     type Source = u32;
//!     type Target = String;
//!
//!     fn map(&self, source: &u32) -> String {
//!         source.to_string()
//!     }
//! }
//!
//! let catalog = MapperCatalog::new("numbers").with::<Stringify>();
//! let registry = MapperRegistry::new();
//! assert_eq!(registry.register_from_source(&catalog).unwrap(), 1);
//! assert!(registry.contains::<u32, String>());
//! ```

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::mapper::{ErasedMapper, MapperAdapter, ObjectMapper};
use crate::types::TypePair;

/// Constructor for one catalog entry
pub type MapperFactory = fn() -> Arc<dyn ErasedMapper>;

fn construct<M>() -> Arc<dyn ErasedMapper>
where
    M: ObjectMapper + Default,
{
    Arc::new(MapperAdapter::new(M::default()))
}

#[derive(Clone)]
pub(crate) struct CatalogEntry {
    pub(crate) mapper: &'static str,
    pub(crate) pair: TypePair,
    pub(crate) factory: MapperFactory,
}

/// Explicit list of discoverable mappers
#[derive(Clone)]
pub struct MapperCatalog {
    name: String,
    entries: Vec<CatalogEntry>,
}

impl MapperCatalog {
    /// Creates an empty catalog
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the code unit the catalog describes, used in logs
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Lists the mapper `M`, constructed with `M::default()` on discovery
    pub fn with<M>(mut self) -> Self
    where
        M: ObjectMapper + Default,
    {
        self.entries.push(CatalogEntry {
            mapper: type_name::<M>(),
            pair: TypePair::of::<M::Source, M::Target>(),
            factory: construct::<M>,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type pairs of the listed mappers, in listing order
    pub fn type_pairs(&self) -> impl Iterator<Item = TypePair> + '_ {
        self.entries.iter().map(|entry| entry.pair)
    }

    pub(crate) fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl fmt::Debug for MapperCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperCatalog")
            .field("name", &self.name)
            .field(
                "mappers",
                &self.entries.iter().map(|entry| entry.mapper).collect::<Vec<_>>(),
            )
            .finish()
    }
}
