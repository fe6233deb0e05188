//! Core Kernel - Object-to-object mapping infrastructure
//!
//! This crate provides the building blocks every partner integration uses:
//! - The mapping contract and the bridge between typed and type-erased mappers
//! - A type-pair keyed mapper registry with manual and catalog-driven registration
//! - The map handler façade with partner rule application and validation
//! - The mapping result and the error taxonomy

pub mod types;
pub mod mapper;
pub mod catalog;
pub mod registry;
pub mod handler;
pub mod rules;
pub mod result;
pub mod error;

pub use types::{TypeDescriptor, TypePair};
pub use mapper::{ErasedMapper, MapperAdapter, ObjectMapper, TypedMapper};
pub use catalog::{MapperCatalog, MapperFactory};
pub use registry::MapperRegistry;
pub use handler::{MapHandler, MapRequest};
pub use rules::PartnerRules;
pub use result::MappingResult;
pub use error::MappingError;
