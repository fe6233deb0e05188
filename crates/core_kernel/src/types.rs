//! Type pairs
//!
//! A [`TypePair`] is the registry key: an ordered (source, target) pair of
//! runtime type identities. Identity is the [`TypeId`]; the type name is kept
//! alongside it for error messages and listings only.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Runtime identity of a single type
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Describes the static type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the type identity
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the last path segment of the type name
    ///
    /// Two distinct types may share a short name, so this is for display only.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Ordered (source, target) pair identifying one directional mapping
///
/// Two pairs are equal iff both components are equal. `(A, B)` and `(B, A)`
/// are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    source: TypeDescriptor,
    target: TypeDescriptor,
}

impl TypePair {
    /// Creates a pair from two descriptors
    pub fn new(source: TypeDescriptor, target: TypeDescriptor) -> Self {
        Self { source, target }
    }

    /// Creates the pair for the static types `S` and `T`
    pub fn of<S: 'static, T: 'static>() -> Self {
        Self::new(TypeDescriptor::of::<S>(), TypeDescriptor::of::<T>())
    }

    pub fn source(&self) -> TypeDescriptor {
        self.source
    }

    pub fn target(&self) -> TypeDescriptor {
        self.target
    }

    /// Returns the pair for the opposite direction
    pub fn inverse(&self) -> Self {
        Self::new(self.target, self.source)
    }

    /// Returns true if this pair maps `S` to `T`
    pub fn is<S: 'static, T: 'static>(&self) -> bool {
        self.source.id == TypeId::of::<S>() && self.target.id == TypeId::of::<T>()
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

impl Serialize for TypePair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TypePair", 2)?;
        state.serialize_field("source", self.source.name)?;
        state.serialize_field("target", self.target.name)?;
        state.end()
    }
}
