//! Canonicalization.
//!
//! Rebuilds a type in fully normalized form. Not memoized: every call
//! allocates a fresh tree. Use [`TypeTable`](crate::TypeTable) when a cache
//! keyed by structure is wanted.

use std::sync::Arc;

use crate::types::{NamedField, PermissionType, Type};

impl Type {
    /// Return an equivalent type with every structural parameter normalized.
    ///
    /// Typedefs unfold to their canonical target. Permissions become the
    /// inline `any<...>` form with a sorted, deduplicated event list.
    /// Declared nominal types (enums, foreign types) are returned as is.
    pub fn canonicalize(&self) -> Type {
        match self {
            Self::Primitive(prim) => Self::Primitive(*prim),
            Self::Sequence(elem) => Self::seq(elem.canonicalize()),
            Self::Set(elem) => Self::set(elem.canonicalize()),
            Self::Map { key, value } => Self::map(key.canonicalize(), value.canonicalize()),
            Self::Tuple(elems) => Self::Tuple(elems.iter().map(Type::canonicalize).collect()),
            Self::NamedTuple(fields) => Self::NamedTuple(
                fields
                    .iter()
                    .map(|f| NamedField::new(f.name.clone(), f.ty.canonicalize()))
                    .collect(),
            ),
            Self::Enum(decl) => Self::Enum(Arc::clone(decl)),
            Self::Foreign(decl) => Self::Foreign(Arc::clone(decl)),
            Self::TypeDef(decl) => decl.target.canonicalize(),
            Self::Permission(perm) => Self::Permission(PermissionType::inline(perm.event_set())),
        }
    }

    /// Whether this type is already in canonical form.
    pub fn is_canonical(&self) -> bool {
        match self {
            Self::Primitive(_) | Self::Enum(_) | Self::Foreign(_) => true,
            Self::Sequence(elem) | Self::Set(elem) => elem.is_canonical(),
            Self::Map { key, value } => key.is_canonical() && value.is_canonical(),
            Self::Tuple(elems) => elems.iter().all(Type::is_canonical),
            Self::NamedTuple(fields) => fields.iter().all(|f| f.ty.is_canonical()),
            Self::TypeDef(_) => false,
            Self::Permission(perm) => {
                perm.interface.is_none()
                    && perm.events.len() == perm.event_set().len()
                    && perm.events.is_sorted()
            }
        }
    }
}
