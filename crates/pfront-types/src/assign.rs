//! Assignability: can a value of one type be stored in a location of another?
//!
//! Every variant follows the same two steps: a kind gate on the source type,
//! then a variant-specific structural comparison. The predicate is total;
//! any mismatch, including across kinds, is `false`.
//!
//! Typedefs are transparent on both sides: the source is unfolded before the
//! gate, and a typedef target delegates to its definition.

use std::sync::Arc;

use crate::primitives::PrimitiveType;
use crate::types::{PermissionType, Type};

/// A failed assignability check, ready to be turned into a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value of type `{found}` cannot be assigned to `{expected}`")]
pub struct TypeMismatch {
    /// Original representation of the location's type.
    pub expected: String,
    /// Original representation of the value's type.
    pub found: String,
}

impl Type {
    /// Whether a value of type `other` may be assigned into a location of
    /// this type.
    ///
    /// Collections are covariant in their element types: assignment copies
    /// the collection, so a `seq[E]` may flow into `seq[T]` whenever `E` flows
    /// into `T`.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        let source = other.unfold();
        match self {
            Self::TypeDef(decl) => decl.target.is_assignable_from(source),
            Self::Primitive(prim) => primitive_accepts(*prim, source),
            Self::Sequence(elem) => {
                matches!(source, Self::Sequence(other) if elem.is_assignable_from(other))
            }
            Self::Set(elem) => {
                matches!(source, Self::Set(other) if elem.is_assignable_from(other))
            }
            Self::Map { key, value } => match source {
                Self::Map {
                    key: other_key,
                    value: other_value,
                } => key.is_assignable_from(other_key) && value.is_assignable_from(other_value),
                _ => false,
            },
            Self::Tuple(elems) => match source {
                Self::Tuple(others) => {
                    elems.len() == others.len()
                        && elems
                            .iter()
                            .zip(others)
                            .all(|(elem, other)| elem.is_assignable_from(other))
                }
                _ => false,
            },
            Self::NamedTuple(fields) => match source {
                Self::NamedTuple(others) => {
                    fields.len() == others.len()
                        && fields.iter().zip(others).all(|(field, other)| {
                            field.name == other.name && field.ty.is_assignable_from(&other.ty)
                        })
                }
                _ => false,
            },
            Self::Enum(decl) => {
                matches!(source, Self::Enum(other) if Arc::ptr_eq(decl, other) || decl == other)
            }
            Self::Foreign(decl) => {
                matches!(source, Self::Foreign(other) if Arc::ptr_eq(decl, other) || decl == other)
            }
            Self::Permission(perm) => permission_accepts(perm, source),
        }
    }
}

fn primitive_accepts(target: PrimitiveType, source: &Type) -> bool {
    match source {
        Type::Primitive(prim) => target.accepts(*prim),
        Type::Permission(_) => matches!(target, PrimitiveType::Any | PrimitiveType::Machine),
        _ => match target {
            PrimitiveType::Any => true,
            PrimitiveType::Data => source.is_data(),
            _ => false,
        },
    }
}

/// The source must grant at least every event the target requires.
fn permission_accepts(target: &PermissionType, source: &Type) -> bool {
    match source {
        Type::Permission(other) => target.events.iter().all(|event| other.allows(event)),
        Type::Primitive(PrimitiveType::Null) => true,
        _ => false,
    }
}

/// Check that `source` may be assigned into a location of type `target`.
pub fn check_assignable(target: &Type, source: &Type) -> Result<(), TypeMismatch> {
    if target.is_assignable_from(source) {
        return Ok(());
    }
    Err(TypeMismatch {
        expected: target.original_representation(),
        found: source.original_representation(),
    })
}
