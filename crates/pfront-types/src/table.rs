//! TypeTable: interns types by canonical form.
//!
//! Structurally equal types (however they were written) get the same
//! `TypeId`, so later passes can compare and key by type in O(1).
//! One table serves one `TypeScope`; canonical forms name enums and foreign
//! types without qualification.

use indexmap::IndexMap;

use crate::primitives::PrimitiveType;
use crate::types::Type;

/// Interned type identifier.
///
/// Index into the table. Values 0-8 are reserved for primitives; other
/// types start at index 9.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TypeId(pub u32);

pub const TYPE_ANY: TypeId = TypeId(PrimitiveType::Any.index());
pub const TYPE_BOOL: TypeId = TypeId(PrimitiveType::Bool.index());
pub const TYPE_INT: TypeId = TypeId(PrimitiveType::Int.index());
pub const TYPE_FLOAT: TypeId = TypeId(PrimitiveType::Float.index());
pub const TYPE_STRING: TypeId = TypeId(PrimitiveType::String.index());
pub const TYPE_EVENT: TypeId = TypeId(PrimitiveType::Event.index());
pub const TYPE_MACHINE: TypeId = TypeId(PrimitiveType::Machine.index());
pub const TYPE_DATA: TypeId = TypeId(PrimitiveType::Data.index());
pub const TYPE_NULL: TypeId = TypeId(PrimitiveType::Null.index());

impl TypeId {
    pub fn is_builtin(self) -> bool {
        PrimitiveType::is_builtin(self.0)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Registry of canonical types.
#[derive(Clone, Debug)]
pub struct TypeTable {
    /// Canonical representation -> canonical type. Position is the id.
    types: IndexMap<String, Type>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    pub fn new() -> Self {
        let mut table = Self {
            types: IndexMap::new(),
        };

        // Pre-register primitives at their expected IDs
        for prim in PrimitiveType::ALL {
            let id = table.intern(&Type::Primitive(prim));
            debug_assert_eq!(id.0, prim.index());
        }

        table
    }

    /// Intern a type, returning its ID. Deduplicates by canonical form.
    pub fn intern(&mut self, ty: &Type) -> TypeId {
        let key = ty.canonical_representation();
        if let Some(index) = self.types.get_index_of(&key) {
            return TypeId(index as u32);
        }

        let id = TypeId(self.types.len() as u32);
        tracing::trace!(id = id.0, canonical = %key, "interned type");
        self.types.insert(key, ty.canonicalize());
        id
    }

    /// Find the ID of an already-interned type.
    pub fn lookup(&self, ty: &Type) -> Option<TypeId> {
        self.types
            .get_index_of(&ty.canonical_representation())
            .map(|index| TypeId(index as u32))
    }

    /// Get the canonical type for a TypeId.
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get_index(id.index()).map(|(_, ty)| ty)
    }

    /// Get the canonical representation for a TypeId.
    pub fn canonical_name(&self, id: TypeId) -> Option<&str> {
        self.types.get_index(id.index()).map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate all interned types in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.types
            .values()
            .enumerate()
            .map(|(i, ty)| (TypeId(i as u32), ty))
    }
}
