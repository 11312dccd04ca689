//! Type kind discriminant.
//!
//! Every `Type` variant maps to exactly one kind. The kind is what the
//! assignability gate compares before looking at structure.

/// Discriminant of a [`Type`](crate::Type) variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    /// Builtin keyword type (`int`, `bool`, `machine`, ...).
    Primitive,
    /// `seq[T]` - ordered sequence with copy semantics.
    Sequence,
    /// `set[T]` - unordered collection of distinct values.
    Set,
    /// `map[K, V]` - key/value collection.
    Map,
    /// `(T1, T2)` - positional tuple.
    Tuple,
    /// `(a: T1, b: T2)` - tuple with named fields.
    NamedTuple,
    /// User-declared enumeration.
    Enum,
    /// Named alias for another type (`type Foo = seq[int];`).
    TypeDef,
    /// Machine reference restricted to a set of receivable events.
    Permission,
    /// Type implemented outside the language.
    Foreign,
}

impl TypeKind {
    /// Whether this is a builtin keyword type.
    pub fn is_primitive(self) -> bool {
        matches!(self, Self::Primitive)
    }

    /// Whether this is a collection type (Sequence, Set, Map).
    pub fn is_collection(self) -> bool {
        matches!(self, Self::Sequence | Self::Set | Self::Map)
    }

    /// Whether this is a tuple type, positional or named.
    pub fn is_tuple(self) -> bool {
        matches!(self, Self::Tuple | Self::NamedTuple)
    }

    /// Whether values of this kind are identified by their declaration.
    ///
    /// Typedefs are nominal in their original form only; assignability
    /// looks through them.
    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Enum | Self::TypeDef | Self::Foreign)
    }

    /// Get the display name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Sequence => "sequence",
            Self::Set => "set",
            Self::Map => "map",
            Self::Tuple => "tuple",
            Self::NamedTuple => "named tuple",
            Self::Enum => "enum",
            Self::TypeDef => "typedef",
            Self::Permission => "permission",
            Self::Foreign => "foreign",
        }
    }
}
