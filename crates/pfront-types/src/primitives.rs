//! Builtin primitive types.
//!
//! Primitives occupy the first slots of every `TypeTable`, so their index
//! doubles as their `TypeId`.

pub const TYPE_ANY: u32 = 0;
pub const TYPE_BOOL: u32 = 1;
pub const TYPE_INT: u32 = 2;
pub const TYPE_FLOAT: u32 = 3;
pub const TYPE_STRING: u32 = 4;
pub const TYPE_EVENT: u32 = 5;
pub const TYPE_MACHINE: u32 = 6;
pub const TYPE_DATA: u32 = 7;
pub const TYPE_NULL: u32 = 8;

/// Builtin keyword types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u32)]
pub enum PrimitiveType {
    /// Top type: holds any value, including machine references.
    Any = TYPE_ANY,
    Bool = TYPE_BOOL,
    Int = TYPE_INT,
    Float = TYPE_FLOAT,
    String = TYPE_STRING,
    /// Event identifier value.
    Event = TYPE_EVENT,
    /// Unrestricted machine reference.
    Machine = TYPE_MACHINE,
    /// Any value that carries no machine reference.
    Data = TYPE_DATA,
    /// Type of the `null` literal.
    Null = TYPE_NULL,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 9] = [
        Self::Any,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::String,
        Self::Event,
        Self::Machine,
        Self::Data,
        Self::Null,
    ];

    /// Try to convert a type index to a primitive type.
    #[inline]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Get the type index for this primitive.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Check if a type index is a builtin primitive.
    #[inline]
    pub fn is_builtin(index: u32) -> bool {
        index <= TYPE_NULL
    }

    /// Keyword spelling, used for both original and canonical forms.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Event => "event",
            Self::Machine => "machine",
            Self::Data => "data",
            Self::Null => "null",
        }
    }

    /// Parse a keyword back into a primitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Whether `null` may be stored in a location of this type.
    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            Self::Any | Self::Data | Self::Event | Self::Machine | Self::Null
        )
    }

    /// Whether values of this primitive are data (carry no machine reference).
    pub fn is_data(self) -> bool {
        !matches!(self, Self::Any | Self::Machine)
    }

    /// Primitive-to-primitive assignability.
    ///
    /// No numeric coercion: `float` does not accept `int`.
    pub fn accepts(self, other: PrimitiveType) -> bool {
        if self == other || self == Self::Any {
            return true;
        }
        match self {
            Self::Data => other.is_data(),
            Self::Event | Self::Machine => other == Self::Null,
            _ => false,
        }
    }
}
