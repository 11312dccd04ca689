//! Type tree definitions and textual representations.
//!
//! A `Type` is an immutable value tree. Structural parameters are owned
//! (`Box`/`Vec`) and fixed at construction; declarations that several trees
//! refer to (enums, typedefs, foreign types) are shared behind `Arc`, so a
//! tree is `Send + Sync` and can be read from any thread.
//!
//! Each type has two textual forms:
//! - **original**: the type as the user wrote it (`seq[IntList]`)
//! - **canonical**: the normalized form used as an identity key
//!   (`seq[seq[int]]`). Two types are the same type iff their canonical
//!   forms are equal.
//!
//! Enums and foreign types print as their declared name, so canonical forms
//! are scope-local: they identify types only among declarations of one
//! [`TypeScope`](crate::TypeScope), which rejects a name declared twice.

use std::fmt;
use std::sync::Arc;

use crate::kind::TypeKind;
use crate::primitives::PrimitiveType;

/// A type of the modeling language.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Type {
    Primitive(PrimitiveType),
    /// `seq[T]`
    Sequence(Box<Type>),
    /// `set[T]`
    Set(Box<Type>),
    /// `map[K, V]`
    Map { key: Box<Type>, value: Box<Type> },
    /// `(T1, T2, ...)`
    Tuple(Vec<Type>),
    /// `(a: T1, b: T2, ...)`
    NamedTuple(Vec<NamedField>),
    Enum(Arc<EnumDecl>),
    TypeDef(Arc<TypeDefDecl>),
    Permission(PermissionType),
    Foreign(Arc<ForeignDecl>),
}

/// Field of a named tuple. Field order is significant.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct NamedField {
    pub name: String,
    pub ty: Type,
}

impl NamedField {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Enum declaration: `enum Color { RED, GREEN = 5 }`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct EnumDecl {
    pub name: String,
    pub elements: Vec<EnumElement>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct EnumElement {
    pub name: String,
    pub value: i64,
}

impl EnumDecl {
    /// Build a declaration, numbering elements from zero in order.
    pub fn new<I, S>(name: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = elements
            .into_iter()
            .zip(0..)
            .map(|(name, value)| EnumElement {
                name: name.into(),
                value,
            })
            .collect();
        Self {
            name: name.into(),
            elements,
        }
    }

    pub fn element(&self, name: &str) -> Option<&EnumElement> {
        self.elements.iter().find(|e| e.name == name)
    }
}

/// Typedef declaration: `type Name = target;`.
///
/// The target is resolved before the declaration is built; see
/// [`TypeResolver`](crate::TypeResolver).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeDefDecl {
    pub name: String,
    pub target: Type,
}

/// Foreign type declaration: `type Name;` implemented outside the language.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ForeignDecl {
    pub name: String,
}

/// Machine reference that may only be sent the listed events.
///
/// Written either as an interface name (whose `receives` list supplies the
/// events) or inline as `any<E1, E2>`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PermissionType {
    /// Interface the permission was written as, if any.
    pub interface: Option<String>,
    /// Receivable events, in written order. May contain duplicates.
    pub events: Vec<String>,
}

impl PermissionType {
    pub fn inline<I, S>(events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interface: None,
            events: events.into_iter().map(Into::into).collect(),
        }
    }

    pub fn interface<I, S>(name: impl Into<String>, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interface: Some(name.into()),
            events: events.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this permission lets the holder send `event`.
    pub fn allows(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }

    /// Events sorted and deduplicated.
    pub fn event_set(&self) -> Vec<&str> {
        let mut events: Vec<&str> = self.events.iter().map(String::as_str).collect();
        events.sort_unstable();
        events.dedup();
        events
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Form {
    Original,
    Canonical,
}

impl Type {
    pub const ANY: Type = Type::Primitive(PrimitiveType::Any);
    pub const BOOL: Type = Type::Primitive(PrimitiveType::Bool);
    pub const INT: Type = Type::Primitive(PrimitiveType::Int);
    pub const FLOAT: Type = Type::Primitive(PrimitiveType::Float);
    pub const STRING: Type = Type::Primitive(PrimitiveType::String);
    pub const EVENT: Type = Type::Primitive(PrimitiveType::Event);
    pub const MACHINE: Type = Type::Primitive(PrimitiveType::Machine);
    pub const DATA: Type = Type::Primitive(PrimitiveType::Data);
    pub const NULL: Type = Type::Primitive(PrimitiveType::Null);

    pub fn seq(element: Type) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub fn set(element: Type) -> Self {
        Self::Set(Box::new(element))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn tuple(elements: impl IntoIterator<Item = Type>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    pub fn named_tuple<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Type)>,
        S: Into<String>,
    {
        Self::NamedTuple(
            fields
                .into_iter()
                .map(|(name, ty)| NamedField::new(name, ty))
                .collect(),
        )
    }

    pub fn typedef(name: impl Into<String>, target: Type) -> Self {
        Self::TypeDef(Arc::new(TypeDefDecl {
            name: name.into(),
            target,
        }))
    }

    pub fn foreign(name: impl Into<String>) -> Self {
        Self::Foreign(Arc::new(ForeignDecl { name: name.into() }))
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Primitive(_) => TypeKind::Primitive,
            Self::Sequence(_) => TypeKind::Sequence,
            Self::Set(_) => TypeKind::Set,
            Self::Map { .. } => TypeKind::Map,
            Self::Tuple(_) => TypeKind::Tuple,
            Self::NamedTuple(_) => TypeKind::NamedTuple,
            Self::Enum(_) => TypeKind::Enum,
            Self::TypeDef(_) => TypeKind::TypeDef,
            Self::Permission(_) => TypeKind::Permission,
            Self::Foreign(_) => TypeKind::Foreign,
        }
    }

    /// Element type of a sequence or set.
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Self::Sequence(elem) | Self::Set(elem) => Some(elem.as_ref()),
            _ => None,
        }
    }

    /// Strip typedef layers without allocating.
    pub fn unfold(&self) -> &Type {
        let mut ty = self;
        while let Self::TypeDef(decl) = ty {
            ty = &decl.target;
        }
        ty
    }

    /// Whether values of this type carry no machine reference.
    pub fn is_data(&self) -> bool {
        match self {
            Self::Primitive(prim) => prim.is_data(),
            Self::Sequence(elem) | Self::Set(elem) => elem.is_data(),
            Self::Map { key, value } => key.is_data() && value.is_data(),
            Self::Tuple(elems) => elems.iter().all(Type::is_data),
            Self::NamedTuple(fields) => fields.iter().all(|f| f.ty.is_data()),
            Self::Enum(_) | Self::Foreign(_) => true,
            Self::TypeDef(decl) => decl.target.is_data(),
            Self::Permission(_) => false,
        }
    }

    /// The type as declared by the user.
    pub fn original_representation(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out, Form::Original);
        out
    }

    /// The normalized form used for type identity.
    pub fn canonical_representation(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out, Form::Canonical);
        out
    }

    /// Whether both types denote the same type after normalization.
    ///
    /// Only meaningful for types resolved from the same scope; two unrelated
    /// enums that share a name compare equal here.
    pub fn is_same_type(&self, other: &Type) -> bool {
        self.canonical_representation() == other.canonical_representation()
    }

    fn write_repr(&self, out: &mut String, form: Form) {
        match self {
            Self::Primitive(prim) => out.push_str(prim.name()),
            Self::Sequence(elem) => {
                out.push_str("seq[");
                elem.write_repr(out, form);
                out.push(']');
            }
            Self::Set(elem) => {
                out.push_str("set[");
                elem.write_repr(out, form);
                out.push(']');
            }
            Self::Map { key, value } => {
                out.push_str("map[");
                key.write_repr(out, form);
                out.push_str(", ");
                value.write_repr(out, form);
                out.push(']');
            }
            Self::Tuple(elems) => {
                out.push('(');
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    elem.write_repr(out, form);
                }
                if elems.len() == 1 {
                    out.push(',');
                }
                out.push(')');
            }
            Self::NamedTuple(fields) => {
                out.push('(');
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&field.name);
                    out.push_str(": ");
                    field.ty.write_repr(out, form);
                }
                // Keeps the empty named tuple apart from the empty tuple `()`
                if fields.is_empty() {
                    out.push(':');
                }
                out.push(')');
            }
            Self::Enum(decl) => out.push_str(&decl.name),
            Self::Foreign(decl) => out.push_str(&decl.name),
            Self::TypeDef(decl) => match form {
                Form::Original => out.push_str(&decl.name),
                Form::Canonical => decl.target.write_repr(out, form),
            },
            Self::Permission(perm) => match (form, &perm.interface) {
                (Form::Original, Some(name)) => out.push_str(name),
                (Form::Original, None) => write_event_list(out, perm.events.iter()),
                (Form::Canonical, _) => write_event_list(out, perm.event_set().into_iter()),
            },
        }
    }
}

fn write_event_list<S: AsRef<str>>(out: &mut String, events: impl Iterator<Item = S>) {
    out.push_str("any<");
    for (i, event) in events.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(event.as_ref());
    }
    out.push('>');
}

impl From<PrimitiveType> for Type {
    fn from(prim: PrimitiveType) -> Self {
        Self::Primitive(prim)
    }
}

impl From<PermissionType> for Type {
    fn from(perm: PermissionType) -> Self {
        Self::Permission(perm)
    }
}

impl From<EnumDecl> for Type {
    fn from(decl: EnumDecl) -> Self {
        Self::Enum(Arc::new(decl))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_representation())
    }
}
