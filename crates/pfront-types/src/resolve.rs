//! Resolution of parsed type syntax into `Type` trees.
//!
//! The parser produces [`TypeExpr`] values that refer to declarations by
//! name, possibly before the declaration appears. Resolution replaces every
//! name with the declared type, producing a fresh immutable tree. Typedefs
//! are resolved on first use and shared afterwards, so two references to the
//! same typedef point to the same `Arc<TypeDefDecl>`. A shared typedef
//! still counts its full expansion against the recursion fuel, so whether
//! an expression resolves never depends on what was resolved before it.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use crate::config::ResolverConfig;
use crate::primitives::PrimitiveType;
use crate::types::{EnumDecl, ForeignDecl, NamedField, PermissionType, Type, TypeDefDecl};
use crate::{Error, Result};

/// Type syntax as produced by the parser.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeExpr {
    /// Primitive keyword or declared type name.
    Name(String),
    Seq(Box<TypeExpr>),
    Set(Box<TypeExpr>),
    Map(Box<TypeExpr>, Box<TypeExpr>),
    Tuple(Vec<TypeExpr>),
    NamedTuple(Vec<(String, TypeExpr)>),
    /// Inline permission type: `any<E1, E2>`.
    AnyOf(Vec<String>),
}

impl TypeExpr {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn seq(element: TypeExpr) -> Self {
        Self::Seq(Box::new(element))
    }

    pub fn set(element: TypeExpr) -> Self {
        Self::Set(Box::new(element))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }
}

#[derive(Clone, Debug)]
enum Decl {
    TypeDef(TypeExpr),
    Enum(Arc<EnumDecl>),
    Interface(Vec<String>),
    Foreign(Arc<ForeignDecl>),
}

/// Declarations visible to type resolution.
///
/// Declaration order does not matter for resolution; it is kept so that
/// [`TypeResolver::resolve_typedefs`] reports in source order.
#[derive(Clone, Debug, Default)]
pub struct TypeScope {
    decls: IndexMap<String, Decl>,
    events: IndexSet<String>,
}

impl TypeScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// `type name = target;`
    pub fn declare_typedef(&mut self, name: impl Into<String>, target: TypeExpr) -> Result<()> {
        self.declare(name.into(), Decl::TypeDef(target))
    }

    /// `enum name { elements }`
    pub fn declare_enum(&mut self, decl: EnumDecl) -> Result<()> {
        let name = decl.name.clone();
        self.declare(name, Decl::Enum(Arc::new(decl)))
    }

    /// `interface name() receives events;`
    pub fn declare_interface<I, S>(&mut self, name: impl Into<String>, receives: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let events = receives.into_iter().map(Into::into).collect();
        self.declare(name.into(), Decl::Interface(events))
    }

    /// `type name;` implemented outside the language.
    pub fn declare_foreign(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let decl = Arc::new(ForeignDecl { name: name.clone() });
        self.declare(name, Decl::Foreign(decl))
    }

    /// `event name;`
    pub fn declare_event(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.events.contains(&name) {
            return Err(Error::DuplicateDeclaration(name));
        }
        self.events.insert(name);
        Ok(())
    }

    pub fn has_event(&self, name: &str) -> bool {
        self.events.contains(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.decls.contains_key(name)
    }

    fn declare(&mut self, name: String, decl: Decl) -> Result<()> {
        if PrimitiveType::from_name(&name).is_some() {
            return Err(Error::ReservedName(name));
        }
        if self.decls.contains_key(&name) {
            return Err(Error::DuplicateDeclaration(name));
        }
        self.decls.insert(name, decl);
        Ok(())
    }
}

/// Resolves [`TypeExpr`] trees against a [`TypeScope`].
pub struct TypeResolver<'a> {
    scope: &'a TypeScope,
    config: ResolverConfig,
    /// Resolved typedefs with the nesting depth their expansion needs.
    typedefs: HashMap<String, (Arc<TypeDefDecl>, u32)>,
    /// Typedefs currently being expanded, outermost first.
    in_progress: Vec<String>,
    depth: u32,
    /// Deepest nesting reached by the current expansion.
    max_depth: u32,
}

impl<'a> TypeResolver<'a> {
    pub fn new(scope: &'a TypeScope) -> Self {
        Self::with_config(scope, ResolverConfig::default())
    }

    pub fn with_config(scope: &'a TypeScope, config: ResolverConfig) -> Self {
        Self {
            scope,
            config,
            typedefs: HashMap::new(),
            in_progress: Vec::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    /// Resolve a type expression into a type tree.
    pub fn resolve(&mut self, expr: &TypeExpr) -> Result<Type> {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        let result = self.resolve_inner(expr);
        self.depth -= 1;
        result
    }

    /// Resolve every declared typedef, in declaration order.
    ///
    /// Surfaces errors in typedefs that no other type refers to.
    pub fn resolve_typedefs(&mut self) -> Result<Vec<Arc<TypeDefDecl>>> {
        let scope = self.scope;
        scope
            .decls
            .iter()
            .filter(|(_, decl)| matches!(decl, Decl::TypeDef(_)))
            .map(|(name, _)| self.resolve_typedef(name))
            .collect()
    }

    fn resolve_inner(&mut self, expr: &TypeExpr) -> Result<Type> {
        if let Some(limit) = self.config.recursion_fuel
            && self.depth > limit
        {
            return Err(Error::RecursionLimitExceeded);
        }

        let ty = match expr {
            TypeExpr::Name(name) => self.resolve_name(name)?,
            TypeExpr::Seq(elem) => Type::seq(self.resolve(elem)?),
            TypeExpr::Set(elem) => Type::set(self.resolve(elem)?),
            TypeExpr::Map(key, value) => Type::map(self.resolve(key)?, self.resolve(value)?),
            TypeExpr::Tuple(elems) if elems.is_empty() => return Err(Error::EmptyTuple),
            TypeExpr::NamedTuple(fields) if fields.is_empty() => return Err(Error::EmptyTuple),
            TypeExpr::Tuple(elems) => Type::Tuple(
                elems
                    .iter()
                    .map(|e| self.resolve(e))
                    .collect::<Result<_>>()?,
            ),
            TypeExpr::NamedTuple(fields) => Type::NamedTuple(
                fields
                    .iter()
                    .map(|(name, e)| Ok(NamedField::new(name.clone(), self.resolve(e)?)))
                    .collect::<Result<_>>()?,
            ),
            TypeExpr::AnyOf(events) => {
                self.check_events(events)?;
                Type::Permission(PermissionType::inline(events.iter().cloned()))
            }
        };
        Ok(ty)
    }

    fn resolve_name(&mut self, name: &str) -> Result<Type> {
        if let Some(prim) = PrimitiveType::from_name(name) {
            return Ok(Type::Primitive(prim));
        }

        let scope = self.scope;
        match scope.decls.get(name) {
            Some(Decl::TypeDef(_)) => Ok(Type::TypeDef(self.resolve_typedef(name)?)),
            Some(Decl::Enum(decl)) => Ok(Type::Enum(Arc::clone(decl))),
            Some(Decl::Foreign(decl)) => Ok(Type::Foreign(Arc::clone(decl))),
            Some(Decl::Interface(events)) => {
                self.check_events(events)?;
                Ok(Type::Permission(PermissionType::interface(
                    name,
                    events.iter().cloned(),
                )))
            }
            None => Err(Error::UnknownType(name.to_owned())),
        }
    }

    fn resolve_typedef(&mut self, name: &str) -> Result<Arc<TypeDefDecl>> {
        if let Some((decl, expansion)) = self.typedefs.get(name) {
            let reached = self.depth + expansion;
            if let Some(limit) = self.config.recursion_fuel
                && reached > limit
            {
                return Err(Error::RecursionLimitExceeded);
            }
            let decl = Arc::clone(decl);
            self.max_depth = self.max_depth.max(reached);
            return Ok(decl);
        }

        if let Some(start) = self.in_progress.iter().position(|n| n == name) {
            let mut path = self.in_progress[start..].to_vec();
            path.push(name.to_owned());
            tracing::debug!(?path, "cyclic typedef");
            return Err(Error::CyclicTypeDef(path));
        }

        let scope = self.scope;
        let Some(Decl::TypeDef(target)) = scope.decls.get(name) else {
            return Err(Error::UnknownType(name.to_owned()));
        };

        let start = self.depth;
        let outer_max = std::mem::replace(&mut self.max_depth, start);
        self.in_progress.push(name.to_owned());
        let target = self.resolve(target);
        self.in_progress.pop();
        let expansion = self.max_depth - start;
        self.max_depth = self.max_depth.max(outer_max);

        let decl = Arc::new(TypeDefDecl {
            name: name.to_owned(),
            target: target?,
        });
        tracing::debug!(
            typedef = name,
            canonical = %decl.target.canonical_representation(),
            "resolved typedef"
        );
        self.typedefs
            .insert(name.to_owned(), (Arc::clone(&decl), expansion));
        Ok(decl)
    }

    fn check_events(&self, events: &[String]) -> Result<()> {
        if !self.config.check_events {
            return Ok(());
        }
        match events.iter().find(|e| !self.scope.has_event(e)) {
            Some(event) => Err(Error::UnknownEvent(event.clone())),
            None => Ok(()),
        }
    }
}
