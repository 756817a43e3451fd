//! Arena of type declarations.
//!
//! Declarations refer to each other through [`TypeId`] handles, so shared and
//! recursive types need no reference counting. The graph is built once by a
//! loader and only read afterwards.

use crate::types::{GraphError, Kind, Member, TypeDecl, TypeId};

#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    decls: Vec<TypeDecl>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration and return its handle. Handles are assigned
    /// sequentially from zero.
    pub fn add(&mut self, decl: TypeDecl) -> TypeId {
        let id = TypeId(self.decls.len());
        self.decls.push(decl);
        id
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDecl> {
        self.decls.get(id.0)
    }

    /// Like [`get`](Self::get) but a dangling handle is an error.
    pub fn resolve(&self, id: TypeId) -> Result<&TypeDecl, GraphError> {
        self.get(id).ok_or(GraphError::UnknownType(id))
    }

    pub fn member_type(&self, member: &Member) -> Result<&TypeDecl, GraphError> {
        self.resolve(member.ty)
    }

    /// Element type of a list or map declaration, if it has one.
    pub fn elem(&self, decl: &TypeDecl) -> Result<Option<&TypeDecl>, GraphError> {
        decl.elem.map(|id| self.resolve(id)).transpose()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        self.decls.iter().enumerate().map(|(i, d)| (TypeId(i), d))
    }

    /// Top-level declarations: every type that carries a name, in insertion order.
    pub fn named(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        self.iter().filter(|(_, d)| d.name.is_some())
    }

    /// Named declarations other than builtins: what a checker walks.
    pub fn declared(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        self.named().filter(|(_, d)| d.kind != Kind::Builtin)
    }
}
