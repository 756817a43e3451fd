use serde::{Deserialize, Serialize};

/// Kinds of type declarations in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Builtin,
    Struct,
    Map,
    Slice,
    Pointer,
    Alias,
    Interface,
    Other,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Builtin => "builtin",
            Kind::Struct => "struct",
            Kind::Map => "map",
            Kind::Slice => "slice",
            Kind::Pointer => "pointer",
            Kind::Alias => "alias",
            Kind::Interface => "interface",
            Kind::Other => "other",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable handle of a declaration inside a [`TypeGraph`](crate::graph::TypeGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub usize);

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Package-qualified name of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName {
    #[serde(default)]
    pub package: String,
    pub name: String,
}

impl TypeName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// One type declaration: a struct, a list, a scalar, and so on.
///
/// `members` is only meaningful for [`Kind::Struct`], `elem` only for
/// [`Kind::Slice`] and [`Kind::Map`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub kind: Kind,
    pub name: Option<TypeName>,
    pub members: Vec<Member>,
    pub elem: Option<TypeId>,
}

impl TypeDecl {
    /// An anonymous declaration of the given kind with no members or element.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            name: None,
            members: Vec::new(),
            elem: None,
        }
    }

    pub fn builtin(name: &str) -> Self {
        Self::new(Kind::Builtin).named("", name)
    }

    pub fn structure(members: Vec<Member>) -> Self {
        Self {
            members,
            ..Self::new(Kind::Struct)
        }
    }

    pub fn slice(elem: Option<TypeId>) -> Self {
        Self {
            elem,
            ..Self::new(Kind::Slice)
        }
    }

    pub fn named(mut self, package: &str, name: &str) -> Self {
        self.name = Some(TypeName::new(package, name));
        self
    }

    pub fn is_struct(&self) -> bool {
        self.kind == Kind::Struct
    }

    /// Short name for diagnostics, empty for anonymous types.
    pub fn display_name(&self) -> &str {
        self.name.as_ref().map(|n| n.name.as_str()).unwrap_or("")
    }

    pub fn package(&self) -> &str {
        self.name.as_ref().map(|n| n.package.as_str()).unwrap_or("")
    }
}

/// A field of a struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub ty: TypeId,
    pub embedded: bool,
    /// Comment lines attached to the field, in source order.
    pub annotation_lines: Vec<String>,
}

impl Member {
    pub fn new(name: &str, ty: TypeId) -> Self {
        Self {
            name: name.to_string(),
            ty,
            embedded: false,
            annotation_lines: Vec::new(),
        }
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub fn annotated(mut self, line: &str) -> Self {
        self.annotation_lines.push(line.to_string());
        self
    }

    /// True if any annotation line contains `marker` as a substring.
    pub fn has_annotation(&self, marker: &str) -> bool {
        self.annotation_lines.iter().any(|l| l.contains(marker))
    }
}

/// Errors raised when a graph reference cannot be followed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Unknown type reference {0}")]
    UnknownType(TypeId),
}
