use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of runtime type a descriptor stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Record,
    Primitive,
    Array,
}

/// Java access levels carried by type and member modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::PackagePrivate
    }
}

/// Modifier set shared by types, methods, and constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl Modifiers {
    pub fn public() -> Self {
        Self {
            visibility: Visibility::Public,
            ..Self::default()
        }
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// The eight Java primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// Literal a stub body returns for this primitive.
    pub fn default_literal(&self) -> &'static str {
        match self {
            Primitive::Boolean => "false",
            _ => "0",
        }
    }
}

/// Erased Java type reference as it appears in source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JavaType {
    Primitive(Primitive),
    Void,
    Reference { name: String },
}

impl JavaType {
    pub fn reference(name: impl Into<String>) -> Self {
        JavaType::Reference { name: name.into() }
    }

    /// Fully qualified, dot-separated source-text name.
    pub fn canonical_name(&self) -> &str {
        match self {
            JavaType::Primitive(primitive) => primitive.canonical_name(),
            JavaType::Void => "void",
            JavaType::Reference { name } => name,
        }
    }

    /// Default-value literal for a `return` statement, `None` for void.
    pub fn default_literal(&self) -> Option<&'static str> {
        match self {
            JavaType::Primitive(primitive) => Some(primitive.default_literal()),
            JavaType::Void => None,
            JavaType::Reference { .. } => Some("null"),
        }
    }
}

/// One formal parameter of a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: JavaType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: JavaType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Shape of one method reachable through a type's hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: JavaType,
}

impl MethodDescriptor {
    /// Canonical signature key: name plus the ordered parameter type
    /// sequence. Two methods with equal keys are the same member no
    /// matter which ancestor declared them or how their return types
    /// covary.
    pub fn signature(&self) -> String {
        let parameter_types: Vec<&str> = self
            .parameters
            .iter()
            .map(|parameter| parameter.ty.canonical_name())
            .collect();
        format!("{}({})", self.name, parameter_types.join(","))
    }
}

/// Shape of one constructor declared directly on a type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Canonical names of declared checked exceptions.
    #[serde(default)]
    pub throws: Vec<String>,
}

/// Introspectable handle describing a class or interface.
///
/// Supplied by the descriptor catalog and never mutated by the
/// generator. `inherited_methods` is the flattened view of members
/// re-exposed through the hierarchy, mirroring what a reflective
/// `getMethods` walk would return next to `declared_methods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(default)]
    pub package: String,
    pub simple_name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub declared_methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub inherited_methods: Vec<MethodDescriptor>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    /// Location of the compiled code for this type, used as the javac
    /// classpath in archive mode.
    #[serde(default)]
    pub code_source: Option<PathBuf>,
}

impl TypeDescriptor {
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Simple name of the stub type generated for this descriptor.
    pub fn stub_name(&self) -> String {
        format!("{}Impl", self.simple_name)
    }
}
