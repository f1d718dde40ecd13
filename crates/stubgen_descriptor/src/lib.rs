// stubgen_descriptor - type descriptor model and introspection facility
mod index;
mod types;

pub use index::{DescriptorError, DescriptorIndex};
pub use types::{
    ConstructorDescriptor, JavaType, MethodDescriptor, Modifiers, Parameter, Primitive,
    TypeDescriptor, TypeKind, Visibility,
};
