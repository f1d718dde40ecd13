use crate::GenerateError;
use stubgen_descriptor::{TypeDescriptor, TypeKind};

const ENUM_BASE: &str = "java.lang.Enum";
const RECORD_BASE: &str = "java.lang.Record";

/// Reject descriptors that cannot legally be implemented, in a fixed
/// order with a distinct reason each. No side effects.
pub fn validate(token: &TypeDescriptor) -> Result<(), GenerateError> {
    let name = token.canonical_name();

    match token.kind {
        TypeKind::Array => return Err(GenerateError::ArrayToken { name }),
        TypeKind::Primitive => return Err(GenerateError::PrimitiveToken { name }),
        _ => {}
    }

    if token.modifiers.is_private() {
        return Err(GenerateError::PrivateToken { name });
    }
    if token.modifiers.is_final {
        return Err(GenerateError::FinalToken { name });
    }
    if token.kind == TypeKind::Enum || is_base(token, ENUM_BASE) {
        return Err(GenerateError::EnumToken { name });
    }
    if token.kind == TypeKind::Record || is_base(token, RECORD_BASE) {
        return Err(GenerateError::RecordToken { name });
    }

    // A class stub must call some super constructor; all-private (or
    // absent) declared constructors leave nothing to forward to.
    if !token.is_interface()
        && token
            .constructors
            .iter()
            .all(|constructor| constructor.modifiers.is_private())
    {
        return Err(GenerateError::PrivateConstructorsOnly { name });
    }

    Ok(())
}

fn is_base(token: &TypeDescriptor, base: &str) -> bool {
    token.canonical_name() == base || token.superclass.as_deref() == Some(base)
}
