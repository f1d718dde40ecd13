use thiserror::Error;

/// Validation failures for type descriptors that cannot legally be
/// implemented. One variant per rejection reason so diagnostics stay
/// distinct at the command surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid token: {name} is an array type")]
    ArrayToken { name: String },

    #[error("invalid token: {name} is a primitive type")]
    PrimitiveToken { name: String },

    #[error("invalid token: {name} is private")]
    PrivateToken { name: String },

    #[error("invalid token: {name} is final")]
    FinalToken { name: String },

    #[error("invalid token: {name} is an enumeration type")]
    EnumToken { name: String },

    #[error("invalid token: {name} is a record type")]
    RecordToken { name: String },

    #[error("invalid token: {name} exposes only private constructors")]
    PrivateConstructorsOnly { name: String },
}
