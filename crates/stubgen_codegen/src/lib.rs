// stubgen_codegen - stub implementation source generation
//
// The engine runs validate -> collect -> render -> assemble and hands a
// finished `StubUnit` to callers; encoding to the 7-bit-clean escaped
// form is a separate, final step so tests and tooling can inspect the
// plain source.
mod assemble;
mod builder;
mod collect;
mod encode;
mod error;
mod render;
mod validate;

pub use assemble::{assemble, StubUnit};
pub use builder::SourceBuilder;
pub use collect::{collect_constructors, collect_methods};
pub use encode::encode;
pub use error::GenerateError;
pub use render::{render_member, Member};
pub use validate::validate;

#[cfg(test)]
mod tests;
