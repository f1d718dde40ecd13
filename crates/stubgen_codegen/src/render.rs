use crate::SourceBuilder;
use stubgen_descriptor::{ConstructorDescriptor, MethodDescriptor, Modifiers, Parameter, Visibility};

const INDENT: &str = "    ";

/// Tagged view over the two member kinds the renderer handles. The
/// filters in `collect` run before this stage, so a member arriving
/// here is never private.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Method(&'a MethodDescriptor),
    Constructor(&'a ConstructorDescriptor),
}

impl<'a> Member<'a> {
    fn modifiers(&self) -> &Modifiers {
        match self {
            Member::Method(method) => &method.modifiers,
            Member::Constructor(constructor) => &constructor.modifiers,
        }
    }

    fn parameters(&self) -> &[Parameter] {
        match self {
            Member::Method(method) => &method.parameters,
            Member::Constructor(constructor) => &constructor.parameters,
        }
    }
}

/// Render one member into its declaration line plus default body.
///
/// Methods return the type-appropriate default value; constructors
/// forward their parameters to the super constructor. `stub_name` is
/// the simple name of the generated class and replaces the method
/// name position for constructors.
pub fn render_member(member: Member<'_>, stub_name: &str) -> String {
    let mut declaration = String::new();
    declaration.push_str(access_modifier(member.modifiers()));

    match member {
        Member::Method(method) => {
            declaration.push_str(method.return_type.canonical_name());
            declaration.push(' ');
            declaration.push_str(&method.name);
        }
        Member::Constructor(_) => declaration.push_str(stub_name),
    }

    declaration.push('(');
    declaration.push_str(&render_parameters(member.parameters()));
    declaration.push(')');

    if let Member::Constructor(constructor) = member {
        if !constructor.throws.is_empty() {
            declaration.push_str(" throws ");
            declaration.push_str(&constructor.throws.join(", "));
        }
    }
    declaration.push_str(" {");

    let mut builder = SourceBuilder::new(INDENT);
    builder.push_line(&declaration);
    builder.indent();
    match member {
        Member::Constructor(constructor) => {
            let names: Vec<&str> = constructor
                .parameters
                .iter()
                .map(|parameter| parameter.name.as_str())
                .collect();
            builder.push_line(&format!("super({});", names.join(", ")));
        }
        Member::Method(method) => match method.return_type.default_literal() {
            Some(literal) => builder.push_line(&format!("return {};", literal)),
            None => builder.push_line("return;"),
        },
    }
    builder.dedent();
    builder.push_line("}");
    builder.build()
}

/// `public` and `protected` are emitted verbatim; package-private
/// members carry no modifier token.
fn access_modifier(modifiers: &Modifiers) -> &'static str {
    match modifiers.visibility {
        Visibility::Public => "public ",
        Visibility::Protected => "protected ",
        Visibility::PackagePrivate | Visibility::Private => "",
    }
}

fn render_parameters(parameters: &[Parameter]) -> String {
    let rendered: Vec<String> = parameters
        .iter()
        .map(|parameter| format!("{} {}", parameter.ty.canonical_name(), parameter.name))
        .collect();
    rendered.join(", ")
}
