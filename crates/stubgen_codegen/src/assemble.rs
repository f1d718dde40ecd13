use crate::{collect_constructors, collect_methods, render_member, validate};
use crate::{GenerateError, Member, SourceBuilder};
use stubgen_descriptor::TypeDescriptor;

const INDENT: &str = "    ";

/// Fully-rendered stub compilation unit. Built once per generation
/// call and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubUnit {
    pub package: Option<String>,
    pub class_header: String,
    pub constructors: Vec<String>,
    pub methods: Vec<String>,
}

impl StubUnit {
    pub fn to_source(&self) -> String {
        let mut builder = SourceBuilder::new(INDENT);

        if let Some(package) = &self.package {
            builder.push_line(&format!("package {};", package));
            builder.push_line("");
        }

        builder.push_line(&format!("{} {{", self.class_header));
        builder.indent();
        for block in self.constructors.iter().chain(self.methods.iter()) {
            builder.push_block(block);
        }
        builder.dedent();
        builder.push_line("}");

        builder.build()
    }
}

/// Validate the descriptor and compose the stub unit: package line,
/// class header extending or implementing the original type, one
/// constructor block per accessible declared constructor, one method
/// block per abstract member, in collection order.
pub fn assemble(token: &TypeDescriptor) -> Result<StubUnit, GenerateError> {
    validate(token)?;

    let stub_name = token.stub_name();
    let relation = if token.is_interface() {
        "implements"
    } else {
        "extends"
    };
    let class_header = format!(
        "public class {} {} {}",
        stub_name,
        relation,
        token.canonical_name()
    );

    let constructors = collect_constructors(token)
        .into_iter()
        .map(|constructor| render_member(Member::Constructor(constructor), &stub_name))
        .collect();
    let methods = collect_methods(token)
        .into_iter()
        .map(|method| render_member(Member::Method(method), &stub_name))
        .collect();

    Ok(StubUnit {
        package: (!token.package.is_empty()).then(|| token.package.clone()),
        class_header,
        constructors,
        methods,
    })
}
