use super::*;
use stubgen_descriptor::{
    ConstructorDescriptor, JavaType, MethodDescriptor, Modifiers, Parameter, Primitive,
    TypeDescriptor, TypeKind, Visibility,
};

fn abstract_public() -> Modifiers {
    Modifiers {
        visibility: Visibility::Public,
        is_abstract: true,
        ..Modifiers::default()
    }
}

fn method(name: &str, parameters: Vec<Parameter>, return_type: JavaType) -> MethodDescriptor {
    MethodDescriptor {
        name: name.to_string(),
        modifiers: abstract_public(),
        parameters,
        return_type,
    }
}

fn interface(simple_name: &str, methods: Vec<MethodDescriptor>) -> TypeDescriptor {
    TypeDescriptor {
        package: "com.example".to_string(),
        simple_name: simple_name.to_string(),
        kind: TypeKind::Interface,
        modifiers: abstract_public(),
        superclass: None,
        interfaces: vec![],
        declared_methods: methods,
        inherited_methods: vec![],
        constructors: vec![],
        code_source: None,
    }
}

fn abstract_class(simple_name: &str, constructors: Vec<ConstructorDescriptor>) -> TypeDescriptor {
    TypeDescriptor {
        package: "com.example".to_string(),
        simple_name: simple_name.to_string(),
        kind: TypeKind::Class,
        modifiers: abstract_public(),
        superclass: Some("java.lang.Object".to_string()),
        interfaces: vec![],
        declared_methods: vec![],
        inherited_methods: vec![],
        constructors,
        code_source: None,
    }
}

mod validation {
    use super::*;

    #[test]
    fn accepts_a_plain_interface() {
        let token = interface("Sized", vec![]);
        assert!(validate(&token).is_ok());
    }

    #[test]
    fn rejects_arrays_and_primitives() {
        let mut token = interface("Ints", vec![]);
        token.kind = TypeKind::Array;
        assert!(matches!(
            validate(&token),
            Err(GenerateError::ArrayToken { .. })
        ));

        token.kind = TypeKind::Primitive;
        assert!(matches!(
            validate(&token),
            Err(GenerateError::PrimitiveToken { .. })
        ));
    }

    #[test]
    fn rejects_private_and_final_types() {
        let mut token = interface("Hidden", vec![]);
        token.modifiers.visibility = Visibility::Private;
        assert!(matches!(
            validate(&token),
            Err(GenerateError::PrivateToken { .. })
        ));

        let mut token = abstract_class("Sealed", vec![ConstructorDescriptor::default()]);
        token.modifiers.visibility = Visibility::Public;
        token.modifiers.is_final = true;
        assert!(matches!(
            validate(&token),
            Err(GenerateError::FinalToken { .. })
        ));
    }

    #[test]
    fn rejects_enum_and_record_bases() {
        let mut token = abstract_class("Color", vec![ConstructorDescriptor::default()]);
        token.kind = TypeKind::Enum;
        assert!(matches!(
            validate(&token),
            Err(GenerateError::EnumToken { .. })
        ));

        let mut token = abstract_class("Point", vec![ConstructorDescriptor::default()]);
        token.superclass = Some("java.lang.Record".to_string());
        assert!(matches!(
            validate(&token),
            Err(GenerateError::RecordToken { .. })
        ));
    }

    #[test]
    fn rejects_classes_exposing_only_private_constructors() {
        let private_ctor = ConstructorDescriptor {
            modifiers: Modifiers {
                visibility: Visibility::Private,
                ..Modifiers::default()
            },
            parameters: vec![],
            throws: vec![],
        };
        let token = abstract_class("Singleton", vec![private_ctor]);
        assert!(matches!(
            validate(&token),
            Err(GenerateError::PrivateConstructorsOnly { .. })
        ));
    }

    #[test]
    fn rejection_reasons_name_the_token() {
        let mut token = interface("Hidden", vec![]);
        token.modifiers.visibility = Visibility::Private;
        let message = validate(&token).unwrap_err().to_string();
        assert!(message.contains("com.example.Hidden"));
    }
}

mod collection {
    use super::*;

    #[test]
    fn merges_declared_and_inherited_members_once() {
        let mut token = interface(
            "Countable",
            vec![method("size", vec![], JavaType::Primitive(Primitive::Int))],
        );
        // Same signature re-exposed by two ancestors, one covariantly.
        token
            .inherited_methods
            .push(method("size", vec![], JavaType::Primitive(Primitive::Int)));
        token
            .inherited_methods
            .push(method("size", vec![], JavaType::Primitive(Primitive::Long)));

        let collected = collect_methods(&token);
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].return_type, JavaType::Primitive(Primitive::Int));
    }

    #[test]
    fn skips_concrete_and_private_methods() {
        let mut concrete = method("size", vec![], JavaType::Primitive(Primitive::Int));
        concrete.modifiers.is_abstract = false;
        let mut private = method("clear", vec![], JavaType::Void);
        private.modifiers.visibility = Visibility::Private;
        let token = interface("Bag", vec![concrete, private]);

        assert!(collect_methods(&token).is_empty());
    }

    #[test]
    fn orders_methods_by_canonical_signature() {
        let token = interface(
            "Store",
            vec![
                method("remove", vec![], JavaType::Void),
                method("add", vec![], JavaType::Void),
                method("clear", vec![], JavaType::Void),
            ],
        );
        let names: Vec<&str> = collect_methods(&token)
            .into_iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["add", "clear", "remove"]);
    }

    #[test]
    fn interfaces_contribute_no_constructors() {
        let mut token = interface("Sized", vec![]);
        token.constructors.push(ConstructorDescriptor::default());
        assert!(collect_constructors(&token).is_empty());
    }

    #[test]
    fn private_constructors_are_filtered_out() {
        let accessible = ConstructorDescriptor {
            modifiers: Modifiers::public(),
            parameters: vec![],
            throws: vec![],
        };
        let private = ConstructorDescriptor {
            modifiers: Modifiers {
                visibility: Visibility::Private,
                ..Modifiers::default()
            },
            parameters: vec![Parameter::new("id", JavaType::Primitive(Primitive::Int))],
            throws: vec![],
        };
        let token = abstract_class("Handle", vec![accessible, private]);
        assert_eq!(collect_constructors(&token).len(), 1);
    }
}

mod rendering {
    use super::*;

    #[test]
    fn method_stub_returns_the_default_literal() {
        let size = method("size", vec![], JavaType::Primitive(Primitive::Int));
        let block = render_member(Member::Method(&size), "SizedImpl");
        assert_eq!(block, "public int size() {\n    return 0;\n}\n");
    }

    #[test]
    fn boolean_void_and_reference_defaults() {
        let flag = method("isEmpty", vec![], JavaType::Primitive(Primitive::Boolean));
        assert!(render_member(Member::Method(&flag), "X").contains("return false;"));

        let run = method("run", vec![], JavaType::Void);
        assert!(render_member(Member::Method(&run), "X").contains("\n    return;\n"));

        let name = method("name", vec![], JavaType::reference("java.lang.String"));
        let block = render_member(Member::Method(&name), "X");
        assert!(block.starts_with("public java.lang.String name() {"));
        assert!(block.contains("return null;"));
    }

    #[test]
    fn package_private_members_carry_no_modifier_token() {
        let mut helper = method("helper", vec![], JavaType::Void);
        helper.modifiers.visibility = Visibility::PackagePrivate;
        let block = render_member(Member::Method(&helper), "X");
        assert!(block.starts_with("void helper() {"));
    }

    #[test]
    fn protected_members_keep_their_modifier() {
        let mut hook = method("hook", vec![], JavaType::Void);
        hook.modifiers.visibility = Visibility::Protected;
        let block = render_member(Member::Method(&hook), "X");
        assert!(block.starts_with("protected void hook() {"));
    }

    #[test]
    fn parameter_lists_are_comma_separated_type_name_pairs() {
        let put = method(
            "put",
            vec![
                Parameter::new("key", JavaType::reference("java.lang.String")),
                Parameter::new("value", JavaType::Primitive(Primitive::Long)),
            ],
            JavaType::Void,
        );
        let block = render_member(Member::Method(&put), "X");
        assert!(block.starts_with("public void put(java.lang.String key, long value) {"));
    }

    #[test]
    fn constructor_forwards_parameters_and_declares_exceptions() {
        let constructor = ConstructorDescriptor {
            modifiers: Modifiers::public(),
            parameters: vec![Parameter::new("s", JavaType::reference("java.lang.String"))],
            throws: vec!["java.lang.IllegalArgumentException".to_string()],
        };
        let block = render_member(Member::Constructor(&constructor), "HolderImpl");
        assert_eq!(
            block,
            "public HolderImpl(java.lang.String s) throws java.lang.IllegalArgumentException {\n    super(s);\n}\n"
        );
    }

    #[test]
    fn constructor_without_exceptions_omits_the_throws_clause() {
        let constructor = ConstructorDescriptor {
            modifiers: Modifiers::public(),
            parameters: vec![],
            throws: vec![],
        };
        let block = render_member(Member::Constructor(&constructor), "HolderImpl");
        assert_eq!(block, "public HolderImpl() {\n    super();\n}\n");
    }
}

mod assembly {
    use super::*;

    #[test]
    fn interface_stub_implements_the_original_type() {
        let token = interface(
            "Sized",
            vec![method("size", vec![], JavaType::Primitive(Primitive::Int))],
        );
        let unit = assemble(&token).unwrap();
        let source = unit.to_source();

        assert!(source.starts_with("package com.example;\n\n"));
        assert!(source.contains("public class SizedImpl implements com.example.Sized {"));
        assert!(source.contains("    public int size() {"));
        assert!(source.contains("        return 0;"));
        assert!(source.trim_end().ends_with('}'));
        assert!(unit.constructors.is_empty());
    }

    #[test]
    fn class_stub_extends_and_declares_one_constructor_per_accessible_one() {
        let ctors = vec![
            ConstructorDescriptor {
                modifiers: Modifiers::public(),
                parameters: vec![],
                throws: vec![],
            },
            ConstructorDescriptor {
                modifiers: Modifiers::public(),
                parameters: vec![Parameter::new("s", JavaType::reference("java.lang.String"))],
                throws: vec!["java.lang.IllegalArgumentException".to_string()],
            },
            ConstructorDescriptor {
                modifiers: Modifiers {
                    visibility: Visibility::Private,
                    ..Modifiers::default()
                },
                parameters: vec![],
                throws: vec![],
            },
        ];
        let token = abstract_class("Holder", ctors);
        let unit = assemble(&token).unwrap();

        assert_eq!(unit.constructors.len(), 2);
        let source = unit.to_source();
        assert!(source.contains("public class HolderImpl extends com.example.Holder {"));
        assert!(source.contains(
            "    public HolderImpl(java.lang.String s) throws java.lang.IllegalArgumentException {"
        ));
        assert!(source.contains("        super(s);"));
    }

    #[test]
    fn default_package_types_omit_the_package_line() {
        let mut token = interface("Task", vec![]);
        token.package.clear();
        let unit = assemble(&token).unwrap();
        assert_eq!(unit.package, None);
        assert!(unit.to_source().starts_with("public class TaskImpl"));
    }

    #[test]
    fn inherited_duplicate_appears_exactly_once_in_the_unit() {
        let mut token = interface(
            "Countable",
            vec![method("size", vec![], JavaType::Primitive(Primitive::Int))],
        );
        token
            .inherited_methods
            .push(method("size", vec![], JavaType::Primitive(Primitive::Int)));

        let source = assemble(&token).unwrap().to_source();
        assert_eq!(source.matches("int size()").count(), 1);
    }

    #[test]
    fn assembly_is_deterministic_across_runs() {
        let token = interface(
            "Store",
            vec![
                method("remove", vec![], JavaType::Void),
                method("add", vec![], JavaType::Void),
            ],
        );
        let first = assemble(&token).unwrap().to_source();
        let second = assemble(&token).unwrap().to_source();
        assert_eq!(first, second);
    }

    #[test]
    fn assembly_fails_for_invalid_tokens() {
        let mut token = interface("Hidden", vec![]);
        token.modifiers.visibility = Visibility::Private;
        assert!(assemble(&token).is_err());
    }
}

mod encoding {
    use super::*;

    #[test]
    fn escapes_every_character_as_four_hex_digits() {
        assert_eq!(encode("A"), "\\u0041");
        assert_eq!(encode("{\n"), "\\u007b\\u000a");
    }

    #[test]
    fn output_is_seven_bit_clean() {
        let escaped = encode("class Überraschung {}");
        assert!(escaped.is_ascii());
        assert!(escaped.contains("\\u00dc"));
    }

    #[test]
    fn astral_characters_escape_as_surrogate_pairs() {
        assert_eq!(encode("\u{1D11E}"), "\\ud834\\udd1e");
    }

    #[test]
    fn encoding_is_lossless_over_the_utf16_units() {
        let source = "package a;\n\npublic class TImpl implements a.T {\n}\n";
        let escaped = encode(source);
        assert_eq!(escaped.len(), source.encode_utf16().count() * 6);
        assert_eq!(encode(source), escaped);
    }
}
