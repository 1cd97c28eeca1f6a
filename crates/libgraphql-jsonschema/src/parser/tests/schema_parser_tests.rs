use crate::OperationKind;
use crate::ParseError;
use crate::Schema;
use crate::SchemaParser;
use crate::types::DeclarationError;
use crate::types::Dimensionality;
use crate::types::EnumType;
use crate::types::ListType;
use crate::types::ObjectType;
use crate::types::ScalarKind;
use crate::types::TypeModel;

fn parse(lines: &[&str]) -> Schema {
    SchemaParser::new().parse_str(&lines.join("\n")).unwrap()
}

fn non_null(mut model: TypeModel) -> TypeModel {
    model.mark_non_null();
    model
}

fn object(fields: Vec<(&str, TypeModel)>) -> TypeModel {
    let mut object_type = ObjectType::new();
    for (key, value) in fields {
        object_type.add_field(key, value);
    }
    object_type.into()
}

const TRANSLATE_KEY: &str =
    "translate( fromLanguage: Language toLanguage: Language text: String )";

fn multi_line_translate(return_type: &str) -> Vec<String> {
    [
        "\"\"\"",
        "Translates a string from a give language into a different language.",
        "\"\"\"",
        "\ttranslate(",
        "\t\t\"The original language that 'text' is provided in.\"",
        "\t\tfromLanguage: Language",
        "",
        "\t\t\"The translated language to be returned.\"",
        "\t\ttoLanguage: Language",
        "",
        "\t\t\"The text to be translated.\"",
        "\t\ttext: String",
    ].iter()
        .map(|line| line.to_string())
        .chain([format!("\t): {return_type}")])
        .collect()
}

fn operation_block(opener: &str, body: Vec<String>) -> Vec<String> {
    let mut lines = vec![opener.to_string()];
    lines.extend(body);
    lines.push("}".to_string());
    lines
}

#[test]
fn objects() {
    let person = object(vec![
        ("name", TypeModel::scalar(ScalarKind::String)),
        ("age", TypeModel::scalar(ScalarKind::Int)),
        ("picture", TypeModel::reference("Url")),
    ]);
    let schema = parse(&["type Person {", "\tname: String", "\tage: Int", "\tpicture: Url", "}"]);
    assert_eq!(schema.types().get("Person"), Some(&person));

    for lines in [&["type Person {", "}"][..], &["\ttype Person {\t", "\t}\t"][..]] {
        let schema = parse(lines);
        assert_eq!(schema.types().get("Person"), Some(&object(vec![])));
    }

    let schema = parse(&["type Person {", "\tpicture: Url!", "}"]);
    assert_eq!(
        schema.types().get("Person"),
        Some(&object(vec![("picture", non_null(TypeModel::reference("Url")))])),
    );

    let schema = parse(&["type Person implements Style {", "\tname: String", "}"]);
    assert_eq!(
        schema.types().get("Person"),
        Some(&object(vec![("name", TypeModel::scalar(ScalarKind::String))])),
    );
}

#[test]
fn object_with_non_null_fields() {
    let schema = parse(&[
        "type Person {",
        "\tname: String!",
        "\tage: Int",
        "\tpicture: Url!",
        "}",
    ]);

    let mut expected = Schema::new();
    expected.add_type("Person", object(vec![
        ("name", non_null(TypeModel::scalar(ScalarKind::String))),
        ("age", TypeModel::scalar(ScalarKind::Int)),
        ("picture", non_null(TypeModel::reference("Url"))),
    ]));
    assert_eq!(schema, expected);
}

#[test]
fn object_bodies_skip_comments_descriptions_and_stray_lines() {
    let mut parser = SchemaParser::new();
    let schema = parser.parse_str(&[
        "type Person {",
        "  # The person's name.",
        "  \"Full name\"",
        "  name: String",
        "  \"\"\"",
        "  Age in years: rounded down.",
        "  \"\"\"",
        "  age: Int",
        "",
        "  not a field",
        "  query: String",
        "  tags(first: Int): [String!]! @deprecated",
        "}",
    ].join("\n")).unwrap();

    let mut tags = ListType::parse("[String!]!").unwrap();
    tags.mark_non_null();
    assert_eq!(schema.types().get("Person"), Some(&object(vec![
        ("name", TypeModel::scalar(ScalarKind::String)),
        ("age", TypeModel::scalar(ScalarKind::Int)),
        ("query", TypeModel::scalar(ScalarKind::String)),
        ("tags(first: Int)", tags.into()),
    ])));

    let diagnostics = parser.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line(), "not a field");
    assert_eq!(diagnostics[0].line_number(), 10);
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn object_fields_with_multi_line_arguments() {
    let schema = parse(&[
        "type Person {",
        "  picture(",
        "    \"Edge length in pixels\"",
        "    size: Int",
        "  ): Url!",
        "}",
    ]);
    assert_eq!(
        schema.types().get("Person"),
        Some(&object(vec![("picture( size: Int )", non_null(TypeModel::reference("Url")))])),
    );
}

#[test]
fn scalars_register_as_strings() {
    let cases = [
        ("scalar UUID", "UUID"),
        (" scalar UUID", "UUID"),
        ("\tscalar UUID", "UUID"),
        ("scalar UUID ", "UUID"),
        ("scalar UUID\t", "UUID"),
        (" scalar UUID ", "UUID"),
        ("\tscalar UUID\t", "UUID"),
        ("scalar URL", "URL"),
        ("scalar url", "url"),
        ("scalar UUID123", "UUID123"),
        ("scalar UUID @specifiedBy(url: \"https://tools.ietf.org/html/rfc4122\")", "UUID"),
    ];

    for (line, expected_name) in cases {
        let schema = parse(&[line]);
        assert_eq!(schema.types().len(), 1, "for {line:?}");
        assert_eq!(
            schema.types().get(expected_name),
            Some(&TypeModel::scalar(ScalarKind::String)),
            "for {line:?}",
        );
    }
}

#[test]
fn unions_in_both_forms_parse_identically() {
    let members = vec!["Photo".to_string(), "Person".to_string()];
    let forms: [&[&str]; 4] = [
        &["union SearchResult = Photo | Person"],
        &["union SearchResult =", "| Photo", "| Person"],
        &["union SearchResult =", "  | Photo | Person"],
        &["union SearchResult = Photo", "| Person", "type After {", "}"],
    ];

    for lines in forms {
        let schema = parse(lines);
        assert_eq!(schema.unions().get("SearchResult"), Some(&members), "for {lines:?}");
    }
}

#[test]
fn enums() {
    let schema = parse(&["enum Direction {", "\tNORTH", "\tEAST", "\tSOUTH", "\tWEST", "}"]);
    let expected: EnumType = ["NORTH", "EAST", "SOUTH", "WEST"].into_iter().collect();
    assert_eq!(schema.types().get("Direction"), Some(&TypeModel::from(expected)));

    let schema = parse(&["enum Count {", "\tONE", "}"]);
    let expected: EnumType = ["ONE"].into_iter().collect();
    assert_eq!(schema.types().get("Count"), Some(&TypeModel::from(expected)));

    let schema = parse(&["enum Empty {", "}"]);
    assert_eq!(schema.types().get("Empty"), Some(&TypeModel::from(EnumType::new())));
}

#[test]
fn enum_bodies_skip_comments_descriptions_and_blanks() {
    let schema = parse(&[
        "enum Direction {",
        "# Comment",
        "\"Description\"",
        "\"\"\"",
        "Multi-line description.",
        "\"\"\"",
        "one",
        "",
        "two @deprecated(reason: \"Use three.\")",
        "two",
        "three",
    ]);

    let expected: EnumType = ["one", "two", "three"].into_iter().collect();
    let mut expected_schema = Schema::new();
    expected_schema.add_type("Direction", expected.into());
    assert_eq!(schema, expected_schema);
}

#[test]
fn query_operations() {
    let schema = parse(&[
        "type Query {",
        "\ttranslate(fromLanguage: Language, toLanguage: Language, text: String): String",
        "}",
    ]);
    let mut expected = Schema::new();
    expected.add_query(
        "translate(fromLanguage: Language, toLanguage: Language, text: String)",
        TypeModel::scalar(ScalarKind::String),
    );
    assert_eq!(schema, expected);

    let schema = parse(&["type Query {", "\tfoo: Int", "}"]);
    assert_eq!(schema.queries().get("foo"), Some(&TypeModel::scalar(ScalarKind::Int)));

    let schema = parse(&["type Query {", "\tfoo: UUID", "}"]);
    assert_eq!(schema.queries().get("foo"), Some(&TypeModel::reference("UUID")));
}

#[test]
fn multi_line_operation_declarations() {
    let cases = [
        ("String", TypeModel::scalar(ScalarKind::String)),
        ("UUID", TypeModel::reference("UUID")),
    ];

    for (opener, kind) in [
        ("type Query {", OperationKind::Query),
        ("type Mutation {", OperationKind::Mutation),
        ("type Subscription {", OperationKind::Subscription),
    ] {
        for (return_type, expected_value) in &cases {
            let lines = operation_block(opener, multi_line_translate(return_type));
            let schema = SchemaParser::new().parse_str(&lines.join("\n")).unwrap();

            let mut expected = Schema::new();
            expected.add_operation(kind, TRANSLATE_KEY, expected_value.clone());
            assert_eq!(schema, expected, "for {opener} returning {return_type}");
        }
    }
}

#[test]
fn several_operations_in_one_block() {
    for (opener, kind) in [
        ("type Query {", OperationKind::Query),
        ("extend type Mutation {", OperationKind::Mutation),
        ("type Subscription {", OperationKind::Subscription),
    ] {
        let schema = parse(&[
            opener,
            "\tgetText: ID",
            "\t# Comment between operations.",
            "\tgetVersion: String",
            "\tisLive: Boolean!",
            "\tgetAccount: Account",
            "}",
        ]);

        let mut expected = Schema::new();
        expected.add_operation(kind, "getText", TypeModel::scalar(ScalarKind::Id));
        expected.add_operation(kind, "getVersion", TypeModel::scalar(ScalarKind::String));
        expected.add_operation(kind, "isLive", non_null(TypeModel::scalar(ScalarKind::Boolean)));
        expected.add_operation(kind, "getAccount", TypeModel::reference("Account"));
        assert_eq!(schema, expected, "for {opener}");
        assert_eq!(
            schema.operations(kind).keys().collect::<Vec<_>>(),
            vec!["getText", "getVersion", "isLive", "getAccount"],
        );
    }
}

#[test]
fn schema_block_rebinds_root_types() {
    for (binding, kind) in [
        ("\tquery: Foo", OperationKind::Query),
        ("\tmutation: Foo", OperationKind::Mutation),
        ("\tsubscription: Foo", OperationKind::Subscription),
    ] {
        let mut parser = SchemaParser::new();
        let schema = parser.parse_str(&[
            "schema {",
            binding,
            "}",
            "",
            "type Foo {",
            "\ttestApi(query: String, types: [String]): String",
            "}",
        ].join("\n")).unwrap();

        let mut expected = Schema::new();
        expected.set_root_type_name(kind, "Foo");
        expected.add_operation(
            kind,
            "testApi(query: String, types: [String])",
            TypeModel::scalar(ScalarKind::String),
        );
        assert_eq!(schema, expected, "for {binding:?}");
        assert!(parser.diagnostics().is_empty());
    }
}

#[test]
fn list_fields_carry_all_three_nullability_markers() {
    let schema = parse(&["type Grid {", "\tcells: [[Int!]!]!", "\trows: [[Int]]", "}"]);
    let grid = schema.types().get("Grid").and_then(TypeModel::as_object).unwrap();

    let cells = grid.field("cells").and_then(TypeModel::as_list).unwrap();
    assert_eq!(cells.dimensionality(), Dimensionality::Multi);
    assert!(!cells.element().nullable());
    assert_eq!(cells.inner_dimension_nullability().map(|n| n.is_nullable()), Some(false));
    assert!(!grid.field("cells").unwrap().nullable());

    let rows = grid.field("rows").and_then(TypeModel::as_list).unwrap();
    assert!(rows.element().nullable());
    assert_eq!(rows.inner_dimension_nullability().map(|n| n.is_nullable()), Some(true));
    assert!(grid.field("rows").unwrap().nullable());
}

#[test]
fn unmatched_top_level_lines_become_diagnostics() {
    let mut parser = SchemaParser::new();
    let schema = parser.parse_str(&[
        "input EnrolledInput {",
        "  userId: String",
        "}",
        "",
        "   ",
        "type Query {",
        "  me: User",
        "}",
    ].join("\n")).unwrap();

    assert_eq!(schema.queries().get("me"), Some(&TypeModel::reference("User")));
    let diagnostics = parser.diagnostics();
    assert_eq!(
        diagnostics.iter()
            .map(|diagnostic| (diagnostic.line_number(), diagnostic.line()))
            .collect::<Vec<_>>(),
        vec![(1, "input EnrolledInput {"), (2, "  userId: String")],
    );
    assert!(diagnostics.iter().all(|diagnostic| diagnostic.file_path().is_none()));
    assert_eq!(
        diagnostics[0].to_string(),
        "line 1: Unmatched line of text `input EnrolledInput {`",
    );
}

#[test]
fn malformed_declarations_abort_with_their_line_number() {
    let err = SchemaParser::new().parse_str(&[
        "type Person {",
        "  name: String",
        "  cube: [[[Int]]]",
        "}",
    ].join("\n")).unwrap_err();

    match err {
        ParseError::Declaration { file_path, line_number, source } => {
            assert_eq!(file_path, None);
            assert_eq!(line_number, 3);
            assert_eq!(
                source,
                DeclarationError::MalformedListSignature("[[[Int]]]".to_string()),
            );
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unterminated_argument_list_is_malformed() {
    let err = SchemaParser::new().parse_str(&[
        "type Query {",
        "  search(",
        "    text: String",
        "}",
    ].join("\n")).unwrap_err();

    assert!(matches!(
        err,
        ParseError::Declaration {
            line_number: 3,
            source: DeclarationError::MalformedDeclaration(_),
            ..
        },
    ));
}

#[test]
fn stray_lines_fail_operation_blocks_but_not_object_bodies() {
    for opener in ["type Query {", "type Mutation {", "type Subscription {"] {
        let mut parser = SchemaParser::new();
        let err = parser.parse_str(&[
            opener,
            "  me: Person Person",
            "  you: Int",
            "}",
        ].join("\n")).unwrap_err();

        match err {
            ParseError::Declaration { line_number, source, .. } => {
                assert_eq!(line_number, 2, "for {opener}");
                assert_eq!(
                    source,
                    DeclarationError::MalformedDeclaration("me: Person Person".to_string()),
                );
            },
            other => panic!("unexpected error for {opener}: {other:?}"),
        }
        assert!(parser.diagnostics().is_empty());
    }

    let err = SchemaParser::new().parse_str(&[
        "type Query {",
        "  me: Person",
        "  not a declaration",
        "}",
    ].join("\n")).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Declaration {
            line_number: 3,
            source: DeclarationError::MalformedDeclaration(_),
            ..
        },
    ));

    let mut parser = SchemaParser::new();
    let schema = parser.parse_str(&[
        "type A {",
        "  me: Person Person",
        "  you: Int",
        "}",
    ].join("\n")).unwrap();
    assert_eq!(
        schema.types().get("A"),
        Some(&object(vec![("you", TypeModel::scalar(ScalarKind::Int))])),
    );
    let diagnostics = parser.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line(), "me: Person Person");
    assert_eq!(diagnostics[0].line_number(), 2);
}

#[test]
fn later_declarations_overwrite_earlier_ones() {
    let schema = parse(&[
        "type Person {",
        "  name: String",
        "}",
        "type Person {",
        "  age: Int",
        "}",
    ]);
    assert_eq!(
        schema.types().get("Person"),
        Some(&object(vec![("age", TypeModel::scalar(ScalarKind::Int))])),
    );
}

#[test]
fn list_element_types_resolve_lazily() {
    let schema = parse(&["type Query {", "  photos: [Photo!]", "}", "type Photo {", "  url: Url", "}"]);
    let photos = schema.queries().get("photos").and_then(TypeModel::as_list).unwrap();
    assert_eq!(photos.dimensionality(), Dimensionality::Single);
    assert_eq!(
        photos.element().as_reference().map(|reference| reference.target_name()),
        Some("Photo"),
    );
    assert!(schema.types().contains_key("Photo"));
}
