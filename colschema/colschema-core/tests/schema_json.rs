use colschema_core::{
    BitWidth, ElementBuilder, Field, FieldType, MAX_NESTING_DEPTH, Precision, Schema,
    SchemaBuilder, SchemaError,
};

fn sample_schema() -> Schema {
    SchemaBuilder::new()
        .utf8_field("id")
        .struct_field(
            "person",
            SchemaBuilder::new()
                .int32_unsigned_field("id")
                .utf8_field("name"),
        )
        .list_field(
            "addresses",
            SchemaBuilder::struct_builder(
                SchemaBuilder::new()
                    .utf8_field("city")
                    .utf8_field("zipcode"),
            ),
        )
        .binary_field("binary")
        .boolean_field("boolean")
        .floating_point_single_precision_field("double")
        .int32_signed_field("int32_signed")
        .null_field("null")
        .build()
}

#[test]
fn json_round_trip_preserves_schema() -> Result<(), SchemaError> {
    let schema = sample_schema();
    assert_eq!(Schema::from_json(&schema.to_json()?)?, schema);
    assert_eq!(Schema::from_json(&schema.to_json_pretty()?)?, schema);
    Ok(())
}

#[test]
fn from_str_parses_json() -> Result<(), SchemaError> {
    let schema = sample_schema();
    let parsed: Schema = schema.to_json()?.parse()?;
    assert_eq!(parsed, schema);
    Ok(())
}

#[test]
fn json_layout_follows_arrow_schema_form() -> Result<(), SchemaError> {
    let schema = SchemaBuilder::new()
        .int32_unsigned_field("id")
        .list_field(
            "scores",
            ElementBuilder::floating_point(Precision::Double),
        )
        .build();

    let expected = concat!(
        r#"{"fields":["#,
        r#"{"name":"id","nullable":true,"type":{"name":"int","bitWidth":32,"isSigned":false},"children":[]},"#,
        r#"{"name":"scores","nullable":true,"type":{"name":"list"},"children":["#,
        r#"{"name":null,"nullable":true,"type":{"name":"floatingpoint","precision":"DOUBLE"},"children":[]}"#,
        r#"]}]}"#,
    );
    assert_eq!(schema.to_json()?, expected);
    Ok(())
}

#[test]
fn optional_members_may_be_omitted() -> Result<(), SchemaError> {
    let text = r#"{
        "fields": [
            { "name": "flag", "nullable": false, "type": { "name": "bool" } },
            {
                "name": "tags",
                "nullable": true,
                "type": { "name": "list" },
                "children": [ { "nullable": true, "type": { "name": "utf8" } } ],
                "metadata": { "origin": "ignored" }
            }
        ]
    }"#;

    let schema = Schema::from_json(text)?;
    assert_eq!(schema.to_string(), "Schema<flag: Bool not null, tags: List<Utf8>>");
    assert_eq!(schema.field(1).map(|f| f.children()[0].name()), Some(None));
    Ok(())
}

#[test]
fn non_nullable_and_anonymous_fields_round_trip() -> Result<(), SchemaError> {
    let schema = Schema::new(vec![
        Field::new("", FieldType::Binary, false),
        Field::anonymous(FieldType::Struct(Default::default()), true),
    ]);
    assert_eq!(Schema::from_json(&schema.to_json()?)?, schema);
    Ok(())
}

#[test]
fn list_without_child_is_rejected() {
    let text = r#"{"fields":[{"name":"tags","nullable":true,"type":{"name":"list"},"children":[]}]}"#;
    match Schema::from_json(text) {
        Err(SchemaError::Parse { path, detail }) => {
            assert_eq!(path, "$.tags");
            assert!(detail.contains("exactly one child"), "{detail}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn list_with_two_children_is_rejected() {
    let child = r#"{"name":null,"nullable":true,"type":{"name":"utf8"}}"#;
    let text = format!(
        r#"{{"fields":[{{"name":"tags","nullable":true,"type":{{"name":"list"}},"children":[{child},{child}]}}]}}"#
    );
    let err = Schema::from_json(&text).expect_err("two list children");
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("found 2"), "{err}");
}

#[test]
fn primitive_with_children_is_rejected() {
    let text = r#"{"fields":[{"name":"s","nullable":true,"type":{"name":"struct"},"children":[
        {"name":"id","nullable":true,"type":{"name":"utf8"},"children":[
            {"name":"x","nullable":true,"type":{"name":"bool"}}
        ]}
    ]}]}"#;
    match Schema::from_json(text) {
        Err(SchemaError::Parse { path, .. }) => assert_eq!(path, "$.s.id"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unsupported_bit_width_reports_field() {
    let text = r#"{"fields":[{"name":"odd","nullable":true,"type":{"name":"int","bitWidth":12,"isSigned":true}}]}"#;
    match Schema::from_json(text) {
        Err(SchemaError::Parse { path, detail }) => {
            assert_eq!(path, "$.odd");
            assert!(detail.contains("12"), "{detail}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unknown_type_and_malformed_text_are_rejected() {
    let unknown = r#"{"fields":[{"name":"d","nullable":true,"type":{"name":"decimal"}}]}"#;
    assert!(matches!(Schema::from_json(unknown), Err(SchemaError::Json(_))));

    let truncated = r#"{"fields":[{"name":"d","#;
    let err = Schema::from_json(truncated).expect_err("truncated input");
    assert!(err.is_parse_error());

    let missing_nullable = r#"{"fields":[{"name":"d","type":{"name":"utf8"}}]}"#;
    assert!(matches!(Schema::from_json(missing_nullable), Err(SchemaError::Json(_))));
}

fn nested_lists(depth: usize) -> Schema {
    let mut element = ElementBuilder::utf8();
    for _ in 2..depth {
        element = ElementBuilder::list_of(element);
    }
    SchemaBuilder::new().list_field("deep", element).build()
}

fn nested_lists_json(depth: usize) -> String {
    let mut field = r#"{"name":null,"nullable":true,"type":{"name":"utf8"}}"#.to_string();
    for _ in 1..depth {
        field = format!(
            r#"{{"name":null,"nullable":true,"type":{{"name":"list"}},"children":[{field}]}}"#
        );
    }
    format!(r#"{{"fields":[{field}]}}"#)
}

#[test]
fn every_int_width_and_precision_round_trips() -> Result<(), SchemaError> {
    let mut builder = SchemaBuilder::new();
    for bit_width in [BitWidth::W8, BitWidth::W16, BitWidth::W32, BitWidth::W64] {
        for is_signed in [true, false] {
            let name = format!("int{}_{is_signed}", bit_width.bits());
            builder = builder
                .int_field(name.clone(), bit_width, is_signed)
                .list_field(format!("{name}_list"), ElementBuilder::int(bit_width, is_signed));
        }
    }
    for precision in [Precision::Half, Precision::Single, Precision::Double] {
        builder = builder
            .floating_point_field(precision.as_str(), precision)
            .list_field(
                format!("{}_list", precision.as_str()),
                ElementBuilder::floating_point(precision),
            );
    }
    let schema = builder.build();

    assert_eq!(schema.len(), 22);
    assert_eq!(Schema::from_json(&schema.to_json()?)?, schema);
    Ok(())
}

#[test]
fn list_of_list_round_trips() -> Result<(), SchemaError> {
    let schema = SchemaBuilder::new()
        .list_field(
            "matrix",
            ElementBuilder::list_of(ElementBuilder::floating_point(Precision::Half)),
        )
        .list_field(
            "rows",
            ElementBuilder::list_of(SchemaBuilder::struct_builder(
                SchemaBuilder::new()
                    .int_field("cell", BitWidth::W16, false)
                    .list_field("tags", ElementBuilder::list_of(ElementBuilder::binary())),
            )),
        )
        .build();

    let parsed = Schema::from_json(&schema.to_json_pretty()?)?;
    assert_eq!(parsed, schema);
    assert_eq!(
        parsed.to_string(),
        "Schema<matrix: List<List<FloatingPoint(HALF)>>, \
         rows: List<List<Struct<cell: Int(16, false), tags: List<List<Binary>>>>>>"
    );
    Ok(())
}

#[test]
fn deepest_allowed_nesting_round_trips() -> Result<(), SchemaError> {
    let schema = nested_lists(MAX_NESTING_DEPTH);
    assert_eq!(schema.nesting_depth(), MAX_NESTING_DEPTH);
    assert_eq!(Schema::from_json(&schema.to_json()?)?, schema);
    assert_eq!(Schema::from_json(&schema.to_json_pretty()?)?, schema);
    Ok(())
}

#[test]
fn nesting_beyond_limit_is_rejected_both_ways() {
    let schema = nested_lists(MAX_NESTING_DEPTH + 1);
    assert_eq!(schema.nesting_depth(), MAX_NESTING_DEPTH + 1);
    match schema.to_json() {
        Err(SchemaError::NestingTooDeep { depth, max }) => {
            assert_eq!(depth, MAX_NESTING_DEPTH + 1);
            assert_eq!(max, MAX_NESTING_DEPTH);
        }
        other => panic!("expected nesting error, got {other:?}"),
    }

    let err = Schema::from_json(&nested_lists_json(MAX_NESTING_DEPTH + 1))
        .expect_err("text nests past the limit");
    assert!(matches!(err, SchemaError::Parse { .. }), "{err}");

    let far_too_deep = Schema::from_json(&nested_lists_json(200)).expect_err("200 levels");
    assert!(far_too_deep.is_parse_error());
}

#[test]
fn hand_written_text_at_limit_parses() -> Result<(), SchemaError> {
    let schema = Schema::from_json(&nested_lists_json(MAX_NESTING_DEPTH))?;
    assert_eq!(schema.nesting_depth(), MAX_NESTING_DEPTH);
    Ok(())
}
