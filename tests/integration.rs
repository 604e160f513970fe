//! End-to-end tests: definitions loaded from JSON driven through every engine.
mod common;
use common::*;
use docform::schema::SchemaIssue;
use docform::prelude::*;
use serde_json::json;

#[test]
fn test_form_definition_parses_from_json() {
    let form = FormDefinition::from_json(ORDER_FORM_JSON).unwrap();
    assert_eq!(form.version, 2);
    assert_eq!(form.module, "sales");
    assert_eq!(form.fields.len(), 4);

    let amount = form.field_by_id("amount").unwrap();
    assert_eq!(amount.field_type, FieldType::Number);
    assert_eq!(amount.width, FieldWidth::Half);
    assert_eq!(amount.width.col_span(), 6);
    assert_eq!(amount.min, Some(1.0));

    let customer = form.field_by_name("customerType").unwrap();
    let options = customer.options.as_ref().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].value, Value::from("wholesale"));

    assert_eq!(form.rules[1].rule_type, RuleType::Computed);
}

#[test]
fn test_defaults_apply_to_sparse_definitions() {
    let form = FormDefinition::from_json(
        r#"{ "id": "f", "name": "F", "fields": [ { "id": "a", "name": "a", "label": "A", "type": "TEXT" } ] }"#,
    )
    .unwrap();
    assert_eq!(form.version, 1);
    let field = &form.fields[0];
    assert!(!field.required);
    assert_eq!(field.width, FieldWidth::Full);
    assert!(form.sections.is_empty());
}

#[test]
fn test_malformed_definition_is_a_schema_error() {
    assert!(matches!(
        FormDefinition::from_json(r#"{ "id": "f" }"#),
        Err(SchemaError::JsonParseError(_))
    ));
    assert!(matches!(
        FormDefinition::from_json(
            r#"{ "id": "f", "name": "F", "fields": [ { "id": "a", "name": "a", "label": "A", "type": "COLOR" } ] }"#
        ),
        Err(SchemaError::JsonParseError(_))
    ));
}

#[test]
fn test_dangling_references_are_reported_and_skipped() {
    let form = FormDefinition::from_json(ORDER_FORM_JSON).unwrap();

    let issues = form.reference_issues();
    assert_eq!(
        issues,
        vec![SchemaIssue::DanglingSectionField {
            section: "main".to_string(),
            field_id: "ghost".to_string(),
        }]
    );
    assert_eq!(
        issues[0].to_string(),
        "section 'main' references unknown field 'ghost'"
    );

    let ids: Vec<_> = form
        .section_fields(&form.sections[0])
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(ids, vec!["customerType", "amount", "discount"]);
}

#[test]
fn test_duplicate_references_are_reported() {
    let mut form = create_order_form();
    form.fields.push(FieldDefinition::new("amount", "Amount again", FieldType::Number));
    form.sections[0].field_ids.push("amount".to_string());
    form.rules.push(RuleDefinition::hide_when(
        "r-missing",
        "nowhere",
        MatchType::And,
        vec![RuleCondition::new("unknown", Operator::IsEmpty, None)],
    ));

    let issues = form.reference_issues();
    assert!(issues.contains(&SchemaIssue::DuplicateFieldId("amount".to_string())));
    assert!(issues.contains(&SchemaIssue::DuplicateFieldName("amount".to_string())));
    assert!(issues.contains(&SchemaIssue::DuplicateSectionField {
        section: "main".to_string(),
        field_id: "amount".to_string(),
    }));
    assert!(issues.contains(&SchemaIssue::DanglingRuleTarget {
        rule: "r-missing".to_string(),
        field_id: "nowhere".to_string(),
    }));
    assert!(issues.contains(&SchemaIssue::DanglingConditionField {
        rule: "r-missing".to_string(),
        field_id: "unknown".to_string(),
    }));

    let section: Vec<_> = form.section_fields(&form.sections[0]).iter().map(|f| f.id.as_str()).collect();
    assert_eq!(section, vec!["customerType", "amount", "discount"]);
}

#[test]
fn test_json_form_end_to_end() {
    let form = FormDefinition::from_json(ORDER_FORM_JSON).unwrap();
    let validator = FormValidator::new(&form).unwrap();

    let retail = value_map_from_json(json!({
        "customerType": "retail",
        "amount": "20000",
        "discount": 75,
    }));
    let hidden = evaluate_visibility(&form.rules, &retail);
    // COMPUTED rules are carried but never evaluated
    assert_eq!(hidden.len(), 1);
    assert!(hidden.contains("discount"));

    let errors = validator.validate_visible(&retail, &hidden);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("amount").map(String::as_str),
        Some("Value must be at most 10000")
    );

    let dto = map_values_to_dto(&form.fields, &retail);
    assert_eq!(dto.get("amount"), Some(&Value::Number(20000.0)));
    assert_eq!(dto.get("notes"), Some(&Value::Null));
}

#[test]
fn test_voucher_definition_end_to_end() {
    let json = serde_json::to_string(&create_invoice_voucher()).unwrap();
    let voucher = VoucherTypeDefinition::from_json(&json).unwrap();
    assert_eq!(voucher, create_invoice_voucher());
    assert_eq!(voucher.lines.add_label, "Add row");

    let header = value_map_from_json(json!({ "customer": "c-42", "date": "2024-05-01" }));
    let lines = vec![
        value_map_from_json(json!({ "item": "Paper", "qty": "10" })),
        value_map_from_json(json!({ "item": "Ink", "qty": 0 })),
    ];

    let hidden = evaluate_visibility(&voucher.header.rules, &header);
    let errors = VoucherValidator::new(&voucher)
        .unwrap()
        .validate_visible(&header, &lines, &hidden);
    assert!(errors.header.is_empty());
    assert_eq!(errors.lines.len(), 1);
    assert_eq!(errors.lines[0].row, 1);

    let dto = map_values_to_dto(&voucher.header.fields, &header);
    assert_eq!(dto.get("date"), Some(&Value::from("2024-05-01T00:00:00.000Z")));
    let row = map_values_to_dto(&voucher.lines.columns, &lines[0]);
    assert_eq!(row.get("qty"), Some(&Value::Number(10.0)));
}

#[test]
fn test_builder_helpers_serialize_to_designer_json() {
    let mut form = FormDefinition::new("f", "F");
    form.fields = vec![
        FieldDefinition::new("qty", "Quantity", FieldType::Number)
            .with_width(FieldWidth::Third)
            .with_default(1),
    ];
    form.sections = vec![SectionDefinition::new("main", &["qty"]).with_title("Main")];

    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["fields"][0]["type"], "NUMBER");
    assert_eq!(json["fields"][0]["width"], "1/3");
    assert_eq!(json["fields"][0]["defaultValue"], 1.0);
    assert_eq!(json["sections"][0]["title"], "Main");
    assert!(json["fields"][0].get("pattern").is_none());

    let voucher = create_invoice_voucher();
    let qty = voucher.lines.column_by_id("qty").unwrap();
    assert_eq!(qty.min, Some(1.0));
    assert!(voucher.lines.column_by_id("price").is_none());
}

#[test]
fn test_form_visibility_wrapper_matches_rule_list() {
    let form = create_order_form();
    let vals = value_map_from_json(json!({ "customerType": "retail", "amount": 500 }));
    let hidden = docform::rules::evaluate_form_visibility(&form, &vals);
    assert_eq!(hidden, evaluate_visibility(&form.rules, &vals));
    assert!(hidden.contains("discount"));
    assert!(!hidden.contains("notes"));
}
