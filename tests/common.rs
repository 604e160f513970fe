//! Common test utilities for building definitions and value maps.
use docform::prelude::*;
use serde_json::json;

/// A small order form.
///
/// Rules: `discount` is hidden when `customerType`
/// EQUALS "retail"; `notes` is hidden when `amount` is empty OR below 10.
#[allow(dead_code)]
pub fn create_order_form() -> FormDefinition {
    let mut form = FormDefinition::new("order", "Order");
    form.module = "sales".to_string();
    form.fields = vec![
        FieldDefinition::new("customerType", "Customer type", FieldType::Select).required(),
        FieldDefinition::new("amount", "Amount", FieldType::Number)
            .required()
            .with_min(1.0)
            .with_max(10_000.0),
        FieldDefinition::new("discount", "Discount", FieldType::Number).with_max(50.0),
        FieldDefinition::new("code", "Code", FieldType::Text).with_pattern("^[A-Z]{3}-\\d+$"),
        FieldDefinition::new("notes", "Notes", FieldType::Textarea),
        FieldDefinition::new("delivery", "Delivery date", FieldType::Date),
        FieldDefinition::new("express", "Express", FieldType::Checkbox),
    ];
    form.sections = vec![
        SectionDefinition::new("main", &["customerType", "amount", "discount"]),
        SectionDefinition::new("extra", &["code", "notes", "delivery", "express"]),
    ];
    form.rules = vec![
        RuleDefinition::hide_when(
            "r-discount",
            "discount",
            MatchType::And,
            vec![RuleCondition::new(
                "customerType",
                Operator::Equals,
                Some(Value::from("retail")),
            )],
        ),
        RuleDefinition::hide_when(
            "r-notes",
            "notes",
            MatchType::Or,
            vec![
                RuleCondition::new("amount", Operator::IsEmpty, None),
                RuleCondition::new("amount", Operator::LessThan, Some(Value::from(10))),
            ],
        ),
    ];
    form
}

/// Values that satisfy every check of [`create_order_form`].
#[allow(dead_code)]
pub fn create_valid_order_values() -> ValueMap {
    value_map_from_json(json!({
        "customerType": "wholesale",
        "amount": "250",
        "discount": 5,
        "code": "ABC-12",
        "notes": "leave at the door",
        "delivery": "2024-06-01",
        "express": true,
    }))
}

/// The order form as JSON, the way a designer would persist it.
#[allow(dead_code)]
pub const ORDER_FORM_JSON: &str = r#"{
    "id": "order",
    "name": "Order",
    "module": "sales",
    "version": 2,
    "fields": [
        { "id": "customerType", "name": "customerType", "label": "Customer type", "type": "SELECT",
          "required": true,
          "options": [ { "label": "Retail", "value": "retail" }, { "label": "Wholesale", "value": "wholesale" } ] },
        { "id": "amount", "name": "amount", "label": "Amount", "type": "NUMBER", "width": "1/2",
          "required": true, "min": 1, "max": 10000 },
        { "id": "discount", "name": "discount", "label": "Discount", "type": "NUMBER", "width": "1/4", "max": 50 },
        { "id": "notes", "name": "notes", "label": "Notes", "type": "TEXTAREA" }
    ],
    "sections": [
        { "id": "main", "title": "Main", "fieldIds": ["customerType", "amount", "discount", "ghost"] }
    ],
    "rules": [
        { "id": "r-discount", "type": "VISIBILITY", "targetFieldId": "discount", "matchType": "AND",
          "conditions": [ { "fieldId": "customerType", "operator": "EQUALS", "value": "retail" } ] },
        { "id": "r-computed", "type": "COMPUTED", "targetFieldId": "notes",
          "conditions": [] }
    ]
}"#;

/// A voucher with a two-column line table limited to 1..=3 rows.
#[allow(dead_code)]
pub fn create_invoice_voucher() -> VoucherTypeDefinition {
    let mut header = FormDefinition::new("invoice-header", "Invoice");
    header.fields = vec![
        FieldDefinition::new("customer", "Customer", FieldType::Relation)
            .required()
            .with_relation("customers"),
        FieldDefinition::new("date", "Date", FieldType::Date).required(),
    ];
    let lines = TableDefinition::new(
        "invoice-lines",
        "lines",
        vec![
            FieldDefinition::new("item", "Item", FieldType::Text).required(),
            FieldDefinition::new("qty", "Quantity", FieldType::Number)
                .required()
                .with_min(1.0),
        ],
    )
    .with_row_limits(Some(1), Some(3));

    VoucherTypeDefinition {
        id: "invoice".to_string(),
        name: "Invoice".to_string(),
        header,
        lines,
        summary_fields: vec![FieldDefinition::new("total", "Total", FieldType::Number)],
    }
}

/// Builds a value map from `(key, value)` pairs.
#[allow(dead_code)]
pub fn values(pairs: &[(&str, Value)]) -> ValueMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
