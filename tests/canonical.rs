//! Tests for converting between the wizard config and the canonical document.
use docform::canonical::{ActionToggle, CURRENT_SCHEMA_VERSION};
use docform::prelude::*;

fn configured_wizard() -> WizardConfig {
    let mut wizard = WizardConfig::new("journal", "Journal voucher");
    wizard.rules.requires_approval = true;
    wizard.set_action("submit", true);
    wizard.set_action("save", true);
    wizard.set_action("export", true);
    wizard.auto_place(
        &AutoPlacer::default(),
        vec![
            FieldSelection::new("account", SectionType::Header),
            FieldSelection::new("entries", SectionType::Body),
        ],
    );
    wizard
}

#[test]
fn test_into_canonical_writes_current_version() {
    let canonical = configured_wizard().into_canonical().unwrap();
    assert_eq!(canonical.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(canonical.schema_version, 2);
    assert!(canonical.requires_approval);
    // toggle order, not the order they were switched on
    assert_eq!(canonical.enabled_actions, vec!["save", "submit", "export"]);
}

#[test]
fn test_layout_survives_round_trip() {
    let wizard = configured_wizard();
    let canonical = wizard.clone().into_canonical().unwrap();
    let json = canonical.to_json().unwrap();
    let restored = WizardConfig::from_canonical(CanonicalVoucherType::from_json(&json).unwrap()).unwrap();

    for mode in UiMode::ALL {
        assert_eq!(
            restored.ui_mode_overrides.mode(mode).to_snapshot(),
            wizard.ui_mode_overrides.mode(mode).to_snapshot()
        );
    }
    assert_eq!(restored.enabled_actions(), wizard.enabled_actions());
    assert!(restored.rules.requires_approval);
}

#[test]
fn test_from_canonical_fills_disabled_defaults() {
    let document = CanonicalVoucherType::from_json(
        r#"{ "schemaVersion": 2, "id": "v", "name": "V", "enabledActions": ["print", "save"] }"#,
    )
    .unwrap();
    let wizard = WizardConfig::from_canonical(document).unwrap();

    assert_eq!(
        wizard.actions,
        vec![
            ActionToggle::new("print", true),
            ActionToggle::new("save", true),
            ActionToggle::new("submit", false),
            ActionToggle::new("approve", false),
            ActionToggle::new("cancel", false),
        ]
    );
    assert!(!wizard.rules.requires_approval);
}

#[test]
fn test_unsupported_schema_version_is_rejected() {
    let document = CanonicalVoucherType::from_json(
        r#"{ "schemaVersion": 3, "id": "v", "name": "V" }"#,
    )
    .unwrap();
    match WizardConfig::from_canonical(document) {
        Err(CanonicalError::UnsupportedSchemaVersion { found, expected }) => {
            assert_eq!(found, 3);
            assert_eq!(expected, 2);
        }
        other => panic!("expected version error, got {:?}", other.map(|w| w.id)),
    }
}

#[test]
fn test_duplicate_actions_are_rejected() {
    let mut wizard = WizardConfig::new("v", "V");
    wizard.actions.push(ActionToggle::new("save", true));
    wizard.actions.push(ActionToggle::new("save", true));
    assert!(matches!(
        wizard.into_canonical(),
        Err(CanonicalError::DuplicateAction(action)) if action == "save"
    ));

    let document = CanonicalVoucherType::from_json(
        r#"{ "schemaVersion": 2, "id": "v", "name": "V", "enabledActions": ["cancel", "cancel"] }"#,
    )
    .unwrap();
    assert!(matches!(
        WizardConfig::from_canonical(document),
        Err(CanonicalError::DuplicateAction(_))
    ));
}

#[test]
fn test_malformed_json_is_reported() {
    assert!(matches!(
        CanonicalVoucherType::from_json("{ not json"),
        Err(CanonicalError::JsonParseError(_))
    ));
}

#[test]
fn test_auto_place_uses_enabled_actions() {
    let wizard = configured_wizard();
    let actions: Vec<_> = wizard
        .ui_mode_overrides
        .windows
        .fields(SectionType::Actions)
        .into_iter()
        .map(|f| f.field_id.clone())
        .collect();
    assert_eq!(actions, vec!["save", "submit", "export"]);
}
