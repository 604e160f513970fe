use super::{
    ActionToggle, CURRENT_SCHEMA_VERSION, CanonicalLayout, CanonicalVoucherType, DEFAULT_ACTIONS,
    WizardConfig, WizardRules,
};
use crate::error::CanonicalError;
use crate::layout::VoucherLayoutConfig;
use ahash::AHashSet;

/// Conversion of a designer-side type into the persisted canonical document.
pub trait IntoCanonical {
    fn into_canonical(self) -> Result<CanonicalVoucherType, CanonicalError>;
}

/// Conversion of a canonical document back into a designer-side type.
pub trait FromCanonical: Sized {
    fn from_canonical(document: CanonicalVoucherType) -> Result<Self, CanonicalError>;
}

fn ensure_unique(actions: &[String]) -> Result<(), CanonicalError> {
    let mut seen = AHashSet::new();
    match actions.iter().find(|a| !seen.insert(a.as_str())) {
        Some(duplicate) => Err(CanonicalError::DuplicateAction(duplicate.clone())),
        None => Ok(()),
    }
}

impl IntoCanonical for WizardConfig {
    fn into_canonical(self) -> Result<CanonicalVoucherType, CanonicalError> {
        let enabled_actions = self.enabled_actions();
        ensure_unique(&enabled_actions)?;

        Ok(CanonicalVoucherType {
            schema_version: CURRENT_SCHEMA_VERSION,
            id: self.id,
            name: self.name,
            requires_approval: self.rules.requires_approval,
            enabled_actions,
            layout: CanonicalLayout {
                classic: self.ui_mode_overrides.classic.to_snapshot(),
                windows: self.ui_mode_overrides.windows.to_snapshot(),
            },
        })
    }
}

impl FromCanonical for WizardConfig {
    /// Enabled actions keep their persisted order; default actions that are
    /// not enabled follow as disabled toggles.
    fn from_canonical(document: CanonicalVoucherType) -> Result<Self, CanonicalError> {
        if document.schema_version != CURRENT_SCHEMA_VERSION {
            return Err(CanonicalError::UnsupportedSchemaVersion {
                found: document.schema_version,
                expected: CURRENT_SCHEMA_VERSION,
            });
        }
        ensure_unique(&document.enabled_actions)?;

        let mut actions: Vec<ActionToggle> = document
            .enabled_actions
            .iter()
            .map(|a| ActionToggle::new(a, true))
            .collect();
        actions.extend(
            DEFAULT_ACTIONS
                .iter()
                .filter(|a| !document.enabled_actions.iter().any(|e| e == *a))
                .map(|a| ActionToggle::new(a, false)),
        );

        Ok(WizardConfig {
            id: document.id,
            name: document.name,
            rules: WizardRules {
                requires_approval: document.requires_approval,
            },
            actions,
            ui_mode_overrides: VoucherLayoutConfig {
                classic: document.layout.classic.into(),
                windows: document.layout.windows.into(),
            },
        })
    }
}
