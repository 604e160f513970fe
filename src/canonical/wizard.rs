use crate::layout::{AutoPlacer, FieldSelection, PlacementInput, VoucherLayoutConfig};
use serde::{Deserialize, Serialize};

/// Actions every voucher type offers, enabled or not.
pub const DEFAULT_ACTIONS: [&str; 5] = ["save", "submit", "approve", "print", "cancel"];

/// Business rules as the wizard shows them: plain toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardRules {
    #[serde(default)]
    pub requires_approval: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionToggle {
    pub id: String,
    pub enabled: bool,
}

impl ActionToggle {
    pub fn new(id: &str, enabled: bool) -> Self {
        Self {
            id: id.to_string(),
            enabled,
        }
    }
}

/// The UI-only configuration edited by the voucher designer wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rules: WizardRules,
    #[serde(default)]
    pub actions: Vec<ActionToggle>,
    #[serde(default)]
    pub ui_mode_overrides: VoucherLayoutConfig,
}

impl WizardConfig {
    /// A fresh config with every default action disabled and empty layouts.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rules: WizardRules::default(),
            actions: DEFAULT_ACTIONS
                .iter()
                .map(|a| ActionToggle::new(a, false))
                .collect(),
            ui_mode_overrides: VoucherLayoutConfig::default(),
        }
    }

    /// Turns `action` on or off, adding it if the config does not know it.
    pub fn set_action(&mut self, action: &str, enabled: bool) {
        match self.actions.iter_mut().find(|a| a.id == action) {
            Some(toggle) => toggle.enabled = enabled,
            None => self.actions.push(ActionToggle::new(action, enabled)),
        }
    }

    pub fn enabled_actions(&self) -> Vec<String> {
        self.actions
            .iter()
            .filter(|a| a.enabled)
            .map(|a| a.id.clone())
            .collect()
    }

    /// Replaces both UI mode layouts with a fresh auto-placement of
    /// `selected` plus the enabled actions.
    pub fn auto_place(&mut self, placer: &AutoPlacer, selected: Vec<FieldSelection>) {
        let input = PlacementInput {
            selected,
            actions: self.enabled_actions(),
        };
        self.ui_mode_overrides = placer.place(&input);
    }
}
