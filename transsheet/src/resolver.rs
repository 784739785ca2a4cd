//! Choosing the final text of one string from original, human and machine text.
//!
//! | original | human | machine | result                                        |
//! |----------|-------|---------|-----------------------------------------------|
//! | set      | set   | any     | human                                         |
//! | set      | blank | set     | mark + machine when enabled and not risky (or forced), else original |
//! | set      | blank | blank   | original                                      |
//! | blank    | any   | any     | original                                      |

use crate::types::is_blank;

/// Characters that mark machine text as likely to carry format tokens.
///
/// Machine translation tends to mangle embedded placeholders such as `{0}`,
/// `<color>` or `[name]`; text containing any marker falls back to the
/// original unless machine output is forced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskPolicy {
    markers: Vec<char>,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        RiskPolicy {
            markers: vec!['{', '<', '['],
        }
    }
}

impl RiskPolicy {
    pub fn new(markers: impl IntoIterator<Item = char>) -> Self {
        RiskPolicy {
            markers: markers.into_iter().collect(),
        }
    }

    pub fn is_risky(&self, text: &str) -> bool {
        text.chars().any(|c| self.markers.contains(&c))
    }
}

/// How machine translation participates in resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachinePolicy {
    /// Use machine text when there is no human translation.
    pub enabled: bool,
    /// Prefix written in front of machine text.
    pub mark: String,
    /// Use machine text even when it looks risky.
    pub force: bool,
    pub risk: RiskPolicy,
}

impl MachinePolicy {
    pub fn new(enabled: bool, mark: impl Into<String>, force: bool) -> Self {
        MachinePolicy {
            enabled,
            mark: mark.into(),
            force,
            risk: RiskPolicy::default(),
        }
    }

    pub fn with_risk(mut self, risk: RiskPolicy) -> Self {
        self.risk = risk;
        self
    }
}

/// Resolves the final text with the default risk policy.
pub fn resolve(
    original: &str,
    human: &str,
    machine: &str,
    use_machine: bool,
    machine_mark: &str,
    force_machine: bool,
) -> String {
    let policy = MachinePolicy::new(use_machine, machine_mark, force_machine);
    resolve_with(original, human, machine, &policy)
}

/// Resolves the final text under an explicit machine policy.
pub fn resolve_with(original: &str, human: &str, machine: &str, policy: &MachinePolicy) -> String {
    let en = !is_blank(original);
    let jp = !is_blank(human);
    let mt = !is_blank(machine);

    match (en, jp, mt) {
        (true, true, _) => human.to_string(),
        (true, false, true) => {
            if !policy.enabled {
                original.to_string()
            } else if policy.risk.is_risky(machine) && !policy.force {
                original.to_string()
            } else {
                format!("{}{}", policy.mark, machine)
            }
        }
        (true, false, false) => original.to_string(),
        (false, _, _) => original.to_string(),
    }
}
