//! Change events.

use serde_json::Value;

/// A change of one model member.
///
/// Sent after the change was applied, so the model already holds `value`.
/// For enabled-state changes `member` is `"<member>[enabled]"` and both
/// values are booleans. Recomputed members report `Null` as old value.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelChangeEvent {
    pub member: String,
    pub value: Value,
    pub old_value: Value,
}

impl ModelChangeEvent {
    pub fn new(member: impl Into<String>, value: Value, old_value: Value) -> Self {
        Self {
            member: member.into(),
            value,
            old_value,
        }
    }
}
