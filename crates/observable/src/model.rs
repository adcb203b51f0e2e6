//! The observable model.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::event::ModelChangeEvent;
use crate::listener::{ListenerRegistry, SharedListener};

/// Dispatch keys for enabled-state changes are this prefix plus the member.
const ENABLED_PREFIX: &str = "__enabled__";

fn enabled_key(member: &str) -> String {
    format!("{ENABLED_PREFIX}{member}")
}

// ============================================================================
// COMPUTED MEMBER
// ============================================================================

/// A member derived from the plain members.
#[derive(Clone)]
pub struct ComputedMember {
    dependencies: Vec<String>,
    compute: Arc<dyn Fn(&Map<String, Value>) -> Value + Send + Sync>,
}

impl ComputedMember {
    /// Creates a computed member recomputed when any of `dependencies`
    /// changes. With no dependencies it follows every plain member.
    pub fn new<I, F>(dependencies: I, compute: F) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        F: Fn(&Map<String, Value>) -> Value + Send + Sync + 'static,
    {
        Self {
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            compute: Arc::new(compute),
        }
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    fn follows(&self, key: &str, anonymous: bool) -> bool {
        if self.dependencies.is_empty() {
            anonymous
        } else {
            self.dependencies.iter().any(|dependency| dependency == key)
        }
    }
}

impl fmt::Debug for ComputedMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedMember")
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// OBSERVABLE MODEL
// ============================================================================

/// A JSON object whose member changes are announced to listeners.
///
/// Listeners receive events after the change was applied. They get the
/// event by shared reference and cannot change the model while it
/// dispatches.
///
/// # Examples
///
/// ```rust,ignore
/// use morph_observable::{ComputedMember, ObservableModel, listener};
/// use serde_json::json;
///
/// let mut model = ObservableModel::new()
///     .with_computed("full", ComputedMember::new(["first", "last"], |m| {
///         json!(format!("{} {}", m["first"].as_str().unwrap_or(""), m["last"].as_str().unwrap_or("")))
///     }));
/// model.add_listener("full", listener(|event| println!("full name is now {}", event.value)));
/// model.set("first", json!("Ada"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObservableModel {
    members: Map<String, Value>,
    computed: Vec<(String, ComputedMember)>,
    disabled: HashSet<String>,
    listeners: ListenerRegistry,
}

impl ObservableModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model holding `members`.
    pub fn with_members(members: Map<String, Value>) -> Self {
        Self {
            members,
            ..Self::default()
        }
    }

    /// Adds a computed member.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_computed(mut self, name: impl Into<String>, member: ComputedMember) -> Self {
        self.add_computed(name, member);
        self
    }

    /// Adds or replaces a computed member. Computed members are evaluated
    /// in the order they were first added.
    pub fn add_computed(&mut self, name: impl Into<String>, member: ComputedMember) {
        let name = name.into();
        match self.computed.iter_mut().find(|(known, _)| *known == name) {
            Some((_, existing)) => *existing = member,
            None => self.computed.push((name, member)),
        }
    }

    fn computed(&self, name: &str) -> Option<&ComputedMember> {
        self.computed
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, member)| member)
    }

    /// The plain members.
    pub fn members(&self) -> &Map<String, Value> {
        &self.members
    }

    /// Reads a plain member, or evaluates a computed one.
    pub fn get(&self, member: &str) -> Option<Value> {
        match self.computed(member) {
            Some(computed) => Some((computed.compute)(&self.members)),
            None => self.members.get(member).cloned(),
        }
    }

    /// Sets a member and announces the change.
    ///
    /// Returns `false` if the member is disabled or computed. Setting an
    /// equal value is accepted without an event. A previously absent member
    /// reports `Null` as old value.
    pub fn set(&mut self, member: impl Into<String>, value: Value) -> bool {
        let member = member.into();
        if !self.is_enabled(&member) {
            tracing::trace!(member = %member, "refused to set disabled member");
            return false;
        }
        if self.members.get(&member) == Some(&value) {
            return true;
        }
        let old_value = self
            .members
            .insert(member.clone(), value.clone())
            .unwrap_or(Value::Null);
        self.dispatch(&member, &member, value, old_value);
        true
    }

    /// Sets a member without checks or events.
    pub fn quiet_set(&mut self, member: impl Into<String>, value: Value) {
        self.members.insert(member.into(), value);
    }

    /// Listens to changes of `member`. A listener is registered at most
    /// once per member.
    pub fn add_listener(&mut self, member: &str, listener: SharedListener) {
        self.listeners.add(member, listener);
    }

    /// Stops `listener` from receiving changes of `member`.
    pub fn remove_listener(&mut self, member: &str, listener: &SharedListener) {
        self.listeners.remove(member, listener);
    }

    /// Listens to enabled-state changes of `member`.
    pub fn add_enabled_listener(&mut self, member: &str, listener: SharedListener) {
        self.listeners.add(&enabled_key(member), listener);
    }

    pub fn remove_enabled_listener(&mut self, member: &str, listener: &SharedListener) {
        self.listeners.remove(&enabled_key(member), listener);
    }

    /// Whether `member` may be set. Computed members never are.
    pub fn is_enabled(&self, member: &str) -> bool {
        self.computed(member).is_none() && !self.disabled.contains(member)
    }

    /// Enables or disables `member` and announces a `"<member>[enabled]"`
    /// change to its enabled listeners.
    ///
    /// Returns whether the requested state now holds: `true` after a toggle
    /// and when nothing had to change, `false` only when trying to enable a
    /// computed member.
    pub fn set_enabled(&mut self, member: &str, state: bool) -> bool {
        let before = self.is_enabled(member);
        if state == before {
            return true;
        }
        if self.computed(member).is_some() {
            return false;
        }
        if state {
            self.disabled.remove(member);
        } else {
            self.disabled.insert(member.to_string());
        }
        self.dispatch(
            &enabled_key(member),
            &format!("{member}[enabled]"),
            Value::Bool(state),
            Value::Bool(before),
        );
        true
    }

    /// Sends the event to the listeners of `key`, then recomputes and
    /// announces the computed members following `key`.
    fn dispatch(&self, key: &str, member: &str, value: Value, old_value: Value) {
        self.propagate(key, member, value, old_value, &mut Vec::new());
    }

    /// `recomputing` holds the computed members on the current chain; a
    /// member already on it is not recomputed again, which ends cycles.
    fn propagate<'a>(
        &'a self,
        key: &str,
        member: &str,
        value: Value,
        old_value: Value,
        recomputing: &mut Vec<&'a str>,
    ) {
        let event = ModelChangeEvent::new(member, value, old_value);
        let listeners = self.listeners.snapshot(key);
        tracing::trace!(key, member, listeners = listeners.len(), "dispatching change");
        for listener in listeners {
            listener.handle_event(&event);
        }

        let anonymous = self.computed(key).is_none();
        for (name, computed) in &self.computed {
            if !computed.follows(key, anonymous) {
                continue;
            }
            if recomputing.contains(&name.as_str()) {
                tracing::debug!(member = %name, via = key, "skipped cyclic recomputation");
                continue;
            }
            recomputing.push(name);
            let value = (computed.compute)(&self.members);
            self.propagate(name, name, value, Value::Null, recomputing);
            recomputing.pop();
        }
    }
}

impl From<Map<String, Value>> for ObservableModel {
    fn from(members: Map<String, Value>) -> Self {
        Self::with_members(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::listener;
    use serde_json::json;
    use std::sync::Mutex;

    fn recorder() -> (SharedListener, Arc<Mutex<Vec<ModelChangeEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let sut = listener(move |event| sink.lock().unwrap().push(event.clone()));
        (sut, events)
    }

    #[test]
    fn test_set_dispatches_after_change() {
        let mut model = ObservableModel::new();
        model.quiet_set("test", json!("works"));
        let (sut, events) = recorder();
        model.add_listener("test", sut);

        assert!(model.set("test", json!("works good")));
        assert_eq!(
            *events.lock().unwrap(),
            vec![ModelChangeEvent::new("test", json!("works good"), json!("works"))]
        );
        assert_eq!(model.get("test"), Some(json!("works good")));
    }

    #[test]
    fn test_equal_value_is_silent() {
        let mut model = ObservableModel::new();
        model.quiet_set("test", json!(1));
        let (sut, events) = recorder();
        model.add_listener("test", sut);

        assert!(model.set("test", json!(1)));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_disabled_member_is_refused() {
        let mut model = ObservableModel::new();
        let (sut, events) = recorder();
        model.add_enabled_listener("test", sut);

        assert!(model.set_enabled("test", false));
        assert!(!model.is_enabled("test"));
        assert!(!model.set("test", json!("x")));
        assert_eq!(model.get("test"), None);
        assert_eq!(
            *events.lock().unwrap(),
            vec![ModelChangeEvent::new("test[enabled]", json!(false), json!(true))]
        );

        assert!(model.set_enabled("test", true));
        assert!(model.set("test", json!("x")));
    }

    #[test]
    fn test_computed_member_is_never_enabled() {
        let mut model =
            ObservableModel::new().with_computed("len", ComputedMember::new(["text"], |m| {
                json!(m.get("text").and_then(Value::as_str).map_or(0, str::len))
            }));
        assert!(!model.is_enabled("len"));
        assert!(!model.set_enabled("len", true));
        assert!(model.set_enabled("len", false));
        assert!(!model.set("len", json!(3)));
    }

    #[test]
    fn test_computed_follows_its_dependencies() {
        let mut model = ObservableModel::new().with_computed(
            "len",
            ComputedMember::new(["text"], |m| {
                json!(m.get("text").and_then(Value::as_str).map_or(0, str::len))
            }),
        );
        let (sut, events) = recorder();
        model.add_listener("len", sut);

        model.set("other", json!(true));
        assert!(events.lock().unwrap().is_empty());

        model.set("text", json!("abc"));
        assert_eq!(
            *events.lock().unwrap(),
            vec![ModelChangeEvent::new("len", json!(3), Value::Null)]
        );
        assert_eq!(model.get("len"), Some(json!(3)));
    }

    #[test]
    fn test_anonymous_computed_follows_plain_members_only() {
        let mut model = ObservableModel::new()
            .with_computed("count", ComputedMember::new(Vec::<String>::new(), |m| json!(m.len())))
            .with_computed("double", ComputedMember::new(["count"], |m| json!(m.len() * 2)));
        let (count, count_events) = recorder();
        let (double, double_events) = recorder();
        model.add_listener("count", count);
        model.add_listener("double", double);

        model.set("a", json!(1));
        model.set("b", json!(2));

        assert_eq!(
            *count_events.lock().unwrap(),
            vec![
                ModelChangeEvent::new("count", json!(1), Value::Null),
                ModelChangeEvent::new("count", json!(2), Value::Null),
            ]
        );
        assert_eq!(
            *double_events.lock().unwrap(),
            vec![
                ModelChangeEvent::new("double", json!(2), Value::Null),
                ModelChangeEvent::new("double", json!(4), Value::Null),
            ]
        );
    }

    #[test]
    fn test_cyclic_computed_members_settle() {
        let mut model = ObservableModel::new()
            .with_computed("a", ComputedMember::new(["p", "b"], |m| json!(m.get("p"))))
            .with_computed("b", ComputedMember::new(["a"], |m| json!(m.get("p"))));
        let (a, a_events) = recorder();
        let (b, b_events) = recorder();
        model.add_listener("a", a);
        model.add_listener("b", b);

        assert!(model.set("p", json!(1)));

        assert_eq!(
            *a_events.lock().unwrap(),
            vec![ModelChangeEvent::new("a", json!(1), Value::Null)]
        );
        assert_eq!(
            *b_events.lock().unwrap(),
            vec![ModelChangeEvent::new("b", json!(1), Value::Null)]
        );
    }

    #[test]
    fn test_self_dependent_computed_member_settles() {
        let mut model = ObservableModel::new()
            .with_computed("loop", ComputedMember::new(["loop", "p"], |m| json!(m.len())));
        let (sut, events) = recorder();
        model.add_listener("loop", sut);

        model.set("p", json!(true));
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_set_enabled_reports_the_resulting_state() {
        let mut model = ObservableModel::new();
        let (sut, events) = recorder();
        model.add_enabled_listener("test", sut);

        assert!(model.set_enabled("test", true));
        assert!(events.lock().unwrap().is_empty());

        assert!(model.set_enabled("test", false));
        assert!(model.set_enabled("test", false));
        assert_eq!(events.lock().unwrap().len(), 1);
    }
}
