//! Destination filters and their polymorphic action list
//!
//! A filter carries an ordered list of actions serialized as a JSON array
//! whose elements are tagged by a `type` discriminator:
//!
//! ```json
//! [
//!   {"type": "drop_event"},
//!   {"type": "whitelist_fields", "fields": {"properties": {"fields": ["email"]}}},
//!   {"type": "sample_event", "percent": 0.6, "path": "userId"}
//! ]
//! ```
//!
//! Decoding is two-phase: each element is first read for its discriminator
//! only, then re-read as the payload of the matching [`FilterAction`]
//! variant. [`FilterActions`] skips elements whose discriminator is unknown
//! so that action kinds added server-side do not break existing clients;
//! [`FilterActions::decode_strict`] and the standalone [`FilterAction`]
//! decoder reject them with [`DomainError::UnknownActionKind`] instead.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::DomainError;

/// Discriminator of a filter action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    DropEvent,
    AllowListFields,
    BlockListFields,
    SampleEvent,
}

crate::impl_wire_name_conversions!(ActionKind {
    DropEvent => "drop_event",
    AllowListFields => "whitelist_fields",
    BlockListFields => "blacklist_fields",
    SampleEvent => "sample_event",
});

/// Field paths selected within one section of an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFieldSelection {
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Per-section field selection used by allow-list and block-list actions.
///
/// A `None` section is omitted on the wire and leaves that section
/// unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<EventFieldSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<EventFieldSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<EventFieldSelection>,
}

impl EventDescription {
    /// Build a description from plain lists; empty lists become `None`.
    pub fn from_lists(properties: Vec<String>, context: Vec<String>, traits: Vec<String>) -> Self {
        fn section(fields: Vec<String>) -> Option<EventFieldSelection> {
            (!fields.is_empty()).then_some(EventFieldSelection { fields })
        }

        Self { context: section(context), traits: section(traits), properties: section(properties) }
    }
}

/// Payload of a sampling action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleEvent {
    /// Fraction of matching events kept, within `[0.0, 1.0]`
    pub percent: f64,
    /// Event field whose value makes the sampling decision stable per entity
    pub path: String,
}

impl SampleEvent {
    /// Create a sampling payload.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidSamplePercent`] if `percent` is NaN or
    /// outside `[0.0, 1.0]`.
    pub fn new(percent: f64, path: impl Into<String>) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&percent) {
            return Err(DomainError::InvalidSamplePercent(percent));
        }
        Ok(Self { percent, path: path.into() })
    }
}

/// Action applied to events matching a filter's condition
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    /// Drop the event entirely
    DropEvent,
    /// Keep only the listed fields
    AllowListFields(EventDescription),
    /// Remove the listed fields
    BlockListFields(EventDescription),
    /// Forward a stable sample of events
    SampleEvent(SampleEvent),
}

impl FilterAction {
    /// Action that drops every matching event
    pub fn drop_event() -> Self {
        Self::DropEvent
    }

    /// Keep only the listed property, context and trait fields
    pub fn allow_list(properties: Vec<String>, context: Vec<String>, traits: Vec<String>) -> Self {
        Self::AllowListFields(EventDescription::from_lists(properties, context, traits))
    }

    /// Remove the listed property, context and trait fields
    pub fn block_list(properties: Vec<String>, context: Vec<String>, traits: Vec<String>) -> Self {
        Self::BlockListFields(EventDescription::from_lists(properties, context, traits))
    }

    /// Forward `percent` of events, sampled on the value at `path`
    ///
    /// # Errors
    /// See [`SampleEvent::new`].
    pub fn sample(percent: f64, path: impl Into<String>) -> Result<Self, DomainError> {
        SampleEvent::new(percent, path).map(Self::SampleEvent)
    }

    /// Discriminator written for this action
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::DropEvent => ActionKind::DropEvent,
            Self::AllowListFields(_) => ActionKind::AllowListFields,
            Self::BlockListFields(_) => ActionKind::BlockListFields,
            Self::SampleEvent(_) => ActionKind::SampleEvent,
        }
    }
}

/// First-pass view of an action element: the discriminator only.
/// A missing or `null` type reads as the empty kind.
#[derive(Deserialize)]
struct Discriminator {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Payload shared by the allow-list and block-list actions.
#[derive(Deserialize)]
struct FieldsPayload {
    #[serde(default)]
    fields: EventDescription,
}

enum Decoded {
    Known(FilterAction),
    Unknown(String),
}

fn decode_element(value: Value) -> Result<Decoded, DomainError> {
    let Discriminator { kind } = Discriminator::deserialize(&value)
        .map_err(|e| DomainError::MalformedAction(format!("invalid action type: {e}")))?;
    let kind = kind.unwrap_or_default();

    let Some(kind) = ActionKind::from_wire(&kind) else {
        return Ok(Decoded::Unknown(kind));
    };

    let action = match kind {
        ActionKind::DropEvent => FilterAction::DropEvent,
        ActionKind::AllowListFields => {
            FilterAction::AllowListFields(decode_payload::<FieldsPayload>(value, kind)?.fields)
        }
        ActionKind::BlockListFields => {
            FilterAction::BlockListFields(decode_payload::<FieldsPayload>(value, kind)?.fields)
        }
        ActionKind::SampleEvent => FilterAction::SampleEvent(decode_payload(value, kind)?),
    };

    Ok(Decoded::Known(action))
}

fn decode_payload<T: de::DeserializeOwned>(value: Value, kind: ActionKind) -> Result<T, DomainError> {
    serde_json::from_value(value).map_err(|e| DomainError::MalformedAction(format!("{kind}: {e}")))
}

impl Serialize for FilterAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::DropEvent => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", self.kind().as_str())?;
                map.end()
            }
            Self::AllowListFields(fields) | Self::BlockListFields(fields) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", self.kind().as_str())?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            Self::SampleEvent(sample) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", self.kind().as_str())?;
                map.serialize_entry("percent", &sample.percent)?;
                map.serialize_entry("path", &sample.path)?;
                map.end()
            }
        }
    }
}

/// Strict: an unknown discriminator is an error.
impl<'de> Deserialize<'de> for FilterAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match decode_element(value).map_err(de::Error::custom)? {
            Decoded::Known(action) => Ok(action),
            Decoded::Unknown(kind) => Err(de::Error::custom(DomainError::UnknownActionKind(kind))),
        }
    }
}

/// Ordered action list of a destination filter
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterActions(Vec<FilterAction>);

impl FilterActions {
    /// Wrap already-built actions, keeping their order
    pub fn new(actions: Vec<FilterAction>) -> Self {
        Self(actions)
    }

    /// Decode raw elements, skipping unknown action kinds.
    ///
    /// # Errors
    /// Returns [`DomainError::MalformedAction`] if an element is not an
    /// object, its `type` is neither a string nor `null`, or a known kind
    /// carries a payload of the wrong shape.
    pub fn decode_lenient(values: Vec<Value>) -> Result<Self, DomainError> {
        let mut actions = Vec::with_capacity(values.len());
        for value in values {
            match decode_element(value)? {
                Decoded::Known(action) => actions.push(action),
                Decoded::Unknown(kind) => {
                    debug!(kind = %kind, "skipping unknown destination filter action");
                }
            }
        }
        Ok(Self(actions))
    }

    /// Decode raw elements, rejecting unknown action kinds.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownActionKind`] for the first unknown
    /// discriminator, or [`DomainError::MalformedAction`] as in
    /// [`FilterActions::decode_lenient`].
    pub fn decode_strict(values: Vec<Value>) -> Result<Self, DomainError> {
        values
            .into_iter()
            .map(|value| match decode_element(value)? {
                Decoded::Known(action) => Ok(action),
                Decoded::Unknown(kind) => Err(DomainError::UnknownActionKind(kind)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[FilterAction] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterAction> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, action: FilterAction) {
        self.0.push(action);
    }

    pub fn into_inner(self) -> Vec<FilterAction> {
        self.0
    }
}

impl From<Vec<FilterAction>> for FilterActions {
    fn from(actions: Vec<FilterAction>) -> Self {
        Self(actions)
    }
}

impl FromIterator<FilterAction> for FilterActions {
    fn from_iter<I: IntoIterator<Item = FilterAction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FilterActions {
    type Item = FilterAction;
    type IntoIter = std::vec::IntoIter<FilterAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterActions {
    type Item = &'a FilterAction;
    type IntoIter = std::slice::Iter<'a, FilterAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lenient: unknown discriminators are skipped, `null` decodes as empty.
impl<'de> Deserialize<'de> for FilterActions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
        Self::decode_lenient(values).map_err(de::Error::custom)
    }
}

/// Conditional rule attached to a destination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationFilter {
    /// Resource name ending in `/filters/{filter_id}`; empty before creation
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// FQL condition selecting the events the actions apply to
    #[serde(rename = "if", default)]
    pub condition: String,
    #[serde(default)]
    pub actions: FilterActions,
    #[serde(default)]
    pub enabled: bool,
}

impl DestinationFilter {
    /// Filter id, i.e. the last segment of [`DestinationFilter::name`]
    pub fn filter_id(&self) -> &str {
        super::resource_id(&self.name)
    }
}

/// Response of the filter collection endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationFilterList {
    #[serde(default)]
    pub filters: Vec<DestinationFilter>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_drop_then_sample_decodes_in_order() {
        let actions: FilterActions = serde_json::from_value(json!([
            {"type": "drop_event"},
            {"type": "sample_event", "percent": 0.6, "path": "userId"}
        ]))
        .unwrap();

        assert_eq!(
            actions.as_slice(),
            &[
                FilterAction::DropEvent,
                FilterAction::SampleEvent(SampleEvent { percent: 0.6, path: "userId".into() }),
            ]
        );
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        let actions: FilterActions = serde_json::from_value(json!([
            {"type": "drop_event"},
            {"type": "future_kind", "x": 1}
        ]))
        .unwrap();

        assert_eq!(actions.into_inner(), vec![FilterAction::DropEvent]);
    }

    #[test]
    fn test_unknown_kind_between_known_preserves_order() {
        let actions: FilterActions = serde_json::from_value(json!([
            {"type": "blacklist_fields", "fields": {"traits": {"fields": ["email"]}}},
            {"type": "future_kind"},
            {"type": "drop_event"}
        ]))
        .unwrap();

        let kinds: Vec<ActionKind> = actions.iter().map(FilterAction::kind).collect();
        assert_eq!(kinds, vec![ActionKind::BlockListFields, ActionKind::DropEvent]);
    }

    #[test]
    fn test_strict_decode_rejects_unknown_kind() {
        let err = FilterActions::decode_strict(vec![
            json!({"type": "drop_event"}),
            json!({"type": "future_kind", "x": 1}),
        ])
        .unwrap_err();

        assert_eq!(err, DomainError::UnknownActionKind("future_kind".into()));
    }

    #[test]
    fn test_single_action_decoder_is_strict() {
        let result = serde_json::from_value::<FilterAction>(json!({"type": "future_kind"}));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("future_kind"), "unexpected message: {message}");
    }

    #[test]
    fn test_missing_or_null_discriminator_is_skipped() {
        let actions: FilterActions = serde_json::from_value(json!([
            {"type": "drop_event"},
            {"x": 1},
            {"type": null}
        ]))
        .unwrap();

        assert_eq!(actions.into_inner(), vec![FilterAction::DropEvent]);
    }

    #[test]
    fn test_missing_discriminator_is_unknown_when_strict() {
        let err = FilterActions::decode_strict(vec![json!({"percent": 0.5, "path": "userId"})])
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownActionKind(String::new()));
    }

    #[test]
    fn test_non_string_discriminator_fails() {
        let err = FilterActions::decode_lenient(vec![json!({"type": 7})]).unwrap_err();
        assert!(matches!(err, DomainError::MalformedAction(_)));
    }

    #[test]
    fn test_malformed_known_payload_fails() {
        let err = FilterActions::decode_lenient(vec![json!({"type": "sample_event", "percent": "half"})])
            .unwrap_err();
        assert!(matches!(err, DomainError::MalformedAction(ref msg) if msg.starts_with("sample_event")));
    }

    #[test]
    fn test_null_and_missing_actions_decode_empty() {
        let filter: DestinationFilter =
            serde_json::from_value(json!({"name": "n", "if": "all", "actions": null, "enabled": true}))
                .unwrap();
        assert!(filter.actions.is_empty());

        let filter: DestinationFilter = serde_json::from_value(json!({"name": "n"})).unwrap();
        assert!(filter.actions.is_empty());
        assert!(!filter.enabled);
    }

    #[test]
    fn test_every_variant_round_trips() {
        let actions = vec![
            FilterAction::drop_event(),
            FilterAction::allow_list(fields(&["bar"]), fields(&["baz"]), fields(&["foo"])),
            FilterAction::block_list(fields(&["bar"]), vec![], vec![]),
            FilterAction::sample(0.25, "anonymousId").unwrap(),
        ];

        for action in actions {
            let encoded = serde_json::to_value(&action).unwrap();
            assert_eq!(encoded["type"], json!(action.kind().as_str()));
            let decoded: FilterAction = serde_json::from_value(encoded).unwrap();
            assert_eq!(decoded, action);
        }
    }

    #[test]
    fn test_encoding_matches_wire_shape() {
        let actions = FilterActions::new(vec![
            FilterAction::block_list(fields(&["bar"]), fields(&["foo"]), fields(&["baz"])),
            FilterAction::sample(0.6, "userId").unwrap(),
        ]);

        assert_eq!(
            serde_json::to_value(&actions).unwrap(),
            json!([
                {
                    "type": "blacklist_fields",
                    "fields": {
                        "context": {"fields": ["foo"]},
                        "traits": {"fields": ["baz"]},
                        "properties": {"fields": ["bar"]}
                    }
                },
                {"type": "sample_event", "percent": 0.6, "path": "userId"}
            ])
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let action = FilterAction::allow_list(fields(&["email"]), vec![], vec![]);
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "whitelist_fields", "fields": {"properties": {"fields": ["email"]}}})
        );
    }

    #[test]
    fn test_sample_percent_bounds() {
        assert!(SampleEvent::new(0.0, "userId").is_ok());
        assert!(SampleEvent::new(1.0, "userId").is_ok());
        assert_eq!(
            SampleEvent::new(1.5, "userId").unwrap_err(),
            DomainError::InvalidSamplePercent(1.5)
        );
        assert!(SampleEvent::new(-0.1, "userId").is_err());
        assert!(SampleEvent::new(f64::NAN, "userId").is_err());
    }

    #[test]
    fn test_filter_uses_if_for_condition() {
        let filter = DestinationFilter {
            name: "workspaces/ws/sources/s/destinations/d/filters/df_1".into(),
            title: "Only allow track events".into(),
            condition: "type != 'track'".into(),
            actions: vec![FilterAction::DropEvent].into(),
            enabled: true,
            ..Default::default()
        };

        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value["if"], json!("type != 'track'"));
        assert_eq!(value["description"], json!(""));
        assert_eq!(value["actions"], json!([{"type": "drop_event"}]));
        assert_eq!(filter.filter_id(), "df_1");
    }

    #[test]
    fn test_action_kind_wire_literals() {
        assert_eq!(ActionKind::from_wire("whitelist_fields"), Some(ActionKind::AllowListFields));
        assert_eq!(ActionKind::from_wire("blacklist_fields"), Some(ActionKind::BlockListFields));
        assert_eq!(ActionKind::ALL.len(), 4);
    }
}
