//! Tolerant decode of the worldstate payload.
//!
//! The upstream API reports each rotating cycle independently and omits
//! whatever isn't currently active, so every cycle here is optional and
//! every sub-field decodes on its own. Only malformed top-level JSON is a
//! hard error; inside a valid payload, a missing or ill-typed field
//! degrades to a documented default instead of failing the decode.

use serde_json::{Map, Value};
use thiserror::Error;

/// Shown in place of any string field the payload didn't provide.
pub const PLACEHOLDER: &str = "?";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed worldstate JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One API response, decoded. Built fresh per fetch and discarded after
/// rendering — nothing is retained across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    pub cetus: Option<DayNightCycle>,
    pub vallis: Option<TemperatureCycle>,
    pub cambion: Option<FactionCycle>,
    pub duviri: Option<StateCycle>,
    pub earth: Option<DayNightCycle>,
    pub sortie: Option<Sortie>,
}

/// Day/night rotation (Cetus and Earth). `time_left` is an
/// upstream-formatted duration string, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNightCycle {
    pub is_day: bool,
    pub time_left: String,
}

/// Warm/cold rotation (Orb Vallis).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureCycle {
    pub is_warm: bool,
    pub time_left: String,
}

/// Fass/Vome dominance rotation (Cambion Drift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionCycle {
    pub active: Faction,
    pub time_left: String,
}

/// Values the API hasn't taught us about are preserved, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Faction {
    Fass,
    Vome,
    Other(String),
}

impl Faction {
    fn from_raw(raw: &str) -> Self {
        match raw {
            "fass" => Faction::Fass,
            "vome" => Faction::Vome,
            other => Faction::Other(other.to_string()),
        }
    }
}

/// Free-form state rotation (Duviri spiral moods).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCycle {
    pub state: String,
    pub time_left: String,
}

/// Daily three-mission challenge bundle. An expired sortie renders the
/// same as an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sortie {
    pub expired: bool,
    pub boss: String,
    pub faction: String,
    pub eta: String,
    pub variants: Vec<Mission>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub mission_type: String,
    pub node: String,
    pub modifier: String,
}

impl WorldState {
    /// Decode a raw response body. Top-level parse failure is the only
    /// error; everything below it is best-effort.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let root: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(&root))
    }

    pub fn from_value(root: &Value) -> Self {
        Self {
            cetus: cycle(root, "cetusCycle").map(DayNightCycle::from_fields),
            vallis: cycle(root, "vallisCycle").map(TemperatureCycle::from_fields),
            cambion: cycle(root, "cambionCycle").map(FactionCycle::from_fields),
            duviri: cycle(root, "duviriCycle").map(StateCycle::from_fields),
            earth: cycle(root, "earthCycle").map(DayNightCycle::from_fields),
            sortie: cycle(root, "sortie").map(Sortie::from_fields),
        }
    }
}

/// A cycle counts as present only when its key holds a non-empty object.
/// The API emits `{}` for features it isn't reporting.
fn cycle<'a>(root: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    root.get(key).and_then(Value::as_object).filter(|m| !m.is_empty())
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

fn bool_field(fields: &Map<String, Value>, key: &str) -> bool {
    fields.get(key).and_then(Value::as_bool).unwrap_or(false)
}

impl DayNightCycle {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            is_day: bool_field(fields, "isDay"),
            time_left: string_field(fields, "timeLeft"),
        }
    }
}

impl TemperatureCycle {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            is_warm: bool_field(fields, "isWarm"),
            time_left: string_field(fields, "timeLeft"),
        }
    }
}

impl FactionCycle {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let raw = fields
            .get("active")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        Self {
            active: Faction::from_raw(raw),
            time_left: string_field(fields, "timeLeft"),
        }
    }
}

impl StateCycle {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            state: string_field(fields, "state"),
            time_left: string_field(fields, "timeLeft"),
        }
    }
}

impl Sortie {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let variants = fields
            .get("variants")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(Mission::from_fields)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            expired: bool_field(fields, "expired"),
            boss: string_field(fields, "boss"),
            faction: string_field(fields, "faction"),
            eta: string_field(fields, "eta"),
            variants,
        }
    }
}

impl Mission {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            mission_type: string_field(fields, "missionType"),
            node: string_field(fields, "node"),
            modifier: string_field(fields, "modifier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_json_is_the_only_hard_error() {
        assert!(WorldState::decode("not json at all").is_err());
        assert!(WorldState::decode("{}").is_ok());
    }

    #[test]
    fn absent_keys_decode_to_absent_cycles() {
        let ws = WorldState::from_value(&json!({}));
        assert!(ws.cetus.is_none());
        assert!(ws.vallis.is_none());
        assert!(ws.cambion.is_none());
        assert!(ws.duviri.is_none());
        assert!(ws.earth.is_none());
        assert!(ws.sortie.is_none());
    }

    #[test]
    fn empty_or_ill_typed_cycle_counts_as_absent() {
        let ws = WorldState::from_value(&json!({
            "cetusCycle": {},
            "vallisCycle": "warm",
            "cambionCycle": 42,
        }));
        assert!(ws.cetus.is_none());
        assert!(ws.vallis.is_none());
        assert!(ws.cambion.is_none());
    }

    #[test]
    fn missing_subfields_degrade_to_placeholders() {
        let ws = WorldState::from_value(&json!({
            "cetusCycle": { "isDay": true },
            "duviriCycle": { "timeLeft": "2h" },
        }));
        let cetus = ws.cetus.unwrap();
        assert!(cetus.is_day);
        assert_eq!(cetus.time_left, PLACEHOLDER);

        let duviri = ws.duviri.unwrap();
        assert_eq!(duviri.state, PLACEHOLDER);
        assert_eq!(duviri.time_left, "2h");
    }

    #[test]
    fn faction_values_map_and_unknowns_are_preserved() {
        let cycle = |active: Value| {
            WorldState::from_value(&json!({ "cambionCycle": { "active": active, "timeLeft": "1m" } }))
                .cambion
                .unwrap()
                .active
        };
        assert_eq!(cycle(json!("fass")), Faction::Fass);
        assert_eq!(cycle(json!("vome")), Faction::Vome);
        assert_eq!(
            cycle(json!("jahu")),
            Faction::Other("jahu".to_string())
        );

        // Missing active falls back to the upstream's own unknown marker.
        let ws = WorldState::from_value(&json!({ "cambionCycle": { "timeLeft": "1m" } }));
        assert_eq!(
            ws.cambion.unwrap().active,
            Faction::Other("unknown".to_string())
        );
    }

    #[test]
    fn sortie_without_variants_yields_empty_sequence() {
        let ws = WorldState::from_value(&json!({
            "sortie": { "boss": "Vay Hek", "faction": "Grineer", "eta": "5h" }
        }));
        let sortie = ws.sortie.unwrap();
        assert!(!sortie.expired);
        assert_eq!(sortie.boss, "Vay Hek");
        assert!(sortie.variants.is_empty());
    }

    #[test]
    fn sortie_variant_order_is_preserved() {
        let ws = WorldState::from_value(&json!({
            "sortie": {
                "boss": "Kela De Thaym",
                "faction": "Grineer",
                "eta": "3h",
                "variants": [
                    { "missionType": "Rescue", "node": "Hydron (Sedna)", "modifier": "Radiation" },
                    { "missionType": "Defense", "node": "Berehynia (Sedna)" },
                ],
            }
        }));
        let sortie = ws.sortie.unwrap();
        assert_eq!(sortie.variants.len(), 2);
        assert_eq!(sortie.variants[0].mission_type, "Rescue");
        assert_eq!(sortie.variants[1].mission_type, "Defense");
        assert_eq!(sortie.variants[1].modifier, PLACEHOLDER);
    }
}
