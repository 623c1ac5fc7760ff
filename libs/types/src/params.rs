//! Per-game search attributes
//!
//! The wire carries an attribute object whose meaning depends on the game.
//! It is decoded into a [`GameParams`] variant chosen by the [`GameKey`], so
//! each compatibility rule works against a concrete type.
//!
//! Every attribute is optional. Values of the wrong shape decode as absent
//! instead of failing, because an entry that cannot be compared is simply
//! never matched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::game::GameKey;

/// Ladder-ranked games (Deadlock, Valorant)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankParams {
    #[serde(default, deserialize_with = "label", skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
}

/// Dota 2 matchmaking rating
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingParams {
    #[serde(default, deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// CS2 elo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EloParams {
    #[serde(default, deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub elo: Option<f64>,
}

/// Rust hours played
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursParams {
    #[serde(default, deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

/// PUBG kill/death ratio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KdParams {
    #[serde(default, deserialize_with = "number", skip_serializing_if = "Option::is_none")]
    pub kd: Option<f64>,
}

/// Search attributes tagged by game
///
/// Serializes as the bare attribute object (e.g. `{"elo":1000}`), the same
/// shape the client sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GameParams {
    Deadlock(RankParams),
    Dota2(RatingParams),
    Cs2(EloParams),
    Valorant(RankParams),
    Rust(HoursParams),
    Pubg(KdParams),
}

impl GameParams {
    /// Params with every attribute absent
    pub fn absent(game: GameKey) -> Self {
        match game {
            GameKey::Deadlock => GameParams::Deadlock(RankParams::default()),
            GameKey::Dota2 => GameParams::Dota2(RatingParams::default()),
            GameKey::Cs2 => GameParams::Cs2(EloParams::default()),
            GameKey::Valorant => GameParams::Valorant(RankParams::default()),
            GameKey::Rust => GameParams::Rust(HoursParams::default()),
            GameKey::Pubg => GameParams::Pubg(KdParams::default()),
        }
    }

    /// Decode a wire attribute object for `game`
    ///
    /// `null` decodes to [`GameParams::absent`]. Only a payload that is not
    /// an object at all is an error.
    pub fn decode(game: GameKey, value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::absent(game));
        }

        Ok(match game {
            GameKey::Deadlock => GameParams::Deadlock(serde_json::from_value(value)?),
            GameKey::Dota2 => GameParams::Dota2(serde_json::from_value(value)?),
            GameKey::Cs2 => GameParams::Cs2(serde_json::from_value(value)?),
            GameKey::Valorant => GameParams::Valorant(serde_json::from_value(value)?),
            GameKey::Rust => GameParams::Rust(serde_json::from_value(value)?),
            GameKey::Pubg => GameParams::Pubg(serde_json::from_value(value)?),
        })
    }

    /// Game these params belong to
    pub fn game(&self) -> GameKey {
        match self {
            GameParams::Deadlock(_) => GameKey::Deadlock,
            GameParams::Dota2(_) => GameKey::Dota2,
            GameParams::Cs2(_) => GameKey::Cs2,
            GameParams::Valorant(_) => GameKey::Valorant,
            GameParams::Rust(_) => GameKey::Rust,
            GameParams::Pubg(_) => GameKey::Pubg,
        }
    }
}

/// Accepts a finite, non-negative number or a numeric string
fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite() && *v >= 0.0))
}

/// Accepts a non-empty string
fn label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_decode_selects_variant_by_game() {
        let params = GameParams::decode(GameKey::Cs2, json!({"elo": 1000})).unwrap();
        assert_eq!(params, GameParams::Cs2(EloParams { elo: Some(1000.0) }));
        assert_eq!(params.game(), GameKey::Cs2);

        let params = GameParams::decode(GameKey::Deadlock, json!({"rank": "SEEKER"})).unwrap();
        assert_eq!(
            params,
            GameParams::Deadlock(RankParams { rank: Some("SEEKER".to_string()) })
        );
    }

    #[test]
    fn test_decode_null_is_absent() {
        let params = GameParams::decode(GameKey::Rust, Value::Null).unwrap();
        assert_eq!(params, GameParams::absent(GameKey::Rust));
    }

    #[test]
    fn test_decode_wrong_shapes_become_absent() {
        let params = GameParams::decode(GameKey::Pubg, json!({"kd": "abc"})).unwrap();
        assert_eq!(params, GameParams::Pubg(KdParams { kd: None }));

        let params = GameParams::decode(GameKey::Dota2, json!({"rating": -5})).unwrap();
        assert_eq!(params, GameParams::Dota2(RatingParams { rating: None }));

        let params = GameParams::decode(GameKey::Valorant, json!({"rank": 3})).unwrap();
        assert_eq!(params, GameParams::Valorant(RankParams { rank: None }));
    }

    #[test]
    fn test_decode_numeric_string() {
        let params = GameParams::decode(GameKey::Rust, json!({"hours": " 120 "})).unwrap();
        assert_eq!(params, GameParams::Rust(HoursParams { hours: Some(120.0) }));
    }

    #[test]
    fn test_decode_unrelated_fields_ignored() {
        let params = GameParams::decode(GameKey::Cs2, json!({"rank": 12})).unwrap();
        assert_eq!(params, GameParams::absent(GameKey::Cs2));
    }

    #[test]
    fn test_decode_non_object_is_error() {
        assert!(GameParams::decode(GameKey::Cs2, json!([1, 2])).is_err());
        assert!(GameParams::decode(GameKey::Cs2, json!("elo")).is_err());
    }

    #[test]
    fn test_serializes_as_bare_object() {
        let params = GameParams::Cs2(EloParams { elo: Some(1080.0) });
        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"elo": 1080.0}));

        let absent = GameParams::absent(GameKey::Deadlock);
        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({}));
    }

    proptest! {
        #[test]
        fn prop_decoded_numbers_are_finite_and_non_negative(kd in proptest::num::f64::ANY) {
            let value = serde_json::Number::from_f64(kd)
                .map(Value::Number)
                .unwrap_or(Value::Null);
            let params = GameParams::decode(GameKey::Pubg, json!({"kd": value})).unwrap();
            if let GameParams::Pubg(KdParams { kd: Some(v) }) = params {
                prop_assert!(v.is_finite());
                prop_assert!(v >= 0.0);
            }
        }
    }
}
