//! Behavior settings with irregular wire encodings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Terminal bell mode.
///
/// The wire format is either the string `"SOUND"` or the boolean `false`
/// (bell disabled) — a historical encoding the config file format keeps for
/// compatibility, so this enum carries custom serde impls instead of a
/// derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BellMode {
    /// Play the audible bell (default)
    #[default]
    Sound,
    /// Bell disabled
    None,
}

impl BellMode {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sound => "Sound",
            Self::None => "Disabled",
        }
    }

    /// Whether the bell should make noise.
    pub fn is_audible(&self) -> bool {
        matches!(self, Self::Sound)
    }
}

impl Serialize for BellMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Sound => serializer.serialize_str("SOUND"),
            Self::None => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for BellMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoolOrString {
            Bool(bool),
            Text(String),
        }

        match BoolOrString::deserialize(deserializer)? {
            BoolOrString::Bool(false) => Ok(BellMode::None),
            BoolOrString::Bool(true) => Ok(BellMode::Sound),
            BoolOrString::Text(s) if s.eq_ignore_ascii_case("sound") => Ok(BellMode::Sound),
            BoolOrString::Text(s) => Err(serde::de::Error::custom(format!(
                "unknown bell mode '{s}', expected \"SOUND\" or false"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_serializes_as_string() {
        assert_eq!(serde_json::to_string(&BellMode::Sound).unwrap(), "\"SOUND\"");
    }

    #[test]
    fn test_none_serializes_as_false() {
        assert_eq!(serde_json::to_string(&BellMode::None).unwrap(), "false");
    }

    #[test]
    fn test_deserialize_accepts_both_forms() {
        assert_eq!(
            serde_json::from_str::<BellMode>("\"SOUND\"").unwrap(),
            BellMode::Sound
        );
        assert_eq!(
            serde_json::from_str::<BellMode>("false").unwrap(),
            BellMode::None
        );
        // `true` means "bell on", tolerated for hand-edited configs
        assert_eq!(
            serde_json::from_str::<BellMode>("true").unwrap(),
            BellMode::Sound
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_string() {
        assert!(serde_json::from_str::<BellMode>("\"FLASH\"").is_err());
    }

    #[test]
    fn test_round_trip_through_yaml() {
        for mode in [BellMode::Sound, BellMode::None] {
            let yaml = serde_yaml_ng::to_string(&mode).unwrap();
            let back: BellMode = serde_yaml_ng::from_str(&yaml).unwrap();
            assert_eq!(back, mode);
        }
    }
}
