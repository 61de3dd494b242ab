// Rust guideline compliant 2026-08-29

//! Wire-shape mapping for the transport boundary.
//!
//! The transport speaks in small integers and strings: 1-based rotor and
//! reflector ids, `start_position`/`ring_setting` in `1..=26`, and a
//! space-separated plugboard mapping string. This module translates that
//! shape into a validated `domain::EncryptionRequest` and applies the
//! caller-side message policy (strip whitespace, pass everything else to
//! the engine, which rejects non-letters).

use domain::{
    ConfigError, EncryptionRequest, MachineConfig, PlugboardConfig, ReflectorType, RotorSettings,
    RotorType,
};

/// One rotor slot as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSelection {
    /// Catalog id, 1-based (1 = I ... 5 = V).
    pub rotor_type: u32,
    /// Initial window position, `1..=26`.
    pub start_position: u32,
    /// Ringstellung, `1..=26`.
    pub ring_setting: u32,
}

/// An encryption request as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    /// Leftmost rotor slot.
    pub left_rotor: RotorSelection,
    /// Middle rotor slot.
    pub middle_rotor: RotorSelection,
    /// Rightmost rotor slot.
    pub right_rotor: RotorSelection,
    /// Reflector catalog id, 1-based (1 = UKW-B, 2 = UKW-C).
    pub reflector_type: u32,
    /// Space-separated two-letter tokens, case-insensitive; empty means
    /// no plugboard.
    pub plugboard_mappings: String,
    /// The message. ASCII whitespace is stripped here; any other
    /// non-letter is rejected by the engine with its position.
    pub message: String,
}

impl RotorSelection {
    fn into_settings(self) -> Result<RotorSettings, ConfigError> {
        let rotor_type = RotorType::from_id(self.rotor_type)?;
        let start_position = dial_value(self.start_position)
            .ok_or(ConfigError::StartPositionOutOfRange { value: self.start_position })?;
        let ring_setting = dial_value(self.ring_setting)
            .ok_or(ConfigError::RingSettingOutOfRange { value: self.ring_setting })?;
        Ok(RotorSettings { rotor_type, start_position, ring_setting })
    }
}

/// Narrow a wire integer to a dial value in `1..=26`.
fn dial_value(value: u32) -> Option<u8> {
    u8::try_from(value).ok().filter(|v| (1..=26).contains(v))
}

impl WireRequest {
    /// Translate and validate the wire shape into a domain request.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: unknown ids, out-of-range
    /// dial values, or a malformed plugboard string. No characters are
    /// processed on failure.
    pub fn into_request(self) -> Result<EncryptionRequest, ConfigError> {
        let reflector = ReflectorType::from_id(self.reflector_type)?;
        let plugboard = PlugboardConfig::parse(&self.plugboard_mappings)?;
        let config = MachineConfig::builder(
            self.left_rotor.into_settings()?,
            self.middle_rotor.into_settings()?,
            self.right_rotor.into_settings()?,
            reflector,
        )
        .plugboard(plugboard)
        .build()?;

        // Word boundaries are a display concern; the engine sees letters only.
        let message: String =
            self.message.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        tracing::debug!("wire.request: message_chars={}", message.len());
        Ok(EncryptionRequest { config, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_request() -> WireRequest {
        WireRequest {
            left_rotor: RotorSelection { rotor_type: 1, start_position: 1, ring_setting: 1 },
            middle_rotor: RotorSelection { rotor_type: 2, start_position: 1, ring_setting: 1 },
            right_rotor: RotorSelection { rotor_type: 3, start_position: 1, ring_setting: 1 },
            reflector_type: 1,
            plugboard_mappings: String::new(),
            message: "HELLO WORLD".to_owned(),
        }
    }

    #[test]
    fn maps_ids_and_dial_values() {
        let request = wire_request().into_request().unwrap();
        assert_eq!(request.config.left.rotor_type, RotorType::I);
        assert_eq!(request.config.middle.rotor_type, RotorType::II);
        assert_eq!(request.config.right.rotor_type, RotorType::III);
        assert_eq!(request.config.reflector, ReflectorType::UkwB);
        assert!(request.config.plugboard.is_empty());
    }

    #[test]
    fn strips_whitespace_from_the_message() {
        let request = wire_request().into_request().unwrap();
        assert_eq!(request.message, "HELLOWORLD");
    }

    #[test]
    fn rejects_unknown_rotor_id() {
        let mut wire = wire_request();
        wire.middle_rotor.rotor_type = 9;
        assert_eq!(
            wire.into_request(),
            Err(ConfigError::UnknownRotorType { id: 9 })
        );
    }

    #[test]
    fn rejects_unknown_reflector_id() {
        let mut wire = wire_request();
        wire.reflector_type = 0;
        assert_eq!(
            wire.into_request(),
            Err(ConfigError::UnknownReflectorType { id: 0 })
        );
    }

    #[test]
    fn rejects_out_of_range_dial_values() {
        let mut wire = wire_request();
        wire.right_rotor.start_position = 27;
        assert_eq!(
            wire.clone().into_request(),
            Err(ConfigError::StartPositionOutOfRange { value: 27 })
        );

        wire.right_rotor.start_position = 1;
        wire.right_rotor.ring_setting = 300;
        assert_eq!(
            wire.into_request(),
            Err(ConfigError::RingSettingOutOfRange { value: 300 })
        );
    }

    #[test]
    fn rejects_repeated_rotor_types() {
        let mut wire = wire_request();
        wire.middle_rotor.rotor_type = 1;
        assert_eq!(
            wire.into_request(),
            Err(ConfigError::RepeatedRotorType { rotor: RotorType::I })
        );
    }

    #[test]
    fn parses_plugboard_mappings_case_insensitively() {
        let mut wire = wire_request();
        wire.plugboard_mappings = "by Ew".to_owned();
        let request = wire.into_request().unwrap();
        assert_eq!(request.config.plugboard.pairs(), &[(1, 24), (4, 22)]);
    }
}
