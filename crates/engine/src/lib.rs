// Rust guideline compliant 2026-08-29

//! Cipher engine for the Enigma M3 emulator.
//!
//! Composes [`Plugboard`], the [`Rotor`] stack, and the [`Reflector`] into
//! the per-character encryption pipeline, driving the stepping mechanism
//! between keystrokes. [`EnigmaM3`] implements the `domain::Emulator` port:
//! validate the configuration, assemble a [`Machine`], encrypt, report
//! final rotor positions.
//!
//! The engine is synchronous and owns all per-request state; concurrent
//! requests share nothing but the `'static` wiring catalog.

mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod stepping;

pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use stepping::advance;

use domain::{Emulator, EncryptionRequest, EncryptionResponse, EnigmaError};

/// Concrete implementation of the `domain::Emulator` port.
///
/// Stateless: every call builds its machine from the request and discards
/// it afterwards, so one instance may serve any number of independent
/// requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnigmaM3;

impl Emulator for EnigmaM3 {
    fn encrypt(&self, request: &EncryptionRequest) -> Result<EncryptionResponse, EnigmaError> {
        request.config.validate()?;
        let mut machine = Machine::from_config(&request.config);
        let ciphertext = machine.encrypt_message(&request.message)?;
        let final_positions = machine.positions();
        tracing::debug!(
            "engine.encrypt: chars={} final_positions={final_positions:?}",
            ciphertext.len()
        );
        Ok(EncryptionResponse { ciphertext, final_positions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{
        CipherError, ConfigError, MachineConfig, PlugboardConfig, ReflectorType, RotorPositions,
        RotorSettings, RotorType,
    };

    fn request(message: &str) -> EncryptionRequest {
        let config = MachineConfig::builder(
            RotorSettings::new(RotorType::I, 1, 1),
            RotorSettings::new(RotorType::II, 1, 1),
            RotorSettings::new(RotorType::III, 1, 1),
            ReflectorType::UkwB,
        )
        .build()
        .unwrap();
        EncryptionRequest { config, message: message.to_owned() }
    }

    #[test]
    fn encrypt_returns_ciphertext_and_final_positions() {
        let response = EnigmaM3.encrypt(&request("AAAAA")).unwrap();
        assert_eq!(response.ciphertext, "BDZGO");
        assert_eq!(response.final_positions, RotorPositions { left: 1, middle: 1, right: 6 });
    }

    #[test]
    fn encrypt_validates_before_processing() {
        let mut req = request("AAAAA");
        req.config.right.ring_setting = 27;
        let result = EnigmaM3.encrypt(&req);
        assert_eq!(
            result,
            Err(EnigmaError::Config(ConfigError::RingSettingOutOfRange { value: 27 }))
        );
    }

    #[test]
    fn encrypt_surfaces_invalid_characters() {
        let result = EnigmaM3.encrypt(&request("AB9"));
        assert_eq!(
            result,
            Err(EnigmaError::Cipher(CipherError::InvalidCharacter {
                position: 2,
                character: '9',
            }))
        );
    }

    #[test]
    fn session_resumes_from_returned_positions() {
        // Encrypting "AB" then "CD" in two calls, feeding the positions
        // back, must equal encrypting "ABCD" in one call.
        let whole = EnigmaM3.encrypt(&request("ABCD")).unwrap();

        let first = EnigmaM3.encrypt(&request("AB")).unwrap();
        let mut resumed = request("CD");
        resumed.config.left.start_position = first.final_positions.left;
        resumed.config.middle.start_position = first.final_positions.middle;
        resumed.config.right.start_position = first.final_positions.right;
        let second = EnigmaM3.encrypt(&resumed).unwrap();

        assert_eq!(format!("{}{}", first.ciphertext, second.ciphertext), whole.ciphertext);
    }

    #[test]
    fn steckered_round_trip_through_the_port() {
        let mut req = request("WETTERBERICHT");
        req.config.plugboard = PlugboardConfig::parse("AD CN ET FL GI JV KZ PU QY WX").unwrap();
        let response = EnigmaM3.encrypt(&req).unwrap();

        let mut back = req.clone();
        back.message = response.ciphertext;
        let decrypted = EnigmaM3.encrypt(&back).unwrap();
        assert_eq!(decrypted.ciphertext, "WETTERBERICHT");
    }
}
