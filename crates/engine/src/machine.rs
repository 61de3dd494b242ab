// Rust guideline compliant 2026-08-29

//! The assembled machine: three rotors, reflector, and plugboard, driven
//! one keystroke at a time.

use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::stepping;
use domain::{CipherError, MachineConfig, RotorPositions};

/// A fully assembled Enigma M3 for one request.
///
/// Constructed from a validated [`MachineConfig`], mutated only through
/// rotor stepping while the message is processed, and discarded with the
/// request. Nothing here is shared between calls.
#[derive(Debug)]
pub struct Machine {
    left: Rotor,
    middle: Rotor,
    right: Rotor,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Assemble the machine described by `config`.
    ///
    /// `config` is assumed validated; see [`MachineConfig::validate`].
    #[must_use]
    pub fn from_config(config: &MachineConfig) -> Self {
        Self {
            left: Rotor::new(&config.left),
            middle: Rotor::new(&config.middle),
            right: Rotor::new(&config.right),
            reflector: Reflector::new(config.reflector),
            plugboard: Plugboard::from_config(&config.plugboard),
        }
    }

    /// Encrypt a single contact, stepping the rotors first (a physical
    /// keypress rotates the rotors before the circuit closes).
    ///
    /// Signal path: plugboard, right, middle, left, reflector, then back
    /// through left, middle, right, and the plugboard again.
    pub fn encrypt_contact(&mut self, contact: u8) -> u8 {
        stepping::advance(&mut self.left, &mut self.middle, &mut self.right);

        let mut signal = self.plugboard.swap(contact);
        signal = self.right.forward(signal);
        signal = self.middle.forward(signal);
        signal = self.left.forward(signal);
        signal = self.reflector.reflect(signal);
        signal = self.left.backward(signal);
        signal = self.middle.backward(signal);
        signal = self.right.backward(signal);
        self.plugboard.swap(signal)
    }

    /// Encrypt `message` letter by letter and return the upper-case
    /// ciphertext. Letters are accepted in either case.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidCharacter`] at the first unit that is
    /// not an ASCII letter; no ciphertext is returned and the position of
    /// the offending character is reported. Stripping or mapping other
    /// characters is the caller's policy, not the engine's.
    pub fn encrypt_message(&mut self, message: &str) -> Result<String, CipherError> {
        let mut ciphertext = String::with_capacity(message.len());
        for (position, character) in message.chars().enumerate() {
            let Some(contact) = contact_of(character) else {
                return Err(CipherError::InvalidCharacter { position, character });
            };
            let out = self.encrypt_contact(contact);
            tracing::trace!("machine.keystroke: position={position} in={contact} out={out}");
            ciphertext.push(char::from(b'A' + out));
        }
        Ok(ciphertext)
    }

    /// Current window positions of the rotor triple, 1-based.
    #[must_use]
    pub fn positions(&self) -> RotorPositions {
        RotorPositions {
            left: self.left.position(),
            middle: self.middle.position(),
            right: self.right.position(),
        }
    }
}

/// Contact index (`0..=25`) of an ASCII letter, either case.
fn contact_of(character: char) -> Option<u8> {
    let byte = u8::try_from(character.to_ascii_uppercase()).ok()?;
    // The subtraction must stay behind the range check: bytes below b'A'
    // would underflow.
    byte.is_ascii_uppercase().then(|| byte - b'A')
}
