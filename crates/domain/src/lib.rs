// Rust guideline compliant 2026-08-29

//! Shared domain types for the Enigma M3 emulator.
//!
//! Defines the rotor and reflector catalogs (`RotorType`, `ReflectorType`),
//! the per-request machine description (`RotorSettings`, `PlugboardConfig`,
//! `MachineConfig` and its validating builder), the request/response pair,
//! the error taxonomy, and the `Emulator` hexagonal port. All emulator
//! components depend on this crate; no other crate is imported here.
//!
//! The wiring tables below are the only process-wide state in the system.
//! They are `'static` constants, read-only after compilation, and may be
//! shared by reference across concurrent requests without synchronization.

// ---------------------------------------------------------------------------
// Wiring catalog
// ---------------------------------------------------------------------------

/// Convert a 26-letter wiring string into contact indices (`0..=25`).
const fn contacts(letters: &[u8; 26]) -> [u8; 26] {
    let mut table = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        table[i] = letters[i] - b'A';
        i += 1;
    }
    table
}

/// Positional inverse of a wiring table: `invert(t)[t[c]] == c` for all `c`.
const fn invert(table: &[u8; 26]) -> [u8; 26] {
    let mut inverse = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

// Historical Enigma I rotor wirings. The letter at index 0 is the contact
// that input contact A maps to with ring setting 1 and offset 0.
const ROTOR_I: [u8; 26] = contacts(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ");
const ROTOR_II: [u8; 26] = contacts(b"AJDKSIRUXBLHWTMCQGZNPYFVOE");
const ROTOR_III: [u8; 26] = contacts(b"BDFHJLCPRTXVZNYEIWGAKMUSQO");
const ROTOR_IV: [u8; 26] = contacts(b"ESOVPZJAYQUIRHXLNFTGKDCMWB");
const ROTOR_V: [u8; 26] = contacts(b"VZBRGITYUPSDNHLXAWMJQOFECK");

const ROTOR_I_INV: [u8; 26] = invert(&ROTOR_I);
const ROTOR_II_INV: [u8; 26] = invert(&ROTOR_II);
const ROTOR_III_INV: [u8; 26] = invert(&ROTOR_III);
const ROTOR_IV_INV: [u8; 26] = invert(&ROTOR_IV);
const ROTOR_V_INV: [u8; 26] = invert(&ROTOR_V);

// Reflector wirings. Both are involutions with no fixed points.
const UKW_B: [u8; 26] = contacts(b"YRUHQSLDPXNGOKMIEBFZCWVJAT");
const UKW_C: [u8; 26] = contacts(b"FVPJIAOYEDRZXWGCTKUQSBNMHL");

// ---------------------------------------------------------------------------
// RotorType / ReflectorType
// ---------------------------------------------------------------------------

/// One of the five historical Enigma I rotors.
///
/// Each variant is bound to an immutable forward wiring table, its
/// precomputed positional inverse, and a fixed notch position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorType {
    /// Rotor I, notch at Q.
    I,
    /// Rotor II, notch at E.
    II,
    /// Rotor III, notch at V.
    III,
    /// Rotor IV, notch at J.
    IV,
    /// Rotor V, notch at Z.
    V,
}

impl RotorType {
    /// Resolve a wire id (1-based) to a rotor type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRotorType`] for ids outside `1..=5`.
    pub fn from_id(id: u32) -> Result<Self, ConfigError> {
        match id {
            1 => Ok(Self::I),
            2 => Ok(Self::II),
            3 => Ok(Self::III),
            4 => Ok(Self::IV),
            5 => Ok(Self::V),
            _ => Err(ConfigError::UnknownRotorType { id }),
        }
    }

    /// Wire id of this rotor type (1-based).
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
            Self::IV => 4,
            Self::V => 5,
        }
    }

    /// Forward wiring table: entry contact -> exit contact at offset 0, ring 1.
    #[must_use]
    pub fn wiring(self) -> &'static [u8; 26] {
        match self {
            Self::I => &ROTOR_I,
            Self::II => &ROTOR_II,
            Self::III => &ROTOR_III,
            Self::IV => &ROTOR_IV,
            Self::V => &ROTOR_V,
        }
    }

    /// Positional inverse of [`wiring`](Self::wiring), precomputed so the
    /// backward pass is a table lookup rather than a linear search.
    #[must_use]
    pub fn inverse_wiring(self) -> &'static [u8; 26] {
        match self {
            Self::I => &ROTOR_I_INV,
            Self::II => &ROTOR_II_INV,
            Self::III => &ROTOR_III_INV,
            Self::IV => &ROTOR_IV_INV,
            Self::V => &ROTOR_V_INV,
        }
    }

    /// Notch position (`0..=25`): the offset at which this rotor, when
    /// stepped over, carries the rotor to its left.
    #[must_use]
    pub fn notch(self) -> u8 {
        match self {
            Self::I => b'Q' - b'A',
            Self::II => b'E' - b'A',
            Self::III => b'V' - b'A',
            Self::IV => b'J' - b'A',
            Self::V => b'Z' - b'A',
        }
    }
}

/// One of the two reflectors (Umkehrwalzen) of the Enigma I.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorType {
    /// Reflector B (UKW-B), the common wartime choice.
    UkwB,
    /// Reflector C (UKW-C).
    UkwC,
}

impl ReflectorType {
    /// Resolve a wire id (1-based) to a reflector type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownReflectorType`] for ids outside `1..=2`.
    pub fn from_id(id: u32) -> Result<Self, ConfigError> {
        match id {
            1 => Ok(Self::UkwB),
            2 => Ok(Self::UkwC),
            _ => Err(ConfigError::UnknownReflectorType { id }),
        }
    }

    /// Wire id of this reflector type (1-based).
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Self::UkwB => 1,
            Self::UkwC => 2,
        }
    }

    /// Reflector wiring: an involution with no fixed points.
    #[must_use]
    pub fn wiring(self) -> &'static [u8; 26] {
        match self {
            Self::UkwB => &UKW_B,
            Self::UkwC => &UKW_C,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Configuration errors, always detected before any character is encrypted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A ring setting outside `1..=26`.
    #[error("ring setting out of range: {value} (expected 1..=26)")]
    RingSettingOutOfRange {
        /// The rejected value.
        value: u32,
    },
    /// A start position outside `1..=26`.
    #[error("start position out of range: {value} (expected 1..=26)")]
    StartPositionOutOfRange {
        /// The rejected value.
        value: u32,
    },
    /// A rotor wire id with no catalog entry.
    #[error("unknown rotor type id: {id}")]
    UnknownRotorType {
        /// The rejected id.
        id: u32,
    },
    /// A reflector wire id with no catalog entry.
    #[error("unknown reflector type id: {id}")]
    UnknownReflectorType {
        /// The rejected id.
        id: u32,
    },
    /// A plugboard token that is not two letters.
    #[error("malformed plugboard pair: {token:?}")]
    MalformedPair {
        /// The offending token, verbatim.
        token: String,
    },
    /// A letter named by more than one plugboard pair (or twice in one pair).
    #[error("letter {letter} appears in more than one plugboard pair")]
    DuplicateLetter {
        /// The letter in question, upper-case.
        letter: char,
    },
    /// The same rotor type mounted in two positions without
    /// `allow_repeated_rotors`.
    #[error("rotor type {rotor:?} used in more than one position")]
    RepeatedRotorType {
        /// The repeated type.
        rotor: RotorType,
    },
}

/// Per-character errors raised during encryption.
///
/// Processing stops at the first offending character; no partial ciphertext
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The message contains a unit that is not one of the 26 letters.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Zero-based character index within the message.
        position: usize,
        /// The offending character.
        character: char,
    },
}

/// Umbrella error surfaced across the [`Emulator`] port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnigmaError {
    /// The machine configuration was rejected by validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The message contained an unencryptable character.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),
}

// ---------------------------------------------------------------------------
// RotorSettings
// ---------------------------------------------------------------------------

/// Per-request settings for one rotor slot.
///
/// `start_position` and `ring_setting` are 1-based window values as dialed
/// on the machine; the engine works with `offset = start_position - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSettings {
    /// Which catalog rotor is mounted in this slot.
    pub rotor_type: RotorType,
    /// Initial window position, `1..=26`.
    pub start_position: u8,
    /// Ringstellung, `1..=26`.
    pub ring_setting: u8,
}

impl RotorSettings {
    /// Settings with the given type, start position, and ring setting.
    ///
    /// Range checks happen in [`MachineConfig::validate`], not here.
    #[must_use]
    pub fn new(rotor_type: RotorType, start_position: u8, ring_setting: u8) -> Self {
        Self { rotor_type, start_position, ring_setting }
    }

    /// Rotational offset (`0..=25`) corresponding to `start_position`.
    #[must_use]
    pub fn offset(&self) -> u8 {
        self.start_position.saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// PlugboardConfig
// ---------------------------------------------------------------------------

/// A validated set of 0-13 disjoint plugboard letter pairs.
///
/// Pairs are stored as contact indices (`0..=25`). An empty config is the
/// legal "no plugboard" setup; construction rejects duplicate letters
/// rather than silently resolving them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlugboardConfig {
    pairs: Vec<(u8, u8)>,
}

impl PlugboardConfig {
    /// The empty plugboard: every letter maps to itself.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the wire mapping string: space-separated two-letter tokens,
    /// case-insensitive. `"BY EW"` swaps B with Y and E with W; the empty
    /// string is a valid no-plugboard configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedPair`] for a token that is not
    /// exactly two ASCII letters, or [`ConfigError::DuplicateLetter`] when
    /// a letter appears in more than one pair.
    pub fn parse(mappings: &str) -> Result<Self, ConfigError> {
        let mut pairs = Vec::new();
        let mut used = [false; 26];
        for token in mappings.split_whitespace() {
            let &[a, b] = token.as_bytes() else {
                return Err(ConfigError::MalformedPair { token: token.to_owned() });
            };
            if !a.is_ascii_alphabetic() || !b.is_ascii_alphabetic() {
                return Err(ConfigError::MalformedPair { token: token.to_owned() });
            }
            let a = a.to_ascii_uppercase() - b'A';
            let b = b.to_ascii_uppercase() - b'A';
            for contact in [a, b] {
                if used[usize::from(contact)] {
                    return Err(ConfigError::DuplicateLetter {
                        letter: char::from(b'A' + contact),
                    });
                }
                used[usize::from(contact)] = true;
            }
            pairs.push((a, b));
        }
        Ok(Self { pairs })
    }

    /// The validated pairs as contact indices.
    #[must_use]
    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    /// `true` when no letters are swapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MachineConfig + builder
// ---------------------------------------------------------------------------

/// Full, stateless description of one machine setup.
///
/// Constructed fresh per request via [`MachineConfig::builder`]; nothing
/// here outlives a single encryption call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Leftmost (slowest) rotor.
    pub left: RotorSettings,
    /// Middle rotor.
    pub middle: RotorSettings,
    /// Rightmost (fastest) rotor; the first to encrypt the signal.
    pub right: RotorSettings,
    /// Which reflector is mounted.
    pub reflector: ReflectorType,
    /// Plugboard pairs.
    pub plugboard: PlugboardConfig,
    /// Permit the same rotor type in two slots. Off by default: each
    /// physical rotor is a single object and cannot be mounted twice.
    pub allow_repeated_rotors: bool,
}

/// Builder for [`MachineConfig`].
///
/// Obtain via [`MachineConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct MachineConfigBuilder {
    left: RotorSettings,
    middle: RotorSettings,
    right: RotorSettings,
    reflector: ReflectorType,
    plugboard: PlugboardConfig,
    allow_repeated_rotors: bool,
}

impl MachineConfig {
    /// Create a builder. Rotor slots and reflector are the required
    /// parameters; the plugboard defaults to empty.
    #[must_use]
    pub fn builder(
        left: RotorSettings,
        middle: RotorSettings,
        right: RotorSettings,
        reflector: ReflectorType,
    ) -> MachineConfigBuilder {
        MachineConfigBuilder {
            left,
            middle,
            right,
            reflector,
            plugboard: PlugboardConfig::empty(),
            allow_repeated_rotors: false,
        }
    }

    /// Check every slot's ranges and the rotor-repeat rule.
    ///
    /// Runs once per request before any encryption; a failure
    /// short-circuits with no partial output. Plugboard well-formedness is
    /// enforced at [`PlugboardConfig`] construction and rotor/reflector
    /// catalog membership by the typed enums, so neither is re-checked here.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for slot in [&self.left, &self.middle, &self.right] {
            if !(1..=26).contains(&slot.ring_setting) {
                return Err(ConfigError::RingSettingOutOfRange {
                    value: u32::from(slot.ring_setting),
                });
            }
            if !(1..=26).contains(&slot.start_position) {
                return Err(ConfigError::StartPositionOutOfRange {
                    value: u32::from(slot.start_position),
                });
            }
        }
        if !self.allow_repeated_rotors {
            let types = [self.left.rotor_type, self.middle.rotor_type, self.right.rotor_type];
            for i in 0..types.len() {
                for j in i + 1..types.len() {
                    if types[i] == types[j] {
                        return Err(ConfigError::RepeatedRotorType { rotor: types[i] });
                    }
                }
            }
        }
        Ok(())
    }
}

impl MachineConfigBuilder {
    /// Install a plugboard configuration.
    #[must_use]
    pub fn plugboard(mut self, plugboard: PlugboardConfig) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Permit the same rotor type in more than one slot.
    #[must_use]
    pub fn allow_repeated_rotors(mut self, allow: bool) -> Self {
        self.allow_repeated_rotors = allow;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by [`MachineConfig::validate`].
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<MachineConfig, ConfigError> {
        let config = MachineConfig {
            left: self.left,
            middle: self.middle,
            right: self.right,
            reflector: self.reflector,
            plugboard: self.plugboard,
            allow_repeated_rotors: self.allow_repeated_rotors,
        };
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// One encryption request: a machine setup plus the message to transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionRequest {
    /// The machine setup, valid for this request only.
    pub config: MachineConfig,
    /// Letters to encrypt. The transport normalizes or rejects non-letter
    /// input before building a request; anything else fails with
    /// [`CipherError::InvalidCharacter`].
    pub message: String,
}

/// Window positions of the three rotors, 1-based.
///
/// Returned after encryption so a caller can resume a session by feeding
/// these back as the next request's `start_position` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorPositions {
    /// Left rotor window position, `1..=26`.
    pub left: u8,
    /// Middle rotor window position, `1..=26`.
    pub middle: u8,
    /// Right rotor window position, `1..=26`.
    pub right: u8,
}

/// The result of one encryption request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionResponse {
    /// Upper-case ciphertext, one letter per message letter.
    pub ciphertext: String,
    /// Rotor positions after the last keystroke.
    pub final_positions: RotorPositions,
}

// ---------------------------------------------------------------------------
// Emulator port
// ---------------------------------------------------------------------------

/// Hexagonal port: the single operation the engine exposes to its
/// transport collaborator.
///
/// Implementations are synchronous and hold no per-request state; every
/// call constructs its machine from the request and discards it afterwards.
pub trait Emulator {
    /// Validate the request's configuration, encrypt the message, and
    /// report the final rotor positions.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::Config`] when validation rejects the setup,
    /// or [`EnigmaError::Cipher`] at the first non-letter message unit. No
    /// ciphertext is produced on error.
    fn encrypt(&self, request: &EncryptionRequest) -> Result<EncryptionResponse, EnigmaError>;
}
