// Rust guideline compliant 2026-08-29

//! Reflector (Umkehrwalze): the fixed involution that turns the signal
//! path back towards the lampboard.

use domain::ReflectorType;

/// The mounted reflector. Never mutated; the wiring is borrowed from the
/// `'static` catalog.
#[derive(Debug)]
pub struct Reflector {
    map: &'static [u8; 26],
}

impl Reflector {
    /// Mount a catalog reflector.
    #[must_use]
    pub fn new(reflector_type: ReflectorType) -> Self {
        Self { map: reflector_type.wiring() }
    }

    /// Reflect one contact. An involution with no fixed points.
    #[must_use]
    pub fn reflect(&self, contact: u8) -> u8 {
        self.map[usize::from(contact)]
    }
}
