// Rust guideline compliant 2026-08-29

//! A single mounted rotor: immutable wiring plus per-request rotational state.

use domain::RotorSettings;

/// One rotor slot of the machine.
///
/// The wiring tables are borrowed from the `'static` catalog; the only
/// mutable state is `offset`, advanced by the stepping mechanism during a
/// single message and discarded with the machine afterwards.
#[derive(Debug)]
pub struct Rotor {
    forward: &'static [u8; 26],
    inverse: &'static [u8; 26],
    notch: u8,
    ring_setting: u8,
    offset: u8,
}

impl Rotor {
    /// Mount a catalog rotor with the given settings.
    ///
    /// Range checks live in `MachineConfig::validate`; an out-of-range
    /// `ring_setting` is clamped here rather than trusted.
    #[must_use]
    pub fn new(settings: &RotorSettings) -> Self {
        Self {
            forward: settings.rotor_type.wiring(),
            inverse: settings.rotor_type.inverse_wiring(),
            notch: settings.rotor_type.notch(),
            ring_setting: settings.ring_setting.clamp(1, 26),
            offset: settings.offset() % 26,
        }
    }

    /// Net shift between the entry contact frame and the wiring frame:
    /// `offset - (ring_setting - 1)` modulo 26.
    fn effective_shift(&self) -> u8 {
        (self.offset + 26 - (self.ring_setting - 1)) % 26
    }

    /// Map an entry contact right-to-left (keyboard towards reflector).
    #[must_use]
    pub fn forward(&self, contact: u8) -> u8 {
        let shift = self.effective_shift();
        let wired = self.forward[usize::from((contact + shift) % 26)];
        (wired + 26 - shift) % 26
    }

    /// Map an entry contact left-to-right (reflector towards lampboard).
    /// Exact inverse of [`forward`](Self::forward) at the same position.
    #[must_use]
    pub fn backward(&self, contact: u8) -> u8 {
        let shift = self.effective_shift();
        let wired = self.inverse[usize::from((contact + shift) % 26)];
        (wired + 26 - shift) % 26
    }

    /// Advance this rotor by one position, wrapping at 26.
    pub fn step(&mut self) {
        self.offset = (self.offset + 1) % 26;
    }

    /// `true` when the rotor currently sits on its notch, i.e. the next
    /// step carries the rotor to its left.
    #[must_use]
    pub fn at_notch(&self) -> bool {
        self.offset == self.notch
    }

    /// Current rotational offset, `0..=25`.
    #[must_use]
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Current window position, 1-based -- directly reusable as a
    /// `start_position`.
    #[must_use]
    pub fn position(&self) -> u8 {
        self.offset + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::RotorType;
    use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

    fn rotor(rotor_type: RotorType, start_position: u8, ring_setting: u8) -> Rotor {
        Rotor::new(&RotorSettings::new(rotor_type, start_position, ring_setting))
    }

    // ------------------------------------------------------------------
    // Known wiring vectors
    // ------------------------------------------------------------------

    #[test]
    fn rotor_i_at_rest_maps_a_to_e() {
        let r = rotor(RotorType::I, 1, 1);
        assert_eq!(r.forward(0), 4);
    }

    #[test]
    fn rotor_i_at_position_b_maps_a_to_j() {
        let r = rotor(RotorType::I, 2, 1);
        assert_eq!(r.forward(0), 9);
    }

    #[test]
    fn rotor_i_with_ring_b_maps_a_to_k() {
        // The classic Ringstellung example: ring setting 2 shifts the
        // wiring so that A maps to K at position A.
        let r = rotor(RotorType::I, 1, 2);
        assert_eq!(r.forward(0), 10);
    }

    // ------------------------------------------------------------------
    // Inverse property
    // ------------------------------------------------------------------

    #[test]
    fn backward_inverts_forward_for_random_states() {
        let mut rng = StdRng::seed_from_u64(7);
        let types = [RotorType::I, RotorType::II, RotorType::III, RotorType::IV, RotorType::V];
        for _ in 0..200 {
            let rotor_type = types[rng.random_range(0..types.len())];
            let r = rotor(rotor_type, rng.random_range(1..=26), rng.random_range(1..=26));
            for contact in 0..26u8 {
                assert_eq!(r.backward(r.forward(contact)), contact);
                assert_eq!(r.forward(r.backward(contact)), contact);
            }
        }
    }

    // ------------------------------------------------------------------
    // Stepping state
    // ------------------------------------------------------------------

    #[test]
    fn out_of_range_settings_are_clamped_not_panicked_on() {
        // Normal construction goes through validated configs; a rotor
        // built directly from bad settings must still be well-defined.
        let r = rotor(RotorType::I, 1, 0);
        assert_eq!(r.forward(0), 4);
        let r = rotor(RotorType::I, 40, 40);
        for contact in 0..26u8 {
            assert_eq!(r.backward(r.forward(contact)), contact);
        }
    }

    #[test]
    fn step_wraps_at_z() {
        let mut r = rotor(RotorType::I, 26, 1);
        assert_eq!(r.offset(), 25);
        r.step();
        assert_eq!(r.offset(), 0);
        assert_eq!(r.position(), 1);
    }

    #[test]
    fn at_notch_tracks_the_window_position() {
        // Rotor III turns over at V (offset 21).
        let mut r = rotor(RotorType::III, 21, 1);
        assert!(!r.at_notch());
        r.step();
        assert!(r.at_notch());
        r.step();
        assert!(!r.at_notch());
    }
}
