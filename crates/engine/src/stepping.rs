// Rust guideline compliant 2026-08-29

//! The stepping mechanism, applied once before each character is encrypted.
//!
//! Notch conditions are evaluated on a snapshot of the pre-step offsets and
//! only then applied. Re-checking after a mutation is the classic Enigma
//! emulation bug: it loses the double-step anomaly, where a middle rotor
//! sitting on its own notch advances together with the left rotor even
//! though the right rotor did not carry it.

use crate::rotor::Rotor;

/// Advance the rotor triple by one keystroke.
///
/// Transition rule, all conditions read from pre-step state:
/// 1. the right rotor always steps;
/// 2. a middle rotor on its notch steps and carries the left rotor
///    (double step);
/// 3. otherwise, a right rotor on its notch carries the middle rotor.
pub fn advance(left: &mut Rotor, middle: &mut Rotor, right: &mut Rotor) {
    // Snapshot, then apply.
    let middle_at_notch = middle.at_notch();
    let right_at_notch = right.at_notch();

    right.step();
    if middle_at_notch {
        middle.step();
        left.step();
    } else if right_at_notch {
        middle.step();
    }
}
