// Rust guideline compliant 2026-08-29

//! Plugboard (Steckerbrett): a self-inverse letter-pair swap.

use domain::PlugboardConfig;

const fn identity() -> [u8; 26] {
    let mut map = [0u8; 26];
    let mut i = 0;
    while i < 26 {
        map[i] = i as u8;
        i += 1;
    }
    map
}

/// The plugboard permutation, applied before the rotor stack and again
/// after it.
///
/// Built from a validated [`PlugboardConfig`]; unpaired letters map to
/// themselves, so the empty config yields the identity.
#[derive(Debug)]
pub struct Plugboard {
    map: [u8; 26],
}

impl Plugboard {
    /// Build the swap table from validated pairs.
    #[must_use]
    pub fn from_config(config: &PlugboardConfig) -> Self {
        let mut map = identity();
        for &(a, b) in config.pairs() {
            map[usize::from(a)] = b;
            map[usize::from(b)] = a;
        }
        Self { map }
    }

    /// Swap one contact. An involution: `swap(swap(c)) == c` for all `c`.
    #[must_use]
    pub fn swap(&self, contact: u8) -> u8 {
        self.map[usize::from(contact)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_identity() {
        let board = Plugboard::from_config(&PlugboardConfig::empty());
        for contact in 0..26u8 {
            assert_eq!(board.swap(contact), contact);
        }
    }

    #[test]
    fn pairs_swap_both_ways() {
        let config = PlugboardConfig::parse("BY EW").unwrap();
        let board = Plugboard::from_config(&config);
        assert_eq!(board.swap(1), 24);
        assert_eq!(board.swap(24), 1);
        assert_eq!(board.swap(4), 22);
        assert_eq!(board.swap(22), 4);
        // Unpaired letters are untouched.
        assert_eq!(board.swap(0), 0);
    }

    #[test]
    fn swap_is_an_involution() {
        let config = PlugboardConfig::parse("AB CD EF GH IJ KL MN").unwrap();
        let board = Plugboard::from_config(&config);
        for contact in 0..26u8 {
            assert_eq!(board.swap(board.swap(contact)), contact);
        }
    }
}
