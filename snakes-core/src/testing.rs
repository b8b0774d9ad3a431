//! Test doubles for driving deterministic games.

use std::collections::VecDeque;

use crate::dice::DiceRoller;

/// A die that yields a scripted sequence of values.
///
/// Panics when the script runs dry, so a test that rolls more often than it
/// scripted fails loudly instead of drifting into unplanned turns.
#[derive(Debug, Clone)]
pub struct ScriptedDie {
    rolls: VecDeque<u16>,
}

impl ScriptedDie {
    pub fn new(rolls: impl IntoIterator<Item = u16>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Rolls left in the script.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceRoller for ScriptedDie {
    fn roll(&mut self) -> u16 {
        self.rolls
            .pop_front()
            .expect("ScriptedDie ran out of scripted rolls")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_die_yields_in_order() {
        let mut die = ScriptedDie::new([3, 1, 6]);
        assert_eq!(die.remaining(), 3);
        assert_eq!(die.roll(), 3);
        assert_eq!(die.roll(), 1);
        assert_eq!(die.roll(), 6);
        assert_eq!(die.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "ran out of scripted rolls")]
    fn test_scripted_die_panics_when_dry() {
        let mut die = ScriptedDie::new([2]);
        die.roll();
        die.roll();
    }
}
