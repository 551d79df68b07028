//! Base occupancy (no runner identity)

use serde::{Deserialize, Serialize};

/// Base numbering used throughout the engine: 0 = batter/home plate,
/// 1..=3 = first..third, 4 = scored.
pub const HOME: u8 = 0;
pub const FIRST: u8 = 1;
pub const SECOND: u8 = 2;
pub const THIRD: u8 = 3;
pub const SCORED: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BaseState {
    pub on_first: bool,
    pub on_second: bool,
    pub on_third: bool,
}

impl BaseState {
    pub const EMPTY: BaseState = BaseState { on_first: false, on_second: false, on_third: false };
    pub const LOADED: BaseState = BaseState { on_first: true, on_second: true, on_third: true };

    pub fn new(on_first: bool, on_second: bool, on_third: bool) -> Self {
        Self { on_first, on_second, on_third }
    }

    pub fn occupied(&self, base: u8) -> bool {
        match base {
            FIRST => self.on_first,
            SECOND => self.on_second,
            THIRD => self.on_third,
            _ => false,
        }
    }

    pub fn set(&mut self, base: u8, occupied: bool) {
        match base {
            FIRST => self.on_first = occupied,
            SECOND => self.on_second = occupied,
            THIRD => self.on_third = occupied,
            _ => {}
        }
    }

    pub fn runner_count(&self) -> u8 {
        self.on_first as u8 + self.on_second as u8 + self.on_third as u8
    }

    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    pub fn is_loaded(&self) -> bool {
        *self == Self::LOADED
    }

    /// Occupied bases, lead runner first.
    pub fn runners_lead_first(&self) -> impl Iterator<Item = u8> + '_ {
        [THIRD, SECOND, FIRST].into_iter().filter(move |b| self.occupied(*b))
    }

    /// A runner on `base` is forced when every base behind it is occupied.
    pub fn is_forced(&self, base: u8) -> bool {
        (FIRST..base).all(|b| self.occupied(b))
    }
}

impl std::fmt::Display for BaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = |on: bool, c: char| if on { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            mark(self.on_first, '1'),
            mark(self.on_second, '2'),
            mark(self.on_third, '3')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_count() {
        assert_eq!(BaseState::EMPTY.runner_count(), 0);
        assert_eq!(BaseState::LOADED.runner_count(), 3);
        assert_eq!(BaseState::new(true, false, true).runner_count(), 2);
    }

    #[test]
    fn test_forced_runners() {
        let bases = BaseState::new(true, false, true);
        assert!(bases.is_forced(FIRST));
        assert!(bases.is_forced(SECOND));
        assert!(!bases.is_forced(THIRD));
        assert!(BaseState::LOADED.is_forced(THIRD));
    }

    #[test]
    fn test_lead_runner_order() {
        let order: Vec<u8> = BaseState::new(true, true, false).runners_lead_first().collect();
        assert_eq!(order, vec![SECOND, FIRST]);
    }

    #[test]
    fn test_display() {
        assert_eq!(BaseState::new(true, false, true).to_string(), "1-3");
        assert_eq!(BaseState::EMPTY.to_string(), "---");
    }
}
