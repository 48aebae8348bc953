/// Counts turns and decides when the mines are due to move again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnTracker {
    turn: u32,
    interval: u32,
}

impl TurnTracker {
    /// Panics when `interval` is 0, see [`GameConfig::validate`](crate::GameConfig::validate).
    pub const fn new(interval: u32) -> Self {
        assert!(interval >= 1, "reposition interval must be at least 1");
        Self { turn: 0, interval }
    }

    pub const fn turn(&self) -> u32 {
        self.turn
    }

    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// Counts one turn.
    pub fn advance(&mut self) {
        self.turn = self.turn.saturating_add(1);
    }

    /// Whether the turn just counted lands on the reposition cadence.
    pub const fn reposition_due(&self) -> bool {
        self.turn > 0 && self.turn % self.interval == 0
    }

    /// Turns left until the next reposition, `interval` right after one happened.
    pub const fn turns_until_reposition(&self) -> u32 {
        self.interval - self.turn % self.interval
    }

    pub fn reset(&mut self) {
        self.turn = 0;
    }
}
