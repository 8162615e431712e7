//! Game State Machine
//!
//! Idle and Ended both show the splash screen; a primary action from either
//! starts a fresh run. Player control is tracked separately from the state:
//! a collision drops control while the run stays Playing until the player
//! falls off the canvas.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Idle,
    Playing,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    FellOffScreen,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
    controls_on: bool,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Idle,
            controls_on: false,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether primary actions currently make the player jump
    pub fn controls_on(&self) -> bool {
        self.controls_on
    }

    /// Drop player control; returns whether it was on
    pub fn disable_controls(&mut self) -> bool {
        std::mem::replace(&mut self.controls_on, false)
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            self.controls_on = next_state == GameState::Playing;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Idle, GameAction::Start) => Some(GameState::Playing),
            (GameState::Ended, GameAction::Start) => Some(GameState::Playing),
            (GameState::Playing, GameAction::FellOffScreen) => Some(GameState::Ended),
            _ => None,
        }
    }

    /// Check if a run is in progress
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Idle);
        assert!(!fsm.controls_on());
    }

    #[test]
    fn test_start_enables_controls() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, GameState::Idle);
        assert_eq!(fsm.state(), GameState::Playing);
        assert!(fsm.controls_on());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::FellOffScreen);
        assert!(!result.success);
        assert_eq!(fsm.state(), GameState::Idle);
    }

    #[test]
    fn test_cannot_start_while_playing() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert!(!fsm.can_transition(GameAction::Start));
    }

    #[test]
    fn test_collision_keeps_run_playing() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert!(fsm.disable_controls());
        assert!(!fsm.disable_controls(), "second disable reports already off");
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_end_happens_once() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.disable_controls();

        assert!(fsm.transition(GameAction::FellOffScreen).success);
        assert!(!fsm.transition(GameAction::FellOffScreen).success);
        assert_eq!(fsm.state(), GameState::Ended);
    }

    #[test]
    fn test_restart_after_end() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::FellOffScreen);
        assert!(!fsm.controls_on());
        fsm.transition(GameAction::Start);
        assert_eq!(fsm.state(), GameState::Playing);
        assert!(fsm.controls_on());
    }
}
