use std::fmt::Debug;

use crate::AgentIndex;

/// The game as seen by the search. The search never looks inside a state, everything it knows
/// comes from these methods.
///
/// States are treated as immutable snapshots: [GameState::successor] must return a new state and
/// leave `self` untouched.
pub trait GameState: Sized {
    /// A single move for a single agent
    type Action: Clone + Debug;

    /// The moves available to `agent` in this state
    ///
    /// This should only be empty for terminal (or malformed) states. The search does not defend
    /// against an empty list at a node it has to expand.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state after `agent` plays `action`. `action` comes from [GameState::legal_actions]
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    /// Did the protagonist win
    fn is_win(&self) -> bool;

    /// Did the protagonist lose
    fn is_lose(&self) -> bool;

    /// Number of agents, including the protagonist. Constant for a given game
    fn num_agents(&self) -> usize;

    /// The raw game score of this state
    fn score(&self) -> f64;

    /// A state is terminal once it is either won or lost
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}
