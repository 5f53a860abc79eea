/// Index of an agent in the turn order. `0` is always the protagonist, every other index is an
/// opponent
pub type AgentIndex = usize;

/// The maximizing agent
pub const PROTAGONIST: AgentIndex = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Who is about to move and how many full rounds of lookahead are left
///
/// Depth is counted in rounds, not plies. It only goes down once every agent has moved, when the
/// turn wraps back around to the protagonist.
pub struct Turn {
    /// The agent about to move
    pub agent: AgentIndex,
    /// Remaining rounds of lookahead
    pub depth: usize,
}

impl Turn {
    /// The protagonist to move with the full depth budget
    pub fn root(depth: usize) -> Self {
        Self {
            agent: PROTAGONIST,
            depth,
        }
    }

    /// The turn after the current agent has moved
    pub fn next(self, num_agents: usize) -> Self {
        let agent = (self.agent + 1) % num_agents;
        let depth = if agent == PROTAGONIST {
            self.depth.saturating_sub(1)
        } else {
            self.depth
        };

        Self { agent, depth }
    }

    /// Is the protagonist the one moving
    pub fn is_protagonist(&self) -> bool {
        self.agent == PROTAGONIST
    }

    /// No lookahead left, this node gets evaluated
    pub fn is_exhausted(&self) -> bool {
        self.depth == 0
    }
}
