use std::{fmt::Display, str::FromStr};

use adversarial_search::{AgentIndex, GameState};
use rand::{seq::SliceRandom, Rng};

use crate::{error::UnknownName, Direction, MazeState};

const DEFAULT_PROBABILITY: f64 = 0.8;

/// How the ghosts pick their moves when a game is actually played
///
/// The search never sees these, it models the ghosts as adversaries or as uniformly random
/// depending on the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GhostPolicy {
    /// Uniform over the legal moves
    #[default]
    Random,
    /// Most of the time heads for the protagonist, or away from it while scared. Otherwise
    /// behaves like [GhostPolicy::Random]
    Directional {
        attack_probability: f64,
        flee_probability: f64,
    },
}

impl GhostPolicy {
    pub fn directional() -> Self {
        Self::Directional {
            attack_probability: DEFAULT_PROBABILITY,
            flee_probability: DEFAULT_PROBABILITY,
        }
    }

    /// The move ghost `agent` makes in `state`, `None` if it has no legal move
    pub fn choose<R: Rng>(
        &self,
        state: &MazeState,
        agent: AgentIndex,
        rng: &mut R,
    ) -> Option<Direction> {
        let moves = state.legal_actions(agent);

        match self {
            GhostPolicy::Random => moves.choose(rng).copied(),
            GhostPolicy::Directional {
                attack_probability,
                flee_probability,
            } => {
                let ghost = state.ghost(agent)?;
                let (probability, fleeing) = if ghost.is_scared() {
                    (*flee_probability, true)
                } else {
                    (*attack_probability, false)
                };

                if !rng.gen_bool(probability.clamp(0.0, 1.0)) {
                    return moves.choose(rng).copied();
                }

                let distances: Vec<_> = moves
                    .iter()
                    .map(|m| ghost.position.step(*m).manhattan(&state.protagonist()))
                    .collect();
                let best = if fleeing {
                    distances.iter().max()?
                } else {
                    distances.iter().min()?
                };

                let best_moves: Vec<_> = moves
                    .iter()
                    .zip(&distances)
                    .filter(|(_, distance)| *distance == best)
                    .map(|(m, _)| *m)
                    .collect();

                best_moves.choose(rng).copied()
            }
        }
    }
}

impl FromStr for GhostPolicy {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" | "RandomGhost" => Ok(GhostPolicy::Random),
            "directional" | "DirectionalGhost" => Ok(GhostPolicy::directional()),
            _ => Err(UnknownName::GhostPolicy(s.to_owned())),
        }
    }
}

impl Display for GhostPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GhostPolicy::Random => write!(f, "random"),
            GhostPolicy::Directional { .. } => write!(f, "directional"),
        }
    }
}
