use adversarial_search::{Evaluator, GameState, SearchAgent, PROTAGONIST};
use rand::Rng;
use tracing::{debug, info, info_span, warn};

use crate::{GhostPolicy, MazeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    /// The agent had no move to offer, usually because its depth is 0
    Stuck,
    OutOfMoves,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeResult {
    pub ending: Ending,
    pub score: f64,
    /// Protagonist moves made
    pub moves: usize,
}

/// Settings for playing out a full game
///
/// ```
/// use maze::{Episode, GhostPolicy};
///
/// let defaults = Episode::default();
///
/// assert_eq!(defaults.ghosts, GhostPolicy::Random);
/// assert_eq!(defaults.max_moves, 500);
/// assert!(!defaults.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Episode {
    pub ghosts: GhostPolicy,
    /// The game is called off after this many protagonist moves
    pub max_moves: usize,
    /// Search the protagonist's options on the rayon thread pool
    pub parallel: bool,
}

impl Default for Episode {
    fn default() -> Self {
        Self {
            ghosts: GhostPolicy::Random,
            max_moves: 500,
            parallel: false,
        }
    }
}

impl Episode {
    /// Play from `state` until the game is decided, the agent gets stuck or we run out of moves
    pub fn play<E, R>(
        &self,
        mut state: MazeState,
        agent: &SearchAgent<E>,
        rng: &mut R,
    ) -> EpisodeResult
    where
        E: Evaluator<MazeState> + Sync,
        R: Rng,
    {
        let span = info_span!("episode", ghosts = %self.ghosts, max_moves = self.max_moves);
        let _guard = span.enter();

        let mut moves = 0;
        let ending = loop {
            if state.is_win() {
                break Ending::Won;
            }
            if state.is_lose() {
                break Ending::Lost;
            }
            if moves >= self.max_moves {
                break Ending::OutOfMoves;
            }

            let decision = if self.parallel {
                agent.par_decide(&state)
            } else {
                agent.decide(&state)
            };
            let Some(action) = decision.action else {
                warn!(moves, score = state.score(), "Agent has no move to make");
                break Ending::Stuck;
            };

            debug!(moves, %action, value = decision.value, "protagonist moved");
            state = state.successor(PROTAGONIST, &action);
            moves += 1;

            for ghost in 1..state.num_agents() {
                if state.is_terminal() {
                    break;
                }
                if let Some(action) = self.ghosts.choose(&state, ghost, rng) {
                    state = state.successor(ghost, &action);
                }
            }
        };

        let result = EpisodeResult {
            ending,
            score: state.score(),
            moves,
        };
        info!(ending = ?result.ending, score = result.score, moves, "Episode finished");

        result
    }
}

#[cfg(test)]
mod test {
    use adversarial_search::{AgentOptions, Algorithm};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{Layout, MazeEvaluation};

    #[test]
    fn test_depth_zero_gets_stuck() {
        let state = Layout::builtin("tiny").unwrap().initial_state();
        let agent = SearchAgent::new(
            MazeEvaluation::Score,
            AgentOptions {
                algorithm: Algorithm::Minimax,
                depth: 0,
            },
        );

        let result = Episode::default().play(state, &agent, &mut StdRng::seed_from_u64(0));

        assert_eq!(result.ending, Ending::Stuck);
        assert_eq!(result.moves, 0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_runs_out_of_moves() {
        let state = Layout::parse("%%%%%%%%\n%P.....%\n%%%%%%%%")
            .unwrap()
            .initial_state();
        let agent = SearchAgent::new(
            MazeEvaluation::Score,
            AgentOptions {
                algorithm: Algorithm::AlphaBeta,
                depth: 1,
            },
        );
        let episode = Episode {
            max_moves: 3,
            ..Default::default()
        };

        let result = episode.play(state, &agent, &mut StdRng::seed_from_u64(0));

        assert_eq!(result.ending, Ending::OutOfMoves);
        assert_eq!(result.moves, 3);
        assert_eq!(result.score, 27.0);
    }

    #[test]
    fn test_single_food_is_won_straight_away() {
        let state = Layout::parse("%%%%%%\n%P.  %\n%   G%\n%%%%%%")
            .unwrap()
            .initial_state();
        let agent = SearchAgent::new(MazeEvaluation::Score, AgentOptions::default());

        let result = Episode::default().play(state, &agent, &mut StdRng::seed_from_u64(3));

        assert_eq!(result.ending, Ending::Won);
        assert_eq!(result.moves, 1);
        assert_eq!(result.score, 509.0);
    }
}
