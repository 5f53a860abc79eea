#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements depth limited adversarial search for turn based games with one
//! maximizing agent (the protagonist, index 0) and any number of opponents that move after it
//! in a fixed cyclic order.
//!
//! You provide the game through the [GameState] trait and an evaluation function that turns a
//! given state into an `f64`. Three strategies are available through [Algorithm]:
//!
//! - [Algorithm::Minimax] assumes every opponent minimizes your score
//! - [Algorithm::AlphaBeta] returns exactly what minimax returns, but skips subtrees that can't
//!   change the decision
//! - [Algorithm::Expectimax] models every opponent as picking uniformly at random
//!
//! Depth is counted in rounds. A depth of 2 in a game with three agents looks six moves ahead.
//!
//! ```rust
//! use adversarial_search::{AgentOptions, Algorithm, GameState, ScoreEvaluation, SearchAgent};
//!
//! // A pile of stones. We can take one or two stones, our single opponent always takes one
//! #[derive(Debug, Clone)]
//! struct Pile(u32);
//!
//! impl GameState for Pile {
//!     type Action = u32;
//!
//!     fn legal_actions(&self, agent: usize) -> Vec<u32> {
//!         if self.is_terminal() {
//!             return vec![];
//!         }
//!         if agent == 0 {
//!             (1..=2).filter(|n| *n <= self.0).collect()
//!         } else {
//!             vec![1]
//!         }
//!     }
//!
//!     fn successor(&self, _agent: usize, action: &u32) -> Self {
//!         Pile(self.0 - action)
//!     }
//!
//!     fn is_win(&self) -> bool {
//!         false
//!     }
//!
//!     fn is_lose(&self) -> bool {
//!         self.0 == 0
//!     }
//!
//!     fn num_agents(&self) -> usize {
//!         2
//!     }
//!
//!     fn score(&self) -> f64 {
//!         self.0 as f64
//!     }
//! }
//!
//! let options = AgentOptions {
//!     algorithm: Algorithm::Minimax,
//!     depth: 1,
//! };
//! let agent = SearchAgent::new(ScoreEvaluation, options);
//!
//! let decision = agent.decide(&Pile(5));
//! assert_eq!(decision.action, Some(1));
//! assert_eq!(decision.value, 3.0);
//! ```

mod agent;
pub use agent::{AgentOptions, SearchAgent};

mod evaluation;
pub use evaluation::{Evaluator, ScoreEvaluation};

pub mod search;
pub use search::{Algorithm, Decision, ParseAlgorithmError, SearchStats, Window};

mod state;
pub use state::GameState;

mod turn;
pub use turn::{AgentIndex, Turn, PROTAGONIST};

#[cfg(test)]
mod test_tree;
