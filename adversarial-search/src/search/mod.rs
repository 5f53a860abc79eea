//! The three search strategies and the plumbing they share.
//!
//! All of them walk the tree the same way: the protagonist maximizes, depth is counted in full
//! rounds (see [Turn]), and a node is scored with the evaluation function as soon as it is won,
//! lost, or out of depth. They only differ in how opponent nodes combine their children and in
//! whether siblings can be skipped.

use std::{fmt::Display, ops::AddAssign, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::{AgentIndex, Evaluator, GameState, Turn, PROTAGONIST};

mod alpha_beta;
pub use alpha_beta::Window;

mod decision;
pub use decision::Decision;

mod expectimax;
mod minimax;
mod parallel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which search strategy to run
pub enum Algorithm {
    /// Full minimax, every opponent minimizes
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
    /// Opponents pick uniformly at random, their nodes average their children
    Expectimax,
}

impl Algorithm {
    /// Every algorithm, in the order they are usually compared
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Minimax,
        Algorithm::AlphaBeta,
        Algorithm::Expectimax,
    ];

    /// Search `depth` rounds ahead of `state` and pick the protagonist's action
    ///
    /// A `depth` of 0 does no search at all, the returned [Decision] has no action and the value
    /// of the current state.
    pub fn decide<S, E>(&self, state: &S, depth: usize, evaluator: &E) -> Decision<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        match self {
            Algorithm::Minimax => minimax::decide(state, depth, evaluator),
            Algorithm::AlphaBeta => alpha_beta::decide(state, depth, evaluator),
            Algorithm::Expectimax => expectimax::decide(state, depth, evaluator),
        }
    }

    /// Same as [Algorithm::decide] but the protagonist's options are searched on the rayon
    /// thread pool
    ///
    /// The returned action and value are identical to the sequential search. The
    /// [SearchStats] can differ for [Algorithm::AlphaBeta] since siblings searched in parallel
    /// can't tighten each other's window.
    pub fn par_decide<S, E>(&self, state: &S, depth: usize, evaluator: &E) -> Decision<S::Action>
    where
        S: GameState + Send + Sync,
        S::Action: Send + Sync,
        E: Evaluator<S> + Sync,
    {
        parallel::decide(*self, state, depth, evaluator)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::Expectimax => "expectimax",
        };

        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search algorithm '{0}' (expected one of: minimax, alpha-beta, expectimax)")]
/// Returned when an [Algorithm] can't be parsed from a string
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" => Ok(Algorithm::AlphaBeta),
            "expectimax" => Ok(Algorithm::Expectimax),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Counters collected while making a single decision
pub struct SearchStats {
    /// Nodes whose legal actions were enumerated, the root included
    pub nodes_expanded: usize,
    /// Calls to the evaluation function
    pub leaves_evaluated: usize,
    /// Times a node stopped looking at its remaining children. Only alpha-beta prunes
    pub cutoffs: usize,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes_expanded += rhs.nodes_expanded;
        self.leaves_evaluated += rhs.leaves_evaluated;
        self.cutoffs += rhs.cutoffs;
    }
}

/// Holds the evaluation function and the counters for one decision
///
/// Every strategy goes through this for cutoffs and expansion so the stats mean the same thing
/// no matter which one ran.
pub(crate) struct Searcher<'e, E> {
    evaluator: &'e E,
    pub(crate) stats: SearchStats,
}

impl<'e, E> Searcher<'e, E> {
    pub(crate) fn new(evaluator: &'e E) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn evaluate<S>(&mut self, state: &S) -> f64
    where
        E: Evaluator<S>,
    {
        self.stats.leaves_evaluated += 1;

        let value = self.evaluator.evaluate(state);
        debug_assert!(
            value.is_finite(),
            "evaluation functions must return finite values, got {}",
            value
        );

        value
    }

    /// The cutoff rule. Won, lost and out of depth nodes are evaluated instead of expanded
    pub(crate) fn cutoff<S>(&mut self, state: &S, turn: Turn) -> Option<f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if state.is_terminal() || turn.is_exhausted() {
            Some(self.evaluate(state))
        } else {
            None
        }
    }

    pub(crate) fn expand<S: GameState>(&mut self, state: &S, agent: AgentIndex) -> Vec<S::Action> {
        self.stats.nodes_expanded += 1;

        state.legal_actions(agent)
    }

    pub(crate) fn record_cutoff(&mut self) {
        self.stats.cutoffs += 1;
    }

    /// The protagonist's actions at the root, or the value of the root if there is nothing to
    /// search
    pub(crate) fn open_root<S>(&mut self, state: &S, depth: usize) -> Result<Vec<S::Action>, f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if let Some(value) = self.cutoff(state, Turn::root(depth)) {
            debug!(depth, value, "root is a cutoff node, nothing to search");
            return Err(value);
        }

        let actions = self.expand(state, PROTAGONIST);
        if actions.is_empty() {
            debug!(depth, "protagonist has no legal actions at the root");
            return Err(self.evaluate(state));
        }

        Ok(actions)
    }
}

/// Tracks the protagonist's options at the root and which one is best
///
/// Ties go to the first action offered, so the decision only depends on the order the oracle
/// lists its actions in.
#[derive(Debug)]
pub(crate) struct RootChoice<A> {
    best: Option<(A, f64)>,
    options: Vec<(A, f64)>,
}

impl<A: Clone> RootChoice<A> {
    pub(crate) fn new() -> Self {
        Self {
            best: None,
            options: vec![],
        }
    }

    pub(crate) fn offer(&mut self, action: A, value: f64) {
        let improves = match &self.best {
            Some((_, best)) => value > *best,
            None => true,
        };

        if improves {
            self.best = Some((action.clone(), value));
        }
        self.options.push((action, value));
    }

    /// The best value offered so far, negative infinity before the first offer
    pub(crate) fn best_value(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(f64::NEG_INFINITY, |(_, value)| *value)
    }

    /// Only called after at least one offer, [Searcher::open_root] never hands out an empty
    /// list of actions
    pub(crate) fn into_decision(self, stats: SearchStats) -> Decision<A> {
        let (action, value) = self
            .best
            .expect("The root always has at least one action by the time we pick one");

        Decision {
            action: Some(action),
            value,
            options: self.options,
            stats,
        }
    }
}
