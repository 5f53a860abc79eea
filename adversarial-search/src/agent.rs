use derivative::Derivative;
use tracing::{debug, info_span};

use crate::{Algorithm, Decision, Evaluator, GameState, ScoreEvaluation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Settings for a [SearchAgent]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use adversarial_search::{AgentOptions, Algorithm};
///
/// let defaults: AgentOptions = Default::default();
///
/// assert_eq!(defaults.algorithm, Algorithm::AlphaBeta);
/// assert_eq!(defaults.depth, 2);
/// ```
pub struct AgentOptions {
    /// Which search to run
    pub algorithm: Algorithm,
    /// How many full rounds to look ahead
    ///
    /// Defaults to 2
    pub depth: usize,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            depth: 2,
        }
    }
}

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = ""))]
/// This is the struct that wraps an evaluation function and a set of options, and picks the
/// protagonist's action whenever it is asked
///
/// The options are fixed when the agent is built. Nothing is carried over from one decision to
/// the next, so the same agent can be asked about unrelated states in any order.
///
/// It also outputs traces using the [tracing] crate.
pub struct SearchAgent<E> {
    options: AgentOptions,
    #[derivative(Debug = "ignore")]
    evaluator: E,
}

impl Default for SearchAgent<ScoreEvaluation> {
    fn default() -> Self {
        Self::new(ScoreEvaluation, AgentOptions::default())
    }
}

impl<E> SearchAgent<E> {
    /// Construct a new `SearchAgent`
    pub fn new(evaluator: E, options: AgentOptions) -> Self {
        Self { options, evaluator }
    }

    /// The options this agent was built with
    pub fn options(&self) -> AgentOptions {
        self.options
    }

    /// The evaluation function this agent scores states with
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Search from `state` and return everything we learned about the protagonist's options
    pub fn decide<S>(&self, state: &S) -> Decision<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.traced(|| {
            self.options
                .algorithm
                .decide(state, self.options.depth, &self.evaluator)
        })
    }

    /// Same as [SearchAgent::decide] but searches the protagonist's options in parallel
    pub fn par_decide<S>(&self, state: &S) -> Decision<S::Action>
    where
        S: GameState + Send + Sync,
        S::Action: Send + Sync,
        E: Evaluator<S> + Sync,
    {
        self.traced(|| {
            self.options
                .algorithm
                .par_decide(state, self.options.depth, &self.evaluator)
        })
    }

    /// Pick the action to play in `state`
    ///
    /// Returns `None` when the agent has no move to make, either because the depth is 0, the
    /// game is already over or the protagonist has no legal actions. It is up to the caller to
    /// decide what that means for their game.
    pub fn get_action<S>(&self, state: &S) -> Option<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.decide(state).action
    }

    fn traced<A, F>(&self, search: F) -> Decision<A>
    where
        A: std::fmt::Debug,
        F: FnOnce() -> Decision<A>,
    {
        info_span!(
            "search_decision",
            algorithm = %self.options.algorithm,
            depth = self.options.depth,
            chosen_value = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
        )
        .in_scope(|| {
            let decision = search();

            let current_span = tracing::Span::current();
            current_span.record("chosen_value", decision.value);
            current_span.record("chosen_action", format!("{:?}", decision.action).as_str());

            debug!(
                nodes_expanded = decision.stats.nodes_expanded,
                leaves_evaluated = decision.stats.leaves_evaluated,
                cutoffs = decision.stats.cutoffs,
                "finished search"
            );

            decision
        })
    }
}
