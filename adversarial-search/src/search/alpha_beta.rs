use tracing::trace;

use crate::{Evaluator, GameState, Turn, PROTAGONIST};

use super::{Decision, RootChoice, Searcher};

#[derive(Debug, Clone, Copy, PartialEq)]
/// The alpha-beta window
///
/// `alpha` is the best value the maximizer can already guarantee somewhere else in the tree and
/// `beta` the best the minimizer can. The window is passed down by value and only ever narrows:
/// alpha never goes down and beta never goes up.
pub struct Window {
    alpha: f64,
    beta: f64,
}

impl Window {
    /// The window at the root, nothing is guaranteed yet
    pub fn open() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }

    #[allow(missing_docs)]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[allow(missing_docs)]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Record a value the maximizer can guarantee
    pub fn raise_alpha(&mut self, value: f64) {
        self.alpha = self.alpha.max(value);
    }

    /// Record a value the minimizer can guarantee
    pub fn lower_beta(&mut self, value: f64) {
        self.beta = self.beta.min(value);
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::open()
    }
}

pub(crate) fn decide<S, E>(state: &S, depth: usize, evaluator: &E) -> Decision<S::Action>
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut searcher = Searcher::new(evaluator);
    let actions = match searcher.open_root(state, depth) {
        Ok(actions) => actions,
        Err(value) => return Decision::without_action(value, searcher.stats),
    };

    let child_turn = Turn::root(depth).next(state.num_agents());
    let mut window = Window::open();
    let mut choice = RootChoice::new();
    #[cfg(test)]
    let node = window_log::open(window);
    for action in actions {
        let child = state.successor(PROTAGONIST, &action);
        let value = value(&mut searcher, &child, child_turn, window);
        choice.offer(action, value);

        if choice.best_value() > window.beta() {
            searcher.record_cutoff();
            break;
        }
        window.raise_alpha(choice.best_value());
        #[cfg(test)]
        window_log::record(node, window);
    }

    choice.into_decision(searcher.stats)
}

/// The minimax value of `state`, skipping children that can't change the result
///
/// When a node stops early the value it returns is a bound rather than the exact minimax value,
/// but in that case its parent is guaranteed not to pick it.
pub(crate) fn value<S, E>(
    searcher: &mut Searcher<'_, E>,
    state: &S,
    turn: Turn,
    window: Window,
) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    if let Some(value) = searcher.cutoff(state, turn) {
        return value;
    }

    let mut window = window;
    let next_turn = turn.next(state.num_agents());
    let actions = searcher.expand(state, turn.agent);
    #[cfg(test)]
    let node = window_log::open(window);

    if turn.is_protagonist() {
        let mut best = f64::NEG_INFINITY;
        for action in &actions {
            let child = state.successor(turn.agent, action);
            best = best.max(value(searcher, &child, next_turn, window));

            if best > window.beta() {
                trace!(agent = turn.agent, best, beta = window.beta(), "beta cutoff");
                searcher.record_cutoff();
                break;
            }
            window.raise_alpha(best);
            #[cfg(test)]
            window_log::record(node, window);
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for action in &actions {
            let child = state.successor(turn.agent, action);
            best = best.min(value(searcher, &child, next_turn, window));

            if best < window.alpha() {
                trace!(agent = turn.agent, best, alpha = window.alpha(), "alpha cutoff");
                searcher.record_cutoff();
                break;
            }
            window.lower_beta(best);
            #[cfg(test)]
            window_log::record(node, window);
        }
        best
    }
}
