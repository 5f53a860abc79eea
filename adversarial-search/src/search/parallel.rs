//! Root parallelism on the rayon thread pool.
//!
//! Subtrees below different root actions only read their own successor state, so minimax and
//! expectimax can search all of them at once. Alpha-beta threads its window from one sibling to
//! the next, so it searches the first root action alone and fans the rest out under the window
//! that action produced. That gives up some pruning between the later siblings but not any
//! exactness, the chosen action and value match the sequential search.

use rayon::prelude::*;
use tracing::debug;

use crate::{Evaluator, GameState, Turn, PROTAGONIST};

use super::{
    alpha_beta, expectimax, minimax, Algorithm, Decision, RootChoice, SearchStats, Searcher, Window,
};

pub(crate) fn decide<S, E>(
    algorithm: Algorithm,
    state: &S,
    depth: usize,
    evaluator: &E,
) -> Decision<S::Action>
where
    S: GameState + Send + Sync,
    S::Action: Send + Sync,
    E: Evaluator<S> + Sync,
{
    let mut searcher = Searcher::new(evaluator);
    let mut actions = match searcher.open_root(state, depth) {
        Ok(actions) => actions,
        Err(value) => return Decision::without_action(value, searcher.stats),
    };

    let child_turn = Turn::root(depth).next(state.num_agents());
    let mut choice = RootChoice::new();
    let mut stats = searcher.stats;

    let results = match algorithm {
        Algorithm::Minimax => fan_out(state, actions, evaluator, |searcher, child| {
            minimax::value(searcher, child, child_turn)
        }),
        Algorithm::Expectimax => fan_out(state, actions, evaluator, |searcher, child| {
            expectimax::value(searcher, child, child_turn)
        }),
        Algorithm::AlphaBeta => {
            let rest = actions.split_off(1);
            let mut window = Window::open();

            for action in actions {
                let child = state.successor(PROTAGONIST, &action);
                let value = alpha_beta::value(&mut searcher, &child, child_turn, window);
                choice.offer(action, value);
                window.raise_alpha(choice.best_value());
            }
            stats = searcher.stats;

            debug!(
                alpha = window.alpha(),
                siblings = rest.len(),
                "fanning out remaining root actions"
            );
            fan_out(state, rest, evaluator, |searcher, child| {
                alpha_beta::value(searcher, child, child_turn, window)
            })
        }
    };

    for (action, value, child_stats) in results {
        choice.offer(action, value);
        stats += child_stats;
    }

    choice.into_decision(stats)
}

/// Searches the subtree below each action on its own thread, results come back in the same order
/// as `actions`
fn fan_out<S, E, F>(
    state: &S,
    actions: Vec<S::Action>,
    evaluator: &E,
    search: F,
) -> Vec<(S::Action, f64, SearchStats)>
where
    S: GameState + Send + Sync,
    S::Action: Send + Sync,
    E: Evaluator<S> + Sync,
    F: Fn(&mut Searcher<'_, E>, &S) -> f64 + Sync,
{
    actions
        .into_par_iter()
        .map(|action| {
            let mut searcher = Searcher::new(evaluator);
            let child = state.successor(PROTAGONIST, &action);
            let value = search(&mut searcher, &child);

            (action, value, searcher.stats)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        test_tree::{random_tree, CountingGame},
        Algorithm, ScoreEvaluation,
    };

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(7);

        for (num_agents, depth) in [(1, 3), (2, 2), (3, 1), (3, 2)] {
            for _ in 0..20 {
                let game = random_tree(&mut rng, num_agents, depth, 3);

                for algorithm in Algorithm::ALL {
                    let sequential = algorithm.decide(&game, depth, &ScoreEvaluation);
                    let parallel = algorithm.par_decide(&game, depth, &ScoreEvaluation);

                    assert_eq!(parallel.action, sequential.action, "{}", algorithm);
                    assert_eq!(parallel.value, sequential.value, "{}", algorithm);
                }
            }
        }
    }

    #[test]
    fn test_parallel_stats_add_up() {
        let game = CountingGame::new(2, 3);

        let sequential = Algorithm::Minimax.decide(&game, 2, &ScoreEvaluation);
        let parallel = Algorithm::Minimax.par_decide(&game, 2, &ScoreEvaluation);

        assert_eq!(parallel.stats, sequential.stats);
        assert_eq!(parallel.options, sequential.options);
    }

    #[test]
    fn test_parallel_without_depth() {
        let game = CountingGame::new(2, 3);

        let decision = Algorithm::AlphaBeta.par_decide(&game, 0, &ScoreEvaluation);

        assert_eq!(decision.action, None);
        assert_eq!(decision.value, 0.0);
        assert_eq!(decision.stats.leaves_evaluated, 1);
    }
}
