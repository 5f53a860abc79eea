use crate::{Evaluator, GameState, Turn, PROTAGONIST};

use super::{Decision, RootChoice, Searcher};

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
    let mut choice = RootChoice::new();
    for action in actions {
        let child = state.successor(PROTAGONIST, &action);
        let value = value(&mut searcher, &child, child_turn);
        choice.offer(action, value);
    }

    choice.into_decision(searcher.stats)
}

/// The minimax value of `state` with `turn.agent` to move
///
/// Every child of every node above the cutoff is visited, in the order the game lists them.
pub(crate) fn value<S, E>(searcher: &mut Searcher<'_, E>, state: &S, turn: Turn) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    if let Some(value) = searcher.cutoff(state, turn) {
        return value;
    }

    let next_turn = turn.next(state.num_agents());
    let actions = searcher.expand(state, turn.agent);
    let children = actions
        .iter()
        .map(|action| value(searcher, &state.successor(turn.agent, action), next_turn));

    if turn.is_protagonist() {
        children.fold(f64::NEG_INFINITY, f64::max)
    } else {
        children.fold(f64::INFINITY, f64::min)
    }
}
