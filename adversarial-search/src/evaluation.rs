use crate::GameState;

/// This trait is used to control something that can return a value from a game state
///
/// It is called at every cutoff node of the search, so it should be cheap compared to expanding
/// the tree. Values must be finite: the search reserves the infinities for its own bounds.
pub trait Evaluator<S> {
    /// Convert the given state into a value, higher is better for the protagonist
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, FnLike: Fn(&S) -> f64> Evaluator<S> for FnLike {
    fn evaluate(&self, state: &S) -> f64 {
        (self)(state)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Evaluates a state as its raw game score
pub struct ScoreEvaluation;

impl<S: GameState> Evaluator<S> for ScoreEvaluation {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_tree::TreeBuilder;

    #[test]
    fn test_closures_are_evaluators() {
        let mut builder = TreeBuilder::new(1);
        let root = builder.leaf("root", 7.0);
        let game = builder.build(root);

        let doubled = |state: &crate::test_tree::TreeGame| state.score() * 2.0;

        assert_eq!(doubled.evaluate(&game), 14.0);
        assert_eq!(ScoreEvaluation.evaluate(&game), 7.0);
    }
}
