use std::{fmt::Display, str::FromStr};

use adversarial_search::{Evaluator, GameState};

use crate::{error::UnknownName, MazeState};

const SCORE_WEIGHT: f64 = 6.0;
const FOOD_LEFT_WEIGHT: f64 = 6.0;
const NEAREST_FOOD_WEIGHT: f64 = 2.0;
const NEAREST_GHOST_WEIGHT: f64 = 2.0;
/// Added to the score of won states and taken from lost ones, so that no ongoing state can
/// compete with either
const DECIDED: f64 = 999_999.0;

/// An evaluation that looks past the raw score
///
/// Rewards a high score, clearing food and staying close to the next piece of food, and is
/// nudged away from ghosts that aren't scared. Ghosts sharing our cell don't count.
pub fn better_evaluation(state: &MazeState) -> f64 {
    let score = state.score();
    if state.is_lose() {
        return score - DECIDED;
    }
    if state.is_win() {
        return score + DECIDED;
    }

    let protagonist = state.protagonist();
    let nearest_food = state
        .food()
        .iter()
        .map(|food| protagonist.manhattan(food))
        .min()
        .unwrap_or(0);
    let nearest_ghost = state
        .ghosts()
        .iter()
        .filter(|ghost| !ghost.is_scared())
        .map(|ghost| protagonist.manhattan(&ghost.position))
        .min()
        .unwrap_or(0);

    let mut evaluation = SCORE_WEIGHT * score
        - FOOD_LEFT_WEIGHT * state.food().len() as f64
        - NEAREST_FOOD_WEIGHT * nearest_food as f64;
    if nearest_ghost != 0 {
        evaluation -= NEAREST_GHOST_WEIGHT / nearest_ghost as f64;
    }

    evaluation
}

/// The evaluation functions that can be picked by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MazeEvaluation {
    /// The raw game score
    Score,
    /// See [better_evaluation]
    #[default]
    Better,
}

impl Evaluator<MazeState> for MazeEvaluation {
    fn evaluate(&self, state: &MazeState) -> f64 {
        match self {
            MazeEvaluation::Score => state.score(),
            MazeEvaluation::Better => better_evaluation(state),
        }
    }
}

impl FromStr for MazeEvaluation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score" | "scoreEvaluationFunction" => Ok(MazeEvaluation::Score),
            "better" | "betterEvaluationFunction" => Ok(MazeEvaluation::Better),
            _ => Err(UnknownName::Evaluation(s.to_owned())),
        }
    }
}

impl Display for MazeEvaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeEvaluation::Score => write!(f, "score"),
            MazeEvaluation::Better => write!(f, "better"),
        }
    }
}
