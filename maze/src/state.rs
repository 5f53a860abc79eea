use std::{fmt::Display, sync::Arc};

use adversarial_search::{AgentIndex, GameState, PROTAGONIST};
use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::layout::{Direction, Grid, Position};

/// Points lost on every protagonist move
pub const TIME_PENALTY: i64 = 1;
pub const FOOD_REWARD: i64 = 10;
/// Bonus for eating the last piece of food
pub const WIN_REWARD: i64 = 500;
pub const LOSE_PENALTY: i64 = 500;
pub const GHOST_REWARD: i64 = 200;
/// How many ghost moves a capsule keeps the ghosts scared for
pub const SCARED_TIME: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub position: Position,
    pub start: Position,
    /// The last move this ghost made, ghosts don't turn around unless they have to
    pub direction: Direction,
    pub scared_timer: u32,
}

impl Ghost {
    pub(crate) fn at(position: Position) -> Self {
        Self {
            position,
            start: position,
            direction: Direction::Stop,
            scared_timer: 0,
        }
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }

    fn reset(&mut self) {
        self.position = self.start;
        self.direction = Direction::Stop;
        self.scared_timer = 0;
    }
}

/// A snapshot of a maze game
///
/// Agent 0 is the protagonist, agent `i` for `i >= 1` is ghost `i - 1`. States are never
/// modified in place, [GameState::successor] always builds a new one. The walls are shared
/// between every state of the same game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeState {
    grid: Arc<Grid>,
    protagonist: Position,
    ghosts: Vec<Ghost>,
    food: FxHashSet<Position>,
    capsules: Vec<Position>,
    score: i64,
    outcome: Option<Outcome>,
}

impl MazeState {
    pub(crate) fn new(
        grid: Arc<Grid>,
        protagonist: Position,
        ghosts: Vec<Ghost>,
        food: FxHashSet<Position>,
        capsules: Vec<Position>,
    ) -> Self {
        Self {
            grid,
            protagonist,
            ghosts,
            food,
            capsules,
            score: 0,
            outcome: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn protagonist(&self) -> Position {
        self.protagonist
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    /// The ghost moved by `agent`, if there is one
    pub fn ghost(&self, agent: AgentIndex) -> Option<&Ghost> {
        agent.checked_sub(1).and_then(|i| self.ghosts.get(i))
    }

    pub fn food(&self) -> &FxHashSet<Position> {
        &self.food
    }

    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    pub fn raw_score(&self) -> i64 {
        self.score
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn open_moves(&self, from: Position) -> impl Iterator<Item = Direction> + '_ {
        Direction::MOVES
            .into_iter()
            .filter(move |direction| !self.grid.is_wall(from.step(*direction)))
    }

    fn protagonist_moved(&mut self, direction: Direction) {
        let target = self.protagonist.step(direction);
        if !self.grid.is_wall(target) {
            self.protagonist = target;
        }
        self.score -= TIME_PENALTY;

        if self.food.remove(&self.protagonist) {
            self.score += FOOD_REWARD;
            if self.food.is_empty() {
                self.score += WIN_REWARD;
                self.outcome = Some(Outcome::Won);
            }
        }

        if let Some(i) = self.capsules.iter().position(|c| *c == self.protagonist) {
            self.capsules.swap_remove(i);
            for ghost in self.ghosts.iter_mut() {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for i in 0..self.ghosts.len() {
            self.collide(i);
        }
    }

    fn ghost_moved(&mut self, index: usize, direction: Direction) {
        let ghost = &mut self.ghosts[index];
        let target = ghost.position.step(direction);
        if !self.grid.is_wall(target) {
            ghost.position = target;
            ghost.direction = direction;
        }
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);

        self.collide(index);
    }

    fn collide(&mut self, index: usize) {
        if self.outcome.is_some() || self.ghosts[index].position != self.protagonist {
            return;
        }

        let ghost = &mut self.ghosts[index];
        if ghost.is_scared() {
            self.score += GHOST_REWARD;
            ghost.reset();
        } else {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(Outcome::Lost);
        }
    }
}

impl GameState for MazeState {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.outcome.is_some() {
            return vec![];
        }

        if agent == PROTAGONIST {
            return self
                .open_moves(self.protagonist)
                .chain(std::iter::once(Direction::Stop))
                .collect();
        }

        let Some(ghost) = self.ghost(agent) else {
            debug_assert!(false, "No ghost is moved by agent {}", agent);
            return vec![];
        };

        let moves: Vec<_> = self.open_moves(ghost.position).collect();
        if moves.is_empty() {
            // Walled in, the only thing left to do is wait
            vec![Direction::Stop]
        } else if moves.len() > 1 {
            let reverse = ghost.direction.reverse();
            moves.into_iter().filter(|m| *m != reverse).collect()
        } else {
            moves
        }
    }

    fn successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();
        if next.outcome.is_some() {
            return next;
        }

        if agent == PROTAGONIST {
            next.protagonist_moved(*action);
        } else if agent <= next.ghosts.len() {
            next.ghost_moved(agent - 1, *action);
        } else {
            debug_assert!(false, "No ghost is moved by agent {}", agent);
        }

        next
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Won)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lost)
    }

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn score(&self) -> f64 {
        self.score as f64
    }
}

impl Display for MazeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = (0..self.grid.height() as i32).map(|y| {
            (0..self.grid.width() as i32)
                .map(|x| {
                    let position = Position::new(x, y);
                    let ghost = self.ghosts.iter().find(|g| g.position == position);

                    match ghost {
                        Some(ghost) if ghost.is_scared() => 'g',
                        Some(_) => 'G',
                        None if position == self.protagonist => 'P',
                        None if self.grid.is_wall(position) => '%',
                        None if self.food.contains(&position) => '.',
                        None if self.capsules.contains(&position) => 'o',
                        None => ' ',
                    }
                })
                .collect::<String>()
        });

        writeln!(f, "{}", rows.format("\n"))?;
        write!(f, "score: {}", self.score)
    }
}
