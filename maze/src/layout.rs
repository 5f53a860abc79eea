use std::{fmt::Display, str::FromStr, sync::Arc};

use crate::{error::LayoutError, state::Ghost, MazeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();

        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// A move on the grid. Rows grow downwards, so `North` is one row up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Every direction that actually moves, in the order legal actions are listed
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stop => "stop",
        };

        write!(f, "{}", name)
    }
}

/// The static part of a maze, shared between every state of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Anything off the grid counts as a wall
    pub fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return true;
        }

        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }

        self.walls[y * self.width + x]
    }
}

const BUILTIN_LAYOUTS: [(&str, &str); 4] = [
    ("tiny", include_str!("../layouts/tiny.lay")),
    ("trapped", include_str!("../layouts/trapped.lay")),
    ("open", include_str!("../layouts/open.lay")),
    ("classic", include_str!("../layouts/classic.lay")),
];

/// A parsed maze, ready to start games from
///
/// Layouts are plain text, one row per line:
///
/// - `%` wall
/// - `.` food
/// - `o` capsule, eating one scares every ghost for a while
/// - `P` the protagonist, exactly one
/// - `G` a ghost, any number. Ghosts move in the order they appear, row by row
/// - ` ` empty floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    protagonist: Position,
    ghosts: Vec<Position>,
    food: Vec<Position>,
    capsules: Vec<Position>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        while rows.last().map_or(false, |line| line.is_empty()) {
            rows.pop();
        }

        let width = rows.first().ok_or(LayoutError::Empty)?.chars().count();
        let height = rows.len();

        let mut walls = Vec::with_capacity(width * height);
        let mut protagonists = vec![];
        let mut ghosts = vec![];
        let mut food = vec![];
        let mut capsules = vec![];

        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }

            for (column, character) in line.chars().enumerate() {
                let position = Position::new(column as i32, row as i32);
                walls.push(character == '%');

                match character {
                    '%' | ' ' => {}
                    '.' => food.push(position),
                    'o' => capsules.push(position),
                    'P' => protagonists.push(position),
                    'G' => ghosts.push(position),
                    _ => {
                        return Err(LayoutError::UnknownCharacter {
                            character,
                            row,
                            column,
                        })
                    }
                }
            }
        }

        let protagonist = match protagonists.as_slice() {
            [only] => *only,
            _ => return Err(LayoutError::ProtagonistCount(protagonists.len())),
        };

        Ok(Self {
            grid: Grid {
                width,
                height,
                walls,
            },
            protagonist,
            ghosts,
            food,
            capsules,
        })
    }

    /// One of the layouts that ship with this crate, see [Layout::builtin_names]
    pub fn builtin(name: &str) -> Result<Self, LayoutError> {
        let (_, text) = BUILTIN_LAYOUTS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .ok_or_else(|| LayoutError::UnknownLayout(name.to_owned()))?;

        Self::parse(text)
    }

    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_LAYOUTS.iter().map(|(name, _)| *name)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn num_ghosts(&self) -> usize {
        self.ghosts.len()
    }

    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    /// The state at the start of a game on this layout
    pub fn initial_state(&self) -> MazeState {
        MazeState::new(
            Arc::new(self.grid.clone()),
            self.protagonist,
            self.ghosts.iter().copied().map(Ghost::at).collect(),
            self.food.iter().copied().collect(),
            self.capsules.clone(),
        )
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
