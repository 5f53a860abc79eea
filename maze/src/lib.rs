//! A small grid chase game to run the searches in [adversarial_search] against.
//!
//! The protagonist eats its way through the food in a maze while ghosts move after it, one at a
//! time. Eating a capsule scares the ghosts for a while, scared ghosts can be eaten. Layouts are
//! plain text, see [Layout].

mod episode;
pub use episode::{Ending, Episode, EpisodeResult};

pub mod error;
pub use error::{LayoutError, UnknownName};

mod evaluation;
pub use evaluation::{better_evaluation, MazeEvaluation};

mod ghosts;
pub use ghosts::GhostPolicy;

mod layout;
pub use layout::{Direction, Grid, Layout, Position};

pub mod state;
pub use state::{Ghost, MazeState, Outcome};
