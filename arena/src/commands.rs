pub mod decide;
pub mod play;

use decide::Decide;
use play::Play;

use adversarial_search::{AgentOptions, Algorithm, SearchAgent};
use clap::Subcommand;
use color_eyre::eyre::{Result, WrapErr};
use maze::{Layout, LayoutError, MazeEvaluation};

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Search a single position and show how every root action scored
    Decide(Decide),
    /// Play full games against the ghosts
    Play(Play),
}

impl Command {
    pub fn run(self) -> Result<()> {
        match self {
            Command::Decide(d) => d.run()?,
            Command::Play(p) => p.run()?,
        }

        Ok(())
    }
}

#[derive(clap::Args, Debug, Clone)]
pub(crate) struct SearchArgs {
    /// Name of a built-in layout, or the path to a layout file
    #[clap(short, long, value_parser, default_value = "classic")]
    layout: String,

    /// minimax, alpha-beta or expectimax
    #[clap(short, long, value_parser, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,

    /// How many full rounds to look ahead
    #[clap(short, long, value_parser, default_value_t = 2)]
    depth: usize,

    /// score or better
    #[clap(short, long, value_parser, default_value_t = MazeEvaluation::Better)]
    evaluation: MazeEvaluation,
}

impl SearchArgs {
    pub(crate) fn agent(&self) -> SearchAgent<MazeEvaluation> {
        SearchAgent::new(
            self.evaluation,
            AgentOptions {
                algorithm: self.algorithm,
                depth: self.depth,
            },
        )
    }

    pub(crate) fn layout(&self) -> Result<Layout> {
        match Layout::builtin(&self.layout) {
            Err(LayoutError::UnknownLayout(_)) => {}
            builtin => return builtin.wrap_err("Built-in layout is broken"),
        }

        let text = std::fs::read_to_string(&self.layout).wrap_err_with(|| {
            format!(
                "{} is neither a built-in layout ({}) nor a readable file",
                self.layout,
                itertools::join(Layout::builtin_names(), ", ")
            )
        })?;

        text.parse::<Layout>()
            .wrap_err_with(|| format!("Could not parse layout file {}", self.layout))
    }
}
