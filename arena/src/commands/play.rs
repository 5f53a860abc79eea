use color_eyre::eyre::{eyre, Result};
use colored::Colorize;
use itertools::Itertools;
use maze::{Ending, Episode, GhostPolicy};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use super::SearchArgs;

#[derive(clap::Args, Debug)]
pub(crate) struct Play {
    #[clap(flatten)]
    search: SearchArgs,

    /// random or directional
    #[clap(short, long, value_parser, default_value_t = GhostPolicy::Random)]
    ghosts: GhostPolicy,

    /// Number of games to play
    #[clap(short = 'n', long, value_parser, default_value_t = 1)]
    games: usize,

    /// Seed for the ghosts. Every game gets its own seed counting up from this one
    #[clap(short, long, value_parser, default_value_t = 0)]
    seed: u64,

    /// Games are called off after this many protagonist moves
    #[clap(short, long, value_parser, default_value_t = 500)]
    max_moves: usize,

    /// Search the root actions on every core. Defaults to false
    #[clap(long, action, default_value = "false")]
    parallel: bool,
}

impl Play {
    pub(crate) fn run(self) -> Result<()> {
        if self.games == 0 {
            return Err(eyre!("Need to play at least one game"));
        }

        let layout = self.search.layout()?;
        let agent = self.search.agent();
        let episode = Episode {
            ghosts: self.ghosts,
            max_moves: self.max_moves,
            parallel: self.parallel,
        };

        let results = (0..self.games)
            .map(|game| {
                let mut rng = StdRng::seed_from_u64(game_seed(self.seed, game));
                let result = episode.play(layout.initial_state(), &agent, &mut rng);

                let line = format!(
                    "Game {}: {:?} with score {} after {} moves",
                    game + 1,
                    result.ending,
                    result.score,
                    result.moves
                );
                match result.ending {
                    Ending::Won => println!("{}", line.green()),
                    Ending::Lost => println!("{}", line.red()),
                    Ending::Stuck | Ending::OutOfMoves => println!("{}", line.yellow()),
                }

                result
            })
            .collect_vec();

        let wins = results.iter().filter(|r| r.ending == Ending::Won).count();
        let average = results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64;

        info!(
            games = self.games,
            wins,
            average_score = average,
            "Finished playing"
        );
        println!(
            "Won {wins}/{} games, average score {average:.1}, scores: {}",
            self.games,
            results.iter().map(|r| r.score).join(", ")
        );

        Ok(())
    }
}

/// Each game gets its own seed, counting up from `seed` and wrapping around at the top
fn game_seed(seed: u64, game: usize) -> u64 {
    seed.wrapping_add(game as u64)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_game_seeds_wrap() {
        assert_eq!(game_seed(7, 0), 7);
        assert_eq!(game_seed(7, 3), 10);
        assert_eq!(game_seed(u64::MAX, 0), u64::MAX);
        assert_eq!(game_seed(u64::MAX, 1), 0);
        assert_eq!(game_seed(u64::MAX - 1, 4), 2);
    }
}
