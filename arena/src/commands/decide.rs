use color_eyre::eyre::Result;
use colored::Colorize;

use super::SearchArgs;

#[derive(clap::Args, Debug)]
pub(crate) struct Decide {
    #[clap(flatten)]
    search: SearchArgs,

    /// Search the root actions on every core. Defaults to false
    #[clap(long, action, default_value = "false")]
    parallel: bool,
}

impl Decide {
    pub(crate) fn run(self) -> Result<()> {
        let state = self.search.layout()?.initial_state();
        let agent = self.search.agent();

        println!("{state}");
        println!();

        let decision = if self.parallel {
            agent.par_decide(&state)
        } else {
            agent.decide(&state)
        };

        match (decision.action, decision.to_text_tree()) {
            (Some(action), Some(tree)) => {
                println!("{}", format!("Chose {action}").green());
                println!("{tree}");
            }
            _ => println!(
                "{}",
                format!("No move to make, position is worth {}", decision.value).yellow()
            ),
        }

        let stats = decision.stats;
        println!(
            "Expanded {} nodes, evaluated {} leaves, pruned {} times",
            stats.nodes_expanded, stats.leaves_evaluated, stats.cutoffs
        );

        Ok(())
    }
}
