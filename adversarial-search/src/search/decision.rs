use std::fmt::Debug;

use itertools::Itertools;
use text_trees::StringTreeNode;

use super::SearchStats;

#[derive(Debug, Clone, PartialEq)]
/// This is returned from a single search
///
/// It contains the chosen action, the value that justified it and what we learned about every
/// other option at the root
pub struct Decision<Action> {
    /// The action to play. `None` when there was nothing to search: the depth was 0, the root is
    /// already won or lost, or the protagonist has no legal actions
    pub action: Option<Action>,
    /// The value of the root. When there is no action this is the evaluation of the root itself
    pub value: f64,
    /// Every option we looked at at the root, in the order the game listed them
    ///
    /// Alpha-beta only guarantees exact values for the chosen option. The others may be bounds
    /// that were enough to prove they weren't better.
    pub options: Vec<(Action, f64)>,
    /// Counters from the search
    pub stats: SearchStats,
}

impl<Action> Decision<Action> {
    pub(crate) fn without_action(value: f64, stats: SearchStats) -> Self {
        Self {
            action: None,
            value,
            options: vec![],
            stats,
        }
    }
}

impl<Action: Debug> Decision<Action> {
    /// This returns a visual representation of the options at the root
    ///
    /// Options are listed best first, the chosen one is marked. Returns `None` if we didn't search
    pub fn to_text_tree(&self) -> Option<String> {
        if self.options.is_empty() {
            return None;
        }

        let mut root = StringTreeNode::new(format!(
            "{:?} {} (expanded {}, evaluated {}, cutoffs {})",
            self.action,
            self.value,
            self.stats.nodes_expanded,
            self.stats.leaves_evaluated,
            self.stats.cutoffs
        ));

        let chosen = self.action.as_ref().map(|action| format!("{:?}", action));
        for (action, value) in self
            .options
            .iter()
            .sorted_by(|(_, a), (_, b)| b.total_cmp(a))
        {
            let label = format!("{:?}", action);
            let marker = if Some(&label) == chosen.as_ref() {
                " *"
            } else {
                ""
            };
            root.push_node(StringTreeNode::new(format!("{} {}{}", label, value, marker)));
        }

        Some(format!("{}", root))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_text_tree_lists_best_first() {
        let decision = Decision {
            action: Some('b'),
            value: 4.0,
            options: vec![('a', 1.0), ('b', 4.0), ('c', 2.5)],
            stats: SearchStats {
                nodes_expanded: 3,
                leaves_evaluated: 9,
                cutoffs: 0,
            },
        };

        let tree = decision.to_text_tree().unwrap();
        let lines: Vec<_> = tree.lines().collect();

        assert!(lines[0].contains("Some('b') 4"));
        assert!(lines[1].contains("'b' 4 *"));
        assert!(lines[2].contains("'c' 2.5"));
        assert!(lines[3].contains("'a' 1"));
    }

    #[test]
    fn test_no_tree_without_options() {
        let decision: Decision<char> = Decision::without_action(3.0, SearchStats::default());

        assert_eq!(decision.to_text_tree(), None);
    }
}
