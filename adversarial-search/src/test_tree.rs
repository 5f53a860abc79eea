//! Small games with a known shape that the search tests run against.

use std::sync::{Arc, Mutex};

use rand::Rng;

use crate::{AgentIndex, Evaluator, GameState};

/// Anything the [Recorder] can tell apart
pub(crate) trait Labelled {
    fn label(&self) -> String;
}

#[derive(Debug, Clone)]
struct TreeNode {
    label: String,
    value: f64,
    win: bool,
    lose: bool,
    children: Vec<(char, usize)>,
}

/// An explicit game tree. The actions at a node are its children, whoever is moving
#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    nodes: Arc<Vec<TreeNode>>,
    at: usize,
    num_agents: usize,
}

#[derive(Debug)]
pub(crate) struct TreeBuilder {
    nodes: Vec<TreeNode>,
    num_agents: usize,
}

impl TreeBuilder {
    pub(crate) fn new(num_agents: usize) -> Self {
        Self {
            nodes: vec![],
            num_agents,
        }
    }

    fn push(&mut self, node: TreeNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn leaf(&mut self, label: &str, value: f64) -> usize {
        self.node(label, value, &[])
    }

    pub(crate) fn node(&mut self, label: &str, value: f64, children: &[(char, usize)]) -> usize {
        self.push(TreeNode {
            label: label.to_owned(),
            value,
            win: false,
            lose: false,
            children: children.to_vec(),
        })
    }

    pub(crate) fn win(&mut self, label: &str, value: f64, children: &[(char, usize)]) -> usize {
        let id = self.node(label, value, children);
        self.nodes[id].win = true;
        id
    }

    pub(crate) fn lose(&mut self, label: &str, value: f64, children: &[(char, usize)]) -> usize {
        let id = self.node(label, value, children);
        self.nodes[id].lose = true;
        id
    }

    pub(crate) fn build(self, root: usize) -> TreeGame {
        TreeGame {
            nodes: Arc::new(self.nodes),
            at: root,
            num_agents: self.num_agents,
        }
    }
}

impl TreeGame {
    fn node(&self) -> &TreeNode {
        &self.nodes[self.at]
    }
}

impl Labelled for TreeGame {
    fn label(&self) -> String {
        self.node().label.clone()
    }
}

impl GameState for TreeGame {
    type Action = char;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<char> {
        self.node().children.iter().map(|(action, _)| *action).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &char) -> Self {
        let (_, at) = self
            .node()
            .children
            .iter()
            .find(|(a, _)| a == action)
            .unwrap_or_else(|| panic!("{} is not a legal action at {}", action, self.label()));

        Self {
            nodes: self.nodes.clone(),
            at: *at,
            num_agents: self.num_agents,
        }
    }

    fn is_win(&self) -> bool {
        self.node().win
    }

    fn is_lose(&self) -> bool {
        self.node().lose
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn score(&self) -> f64 {
        self.node().value
    }
}

/// A random tree that is exactly `num_agents * depth` plies deep
///
/// Values are small integers so ties are common. Some inner nodes are won or lost, their
/// children should never be looked at.
pub(crate) fn random_tree<R: Rng>(
    rng: &mut R,
    num_agents: usize,
    depth: usize,
    max_branching: usize,
) -> TreeGame {
    fn grow<R: Rng>(
        rng: &mut R,
        builder: &mut TreeBuilder,
        path: String,
        plies_left: usize,
        max_branching: usize,
    ) -> usize {
        let value = rng.gen_range(-20..=20) as f64;
        if plies_left == 0 {
            return builder.leaf(&path, value);
        }

        let branching = rng.gen_range(1..=max_branching);
        let children: Vec<_> = (0..branching)
            .map(|i| {
                let action = char::from(b'a' + i as u8);
                let child = grow(
                    rng,
                    builder,
                    format!("{}{}", path, action),
                    plies_left - 1,
                    max_branching,
                );
                (action, child)
            })
            .collect();

        match rng.gen_range(0..20) {
            0 => builder.win(&path, value, &children),
            1 => builder.lose(&path, value, &children),
            _ => builder.node(&path, value, &children),
        }
    }

    let mut builder = TreeBuilder::new(num_agents);
    let root = grow(
        rng,
        &mut builder,
        String::new(),
        num_agents * depth,
        max_branching,
    );
    builder.build(root)
}

/// A game that never ends. Every agent always has `branching` moves named `'0'`, `'1'`, ... and
/// a state is scored by adding up every move made so far
#[derive(Debug, Clone)]
pub(crate) struct CountingGame {
    path: String,
    num_agents: usize,
    branching: u32,
}

impl CountingGame {
    pub(crate) fn new(num_agents: usize, branching: u32) -> Self {
        Self {
            path: String::new(),
            num_agents,
            branching,
        }
    }
}

impl Labelled for CountingGame {
    fn label(&self) -> String {
        self.path.clone()
    }
}

impl GameState for CountingGame {
    type Action = char;

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<char> {
        (0..self.branching)
            .filter_map(|i| char::from_digit(i, 10))
            .collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &char) -> Self {
        Self {
            path: format!("{}{}", self.path, action),
            num_agents: self.num_agents,
            branching: self.branching,
        }
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn score(&self) -> f64 {
        self.path
            .chars()
            .filter_map(|c| c.to_digit(10))
            .sum::<u32>() as f64
    }
}

/// Scores states by their game score and remembers every state it was asked about
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    seen: Mutex<Vec<String>>,
}

impl Recorder {
    pub(crate) fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, label: &str) -> usize {
        self.seen().iter().filter(|seen| *seen == label).count()
    }
}

impl<S: GameState + Labelled> Evaluator<S> for Recorder {
    fn evaluate(&self, state: &S) -> f64 {
        self.seen.lock().unwrap().push(state.label());
        state.score()
    }
}
