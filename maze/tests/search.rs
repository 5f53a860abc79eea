use adversarial_search::{AgentOptions, Algorithm, GameState, SearchAgent};
use maze::{Direction, Layout, MazeEvaluation};

#[test]
fn test_every_algorithm_takes_the_winning_food() {
    let state = Layout::parse("%%%%%\n%P.G%\n%%%%%")
        .unwrap()
        .initial_state();

    for algorithm in Algorithm::ALL {
        let decision = algorithm.decide(&state, 1, &MazeEvaluation::Score);

        assert_eq!(decision.action, Some(Direction::East), "{}", algorithm);
        assert_eq!(decision.value, 509.0, "{}", algorithm);
        assert_eq!(
            decision.options,
            vec![(Direction::East, 509.0), (Direction::Stop, -1.0)],
            "{}",
            algorithm
        );
    }
}

#[test]
fn test_alpha_beta_agrees_with_minimax_on_the_builtin_layouts() {
    for name in Layout::builtin_names() {
        let state = Layout::builtin(name).unwrap().initial_state();

        for evaluation in [MazeEvaluation::Score, MazeEvaluation::Better] {
            let minimax = Algorithm::Minimax.decide(&state, 2, &evaluation);
            let alpha_beta = Algorithm::AlphaBeta.decide(&state, 2, &evaluation);

            assert_eq!(alpha_beta.action, minimax.action, "{} {}", name, evaluation);
            assert_eq!(alpha_beta.value, minimax.value, "{} {}", name, evaluation);
            assert!(alpha_beta.stats.leaves_evaluated <= minimax.stats.leaves_evaluated);
        }
    }
}

#[test]
fn test_expectimax_is_never_more_pessimistic_than_minimax() {
    for name in Layout::builtin_names() {
        let state = Layout::builtin(name).unwrap().initial_state();

        let minimax = Algorithm::Minimax.decide(&state, 2, &MazeEvaluation::Better);
        let expectimax = Algorithm::Expectimax.decide(&state, 2, &MazeEvaluation::Better);

        // Averaging can round a hair below the smallest value
        assert!(expectimax.value >= minimax.value - 1e-9, "{}", name);
    }
}

#[test]
fn test_parallel_agent_matches_sequential_agent() {
    let state = Layout::builtin("classic").unwrap().initial_state();

    for algorithm in Algorithm::ALL {
        let agent = SearchAgent::new(
            MazeEvaluation::Better,
            AgentOptions {
                algorithm,
                depth: 2,
            },
        );

        let sequential = agent.decide(&state);
        let parallel = agent.par_decide(&state);

        assert_eq!(parallel.action, sequential.action, "{}", algorithm);
        assert_eq!(parallel.value, sequential.value, "{}", algorithm);
    }
}

#[test]
fn test_search_leaves_the_state_alone() {
    let state = Layout::builtin("open").unwrap().initial_state();
    let before = state.clone();

    let action = SearchAgent::new(MazeEvaluation::Better, AgentOptions::default())
        .get_action(&state)
        .unwrap();

    assert_eq!(state, before);
    assert!(state.legal_actions(0).contains(&action));
}
