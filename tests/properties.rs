// tests/properties.rs

/**
 * Property tests for the swarm scorer over generated, still-running games.
 *
 * Positions are built by replaying random column sequences, skipping full
 * columns and any move that would end the game, so no line of `inarow` is
 * ever on the board.
 */
use cell_swarm::{select_move, Board, Configuration, Observation, Player, Swarm};
use proptest::prelude::*;

fn running_game(config: Configuration, columns: &[usize]) -> (Board, Player) {
    let mut board = Board::new(config).expect("valid configuration");
    let mut player = Player::One;
    for &column in columns {
        let column = column % config.columns;
        if !board.playable(column) || board.check_winning_move(column, player) {
            continue;
        }
        board.play(column, player).expect("playable column");
        player = player.opponent();
    }
    (board, player)
}

fn winning_columns(board: &Board, player: Player) -> Vec<usize> {
    board
        .legal_columns()
        .into_iter()
        .filter(|&column| board.check_winning_move(column, player))
        .collect()
}

fn config_strategy() -> impl Strategy<Value = Configuration> {
    prop_oneof![
        Just(Configuration::default()),
        Just(Configuration {
            rows: 7,
            columns: 8,
            inarow: 5
        }),
        Just(Configuration {
            rows: 5,
            columns: 6,
            inarow: 3
        }),
    ]
}

proptest! {
    #[test]
    fn picks_are_legal_and_repeatable(
        config in config_strategy(),
        moves in prop::collection::vec(0usize..16, 0..60),
    ) {
        let (board, player) = running_game(config, &moves);
        prop_assume!(!board.is_full());

        let observation = Observation { board: board.marks(), mark: player.mark() };
        let column = select_move(&observation, &config).expect("a legal move exists");
        prop_assert!(board.playable(column));
        prop_assert_eq!(select_move(&observation, &config).expect("a legal move exists"), column);
    }

    #[test]
    fn wins_are_taken_and_threats_blocked(
        config in config_strategy(),
        moves in prop::collection::vec(0usize..16, 0..60),
    ) {
        let (board, player) = running_game(config, &moves);
        prop_assume!(!board.is_full());

        let column = Swarm::new(&board, player).select_move().expect("a legal move exists");
        let wins = winning_columns(&board, player);
        let threats = winning_columns(&board, player.opponent());
        if !wins.is_empty() {
            prop_assert!(wins.contains(&column), "missed a win: {:?}, picked {}", wins, column);
        } else if !threats.is_empty() {
            prop_assert!(threats.contains(&column), "missed a block: {:?}, picked {}", threats, column);
        }
    }
}
