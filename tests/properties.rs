//! Property tests over random pick sequences.

use pairs::{Game, GameOptions, MAX_PAIRS, TurnError};
use proptest::prelude::*;

fn picks() -> impl Strategy<Value = Vec<(usize, u8)>> {
    prop::collection::vec((0..MAX_PAIRS * 2 + 2, 0u8..3), 0..200)
}

proptest! {
    #[test]
    fn scores_track_pairs_found(pairs in 1..=MAX_PAIRS, seed in any::<u64>(), picks in picks()) {
        let game = Game::new(GameOptions::default().with_pairs(pairs), seed).unwrap();

        for (index, player) in picks {
            let before = game.snapshot();
            let pairs_before = game.pairs_left();

            match game.turn_card(index, player) {
                Ok(result) => {
                    prop_assert_eq!(result.player, player);
                    prop_assert_eq!(result.new_score, game.scores()[usize::from(player)]);
                    prop_assert_eq!(result.next_turn_player, game.current_player());
                    if result.match_found {
                        prop_assert_eq!(game.pairs_left(), pairs_before - 1);
                    } else {
                        prop_assert_eq!(game.pairs_left(), pairs_before);
                    }
                    prop_assert_eq!(result.game_over, game.is_over());
                    prop_assert_eq!(result.winner.is_some(), result.game_over);
                }
                Err(_) => {
                    prop_assert_eq!(game.snapshot(), before);
                    prop_assert_eq!(game.pairs_left(), pairs_before);
                }
            }

            let snapshot = game.snapshot();
            prop_assert!(snapshot.current_player < 2);
            prop_assert_eq!(
                snapshot.scores.iter().sum::<usize>(),
                pairs - game.pairs_left()
            );
            let solved = snapshot.solved_cards.iter().flatten().count();
            prop_assert_eq!(solved, 2 * (pairs - game.pairs_left()));
            if let Some((face, index)) = snapshot.turned {
                prop_assert_eq!(game.card(index).unwrap(), Some(face));
            }
        }
    }

    #[test]
    fn errors_follow_check_order(seed in any::<u64>(), index in 0usize..40, player in 0u8..4) {
        let game = Game::new(GameOptions::default().with_pairs(4), seed).unwrap();
        let result = game.turn_card(index, player);

        if player != 0 {
            prop_assert_eq!(result.unwrap_err(), TurnError::NotYourTurn);
        } else if index >= 8 {
            prop_assert_eq!(result.unwrap_err(), TurnError::InvalidIndex);
        } else {
            prop_assert!(result.is_ok());
        }
    }
}

#[test]
fn greedy_play_always_finishes() {
    for seed in 0..20 {
        let game = Game::new(GameOptions::default(), seed).unwrap();
        let mut rounds = 0;

        while !game.is_over() {
            let player = game.current_player();
            let open: Vec<usize> = (0..game.card_count())
                .filter(|&i| game.card(i).unwrap().is_some())
                .collect();
            let first = open[0];
            let face = game.card(first).unwrap();
            let second = open[1..]
                .iter()
                .copied()
                .find(|&i| game.card(i).unwrap() == face)
                .unwrap();

            game.turn_card(first, player).unwrap();
            let result = game.turn_card(second, player).unwrap();
            assert!(result.match_found);
            rounds += 1;
        }

        assert_eq!(rounds, MAX_PAIRS);
        assert_eq!(game.scores(), [MAX_PAIRS, 0]);
        assert_eq!(game.winner(), Some(0));
    }
}
