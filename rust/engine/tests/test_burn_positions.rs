use pokerhand_engine::cards::Card;
use pokerhand_engine::deck::Deck;

fn shuffled_order(seed: u64) -> Vec<Card> {
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    (0..52).map(|_| deck.deal_card().unwrap()).collect()
}

#[test]
fn burn_cards_and_board_count_are_correct() {
    let mut deck = Deck::new_with_seed(123);
    let deal = deck.deal_holdem(2).expect("deal_holdem should succeed");
    assert_eq!(deal.board.len(), 5);
    assert_eq!(deal.pockets.len(), 2);
    // 52 - 4 (pockets) - 5 (board) - 4 burns = 39
    assert_eq!(deck.remaining(), 39);
}

#[test]
fn pockets_are_dealt_round_by_round_after_a_burn() {
    let order = shuffled_order(77);
    let deal = Deck::new_with_seed(77).deal_holdem(3).unwrap();

    // order[0] is burned; first round goes to seats 1..3, then the second
    assert_eq!(deal.pockets[0], [order[1], order[4]]);
    assert_eq!(deal.pockets[1], [order[2], order[5]]);
    assert_eq!(deal.pockets[2], [order[3], order[6]]);
}

#[test]
fn board_skips_one_burn_before_flop_turn_and_river() {
    let order = shuffled_order(77);
    let deal = Deck::new_with_seed(77).deal_holdem(3).unwrap();

    // burn, 6 pocket cards, then burn (7), flop 8..=10, burn, turn 12, burn, river 14
    assert_eq!(deal.board, [order[8], order[9], order[10], order[12], order[14]]);
    for burned in [0, 7, 11, 13] {
        let c = order[burned];
        assert!(!deal.board.contains(&c), "burned {c} reached the board");
        assert!(deal.pockets.iter().all(|p| !p.contains(&c)), "burned {c} was dealt");
    }
}
