use onepoker::card::{self, ACE, KING, MAX_RANK, MIN_RANK};
use onepoker::hand::classify;
use onepoker::{Card, Deck, Hand, HandShape, Outcome, Suit, beats, compare};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

#[test]
fn comparison_is_antisymmetric_over_every_rank_pair() {
    for a in MIN_RANK..=MAX_RANK {
        for b in MIN_RANK..=MAX_RANK {
            let forward = compare(a, b);
            let backward = compare(b, a);
            assert_eq!(forward, backward.inverse(), "ranks {a} and {b}");
            assert!(!(beats(a, b) && beats(b, a)), "ranks {a} and {b}");
            if a == b {
                assert_eq!(forward, Outcome::Draw);
            } else {
                assert_ne!(forward, Outcome::Draw);
            }
        }
    }
}

#[test]
fn ace_beats_everything_but_the_two() {
    for rank in 3..=KING {
        assert_eq!(compare(ACE, rank), Outcome::P1Wins, "Ace against {rank}");
    }
    assert_eq!(compare(2, ACE), Outcome::P1Wins);
    assert_eq!(compare(ACE, 2), Outcome::P2Wins);
    // 2 < King < Ace < 2 forms a cycle.
    assert!(beats(KING, 2) && beats(ACE, KING) && beats(2, ACE));
}

#[test]
fn shapes_follow_up_and_down_ranks() {
    assert_eq!(classify(ACE, KING), HandShape::TwoUp);
    assert_eq!(classify(8, 8), HandShape::TwoUp);
    assert_eq!(classify(7, 8), HandShape::OneUpOneDown);
    assert_eq!(classify(ACE, 2), HandShape::OneUpOneDown);
    assert_eq!(classify(2, 7), HandShape::TwoDown);
    for shape in HandShape::ALL {
        assert_eq!(HandShape::from_index(shape.index()), Some(shape));
    }
    assert_eq!(HandShape::from_index(3), None);
}

#[test]
fn hand_keeps_the_ace_high_card_first() {
    let hand = Hand::from_cards(Card::new(Suit::Clubs, KING), Card::new(Suit::Hearts, ACE));
    assert_eq!(hand.ranks(), Some((ACE, KING)));
    let hand = Hand::from_cards(Card::new(Suit::Clubs, 3), Card::new(Suit::Hearts, 9));
    assert_eq!(hand.ranks(), Some((9, 3)));
    assert_eq!(hand.shape(), Some(HandShape::OneUpOneDown));
}

#[test]
fn deck_recycles_discards_without_duplicates() {
    let mut deck = Deck::new_shuffled(StdRng::seed_from_u64(11));
    let mut drawn = Vec::new();
    while !deck.is_empty() {
        drawn.push(deck.draw().expect("card"));
    }
    let unique: HashSet<Card> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), card::DECK_SIZE);
    let expected: HashSet<Card> = card::full_deck().into_iter().collect();
    assert_eq!(unique, expected);

    for discarded in drawn.drain(..) {
        deck.discard(discarded);
    }
    assert_eq!(deck.discard_len(), card::DECK_SIZE);
    let first = deck.draw_or_reshuffle().expect("reshuffled card");
    assert_eq!(deck.len(), card::DECK_SIZE - 1);
    assert_eq!(deck.discard_len(), 0);
    let rest: HashSet<Card> = deck.cards().copied().collect();
    assert!(!rest.contains(&first));
    assert_eq!(rest.len(), card::DECK_SIZE - 1);
}
