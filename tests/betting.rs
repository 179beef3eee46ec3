use onepoker::action::SEATS;
use onepoker::betting::{handshake, settle};
use onepoker::{Signal, Scoreboard};
use onepoker::{ActionSlot, CardChoice};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_signal(rng: &mut StdRng) -> Signal {
    *Signal::ALL.choose(rng).expect("non-empty")
}

#[test]
fn escalation_never_ends_in_a_double_fold_or_above_lives() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5_000 {
        let lives = [rng.gen_range(1..=12), rng.gen_range(1..=12)];
        let mut signal_rng = StdRng::seed_from_u64(rng.r#gen());
        let settlement = settle(lives, |_| {
            [random_signal(&mut signal_rng), random_signal(&mut signal_rng)]
        });
        assert_ne!(settlement.decisions, [Signal::Fold; SEATS]);
        for seat in 0..SEATS {
            assert!(settlement.stake(seat) >= 1);
            assert!(settlement.stake(seat) as i32 <= lives[seat]);
        }
        assert_eq!(settlement.stakes[0], settlement.stakes[1]);
        match settlement.folded {
            Some(seat) => assert_eq!(settlement.decisions[seat], Signal::Fold),
            None => assert!(!settlement.decisions.contains(&Signal::Fold)),
        }
    }
}

#[test]
fn handshake_never_exceeds_lives() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let lives = [rng.gen_range(1..=4), rng.gen_range(1..=4)];
        let opening = if rng.gen_bool(0.5) { Signal::Raise } else { Signal::Check };
        let reply = random_signal(&mut rng);
        let answer = random_signal(&mut rng);
        let settlement = handshake(lives, opening, |_| reply, |_| answer);
        for seat in 0..SEATS {
            assert!(settlement.stake(seat) as i32 <= lives[seat]);
        }
        assert_ne!(settlement.decisions, [Signal::Fold; SEATS]);
    }
}

#[test]
fn merging_scoreboards_commutes() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut left = Scoreboard::new();
    let mut right = Scoreboard::new();
    for board in [&mut left, &mut right] {
        for _ in 0..500 {
            let slot = ActionSlot::from_index(rng.gen_range(0..6)).expect("slot");
            board.update(
                rng.gen_range(0..3),
                rng.gen_range(1..=13),
                rng.gen_range(1..=13),
                slot,
                rng.gen_range(-5..=5),
            );
        }
    }

    let mut left_first = left.clone();
    left_first.merge(&mut right.clone());
    let mut right_first = right.clone();
    right_first.merge(&mut left.clone());
    assert_eq!(left_first, right_first);

    let mut drained = right.clone();
    let mut pooled = left.clone();
    pooled.merge(&mut drained);
    assert!(drained.is_empty());
    let slot = ActionSlot::new(CardChoice::High, Signal::Check);
    for scenario in 0..3 {
        let expected = left.table(scenario).expect("table").value(9, 4, slot)
            + right.table(scenario).expect("table").value(9, 4, slot);
        assert_eq!(pooled.table(scenario).expect("table").value(9, 4, slot), expected);
    }
}
