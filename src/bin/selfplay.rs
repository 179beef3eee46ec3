use std::error::Error;
use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use onepoker::action::SEATS;
use onepoker::game::DEFAULT_LIVES;
use onepoker::training::TRAINING_HANDS;
use onepoker::visualize::SAMPLE_ROWS;
use onepoker::{
    BettingMode, Bot, GameBuilder, LearnerBot, RandomBot, Trainer, TrainingConfig,
    TrainingSummary, render_round, render_table,
};

const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;
/// Matches that run this long without an elimination are abandoned.
const MAX_ROUNDS: usize = 10_000;

#[derive(Parser, Debug)]
#[command(
    name = "selfplay",
    about = "Train the learner, then measure it against a random opponent."
)]
struct Args {
    /// Number of self-play training hands
    #[arg(long = "hands", default_value_t = TRAINING_HANDS)]
    hands: usize,

    /// Number of evaluation matches against the random bot
    #[arg(long = "matches", default_value_t = 200)]
    matches: usize,

    /// Base RNG seed (training, decks and the random bot derive from it)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Print the summary as JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Print sample rows of the pooled score tables
    #[arg(long = "show-table", action = ArgAction::SetTrue)]
    show_table: bool,
}

#[derive(Debug, Default, Serialize)]
struct Evaluation {
    matches: usize,
    learner_wins: usize,
    random_wins: usize,
    abandoned: usize,
    rounds: usize,
}

impl Evaluation {
    fn win_rate(&self) -> f64 {
        let decided = self.learner_wins + self.random_wins;
        if decided == 0 {
            0.0
        } else {
            self.learner_wins as f64 / decided as f64
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    training: TrainingSummary,
    evaluation: Evaluation,
    win_rate: f64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.matches == 0 {
        return Err("matches must be positive".into());
    }

    let training = TrainingConfig::default()
        .with_hands(args.hands)
        .with_seed(args.seed);
    let (scoreboard, summary) = Trainer::new(training).run()?;
    if args.show_table {
        println!("{}", render_table(&scoreboard, &SAMPLE_ROWS));
    }

    let mut learner = LearnerBot::exploiter(scoreboard);
    let mut random = RandomBot::new(StdRng::seed_from_u64(args.seed ^ 0x9E37_79B9));
    let mut evaluation = Evaluation::default();
    let started = Instant::now();

    for match_idx in 0..args.matches {
        let mut game = GameBuilder::new()
            .with_lives(DEFAULT_LIVES[0], DEFAULT_LIVES[1])
            .with_seed(mix_seed(args.seed, match_idx as u64))
            .with_mode(BettingMode::Escalation)
            .build()?;
        // Alternate seats so neither side keeps the dealing advantage.
        let learner_seat = match_idx % SEATS;
        while !game.is_finished() && game.round() < MAX_ROUNDS {
            let bots: [&mut dyn Bot; SEATS] = if learner_seat == 0 {
                [&mut learner as &mut dyn Bot, &mut random]
            } else {
                [&mut random as &mut dyn Bot, &mut learner]
            };
            let report = game.play_round(bots)?;
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("match {match_idx}\n{}", render_round(&report));
            }
        }
        evaluation.matches += 1;
        evaluation.rounds += game.round();
        match game.winner() {
            Some(winner) if winner == learner_seat => evaluation.learner_wins += 1,
            Some(_) => evaluation.random_wins += 1,
            None => evaluation.abandoned += 1,
        }
    }
    log::info!(
        "evaluated {} matches in {:.1?}",
        evaluation.matches,
        started.elapsed()
    );

    let win_rate = evaluation.win_rate();
    if args.json {
        let report = Report {
            seed: args.seed,
            training: summary,
            evaluation,
            win_rate,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Training: {} hands, {} matches (seat wins {:?}, drawn rounds {})",
            summary.hands, summary.matches, summary.match_wins, summary.draws
        );
        println!(
            "Learner vs random over {} matches: {} wins, {} losses, {} abandoned",
            evaluation.matches, evaluation.learner_wins, evaluation.random_wins, evaluation.abandoned
        );
        println!(
            "Learner win rate: {:.1}% ({:.1} rounds per match)",
            win_rate * 100.0,
            evaluation.rounds as f64 / evaluation.matches as f64
        );
    }
    Ok(())
}

fn mix_seed(base: u64, index: u64) -> u64 {
    base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15).rotate_left(13)
}
