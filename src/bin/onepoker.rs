use std::error::Error;
use std::process;

use clap::Parser;

use onepoker::action::SEATS;
use onepoker::training::TRAINING_HANDS;
use onepoker::{
    BettingMode, Bot, GameBuilder, HumanBot, LearnerBot, MatchConfig, Trainer, TrainingConfig,
    usage,
};

const DEFAULT_SEED: u64 = 0x0DD5_EED5_1DE5_CA5E;

#[derive(Parser, Debug)]
#[command(
    name = "onepoker",
    about = "Play One Poker against a self-trained computer opponent."
)]
struct Args {
    /// Base RNG seed for training and the match deck
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of self-play hands to train before the match
    #[arg(long = "training-hands", default_value_t = TRAINING_HANDS)]
    training_hands: usize,

    /// <setting> <player's life count> <opponent's life count>
    #[arg(allow_hyphen_values = true)]
    settings: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = match MatchConfig::from_args(&args.settings) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            println!("{}", usage());
            return Ok(());
        }
    };
    log::info!("match settings {config:?}");

    println!("Training the computer. This may take a moment...");
    let training = TrainingConfig::default()
        .with_hands(args.training_hands)
        .with_seed(args.seed);
    let (scoreboard, summary) = Trainer::new(training).run()?;
    log::info!(
        "training finished: {} hands, {} matches, wins {:?}",
        summary.hands,
        summary.matches,
        summary.match_wins
    );

    let mut game = GameBuilder::new()
        .with_lives(config.player_life, config.opponent_life)
        .with_seed(args.seed.rotate_left(17))
        .with_mode(BettingMode::Handshake)
        .build()?;
    let mut human = HumanBot::stdio();
    let mut computer = LearnerBot::exploiter(scoreboard);

    println!(
        "Welcome to One Poker! You start with {} lives, the computer with {}.",
        config.player_life, config.opponent_life
    );
    while !game.is_finished() {
        let bots: [&mut dyn Bot; SEATS] = [&mut human, &mut computer];
        game.play_round(bots)?;
        if !game.is_finished() {
            human.pause();
        }
    }

    match game.winner() {
        Some(0) => println!("You win!"),
        Some(_) => println!("You lose..."),
        None => println!("Nobody is left standing."),
    }
    Ok(())
}
