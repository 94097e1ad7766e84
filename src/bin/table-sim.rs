use blackjack_table::{
    advise, Move, PayoutRatio, RoundState, Session, StackSlot, TableConfig, TableRules,
    UniformSource,
};
use clap::Parser;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::path::PathBuf;

const MAX_STACK: u32 = 999;
const MAX_TICKS: u32 = 100_000;

type SimSession = Session<StackSlot<&'static str>, UniformSource<StdRng>>;

#[derive(Parser)]
#[command(
    name = "table-sim",
    about = "Play blackjack rounds headlessly with a basic-strategy player"
)]
struct Args {
    /// Rounds to play
    #[arg(long, env = "TABLE_ROUNDS", default_value = "1000")]
    rounds: u32,

    /// Flat bet placed every round
    #[arg(long, env = "TABLE_BET", default_value = "10")]
    bet: u32,

    /// Starting bankroll
    #[arg(long, env = "TABLE_BANKROLL", default_value = "1000")]
    bankroll: u64,

    /// Seed for a reproducible shoe (random if unset)
    #[arg(long, env = "TABLE_SEED")]
    seed: Option<u64>,

    /// JSON table config; animation speeds are ignored
    #[arg(long, env = "TABLE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the blackjack payout (e.g. "3:2", "6:5")
    #[arg(long)]
    blackjack_payout: Option<String>,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.bet == 0 {
        eprintln!("Bet must be positive");
        std::process::exit(1);
    }

    let mut rules = match &args.config {
        Some(path) => match TableConfig::from_path(path) {
            Ok(config) => config.rules,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => TableRules::default(),
    };
    if let Some(payout) = &args.blackjack_payout {
        rules.blackjack_payout = parse_payout(payout);
    }
    // Headless: no frames to spend on animation
    rules.deal_speed = 1.0;
    rules.reveal_speed = 1.0;
    rules.dealer_draw_delay = 0;

    let rng = match args.seed {
        Some(seed) => UniformSource::seeded(seed),
        None => UniformSource::from_entropy(),
    };
    let mut session = match Session::new(StackSlot::new(MAX_STACK), rng).with_rules(rules) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid rules: {e}");
            std::process::exit(1);
        }
    };

    let mut bankroll = args.bankroll;
    let mut tally: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut played = 0;

    while played < args.rounds && bankroll >= args.bet as u64 {
        bankroll -= args.bet as u64;
        session.wager_mut().place("chip", args.bet);
        if let Err(e) = session.start_round() {
            log::error!("Round {played} failed to start: {e}");
            break;
        }
        if !play_round(&mut session) {
            log::error!("Round {played} did not finish in {MAX_TICKS} ticks");
            break;
        }
        if let Some(key) = session.status_key() {
            *tally.entry(key).or_default() += 1;
        }

        let overflow: u64 = session
            .wager_mut()
            .take_overflow()
            .iter()
            .map(|(_, count)| *count as u64)
            .sum();
        let kept = session.reset().map_or(0, |(_, count)| count as u64);
        bankroll += kept + overflow;
        played += 1;
    }

    println!("Rounds played: {played}");
    for (key, count) in &tally {
        let share = *count as f64 * 100.0 / played.max(1) as f64;
        println!("  {key:<16} {count:>7} ({share:.2}%)");
    }
    let net = bankroll as i128 - args.bankroll as i128;
    println!("Final stack: {bankroll} ({net:+})");
}

/// Tick and decide until the round resolves. False if it never does.
fn play_round(session: &mut SimSession) -> bool {
    for _ in 0..MAX_TICKS {
        if session.state() == RoundState::Resolved && !session.is_busy() {
            return true;
        }
        if session.can_act() {
            let player = session.player_hand().cards().to_vec();
            let Some(&up) = session.dealer_hand().cards().get(1) else {
                session.update();
                continue;
            };
            let decision = match advise(&player, up) {
                Move::Hit => session.hit(),
                Move::Stand => session.stand(),
            };
            if let Err(e) = decision {
                log::warn!("{e}");
            }
        }
        session.update();
    }
    false
}

fn parse_payout(s: &str) -> PayoutRatio {
    let parsed = s
        .split_once(':')
        .and_then(|(num, den)| {
            Some((num.trim().parse::<u16>().ok()?, den.trim().parse::<u16>().ok()?))
        });
    let Some((num, den)) = parsed else {
        eprintln!("Invalid payout ratio '{s}', expected N:D (e.g. 3:2)");
        std::process::exit(1);
    };
    PayoutRatio::new(num, den).unwrap_or_else(|e| {
        eprintln!("Invalid payout ratio: {e}");
        std::process::exit(1);
    })
}
