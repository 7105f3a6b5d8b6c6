//! Console Drunkard game.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use drunkard::{
    Flow, Game, GameOptions, GameOutcome, Player, RemainderPolicy, RoundError, RoundReport,
};
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about = "Play Drunkard in the terminal", long_about = None)]
struct Args {
    /// Player name, in play order. Repeat once per player.
    #[arg(short, long = "player", value_name = "NAME", default_values = ["Player1", "Player2"])]
    players: Vec<String>,
    /// Shuffle seed. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,
    /// What to do with cards that cannot be dealt evenly.
    #[arg(long, value_enum, default_value_t = Remainder::Discard)]
    remainder: Remainder,
    /// Give up after this many rounds.
    #[arg(long, value_name = "ROUNDS")]
    max_rounds: Option<usize>,
    /// Play through without waiting for Enter between rounds.
    #[arg(long)]
    no_pause: bool,
    /// Log more; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Remainder {
    Discard,
    RoundRobin,
    Reject,
}

impl From<Remainder> for RemainderPolicy {
    fn from(remainder: Remainder) -> Self {
        match remainder {
            Remainder::Discard => Self::Discard,
            Remainder::RoundRobin => Self::RoundRobin,
            Remainder::Reject => Self::Reject,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_remainder(args.remainder.into())
        .with_max_rounds(args.max_rounds);

    let mut game = match Game::new(&args.players, options, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("cannot start game: {err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let pause = !args.no_pause;
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let result = match game.outcome() {
        Some(outcome) => Ok(outcome),
        None => play(&mut game, pause, &mut input, &mut out),
    };

    match result {
        Ok(outcome) => {
            if let Err(err) = write_outcome(&mut out, &game, outcome) {
                log::warn!("cannot write to stdout: {err}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("game aborted: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Plays rounds, printing each one and pausing for Enter when `pause` is set.
fn play(
    game: &mut Game,
    pause: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<GameOutcome, RoundError> {
    game.run(|game, report| {
        if let Err(err) = write_round(out, game, report) {
            log::warn!("cannot write to stdout: {err}");
            return Flow::Stop;
        }
        if pause {
            wait_for_enter(out, input)
        } else {
            Flow::Continue
        }
    })
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn write_round(out: &mut impl Write, game: &Game, report: &RoundReport) -> io::Result<()> {
    writeln!(out, "Cards in play:")?;
    for play in &report.plays {
        writeln!(out, "{}", play.card)?;
    }

    if let Some(winner) = game.player(report.winner) {
        writeln!(out, "{} wins the round!", winner.name())?;
    }

    for player in game.players() {
        write_hand(out, player)?;
    }
    Ok(())
}

fn write_hand(out: &mut impl Write, player: &Player) -> io::Result<()> {
    writeln!(out, "{}'s hand:", player.name())?;
    for card in player.cards() {
        writeln!(out, "{card}")?;
    }
    Ok(())
}

/// Blocks for one line of input. End of input stops the game.
fn wait_for_enter(out: &mut impl Write, input: &mut impl BufRead) -> Flow {
    let prompt = writeln!(out, "Press Enter to continue to the next round...")
        .and_then(|()| out.flush());
    if let Err(err) = prompt {
        log::warn!("cannot write to stdout: {err}");
        return Flow::Stop;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Flow::Stop,
        Ok(_) => Flow::Continue,
        Err(err) => {
            log::warn!("cannot read input: {err}");
            Flow::Stop
        }
    }
}

fn write_outcome(out: &mut impl Write, game: &Game, outcome: GameOutcome) -> io::Result<()> {
    match outcome {
        GameOutcome::Winner { player } => {
            if let Some(winner) = game.player(player) {
                writeln!(out, "{} wins the game!", winner.name())?;
            }
            return Ok(());
        }
        GameOutcome::NoWinner => {
            writeln!(out, "No winner: nobody holds the whole deck.")?;
        }
        GameOutcome::Stopped { rounds } => {
            writeln!(out, "Game stopped after {rounds} rounds.")?;
        }
        GameOutcome::RoundLimit { rounds } => {
            writeln!(out, "No winner after {rounds} rounds (round limit reached).")?;
        }
    }

    for player in game.players() {
        writeln!(out, "{}: {} cards", player.name(), player.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drunkard::Deck;

    fn unshuffled_game() -> Game {
        Game::from_deck(["Player1", "Player2"], Deck::new(), GameOptions::default()).unwrap()
    }

    #[test]
    fn round_transcript_lists_plays_winner_and_hands() {
        let mut game = unshuffled_game();
        let report = game.play_round().unwrap();

        let mut out = Vec::new();
        write_round(&mut out, &game, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Cards in play:");
        assert_eq!(lines[1], "6 of Hearts");
        assert_eq!(lines[2], "6 of Clubs");
        assert_eq!(lines[3], "Player1 wins the round!");
        assert_eq!(lines[4], "Player1's hand:");
        assert_eq!(lines[5], "7 of Hearts");
        let second = lines.iter().position(|line| *line == "Player2's hand:").unwrap();
        assert_eq!(lines[second - 2..second], ["6 of Hearts", "6 of Clubs"]);
        assert_eq!(lines[second + 1], "7 of Clubs");
        assert_eq!(lines.len() - second - 1, 17);
    }

    #[test]
    fn end_of_input_stops_the_game() {
        let mut out = Vec::new();
        assert_eq!(wait_for_enter(&mut out, &mut &b""[..]), Flow::Stop);
        assert_eq!(wait_for_enter(&mut out, &mut &b"\n"[..]), Flow::Continue);
        assert_eq!(wait_for_enter(&mut out, &mut &b"anything\n"[..]), Flow::Continue);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn unwritable_prompt_stops_the_game() {
        assert_eq!(wait_for_enter(&mut BrokenPipe, &mut &b"\n"[..]), Flow::Stop);
    }

    #[test]
    fn play_pauses_between_rounds_until_input_ends() {
        let mut game = unshuffled_game();
        let mut out = Vec::new();

        let outcome = play(&mut game, true, &mut &b"\n\n"[..], &mut out).unwrap();
        assert_eq!(outcome, GameOutcome::Stopped { rounds: 3 });

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Press Enter to continue").count(), 3);
    }

    #[test]
    fn winner_is_announced() {
        let mut game = unshuffled_game();
        let outcome = game.run(|_, _| Flow::Continue).unwrap();

        let mut out = Vec::new();
        write_outcome(&mut out, &game, outcome).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Player1 wins the game!\n");
    }

    #[test]
    fn stopped_game_reports_card_counts() {
        let mut game = unshuffled_game();
        let outcome = game.run(|_, _| Flow::Stop).unwrap();

        let mut out = Vec::new();
        write_outcome(&mut out, &game, outcome).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Game stopped after 1 rounds.\nPlayer1: 19 cards\nPlayer2: 17 cards\n"
        );
    }

    #[test]
    fn remainder_flag_maps_to_policy() {
        let args = Args::parse_from(["drunkard", "--remainder", "round-robin", "-p", "A", "-p", "B"]);
        assert_eq!(RemainderPolicy::from(args.remainder), RemainderPolicy::RoundRobin);
        assert_eq!(args.players, ["A", "B"]);
        assert!(!args.no_pause);
    }
}
