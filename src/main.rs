#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use pairup::{
    init_logging, print_board, stats_line, win_banner, ContactSubmission, Difficulty, FlipOutcome,
    GameEngine, Phase, Session, NOTICE_DELAY_MS, RATING_MAX,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};
#[cfg(feature = "std")]
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg(feature = "std")]
enum DifficultyArg {
    Easy,
    Hard,
}

#[cfg(feature = "std")]
impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive memory game in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = DifficultyArg::Easy)]
        difficulty: DifficultyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Auto-play one game with perfect recall and print a JSON result line.
    Sim {
        #[arg(long, value_enum, default_value_t = DifficultyArg::Easy)]
        difficulty: DifficultyArg,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Fill in the feedback form.
    Form {
        #[arg(long, help = "Fix RNG seed for a reproducible helper tag")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { difficulty, seed } => run_play(difficulty.into(), seed).await,
        Commands::Sim { difficulty, seed } => run_sim(difficulty.into(), seed),
        Commands::Form { seed } => run_form(seed).await,
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Parse an `A1`-style cell coordinate into a deck index.
#[cfg(feature = "std")]
fn parse_cell(input: &str, difficulty: Difficulty) -> Result<usize, String> {
    let columns = difficulty.columns();
    let rows = difficulty.rows();
    let last_col = (b'A' + columns as u8 - 1) as char;

    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A2)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch, last_col
        ));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= columns {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch, last_col
        ));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, rows))?;
    if row == 0 || row > rows {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, rows));
    }
    Ok((row - 1) * columns + col)
}

#[cfg(feature = "std")]
fn print_play_help(difficulty: Difficulty) {
    let last_col = (b'A' + difficulty.columns() as u8 - 1) as char;
    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║                    MEMORY GAME HELP                    ║");
    println!("╠════════════════════════════════════════════════════════╣");
    println!("║ start             - begin play on the current board    ║");
    println!("║ restart           - deal a new board and play at once  ║");
    println!("║ difficulty <d>    - easy|hard, deals a new idle board  ║");
    println!("║ <cell>            - flip a card, e.g. A1 or {}{}         ║",
        last_col, difficulty.rows());
    println!("║ help              - this text                          ║");
    println!("║ quit              - leave the game                     ║");
    println!("║                                                        ║");
    println!("║ Match all pairs to win. A mismatched pair flips back   ║");
    println!("║ after one second.                                      ║");
    println!("╚════════════════════════════════════════════════════════╝");
}

#[cfg(feature = "std")]
fn print_turn(session: &Session) {
    print_board(session.engine());
    println!("  {}", stats_line(session.engine()));
}

#[cfg(feature = "std")]
async fn run_play(difficulty: Difficulty, seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut session =
        Session::new(difficulty, make_rng(seed)).map_err(|e| anyhow::anyhow!(e))?;

    println!("\n════════════════════════════════════════════════════════════");
    println!("                       MEMORY GAME");
    println!("════════════════════════════════════════════════════════════");
    print_play_help(difficulty);
    print_turn(&session);
    println!("\nType 'start' to begin.");

    loop {
        print!("\n> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            break;
        }
        if line.eq_ignore_ascii_case("help") {
            print_play_help(session.engine().difficulty());
            continue;
        }
        if line.eq_ignore_ascii_case("start") {
            if session.start() {
                log::debug!("session started");
                println!("Game on! Flip a card.");
            } else {
                println!("Already running - use 'restart' for a fresh board.");
            }
            continue;
        }
        if line.eq_ignore_ascii_case("restart") {
            session.restart().map_err(|e| anyhow::anyhow!(e))?;
            println!("New board dealt. Game on!");
            print_turn(&session);
            continue;
        }
        if let Some(rest) = line
            .strip_prefix("difficulty")
            .or_else(|| line.strip_prefix("DIFFICULTY"))
        {
            match Difficulty::from_label(rest.trim()) {
                Some(d) => {
                    session.change_difficulty(d).map_err(|e| anyhow::anyhow!(e))?;
                    println!("Difficulty set to {}. Type 'start' to play.", d.label());
                    print_turn(&session);
                }
                None => println!("✗ Unknown difficulty - use 'difficulty easy' or 'difficulty hard'"),
            }
            continue;
        }

        let index = match parse_cell(line, session.engine().difficulty()) {
            Ok(index) => index,
            Err(e) => {
                println!("✗ {}", e);
                continue;
            }
        };

        match session.flip(index) {
            FlipOutcome::Ignored => match session.engine().phase() {
                Phase::Idle => println!("Board is idle - type 'start' first."),
                Phase::Won => println!("Game is over - type 'restart' to play again."),
                _ => println!("That card can't be flipped right now."),
            },
            FlipOutcome::Revealed => {
                print_board(session.engine());
            }
            FlipOutcome::Matched { won } => {
                print_turn(&session);
                if won {
                    println!("\n🎉 {}", win_banner(session.engine().moves()));
                    println!("Type 'restart' to play again, or 'quit' to leave.");
                } else {
                    println!("✓ A pair!");
                }
            }
            FlipOutcome::Mismatch { generation } => {
                print_turn(&session);
                println!("✗ No match - flipping back...");
                sleep(Session::mismatch_delay()).await;
                session.revert_elapsed(generation);
                print_board(session.engine());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct SimReport {
    difficulty: &'static str,
    seed: Option<u64>,
    moves: u32,
    matches: u32,
    won: bool,
}

/// First unmatched cell whose face has not been remembered yet.
#[cfg(feature = "std")]
fn next_unseen(seen: &[Option<u8>], engine: &GameEngine, exclude: Option<usize>) -> Option<usize> {
    (0..seen.len()).find(|&i| {
        seen[i].is_none() && !engine.is_matched(i) && Some(i) != exclude
    })
}

/// A remembered, still-unmatched pair, if any.
#[cfg(feature = "std")]
fn known_pair(seen: &[Option<u8>], engine: &GameEngine) -> Option<(usize, usize)> {
    for i in 0..seen.len() {
        if engine.is_matched(i) {
            continue;
        }
        let id = match seen[i] {
            Some(id) => id,
            None => continue,
        };
        for j in i + 1..seen.len() {
            if !engine.is_matched(j) && seen[j] == Some(id) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Remembered partner of `index`, if any.
#[cfg(feature = "std")]
fn known_partner(seen: &[Option<u8>], engine: &GameEngine, index: usize) -> Option<usize> {
    let id = seen[index]?;
    (0..seen.len()).find(|&j| j != index && !engine.is_matched(j) && seen[j] == Some(id))
}

#[cfg(feature = "std")]
fn run_sim(difficulty: Difficulty, seed: Option<u64>) -> anyhow::Result<()> {
    let mut session =
        Session::new(difficulty, make_rng(seed)).map_err(|e| anyhow::anyhow!(e))?;
    session.start();

    let total = session.engine().deck().len();
    // Perfect recall of every face turned up so far.
    let mut seen: Vec<Option<u8>> = vec![None; total];

    while !session.engine().is_won() {
        let first = match known_pair(&seen, session.engine()) {
            Some((a, _)) => a,
            None => next_unseen(&seen, session.engine(), None)
                .ok_or_else(|| anyhow::anyhow!("no playable card in unfinished game"))?,
        };
        match session.flip(first) {
            FlipOutcome::Revealed => {}
            other => return Err(anyhow::anyhow!("unexpected first-flip outcome: {:?}", other)),
        }
        seen[first] = session.engine().deck().get(first).map(|c| c.pair_id());

        let second = match known_partner(&seen, session.engine(), first) {
            Some(j) => j,
            None => next_unseen(&seen, session.engine(), Some(first))
                .ok_or_else(|| anyhow::anyhow!("no second card in unfinished game"))?,
        };
        let outcome = session.flip(second);
        seen[second] = session.engine().deck().get(second).map(|c| c.pair_id());
        match outcome {
            FlipOutcome::Matched { .. } => {}
            FlipOutcome::Mismatch { generation } => {
                // Scripted play skips the visual delay.
                session.revert_elapsed(generation);
            }
            other => return Err(anyhow::anyhow!("unexpected second-flip outcome: {:?}", other)),
        }
        log::debug!(
            "sim turn: {} & {} -> {:?}",
            first,
            second,
            outcome
        );
    }

    let report = SimReport {
        difficulty: session.engine().difficulty().label(),
        seed,
        moves: session.engine().moves(),
        matches: session.engine().matches(),
        won: session.engine().is_won(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

#[cfg(feature = "std")]
fn prompt_line(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn prompt_rating(label: &str) -> anyhow::Result<u8> {
    loop {
        let line = prompt_line(label)?;
        match line.parse::<u8>() {
            Ok(value) if value <= RATING_MAX => return Ok(value),
            _ => println!("✗ Enter a whole number 0-{}", RATING_MAX),
        }
    }
}

#[cfg(feature = "std")]
async fn run_form(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);

    println!("\n════════════════════════════════════════════════════════════");
    println!("                      FEEDBACK FORM");
    println!("════════════════════════════════════════════════════════════\n");

    let name = prompt_line("Name: ")?;
    let surname = prompt_line("Surname: ")?;
    let email = prompt_line("Email: ")?;
    let phone = prompt_line("Phone number: ")?;
    let address = prompt_line("Address: ")?;
    let r1 = prompt_rating("Rating 1 (0-10): ")?;
    let r2 = prompt_rating("Rating 2 (0-10): ")?;
    let r3 = prompt_rating("Rating 3 (0-10): ")?;

    let submission =
        ContactSubmission::new(&name, &surname, &email, &phone, &address, [r1, r2, r3], &mut rng);
    log::debug!("contact form data: {:?}", submission);

    println!("\n{}", submission.summary());
    println!("\n✓ Form submitted successfully!");
    io::stdout().flush()?;

    // Transient notice: dismiss after the fixed delay.
    sleep(Duration::from_millis(NOTICE_DELAY_MS)).await;
    print!("\x1b[1A\x1b[2K");
    io::stdout().flush()?;
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_maps_rows_and_columns() {
        assert_eq!(parse_cell("A1", Difficulty::Easy), Ok(0));
        assert_eq!(parse_cell("D1", Difficulty::Easy), Ok(3));
        assert_eq!(parse_cell("a2", Difficulty::Easy), Ok(4));
        assert_eq!(parse_cell("D3", Difficulty::Easy), Ok(11));
        assert_eq!(parse_cell("F4", Difficulty::Hard), Ok(23));
    }

    #[test]
    fn parse_cell_rejects_out_of_grid_input() {
        assert!(parse_cell("E1", Difficulty::Easy).is_err());
        assert!(parse_cell("A4", Difficulty::Easy).is_err());
        assert!(parse_cell("A0", Difficulty::Easy).is_err());
        assert!(parse_cell("G1", Difficulty::Hard).is_err());
        assert!(parse_cell("11", Difficulty::Easy).is_err());
        assert!(parse_cell("A", Difficulty::Easy).is_err());
    }
}
