use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_duel::config::{MatchConfig, PlayerConfig};
use connect_four_duel::controller::{MatchController, MatchOutcome};
use connect_four_duel::game::{Cell, GameState, Player};
use connect_four_duel::players::{Agent, HumanAgent, SearchAgent, StdinInput};

/// Run a Connect Four match on the console: human against an AI, or two
/// search algorithms against each other.
#[derive(Parser)]
#[command(name = "duel", about = "Play or watch a Connect Four match")]
struct Cli {
    /// Red player: human, random, negamax[:depth] or sss[:depth]
    #[arg(long)]
    red: Option<PlayerConfig>,

    /// Yellow player: human, random, negamax[:depth] or sss[:depth]
    #[arg(long)]
    yellow: Option<PlayerConfig>,

    /// Board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Which color moves first: red or yellow
    #[arg(long)]
    starting: Option<Player>,

    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the final outcome
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MatchConfig::default(),
    };

    if let Some(red) = cli.red {
        config.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.yellow = yellow;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(starting) = cli.starting {
        config.starting_player = starting;
    }
    config.validate().context("invalid match configuration")?;

    if !cli.quiet {
        println!(
            "Red: {}  vs  Yellow: {}",
            config.red.describe(),
            config.yellow.describe()
        );
    }

    let red = build_agent("Red", config.red);
    let yellow = build_agent("Yellow", config.yellow);
    let mut controller = MatchController::new(config.initial_state(), red, yellow);

    if !cli.quiet {
        println!("{}", render_board(controller.state()));
    }

    let outcome = loop {
        let moved_by = controller.state().current_player();
        let result = controller.play_turn().context("match aborted")?;

        if !cli.quiet {
            if let Some(&column) = controller.history().last() {
                println!(
                    "{} ({}) plays column {}",
                    moved_by.name(),
                    controller.agent_name(moved_by),
                    column + 1
                );
            }
            println!("{}", render_board(controller.state()));
        }

        if let Some(outcome) = result {
            break outcome;
        }
    };

    match outcome {
        MatchOutcome::Won(player) => println!("{} wins.", player.name()),
        MatchOutcome::Draw => println!("Looks like we have a draw."),
    }
    Ok(())
}

fn build_agent(name: &str, player: PlayerConfig) -> Box<dyn Agent> {
    match player {
        PlayerConfig::Human => Box::new(HumanAgent::new(name, Box::new(StdinInput))),
        PlayerConfig::Ai { algorithm, depth } => {
            Box::new(SearchAgent::from_kind(algorithm, depth))
        }
    }
}

/// Plain-text board: 1-based column labels on top, X for Red, O for Yellow.
fn render_board(state: &GameState) -> String {
    let board = state.board();
    let mut lines = Vec::with_capacity(board.rows() + 2);

    lines.push(
        (1..=board.cols())
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" "),
    );
    lines.push("-".repeat(2 * board.cols() - 1));

    for row in 0..board.rows() {
        let cells: Vec<&str> = (0..board.cols())
            .map(|col| match board.get(row, col) {
                Cell::Empty => ".",
                Cell::Red => "X",
                Cell::Yellow => "O",
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}
