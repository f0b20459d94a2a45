//! Line-oriented REPL for the tracker.
//!
//! Reads one command per line from stdin, executes it against the session,
//! and prints what the session's reply asks for.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use lifetally::command::Command;
use lifetally::core::{Dice, GameMode};
use lifetally::render;
use lifetally::session::{Reply, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Constructed,
    Commander,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Constructed => GameMode::Constructed,
            ModeArg::Commander => GameMode::Commander,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lifetally", version, about = "Turn-based life/poison tracker with undo history")]
struct Args {
    /// Number of players to seat (2-6)
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Match format
    #[arg(long, value_enum, default_value = "commander")]
    mode: ModeArg,

    /// Seed the dice for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let dice = match args.seed {
        Some(seed) => Dice::new(seed),
        None => Dice::from_entropy(),
    };
    let mut session = Session::with_dice(args.players, args.mode.into(), dice);

    println!("{}", render::BANNER);
    println!("{}", render::HELP);
    println!("{}", render::state_table(session.current()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("\n(Type 'help' for commands)\n> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match session.execute(command) {
            Reply::Show => println!("{}", render::state_table(session.current())),
            Reply::Info(message) => println!("{message}"),
            Reply::Help => println!("{}", render::HELP),
            Reply::NothingToUndo => println!("Nothing to undo."),
            Reply::NothingToRedo => println!("Nothing to redo."),
            Reply::Quit => break,
        }
    }

    println!("\nThanks for playing!");
    Ok(())
}
