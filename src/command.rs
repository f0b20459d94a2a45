//! Text command parsing.
//!
//! One line of input becomes one [`Command`]. Player references are
//! 1-based seat numbers in text (`+1 3` means "player 1 gains 3 life") and
//! 0-based [`PlayerId`]s once parsed. Whether a seat actually exists at the
//! current table is the session's call, not the parser's.

use std::str::FromStr;

use thiserror::Error;

use crate::core::PlayerId;

/// Die rolled when `roll` is given without a size.
pub const DEFAULT_DIE_SIDES: u32 = 20;

/// One parsed line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start a brand-new match, discarding all history.
    New { players: usize, commander: bool },
    /// Add (or subtract) life for a player.
    Life { player: PlayerId, delta: i64 },
    /// Set a player's life total outright.
    SetLife { player: PlayerId, value: i64 },
    /// Add or remove poison counters.
    Poison { player: PlayerId, delta: i64 },
    /// Commander damage to `target` dealt by `source`.
    CommanderDamage {
        target: PlayerId,
        source: PlayerId,
        delta: i64,
    },
    /// Pass the turn to the next player.
    NextTurn,
    /// Roll a die.
    Roll { sides: u32 },
    /// Flip a coin.
    Coin,
    /// Display the current state.
    Show,
    Undo,
    Redo,
    Help,
    Quit,
}

/// Why a line of input could not be parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'; type 'help' for a list of valid inputs")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("player seats are numbered from 1")]
    SeatZero,
    #[error("a die needs at least 2 sides")]
    DieTooSmall,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        // Life deltas come sign-first: "+1 3", "-2 5".
        if let Some(rest) = line.strip_prefix('+') {
            return parse_life(rest, 1);
        }
        if let Some(rest) = line.strip_prefix('-') {
            return parse_life(rest, -1);
        }

        let mut tokens = line.split_whitespace();
        let head = tokens.next().ok_or(ParseError::Empty)?;

        match head {
            "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "show" => Ok(Command::Show),
            "undo" => Ok(Command::Undo),
            "redo" => Ok(Command::Redo),
            "next" => Ok(Command::NextTurn),
            "coin" => Ok(Command::Coin),
            "roll" => parse_roll(tokens.next()),
            "new" => parse_new(tokens),
            "set" => {
                const USAGE: &str = "set <p> <n>";
                let player = parse_seat(tokens.next(), USAGE)?;
                let value = parse_amount(tokens.next(), USAGE)?;
                Ok(Command::SetLife { player, value })
            }
            "poison" => {
                const USAGE: &str = "poison <p> <+/-n>";
                let player = parse_seat(tokens.next(), USAGE)?;
                let delta = parse_amount(tokens.next(), USAGE)?;
                Ok(Command::Poison { player, delta })
            }
            "cmd" => {
                const USAGE: &str = "cmd <target> <source> <+n>";
                let target = parse_seat(tokens.next(), USAGE)?;
                let source = parse_seat(tokens.next(), USAGE)?;
                let delta = parse_amount(tokens.next(), USAGE)?;
                Ok(Command::CommanderDamage {
                    target,
                    source,
                    delta,
                })
            }
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_life(rest: &str, sign: i64) -> Result<Command, ParseError> {
    const USAGE: &str = "+<p> <n> or -<p> <n>";
    let mut tokens = rest.split_whitespace();
    let player = parse_seat(tokens.next(), USAGE)?;
    let amount = parse_amount(tokens.next(), USAGE)?;
    Ok(Command::Life {
        player,
        delta: sign * amount,
    })
}

fn parse_roll(die: Option<&str>) -> Result<Command, ParseError> {
    let sides = match die {
        None => DEFAULT_DIE_SIDES,
        Some(token) => {
            let digits = token
                .strip_prefix(['d', 'D'])
                .ok_or(ParseError::Usage("roll [dN]"))?;
            digits
                .parse()
                .map_err(|_| ParseError::Usage("roll [dN]"))?
        }
    };
    if sides < 2 {
        return Err(ParseError::DieTooSmall);
    }
    Ok(Command::Roll { sides })
}

fn parse_new<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Command, ParseError> {
    const USAGE: &str = "new <players 2-6> [c]";
    let mut players = 4;
    let mut commander = false;

    for token in tokens {
        if let Ok(count) = token.parse::<usize>() {
            players = count;
        } else if token.starts_with(['c', 'C']) {
            commander = true;
        } else {
            return Err(ParseError::Usage(USAGE));
        }
    }

    Ok(Command::New { players, commander })
}

fn parse_seat(token: Option<&str>, usage: &'static str) -> Result<PlayerId, ParseError> {
    let seat: u8 = token
        .and_then(|t| t.parse().ok())
        .ok_or(ParseError::Usage(usage))?;
    if seat == 0 {
        return Err(ParseError::SeatZero);
    }
    Ok(PlayerId::new(seat - 1))
}

fn parse_amount(token: Option<&str>, usage: &'static str) -> Result<i64, ParseError> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or(ParseError::Usage(usage))
}
