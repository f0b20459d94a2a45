//! Command processing on top of the timeline.
//!
//! [`Session`] owns the [`Timeline`] and the [`Dice`]. Every state-changing
//! command clones the current snapshot into a working copy, mutates that
//! copy, and commits it with `append`; undo and redo move the cursor
//! without touching stored entries. Dice never touch the timeline.

use tracing::debug;

use crate::command::Command;
use crate::core::{Dice, GameMode, MatchSnapshot, PlayerId, Timeline};

/// What the caller should present after executing a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// State changed or was re-requested; show the current table.
    Show,
    /// A message with no state change (rolls, flips, rejections).
    Info(String),
    /// Undo requested at the oldest reachable entry.
    NothingToUndo,
    /// Redo requested at the newest reachable entry.
    NothingToRedo,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

/// A running tracker session: one timeline, one set of dice.
pub struct Session {
    timeline: Timeline,
    dice: Dice,
}

impl Session {
    /// Start a session with entropy-seeded dice.
    #[must_use]
    pub fn new(players: usize, mode: GameMode) -> Self {
        Self::with_dice(players, mode, Dice::from_entropy())
    }

    /// Start a session with the given dice (seeded runs, tests).
    #[must_use]
    pub fn with_dice(players: usize, mode: GameMode, dice: Dice) -> Self {
        Self {
            timeline: Timeline::new(MatchSnapshot::new(players, mode)),
            dice,
        }
    }

    /// The snapshot currently shown to the table.
    #[must_use]
    pub fn current(&self) -> &MatchSnapshot {
        self.timeline.current()
    }

    /// Read access to the history.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Execute one command and say what to display.
    pub fn execute(&mut self, command: Command) -> Reply {
        debug!(?command, "executing");
        match command {
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
            Command::Show => Reply::Show,

            Command::Undo => {
                if self.timeline.undo() {
                    Reply::Show
                } else {
                    Reply::NothingToUndo
                }
            }
            Command::Redo => {
                if self.timeline.redo() {
                    Reply::Show
                } else {
                    Reply::NothingToRedo
                }
            }

            Command::Roll { sides } => {
                let rolled = self.dice.roll(sides);
                Reply::Info(format!("Rolled d{sides}: {rolled}"))
            }
            Command::Coin => Reply::Info(format!("You flipped: {}", self.dice.flip())),

            Command::New { players, commander } => {
                let mode = if commander {
                    GameMode::Commander
                } else {
                    GameMode::Constructed
                };
                self.timeline.reset(MatchSnapshot::new(players, mode));
                Reply::Show
            }

            Command::NextTurn => {
                let mut next = self.timeline.working_copy();
                next.advance_turn();
                self.timeline.append(next);
                Reply::Show
            }

            Command::Life { player, delta } => {
                self.commit_for(player, |next| next.adjust_life(player, delta))
            }
            Command::SetLife { player, value } => {
                self.commit_for(player, |next| next.set_life(player, value))
            }
            Command::Poison { player, delta } => {
                self.commit_for(player, |next| next.add_poison(player, delta))
            }

            Command::CommanderDamage {
                target,
                source,
                delta,
            } => self.commander_damage(target, source, delta),
        }
    }

    /// Mutate a working copy for `player` and commit it, unless the seat is
    /// not at the table.
    fn commit_for(&mut self, player: PlayerId, mutate: impl FnOnce(&mut MatchSnapshot)) -> Reply {
        let Some(mut next) = self.working_copy_for(player) else {
            return self.no_such_player(player);
        };
        mutate(&mut next);
        self.timeline.append(next);
        Reply::Show
    }

    fn commander_damage(&mut self, target: PlayerId, source: PlayerId, delta: i64) -> Reply {
        let current = self.timeline.current();
        if !current.has_player(target) {
            return self.no_such_player(target);
        }
        if !current.has_player(source) {
            return self.no_such_player(source);
        }
        if current.mode() != GameMode::Commander {
            return Reply::Info("Commander damage only applies in Commander mode.".to_string());
        }
        if target == source {
            return Reply::Info("Commander damage needs two different players.".to_string());
        }

        let mut next = self.timeline.working_copy();
        next.add_commander_damage(target, source, delta);
        self.timeline.append(next);
        Reply::Show
    }

    fn working_copy_for(&self, player: PlayerId) -> Option<MatchSnapshot> {
        self.timeline
            .current()
            .has_player(player)
            .then(|| self.timeline.working_copy())
    }

    fn no_such_player(&self, player: PlayerId) -> Reply {
        Reply::Info(format!(
            "No player {player} at a {}-player table.",
            self.timeline.current().player_count()
        ))
    }
}
