//! Console rendering of match state.
//!
//! Pure functions from a snapshot to text; no I/O here. The binary decides
//! where the text goes.

use std::fmt::Write;

use crate::core::{GameMode, MatchSnapshot};

const RULE: &str = "--------------------------------------------------";

/// Startup banner.
pub const BANNER: &str = "\
==================================================
Life / Poison Tracker
==================================================";

/// The command list shown by `help`.
pub const HELP: &str = "\
Commands:
--------------------------------------------------
  new <players 2-6> [c]        Start new game; add 'c' for Commander (40 life)
  +<p> <n> / -<p> <n>          Add/subtract life for player p  (e.g. +1 3)
  set <p> <n>                  Set life of player p
  poison <p> <+/-n>            Add/remove poison counters
  cmd <target> <source> <+n>   Commander dmg to <target> from <source>
  next                         Pass turn to next player
  show                         Display life totals
  roll [dN]                    Roll a die (default d20, e.g. roll d6)
  coin                         Flip a coin
  undo / redo                  Undo or redo last action
  help                         Show this help text
  quit                         Exit program
--------------------------------------------------";

/// Format the life/poison table for a snapshot.
///
/// Commander-damage cells are shown only in Commander mode, and only for
/// attackers that have dealt damage.
#[must_use]
pub fn state_table(snapshot: &MatchSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Players: {} | Mode: {} | Turn: {}",
        snapshot.player_count(),
        snapshot.mode(),
        snapshot.turn()
    );
    let _ = writeln!(out, "Idx  Life  Poison   | Commander Damage (to P_i from P_j)");

    for target in snapshot.player_ids() {
        let _ = write!(
            out,
            "P{:<3} {:<5} {:<7} | ",
            target.seat(),
            snapshot.life(target),
            snapshot.poison(target)
        );
        if snapshot.mode() == GameMode::Commander {
            for source in snapshot.player_ids() {
                if source == target {
                    continue;
                }
                let damage = snapshot.commander_damage().get(target, source);
                if damage > 0 {
                    let _ = write!(out, "{source}:{damage} ");
                }
            }
        }
        let _ = writeln!(out);
    }

    let _ = write!(out, "{RULE}");
    out
}
