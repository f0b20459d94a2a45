//! Match state snapshots.
//!
//! `MatchSnapshot` is one point-in-time value of a tracked match: life
//! totals, poison counters, the commander-damage matrix, and whose turn it
//! is. The history stores whole-value copies, so a stored entry can never
//! alias the working copy a command is mutating.
//!
//! The timeline treats snapshots as opaque values; all interpretation of
//! the fields (clamping rules, turn rotation) lives in the mutation
//! helpers here and is driven by the session.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};

/// Match format. Selects starting life and whether commander damage applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// 20 starting life, no commander damage.
    Constructed,
    /// 40 starting life, commander damage tracked per attacker.
    Commander,
}

impl GameMode {
    /// Starting life total for this mode.
    #[must_use]
    pub const fn starting_life(self) -> i64 {
        match self {
            GameMode::Constructed => 20,
            GameMode::Commander => 40,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Constructed => write!(f, "Constructed (20 life)"),
            GameMode::Commander => write!(f, "Commander (40 life)"),
        }
    }
}

/// Accumulated directed commander damage, indexed `[target][source]`.
///
/// Stored as a flat player_count x player_count matrix, inline up to the
/// largest table size. The diagonal is always zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageMatrix {
    player_count: usize,
    cells: SmallVec<[i64; MAX_PLAYERS * MAX_PLAYERS]>,
}

impl DamageMatrix {
    /// Create a zeroed matrix for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            cells: smallvec::smallvec![0; player_count * player_count],
        }
    }

    fn cell(&self, target: PlayerId, source: PlayerId) -> usize {
        target.index() * self.player_count + source.index()
    }

    /// Damage dealt to `target` by `source` so far.
    #[must_use]
    pub fn get(&self, target: PlayerId, source: PlayerId) -> i64 {
        self.cells[self.cell(target, source)]
    }

    /// Accumulate damage to `target` from `source`, flooring at zero.
    pub fn add(&mut self, target: PlayerId, source: PlayerId, delta: i64) {
        let idx = self.cell(target, source);
        self.cells[idx] = (self.cells[idx] + delta).max(0);
    }
}

/// One immutable-once-stored value of the tracked match.
///
/// Plain value type: deep, independent copy via `Clone`, no shared mutable
/// substructure with any other snapshot. All per-player storage is sized to
/// this snapshot's player count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    player_count: usize,
    mode: GameMode,
    life: PlayerMap<i64>,
    poison: PlayerMap<i64>,
    commander_damage: DamageMatrix,
    turn: PlayerId,
}

impl MatchSnapshot {
    /// Create the opening state of a match.
    ///
    /// Life starts at the mode's total, poison and commander damage at
    /// zero, with player 1 to act. `players` is clamped into
    /// [`MIN_PLAYERS`]..=[`MAX_PLAYERS`].
    #[must_use]
    pub fn new(players: usize, mode: GameMode) -> Self {
        let players = players.clamp(MIN_PLAYERS, MAX_PLAYERS);

        Self {
            player_count: players,
            mode,
            life: PlayerMap::with_value(players, mode.starting_life()),
            poison: PlayerMap::with_value(players, 0),
            commander_damage: DamageMatrix::new(players),
            turn: PlayerId::new(0),
        }
    }

    /// Get the player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Get the match mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Get a player's life total.
    #[must_use]
    pub fn life(&self, player: PlayerId) -> i64 {
        self.life[player]
    }

    /// Get a player's poison counters.
    #[must_use]
    pub fn poison(&self, player: PlayerId) -> i64 {
        self.poison[player]
    }

    /// Get the commander-damage matrix.
    #[must_use]
    pub fn commander_damage(&self) -> &DamageMatrix {
        &self.commander_damage
    }

    /// Get the active player.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Check whether `player` is seated at this table.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        player.index() < self.player_count
    }

    /// Iterate over all player IDs at this table.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    // === Mutation helpers (session-side semantics) ===

    /// Add `delta` to a player's life. Negative totals are legal.
    pub fn adjust_life(&mut self, player: PlayerId, delta: i64) {
        self.life[player] += delta;
    }

    /// Set a player's life total.
    pub fn set_life(&mut self, player: PlayerId, value: i64) {
        self.life[player] = value;
    }

    /// Add poison counters, flooring at zero.
    pub fn add_poison(&mut self, player: PlayerId, delta: i64) {
        self.poison[player] = (self.poison[player] + delta).max(0);
    }

    /// Accumulate commander damage dealt to `target` by `source`.
    ///
    /// Returns `false` without modifying anything when the match is not in
    /// Commander mode or when `target == source`.
    pub fn add_commander_damage(
        &mut self,
        target: PlayerId,
        source: PlayerId,
        delta: i64,
    ) -> bool {
        if self.mode != GameMode::Commander || target == source {
            return false;
        }
        self.commander_damage.add(target, source, delta);
        true
    }

    /// Pass the turn to the next player, wrapping around the table.
    pub fn advance_turn(&mut self) {
        self.turn = PlayerId::new((self.turn.0 + 1) % self.player_count as u8);
    }
}
