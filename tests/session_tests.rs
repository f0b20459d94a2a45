//! End-to-end session tests: text in, state out.
//!
//! These drive the tracker the way the REPL does (parse a line, execute
//! it, look at the current snapshot) without any real I/O.

use lifetally::command::Command;
use lifetally::core::{Dice, GameMode, PlayerId};
use lifetally::session::{Reply, Session};

fn run(session: &mut Session, line: &str) -> Reply {
    let command: Command = line.parse().expect(line);
    session.execute(command)
}

#[test]
fn test_scripted_match() {
    let mut session = Session::with_dice(4, GameMode::Commander, Dice::new(42));

    run(&mut session, "-1 3");
    run(&mut session, "-1 2");
    run(&mut session, "poison 2 1");
    run(&mut session, "cmd 1 3 6");
    run(&mut session, "next");

    let state = session.current();
    assert_eq!(state.life(PlayerId::new(0)), 35);
    assert_eq!(state.poison(PlayerId::new(1)), 1);
    assert_eq!(
        state.commander_damage().get(PlayerId::new(0), PlayerId::new(2)),
        6
    );
    assert_eq!(state.turn(), PlayerId::new(1));
}

#[test]
fn test_undo_walks_back_through_commands() {
    let mut session = Session::with_dice(2, GameMode::Constructed, Dice::new(42));
    let p0 = PlayerId::new(0);

    run(&mut session, "-1 5");
    run(&mut session, "set 1 9");
    assert_eq!(session.current().life(p0), 9);

    assert_eq!(run(&mut session, "undo"), Reply::Show);
    assert_eq!(session.current().life(p0), 15);

    assert_eq!(run(&mut session, "undo"), Reply::Show);
    assert_eq!(session.current().life(p0), 20);

    assert_eq!(run(&mut session, "undo"), Reply::NothingToUndo);

    assert_eq!(run(&mut session, "redo"), Reply::Show);
    assert_eq!(run(&mut session, "redo"), Reply::Show);
    assert_eq!(session.current().life(p0), 9);
    assert_eq!(run(&mut session, "redo"), Reply::NothingToRedo);
}

#[test]
fn test_new_move_after_undo_buries_the_old_line() {
    let mut session = Session::with_dice(2, GameMode::Constructed, Dice::new(42));
    let p0 = PlayerId::new(0);

    run(&mut session, "-1 5");
    run(&mut session, "undo");
    run(&mut session, "+1 2");

    assert_eq!(session.current().life(p0), 22);
    // the -5 line is unreachable
    assert_eq!(run(&mut session, "redo"), Reply::NothingToRedo);
}

#[test]
fn test_committed_snapshot_is_detached_from_later_edits() {
    let mut session = Session::with_dice(2, GameMode::Constructed, Dice::new(42));
    let p0 = PlayerId::new(0);

    run(&mut session, "set 1 11");
    let committed = session.current().clone();

    run(&mut session, "set 1 99");
    assert_eq!(session.current().life(p0), 99);
    assert_eq!(committed.life(p0), 11);

    run(&mut session, "undo");
    assert_eq!(session.current(), &committed);
}

#[test]
fn test_new_match_resets_table_and_history() {
    let mut session = Session::with_dice(4, GameMode::Commander, Dice::new(42));

    run(&mut session, "-3 10");
    run(&mut session, "new 2");

    let state = session.current();
    assert_eq!(state.player_count(), 2);
    assert_eq!(state.mode(), GameMode::Constructed);
    assert_eq!(state.life(PlayerId::new(0)), 20);
    assert_eq!(run(&mut session, "undo"), Reply::NothingToUndo);
}

#[test]
fn test_new_clamps_player_count() {
    let mut session = Session::with_dice(4, GameMode::Commander, Dice::new(42));

    run(&mut session, "new 9 c");
    assert_eq!(session.current().player_count(), 6);

    run(&mut session, "new 1");
    assert_eq!(session.current().player_count(), 2);
}

#[test]
fn test_rolls_are_not_undoable() {
    let mut session = Session::with_dice(2, GameMode::Constructed, Dice::new(42));

    assert!(matches!(run(&mut session, "roll d6"), Reply::Info(_)));
    assert!(matches!(run(&mut session, "coin"), Reply::Info(_)));
    assert_eq!(run(&mut session, "undo"), Reply::NothingToUndo);
}

#[test]
fn test_out_of_range_seat_is_reported_not_committed() {
    let mut session = Session::with_dice(2, GameMode::Constructed, Dice::new(42));

    let reply = run(&mut session, "+5 3");
    assert!(matches!(reply, Reply::Info(_)));
    assert_eq!(run(&mut session, "undo"), Reply::NothingToUndo);
}

#[test]
fn test_commander_damage_needs_commander_mode() {
    let mut session = Session::with_dice(4, GameMode::Constructed, Dice::new(42));

    let reply = run(&mut session, "cmd 1 2 4");
    let Reply::Info(message) = reply else {
        panic!("expected a rejection message");
    };
    assert!(message.contains("Commander mode"));
    assert_eq!(run(&mut session, "undo"), Reply::NothingToUndo);
}

#[test]
fn test_history_window_survives_long_match() {
    let mut session = Session::with_dice(2, GameMode::Constructed, Dice::new(42));
    let p0 = PlayerId::new(0);

    // far more commits than the default window holds
    for _ in 0..300 {
        run(&mut session, "-1 1");
    }
    assert_eq!(session.current().life(p0), 20 - 300);

    // undo to the oldest surviving entry; the window is full, not 300 deep
    let mut undone = 0;
    while session.timeline().can_undo() {
        run(&mut session, "undo");
        undone += 1;
    }
    assert_eq!(undone, session.timeline().capacity() - 1);
    assert_eq!(session.current().life(p0), 20 - 300 + undone as i64);
}
