//! Integration tests for the board component
//!
//! These tests drive the full presentation loop the way the binary does:
//! a session supplies read-only inputs, the board reacts and emits
//! commands, the session applies them, and the board re-syncs.

use precinct::core::config::BoardConfig;
use precinct::core::types::{DistrictId, Shift};
use precinct::game::actions::ActionId;
use precinct::game::session::GameSession;
use precinct::ui::state::{Board, BoardCommand, Tab};

fn new_game(seed: u64) -> (GameSession, Board) {
    let config = BoardConfig::default();
    let session = GameSession::new(config.clone(), seed);
    let board = Board::new(config, &session.board_input());
    (session, board)
}

/// Drive one full sync cycle, the way the binary's frame loop does
fn sync(session: &GameSession, board: &mut Board) {
    let input = session.board_input();
    board.sync(&input);
}

// ============================================================================
// Round Flow Integration Tests
// ============================================================================

#[test]
fn test_fresh_game_starts_on_overview_with_empty_feed() {
    let (session, mut board) = new_game(42);
    sync(&session, &mut board);

    assert_eq!(board.active_tab, Tab::Summary);
    assert!(session.board_input().overview_mode());
    assert!(board.feed.is_empty());
    assert_eq!(board.feed.unread(), 0);
}

#[test]
fn test_end_round_shows_summary_and_ingests_events() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    let command = board.end_round();
    assert_eq!(board.active_tab, Tab::Summary);
    session.apply(command);
    sync(&session, &mut board);

    let input = session.board_input();
    assert_eq!(input.current_round, 2);
    assert!(input.show_round_summary);

    let summary = input.round_summary.expect("summary after ending a round");
    let expected = summary
        .special_events
        .len()
        .min(board.config().max_events_per_round);
    assert_eq!(board.feed.len(), expected);
    assert_eq!(board.feed.unread(), expected);
    assert!(board.feed.events().iter().all(|e| e.round == 2));
}

#[test]
fn test_feed_never_exceeds_cap_per_round() {
    // Play every round of a few games; no single round may contribute
    // more than the cap
    for seed in [1_u64, 7, 99] {
        let (mut session, mut board) = new_game(seed);
        sync(&session, &mut board);
        let cap = board.config().max_events_per_round;

        let mut previous_len = 0;
        while !session.is_over() {
            session.apply(board.end_round());
            sync(&session, &mut board);
            let grown = board.feed.len() - previous_len;
            assert!(grown <= cap, "round added {} events, cap is {}", grown, cap);
            previous_len = board.feed.len();
            session.apply(board.continue_to_next_round(&session.board_input()));
        }
    }
}

#[test]
fn test_continue_returns_to_map_mid_game() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    session.apply(board.end_round());
    sync(&session, &mut board);

    let command = board.continue_to_next_round(&session.board_input());
    session.apply(command);
    sync(&session, &mut board);

    assert_eq!(board.active_tab, Tab::Map);
    assert!(!session.board_input().show_round_summary);
}

#[test]
fn test_new_summary_overrides_manual_tab_selection() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    session.apply(board.end_round());
    sync(&session, &mut board);
    session.apply(board.continue_to_next_round(&session.board_input()));
    sync(&session, &mut board);

    board.select_tab(Tab::Performance);
    sync(&session, &mut board);
    assert_eq!(board.active_tab, Tab::Performance);

    // Ending the next round forces the summary tab again
    session.apply(board.end_round());
    sync(&session, &mut board);
    assert_eq!(board.active_tab, Tab::Summary);
}

// ============================================================================
// Notification Feed Integration Tests
// ============================================================================

#[test]
fn test_opening_popover_marks_everything_read() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    // Accumulate events over a few rounds
    for _ in 0..3 {
        session.apply(board.end_round());
        sync(&session, &mut board);
        session.apply(board.continue_to_next_round(&session.board_input()));
    }

    board.toggle_notifications();
    assert!(board.show_notifications);
    assert_eq!(board.feed.unread(), 0);
    assert!(board.feed.events().iter().all(|e| e.read));

    // Closing and reopening with no new rounds stays at zero
    board.toggle_notifications();
    board.toggle_notifications();
    assert_eq!(board.feed.unread(), 0);
}

#[test]
fn test_clear_all_empties_feed() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    session.apply(board.end_round());
    sync(&session, &mut board);

    board.clear_events();
    assert!(board.feed.is_empty());
    assert_eq!(board.feed.unread(), 0);
}

#[test]
fn test_older_events_retained_across_rounds() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    let mut per_round = Vec::new();
    for _ in 0..4 {
        session.apply(board.end_round());
        sync(&session, &mut board);
        per_round.push(board.feed.len());
        session.apply(board.continue_to_next_round(&session.board_input()));
        sync(&session, &mut board);
    }

    // Feed length never shrinks without an explicit clear
    for window in per_round.windows(2) {
        assert!(window[1] >= window[0]);
    }
    // Newest events come first
    if board.feed.len() >= 2 {
        assert!(board.feed.events()[0].round >= board.feed.events()[board.feed.len() - 1].round);
    }
}

// ============================================================================
// Restart Flow Integration Tests
// ============================================================================

#[test]
fn test_restart_requires_confirmation_and_resets() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    session.apply(board.end_round());
    sync(&session, &mut board);
    assert_eq!(session.current_round(), 2);

    // Cancelling leaves everything untouched
    let feed_len = board.feed.len();
    board.request_restart();
    board.cancel_restart();
    assert_eq!(session.current_round(), 2);
    assert_eq!(board.feed.len(), feed_len);

    // Confirming restarts the session and the sync wipes the feed
    board.request_restart();
    let command = board.confirm_restart();
    assert!(matches!(command, BoardCommand::Restart));
    session.apply(command);
    sync(&session, &mut board);

    let input = session.board_input();
    assert_eq!(input.current_round, 1);
    assert!(board.feed.is_empty());
    assert_eq!(board.feed.unread(), 0);
    assert!(input.game_log.is_empty());
}

// ============================================================================
// Allocation Integration Tests
// ============================================================================

#[test]
fn test_allocation_commands_round_trip_through_session() {
    let (mut session, board) = new_game(42);
    let input = session.board_input();
    let spare = input.allocation.unallocated();
    assert!(spare > 0, "demo session should start with spare officers");

    let command = board
        .adjust_allocation(
            &input,
            DistrictId::SouthSide,
            Shift::Night,
            input.allocation.shift(DistrictId::SouthSide, Shift::Night) + spare,
        )
        .expect("within pool");
    session.apply(command);

    let input = session.board_input();
    assert_eq!(input.allocation.unallocated(), 0);
    assert_eq!(input.allocation.total(), input.allocation.pool());

    // The pool is exhausted; any further increase is rejected
    let denied = board.adjust_allocation(
        &input,
        DistrictId::Downtown,
        Shift::Day,
        input.allocation.shift(DistrictId::Downtown, Shift::Day) + 1,
    );
    assert!(denied.is_none());
}

#[test]
fn test_action_selection_flows_into_round_resolution() {
    let (mut session, mut board) = new_game(42);
    sync(&session, &mut board);

    session.apply(BoardCommand::SetDistrictAction(
        DistrictId::Eastside,
        ActionId::CommunityEngagement,
    ));
    assert_eq!(
        session
            .board_input()
            .district_actions
            .selected(DistrictId::Eastside),
        Some(ActionId::CommunityEngagement)
    );

    session.apply(board.end_round());
    let input = session.board_input();
    assert!(input
        .implemented_actions
        .iter()
        .any(|a| a.district == DistrictId::Eastside && a.round == 1));
    assert!(input.district_actions.is_empty());
}
