//! End-to-end game scenarios driven through `handle_input`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::{Classification, Word};
use wordle_game::game::{
    GameSession, GameStatus, InputEvent, MoveRejected, SessionConfig, SessionEvent, TileState,
};
use wordle_game::wordlists::WordLists;

const SOLUTIONS: &str = "crane\nslate\nspeed\nrobot\n";
const ALLOWED: &str = "CRANE\nslate \nspeed\nrobot\nerase\nboobs\naudio\nirate\nmoist\nlunch\npinky\n";

fn lists() -> WordLists {
    WordLists::load(SOLUTIONS, ALLOWED).unwrap()
}

fn start<'a>(lists: &'a WordLists, secret: &str) -> GameSession<'a> {
    GameSession::with_secret(lists, Word::new(secret).unwrap(), 6).unwrap()
}

/// Type a word and press Enter, returning the submit events
fn guess(session: &mut GameSession<'_>, word: &str) -> Vec<SessionEvent> {
    for ch in word.chars() {
        session.handle_input(InputEvent::Letter(ch)).unwrap();
    }
    session.handle_input(InputEvent::Submit).unwrap()
}

fn row_states(session: &GameSession<'_>, row: usize) -> Vec<TileState> {
    session.row(row).unwrap().tiles().iter().map(|t| t.state()).collect()
}

#[test]
fn crane_wins_on_first_guess() {
    let lists = lists();
    let mut session = start(&lists, "crane");

    let events = guess(&mut session, "crane");

    assert_eq!(events.last(), Some(&SessionEvent::GameWon { attempts: 1 }));
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(row_states(&session, 0), vec![TileState::Correct; 5]);
}

#[test]
fn speed_erase_duplicate_letters() {
    let lists = lists();
    let mut session = start(&lists, "speed");

    let events = guess(&mut session, "erase");

    let SessionEvent::RowEvaluated { row, feedback } = &events[0] else {
        panic!("expected RowEvaluated, got {events:?}");
    };
    assert_eq!(*row, 0);
    assert_eq!(
        feedback.classifications(),
        &[
            Classification::Present,
            Classification::Absent,
            Classification::Absent,
            Classification::Present,
            Classification::Present,
        ]
    );
}

#[test]
fn robot_boobs_excess_copies_absent() {
    let lists = lists();
    let mut session = start(&lists, "robot");

    guess(&mut session, "boobs");

    assert_eq!(
        row_states(&session, 0),
        vec![
            TileState::Present,
            TileState::Correct,
            TileState::Present,
            TileState::Absent,
            TileState::Absent,
        ]
    );
}

#[test]
fn invalid_guess_is_recoverable() {
    let lists = lists();
    let mut session = start(&lists, "crane");

    let events = guess(&mut session, "qwert");
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::InvalidWordRejected { .. }]
    ));
    assert!(session.last_submission_invalid());
    assert_eq!(session.cursor(), (0, 5));
    assert_eq!(session.attempts_used(), 0);
    assert_eq!(row_states(&session, 0), vec![TileState::Occupied; 5]);

    // Resubmitting unchanged is rejected again, not evaluated
    let events = session.handle_input(InputEvent::Submit).unwrap();
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::InvalidWordRejected { .. }]
    ));

    // Erase the whole row and type a legal word
    for _ in 0..5 {
        session.handle_input(InputEvent::Backspace).unwrap();
        assert!(!session.last_submission_invalid());
    }
    assert_eq!(
        session.handle_input(InputEvent::Backspace),
        Err(MoveRejected::RowEmpty)
    );

    let events = guess(&mut session, "slate");
    assert!(matches!(events[0], SessionEvent::RowEvaluated { row: 0, .. }));
    assert_eq!(session.cursor(), (1, 0));
}

#[test]
fn six_misses_lose_the_game() {
    let lists = lists();
    let mut session = start(&lists, "crane");

    for word in ["slate", "audio", "moist", "lunch", "pinky"] {
        guess(&mut session, word);
        assert_eq!(session.status(), GameStatus::InProgress);
    }
    let events = guess(&mut session, "robot");

    assert_eq!(
        events.last(),
        Some(&SessionEvent::GameLost {
            secret: Word::new("crane").unwrap()
        })
    );
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.attempts_used(), 6);
    assert_eq!(
        session.handle_input(InputEvent::Letter('a')),
        Err(MoveRejected::GameOver)
    );
}

#[test]
fn win_on_last_row_is_not_a_loss() {
    let lists = lists();
    let mut session = GameSession::with_secret(&lists, Word::new("crane").unwrap(), 2).unwrap();

    guess(&mut session, "slate");
    let events = guess(&mut session, "crane");

    assert_eq!(events.last(), Some(&SessionEvent::GameWon { attempts: 2 }));
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn imprecise_caller_cannot_corrupt_state() {
    let lists = lists();
    let mut session = start(&lists, "crane");

    assert_eq!(
        session.handle_input(InputEvent::Submit),
        Err(MoveRejected::RowIncomplete)
    );
    assert_eq!(
        session.handle_input(InputEvent::Backspace),
        Err(MoveRejected::RowEmpty)
    );
    assert_eq!(
        session.handle_input(InputEvent::Letter('!')),
        Err(MoveRejected::NotALetter('!'))
    );

    for ch in "slates".chars() {
        let _ = session.handle_input(InputEvent::Letter(ch));
    }
    assert_eq!(session.cursor(), (0, 5));
    assert_eq!(session.row(0).unwrap().typed(), "slate");
}

#[test]
fn seeded_sessions_are_reproducible() {
    let lists = lists();
    let config = SessionConfig::default();

    let first = GameSession::new(&lists, config, &mut StdRng::seed_from_u64(2024)).unwrap();
    let second = GameSession::new(&lists, config, &mut StdRng::seed_from_u64(2024)).unwrap();

    assert_eq!(first.secret(), second.secret());
}

#[test]
fn restart_replaces_session() {
    let lists = lists();
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = GameSession::new(&lists, SessionConfig::default(), &mut rng).unwrap();
    let secret = session.secret().text();
    guess(&mut session, &secret);
    assert_eq!(session.status(), GameStatus::Won);

    let session = session.restart(&mut rng).unwrap();
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.cursor(), (0, 0));
    assert!(session.rows().iter().all(|row| row.typed().is_empty()));
}

#[test]
fn sessions_share_word_lists() {
    let lists = lists();
    let mut a = start(&lists, "crane");
    let mut b = start(&lists, "slate");

    guess(&mut a, "slate");
    guess(&mut b, "slate");

    assert_eq!(a.status(), GameStatus::InProgress);
    assert_eq!(b.status(), GameStatus::Won);
}
