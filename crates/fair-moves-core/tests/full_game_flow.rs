//! Integration tests for the full game flow.
//!
//! These tests play complete sessions from commitment to audit.

use fair_moves_core::{
    crypto::{compute_tag, verify_tag, HmacKey, Tag},
    games::{MoveSet, RuleEngine},
    protocol::{GameSession, Outcome, SessionPhase, SessionRecord},
    random::MockRandomSource,
    GameError,
};

const LIZARD_SPOCK: [&str; 5] = ["Rock", "Paper", "Scissors", "Lizard", "Spock"];

/// Simulate a classic game where the player wins
#[test]
fn test_full_rps_game_player_wins() {
    // Phase 1: computer commits to Scissors and publishes the tag
    let mut source = MockRandomSource::with_indices([2]);
    let mut session = GameSession::with_source(["Rock", "Paper", "Scissors"], &mut source).unwrap();
    let published: Tag = session.commitment_tag().parse().unwrap();
    assert_eq!(session.phase(), SessionPhase::Committed);

    // Phase 2: player picks Rock
    let outcome = session.submit_counterparty_move("Rock").unwrap();
    assert_eq!(outcome, Outcome::Win);
    assert_eq!(outcome.message(), "You win!");

    // Phase 3: key is disclosed and the player checks it
    let (secret, computer_move) = session.revealed_secret_and_move().unwrap();
    assert_eq!(computer_move, "Scissors");

    let key: HmacKey = secret.parse().unwrap();
    assert!(verify_tag(&key, &computer_move, &published));
    assert!(!verify_tag(&key, "Rock", &published));
    assert!(!verify_tag(&key, "Paper", &published));
}

/// A player who retries after a typo still gets a fair game
#[test]
fn test_unknown_move_then_retry() {
    let mut session =
        GameSession::with_source(LIZARD_SPOCK, &mut MockRandomSource::with_indices([3])).unwrap();
    let tag_before = session.commitment_tag();

    let err = session.submit_counterparty_move("spock").unwrap_err();
    assert!(matches!(err, GameError::UnknownMove(_)));
    assert_eq!(session.phase(), SessionPhase::Committed);
    assert_eq!(session.commitment_tag(), tag_before);

    // Spock (4) against Lizard (3): Lizard is the move just before Spock
    assert_eq!(
        session.submit_counterparty_move("Spock").unwrap(),
        Outcome::Win
    );
}

/// The record a finished session produces can be audited offline
#[test]
fn test_record_audit_via_json() {
    let mut session = GameSession::new(LIZARD_SPOCK).unwrap();
    session.submit_counterparty_move("Lizard").unwrap();
    let record = session.close().unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tag"].as_str().unwrap().len(), 64);
    assert_eq!(value["reveal"]["key"].as_str().unwrap().len(), 64);
    assert_eq!(value["counterparty_move"], "Lizard");

    let restored: SessionRecord = serde_json::from_str(&json).unwrap();
    assert!(restored.verify());

    // Outcome in the record agrees with the rules
    let rules = RuleEngine::new(MoveSet::new(LIZARD_SPOCK).unwrap());
    assert_eq!(
        rules.resolve_names("Lizard", &restored.reveal.move_name),
        Some(restored.outcome)
    );
}

/// A forged reveal does not match the published tag
#[test]
fn test_tampered_reveal_detected() {
    let mut session = GameSession::new(LIZARD_SPOCK).unwrap();
    session.submit_counterparty_move("Rock").unwrap();
    let mut record = session.close().unwrap();
    assert!(record.verify());

    let honest_move = record.reveal.move_name.clone();
    let other = LIZARD_SPOCK.iter().find(|m| **m != honest_move).unwrap();
    record.reveal.move_name = other.to_string();
    assert!(!record.verify());
}

/// The help matrix for the five-move game is consistent
#[test]
fn test_five_move_matrix() {
    let session = GameSession::new(LIZARD_SPOCK).unwrap();
    let matrix = session.outcome_matrix();
    assert_eq!(matrix.size(), 5);

    for i in 0..5 {
        assert_eq!(matrix.outcome(i, i), Outcome::Draw);
        for j in 0..5 {
            if i != j {
                assert_ne!(matrix.outcome(i, j), Outcome::Draw);
                assert_eq!(matrix.outcome(i, j), matrix.outcome(j, i).inverse());
            }
        }
    }
}

/// Tags published by different sessions for the same move differ
#[test]
fn test_tag_hides_move() {
    let key1 = HmacKey::from_bytes([1u8; 32]);
    let key2 = HmacKey::from_bytes([2u8; 32]);
    assert_ne!(compute_tag(&key1, "Rock"), compute_tag(&key2, "Rock"));
}

#[test]
fn test_reveal_before_submission_is_refused() {
    let mut session = GameSession::new(LIZARD_SPOCK).unwrap();
    assert!(matches!(
        session.revealed_secret_and_move(),
        Err(GameError::NotYetResolved)
    ));
}
