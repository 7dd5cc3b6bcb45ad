//! A single game against the computer.
//!
//! The session owns the only copy of the commitment. Its key and move leave
//! the session through `reveal`, which refuses until the counterparty's move
//! has been submitted, so the published tag always precedes the choice it
//! is verified against.

use crate::crypto::{Commitment, Reveal, Tag};
use crate::error::GameError;
use crate::games::{GameJudge, Move, MoveSet, OutcomeMatrix, RuleEngine};
use crate::protocol::{Outcome, SessionId, SessionPhase};
use crate::random::{OsRandomSource, RandomSource};
use serde::{Deserialize, Serialize};

/// One commit-resolve-reveal round
#[derive(Debug)]
pub struct GameSession {
    id: SessionId,
    rules: RuleEngine,
    commitment: Commitment,
    phase: SessionPhase,
    counterparty: Option<Move>,
    outcome: Option<Outcome>,
}

/// Everything needed to audit a finished session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub moves: Vec<String>,
    pub counterparty_move: String,
    pub outcome: Outcome,
    pub tag: Tag,
    pub reveal: Reveal,
}

impl SessionRecord {
    /// Recompute the tag from the revealed key and move
    pub fn verify(&self) -> bool {
        self.reveal.verify(&self.tag)
    }
}

impl GameSession {
    /// Validate the moves and commit to a computer move using OS randomness
    pub fn new<I, S>(move_names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_source(move_names, &mut OsRandomSource)
    }

    /// Same as `new` with an explicit random source
    pub fn with_source<I, S, R>(move_names: I, source: &mut R) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: RandomSource + ?Sized,
    {
        let moves = MoveSet::new(move_names)?;
        let commitment = Commitment::commit(&moves, source)?;

        Ok(Self {
            id: SessionId::new(),
            rules: RuleEngine::new(moves),
            commitment,
            phase: SessionPhase::Committed,
            counterparty: None,
            outcome: None,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn moves(&self) -> &MoveSet {
        self.rules.moves()
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// Tag published before the counterparty chooses
    pub fn tag(&self) -> &Tag {
        self.commitment.tag()
    }

    /// Tag as 64 lowercase hex characters
    pub fn commitment_tag(&self) -> String {
        self.commitment.tag().to_hex()
    }

    /// Fix the counterparty's move and resolve it against the computer's.
    ///
    /// The outcome is from the counterparty's side. An unknown name leaves
    /// the session `Committed` so the caller can ask again.
    pub fn submit_counterparty_move(&mut self, name: &str) -> Result<Outcome, GameError> {
        if self.phase != SessionPhase::Committed {
            return Err(GameError::AlreadyResolved);
        }

        let theirs = self
            .rules
            .moves()
            .find(name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))?;
        let outcome = self
            .rules
            .resolve(theirs, self.commitment.committed_move());

        self.counterparty = Some(theirs);
        self.outcome = Some(outcome);
        self.phase = SessionPhase::Resolved;
        Ok(outcome)
    }

    pub fn counterparty_move(&self) -> Option<&str> {
        self.counterparty.map(|mv| self.rules.moves().name(mv))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Disclose the key and the computer's move
    pub fn reveal(&mut self) -> Result<Reveal, GameError> {
        match self.phase {
            SessionPhase::Committed => return Err(GameError::NotYetResolved),
            SessionPhase::Resolved => self.phase = SessionPhase::Revealed,
            SessionPhase::Revealed | SessionPhase::Closed => {}
        }
        Ok(self.commitment.reveal(self.rules.moves()))
    }

    /// Key as 64 lowercase hex characters and the computer's move name
    pub fn revealed_secret_and_move(&mut self) -> Result<(String, String), GameError> {
        let reveal = self.reveal()?;
        Ok((reveal.key.to_hex(), reveal.move_name))
    }

    /// Outcomes for every pairing, row move as subject
    pub fn outcome_matrix(&self) -> OutcomeMatrix {
        self.rules.outcome_matrix()
    }

    /// Reveal if needed and end the session
    pub fn close(&mut self) -> Result<SessionRecord, GameError> {
        let reveal = self.reveal()?;
        let (Some(counterparty), Some(outcome)) = (self.counterparty, self.outcome) else {
            return Err(GameError::NotYetResolved);
        };
        self.phase = SessionPhase::Closed;

        Ok(SessionRecord {
            session_id: self.id,
            moves: self.rules.moves().names().to_vec(),
            counterparty_move: self.rules.moves().name(counterparty).to_string(),
            outcome,
            tag: *self.commitment.tag(),
            reveal,
        })
    }
}
