//! Participant identities and match modes.

use derive_getters::Getters;
use oxo_engine::Mark;

/// Reserved display name for the automated participant.
pub const COMPUTER_NAME: &str = "Computer";

/// Error returned when a participant name fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NameError {
    /// Nothing remained after trimming.
    #[display("Participant name must not be empty")]
    Empty,
    /// A human tried to claim the automated participant's name.
    #[display("The name {} is reserved for the automated participant", COMPUTER_NAME)]
    Reserved,
}

impl std::error::Error for NameError {}

/// A validated participant name: trimmed and non-empty.
///
/// The name doubles as the leaderboard key, so two participants with the
/// same name share one record. [`PlayerName::new`] refuses the reserved
/// automated name; only [`PlayerName::computer`] can hold it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Creates a name from `raw`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::Empty`] when nothing remains after trimming
    /// and [`NameError::Reserved`] when the trimmed name matches
    /// [`COMPUTER_NAME`].
    pub fn new(raw: impl Into<String>) -> Result<Self, NameError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }
        if trimmed == COMPUTER_NAME {
            return Err(NameError::Reserved);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The reserved name of the automated participant.
    pub fn computer() -> Self {
        Self(COMPUTER_NAME.to_string())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of participant holding a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantKind {
    /// A person submitting moves from outside.
    Human,
    /// The built-in search engine.
    Computer,
}

/// A named participant bound to one seat of a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Participant {
    name: PlayerName,
    kind: ParticipantKind,
}

impl Participant {
    /// Creates a human participant.
    pub fn human(name: PlayerName) -> Self {
        Self {
            name,
            kind: ParticipantKind::Human,
        }
    }

    /// Creates the automated participant.
    pub fn computer() -> Self {
        Self {
            name: PlayerName::computer(),
            kind: ParticipantKind::Computer,
        }
    }

    /// Checks whether this seat is driven by the engine.
    pub fn is_computer(&self) -> bool {
        self.kind == ParticipantKind::Computer
    }
}

/// How a match is staffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchMode {
    /// Two humans sharing the terminal.
    TwoPlayer {
        /// The participant holding X.
        player_x: PlayerName,
        /// The participant holding O.
        player_o: PlayerName,
    },
    /// One human against the engine.
    VsComputer {
        /// The human participant.
        human: PlayerName,
        /// The mark the human holds. The engine takes the other one and
        /// opens the game when it holds X.
        human_mark: Mark,
    },
}

impl MatchMode {
    /// Builds a two-player mode from raw names.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if either name is blank or reserved.
    pub fn two_player(
        player_x: impl Into<String>,
        player_o: impl Into<String>,
    ) -> Result<Self, NameError> {
        Ok(Self::TwoPlayer {
            player_x: PlayerName::new(player_x)?,
            player_o: PlayerName::new(player_o)?,
        })
    }

    /// Builds a human-versus-engine mode from a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the name is blank or reserved.
    pub fn vs_computer(
        human: impl Into<String>,
        human_mark: Mark,
    ) -> Result<Self, NameError> {
        Ok(Self::VsComputer {
            human: PlayerName::new(human)?,
            human_mark,
        })
    }
}

/// The two seats of a configured match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Participants {
    player_x: Participant,
    player_o: Participant,
}

impl Participants {
    /// Assigns seats according to `mode`.
    pub fn from_mode(mode: &MatchMode) -> Self {
        match mode {
            MatchMode::TwoPlayer { player_x, player_o } => Self {
                player_x: Participant::human(player_x.clone()),
                player_o: Participant::human(player_o.clone()),
            },
            MatchMode::VsComputer { human, human_mark } => {
                let human = Participant::human(human.clone());
                match human_mark {
                    Mark::X => Self {
                        player_x: human,
                        player_o: Participant::computer(),
                    },
                    Mark::O => Self {
                        player_x: Participant::computer(),
                        player_o: human,
                    },
                }
            }
        }
    }

    /// Returns the participant holding `mark`.
    pub fn by_mark(&self, mark: Mark) -> &Participant {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }
}
