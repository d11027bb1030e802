use crate::course::CourseId;
use crate::game::GameId;

/// Failure reading or writing the backing record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be read or written.
    Io(String),
    /// The backend returned data that does not decode as records.
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(m) => write!(f, "record store I/O failed: {m}"),
            Self::Corrupt(m) => write!(f, "record store data is corrupt: {m}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// A record that is missing or does not satisfy its shape invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    CourseNotFound(CourseId),
    GameNotFound(GameId),
    DuplicateCourse(CourseId),
    DuplicateGame(GameId),
    NoHoles,
    InvalidPar { hole: usize, par: u8 },
    NoPlayers,
    TooManyPlayers { players: usize, max: usize },
    TooManyHoles { holes: usize, max: usize },
    StrokeMatrixShape { players: usize },
    SelfStrokes { player: usize },
    NegativeStrokes { giver: usize, receiver: usize },
    TwoWayStrokes { first: usize, second: usize },
    ScoreSheetShape { holes: usize, players: usize },
    StartingHoleOutOfRange { starting_hole: u32, holes: usize },
    HoleOutOfRange { hole: usize, holes: usize },
    PlayerOutOfRange { player: usize, players: usize },
    Store(StoreError),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CourseNotFound(id) => write!(f, "course {id} not found"),
            Self::GameNotFound(id) => write!(f, "game {id} not found"),
            Self::DuplicateCourse(id) => write!(f, "course {id} already exists"),
            Self::DuplicateGame(id) => write!(f, "game {id} already exists"),
            Self::NoHoles => write!(f, "course has no holes"),
            Self::InvalidPar { hole, par } => {
                write!(f, "hole {} has par {par}; par must be at least 1", hole + 1)
            },
            Self::NoPlayers => write!(f, "game has no players"),
            Self::TooManyPlayers { players, max } => {
                write!(f, "game has {players} players (max {max})")
            },
            Self::TooManyHoles { holes, max } => write!(f, "course has {holes} holes (max {max})"),
            Self::StrokeMatrixShape { players } => {
                write!(f, "stroke matrix must be {players}x{players}")
            },
            Self::SelfStrokes { player } => {
                write!(f, "player {player} cannot give strokes to themselves")
            },
            Self::NegativeStrokes { giver, receiver } => {
                write!(f, "strokes from player {giver} to player {receiver} are negative")
            },
            Self::TwoWayStrokes { first, second } => write!(
                f,
                "players {first} and {second} give each other strokes; strokes flow one way per pair"
            ),
            Self::ScoreSheetShape { holes, players } => {
                write!(f, "score sheet must be empty or {holes} holes x {players} players")
            },
            Self::StartingHoleOutOfRange {
                starting_hole,
                holes,
            } => write!(f, "starting hole {starting_hole} is outside 1..={holes}"),
            Self::HoleOutOfRange { hole, holes } => {
                write!(f, "hole index {hole} out of range ({holes} holes)")
            },
            Self::PlayerOutOfRange { player, players } => {
                write!(f, "player index {player} out of range ({players} players)")
            },
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for RecordError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
