use crate::course::Course;
use crate::error::StoreError;
use crate::game::Game;

/// Persistence backend for course and game records.
///
/// Implementations load and save whole collections; callers rewrite the full
/// collection after every change.
pub trait RecordStore: Send + Sync {
    /// Stored courses, or `None` if courses have never been saved.
    fn load_courses(&self) -> Result<Option<Vec<Course>>, StoreError>;

    fn save_courses(&mut self, courses: &[Course]) -> Result<(), StoreError>;

    /// Stored games; an empty list if none have been saved.
    fn load_games(&self) -> Result<Vec<Game>, StoreError>;

    fn save_games(&mut self, games: &[Game]) -> Result<(), StoreError>;
}

/// In-process store, used for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    courses: Option<Vec<Course>>,
    games: Option<Vec<Game>>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `courses`.
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Some(courses),
            ..Self::default()
        }
    }

    /// Number of save calls made against this store.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved_courses(&self) -> Option<&[Course]> {
        self.courses.as_deref()
    }

    pub fn saved_games(&self) -> Option<&[Game]> {
        self.games.as_deref()
    }
}

impl RecordStore for MemoryStore {
    fn load_courses(&self) -> Result<Option<Vec<Course>>, StoreError> {
        Ok(self.courses.clone())
    }

    fn save_courses(&mut self, courses: &[Course]) -> Result<(), StoreError> {
        self.courses = Some(courses.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn load_games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.games.clone().unwrap_or_default())
    }

    fn save_games(&mut self, games: &[Game]) -> Result<(), StoreError> {
        self.games = Some(games.to_vec());
        self.saves += 1;
        Ok(())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load_courses(&self) -> Result<Option<Vec<Course>>, StoreError> {
        (**self).load_courses()
    }

    fn save_courses(&mut self, courses: &[Course]) -> Result<(), StoreError> {
        (**self).save_courses(courses)
    }

    fn load_games(&self) -> Result<Vec<Game>, StoreError> {
        (**self).load_games()
    }

    fn save_games(&mut self, games: &[Game]) -> Result<(), StoreError> {
        (**self).save_games(games)
    }
}
