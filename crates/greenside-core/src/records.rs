use std::time::{SystemTime, UNIX_EPOCH};

use crate::course::{Course, CourseId, default_courses};
use crate::error::RecordError;
use crate::game::{Game, GameId};
use crate::store::RecordStore;
use crate::validate::{Limits, check_game_shape, validate_course, validate_new_game};

/// Cached course and game collections over a [`RecordStore`].
///
/// Every mutation writes the affected collection back to the store in full
/// before the cache is updated, so a failed save leaves the cache untouched.
pub struct Records<S: RecordStore> {
    store: S,
    courses: Vec<Course>,
    games: Vec<Game>,
    limits: Limits,
}

impl<S: RecordStore> Records<S> {
    /// Load both collections. When the store has never saved courses and
    /// `seed_defaults` is set, the default courses are written to it.
    pub fn load(mut store: S, limits: Limits, seed_defaults: bool) -> Result<Self, RecordError> {
        let courses = match store.load_courses()? {
            Some(courses) => courses,
            None if seed_defaults => {
                let defaults = default_courses();
                store.save_courses(&defaults)?;
                tracing::info!(count = defaults.len(), "Seeded default courses");
                defaults
            },
            None => Vec::new(),
        };
        let games = store.load_games()?;
        tracing::info!(
            courses = courses.len(),
            games = games.len(),
            "Loaded records"
        );
        Ok(Self {
            store,
            courses,
            games,
            limits,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: CourseId) -> Result<&Course, RecordError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or(RecordError::CourseNotFound(id))
    }

    /// Id for a new course: the current time in milliseconds, bumped past
    /// any existing id.
    pub fn next_course_id(&self) -> CourseId {
        next_id(self.courses.iter().map(|c| c.id))
    }

    pub fn add_course(&mut self, course: Course) -> Result<&Course, RecordError> {
        validate_course(&course, &self.limits)?;
        if self.courses.iter().any(|c| c.id == course.id) {
            return Err(RecordError::DuplicateCourse(course.id));
        }
        let mut updated = self.courses.clone();
        updated.push(course);
        self.store.save_courses(&updated)?;
        self.courses = updated;
        tracing::info!(course = self.courses[self.courses.len() - 1].id, "Added course");
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Replace the course with the same id.
    ///
    /// Existing games keep referring to holes by index; edits to a course
    /// after games were played are not reconciled.
    pub fn update_course(&mut self, course: Course) -> Result<(), RecordError> {
        validate_course(&course, &self.limits)?;
        let index = self
            .courses
            .iter()
            .position(|c| c.id == course.id)
            .ok_or(RecordError::CourseNotFound(course.id))?;
        let mut updated = self.courses.clone();
        updated[index] = course;
        self.store.save_courses(&updated)?;
        self.courses = updated;
        Ok(())
    }

    pub fn delete_course(&mut self, id: CourseId) -> Result<(), RecordError> {
        if !self.courses.iter().any(|c| c.id == id) {
            return Err(RecordError::CourseNotFound(id));
        }
        let updated: Vec<Course> = self.courses.iter().filter(|c| c.id != id).cloned().collect();
        self.store.save_courses(&updated)?;
        self.courses = updated;
        let orphaned = self.games.iter().filter(|g| g.course_id == id).count();
        if orphaned > 0 {
            tracing::warn!(course = id, orphaned, "Deleted course still referenced by games");
        }
        Ok(())
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, id: GameId) -> Result<&Game, RecordError> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or(RecordError::GameNotFound(id))
    }

    pub fn next_game_id(&self) -> GameId {
        next_id(self.games.iter().map(|g| g.id))
    }

    /// Start a game. The game must reference a stored course and pass the
    /// full set of new-game checks.
    pub fn add_game(&mut self, game: Game) -> Result<&Game, RecordError> {
        let course = self.course(game.course_id)?;
        validate_new_game(&game, course, &self.limits)?;
        if self.games.iter().any(|g| g.id == game.id) {
            return Err(RecordError::DuplicateGame(game.id));
        }
        let mut updated = self.games.clone();
        updated.push(game);
        self.store.save_games(&updated)?;
        self.games = updated;
        let added = &self.games[self.games.len() - 1];
        tracing::info!(game = added.id, players = added.player_count(), "Started game");
        Ok(added)
    }

    /// Replace the game with the same id, checking its shape against its course.
    pub fn update_game(&mut self, game: Game) -> Result<(), RecordError> {
        let index = self
            .games
            .iter()
            .position(|g| g.id == game.id)
            .ok_or(RecordError::GameNotFound(game.id))?;
        check_game_shape(&game, self.course(game.course_id)?)?;
        let mut updated = self.games.clone();
        updated[index] = game;
        self.store.save_games(&updated)?;
        self.games = updated;
        Ok(())
    }

    pub fn delete_game(&mut self, id: GameId) -> Result<(), RecordError> {
        if !self.games.iter().any(|g| g.id == id) {
            return Err(RecordError::GameNotFound(id));
        }
        let updated: Vec<Game> = self.games.iter().filter(|g| g.id != id).cloned().collect();
        self.store.save_games(&updated)?;
        self.games = updated;
        Ok(())
    }

    /// A game ready for scoring together with its course: the score sheet is
    /// laid out if the game has none, and the game's shape is checked.
    ///
    /// The returned game is a copy; nothing is persisted until it is passed
    /// to [`Records::update_game`].
    pub fn open_game(&self, id: GameId) -> Result<(Game, Course), RecordError> {
        let mut game = self.game(id)?.clone();
        let course = self.course(game.course_id)?.clone();
        if game.ensure_score_sheet(course.hole_count()) {
            tracing::debug!(game = id, holes = course.hole_count(), "Laid out score sheet");
        }
        check_game_shape(&game, &course)?;
        Ok((game, course))
    }
}

fn next_id(existing: impl Iterator<Item = u64>) -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
    match existing.max() {
        Some(max) if max >= now => max.saturating_add(1),
        _ => now,
    }
}
