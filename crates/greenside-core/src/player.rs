use serde::{Deserialize, Serialize};

/// A player in a game. Identified by position in the game's player list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Informational only; scoring uses the game's stroke matrix.
    pub handicap: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, handicap: u32) -> Self {
        Self {
            name: name.into(),
            handicap,
        }
    }

    /// Name to show for the player at `index`, falling back to `P<n>` when blank.
    pub fn display_name(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            format!("P{}", index + 1)
        } else {
            self.name.clone()
        }
    }
}
