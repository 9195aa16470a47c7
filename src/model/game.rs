use crate::model::{Identifiable, Named};
use serde::{Deserialize, Serialize};

pub type GameId = String;

/// A game an ad can be published for, as listed by the ads service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
}

impl Game {
    pub fn new(id: impl Into<GameId>, title: impl Into<String>) -> Self {
        Game {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Identifiable for Game {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for Game {
    fn name(&self) -> &str {
        &self.title
    }
}
