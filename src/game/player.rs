use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player.
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Convert player to cell type.
    pub fn cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Get player name for display.
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

impl std::str::FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Player::Red),
            "yellow" => Ok(Player::Yellow),
            other => Err(format!("unknown player '{other}', expected 'red' or 'yellow'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_player_alternates() {
        assert_eq!(Player::Red.other(), Player::Yellow);
        assert_eq!(Player::Yellow.other(), Player::Red);
    }

    #[test]
    fn player_cell_and_name() {
        assert_eq!(Player::Red.cell(), Cell::Red);
        assert_eq!(Player::Yellow.cell(), Cell::Yellow);
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Yellow.name(), "Yellow");
    }

    #[test]
    fn player_parses_from_str() {
        assert_eq!("red".parse::<Player>(), Ok(Player::Red));
        assert_eq!("Yellow".parse::<Player>(), Ok(Player::Yellow));
        assert!("green".parse::<Player>().is_err());
    }
}
