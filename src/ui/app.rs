use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::AlgorithmKind;
use crate::config::{MatchConfig, PlayerConfig};
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crate::players::{Agent, SearchAgent};

pub struct App {
    config: MatchConfig,
    game_state: GameState,
    red: Option<SearchAgent>,
    yellow: Option<SearchAgent>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: MatchConfig) -> Self {
        let game_state = config.initial_state();
        let red = Self::build_agent(config.red);
        let yellow = Self::build_agent(config.yellow);
        App {
            selected_column: config.cols / 2,
            config,
            game_state,
            red,
            yellow,
            should_quit: false,
            message: None,
        }
    }

    fn build_agent(player: PlayerConfig) -> Option<SearchAgent> {
        match player {
            PlayerConfig::Human => None,
            PlayerConfig::Ai { algorithm, depth } => {
                Some(SearchAgent::from_kind(algorithm, depth))
            }
        }
    }

    /// Main application loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.step_ai();
        }
        Ok(())
    }

    /// Handle keyboard events.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// If the side to move is an AI, let it play one move.
    fn step_ai(&mut self) {
        if self.game_state.is_terminal() {
            return;
        }
        let side = self.game_state.current_player();
        let agent = match side {
            Player::Red => self.red.as_mut(),
            Player::Yellow => self.yellow.as_mut(),
        };
        let Some(agent) = agent else {
            return;
        };

        match agent.select_move(&mut self.game_state) {
            Ok(column) => self.drop_piece(column),
            Err(err) => {
                // A failing strategy gives the side back to the keyboard.
                self.message = Some(format!("{} failed: {err}", side.name()));
                match side {
                    Player::Red => self.red = None,
                    Player::Yellow => self.yellow = None,
                }
            }
        }
    }

    /// Handle key press.
    fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.config.cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.is_human_turn() {
                    self.drop_piece(self.selected_column);
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.config.cols && self.is_human_turn() {
                    self.selected_column = column;
                    self.drop_piece(column);
                }
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('+') => self.adjust_depth(1),
            KeyCode::Char('-') => self.adjust_depth(-1),
            KeyCode::Char('h') => self.assign(Player::Yellow, None),
            KeyCode::Char('n') => self.assign(Player::Yellow, Some(AlgorithmKind::Negamax)),
            KeyCode::Char('s') => self.assign(Player::Yellow, Some(AlgorithmKind::Sss)),
            KeyCode::Char('a') => self.assign(Player::Yellow, Some(AlgorithmKind::Random)),
            KeyCode::Char('H') => self.assign(Player::Red, None),
            KeyCode::Char('N') => self.assign(Player::Red, Some(AlgorithmKind::Negamax)),
            KeyCode::Char('S') => self.assign(Player::Red, Some(AlgorithmKind::Sss)),
            KeyCode::Char('A') => self.assign(Player::Red, Some(AlgorithmKind::Random)),
            _ => {}
        }
    }

    fn is_human_turn(&self) -> bool {
        match self.game_state.current_player() {
            Player::Red => self.red.is_none(),
            Player::Yellow => self.yellow.is_none(),
        }
    }

    fn restart(&mut self) {
        self.game_state = self.config.initial_state();
        self.selected_column = self.config.cols / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Hand a side to the keyboard (`None`) or to a search algorithm.
    fn assign(&mut self, side: Player, algorithm: Option<AlgorithmKind>) {
        let depth = self.depth_of(side);
        let player = match algorithm {
            None => PlayerConfig::Human,
            Some(algorithm) => PlayerConfig::Ai { algorithm, depth },
        };
        match side {
            Player::Red => {
                self.config.red = player;
                self.red = Self::build_agent(player);
            }
            Player::Yellow => {
                self.config.yellow = player;
                self.yellow = Self::build_agent(player);
            }
        }
        self.message = Some(format!("{}: {}", side.name(), player.describe()));
    }

    fn depth_of(&self, side: Player) -> usize {
        let player = match side {
            Player::Red => self.config.red,
            Player::Yellow => self.config.yellow,
        };
        match player {
            PlayerConfig::Ai { depth, .. } => depth,
            PlayerConfig::Human => crate::config::DEFAULT_DEPTH,
        }
    }

    /// Change the depth budget of every AI side.
    fn adjust_depth(&mut self, delta: i32) {
        for side in [Player::Red, Player::Yellow] {
            let player = match side {
                Player::Red => &mut self.config.red,
                Player::Yellow => &mut self.config.yellow,
            };
            if let PlayerConfig::Ai { algorithm, depth } = *player {
                let depth = depth.saturating_add_signed(delta as isize).clamp(1, 12);
                *player = PlayerConfig::Ai { algorithm, depth };
                let rebuilt = Self::build_agent(*player);
                match side {
                    Player::Red => self.red = rebuilt,
                    Player::Yellow => self.yellow = rebuilt,
                }
            }
        }
        self.message = Some(format!(
            "Red: {}   Yellow: {}",
            self.config.red.describe(),
            self.config.yellow.describe()
        ));
    }

    /// Drop the current player's piece.
    fn drop_piece(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move(column) {
            Ok(()) => {
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::EmptyColumn) | Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI.
    fn render(&self, frame: &mut ratatui::Frame) {
        let mode = format!(
            "Red: {}  vs  Yellow: {}",
            self.config.red.describe(),
            self.config.yellow.describe()
        );
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &mode,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
