//! The game loop: roster, dice, rotation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::{presets, Board};
use crate::core::{
    CellEffect, ConfigurationError, Dice, DiceSource, EngineConfig, EngineError, GameConfig,
    NoMovePolicy, Player, PlayerId, StartedPolicy, TurnState,
};
use crate::rules::{MoveOutcome, RuleChain, TurnEngine};

/// What happened on one roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Roll count for the whole game, starting at 1.
    pub roll_number: u32,
    pub player: PlayerId,
    pub roll: u8,
    /// `None` when the roll overshot under exact landing and was forfeited.
    pub outcome: Option<MoveOutcome>,
    /// Position after the roll.
    pub position: u32,
    /// Cell effects applied this roll, in order.
    pub effects: Vec<CellEffect>,
    /// Who rolls next.
    pub next: PlayerId,
}

impl TurnReport {
    /// Whether the same player rolls again.
    #[must_use]
    pub fn rolls_again(&self) -> bool {
        self.next == self.player && !matches!(self.outcome, Some(MoveOutcome::Won))
    }
}

/// Final account of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// `None` if the roll cap was hit first.
    pub winner: Option<PlayerId>,
    pub rolls: u32,
    /// Final position of every player, in roster order.
    pub positions: Vec<(PlayerId, u32)>,
}

/// A running game.
///
/// Owns the roster and the rotation index; the engine owns positions.
#[derive(Clone, Debug)]
pub struct Game<D> {
    engine: TurnEngine,
    players: Vec<Player>,
    current: usize,
    dice: D,
    config: GameConfig,
    rolls: u32,
    winner: Option<PlayerId>,
}

impl<D: DiceSource> Game<D> {
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// The player who rolls next.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> u32 {
        self.engine.position_of(id)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    #[must_use]
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Roll for the current player, apply the move, and rotate.
    ///
    /// An exact-landing overshoot is forfeited: the report carries no
    /// outcome and play passes on. Any other engine error is returned
    /// unchanged, as is a call after the game has been won.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player().id()))]
    pub fn play_turn(&mut self) -> Result<TurnReport, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::InvalidState("game is already over"));
        }

        let roll = self.dice.roll();
        let mark = self.engine.state().history().len();
        let player = &mut self.players[self.current];
        let id = player.id();

        let outcome = match self.engine.execute_move(roll, player) {
            Ok(outcome) => Some(outcome),
            Err(err @ EngineError::OverflowPolicyViolation { .. }) => {
                warn!(%err, "roll forfeited");
                None
            }
            Err(err) => return Err(err),
        };
        self.rolls += 1;

        let effects: Vec<_> = self
            .engine
            .state()
            .events_since(mark)
            .iter()
            .map(|e| e.effect)
            .collect();

        match outcome {
            Some(MoveOutcome::Won) => {
                self.winner = Some(id);
                info!(player = %id, rolls = self.rolls, "game won");
            }
            Some(MoveOutcome::Started) if self.config.on_started == StartedPolicy::RollAgain => {}
            Some(MoveOutcome::NoMove) if self.config.on_no_move == NoMovePolicy::RollAgain => {}
            _ => self.rotate(),
        }

        let report = TurnReport {
            roll_number: self.rolls,
            player: id,
            roll,
            outcome,
            position: self.engine.position_of(id),
            effects,
            next: self.players[self.current].id(),
        };
        debug!(roll, outcome = ?report.outcome, position = report.position, "turn played");
        Ok(report)
    }

    /// Play until someone wins or `max_rolls` is reached.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<GameSummary, EngineError> {
        while self.winner.is_none() {
            if self.config.max_rolls != 0 && self.rolls >= self.config.max_rolls {
                warn!(max_rolls = self.config.max_rolls, "roll cap reached without a winner");
                break;
            }
            self.play_turn()?;
        }
        Ok(self.summary())
    }

    /// Snapshot of the game so far.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.winner,
            rolls: self.rolls,
            positions: self
                .players
                .iter()
                .map(|p| (p.id(), self.engine.position_of(p.id())))
                .collect(),
        }
    }

    fn rotate(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }
}

/// Builder for [`Game`].
///
/// ```
/// use snakes_ladders::game::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .player("Ada")
///     .player("Grace")
///     .build_seeded(42)
///     .unwrap();
///
/// let summary = game.run().unwrap();
/// assert!(summary.winner.is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    players: Vec<Player>,
    board: Option<Board>,
    rules: Option<RuleChain>,
    engine_config: EngineConfig,
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player with the next free id.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        let id = PlayerId::new(self.players.len().min(u8::MAX as usize) as u8);
        self.players.push(Player::new(id, name));
        self
    }

    /// Add `count` players named after their ids.
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        for _ in 0..count {
            let name = format!("Player {}", self.players.len());
            self = self.player(name);
        }
        self
    }

    /// Add an existing player as is.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Board to play on. Defaults to the classic preset.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Rule chain. Defaults to [`RuleChain::classic`].
    #[must_use]
    pub fn rules(mut self, rules: RuleChain) -> Self {
        self.rules = Some(rules);
        self
    }

    #[must_use]
    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build with a seeded die of `config.dice_sides` faces.
    pub fn build_seeded(self, seed: u64) -> Result<Game<Dice>, ConfigurationError> {
        let dice = Dice::new(self.config.dice_sides, seed)?;
        self.build(dice)
    }

    /// Build with any dice source.
    pub fn build<D: DiceSource>(self, dice: D) -> Result<Game<D>, ConfigurationError> {
        self.config.validate()?;

        if self.players.is_empty() {
            return Err(ConfigurationError::NoPlayers);
        }
        if self.players.len() > u8::MAX as usize {
            return Err(ConfigurationError::TooManyPlayers(self.players.len()));
        }
        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|p| p.id() == player.id()) {
                return Err(ConfigurationError::DuplicatePlayer(player.id()));
            }
        }

        let board = match self.board {
            Some(board) => board,
            None => presets::classic()?,
        };
        let rules = self.rules.unwrap_or_else(RuleChain::classic);
        let engine = TurnEngine::new(board, rules, self.engine_config)?;

        let face = self.engine_config.start_face;
        let needs_start = self.players.iter().any(|p| p.turn_state() == TurnState::NotStarted);
        if needs_start && !dice.can_roll(face) {
            return Err(ConfigurationError::UnreachableStartFace {
                face,
                sides: dice.sides(),
            });
        }

        debug!(players = self.players.len(), "game built");
        Ok(Game {
            engine,
            players: self.players,
            current: 0,
            dice,
            config: self.config,
            rolls: 0,
            winner: None,
        })
    }
}
