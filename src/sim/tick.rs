//! Fixed timestep game loop
//!
//! `Game` owns every sim component and advances them deterministically.
//! Frontends feed keystrokes in between ticks and read state back out;
//! nothing here blocks or draws.

use crate::command::{Command, CommandError, PlacementError};
use crate::input::{InputBuffer, InputEvent, Key};
use crate::settings::GameConfig;
use crate::sim::board::Board;
use crate::sim::clock::GameClock;
use crate::sim::collision;
use crate::sim::info::{InfoTable, RunOutcome};
use crate::sim::tower::TowerManager;
use crate::status::StatusLine;
use crate::words::WordBank;

/// One full game run
#[derive(Debug, Clone)]
pub struct Game {
    pub cfg: GameConfig,
    pub clock: GameClock,
    pub board: Board,
    pub towers: TowerManager,
    pub info: InfoTable,
    pub input: InputBuffer,
    pub status: StatusLine,
    paused: bool,
    outcome: Option<RunOutcome>,
    seed: u64,
}

impl Game {
    pub fn new(cfg: GameConfig, bank: WordBank, seed: u64) -> Self {
        log::info!(
            "starting run: difficulty {}, seed {seed}",
            cfg.difficulty.as_str()
        );
        Self {
            board: Board::new(&cfg, bank, seed),
            cfg,
            clock: GameClock::new(),
            towers: TowerManager::new(),
            info: InfoTable::new(),
            input: InputBuffer::new(),
            status: StatusLine::new(),
            paused: false,
            outcome: None,
            seed,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The transient status message, if one is on display
    pub fn status_line(&self) -> Option<&str> {
        self.status.message(self.clock.wall_ticks)
    }

    /// Advance the whole simulation by one tick
    pub fn tick(&mut self) {
        if self.is_over() {
            return;
        }
        self.clock.advance(self.paused);
        let now = self.clock.run_ticks;

        let report = self
            .board
            .update(self.input.text(), self.paused, now, &self.towers, &self.cfg);
        if report.matched {
            self.input.clear_text();
        }

        self.towers.update(self.paused, now, &self.cfg);
        collision::resolve(&mut self.towers, &mut self.board);

        self.info.apply(&report, &self.clock, self.paused);
        if let Some(outcome) = self.info.outcome(&self.cfg) {
            self.outcome = Some(outcome);
            log::info!(
                "run over: {:?}, {} after {:.1}s",
                outcome,
                self.info.summary(),
                self.clock.run_secs()
            );
        }
    }

    /// Feed one keystroke; commands execute on submission
    pub fn handle_key(&mut self, key: Key) {
        if self.is_over() {
            return;
        }
        match self.input.push_key(key) {
            Ok(InputEvent::Submitted(line)) => self.execute_line(&line),
            Ok(InputEvent::None) => {}
            Err(warning) => self.status.set(warning.to_string(), self.clock.wall_ticks),
        }
    }

    fn execute_line(&mut self, line: &str) {
        let result =
            Command::parse(line, self.cfg.lane_count).and_then(|cmd| self.execute(cmd));
        if let Err(err) = result {
            log::debug!("command '{line}' rejected: {err}");
            self.status.set(err.to_string(), self.clock.wall_ticks);
        }
    }

    fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Pause => {
                self.paused = !self.paused;
                Ok(())
            }
            Command::Tower { lane } => Ok(self.place_tower(lane)?),
        }
    }

    /// Buy a tower for the 1-based lane slot
    pub fn place_tower(&mut self, lane: usize) -> Result<(), PlacementError> {
        let now = self.clock.run_ticks;
        let slot = &self.board.lanes[lane - 1];
        let occupied = slot
            .tower()
            .is_some_and(|id| self.towers.is_live(id, now, &self.cfg));
        if occupied {
            return Err(PlacementError::Occupied);
        }
        match self.towers.add_tower(lane, &mut self.info, &self.cfg, now) {
            Some(id) => {
                self.board.lanes[lane - 1].attach_tower(id);
                Ok(())
            }
            None => Err(PlacementError::InsufficientScore),
        }
    }

    /// Fresh run on the same config and word bank
    pub fn reset(&mut self, seed: u64) {
        log::info!("resetting run with seed {seed}");
        self.board.reset(seed);
        self.towers.reset();
        self.info.reset();
        self.clock.reset();
        self.input.reset();
        self.status.clear();
        self.paused = false;
        self.outcome = None;
        self.seed = seed;
    }
}
