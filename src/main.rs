//! Word Siege entry point
//!
//! Headless demo driver: an autopilot types at the board for a few
//! runs and the results land on a session leaderboard. Frontends embed
//! `word_siege::sim::Game` the same way this loop does.

use std::collections::VecDeque;
use std::env;
use std::process;

use word_siege::export;
use word_siege::highscores::{HighScoreEntry, HighScores};
use word_siege::input::{InputMode, Key};
use word_siege::settings::{Difficulty, GameConfig};
use word_siege::sim::Game;
use word_siege::words::WordBank;

/// Demo runs played back to back
const DEMO_RUNS: u64 = 3;
/// Hard stop per run, in ticks
const DEMO_RUN_CAP: u64 = 600 * word_siege::consts::TICK_RATE as u64;
/// Autopilot stops buying towers past this count
const DEMO_TOWER_CAP: usize = 3;
/// Wall tick each run's scripted pause goes out on
const DEMO_PAUSE_AT: u64 = 5 * word_siege::consts::TICK_RATE as u64;
/// Wall tick the matching resume goes out on
const DEMO_RESUME_AT: u64 = 8 * word_siege::consts::TICK_RATE as u64;

/// Scripted player: one keystroke per tick, aimed at the most
/// advanced word on the board. Once per run it pauses, sits out a
/// few seconds, and resumes.
struct Autopilot {
    keys: VecDeque<Key>,
    /// Wall tick to send `/pause` at
    pause_at: u64,
    /// Wall tick to send the resuming `/pause` at
    resume_at: u64,
    pause_sent: bool,
    resume_sent: bool,
}

impl Autopilot {
    fn new(pause_at: u64, resume_at: u64) -> Self {
        Self {
            keys: VecDeque::new(),
            pause_at,
            resume_at,
            pause_sent: false,
            resume_sent: false,
        }
    }

    fn next_key(&mut self, game: &Game) -> Option<Key> {
        let text = game.input.text();

        // a dead target leaves stale text behind; erase it
        if !text.is_empty() && game.input.mode() == InputMode::Typing {
            let still_live = game
                .board
                .lanes
                .iter()
                .flat_map(|lane| lane.words())
                .any(|word| word.text.starts_with(text));
            if !still_live {
                self.keys.clear();
                return Some(Key::Backspace);
            }
        }

        if let Some(key) = self.keys.pop_front() {
            return Some(key);
        }
        if !text.is_empty() {
            return None;
        }

        let now = game.clock.wall_ticks;
        if !self.pause_sent && now >= self.pause_at {
            self.pause_sent = true;
            self.enqueue_command("pause");
            return self.keys.pop_front();
        }
        if game.paused() {
            if !self.resume_sent && now >= self.resume_at {
                self.resume_sent = true;
                self.enqueue_command("pause");
                return self.keys.pop_front();
            }
            return None;
        }

        let vacant_lane = game
            .board
            .lanes
            .iter()
            .find(|lane| lane.tower().is_none())
            .map(|lane| lane.index);
        if game.info.score >= game.cfg.tower_cost && game.towers.len() < DEMO_TOWER_CAP {
            if let Some(lane) = vacant_lane {
                self.enqueue_command(&format!("tower {lane}"));
                return self.keys.pop_front();
            }
        }

        // chase the word closest to escaping
        let target = game
            .board
            .lanes
            .iter()
            .flat_map(|lane| lane.words())
            .max_by(|a, b| a.pos.x.total_cmp(&b.pos.x))?;
        for c in target.text.chars() {
            self.keys.push_back(Key::Char(c));
        }
        self.keys.pop_front()
    }

    fn enqueue_command(&mut self, line: &str) {
        self.keys.push_back(Key::Char('/'));
        for c in line.chars() {
            self.keys.push_back(Key::Char(c));
        }
        self.keys.push_back(Key::Enter);
    }
}

fn usage() -> ! {
    eprintln!("usage: word-siege [easy|medium|hard] [seed]");
    process::exit(1);
}

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let difficulty = match args.next() {
        Some(arg) => Difficulty::from_str(&arg).unwrap_or_else(|| usage()),
        None => Difficulty::default(),
    };
    let seed: u64 = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| usage()),
        None => 0xC0FFEE,
    };

    log::info!(
        "word-siege demo starting: difficulty {}, base seed {seed}",
        difficulty.as_str()
    );

    let cfg = GameConfig::preset(difficulty);
    let mut game = Game::new(cfg, WordBank::default(), seed);
    let mut scores = HighScores::new();
    let mut last_history = None;

    for run in 0..DEMO_RUNS {
        if run > 0 {
            game.reset(seed + run);
        }
        println!(
            "run {} of {DEMO_RUNS} (difficulty {}, seed {})",
            run + 1,
            game.cfg.difficulty.as_str(),
            game.seed()
        );

        let mut pilot = Autopilot::new(DEMO_PAUSE_AT, DEMO_RESUME_AT);
        while !game.is_over() && game.clock.wall_ticks < DEMO_RUN_CAP {
            if let Some(key) = pilot.next_key(&game) {
                game.handle_key(key);
            }
            game.tick();
        }

        match game.outcome() {
            Some(outcome) => {
                println!(
                    "  {:?} after {:.1}s, {}",
                    outcome,
                    game.clock.run_secs(),
                    game.info.summary()
                );
                scores.add_entry(HighScoreEntry {
                    score: game.info.score,
                    wpm: game.info.wpm,
                    difficulty: game.cfg.difficulty,
                    elapsed_secs: game.clock.run_secs(),
                    outcome,
                });
            }
            None => println!("  no result inside the demo window"),
        }
        last_history = Some(game.info.history.clone());
    }

    if scores.is_empty() {
        println!("\nno runs made the leaderboard");
    } else {
        println!("\nleaderboard:");
        for (rank, entry) in scores.entries.iter().enumerate() {
            println!(
                "  {}. score {} ({:?}, {}, {:.2} wpm, {:.1}s)",
                rank + 1,
                entry.score,
                entry.outcome,
                entry.difficulty.as_str(),
                entry.wpm,
                entry.elapsed_secs
            );
        }
    }

    if let Some(history) = last_history {
        match export::history_json(&history) {
            Ok(json) => println!("\nlast run history: {json}"),
            Err(err) => log::error!("history export failed: {err}"),
        }
    }
}
