use glam::Vec2;

use word_siege::input::Key;
use word_siege::settings::{Difficulty, GameConfig};
use word_siege::sim::{Board, Bullet, Game, RunOutcome, Tower, TowerManager, Word, resolve};
use word_siege::words::WordBank;

/// Preset with the spawner silenced so only hand-placed words move.
fn quiet_cfg(difficulty: Difficulty) -> GameConfig {
    let mut cfg = GameConfig::preset(difficulty);
    cfg.generation_ticks = u64::MAX;
    cfg
}

fn new_game(cfg: GameConfig) -> Game {
    Game::new(cfg, WordBank::builtin(), 1)
}

fn put_word(game: &mut Game, slot: usize, text: &str, x: f32) {
    let pos = Vec2::new(x, game.cfg.lane_y(slot));
    let word = Word::new(text, pos, &game.cfg);
    game.board.lanes[slot].push_word(word);
}

fn type_str(game: &mut Game, s: &str) {
    for c in s.chars() {
        game.handle_key(Key::Char(c));
    }
}

fn submit(game: &mut Game, line: &str) {
    game.handle_key(Key::Char('/'));
    type_str(game, line);
    game.handle_key(Key::Enter);
}

// ── word escape at the boundary ───────────────────────────────────────────────

#[test]
fn word_charges_score_only_past_the_boundary() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy)); // speed 2
    put_word(&mut game, 0, "cat", 0.0);

    for _ in 0..500 {
        game.tick();
    }
    let head_x = game.board.lanes[0].head_word().map(|w| w.pos.x);
    assert_eq!(head_x, Some(1000.0)); // sitting on the line, not yet out
    assert_eq!(game.info.score, 0);

    game.tick();
    assert!(game.board.lanes[0].is_empty());
    assert_eq!(game.info.score, -3);
}

// ── tower placement ───────────────────────────────────────────────────────────

#[test]
fn tower_command_builds_once_per_lane() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    game.info.score = 15;

    submit(&mut game, "tower 3");
    assert_eq!(game.info.score, 5);
    assert_eq!(game.towers.len(), 1);
    assert!(game.board.lanes[2].tower().is_some());

    submit(&mut game, "tower 3");
    assert_eq!(game.info.score, 5); // occupied beats the cost check
    assert_eq!(game.towers.len(), 1);
    assert_eq!(game.status_line(), Some("lane already has a tower"));
}

#[test]
fn tower_needs_the_score_to_cover_it() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    game.info.score = 9;
    submit(&mut game, "tower 1");
    assert_eq!(game.towers.len(), 0);
    assert_eq!(game.info.score, 9);
    assert_eq!(
        game.status_line(),
        Some("not enough score to build a tower")
    );
}

#[test]
fn expired_tower_frees_its_lane() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    game.info.score = 30;
    submit(&mut game, "tower 1");
    assert!(game.board.lanes[0].slot_label().is_none());

    for _ in 0..game.cfg.tower_lifespan_ticks + 1 {
        game.tick();
    }
    assert!(game.board.lanes[0].tower().is_none());
    assert_eq!(game.board.lanes[0].slot_label().as_deref(), Some("(1)"));

    submit(&mut game, "tower 1");
    assert!(game.board.lanes[0].tower().is_some());
}

// ── match and escape on the same tick ─────────────────────────────────────────

#[test]
fn match_and_escape_settle_together() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    put_word(&mut game, 0, "hello", 100.0);
    put_word(&mut game, 1, "wilderness", 1000.0);

    type_str(&mut game, "hello");
    game.tick();

    assert_eq!(game.info.score, 3 - 10);
    assert!(game.board.lanes[0].is_empty());
    assert!(game.board.lanes[1].is_empty());
    assert_eq!(game.input.text(), ""); // consumed by the match
}

#[test]
fn duplicate_words_fall_across_lanes() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    put_word(&mut game, 0, "cat", 100.0);
    put_word(&mut game, 4, "cat", 200.0);

    type_str(&mut game, "cat");
    game.tick();

    assert_eq!(game.info.score, 6);
    assert_eq!(game.board.word_count(), 0);
    assert_eq!(game.input.text(), "");
}

// ── tower fire cadence ────────────────────────────────────────────────────────

#[test]
fn tower_fires_on_its_cooldown() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy)); // cooldown 48
    game.info.score = 20;
    submit(&mut game, "tower 1");

    for _ in 0..47 {
        game.tick();
    }
    assert_eq!(game.towers.towers[0].bullets.len(), 0);
    game.tick(); // tick 48
    assert_eq!(game.towers.towers[0].bullets.len(), 1);

    for _ in 0..47 {
        game.tick();
    }
    assert_eq!(game.towers.towers[0].bullets.len(), 1);
    game.tick(); // tick 96
    assert_eq!(game.towers.towers[0].bullets.len(), 2);
}

// ── bullets shoot down the head word ──────────────────────────────────────────

#[test]
fn non_head_overlap_is_never_resolved() {
    let cfg = quiet_cfg(Difficulty::Easy);
    let mut board = Board::new(&cfg, WordBank::builtin(), 1);
    let y = cfg.lane_y(0);
    board.lanes[0].push_word(Word::new("cat", Vec2::new(700.0, y), &cfg)); // head
    board.lanes[0].push_word(Word::new("fox", Vec2::new(300.0, y), &cfg));

    let mut tower = Tower::new(1, Vec2::new(950.0, y + 7.0), 0);
    tower.bullets.push_back(Bullet {
        pos: Vec2::new(310.0, y + 7.0), // head bullet, over the non-head word
        speed: cfg.bullet_speed,
    });
    tower.bullets.push_back(Bullet {
        pos: Vec2::new(710.0, y + 7.0), // non-head bullet, over the head word
        speed: cfg.bullet_speed,
    });
    let mut towers = TowerManager::new();
    towers.towers.push(tower);

    // only the head pair is compared, and that pair does not overlap
    assert_eq!(resolve(&mut towers, &mut board), 0);
    assert_eq!(board.lanes[0].word_count(), 2);
    assert_eq!(towers.towers[0].bullets.len(), 2);
}

#[test]
fn bullet_removes_word_without_scoring() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    game.info.score = 20;
    submit(&mut game, "tower 1");
    assert_eq!(game.info.score, 10);
    put_word(&mut game, 0, "constellation", 300.0);

    for _ in 0..130 {
        game.tick();
    }
    assert_eq!(game.board.word_count(), 0); // shot down mid-board
    assert_eq!(game.info.score, 10); // no points either way
}

// ── pause ─────────────────────────────────────────────────────────────────────

#[test]
fn pause_freezes_movement_but_not_the_ledger() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    put_word(&mut game, 0, "hello", 100.0);
    type_str(&mut game, "hello");
    game.tick();
    assert_eq!(game.info.score, 3);
    assert!((game.info.wpm - 1440.0).abs() < 1e-3); // 1 word in 1/24 s

    submit(&mut game, "pause");
    assert!(game.paused());
    put_word(&mut game, 1, "fox", 500.0);
    put_word(&mut game, 2, "cat", 1000.0); // already on the line
    for _ in 0..10 {
        game.tick();
    }
    assert_eq!(game.clock.run_ticks, 1); // run clock frozen
    let frozen_x = game.board.lanes[1].head_word().map(|w| w.pos.x);
    assert_eq!(frozen_x, Some(500.0)); // no movement
    assert_eq!(game.info.score, 0); // escape still charged
    assert!(game.board.lanes[2].is_empty());
    assert!((game.info.wpm - 1440.0).abs() < 1e-3); // rate frozen too

    submit(&mut game, "pause");
    game.tick();
    assert_eq!(game.clock.run_ticks, 2);
    assert!((game.info.wpm - 720.0).abs() < 1e-3); // recomputed on resume
}

// ── command errors ────────────────────────────────────────────────────────────

#[test]
fn bad_commands_only_set_the_status_line() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));

    submit(&mut game, "warp");
    assert_eq!(game.status_line(), Some("unknown command 'warp'"));
    assert!(!game.paused());

    submit(&mut game, "pause now");
    assert_eq!(game.status_line(), Some("invalid parameter for 'pause'"));
    assert!(!game.paused());

    submit(&mut game, "tower zero");
    assert_eq!(game.status_line(), Some("invalid parameter for 'tower'"));
    assert_eq!(game.towers.len(), 0);
}

#[test]
fn status_line_expires() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    submit(&mut game, "warp");
    assert!(game.status_line().is_some());
    for _ in 0..120 {
        game.tick();
    }
    assert_eq!(game.status_line(), None);
}

#[test]
fn overlong_typing_warns_and_drops() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    type_str(&mut game, &"a".repeat(24));
    assert_eq!(game.status_line(), None);
    game.handle_key(Key::Char('a'));
    assert_eq!(
        game.status_line(),
        Some("input is full, you cannot type more")
    );
    assert_eq!(game.input.text().len(), 24);
}

// ── run outcomes ──────────────────────────────────────────────────────────────

#[test]
fn crossing_the_ceiling_wins() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy)); // ceiling 50
    game.info.score = 48;
    put_word(&mut game, 0, "cat", 100.0);
    type_str(&mut game, "cat");
    game.tick();

    assert_eq!(game.outcome(), Some(RunOutcome::Victory));
    assert!(game.is_over());
    let wall = game.clock.wall_ticks;
    game.tick(); // frozen once over
    assert_eq!(game.clock.wall_ticks, wall);
}

#[test]
fn falling_to_the_floor_loses() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy)); // floor -20
    game.info.score = -18;
    put_word(&mut game, 0, "cat", 1000.0);
    game.tick();

    assert_eq!(game.info.score, -21);
    assert_eq!(game.outcome(), Some(RunOutcome::Defeat));
}

// ── reset ─────────────────────────────────────────────────────────────────────

#[test]
fn reset_gives_a_clean_board() {
    let mut game = new_game(quiet_cfg(Difficulty::Easy));
    game.info.score = 20;
    submit(&mut game, "tower 2");
    put_word(&mut game, 0, "stone", 400.0);
    type_str(&mut game, "sto");
    for _ in 0..10 {
        game.tick();
    }

    game.reset(9);
    assert_eq!(game.seed(), 9);
    assert_eq!(game.clock.wall_ticks, 0);
    assert_eq!(game.info.score, 0);
    assert_eq!(game.info.wpm, 0.0);
    assert_eq!(game.board.word_count(), 0);
    assert!(game.towers.is_empty());
    assert_eq!(game.input.text(), "");
    assert_eq!(game.status_line(), None);
    assert!(!game.paused());
    assert_eq!(game.outcome(), None);
}
