//! State machine for the falling-button arcade game.
//!
//! Clock and randomness enter through action payloads (timestamps and
//! pre-drawn uniform rolls), so the reducer itself is deterministic. Only
//! `GameStats` is ever persisted; buttons and particles live for one round.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

pub const MISS_LIMIT: u32 = 5;
pub const COMBO_WINDOW_MS: i64 = 2_000;
pub const PERFECT_BONUS: u32 = 100;
pub const STREAK_BONUS_PER_ROUND: u32 = 10;

const ROTATION_STEP: f64 = 0.5;
const SPAWN_Y: f64 = -80.0;
const SPAWN_GUTTER: f64 = 70.0;
const DESPAWN_MARGIN: f64 = 100.0;
const PARTICLE_RISE: f64 = 2.0;
const PARTICLE_EXPIRY_Y: f64 = -50.0;
const PARTICLES_PER_HIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyTier {
    pub name: &'static str,
    /// Vertical units per rendered frame.
    pub fall_speed: f64,
    pub spawn_interval_ms: u32,
    /// Probability that a spawned button is an acorn rather than a temptation.
    pub acorn_ratio: f64,
}

pub static DIFFICULTY: [DifficultyTier; 5] = [
    DifficultyTier { name: "Apprentice", fall_speed: 3.0, spawn_interval_ms: 2000, acorn_ratio: 0.7 },
    DifficultyTier { name: "Novice", fall_speed: 4.0, spawn_interval_ms: 1700, acorn_ratio: 0.65 },
    DifficultyTier { name: "Warrior", fall_speed: 5.0, spawn_interval_ms: 1400, acorn_ratio: 0.6 },
    DifficultyTier { name: "Master", fall_speed: 6.0, spawn_interval_ms: 1200, acorn_ratio: 0.55 },
    DifficultyTier { name: "Grandmaster", fall_speed: 7.0, spawn_interval_ms: 1000, acorn_ratio: 0.5 },
];

/// Persisted aggregate stats; survives across rounds and reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub score: u64,
    pub level: u32,
    /// Consecutive perfect rounds.
    pub streak: u32,
    pub perfect_rounds: u32,
    pub total_resisted: u32,
    pub xp: u32,
    /// Difficulty tier, 1-based, capped at the table length.
    pub game_level: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            streak: 0,
            perfect_rounds: 0,
            total_resisted: 0,
            xp: 0,
            game_level: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Acorn,
    Temptation,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameButton {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub value: u32,
    pub kind: ButtonKind,
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreParticle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    RoundComplete,
    GameOver,
}

/// Uniform `[0, 1)` draws taken at the trigger site so the spawn policy
/// itself stays deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRolls {
    pub kind: f64,
    pub x: f64,
    pub value: f64,
    pub rotation: f64,
}

impl SpawnRolls {
    pub fn random() -> Self {
        Self {
            kind: js_sys::Math::random(),
            x: js_sys::Math::random(),
            value: js_sys::Math::random(),
            rotation: js_sys::Math::random(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub stats: GameStats,
    pub phase: Phase,
    pub buttons: Vec<GameButton>,
    pub particles: Vec<ScoreParticle>,
    pub round_score: u32,
    pub missed: u32,
    pub combo: u32,
    pub last_combo_ms: i64,
    pub area_width: f64,
    pub area_height: f64,
    next_button_id: u64,
    next_particle_id: u64,
}

impl GameState {
    pub fn with_stats(stats: GameStats) -> Self {
        Self {
            stats,
            phase: Phase::Idle,
            buttons: Vec::new(),
            particles: Vec::new(),
            round_score: 0,
            missed: 0,
            combo: 0,
            last_combo_ms: 0,
            area_width: 800.0,
            area_height: 500.0,
            next_button_id: 0,
            next_particle_id: 0,
        }
    }

    pub fn tier(&self) -> &'static DifficultyTier {
        let idx = (self.stats.game_level.max(1) as usize - 1).min(DIFFICULTY.len() - 1);
        &DIFFICULTY[idx]
    }

    pub fn level_progress_percent(&self) -> f64 {
        f64::from(self.stats.xp % 100)
    }

    /// Bank the current round into the aggregate stats. Runs on every exit
    /// from `Playing`: manual finish, five misses, or a clicked temptation.
    fn settle(&mut self) {
        let perfect = self.missed == 0;
        let perfect_bonus = if perfect && self.round_score > 0 { PERFECT_BONUS } else { 0 };
        let streak_bonus = self.stats.streak * STREAK_BONUS_PER_ROUND;
        let total = self.round_score + perfect_bonus + streak_bonus;
        self.stats.score += u64::from(total);
        self.stats.xp += total / 10;
        self.stats.level = self.stats.xp / 100 + 1;
        self.stats.game_level = (self.stats.xp / 200 + 1).min(DIFFICULTY.len() as u32);
        if perfect {
            self.stats.streak += 1;
            self.stats.perfect_rounds += 1;
        } else {
            self.stats.streak = 0;
        }
    }

    fn clear_field(&mut self) {
        self.buttons.clear();
        self.particles.clear();
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    StartRound { now_ms: i64 },
    Spawn { rolls: SpawnRolls },
    Frame { now_ms: i64 },
    Click { id: u64, now_ms: i64 },
    /// Manual round end from the in-game button.
    FinishRound,
    /// Dismiss the round-complete or game-over overlay.
    CloseRound,
    Resize { width: f64, height: f64 },
    ResetStats,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            StartRound { now_ms } => {
                new.phase = Phase::Playing;
                new.clear_field();
                new.round_score = 0;
                new.missed = 0;
                new.combo = 0;
                new.last_combo_ms = now_ms;
            }
            Spawn { rolls } => {
                if new.phase != Phase::Playing {
                    return self;
                }
                let tier = new.tier();
                let kind = if rolls.kind < tier.acorn_ratio {
                    ButtonKind::Acorn
                } else {
                    ButtonKind::Temptation
                };
                let value = match kind {
                    ButtonKind::Acorn => (rolls.value * 40.0) as u32 + 10,
                    ButtonKind::Temptation => (rolls.value * 80.0) as u32 + 50,
                };
                let span = (new.area_width - 2.0 * SPAWN_GUTTER).max(0.0);
                new.buttons.push(GameButton {
                    id: new.next_button_id,
                    x: rolls.x * span + SPAWN_GUTTER,
                    y: SPAWN_Y,
                    value,
                    kind,
                    rotation: rolls.rotation * 360.0,
                });
                new.next_button_id += 1;
            }
            Frame { now_ms } => {
                if new.phase != Phase::Playing {
                    return self;
                }
                let fall = new.tier().fall_speed;
                let floor = new.area_height + DESPAWN_MARGIN;
                let mut missed = new.missed;
                new.buttons.retain_mut(|b| {
                    b.y += fall;
                    b.rotation += ROTATION_STEP;
                    if b.y > floor {
                        if b.kind == ButtonKind::Acorn {
                            missed += 1;
                        }
                        return false;
                    }
                    true
                });
                new.missed = missed;
                new.particles.retain_mut(|p| {
                    p.y -= PARTICLE_RISE;
                    p.y > PARTICLE_EXPIRY_Y
                });
                if new.combo > 0 && now_ms - new.last_combo_ms >= COMBO_WINDOW_MS {
                    new.combo = 0;
                }
                if new.missed >= MISS_LIMIT {
                    new.settle();
                    new.phase = Phase::GameOver;
                    new.clear_field();
                }
            }
            Click { id, now_ms } => {
                if new.phase != Phase::Playing {
                    return self;
                }
                let Some(pos) = new.buttons.iter().position(|b| b.id == id) else {
                    return self;
                };
                let button = new.buttons.remove(pos);
                match button.kind {
                    ButtonKind::Temptation => {
                        new.settle();
                        new.phase = Phase::GameOver;
                        new.clear_field();
                    }
                    ButtonKind::Acorn => {
                        new.combo = if now_ms - new.last_combo_ms < COMBO_WINDOW_MS {
                            new.combo + 1
                        } else {
                            1
                        };
                        new.last_combo_ms = now_ms;
                        let bonus = if new.combo > 1 { new.combo * 5 } else { 0 };
                        let points = button.value + bonus;
                        new.round_score += points;
                        new.stats.total_resisted += 1;
                        for _ in 0..PARTICLES_PER_HIT {
                            new.particles.push(ScoreParticle {
                                id: new.next_particle_id,
                                x: button.x,
                                y: button.y,
                                value: points,
                            });
                            new.next_particle_id += 1;
                        }
                    }
                }
            }
            FinishRound => {
                if new.phase != Phase::Playing {
                    return self;
                }
                new.settle();
                new.phase = Phase::RoundComplete;
                new.clear_field();
            }
            CloseRound => {
                if new.phase != Phase::RoundComplete && new.phase != Phase::GameOver {
                    return self;
                }
                new.phase = Phase::Idle;
            }
            Resize { width, height } => {
                new.area_width = width;
                new.area_height = height;
            }
            ResetStats => {
                new.stats = GameStats::default();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_760_000_000_000;

    fn dispatch(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn playing() -> GameState {
        dispatch(
            GameState::with_stats(GameStats::default()),
            GameAction::StartRound { now_ms: T0 },
        )
    }

    fn acorn_rolls(value_roll: f64) -> SpawnRolls {
        SpawnRolls { kind: 0.0, x: 0.5, value: value_roll, rotation: 0.0 }
    }

    fn temptation_rolls() -> SpawnRolls {
        SpawnRolls { kind: 0.99, x: 0.5, value: 0.0, rotation: 0.0 }
    }

    fn run_frames(mut state: GameState, frames: usize, now_ms: i64) -> GameState {
        for _ in 0..frames {
            state = dispatch(state, GameAction::Frame { now_ms });
            if state.phase != Phase::Playing {
                break;
            }
        }
        state
    }

    #[test]
    fn spawn_policy_kind_and_value_ranges() {
        let s = playing();
        // Tier 1 acorn ratio is 0.7: rolls below are acorns, at or above are traps.
        let acorn = dispatch(s.clone(), GameAction::Spawn { rolls: SpawnRolls { kind: 0.69, x: 0.0, value: 0.0, rotation: 0.0 } });
        assert_eq!(acorn.buttons[0].kind, ButtonKind::Acorn);
        assert_eq!(acorn.buttons[0].value, 10);
        assert_eq!(acorn.buttons[0].y, -80.0);

        let trap = dispatch(s.clone(), GameAction::Spawn { rolls: SpawnRolls { kind: 0.7, x: 1.0 - f64::EPSILON, value: 0.999_999, rotation: 0.0 } });
        assert_eq!(trap.buttons[0].kind, ButtonKind::Temptation);
        assert_eq!(trap.buttons[0].value, 129);
        assert!(trap.buttons[0].x <= trap.area_width - 70.0);

        let max_acorn = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.999_999) });
        assert_eq!(max_acorn.buttons[0].value, 49);
    }

    #[test]
    fn spawn_outside_a_round_is_ignored() {
        let idle = GameState::with_stats(GameStats::default());
        let s = dispatch(idle.clone(), GameAction::Spawn { rolls: acorn_rolls(0.0) });
        assert_eq!(s, idle);
    }

    #[test]
    fn temptation_click_always_ends_the_round() {
        let mut s = playing();
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        let acorn_id = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id: acorn_id, now_ms: T0 + 100 });
        assert_eq!(s.round_score, 20);

        s = dispatch(s, GameAction::Spawn { rolls: temptation_rolls() });
        let trap_id = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id: trap_id, now_ms: T0 + 200 });
        assert_eq!(s.phase, Phase::GameOver);
        assert!(s.buttons.is_empty());
    }

    #[test]
    fn five_missed_acorns_end_the_round_four_do_not() {
        let mut s = playing();
        for _ in 0..4 {
            s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.5) });
        }
        s = run_frames(s, 300, T0);
        assert_eq!(s.missed, 4);
        assert_eq!(s.phase, Phase::Playing);

        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.5) });
        s = run_frames(s, 300, T0);
        assert_eq!(s.phase, Phase::GameOver);
    }

    #[test]
    fn dropped_temptations_carry_no_penalty() {
        let mut s = playing();
        for _ in 0..6 {
            s = dispatch(s, GameAction::Spawn { rolls: temptation_rolls() });
        }
        s = run_frames(s, 300, T0);
        assert_eq!(s.missed, 0);
        assert_eq!(s.phase, Phase::Playing);
        assert!(s.buttons.is_empty());
    }

    #[test]
    fn combo_builds_within_the_window_and_resets_after() {
        let mut s = playing();
        for _ in 0..3 {
            s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        }
        let ids: Vec<u64> = s.buttons.iter().map(|b| b.id).collect();
        s = dispatch(s, GameAction::Click { id: ids[0], now_ms: T0 + 100 });
        assert_eq!(s.combo, 1);
        assert_eq!(s.round_score, 20);

        s = dispatch(s, GameAction::Click { id: ids[1], now_ms: T0 + 1_500 });
        assert_eq!(s.combo, 2);
        assert_eq!(s.round_score, 20 + 20 + 10);

        // Past the two-second window the combo falls back to one.
        s = dispatch(s, GameAction::Click { id: ids[2], now_ms: T0 + 4_000 });
        assert_eq!(s.combo, 1);
        assert_eq!(s.round_score, 50 + 20);
        assert_eq!(s.stats.total_resisted, 3);
        assert_eq!(s.particles.len(), 9);
    }

    #[test]
    fn idle_combo_expires_between_frames() {
        let mut s = playing();
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        let id = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id, now_ms: T0 + 100 });
        assert_eq!(s.combo, 1);
        s = dispatch(s, GameAction::Frame { now_ms: T0 + 2_200 });
        assert_eq!(s.combo, 0);
    }

    #[test]
    fn perfect_round_earns_exactly_one_hundred_bonus() {
        let mut s = playing();
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        let id = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id, now_ms: T0 + 100 });
        s = dispatch(s, GameAction::FinishRound);
        assert_eq!(s.phase, Phase::RoundComplete);
        assert_eq!(s.stats.score, 120);
        assert_eq!(s.stats.xp, 12);
        assert_eq!(s.stats.streak, 1);
        assert_eq!(s.stats.perfect_rounds, 1);
    }

    #[test]
    fn missed_round_earns_no_perfect_bonus() {
        let mut s = playing();
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        let id = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id, now_ms: T0 + 100 });
        // Let a second acorn fall through.
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        s = run_frames(s, 300, T0 + 200);
        assert_eq!(s.missed, 1);
        s = dispatch(s, GameAction::FinishRound);
        // 20 points, no bonus: floor(20 / 10) = 2 XP.
        assert_eq!(s.stats.score, 20);
        assert_eq!(s.stats.xp, 2);
        assert_eq!(s.stats.streak, 0);
        assert_eq!(s.stats.perfect_rounds, 0);
    }

    #[test]
    fn streak_bonus_scales_with_prior_perfect_rounds() {
        let stats = GameStats { streak: 3, ..GameStats::default() };
        let mut s = dispatch(GameState::with_stats(stats), GameAction::StartRound { now_ms: T0 });
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        let id = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id, now_ms: T0 + 100 });
        s = dispatch(s, GameAction::FinishRound);
        // 20 + 100 perfect + 30 streak.
        assert_eq!(s.stats.score, 150);
        assert_eq!(s.stats.streak, 4);
    }

    #[test]
    fn game_over_still_banks_the_round() {
        let mut s = playing();
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.25) });
        let id = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id, now_ms: T0 + 100 });
        s = dispatch(s, GameAction::Spawn { rolls: temptation_rolls() });
        let trap = s.buttons[0].id;
        s = dispatch(s, GameAction::Click { id: trap, now_ms: T0 + 200 });
        assert_eq!(s.phase, Phase::GameOver);
        assert!(s.stats.score >= 20);
        assert_eq!(s.stats.xp, s.stats.score as u32 / 10);
    }

    #[test]
    fn level_and_tier_derive_from_xp() {
        let stats = GameStats { xp: 190, ..GameStats::default() };
        let mut s = dispatch(GameState::with_stats(stats), GameAction::StartRound { now_ms: T0 });
        s.round_score = 110;
        s = dispatch(s, GameAction::FinishRound);
        assert_eq!(s.stats.xp, 211);
        assert_eq!(s.stats.level, 3);
        assert_eq!(s.stats.game_level, 2);

        let maxed = GameStats { xp: 5_000, ..GameStats::default() };
        let mut m = dispatch(GameState::with_stats(maxed), GameAction::StartRound { now_ms: T0 });
        m = dispatch(m, GameAction::FinishRound);
        assert_eq!(m.stats.game_level, DIFFICULTY.len() as u32);
        assert_eq!(m.tier().name, "Grandmaster");
    }

    #[test]
    fn clicks_outside_a_round_are_ignored() {
        let idle = GameState::with_stats(GameStats::default());
        let s = dispatch(idle.clone(), GameAction::Click { id: 0, now_ms: T0 });
        assert_eq!(s, idle);

        let mut over = playing();
        over = dispatch(over, GameAction::Spawn { rolls: temptation_rolls() });
        let trap = over.buttons[0].id;
        over = dispatch(over, GameAction::Click { id: trap, now_ms: T0 });
        let frozen = dispatch(over.clone(), GameAction::Frame { now_ms: T0 + 16 });
        assert_eq!(frozen, over);
    }

    #[test]
    fn unknown_button_ids_are_ignored() {
        let s = playing();
        let clicked = dispatch(s.clone(), GameAction::Click { id: 999, now_ms: T0 });
        assert_eq!(clicked, s);
    }

    #[test]
    fn reset_stats_leaves_round_state_alone() {
        let stats = GameStats { score: 1_000, xp: 350, game_level: 2, ..GameStats::default() };
        let mut s = dispatch(GameState::with_stats(stats), GameAction::StartRound { now_ms: T0 });
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.5) });
        let reset = dispatch(s.clone(), GameAction::ResetStats);
        assert_eq!(reset.stats, GameStats::default());
        assert_eq!(reset.buttons, s.buttons);
        assert_eq!(reset.phase, Phase::Playing);
    }

    #[test]
    fn close_round_returns_to_idle() {
        let mut s = playing();
        s = dispatch(s, GameAction::FinishRound);
        s = dispatch(s, GameAction::CloseRound);
        assert_eq!(s.phase, Phase::Idle);
        // Closing from idle changes nothing.
        assert_eq!(dispatch(s.clone(), GameAction::CloseRound), s);
    }

    #[test]
    fn resize_updates_the_despawn_floor() {
        let mut s = playing();
        s = dispatch(s, GameAction::Resize { width: 400.0, height: 10.0 });
        s = dispatch(s, GameAction::Spawn { rolls: acorn_rolls(0.5) });
        // Floor is height + margin = 110; from y = -80 at speed 3 that is 64 frames.
        s = run_frames(s, 63, T0);
        assert_eq!(s.buttons.len(), 1);
        s = run_frames(s, 1, T0);
        assert!(s.buttons.is_empty());
        assert_eq!(s.missed, 1);
    }
}
