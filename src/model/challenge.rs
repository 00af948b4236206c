//! State machine for the 30-day no-unnecessary-trades challenge.
//!
//! All clock input arrives as epoch milliseconds carried by actions, so the
//! reducer is deterministic and testable off-browser. Calendar days are UTC
//! day indices (`floor(ms / 86_400_000)`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::Reducible;

pub const CHALLENGE_DAYS: i64 = 30;
pub const DAILY_XP: u32 = 5;
pub const MS_PER_DAY: i64 = 86_400_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub day: i64,
    pub title: &'static str,
    pub emoji: &'static str,
    pub xp: u32,
}

pub static MILESTONES: [Milestone; 6] = [
    Milestone { day: 1, title: "The Seed of Discipline", emoji: "🌱", xp: 10 },
    Milestone { day: 7, title: "Temptation Resister", emoji: "🛡️", xp: 50 },
    Milestone { day: 15, title: "Chart Abstinent", emoji: "🧘", xp: 100 },
    Milestone { day: 21, title: "FOMO Destroyer", emoji: "⚔️", xp: 200 },
    Milestone { day: 28, title: "Diamond Soul", emoji: "💎", xp: 300 },
    Milestone { day: 30, title: "Grandmaster of Patience", emoji: "👑", xp: 500 },
];

/// Calendar-day index for an epoch-millisecond timestamp.
pub fn day_index(ms: i64) -> i64 {
    ms.div_euclid(MS_PER_DAY)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeState {
    /// Set together by `Start`, never mutated individually.
    pub start_ms: Option<i64>,
    pub end_ms: Option<i64>,
    pub total_xp: u32,
    /// Day indices with a recorded check-in, deduplicated by construction.
    pub check_ins: BTreeSet<i64>,
    /// Gates duplicate same-day awards.
    pub last_check_in: Option<i64>,
    pub streak: u32,
    /// Milestone days already awarded; membership is the idempotency guard.
    pub achievements: BTreeSet<i64>,
}

impl ChallengeState {
    pub fn started(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Whole days since the challenge began, clamped at zero.
    pub fn days_elapsed(&self, now_ms: i64) -> i64 {
        match self.start_ms {
            Some(start) => (now_ms - start).div_euclid(MS_PER_DAY).max(0),
            None => 0,
        }
    }

    /// Whole days until the challenge ends, rounded up, clamped at zero.
    pub fn days_remaining(&self, now_ms: i64) -> i64 {
        match self.end_ms {
            Some(end) => {
                let left = end - now_ms;
                if left <= 0 { 0 } else { (left + MS_PER_DAY - 1) / MS_PER_DAY }
            }
            None => CHALLENGE_DAYS,
        }
    }

    pub fn progress_percent(&self, now_ms: i64) -> f64 {
        (self.days_elapsed(now_ms) as f64 / CHALLENGE_DAYS as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Completed challenges are a read-only view; only `Reset` leaves it.
    pub fn is_complete(&self, now_ms: i64) -> bool {
        self.started() && self.days_elapsed(now_ms) >= CHALLENGE_DAYS
    }

    pub fn checked_in_today(&self, now_ms: i64) -> bool {
        self.last_check_in == Some(day_index(now_ms))
    }

    pub fn level(&self) -> u32 {
        self.total_xp / 100 + 1
    }

    pub fn xp_to_next_level(&self) -> u32 {
        self.level() * 100 - self.total_xp
    }

    pub fn level_progress_percent(&self) -> f64 {
        f64::from(self.total_xp % 100)
    }

    /// Highest milestone whose day threshold has been reached.
    pub fn current_title(&self, now_ms: i64) -> &'static Milestone {
        let elapsed = self.days_elapsed(now_ms);
        MILESTONES
            .iter()
            .rev()
            .find(|m| elapsed >= m.day)
            .unwrap_or(&MILESTONES[0])
    }

}

/// Consecutive qualifying days ending at `today`, walking the check-in
/// history backwards. A gap of more than one day terminates the streak.
fn compute_streak(check_ins: &BTreeSet<i64>, today: i64) -> u32 {
    let mut streak = 0;
    let mut expected = today;
    for &day in check_ins.iter().rev() {
        let gap = expected - day;
        if gap == 0 || gap == 1 {
            streak += 1;
            expected = day - 1;
        } else {
            break;
        }
    }
    streak
}

#[derive(Clone, Debug)]
pub enum ChallengeAction {
    Start { now_ms: i64 },
    CheckIn { now_ms: i64 },
    /// Passive re-evaluation, dispatched once per second.
    Tick { now_ms: i64 },
    Reset,
}

impl Reducible for ChallengeState {
    type Action = ChallengeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ChallengeAction::*;
        let mut new = (*self).clone();
        match action {
            Start { now_ms } => {
                if new.started() {
                    return self;
                }
                let today = day_index(now_ms);
                // The first day counts as checked in. Milestones (day 1
                // included) are awarded solely by the tick path.
                new = ChallengeState {
                    start_ms: Some(now_ms),
                    end_ms: Some(now_ms + CHALLENGE_DAYS * MS_PER_DAY),
                    total_xp: DAILY_XP,
                    check_ins: BTreeSet::from([today]),
                    last_check_in: Some(today),
                    streak: 1,
                    achievements: BTreeSet::new(),
                };
            }
            CheckIn { now_ms } => {
                if !new.started() || new.is_complete(now_ms) {
                    return self;
                }
                let today = day_index(now_ms);
                if new.last_check_in == Some(today) {
                    return self;
                }
                new.check_ins.insert(today);
                new.last_check_in = Some(today);
                new.streak = compute_streak(&new.check_ins, today);
                let bonus = if new.streak > 1 { new.streak } else { 0 };
                new.total_xp += DAILY_XP + bonus;
            }
            Tick { now_ms } => {
                if !new.started() {
                    return self;
                }
                let elapsed = new.days_elapsed(now_ms);
                let mut awarded = false;
                for m in MILESTONES.iter() {
                    if elapsed >= m.day && new.achievements.insert(m.day) {
                        new.total_xp += m.xp;
                        awarded = true;
                    }
                }
                if !awarded {
                    return self;
                }
            }
            Reset => {
                new = ChallengeState::default();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY0: i64 = 1_760_000_000_000;

    fn dispatch(state: ChallengeState, action: ChallengeAction) -> ChallengeState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn started_at(now_ms: i64) -> ChallengeState {
        dispatch(ChallengeState::default(), ChallengeAction::Start { now_ms })
    }

    #[test]
    fn start_marks_first_day() {
        let s = started_at(DAY0);
        assert_eq!(s.start_ms, Some(DAY0));
        assert_eq!(s.end_ms, Some(DAY0 + CHALLENGE_DAYS * MS_PER_DAY));
        assert_eq!(s.total_xp, DAILY_XP);
        assert_eq!(s.streak, 1);
        assert!(s.checked_in_today(DAY0));
        assert!(s.achievements.is_empty());
    }

    #[test]
    fn start_twice_is_noop() {
        let s = started_at(DAY0);
        let again = dispatch(s.clone(), ChallengeAction::Start { now_ms: DAY0 + MS_PER_DAY });
        assert_eq!(again, s);
    }

    #[test]
    fn consecutive_check_ins_accumulate_xp_and_streak() {
        let mut s = started_at(DAY0);
        // Day 1: streak 2, bonus 2. Day 2: streak 3, bonus 3.
        s = dispatch(s, ChallengeAction::CheckIn { now_ms: DAY0 + MS_PER_DAY });
        assert_eq!(s.streak, 2);
        assert_eq!(s.total_xp, DAILY_XP + DAILY_XP + 2);
        s = dispatch(s, ChallengeAction::CheckIn { now_ms: DAY0 + 2 * MS_PER_DAY });
        assert_eq!(s.streak, 3);
        assert_eq!(s.total_xp, DAILY_XP + (DAILY_XP + 2) + (DAILY_XP + 3));
        assert_eq!(s.check_ins.len(), 3);
    }

    #[test]
    fn same_day_check_in_is_noop() {
        let s = started_at(DAY0);
        let first = dispatch(s, ChallengeAction::CheckIn { now_ms: DAY0 + MS_PER_DAY });
        let second = dispatch(
            first.clone(),
            ChallengeAction::CheckIn { now_ms: DAY0 + MS_PER_DAY + 3_600_000 },
        );
        assert_eq!(second, first);
    }

    #[test]
    fn check_in_before_start_is_noop() {
        let s = dispatch(ChallengeState::default(), ChallengeAction::CheckIn { now_ms: DAY0 });
        assert_eq!(s, ChallengeState::default());
    }

    #[test]
    fn check_in_after_completion_is_noop() {
        let s = started_at(DAY0);
        let done = dispatch(
            s.clone(),
            ChallengeAction::CheckIn { now_ms: DAY0 + CHALLENGE_DAYS * MS_PER_DAY },
        );
        assert_eq!(done, s);
    }

    #[test]
    fn streak_breaks_after_gap() {
        let s = started_at(DAY0);
        // Skip days 1-2, check in on day 3: the walk stops at the gap.
        let s = dispatch(s, ChallengeAction::CheckIn { now_ms: DAY0 + 3 * MS_PER_DAY });
        assert_eq!(s.streak, 1);
        assert_eq!(s.total_xp, 2 * DAILY_XP);
    }

    #[test]
    fn tick_awards_crossed_milestones_once() {
        let s = started_at(DAY0);
        let day7 = DAY0 + 7 * MS_PER_DAY;
        let ticked = dispatch(s, ChallengeAction::Tick { now_ms: day7 });
        assert!(ticked.achievements.contains(&1));
        assert!(ticked.achievements.contains(&7));
        assert!(!ticked.achievements.contains(&15));
        assert_eq!(ticked.total_xp, DAILY_XP + 10 + 50);

        let again = dispatch(ticked.clone(), ChallengeAction::Tick { now_ms: day7 });
        assert_eq!(again, ticked);
    }

    #[test]
    fn tick_before_day_one_awards_nothing() {
        let s = started_at(DAY0);
        let ticked = dispatch(s.clone(), ChallengeAction::Tick { now_ms: DAY0 + MS_PER_DAY - 1 });
        assert_eq!(ticked, s);
    }

    #[test]
    fn tick_without_start_is_noop() {
        let s = dispatch(ChallengeState::default(), ChallengeAction::Tick { now_ms: DAY0 });
        assert_eq!(s, ChallengeState::default());
    }

    #[test]
    fn reset_then_start_reproduces_initial_state() {
        let mut s = started_at(DAY0);
        s = dispatch(s, ChallengeAction::CheckIn { now_ms: DAY0 + MS_PER_DAY });
        s = dispatch(s, ChallengeAction::Tick { now_ms: DAY0 + 9 * MS_PER_DAY });
        let reset = dispatch(s, ChallengeAction::Reset);
        assert_eq!(reset, ChallengeState::default());
        assert_eq!(dispatch(reset, ChallengeAction::Start { now_ms: DAY0 }), started_at(DAY0));
    }

    #[test]
    fn elapsed_and_remaining_are_clamped() {
        let s = started_at(DAY0);
        assert_eq!(s.days_elapsed(DAY0 - MS_PER_DAY), 0);
        assert_eq!(s.days_elapsed(DAY0 + 5 * MS_PER_DAY + 1), 5);
        // One millisecond in still rounds the remainder up.
        assert_eq!(s.days_remaining(DAY0 + 1), CHALLENGE_DAYS);
        assert_eq!(s.days_remaining(DAY0 + CHALLENGE_DAYS * MS_PER_DAY), 0);
        assert_eq!(s.days_remaining(DAY0 + 40 * MS_PER_DAY), 0);
    }

    #[test]
    fn current_title_tracks_elapsed_days() {
        let s = started_at(DAY0);
        assert_eq!(s.current_title(DAY0).day, 1);
        assert_eq!(s.current_title(DAY0 + 8 * MS_PER_DAY).day, 7);
        assert_eq!(s.current_title(DAY0 + 30 * MS_PER_DAY).day, 30);
    }

    #[test]
    fn completion_is_a_read_only_view() {
        let s = started_at(DAY0);
        assert!(!s.is_complete(DAY0 + 29 * MS_PER_DAY));
        assert!(s.is_complete(DAY0 + CHALLENGE_DAYS * MS_PER_DAY));
    }
}
