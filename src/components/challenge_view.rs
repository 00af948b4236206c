use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::milestone_grid::MilestoneGrid;
use super::progress_bar::ProgressBar;
use crate::model::challenge::{CHALLENGE_DAYS, ChallengeAction, ChallengeState, DAILY_XP, MILESTONES};
use crate::storage::{self, BrowserStorage, CHALLENGE_KEY, KvStore};
use crate::util::now_ms;

const TILE: &str = "text-align:center; padding:16px; background:rgba(227,179,65,0.05); border:1px solid rgba(227,179,65,0.2); border-radius:8px;";

#[function_component(ChallengeView)]
pub fn challenge_view() -> Html {
    let challenge = use_reducer(|| {
        storage::load::<ChallengeState>(&BrowserStorage, CHALLENGE_KEY).unwrap_or_default()
    });
    let now = use_state(now_ms);
    let confirm_reset = use_state(|| false);
    // Milestone day and expiry clock for the unlock toast.
    let toast = use_state(|| None::<(i64, i64)>);
    let prev_achievements = use_mut_ref(|| (*challenge).achievements.clone());

    // 1 s ticker: advances the display clock and re-evaluates milestone awards.
    {
        let challenge = challenge.clone();
        let now = now.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let tick = Closure::wrap(Box::new(move || {
                let t = now_ms();
                now.set(t);
                challenge.dispatch(ChallengeAction::Tick { now_ms: t });
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(id);
                drop(tick);
            }
        });
    }

    // Mirror every state change to storage and surface fresh unlocks.
    {
        let toast = toast.clone();
        let prev_achievements = prev_achievements.clone();
        use_effect_with((*challenge).clone(), move |state| {
            if state.started() {
                storage::save(&BrowserStorage, CHALLENGE_KEY, state);
            } else {
                BrowserStorage.remove(CHALLENGE_KEY);
            }
            let mut prev = prev_achievements.borrow_mut();
            if let Some(&day) = state.achievements.difference(&prev).max() {
                toast.set(Some((day, now_ms() + 3_000)));
            }
            *prev = state.achievements.clone();
            || ()
        });
    }

    let t = *now;
    let state = (*challenge).clone();

    let toast_html = match *toast {
        Some((day, until)) if t < until => {
            let title = MILESTONES
                .iter()
                .find(|m| m.day == day)
                .map(|m| m.title)
                .unwrap_or("Milestone");
            html! {
                <div style="position:fixed; top:70px; left:50%; transform:translateX(-50%); z-index:60; background:#e3b341; color:#0e1116; border-radius:12px; padding:16px 24px; box-shadow:0 8px 24px rgba(0,0,0,0.5); display:flex; gap:12px; align-items:center;">
                    <span style="font-size:28px;">{"🏆"}</span>
                    <div>
                        <p style="margin:0; font-weight:700;">{"Achievement Unlocked!"}</p>
                        <p style="margin:0;">{ title }</p>
                    </div>
                </div>
            }
        }
        _ => html! {},
    };

    if !state.started() {
        let start = {
            let challenge = challenge.clone();
            Callback::from(move |_: MouseEvent| {
                challenge.dispatch(ChallengeAction::Start { now_ms: now_ms() })
            })
        };
        return html! {
            <div style="background:#161b22; border:2px solid rgba(227,179,65,0.4); border-radius:12px; padding:40px; text-align:center; display:flex; flex-direction:column; gap:20px; align-items:center;">
                <div style="display:flex; align-items:center; gap:12px;">
                    <span style="font-size:52px;">{"🏆"}</span>
                    <span style="font-size:56px; font-weight:800; color:#e3b341;">{"30 Days"}</span>
                </div>
                <p style="margin:0; font-size:22px; font-weight:600;">{"of Trading Discipline"}</p>
                <p style="margin:0; max-width:520px; opacity:0.7; line-height:1.5;">
                    {"Commit to 30 days without an unnecessary trade. Track your progress, unlock \
                      milestones, earn XP, build streaks, and become a Grandmaster of Patience."}
                </p>
                <button onclick={start} style="background:#e3b341; color:#0e1116; border:none; cursor:pointer; font-weight:700; padding:14px 32px; border-radius:8px; font-size:18px;">
                    {"▶ Start Your Journey"}
                </button>
            </div>
        };
    }

    let elapsed = state.days_elapsed(t);
    let remaining = state.days_remaining(t);
    let complete = state.is_complete(t);
    let level = state.level();
    let title = state.current_title(t);

    let check_in = {
        let challenge = challenge.clone();
        Callback::from(move |_: MouseEvent| {
            challenge.dispatch(ChallengeAction::CheckIn { now_ms: now_ms() })
        })
    };
    let ask_reset = {
        let confirm_reset = confirm_reset.clone();
        Callback::from(move |_: MouseEvent| confirm_reset.set(true))
    };
    let cancel_reset = {
        let confirm_reset = confirm_reset.clone();
        Callback::from(move |_: MouseEvent| confirm_reset.set(false))
    };
    let do_reset = {
        let challenge = challenge.clone();
        let confirm_reset = confirm_reset.clone();
        Callback::from(move |_: MouseEvent| {
            challenge.dispatch(ChallengeAction::Reset);
            confirm_reset.set(false);
        })
    };

    let check_in_block = if !state.checked_in_today(t) && !complete {
        html! {
            <button onclick={check_in} style="align-self:center; background:#e3b341; color:#0e1116; border:none; cursor:pointer; font-weight:700; padding:14px 32px; border-radius:8px; font-size:17px;">
                { format!("🎯 Daily Check-In (+{} XP)", DAILY_XP) }
            </button>
        }
    } else {
        html! {
            <div style="text-align:center; padding:16px; background:rgba(227,179,65,0.1); border:1px solid rgba(227,179,65,0.2); border-radius:8px;">
                <div style="font-weight:600; color:#e3b341;">
                    { if complete { "Challenge Complete!" } else { "✓ Checked In Today" } }
                </div>
                { if !complete {
                    html! { <div style="font-size:13px; opacity:0.7; margin-top:4px;">{"Next check-in available tomorrow"}</div> }
                } else {
                    html! {}
                } }
            </div>
        }
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:24px;">
            { toast_html }
            <div style="background:#161b22; border:2px solid rgba(227,179,65,0.4); border-radius:12px; padding:28px; display:flex; flex-direction:column; gap:24px;">
                // Level & XP bar
                <div style="display:flex; flex-direction:column; gap:8px;">
                    <div style="display:flex; justify-content:space-between; font-size:17px;">
                        <span style="font-weight:700;">{ format!("⭐ Level {}", level) }</span>
                        <span style="font-weight:700; color:#e3b341;">{ format!("⚡ {} XP", state.total_xp) }</span>
                    </div>
                    <ProgressBar percent={state.level_progress_percent()} height={14} />
                    <div style="text-align:right; font-size:13px; opacity:0.7;">
                        { format!("{} XP to Level {}", state.xp_to_next_level(), level + 1) }
                    </div>
                </div>
                // Stat tiles
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(140px, 1fr)); gap:12px;">
                    <div style={TILE}>
                        <div style="font-size:32px; font-weight:700; color:#e3b341;">{ elapsed }</div>
                        <div style="font-size:14px; opacity:0.7;">{"📅 Days"}</div>
                    </div>
                    <div style={TILE}>
                        <div style="font-size:32px; font-weight:700; color:#58a6ff;">{ remaining }</div>
                        <div style="font-size:14px; opacity:0.7;">{"⏳ Remaining"}</div>
                    </div>
                    <div style={TILE}>
                        <div style="font-size:32px; font-weight:700; color:#f0883e;">{ state.streak }</div>
                        <div style="font-size:14px; opacity:0.7;">{"🔥 Streak"}</div>
                    </div>
                    <div style={TILE}>
                        <div style="font-size:32px; font-weight:700; color:#2ea043;">{ state.achievements.len() }</div>
                        <div style="font-size:14px; opacity:0.7;">{"🏅 Achievements"}</div>
                    </div>
                </div>
                { check_in_block }
                // Challenge progress
                <div style="display:flex; flex-direction:column; gap:8px;">
                    <div style="display:flex; justify-content:space-between; font-size:16px;">
                        <span style="opacity:0.7; font-weight:600;">{"Challenge Progress"}</span>
                        <span style="font-weight:700;">{ format!("{:.0}% Complete", state.progress_percent(t)) }</span>
                    </div>
                    <ProgressBar percent={state.progress_percent(t)} height={14} />
                </div>
                // Current title
                <div style="text-align:center; padding:28px; background:linear-gradient(135deg, rgba(227,179,65,0.1), rgba(88,166,255,0.08)); border:1px solid rgba(227,179,65,0.2); border-radius:8px;">
                    <div style="font-size:56px; margin-bottom:8px;">{ title.emoji }</div>
                    <div style="font-size:26px; font-weight:700; color:#e3b341;">
                        { format!("Day {} of {}", elapsed, CHALLENGE_DAYS) }
                    </div>
                    <div style="font-size:21px; font-weight:700; margin-top:4px;">{ title.title }</div>
                    { if complete {
                        html! {
                            <div style="margin-top:16px; padding:16px; background:rgba(227,179,65,0.2); border-radius:8px; color:#e3b341; font-weight:700; font-size:17px;">
                                {"🎉 Congratulations! You've completed the NUT Challenge!"}
                            </div>
                        }
                    } else {
                        html! {}
                    } }
                </div>
                { if !complete {
                    html! {
                        <div style="text-align:center; opacity:0.7;">
                            { if remaining == 1 {
                                "Challenge ends in 1 day".to_string()
                            } else {
                                format!("Challenge ends in {} days", remaining)
                            } }
                        </div>
                    }
                } else {
                    html! {}
                } }
                // Reset controls
                <div style="display:flex; justify-content:center; gap:8px;">
                    { if !*confirm_reset {
                        html! {
                            <button onclick={ask_reset} style="background:none; border:1px solid #30363d; color:#8b949e; cursor:pointer; padding:8px 16px; border-radius:8px;">
                                {"↺ Reset Challenge"}
                            </button>
                        }
                    } else {
                        html! {
                            <>
                                <button onclick={cancel_reset} style="background:none; border:1px solid #30363d; color:#8b949e; cursor:pointer; padding:8px 16px; border-radius:8px;">
                                    {"Cancel"}
                                </button>
                                <button onclick={do_reset} style="background:#da3633; border:none; color:#fff; cursor:pointer; font-weight:600; padding:8px 16px; border-radius:8px;">
                                    {"Confirm Reset"}
                                </button>
                            </>
                        }
                    } }
                </div>
            </div>
            <MilestoneGrid achievements={state.achievements.clone()} days_elapsed={elapsed} />
        </div>
    }
}
