use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::progress_bar::ProgressBar;
use super::round_overlays::{GameOverOverlay, RoundCompleteOverlay};
use crate::model::game::{
    ButtonKind, GameAction, GameState, GameStats, MISS_LIMIT, Phase, SpawnRolls,
};
use crate::storage::{self, BrowserStorage, GAME_STATS_KEY};
use crate::util::{format_points, now_ms};

const TILE: &str = "text-align:center; padding:16px; background:rgba(227,179,65,0.05); border:1px solid rgba(227,179,65,0.2); border-radius:8px;";

#[function_component(GameView)]
pub fn game_view() -> Html {
    let game = use_reducer(|| {
        let stats =
            storage::load::<GameStats>(&BrowserStorage, GAME_STATS_KEY).unwrap_or_default();
        GameState::with_stats(stats)
    });
    let area_ref = use_node_ref();
    let seen_tutorial = use_state(|| false);

    // Persist aggregate stats whenever they change.
    {
        use_effect_with(game.stats, move |stats| {
            storage::save(&BrowserStorage, GAME_STATS_KEY, stats);
            || ()
        });
    }

    // Spawn cadence while playing; re-armed when the difficulty tier changes.
    {
        let game = game.clone();
        let deps = (game.phase, game.tier().spawn_interval_ms);
        use_effect_with(deps, move |&(phase, interval_ms)| {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
            if phase == Phase::Playing {
                let window = web_sys::window().expect("no global `window` exists");
                let spawn = Closure::wrap(Box::new(move || {
                    game.dispatch(GameAction::Spawn { rolls: SpawnRolls::random() });
                }) as Box<dyn FnMut()>);
                let id = window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        spawn.as_ref().unchecked_ref(),
                        interval_ms as i32,
                    )
                    .unwrap();
                cleanup = Box::new(move || {
                    window.clear_interval_with_handle(id);
                    drop(spawn);
                });
            }
            cleanup
        });
    }

    // Animation frame loop driving fall, rotation and despawn.
    {
        let game = game.clone();
        use_effect_with(game.phase, move |&phase| {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
            if phase == Phase::Playing {
                let window = web_sys::window().expect("no global `window` exists");
                let raf_id = Rc::new(RefCell::new(None));
                let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                {
                    let raf_id = raf_id.clone();
                    let closure_cell = closure_cell.clone();
                    let window = window.clone();
                    let cell_for_loop = closure_cell.clone();
                    *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        game.dispatch(GameAction::Frame { now_ms: now_ms() });
                        if let Ok(id) = window.request_animation_frame(
                            cell_for_loop.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                        ) {
                            *raf_id.borrow_mut() = Some(id);
                        }
                    })
                        as Box<dyn FnMut()>));
                }
                if let Ok(id) = window.request_animation_frame(
                    closure_cell.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
                cleanup = Box::new(move || {
                    if let Some(id) = *raf_id.borrow() {
                        let _ = window.cancel_animation_frame(id);
                    }
                    drop(closure_cell);
                });
            }
            cleanup
        });
    }

    // Measure the play area on mount and on window resize.
    {
        let game = game.clone();
        let area_ref = area_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let measure = move || {
                if let Some(el) = area_ref.cast::<web_sys::Element>() {
                    let rect = el.get_bounding_client_rect();
                    game.dispatch(GameAction::Resize {
                        width: rect.width(),
                        height: rect.height(),
                    });
                }
            };
            measure();
            let resize_cb = Closure::wrap(Box::new(measure) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
        });
    }

    let state = (*game).clone();
    let tier = state.tier();

    let start_round = {
        let game = game.clone();
        let seen_tutorial = seen_tutorial.clone();
        Callback::from(move |_: ()| {
            seen_tutorial.set(true);
            game.dispatch(GameAction::StartRound { now_ms: now_ms() });
        })
    };
    let start_click = {
        let cb = start_round.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let finish_round = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| game.dispatch(GameAction::FinishRound))
    };
    let close_round = {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(GameAction::CloseRound))
    };
    let reset_stats = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| game.dispatch(GameAction::ResetStats))
    };

    let playing = state.phase == Phase::Playing;

    html! {
        <div style="display:flex; flex-direction:column; gap:24px;">
            // Stats dashboard
            <div style="background:#161b22; border:2px solid rgba(227,179,65,0.4); border-radius:12px; padding:28px; display:flex; flex-direction:column; gap:20px;">
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(160px, 1fr)); gap:12px;">
                    <div style={TILE}>
                        <div style="font-size:24px; font-weight:700; color:#e3b341;">
                            { format!("Level {}", state.stats.level) }
                        </div>
                        <div style="font-size:14px; opacity:0.7;">{ format!("⚡ {} XP", state.stats.xp) }</div>
                        <div style="margin-top:8px;">
                            <ProgressBar percent={state.level_progress_percent()} height={6} />
                        </div>
                    </div>
                    <div style={TILE}>
                        <div style="font-size:24px; font-weight:700; color:#58a6ff;">
                            { format_points(state.stats.score) }
                        </div>
                        <div style="font-size:14px; opacity:0.7;">{"Total Score"}</div>
                    </div>
                    <div style={TILE}>
                        <div style="font-size:24px; font-weight:700; color:#f0883e;">{ state.stats.streak }</div>
                        <div style="font-size:14px; opacity:0.7;">{"🔥 Streak"}</div>
                    </div>
                    <div style={TILE}>
                        <div style="font-size:24px; font-weight:700; color:#2ea043;">{ state.stats.perfect_rounds }</div>
                        <div style="font-size:14px; opacity:0.7;">{"🎯 Perfect"}</div>
                    </div>
                </div>
                <div style="display:flex; align-items:center; justify-content:space-between; gap:12px;">
                    <div>
                        <div style="font-weight:600;">{ format!("Difficulty: {}", tier.name) }</div>
                        <div style="font-size:14px; opacity:0.7;">
                            { format!("Resisted: {} trades", state.stats.total_resisted) }
                        </div>
                    </div>
                    <button onclick={reset_stats} style="background:none; border:1px solid #30363d; color:#8b949e; cursor:pointer; padding:8px 16px; border-radius:8px;">
                        {"↺ Reset"}
                    </button>
                </div>
            </div>

            // Play area card
            <div style="background:#161b22; border:2px solid rgba(227,179,65,0.4); border-radius:12px; padding:28px; display:flex; flex-direction:column; gap:16px;">
                { if !*seen_tutorial && state.phase == Phase::Idle {
                    html! {
                        <div style="padding:20px; background:rgba(227,179,65,0.08); border:1px solid rgba(227,179,65,0.2); border-radius:8px; display:flex; flex-direction:column; gap:10px;">
                            <h3 style="margin:0; font-size:22px;">{"How to Play"}</h3>
                            <p style="margin:0;">{"✓ Click the 🌰 acorn buttons to collect them and earn points"}</p>
                            <p style="margin:0;">{"✗ NEVER click the ⚠️ temptation buttons or you lose!"}</p>
                            <p style="margin:0;">{"★ Build combos by clicking acorns quickly for bonus points"}</p>
                            <p style="margin:0;">{ format!("🎯 Drop fewer than {} acorns and finish clean for the perfect-round bonus", MISS_LIMIT) }</p>
                        </div>
                    }
                } else {
                    html! {}
                } }

                { if playing {
                    html! {
                        <div style="display:flex; align-items:center; justify-content:space-between;">
                            <div style="font-weight:600;">
                                {"Round Score: "}
                                <span style="color:#e3b341;">{ format_points(u64::from(state.round_score)) }</span>
                            </div>
                            <div style="display:flex; align-items:center; gap:16px;">
                                { if state.combo > 0 {
                                    html! { <div style="font-weight:700; color:#e3b341;">{ format!("🔥 Combo x{}", state.combo) }</div> }
                                } else {
                                    html! {}
                                } }
                                <div style={if state.missed >= MISS_LIMIT - 1 { "font-size:14px; color:#f85149; font-weight:700;" } else { "font-size:14px; opacity:0.7;" }}>
                                    { format!("Missed: {}/{}", state.missed, MISS_LIMIT) }
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                } }

                <div
                    ref={area_ref}
                    style="position:relative; width:100%; height:500px; background:linear-gradient(180deg, rgba(88,166,255,0.06), rgba(227,179,65,0.04)); border:2px solid #30363d; border-radius:12px; overflow:hidden; touch-action:none;"
                >
                    { for state.buttons.iter().map(|b| {
                        let on_click = {
                            let game = game.clone();
                            let id = b.id;
                            Callback::from(move |_: MouseEvent| {
                                game.dispatch(GameAction::Click { id, now_ms: now_ms() })
                            })
                        };
                        let on_touch = {
                            let game = game.clone();
                            let id = b.id;
                            Callback::from(move |e: TouchEvent| {
                                e.prevent_default();
                                game.dispatch(GameAction::Click { id, now_ms: now_ms() });
                            })
                        };
                        let (bg, border, label) = match b.kind {
                            ButtonKind::Temptation => (
                                "linear-gradient(135deg, #da3633, #8e1519)",
                                "#f85149",
                                html! { <><span>{"⚠️"}</span><span>{"Trade Now"}</span></> },
                            ),
                            ButtonKind::Acorn => (
                                "linear-gradient(135deg, #e3b341, #9e6a03)",
                                "#e3b341",
                                html! { <><span>{"🌰"}</span><span>{ format!("+{}", b.value) }</span></> },
                            ),
                        };
                        html! {
                            <div
                                key={b.id}
                                onclick={on_click}
                                ontouchstart={on_touch}
                                style={format!("position:absolute; left:{:.0}px; top:{:.0}px; transform:translate(-50%, -50%) rotate({:.0}deg); cursor:pointer; user-select:none; z-index:5;", b.x, b.y, b.rotation)}
                            >
                                <div style={format!("display:flex; align-items:center; justify-content:center; gap:8px; font-weight:700; border-radius:12px; padding:10px 20px; min-width:110px; color:#0e1116; background:{}; border:2px solid {}; box-shadow:0 4px 12px rgba(0,0,0,0.4);", bg, border)}>
                                    { label }
                                </div>
                            </div>
                        }
                    }) }

                    { for state.particles.iter().map(|p| html! {
                        <div
                            key={p.id}
                            style={format!("position:absolute; left:{:.0}px; top:{:.0}px; transform:translate(-50%, -50%); color:#e3b341; font-weight:700; pointer-events:none; z-index:6;", p.x, p.y)}
                        >
                            { format!("+{}", p.value) }
                        </div>
                    }) }

                    { if state.phase == Phase::Idle {
                        html! {
                            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(14,17,22,0.5); backdrop-filter:blur(2px); z-index:10;">
                                <button onclick={start_click.clone()} style="background:#e3b341; color:#0e1116; border:none; cursor:pointer; font-weight:700; padding:14px 32px; border-radius:8px; font-size:18px; box-shadow:0 4px 16px rgba(0,0,0,0.4);">
                                    {"▶ Start Round"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    } }

                    { if playing {
                        html! {
                            <div style="position:absolute; bottom:16px; left:50%; transform:translateX(-50%); z-index:8;">
                                <button onclick={finish_round} style="background:rgba(14,17,22,0.9); color:#e6edf3; border:1px solid #30363d; cursor:pointer; padding:10px 20px; border-radius:8px;">
                                    {"⏸ End Round"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    } }

                    <RoundCompleteOverlay
                        show={state.phase == Phase::RoundComplete}
                        round_score={state.round_score}
                        perfect={state.missed == 0}
                        next_round={start_round.clone()}
                        close={close_round.clone()}
                    />
                    <GameOverOverlay
                        show={state.phase == Phase::GameOver}
                        round_score={state.round_score}
                        retry={start_round.clone()}
                        close={close_round.clone()}
                    />
                </div>

                { if playing {
                    html! {
                        <div style="text-align:center; opacity:0.7; font-weight:600;">
                            {"Click 🌰 acorns, avoid ⚠️ temptations!"}
                        </div>
                    }
                } else {
                    html! {}
                } }
            </div>
        </div>
    }
}
