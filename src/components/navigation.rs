use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("commandments", "Sacred Laws", "📜"),
    ("nutonomics", "NUTonomics", "🥜"),
    ("challenge", "The Challenge", "⚔️"),
    ("game", "The Game", "🌰"),
    ("stats", "Stats", "📊"),
];

/// Smooth-scroll to a page section by element id.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let scroll_cb = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    scrolled.set(window.scroll_y().unwrap_or(0.0) > 50.0);
                }) as Box<dyn FnMut()>)
            };
            window
                .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = window
                    .remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            }
        });
    }

    let bar_style = if *scrolled {
        "position:fixed; top:0; left:0; right:0; z-index:50; background:rgba(14,17,22,0.95); border-bottom:1px solid rgba(227,179,65,0.25); box-shadow:0 2px 12px rgba(0,0,0,0.4); transition:all 0.4s;"
    } else {
        "position:fixed; top:0; left:0; right:0; z-index:50; background:rgba(14,17,22,0.8); border-bottom:1px solid transparent; transition:all 0.4s;"
    };

    html! {
        <nav style={bar_style}>
            <div style="max-width:1100px; margin:0 auto; padding:10px 16px; display:flex; align-items:center; justify-content:space-between; gap:12px;">
                <button
                    onclick={Callback::from(|_| scroll_to_section("hero"))}
                    style="display:flex; align-items:center; gap:8px; background:none; border:none; cursor:pointer; color:#e3b341; font-size:22px; font-weight:800;"
                >
                    <span style="font-size:26px;">{"🥜"}</span>
                    <span>{"$NUT"}</span>
                </button>
                <div style="display:flex; align-items:center; justify-content:center; gap:4px; flex:1;">
                    { for NAV_ITEMS.iter().map(|&(id, label, emoji)| {
                        html! {
                            <button
                                key={id}
                                onclick={Callback::from(move |_| scroll_to_section(id))}
                                style="display:flex; align-items:center; gap:6px; background:none; border:none; cursor:pointer; color:#e6edf3; font-size:14px; font-weight:600; padding:8px 12px; border-radius:8px;"
                            >
                                <span>{ emoji }</span>
                                <span>{ label }</span>
                            </button>
                        }
                    }) }
                </div>
                <button
                    onclick={Callback::from(|_| scroll_to_section("challenge"))}
                    style="background:#e3b341; color:#0e1116; border:none; cursor:pointer; font-weight:700; padding:8px 18px; border-radius:999px;"
                >
                    {"💦 Join Now"}
                </button>
            </div>
        </nav>
    }
}
