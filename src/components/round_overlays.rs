use crate::util::format_points;
use yew::prelude::*;

const BACKDROP: &str = "position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(14,17,22,0.88); backdrop-filter:blur(2px); z-index:10;";
const PANEL: &str = "text-align:center; padding:24px 32px; border-radius:12px; min-width:300px; background:#161b22; display:flex; flex-direction:column; gap:12px;";

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub round_score: u32,
    pub retry: Callback<()>,
    pub close: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let retry_btn = {
        let cb = props.retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_btn = {
        let cb = props.close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style={BACKDROP}>
            <div style={format!("{} border:2px solid #f85149;", PANEL)}>
                <h3 style="margin:0; color:#f85149; font-size:26px;">{"Game Over!"}</h3>
                <p style="margin:0; opacity:0.8;">{"Your discipline failed this round."}</p>
                <p style="margin:0; font-weight:600;">{ format!("Round Score: {}", format_points(u64::from(props.round_score))) }</p>
                <div style="display:flex; gap:12px; justify-content:center;">
                    <button onclick={retry_btn}>{"Try Again"}</button>
                    <button onclick={close_btn}>{"Back"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RoundCompleteOverlayProps {
    pub show: bool,
    pub round_score: u32,
    pub perfect: bool,
    pub next_round: Callback<()>,
    pub close: Callback<()>,
}

#[function_component]
pub fn RoundCompleteOverlay(props: &RoundCompleteOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let next_btn = {
        let cb = props.next_round.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_btn = {
        let cb = props.close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style={BACKDROP}>
            <div style={format!("{} border:2px solid #e3b341;", PANEL)}>
                <h3 style="margin:0; font-size:26px;">{"Round Complete! 🎉"}</h3>
                <p style="margin:0; color:#e3b341; font-size:20px; font-weight:600;">
                    { format!("Score: {}", format_points(u64::from(props.round_score))) }
                </p>
                { if props.perfect {
                    html! { <p style="margin:0; color:#2ea043; font-weight:600;">{"Perfect Round! +100 Bonus!"}</p> }
                } else {
                    html! {}
                } }
                <div style="display:flex; gap:12px; justify-content:center;">
                    <button onclick={next_btn}>{"Next Round"}</button>
                    <button onclick={close_btn}>{"Done"}</button>
                </div>
            </div>
        </div>
    }
}
