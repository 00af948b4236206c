use super::navigation::scroll_to_section;
use yew::prelude::*;

const CONTRACT_ADDRESS: &str = "NUT7k9JRvMpJhAnZkL4aMeNvJhvzTZs7h0qstpump";

#[function_component(Hero)]
pub fn hero() -> Html {
    let copy_contract = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            // Fire-and-forget; a failed copy is not worth surfacing.
            let _ = window.navigator().clipboard().write_text(CONTRACT_ADDRESS);
        }
    });
    let to_challenge = Callback::from(|_: MouseEvent| scroll_to_section("challenge"));
    let to_game = Callback::from(|_: MouseEvent| scroll_to_section("game"));

    html! {
        <section id="hero" style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100vh; padding:96px 16px; gap:32px;">
            <h1 style="margin:0; font-size:72px; font-weight:800; letter-spacing:-2px; color:#e3b341;">{"$NUT"}</h1>
            <div style="height:260px; width:260px; display:flex; align-items:center; justify-content:center; font-size:120px; border-radius:16px; border:4px solid rgba(227,179,65,0.4); background:linear-gradient(135deg, rgba(88,166,255,0.12), rgba(227,179,65,0.08)); box-shadow:0 8px 32px rgba(0,0,0,0.5);">
                {"🧘"}
            </div>
            <div style="text-align:center; display:flex; flex-direction:column; gap:8px;">
                <p style="margin:0; font-size:30px; font-weight:700;">{"No Unnecessary Trades"}</p>
                <p style="margin:0; font-size:19px; opacity:0.7;">{"Master the Ancient Art of Not Aping In"}</p>
            </div>
            <div style="display:flex; flex-wrap:wrap; justify-content:center; gap:10px;">
                <button onclick={to_challenge} style="background:#e3b341; color:#0e1116; border:none; cursor:pointer; font-weight:700; padding:12px 24px; border-radius:8px; font-size:16px;">
                    {"Take the Pledge"}
                </button>
                <button onclick={to_game} style="background:rgba(22,27,34,0.6); color:#e6edf3; border:1px solid rgba(227,179,65,0.5); cursor:pointer; font-weight:600; padding:12px 24px; border-radius:8px; font-size:16px;">
                    {"📈 Resist the Charts"}
                </button>
                <button style="background:rgba(22,27,34,0.6); color:#e6edf3; border:1px solid rgba(227,179,65,0.5); cursor:pointer; font-weight:600; padding:12px 24px; border-radius:8px; font-size:16px;">
                    {"𝕏 Join the Monastery"}
                </button>
                <button style="background:rgba(22,27,34,0.6); color:#e6edf3; border:1px solid rgba(227,179,65,0.5); cursor:pointer; font-weight:600; padding:12px 24px; border-radius:8px; font-size:16px;">
                    {"💬 Confess Your FOMOs"}
                </button>
            </div>
            <div style="width:100%; max-width:620px; display:flex; flex-direction:column; gap:8px;">
                <p style="margin:0; text-align:center; font-size:13px; text-transform:uppercase; letter-spacing:2px; opacity:0.7;">{"Sacred Contract"}</p>
                <div style="display:flex; align-items:center; gap:8px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:12px 16px;">
                    <code style="flex:1; font-size:14px; opacity:0.8; overflow:hidden; text-overflow:ellipsis; white-space:nowrap;">
                        { CONTRACT_ADDRESS }
                    </code>
                    <button onclick={copy_contract} title="Copy contract address" style="background:none; border:none; cursor:pointer; color:#e6edf3; font-size:16px;">
                        {"📋"}
                    </button>
                </div>
            </div>
        </section>
    }
}
