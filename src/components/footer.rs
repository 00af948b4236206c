use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer style="border-top:1px solid #30363d; padding:32px 16px; margin-top:64px; background:rgba(22,27,34,0.5);">
            <div style="max-width:900px; margin:0 auto; text-align:center; display:flex; flex-direction:column; gap:8px; opacity:0.8;">
                <p style="margin:0; font-weight:600; font-size:18px;">{"$NUT - No Unnecessary Trades"}</p>
                <p style="margin:0;">
                    {"A movement for traders who are tired of getting rekt at 3 AM. \
                      Practice discipline. Touch grass. Drink water."}
                </p>
                <p style="margin:0;">{"This is not financial advice. This is barely even a token. But it might save your portfolio."}</p>
                <p style="margin:16px 0 0 0; font-size:14px;">{"DYOR. NFA. WAGMI if you can resist the FOMO. 🧘"}</p>
            </div>
        </footer>
    }
}
