use yew::prelude::*;

#[function_component(Testimonial)]
pub fn testimonial() -> Html {
    html! {
        <section style="padding:32px 16px;">
            <div style="max-width:620px; margin:0 auto; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; gap:12px;">
                <div style="height:48px; width:48px; flex-shrink:0; border-radius:50%; background:rgba(227,179,65,0.2); display:flex; align-items:center; justify-content:center; font-size:24px;">
                    {"🧘"}
                </div>
                <div style="display:flex; flex-direction:column; gap:8px;">
                    <div style="display:flex; gap:8px; align-items:center;">
                        <span style="font-weight:700;">{"reformed degen"}</span>
                        <span style="opacity:0.6;">{"@no_more_3am_buys"}</span>
                    </div>
                    <p style="margin:0;">
                        {"day 23 of NUT. haven't checked dexscreener in 3 weeks. touched grass. drank water. \
                          my portfolio is still down but my soul is up. this is the way. 🧘📈✨"}
                    </p>
                    <div style="display:flex; gap:12px; font-size:14px; opacity:0.6;">
                        <span>{"4:20 PM · Nov 23, 2025"}</span>
                        <span>{"·"}</span>
                        <span>{"420K Views"}</span>
                    </div>
                    <div style="display:flex; gap:24px; font-size:14px; opacity:0.7;">
                        <span>{"💬 1.2K"}</span>
                        <span>{"🔄 4.2K"}</span>
                        <span>{"❤️ 6.9K"}</span>
                        <span>{"📊 420"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
