use yew::prelude::*;

const COMMANDMENTS: [(&str, &str); 10] = [
    ("I", "Thou shalt not market buy at 3 AM."),
    ("II", "Thou shalt not chase green candles."),
    ("III", "Thou shalt not check DexScreener every 10 minutes."),
    ("IV", "Thou shalt hodl until enlightenment (or the dev rugs)."),
    ("V", "If tempted, go outside. Touch grass."),
    ("VI", "Drink water. Stay hydrated, not liquidated."),
    ("VII", "Thou shalt not FOMO into rugs."),
    ("VIII", "Thou shalt not revenge trade."),
    ("IX", "Thou shalt not ape thy entire stack."),
    ("X", "Thou shalt remember: discipline > dopamine."),
];

#[function_component(Commandments)]
pub fn commandments() -> Html {
    html! {
        <section id="commandments" style="padding:64px 16px; background:rgba(22,27,34,0.4);">
            <div style="max-width:900px; margin:0 auto; display:flex; flex-direction:column; gap:32px;">
                <div style="text-align:center;">
                    <h2 style="margin:0 0 8px 0; font-size:38px;">{"The Ten Commandments of NUT"}</h2>
                    <p style="margin:0; opacity:0.7; text-transform:uppercase; letter-spacing:2px; font-size:14px;">
                        {"Sacred Principles for the Disciplined Trader"}
                    </p>
                </div>
                <div style="background:#161b22; border:2px solid rgba(227,179,65,0.2); border-radius:12px; overflow:hidden;">
                    { for COMMANDMENTS.iter().map(|&(numeral, text)| {
                        html! {
                            <div key={numeral} style="display:flex; align-items:center; gap:20px; padding:16px 28px; border-bottom:1px solid #30363d;">
                                <div style="flex-shrink:0; width:48px; height:48px; border-radius:50%; background:rgba(227,179,65,0.1); border:2px solid rgba(227,179,65,0.3); display:flex; align-items:center; justify-content:center; color:#e3b341; font-weight:700; font-size:18px;">
                                    { numeral }
                                </div>
                                <p style="margin:0; font-size:17px; font-weight:500;">{ text }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
