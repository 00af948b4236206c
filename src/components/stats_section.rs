use yew::prelude::*;

const STATS: [(&str, &str, &str); 4] = [
    ("Buy Pressure Resisted", "420", "Green candles ignored"),
    ("Paper Hands Converted", "69%", "Now diamond hands"),
    ("Avg Time Without FOMO", "17", "Days of peace"),
    ("Liquidity Locked", "100%", "(And urges too)"),
];

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    html! {
        <section id="stats" style="padding:64px 16px;">
            <div style="max-width:1000px; margin:0 auto; display:flex; flex-direction:column; gap:24px;">
                <h2 style="margin:0; text-align:center; font-size:38px;">{"NUT Stats"}</h2>
                <p style="margin:0; text-align:center; opacity:0.7;">
                    {"Totally real, definitely not made up numbers"}
                </p>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(210px, 1fr)); gap:16px;">
                    { for STATS.iter().map(|&(title, value, desc)| {
                        html! {
                            <div key={title} style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; flex-direction:column; gap:10px;">
                                <p style="margin:0; font-size:14px; text-transform:uppercase; letter-spacing:1px; opacity:0.7;">{ title }</p>
                                <p style="margin:0; font-size:36px; font-weight:700; color:#e3b341;">{ value }</p>
                                <p style="margin:0; opacity:0.8;">{ desc }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
