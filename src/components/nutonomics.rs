use yew::prelude::*;

const ALLOCATIONS: [(&str, &str, &str); 4] = [
    ("Self-Control Fund", "69%", "For those who didn't ape."),
    ("FOMO Tax", "20%", "Burned when you can't resist."),
    ("Temptation Pool", "10%", "Rewards for holding during pump season."),
    ("Nourishment Fund", "1%", "Reserved for post-November celebrations."),
];

#[function_component(Nutonomics)]
pub fn nutonomics() -> Html {
    html! {
        <section id="nutonomics" style="padding:64px 16px;">
            <div style="max-width:900px; margin:0 auto; display:flex; flex-direction:column; gap:24px;">
                <h2 style="margin:0; text-align:center; font-size:38px;">{"NUTonomics"}</h2>
                <p style="margin:0; text-align:center; opacity:0.7; font-size:17px;">
                    {"A parody of tokenomics for the disciplined trader"}
                </p>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(260px, 1fr)); gap:16px;">
                    { for ALLOCATIONS.iter().map(|&(title, percent, desc)| {
                        html! {
                            <div key={title} style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:24px; display:flex; flex-direction:column; gap:10px;">
                                <p style="margin:0; font-size:14px; text-transform:uppercase; letter-spacing:1px; opacity:0.7;">{ title }</p>
                                <p style="margin:0; font-size:36px; font-weight:700; color:#e3b341;">{ percent }</p>
                                <p style="margin:0; opacity:0.8;">{ desc }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
