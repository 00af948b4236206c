use super::challenge_view::ChallengeView;
use super::commandments::Commandments;
use super::footer::Footer;
use super::game_view::GameView;
use super::hero::Hero;
use super::navigation::Navigation;
use super::nutonomics::Nutonomics;
use super::stats_section::StatsSection;
use super::testimonial::Testimonial;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:system-ui, -apple-system, sans-serif;">
            <Navigation />
            <main>
                <Hero />
                <Commandments />
                <Nutonomics />
                <section id="challenge" style="padding:64px 16px; background:rgba(22,27,34,0.4);">
                    <div style="max-width:820px; margin:0 auto; display:flex; flex-direction:column; gap:24px;">
                        <h2 style="margin:0; text-align:center; font-size:38px;">{"The NUT Challenge"}</h2>
                        <p style="margin:0; text-align:center; font-size:19px; opacity:0.7;">
                            {"Can you last 30 days without an unnecessary trade?"}
                        </p>
                        <ChallengeView />
                    </div>
                </section>
                <section id="game" style="padding:64px 16px;">
                    <div style="max-width:820px; margin:0 auto; display:flex; flex-direction:column; gap:24px;">
                        <h2 style="margin:0; text-align:center; font-size:38px;">{"Resist the Temptation"}</h2>
                        <p style="margin:0; text-align:center; font-size:19px; opacity:0.7;">
                            {"Collect falling acorns. Never, ever click \"Trade Now\"."}
                        </p>
                        <GameView />
                    </div>
                </section>
                <StatsSection />
                <Testimonial />
                <Footer />
            </main>
        </div>
    }
}
