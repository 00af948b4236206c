use crate::model::challenge::{CHALLENGE_DAYS, MILESTONES};
use std::collections::BTreeSet;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MilestoneGridProps {
    pub achievements: BTreeSet<i64>,
    pub days_elapsed: i64,
}

#[function_component(MilestoneGrid)]
pub fn milestone_grid(props: &MilestoneGridProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <h3 style="margin:0; text-align:center; font-size:24px;">{"Progression Titles"}</h3>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:16px;">
                { for MILESTONES.iter().enumerate().map(|(i, m)| {
                    let achieved = props.achievements.contains(&m.day);
                    let next_day = MILESTONES.get(i + 1).map(|n| n.day).unwrap_or(CHALLENGE_DAYS + 1);
                    let current = props.days_elapsed >= m.day && props.days_elapsed < next_day;
                    let border = if achieved {
                        "#e3b341"
                    } else if current {
                        "#58a6ff"
                    } else {
                        "#30363d"
                    };
                    html! {
                        <div key={m.day} style={format!("background:#161b22; border:1px solid {}; border-radius:8px; padding:16px; display:flex; flex-direction:column; gap:6px;", border)}>
                            <div style="font-size:30px;">{ m.emoji }</div>
                            <div style="font-size:12px; opacity:0.7;">{ format!("Day {}", m.day) }</div>
                            <div style={format!("font-weight:600; font-size:17px; color:{};", if achieved { "#e3b341" } else { "#e6edf3" })}>
                                { m.title }
                            </div>
                            <div style="display:flex; justify-content:space-between; font-size:12px; opacity:0.8;">
                                { if achieved {
                                    html! { <span style="color:#2ea043;">{"✓ Achieved"}</span> }
                                } else if current {
                                    html! { <span style="color:#58a6ff;">{"Current milestone"}</span> }
                                } else {
                                    html! { <span></span> }
                                } }
                                <span>{ format!("★ {} XP", m.xp) }</span>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
