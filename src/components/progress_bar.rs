use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub percent: f64,
    #[prop_or(8)]
    pub height: u32,
    #[prop_or("#e3b341")]
    pub color: &'static str,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let pct = props.percent.clamp(0.0, 100.0);
    html! {
        <div style={format!("width:100%; height:{}px; background:#21262d; border-radius:999px; overflow:hidden;", props.height)}>
            <div style={format!("width:{:.1}%; height:100%; background:{}; border-radius:999px; transition:width 0.3s ease;", pct, props.color)}></div>
        </div>
    }
}
