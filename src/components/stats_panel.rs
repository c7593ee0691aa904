use yew::prelude::*;

use crate::util::format_duration;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub created: u32,
    pub clicked: u32,
    pub remaining: u32,
    pub elapsed_ms: f64,
    pub avg_cps: f64,
    pub max_cps: f64,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let row = |label: &str, value: String| {
        html! {
            <div style={row_style}>
                <span style={label_style}>{ label.to_string() }</span>
                <span style={value_style}>{ value }</span>
            </div>
        }
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:210px; display:flex; flex-direction:column; gap:6px; font-size:14px;">
            { row("Created", props.created.to_string()) }
            { row("Clicked", props.clicked.to_string()) }
            { row("Remaining", props.remaining.to_string()) }
            { row("Elapsed", format_duration(props.elapsed_ms.max(0.0) as u64)) }
            { row("Avg c/s", format!("{:.2}", props.avg_cps)) }
            { row("Max c/s", format!("{:.2}", props.max_cps)) }
        </div>
    }
}
