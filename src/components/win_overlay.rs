use yew::prelude::*;

use crate::util::format_duration;

#[derive(Properties, PartialEq, Clone)]
pub struct WinOverlayProps {
    pub show: bool,
    pub elapsed_ms: f64,
    pub clicked: u32,
    pub avg_cps: f64,
    pub max_cps: f64,
    pub play_again: Callback<()>,
    pub to_home: Callback<()>,
}

#[function_component(WinOverlay)]
pub fn win_overlay(props: &WinOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let again_btn = {
        let cb = props.play_again.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let home_btn = {
        let cb = props.to_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); color:#e6edf3; border:2px solid #2ea043; padding:24px 32px; border-radius:12px; text-align:center; min-width:300px; z-index:60;">
            <h2 style="margin:0 0 12px 0; color:#2ea043;">{"You Win!"}</h2>
            <p style="margin:4px 0;">{ format!("Time: {}", format_duration(props.elapsed_ms.max(0.0) as u64)) }</p>
            <p style="margin:4px 0;">{ format!("Buttons clicked: {}", props.clicked) }</p>
            <p style="margin:4px 0;">{ format!("Average rate: {:.2} c/s", props.avg_cps) }</p>
            <p style="margin:4px 0;">{ format!("Peak rate: {:.2} c/s", props.max_cps) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={again_btn}>{"Play Again"}</button>
                <button onclick={home_btn}>{"Home"}</button>
            </div>
        </div>
    }
}
