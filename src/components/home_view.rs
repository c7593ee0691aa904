use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HomeViewProps {
    pub on_start: Callback<()>,
    pub on_settings: Callback<()>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let settings_btn = {
        let cb = props.on_settings.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.87); color:#e6edf3; border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:480px; width:90%; box-shadow:0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; text-align:center;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff;">{"Button Rain"}</h2>
            <p style="margin:4px 0 14px 0; opacity:0.85;">
                {"Colorful buttons rain onto the screen. Click them all before they pile up."}
            </p>
            <div style="display:flex; gap:12px; justify-content:center;">
                <button onclick={start_btn}>{"Start"}</button>
                <button onclick={settings_btn}>{"Settings"}</button>
            </div>
        </div>
    }
}
