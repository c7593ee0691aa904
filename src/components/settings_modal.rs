use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::settings::{self, ButtonDisplay, Settings};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

/// Settings dialog. Loads stored values when opened, edits them in form
/// state, and persists only on Save after validation passes. Reset fills the
/// form with defaults without touching the store.
#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let initial_count = use_state(String::new);
    let add_delay = use_state(String::new);
    let win_on_zero = use_state(|| settings::WIN_ON_ZERO_BUTTONS.default);
    let display = use_state(ButtonDisplay::default);
    let error = use_state(|| None::<String>);

    {
        let initial_count = initial_count.clone();
        let add_delay = add_delay.clone();
        let win_on_zero = win_on_zero.clone();
        let display = display.clone();
        let error = error.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                let stored = Settings::load(&settings::browser());
                initial_count.set(stored.initial_count.to_string());
                add_delay.set(stored.add_delay_ms.to_string());
                win_on_zero.set(stored.win_on_zero_buttons);
                display.set(stored.button_display);
                error.set(None);
            }
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let on_initial_input = {
        let initial_count = initial_count.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            initial_count.set(input.value());
        })
    };
    let on_delay_input = {
        let add_delay = add_delay.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            add_delay.set(input.value());
        })
    };
    let toggle_win = {
        let win_on_zero = win_on_zero.clone();
        Callback::from(move |_: MouseEvent| win_on_zero.set(!*win_on_zero))
    };
    let on_display_change = {
        let display = display.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(mode) = ButtonDisplay::parse(&select.value()) {
                display.set(mode);
            }
        })
    };

    let on_save = {
        let initial_count = initial_count.clone();
        let add_delay = add_delay.clone();
        let win_on_zero = win_on_zero.clone();
        let display = display.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let parsed = settings::validate_int(&settings::INITIAL_COUNT, initial_count.as_str())
                .and_then(|count| {
                    settings::validate_int(&settings::ADD_BUTTON_DELAY, add_delay.as_str())
                        .map(|delay| (count, delay))
                });
            match parsed {
                Ok((count, delay)) => {
                    let next = Settings {
                        initial_count: count,
                        add_delay_ms: delay,
                        win_on_zero_buttons: *win_on_zero,
                        button_display: *display,
                    };
                    next.save(&mut settings::browser());
                    error.set(None);
                    on_close.emit(());
                }
                // blocking: nothing is written until the form validates
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };
    let on_reset = {
        let initial_count = initial_count.clone();
        let add_delay = add_delay.clone();
        let win_on_zero = win_on_zero.clone();
        let display = display.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let defaults = Settings::default();
            initial_count.set(defaults.initial_count.to_string());
            add_delay.set(defaults.add_delay_ms.to_string());
            win_on_zero.set(defaults.win_on_zero_buttons);
            display.set(defaults.button_display);
            error.set(None);
        })
    };
    let on_cancel = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let field_style = "display:flex; align-items:center; justify-content:space-between; gap:12px;";
    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <div style="display:flex; flex-direction:column; gap:10px;">
                    <label style={field_style}>
                        <span>{ settings::INITIAL_COUNT.label }</span>
                        <input
                            type="number"
                            min={settings::INITIAL_COUNT.min.to_string()}
                            max={settings::INITIAL_COUNT.max.to_string()}
                            value={(*initial_count).clone()}
                            oninput={on_initial_input}
                        />
                    </label>
                    <label style={field_style}>
                        <span>{ settings::ADD_BUTTON_DELAY.label }</span>
                        <input
                            type="number"
                            min={settings::ADD_BUTTON_DELAY.min.to_string()}
                            max={settings::ADD_BUTTON_DELAY.max.to_string()}
                            value={(*add_delay).clone()}
                            oninput={on_delay_input}
                        />
                    </label>
                    <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                        <input type="checkbox" checked={*win_on_zero} onclick={toggle_win} />
                        <span>{"Win when no buttons remain"}</span>
                    </label>
                    <label style={field_style}>
                        <span>{"Button text"}</span>
                        <select onchange={on_display_change}>
                            { for ButtonDisplay::ALL.iter().map(|mode| html! {
                                <option
                                    value={mode.as_str()}
                                    selected={*display == *mode}
                                >
                                    { mode.label() }
                                </option>
                            }) }
                        </select>
                    </label>
                </div>
                {
                    if let Some(msg) = (*error).clone() {
                        html! { <div style="color:#f85149; font-size:13px;">{ msg }</div> }
                    } else {
                        html! {}
                    }
                }
                <div style="display:flex; gap:8px; justify-content:flex-end;">
                    <button onclick={on_reset}>{"Reset"}</button>
                    <button onclick={on_cancel}>{"Cancel"}</button>
                    <button onclick={on_save}>{"Save"}</button>
                </div>
            </div>
        </div>
    }
}
