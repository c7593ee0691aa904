use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::color_button::ColorButtonView;
use super::stats_panel::StatsPanel;
use crate::game::{GameAction, GameState};
use crate::util;

const STATS_PERIOD_MS: i32 = 1000;
/// Initial-burst spawns are batched in groups of this size, one extra
/// millisecond of delay per group, so a large initial count cannot starve
/// the rendering thread.
const BURST_BATCH: u32 = 10;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub game: UseReducerHandle<GameState>,
    pub on_home: Callback<()>,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    // Timers for the current session: the initial burst of one-shot spawns,
    // the repeating spawn interval, and the stats interval. Keyed on the
    // session counter so every start re-arms them, and cleaned up whenever
    // the phase leaves Running (stop, win) or the view unmounts. Burst
    // timeout handles are tracked and cleared too, so no spawn can land in a
    // torn-down session.
    {
        let game = props.game.clone();
        let running = game.is_running();
        let session = game.session;
        let initial_count = game.initial_count;
        let delay_ms = game.add_delay_ms;
        use_effect_with((running, session), move |&(running, _)| {
            let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
            if running {
                if let Some(window) = web_sys::window() {
                    let spawn_cb = {
                        let game = game.clone();
                        Closure::wrap(Box::new(move || {
                            game.dispatch(GameAction::Spawn {
                                color: util::random_color(),
                                now_ms: js_sys::Date::now(),
                            });
                        }) as Box<dyn FnMut()>)
                    };
                    let stats_cb = {
                        let game = game.clone();
                        Closure::wrap(Box::new(move || {
                            game.dispatch(GameAction::StatsTick {
                                now_ms: js_sys::Date::now(),
                            });
                        }) as Box<dyn FnMut()>)
                    };

                    let mut burst_ids = Vec::with_capacity(initial_count as usize);
                    for i in 0..initial_count {
                        let delay = (i / BURST_BATCH) as i32;
                        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                            spawn_cb.as_ref().unchecked_ref(),
                            delay,
                        ) {
                            burst_ids.push(id);
                        }
                    }
                    let spawn_id = window
                        .set_interval_with_callback_and_timeout_and_arguments_0(
                            spawn_cb.as_ref().unchecked_ref(),
                            delay_ms as i32,
                        )
                        .ok();
                    let stats_id = window
                        .set_interval_with_callback_and_timeout_and_arguments_0(
                            stats_cb.as_ref().unchecked_ref(),
                            STATS_PERIOD_MS,
                        )
                        .ok();

                    cleanup = Box::new(move || {
                        for id in burst_ids {
                            window.clear_timeout_with_handle(id);
                        }
                        if let Some(id) = spawn_id {
                            window.clear_interval_with_handle(id);
                        }
                        if let Some(id) = stats_id {
                            window.clear_interval_with_handle(id);
                        }
                        // Closures must outlive their timers.
                        drop(spawn_cb);
                        drop(stats_cb);
                    });
                }
            }
            cleanup
        });
    }

    // Paint the page body with the colors of the last clicked button. This
    // is page-level state, not session state: it persists until the home
    // view resets it.
    {
        use_effect_with(props.game.last_clicked.clone(), move |last| {
            if let Some(color) = last {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let style = body.style();
                    let _ = style.set_property("background-color", &color.background);
                    let _ = style.set_property("color", color.text.as_css());
                }
            }
            || ()
        });
    }

    let on_click = {
        let game = props.game.clone();
        Callback::from(move |id: u64| {
            game.dispatch(GameAction::Click { id });
        })
    };
    let home_btn = {
        let cb = props.on_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let game = &props.game;
    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            { for game.buttons.iter().map(|b| html! {
                <ColorButtonView
                    key={b.id.to_string()}
                    id={b.id}
                    background={b.color.background.clone()}
                    text_color={b.color.text.as_css()}
                    label={b.label.clone()}
                    on_click={on_click.clone()}
                />
            }) }
            <StatsPanel
                created={game.created}
                clicked={game.clicked}
                remaining={game.remaining()}
                elapsed_ms={game.stats.elapsed_ms}
                avg_cps={game.stats.avg_cps}
                max_cps={game.stats.max_cps}
            />
            <div style="position:absolute; top:12px; right:12px;">
                <button onclick={home_btn}>{"Home"}</button>
            </div>
        </div>
    }
}
