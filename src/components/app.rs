use yew::prelude::*;

use super::game_view::GameView;
use super::home_view::HomeView;
use super::settings_modal::SettingsModal;
use super::win_overlay::WinOverlay;
use crate::game::{GameAction, GameState, Phase};
use crate::settings::{self, Settings};
use crate::util::clog;

#[derive(PartialEq, Clone)]
enum View {
    Home,
    Game,
}

/// Clears the click-trace colors left on the page body by the game view.
fn clear_body_colors() {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let style = body.style();
        let _ = style.remove_property("background-color");
        let _ = style.remove_property("color");
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Home);
    // The single reducer handle IS the one live session; starting again
    // resets it rather than creating a second one.
    let game = use_reducer(GameState::idle);
    let show_settings = use_state(|| false);
    let show_win = use_state(|| false);

    // Open the win dialog when the session transitions to Won.
    {
        let show_win = show_win.clone();
        use_effect_with(game.phase, move |phase| {
            if *phase == Phase::Won {
                clog("session won");
                show_win.set(true);
            }
            || ()
        });
    }

    let start_game = {
        let game = game.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            let stored = Settings::load(&settings::browser());
            game.dispatch(GameAction::Start {
                settings: stored,
                now_ms: js_sys::Date::now(),
            });
            view.set(View::Game);
        })
    };

    let to_home = {
        let game = game.clone();
        let view = view.clone();
        Callback::from(move |_: ()| {
            game.dispatch(GameAction::Stop);
            clear_body_colors();
            view.set(View::Home);
        })
    };

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: ()| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: ()| show_settings.set(false))
    };

    let play_again = {
        let show_win = show_win.clone();
        let start_game = start_game.clone();
        Callback::from(move |_: ()| {
            show_win.set(false);
            start_game.emit(());
        })
    };
    let win_to_home = {
        let show_win = show_win.clone();
        let to_home = to_home.clone();
        Callback::from(move |_: ()| {
            show_win.set(false);
            to_home.emit(());
        })
    };

    let content = match *view {
        View::Home => html! {
            <HomeView on_start={start_game.clone()} on_settings={open_settings.clone()} />
        },
        View::Game => html! {
            <GameView game={game.clone()} on_home={to_home.clone()} />
        },
    };

    html! {
        <>
            { content }
            <SettingsModal show={*show_settings} on_close={close_settings} />
            <WinOverlay
                show={*show_win}
                elapsed_ms={game.stats.elapsed_ms}
                clicked={game.clicked}
                avg_cps={game.stats.avg_cps}
                max_cps={game.stats.max_cps}
                play_again={play_again}
                to_home={win_to_home}
            />
        </>
    }
}
