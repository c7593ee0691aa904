//! Browser-only tests, run with `wasm-pack test --headless --firefox` (or
//! any wasm-bindgen test runner). Compiled out entirely on native targets.

#![cfg(target_arch = "wasm32")]

use button_rain::settings::{self, Settings, SettingsStore, BrowserStore, INITIAL_COUNT};
use button_rain::util;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let mut store = SettingsStore::new(BrowserStore);
    store.set_int(&INITIAL_COUNT, 7);
    assert_eq!(store.get_int(&INITIAL_COUNT), 7);

    let settings = Settings {
        initial_count: 3,
        ..Settings::default()
    };
    settings.save(&mut store);
    assert_eq!(Settings::load(&settings::browser()), settings);
}

#[wasm_bindgen_test]
fn random_color_is_well_formed() {
    for _ in 0..64 {
        let color = util::random_color();
        assert_eq!(color.background.len(), 7);
        assert!(color.background.starts_with('#'));
        assert!(color.background[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[wasm_bindgen_test]
fn viewport_positions_are_never_negative() {
    for _ in 0..64 {
        let (vw, vh) = util::viewport_size();
        let (l, t) = util::position_in(
            (vw, vh),
            (120.0, 40.0),
            js_sys::Math::random(),
            js_sys::Math::random(),
        );
        assert!(l >= 0.0);
        assert!(t >= 0.0);
    }
}
