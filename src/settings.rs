//! Persisted game settings.
//!
//! Settings live as individual string keys in `localStorage`. A missing or
//! unparsable key is never an error: getters fall back to the schema default.
//! Bounds in the schema are consumed by the settings form, not enforced by
//! the store itself.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer setting key with its default and the bounds the settings form
/// validates against.
pub struct IntKey {
    pub name: &'static str,
    pub label: &'static str,
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

/// Boolean setting key. Persisted as the literal strings "true" / "false".
pub struct BoolKey {
    pub name: &'static str,
    pub default: bool,
}

pub const INITIAL_COUNT: IntKey = IntKey {
    name: "initialCount",
    label: "Initial buttons",
    default: 100,
    min: 0,
    max: 10_000,
};

pub const ADD_BUTTON_DELAY: IntKey = IntKey {
    name: "addButtonDelay",
    label: "Spawn delay (ms)",
    default: 1000,
    min: 1,
    max: 600_000,
};

pub const WIN_ON_ZERO_BUTTONS: BoolKey = BoolKey {
    name: "winOnZeroButtons",
    default: true,
};

pub const BUTTON_DISPLAY_KEY: &str = "buttonDisplay";

/// What text a spawned button shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonDisplay {
    /// The button's own hex color code, e.g. "#abc123".
    #[default]
    HexColor,
    /// The button's 1-based creation ordinal.
    Counter,
    /// Elapsed session time at creation, frozen (not live-updating).
    ElapsedTime,
}

impl ButtonDisplay {
    pub const ALL: [ButtonDisplay; 3] = [
        ButtonDisplay::HexColor,
        ButtonDisplay::Counter,
        ButtonDisplay::ElapsedTime,
    ];

    /// Canonical persisted form.
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonDisplay::HexColor => "hex-color",
            ButtonDisplay::Counter => "counter",
            ButtonDisplay::ElapsedTime => "elapsed-time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonDisplay::HexColor => "Hex color",
            ButtonDisplay::Counter => "Counter",
            ButtonDisplay::ElapsedTime => "Elapsed time",
        }
    }

    /// Parses the canonical symbolic name. Also accepts the ordinal integers
    /// an earlier revision persisted, so existing stores keep working.
    pub fn parse(raw: &str) -> Option<ButtonDisplay> {
        match raw {
            "hex-color" | "0" => Some(ButtonDisplay::HexColor),
            "counter" | "1" => Some(ButtonDisplay::Counter),
            "elapsed-time" | "2" => Some(ButtonDisplay::ElapsedTime),
            _ => None,
        }
    }
}

/// Seam over the underlying string store, so the settings layer runs against
/// an in-memory map in tests and `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// `localStorage`-backed store. All operations degrade to no-ops when the
/// window or storage is unavailable.
#[derive(Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()?.local_storage().ok().flatten()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                let _ = store.set_item(key, value);
            }
        }
    }
}

/// In-memory store used by the tests.
#[derive(Default)]
pub struct MemoryStore(HashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

/// Typed accessors over a raw string store.
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_int(&self, key: &IntKey) -> u32 {
        self.store
            .get(key.name)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(key.default)
    }

    pub fn set_int(&mut self, key: &IntKey, value: u32) {
        self.store.set(key.name, &value.to_string());
    }

    pub fn get_bool(&self, key: &BoolKey) -> bool {
        match self.store.get(key.name).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => key.default,
        }
    }

    pub fn set_bool(&mut self, key: &BoolKey, value: bool) {
        self.store.set(key.name, if value { "true" } else { "false" });
    }

    pub fn get_display(&self) -> ButtonDisplay {
        self.store
            .get(BUTTON_DISPLAY_KEY)
            .and_then(|raw| ButtonDisplay::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_display(&mut self, value: ButtonDisplay) {
        self.store.set(BUTTON_DISPLAY_KEY, value.as_str());
    }
}

/// Settings store over the browser's `localStorage`.
pub fn browser() -> SettingsStore<BrowserStore> {
    SettingsStore::new(BrowserStore)
}

/// Snapshot of all settings, read once at session start. Changes saved while
/// a session is running take effect on the next start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub initial_count: u32,
    pub add_delay_ms: u32,
    pub win_on_zero_buttons: bool,
    pub button_display: ButtonDisplay,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_count: INITIAL_COUNT.default,
            add_delay_ms: ADD_BUTTON_DELAY.default,
            win_on_zero_buttons: WIN_ON_ZERO_BUTTONS.default,
            button_display: ButtonDisplay::default(),
        }
    }
}

impl Settings {
    pub fn load<S: KeyValueStore>(store: &SettingsStore<S>) -> Self {
        Self {
            initial_count: store.get_int(&INITIAL_COUNT),
            add_delay_ms: store.get_int(&ADD_BUTTON_DELAY),
            win_on_zero_buttons: store.get_bool(&WIN_ON_ZERO_BUTTONS),
            button_display: store.get_display(),
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut SettingsStore<S>) {
        store.set_int(&INITIAL_COUNT, self.initial_count);
        store.set_int(&ADD_BUTTON_DELAY, self.add_delay_ms);
        store.set_bool(&WIN_ON_ZERO_BUTTONS, self.win_on_zero_buttons);
        store.set_display(self.button_display);
    }
}

/// Why a settings form submission was rejected. Shown as a blocking message
/// in the dialog; nothing is persisted on failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsError {
    NotANumber { field: &'static str },
    OutOfRange { field: &'static str, min: u32, max: u32 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NotANumber { field } => {
                write!(f, "{} must be a whole number", field)
            }
            SettingsError::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
        }
    }
}

/// Parses and bounds-checks one integer form field against its schema key.
pub fn validate_int(key: &IntKey, raw: &str) -> Result<u32, SettingsError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| SettingsError::NotANumber { field: key.label })?;
    if value < key.min || value > key.max {
        return Err(SettingsError::OutOfRange {
            field: key.label,
            min: key.min,
            max: key.max,
        });
    }
    Ok(value)
}
