use std::{io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use log::debug;
use speedreader_core::input::{InputEvent, InputProvider, Key, Modifiers};

/// Keyboard in raw mode. Raw mode is left again when this is dropped.
pub(super) struct KeyboardInput {
    _private: (),
}

impl KeyboardInput {
    pub(super) fn open() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for KeyboardInput {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            debug!("keyboard: failed to leave raw mode: {err}");
        }
    }
}

impl InputProvider for KeyboardInput {
    type Error = io::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if let Some(event) = map_key(key) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let modifiers = Modifiers {
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        ctrl,
        meta: key.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };

    let key = match key.code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Esc => Key::Escape,
        // Raw mode swallows SIGINT.
        KeyCode::Char('c') if ctrl => Key::Escape,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => Key::Other,
    };

    Some(InputEvent { key, modifiers })
}
