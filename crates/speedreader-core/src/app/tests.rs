use super::*;
use crate::input::mock::MockInput;

fn flat_config(wpm: u32) -> SpeedConfig {
    SpeedConfig::new(wpm, wpm, 1).unwrap()
}

fn numbered_words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn current_word(player: &Player) -> Option<&str> {
    player.state().current_token.map(|t| t.word.as_str())
}

#[test]
fn starts_stopped_on_first_word() {
    let player = Player::new("alpha beta", SpeedConfig::default());
    let state = player.state();

    assert_eq!(player.run_state(), RunState::Stopped);
    assert_eq!(current_word(&player), Some("alpha"));
    assert_eq!(state.current_index, 0);
    assert!(!state.is_playing);
    assert_eq!(state.current_wpm, 200);
    assert_eq!(state.progress, 0.0);
    assert_eq!(player.next_deadline_ms(), None);
}

#[test]
fn advances_one_word_per_firing_until_finished() {
    let mut player = Player::new("one two three four", flat_config(300));
    player.play(0);
    assert_eq!(player.next_deadline_ms(), Some(200));

    let mut seen = vec![player.state().current_index];
    loop {
        let due = player.next_deadline_ms().expect("advance scheduled while playing");
        assert_eq!(player.tick(due - 1), TickResult::NoRender);
        match player.tick(due) {
            TickResult::RenderRequested => seen.push(player.state().current_index),
            TickResult::Finished => break,
            TickResult::NoRender => panic!("due advance did not fire"),
        }
    }

    assert_eq!(seen, [0, 1, 2, 3]);
    assert_eq!(player.run_state(), RunState::Stopped);
    assert!(!player.is_playing());
    assert_eq!(player.state().current_index, 3);
    assert_eq!(player.next_deadline_ms(), None);
    assert_eq!(player.tick(u64::MAX), TickResult::NoRender);
}

#[test]
fn progress_tracks_index_over_total() {
    let mut player = Player::new("a b c d", flat_config(600));
    player.play(0);
    player.tick(100);
    assert_eq!(player.state().progress, 0.25);
    player.tick(200);
    assert_eq!(player.state().progress, 0.5);
}

#[test]
fn play_at_end_restarts_from_first_word() {
    let mut player = Player::new("a b c", flat_config(600));
    player.play(0);
    player.tick(100);
    player.tick(200);
    assert_eq!(player.tick(300), TickResult::Finished);
    assert_eq!(player.state().current_index, 2);

    player.play(1_000);
    assert!(player.is_playing());
    assert_eq!(player.state().current_index, 0);
    assert_eq!(current_word(&player), Some("a"));
    assert_eq!(player.next_deadline_ms(), Some(1_100));
}

#[test]
fn ramp_up_raises_speed_per_word() {
    let mut player = Player::new(&numbered_words(40), SpeedConfig::new(200, 350, 30).unwrap());
    player.play(0);
    assert_eq!(player.state().current_wpm, 200);
    assert_eq!(player.next_deadline_ms(), Some(300));

    for _ in 0..15 {
        let due = player.next_deadline_ms().unwrap();
        player.tick(due);
    }
    assert_eq!(player.state().current_index, 15);
    assert_eq!(player.state().current_wpm, 275);

    player.seek_to(35, 10_000);
    assert_eq!(player.state().current_wpm, 350);
}

#[test]
fn pause_keeps_position_and_cancels_advance() {
    let mut player = Player::new("a b c", flat_config(600));
    player.play(0);
    player.tick(100);

    player.pause();
    assert_eq!(player.run_state(), RunState::Paused);
    assert_eq!(player.next_deadline_ms(), None);
    assert_eq!(player.tick(10_000), TickResult::NoRender);
    assert_eq!(current_word(&player), Some("b"));

    player.pause();
    assert_eq!(player.run_state(), RunState::Paused);

    player.play(20_000);
    assert_eq!(current_word(&player), Some("b"));
    assert_eq!(player.next_deadline_ms(), Some(20_100));
}

#[test]
fn pause_while_stopped_stays_stopped() {
    let mut player = Player::new("a b c", flat_config(600));
    player.pause();
    assert_eq!(player.run_state(), RunState::Stopped);
}

#[test]
fn replaying_supersedes_previous_schedule() {
    let mut player = Player::new("a b c", flat_config(600));
    player.play(0);
    let first = player.timer().pending().unwrap();

    player.play(50);
    let second = player.timer().pending().unwrap();
    assert_ne!(first.ticket, second.ticket);
    assert_eq!(second.due_ms, 150);

    assert_eq!(player.tick(100), TickResult::NoRender);
    assert_eq!(player.state().current_index, 0);
    assert_eq!(player.tick(150), TickResult::RenderRequested);
}

#[test]
fn seek_while_playing_reschedules_exactly_once() {
    let mut player = Player::new(&numbered_words(20), flat_config(300));
    player.play(0);
    let armed_before = player.timer().armed_count();

    player.seek_to(7, 50);

    assert!(player.is_playing());
    assert_eq!(player.state().current_index, 7);
    assert_eq!(player.timer().armed_count(), armed_before + 1);
    assert_eq!(player.next_deadline_ms(), Some(250));
    assert_eq!(player.tick(200), TickResult::NoRender);
    assert_eq!(player.tick(250), TickResult::RenderRequested);
    assert_eq!(player.state().current_index, 8);
}

#[test]
fn seek_while_idle_schedules_nothing() {
    let mut player = Player::new(&numbered_words(20), flat_config(300));

    player.seek_to(5, 0);
    assert_eq!(player.run_state(), RunState::Stopped);
    assert_eq!(player.next_deadline_ms(), None);
    assert_eq!(player.timer().armed_count(), 0);

    player.play(0);
    player.pause();
    player.seek_to(12, 10);
    assert_eq!(player.run_state(), RunState::Paused);
    assert!(!player.state().is_playing);
    assert_eq!(player.state().current_index, 12);
    assert_eq!(player.next_deadline_ms(), None);
}

#[test]
fn seek_clamps_out_of_range_targets() {
    let mut player = Player::new("a b c", flat_config(300));
    player.seek_to(99, 0);
    assert_eq!(player.state().current_index, 2);
    assert_eq!(current_word(&player), Some("c"));

    player.seek_by(-50, 0);
    assert_eq!(player.state().current_index, 0);
}

#[test]
fn config_changes_apply_from_next_word() {
    let mut player = Player::new("a b c", flat_config(300));
    player.play(0);

    player
        .update_config(SpeedConfigPatch {
            start_wpm: Some(600),
            target_wpm: Some(600),
            ramp_up_words: None,
        })
        .unwrap();
    assert_eq!(player.next_deadline_ms(), Some(200));
    assert_eq!(player.state().current_wpm, 300);

    assert_eq!(player.tick(200), TickResult::RenderRequested);
    assert_eq!(player.state().current_wpm, 600);
    assert_eq!(player.next_deadline_ms(), Some(300));
}

#[test]
fn invalid_config_is_rejected_and_kept() {
    let mut player = Player::new("a b c", SpeedConfig::default());
    let before = *player.config();

    assert_eq!(
        player.update_config(SpeedConfigPatch::target_wpm(0)),
        Err(ConfigError::ZeroTargetWpm)
    );
    assert_eq!(
        player.update_config(SpeedConfigPatch {
            ramp_up_words: Some(0),
            ..SpeedConfigPatch::default()
        }),
        Err(ConfigError::ZeroRampUpWords)
    );
    assert_eq!(*player.config(), before);
}

#[test]
fn preset_replaces_whole_config() {
    let mut player = Player::new("a b c", SpeedConfig::default());
    player.apply_preset(SpeedPreset::Fast);
    assert_eq!(*player.config(), SpeedPreset::Fast.config());

    player.reset();
    assert_eq!(player.state().current_wpm, 300);
}

#[test]
fn reset_returns_to_first_word_stopped() {
    let mut player = Player::new(&numbered_words(10), SpeedConfig::new(200, 400, 2).unwrap());
    player.play(0);
    for _ in 0..4 {
        let due = player.next_deadline_ms().unwrap();
        player.tick(due);
    }
    assert_eq!(player.state().current_wpm, 400);

    player.reset();
    let state = player.state();
    assert_eq!(player.run_state(), RunState::Stopped);
    assert_eq!(state.current_index, 0);
    assert_eq!(state.current_wpm, 200);
    assert_eq!(state.progress, 0.0);
    assert_eq!(current_word(&player), Some("w0"));
    assert_eq!(player.next_deadline_ms(), None);
}

#[test]
fn set_text_replaces_tokens_and_resets() {
    let mut player = Player::new("a b c d e", flat_config(300));
    player.play(0);
    player.tick(200);

    player.set_text("Hello, world. New paragraph.\n\nSecond para.");
    assert_eq!(player.total(), 6);
    assert_eq!(player.run_state(), RunState::Stopped);
    assert_eq!(player.next_deadline_ms(), None);
    assert_eq!(current_word(&player), Some("Hello,"));
    assert_eq!(player.tick(u64::MAX), TickResult::NoRender);
}

#[test]
fn empty_text_makes_every_operation_inert() {
    let mut player = Player::new("   \n\n ", SpeedConfig::default());
    let mut input = MockInput::from_events(&[
        InputEvent::key(Key::Space),
        InputEvent::key(Key::ArrowRight),
    ])
    .unwrap();

    player.play(0);
    player.seek_to(5, 0);
    player.seek_by(-3, 0);
    assert_eq!(player.pump_input(&mut input, 0), Ok(InputOutcome::Handled));
    player.pause();
    player.reset();

    let state = player.state();
    assert!(state.current_token.is_none());
    assert!(!state.is_playing);
    assert_eq!(state.progress, 0.0);
    assert_eq!(state.current_index, 0);
    assert_eq!(player.next_deadline_ms(), None);
    assert_eq!(player.tick(1_000), TickResult::NoRender);

    let mut empty = false;
    player.with_screen(|screen| empty = matches!(screen, Screen::Empty { .. }));
    assert!(empty);
}

#[test]
fn at_most_one_advance_pending_across_mutations() {
    let mut player = Player::new(&numbered_words(30), flat_config(300));
    let mut now = 0u64;

    player.play(now);
    for step in 0..12u64 {
        now += 37;
        match step % 6 {
            0 => player.seek_to(step as usize * 2, now),
            1 => {
                player.update_config(SpeedConfigPatch::target_wpm(250)).unwrap();
            }
            2 => player.pause(),
            3 => player.play(now),
            4 => {
                player.tick(now + 500);
            }
            _ => player.toggle(now),
        }

        assert_eq!(player.timer().pending().is_some(), player.is_playing());
    }

    player.reset();
    assert!(player.timer().pending().is_none());
}

#[test]
fn keyboard_seeks_in_small_and_large_steps() {
    let mut player = Player::new(&numbered_words(100), SpeedConfig::default());

    player.apply_input(InputEvent::key(Key::ArrowRight), 0);
    assert_eq!(player.state().current_index, 10);
    player.apply_input(InputEvent::shifted(Key::ArrowRight), 0);
    assert_eq!(player.state().current_index, 60);
    for _ in 0..5 {
        player.apply_input(InputEvent::key(Key::ArrowRight), 0);
    }
    assert_eq!(player.state().current_index, 99);

    player.apply_input(InputEvent::shifted(Key::ArrowLeft), 0);
    assert_eq!(player.state().current_index, 49);
    for _ in 0..6 {
        player.apply_input(InputEvent::key(Key::ArrowLeft), 0);
    }
    assert_eq!(player.state().current_index, 0);
    assert!(!player.is_playing());
}

#[test]
fn keyboard_adjusts_target_speed_within_bounds() {
    let mut player = Player::new("a b c", SpeedConfig::default());

    assert_eq!(player.apply_input(InputEvent::key(Key::ArrowUp), 0), InputOutcome::Handled);
    assert_eq!(player.config().target_wpm(), 375);

    player.update_config(SpeedConfigPatch::target_wpm(790)).unwrap();
    player.apply_input(InputEvent::key(Key::ArrowUp), 0);
    assert_eq!(player.config().target_wpm(), 800);
    player.apply_input(InputEvent::key(Key::ArrowUp), 0);
    assert_eq!(player.config().target_wpm(), 800);

    player.update_config(SpeedConfigPatch::target_wpm(110)).unwrap();
    player.apply_input(InputEvent::key(Key::ArrowDown), 0);
    assert_eq!(player.config().target_wpm(), 100);
    player.apply_input(InputEvent::key(Key::ArrowDown), 0);
    assert_eq!(player.config().target_wpm(), 100);
    assert_eq!(player.config().start_wpm(), 200);
}

#[test]
fn keyboard_toggle_reset_and_close() {
    let mut player = Player::new(&numbered_words(10), flat_config(300));

    player.apply_input(InputEvent::key(Key::Space), 0);
    assert!(player.is_playing());
    player.tick(200);
    assert_eq!(player.state().current_index, 1);

    let ctrl_r = InputEvent {
        key: Key::Char('r'),
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
    };
    assert_eq!(player.apply_input(ctrl_r, 250), InputOutcome::Ignored);
    assert_eq!(player.state().current_index, 1);
    assert_eq!(player.apply_input(InputEvent::key(Key::Char('x')), 250), InputOutcome::Ignored);

    assert_eq!(
        player.apply_input(InputEvent::key(Key::Escape), 300),
        InputOutcome::CloseRequested
    );
    assert_eq!(player.run_state(), RunState::Paused);

    player.apply_input(InputEvent::key(Key::Char('R')), 400);
    assert_eq!(player.run_state(), RunState::Stopped);
    assert_eq!(player.state().current_index, 0);
}

#[test]
fn pump_input_stops_at_close_request() {
    let mut player = Player::new(&numbered_words(30), flat_config(300));
    let mut input = MockInput::from_events(&[
        InputEvent::key(Key::Space),
        InputEvent::key(Key::ArrowRight),
        InputEvent::key(Key::Escape),
        InputEvent::key(Key::Space),
    ])
    .unwrap();

    assert_eq!(
        player.pump_input(&mut input, 0),
        Ok(InputOutcome::CloseRequested)
    );
    assert_eq!(input.pending(), 1);
    assert_eq!(player.state().current_index, 10);
    assert_eq!(player.run_state(), RunState::Paused);
    assert_eq!(player.next_deadline_ms(), None);
}

#[test]
fn screen_exposes_focus_split_of_current_word() {
    let mut player = Player::new("Reading quickly.", flat_config(300));
    player.play(0);

    let mut seen = None;
    player.with_screen(|screen| {
        if let Screen::Reading {
            word,
            index,
            total,
            playing,
            end_of_sentence,
            ..
        } = screen
        {
            seen = Some((
                word.before,
                word.focus,
                word.after,
                index,
                total,
                playing,
                end_of_sentence,
            ));
        }
    });
    assert_eq!(seen, Some(("Re", "a", "ding", 0, 2, true, false)));
}

#[test]
fn every_preset_schedules_a_real_delay() {
    for preset in SpeedPreset::ALL {
        let mut player = Player::new(&numbered_words(3), preset.config());
        player.play(1_000);

        let expected = 60_000 / u64::from(preset.config().start_wpm());
        assert_eq!(player.next_deadline_ms(), Some(1_000 + expected), "{preset}");
    }
}
