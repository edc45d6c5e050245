impl Player {
    /// Drain `input`, applying every event. Stops early when an event asks to
    /// close the reader.
    pub fn pump_input<IN>(
        &mut self,
        input: &mut IN,
        now_ms: u64,
    ) -> Result<InputOutcome, IN::Error>
    where
        IN: InputProvider,
    {
        let mut outcome = InputOutcome::Ignored;

        while let Some(event) = input.poll_event()? {
            match self.apply_input(event, now_ms) {
                InputOutcome::CloseRequested => return Ok(InputOutcome::CloseRequested),
                InputOutcome::Handled => outcome = InputOutcome::Handled,
                InputOutcome::Ignored => {}
            }
        }

        Ok(outcome)
    }

    pub fn apply_input(&mut self, event: InputEvent, now_ms: u64) -> InputOutcome {
        match event.key {
            Key::Space => self.toggle(now_ms),
            Key::ArrowLeft => {
                let step = seek_step(event.modifiers) as isize;
                self.seek_by(-step, now_ms);
            }
            Key::ArrowRight => {
                let step = seek_step(event.modifiers) as isize;
                self.seek_by(step, now_ms);
            }
            Key::ArrowUp => {
                self.nudge_target_wpm(true);
            }
            Key::ArrowDown => {
                self.nudge_target_wpm(false);
            }
            Key::Char('r' | 'R') if !event.modifiers.ctrl && !event.modifiers.meta => {
                self.reset();
            }
            Key::Escape => {
                self.pause();
                return InputOutcome::CloseRequested;
            }
            Key::Char(_) | Key::Other => return InputOutcome::Ignored,
        }

        InputOutcome::Handled
    }

    fn nudge_target_wpm(&mut self, increase: bool) -> bool {
        let current = self.config.target_wpm();
        let next = if increase {
            current.saturating_add(WPM_STEP).min(MAX_TARGET_WPM)
        } else {
            current.saturating_sub(WPM_STEP).max(MIN_TARGET_WPM)
        };

        next != current && self.update_config(SpeedConfigPatch::target_wpm(next)).is_ok()
    }
}

fn seek_step(modifiers: Modifiers) -> usize {
    if modifiers.shift {
        SEEK_STEP_WORDS_LARGE
    } else {
        SEEK_STEP_WORDS
    }
}
