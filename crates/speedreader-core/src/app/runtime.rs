impl Player {
    /// Start or resume playback from the current word. At the last word this
    /// restarts from the beginning.
    pub fn play(&mut self, now_ms: u64) {
        if self.tokens.is_empty() {
            return;
        }

        self.timer.cancel();
        if self.index >= self.last_index() {
            self.index = 0;
        }

        self.run = RunState::Playing;
        self.current_wpm = effective_wpm(self.index, &self.config);
        let delay_ms = self.schedule_advance(now_ms);
        debug!(
            "player: play index={} total={} wpm={} delay_ms={}",
            self.index,
            self.tokens.len(),
            self.current_wpm,
            delay_ms
        );
    }

    pub fn pause(&mut self) {
        self.timer.cancel();
        if self.run == RunState::Playing {
            self.run = RunState::Paused;
            debug!("player: pause index={}", self.index);
        }
    }

    pub fn toggle(&mut self, now_ms: u64) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now_ms);
        }
    }

    /// Fire the pending advance when it is due. At most one word is advanced
    /// per call.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.timer.take_due(now_ms).is_none() {
            return TickResult::NoRender;
        }

        self.advance(now_ms)
    }

    fn advance(&mut self, now_ms: u64) -> TickResult {
        let next = self.index + 1;
        if next >= self.tokens.len() {
            self.run = RunState::Stopped;
            info!("player: finished words={}", self.tokens.len());
            return TickResult::Finished;
        }

        // Config is read here, not when the previous word was scheduled.
        self.index = next;
        self.current_wpm = effective_wpm(next, &self.config);
        self.run = RunState::Playing;
        self.schedule_advance(now_ms);
        TickResult::RenderRequested
    }

    fn schedule_advance(&mut self, now_ms: u64) -> u64 {
        let delay_ms = self.current_delay_ms();
        self.timer.arm(now_ms, delay_ms);
        delay_ms
    }

    fn current_delay_ms(&self) -> u64 {
        let Some(token) = self.tokens.get(self.index) else {
            return 0;
        };

        match token_delay_ms(token, self.current_wpm) {
            Ok(delay_ms) => delay_ms,
            Err(err) => {
                warn!(
                    "player: no delay for index={} wpm={}: {}",
                    self.index, self.current_wpm, err
                );
                0
            }
        }
    }
}
