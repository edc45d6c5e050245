impl Player {
    /// Jump to `target`, clamped to the text. Playback keeps running if it was
    /// running and stays idle otherwise.
    pub fn seek_to(&mut self, target: usize, now_ms: u64) {
        if self.tokens.is_empty() {
            return;
        }

        let was_playing = self.is_playing();
        self.timer.cancel();

        self.index = target.min(self.last_index());
        self.current_wpm = effective_wpm(self.index, &self.config);
        if was_playing {
            self.schedule_advance(now_ms);
        }

        debug!(
            "player: seek target={} index={} total={} playing={}",
            target,
            self.index,
            self.tokens.len(),
            was_playing
        );
    }

    pub fn seek_by(&mut self, delta: isize, now_ms: u64) {
        let target = self.index.saturating_add_signed(delta);
        self.seek_to(target, now_ms);
    }

    pub fn reset(&mut self) {
        self.timer.cancel();
        self.index = 0;
        self.run = RunState::Stopped;
        self.current_wpm = self.config.start_wpm();
        debug!("player: reset total={}", self.tokens.len());
    }

    /// Replace the text. Leaves the player stopped at the first word.
    pub fn set_text(&mut self, text: &str) {
        self.timer.cancel();
        self.tokens = tokenize(text);
        info!("player: text replaced words={}", self.tokens.len());
        self.reset();
    }

    /// Merge `patch` into the active speed settings. The word on screen keeps
    /// its scheduled time; the new speed applies from the next word.
    pub fn update_config(&mut self, patch: SpeedConfigPatch) -> Result<(), ConfigError> {
        match self.config.apply(patch) {
            Ok(config) => {
                self.config = config;
                debug!(
                    "player: config start_wpm={} target_wpm={} ramp_up_words={}",
                    config.start_wpm(),
                    config.target_wpm(),
                    config.ramp_up_words()
                );
                Ok(())
            }
            Err(err) => {
                warn!("player: rejected config patch {:?}: {}", patch, err);
                Err(err)
            }
        }
    }

    pub fn apply_preset(&mut self, preset: SpeedPreset) {
        self.config = preset.config();
        debug!("player: preset {}", preset);
    }
}
