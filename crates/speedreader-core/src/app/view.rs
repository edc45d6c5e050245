impl Player {
    pub fn new(text: &str, config: SpeedConfig) -> Self {
        Self::from_tokens(tokenize(text), config)
    }

    pub fn from_tokens(tokens: Vec<Token>, config: SpeedConfig) -> Self {
        info!(
            "player: loaded words={} start_wpm={} target_wpm={} ramp_up_words={}",
            tokens.len(),
            config.start_wpm(),
            config.target_wpm(),
            config.ramp_up_words()
        );

        Self {
            tokens,
            config,
            run: RunState::Stopped,
            index: 0,
            current_wpm: config.start_wpm(),
            timer: AdvanceTimer::new(),
        }
    }

    pub fn state(&self) -> PlaybackState<'_> {
        PlaybackState {
            current_token: self.tokens.get(self.index),
            current_index: self.index,
            is_playing: self.is_playing(),
            current_wpm: self.current_wpm,
            progress: self.progress(),
        }
    }

    pub fn with_screen<'a, F, R>(&'a self, f: F) -> R
    where
        F: FnOnce(Screen<'a>) -> R,
    {
        let Some(token) = self.tokens.get(self.index) else {
            return f(Screen::Empty {
                wpm: self.current_wpm,
            });
        };

        f(Screen::Reading {
            word: FocusWord::new(&token.word),
            index: self.index,
            total: self.tokens.len(),
            wpm: self.current_wpm,
            progress: self.progress(),
            playing: self.is_playing(),
            end_of_sentence: token.is_end_of_sentence,
            end_of_paragraph: token.is_end_of_paragraph,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn total(&self) -> usize {
        self.tokens.len()
    }

    pub fn config(&self) -> &SpeedConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    pub fn is_playing(&self) -> bool {
        self.run == RunState::Playing
    }

    /// When the pending advance is due, if one is scheduled.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timer.pending().map(|deadline| deadline.due_ms)
    }

    /// The controller's advance timer, for hosts that need its ticket
    /// history.
    pub fn timer(&self) -> &AdvanceTimer {
        &self.timer
    }

    fn progress(&self) -> f64 {
        if self.tokens.is_empty() {
            0.0
        } else {
            self.index as f64 / self.tokens.len() as f64
        }
    }

    fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }
}
