use heapless::Deque;

use super::{InputEvent, InputProvider};

pub const MOCK_INPUT_CAPACITY: usize = 32;

/// Scripted input source for tests and headless runs.
#[derive(Default, Debug, Clone)]
pub struct MockInput {
    queue: Deque<InputEvent, MOCK_INPUT_CAPACITY>,
}

impl MockInput {
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
        }
    }

    /// Queue `event`. Returns it back when the script is full.
    pub fn push(&mut self, event: InputEvent) -> Result<(), InputEvent> {
        self.queue.push_back(event)
    }

    pub fn from_events(events: &[InputEvent]) -> Result<Self, InputEvent> {
        let mut input = Self::new();
        for event in events {
            input.push(*event)?;
        }
        Ok(input)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.queue.pop_front())
    }
}
