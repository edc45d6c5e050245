use core::convert::Infallible;

use super::TextSource;

/// Built-in sample used when no text is supplied.
pub const SAMPLE_PARAGRAPHS: [&str; 3] = [
    "Call me Ishmael. Some years ago, never mind how long precisely, having little or no money \
in my purse, and nothing particular to interest me on shore, I thought I would sail about a \
little and see the watery part of the world. It is a way I have of driving off the spleen and \
regulating the circulation.",
    "Whenever I find myself growing grim about the mouth; whenever it is a damp, drizzly November \
in my soul; whenever I find myself involuntarily pausing before coffin warehouses, and bringing \
up the rear of every funeral I meet; then, I account it high time to get to sea as soon as I can.",
    "This is my substitute for pistol and ball. With a philosophical flourish Cato throws himself \
upon his sword; I quietly take to the ship. There is nothing surprising in this. If they but knew \
it, almost all men in their degree, some time or other, cherish very nearly the same feelings \
towards the ocean with me.",
];

pub fn default_sample_text() -> StaticText<'static> {
    StaticText::new("Moby-Dick", &SAMPLE_PARAGRAPHS)
}

/// Static in-memory text source.
#[derive(Debug, Clone)]
pub struct StaticText<'a> {
    title: &'a str,
    paragraphs: &'a [&'a str],
}

impl<'a> StaticText<'a> {
    pub const fn new(title: &'a str, paragraphs: &'a [&'a str]) -> Self {
        Self { title, paragraphs }
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }
}

impl TextSource for StaticText<'_> {
    type Error = Infallible;

    fn load(&mut self) -> Result<String, Self::Error> {
        Ok(self.paragraphs.join("\n\n"))
    }

    fn title(&self) -> Option<&str> {
        Some(self.title)
    }
}
