use crate::platform::{Channel, Video};

/// What the host can do with a paged result: read the batch, advance, ask if there is more.
pub trait Pager {
    type Item;

    fn results(&self) -> &[Self::Item];

    fn has_more_pages(&self) -> bool;

    fn next_page(&mut self) -> &[Self::Item];
}

/// A pager over an endpoint with no continuation token: one batch, then nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleBatch<T> {
    results: Vec<T>,
}

impl<T> SingleBatch<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self { results }
    }
}

impl<T> Pager for SingleBatch<T> {
    type Item = T;

    fn results(&self) -> &[T] {
        &self.results
    }

    fn has_more_pages(&self) -> bool {
        false
    }

    fn next_page(&mut self) -> &[T] {
        self.results.clear();
        &self.results
    }
}

pub type ChannelPager = SingleBatch<Channel>;
pub type VideoPager = SingleBatch<Video>;
