use async_trait::async_trait;

use crate::fixtures::FixtureSet;
use crate::models::{Audio, Chapter, Message, MessageFilter, Video};

/// Query access over the four fixture collections. Every call is a pure
/// function of the loaded fixture state and its arguments; lookup misses
/// are `None`, never an error.
#[async_trait]
pub trait TributeRepo: Send + Sync {
    /// All chapters in fixture order (the canonical journey sequence).
    async fn list_chapters(&self) -> Vec<Chapter>;
    async fn get_chapter(&self, id: &str) -> Option<Chapter>;

    /// Messages matching every specified predicate, always sorted by date
    /// descending (newest first). Ties keep fixture order.
    async fn list_messages(&self, filter: &MessageFilter) -> Vec<Message>;
    async fn get_message(&self, id: &str) -> Option<Message>;

    async fn list_videos(&self) -> Vec<Video>;
    async fn get_video(&self, id: &str) -> Option<Video>;

    async fn list_audio(&self) -> Vec<Audio>;
    async fn get_audio(&self, id: &str) -> Option<Audio>;

    /// Distinct relation strings across the full message collection,
    /// lexicographically ordered. Independent of any filter.
    async fn list_relations(&self) -> Vec<String>;
}

/// The only backend: static fixtures held in memory, loaded once at start.
pub struct FixtureRepo {
    set: FixtureSet,
}

impl FixtureRepo {
    pub fn new(set: FixtureSet) -> Self {
        Self { set }
    }
}

#[async_trait]
impl TributeRepo for FixtureRepo {
    async fn list_chapters(&self) -> Vec<Chapter> {
        self.set.chapters.clone()
    }

    async fn get_chapter(&self, id: &str) -> Option<Chapter> {
        self.set.chapters.iter().find(|c| c.id == id).cloned()
    }

    async fn list_messages(&self, filter: &MessageFilter) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .set
            .messages
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        // sort_by is stable, so equal dates keep fixture order
        messages.sort_by(|a, b| b.date.cmp(&a.date));
        messages
    }

    async fn get_message(&self, id: &str) -> Option<Message> {
        self.set.messages.iter().find(|m| m.id == id).cloned()
    }

    async fn list_videos(&self) -> Vec<Video> {
        self.set.videos.clone()
    }

    async fn get_video(&self, id: &str) -> Option<Video> {
        self.set.videos.iter().find(|v| v.id == id).cloned()
    }

    async fn list_audio(&self) -> Vec<Audio> {
        self.set.audio.clone()
    }

    async fn get_audio(&self, id: &str) -> Option<Audio> {
        self.set.audio.iter().find(|a| a.id == id).cloned()
    }

    async fn list_relations(&self) -> Vec<String> {
        let mut relations: Vec<String> = self
            .set
            .messages
            .iter()
            .map(|m| m.relation.clone())
            .collect();
        relations.sort();
        relations.dedup();
        relations
    }
}
