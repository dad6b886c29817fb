//! Loading and validation of the four static fixture documents.
//!
//! Fixtures are the site's only data source: there is no database and no
//! write path. Malformed fixture data is a configuration error and must
//! abort startup instead of surfacing as `undefined`-style holes deep in a
//! rendering path, so everything here fails fast.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::models::{Audio, Chapter, InteractionType, Message, Video};

pub const CHAPTERS_FILE: &str = "chapters.json";
pub const MESSAGES_FILE: &str = "messages.json";
pub const VIDEOS_FILE: &str = "videos.json";
pub const AUDIO_FILE: &str = "audio.json";

#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture '{name}': {source}")]
    Read {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("fixture '{0}' is not embedded in this build")]
    NotEmbedded(&'static str),
    #[error("failed to parse fixture '{name}': {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("chapter '{0}' has interactionType=quiz but no quiz data")]
    QuizMissing(String),
    #[error("chapter '{chapter}': quiz answerIndex {index} is out of range for {options} options")]
    QuizAnswerOutOfRange {
        chapter: String,
        index: usize,
        options: usize,
    },
}

pub type FixtureResult<T> = Result<T, FixtureError>;

/// The canonical in-memory collections, in fixture-defined order. The
/// repository owns the only instance; consumers always get copies.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub chapters: Vec<Chapter>,
    pub messages: Vec<Message>,
    pub videos: Vec<Video>,
    pub audio: Vec<Audio>,
}

#[cfg(feature = "embed-fixtures")]
#[derive(rust_embed::RustEmbed)]
#[folder = "fixtures/"]
struct EmbeddedFixtures;

impl FixtureSet {
    /// Load all four collections and validate them. `FIXTURE_DIR` overrides
    /// the source directory; otherwise the documents embedded at build time
    /// are used (or `fixtures/` relative to the working directory when the
    /// `embed-fixtures` feature is off).
    pub fn load() -> FixtureResult<Self> {
        match std::env::var("FIXTURE_DIR") {
            Ok(dir) => {
                info!("Loading fixtures from directory '{dir}'");
                Self::load_from_dir(PathBuf::from(dir))
            }
            Err(_) => Self::load_default(),
        }
    }

    #[cfg(feature = "embed-fixtures")]
    fn load_default() -> FixtureResult<Self> {
        info!("Loading embedded fixtures");
        fn embedded(name: &'static str) -> FixtureResult<Vec<u8>> {
            EmbeddedFixtures::get(name)
                .map(|f| f.data.into_owned())
                .ok_or(FixtureError::NotEmbedded(name))
        }
        Self::from_bytes(
            &embedded(CHAPTERS_FILE)?,
            &embedded(MESSAGES_FILE)?,
            &embedded(VIDEOS_FILE)?,
            &embedded(AUDIO_FILE)?,
        )
    }

    #[cfg(not(feature = "embed-fixtures"))]
    fn load_default() -> FixtureResult<Self> {
        info!("Loading fixtures from ./fixtures");
        Self::load_from_dir(PathBuf::from("fixtures"))
    }

    pub fn load_from_dir(dir: impl AsRef<Path>) -> FixtureResult<Self> {
        let dir = dir.as_ref();
        fn read(dir: &Path, name: &'static str) -> FixtureResult<Vec<u8>> {
            std::fs::read(dir.join(name)).map_err(|source| FixtureError::Read { name, source })
        }
        Self::from_bytes(
            &read(dir, CHAPTERS_FILE)?,
            &read(dir, MESSAGES_FILE)?,
            &read(dir, VIDEOS_FILE)?,
            &read(dir, AUDIO_FILE)?,
        )
    }

    fn from_bytes(
        chapters: &[u8],
        messages: &[u8],
        videos: &[u8],
        audio: &[u8],
    ) -> FixtureResult<Self> {
        fn parse<T: serde::de::DeserializeOwned>(
            name: &'static str,
            bytes: &[u8],
        ) -> FixtureResult<Vec<T>> {
            serde_json::from_slice(bytes).map_err(|source| FixtureError::Parse { name, source })
        }
        Self::from_parts(
            parse(CHAPTERS_FILE, chapters)?,
            parse(MESSAGES_FILE, messages)?,
            parse(VIDEOS_FILE, videos)?,
            parse(AUDIO_FILE, audio)?,
        )
    }

    /// Assemble a set from already-decoded collections, enforcing the
    /// load-time contract. Also the entry point for tests.
    pub fn from_parts(
        chapters: Vec<Chapter>,
        messages: Vec<Message>,
        videos: Vec<Video>,
        audio: Vec<Audio>,
    ) -> FixtureResult<Self> {
        let set = Self {
            chapters,
            messages,
            videos,
            audio,
        };
        set.validate()?;
        info!(
            chapters = set.chapters.len(),
            messages = set.messages.len(),
            videos = set.videos.len(),
            audio = set.audio.len(),
            "Fixtures loaded"
        );
        Ok(set)
    }

    fn validate(&self) -> FixtureResult<()> {
        unique_ids("chapter", self.chapters.iter().map(|c| c.id.as_str()))?;
        unique_ids("message", self.messages.iter().map(|m| m.id.as_str()))?;
        unique_ids("video", self.videos.iter().map(|v| v.id.as_str()))?;
        unique_ids("audio", self.audio.iter().map(|a| a.id.as_str()))?;

        for chapter in &self.chapters {
            if chapter.interaction_type != InteractionType::Quiz {
                continue;
            }
            let quiz = chapter
                .quiz
                .as_ref()
                .ok_or_else(|| FixtureError::QuizMissing(chapter.id.clone()))?;
            if quiz.answer_index >= quiz.options.len() {
                return Err(FixtureError::QuizAnswerOutOfRange {
                    chapter: chapter.id.clone(),
                    index: quiz.answer_index,
                    options: quiz.options.len(),
                });
            }
        }
        Ok(())
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> FixtureResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
