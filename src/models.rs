use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Fixture ids are author-chosen strings ("c1", "m-aunt-meera", ...)
pub type Id = String;

/// Which interactive widget a chapter renders, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    None,
    Flip,
    Slider,
    Quiz,
}

/// Layout variant hint consumed by the presentation layer; the string
/// values are part of the fixture contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutHint {
    FullBleed,
    TwoColumnLeft,
    TwoColumnRight,
    Centered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

/// One step of the narrated journey timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: Id,
    pub title: String,
    #[serde(with = "fixture_date")]
    pub date: DateTime<Utc>,
    pub text: String,
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_clip_url: Option<String>,
    pub interaction_type: InteractionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    pub layout_hint: LayoutHint,
}

/// A wall message from friends & family. `curated` marks messages picked
/// for prominent display; it is the only field mutated after load (see
/// `curation::CurationDraft`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Id,
    pub author: String,
    pub relation: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(with = "fixture_date")]
    pub date: DateTime<Utc>,
    pub curated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: Id,
    pub author: String,
    pub thumbnail: String,
    pub video_url: String,
    pub duration_sec: u32,
    #[serde(with = "fixture_date")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Audio {
    pub id: Id,
    pub author: String,
    pub audio_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u32>,
    #[serde(with = "fixture_date")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

/// Independent, ANDed message predicates. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curated: Option<bool>,
}

impl MessageFilter {
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref chapter_id) = self.chapter_id {
            if msg.chapter_id.as_deref() != Some(chapter_id.as_str()) {
                return false;
            }
        }
        if let Some(ref relation) = self.relation {
            if msg.relation != *relation {
                return false;
            }
        }
        if let Some(curated) = self.curated {
            if msg.curated != curated {
                return false;
            }
        }
        true
    }
}

/// Fixture `date` fields may be a full RFC 3339 instant or a bare
/// `YYYY-MM-DD` date (taken as midnight UTC); the original fixtures used
/// both. Serialization always emits RFC 3339.
pub(crate) mod fixture_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        if let Ok(instant) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(instant.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{raw}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_accepts_bare_and_rfc3339_forms() {
        let m: Message = serde_json::from_value(serde_json::json!({
            "id": "m1", "author": "A", "relation": "Friend",
            "text": "hi", "date": "2020-01-01", "curated": false
        }))
        .unwrap();
        assert_eq!(m.date.to_rfc3339(), "2020-01-01T00:00:00+00:00");

        let m: Message = serde_json::from_value(serde_json::json!({
            "id": "m2", "author": "B", "relation": "Friend",
            "text": "hi", "date": "2021-06-05T10:30:00Z", "curated": true
        }))
        .unwrap();
        assert_eq!(m.date.to_rfc3339(), "2021-06-05T10:30:00+00:00");
    }

    #[test]
    fn layout_and_interaction_use_fixture_contract_strings() {
        assert_eq!(
            serde_json::to_value(LayoutHint::TwoColumnLeft).unwrap(),
            serde_json::json!("two-column-left")
        );
        assert_eq!(
            serde_json::to_value(InteractionType::Quiz).unwrap(),
            serde_json::json!("quiz")
        );
    }

    #[test]
    fn filter_predicates_are_anded() {
        let msg: Message = serde_json::from_value(serde_json::json!({
            "id": "m1", "author": "A", "relation": "Friend", "chapterId": "c2",
            "text": "hi", "date": "2020-01-01", "curated": true
        }))
        .unwrap();

        let filter = MessageFilter {
            chapter_id: Some("c2".into()),
            relation: Some("Friend".into()),
            curated: Some(true),
        };
        assert!(filter.matches(&msg));

        let filter = MessageFilter {
            curated: Some(false),
            ..filter
        };
        assert!(!filter.matches(&msg));
        assert!(MessageFilter::default().matches(&msg));
    }
}
