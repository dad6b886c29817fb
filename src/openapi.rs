use crate::models::{Audio, Chapter, InteractionType, LayoutHint, Message, MessageFilter, Quiz, Video};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::list_chapters,
        crate::routes::get_chapter,
        crate::routes::list_messages,
        crate::routes::get_message,
        crate::routes::list_relations,
        crate::routes::list_videos,
        crate::routes::get_video,
        crate::routes::list_audio,
        crate::routes::get_audio,
        crate::routes::check_gate,
        crate::routes::admin_list_messages,
        crate::routes::admin_set_curated,
        crate::routes::admin_reset_curated,
    ),
    components(schemas(
        Chapter, Quiz, InteractionType, LayoutHint,
        Message, MessageFilter, Video, Audio,
        crate::routes::GateRequest, crate::routes::GateResponse,
        crate::routes::CurateRequest
    )),
    tags(
        (name = "chapters", description = "Journey chapter queries"),
        (name = "messages", description = "Message wall queries and curation"),
        (name = "media", description = "Video and audio gallery queries"),
        (name = "gate", description = "Static password gate"),
    )
)]
pub struct ApiDoc;
