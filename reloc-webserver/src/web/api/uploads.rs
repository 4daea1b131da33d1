use anyhow::anyhow;
use rocket::{form::Form, fs::TempFile, FromForm};

use super::*;
use crate::web::Cfg;
use reloc_core::entities::Timestamp;

#[derive(FromForm)]
pub struct MediaUpload<'r> {
    pub file: TempFile<'r>,
}

/// Store an uploaded media file below the uploads directory and
/// respond with the public URL it will be served from.
#[post("/upload", data = "<upload>")]
pub async fn post_upload(
    cfg: &State<Cfg>,
    mut upload: Form<MediaUpload<'_>>,
) -> Result<json::UploadedMedia> {
    let file = &mut upload.file;
    if file.len() == 0 {
        return Err(ApiError::OtherWithStatus(
            anyhow!("No file uploaded"),
            Status::BadRequest,
        ));
    }

    // Timestamp-derived filename, preserving the media type extension.
    let millis = Timestamp::now().as_millis();
    let file_name = match file.content_type().and_then(|ct| ct.extension()) {
        Some(ext) => format!("{millis}.{ext}"),
        None => millis.to_string(),
    };

    let path = cfg.uploads_dir.join(&file_name);
    file.persist_to(&path).await?;
    debug!("Stored uploaded media at {}", path.display());

    Ok(Json(json::UploadedMedia {
        url: format!("/uploads/{file_name}"),
    }))
}
