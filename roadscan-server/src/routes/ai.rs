use crate::routes::error::ApiError;
use crate::routes::ApiResponse;
use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use log::{debug, info, warn};
use roadscan_detect::{DetectResult, IssueSuggestion, PotholeDetector};
use roadscan_media::{Image, PixelBuffer};

/// Form field carrying the photo in every upload route.
pub const IMAGE_FIELD: &str = "image";

/// Byte cap for the `image` field. Multipart bodies bypass `PayloadConfig`,
/// so the cap is enforced while the field streams in.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);

#[get("/test")]
pub async fn test() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "AI routes are working!" }))
}

#[post("/validate-image")]
pub async fn validate_image(
    payload: Multipart,
    limit: web::Data<UploadLimit>,
    detector: web::Data<PotholeDetector>,
) -> Result<HttpResponse, ApiError> {
    let body = read_image(payload, limit.0).await?;
    let result = analyze(&detector, body, PotholeDetector::validate).await?;

    info!(
        "Validated upload: road {}%, valid {}",
        result.road_percentage, result.is_valid
    );
    Ok(ApiResponse::ok(result))
}

#[post("/detect-pothole")]
pub async fn detect_pothole(
    payload: Multipart,
    limit: web::Data<UploadLimit>,
    detector: web::Data<PotholeDetector>,
) -> Result<HttpResponse, ApiError> {
    let body = read_image(payload, limit.0).await?;
    let result = analyze(&detector, body, PotholeDetector::detect).await?;

    info!("Analyzed upload: {}", result);
    Ok(ApiResponse::ok(result))
}

/// Detection folded into a report prefill: category, title and message.
#[post("/analyze-image")]
pub async fn analyze_image(
    payload: Multipart,
    limit: web::Data<UploadLimit>,
    detector: web::Data<PotholeDetector>,
) -> Result<HttpResponse, ApiError> {
    let body = read_image(payload, limit.0).await?;
    let result = analyze(&detector, body, PotholeDetector::detect).await?;
    let suggestion = IssueSuggestion::from(&result);

    info!(
        "Suggested {:?} for upload: {}",
        suggestion.suggested_category, suggestion.suggested_title
    );
    Ok(ApiResponse::ok(suggestion))
}

/// Pulls the `image` field out of a `multipart/form-data` body. Other fields
/// are drained and ignored; only the first `image` field is kept.
async fn read_image(mut payload: Multipart, limit: usize) -> Result<Bytes, ApiError> {
    let mut image = None;

    while let Some(field) = payload.next().await {
        let mut field = field?;
        if field.name() != Some(IMAGE_FIELD) || image.is_some() {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|mime| mime.essence_str().starts_with("image/"));
        if !is_image {
            warn!("Rejected upload with content type {:?}", field.content_type());
            return Err(ApiError::NotAnImage);
        }

        let mut bytes = BytesMut::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > limit {
                warn!("Rejected upload above {} bytes", limit);
                return Err(ApiError::TooLarge(limit));
            }
            bytes.extend_from_slice(&chunk);
        }
        image = Some(bytes.freeze());
    }

    match image {
        Some(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => Err(ApiError::NoImage),
    }
}

/// Decodes and analyzes on the blocking pool; both steps are CPU bound.
async fn analyze<T, F>(detector: &PotholeDetector, body: Bytes, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&PotholeDetector, &PixelBuffer<'_>) -> DetectResult<T> + Send + 'static,
{
    let detector = *detector;
    web::block(move || {
        let image = decode(&body)?;
        Ok::<T, ApiError>(op(&detector, &image.pixel_buffer())?)
    })
    .await?
}

fn decode(body: &[u8]) -> Result<Image, ApiError> {
    let image = Image::from_bytes(body).map_err(|err| ApiError::Decode(format!("{:#}", err)))?;
    let (width, height) = image.get_size();
    debug!("Decoded upload of {}x{}", width, height);
    Ok(image)
}
