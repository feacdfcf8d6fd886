use actix_multipart::MultipartError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use roadscan_detect::DetectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image file provided")]
    NoImage,

    #[error("Only image files are allowed!")]
    NotAnImage,

    #[error("Image exceeds the {0} byte upload limit")]
    TooLarge(usize),

    #[error("Malformed upload: {0}")]
    Malformed(String),

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error("AI analysis service temporarily unavailable")]
    Unavailable(#[from] actix_web::error::BlockingError),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoImage | ApiError::NotAnImage | ApiError::Malformed(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Decode(_) | ApiError::Detect(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "message": self.to_string(),
        }))
    }
}
