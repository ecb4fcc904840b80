use mighty_core::ValidationError;
use mighty_types::{ErrorBody, ErrorCode};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Rejection, Reply};

pub fn error_reply(status: StatusCode, body: ErrorBody) -> Response {
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

/// Map a rejected game draft to the status and body the front end expects.
pub fn validation_reply(err: &ValidationError) -> Response {
    let body = match err {
        ValidationError::RoomClosed(_) => ErrorBody::with_message(ErrorCode::RoomEnded, err.to_string()),
        _ => ErrorBody::with_message(ErrorCode::ValidationFailed, err.to_string()),
    };
    error_reply(StatusCode::BAD_REQUEST, body)
}

/// Turn warp's built-in rejections into `ErrorBody` replies. Unknown paths
/// keep warp's plain 404.
pub async fn handle_rejection(rejection: Rejection) -> Result<Response, Rejection> {
    if rejection.is_not_found() {
        return Err(rejection);
    }

    if let Some(err) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        tracing::warn!("Rejected request body: {}", err);
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            ErrorBody::with_message(ErrorCode::ValidationFailed, err.to_string()),
        ));
    }

    if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(error_reply(
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorBody::with_message(ErrorCode::ValidationFailed, "Request body is too large."),
        ));
    }

    if rejection.find::<warp::reject::LengthRequired>().is_some() {
        return Ok(error_reply(
            StatusCode::LENGTH_REQUIRED,
            ErrorBody::with_message(ErrorCode::ValidationFailed, "Content-Length is required."),
        ));
    }

    if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(error_reply(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorBody::with_message(ErrorCode::ValidationFailed, "Expected a JSON body."),
        ));
    }

    if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorBody::new(ErrorCode::MethodNotAllowed),
        ));
    }

    tracing::error!("Unhandled rejection: {:?}", rejection);
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody::new(ErrorCode::InternalServerError),
    ))
}
