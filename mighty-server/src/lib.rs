use std::sync::Arc;

use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

use crate::config::Config;
use crate::errors::{error_reply, handle_rejection, validation_reply};
use mighty_core::{CareerEngine, ScoreEngine, validate_draft, win_ratios};
use mighty_types::{
    CareerEntry, CareerRequest, ErrorBody, ErrorCode, RoomState, ScoreBoardEntry, ScoreRequest,
    ValidateGameRequest,
};

pub mod config;
pub mod errors;

pub fn create_routes(
    config: Arc<Config>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    let body_limit = warp::body::content_length_limit(config.max_body_bytes);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    // Room scoreboard, recomputed from the supplied games on every call
    let score = warp::path!("rooms" / "score")
        .and(warp::post())
        .and(body_limit)
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(handle_score_request);

    // Profile stats a finished room contributes to each participant
    let career = warp::path!("rooms" / "career")
        .and(warp::post())
        .and(body_limit)
        .and(warp::body::json())
        .and(config_filter.clone())
        .and_then(handle_career_request);

    // Checks a new game against its room before the caller stores it
    let validate_game = warp::path!("games" / "validate")
        .and(warp::post())
        .and(body_limit)
        .and(warp::body::json())
        .and_then(handle_validate_game_request);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(score)
        .or(career)
        .or(validate_game)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::log("mighty_calculator"))
}

fn too_many_games(count: usize, config: &Config) -> Option<Response> {
    if count <= config.max_games_per_request {
        return None;
    }

    tracing::warn!(
        "Rejected request with {} games (limit {})",
        count,
        config.max_games_per_request
    );
    Some(error_reply(
        StatusCode::BAD_REQUEST,
        ErrorBody::with_message(
            ErrorCode::ValidationFailed,
            format!("At most {} games per request.", config.max_games_per_request),
        ),
    ))
}

async fn handle_score_request(
    request: ScoreRequest,
    config: Arc<Config>,
) -> Result<Response, warp::Rejection> {
    if let Some(reply) = too_many_games(request.games.len(), &config) {
        return Ok(reply);
    }

    tracing::debug!(
        "Scoring {} games for {} participants",
        request.games.len(),
        request.participants.len()
    );

    let board: Vec<ScoreBoardEntry> = ScoreEngine::aggregate(&request.participants, &request.games)
        .into_iter()
        .map(|row| ScoreBoardEntry {
            win_ratios: win_ratios(&row),
            row,
        })
        .collect();

    Ok(warp::reply::with_status(warp::reply::json(&board), StatusCode::OK).into_response())
}

async fn handle_career_request(
    request: CareerRequest,
    config: Arc<Config>,
) -> Result<Response, warp::Rejection> {
    if let Some(reply) = too_many_games(request.games.len(), &config) {
        return Ok(reply);
    }

    // Career stats are only final once the dealer has closed the room
    if request.room.state == RoomState::InProgress {
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            ErrorBody::new(ErrorCode::RoomNotEnded),
        ));
    }

    let entries: Vec<CareerEntry> = CareerEngine::room_contributions(&request.room, &request.games)
        .into_iter()
        .map(|(participant, stats)| CareerEntry { participant, stats })
        .collect();

    Ok(warp::reply::with_status(warp::reply::json(&entries), StatusCode::OK).into_response())
}

async fn handle_validate_game_request(
    request: ValidateGameRequest,
) -> Result<Response, warp::Rejection> {
    match validate_draft(&request.game, &request.room) {
        Ok(()) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(err) => {
            tracing::warn!("Rejected game for room {}: {}", request.room.id, err);
            Ok(validation_reply(&err))
        }
    }
}
