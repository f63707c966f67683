// Message endpoint handlers module

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::response::{bad_request, json_response};
use super::types::{MessagesResponse, ReceiveOutcome, ReceiveTextRequest};
use crate::config::AppState;
use crate::logger;
use crate::message::process_text;

const RECEIVE_PATH: &str = "/receive_text/";
const MESSAGES_PATH: &str = "/get_messages/";

/// `POST /receive_text/`: accept a text submission.
///
/// Empty or missing text answers HTTP 200 with an error body; only a
/// body that fails to parse as JSON is a 400. Matches are resolved once
/// here, then the record is appended to the store.
pub async fn handle_receive_text(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let whole_body = if let Ok(collected) = req.collect().await {
        collected.to_bytes()
    } else {
        logger::log_api_request("POST", RECEIVE_PATH, 400);
        return Ok(bad_request("Failed to read request body"));
    };

    let request: ReceiveTextRequest = match serde_json::from_slice(&whole_body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_api_request("POST", RECEIVE_PATH, 400);
            return Ok(bad_request(&format!("Invalid JSON: {e}")));
        }
    };

    let outcome = match process_text(&request.message, &state.vocab) {
        Ok(processed) => {
            state.store.append(processed.text.clone(), processed.asl).await;
            ReceiveOutcome::Success {
                received: processed.text,
            }
        }
        // Store stays untouched; the 200 status is part of the contract
        Err(_) => ReceiveOutcome::no_text(),
    };

    logger::log_api_request("POST", RECEIVE_PATH, 200);
    json_response(StatusCode::OK, &outcome)
}

/// `GET /get_messages/`: full message log in insertion order
pub async fn handle_get_messages(
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let messages = state.store.list_all().await;

    logger::log_api_request("GET", MESSAGES_PATH, 200);
    json_response(StatusCode::OK, &MessagesResponse { messages })
}
