use log::debug;
use warp::http::{Response, StatusCode};
use warp::hyper::body::Bytes;
use warp::hyper::Body;
use warp::{Rejection, Reply};

use cw_core::{CopyRequest, ExpiryWatcher};

use crate::server::ServerState;

/// Header carrying the last-write time on `/paste` responses.
pub const TIMESTAMP_HEADER: &str = "X-Clipboard-Timestamp";

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub async fn handle_index() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::html(INDEX_HTML))
}

/// `POST /copy`: gate, parse the JSON envelope, replace the stored entry.
/// A malformed body leaves the store untouched.
pub async fn handle_copy(
    password: Option<String>,
    body: Bytes,
    state: ServerState,
) -> Result<impl Reply, Rejection> {
    if !state.gate.authorize(password.as_deref()) {
        debug!("copy rejected: invalid password");
        return Ok(plain(StatusCode::UNAUTHORIZED, "invalid password"));
    }

    let request: CopyRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            debug!("copy rejected: {}", err);
            return Ok(plain(
                StatusCode::INTERNAL_SERVER_ERROR,
                "error parsing JSON body",
            ));
        }
    };

    debug!("got clipboard contents: {:?}", request.text);
    state.store.write(request.text).await;
    ExpiryWatcher::ensure_running(&state.store).await;
    Ok(plain(StatusCode::OK, "updated remote clipboard"))
}

/// `GET /paste`: gate, then the stored text as the body with the
/// last-write time in the timestamp header.
pub async fn handle_paste(
    password: Option<String>,
    state: ServerState,
) -> Result<impl Reply, Rejection> {
    if !state.gate.authorize(password.as_deref()) {
        debug!("paste rejected: invalid password");
        return Ok(plain(StatusCode::UNAUTHORIZED, "invalid password"));
    }

    let entry = state.store.read().await;
    debug!("returning clipboard contents: {:?}", entry.text);
    let response = Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header(TIMESTAMP_HEADER, entry.header_timestamp())
        .body(Body::from(entry.text))
        .map_err(|_| warp::reject::reject())?;
    Ok(response)
}

fn plain(status: StatusCode, message: &'static str) -> warp::reply::Response {
    warp::reply::with_status(message, status).into_response()
}
