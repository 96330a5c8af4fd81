mod import;
mod net;
mod projection;
mod store;
mod track;
mod track_geo;
mod types;

use axum::{
    extract::{Multipart, Path},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use net::response::{ResponseError, Result};
use store::{get_store, TrackStore, STORE};
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};
use types::dto;

use crate::import::gpx::parse_track_points;
use crate::projection::annotate_pois;
use crate::track::track_geo_json;
use crate::track_geo::Distance;
use crate::types::track::TrackPoint;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    STORE
        .set(TrackStore::new())
        .map_err(|_| color_eyre::eyre::eyre!("Track store already initialized"))?;

    // build our application with a route
    let app = Router::new()
        .route("/tracks", post(import_track))
        .route("/tracks", get(list_tracks))
        .route("/tracks/:id", get(get_track_by_id))
        .route("/tracks/:id", delete(delete_track_by_id))
        .route("/tracks/:id/pois", post(add_poi))
        .layer(CorsLayer::permissive());

    let port = std::env::var("TRACKSIDE_PORT").unwrap_or_else(|_| String::from("3000"));
    info!("Running on port {port}");

    axum::Server::bind(&format!("0.0.0.0:{port}").parse()?)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

async fn list_tracks() -> Result<Json<Vec<dto::track::ListTrack>>> {
    let tracks = get_store()?.list_tracks().await;
    let mut listed = Vec::with_capacity(tracks.len());
    for track in tracks {
        let track_points = parse_points(track.gpx.as_deref())?;
        listed.push(dto::track::ListTrack {
            id: track.id,
            name: track.name,
            total_distance: track_points.distance(),
            poi_count: track.pois.len(),
        });
    }
    Ok(Json(listed))
}

async fn get_track_by_id(Path(track_id): Path<i64>) -> Result<Json<dto::track::Track>> {
    let track = get_store()?
        .track(track_id)
        .await
        .ok_or(ResponseError::not_found("No track with this id"))?;
    let track_points = parse_points(track.gpx.as_deref())?;
    let geo_json = if track_points.is_empty() {
        None
    } else {
        Some(track_geo_json(&track.name, &track_points)?)
    };
    let pois = annotate_pois(&track_points, track.pois);
    Ok(Json(dto::track::Track {
        id: track.id,
        name: track.name,
        total_distance: track_points.distance(),
        geo_json,
        pois: pois.into_iter().map(Into::into).collect(),
    }))
}

async fn delete_track_by_id(Path(track_id): Path<i64>) -> Result<()> {
    if !get_store()?.remove_track(track_id).await {
        Err(ResponseError::not_found("No track with this id"))?;
    }
    Ok(())
}

async fn add_poi(
    Path(track_id): Path<i64>,
    Json(new_poi): Json<dto::poi::NewPoi>,
) -> Result<Json<dto::poi::CreatedPoi>> {
    let id = get_store()?
        .add_poi(track_id, new_poi)
        .await
        .ok_or(ResponseError::not_found("No track with this id"))?;
    Ok(Json(dto::poi::CreatedPoi { id }))
}

#[instrument(skip(multipart))]
#[axum::debug_handler]
async fn import_track(mut multipart: Multipart) -> Result<Json<dto::track::CreatedTrack>> {
    let mut track_name_opt: Option<String> = None;
    let mut gpx_text_opt: Option<String> = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field
            .name()
            .ok_or(ResponseError::internal_server_error(
                "No name on form field",
            ))?
            .to_owned();
        match name.as_str() {
            "track_name" => track_name_opt = Some(field.text().await?),
            "gpx" => {
                let text = field.text().await?;
                // reject documents we won't be able to project against later
                let points = parse_track_points(&text)
                    .map_err(|e| ResponseError::bad_request(format!("Invalid gpx: {e}")))?;
                info!("imported gpx with {} track points", points.len());
                gpx_text_opt = Some(text);
            }
            _ => continue,
        }
    }
    let track_name = track_name_opt.ok_or(ResponseError::with_status(
        StatusCode::BAD_REQUEST,
        "track_name not provided",
    ))?;
    let id = get_store()?.insert_track(track_name, gpx_text_opt).await;
    Ok(Json(dto::track::CreatedTrack { id }))
}

//Absent or empty gpx text degrades to an empty point list instead of erroring,
//so pois on a gpx-less track fall back to zero distance.
fn parse_points(gpx_text: Option<&str>) -> Result<Vec<TrackPoint>> {
    match gpx_text {
        Some(text) if !text.trim().is_empty() => Ok(parse_track_points(text)?),
        _ => Ok(Vec::new()),
    }
}
