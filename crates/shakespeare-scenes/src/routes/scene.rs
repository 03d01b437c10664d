//! Scene page handler for `GET /scene?a={act}&s={scene}&w={work_id}`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};

use crate::error::PageError;
use crate::params::{QueryPairs, SceneParams, SceneRef, ValidationError};
use crate::render::{self, ScenePage};
use crate::state::AppState;

/// Scene text never changes, so browsers and proxies may keep it a while.
const SCENE_CACHE_CONTROL: &str = "public, max-age=3600";

/// Handle a scene request.
///
/// Parameters are validated before the store is touched. The work and the
/// scene are looked up in turn; either one missing yields a 404.
pub async fn scene_handler(
    State(state): State<AppState>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, PageError> {
    let Query(pairs) =
        params.map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;
    let scene_ref = SceneRef::parse(SceneParams::from_pairs(&pairs))?;

    let work = state
        .store
        .get_work(&scene_ref.work_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("work {}", scene_ref.work_id)))?;

    let scene = state
        .store
        .get_scene(&scene_ref.work_id, scene_ref.act, scene_ref.scene)
        .await?
        .ok_or_else(|| {
            PageError::NotFound(format!(
                "scene (work: {}, act: {}, scene: {})",
                scene_ref.work_id, scene_ref.act, scene_ref.scene
            ))
        })?;

    let markup = ScenePage {
        site_name: &state.config.site_name,
        work_title: &work.title,
        act: scene_ref.act,
        scene: scene_ref.scene,
        description: &scene.description,
        body: &scene.body,
    }
    .render();

    Ok((
        render::html_headers(),
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static(SCENE_CACHE_CONTROL),
        )],
        markup,
    )
        .into_response())
}
