//! Request parameter extraction and validation.
//!
//! Validation runs before any database access. The reason a request was
//! rejected is logged but never shown to the client.

use std::ops::RangeInclusive;

/// Valid act numbers (0 holds prologues and inductions).
pub const ACT_RANGE: RangeInclusive<i32> = 0..=5;

/// Valid scene numbers.
pub const SCENE_RANGE: RangeInclusive<i32> = 0..=15;

/// Valid work id lengths, in characters.
pub const WORK_ID_LEN: RangeInclusive<usize> = 5..=14;

/// Longest search query passed on to the store, in characters.
pub const MAX_QUERY_CHARS: usize = 100;

/// Decoded query string pairs, in request order.
pub type QueryPairs = Vec<(String, String)>;

/// First value of `key`; later repeats of the same key are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Raw query string of `GET /scene`.
///
/// Fields are kept as strings so malformed numbers reach [`SceneRef::parse`]
/// instead of being rejected by the extractor.
#[derive(Debug, Default)]
pub struct SceneParams {
    /// Act.
    pub a: Option<String>,
    /// Scene.
    pub s: Option<String>,
    /// Work id.
    pub w: Option<String>,
}

impl SceneParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            a: first_value(pairs, "a"),
            s: first_value(pairs, "s"),
            w: first_value(pairs, "w"),
        }
    }
}

/// Raw query string of `GET /`.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            q: first_value(pairs, "q"),
        }
    }
}

/// Why a scene request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("act must be an integer in 0..=5, got {0:?}")]
    Act(Option<String>),

    #[error("scene must be an integer in 0..=15, got {0:?}")]
    Scene(Option<String>),

    #[error("work id must be 5 to 14 characters, got {0} characters")]
    WorkId(usize),

    #[error("malformed query string: {0}")]
    Malformed(String),
}

/// A validated scene address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRef {
    pub work_id: String,
    pub act: i32,
    pub scene: i32,
}

impl SceneRef {
    /// Validate raw scene parameters. Checks run act, scene, then work id;
    /// the first failure is returned.
    pub fn parse(params: SceneParams) -> Result<Self, ValidationError> {
        let act = parse_in_range(params.a.as_deref(), &ACT_RANGE)
            .ok_or_else(|| ValidationError::Act(params.a.clone()))?;

        let scene = parse_in_range(params.s.as_deref(), &SCENE_RANGE)
            .ok_or_else(|| ValidationError::Scene(params.s.clone()))?;

        let work_id = params.w.unwrap_or_default();
        let len = work_id.chars().count();
        if !WORK_ID_LEN.contains(&len) {
            return Err(ValidationError::WorkId(len));
        }

        Ok(Self {
            work_id,
            act,
            scene,
        })
    }
}

fn parse_in_range(raw: Option<&str>, range: &RangeInclusive<i32>) -> Option<i32> {
    raw?.parse::<i32>().ok().filter(|v| range.contains(v))
}

/// Normalize the search parameter.
///
/// Returns `None` when the home page should be shown, otherwise the query
/// cut to at most [`MAX_QUERY_CHARS`] characters.
pub fn search_query(params: SearchParams) -> Option<String> {
    let q = params.q.filter(|q| !q.is_empty())?;
    Some(truncate_chars(&q, MAX_QUERY_CHARS).to_string())
}

/// Cut `s` to at most `max` characters without splitting a code point.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
