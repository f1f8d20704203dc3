use serde::Serialize;

/// Outcome of one summarization call.
///
/// When `ok` is true, `points` holds between 1 and 3 non-empty summary
/// points and `reason` is absent. When `ok` is false, `points` is
/// empty and `reason` carries the failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub ok: bool,
    pub points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SummaryResult {
    #[must_use]
    pub fn success(points: Vec<String>) -> Self {
        debug_assert!(!points.is_empty() && points.len() <= 3);
        debug_assert!(points.iter().all(|p| !p.trim().is_empty()));
        Self {
            ok: true,
            points,
            reason: None,
        }
    }

    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            points: Vec::new(),
            reason: Some(reason.into()),
        }
    }
}
