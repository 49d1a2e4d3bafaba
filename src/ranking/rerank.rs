//! Single-metric ranking over an ordered pool

use crate::models::TeamId;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Team id to 1-based rank
pub type RankMap = BTreeMap<TeamId, u32>;

/// Rank a pool by a numeric selector, highest value first.
///
/// Missing and non-finite values count as zero. Ties are not merged: the
/// sort is stable, so equal values keep their pool order and still receive
/// distinct ranks. Team ids in the pool must be unique.
pub fn rerank<'a, T, I, F>(pool: I, selector: F) -> RankMap
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = (TeamId, &'a T)>,
    F: Fn(&T) -> Option<f64>,
{
    let mut values: Vec<(TeamId, f64)> = pool
        .into_iter()
        .map(|(team_id, item)| (team_id, sanitize(selector(item))))
        .collect();

    values.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    values
        .into_iter()
        .enumerate()
        .map(|(i, (team_id, _))| (team_id, i as u32 + 1))
        .collect()
}

fn sanitize(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
