/// Direction in which scores are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankOrder {
    /// Largest score ranks first.
    #[default]
    Descending,

    /// Smallest score ranks first, for raw lower-is-better scores.
    Ascending,
}

/// A system's aggregated score and its dense rank.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedScore {
    pub system: String,
    pub score: f64,
    pub rank: u32,
}

/// Dense ranks of `scores`, returned in input order.
///
/// Scores are stably sorted by a total order, so equal scores keep their input
/// order. Walking the sorted sequence, a score shares its predecessor's rank
/// when the two are exactly equal and otherwise takes the next rank, so ties
/// never leave gaps: `[5, 5, 3, 3, 3, 1]` ranks as `[1, 1, 2, 2, 2, 3]`.
#[must_use]
pub fn dense_ranks(scores: &[f64], order: RankOrder) -> Vec<u32> {
    let mut sorted: Vec<usize> = (0..scores.len()).collect();
    sorted.sort_by(|&a, &b| match order {
        RankOrder::Descending => scores[b].total_cmp(&scores[a]),
        RankOrder::Ascending => scores[a].total_cmp(&scores[b]),
    });

    let mut ranks = vec![0; scores.len()];
    let mut previous: Option<f64> = None;
    let mut rank = 0;

    for index in sorted {
        let score = scores[index];

        #[expect(clippy::float_cmp, reason = "tied scores must compare exactly")]
        let tied = previous.is_some_and(|p| p == score);

        if !tied {
            rank += 1;
        }

        ranks[index] = rank;
        previous = Some(score);
    }

    ranks
}

/// Rank systems by score, returning one entry per system in input order.
///
/// # Panics
///
/// Panics if `systems` and `scores` have different lengths.
#[must_use]
pub fn rank_systems(systems: &[String], scores: &[f64], order: RankOrder) -> Vec<RankedScore> {
    assert_eq!(systems.len(), scores.len(), "every system needs exactly one score");

    systems
        .iter()
        .zip(scores)
        .zip(dense_ranks(scores, order))
        .map(|((system, &score), rank)| RankedScore {
            system: system.clone(),
            score,
            rank,
        })
        .collect()
}
