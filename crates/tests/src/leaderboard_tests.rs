use pretty_assertions::assert_eq;
use shared_types::{
    resolution_rate, seed, sort_citizens, BadgeTier, LeaderboardSort, LeaderboardStats,
};

fn names(sort: LeaderboardSort) -> Vec<String> {
    sort_citizens(&seed::citizens(), sort)
        .into_iter()
        .map(|c| c.name)
        .collect()
}

#[test]
fn overall_keeps_rank_order() {
    let ranks: Vec<u32> = sort_citizens(&seed::citizens(), LeaderboardSort::Overall)
        .iter()
        .map(|c| c.rank)
        .collect();
    assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
}

#[test]
fn resolution_rate_rounds() {
    let citizens = seed::citizens();
    assert_eq!(citizens[0].resolution_rate(), 89);
    assert_eq!(citizens[1].resolution_rate(), 92);
    assert_eq!(resolution_rate(0, 0), 0);
    assert_eq!(resolution_rate(1, 2), 50);
}

#[test]
fn resolution_rate_sort_puts_best_ratio_first() {
    assert_eq!(names(LeaderboardSort::ResolutionRate)[0], "Michael Chen");
}

#[test]
fn vote_sort_matches_seed_ranking() {
    assert_eq!(names(LeaderboardSort::MostVotes), names(LeaderboardSort::Overall));
}

#[test]
fn stats_sum_over_citizens() {
    let stats = LeaderboardStats::from_citizens(&seed::citizens());
    assert_eq!(stats.total_citizens, 8);
    assert_eq!(stats.platinum_members, 1);
    assert_eq!(stats.total_reports, 230);
}

#[test]
fn tiers_are_assigned() {
    let citizens = seed::citizens();
    assert_eq!(citizens[0].badge, BadgeTier::Platinum);
    assert_eq!(citizens[0].initials(), "SJ");
}
