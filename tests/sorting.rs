use hero_stats::{sort_heroes, HeroStatRecord, SortDirection, SortKey};

fn record(hero_id: u32, games: u32, win: u32) -> HeroStatRecord {
    HeroStatRecord {
        hero_id,
        last_played: 0,
        games,
        win,
        with_games: 0,
        with_win: 0,
        against_games: 0,
        against_win: 0,
    }
}

fn ids(records: &[HeroStatRecord]) -> Vec<u32> {
    records.iter().map(|r| r.hero_id).collect()
}

fn sample() -> Vec<HeroStatRecord> {
    vec![
        record(1, 10, 6),
        record(2, 5, 5),
        record(3, 0, 0),
        record(4, 20, 3),
        record(5, 10, 2),
    ]
}

#[test]
fn win_rate_desc_scenario() {
    let records = vec![record(1, 10, 6), record(2, 5, 5)];
    let sorted = sort_heroes(&records, SortKey::WinRate, SortDirection::Desc);
    assert_eq!(ids(&sorted), vec![2, 1]);
    assert_eq!(sorted[0].win_rate(), 1.0);
    assert_eq!(sorted[1].win_rate(), 0.6);
}

#[test]
fn sorting_twice_by_games_is_idempotent() {
    for direction in [SortDirection::Asc, SortDirection::Desc] {
        let once = sort_heroes(&sample(), SortKey::Games, direction);
        let twice = sort_heroes(&once, SortKey::Games, direction);
        assert_eq!(once, twice);
    }
}

#[test]
fn toggling_direction_reverses_strict_order() {
    let records = vec![
        record(1, 3, 1),
        record(2, 9, 4),
        record(3, 2, 0),
        record(4, 6, 3),
    ];
    for key in [SortKey::Games, SortKey::Wins, SortKey::WinRate] {
        let desc = sort_heroes(&records, key, SortDirection::Desc);
        let mut asc = sort_heroes(&desc, key, SortDirection::Desc.toggled());
        asc.reverse();
        assert_eq!(ids(&desc), ids(&asc), "key {}", key);
    }
}

#[test]
fn sorts_by_each_key() {
    let records = sample();
    assert_eq!(
        ids(&sort_heroes(&records, SortKey::Games, SortDirection::Desc)),
        vec![4, 1, 5, 2, 3]
    );
    assert_eq!(
        ids(&sort_heroes(&records, SortKey::Wins, SortDirection::Asc)),
        vec![3, 5, 4, 2, 1]
    );
    assert_eq!(
        ids(&sort_heroes(&records, SortKey::WinRate, SortDirection::Asc)),
        vec![3, 4, 5, 1, 2]
    );
}

#[test]
fn zero_games_sorts_as_zero_rate() {
    let records = vec![record(1, 0, 0), record(2, 4, 0), record(3, 4, 1)];
    let sorted = sort_heroes(&records, SortKey::WinRate, SortDirection::Desc);
    // 1 and 2 tie at 0%, input order kept.
    assert_eq!(ids(&sorted), vec![3, 1, 2]);
}

#[test]
fn sorting_is_a_permutation() {
    let records = sample();
    let mut sorted = sort_heroes(&records, SortKey::WinRate, SortDirection::Desc);
    assert_eq!(sorted.len(), records.len());
    sorted.sort_by_key(|r| r.hero_id);
    assert_eq!(sorted, records);
}

#[test]
fn empty_list_sorts_to_empty() {
    assert!(sort_heroes(&[], SortKey::Wins, SortDirection::Desc).is_empty());
}
