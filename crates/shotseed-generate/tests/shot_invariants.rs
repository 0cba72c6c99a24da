use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shotseed_core::{Shot, ShotStatus};
use shotseed_generate::{generate_episodes, generate_shots, IdSequence, SHOT_ID_START};

fn shots_for_seed(seed: u64) -> Vec<Shot> {
    let episodes = generate_episodes(100);
    let mut ids = IdSequence::new(SHOT_ID_START);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_shots(&episodes, &mut ids, &mut rng)
}

#[test]
fn thirty_shots_with_contiguous_ids() {
    let shots = shots_for_seed(7);
    assert_eq!(shots.len(), 30);

    let ids: Vec<i64> = shots.iter().map(|s| s.sg_id).collect();
    let expected: Vec<i64> = (301..=330).collect();
    assert_eq!(ids, expected, "ids keep counting across episodes");
}

#[test]
fn frame_ranges_are_consistent() {
    for seed in [1, 42, 9000] {
        for shot in shots_for_seed(seed) {
            assert_eq!(shot.frame_in, 1001, "{}", shot.code);
            assert!((48..=240).contains(&shot.frame_count), "{}", shot.code);
            assert_eq!(shot.frame_out, shot.frame_in + shot.frame_count - 1);
        }
    }
}

#[test]
fn codes_and_cut_orders_follow_the_episode() {
    let shots = shots_for_seed(3);

    assert_eq!(shots[0].code, "EP101_SH001");
    assert_eq!(shots[0].name, "Shot 1");
    assert_eq!(shots[0].episode_id, 201);
    assert_eq!(shots[29].code, "EP103_SH010");
    assert_eq!(shots[29].episode_id, 203);

    for chunk in shots.chunks(10) {
        let cuts: Vec<i32> = chunk.iter().map(|s| s.cut_order).collect();
        assert_eq!(cuts, (1..=10).collect::<Vec<i32>>());
        assert!(chunk.iter().all(|s| s.episode_id == chunk[0].episode_id));
    }
}

#[test]
fn bids_scale_with_frame_count() {
    for shot in shots_for_seed(11) {
        let base = f64::from(shot.frame_count) * 0.15;
        assert!(shot.bid_hours >= base * 0.8 - 0.01, "{}", shot.code);
        assert!(shot.bid_hours <= base * 1.3 + 0.01, "{}", shot.code);

        // Stored rounded to two decimals.
        let cents = shot.bid_hours * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6, "{}", shot.code);
    }
}

#[test]
fn actual_hours_track_status() {
    for seed in [2, 5, 21] {
        for shot in shots_for_seed(seed) {
            match shot.status {
                ShotStatus::NotStarted | ShotStatus::PendingReview => {
                    assert_eq!(shot.actual_hours, 0.0, "{}", shot.code);
                }
                ShotStatus::InProgress => {
                    assert!(shot.actual_hours >= shot.bid_hours * 0.2 - 0.01, "{}", shot.code);
                    assert!(shot.actual_hours <= shot.bid_hours * 0.8 + 0.01, "{}", shot.code);
                }
                ShotStatus::Approved | ShotStatus::Final => {
                    assert!(shot.actual_hours >= shot.bid_hours * 0.7 - 0.01, "{}", shot.code);
                    assert!(shot.actual_hours <= shot.bid_hours * 1.4 + 0.01, "{}", shot.code);
                }
            }
        }
    }
}
