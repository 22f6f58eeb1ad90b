use super::*;
use crate::foundation::rng::SplitMix64;

fn trees(seed: u64) -> ChannelTrees {
    ChannelTrees::build(4, 9, &mut SplitMix64::new(seed)).unwrap()
}

fn forced(strategy: Strategy, threads: Option<usize>) -> RenderOpts {
    RenderOpts {
        strategy: Some(strategy),
        threads,
    }
}

#[test]
fn threshold_selects_sequential_for_small_images() {
    assert_eq!(select_strategy(63 * 64, 8), Strategy::Sequential);
    assert_eq!(select_strategy(64 * 64, 8), Strategy::Parallel);
    assert_eq!(select_strategy(350 * 350, 8), Strategy::Parallel);
}

#[test]
fn single_worker_always_sequential() {
    assert_eq!(select_strategy(1_000_000, 1), Strategy::Sequential);
    assert_eq!(select_strategy(1_000_000, 0), Strategy::Sequential);
}

#[test]
fn auto_strategy_respects_thread_override() {
    let t = trees(3);
    let one = RenderOpts {
        strategy: None,
        threads: Some(1),
    };
    let (_, stats) = render_trees(&t, 80, 80, &one).unwrap();
    assert_eq!(stats.strategy, Strategy::Sequential);
    assert_eq!(stats.workers, 1);

    let two = RenderOpts {
        strategy: None,
        threads: Some(2),
    };
    let (_, stats) = render_trees(&t, 80, 80, &two).unwrap();
    assert_eq!(stats.strategy, Strategy::Parallel);

    let (_, stats) = render_trees(&t, 10, 10, &two).unwrap();
    assert_eq!(stats.strategy, Strategy::Sequential);
}

#[test]
fn strategies_produce_identical_frames() {
    for seed in [1u64, 2, 3, 99] {
        let t = trees(seed);
        for (w, h) in [(1, 1), (17, 9), (64, 64), (100, 37)] {
            let (seq, s1) = render_trees(&t, w, h, &forced(Strategy::Sequential, None)).unwrap();
            let (par, s2) = render_trees(&t, w, h, &forced(Strategy::Parallel, Some(3))).unwrap();
            assert_eq!(s1.strategy, Strategy::Sequential);
            assert_eq!(s2.strategy, Strategy::Parallel);
            assert_eq!(seq, par, "seed {seed} at {w}x{h}");
        }
    }
}

#[test]
fn channels_follow_their_own_trees() {
    let t = trees(11);
    let (frame, _) = render_trees(&t, 16, 8, &RenderOpts::default()).unwrap();
    let grid = PixelGrid::new(16, 8).unwrap();
    for (idx, c) in grid.coords().enumerate() {
        let px = &frame.data[idx * 3..idx * 3 + 3];
        assert_eq!(px[0], quantize(t.red.eval(c)));
        assert_eq!(px[1], quantize(t.green.eval(c)));
        assert_eq!(px[2], quantize(t.blue.eval(c)));
    }
}

#[test]
fn rejects_zero_threads() {
    let err = render_trees(&trees(1), 4, 4, &forced(Strategy::Parallel, Some(0))).unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn rejects_empty_dimensions_before_building() {
    let mut rng = SplitMix64::new(5);
    let before = rng;
    let err = render(0, 10, 1, 3, &mut rng).unwrap_err();
    assert!(matches!(err, ArtError::InvalidDimensions { width: 0, height: 10 }));
    assert_eq!(rng, before);

    assert!(render(10, 0, 1, 3, &mut rng).is_err());
}

#[test]
fn invalid_depth_range_surfaces() {
    let err = render(8, 8, 5, 2, &mut SplitMix64::new(5)).unwrap_err();
    assert!(matches!(err, ArtError::InvalidRange { min_depth: 5, max_depth: 2 }));
}

#[test]
fn channel_trees_build_in_rgb_order() {
    let mut rng = SplitMix64::new(21);
    let red = ExprTree::build(2, 6, &mut rng).unwrap();
    let green = ExprTree::build(2, 6, &mut rng).unwrap();
    let blue = ExprTree::build(2, 6, &mut rng).unwrap();

    let t = ChannelTrees::build(2, 6, &mut SplitMix64::new(21)).unwrap();
    assert_eq!(t.red, red);
    assert_eq!(t.green, green);
    assert_eq!(t.blue, blue);
}

#[test]
fn stats_count_pixels() {
    let (frame, stats) = render_trees(&trees(8), 12, 5, &RenderOpts::default()).unwrap();
    assert_eq!(stats.pixels, 60);
    assert_eq!(frame.data.len(), 180);
}

#[test]
fn worker_count_comes_from_override_or_machine() {
    assert_eq!(available_workers(Some(5)), 5);
    let machine = std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1);
    assert_eq!(available_workers(None), machine);

    let (_, stats) = render_trees(&trees(4), 8, 8, &RenderOpts::default()).unwrap();
    assert_eq!(stats.workers, machine);
}

#[test]
fn global_pool_parallel_matches_sequential() {
    let t = trees(12);
    let (seq, _) = render_trees(&t, 90, 70, &forced(Strategy::Sequential, None)).unwrap();
    for _ in 0..4 {
        let (par, stats) = render_trees(&t, 90, 70, &forced(Strategy::Parallel, None)).unwrap();
        assert_eq!(stats.strategy, Strategy::Parallel);
        assert_eq!(par, seq);
    }
}
