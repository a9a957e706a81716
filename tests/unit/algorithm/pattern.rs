//! Tests for pattern policies and grid synthesis

#[cfg(test)]
mod tests {
    use blockies::algorithm::pattern::{PatternPolicy, PatternRatios, synthesize_pattern};
    use blockies::random::{RandomStreams, StreamRole, XorshiftState};

    const SEED: &str = "hello world, longer seed";

    fn pattern_streams() -> RandomStreams {
        let mut streams = RandomStreams::new();
        streams.seed(StreamRole::Pattern, SEED);
        streams
    }

    // Tests the unweighted policy reproduces the legacy grid
    // Verified by changing the 2.3 multiplier
    #[test]
    fn test_unweighted_matches_legacy_grid() {
        let grid = synthesize_pattern(&mut pattern_streams(), 8, PatternPolicy::Unweighted);
        assert_eq!(
            grid.values(),
            vec![
                1, 1, 0, 1, 1, 0, 1, 1, //
                0, 1, 1, 0, 0, 1, 1, 0, //
                1, 0, 0, 0, 0, 0, 0, 1, //
                1, 1, 0, 1, 1, 0, 1, 1, //
                0, 0, 2, 0, 0, 2, 0, 0, //
                0, 1, 0, 0, 0, 0, 1, 0, //
                2, 1, 0, 2, 2, 0, 1, 2, //
                1, 0, 0, 1, 1, 0, 0, 1, //
            ]
        );
    }

    // Tests the weighted policy with default ratios reproduces the legacy grid
    // Verified by scanning buckets from the highest index
    #[test]
    fn test_weighted_default_matches_legacy_grid() {
        let policy = PatternPolicy::Weighted(PatternRatios::default());
        let grid = synthesize_pattern(&mut pattern_streams(), 8, policy);
        assert_eq!(
            grid.values(),
            vec![
                1, 1, 0, 0, 0, 0, 1, 1, //
                0, 1, 1, 0, 0, 1, 1, 0, //
                1, 0, 0, 0, 0, 0, 0, 1, //
                0, 1, 0, 1, 1, 0, 1, 0, //
                0, 0, 1, 0, 0, 1, 0, 0, //
                0, 0, 0, 0, 0, 0, 0, 0, //
                2, 1, 0, 2, 2, 0, 1, 2, //
                1, 0, 0, 0, 0, 0, 0, 1, //
            ]
        );
    }

    // Tests a zero background ratio on an odd size
    // Verified by treating zero ratios as unset
    #[test]
    fn test_weighted_zero_background_odd_size() {
        let policy = PatternPolicy::Weighted(PatternRatios {
            background: 0.0,
            foreground: 50.0,
            spot: 50.0,
        });
        let grid = synthesize_pattern(&mut pattern_streams(), 5, policy);
        assert_eq!(
            grid.values(),
            vec![
                2, 2, 1, 2, 2, //
                2, 1, 2, 1, 2, //
                2, 1, 2, 1, 2, //
                1, 1, 1, 1, 1, //
                2, 2, 1, 2, 2, //
            ]
        );
    }

    // Tests pure background ratios yield an empty pattern
    // Verified by selecting the last bucket on ties
    #[test]
    fn test_weighted_pure_background() {
        let policy = PatternPolicy::Weighted(PatternRatios {
            background: 100.0,
            foreground: 0.0,
            spot: 0.0,
        });
        let grid = synthesize_pattern(&mut pattern_streams(), 9, policy);
        assert!(grid.values().iter().all(|&value| value == 0));
    }

    // Tests degenerate ratios fall back to background without losing cells
    // Verified by skipping cells that match no bucket
    #[test]
    fn test_weighted_all_zero_ratios() {
        let policy = PatternPolicy::Weighted(PatternRatios {
            background: 0.0,
            foreground: 0.0,
            spot: 0.0,
        });
        let mut streams = pattern_streams();
        let grid = synthesize_pattern(&mut streams, 6, policy);
        assert_eq!(grid.values(), vec![0; 36]);

        let mut reference = XorshiftState::from_seed(SEED);
        for _ in 0..18 {
            reference.step();
        }
        assert_eq!(streams.state(StreamRole::Pattern), reference);
    }

    // Tests one draw per generated cell and none for mirrored cells
    // Verified by drawing every column
    #[test]
    fn test_draw_count_per_grid() {
        for size in [1, 2, 5, 8, 13] {
            let mut streams = pattern_streams();
            synthesize_pattern(&mut streams, size, PatternPolicy::Unweighted);

            let mut reference = XorshiftState::from_seed(SEED);
            for _ in 0..size * size.div_ceil(2) {
                reference.step();
            }
            assert_eq!(streams.state(StreamRole::Pattern), reference, "size {size}");
        }
    }

    // Tests default ratios
    // Verified by swapping background and foreground defaults
    #[test]
    fn test_default_ratios() {
        let ratios = PatternRatios::default();
        assert_eq!(ratios.cumulative(), vec![60.0, 90.0, 100.0]);
        assert_eq!(PatternPolicy::default(), PatternPolicy::Unweighted);
    }
}
