//! Tests for color synthesis and literal colors

#[cfg(test)]
mod tests {
    use blockies::algorithm::color::{HslColor, IconColor, resolve_color, synthesize_color};
    use blockies::random::{RandomStreams, StreamRole, XorshiftState};

    // Tests synthesized colors reproduce legacy strings
    // Verified by summing lightness draws in a different order
    #[test]
    fn test_synthesize_color_matches_legacy_strings() {
        let mut streams = RandomStreams::new();
        streams.seed(StreamRole::Fallback, "test");

        let foreground = synthesize_color(&mut streams, StreamRole::Color);
        let background = synthesize_color(&mut streams, StreamRole::BackgroundColor);
        let spot = synthesize_color(&mut streams, StreamRole::SpotColor);

        assert_eq!(
            foreground.to_string(),
            "hsl(0,40.00097936950624%,10.601410700473934%)"
        );
        assert_eq!(
            background.to_string(),
            "hsl(4,41.99348018504679%,7.898475171532482%)"
        );
        assert_eq!(
            spot.to_string(),
            "hsl(197,83.21944060735404%,39.76214297581464%)"
        );
    }

    // Tests each color consumes exactly six draws
    // Verified by drawing lightness three times
    #[test]
    fn test_synthesize_color_consumes_six_draws() {
        let mut streams = RandomStreams::new();
        streams.seed(StreamRole::Color, "hello world, longer seed");
        synthesize_color(&mut streams, StreamRole::Color);

        let mut reference = XorshiftState::from_seed("hello world, longer seed");
        for _ in 0..6 {
            reference.step();
        }
        assert_eq!(streams.state(StreamRole::Color), reference);
    }

    // Tests components stay inside their documented ranges
    // Verified by dropping the saturation offset
    #[test]
    fn test_synthesize_color_ranges() {
        for seed in ["a", "b", "zebra", "0123456789abcdef", "hello world, longer seed"] {
            let mut streams = RandomStreams::new();
            streams.seed(StreamRole::Fallback, seed);
            for _ in 0..20 {
                let HslColor {
                    hue,
                    saturation,
                    lightness,
                } = synthesize_color(&mut streams, StreamRole::Color);
                assert!(hue < 360);
                assert!((40.0..100.0).contains(&saturation));
                assert!((0.0..100.0).contains(&lightness));
            }
        }
    }

    // Tests literal colors bypass the stream
    // Verified by synthesizing before checking the literal
    #[test]
    fn test_resolve_color_literal_consumes_nothing() {
        let mut streams = RandomStreams::new();
        streams.seed(StreamRole::Fallback, "test");

        let color = resolve_color(&mut streams, StreamRole::Color, Some("#ff0000"));
        assert_eq!(color, IconColor::Literal("#ff0000".to_string()));
        assert_eq!(color.to_string(), "#ff0000");
        assert_eq!(
            streams.state(StreamRole::Fallback),
            XorshiftState::from_seed("test")
        );

        let synthesized = resolve_color(&mut streams, StreamRole::Color, None);
        assert!(matches!(synthesized, IconColor::Synthesized(_)));
    }
}
