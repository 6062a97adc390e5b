mod tests {
    use embassy_time::Instant;
    use light_rules::MultiSegment;
    use light_rules::color::{OFF, Rgb, palette};
    use light_rules::rule::{Rule, RuleError};
    use light_rules::strip::LightStrip;

    const RED: Rgb = palette::RED;
    const BLUE: Rgb = palette::BLUE;
    const GREEN: Rgb = palette::GREEN;

    fn t0() -> Instant {
        Instant::from_millis(0)
    }

    #[test]
    fn test_continuous_run_matches_single_segment() {
        // three segments of one strip behave like one logical 12-pixel run
        let strip: LightStrip<12> = LightStrip::new();
        let mut multi: MultiSegment<'_, 4> = MultiSegment::new();
        multi.push(strip.segment(0, 4).unwrap(), false).ok().unwrap();
        multi.push(strip.segment(4, 8).unwrap(), false).ok().unwrap();
        multi.push(strip.segment(8, 12).unwrap(), false).ok().unwrap();
        assert_eq!(multi.size(), 12);

        multi
            .set_rule(Rule::new().stripes(&[RED, BLUE], 2).unwrap())
            .unwrap();
        multi.render(t0());

        let reference = Rule::new().stripes(&[RED, BLUE], 2).unwrap();
        let pixels = strip.snapshot();
        for (k, pixel) in pixels.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let expected = reference.evaluate(k as i32, 12, t0());
            assert_eq!(*pixel, expected, "pixel {k}");
        }
    }

    #[test]
    fn test_continuous_run_spans_strips() {
        let first: LightStrip<4> = LightStrip::new();
        let second: LightStrip<6> = LightStrip::new();

        let mut multi: MultiSegment<'_, 2> = MultiSegment::new();
        multi.push(first.segment(0, 4).unwrap(), false).ok().unwrap();
        multi.push(second.segment(0, 6).unwrap(), false).ok().unwrap();

        multi
            .set_rule(Rule::new().stripes(&[RED, BLUE], 2).unwrap())
            .unwrap();
        multi.render(t0());

        assert_eq!(first.snapshot(), [RED, RED, BLUE, BLUE]);
        // continues at logical pixel 4
        assert_eq!(second.snapshot(), [RED, RED, BLUE, BLUE, RED, RED]);
    }

    #[test]
    fn test_non_continuous_replays_pattern() {
        let strip: LightStrip<8> = LightStrip::new();
        let mut multi: MultiSegment<'_, 2> = MultiSegment::with_continuity(false);
        multi.push(strip.segment(0, 4).unwrap(), false).ok().unwrap();
        multi.push(strip.segment(4, 8).unwrap(), false).ok().unwrap();
        assert!(!multi.is_continuous());

        multi
            .set_rule(Rule::new().fill_range(RED, 0, 2).unwrap())
            .unwrap();
        multi.render(t0());

        assert_eq!(
            strip.snapshot(),
            [RED, RED, OFF, OFF, RED, RED, OFF, OFF]
        );
    }

    #[test]
    fn test_flipped_member_mirrors_pattern() {
        let strip: LightStrip<8> = LightStrip::new();
        let mut multi: MultiSegment<'_, 2> = MultiSegment::new();
        multi.push(strip.segment(0, 4).unwrap(), false).ok().unwrap();
        multi.push(strip.segment(4, 8).unwrap(), true).ok().unwrap();

        multi
            .set_rule(Rule::new().stripes(&[RED, BLUE, GREEN], 1).unwrap())
            .unwrap();
        multi.render(t0());

        // first member: logical pixels 0..4
        assert_eq!(strip.snapshot()[..4], [RED, BLUE, GREEN, RED]);
        // flipped member evaluates at 8 - p for local p (flip, then offset 4)
        assert_eq!(strip.snapshot()[4..], [GREEN, BLUE, RED, GREEN]);
    }

    #[test]
    fn test_set_rule_requires_primitive() {
        let strip: LightStrip<4> = LightStrip::new();
        let mut multi: MultiSegment<'_, 2> = MultiSegment::new();
        multi.push(strip.segment(0, 4).unwrap(), false).ok().unwrap();

        assert_eq!(
            multi.set_rule(Rule::new()).unwrap_err(),
            RuleError::MissingPrimitive
        );
    }

    #[test]
    fn test_member_capacity() {
        let strip: LightStrip<8> = LightStrip::new();
        let mut multi: MultiSegment<'_, 1> = MultiSegment::new();
        assert!(multi.push(strip.segment(0, 4).unwrap(), false).is_ok());

        let rejected = multi.push(strip.segment(4, 8).unwrap(), false);
        let segment = rejected.err().unwrap();
        assert_eq!(segment.start(), 4);
        assert_eq!(multi.member_count(), 1);
    }

    #[test]
    fn test_clear_rule_turns_run_off() {
        let strip: LightStrip<8> = LightStrip::new();
        let mut multi: MultiSegment<'_, 2> = MultiSegment::new();
        multi.push(strip.segment(0, 4).unwrap(), false).ok().unwrap();
        multi.push(strip.segment(4, 8).unwrap(), false).ok().unwrap();

        multi.set_rule(Rule::new().fill(RED).unwrap()).unwrap();
        multi.render(t0());
        assert_eq!(strip.snapshot(), [RED; 8]);
        assert!(multi.rule().is_some());

        multi.clear_rule();
        assert!(multi.rule().is_none());
        multi.render(t0());
        assert_eq!(strip.snapshot(), [OFF; 8]);
    }

    #[test]
    fn test_original_rule_survives_install() {
        let strip: LightStrip<4> = LightStrip::new();
        let mut multi: MultiSegment<'_, 1> = MultiSegment::new();
        multi.push(strip.segment(0, 4).unwrap(), false).ok().unwrap();

        let rule = Rule::new().fill_range(RED, 0, 2).unwrap();
        multi.set_rule(rule.clone()).unwrap();

        // deriving per-member copies must not disturb the caller's rule
        assert_eq!(rule.layer_count(), 1);
        assert_eq!(rule.evaluate(0, 4, t0()), RED);
    }
}
