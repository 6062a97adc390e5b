mod tests {
    use light_rules::color::{Rgb, hsv_to_rgb, wrap_unit};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const CYAN: Rgb = Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(0.0), 0.0);
        assert_eq!(wrap_unit(0.25), 0.25);
        assert_eq!(wrap_unit(1.5), 0.5);
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(-1.0), 0.0);
        assert_eq!(wrap_unit(3.75), 0.75);
    }

    #[test]
    fn test_hsv_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), CYAN);
    }

    #[test]
    fn test_hsv_intermediate_hue() {
        // 30 degrees: orange, green channel at half intensity
        assert_eq!(
            hsv_to_rgb(1.0 / 12.0, 1.0, 1.0),
            Rgb {
                r: 255,
                g: 128,
                b: 0
            }
        );
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(hsv_to_rgb(1.25, 1.0, 1.0), hsv_to_rgb(0.25, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-0.75, 1.0, 1.0), hsv_to_rgb(0.25, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), RED);
    }

    #[test]
    fn test_hsv_zero_saturation_is_white() {
        assert_eq!(hsv_to_rgb(0.123, 0.0, 1.0), WHITE);
    }

    #[test]
    fn test_hsv_value_scales_channels() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 0.5), Rgb { r: 128, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(0.0, 1.0, 0.0), Rgb { r: 0, g: 0, b: 0 });
    }
}
