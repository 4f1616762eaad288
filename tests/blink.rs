mod tests {
    use distance_guide::BlinkState;
    use embassy_time::{Duration, Instant};

    #[test]
    fn test_blink_starts_on() {
        let blink = BlinkState::new(Duration::from_millis(1000), Instant::from_millis(0));
        assert!(blink.is_on());
        assert_eq!(blink.last_toggle(), Instant::from_millis(0));
    }

    #[test]
    fn test_blink_toggles_every_half_period() {
        let mut blink = BlinkState::new(Duration::from_millis(1000), Instant::from_millis(0));

        blink.advance(Instant::from_millis(400));
        assert!(blink.is_on());

        blink.advance(Instant::from_millis(500));
        assert!(!blink.is_on());
        assert_eq!(blink.last_toggle(), Instant::from_millis(500));

        blink.advance(Instant::from_millis(900));
        assert!(!blink.is_on());

        blink.advance(Instant::from_millis(1000));
        assert!(blink.is_on());
    }

    #[test]
    fn test_blink_late_tick_toggles_once() {
        let mut blink = BlinkState::new(Duration::from_millis(1000), Instant::from_millis(0));

        blink.advance(Instant::from_millis(1700));
        assert!(!blink.is_on());
        assert_eq!(blink.last_toggle(), Instant::from_millis(1700));
    }
}
