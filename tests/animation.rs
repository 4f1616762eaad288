mod tests {
    use distance_guide::config::StripConfig;
    use distance_guide::{AnimationState, Direction, Zone};

    fn strip() -> StripConfig {
        StripConfig::new(40, 100, 500).unwrap()
    }

    #[test]
    fn test_too_close_starts_forward() {
        let mut animation = AnimationState::new();
        assert!(animation.transition(Zone::TooClose, &strip()));
        assert_eq!(animation.direction(), Some(Direction::Forward));
        assert_eq!(animation.start_pos(), 0);
        assert_eq!(animation.end_pos(), 10);
        assert_eq!(animation.current_position(), 0);
    }

    #[test]
    fn test_far_zones_start_backward() {
        for zone in [Zone::TooFar, Zone::OutOfRangeFar] {
            let mut animation = AnimationState::new();
            assert!(animation.transition(zone, &strip()));
            assert_eq!(animation.direction(), Some(Direction::Backward));
            assert_eq!(animation.start_pos(), 39);
            assert_eq!(animation.end_pos(), 13);
            assert_eq!(animation.current_position(), 39);
        }
    }

    #[test]
    fn test_static_zones_stop_animation() {
        for zone in [Zone::Ideal, Zone::Emergency, Zone::SensorError] {
            let mut animation = AnimationState::new();
            animation.transition(Zone::TooFar, &strip());
            assert!(!animation.transition(zone, &strip()));
            assert!(!animation.is_active());
            assert_eq!(animation.direction(), None);
        }
    }

    #[test]
    fn test_same_direction_keeps_position() {
        let strip = strip();
        let mut animation = AnimationState::new();
        animation.transition(Zone::TooFar, &strip);
        animation.advance();
        animation.advance();
        assert_eq!(animation.current_position(), 37);

        assert!(!animation.transition(Zone::TooFar, &strip));
        assert_eq!(animation.current_position(), 37);

        assert!(!animation.transition(Zone::OutOfRangeFar, &strip));
        assert_eq!(animation.current_position(), 37);
    }

    #[test]
    fn test_direction_change_resets_position() {
        let strip = strip();
        let mut animation = AnimationState::new();
        animation.transition(Zone::TooClose, &strip);
        animation.advance();
        assert_eq!(animation.current_position(), 1);

        assert!(animation.transition(Zone::TooFar, &strip));
        assert_eq!(animation.current_position(), 39);
    }

    #[test]
    fn test_reactivation_resets_position() {
        let strip = strip();
        let mut animation = AnimationState::new();
        animation.transition(Zone::TooFar, &strip);
        animation.advance();
        animation.transition(Zone::Ideal, &strip);

        assert!(animation.transition(Zone::TooFar, &strip));
        assert_eq!(animation.current_position(), 39);
    }

    #[test]
    fn test_forward_loop_visits_each_index_once() {
        let mut animation = AnimationState::new();
        animation.transition(Zone::TooClose, &strip());

        let mut visited = vec![animation.current_position()];
        loop {
            animation.advance();
            assert!(animation.current_position() <= animation.end_pos());
            if animation.current_position() == animation.start_pos() {
                break;
            }
            visited.push(animation.current_position());
        }

        assert_eq!(visited, (0..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_backward_loop_visits_each_index_once() {
        let mut animation = AnimationState::new();
        animation.transition(Zone::TooFar, &strip());

        let mut visited = vec![animation.current_position()];
        loop {
            animation.advance();
            assert!(animation.current_position() >= animation.end_pos());
            if animation.current_position() == animation.start_pos() {
                break;
            }
            visited.push(animation.current_position());
        }

        assert_eq!(visited, (13..=39).rev().collect::<Vec<u8>>());
    }

    #[test]
    fn test_advance_while_inactive_does_nothing() {
        let mut animation = AnimationState::new();
        animation.advance();
        assert_eq!(animation, AnimationState::new());
    }

    #[test]
    fn test_single_led_strip_loop_stays_put() {
        let strip = StripConfig::new(1, 100, 500).unwrap();
        let mut animation = AnimationState::new();
        animation.transition(Zone::OutOfRangeFar, &strip);
        for _ in 0..3 {
            animation.advance();
            assert_eq!(animation.current_position(), 0);
        }
    }
}
