#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::InputAction;
    use crate::constants::*;
    use crate::enums::*;
    use crate::state::{LevelState, StatusView};
    use crate::types::{is_offscreen, overlaps, Body};

    // ---- Overlap ----

    #[test]
    fn test_overlap_is_symmetric() {
        let a = DVec2::new(10.0, 10.0);
        let b = DVec2::new(16.0, 18.0);
        for (ra, rb) in [(4.0, 12.0), (8.0, 8.0), (2.0, 3.0), (12.0, 0.5)] {
            assert_eq!(overlaps(a, ra, b, rb), overlaps(b, rb, a, ra));
        }
    }

    #[test]
    fn test_overlap_boundary_is_exclusive() {
        // Radii sum to 16, threshold 12.
        let a = DVec2::new(0.0, 0.0);
        let on_threshold = DVec2::new(0.0, -12.0);
        assert!(!overlaps(a, 8.0, on_threshold, 8.0));

        let inside = DVec2::new(7.0, 9.0);
        assert!(overlaps(a, 8.0, inside, 8.0));

        let axis = DVec2::new(12.0, 0.0);
        assert!(!overlaps(a, 8.0, axis, 8.0));
        assert!(overlaps(a, 8.0, DVec2::new(11.999, 0.0), 8.0));
    }

    // ---- Body ----

    #[test]
    fn test_body_radius_scales_with_size() {
        let body = Body::new(DVec2::ZERO, 0, 1.5, DEPTH_ACTORS);
        assert_eq!(body.radius(), 12.0);
        let small = Body::new(DVec2::ZERO, 0, 0.5, DEPTH_ACTORS);
        assert_eq!(small.radius(), 4.0);
    }

    #[test]
    fn test_body_death_is_permanent() {
        let mut body = Body::new(DVec2::new(5.0, 5.0), 0, 1.0, DEPTH_SHIPS);
        assert!(body.is_alive());
        body.mark_dead();
        body.mark_dead();
        assert!(!body.is_alive());
    }

    #[test]
    fn test_offscreen_bounds() {
        assert!(!is_offscreen(DVec2::new(0.0, 0.0)));
        assert!(!is_offscreen(DVec2::new(VIEW_WIDTH - 1.0, VIEW_HEIGHT - 1.0)));
        assert!(is_offscreen(DVec2::new(-0.1, 10.0)));
        assert!(is_offscreen(DVec2::new(VIEW_WIDTH, 10.0)));
        assert!(is_offscreen(DVec2::new(10.0, VIEW_HEIGHT)));
        assert!(is_offscreen(DVec2::new(10.0, -1.0)));
    }

    #[test]
    fn test_turn_wraps() {
        let mut body = Body::new(DVec2::ZERO, 350, 0.5, DEPTH_ACTORS);
        body.turn(PROJECTILE_SPIN);
        assert_eq!(body.direction, 10);
    }

    // ---- Level counters ----

    #[test]
    fn test_level_counters_grow_with_level() {
        let one = LevelState::for_level(1);
        assert_eq!(one.kills_needed, 10);
        assert_eq!(one.enemy_cap, 4);
        assert_eq!(one.spawn_ceiling(), 4);

        let two = LevelState::for_level(2);
        assert_eq!(two.kills_needed, 14);
        assert_eq!(two.enemy_cap, 5);

        let zero = LevelState::for_level(0);
        assert_eq!(zero, one, "level 0 clamps to level 1");
    }

    #[test]
    fn test_spawn_ceiling_uses_outstanding_kills() {
        let mut level = LevelState::for_level(3);
        level.kills_needed = 2;
        assert_eq!(level.spawn_ceiling(), 2);
        level.kills_needed = 0;
        assert!(level.is_cleared());
    }

    // ---- Status line ----

    #[test]
    fn test_status_line_layout() {
        let status = StatusView::new(3, 50, 1250, 2, 30, 5);
        assert_eq!(
            status.to_string(),
            "Lives: 3  Health: 100%  Score: 1250  Level: 2  Cabbages: 100%  Torpedoes: 5"
        );
    }

    #[test]
    fn test_status_percentages_round_down() {
        let status = StatusView::new(1, 33, 0, 1, 29, 0);
        assert_eq!(status.health_pct, 66);
        assert_eq!(status.cabbage_pct, 96);

        let low = StatusView::new(1, 1, 0, 1, 1, 0);
        assert_eq!(low.health_pct, 2);
        assert_eq!(low.cabbage_pct, 3);
    }

    // ---- Serde ----

    #[test]
    fn test_input_action_serde() {
        let actions = vec![
            InputAction::MoveUp,
            InputAction::MoveDown,
            InputAction::MoveLeft,
            InputAction::MoveRight,
            InputAction::FirePrimary,
            InputAction::FireSecondary,
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let back: Vec<InputAction> = serde_json::from_str(&json).unwrap();
        assert_eq!(actions, back);
    }

    #[test]
    fn test_flight_plan_serde() {
        for plan in [
            FlightPlan::Following { remaining: 7 },
            FlightPlan::Rushing { remaining: 256 },
            FlightPlan::EdgeBounce,
        ] {
            let json = serde_json::to_string(&plan).unwrap();
            let back: FlightPlan = serde_json::from_str(&json).unwrap();
            assert_eq!(plan, back);
        }
    }

    #[test]
    fn test_heading_degrees() {
        assert_eq!(Heading::Left.degrees(), 180);
        assert_eq!(Heading::UpLeft.degrees(), 135);
        assert_eq!(Heading::DownLeft.degrees(), 225);
    }
}
