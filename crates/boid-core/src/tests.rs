//! Unit tests for boid-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, GROUP_COUNT, GroupId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(GroupId::INVALID.0, u16::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(GroupId(3).to_string(), "GroupId(3)");
    }

    #[test]
    fn none_group_is_not_simulated() {
        assert!(!GroupId::NONE.is_simulated());
        assert_eq!(GroupId::NONE.placement_slot(), None);
        assert!(!GroupId::INVALID.is_simulated());
        assert!(!GroupId(GROUP_COUNT as u16).is_simulated());
    }

    #[test]
    fn placement_slot_is_index_minus_one() {
        assert_eq!(GroupId(1).placement_slot(), Some(0));
        assert_eq!(GroupId(63).placement_slot(), Some(62));
    }

    #[test]
    fn simulated_range_skips_sentinel() {
        let ids: Vec<GroupId> = GroupId::simulated().collect();
        assert_eq!(ids.len(), GROUP_COUNT - 1);
        assert_eq!(ids[0], GroupId(1));
        assert!(ids.iter().all(|g| g.is_simulated()));
    }
}

#[cfg(test)]
mod math {
    use glam::{Quat, Vec3};

    use crate::{FORWARD, Transform, try_normalize};

    #[test]
    fn identity_faces_forward() {
        assert_eq!(Transform::IDENTITY.forward(), FORWARD);
    }

    #[test]
    fn zero_vector_does_not_normalize() {
        assert_eq!(try_normalize(Vec3::ZERO), None);
        assert_eq!(try_normalize(Vec3::new(f32::NAN, 0.0, 0.0)), None);
        let n = try_normalize(Vec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotated_applies_world_space_delta() {
        let t = Transform::IDENTITY.rotated(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        // Quarter turn about +Y takes +Z to +X.
        assert!((t.forward() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn translated_keeps_rotation() {
        let rot = Quat::from_rotation_x(0.3);
        let t = Transform::from_position_rotation(Vec3::ONE, rot).translated(Vec3::Y);
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(t.rotation, rot);
    }
}

#[cfg(test)]
mod time {
    use crate::{Frame, FrameClock, SimConfig};

    #[test]
    fn frame_arithmetic() {
        let f = Frame(10);
        assert_eq!(f + 5, Frame(15));
        assert_eq!(f.offset(3), Frame(13));
        assert_eq!(Frame(15).since(Frame(10)), 5);
    }

    #[test]
    fn clock_counts_zero_delta_frames() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        clock.advance(0.5);
        clock.advance(0.0);
        assert_eq!(clock.current_frame, Frame(3));
        assert_eq!(clock.elapsed_secs, 0.5);
    }

    #[test]
    fn sim_config_end_frame() {
        let cfg = SimConfig { total_frames: 120, ..SimConfig::default() };
        assert_eq!(cfg.end_frame(), Frame(120));
    }

    #[test]
    fn negative_delta_is_rejected() {
        let cfg = SimConfig { fixed_delta_secs: -0.1, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { fixed_delta_secs: f32::INFINITY, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_threads_is_rejected() {
        let cfg = SimConfig { num_threads: Some(0), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::SpawnRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SpawnRng::new(12345);
        let mut r2 = SpawnRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.rotation(), r2.rotation());
            assert_eq!(r1.distance(2.0), r2.distance(2.0));
        }
    }

    #[test]
    fn child_streams_differ() {
        let mut root = SpawnRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn rotations_are_unit() {
        let mut rng = SpawnRng::new(7);
        for _ in 0..1000 {
            let q = rng.rotation();
            assert!((q.length() - 1.0).abs() < 1e-5);
            assert!((rng.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn distance_in_bounds() {
        let mut rng = SpawnRng::new(0);
        for _ in 0..1000 {
            let d = rng.distance(3.0);
            assert!((0.0..3.0).contains(&d));
        }
        assert_eq!(rng.distance(0.0), 0.0);
        assert_eq!(rng.distance(-1.0), 0.0);
    }
}

#[cfg(test)]
mod multipliers {
    use crate::Multipliers;

    #[test]
    fn combine_is_component_wise() {
        let a = Multipliers::new(2.0, 3.0, 4.0, 5.0);
        let b = Multipliers::new(0.5, 2.0, 0.0, -1.0);
        assert_eq!(a.combine(b), Multipliers::new(1.0, 6.0, 0.0, -5.0));
    }

    #[test]
    fn one_is_neutral() {
        let a = Multipliers::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(a.combine(Multipliers::ONE), a);
        assert_eq!(Multipliers::default(), Multipliers::ONE);
    }

    #[test]
    fn nan_is_not_finite() {
        let m = Multipliers { coherence: f32::NAN, ..Multipliers::ONE };
        assert!(!m.is_finite());
        assert!(Multipliers::ZERO.is_finite());
    }
}
