//! Unit tests for boid-agent.

#[cfg(test)]
mod store {
    use boid_core::{AgentId, GROUP_COUNT, GroupId, Multipliers, Quat, Transform, Vec3};

    use crate::{AgentSpec, AgentStoreBuilder};

    fn at(x: f32) -> Transform {
        Transform::from_position_rotation(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY)
    }

    #[test]
    fn ids_follow_push_order() {
        let mut store = AgentStoreBuilder::empty(3);
        assert!(store.is_empty());
        for i in 0..3 {
            let id = store.push(AgentSpec::new(GroupId(1), at(i as f32))).unwrap();
            assert_eq!(id, AgentId(i));
        }
        assert_eq!(store.count, 3);
        assert_eq!(store.agent_ids().collect::<Vec<_>>(), vec![AgentId(0), AgentId(1), AgentId(2)]);
        assert_eq!(store.position(AgentId(2)), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn all_soa_arrays_have_count_elements() {
        let store = AgentStoreBuilder::new(4)
            .agents((0..4).map(|i| AgentSpec::new(GroupId(2), at(i as f32))))
            .build()
            .unwrap();
        assert_eq!(store.transforms.len(), 4);
        assert_eq!(store.multipliers.len(), 4);
        assert_eq!(store.group.len(), 4);
        assert_eq!(store.layers.len(), 4);
        assert_eq!(store.trigger.len(), 4);
    }

    #[test]
    fn group_out_of_range_is_rejected() {
        let mut store = AgentStoreBuilder::empty(1);
        let bad = AgentSpec::new(GroupId(GROUP_COUNT as u16), Transform::IDENTITY);
        assert!(store.push(bad).is_err());
        assert_eq!(store.count, 0, "nothing is stored on error");
        assert!(store.transforms.is_empty());
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let mut store = AgentStoreBuilder::empty(1);
        let nan_pos = Transform::from_position_rotation(Vec3::new(f32::NAN, 0.0, 0.0), Quat::IDENTITY);
        assert!(store.push(AgentSpec::new(GroupId(1), nan_pos)).is_err());

        let zero_rot = Transform::from_position_rotation(Vec3::ZERO, Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        assert!(store.push(AgentSpec::new(GroupId(1), zero_rot)).is_err());

        let bad_mult = AgentSpec::new(GroupId(1), Transform::IDENTITY)
            .with_multipliers(Multipliers { speed: f32::INFINITY, ..Multipliers::ONE });
        assert!(store.push(bad_mult).is_err());
    }

    #[test]
    fn bulk_get_and_set_transforms() {
        let mut store = AgentStoreBuilder::new(3)
            .agents((0..3).map(|i| AgentSpec::new(GroupId(1), at(i as f32))))
            .build()
            .unwrap();

        let ids = [AgentId(2), AgentId(0)];
        let got = store.transforms_of(&ids);
        assert_eq!(got, vec![at(2.0), at(0.0)]);

        store.set_transforms(&ids, &[at(20.0), at(10.0)]);
        assert_eq!(store.transform(AgentId(0)), at(10.0));
        assert_eq!(store.transform(AgentId(1)), at(1.0), "untouched agent keeps its transform");
        assert_eq!(store.transform(AgentId(2)), at(20.0));
    }

    #[test]
    #[should_panic]
    fn set_transforms_length_mismatch_panics() {
        let mut store = AgentStoreBuilder::new(1)
            .agent(AgentSpec::new(GroupId(1), Transform::IDENTITY))
            .build()
            .unwrap();
        store.set_transforms(&[AgentId(0)], &[]);
    }

    #[test]
    fn group_transforms_follow_member_order() {
        let mut store = AgentStoreBuilder::new(3)
            .agent(AgentSpec::new(GroupId(1), at(0.0)))
            .agent(AgentSpec::new(GroupId(2), at(1.0)))
            .agent(AgentSpec::new(GroupId(1), at(2.0)))
            .build()
            .unwrap();

        store.set_group_transforms(GroupId(1), &[at(5.0), at(7.0)]).unwrap();
        assert_eq!(store.transform(AgentId(0)), at(5.0));
        assert_eq!(store.transform(AgentId(1)), at(1.0));
        assert_eq!(store.transform(AgentId(2)), at(7.0));

        assert_eq!(store.set_group_transforms(GroupId(2), &[]), Err(1));
        assert_eq!(store.transform(AgentId(1)), at(1.0));
    }

    #[test]
    fn spec_builders_set_fields() {
        let spec = AgentSpec::new(GroupId(1), Transform::IDENTITY)
            .with_layers(0b100)
            .as_trigger();
        assert_eq!(spec.layers, 0b100);
        assert!(spec.trigger);
        assert_eq!(spec.multipliers, Multipliers::ONE);
    }
}

#[cfg(test)]
mod groups {
    use boid_core::{AgentId, GroupId, Transform};

    use crate::{AgentSpec, AgentStoreBuilder, GroupIndex};

    #[test]
    fn members_are_contiguous_per_group() {
        let store = AgentStoreBuilder::new(5)
            .agent(AgentSpec::new(GroupId(1), Transform::IDENTITY))
            .agent(AgentSpec::new(GroupId(3), Transform::IDENTITY))
            .agent(AgentSpec::new(GroupId(1), Transform::IDENTITY))
            .agent(AgentSpec::new(GroupId::NONE, Transform::IDENTITY))
            .agent(AgentSpec::new(GroupId(3), Transform::IDENTITY))
            .build()
            .unwrap();

        let groups = store.groups();
        assert_eq!(groups.members(GroupId(1)), &[AgentId(0), AgentId(2)]);
        assert_eq!(groups.members(GroupId(3)), &[AgentId(1), AgentId(4)]);
        assert_eq!(groups.members(GroupId::NONE), &[AgentId(3)]);
        assert!(groups.members(GroupId(2)).is_empty());
    }

    #[test]
    fn populated_skips_none_and_empty_groups() {
        let store = AgentStoreBuilder::new(3)
            .agent(AgentSpec::new(GroupId::NONE, Transform::IDENTITY))
            .agent(AgentSpec::new(GroupId(5), Transform::IDENTITY))
            .agent(AgentSpec::new(GroupId(2), Transform::IDENTITY))
            .build()
            .unwrap();
        let populated: Vec<GroupId> = store.groups().populated().collect();
        assert_eq!(populated, vec![GroupId(2), GroupId(5)]);
        assert_eq!(store.groups().simulated_count(), 2);
    }

    #[test]
    fn unknown_group_has_no_members() {
        let index = GroupIndex::new();
        assert!(index.members(GroupId::INVALID).is_empty());
        assert_eq!(index.len(GroupId(1)), 0);
    }
}

#[cfg(test)]
mod spawn {
    use boid_core::{GroupId, Multipliers, Transform, Vec3};

    use crate::{AgentSpec, AgentStoreBuilder, SpawnConfig, Spawner};

    fn config() -> SpawnConfig {
        SpawnConfig { target_total_count: 10, group_count: 3, group_radius: 2.0 }
    }

    #[test]
    fn per_group_count_rounds_down() {
        let cfg = config();
        assert_eq!(cfg.agents_per_group(), 3);
        assert_eq!(cfg.total_count(), 9);
        let none = SpawnConfig { group_count: 0, ..cfg };
        assert_eq!(none.agents_per_group(), 0);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let cfg = SpawnConfig { group_radius: -1.0, ..config() };
        assert!(Spawner::new(cfg, 1).is_err());
    }

    #[test]
    fn agents_land_within_group_radius() {
        let mut spawner = Spawner::new(config(), 1234).unwrap();
        let mut store = AgentStoreBuilder::empty(9);
        let target = Vec3::new(10.0, -4.0, 2.0);
        let prefab = AgentSpec::new(GroupId::NONE, Transform::IDENTITY)
            .with_multipliers(Multipliers::new(2.0, 1.0, 1.0, 1.0));

        let ids = spawner.spawn_group(&mut store, GroupId(1), target, prefab).unwrap();
        assert_eq!(ids.len(), 3);
        for id in ids {
            assert!(store.position(id).distance(target) < 2.0 + 1e-4);
            assert_eq!(store.group[id.index()], GroupId(1));
            assert_eq!(store.multipliers[id.index()].speed, 2.0);
            assert!((store.transform(id).rotation.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn same_seed_same_placement() {
        let place = |seed: u64| {
            let mut spawner = Spawner::new(config(), seed).unwrap();
            let mut store = AgentStoreBuilder::empty(9);
            let prefab = AgentSpec::new(GroupId::NONE, Transform::IDENTITY);
            for g in 1..=3u16 {
                spawner
                    .spawn_group(&mut store, GroupId(g), Vec3::splat(g as f32), prefab)
                    .unwrap();
            }
            store.transforms
        };
        assert_eq!(place(99), place(99));
        assert_ne!(place(99), place(100));
    }
}
