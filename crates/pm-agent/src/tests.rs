//! Unit tests for pm-agent.

#[cfg(test)]
mod kind {
    use crate::{AgentKind, Gender, KindTag, Role};

    #[test]
    fn accessors_follow_variant() {
        let single = AgentKind::Single { gender: Gender::Female };
        assert_eq!(single.tag(), KindTag::Single);
        assert_eq!(single.gender(), Some(Gender::Female));
        assert_eq!(single.role(), None);

        let couple = AgentKind::Couple { gender: None };
        assert_eq!(couple.tag(), KindTag::Couple);
        assert_eq!(couple.gender(), None);

        let child = AgentKind::Family { role: Role::Child, gender: Gender::Male };
        assert_eq!(child.role(), Some(Role::Child));
        assert_eq!(child.gender(), Some(Gender::Male));
    }

    #[test]
    fn display() {
        assert_eq!(Gender::Male.to_string(), "M");
        assert_eq!(Role::Child.to_string(), "child");
        assert_eq!(KindTag::Family.to_string(), "family");
    }
}

#[cfg(test)]
mod history {
    use pm_core::ScreenPoint;

    use crate::PathHistory;

    fn pt(i: usize) -> ScreenPoint {
        ScreenPoint::new(i as f64, 0.0)
    }

    #[test]
    fn starts_empty() {
        let h = PathHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.latest(), None);
    }

    #[test]
    fn grows_until_capacity() {
        let mut h = PathHistory::new();
        for i in 0..PathHistory::CAPACITY {
            h.push(pt(i));
            assert_eq!(h.len(), i + 1);
        }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut h = PathHistory::new();
        for i in 0..35 {
            h.push(pt(i));
        }
        assert_eq!(h.len(), PathHistory::CAPACITY);
        let xs: Vec<f64> = h.iter().map(|p| p.x).collect();
        let expected: Vec<f64> = (15..35).map(|i| i as f64).collect();
        assert_eq!(xs, expected);
        assert_eq!(h.latest(), Some(pt(34)));
    }
}

#[cfg(test)]
mod config {
    use pm_core::{ConfigError, UniformRange};

    use crate::{CouplePolicy, PopulationConfig};

    #[test]
    fn default_is_valid() {
        assert!(PopulationConfig::default().validate().is_ok());
    }

    #[test]
    fn default_bounds() {
        assert_eq!(PopulationConfig::default().agent_count_bounds(), (79, 87));
    }

    #[test]
    fn empty_speed_range_rejected() {
        let mut cfg = PopulationConfig::default();
        cfg.couples.speed = UniformRange::new(0.05, 0.04);
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRange { what: "couples.speed", .. }));
    }

    #[test]
    fn zero_speed_rejected() {
        let mut cfg = PopulationConfig::default();
        cfg.families.speed = UniformRange::new(0.0, 0.01);
        assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { .. })));
    }

    #[test]
    fn bad_ratio_rejected() {
        let mut cfg = PopulationConfig::default();
        cfg.singles.male_ratio = 1.2;
        assert!(matches!(cfg.validate(), Err(ConfigError::Probability { .. })));
    }

    #[test]
    fn negative_offset_rejected() {
        let mut cfg = PopulationConfig::default();
        cfg.families.parent_offset = -0.1;
        assert!(matches!(cfg.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn start_progress_must_fit_path() {
        let mut cfg = PopulationConfig::default();
        cfg.start_progress = UniformRange::new(0.0, 150.0);
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "singles": { "count": 30, "male_ratio": 0.5 },
            "couples": { "gender": "random" }
        }"#;
        let cfg: PopulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.singles.count, 30);
        assert_eq!(cfg.singles.male_ratio, 0.5);
        assert_eq!(cfg.singles.lane_magnitude, UniformRange::new(0.3, 0.7));
        assert_eq!(cfg.couples.gender, CouplePolicy::Random);
        assert_eq!(cfg.couples.groups, 20);
        assert_eq!(cfg.families.groups, 8);
    }

    #[test]
    fn partial_meander_keeps_kind_defaults() {
        let json = r#"{
            "singles":  { "meander": { "probability": 0.9 } },
            "families": { "meander": { "amplitude": { "min": 0.0, "max": 0.05 } } }
        }"#;
        let cfg: PopulationConfig = serde_json::from_str(json).unwrap();
        let reference = PopulationConfig::default();

        assert_eq!(cfg.singles.meander.probability, 0.9);
        assert_eq!(cfg.singles.meander.amplitude, reference.singles.meander.amplitude);

        assert_eq!(cfg.families.meander.probability, reference.families.meander.probability);
        assert_eq!(cfg.families.meander.amplitude, UniformRange::new(0.0, 0.05));

        assert_eq!(cfg.couples.meander, reference.couples.meander);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn population_beyond_id_space_rejected() {
        let mut cfg = PopulationConfig::default();
        cfg.couples.groups = 3_000_000_000;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));

        // Right at the limit is still fine.
        let mut cfg = PopulationConfig::default();
        cfg.couples.groups = 0;
        cfg.families.groups = 0;
        cfg.singles.count = u32::MAX;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bounds_saturate_instead_of_overflowing() {
        let mut cfg = PopulationConfig::default();
        cfg.couples.groups = u32::MAX;
        cfg.families.groups = u32::MAX;
        let (min, max) = cfg.agent_count_bounds();
        assert!(min <= max);
    }
}

#[cfg(test)]
mod generator {
    use pm_core::{AgentId, ConfigError, SimRng, UniformRange};

    use crate::{
        Agent, AgentKind, CouplePolicy, Gender, KindTag, PopulationConfig, Role,
        generate_population,
    };

    fn population(seed: u64) -> Vec<Agent> {
        generate_population(&PopulationConfig::default(), &mut SimRng::new(seed)).unwrap()
    }

    fn count(agents: &[Agent], tag: KindTag) -> usize {
        agents.iter().filter(|a| a.kind.tag() == tag).count()
    }

    #[test]
    fn reference_composition() {
        for seed in 0..20 {
            let agents = population(seed);
            assert_eq!(count(&agents, KindTag::Couple), 40);
            assert_eq!(count(&agents, KindTag::Single), 15);
            let families = count(&agents, KindTag::Family);
            assert!((24..=32).contains(&families), "seed {seed}: {families} family agents");
        }
    }

    #[test]
    fn ids_sequential_in_kind_order() {
        let agents = population(1);
        for (i, a) in agents.iter().enumerate() {
            assert_eq!(a.id, AgentId(i as u32));
        }
        let tags: Vec<KindTag> = agents.iter().map(|a| a.kind.tag()).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted, "couples, then singles, then families");
        assert_eq!(agents[0].kind.tag(), KindTag::Couple);
        assert_eq!(agents[40].kind.tag(), KindTag::Single);
        assert_eq!(agents[55].kind.tag(), KindTag::Family);
    }

    #[test]
    fn same_seed_same_population() {
        assert_eq!(population(77), population(77));
        assert_ne!(population(77), population(78));
    }

    #[test]
    fn initial_state() {
        for a in population(2) {
            assert_eq!(a.lane, a.kinematics.base_lane);
            assert!(a.history.is_empty());
            assert!((0.0..100.0).contains(&a.progress));
            assert!((0.0..std::f64::consts::TAU).contains(&a.kinematics.wave_offset));
        }
    }

    #[test]
    fn couples_share_motion_and_straddle_lane() {
        let agents = population(3);
        for pair in agents[..40].chunks(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert_eq!(a.kinematics.base_speed, b.kinematics.base_speed);
            assert_eq!(a.kinematics.direction, b.kinematics.direction);
            assert_eq!(a.progress, b.progress);
            assert_eq!(a.kinematics.waviness, b.kinematics.waviness);
            assert!((a.kinematics.base_lane - b.kinematics.base_lane + 0.2).abs() < 1e-12);
            let center = (a.kinematics.base_lane + b.kinematics.base_lane) / 2.0;
            assert!((center.abs() - 0.5).abs() < 1e-12);
            assert!((0.04..0.05).contains(&a.kinematics.base_speed));
            let w = a.kinematics.waviness;
            assert!(w == 0.0 || (0.15..0.25).contains(&w));
            // Default policy: one of each.
            assert_eq!(a.kind, AgentKind::Couple { gender: Some(Gender::Male) });
            assert_eq!(b.kind, AgentKind::Couple { gender: Some(Gender::Female) });
        }
    }

    #[test]
    fn singles_parameters_in_range() {
        let agents = population(4);
        for a in agents.iter().filter(|a| a.kind.tag() == KindTag::Single) {
            let k = &a.kinematics;
            assert!((0.04..0.05).contains(&k.base_speed));
            assert!((0.3..0.7).contains(&k.base_lane.abs()));
            assert!(k.waviness == 0.0 || (0.2..0.35).contains(&k.waviness));
            assert!(a.kind.gender().is_some());
        }
    }

    #[test]
    fn families_layout() {
        let agents = population(5);
        let family: Vec<&Agent> = agents.iter().filter(|a| a.kind.tag() == KindTag::Family).collect();

        let mut i = 0;
        let mut groups = 0;
        while i < family.len() {
            let parent_a = family[i];
            let parent_b = family[i + 1];
            assert_eq!(parent_a.kind, AgentKind::Family { role: Role::Parent, gender: Gender::Male });
            assert_eq!(parent_b.kind, AgentKind::Family { role: Role::Parent, gender: Gender::Female });

            let lane = (parent_a.kinematics.base_lane + parent_b.kinematics.base_lane) / 2.0;
            assert!((lane.abs() - 0.5).abs() < 1e-12);
            assert!((parent_a.kinematics.base_lane - (lane - 0.15)).abs() < 1e-12);

            let mut members = vec![parent_a, parent_b];
            let mut j = i + 2;
            while j < family.len() && family[j].kind.role() == Some(Role::Child) {
                members.push(family[j]);
                j += 1;
            }
            let children = &members[2..];
            assert!((1..=2).contains(&children.len()));
            assert!((children[0].kinematics.base_lane - (lane - 0.05)).abs() < 1e-12);
            if let Some(second) = children.get(1) {
                assert!((second.kinematics.base_lane - (lane + 0.05)).abs() < 1e-12);
            }

            for m in &members {
                assert_eq!(m.kinematics.base_speed, parent_a.kinematics.base_speed);
                assert_eq!(m.kinematics.direction, parent_a.kinematics.direction);
                assert_eq!(m.kinematics.wave_offset, parent_a.kinematics.wave_offset);
                assert_eq!(m.kinematics.waviness, parent_a.kinematics.waviness);
                assert_eq!(m.progress, parent_a.progress);
            }
            assert!((0.035..0.045).contains(&parent_a.kinematics.base_speed));

            groups += 1;
            i = j;
        }
        assert_eq!(groups, 8);
    }

    #[test]
    fn couple_policy_unassigned() {
        let mut cfg = PopulationConfig::default();
        cfg.couples.gender = CouplePolicy::Unassigned;
        let agents = generate_population(&cfg, &mut SimRng::new(6)).unwrap();
        assert!(agents[..40].iter().all(|a| a.kind.gender().is_none()));
    }

    #[test]
    fn male_ratio_extremes() {
        let mut cfg = PopulationConfig::default();
        cfg.singles.male_ratio = 0.0;
        let agents = generate_population(&cfg, &mut SimRng::new(8)).unwrap();
        assert!(
            agents
                .iter()
                .filter(|a| a.kind.tag() == KindTag::Single)
                .all(|a| a.kind.gender() == Some(Gender::Female))
        );
    }

    #[test]
    fn meander_probability_zero_walks_straight() {
        let mut cfg = PopulationConfig::default();
        cfg.couples.meander.probability = 0.0;
        cfg.singles.meander.probability = 0.0;
        cfg.families.meander.probability = 0.0;
        let agents = generate_population(&cfg, &mut SimRng::new(9)).unwrap();
        assert!(agents.iter().all(|a| !a.kinematics.meanders()));
    }

    #[test]
    fn empty_population() {
        let mut cfg = PopulationConfig::default();
        cfg.couples.groups = 0;
        cfg.singles.count = 0;
        cfg.families.groups = 0;
        let agents = generate_population(&cfg, &mut SimRng::new(0)).unwrap();
        assert!(agents.is_empty());
    }

    #[test]
    fn couple_policy_random() {
        let mut cfg = PopulationConfig::default();
        cfg.couples.gender = CouplePolicy::Random;
        let (mut male, mut same_gender_pairs) = (0, 0);
        for seed in 0..50 {
            let agents = generate_population(&cfg, &mut SimRng::new(seed)).unwrap();
            let couples = &agents[..40];
            assert!(couples.iter().all(|a| a.kind.gender().is_some()));
            male += couples.iter().filter(|a| a.kind.gender() == Some(Gender::Male)).count();
            same_gender_pairs += couples.chunks(2).filter(|p| p[0].kind.gender() == p[1].kind.gender()).count();
        }
        // 2000 draws at 50/50, and about half the pairs match.
        let share = male as f64 / 2000.0;
        assert!((share - 0.5).abs() < 0.05, "male share {share}");
        assert!(same_gender_pairs > 0);
    }

    #[test]
    fn proportions_match_config_over_many_seeds() {
        const SEEDS: u64 = 200;
        let mut couple_agents = 0;
        let mut couple_meander = 0;
        let mut singles = 0;
        let mut single_meander = 0;
        let mut single_male = 0;
        let mut parents = 0;
        let mut parent_meander = 0;
        let mut children = 0;
        let mut child_male = 0;

        for seed in 0..SEEDS {
            for a in population(seed) {
                let meanders = a.kinematics.meanders() as usize;
                match a.kind {
                    AgentKind::Couple { .. } => {
                        couple_agents += 1;
                        couple_meander += meanders;
                    }
                    AgentKind::Single { gender } => {
                        singles += 1;
                        single_meander += meanders;
                        single_male += (gender == Gender::Male) as usize;
                    }
                    AgentKind::Family { role: Role::Parent, .. } => {
                        parents += 1;
                        parent_meander += meanders;
                    }
                    AgentKind::Family { role: Role::Child, gender } => {
                        children += 1;
                        child_male += (gender == Gender::Male) as usize;
                    }
                }
            }
        }

        let share = |part: usize, whole: usize| part as f64 / whole as f64;
        let families = parents / 2;
        let two_child_families = children - families;

        let checks = [
            ("couple meander", share(couple_meander, couple_agents), 0.3),
            ("single meander", share(single_meander, singles), 0.4),
            ("family meander", share(parent_meander, parents), 0.2),
            ("two children", share(two_child_families, families), 0.5),
            ("single male", share(single_male, singles), 0.65),
            ("child male", share(child_male, children), 0.5),
        ];
        for (what, observed, expected) in checks {
            assert!((observed - expected).abs() < 0.05, "{what}: {observed:.3} vs {expected}");
        }
    }

    #[test]
    fn oversized_population_fails_before_generating() {
        let mut cfg = PopulationConfig::default();
        cfg.families.groups = u32::MAX;
        let err = generate_population(&cfg, &mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn invalid_config_fails_fast() {
        let mut cfg = PopulationConfig::default();
        cfg.singles.lane_magnitude = UniformRange::new(0.7, 0.3);
        let err = generate_population(&cfg, &mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRange { what: "singles.lane_magnitude", .. }));
    }
}

#[cfg(test)]
mod stats {
    use pm_core::SimRng;

    use crate::{KindTag, PopulationConfig, PopulationStats, generate_population};

    #[test]
    fn empty_population() {
        let s = PopulationStats::from_agents(&[]);
        assert_eq!(s, PopulationStats::default());
        assert_eq!(s.share(KindTag::Single), 0.0);
        assert_eq!(s.male_ratio(), 0.0);
    }

    #[test]
    fn group_counts_from_members() {
        let agents = generate_population(&PopulationConfig::default(), &mut SimRng::new(10)).unwrap();
        let s = PopulationStats::from_agents(&agents);
        assert_eq!(s.agents, agents.len());
        assert_eq!(s.couples(), 20);
        assert_eq!(s.families(), 8);
        assert_eq!(s.single_agents, 15);
        assert_eq!(s.parents, 16);
        assert_eq!(s.family_agents, s.parents + s.children);
        assert_eq!(s.male + s.female + s.unassigned, s.agents);
        // MixedPair couples and fixed parents contribute equal M/F.
        assert_eq!(s.unassigned, 0);

        let total: f64 = [KindTag::Single, KindTag::Couple, KindTag::Family]
            .into_iter()
            .map(|k| s.share(k))
            .sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_summary() {
        let agents = generate_population(&PopulationConfig::default(), &mut SimRng::new(11)).unwrap();
        let text = PopulationStats::from_agents(&agents).to_string();
        assert!(text.contains("15 singles, 20 couples, 8 families"), "{text}");
    }
}
