//! Unit tests for npc-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_and_ordering() {
        assert_eq!(AgentId(42).index(), 42);
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }

    #[test]
    fn from_u32() {
        assert_eq!(AgentId::from(3), AgentId(3));
    }
}

#[cfg(test)]
mod point {
    use crate::Point3;

    #[test]
    fn arithmetic() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 8.0);
        assert_eq!(a + b, Point3::new(5.0, 8.0, 11.0));
        assert_eq!(b - a, Point3::new(3.0, 4.0, 5.0));
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, -4.0, 2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_interior() {
        let a = Point3::ORIGIN;
        let b = Point3::new(10.0, 0.0, 0.0);
        let p = a.lerp(b, 0.33);
        assert!((p.x - 3.3).abs() < 1e-5, "got {}", p.x);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn distance() {
        let a = Point3::new(0.0, 3.0, 0.0);
        let b = Point3::new(4.0, 0.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn finiteness() {
        assert!(Point3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Point3::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}

#[cfg(test)]
mod config {
    use crate::{PathTier, SchedConfig};

    #[test]
    fn defaults() {
        let cfg = SchedConfig::default();
        assert_eq!(cfg.tier, PathTier::Basic);
        assert_eq!(cfg.decision_rate_secs, 0.5);
        assert_eq!(cfg.max_agents_per_update, 50);
        assert!(!cfg.parallel);
        assert!(!cfg.fair_rotation);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_cap() {
        let cfg = SchedConfig { max_agents_per_update: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_cadence() {
        let zero = SchedConfig { decision_rate_secs: 0.0, ..Default::default() };
        let nan  = SchedConfig { decision_rate_secs: f32::NAN, ..Default::default() };
        assert!(zero.validate().is_err());
        assert!(nan.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, DecisionRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = DecisionRng::new(42, AgentId(7));
        let mut b = DecisionRng::new(42, AgentId(7));
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn agents_get_independent_streams() {
        let mut a = DecisionRng::new(42, AgentId(0));
        let mut b = DecisionRng::new(42, AgentId(1));
        // Not a statistical test — just confirm the streams diverge.
        let xs: Vec<u64> = (0..4).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = DecisionRng::new(0, AgentId(0));
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = DecisionRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
