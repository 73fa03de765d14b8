//! Unit tests for camp-core.

use crate::{CandidateId, CandidateRef, SimClock, TargetGender, UnitId, UnitRng};
use crate::demographics::Gender;

fn rng(seed: u64) -> UnitRng {
    UnitRng::new(seed, UnitId(0))
}

// ── ids ───────────────────────────────────────────────────────────────────────

mod ids {
    use super::*;

    #[test]
    fn default_is_invalid_sentinel() {
        assert_eq!(UnitId::default(), UnitId::INVALID);
        assert_eq!(CandidateId::default(), CandidateId::INVALID);
    }

    #[test]
    fn candidate_ref_unit_level() {
        let r = CandidateRef::unit(UnitId(3));
        assert!(r.is_unit());
        assert!(!CandidateRef::individual(UnitId(3), CandidateId(0)).is_unit());
    }

    #[test]
    fn candidate_ref_keys_are_distinct() {
        let a = CandidateRef::individual(UnitId(1), CandidateId(2));
        let b = CandidateRef::individual(UnitId(2), CandidateId(1));
        assert_ne!(a.key(), b.key());
    }
}

// ── clock ─────────────────────────────────────────────────────────────────────

mod clock {
    use super::*;

    #[test]
    fn advances_by_dt() {
        let mut clock = SimClock::new();
        clock.advance(1.0);
        clock.advance(0.5);
        assert_eq!(clock.time, 1.5);
    }

    #[test]
    fn starting_at_offsets_time_zero() {
        let clock = SimClock::starting_at(10.0);
        assert_eq!(clock.time, 10.0);
    }
}

// ── target gender ─────────────────────────────────────────────────────────────

mod target_gender {
    use super::*;

    #[test]
    fn all_matches_both() {
        assert!(TargetGender::All.matches(Gender::Male));
        assert!(TargetGender::All.matches(Gender::Female));
    }

    #[test]
    fn explicit_gender_is_exclusive() {
        assert!(TargetGender::Male.matches(Gender::Male));
        assert!(!TargetGender::Male.matches(Gender::Female));
        assert!(TargetGender::Female.matches(Gender::Female));
        assert!(!TargetGender::Female.matches(Gender::Male));
    }
}

// ── rng ───────────────────────────────────────────────────────────────────────

mod sampling {
    use super::*;

    #[test]
    fn choose_m_of_n_size_and_bounds() {
        let mut r = rng(42);
        for &(m, n) in &[(0u32, 10u32), (1, 10), (5, 10), (10, 10), (4, 19)] {
            let picked = r.choose_m_of_n(m, n);
            assert_eq!(picked.len(), m as usize, "m={m} n={n}");
            assert!(picked.iter().all(|&i| i < n), "m={m} n={n}");
        }
    }

    #[test]
    fn choose_zero_consumes_no_draws() {
        // Twin RNGs from the same seed: sampling zero items must leave the
        // stream untouched.
        let mut a = rng(7);
        let mut b = rng(7);
        assert!(a.choose_m_of_n(0, 100).is_empty());
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn consecutive_samples_differ() {
        // Two back-to-back 4-of-19 samples on the same stream yield two
        // deterministic but different subsets — the stream moved.
        let mut r = rng(1234);
        let first = r.choose_m_of_n(4, 19);
        let second = r.choose_m_of_n(4, 19);
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 4);
        assert_ne!(first, second);

        // And the whole sequence replays bit-for-bit from the seed.
        let mut replay = rng(1234);
        assert_eq!(replay.choose_m_of_n(4, 19), first);
        assert_eq!(replay.choose_m_of_n(4, 19), second);
    }

    #[test]
    fn smart_draw_degenerate_probabilities_consume_nothing() {
        let mut a = rng(5);
        let mut b = rng(5);
        assert!(a.smart_draw(1.0));
        assert!(a.smart_draw(2.0));
        assert!(!a.smart_draw(0.0));
        assert!(!a.smart_draw(-1.0));
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn smart_draw_mid_probability_consumes_one() {
        let mut a = rng(5);
        let mut b = rng(5);
        a.smart_draw(0.5);
        b.uniform();
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn units_get_independent_streams() {
        let mut a = UnitRng::new(99, UnitId(0));
        let mut b = UnitRng::new(99, UnitId(1));
        let da: Vec<u32> = (0..8).map(|_| a.uniform_to(1000)).collect();
        let db: Vec<u32> = (0..8).map(|_| b.uniform_to(1000)).collect();
        assert_ne!(da, db);
    }
}
