//! Unit tests for camp-supply.

use camp_core::{CandidateId, CandidateRef, UnitId, UnitRng};

use crate::{AdmissionQueue, AmountDistribution, Inventory};

fn person(unit: u32, candidate: u32) -> CandidateRef {
    CandidateRef::individual(UnitId(unit), CandidateId(candidate))
}

// ── queue ─────────────────────────────────────────────────────────────────────

mod queue {
    use super::*;

    #[test]
    fn same_tick_entries_are_ineligible() {
        let mut q = AdmissionQueue::new(10.0);
        assert!(q.enqueue(3.0, person(0, 1)));
        assert!(q.pop_eligible(3.0).is_none());

        let entry = q.pop_eligible(4.0).unwrap();
        assert_eq!(entry.candidate, person(0, 1));
        assert_eq!(entry.enqueued_at, 3.0);
    }

    #[test]
    fn fresh_front_halts_the_eligibility_scan() {
        // Chronological order means nothing behind a fresh front can be older.
        let mut q = AdmissionQueue::new(10.0);
        q.enqueue(5.0, person(0, 1));
        q.enqueue(5.0, person(0, 2));
        assert!(q.pop_eligible(5.0).is_none());
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn guard_suppresses_duplicates_within_a_tick() {
        let mut q = AdmissionQueue::new(10.0);
        assert!(q.enqueue(2.0, person(0, 7)));
        assert!(!q.enqueue(2.0, person(0, 7)));
        assert_eq!(q.len(), 1);

        // Time moved; the same candidate may re-enter.
        assert!(q.enqueue(3.0, person(0, 7)));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn eviction_needs_waiting_period_plus_one_tick() {
        let waiting = 2.0;
        let dt = 1.0;
        let mut q = AdmissionQueue::new(waiting);
        q.enqueue(0.0, person(0, 1));

        // now - 0 must exceed waiting + dt = 3, so day 3 keeps it...
        assert_eq!(q.expire(3.0, dt), 0);
        assert_eq!(q.len(), 1);

        // ...and day 4 evicts it.
        assert_eq!(q.expire(4.0, dt), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn expiry_scan_stops_at_the_first_survivor() {
        let mut q = AdmissionQueue::new(1.0);
        q.enqueue(0.0, person(0, 1));
        q.enqueue(0.0, person(0, 2));
        q.enqueue(5.0, person(0, 3));

        assert_eq!(q.expire(6.0, 1.0), 2);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_eligible(7.0).unwrap().candidate, person(0, 3));
    }

    #[test]
    fn removal_purges_every_occurrence() {
        let mut q = AdmissionQueue::new(10.0);
        q.enqueue(0.0, person(0, 1));
        q.enqueue(1.0, person(0, 2));
        q.enqueue(2.0, person(0, 1)); // re-triggered on a later tick

        assert_eq!(q.remove_candidate(person(0, 1)), 2);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_eligible(9.0).unwrap().candidate, person(0, 2));
    }

    #[test]
    fn pops_come_out_oldest_first() {
        let mut q = AdmissionQueue::new(100.0);
        q.enqueue(0.0, person(0, 3));
        q.enqueue(1.0, person(0, 1));
        q.enqueue(2.0, person(0, 2));

        assert_eq!(q.pop_eligible(5.0).unwrap().candidate, person(0, 3));
        assert_eq!(q.pop_eligible(5.0).unwrap().candidate, person(0, 1));
        assert_eq!(q.pop_eligible(5.0).unwrap().candidate, person(0, 2));
        assert!(q.pop_eligible(5.0).is_none());
    }
}

// ── inventory ─────────────────────────────────────────────────────────────────

mod inventory {
    use super::*;

    fn rng() -> UnitRng {
        UnitRng::new(42, UnitId(0))
    }

    #[test]
    fn starts_at_the_sentinel() {
        let inv = Inventory::new(AmountDistribution::Constant(100.0), 400, 10, 30.0);
        assert!(!inv.is_initialized());
        assert_eq!(inv.current_stock(), Inventory::UNINITIALIZED);
    }

    #[test]
    fn opening_stock_is_clamped_to_capacity() {
        let mut inv = Inventory::new(AmountDistribution::Constant(500.0), 400, 10, 30.0);
        inv.initialize(&mut rng(), 5);
        assert!(inv.is_initialized());
        assert_eq!(inv.current_stock(), 400);
    }

    #[test]
    fn first_shipment_waits_for_the_opening_stock() {
        // 20 pieces at 5/day covers 4 days, sooner than the 30-day interval.
        let mut inv = Inventory::new(AmountDistribution::Constant(20.0), 400, 10, 30.0);
        inv.initialize(&mut rng(), 5);
        assert_eq!(inv.days_to_next_shipment(), 4.0);

        // A large opening stock falls back to the regular interval.
        let mut inv = Inventory::new(AmountDistribution::Constant(300.0), 400, 10, 30.0);
        inv.initialize(&mut rng(), 5);
        assert_eq!(inv.days_to_next_shipment(), 30.0);
    }

    #[test]
    fn uniform_opening_stock_stays_in_bounds() {
        let dist = AmountDistribution::Uniform { min: 10.0, max: 20.0 };
        let mut r = rng();
        for _ in 0..50 {
            let mut inv = Inventory::new(dist, 400, 10, 30.0);
            inv.initialize(&mut r, 5);
            assert!((10..=21).contains(&inv.current_stock()));
        }
    }

    #[test]
    fn shipment_arrives_when_the_countdown_lapses() {
        let mut inv = Inventory::new(AmountDistribution::Constant(0.0), 50, 30, 2.0);
        inv.initialize(&mut rng(), 5);
        assert_eq!(inv.current_stock(), 0);
        assert_eq!(inv.days_to_next_shipment(), 0.0);

        inv.update(1.0); // countdown lapsed: shipment lands, countdown resets
        assert_eq!(inv.current_stock(), 30);
        assert_eq!(inv.days_to_next_shipment(), 2.0);

        inv.update(1.0);
        inv.update(1.0);
        assert_eq!(inv.current_stock(), 30);

        inv.update(1.0); // second shipment, clamped at 50
        assert_eq!(inv.current_stock(), 50);
    }

    #[test]
    fn debit_draws_down_without_touching_the_schedule() {
        let mut inv = Inventory::new(AmountDistribution::Constant(10.0), 400, 10, 30.0);
        inv.initialize(&mut rng(), 5);
        assert_eq!(inv.days_to_next_shipment(), 2.0);

        inv.debit(5);
        assert_eq!(inv.current_stock(), 5);
        assert_eq!(inv.days_to_next_shipment(), 2.0);
    }

    #[test]
    fn negative_uniform_bounds_are_rejected() {
        use camp_core::CampError;
        let bad = AmountDistribution::Uniform { min: 5.0, max: 2.0 };
        assert!(matches!(
            bad.validate("initial_amount"),
            Err(CampError::InvalidRange { .. })
        ));
        assert!(AmountDistribution::Constant(7.0).validate("initial_amount").is_ok());
    }
}
