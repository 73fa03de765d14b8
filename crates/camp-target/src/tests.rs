//! Unit tests for camp-target.

use camp_core::{CampError, Gender, TargetGender, UnitId, UnitRng};
use camp_units::{CandidateAttributes, DiseaseState, PropertyMap};

use crate::{
    AgeRange, AgeRangeList, DemographicRestrictions, PropertyRestrictions, Qualification,
    TargetingPredicate,
};

fn rng() -> UnitRng {
    UnitRng::new(0, UnitId(0))
}

fn adult(age: f32, gender: Gender) -> CandidateAttributes {
    CandidateAttributes::new(age, gender)
}

// ── age ranges ────────────────────────────────────────────────────────────────

mod age_ranges {
    use super::*;

    #[test]
    fn half_open_bounds() {
        let range = AgeRange::new(15.0, 30.0).unwrap();
        assert!(range.contains(15.0));
        assert!(range.contains(29.99));
        assert!(!range.contains(30.0));
        assert!(!range.contains(14.99));
    }

    #[test]
    fn min_must_be_below_max() {
        assert!(matches!(
            AgeRange::new(30.0, 30.0),
            Err(CampError::InvalidRange { .. })
        ));
        assert!(matches!(
            AgeRange::new(40.0, 30.0),
            Err(CampError::InvalidRange { .. })
        ));
    }

    #[test]
    fn list_sorts_on_insert() {
        let mut list = AgeRangeList::new();
        list.push(AgeRange::new(30.0, 40.0).unwrap());
        list.push(AgeRange::new(10.0, 20.0).unwrap());
        let mins: Vec<f32> = list.ranges().iter().map(|r| r.min_years()).collect();
        assert_eq!(mins, vec![10.0, 30.0]);
    }

    #[test]
    fn overlapping_ranges_fail_validation() {
        let list: AgeRangeList = [
            AgeRange::new(10.0, 25.0).unwrap(),
            AgeRange::new(20.0, 30.0).unwrap(),
        ]
        .into_iter()
        .collect();
        match list.validate("age_ranges") {
            Err(CampError::OverlappingAgeRanges { prev_max, next_min, .. }) => {
                assert_eq!(prev_max, 25.0);
                assert_eq!(next_min, 20.0);
            }
            other => panic!("expected overlap error, got {other:?}"),
        }
    }

    #[test]
    fn touching_ranges_are_valid() {
        let list: AgeRangeList = [
            AgeRange::new(10.0, 20.0).unwrap(),
            AgeRange::new(20.0, 30.0).unwrap(),
        ]
        .into_iter()
        .collect();
        assert!(list.validate("age_ranges").is_ok());
    }

    #[test]
    fn empty_list_fails_validation() {
        assert!(matches!(
            AgeRangeList::new().validate("age_ranges"),
            Err(CampError::EmptyList { .. })
        ));
    }
}

// ── property restrictions ─────────────────────────────────────────────────────

mod property_restrictions {
    use super::*;

    #[test]
    fn empty_restriction_qualifies_everything() {
        let restrictions = PropertyRestrictions::new();
        assert!(restrictions.qualifies(&PropertyMap::new()));
    }

    #[test]
    fn group_pairs_are_anded() {
        let mut restrictions = PropertyRestrictions::new();
        restrictions.push_group([("Risk", "High"), ("Access", "Easy")]);

        let both: PropertyMap = [("Risk", "High"), ("Access", "Easy")].into_iter().collect();
        let one: PropertyMap = [("Risk", "High")].into_iter().collect();
        assert!(restrictions.qualifies(&both));
        assert!(!restrictions.qualifies(&one));
    }

    #[test]
    fn groups_are_ored() {
        let mut restrictions = PropertyRestrictions::new();
        restrictions.push_group([("Risk", "High")]);
        restrictions.push_group([("Risk", "Medium")]);

        let medium: PropertyMap = [("Risk", "Medium")].into_iter().collect();
        let low: PropertyMap = [("Risk", "Low")].into_iter().collect();
        assert!(restrictions.qualifies(&medium));
        assert!(!restrictions.qualifies(&low));
    }
}

// ── demographic restrictions ──────────────────────────────────────────────────

mod demographic_restrictions {
    use super::*;

    #[test]
    fn default_is_default() {
        assert!(DemographicRestrictions::default().is_default());
        let restricted =
            DemographicRestrictions::new(1.0, TargetGender::Female, 0.0, 125.0, false).unwrap();
        assert!(!restricted.is_default());
    }

    #[test]
    fn coverage_out_of_bounds_is_rejected() {
        assert!(matches!(
            DemographicRestrictions::new(1.5, TargetGender::All, 0.0, 125.0, false),
            Err(CampError::InvalidCoverage { .. })
        ));
    }

    #[test]
    fn age_bounds_must_be_ordered() {
        assert!(matches!(
            DemographicRestrictions::new(1.0, TargetGender::All, 50.0, 20.0, false),
            Err(CampError::InvalidRange { .. })
        ));
    }

    #[test]
    fn age_and_gender_gates() {
        let r = DemographicRestrictions::new(1.0, TargetGender::Female, 18.0, 45.0, false).unwrap();
        let mut rng = rng();
        assert!(r.is_qualified(&adult(30.0, Gender::Female), &mut rng));
        assert!(!r.is_qualified(&adult(30.0, Gender::Male), &mut rng));
        assert!(!r.is_qualified(&adult(10.0, Gender::Female), &mut rng));
        assert!(!r.is_qualified(&adult(50.0, Gender::Female), &mut rng));
    }

    #[test]
    fn residents_only_excludes_travellers() {
        let r = DemographicRestrictions::new(1.0, TargetGender::All, 0.0, 125.0, true).unwrap();
        let mut rng = rng();
        let mut attrs = adult(30.0, Gender::Male);
        assert!(r.is_qualified(&attrs, &mut rng));
        attrs.resident = false;
        assert!(!r.is_qualified(&attrs, &mut rng));
    }

    #[test]
    fn full_coverage_consumes_no_draw() {
        let r = DemographicRestrictions::new(1.0, TargetGender::All, 0.0, 125.0, false).unwrap();
        let mut a = rng();
        let mut b = rng();
        assert!(r.is_qualified(&adult(30.0, Gender::Male), &mut a));
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn zero_coverage_rejects_without_a_draw() {
        let r = DemographicRestrictions::new(0.0, TargetGender::All, 0.0, 125.0, false).unwrap();
        let mut a = rng();
        let mut b = rng();
        assert!(!r.is_qualified(&adult(30.0, Gender::Male), &mut a));
        assert_eq!(a.uniform(), b.uniform());
    }
}

// ── predicate pipeline ────────────────────────────────────────────────────────

mod predicate {
    use super::*;

    #[test]
    fn qualification_tokens_parse_or_fail_fast() {
        let q = Qualification::from_tokens(&["Infected", "Symptomatic"]).unwrap();
        let mut attrs = adult(30.0, Gender::Male);
        assert!(!q.qualifies(&attrs));
        attrs.disease_state = DiseaseState::Infected;
        assert!(q.qualifies(&attrs));

        assert!(matches!(
            Qualification::from_tokens(&["Cursed"]),
            Err(CampError::UnknownDiseaseState { .. })
        ));
    }

    #[test]
    fn empty_qualification_accepts_everyone() {
        assert!(Qualification::any().qualifies(&adult(30.0, Gender::Male)));
    }

    #[test]
    fn stages_short_circuit_in_order() {
        // Node-property stage fails → demographic stage (and its coverage
        // draw) must never run, leaving the RNG stream untouched.
        let mut node_props = PropertyRestrictions::new();
        node_props.push_group([("Access", "Easy")]);
        let predicate = TargetingPredicate::new(
            node_props,
            DemographicRestrictions::new(0.5, TargetGender::All, 0.0, 125.0, false).unwrap(),
            Qualification::any(),
        );

        let hard: PropertyMap = [("Access", "Hard")].into_iter().collect();
        let mut a = rng();
        let mut b = rng();
        assert!(!predicate.evaluate(&hard, &adult(30.0, Gender::Male), &mut a));
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn full_pipeline_pass() {
        let mut node_props = PropertyRestrictions::new();
        node_props.push_group([("Access", "Easy")]);
        let predicate = TargetingPredicate::new(
            node_props,
            DemographicRestrictions::new(1.0, TargetGender::Female, 18.0, 45.0, false).unwrap(),
            Qualification::from_tokens(&["Infected"]).unwrap(),
        );

        let easy: PropertyMap = [("Access", "Easy")].into_iter().collect();
        let mut attrs = adult(30.0, Gender::Female);
        attrs.disease_state = DiseaseState::Infected;
        assert!(predicate.evaluate(&easy, &attrs, &mut rng()));

        attrs.disease_state = DiseaseState::Susceptible;
        assert!(!predicate.evaluate(&easy, &attrs, &mut rng()));
    }

    #[test]
    fn unit_level_evaluation_uses_only_node_properties() {
        let mut node_props = PropertyRestrictions::new();
        node_props.push_group([("Access", "Easy")]);
        let predicate = TargetingPredicate::new(
            node_props,
            // Restrictions that would reject everyone are irrelevant at unit level.
            DemographicRestrictions::new(0.0, TargetGender::All, 0.0, 125.0, false).unwrap(),
            Qualification::any(),
        );

        let easy: PropertyMap = [("Access", "Easy")].into_iter().collect();
        assert!(predicate.evaluate_unit(&easy));
        assert!(!predicate.evaluate_unit(&PropertyMap::new()));
    }
}
