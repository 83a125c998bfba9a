//! Session lifecycle and config integration tests.

use nutzwert::{Config, NutzwertError, Session};

// =============================================================================
// Session lifecycle
// =============================================================================

mod lifecycle_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_analysis_round() {
        let mut session = Session::new(Config::default());

        session.add_criterion("Cost").unwrap();
        session.add_criterion("Quality").unwrap();
        session.set_weight(0, 5.0).unwrap();
        session.set_weight(1, 5.0).unwrap();

        session.set_variant_count(2).unwrap();
        session.rename_variant(0, "Make").unwrap();
        session.rename_variant(1, "Buy").unwrap();
        session.set_rating(0, "Cost", 8.0).unwrap();
        session.set_rating(0, "Quality", 6.0).unwrap();
        session.set_rating(1, "Cost", 3.0).unwrap();
        session.set_rating(1, "Quality", 9.0).unwrap();

        let results = session.run();
        assert_eq!(results[0].variant_name, "Make");
        assert!((results[0].total_utility - 7.0).abs() < 1e-9);
        assert_eq!(results[1].variant_name, "Buy");
        assert!((results[1].total_utility - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_rerun_after_weight_change_is_fresh() {
        let mut session = Session::new(Config::default());
        session.add_criterion("Cost").unwrap();
        session.add_criterion("Quality").unwrap();
        session.set_weight(0, 10.0).unwrap();
        session.set_weight(1, 0.0).unwrap();
        session.set_rating(0, "Cost", 2.0).unwrap();
        session.set_rating(0, "Quality", 9.0).unwrap();

        let first = session.run();
        assert!((first[0].total_utility - 2.0).abs() < 1e-9);

        // Flip the weights; nothing from the first run may leak through.
        session.set_weight(0, 0.0).unwrap();
        session.set_weight(1, 10.0).unwrap();
        let second = session.run();
        assert!((second[0].total_utility - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrated_criterion_defaults_to_midpoint() {
        let mut session = Session::new(Config::default());
        session.add_criterion("Cost").unwrap();
        session.set_weight(0, 10.0).unwrap();
        // No rating set for the only variant.
        let results = session.run();
        assert!((results[0].total_utility - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_variant_growth_uses_default_names() {
        let mut session = Session::new(Config::default());
        session.set_variant_count(3).unwrap();
        assert_eq!(session.variants()[1].name, "Variant 2");
        assert_eq!(session.variants()[2].name, "Variant 3");
    }

    #[test]
    fn test_removing_multiple_criteria_by_index() {
        let mut session = Session::new(Config::default());
        for name in ["Cost", "Capacity", "Quality", "Reliability"] {
            session.add_criterion(name).unwrap();
        }
        // Unsorted indices must still remove the right rows.
        session.remove_criteria(&[3, 0]).unwrap();
        let names: Vec<&str> = session.criteria().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Capacity", "Quality"]);
    }

    #[test]
    fn test_out_of_range_index_errors() {
        let mut session = Session::new(Config::default());
        assert!(matches!(
            session.set_weight(0, 1.0),
            Err(NutzwertError::IndexOutOfRange(0))
        ));
        assert!(matches!(
            session.remove_criteria(&[2]),
            Err(NutzwertError::IndexOutOfRange(2))
        ));
    }
}

// =============================================================================
// Config file round-trip
// =============================================================================

mod config_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".nutzwert.json");

        let mut config = Config::default();
        config.max_variants = 3;
        config.predefined_criteria.push("Lead time".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.max_variants, 3);
        assert_eq!(loaded.predefined_criteria.len(), 5);
        assert_eq!(loaded.weight_max, 10.0);
    }

    #[test]
    fn test_session_honors_config_limits() {
        let config = Config {
            max_variants: 2,
            rating_max: 6.0,
            ..Config::default()
        };
        let mut session = Session::new(config);
        assert!(matches!(
            session.set_variant_count(3),
            Err(NutzwertError::VariantLimit { max: 2 })
        ));

        session.add_criterion("Cost").unwrap();
        assert!(matches!(
            session.set_rating(0, "Cost", 7.0),
            Err(NutzwertError::RatingOutOfRange { .. })
        ));
        assert!(session.set_rating(0, "Cost", 6.0).is_ok());
    }
}
