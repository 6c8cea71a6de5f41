//! Tests for the shared newtypes in mf2-common.

use std::collections::HashSet;
use mf2_common::types::*;

mod variable_name_tests {
    use super::*;

    #[test]
    fn test_variable_name_strips_sigil() {
        assert_eq!(VariableName::new("$count"), VariableName::new("count"));
        assert_eq!(VariableName::new("$count").as_str(), "count");
    }

    #[test]
    fn test_variable_name_display_adds_sigil() {
        assert_eq!(format!("{}", VariableName::new("count")), "$count");
    }

    #[test]
    fn test_variable_name_hash_and_eq() {
        let mut names = HashSet::new();
        names.insert(VariableName::from("count"));
        names.insert(VariableName::from("$count"));
        names.insert(VariableName::from("total"));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_variable_name_serialization() {
        let name = VariableName::new("count");
        let serialized = serde_json::to_string(&name).unwrap();
        assert_eq!(serialized, "\"count\"");

        let deserialized: VariableName = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, name);
    }
}

mod verbosity_tests {
    use super::*;

    #[test]
    fn test_verbosity_default_is_normal() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_parse() {
        assert_eq!("quiet".parse::<Verbosity>(), Ok(Verbosity::Quiet));
        assert_eq!(" Verbose ".parse::<Verbosity>(), Ok(Verbosity::Verbose));
        assert!("loud".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_verbosity_predicates() {
        assert!(Verbosity::Quiet.is_quiet());
        assert!(!Verbosity::Normal.is_quiet());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(!Verbosity::Normal.is_verbose());
    }

    #[test]
    fn test_verbosity_serialization() {
        let serialized = serde_json::to_string(&Verbosity::Verbose).unwrap();
        assert_eq!(serialized, "\"verbose\"");
        assert_eq!(Verbosity::Quiet.to_string(), "quiet");
    }
}
