//! Encode/decode round-trip coverage.
//!
//! Decoding the encoded form of any built constraint set must yield the
//! same sequence of (left, operator, right) tuples, with variables
//! compared by name.

use verdict_codec::{decode_str, encode};
use verdict_tests::prelude::*;

mod handcrafted {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_preserves_tuples() {
        let session = VerifySession::from_records(&[
            RequirementRecord::new("User")
                .with_condition(ComparisonClause::new("balance", ">=", "amount"))
                .with_constraint(ComparisonClause::new("amount", ">", "0")),
            RequirementRecord::new("Service")
                .with_condition(ComparisonClause::new("load", "<", "100")),
        ]);

        let decoded = decode_str(&session.to_text());
        assert_eq!(&decoded, session.constraints());
    }

    #[test]
    fn test_round_trip_with_negative_literal() {
        let session = VerifySession::from_records(&[RequirementRecord::new("System")
            .with_condition(ComparisonClause::new("delta", ">", "-5"))]);

        let decoded = decode_str(&session.to_text());
        assert_eq!(&decoded, session.constraints());
    }

    #[test]
    fn test_round_trip_with_defaulted_fields() {
        let session = VerifySession::from_records(&[RequirementRecord::new("User")
            .with_condition(ComparisonClause::default())
            .with_constraint(ComparisonClause::default())]);

        assert_eq!(session.to_text(), "(assert (x >= 0))\n(assert (y >= 0))");
        let decoded = decode_str(&session.to_text());
        assert_eq!(&decoded, session.constraints());
    }
}

mod dropped_input {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unsupported_operator_contributes_nothing() {
        let session = VerifySession::from_records(&[RequirementRecord::new("User")
            .with_condition(ComparisonClause::new("x", "!=", "5"))]);

        assert!(session.constraints().is_empty());
        assert_eq!(session.to_text(), "");
    }

    #[test]
    fn test_decoder_skips_malformed_lines() {
        let text = "(assert (balance >= amount))\n(assert (x >= ))\n(assert (amount > 0))";
        let decoded = decode_str(text);

        let rendered: Vec<String> = decoded.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["(balance >= amount)", "(amount > 0)"]);
    }

    #[test]
    fn test_literal_and_identifier_right_sides() {
        let decoded = decode_str("(assert (x >= 5))\n(assert (x >= y))");
        let constraints = decoded.as_slice();

        assert_eq!(constraints[0].right.as_literal(), Some(5));
        assert_eq!(constraints[1].right.as_var().map(|v| v.name()), Some("y"));
    }
}

mod generated {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_random_records_round_trip() {
        for seed in [1, 7, 42, 1234, 99999] {
            let mut generator =
                RecordGenerator::new(GeneratorConfig::new().with_seed(seed).with_record_count(25));
            let session = VerifySession::from_records(&generator.records());

            let decoded = decode_str(&session.to_text());
            assert_eq!(&decoded, session.constraints(), "seed {}", seed);
        }
    }

    #[test]
    fn test_encode_decode_encode_is_stable() {
        let mut generator = RecordGenerator::new(GeneratorConfig::new().with_seed(5));
        let session = VerifySession::from_records(&generator.records());

        let text = session.to_text();
        assert_eq!(encode(&decode_str(&text)), text);
    }
}

mod stored_form {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_session_restores_from_stored_file() {
        let session = VerifySession::from_records(&[
            RequirementRecord::new("User")
                .with_condition(ComparisonClause::new("balance", ">=", "amount")),
            RequirementRecord::new("User")
                .with_constraint(ComparisonClause::new("amount", ">", "0")),
        ]);

        let path = std::env::temp_dir().join("verdict_roundtrip_stored.txt");
        fs::write(&path, session.to_text()).unwrap();

        let restored = VerifySession::from_stored(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(restored.constraints(), session.constraints());
        let names: Vec<&str> = restored.variables().names().collect();
        assert_eq!(names, vec!["balance", "amount"]);
    }
}
