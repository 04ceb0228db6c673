//! Property-based tests for log_pipeline using proptest

use log_pipeline::formatters::TextFormatter;
use log_pipeline::prelude::*;
use log_pipeline::writers::syslog::priority;
use log_pipeline::Formatter;
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    (0u8..8).prop_map(|n| Severity::try_from(n).unwrap())
}

fn any_facility() -> impl Strategy<Value = Facility> {
    (0usize..24).prop_map(|n| Facility::ALL[n])
}

// ============================================================================
// Severity
// ============================================================================

proptest! {
    #[test]
    fn test_severity_name_roundtrip(level in any_severity()) {
        let parsed: Severity = level.name().parse().unwrap();
        prop_assert_eq!(parsed, level);
        prop_assert_eq!(Severity::validate(i64::from(level.number())).unwrap(), level);
    }

    #[test]
    fn test_out_of_range_rejected(value in prop_oneof![i64::MIN..0i64, 8i64..i64::MAX]) {
        prop_assert!(Severity::validate(value).is_err());
        prop_assert!(Severity::try_from(value).is_err());
    }

    /// Delivery happens exactly when the event is at least as severe as the threshold
    #[test]
    fn test_filter_direction(threshold in any_severity(), event in any_severity()) {
        prop_assert_eq!(threshold.allows(event), event.number() <= threshold.number());
        prop_assert_eq!(threshold.allows(event), event <= threshold);
    }
}

// ============================================================================
// Syslog
// ============================================================================

proptest! {
    #[test]
    fn test_priority(facility in any_facility(), severity in any_severity()) {
        let pri = priority(facility, severity);
        prop_assert_eq!(pri / 8, facility.number());
        prop_assert_eq!(pri % 8, severity.number());
        prop_assert!(pri <= 191);
    }

    #[test]
    fn test_facility_name_roundtrip(facility in any_facility()) {
        prop_assert_eq!(facility.name().parse::<Facility>().unwrap(), facility);
    }
}

// ============================================================================
// Formatting
// ============================================================================

proptest! {
    /// Whatever the message contains, a text line stays a single 3-field line
    #[test]
    fn test_text_line_shape(message in ".*", level in any_severity()) {
        let line = TextFormatter::new().format(level, &Entry::new("E", message));
        let text = String::from_utf8(line).unwrap();
        prop_assert!(text.ends_with('\n'));
        let body = &text[..text.len() - 1];
        prop_assert!(!body.contains('\n'));
        prop_assert_eq!(body.split('\t').count(), 3);
    }

    #[test]
    fn test_ljson_line_parses(message in ".*", key in "[a-z]{1,8}", value in any::<i64>()) {
        let formatter = Format::Ljson.formatter(None);
        let entry = Entry::new("E_PROP", message.clone()).with_label(key.clone(), value);
        let line = formatter.format(Severity::Info, &entry);
        prop_assert_eq!(line.iter().filter(|&&b| b == b'\n').count(), 1);

        let parsed: serde_json::Value = serde_json::from_slice(&line).unwrap();
        prop_assert_eq!(&parsed["details"][key.as_str()], &serde_json::json!(value));
        if message.is_empty() {
            prop_assert!(parsed.get("message").is_none());
        } else {
            prop_assert_eq!(parsed["message"].as_str().unwrap(), message.as_str());
        }
    }

    /// Labels added to a child never appear on the parent
    #[test]
    fn test_with_label_non_destructive(names in proptest::collection::vec("[a-z]{1,6}", 1..6)) {
        let context = TestContext::new("prop").without_colors();
        let parent = Logger::from_config(Config::new().with_test_context(context)).unwrap();
        let mut child = parent.clone();
        for name in &names {
            child = child.with_label(name.clone(), true);
        }
        prop_assert!(parent.labels().is_empty());
        for name in &names {
            prop_assert!(child.labels().contains_key(name));
        }
    }
}
