use pretty_assertions::assert_eq;
use tinct_theme::{
    calculate_contrast_ratio, validate_theme, IssueCategory, IssueKind, Severity, ThemeNode,
    ValidationOptions, WcagLevel,
};

const COMPLETE_THEME: &str = include_str!("fixtures/complete_theme.json");

fn complete_theme() -> ThemeNode {
    ThemeNode::from_json_str(COMPLETE_THEME).unwrap()
}

fn node<'a>(theme: &'a mut ThemeNode, dotted: &str) -> &'a mut ThemeNode {
    dotted
        .split('.')
        .try_fold(theme, |node, key| node.get_mut(key))
        .unwrap_or_else(|| panic!("fixture has no `{dotted}`"))
}

#[test]
fn complete_theme_is_valid_with_full_scores() {
    let result = validate_theme(&complete_theme(), &ValidationOptions::default());
    assert!(result.is_valid);
    assert_eq!(result.errors, vec![]);
    assert_eq!(result.warnings, vec![]);
    assert_eq!(
        (
            result.summary.accessibility_score,
            result.summary.completeness_score,
            result.summary.consistency_score
        ),
        (100, 100, 100)
    );
}

#[test]
fn low_contrast_primary_costs_twenty_points() {
    assert!((calculate_contrast_ratio("#ffffff", "#007bff") - 3.98).abs() < 0.02);

    let mut theme = complete_theme();
    node(&mut theme, "colors.primary").insert("main", "#007bff");
    node(&mut theme, "colors.primary").insert("contrast", "#ffffff");

    let result = validate_theme(&theme, &ValidationOptions::default());
    let failures: Vec<_> = result
        .errors
        .iter()
        .filter(|i| i.kind == IssueKind::ContrastFailure)
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path.to_dotted_string(), "colors.primary");
    assert_eq!(result.summary.accessibility_score, 80);
    assert!(!result.is_valid);
}

#[test]
fn missing_secondary_is_a_completeness_error() {
    let mut theme = complete_theme();
    node(&mut theme, "colors").remove("secondary");

    let result = validate_theme(&theme, &ValidationOptions::default());
    let issue = result
        .errors
        .iter()
        .find(|i| i.path.to_dotted_string() == "colors.secondary")
        .expect("missing secondary reported");
    assert_eq!(issue.kind, IssueKind::MissingProperty);
    assert_eq!(issue.category, IssueCategory::Completeness);
    assert!(result.summary.completeness_score <= 90);
}

#[test]
fn mixed_spacing_scale_trips_the_twenty_percent_threshold() {
    let mut theme = complete_theme();
    let base = node(&mut theme, "spacing.base");
    for (step, value) in [("xs", 4), ("sm", 8), ("md", 16), ("lg", 24), ("xl", 32)] {
        base.insert(step, value);
    }

    let result = validate_theme(&theme, &ValidationOptions::default());
    assert!(result.is_valid, "consistency findings are warnings");
    assert_eq!(result.warnings.len(), 1);
    let warning = &result.warnings[0];
    assert_eq!(warning.path.to_dotted_string(), "spacing.base");
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.category, IssueCategory::Consistency);
    assert_eq!(result.summary.consistency_score, 92);
}

#[test]
fn missing_neutral_shade_costs_consistency() {
    let mut theme = complete_theme();
    node(&mut theme, "colors.neutral").remove("500");

    let result = validate_theme(&theme, &ValidationOptions::default());
    assert!(result.is_valid);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].path.to_dotted_string(), "colors.neutral.500");
    assert_eq!(result.warnings[0].category, IssueCategory::Consistency);
    assert_eq!(result.summary.completeness_score, 100);
    assert_eq!(result.summary.consistency_score, 92);
}

#[test]
fn theme_with_animation_keyframes_still_validates() {
    let mut json: serde_json::Value = serde_json::from_str(COMPLETE_THEME).unwrap();
    json["animations"] = serde_json::json!({ "fade": { "opacity": [0, 1], "duration": 200 } });

    let theme = ThemeNode::from_json_str(&json.to_string()).unwrap();
    assert!(theme.get_dotted("animations.fade.opacity").is_none());
    assert!(theme.get_dotted("animations.fade.duration").is_some());

    let result = validate_theme(&theme, &ValidationOptions::default());
    assert!(result.is_valid);
    assert_eq!(result.warnings, vec![]);
}

#[test]
fn every_issue_path_resolves_under_the_input() {
    let mut theme = complete_theme();
    node(&mut theme, "colors").remove("secondary");
    node(&mut theme, "componentThemes.card").remove("shadow");
    node(&mut theme, "colors.text").insert("primary", "not-a-color");
    node(&mut theme, "colors.teacher").remove("primary");

    let result = validate_theme(&theme, &ValidationOptions::default());
    assert!(result.issues().count() >= 4);
    for issue in result.issues() {
        let segments = issue.path.segments();
        let parent = &segments[..segments.len() - 1];
        let resolved = parent
            .iter()
            .try_fold(&theme, |node, key| node.get(key));
        assert!(resolved.is_some(), "{issue}");
    }
}

#[test]
fn disabling_a_check_removes_its_issues_and_score() {
    let mut theme = complete_theme();
    node(&mut theme, "colors").remove("secondary");
    node(&mut theme, "colors.primary").insert("main", "#007bff");

    let full = validate_theme(&theme, &ValidationOptions::default());
    assert_eq!(full.summary.total_errors, 2);

    let options = ValidationOptions {
        check_completeness: false,
        ..ValidationOptions::default()
    };
    let result = validate_theme(&theme, &options);
    assert_eq!(result.summary.total_errors, 1);
    assert_eq!(result.summary.completeness_score, 100);
    assert!(result
        .issues()
        .all(|i| i.category != IssueCategory::Completeness));

    let result = validate_theme(&theme, &ValidationOptions::only_completeness());
    assert_eq!(result.summary.accessibility_score, 100);
    assert_eq!(result.summary.completeness_score, 90);
}

#[test]
fn aaa_level_applies_to_every_pair() {
    let mut theme = complete_theme();
    // 5.6:1 against white
    node(&mut theme, "colors.error").insert("main", "#c82333");

    let aa = validate_theme(&theme, &ValidationOptions::default());
    assert!(aa.is_valid);

    let aaa = validate_theme(
        &theme,
        &ValidationOptions::default().with_contrast_level(WcagLevel::Aaa),
    );
    assert_eq!(aaa.errors.len(), 1);
    assert_eq!(aaa.errors[0].path.to_dotted_string(), "colors.error");
}

#[test]
fn interaction_warnings_count_against_accessibility() {
    let mut theme = complete_theme();
    node(&mut theme, "accessibility").insert("minTouchTarget", 40);
    node(&mut theme, "accessibility").remove("focusRing");

    let options = ValidationOptions {
        check_interaction: true,
        ..ValidationOptions::default()
    };
    let result = validate_theme(&theme, &options);
    assert!(result.is_valid);
    let paths: Vec<_> = result
        .warnings
        .iter()
        .map(|i| i.path.to_dotted_string())
        .collect();
    assert_eq!(
        paths,
        vec!["accessibility.minTouchTarget", "accessibility.focusRing"]
    );
    assert_eq!(result.summary.accessibility_score, 90);
}

#[test]
fn result_serializes_with_wire_names() {
    let mut theme = complete_theme();
    node(&mut theme, "colors").remove("secondary");

    let result = validate_theme(&theme, &ValidationOptions::only_completeness());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "isValid": false,
            "errors": [{
                "type": "missing_property",
                "category": "completeness",
                "path": "colors.secondary",
                "message": "Missing secondary color object",
                "severity": "error"
            }],
            "warnings": [],
            "summary": {
                "totalErrors": 1,
                "totalWarnings": 0,
                "accessibilityScore": 100,
                "completenessScore": 90,
                "consistencyScore": 100
            }
        })
    );
}
