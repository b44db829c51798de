use pretty_assertions::assert_eq;
use tinct_theme::{
    validate_theme, validate_theme_contrast, ComplianceLevel, ThemeLoadError, ThemeNode,
    ValidationOptions, WcagLevel,
};

const PALETTE_TOML: &str = r##"
[colors.primary]
main = "#007bff"
contrast = "#ffffff"

[colors.secondary]
main = "#343a40"
contrast = "#ffffff"

[colors.text]
primary = "#212529"

[colors.surface]
primary = "#ffffff"

[colors.error]
main = "#e74c3c"
contrast = "#ffffff"
"##;

#[test]
fn toml_palette_report() {
    let theme = ThemeNode::from_toml_str(PALETTE_TOML).unwrap();
    let report = validate_theme_contrast(&theme, WcagLevel::Aa);

    let names: Vec<_> = report.checks.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Primary Button Text",
            "Secondary Button Text",
            "Primary Text on Surface",
            "Error Text"
        ]
    );

    let levels: Vec<_> = report.checks.iter().map(|c| c.result.level).collect();
    assert_eq!(
        levels,
        vec![
            ComplianceLevel::A,
            ComplianceLevel::Aaa,
            ComplianceLevel::Aaa,
            ComplianceLevel::A
        ]
    );
    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.passed, 2);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.summary.warnings, 2);
}

#[test]
fn report_agrees_with_validation() {
    let theme = ThemeNode::from_toml_str(PALETTE_TOML).unwrap();
    let report = validate_theme_contrast(&theme, WcagLevel::Aa);
    let result = validate_theme(&theme, &ValidationOptions::only_accessibility());

    assert_eq!(result.errors.len(), report.summary.failed);
    assert_eq!(result.summary.accessibility_score, 60);
}

#[test]
fn report_serializes() {
    let theme = ThemeNode::from_json_str(
        r##"{ "colors": { "text": { "primary": "#767676" }, "surface": { "primary": "#ffffff" } } }"##,
    )
    .unwrap();
    let report = validate_theme_contrast(&theme, WcagLevel::Aa);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({
            "checks": [{
                "name": "Primary Text on Surface",
                "foreground": "#767676",
                "background": "#ffffff",
                "context": "Main text content",
                "result": { "ratio": 4.54, "level": "AA", "isAccessible": true }
            }],
            "summary": { "total": 1, "passed": 1, "failed": 0, "warnings": 0 }
        })
    );
}

#[test]
fn load_errors() {
    assert!(matches!(
        ThemeNode::from_json_str("[1, 2]"),
        Err(ThemeLoadError::NotATable)
    ));
    assert!(matches!(
        ThemeNode::from_json_str("{ not json"),
        Err(ThemeLoadError::Json(_))
    ));

    let theme = ThemeNode::from_toml_str("[spacing]\nbase = [4, 8]\nunit = \"px\"").unwrap();
    assert!(theme.get("spacing").unwrap().get("base").is_none());
    assert!(theme.get("spacing").unwrap().get("unit").is_some());

    let err = ThemeNode::from_toml_str("[meta]\nupdated = 2024-01-01").unwrap_err();
    assert_eq!(err.to_string(), "unsupported datetime value at `meta.updated`");
}
