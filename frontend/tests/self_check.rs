use dashcam_landing::capabilities::{Capabilities, Runtime};
use dashcam_landing::content;
use dashcam_landing::self_check::{run_checks_with, CheckInput, Report, Severity};
use dashcam_landing::theme::{Theme, BRAND, BRAND_ALPHA_80};
use dashcam_landing::{brands, gallery, run_checks};

#[test]
fn shipped_configuration_passes() {
    let report = Report::new(run_checks());
    assert_eq!(report.results.len(), brands().len() * 3 + 6);
    assert_eq!(report.results.len(), 18);
    assert!(report.passed, "{:#?}", report.lines());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn every_line_starts_with_a_marker() {
    for result in run_checks() {
        let line = result.to_string();
        let marker = line.chars().next().unwrap();
        assert_eq!(marker, result.severity.marker());
        if result.severity != Severity::Info {
            assert_eq!(marker == '✓', result.severity == Severity::Pass, "{}", line);
        }
    }
}

#[test]
fn gallery_is_a_projection_of_brands() {
    let gallery = gallery();
    assert_eq!(gallery.len(), brands().len());
    for (i, entry) in gallery.iter().enumerate() {
        assert_eq!(entry.src, brands()[i].img);
        assert_eq!(entry.alt, format!("{} dash cam product photo", brands()[i].name));
    }
}

#[test]
fn theme_constants_are_consistent() {
    assert_eq!(BRAND, "#3D9BE9");
    assert!(BRAND_ALPHA_80.contains("0.8"));
    assert_eq!(Theme::from_hex(BRAND).unwrap().primary_alpha_80, BRAND_ALPHA_80);
}

#[test]
fn dropping_alt_text_from_one_brand_fails_only_that_brand() {
    let mut registry = content::brands().to_vec();
    registry[1].alt = "";
    let gallery = content::gallery_of(&registry);
    let capabilities = Capabilities { runtime: Runtime::Client, ..Capabilities::detect() };
    let theme = Theme::builtin();

    let report = Report::new(run_checks_with(&CheckInput {
        theme: &theme,
        brands: &registry,
        gallery: &gallery,
        capabilities: &capabilities,
    }));

    let failures: Vec<String> = report.failures().map(ToString::to_string).collect();
    assert_eq!(failures, vec!["✗ brand[1] alt missing".to_string()]);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.results[0].to_string(), "ℹ client runtime");
}
