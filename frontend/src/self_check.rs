//! Configuration self-check.
//!
//! Every check runs on every call and produces exactly one line; a failing
//! check never stops the ones after it. Failures are data, not errors.

use std::fmt;

use serde::Serialize;

use crate::capabilities::{Capabilities, Runtime};
use crate::content::{self, BrandEntry, GalleryEntry};
use crate::theme::Theme;

pub const EXPECTED_PRIMARY: &str = "#3D9BE9";
pub const ALPHA_80_FRAGMENT: &str = "0.8";
pub const SECURE_SCHEME: &str = "https://";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Context only; never fails a build.
    Info,
    Pass,
    Fail,
}

impl Severity {
    pub fn marker(self) -> char {
        match self {
            Severity::Info => 'ℹ',
            Severity::Pass => '✓',
            Severity::Fail => '✗',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
}

impl CheckResult {
    fn info(message: impl Into<String>) -> Self {
        CheckResult { severity: Severity::Info, message: message.into() }
    }

    fn pass(message: impl Into<String>) -> Self {
        CheckResult { severity: Severity::Pass, message: message.into() }
    }

    fn fail(message: impl Into<String>) -> Self {
        CheckResult { severity: Severity::Fail, message: message.into() }
    }

    fn verdict(ok: bool, pass: impl Into<String>, fail: impl FnOnce() -> String) -> Self {
        if ok {
            CheckResult::pass(pass)
        } else {
            CheckResult::fail(fail())
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Fail
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.message)
    }
}

/// Everything the checks look at.
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    pub theme: &'a Theme,
    pub brands: &'a [BrandEntry],
    pub gallery: &'a [GalleryEntry],
    pub capabilities: &'a Capabilities,
}

/// Checks the built-in configuration against freshly detected capabilities.
pub fn run_checks() -> Vec<CheckResult> {
    let theme = Theme::builtin();
    let gallery = content::gallery();
    let capabilities = Capabilities::detect();
    run_checks_with(&CheckInput {
        theme: &theme,
        brands: content::brands(),
        gallery: &gallery,
        capabilities: &capabilities,
    })
}

pub fn run_checks_with(input: &CheckInput<'_>) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(6 + input.brands.len() * 3);

    results.push(match input.capabilities.runtime {
        Runtime::Client => CheckResult::info("client runtime"),
        Runtime::Server => CheckResult::info("server render"),
    });

    results.push(CheckResult::verdict(
        input.capabilities.motion.is_some(),
        "motion library available",
        || "motion library is undefined".to_string(),
    ));

    let missing = input.capabilities.icons.missing();
    results.push(CheckResult::verdict(missing.is_empty(), "icons loaded", || {
        let names: Vec<String> = missing.iter().map(|k| k.to_string()).collect();
        format!("some icons undefined: {}", names.join(", "))
    }));

    let primary = &input.theme.primary;
    results.push(CheckResult::verdict(
        primary == EXPECTED_PRIMARY,
        format!("brand color set to {}", EXPECTED_PRIMARY),
        || format!("brand color incorrect: {}", primary),
    ));

    results.push(CheckResult::verdict(
        input.theme.primary_alpha_80.contains(ALPHA_80_FRAGMENT),
        "brand alpha 80 defined",
        || "brand alpha not defined".to_string(),
    ));

    for (i, b) in input.brands.iter().enumerate() {
        results.push(CheckResult::verdict(
            b.href.starts_with(SECURE_SCHEME),
            format!("brand[{}] link ok", i),
            || format!("brand[{}] link not https: {}", i, b.href),
        ));
        results.push(CheckResult::verdict(
            !b.img.is_empty(),
            format!("brand[{}] image ok", i),
            || format!("brand[{}] image missing", i),
        ));
        results.push(CheckResult::verdict(
            !b.alt.is_empty(),
            format!("brand[{}] alt ok", i),
            || format!("brand[{}] alt missing", i),
        ));
    }

    results.push(CheckResult::verdict(
        input.gallery.len() == input.brands.len(),
        "gallery length matches brands",
        || {
            format!(
                "gallery length mismatch: {} images for {} brands",
                input.gallery.len(),
                input.brands.len()
            )
        },
    ));

    results
}

/// Aggregated check output with the pass/fail verdict consumers act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub passed: bool,
    pub results: Vec<CheckResult>,
}

impl Report {
    pub fn new(results: Vec<CheckResult>) -> Self {
        let passed = !results.iter().any(CheckResult::is_failure);
        Report { passed, results }
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(ToString::to_string).collect()
    }

    /// 0 when nothing failed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{IconKind, IconTable};
    use crate::motion::Motion;

    fn full_capabilities() -> Capabilities {
        Capabilities {
            runtime: Runtime::Server,
            motion: Motion::registered(),
            icons: IconTable::registered(),
        }
    }

    fn check(theme: &Theme, brands: &[BrandEntry], caps: &Capabilities) -> Vec<CheckResult> {
        let gallery = content::gallery_of(brands);
        run_checks_with(&CheckInput { theme, brands, gallery: &gallery, capabilities: caps })
    }

    fn failures(results: &[CheckResult]) -> Vec<&CheckResult> {
        results.iter().filter(|r| r.is_failure()).collect()
    }

    #[test]
    fn default_configuration_yields_eighteen_clean_lines() {
        let results = check(&Theme::builtin(), content::brands(), &full_capabilities());
        assert_eq!(results.len(), 18);
        assert!(failures(&results).is_empty(), "{:?}", results);
        assert_eq!(results[0].to_string(), "ℹ server render");
        assert_eq!(results[3].to_string(), "✓ brand color set to #3D9BE9");
        assert_eq!(results[17].to_string(), "✓ gallery length matches brands");
    }

    #[test]
    fn client_runtime_is_informational() {
        let caps = Capabilities { runtime: Runtime::Client, ..full_capabilities() };
        let results = check(&Theme::builtin(), content::brands(), &caps);
        assert_eq!(results[0], CheckResult::info("client runtime"));
        assert!(failures(&results).is_empty());
    }

    #[test]
    fn run_checks_is_idempotent() {
        assert_eq!(run_checks(), run_checks());
    }

    #[test]
    fn another_primary_flips_only_the_color_line() {
        let theme = Theme::from_hex("#FF0000").unwrap();
        let results = check(&theme, content::brands(), &full_capabilities());
        let failed = failures(&results);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].to_string(), "✗ brand color incorrect: #FF0000");
    }

    #[test]
    fn alpha_without_the_opacity_fragment_fails() {
        let theme = Theme::builtin().with_primary_alpha_80("rgba(61, 155, 233, 1)");
        let results = check(&theme, content::brands(), &full_capabilities());
        assert_eq!(results[4], CheckResult::fail("brand alpha not defined"));
        assert_eq!(failures(&results).len(), 1);
    }

    #[test]
    fn missing_alt_fails_exactly_one_line_naming_the_index() {
        let mut brands = content::brands().to_vec();
        brands[2].alt = "";
        let results = check(&Theme::builtin(), &brands, &full_capabilities());
        let failed = failures(&results);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].message, "brand[2] alt missing");
        assert_eq!(results.len(), 18);
    }

    #[test]
    fn insecure_link_and_missing_image_are_reported_without_stopping() {
        let mut brands = content::brands().to_vec();
        brands[0].href = "http://www.momentocam.com/dash-cams";
        brands[3].img = "";
        let results = check(&Theme::builtin(), &brands, &full_capabilities());
        let messages: Vec<_> = failures(&results).iter().map(|r| r.message.clone()).collect();
        assert_eq!(
            messages,
            vec![
                "brand[0] link not https: http://www.momentocam.com/dash-cams".to_string(),
                "brand[3] image missing".to_string(),
            ]
        );
        assert_eq!(results.len(), 18);
    }

    #[test]
    fn missing_capabilities_fail_their_own_lines() {
        let caps = Capabilities {
            runtime: Runtime::Server,
            motion: None,
            icons: IconTable::registered().without(IconKind::Wrench).without(IconKind::Star),
        };
        let results = check(&Theme::builtin(), content::brands(), &caps);
        assert_eq!(results[1], CheckResult::fail("motion library is undefined"));
        assert_eq!(results[2], CheckResult::fail("some icons undefined: Wrench, Star"));
        assert_eq!(failures(&results).len(), 2);
    }

    #[test]
    fn gallery_mismatch_is_reported() {
        let brands = content::brands();
        let gallery = content::gallery_of(&brands[..3]);
        let caps = full_capabilities();
        let theme = Theme::builtin();
        let results = run_checks_with(&CheckInput {
            theme: &theme,
            brands,
            gallery: &gallery,
            capabilities: &caps,
        });
        assert_eq!(
            results.last().unwrap().to_string(),
            "✗ gallery length mismatch: 3 images for 4 brands"
        );
    }

    #[test]
    fn empty_registry_still_runs_global_checks() {
        let results = check(&Theme::builtin(), &[], &full_capabilities());
        assert_eq!(results.len(), 6);
        assert!(failures(&results).is_empty());
    }

    #[test]
    fn report_verdict_and_json_shape() {
        let report = Report::new(vec![
            CheckResult::info("server render"),
            CheckResult::pass("icons loaded"),
        ]);
        assert!(report.passed);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.lines(), vec!["ℹ server render", "✓ icons loaded"]);

        let report = Report::new(vec![CheckResult::fail("brand alpha not defined")]);
        assert!(!report.passed);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.failures().count(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["passed"], false);
        assert_eq!(json["results"][0]["severity"], "fail");
        assert_eq!(json["results"][0]["message"], "brand alpha not defined");
    }
}
