use super::fixture_loader::{FixtureCase, FixtureFailure, FixtureResult, load_fixtures};
/// Fixture runner
///
/// Runs every fixture case against `laxurl::decompose`
use laxurl::{Url, decompose};

struct Checker<'a> {
    case_num: usize,
    input: &'a str,
    failures: Vec<FixtureFailure>,
}

impl Checker<'_> {
    fn check(&mut self, field: &'static str, expected: Option<&str>, actual: &str) {
        if let Some(expected) = expected {
            if expected != actual {
                self.failures.push(FixtureFailure {
                    case_num: self.case_num,
                    input: self.input.to_string(),
                    field,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
    }
}

#[cfg(feature = "normalize")]
fn check_normalized(checker: &mut Checker<'_>, url: &Url, expected: Option<&str>) {
    if expected.is_some() {
        match url.normalize() {
            Ok(actual) => checker.check("normalized", expected, &actual),
            Err(error) => checker.check("normalized", expected, &error.to_string()),
        }
    }
}

#[cfg(not(feature = "normalize"))]
fn check_normalized(_: &mut Checker<'_>, _: &Url, _: Option<&str>) {}

/// Run fixture cases and return results
pub fn run_fixtures(cases: Vec<FixtureCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut case_num = 0;

    for case in cases {
        let FixtureCase::Decompose {
            input,
            scheme,
            double_slash,
            opaque,
            authority,
            path,
            username,
            password,
            host,
            port,
            query,
            fragment,
            relative,
            normalized,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let mut checker = Checker {
            case_num,
            input: &input,
            failures: Vec::new(),
        };

        let url = match decompose(&input) {
            Ok(url) => url,
            Err(error) => {
                checker.check("decompose", Some("success"), &error.to_string());
                result.failed += 1;
                result.failures.append(&mut checker.failures);
                continue;
            }
        };

        checker.check("scheme", scheme.as_deref(), url.scheme());
        checker.check("double_slash", double_slash.as_deref(), url.double_slash());
        checker.check("opaque", opaque.as_deref(), url.opaque());
        checker.check("authority", authority.as_deref(), url.authority());
        checker.check("path", path.as_deref(), url.path());
        checker.check("username", username.as_deref(), url.user().username());
        checker.check(
            "password",
            password.as_deref(),
            url.user().password().unwrap_or_default(),
        );
        checker.check("host", host.as_deref(), url.host());
        checker.check("port", port.as_deref(), url.port());
        checker.check("query", query.as_deref(), url.query());
        checker.check("fragment", fragment.as_deref(), url.fragment());
        if let Some(relative) = relative {
            checker.check(
                "relative",
                Some(&relative.to_string()),
                &url.is_relative().to_string(),
            );
        }

        check_normalized(&mut checker, &url, normalized.as_deref());

        if checker.failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.append(&mut checker.failures);
        }
    }

    result
}

#[test]
fn test_decompose_fixtures() {
    let cases = load_fixtures();
    let total = cases
        .iter()
        .filter(|case| matches!(case, FixtureCase::Decompose { .. }))
        .count();

    println!("\nRunning {total} fixture cases...");
    let result = run_fixtures(cases);
    println!("\n{}", result.summary());

    for failure in &result.failures {
        println!(
            "\nCase #{} ({}): {}\n   Expected: {:?}\n   Actual: {:?}",
            failure.case_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }

    assert_eq!(
        result.failed, 0,
        "\n\n{} fixture cases failed. Run with `--nocapture` to see details.\n",
        result.failed
    );
    assert_eq!(result.passed, total);
}
