use super::common::*;
use crate::checks::catalog::{RuleCatalog, Severity};
use crate::checks::evaluation::{evaluate, EvaluationEngine, Verdict, MAX_TOP_RULES};
use crate::checks::profile::{Duration, Hosting, ProjectType, Uptime};

#[test]
fn static_site_on_static_host_still_warns_about_signup() {
    let outcome = evaluate(&static_site());

    // rule-8 covers every free static host, so the safe finding ranks after it.
    assert_eq!(outcome.verdict, Verdict::UsableWithWarnings);
    assert_eq!(outcome.matched, 2);
    assert_eq!(ids(&outcome.rules), ["rule-8", "rule-1"]);
    assert_eq!(outcome.rules[1].severity, Severity::Safe);
}

#[test]
fn safe_rules_alone_yield_safe() {
    let catalog = synthetic_catalog(vec![
        synthetic_rule("calm", Severity::Safe, true),
        synthetic_rule("quiet", Severity::Risk, false),
    ]);
    let outcome = EvaluationEngine::new(&catalog).evaluate(&static_site());

    assert_eq!(outcome.verdict, Verdict::Safe);
    assert_eq!(ids(&outcome.rules), ["calm"]);
}

#[test]
fn backend_on_free_tier_is_risky_and_capped() {
    let outcome = evaluate(&profile(
        ProjectType::Backend,
        Uptime::AlwaysOn,
        Hosting::FreeBackend,
        Duration::Months,
        false,
        false,
    ));

    assert_eq!(outcome.verdict, Verdict::Risky);
    assert_eq!(outcome.matched, 5);
    assert_eq!(ids(&outcome.rules), ["rule-2", "rule-4", "rule-3", "rule-5"]);
}

#[test]
fn india_sms_bot_on_vps_is_risky() {
    let outcome = evaluate(&profile(
        ProjectType::Bot,
        Uptime::ToleratesDowntime,
        Hosting::Vps,
        Duration::Days,
        true,
        true,
    ));

    assert_eq!(outcome.verdict, Verdict::Risky);
    assert_eq!(ids(&outcome.rules), ["rule-7"]);
}

#[test]
fn managed_cloud_is_risky() {
    let outcome = evaluate(&profile(
        ProjectType::Fullstack,
        Uptime::ToleratesDowntime,
        Hosting::ManagedCloud,
        Duration::Weeks,
        false,
        false,
    ));

    assert_eq!(outcome.verdict, Verdict::Risky);
    assert_eq!(ids(&outcome.rules), ["rule-6"]);
    assert_eq!(outcome.rules[0].why.len(), 2);
}

#[test]
fn vps_short_project_matches_nothing() {
    let outcome = evaluate(&profile(
        ProjectType::Backend,
        Uptime::AlwaysOn,
        Hosting::Vps,
        Duration::Weeks,
        false,
        true,
    ));

    assert_eq!(outcome.verdict, Verdict::Safe);
    assert_eq!(outcome.matched, 0);
    assert!(outcome.rules.is_empty());
}

#[test]
fn warnings_alone_yield_usable_with_warnings() {
    let outcome = evaluate(&profile(
        ProjectType::Sms,
        Uptime::ToleratesDowntime,
        Hosting::Builder,
        Duration::Months,
        true,
        false,
    ));

    assert_eq!(outcome.verdict, Verdict::UsableWithWarnings);
    assert_eq!(ids(&outcome.rules), ["rule-5"]);
}

#[test]
fn empty_catalog_yields_safe_with_no_rules() {
    let catalog = synthetic_catalog(Vec::new());
    let outcome = EvaluationEngine::new(&catalog).evaluate(&static_site());

    assert_eq!(outcome.verdict, Verdict::Safe);
    assert_eq!(outcome.matched, 0);
    assert!(outcome.rules.is_empty());
}

#[test]
fn non_matching_catalog_yields_safe_with_no_rules() {
    let catalog = synthetic_catalog(vec![
        synthetic_rule("quiet-risk", Severity::Risk, false),
        synthetic_rule("quiet-warning", Severity::Warning, false),
    ]);
    let outcome = EvaluationEngine::new(&catalog).evaluate(&static_site());

    assert_eq!(outcome.verdict, Verdict::Safe);
    assert!(outcome.rules.is_empty());
}

#[test]
fn verdict_considers_matches_beyond_the_cap() {
    let catalog = synthetic_catalog(vec![
        synthetic_rule("w1", Severity::Warning, true),
        synthetic_rule("w2", Severity::Warning, true),
        synthetic_rule("w3", Severity::Warning, true),
        synthetic_rule("w4", Severity::Warning, true),
        synthetic_rule("w5", Severity::Warning, true),
        synthetic_rule("s1", Severity::Safe, true),
    ]);
    let outcome = EvaluationEngine::new(&catalog).evaluate(&static_site());

    assert_eq!(outcome.verdict, Verdict::UsableWithWarnings);
    assert_eq!(outcome.matched, 6);
    assert_eq!(ids(&outcome.rules), ["w1", "w2", "w3", "w4"]);
}

#[test]
fn equal_severities_keep_declaration_order() {
    let catalog = synthetic_catalog(vec![
        synthetic_rule("safe-a", Severity::Safe, true),
        synthetic_rule("risk-a", Severity::Risk, true),
        synthetic_rule("warn-a", Severity::Warning, true),
        synthetic_rule("risk-b", Severity::Risk, true),
        synthetic_rule("skip", Severity::Risk, false),
        synthetic_rule("warn-b", Severity::Warning, true),
    ]);
    let outcome = EvaluationEngine::new(&catalog).evaluate(&static_site());

    assert_eq!(outcome.verdict, Verdict::Risky);
    assert_eq!(ids(&outcome.rules), ["risk-a", "risk-b", "warn-a", "warn-b"]);
}

#[test]
fn properties_hold_for_every_profile() {
    let catalog = RuleCatalog::standard();
    let engine = EvaluationEngine::new(&catalog);
    let position = |id: &str| {
        catalog
            .rules()
            .iter()
            .position(|rule| rule.id == id)
            .expect("finding comes from the catalog")
    };

    for profile in all_profiles() {
        let outcome = engine.evaluate(&profile);
        let matched: Vec<Severity> = catalog
            .matching(&profile)
            .map(|rule| rule.severity)
            .collect();

        assert_eq!(outcome, engine.evaluate(&profile), "deterministic");
        assert_eq!(outcome.matched, matched.len());
        assert_eq!(outcome.rules.len(), matched.len().min(MAX_TOP_RULES));

        let expected_verdict = if matched.contains(&Severity::Risk) {
            Verdict::Risky
        } else if matched.contains(&Severity::Warning) {
            Verdict::UsableWithWarnings
        } else {
            Verdict::Safe
        };
        assert_eq!(outcome.verdict, expected_verdict, "{profile:?}");

        for pair in outcome.rules.windows(2) {
            let (earlier, later) = (&pair[0], &pair[1]);
            assert!(earlier.severity.rank() <= later.severity.rank());
            if earlier.severity == later.severity {
                assert!(position(earlier.id) < position(later.id));
            }
        }
    }
}

#[test]
fn shared_and_owned_catalogs_agree() {
    let catalog = RuleCatalog::standard();
    let engine = EvaluationEngine::new(&catalog);

    for profile in all_profiles() {
        assert_eq!(engine.evaluate(&profile), evaluate(&profile));
    }
}

#[test]
fn verdict_labels_and_indicators() {
    assert_eq!(Verdict::Safe.label(), "Safe");
    assert_eq!(Verdict::UsableWithWarnings.label(), "Usable with warnings");
    assert_eq!(Verdict::Risky.label(), "Risky");
    assert_eq!(Verdict::Risky.indicator(), "red");
    assert_eq!(Verdict::UsableWithWarnings.indicator(), "yellow");
    assert_eq!(Verdict::Safe.indicator(), "green");
    assert_eq!(
        serde_json::to_value(Verdict::UsableWithWarnings).expect("serializes"),
        serde_json::json!("Usable with warnings")
    );
}
