use crate::checks::catalog::{Rule, RuleCatalog, Severity};
use crate::checks::profile::{Duration, Hosting, ProjectProfile, ProjectType, Uptime};

pub(super) fn profile(
    project_type: ProjectType,
    uptime: Uptime,
    hosting: Hosting,
    duration: Duration,
    india: bool,
    uses_sms: bool,
) -> ProjectProfile {
    ProjectProfile {
        project_type,
        uptime,
        hosting,
        duration,
        india,
        uses_sms,
    }
}

/// Static site on a static host, the form's initial answers.
pub(super) fn static_site() -> ProjectProfile {
    profile(
        ProjectType::Static,
        Uptime::ToleratesDowntime,
        Hosting::StaticHost,
        Duration::Weeks,
        false,
        false,
    )
}

/// Every profile in the input domain (5 * 2 * 5 * 3 * 2 * 2 combinations).
pub(super) fn all_profiles() -> Vec<ProjectProfile> {
    let mut profiles = Vec::new();
    for project_type in ProjectType::ordered() {
        for uptime in Uptime::ordered() {
            for hosting in Hosting::ordered() {
                for duration in Duration::ordered() {
                    for india in [false, true] {
                        for uses_sms in [false, true] {
                            profiles.push(profile(
                                project_type,
                                uptime,
                                hosting,
                                duration,
                                india,
                                uses_sms,
                            ));
                        }
                    }
                }
            }
        }
    }
    profiles
}

fn always(_: &ProjectProfile) -> bool {
    true
}

fn never(_: &ProjectProfile) -> bool {
    false
}

pub(super) fn synthetic_rule(id: &'static str, severity: Severity, fires: bool) -> Rule {
    Rule {
        id,
        severity,
        condition: if fires { always } else { never },
        title: "Synthetic rule",
        message: "If the fixture fires, then it is reported because the test asked for it.",
        why: vec!["fixture"],
    }
}

pub(super) fn synthetic_catalog(rules: Vec<Rule>) -> RuleCatalog {
    RuleCatalog::from_rules(rules).expect("synthetic rule ids are unique")
}

pub(super) fn ids(rules: &[crate::checks::Finding]) -> Vec<&'static str> {
    rules.iter().map(|rule| rule.id).collect()
}
