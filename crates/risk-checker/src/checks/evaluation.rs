use serde::Serialize;
use tracing::debug;

use super::catalog::{Rule, RuleCatalog, Severity};
use super::profile::ProjectProfile;

/// Upper bound on the number of findings surfaced to the caller.
pub const MAX_TOP_RULES: usize = 4;

/// Aggregate label derived from the worst severity among all triggered rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[serde(rename = "Safe")]
    Safe,
    #[serde(rename = "Usable with warnings")]
    UsableWithWarnings,
    #[serde(rename = "Risky")]
    Risky,
}

impl Verdict {
    pub fn from_severities(severities: impl IntoIterator<Item = Severity>) -> Self {
        let mut verdict = Verdict::Safe;
        for severity in severities {
            match severity {
                Severity::Risk => return Verdict::Risky,
                Severity::Warning => verdict = Verdict::UsableWithWarnings,
                Severity::Safe => {}
            }
        }
        verdict
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::UsableWithWarnings => "Usable with warnings",
            Self::Risky => "Risky",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            Self::Safe => Severity::Safe,
            Self::UsableWithWarnings => Severity::Warning,
            Self::Risky => Severity::Risk,
        }
    }

    pub const fn indicator(self) -> &'static str {
        self.severity().indicator()
    }

    pub const fn icon(self) -> &'static str {
        self.severity().icon()
    }
}

/// Display record of a triggered rule; the predicate never leaves the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: &'static str,
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
    pub why: Vec<&'static str>,
}

impl From<&Rule> for Finding {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id,
            severity: rule.severity,
            title: rule.title,
            message: rule.message,
            why: rule.why.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationOutcome {
    pub verdict: Verdict,
    /// Number of triggered rules before the list was capped.
    pub matched: usize,
    pub rules: Vec<Finding>,
}

/// Stateless evaluator ranking the catalog's triggered rules for one profile.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationEngine<'c> {
    catalog: &'c RuleCatalog,
}

impl EvaluationEngine<'static> {
    pub fn standard() -> Self {
        Self::new(RuleCatalog::shared())
    }
}

impl<'c> EvaluationEngine<'c> {
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c RuleCatalog {
        self.catalog
    }

    pub fn evaluate(&self, profile: &ProjectProfile) -> EvaluationOutcome {
        let mut matched: Vec<&Rule> = self.catalog.matching(profile).collect();
        // sort_by_key is stable, so equal severities keep catalog order.
        matched.sort_by_key(|rule| rule.severity.rank());

        let verdict = Verdict::from_severities(matched.iter().map(|rule| rule.severity));
        let matched_count = matched.len();
        let rules: Vec<Finding> = matched
            .into_iter()
            .take(MAX_TOP_RULES)
            .map(Finding::from)
            .collect();

        debug!(
            verdict = verdict.label(),
            matched = matched_count,
            shown = rules.len(),
            "evaluated project profile"
        );

        EvaluationOutcome {
            verdict,
            matched: matched_count,
            rules,
        }
    }
}

/// Evaluate `profile` against the shared standard catalog.
pub fn evaluate(profile: &ProjectProfile) -> EvaluationOutcome {
    EvaluationEngine::standard().evaluate(profile)
}
