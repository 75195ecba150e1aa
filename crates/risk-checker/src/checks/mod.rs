//! Project risk checks: the fixed rule catalog and the evaluator that ranks its findings.
//!
//! A [`ProjectProfile`] is matched against every rule in a [`RuleCatalog`]; triggered rules
//! are ranked by severity (catalog order breaks ties), capped at [`MAX_TOP_RULES`], and a
//! [`Verdict`] is derived from the complete set of matches.

pub mod catalog;
pub mod evaluation;
pub mod profile;
pub mod router;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, Condition, Rule, RuleCatalog, Severity};
pub use evaluation::{
    evaluate, EvaluationEngine, EvaluationOutcome, Finding, Verdict, MAX_TOP_RULES,
};
pub use profile::{
    Duration, Hosting, ProfileError, ProfileSubmission, ProjectProfile, ProjectType, Uptime,
};
pub use router::{check_router, CheckView, FindingView};
