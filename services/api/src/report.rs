use clap::Args;
use risk_checker::checks::profile::{INDIA_LABEL, USES_SMS_LABEL};
use risk_checker::checks::{
    evaluate, CheckView, EvaluationOutcome, Finding, FindingView, ProfileSubmission,
    ProjectProfile, RuleCatalog,
};
use risk_checker::error::AppError;
use std::fmt::Write as _;

const SUBTITLE: &str = "Based on your inputs, here’s what’s likely to break.";
const DISCLAIMERS: [&str; 3] = [
    "“Free demo version. Depth and future checks may be added.”",
    "This tool does not deploy apps, estimate exact costs, or replace DevOps.",
    "Pre-decision guidance only. No guarantees.",
];

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Project type: static, backend, fullstack, bot, sms
    #[arg(long, default_value = "static")]
    pub(crate) project_type: String,
    /// Uptime expectation: tolerates_downtime, always_on
    #[arg(long, default_value = "tolerates_downtime")]
    pub(crate) uptime: String,
    /// Hosting choice: free_backend, static_host, vps, managed_cloud, builder
    #[arg(long, default_value = "static_host")]
    pub(crate) hosting: String,
    /// Project duration: days, weeks, months
    #[arg(long, default_value = "weeks")]
    pub(crate) duration: String,
    /// The user base is India-based
    #[arg(long)]
    pub(crate) india: bool,
    /// The project sends SMS / OTP messages
    #[arg(long)]
    pub(crate) uses_sms: bool,
    /// Include the supporting detail for every finding
    #[arg(long)]
    pub(crate) explain: bool,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl CheckArgs {
    fn submission(&self) -> ProfileSubmission {
        ProfileSubmission {
            project_type: Some(self.project_type.clone()),
            uptime: Some(self.uptime.clone()),
            hosting: Some(self.hosting.clone()),
            duration: Some(self.duration.clone()),
            india: Some(self.india),
            uses_sms: Some(self.uses_sms),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct RulesArgs {
    /// Print the catalog as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let profile = args.submission().validate()?;
    let outcome = evaluate(&profile);

    if args.json {
        let view = CheckView::from(outcome);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_outcome(&profile, &outcome, args.explain));
    }

    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let catalog = RuleCatalog::shared();

    if args.json {
        let rules: Vec<FindingView> = catalog
            .rules()
            .iter()
            .map(|rule| FindingView::from(Finding::from(rule)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rules)?);
    } else {
        print!("{}", render_catalog(catalog));
    }

    Ok(())
}

pub(crate) fn render_outcome(
    profile: &ProjectProfile,
    outcome: &EvaluationOutcome,
    explain: bool,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Risk Checker");
    let _ = writeln!(out, "Project type: {}", profile.project_type.label());
    let _ = writeln!(out, "Uptime: {}", profile.uptime.label());
    let _ = writeln!(out, "Hosting: {}", profile.hosting.label());
    let _ = writeln!(out, "Duration: {}", profile.duration.label());
    let _ = writeln!(
        out,
        "Regional context: {INDIA_LABEL}: {}, {USES_SMS_LABEL}: {}",
        yes_no(profile.india),
        yes_no(profile.uses_sms)
    );

    let _ = writeln!(
        out,
        "\n{} {}",
        outcome.verdict.icon(),
        outcome.verdict.label()
    );
    let _ = writeln!(out, "{SUBTITLE}");

    if outcome.rules.is_empty() {
        let _ = writeln!(out, "\nNo rules triggered.");
    }

    for finding in &outcome.rules {
        let _ = writeln!(out, "\n{} {}", finding.severity.icon(), finding.title);
        let _ = writeln!(out, "  {}", finding.message);
        if explain {
            for reason in &finding.why {
                let _ = writeln!(out, "    - {reason}");
            }
        }
    }

    if outcome.matched > outcome.rules.len() {
        let _ = writeln!(
            out,
            "\n({} more finding(s) not shown)",
            outcome.matched - outcome.rules.len()
        );
    }

    let _ = writeln!(out);
    for line in DISCLAIMERS {
        let _ = writeln!(out, "{line}");
    }

    out
}

pub(crate) fn render_catalog(catalog: &RuleCatalog) -> String {
    let mut out = String::new();

    for rule in catalog.rules() {
        let _ = writeln!(
            out,
            "{} [{}] {}: {}",
            rule.severity.icon(),
            rule.severity.label(),
            rule.id,
            rule.title
        );
    }

    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
