use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use super::profile::{Duration, Hosting, ProjectProfile, ProjectType, Uptime};

/// How badly a triggered rule threatens the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Safe,
    Warning,
    Risk,
}

impl Severity {
    /// Ranking used for ordering findings; lower ranks are more urgent.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Risk => 0,
            Self::Warning => 1,
            Self::Safe => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Warning => "Warning",
            Self::Risk => "Risk",
        }
    }

    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Risk => "red",
            Self::Warning => "yellow",
            Self::Safe => "green",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Risk => "🔴",
            Self::Warning => "🟡",
            Self::Safe => "🟢",
        }
    }
}

/// Pure trigger test over the submitted profile.
pub type Condition = fn(&ProjectProfile) -> bool;

#[derive(Clone)]
pub struct Rule {
    pub id: &'static str,
    pub severity: Severity,
    pub condition: Condition,
    pub title: &'static str,
    pub message: &'static str,
    pub why: Vec<&'static str>,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl Rule {
    pub fn applies_to(&self, profile: &ProjectProfile) -> bool {
        (self.condition)(profile)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("rule id `{0}` is declared more than once")]
    DuplicateRuleId(&'static str),
}

/// Ordered rule set. Declaration order is the tie-break between equal severities.
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

static SHARED_CATALOG: OnceLock<RuleCatalog> = OnceLock::new();

impl RuleCatalog {
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    /// Process-wide standard catalog, built on first use and never mutated afterwards.
    pub fn shared() -> &'static RuleCatalog {
        SHARED_CATALOG.get_or_init(Self::standard)
    }

    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.id) {
                return Err(CatalogError::DuplicateRuleId(rule.id));
            }
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules triggered by `profile`, in declaration order.
    pub fn matching<'a>(
        &'a self,
        profile: &'a ProjectProfile,
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.applies_to(profile))
    }
}

fn static_site_on_static_host(profile: &ProjectProfile) -> bool {
    profile.project_type == ProjectType::Static && profile.hosting == Hosting::StaticHost
}

fn api_on_free_backend(profile: &ProjectProfile) -> bool {
    matches!(
        profile.project_type,
        ProjectType::Backend | ProjectType::Fullstack
    ) && profile.hosting == Hosting::FreeBackend
}

fn any_free_backend(profile: &ProjectProfile) -> bool {
    profile.hosting == Hosting::FreeBackend
}

fn always_on_free_backend(profile: &ProjectProfile) -> bool {
    (profile.project_type == ProjectType::Bot || profile.uptime == Uptime::AlwaysOn)
        && profile.hosting == Hosting::FreeBackend
}

fn long_running(profile: &ProjectProfile) -> bool {
    profile.duration == Duration::Months
}

fn usage_billed_cloud(profile: &ProjectProfile) -> bool {
    profile.hosting == Hosting::ManagedCloud
}

fn india_sms(profile: &ProjectProfile) -> bool {
    profile.india && profile.uses_sms
}

fn free_tier_signup(profile: &ProjectProfile) -> bool {
    matches!(profile.hosting, Hosting::FreeBackend | Hosting::StaticHost)
}

fn standard_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "rule-1",
            severity: Severity::Safe,
            condition: static_site_on_static_host,
            title: "Static Sites Are Low-Risk on Free Tiers",
            message: "If you host a static site on a free static host, it usually doesn’t break because there’s no backend compute to spin down or bill unexpectedly.",
            why: vec![
                "Static hosting platforms (Render, Vercel, Netlify, Cloudflare Pages) serve prebuilt assets without persistent compute.",
                "No spin-down, no runtime billing, no background execution.",
            ],
        },
        Rule {
            id: "rule-2",
            severity: Severity::Risk,
            condition: api_on_free_backend,
            title: "Free Backend Services Spin Down After Inactivity",
            message: "If you host an API on a free backend service, it usually feels unreliable because the service spins down after inactivity and only restarts on the next request.",
            why: vec![
                "Free web services often spin down after 15 minutes without inbound traffic.",
                "Spinning up a service takes up to a minute, causing a noticeable delay.",
            ],
        },
        Rule {
            id: "rule-3",
            severity: Severity::Warning,
            condition: any_free_backend,
            title: "Spin-Down Manifests as Latency or Transient Failures",
            message: "If your app randomly hangs or times out after being idle, it’s often not a code bug but a cold start caused by the backend spinning down.",
            why: vec![
                "Browser page load will hang temporarily during spin-up.",
                "Requests do not reach the service until it is running.",
            ],
        },
        Rule {
            id: "rule-4",
            severity: Severity::Risk,
            condition: always_on_free_backend,
            title: "Always-On Workloads Are Incompatible with Free Backends",
            message: "If you run a bot or scheduler on a free backend, it will miss jobs because always-on workloads break when the service spins down.",
            why: vec![
                "Spin-down breaks schedulers, background workers, and webhook receivers.",
                "Free tiers explicitly allow suspension at any time.",
            ],
        },
        Rule {
            id: "rule-5",
            severity: Severity::Warning,
            condition: long_running,
            title: "Free Tiers Have Time-Based Expiry Risk",
            message: "If you plan a side project to run for months on a free tier, it often stops working because many free plans expire or require upgrades after a fixed time.",
            why: vec![
                "Many free databases or compute plans have hard 30-day expirations.",
                "Data may be deleted after a grace period if not upgraded.",
            ],
        },
        Rule {
            id: "rule-6",
            severity: Severity::Risk,
            condition: usage_billed_cloud,
            title: "Usage-Based Cloud Pricing Can Cause Surprise Bills",
            message: "If you deploy on a usage-based cloud without guardrails, you can get a large bill because small misconfigurations or automation errors compound costs quickly.",
            why: vec![
                "Usage-based platforms (AWS/GCP/Azure) can generate high bills due to misconfiguration or automation errors.",
                "Cost guardrails and alerts are often not enabled by default.",
            ],
        },
        Rule {
            id: "rule-7",
            severity: Severity::Risk,
            condition: india_sms,
            title: "India SMS Requires DLT Registration (Hard Constraint)",
            message: "If you send SMS in India without DLT registration, delivery or costs usually break because messages get blocked or routed through expensive international gateways.",
            why: vec![
                "In India, domestic SMS delivery requires mandatory DLT registration.",
                "Non-compliance causes blocking or expensive rerouting via international gateways.",
            ],
        },
        Rule {
            id: "rule-8",
            severity: Severity::Warning,
            condition: free_tier_signup,
            title: "“Free Tier” Signup Often Has Hidden Friction",
            message: "If you pick a ‘free tier’ assuming instant access, you may get blocked before deployment because many platforms require credit cards, verification, or region eligibility.",
            why: vec![
                "Signup often requires GitHub verification or credit card for anti-abuse.",
                "Free credits are small and non-rolling.",
            ],
        },
    ]
}
