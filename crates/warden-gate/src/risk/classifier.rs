use tracing::debug;
use warden_core::models::{RiskAssessment, RiskCategory, RiskLevel};

use super::patterns::{self, RE_ADVICE, RE_FINANCIAL, RE_LEGAL, RE_MEDICAL, RE_POLICY};

/// The rule that produced a classification, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRule {
    PolicyViolation,
    FinancialAdvice,
    GeneralAdvice,
    Medical,
    Legal,
    Financial,
    Default,
}

impl RiskRule {
    /// Stable identifier for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::PolicyViolation => "policy_violation",
            Self::FinancialAdvice => "financial_advice",
            Self::GeneralAdvice => "general_advice",
            Self::Medical => "medical",
            Self::Legal => "legal",
            Self::Financial => "financial",
            Self::Default => "default",
        }
    }

    pub fn assessment(self) -> RiskAssessment {
        let (category, level) = match self {
            Self::PolicyViolation => (RiskCategory::Policy, RiskLevel::High),
            Self::FinancialAdvice => (RiskCategory::Financial, RiskLevel::High),
            Self::GeneralAdvice => (RiskCategory::General, RiskLevel::Medium),
            Self::Medical => (RiskCategory::Medical, RiskLevel::High),
            Self::Legal => (RiskCategory::Legal, RiskLevel::High),
            Self::Financial => (RiskCategory::Financial, RiskLevel::Medium),
            Self::Default => (RiskCategory::General, RiskLevel::Low),
        };
        RiskAssessment::new(category, level)
    }
}

/// Maps a query to a risk category and level. First matching rule wins:
///
/// 1. policy-violation keyword → `(POLICY, HIGH)`
/// 2. advice-seeking phrase → `(FINANCIAL, HIGH)` if a financial keyword is
///    also present, else `(GENERAL, MEDIUM)`
/// 3. medical keyword → `(MEDICAL, HIGH)`
/// 4. legal keyword → `(LEGAL, HIGH)`
/// 5. financial keyword → `(FINANCIAL, MEDIUM)`
/// 6. otherwise `(GENERAL, LOW)`
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a query. Total and deterministic.
    pub fn classify(&self, query: &str) -> RiskAssessment {
        let rule = self.matching_rule(query);
        let assessment = rule.assessment();
        debug!(
            rule = rule.name(),
            category = ?assessment.category,
            level = %assessment.level,
            "risk classified"
        );
        assessment
    }

    /// The first rule that fires for `query`.
    pub fn matching_rule(&self, query: &str) -> RiskRule {
        if patterns::matches(&RE_POLICY, query) {
            return RiskRule::PolicyViolation;
        }
        if patterns::matches(&RE_ADVICE, query) {
            if patterns::matches(&RE_FINANCIAL, query) {
                return RiskRule::FinancialAdvice;
            }
            return RiskRule::GeneralAdvice;
        }
        if patterns::matches(&RE_MEDICAL, query) {
            return RiskRule::Medical;
        }
        if patterns::matches(&RE_LEGAL, query) {
            return RiskRule::Legal;
        }
        if patterns::matches(&RE_FINANCIAL, query) {
            return RiskRule::Financial;
        }
        RiskRule::Default
    }
}
