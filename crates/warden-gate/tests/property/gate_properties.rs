use proptest::prelude::*;
use warden_core::models::{
    ConfidenceScore, Decision, PolicyDecision, PolicyMode, ReasonCode, RiskCategory, RiskLevel,
};
use warden_gate::risk::patterns::{FINANCIAL_KEYWORDS, LEGAL_KEYWORDS, MEDICAL_KEYWORDS, POLICY_KEYWORDS};
use warden_gate::{EligibilityGate, PolicyResolver, RiskClassifier};

fn any_risk_keyword() -> impl Strategy<Value = &'static str> {
    let all: Vec<&'static str> = MEDICAL_KEYWORDS
        .iter()
        .chain(LEGAL_KEYWORDS)
        .chain(FINANCIAL_KEYWORDS)
        .copied()
        .collect();
    prop::sample::select(all)
}

fn any_level() -> impl Strategy<Value = RiskLevel> {
    prop::sample::select(RiskLevel::ALL.to_vec())
}

// ── A stand-alone policy keyword always wins ──────────────────────────────

proptest! {
    #[test]
    fn policy_keyword_dominates(
        prefix in "[a-z ]{0,30}",
        suffix in "[a-z ]{0,30}",
        keyword in prop::sample::select(POLICY_KEYWORDS.to_vec()),
        other in any_risk_keyword(),
        upper in any::<bool>(),
    ) {
        let keyword = if upper { keyword.to_uppercase() } else { keyword.to_string() };
        let query = format!("{prefix} {other} should i {keyword} {suffix}");
        let risk = RiskClassifier::new().classify(&query);
        prop_assert_eq!(risk.category, RiskCategory::Policy);
        prop_assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn classification_is_deterministic(query in ".{0,120}") {
        let c = RiskClassifier::new();
        prop_assert_eq!(c.classify(&query), c.classify(&query));
    }
}

// ── Policy resolution is referentially transparent ────────────────────────

proptest! {
    #[test]
    fn resolve_is_bit_identical(level in any_level()) {
        let a = PolicyResolver::default().resolve(level);
        let b = PolicyResolver::default().resolve(level);
        prop_assert_eq!(a.min_confidence.to_bits(), b.min_confidence.to_bits());
        prop_assert_eq!(a, b);
    }
}

// ── Gate guards ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn gate_guard_ordering(
        min in 0.0f64..=1.0,
        score in 0.0f64..=0.9,
        generation_allowed in any::<bool>(),
    ) {
        let policy = PolicyDecision {
            mode: PolicyMode::Normal,
            min_confidence: min,
            retrieval_required: true,
            generation_allowed,
        };
        let d = EligibilityGate::new().evaluate(&policy, &ConfidenceScore::new(score));

        prop_assert_eq!(
            d.reason_code == ReasonCode::PolicyBlock,
            !generation_allowed
        );
        prop_assert_eq!(
            d.reason_code == ReasonCode::LowConfidence,
            generation_allowed && score < min
        );
        prop_assert_eq!(
            d.decision == Decision::Allow,
            generation_allowed && score >= min
        );
    }
}
