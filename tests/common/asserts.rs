use bunner_csrf_rs::{GuardDecision, MatchedHeader, Rejection};

pub fn assert_accepted(decision: GuardDecision) -> MatchedHeader {
    match decision {
        GuardDecision::Accepted(matched) => matched,
        other => panic!("expected accepted decision, got {:?}", other),
    }
}

pub fn assert_rejected(decision: GuardDecision) -> Rejection {
    match decision {
        GuardDecision::Rejected(rejection) => rejection,
        other => panic!("expected rejected decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: GuardDecision) {
    assert!(
        matches!(decision, GuardDecision::NotApplicable),
        "expected not applicable decision, got {:?}",
        decision
    );
}
