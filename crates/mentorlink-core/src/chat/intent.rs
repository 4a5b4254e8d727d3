//! Keyword decision list for the chat assistant.
//!
//! Classification is an ordered list of keyword predicates evaluated
//! top-to-bottom; the first matching rule wins. This keeps the priority
//! order auditable and testable in isolation from the reply templates.

/// The fixed set of intents the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Asking for a mentor recommendation or mentor search.
    MentorRecommendation,
    /// Asking about promotion or evaluation criteria.
    PromotionEvaluation,
    /// Asking about company benefits or internal policies.
    Benefits,
    /// Asking about the onboarding schedule.
    Onboarding,
    /// Nothing matched; ask the user to be more specific.
    Fallback,
}

/// A single classification rule: a keyword predicate and the intent it
/// selects.
struct IntentRule {
    intent: Intent,
    matches: fn(&str) -> bool,
}

fn mentions_mentor_search(text: &str) -> bool {
    text.contains("멘토") && (text.contains("추천") || text.contains("찾"))
}

fn mentions_promotion(text: &str) -> bool {
    text.contains("승진") || text.contains("평가")
}

fn mentions_benefits(text: &str) -> bool {
    text.contains("복지") || text.contains("제도")
}

fn mentions_onboarding(text: &str) -> bool {
    text.contains("온보딩")
}

/// The decision list, in priority order. First match wins.
const RULES: [IntentRule; 4] = [
    IntentRule {
        intent: Intent::MentorRecommendation,
        matches: mentions_mentor_search,
    },
    IntentRule {
        intent: Intent::PromotionEvaluation,
        matches: mentions_promotion,
    },
    IntentRule {
        intent: Intent::Benefits,
        matches: mentions_benefits,
    },
    IntentRule {
        intent: Intent::Onboarding,
        matches: mentions_onboarding,
    },
];

/// Classifies a single utterance.
///
/// The utterance is lower-cased, then tested against the rules in order.
/// Each call is independent: no conversation context is carried between
/// classifications.
pub fn classify(utterance: &str) -> Intent {
    let text = utterance.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&text))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentor_recommendation_requires_both_keyword_groups() {
        assert_eq!(
            classify("프론트엔드 개발 멘토 추천해줘"),
            Intent::MentorRecommendation
        );
        assert_eq!(classify("멘토 찾고 있어요"), Intent::MentorRecommendation);
        // "멘토" alone is not enough
        assert_eq!(classify("멘토링이 뭐야"), Intent::Fallback);
    }

    #[test]
    fn test_keyword_intents() {
        assert_eq!(classify("승진 평가 기준이 궁금해"), Intent::PromotionEvaluation);
        assert_eq!(classify("평가 일정 확인"), Intent::PromotionEvaluation);
        assert_eq!(classify("사내 복지 제도 알려줘"), Intent::Benefits);
        assert_eq!(classify("온보딩 일정 확인하고 싶어"), Intent::Onboarding);
    }

    #[test]
    fn test_unmatched_utterance_falls_back() {
        assert_eq!(classify("오늘 날씨 어때"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // Contains both mentor-search and onboarding keywords; the
        // higher-priority rule decides.
        assert_eq!(
            classify("온보딩 중인데 멘토 추천해줘"),
            Intent::MentorRecommendation
        );
        // Benefits outranks onboarding
        assert_eq!(classify("온보딩 복지 안내"), Intent::Benefits);
    }

    #[test]
    fn test_classification_lowercases_latin_input() {
        // Keyword matching is done on the lower-cased utterance, so
        // Latin-script noise around the keywords does not interfere.
        assert_eq!(classify("REACT 멘토 추천"), Intent::MentorRecommendation);
    }
}
