//! Canned replies for the chat assistant.
//!
//! Every intent maps to a fixed multi-paragraph template plus follow-up
//! suggestion chips. The templates are deliberately static copy: the
//! mentor-recommendation reply lists hardcoded names instead of querying
//! the live directory. Chips re-enter [`respond`] as plain utterances;
//! there is no separate code path for them.

use super::intent::{Intent, classify};

/// A reply produced by the assistant: template content plus suggestion
/// chips, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub content: String,
    pub suggestions: Vec<String>,
}

const GREETING_TEMPLATE: &str = "안녕하세요! H-Link AI 어시스턴트입니다. 🤖\n\n다음과 같은 도움을 드릴 수 있어요:\n• 멘토 추천 및 매칭\n• 사내 복지 및 제도 안내\n• 승진 및 평가 기준 설명\n• 온보딩 프로세스 가이드\n\n무엇을 도와드릴까요?";

const GREETING_SUGGESTIONS: &[&str] = &[
    "프론트엔드 개발 멘토 추천해줘",
    "승진 평가 기준이 궁금해",
    "사내 복지 제도 알려줘",
    "온보딩 일정 확인하고 싶어",
];

const MENTOR_RECOMMENDATION_TEMPLATE: &str = "멘토 추천을 도와드리겠습니다! 🎯\n\n현재 요청하신 조건에 맞는 멘토들을 찾았어요:\n\n**추천 멘토:**\n• 김민수 (시니어 개발자) - React, 클라우드 전문\n• 박지영 (마케팅 팀장) - 브랜딩, 디지털마케팅\n• 이창호 (사업개발 이사) - 사업기획, 리더십\n\n더 구체적인 조건이 있으시면 말씀해주세요!";

const MENTOR_RECOMMENDATION_SUGGESTIONS: &[&str] = &[
    "김민수 멘토 상세 정보",
    "다른 분야 멘토 찾기",
    "멘토링 신청 방법",
];

const PROMOTION_TEMPLATE: &str = "승진 및 평가 제도에 대해 안내드리겠습니다! 📈\n\n**승진 평가 기준:**\n• 업무 성과 (40%): KPI 달성도, 프로젝트 기여도\n• 역량 평가 (30%): 전문성, 리더십, 협업 능력\n• 동료 평가 (20%): 팀워크, 커뮤니케이션\n• 자기계발 (10%): 교육 이수, 자격증 취득\n\n**필요 점수:** 총 80점 이상 (S등급 이상)\n\n더 자세한 정보가 필요하시면 말씀해주세요!";

const PROMOTION_SUGGESTIONS: &[&str] = &["등급별 상세 기준", "자기계발 프로그램", "평가 일정 확인"];

const BENEFITS_TEMPLATE: &str = "Hanwha 사내 복지 제도를 안내드리겠습니다! 🏢\n\n**주요 복지 혜택:**\n• 건강관리: 종합건강검진, 의료비 지원\n• 휴가제도: 연차, 리프레시 휴가, 육아휴직\n• 교육지원: 사내외 교육비, 어학연수 지원\n• 생활지원: 주택자금 대출, 경조사비\n• 여가활동: 동호회 지원, 체육시설 이용\n\n각 제도별 자세한 신청 방법을 알려드릴까요?";

const BENEFITS_SUGGESTIONS: &[&str] = &["휴가 신청 방법", "교육비 지원 절차", "주택자금 대출 조건"];

const ONBOARDING_TEMPLATE: &str = "온보딩 프로세스를 안내드리겠습니다! 🚀\n\n**온보딩 일정 (4주 과정):**\n\n**1주차:** 회사 소개 및 기본 교육\n• Hanwha 역사 및 비전\n• 조직문화 및 핵심가치\n• 기본 시스템 사용법\n\n**2주차:** 부서별 전문 교육\n• 담당 업무 소개\n• 팀 소개 및 역할 분담\n• 멘토 배정\n\n**3-4주차:** 실무 적응\n• 프로젝트 참여\n• 정기 피드백\n• 적응도 평가\n\n현재 어느 단계에 계신가요?";

const ONBOARDING_SUGGESTIONS: &[&str] = &["멘토 배정 신청", "교육 자료 다운로드", "온보딩 진도 확인"];

const FALLBACK_TEMPLATE: &str = "죄송합니다. 좀 더 구체적으로 질문해주시면 더 정확한 답변을 드릴 수 있어요! 😊\n\n다음 중 하나를 선택해주세요:";

const FALLBACK_SUGGESTIONS: &[&str] = &[
    "멘토 추천받기",
    "승진 기준 알아보기",
    "복지 제도 확인하기",
    "온보딩 가이드 보기",
];

fn reply(template: &str, suggestions: &[&str]) -> BotReply {
    BotReply {
        content: template.to_string(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

/// The greeting shown when a conversation opens, offering one chip per
/// supported intent.
pub fn greeting() -> BotReply {
    reply(GREETING_TEMPLATE, GREETING_SUGGESTIONS)
}

/// Produces the canned reply for a single utterance.
///
/// Classifies the utterance with the keyword decision list and returns the
/// matching template. Unrecognized input gets the clarification reply with
/// one chip per supported intent.
pub fn respond(utterance: &str) -> BotReply {
    match classify(utterance) {
        Intent::MentorRecommendation => {
            reply(MENTOR_RECOMMENDATION_TEMPLATE, MENTOR_RECOMMENDATION_SUGGESTIONS)
        }
        Intent::PromotionEvaluation => reply(PROMOTION_TEMPLATE, PROMOTION_SUGGESTIONS),
        Intent::Benefits => reply(BENEFITS_TEMPLATE, BENEFITS_SUGGESTIONS),
        Intent::Onboarding => reply(ONBOARDING_TEMPLATE, ONBOARDING_SUGGESTIONS),
        Intent::Fallback => reply(FALLBACK_TEMPLATE, FALLBACK_SUGGESTIONS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentor_recommendation_reply_has_three_chips() {
        let reply = respond("프론트엔드 개발 멘토 추천해줘");
        assert!(reply.content.contains("추천 멘토"));
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[test]
    fn test_fallback_reply_offers_all_four_intents() {
        let reply = respond("오늘 날씨 어때");
        assert!(reply.content.contains("구체적으로"));
        assert_eq!(reply.suggestions.len(), 4);
    }

    #[test]
    fn test_greeting_offers_all_four_intents() {
        let reply = greeting();
        assert!(reply.content.contains("H-Link"));
        assert_eq!(reply.suggestions.len(), 4);
    }

    #[test]
    fn test_every_greeting_chip_reaches_a_non_fallback_reply() {
        // Chips are plain utterances fed back through respond(); each one
        // must land on the intent it advertises, not the fallback.
        let fallback = respond("오늘 날씨 어때");
        for chip in greeting().suggestions {
            let reply = respond(&chip);
            assert_ne!(
                reply.content, fallback.content,
                "chip '{chip}' fell through to the fallback reply"
            );
        }
    }

    #[test]
    fn test_intent_replies_have_three_chips_each() {
        for utterance in ["멘토 추천", "승진", "복지", "온보딩"] {
            assert_eq!(respond(utterance).suggestions.len(), 3);
        }
    }
}
