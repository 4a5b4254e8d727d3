//! Seeded mentor directory.
//!
//! The platform ships with a fixed set of mentor profiles. They are loaded
//! once at startup and cached for the lifetime of the application.

use super::model::Mentor;
use std::sync::OnceLock;

/// Static storage for the seeded directory (initialized once).
static SEEDED_MENTORS: OnceLock<Vec<Mentor>> = OnceLock::new();

/// Returns a reference to the seeded mentor directory.
///
/// The collection is initialized on first access and cached for subsequent
/// calls. Its order is significant: the directory query engine preserves it.
pub fn seeded_mentors() -> &'static [Mentor] {
    SEEDED_MENTORS.get_or_init(|| {
        vec![
            Mentor {
                id: "1".to_string(),
                name: "김민수".to_string(),
                role: "시니어 프론트엔드 개발자".to_string(),
                company: "네이버".to_string(),
                experience: "8년".to_string(),
                rating: 4.9,
                sessions: 127,
                tags: vec![
                    "React".to_string(),
                    "TypeScript".to_string(),
                    "Next.js".to_string(),
                ],
                image: "/korean-male-developer.png".to_string(),
                bio: "8년차 시니어 프론트엔드 개발자로, React와 TypeScript를 활용한 대규모 웹 애플리케이션 개발 경험이 풍부합니다. 네이버에서 메인 서비스 개발을 담당하고 있으며, 주니어 개발자들의 성장을 돕는 것을 좋아합니다.".to_string(),
                expertise: vec![
                    "React".to_string(),
                    "TypeScript".to_string(),
                    "Next.js".to_string(),
                    "JavaScript".to_string(),
                    "웹 성능 최적화".to_string(),
                    "코드 리뷰".to_string(),
                ],
                hourly_rate: 80_000,
                availability: vec!["평일 저녁".to_string(), "주말".to_string()],
                languages: vec!["한국어".to_string(), "영어".to_string()],
                location: "서울".to_string(),
                response_time: "1시간 이내".to_string(),
                total_reviews: 89,
                joined_date: "2022-03-15".to_string(),
            },
            Mentor {
                id: "2".to_string(),
                name: "박지영".to_string(),
                role: "마케팅 디렉터".to_string(),
                company: "카카오".to_string(),
                experience: "10년".to_string(),
                rating: 4.8,
                sessions: 89,
                tags: vec![
                    "디지털마케팅".to_string(),
                    "브랜딩".to_string(),
                    "성장전략".to_string(),
                ],
                image: "/placeholder-ev20u.png".to_string(),
                bio: "10년간 다양한 스타트업과 대기업에서 마케팅 전략을 수립하고 실행해온 전문가입니다. 특히 디지털 마케팅과 브랜드 구축에 강점을 가지고 있으며, 데이터 기반의 성장 전략 수립을 전문으로 합니다.".to_string(),
                expertise: vec![
                    "디지털마케팅".to_string(),
                    "브랜딩".to_string(),
                    "성장전략".to_string(),
                    "콘텐츠 마케팅".to_string(),
                    "소셜미디어".to_string(),
                    "데이터 분석".to_string(),
                ],
                hourly_rate: 90_000,
                availability: vec!["평일 오후".to_string(), "주말 오전".to_string()],
                languages: vec!["한국어".to_string(), "영어".to_string()],
                location: "서울".to_string(),
                response_time: "2시간 이내".to_string(),
                total_reviews: 67,
                joined_date: "2021-11-20".to_string(),
            },
            Mentor {
                id: "3".to_string(),
                name: "이창호".to_string(),
                role: "스타트업 CEO".to_string(),
                company: "테크스타트업".to_string(),
                experience: "12년".to_string(),
                rating: 4.9,
                sessions: 156,
                tags: vec![
                    "창업".to_string(),
                    "투자유치".to_string(),
                    "팀빌딩".to_string(),
                ],
                image: "/korean-ceo.png".to_string(),
                bio: "3번의 창업 경험을 가진 시리얼 앙트러프러너입니다. 총 50억원의 투자를 유치했으며, 현재는 AI 기반 스타트업을 운영하고 있습니다. 창업 초기부터 스케일업까지 전 과정에 대한 실무 경험을 공유합니다.".to_string(),
                expertise: vec![
                    "창업".to_string(),
                    "투자유치".to_string(),
                    "팀빌딩".to_string(),
                    "사업계획서".to_string(),
                    "피칭".to_string(),
                    "리더십".to_string(),
                ],
                hourly_rate: 120_000,
                availability: vec!["평일 오전".to_string(), "평일 저녁".to_string()],
                languages: vec![
                    "한국어".to_string(),
                    "영어".to_string(),
                    "중국어".to_string(),
                ],
                location: "서울".to_string(),
                response_time: "30분 이내".to_string(),
                total_reviews: 124,
                joined_date: "2020-08-10".to_string(),
            },
            Mentor {
                id: "4".to_string(),
                name: "정수연".to_string(),
                role: "UX/UI 디자이너".to_string(),
                company: "토스".to_string(),
                experience: "6년".to_string(),
                rating: 4.7,
                sessions: 73,
                tags: vec![
                    "UX디자인".to_string(),
                    "UI디자인".to_string(),
                    "프로토타이핑".to_string(),
                ],
                image: "/korean-female-designer.png".to_string(),
                bio: "토스에서 핀테크 서비스의 UX/UI를 담당하고 있는 6년차 디자이너입니다. 사용자 중심의 디자인 사고와 데이터 기반의 디자인 의사결정을 중요하게 생각합니다.".to_string(),
                expertise: vec![
                    "UX디자인".to_string(),
                    "UI디자인".to_string(),
                    "프로토타이핑".to_string(),
                    "사용자 리서치".to_string(),
                    "디자인 시스템".to_string(),
                    "Figma".to_string(),
                ],
                hourly_rate: 70_000,
                availability: vec!["평일 저녁".to_string(), "주말 오후".to_string()],
                languages: vec!["한국어".to_string(), "영어".to_string()],
                location: "서울".to_string(),
                response_time: "1시간 이내".to_string(),
                total_reviews: 56,
                joined_date: "2022-01-25".to_string(),
            },
            Mentor {
                id: "5".to_string(),
                name: "최민호".to_string(),
                role: "백엔드 개발자".to_string(),
                company: "쿠팡".to_string(),
                experience: "7년".to_string(),
                rating: 4.8,
                sessions: 94,
                tags: vec![
                    "Java".to_string(),
                    "Spring".to_string(),
                    "AWS".to_string(),
                ],
                image: "/korean-male-backend-developer.png".to_string(),
                bio: "대규모 이커머스 플랫폼에서 백엔드 시스템을 설계하고 개발하는 7년차 개발자입니다. 마이크로서비스 아키텍처와 클라우드 인프라에 대한 깊은 이해를 바탕으로 멘토링을 제공합니다.".to_string(),
                expertise: vec![
                    "Java".to_string(),
                    "Spring Boot".to_string(),
                    "AWS".to_string(),
                    "마이크로서비스".to_string(),
                    "데이터베이스".to_string(),
                    "시스템 설계".to_string(),
                ],
                hourly_rate: 85_000,
                availability: vec!["평일 저녁".to_string(), "주말".to_string()],
                languages: vec!["한국어".to_string(), "영어".to_string()],
                location: "서울".to_string(),
                response_time: "2시간 이내".to_string(),
                total_reviews: 71,
                joined_date: "2021-09-12".to_string(),
            },
            Mentor {
                id: "6".to_string(),
                name: "한소희".to_string(),
                role: "데이터 사이언티스트".to_string(),
                company: "네이버".to_string(),
                experience: "5년".to_string(),
                rating: 4.9,
                sessions: 68,
                tags: vec![
                    "Python".to_string(),
                    "머신러닝".to_string(),
                    "데이터분석".to_string(),
                ],
                image: "/korean-female-data-scientist.png".to_string(),
                bio: "네이버에서 추천 시스템과 검색 알고리즘을 개발하는 데이터 사이언티스트입니다. 머신러닝과 딥러닝을 활용한 실무 프로젝트 경험을 바탕으로 실용적인 멘토링을 제공합니다.".to_string(),
                expertise: vec![
                    "Python".to_string(),
                    "머신러닝".to_string(),
                    "딥러닝".to_string(),
                    "데이터분석".to_string(),
                    "TensorFlow".to_string(),
                    "PyTorch".to_string(),
                ],
                hourly_rate: 95_000,
                availability: vec!["평일 오후".to_string(), "주말 오전".to_string()],
                languages: vec!["한국어".to_string(), "영어".to_string()],
                location: "서울".to_string(),
                response_time: "1시간 이내".to_string(),
                total_reviews: 52,
                joined_date: "2022-06-08".to_string(),
            },
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_directory_size() {
        assert_eq!(seeded_mentors().len(), 6);
    }

    #[test]
    fn test_seeded_mentors_have_unique_ids() {
        let mut ids = std::collections::HashSet::new();
        for mentor in seeded_mentors() {
            assert!(
                ids.insert(mentor.id.clone()),
                "Mentor IDs must be unique, found duplicate: {}",
                mentor.id
            );
        }
    }

    #[test]
    fn test_seeded_mentors_are_well_formed() {
        for mentor in seeded_mentors() {
            assert!(!mentor.name.is_empty());
            assert!(!mentor.expertise.is_empty(), "search relies on expertise");
            assert!(!mentor.availability.is_empty());
            assert!(mentor.rating >= 0.0 && mentor.rating <= 5.0);
            assert!(mentor.hourly_rate > 0);
        }
    }
}
