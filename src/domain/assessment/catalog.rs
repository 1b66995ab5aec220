//! Question catalog: the fixed domain list plus every question.

use once_cell::sync::Lazy;

use super::{CapabilityDomain, LocalizedText, Question, Role};

/// Read-only question and domain configuration shared by all sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    domains: Vec<CapabilityDomain>,
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(domains: Vec<CapabilityDomain>, questions: Vec<Question>) -> Self {
        Self { domains, questions }
    }

    /// The built-in data maturity catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    /// Domains in report order.
    pub fn domains(&self) -> &[CapabilityDomain] {
        &self.domains
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Questions visible to `role`, in catalog order.
    pub fn questions_for_role(&self, role: Role) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.is_visible_to(role))
            .cloned()
            .collect()
    }
}

static STANDARD_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    use CapabilityDomain::*;
    use Role::*;

    Catalog::new(
        CapabilityDomain::ALL.to_vec(),
        vec![
            Question::new(
                "q1",
                Governance,
                LocalizedText::new(
                    "Is there a formal data governance strategy in place?",
                    "هل توجد استراتيجية رسمية لحوكمة البيانات؟",
                ),
                vec![Executive, Compliance, IT, Role::Analytics],
            ),
            Question::new(
                "q2",
                Governance,
                LocalizedText::new(
                    "Are data owners and stewards clearly defined?",
                    "هل تم تحديد مالكي ومشرفي البيانات بوضوح؟",
                ),
                vec![Executive, IT, Operations],
            ),
            Question::new(
                "q3",
                Architecture,
                LocalizedText::new(
                    "Does the organization use a centralized data warehouse or lake?",
                    "هل تستخدم المنظمة مستودع بيانات مركزي أو بحيرة بيانات؟",
                ),
                vec![IT, Role::Analytics, Operations],
            ),
            Question::new(
                "q4",
                Security,
                LocalizedText::new(
                    "Are data access controls automated and role-based?",
                    "هل ضوابط الوصول للبيانات مؤتمتة وتعتمد على الأدوار؟",
                ),
                vec![IT, Compliance, Executive],
            ),
            Question::new(
                "q5",
                Quality,
                LocalizedText::new(
                    "Is data quality measured and reported regularly?",
                    "هل يتم قياس جودة البيانات والإبلاغ عنها بانتظام؟",
                ),
                vec![Role::Analytics, Operations, IT],
            ),
            Question::new(
                "q6",
                CapabilityDomain::Analytics,
                LocalizedText::new(
                    "Are decisions consistently driven by data rather than intuition?",
                    "هل القرارات تعتمد باستمرار على البيانات بدلاً من الحدس؟",
                ),
                vec![Executive, Role::Analytics, Operations],
            ),
            Question::new(
                "q7",
                Culture,
                LocalizedText::new(
                    "Does leadership actively promote data literacy?",
                    "هل تشجع القيادة بنشاط محو الأمية البياناتية؟",
                ),
                vec![Executive, Role::Analytics, IT, Operations, Compliance],
            ),
            Question::new(
                "q8",
                Architecture,
                LocalizedText::new(
                    "Is there documentation for data lineage and flows?",
                    "هل توجد وثائق لتسلسل البيانات وتدفقاتها؟",
                ),
                vec![IT, Compliance],
            ),
            Question::new(
                "q9",
                CapabilityDomain::Analytics,
                LocalizedText::new(
                    "Do we use predictive or prescriptive analytics models?",
                    "هل نستخدم نماذج تحليلية تنبؤية أو توجيهية؟",
                ),
                vec![Role::Analytics, IT, Executive],
            ),
        ],
    )
});
