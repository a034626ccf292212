use career_fit::assessment::{AssessmentEngine, Question, QuestionCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Section entry shown ahead of each wizard step.
#[derive(Debug, Serialize)]
pub(crate) struct SectionView {
    pub(crate) name: String,
    pub(crate) category: Option<&'static str>,
    pub(crate) description: Option<String>,
    pub(crate) estimated_minutes: Option<u8>,
    pub(crate) question_count: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogView {
    pub(crate) sections: Vec<SectionView>,
    pub(crate) questions: Vec<Question>,
}

impl CatalogView {
    pub(crate) fn from_catalog(catalog: &QuestionCatalog) -> Self {
        let sections = catalog
            .sections()
            .into_iter()
            .map(|name| {
                let info = catalog.section_info(name);
                SectionView {
                    name: name.to_string(),
                    category: catalog
                        .section_questions(name)
                        .next()
                        .map(|question| question.category.label()),
                    description: info.map(|info| info.description.clone()),
                    estimated_minutes: info.map(|info| info.estimated_minutes),
                    question_count: catalog.section_questions(name).count(),
                }
            })
            .collect();

        Self {
            sections,
            questions: catalog.questions().to_vec(),
        }
    }
}

pub(crate) fn engine_for(catalog: Arc<QuestionCatalog>) -> Arc<AssessmentEngine> {
    Arc::new(AssessmentEngine::new(catalog))
}
