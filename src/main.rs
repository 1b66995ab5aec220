//! Maturity assessment HTTP server.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use maturity_assessment::adapters::ai::{
    AnthropicConfig, AnthropicProvider, GeminiConfig, GeminiProvider,
};
use maturity_assessment::adapters::catalog::StaticQuestionCatalog;
use maturity_assessment::adapters::http::{assessment_routes, AssessmentHandlers};
use maturity_assessment::adapters::narrative::{
    LlmNarrativeGenerator, UnconfiguredNarrativeGenerator,
};
use maturity_assessment::adapters::storage::{
    InMemoryKeyValueStore, KeyValueSessionRepository, RedisKeyValueStore,
};
use maturity_assessment::application::{
    CompleteAssessmentHandler, GenerateNarrativeHandler, ResolveCodeHandler, SelectRoleHandler,
    SubmitAnswerHandler, SubmitUserInfoHandler,
};
use maturity_assessment::config::{
    AiConfig, AiProvider, AppConfig, CorsPolicy, LogFormat, ServerConfig, StorageBackend,
    StorageConfig, ValidationError,
};
use maturity_assessment::ports::{
    AIError, AIProvider, KeyValueStore, NarrativeGenerator, QuestionCatalog, SessionRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let store = build_store(&config.storage).await?;
    let repository: Arc<dyn SessionRepository> = Arc::new(
        KeyValueSessionRepository::with_namespace(store, config.storage.namespace.clone()),
    );
    let catalog: Arc<dyn QuestionCatalog> = Arc::new(StaticQuestionCatalog::standard());
    let generator = build_narrative_generator(&config.ai)?;

    let handlers = AssessmentHandlers::new(
        Arc::new(ResolveCodeHandler::new(repository.clone(), catalog.clone())),
        Arc::new(SubmitUserInfoHandler::new(repository.clone())),
        Arc::new(SelectRoleHandler::new(repository.clone(), catalog.clone())),
        Arc::new(SubmitAnswerHandler::new(repository.clone())),
        Arc::new(CompleteAssessmentHandler::new(repository, catalog)),
        Arc::new(GenerateNarrativeHandler::new(generator)),
    );

    let app = assessment_routes(handlers)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "maturity assessment listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format() {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Compact => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
    }
}

async fn build_store(
    storage: &StorageConfig,
) -> Result<Arc<dyn KeyValueStore>, Box<dyn std::error::Error>> {
    match storage.backend {
        StorageBackend::Memory => {
            warn!("using in-memory session storage; sessions are lost on restart");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
        StorageBackend::Redis => {
            let url = storage
                .redis_url()
                .ok_or(ValidationError::MissingRequired("STORAGE__REDIS_URL"))?;
            let store = RedisKeyValueStore::connect(url, storage.redis_timeout()).await?;
            info!("connected to redis session storage");
            Ok(Arc::new(store))
        }
    }
}

fn build_narrative_generator(ai: &AiConfig) -> Result<Arc<dyn NarrativeGenerator>, AIError> {
    let Some(api_key) = ai.api_key() else {
        warn!(provider = ?ai.provider, "no AI key configured; recommendations unavailable");
        return Ok(Arc::new(UnconfiguredNarrativeGenerator));
    };

    let provider: Arc<dyn AIProvider> = match ai.provider {
        AiProvider::Anthropic => {
            let mut provider_config = AnthropicConfig::new(api_key)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            if let Some(model) = &ai.model {
                provider_config = provider_config.with_model(model.clone());
            }
            Arc::new(AnthropicProvider::new(provider_config)?)
        }
        AiProvider::Gemini => {
            let mut provider_config = GeminiConfig::new(api_key)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            if let Some(model) = &ai.model {
                provider_config = provider_config.with_model(model.clone());
            }
            Arc::new(GeminiProvider::new(provider_config)?)
        }
    };

    let info = provider.provider_info();
    info!(
        provider = %info.name,
        model = %info.model,
        context_tokens = info.max_context_tokens,
        "AI recommendations enabled"
    );
    Ok(Arc::new(
        LlmNarrativeGenerator::new(provider).with_max_tokens(ai.max_tokens),
    ))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = match server.cors_policy() {
        CorsPolicy::AnyOrigin => return CorsLayer::permissive(),
        CorsPolicy::Origins(origins) => origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect(),
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
}
