//! WordEmbeddings API client.
//!
//! Provides the main client interface for the WordEmbeddings API.

pub(crate) mod session;

use crate::auth::{AuthManager, CustomerAuthManager};
use crate::config::{EmbeddingsConfig, EmbeddingsConfigBuilder};
use crate::errors::{EmbeddingsError, EmbeddingsResult};
use crate::services::finetune::FineTuneService;
use crate::services::inference::InferenceService;
use crate::services::models::ModelsService;
use crate::transport::{HttpTransport, ReqwestTransport};
use session::Session;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The main WordEmbeddings client.
///
/// Connecting checks the credentials once against the service. A client
/// whose credentials were not recognised is still returned, with
/// [`is_valid`](Self::is_valid) reporting `false`; every operation on it
/// fails with [`EmbeddingsError::Authentication`] without touching the
/// network.
///
/// # Example
///
/// ```rust,no_run
/// use integrations_word_embeddings::{FineTuneDataset, FineTuneRequest, WordEmbeddingsClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = WordEmbeddingsClient::builder()
///         .customer_id("your-customer-id")
///         .api_key("your-api-key")
///         .base_url("https://api.example.com")
///         .connect()
///         .await?;
///
///     if !client.is_valid() {
///         return Err("credentials rejected".into());
///     }
///
///     let model = client.models().create("food model").await?;
///     let model_id = model["id"].as_str().unwrap_or_default();
///
///     let dataset = FineTuneDataset::new().texts(["Cheeseburger", "Hamburger", "Pizza"]);
///     let job = client
///         .finetune()
///         .submit(FineTuneRequest::new(model_id, vec![dataset]))
///         .await?;
///     println!("submitted {}", job["finetune_id"]);
///     Ok(())
/// }
/// ```
pub struct WordEmbeddingsClient {
    config: EmbeddingsConfig,
    session: Arc<Session>,
    models_service: ModelsService,
    finetune_service: FineTuneService,
    inference_service: InferenceService,
}

impl WordEmbeddingsClient {
    /// Creates a new client builder.
    pub fn builder() -> WordEmbeddingsClientBuilder {
        WordEmbeddingsClientBuilder::new()
    }

    /// Connects with an existing configuration.
    pub async fn connect(config: EmbeddingsConfig) -> EmbeddingsResult<Self> {
        WordEmbeddingsClientBuilder::new().config(config).connect().await
    }

    /// Connects with configuration read from environment variables.
    ///
    /// See [`EmbeddingsConfig::from_env`] for the variables read.
    pub async fn from_env() -> EmbeddingsResult<Self> {
        Self::connect(EmbeddingsConfig::from_env()?).await
    }

    /// Whether the service recognised the credentials at connect time
    pub fn is_valid(&self) -> bool {
        self.session.is_valid()
    }

    /// Customer identifier this client authenticates as
    pub fn customer_id(&self) -> &str {
        &self.config.customer_id
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        self.session.base_url()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EmbeddingsConfig {
        &self.config
    }

    /// Returns the models service.
    pub fn models(&self) -> &ModelsService {
        &self.models_service
    }

    /// Returns the fine-tune service.
    pub fn finetune(&self) -> &FineTuneService {
        &self.finetune_service
    }

    /// Returns the inference service.
    pub fn inference(&self) -> &InferenceService {
        &self.inference_service
    }
}

impl std::fmt::Debug for WordEmbeddingsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordEmbeddingsClient")
            .field("config", &self.config)
            .field("valid", &self.is_valid())
            .finish()
    }
}

/// Builder for the WordEmbeddings client.
#[derive(Default)]
pub struct WordEmbeddingsClientBuilder {
    config_builder: EmbeddingsConfigBuilder,
    config: Option<EmbeddingsConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl WordEmbeddingsClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a complete configuration, ignoring individual setters.
    pub fn config(mut self, config: EmbeddingsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the customer identifier.
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.customer_id(customer_id);
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(api_key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets a suffix for the User-Agent header.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent_suffix(suffix);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client and runs the customer check.
    ///
    /// Fails only on invalid configuration. Rejected credentials yield a
    /// client with `is_valid() == false`.
    pub async fn connect(self) -> EmbeddingsResult<WordEmbeddingsClient> {
        let config = match self.config {
            Some(config) => config,
            None => self.config_builder.build()?,
        };

        let auth_manager = Arc::new(CustomerAuthManager::with_user_agent_suffix(
            config.customer_id.clone(),
            config.api_key.clone(),
            config.user_agent_suffix.clone(),
        )) as Arc<dyn AuthManager>;

        auth_manager
            .validate_credentials()
            .map_err(|message| EmbeddingsError::Configuration { message })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(config.timeout)?) as Arc<dyn HttpTransport>,
        };

        let base_url = Url::parse(&config.base_url)?;

        tracing::debug!(
            customer_id = %config.customer_id,
            base_url = %base_url,
            "Connecting to WordEmbeddings API"
        );

        let session = Arc::new(Session::authenticate(transport, auth_manager, base_url).await?);

        Ok(WordEmbeddingsClient {
            config,
            models_service: ModelsService::new(session.clone()),
            finetune_service: FineTuneService::new(session.clone()),
            inference_service: InferenceService::new(session.clone()),
            session,
        })
    }
}
