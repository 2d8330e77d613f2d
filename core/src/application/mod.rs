use tracing::info;

use crate::{
    domain::common::{MeseroConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        llm::GeminiLLMClient,
        order::{InMemoryOrderRepository, OrderStore, PostgresOrderRepository},
    },
};

pub type MeseroService = Service<OrderStore, GeminiLLMClient>;

/// Opens the order store named by the connection string.
pub async fn connect_order_store(database_url: &str) -> Result<OrderStore, CoreError> {
    let scheme = database_url
        .split_once("://")
        .map(|(scheme, _)| scheme)
        .unwrap_or_default();

    match scheme {
        "postgres" | "postgresql" => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: database_url.to_string(),
            })
            .await?;
            info!("Using Postgres order store");
            Ok(OrderStore::Postgres(PostgresOrderRepository::new(
                postgres.get_db(),
            )))
        }
        "memory" => {
            info!("Using in-memory order store");
            Ok(OrderStore::Memory(InMemoryOrderRepository::new()))
        }
        _ => Err(CoreError::Configuration(format!(
            "unsupported database url scheme '{}'",
            scheme
        ))),
    }
}

pub async fn create_service(config: MeseroConfig) -> Result<MeseroService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::Configuration(
            "GEMINI_API_KEY must not be empty".to_string(),
        ));
    }

    let order_store = connect_order_store(&config.database.url).await?;
    let llm_client = GeminiLLMClient::from(&config.llm);

    Ok(Service::new(order_store, llm_client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{DatabaseConfig, LLMConfig};

    fn config(database_url: &str, api_key: &str) -> MeseroConfig {
        MeseroConfig {
            database: DatabaseConfig {
                url: database_url.to_string(),
            },
            llm: LLMConfig {
                gemini_api_key: api_key.to_string(),
                gemini_model: "gemini-1.5-flash".to_string(),
                gemini_base_url: "http://localhost:1".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_memory_scheme() {
        let store = connect_order_store("memory://").await.unwrap();
        assert!(matches!(store, OrderStore::Memory(_)));
    }

    #[tokio::test]
    async fn test_unknown_scheme_is_configuration_error() {
        for url in ["mongodb+srv://cluster", "orders.db", ""] {
            let err = connect_order_store(url).await.unwrap_err();
            assert!(matches!(err, CoreError::Configuration(_)), "url: {url}");
        }
    }

    #[tokio::test]
    async fn test_blank_api_key_is_rejected() {
        let result = create_service(config("memory://", "  ")).await;
        assert!(matches!(result, Err(CoreError::Configuration(_))));

        assert!(create_service(config("memory://", "key")).await.is_ok());
    }
}
