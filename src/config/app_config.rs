#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub log_filter: String,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_catalog_database: String,
    pub tenant_auto_migrate: bool,
    pub tenant_pool_max_connections: u32,
    pub hotels_bucket_name: String,
    pub hotel_thumbnails_path: String,
    pub object_store: ObjectStoreConfig,
    pub max_upload_bytes: usize,
}

#[derive(Clone, Debug)]
pub struct ObjectStoreConfig {
    pub region: String,
    pub endpoint_url: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            log_filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,sqlx=warn,tower_http=info".to_string()),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_catalog_database: std::env::var("POSTGRES_CATALOG_DATABASE")
                .unwrap_or_else(|_| "hotel_catalog".to_string()),
            tenant_auto_migrate: read_flag("TENANT_AUTO_MIGRATE"),
            tenant_pool_max_connections: std::env::var("TENANT_POOL_MAX_CONNECTIONS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .filter(|value| *value > 0)
                .unwrap_or(10),
            hotels_bucket_name: std::env::var("HOTELS_BUCKET_NAME")
                .unwrap_or_else(|_| "hotels".to_string()),
            hotel_thumbnails_path: std::env::var("HOTEL_THUMBNAILS_PATH").unwrap_or_default(),
            object_store: ObjectStoreConfig {
                region: std::env::var("OBJECT_STORE_REGION")
                    .unwrap_or_else(|_| "us-east-1".to_string()),
                endpoint_url: read_optional("OBJECT_STORE_ENDPOINT_URL"),
                access_key_id: read_optional("OBJECT_STORE_ACCESS_KEY_ID"),
                secret_access_key: read_optional("OBJECT_STORE_SECRET_ACCESS_KEY"),
            },
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(10 * 1024 * 1024),
        }
    }

    pub fn catalog_database_url(&self) -> String {
        self.database_url_for(&self.postgres_catalog_database)
    }

    pub fn database_url_for(&self, database_name: &str) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            database_name
        )
    }
}

fn read_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
