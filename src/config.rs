use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub catalog_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            catalog_path: env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/doctors.json".to_string()),
        }
    }
}
