use dotenv::dotenv;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub exchange_api_url: String,
    pub quote_service_url: String,
    pub output_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://cotacao.db?mode=rwc".to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            exchange_api_url: std::env::var("EXCHANGE_API_URL").unwrap_or_else(|_| {
                "https://economia.awesomeapi.com.br/json/last/USD-BRL".to_string()
            }),
            quote_service_url: std::env::var("QUOTE_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/cotacao".to_string()),
            output_path: std::env::var("OUTPUT_PATH")
                .unwrap_or_else(|_| "cotacao.txt".to_string()),
        })
    }
}
