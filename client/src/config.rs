use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Settings for [`DexClient`](crate::DexClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Upper bound on in-flight HTTP requests
    pub max_concurrent_requests: usize,

    /// How many of a creature's moves to fetch
    pub move_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            max_concurrent_requests: 8,
            move_limit: 15,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit.max(1);
        self
    }

    pub fn with_move_limit(mut self, limit: usize) -> Self {
        self.move_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.move_limit, 15);
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/api/")
            .with_max_concurrent_requests(0)
            .with_move_limit(4);

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.max_concurrent_requests, 1);
        assert_eq!(config.move_limit, 4);
    }
}
