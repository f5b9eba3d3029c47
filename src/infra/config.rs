pub const DEFAULT_API_BASE: &str = "https://www.eoghanmccarthy.com";

#[derive(Clone)]
pub struct Config {
    pub mode: String, // "stdio" or "server"
    pub port: u16,
    pub api_base: String,
    pub auth_key: String, // empty when BLOG_AUTH_KEY is unset
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "stdio".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let api_base = std::env::var("BLOG_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.into());
        // An empty credential is a valid, degraded state: every tool call
        // short-circuits to the missing-credential outcome. Not a boot error.
        let auth_key = std::env::var("BLOG_AUTH_KEY").unwrap_or_default();

        Self {
            mode,
            port,
            api_base,
            auth_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_API_BASE};
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_to_stdio_8080_and_fixed_base_url() {
        std::env::remove_var("MODE");
        std::env::remove_var("PORT");
        std::env::remove_var("BLOG_API_URL");
        std::env::remove_var("BLOG_AUTH_KEY");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "stdio");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert!(cfg.auth_key.is_empty());
    }

    #[test]
    #[serial]
    fn parses_env_overrides() {
        std::env::set_var("MODE", "server");
        std::env::set_var("PORT", "9090");
        std::env::set_var("BLOG_API_URL", "http://localhost:4000");
        std::env::set_var("BLOG_AUTH_KEY", "sekrit");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, "server");
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.api_base, "http://localhost:4000");
        assert_eq!(cfg.auth_key, "sekrit");
        std::env::remove_var("MODE");
        std::env::remove_var("PORT");
        std::env::remove_var("BLOG_API_URL");
        std::env::remove_var("BLOG_AUTH_KEY");
    }

    #[test]
    #[serial]
    fn blank_base_url_falls_back_to_default() {
        std::env::set_var("BLOG_API_URL", "   ");
        let cfg = Config::from_env();
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        std::env::remove_var("BLOG_API_URL");
    }
}
