// src/config.rs
//
// MediClinic Web - Endpoint configuration
//

use serde::{Deserialize, Serialize};

/// URLs of the five clinic endpoints. Paths are opaque identifiers owned by
/// the server; the defaults assume a same-origin reverse proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub auth_url: String,
    pub doctors_url: String,
    pub services_url: String,
    pub faq_url: String,
    pub appointments_url: String,
}

impl ApiConfig {
    /// Rebase all endpoints onto a common prefix.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            auth_url: format!("{base}/auth"),
            doctors_url: format!("{base}/doctors"),
            services_url: format!("{base}/services"),
            faq_url: format!("{base}/faq"),
            appointments_url: format!("{base}/appointments"),
        }
    }

    /// Config for this build: `MEDICLINIC_API_BASE` at compile time, or the
    /// same-origin default.
    pub fn from_env() -> Self {
        match option_env!("MEDICLINIC_API_BASE") {
            Some(base) => Self::with_base(base),
            None => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base("/api")
    }
}

/// Standalone demo build: render from sample data, skip the network.
pub fn mock_mode() -> bool {
    option_env!("MEDICLINIC_MOCK").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_trims_trailing_slash() {
        let cfg = ApiConfig::with_base("https://clinic.example/fn/");
        assert_eq!(cfg.doctors_url, "https://clinic.example/fn/doctors");
        assert_eq!(cfg.auth_url, "https://clinic.example/fn/auth");
    }

    #[test]
    fn default_is_same_origin() {
        let cfg = ApiConfig::default();
        assert_eq!(cfg.appointments_url, "/api/appointments");
        assert_eq!(cfg.faq_url, "/api/faq");
        assert_eq!(cfg.services_url, "/api/services");
    }
}
