use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub male_doctor_avatar: String,
    pub female_doctor_avatar: String,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            male_doctor_avatar: "/male_doctor.png".to_string(),
            female_doctor_avatar: "/female_doctor.png".to_string(),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| {
                    warn!("HOST not set, using default");
                    defaults.host.clone()
                }),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("PORT '{}' is not a valid port, using default", raw);
                    defaults.port
                }),
                Err(_) => {
                    warn!("PORT not set, using default");
                    defaults.port
                }
            },
            male_doctor_avatar: env::var("MALE_DOCTOR_AVATAR")
                .unwrap_or_else(|_| defaults.male_doctor_avatar.clone()),
            female_doctor_avatar: env::var("FEMALE_DOCTOR_AVATAR")
                .unwrap_or_else(|_| defaults.female_doctor_avatar.clone()),
            seed_demo_data: match env::var("SEED_DEMO_DATA") {
                Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                    warn!("SEED_DEMO_DATA '{}' is not a boolean, using default", raw);
                    defaults.seed_demo_data
                }),
                Err(_) => defaults.seed_demo_data,
            },
        };

        if !config.seed_demo_data {
            warn!("Demo data seeding disabled - stores start empty");
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_variants() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
