use crate::constants::env as env_keys;
use crate::services::context::RequestContext;
use clap::Parser;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "custom-vision-mcp",
    version,
    about = "MCP stdio server for the Custom Vision Training API"
)]
pub struct CliArgs {
    /// Root URL of the Training API, e.g. https://<resource>.cognitiveservices.azure.com/customvision/v3.3/training
    #[arg(long)]
    pub base_url: Option<String>,
    /// Training key sent as the Training-Key header.
    #[arg(long)]
    pub training_key: Option<String>,
    /// Per-request timeout in milliseconds. No timeout when unset.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub base_url: Url,
    pub training_key: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl ServiceConfig {
    pub fn from_env_and_args(args: &CliArgs) -> Result<Self, String> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Flags win over the environment; each setting falls back through its
    /// env keys in order.
    pub fn resolve<F>(args: &CliArgs, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(*key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let raw_base = non_empty(args.base_url.clone())
            .or_else(|| first_set(env_keys::BASE_URL))
            .ok_or_else(|| {
                format!(
                    "base URL is required (--base-url or {})",
                    env_keys::BASE_URL.join(" / ")
                )
            })?;
        let base_url = parse_base_url(&raw_base)?;

        let training_key =
            non_empty(args.training_key.clone()).or_else(|| first_set(env_keys::TRAINING_KEY));

        let timeout_ms = match args.timeout_ms {
            Some(ms) => Some(ms),
            None => match first_set(&[env_keys::TIMEOUT_MS]) {
                Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                    format!("{} must be a positive integer", env_keys::TIMEOUT_MS)
                })?),
                None => None,
            },
        };
        if timeout_ms == Some(0) {
            return Err("timeout must be greater than zero".to_string());
        }

        Ok(Self {
            base_url,
            training_key,
            timeout_ms,
        })
    }

    pub fn request_context(&self) -> RequestContext {
        RequestContext::new(self.base_url.clone(), self.training_key.clone())
            .with_timeout(self.timeout_ms.map(Duration::from_millis))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|err| format!("invalid base URL {}: {}", raw, err))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("base URL must use http or https: {}", raw));
    }
    if url.cannot_be_a_base() {
        return Err(format!("base URL cannot carry a path: {}", raw));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn flags_override_environment() {
        let args = CliArgs {
            base_url: Some("https://flag.example.com/training".to_string()),
            training_key: Some("flag-key".to_string()),
            timeout_ms: Some(1500),
        };
        let config = ServiceConfig::resolve(
            &args,
            lookup(&[
                ("CUSTOM_VISION_BASE_URL", "https://env.example.com"),
                ("CUSTOM_VISION_TRAINING_KEY", "env-key"),
            ]),
        )
        .expect("config");
        assert_eq!(config.base_url.host_str(), Some("flag.example.com"));
        assert_eq!(config.training_key.as_deref(), Some("flag-key"));
        assert_eq!(config.timeout_ms, Some(1500));
    }

    #[test]
    fn falls_back_to_generic_env_keys() {
        let config = ServiceConfig::resolve(
            &CliArgs::default(),
            lookup(&[
                ("API_BASE_URL", "http://localhost:8080/training"),
                ("API_KEY", "k"),
                ("CUSTOM_VISION_TIMEOUT_MS", "250"),
            ]),
        )
        .expect("config");
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/training");
        assert_eq!(config.training_key.as_deref(), Some("k"));
        let ctx = config.request_context();
        assert_eq!(ctx.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn base_url_is_required_and_checked() {
        let err = ServiceConfig::resolve(&CliArgs::default(), lookup(&[])).expect_err("missing");
        assert!(err.contains("--base-url"));

        let err = ServiceConfig::resolve(
            &CliArgs::default(),
            lookup(&[("CUSTOM_VISION_BASE_URL", "ftp://example.com")]),
        )
        .expect_err("scheme");
        assert!(err.contains("http or https"));
    }

    #[test]
    fn empty_key_means_no_credential() {
        let config = ServiceConfig::resolve(
            &CliArgs::default(),
            lookup(&[
                ("CUSTOM_VISION_BASE_URL", "https://example.com"),
                ("CUSTOM_VISION_TRAINING_KEY", ""),
            ]),
        )
        .expect("config");
        assert!(config.training_key.is_none());
        assert!(config.request_context().credential.is_none());
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = ServiceConfig::resolve(
            &CliArgs::default(),
            lookup(&[
                ("CUSTOM_VISION_BASE_URL", "https://example.com"),
                ("CUSTOM_VISION_TIMEOUT_MS", "soon"),
            ]),
        )
        .expect_err("timeout");
        assert!(err.contains("CUSTOM_VISION_TIMEOUT_MS"));
    }
}
