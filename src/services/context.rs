use std::fmt;
use std::time::Duration;
use url::Url;

/// Process-wide request settings. Built once at startup and shared read-only.
#[derive(Clone)]
pub struct RequestContext {
    pub base_url: Url,
    pub credential: Option<String>,
    pub timeout: Option<Duration>,
}

impl RequestContext {
    pub fn new(base_url: Url, credential: Option<String>) -> Self {
        let credential = credential
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            base_url,
            credential,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("base_url", &self.base_url.as_str())
            .field(
                "credential",
                &self.credential.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://vision.example.com/customvision/v3.3/training").expect("url")
    }

    #[test]
    fn blank_credential_means_none() {
        assert!(RequestContext::new(base(), Some("   ".to_string()))
            .credential
            .is_none());
        assert_eq!(
            RequestContext::new(base(), Some("k".to_string())).credential,
            Some("k".to_string())
        );
    }

    #[test]
    fn debug_output_hides_the_credential() {
        let ctx = RequestContext::new(base(), Some("secret-key".to_string()));
        let text = format!("{:?}", ctx);
        assert!(!text.contains("secret-key"));
        assert!(text.contains("<redacted>"));
    }
}
