pub mod server {
    pub const NAME: &str = "custom-vision-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
    pub const LOG_CONTEXT: &str = "custom-vision";
}

pub mod env {
    pub const BASE_URL: &[&str] = &["CUSTOM_VISION_BASE_URL", "API_BASE_URL"];
    pub const TRAINING_KEY: &[&str] = &["CUSTOM_VISION_TRAINING_KEY", "API_KEY"];
    pub const TIMEOUT_MS: &str = "CUSTOM_VISION_TIMEOUT_MS";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

pub mod headers {
    pub const ACCEPT: &str = "Accept";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const TRAINING_KEY: &str = "Training-Key";
    pub const JSON: &str = "application/json";
}

pub mod limits {
    pub const SUGGESTION_COUNT: usize = 3;
    pub const LOG_BODY_PREVIEW: usize = 200;
}
