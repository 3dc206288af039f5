/// Upstream GitHub endpoints. The broker speaks to no other provider;
/// tests construct an `AppConfig` directly to point `token_url` at a mock.
pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Origin of the CMS site; the popup scopes its `postMessage` to it.
    pub site_url: String,
    pub port: u16,
    pub authorize_url: String,
    pub token_url: String,
}

impl AppConfig {
    /// Read configuration from the environment (plus a `.env` file when
    /// present). Missing values become empty strings rather than startup
    /// errors; `missing()` reports them so `main` can log the gaps. The
    /// OAuth flow fails at runtime until they are set.
    pub fn from_env() -> Self {
        use dotenvy::dotenv;
        use std::env;

        dotenv().ok();

        Self {
            client_id: env::var("GITHUB_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("GITHUB_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: env::var("GITHUB_REDIRECT_URI").unwrap_or_default(),
            site_url: env::var("SITE_URL").unwrap_or_default(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            authorize_url: GITHUB_AUTHORIZE_URL.to_string(),
            token_url: GITHUB_TOKEN_URL.to_string(),
        }
    }

    /// Names of the environment variables that are still unset.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_empty() {
            missing.push("GITHUB_CLIENT_ID");
        }
        if self.client_secret.is_empty() {
            missing.push("GITHUB_CLIENT_SECRET");
        }
        if self.redirect_uri.is_empty() {
            missing.push("GITHUB_REDIRECT_URI");
        }
        if self.site_url.is_empty() {
            missing.push("SITE_URL");
        }
        missing
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
