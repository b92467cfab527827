use anyhow::{Context, Result};

/// Environment-backed configuration, loaded from the process environment
/// with a `.env` file as fallback. The `VITE_`-prefixed names are accepted
/// so the CLI can share the storefront's `.env` file.
pub struct Config {
    pub supabase_url: Option<String>,
    pub anon_key: Option<String>,
    pub service_role_key: Option<String>,
    pub spoonacular_key: Option<String>,
    pub youtube_key: Option<String>,
    pub youtube_playlist: Option<String>,
    pub gcp_service_account_json: Option<String>,
    pub gcp_project_id: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Config {
            supabase_url: env_first(&["SUPABASE_URL", "VITE_SUPABASE_URL"]),
            anon_key: env_first(&["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"]),
            service_role_key: env_first(&["SUPABASE_SERVICE_ROLE_KEY"]),
            spoonacular_key: env_first(&["SPOONACULAR_API_KEY"]),
            youtube_key: env_first(&["YOUTUBE_API_KEY"]),
            youtube_playlist: env_first(&["YOUTUBE_PLAYLIST_ID"]),
            gcp_service_account_json: env_first(&["GCP_SERVICE_ACCOUNT_JSON"]),
            gcp_project_id: env_first(&["GCP_PROJECT_ID"]),
        }
    }

    pub fn supabase_url(&self) -> Result<&str> {
        self.supabase_url
            .as_deref()
            .context("Missing SUPABASE_URL (or VITE_SUPABASE_URL) in environment or .env file")
    }

    /// Writes bypass row-level security, so they need the service-role key.
    pub fn service_key(&self) -> Result<&str> {
        self.service_role_key
            .as_deref()
            .context("Missing SUPABASE_SERVICE_ROLE_KEY in environment or .env file")
    }

    /// The key used for read-only access; the anon key is enough.
    pub fn api_key(&self) -> Result<&str> {
        self.service_role_key
            .as_deref()
            .or(self.anon_key.as_deref())
            .context(
                "Missing SUPABASE_SERVICE_ROLE_KEY (or SUPABASE_ANON_KEY) in environment or .env file",
            )
    }
}

fn env_first(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .filter(|v| !v.trim().is_empty())
}
