use web_sys::window;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Artwork rotated in the branding panel of the auth screens.
pub const BRAND_IMAGES: &[&str] = &[
    "/images/brand/secure-1.jpg",
    "/images/brand/secure-2.jpg",
    "/images/brand/secure-3.jpg",
];

pub fn get_api_base_url() -> String {
    // Build-time override, e.g. `API_BASE_URL=https://api.example.com trunk build`
    if let Some(url) = option_env!("API_BASE_URL") {
        return url.trim_end_matches('/').to_string();
    }

    if let Some(window) = window() {
        if let Ok(host) = window.location().hostname() {
            if host != "localhost" && host != "127.0.0.1" {
                // Deployed behind the same origin as the API
                return String::new();
            }
        }
    }

    DEFAULT_API_BASE_URL.to_string()
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_api_base_url(), path)
}
