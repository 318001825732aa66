use crate::error::Result;
use std::path::PathBuf;

pub const DEFAULT_LOADER_REQUEST: &str = "weave-loader";

/// Process-level settings that do not come from per-request options.
#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// Production environment; disables hot reload like a minified build.
    pub production: bool,
    /// Base for the stable module ids handed to the instrumentor.
    pub working_dir: PathBuf,
    /// How synthesized imports name this loader to the host resolver.
    pub loader_request: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            production: false,
            working_dir: PathBuf::from("."),
            loader_request: DEFAULT_LOADER_REQUEST.to_string(),
        }
    }
}

impl LoaderSettings {
    /// Read `NODE_ENV` and the current directory.
    pub fn from_env() -> Result<Self> {
        let production = std::env::var("NODE_ENV").is_ok_and(|env| env == "production");
        Ok(Self {
            production,
            working_dir: std::env::current_dir()?,
            ..Self::default()
        })
    }

    pub fn with_loader_request(mut self, request: impl Into<String>) -> Self {
        self.loader_request = request.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_uses_current_dir() {
        let settings = LoaderSettings::from_env().unwrap();
        assert_eq!(settings.working_dir, std::env::current_dir().unwrap());
        assert_eq!(settings.loader_request, DEFAULT_LOADER_REQUEST);
    }

    #[test]
    fn test_custom_loader_request() {
        let settings = LoaderSettings::default().with_loader_request("@acme/weave");
        assert_eq!(settings.loader_request, "@acme/weave");
        assert!(!settings.production);
    }
}
