use clap::ValueEnum;

pub const DEFAULT_ADMIN_NAME: &str = "admin";
pub const ADMIN_ENV: &str = "BROWSE_HISTORY_ADMIN";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Menus, prompts and colored messages
    Text,
    /// One JSON object per outcome, no menus or prompts
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub color: bool,
    pub format: OutputFormat,
    pub admin_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            admin_name: DEFAULT_ADMIN_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            color: var(NO_COLOR_ENV).is_none(),
            admin_name: var(ADMIN_ENV)
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.admin_name),
            ..defaults
        }
    }

    /// Colors only make sense for the text format.
    pub fn use_color(&self) -> bool {
        self.color && self.format == OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides() {
        let settings = Settings::from_vars(|key| match key {
            NO_COLOR_ENV => Some("1".to_string()),
            ADMIN_ENV => Some("root".to_string()),
            _ => None,
        });

        assert!(!settings.color);
        assert_eq!(settings.admin_name, "root");
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_blank_admin_falls_back_to_default() {
        let settings = Settings::from_vars(|key| match key {
            ADMIN_ENV => Some(" ".to_string()),
            _ => None,
        });

        assert!(settings.color);
        assert_eq!(settings.admin_name, DEFAULT_ADMIN_NAME);
    }

    #[test]
    fn test_json_never_uses_color() {
        let settings = Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        };

        assert!(!settings.use_color());
    }
}
