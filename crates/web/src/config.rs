use anyhow::{Context, Result, bail};
use storage::services::DateFormatter;

const PLACEHOLDER_MARKER: &str = "PASTE_";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub display_locale: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Cannot load DATABASE_URL env variable")?;
        if database_url.contains(PLACEHOLDER_MARKER) {
            bail!("DATABASE_URL still holds a placeholder value");
        }

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url,
            display_locale: resolve_locale_name([
                std::env::var("DISPLAY_LOCALE").ok(),
                std::env::var("LC_ALL").ok(),
                std::env::var("LANG").ok(),
            ]),
        })
    }

    /// Formatter for the configured locale, `en_US` when unset or unknown.
    pub fn date_formatter(&self) -> DateFormatter {
        let Some(name) = self.display_locale.as_deref() else {
            return DateFormatter::default();
        };

        DateFormatter::from_locale_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown display locale '{}', using en_US", name);
            DateFormatter::default()
        })
    }
}

/// First candidate naming a real locale. `C` and `POSIX` carry no date
/// conventions and are skipped.
fn resolve_locale_name<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|name| name.trim().to_string())
        .find(|name| {
            let base = name.split('.').next().unwrap_or_default();
            !base.is_empty() && base != "C" && base != "POSIX"
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(display_locale: Option<&str>) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "postgres://localhost/fitness".to_string(),
            display_locale: display_locale.map(String::from),
        }
    }

    #[test]
    fn test_resolve_prefers_first_candidate() {
        let name = resolve_locale_name([
            Some("de_DE.UTF-8".to_string()),
            Some("fr_FR.UTF-8".to_string()),
        ]);
        assert_eq!(name.as_deref(), Some("de_DE.UTF-8"));
    }

    #[test]
    fn test_resolve_skips_posix_and_blank() {
        let name = resolve_locale_name([
            None,
            Some("C.UTF-8".to_string()),
            Some("  ".to_string()),
            Some("en_GB.UTF-8".to_string()),
        ]);
        assert_eq!(name.as_deref(), Some("en_GB.UTF-8"));
    }

    #[test]
    fn test_resolve_nothing() {
        assert_eq!(resolve_locale_name([None, Some("POSIX".to_string())]), None);
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let formatter = config(Some("xx_XX")).date_formatter();
        assert_eq!(formatter.format_str("2024-03-05"), "Mar 5, 2024");
    }

    #[test]
    fn test_configured_locale_is_used() {
        let formatter = config(Some("en_GB.UTF-8")).date_formatter();
        assert_eq!(formatter.format_str("2024-03-05"), "5 Mar 2024");
    }
}
