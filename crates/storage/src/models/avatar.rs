use serde::Serialize;
use utoipa::ToSchema;

/// What to show in a user's avatar slot: their photo when they have one,
/// otherwise initials derived from their display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Avatar {
    Photo { url: String },
    Initials { text: String },
}

impl Avatar {
    pub fn new(name: Option<&str>, photo_url: Option<&str>) -> Self {
        match photo_url.filter(|url| !url.is_empty()) {
            Some(url) => Self::Photo {
                url: url.to_string(),
            },
            None => Self::Initials {
                text: initials(name),
            },
        }
    }
}

/// First letter of each whitespace-separated name token, cut to two
/// characters, then uppercased. A missing or blank name yields `"?"`.
///
/// ```
/// use storage::models::initials;
///
/// assert_eq!(initials(Some("ada king lovelace")), "AK");
/// assert_eq!(initials(None), "?");
/// ```
pub fn initials(name: Option<&str>) -> String {
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return "?".to_string(),
    };

    let leading: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();

    leading.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_tokens() {
        assert_eq!(initials(Some("grace hopper")), "GH");
    }

    #[test]
    fn test_initials_truncated_to_two() {
        assert_eq!(initials(Some("Mary Ann Evans")), "MA");
    }

    #[test]
    fn test_initials_single_token() {
        assert_eq!(initials(Some("linus")), "L");
    }

    #[test]
    fn test_initials_ignores_repeated_whitespace() {
        assert_eq!(initials(Some("  alan   turing ")), "AT");
    }

    #[test]
    fn test_initials_missing_name() {
        assert_eq!(initials(None), "?");
        assert_eq!(initials(Some("")), "?");
        assert_eq!(initials(Some("   ")), "?");
    }

    #[test]
    fn test_avatar_prefers_photo() {
        let avatar = Avatar::new(Some("Grace Hopper"), Some("https://cdn.test/g.png"));
        assert_eq!(
            avatar,
            Avatar::Photo {
                url: "https://cdn.test/g.png".to_string()
            }
        );
    }

    #[test]
    fn test_avatar_empty_photo_falls_back_to_initials() {
        let avatar = Avatar::new(Some("Grace Hopper"), Some(""));
        assert_eq!(
            avatar,
            Avatar::Initials {
                text: "GH".to_string()
            }
        );
    }
}
