//! Loads and validates a profile TOML file

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use twin_domain::{DomainError, Profile};

/// Errors that can occur while loading a profile
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid profile {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

/// Profile loader
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load the profile at `path`, or the built-in one when `None`.
    pub fn load(path: Option<&Path>) -> Result<Profile, ProfileError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                debug!("No profile path configured, using built-in profile");
                Ok(Profile::default())
            }
        }
    }

    /// Load and validate a profile file
    pub fn load_file(path: &Path) -> Result<Profile, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let profile = Self::parse(&content).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        profile.validate().map_err(|source| ProfileError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), name = %profile.name, "Loaded profile");
        Ok(profile)
    }

    /// Parse profile TOML without validation
    pub fn parse(content: &str) -> Result<Profile, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
name = "Ada Lovelace"
role = "Analyst"
tagline = "Engines of thought"
summary = "Writes programs for machines that do not exist yet."
tone = "Curious and precise."

[contact]
email = "ada@example.com"

[[projects]]
name = "Note G"
description = "Bernoulli numbers on the Analytical Engine"
tags = ["Algorithms"]
featured = true
"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_none_uses_builtin() {
        let profile = ProfileLoader::load(None).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_load_minimal_profile() {
        let file = write_temp(MINIMAL);
        let profile = ProfileLoader::load(Some(file.path())).unwrap();

        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.first_name(), "Ada");
        assert_eq!(profile.brand(), "AL");
        assert_eq!(profile.featured_projects().count(), 1);
        assert!(profile.experience.is_empty());
        assert!(profile.greeting().starts_with("Hi! I'm Ada's AI Twin."));
        assert!(profile.greeting().contains("about their skills"));
    }

    #[test]
    fn test_missing_file() {
        let err = ProfileLoader::load_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ProfileError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_parse_error() {
        let file = write_temp("name = \"Ada\"\nrole = ");
        let err = ProfileLoader::load_file(file.path()).unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }));
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let file = write_temp("name = \"Ada\"\n");
        assert!(matches!(
            ProfileLoader::load_file(file.path()),
            Err(ProfileError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_profile() {
        let file = write_temp(&MINIMAL.replace("ada@example.com", " "));
        let err = ProfileLoader::load_file(file.path()).unwrap_err();
        assert!(matches!(err, ProfileError::Invalid { .. }));
    }
}
