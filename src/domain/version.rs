use crate::error::{JsrKitError, Result};
use semver::Version;
use std::fmt;
use std::str::FromStr;

/// The version component to increment, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// All components, highest precedence first
    pub const ALL: [VersionBump; 3] = [VersionBump::Major, VersionBump::Minor, VersionBump::Patch];

    pub fn name(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }

    /// Comma separated list of accepted argument values
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(VersionBump::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn position(&self) -> usize {
        *self as usize
    }

    fn field_mut<'a>(&self, version: &'a mut Version) -> &'a mut u64 {
        match self {
            VersionBump::Major => &mut version.major,
            VersionBump::Minor => &mut version.minor,
            VersionBump::Patch => &mut version.patch,
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VersionBump {
    type Err = JsrKitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|bump| bump.name() == s)
            .ok_or_else(|| {
                JsrKitError::usage(format!(
                    "Invalid argument \"{}\". Please use one of {}",
                    s,
                    Self::choices()
                ))
            })
    }
}

/// Parses a manifest version string, falling back to `0.0.0`.
pub fn parse_or_zero(version: Option<&str>) -> Version {
    version
        .and_then(|v| Version::parse(v).ok())
        .unwrap_or_else(|| Version::new(0, 0, 0))
}

/// Bumps a version according to the specified bump type.
///
/// The selected component is incremented by one, every component of lower
/// precedence is reset to 0, and prerelease and build metadata are dropped.
/// Incrementing a component already at `u64::MAX` is a [`JsrKitError::Version`].
///
/// # Example
/// ```
/// use jsr_kit::domain::{bump_version, VersionBump};
/// use semver::Version;
///
/// let v = Version::parse("1.2.3-rc.1").unwrap();
/// assert_eq!(bump_version(&v, VersionBump::Minor).unwrap().to_string(), "1.3.0");
/// ```
pub fn bump_version(version: &Version, bump: VersionBump) -> Result<Version> {
    let mut next = Version::new(version.major, version.minor, version.patch);
    let field = bump.field_mut(&mut next);
    *field = field.checked_add(1).ok_or_else(|| {
        JsrKitError::version(format!(
            "cannot increment the {} component of {}: already at its maximum",
            bump, version
        ))
    })?;
    for lower in &VersionBump::ALL[bump.position() + 1..] {
        *lower.field_mut(&mut next) = 0;
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump(version: &str, bump: VersionBump) -> String {
        bump_version(&Version::parse(version).unwrap(), bump)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_version_bump_major() {
        assert_eq!(bump("1.2.3", VersionBump::Major), "2.0.0");
    }

    #[test]
    fn test_version_bump_minor() {
        assert_eq!(bump("1.2.3", VersionBump::Minor), "1.3.0");
    }

    #[test]
    fn test_version_bump_patch() {
        assert_eq!(bump("1.2.3", VersionBump::Patch), "1.2.4");
    }

    #[test]
    fn test_bump_drops_prerelease_and_build() {
        assert_eq!(bump("1.0.0-beta+001", VersionBump::Patch), "1.0.1");
        assert_eq!(bump("2.1.0-rc.3", VersionBump::Major), "3.0.0");
    }

    #[test]
    fn test_parse_or_zero_fallbacks() {
        assert_eq!(parse_or_zero(None), Version::new(0, 0, 0));
        assert_eq!(parse_or_zero(Some("not-a-version")), Version::new(0, 0, 0));
        assert_eq!(parse_or_zero(Some("v1.2.3")), Version::new(0, 0, 0));
        assert_eq!(parse_or_zero(Some("1.2.3")), Version::new(1, 2, 3));
    }

    #[test]
    fn test_zero_base_bumps() {
        let zero = parse_or_zero(None);
        assert_eq!(bump_version(&zero, VersionBump::Major).unwrap(), Version::new(1, 0, 0));
        assert_eq!(bump_version(&zero, VersionBump::Minor).unwrap(), Version::new(0, 1, 0));
        assert_eq!(bump_version(&zero, VersionBump::Patch).unwrap(), Version::new(0, 0, 1));
    }

    #[test]
    fn test_bump_at_maximum_is_an_error() {
        let top = parse_or_zero(Some("18446744073709551615.0.0"));
        assert_eq!(top.major, u64::MAX);

        let err = bump_version(&top, VersionBump::Major).unwrap_err();
        assert!(matches!(err, JsrKitError::Version(_)));
        assert!(err.to_string().contains("major"));

        // lower components still have room
        assert_eq!(
            bump_version(&top, VersionBump::Minor).unwrap(),
            Version::new(u64::MAX, 1, 0)
        );
        let max_patch = Version::new(1, 2, u64::MAX);
        assert!(bump_version(&max_patch, VersionBump::Patch).is_err());
        assert_eq!(bump_version(&max_patch, VersionBump::Minor).unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_bump_from_str() {
        assert_eq!("major".parse::<VersionBump>().unwrap(), VersionBump::Major);
        assert_eq!("patch".parse::<VersionBump>().unwrap(), VersionBump::Patch);
    }

    #[test]
    fn test_bump_from_str_rejects_typos() {
        let err = "minr".parse::<VersionBump>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"minr\""));
        assert!(msg.contains("major, minor, patch"));
        assert!("Major".parse::<VersionBump>().is_err());
        assert!("".parse::<VersionBump>().is_err());
    }
}
