use crate::shared::error::GraphError;
use std::fmt;
use std::str::FromStr;

/// Server-side dataset variant, selected by an integer id on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Arch,
    Debian,
    Gentoo,
    Homebrew,
    Nix,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Arch,
        View::Debian,
        View::Gentoo,
        View::Homebrew,
        View::Nix,
    ];

    /// Integer id sent as the `view` query parameter
    pub fn id(self) -> u8 {
        match self {
            View::Arch => 1,
            View::Debian => 2,
            View::Gentoo => 3,
            View::Homebrew => 4,
            View::Nix => 5,
        }
    }

    /// Name of the dataset table the server reads for this view
    pub fn dataset_name(self) -> &'static str {
        match self {
            View::Arch => "draw_arch",
            View::Debian => "draw_debian",
            View::Gentoo => "draw_gentoo",
            View::Homebrew => "draw_homebrew",
            View::Nix => "draw_nix",
        }
    }

    pub fn short_name(self) -> &'static str {
        &self.dataset_name()["draw_".len()..]
    }

    pub fn from_id(id: i64) -> Result<Self, GraphError> {
        Self::ALL
            .into_iter()
            .find(|view| i64::from(view.id()) == id)
            .ok_or_else(|| GraphError::InvalidView {
                value: id.to_string(),
            })
    }
}

impl FromStr for View {
    type Err = GraphError;

    /// Accepts the integer id (`"3"`), the short name (`"gentoo"`) or the
    /// dataset name (`"draw_gentoo"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Self::from_id(id);
        }

        let lowered = trimmed.to_lowercase();
        let name = lowered.strip_prefix("draw_").unwrap_or(&lowered);
        Self::ALL
            .into_iter()
            .find(|view| view.short_name() == name)
            .ok_or_else(|| GraphError::InvalidView {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dataset_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_ids_are_one_based_and_ordered() {
        let ids: Vec<u8> = View::ALL.iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_view_default_is_arch() {
        assert_eq!(View::default(), View::Arch);
        assert_eq!(View::default().dataset_name(), "draw_arch");
    }

    #[test]
    fn test_view_from_str_numeric() {
        assert_eq!(View::from_str("1").unwrap(), View::Arch);
        assert_eq!(View::from_str("5").unwrap(), View::Nix);
        assert_eq!(View::from_str(" 3 ").unwrap(), View::Gentoo);
    }

    #[test]
    fn test_view_from_str_names() {
        assert_eq!(View::from_str("debian").unwrap(), View::Debian);
        assert_eq!(View::from_str("HOMEBREW").unwrap(), View::Homebrew);
        assert_eq!(View::from_str("draw_nix").unwrap(), View::Nix);
    }

    #[test]
    fn test_view_from_str_out_of_range() {
        assert!(View::from_str("0").is_err());
        assert!(View::from_str("6").is_err());
        assert!(View::from_str("-1").is_err());
    }

    #[test]
    fn test_view_from_str_unknown_name() {
        let err = View::from_str("fedora").unwrap_err();
        assert!(err.to_string().contains("Invalid view: fedora"));
    }

    #[test]
    fn test_view_short_name() {
        assert_eq!(View::Homebrew.short_name(), "homebrew");
    }

    #[test]
    fn test_view_display() {
        assert_eq!(View::Gentoo.to_string(), "draw_gentoo");
    }
}
