use serde::Serialize;
use std::fmt;

/// The console screens served by the refresh pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Dashboard,
    Monitoring,
    Inventory,
    Access,
    Orders,
    Employees,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 6] = [
        ScreenKind::Dashboard,
        ScreenKind::Monitoring,
        ScreenKind::Inventory,
        ScreenKind::Access,
        ScreenKind::Orders,
        ScreenKind::Employees,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Dashboard => "dashboard",
            ScreenKind::Monitoring => "monitoring",
            ScreenKind::Inventory => "inventory",
            ScreenKind::Access => "access",
            ScreenKind::Orders => "orders",
            ScreenKind::Employees => "employees",
        }
    }
}

impl std::str::FromStr for ScreenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ScreenKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid screen: {}. Please specify one of: {}",
                    s,
                    ScreenKind::ALL.map(|k| k.as_str()).join(", ")
                )
            })
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_screen_kind_from_str() {
        assert_eq!(ScreenKind::from_str("inventory").unwrap(), ScreenKind::Inventory);
        assert_eq!(ScreenKind::from_str(" Orders ").unwrap(), ScreenKind::Orders);
    }

    #[test]
    fn test_screen_kind_from_str_invalid_lists_choices() {
        let error = ScreenKind::from_str("reports").unwrap_err();
        assert!(error.contains("Invalid screen: reports"));
        assert!(error.contains("dashboard, monitoring"));
    }

    #[test]
    fn test_every_screen_parses_its_own_name() {
        for kind in ScreenKind::ALL {
            assert_eq!(ScreenKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }
}
