use serde::{Deserialize, Serialize};

/// Integration providers supported by the settings surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "vercel")]
    Vercel,
    #[serde(rename = "github")]
    GitHub,
}

impl ProviderKind {
    /// Stable wire code of the provider
    pub fn code(&self) -> &'static str {
        match self {
            ProviderKind::Vercel => "vercel",
            ProviderKind::GitHub => "github",
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Vercel => "Vercel",
            ProviderKind::GitHub => "GitHub",
        }
    }

    pub fn all() -> Vec<ProviderKind> {
        vec![ProviderKind::Vercel, ProviderKind::GitHub]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vercel" => Some(ProviderKind::Vercel),
            "github" => Some(ProviderKind::GitHub),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for kind in ProviderKind::all() {
            assert_eq!(ProviderKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ProviderKind::from_code("gitlab"), None);
    }

    #[test]
    fn test_serde_uses_wire_code() {
        assert_eq!(
            serde_json::to_string(&ProviderKind::GitHub).unwrap(),
            "\"github\""
        );
        let parsed: ProviderKind = serde_json::from_str("\"vercel\"").unwrap();
        assert_eq!(parsed, ProviderKind::Vercel);
    }
}
