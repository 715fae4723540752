use serde::{Deserialize, Serialize};

/// Status of a party record (vendor, agent, customer)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
}

impl ActiveStatus {
    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Inactive => "inactive",
        }
    }

    /// Label shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "সক্রিয়",
            ActiveStatus::Inactive => "নিষ্ক্রিয়",
        }
    }

    pub fn all() -> Vec<ActiveStatus> {
        vec![ActiveStatus::Active, ActiveStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "active" => Some(ActiveStatus::Active),
            "inactive" => Some(ActiveStatus::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActiveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for status in ActiveStatus::all() {
            assert_eq!(ActiveStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ActiveStatus::from_code("deleted"), None);
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&ActiveStatus::Inactive).unwrap(), "\"inactive\"");
    }
}
