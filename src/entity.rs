use std::fmt;

/// The HR record families the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EntityType {
    Contracts,
    Departments,
    Employees,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [
        EntityType::Contracts,
        EntityType::Departments,
        EntityType::Employees,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Contracts => "contracts",
            EntityType::Departments => "departments",
            EntityType::Employees => "employees",
        }
    }

    /// Index shown in the interactive menu.
    pub fn menu_index(&self) -> &'static str {
        match self {
            EntityType::Contracts => "1",
            EntityType::Departments => "2",
            EntityType::Employees => "3",
        }
    }

    pub fn from_menu_index(index: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.menu_index() == index)
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            EntityType::Contracts => "Fetch contracts",
            EntityType::Departments => "Fetch departments",
            EntityType::Employees => "Fetch employees",
        }
    }

    pub fn url_end_key(&self) -> String {
        format!("{}_api_url_end", self.as_str())
    }

    pub fn params_key(&self) -> String {
        format!("{}_params", self.as_str())
    }

    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_index_round_trips() {
        for entity in EntityType::ALL {
            assert_eq!(EntityType::from_menu_index(entity.menu_index()), Some(entity));
        }
        assert_eq!(EntityType::from_menu_index("0"), None);
        assert_eq!(EntityType::from_menu_index("4"), None);
        assert_eq!(EntityType::from_menu_index(""), None);
    }

    #[test]
    fn config_keys_follow_entity_name() {
        assert_eq!(EntityType::Contracts.url_end_key(), "contracts_api_url_end");
        assert_eq!(EntityType::Employees.params_key(), "employees_params");
        assert_eq!(EntityType::Departments.csv_file_name(), "departments.csv");
    }
}
