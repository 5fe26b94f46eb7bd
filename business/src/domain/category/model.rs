use super::errors::CategoryError;

/// A category as the backend materializes it. The identifier and creation
/// timestamp are backend-assigned; the timestamp format is owned by the
/// backend and carried opaquely for display.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

impl Category {
    /// Constructor for data returned by the remote API (no validation).
    pub fn from_remote(
        id: i64,
        name: String,
        description: Option<String>,
        created_at: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }
}

/// Write model for create and update calls. The backend assigns the
/// identifier and timestamp, so a draft never carries them.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryDraft {
    pub fn new(name: String, description: Option<String>) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        Ok(Self { name, description })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_draft_when_name_valid() {
        let result = CategoryDraft::new("Beverages".to_string(), Some("Drinks".to_string()));

        assert!(result.is_ok());
        let draft = result.unwrap();
        assert_eq!(draft.name, "Beverages");
        assert_eq!(draft.description.as_deref(), Some("Drinks"));
    }

    #[test]
    fn should_reject_draft_when_name_empty() {
        let result = CategoryDraft::new("".to_string(), None);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }

    #[test]
    fn should_reject_draft_when_name_only_whitespace() {
        let result = CategoryDraft::new("   ".to_string(), None);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }

    #[test]
    fn should_keep_remote_fields_verbatim() {
        let category = Category::from_remote(
            4,
            "Snacks".to_string(),
            None,
            Some("2024-03-01T09:30:00".to_string()),
        );

        assert_eq!(category.id, 4);
        assert_eq!(category.name, "Snacks");
        assert!(category.description.is_none());
        assert_eq!(category.created_at.as_deref(), Some("2024-03-01T09:30:00"));
    }
}
