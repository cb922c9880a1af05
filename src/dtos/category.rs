use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::category::{Category, NewCategory, UpdateCategory};
use crate::validation::{self, Validate, CATEGORY_NAME_MAX};

#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Validate for CreateCategoryRequest {
    type Command = NewCategory;

    fn validate(self) -> Result<NewCategory, Vec<String>> {
        let violations = validation::required_name(self.name.as_deref(), "Category", CATEGORY_NAME_MAX);
        match self.name {
            Some(name) if violations.is_empty() => Ok(NewCategory {
                name: name.trim().to_string(),
                description: self.description,
            }),
            _ => Err(violations),
        }
    }
}

impl Validate for UpdateCategoryRequest {
    type Command = UpdateCategory;

    fn validate(self) -> Result<UpdateCategory, Vec<String>> {
        let violations = validation::optional_name(self.name.as_deref(), "Category", CATEGORY_NAME_MAX);
        if !violations.is_empty() {
            return Err(violations);
        }
        Ok(UpdateCategory {
            name: self.name.map(|n| n.trim().to_string()),
            description: self.description,
        })
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_trims_the_name() {
        let req = CreateCategoryRequest {
            name: Some("  Eletrônicos ".into()),
            description: Some("Gadgets".into()),
        };
        let cmd = req.validate().unwrap();
        assert_eq!(cmd.name, "Eletrônicos");
        assert_eq!(cmd.description.as_deref(), Some("Gadgets"));
    }

    #[test]
    fn create_requires_a_name() {
        let errors = CreateCategoryRequest::default().validate().unwrap_err();
        assert_eq!(errors, vec!["Category name is required"]);
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        let cmd = UpdateCategoryRequest::default().validate().unwrap();
        assert_eq!(cmd, UpdateCategory::default());
    }

    #[test]
    fn update_rejects_explicit_blank_name() {
        let req = UpdateCategoryRequest { name: Some(" ".into()), description: None };
        assert_eq!(req.validate().unwrap_err(), vec!["Category name cannot be empty"]);
    }
}
