// src/articles/validators.rs

use std::collections::HashSet;

use super::models::*;
use crate::common::{ValidationResult, Validator};

fn valid_statuses() -> HashSet<&'static str> {
    HashSet::from(["draft", "published"])
}

// ============================================================================
// Article Validators
// ============================================================================

pub struct ArticleValidator;

impl Validator<CreateArticle> for ArticleValidator {
    fn validate(&self, data: &CreateArticle) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Article title is required");
        } else if data.title.len() > 500 {
            result.add_error("title", "Article title must be less than 500 characters");
        }

        if data.content.trim().is_empty() {
            result.add_error("content", "Article content is required");
        }

        if data.category.trim().is_empty() {
            result.add_error("category", "Article category is required");
        } else if data.category.len() > 100 {
            result.add_error("category", "Category must be less than 100 characters");
        }

        if !valid_statuses().contains(data.status.as_str()) {
            result.add_error("status", "Status must be 'draft' or 'published'");
        }

        result
    }
}

impl Validator<UpdateArticle> for ArticleValidator {
    fn validate(&self, data: &UpdateArticle) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(title) = &data.title {
            if title.trim().is_empty() {
                result.add_error("title", "Article title cannot be empty");
            } else if title.len() > 500 {
                result.add_error("title", "Article title must be less than 500 characters");
            }
        }

        if let Some(content) = &data.content {
            if content.trim().is_empty() {
                result.add_error("content", "Article content cannot be empty");
            }
        }

        if let Some(category) = &data.category {
            if category.trim().is_empty() {
                result.add_error("category", "Article category cannot be empty");
            } else if category.len() > 100 {
                result.add_error("category", "Category must be less than 100 characters");
            }
        }

        if let Some(status) = &data.status {
            if !valid_statuses().contains(status.as_str()) {
                result.add_error("status", "Status must be 'draft' or 'published'");
            }
        }

        result
    }
}

// ============================================================================
// Content Generation Validators
// ============================================================================

pub struct ContentRequestValidator;

impl Validator<GenerateContentRequest> for ContentRequestValidator {
    fn validate(&self, data: &GenerateContentRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        } else if data.title.len() > 500 {
            result.add_error("title", "Title must be less than 500 characters");
        }

        if data.category.trim().is_empty() {
            result.add_error("category", "Category is required");
        }

        if let Some(keywords) = &data.keywords {
            if keywords.len() > 500 {
                result.add_error("keywords", "Keywords must be less than 500 characters");
            }
        }

        result
    }
}
