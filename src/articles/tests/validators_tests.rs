// src/articles/tests/validators_tests.rs

use crate::articles::models::*;
use crate::articles::validators::*;
use crate::common::Validator;

fn valid_create() -> CreateArticle {
    CreateArticle {
        title: "Flamengo vence o clássico".to_string(),
        content: "Análise completa da partida.".to_string(),
        excerpt: None,
        category: "Brasileirão".to_string(),
        image_url: None,
        status: "draft".to_string(),
    }
}

#[test]
fn test_create_validator_accepts_valid_data() {
    let result = ArticleValidator.validate(&valid_create());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_create_validator_rejects_empty_title() {
    let mut data = valid_create();
    data.title = "   ".to_string();

    let result = ArticleValidator.validate(&data);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "title"));
}

#[test]
fn test_create_validator_rejects_missing_content_and_category() {
    let mut data = valid_create();
    data.content = String::new();
    data.category = String::new();

    let result = ArticleValidator.validate(&data);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "content"));
    assert!(result.errors.iter().any(|e| e.field == "category"));
}

#[test]
fn test_create_validator_rejects_unknown_status() {
    let mut data = valid_create();
    data.status = "archived".to_string();

    let result = ArticleValidator.validate(&data);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "status"));
}

#[test]
fn test_create_validator_rejects_oversized_title() {
    let mut data = valid_create();
    data.title = "t".repeat(501);

    let result = ArticleValidator.validate(&data);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "title"));
}

#[test]
fn test_update_validator_accepts_empty_change_set() {
    let data = UpdateArticle {
        title: None,
        content: None,
        excerpt: None,
        category: None,
        image_url: None,
        status: None,
    };

    let result = ArticleValidator.validate(&data);
    assert!(result.is_valid);
}

#[test]
fn test_update_validator_rejects_blank_title() {
    let data = UpdateArticle {
        title: Some("  ".to_string()),
        content: None,
        excerpt: None,
        category: None,
        image_url: None,
        status: None,
    };

    let result = ArticleValidator.validate(&data);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "title"));
}

#[test]
fn test_content_request_validator() {
    let valid = GenerateContentRequest {
        title: "Mercado da bola".to_string(),
        category: "Transferências".to_string(),
        keywords: Some("janela, contratações".to_string()),
    };
    assert!(ContentRequestValidator.validate(&valid).is_valid);

    let invalid = GenerateContentRequest {
        title: String::new(),
        category: String::new(),
        keywords: None,
    };
    let result = ContentRequestValidator.validate(&invalid);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "title"));
    assert!(result.errors.iter().any(|e| e.field == "category"));
}
