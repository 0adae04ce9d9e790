// src/articles/tests/db_tests.rs

use crate::articles::db;
use crate::articles::models::{ArticleChanges, NewArticle};
use crate::articles::slug::generate_slug;
use crate::common::migrations::test_pool;
use crate::common::now_timestamp;

fn draft(title: &str) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        slug: generate_slug(title),
        content: "Conteúdo do artigo.".to_string(),
        excerpt: None,
        category: "Brasileirão".to_string(),
        image_url: None,
        author_id: 1,
        author_name: Some("Redação".to_string()),
        status: "draft".to_string(),
        published_at: None,
    }
}

fn published(title: &str) -> NewArticle {
    NewArticle {
        status: "published".to_string(),
        published_at: Some(now_timestamp()),
        ..draft(title)
    }
}

#[tokio::test]
async fn test_create_draft_then_fetch_by_slug() {
    let pool = test_pool().await;

    let id = db::create_article(&pool, draft("Flamengo vence o Título!"))
        .await
        .unwrap();

    let article = db::get_article_by_slug(&pool, "flamengo-vence-o-titulo")
        .await
        .unwrap()
        .expect("article should be found by derived slug");

    assert_eq!(article.id, id);
    assert_eq!(article.status, "draft");
    assert!(article.published_at.is_none());
    assert_eq!(article.views, 0);
    assert_eq!(article.featured, 0);
}

#[tokio::test]
async fn test_create_published_sets_published_at_once() {
    let pool = test_pool().await;

    let id = db::create_article(&pool, published("Rodada decisiva"))
        .await
        .unwrap();

    let before = db::get_article_by_id(&pool, id).await.unwrap().unwrap();
    let stamp = before.published_at.clone();
    assert!(stamp.is_some());

    // A later update that still says published carries no new stamp, and
    // COALESCE keeps the stored one.
    db::update_article(
        &pool,
        id,
        ArticleChanges {
            content: Some("Texto revisado.".to_string()),
            status: Some("published".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let after = db::get_article_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(after.published_at, stamp);
    assert_eq!(after.content, "Texto revisado.");
}

#[tokio::test]
async fn test_update_regenerates_slug_with_title() {
    let pool = test_pool().await;

    let id = db::create_article(&pool, draft("Título antigo")).await.unwrap();

    let new_title = "Título novo e melhor";
    db::update_article(
        &pool,
        id,
        ArticleChanges {
            title: Some(new_title.to_string()),
            slug: Some(generate_slug(new_title)),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(db::get_article_by_slug(&pool, "titulo-antigo")
        .await
        .unwrap()
        .is_none());
    let article = db::get_article_by_slug(&pool, "titulo-novo-e-melhor")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(article.id, id);
    assert_eq!(article.title, new_title);
}

#[tokio::test]
async fn test_increment_views_twice_adds_two() {
    let pool = test_pool().await;

    let id = db::create_article(&pool, published("Jogo da semana")).await.unwrap();

    let before = db::get_article_by_id(&pool, id).await.unwrap().unwrap().views;

    db::increment_article_views(&pool, id).await.unwrap();
    db::increment_article_views(&pool, id).await.unwrap();

    let after = db::get_article_by_id(&pool, id).await.unwrap().unwrap().views;
    assert_eq!(after, before + 2);
}

#[tokio::test]
async fn test_published_list_excludes_drafts_and_orders_newest_first() {
    let pool = test_pool().await;

    db::create_article(&pool, draft("Rascunho escondido")).await.unwrap();

    let mut older = published("Notícia antiga");
    older.published_at = Some("2026-01-01 10:00:00".to_string());
    db::create_article(&pool, older).await.unwrap();

    let mut newer = published("Notícia recente");
    newer.published_at = Some("2026-02-01 10:00:00".to_string());
    db::create_article(&pool, newer).await.unwrap();

    let listed = db::get_published_articles(&pool, 20).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].slug, "noticia-recente");
    assert_eq!(listed[1].slug, "noticia-antiga");
}

#[tokio::test]
async fn test_published_list_respects_limit() {
    let pool = test_pool().await;

    for i in 0..5 {
        db::create_article(&pool, published(&format!("Notícia {}", i)))
            .await
            .unwrap();
    }

    let listed = db::get_published_articles(&pool, 3).await.unwrap();
    assert_eq!(listed.len(), 3);
}

#[tokio::test]
async fn test_get_all_articles_includes_drafts() {
    let pool = test_pool().await;

    db::create_article(&pool, draft("Rascunho")).await.unwrap();
    db::create_article(&pool, published("Publicado")).await.unwrap();

    let all = db::get_all_articles(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_delete_article_is_permanent() {
    let pool = test_pool().await;

    let id = db::create_article(&pool, draft("Para apagar")).await.unwrap();
    db::delete_article(&pool, id).await.unwrap();

    assert!(db::get_article_by_id(&pool, id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_slug_is_rejected_by_constraint() {
    let pool = test_pool().await;

    db::create_article(&pool, draft("Mesmo título")).await.unwrap();
    let err = db::create_article(&pool, draft("Mesmo título")).await;

    assert!(err.is_err(), "second insert with the same slug must fail");
}
