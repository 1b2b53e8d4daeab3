use super::helpers::{DEFAULT_CITY_ID, MockFaqStore, entry, in_memory_use_case};
use city_faq::{
    application::{
        errors::FaqError,
        manage_faqs::{
            dto::{CreateFaqRequest, UpdateFaqRequest},
            use_case::FaqUseCase,
        },
    },
    domain::shared::errors::DomainError,
};
use std::{error::Error, sync::Arc};
use uuid::Uuid;

#[tokio::test]
async fn add_faqs_creates_then_appends_for_the_same_city() {
    let (repo, faqs) = in_memory_use_case();

    let first = faqs
        .add_faqs(&[entry("Q1", "A1")], DEFAULT_CITY_ID)
        .await
        .expect("first merge failed");
    assert_eq!(first.city_id.to_string(), DEFAULT_CITY_ID);
    assert_eq!(first.faqs, vec![entry("Q1", "A1")]);

    let second = faqs
        .add_faqs(&[entry("Q2", "A2")], DEFAULT_CITY_ID)
        .await
        .expect("second merge failed");
    assert_eq!(second.id, first.id, "merge must reuse the city's document");
    assert_eq!(second.faqs, vec![entry("Q1", "A1"), entry("Q2", "A2")]);

    let by_city = faqs.get_faqs_by_city_id(DEFAULT_CITY_ID).await.unwrap();
    assert_eq!(by_city.len(), 1);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn add_faqs_keeps_call_order_across_batches() {
    let (_, faqs) = in_memory_use_case();
    let batch_a = [entry("a1", "x"), entry("a2", "x")];
    let batch_b = [entry("b1", "y"), entry("b2", "y"), entry("b3", "y")];

    faqs.add_faqs(&batch_a, DEFAULT_CITY_ID).await.unwrap();
    let merged = faqs.add_faqs(&batch_b, DEFAULT_CITY_ID).await.unwrap();

    let questions: Vec<&str> = merged.faqs.iter().map(|f| f.question.as_str()).collect();
    assert_eq!(questions, ["a1", "a2", "b1", "b2", "b3"]);
}

#[tokio::test]
async fn add_faqs_for_unseen_city_returns_the_new_document() {
    let (repo, faqs) = in_memory_use_case();
    let other_city = Uuid::now_v7();

    faqs.add_faqs(&[entry("Q1", "A1")], DEFAULT_CITY_ID)
        .await
        .unwrap();
    let created = faqs
        .add_faqs(&[entry("Z", "z")], &other_city.to_string())
        .await
        .unwrap();

    assert_eq!(created.city_id, other_city);
    assert_eq!(created.faqs, vec![entry("Z", "z")]);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn add_faqs_rejects_malformed_city_id_before_touching_store() {
    let store = MockFaqStore::new();
    let faqs = FaqUseCase::new(Arc::new(store));

    let err = faqs
        .add_faqs(&[entry("Q", "A")], "not-a-city")
        .await
        .unwrap_err();
    assert!(matches!(err, FaqError::InvalidIdentifier(_)));
}

#[tokio::test]
async fn add_faqs_wraps_store_failures_as_merge_error() {
    let mut store = MockFaqStore::new();
    store
        .expect_append_for_city()
        .returning(|_, _| Err(DomainError::InfrastructureError("connection reset".into())));
    let faqs = FaqUseCase::new(Arc::new(store));

    let err = faqs
        .add_faqs(&[entry("Q", "A")], DEFAULT_CITY_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, FaqError::Merge(_)));
    assert_eq!(err.to_string(), "Error adding or updating FAQs");
    assert!(
        err.source()
            .is_some_and(|s| s.to_string().contains("connection reset"))
    );
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let (_, faqs) = in_memory_use_case();
    let entries = vec![entry("Q1", "A1"), entry("Q2", "A2")];

    let created = faqs
        .create_faq(CreateFaqRequest {
            city_id: DEFAULT_CITY_ID.to_string(),
            faqs: entries.clone(),
        })
        .await
        .unwrap();
    assert_eq!(created.faqs, entries);

    let fetched = faqs
        .get_faq_by_id(&created.id.to_string())
        .await
        .unwrap()
        .expect("created document should be found");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_for_city_that_already_has_faqs_is_a_create_error() {
    let (_, faqs) = in_memory_use_case();
    faqs.add_faqs(&[entry("Q", "A")], DEFAULT_CITY_ID)
        .await
        .unwrap();

    let err = faqs
        .create_faq(CreateFaqRequest {
            city_id: DEFAULT_CITY_ID.to_string(),
            faqs: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FaqError::Create(DomainError::Conflict(_))));
}

#[tokio::test]
async fn get_all_lists_every_document() {
    let (_, faqs) = in_memory_use_case();
    faqs.add_faqs(&[entry("Q", "A")], DEFAULT_CITY_ID)
        .await
        .unwrap();
    faqs.add_faqs(&[entry("Q", "A")], &Uuid::now_v7().to_string())
        .await
        .unwrap();

    assert_eq!(faqs.get_all_faqs().await.unwrap().len(), 2);
}

#[tokio::test]
async fn get_by_missing_id_is_none() {
    let (_, faqs) = in_memory_use_case();
    let found = faqs.get_faq_by_id(&Uuid::now_v7().to_string()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn get_by_malformed_id_is_invalid_identifier() {
    let (_, faqs) = in_memory_use_case();
    let err = faqs.get_faq_by_id("42").await.unwrap_err();
    assert!(matches!(err, FaqError::InvalidIdentifier(_)));
}

#[tokio::test]
async fn fetch_failures_surface_as_fetch_error() {
    let mut store = MockFaqStore::new();
    store
        .expect_find_all()
        .returning(|| Err(DomainError::InfrastructureError("timeout".into())));
    let faqs = FaqUseCase::new(Arc::new(store));

    assert!(matches!(
        faqs.get_all_faqs().await,
        Err(FaqError::Fetch(_))
    ));
}

#[tokio::test]
async fn update_replaces_supplied_fields_only() {
    let (_, faqs) = in_memory_use_case();
    let doc = faqs
        .add_faqs(&[entry("Q1", "A1")], DEFAULT_CITY_ID)
        .await
        .unwrap();

    let updated = faqs
        .update_faq_by_id(
            &doc.id.to_string(),
            UpdateFaqRequest {
                city_id: None,
                faqs: Some(vec![entry("New", "Answer")]),
            },
        )
        .await
        .unwrap()
        .expect("document should exist");

    assert_eq!(updated.id, doc.id);
    assert_eq!(updated.city_id, doc.city_id);
    assert_eq!(updated.faqs, vec![entry("New", "Answer")]);
}

#[tokio::test]
async fn update_with_no_fields_returns_current_document() {
    let (_, faqs) = in_memory_use_case();
    let doc = faqs
        .add_faqs(&[entry("Q1", "A1")], DEFAULT_CITY_ID)
        .await
        .unwrap();

    let unchanged = faqs
        .update_faq_by_id(&doc.id.to_string(), UpdateFaqRequest::default())
        .await
        .unwrap();
    assert_eq!(unchanged, Some(doc));
}

#[tokio::test]
async fn update_missing_id_is_not_found_signal() {
    let (_, faqs) = in_memory_use_case();
    let result = faqs
        .update_faq_by_id(
            &Uuid::now_v7().to_string(),
            UpdateFaqRequest {
                city_id: None,
                faqs: Some(vec![]),
            },
        )
        .await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn update_with_malformed_city_id_is_rejected() {
    let (_, faqs) = in_memory_use_case();
    let err = faqs
        .update_faq_by_id(
            &Uuid::now_v7().to_string(),
            UpdateFaqRequest {
                city_id: Some("city-42".to_string()),
                faqs: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FaqError::InvalidIdentifier(_)));
}

#[tokio::test]
async fn delete_removes_document_and_is_idempotent() {
    let (repo, faqs) = in_memory_use_case();
    let doc = faqs
        .add_faqs(&[entry("Q", "A")], DEFAULT_CITY_ID)
        .await
        .unwrap();
    let id = doc.id.to_string();

    faqs.delete_faq_by_id(&id).await.expect("first delete failed");
    faqs.delete_faq_by_id(&id)
        .await
        .expect("deleting a missing document must be a no-op");
    assert_eq!(repo.len().await, 0);
}

#[tokio::test]
async fn delete_failures_surface_as_delete_error() {
    let mut store = MockFaqStore::new();
    store
        .expect_delete()
        .returning(|_| Err(DomainError::InfrastructureError("read only".into())));
    let faqs = FaqUseCase::new(Arc::new(store));

    let err = faqs
        .delete_faq_by_id(&Uuid::now_v7().to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, FaqError::Delete(_)));
}
