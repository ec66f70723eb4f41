//! Integration tests for the settings form lifecycle

use crossref_settings::contract::*;
use crossref_settings::domain::link::DOI_PLUGIN;
use crossref_settings::domain::{
    form_field_types, is_optional, CrossrefSettingsForm, FormLifecycle, FormState, PubIdPlugins,
    RequestMethod, SettingsStore, Submission, SubmissionResult,
};
use crossref_settings::infra::InMemorySettingsStore;
use std::collections::HashMap;
use std::sync::Arc;

mod common;
use common::{csrf, csrf_token, seed, submission, valid_params, FailingStore};

fn form(store: Arc<dyn SettingsStore>, context_id: ContextId) -> CrossrefSettingsForm {
    CrossrefSettingsForm::new(PluginHandle::crossref(), context_id, store, csrf())
}

fn stored_values() -> Vec<(&'static str, FieldValue)> {
    vec![
        ("depositorName", FieldValue::text("A")),
        ("depositorEmail", FieldValue::text("a@b.com")),
        ("username", FieldValue::text("u")),
        ("password", FieldValue::text("p")),
        ("automaticRegistration", FieldValue::Bool(true)),
        ("testMode", FieldValue::Bool(false)),
    ]
}

#[test]
fn test_form_fields_and_optional_flags() {
    let fields: HashMap<_, _> = form_field_types().into_iter().collect();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields["depositorName"], FieldKind::String);
    assert_eq!(fields["depositorEmail"], FieldKind::String);
    assert_eq!(fields["username"], FieldKind::String);
    assert_eq!(fields["password"], FieldKind::String);
    assert_eq!(fields["automaticRegistration"], FieldKind::Bool);
    assert_eq!(fields["testMode"], FieldKind::Bool);

    for name in fields.keys() {
        let expected = !matches!(*name, "depositorName" | "depositorEmail");
        assert_eq!(is_optional(name), expected, "optional flag of {}", name);
    }
}

#[tokio::test]
async fn test_init_data_round_trip() {
    let store = InMemorySettingsStore::new();
    seed(&store, 7, &stored_values()).await;

    let mut form = form(Arc::new(store), 7);
    form.populate().await.unwrap();

    assert_eq!(form.state(), FormState::Populated);
    assert_eq!(form.values(), stored_values());
    assert_eq!(
        form.settings(),
        CrossrefSettings {
            depositor_name: "A".to_string(),
            depositor_email: "a@b.com".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
            automatic_registration: true,
            test_mode: false,
        }
    );
}

#[tokio::test]
async fn test_init_data_without_stored_values_uses_defaults() {
    let mut form = form(Arc::new(InMemorySettingsStore::new()), 3);
    form.init_data().await.unwrap();

    assert_eq!(form.value("depositorName"), Some(&FieldValue::text("")));
    assert_eq!(form.value("automaticRegistration"), Some(&FieldValue::Bool(false)));
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn test_init_data_reads_other_context_in_isolation() {
    let store = InMemorySettingsStore::new();
    seed(&store, 7, &stored_values()).await;

    let mut form = form(Arc::new(store), 8);
    form.init_data().await.unwrap();
    assert_eq!(form.settings(), CrossrefSettings::default());
}

#[tokio::test]
async fn test_missing_depositor_email_rejected() {
    let store = InMemorySettingsStore::new();
    seed(&store, 9, &stored_values()).await;
    let before = store.snapshot(9);

    let mut form = form(Arc::new(store.clone()), 9);
    let err = form
        .submit(&submission(9, &[("depositorName", "B")]))
        .await
        .unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert!(errors.has(Some("depositorEmail"), ValidationErrorKind::Required));
    assert_eq!(errors.for_field("depositorEmail").count(), 1);
    assert_eq!(form.state(), FormState::Invalid);
    assert_eq!(store.snapshot(9), before);
}

#[tokio::test]
async fn test_malformed_email_rejected() {
    let store = Arc::new(InMemorySettingsStore::new());
    let mut form = form(store.clone(), 9);

    let err = form
        .submit(&submission(
            9,
            &[("depositorName", "B"), ("depositorEmail", "not-an-email")],
        ))
        .await
        .unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert!(errors.has(Some("depositorEmail"), ValidationErrorKind::InvalidEmail));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_valid_submission_persists_all_fields() {
    let store = InMemorySettingsStore::new();
    let mut form = form(Arc::new(store.clone()), 9);

    let notification = form.submit(&submission(9, &valid_params())).await.unwrap();
    assert_eq!(notification.context_id, 9);
    assert_eq!(form.state(), FormState::Complete);

    let expected = [
        ("depositorName", FieldValue::text("B")),
        ("depositorEmail", FieldValue::text("b@c.com")),
        ("username", FieldValue::text("")),
        ("password", FieldValue::text("")),
        ("automaticRegistration", FieldValue::Bool(false)),
        ("testMode", FieldValue::Bool(true)),
    ];
    for (key, value) in expected {
        assert_eq!(store.get(9, key).await.unwrap(), Some(value), "stored {}", key);
    }
    assert_eq!(store.len(), 6);
}

#[tokio::test]
async fn test_submitted_text_is_trimmed_before_storing() {
    let store = InMemorySettingsStore::new();
    let service = common::service(Arc::new(store.clone()), None);

    let result = service
        .submit(
            9,
            &submission(
                9,
                &[("depositorName", "  B "), ("depositorEmail", "  b@c.com  "), ("username", " u ")],
            ),
        )
        .await
        .unwrap();
    assert!(matches!(result, SubmissionResult::Saved { .. }));

    assert_eq!(store.get(9, "depositorName").await.unwrap(), Some(FieldValue::text("B")));
    assert_eq!(
        store.get(9, "depositorEmail").await.unwrap(),
        Some(FieldValue::text("b@c.com"))
    );
    assert_eq!(store.get(9, "username").await.unwrap(), Some(FieldValue::text("u")));
}

#[tokio::test]
async fn test_blank_required_field_rejected_after_trimming() {
    let store = InMemorySettingsStore::new();
    let mut form = form(Arc::new(store.clone()), 9);

    let err = form
        .submit(&submission(9, &[("depositorName", "   "), ("depositorEmail", "b@c.com")]))
        .await
        .unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert!(errors.has(Some("depositorName"), ValidationErrorKind::Required));
    assert_eq!(form.value("depositorName"), Some(&FieldValue::text("")));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_unknown_submitted_keys_are_ignored() {
    let store = InMemorySettingsStore::new();
    let mut params = valid_params();
    params.push(("journalTitle", "Injected"));
    params.push(("isAdmin", "1"));

    let mut form = form(Arc::new(store.clone()), 4);
    form.submit(&submission(4, &params)).await.unwrap();

    assert!(store.get(4, "journalTitle").await.unwrap().is_none());
    assert!(store.get(4, "isAdmin").await.unwrap().is_none());
    assert_eq!(store.snapshot(4).len(), 6);
}

#[tokio::test]
async fn test_wrong_csrf_token_rejected() {
    let store = Arc::new(InMemorySettingsStore::new());
    let mut form = form(store.clone(), 5);

    let forged = Submission::post(valid_params()).with_csrf_token(csrf_token(6));
    let err = form.submit(&forged).await.unwrap_err();
    assert!(err
        .validation_errors()
        .unwrap()
        .has(None, ValidationErrorKind::InvalidCsrf));

    let missing = Submission::post(valid_params());
    let err = form.submit(&missing).await.unwrap_err();
    assert!(err
        .validation_errors()
        .unwrap()
        .has(None, ValidationErrorKind::InvalidCsrf));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_non_post_submission_rejected() {
    let store = Arc::new(InMemorySettingsStore::new());
    let mut form = form(store.clone(), 5);

    let get = Submission::new(RequestMethod::Get, valid_params()).with_csrf_token(csrf_token(5));
    let err = form.submit(&get).await.unwrap_err();

    let errors = err.validation_errors().unwrap();
    assert!(errors.has(None, ValidationErrorKind::NotPost));
    assert!(!errors.has(None, ValidationErrorKind::InvalidCsrf));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_invalid_form_can_be_resubmitted() {
    let store = InMemorySettingsStore::new();
    let mut form = form(Arc::new(store.clone()), 2);

    assert!(form
        .submit(&submission(2, &[("depositorEmail", "b@c.com")]))
        .await
        .is_err());
    assert!(!form.errors().is_empty());

    form.submit(&submission(2, &valid_params())).await.unwrap();
    assert_eq!(form.state(), FormState::Complete);
    assert!(form.errors().is_empty());
    assert_eq!(store.get(2, "depositorName").await.unwrap(), Some(FieldValue::text("B")));
}

#[tokio::test]
async fn test_persistence_failure_leaves_store_unchanged() {
    let store = FailingStore::default();
    seed(&store.inner, 9, &stored_values()).await;
    let before = store.inner.snapshot(9);

    let mut form = form(Arc::new(store.clone()), 9);
    let err = form.submit(&submission(9, &valid_params())).await.unwrap_err();

    assert!(matches!(err, SettingsFormError::Persistence { context_id: 9, .. }));
    assert_eq!(form.state(), FormState::Valid);
    assert_eq!(store.inner.snapshot(9), before);
}

#[tokio::test]
async fn test_doi_settings_link_staged_only_when_plugin_active() {
    let store: Arc<dyn SettingsStore> = Arc::new(InMemorySettingsStore::new());

    let without = common::service(store.clone(), None).display(1).await.unwrap();
    assert!(without.doi_plugin_settings_link_action.is_none());

    let inactive = common::service(store.clone(), Some(PubIdPlugins::new(["urnpubidplugin"])))
        .display(1)
        .await
        .unwrap();
    assert!(inactive.doi_plugin_settings_link_action.is_none());

    let with = common::service(store, Some(PubIdPlugins::new([DOI_PLUGIN, "urnpubidplugin"])))
        .display(1)
        .await
        .unwrap();
    let link = with.doi_plugin_settings_link_action.unwrap();
    assert!(!link.label.is_empty());
    assert!(!link.url.is_empty());
    assert!(link.url.contains("plugin=doipubidplugin"));
    assert!(link.url.contains("category=pubIds"));
}

#[tokio::test]
async fn test_service_submit_reports_invalid_with_redisplay_data() {
    let store = InMemorySettingsStore::new();
    let service = common::service(Arc::new(store.clone()), None);

    let result = service
        .submit(
            9,
            &submission(9, &[("depositorName", "B"), ("depositorEmail", "nope"), ("username", "kept")]),
        )
        .await
        .unwrap();

    match result {
        SubmissionResult::Invalid { data } => {
            assert!(data
                .errors
                .has(Some("depositorEmail"), ValidationErrorKind::InvalidEmail));
            assert!(data
                .fields
                .contains(&("username", FieldValue::text("kept"))));
            assert_eq!(data.template, "settingsForm.tpl");
            assert_eq!(data.csrf_token, csrf_token(9));
        }
        other => panic!("Expected invalid submission, got {:?}", other),
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_native_client_load_and_save() {
    let store = InMemorySettingsStore::new();
    let service = Arc::new(common::service(Arc::new(store.clone()), None));
    let client: Arc<dyn CrossrefSettingsApi> =
        Arc::new(crossref_settings::api::native::NativeClient::new(service));

    let settings = CrossrefSettings {
        depositor_name: "Journal Press".to_string(),
        depositor_email: "deposits@journal.example.org".to_string(),
        username: "jp".to_string(),
        password: "secret".to_string(),
        automatic_registration: true,
        test_mode: true,
    };
    client.save_settings(11, settings.clone()).await.unwrap();

    let loaded = client.load_settings(11).await.unwrap();
    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_native_client_rejects_invalid_email() {
    let store = InMemorySettingsStore::new();
    let service = Arc::new(common::service(Arc::new(store.clone()), None));
    let client = crossref_settings::api::native::NativeClient::new(service);

    let settings = CrossrefSettings {
        depositor_name: "Journal Press".to_string(),
        depositor_email: "deposits".to_string(),
        ..Default::default()
    };
    let err = client.save_settings(11, settings).await.unwrap_err();
    assert!(err
        .validation_errors()
        .unwrap()
        .has(Some("depositorEmail"), ValidationErrorKind::InvalidEmail));
    assert!(store.is_empty());
}
