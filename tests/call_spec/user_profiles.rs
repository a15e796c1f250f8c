use crate::utils::CannedClient;
use xing_api_rs::domain::{HttpError, UserId};
use xing_api_rs::http::Method;
use xing_api_rs::resources::user_profiles;
use xing_api_rs::spec::CallError;
use xing_api_rs::XingApi;

const OWN_PROFILE: &str =
    r#"{"users":[{"id":"me","display_name":"Ann Smith","first_name":"Ann"}]}"#;

#[test]
fn get_own_profile() {
    let api = XingApi::new(CannedClient::new(200, OWN_PROFILE));

    let spec = user_profiles::get_own_profile().expect("valid spec");
    let user = api.execute(&spec).expect("own profile");

    assert_eq!(user.id, UserId::me());
    assert_eq!(user.first_name.as_deref(), Some("Ann"));

    let requests = api.client().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method(), Method::Get);
    assert_eq!(requests[0].url(), "/v1/users/me");
}

#[test]
fn find_users_by_email_keeps_positions() {
    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"results":{"total":1,"items":[
            {"email":"a@x.com","user":{"id":"1_a","display_name":"Ann"}},
            null
        ]}}"#,
    ));

    let emails = ["a@x.com", "missing@x.com"];
    let spec = user_profiles::find_users_by_email(&emails).expect("valid spec");
    let users = api.execute(&spec).expect("users");

    assert_eq!(users.len(), emails.len());
    assert_eq!(
        users[0].as_ref().map(|u| u.id.as_str()),
        Some("1_a")
    );
    assert!(users[1].is_none());
    assert_eq!(
        api.client().requests()[0].url(),
        "/v1/users/find_by_emails?emails=a%40x.com,missing%40x.com"
    );
}

#[test]
fn find_users_by_email_unmatched_user_entry() {
    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"results":{"items":[{"email":"missing@x.com","user":null}]}}"#,
    ));

    let spec = user_profiles::find_users_by_email(&["missing@x.com"]).expect("valid spec");
    assert_eq!(api.execute(&spec).expect("users"), vec![None]);
}

#[test]
fn get_users_by_id() {
    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"users":[{"id":"1_a"},{"id":"2_b"}]}"#,
    ));

    let ids = [UserId::from("1_a"), UserId::from("2_b")];
    let spec = user_profiles::get_users_by_id(&ids).expect("valid spec");
    let users = api.execute(&spec).expect("users");

    let found: Vec<_> = users.into_iter().flatten().map(|u| u.id).collect();
    assert_eq!(found, ids);
}

#[test]
fn profile_message_and_id_card() {
    let api = XingApi::new(
        CannedClient::new(
            200,
            r#"{"profile_message":{"message":"Hiring!","updated_at":"2015-06-01T10:00:00Z"}}"#,
        )
        .then(200, r#"{"id_card":{"id":"me","display_name":"Ann Smith"}}"#),
    );

    let message = api
        .execute(&user_profiles::get_own_profile_message().expect("valid spec"))
        .expect("message");
    assert_eq!(message.message.as_deref(), Some("Hiring!"));

    let card = api
        .execute(&user_profiles::get_own_id_card().expect("valid spec"))
        .expect("id card");
    assert_eq!(card.display_name.as_deref(), Some("Ann Smith"));

    let urls: Vec<_> = api
        .client()
        .requests()
        .iter()
        .map(|r| r.url().to_string())
        .collect();
    assert_eq!(
        urls,
        vec!["/v1/users/me/profile_message", "/v1/users/me/id_card"]
    );
}

#[test]
fn legal_information_of_other_user() {
    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"legal_information":{"content":"Ann Smith, Hamburg"}}"#,
    ));

    let spec = user_profiles::get_user_legal_information(&"42_abc".into()).expect("valid spec");
    assert_eq!(api.execute(&spec).expect("content"), "Ann Smith, Hamburg");
    assert_eq!(
        api.client().requests()[0].url(),
        "/v1/users/42_abc/legal_information"
    );
}

#[test]
fn api_error_is_typed() {
    let api = XingApi::new(CannedClient::new(
        404,
        r#"{"error_name":"USER_NOT_FOUND","message":"User not found"}"#,
    ));

    let spec = user_profiles::get_user_by_id(&"unknown".into()).expect("valid spec");
    match api.execute(&spec) {
        Err(CallError::Api {
            status: 404,
            error: Some(HttpError { error_name, .. }),
        }) => assert_eq!(error_name, "USER_NOT_FOUND"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn keyword_search_async() {
    let api = XingApi::new(CannedClient::new(
        200,
        r#"{"users":{"total":2,"items":[{"user":{"id":"1_a"}},{"user":{"id":"2_b"}}]}}"#,
    ));

    let spec = user_profiles::find_users_by_keyword("rust").expect("valid spec");
    assert!(spec.is_experimental());

    let users = api.execute_async(&spec).await.expect("users");
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(Option::is_some));
}
