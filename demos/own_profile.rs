use xing_api_rs::http::{Method, RequestData, RequestFactory};
use xing_api_rs::resources::user_profiles;
use xing_api_rs::spec::CallError;
use xing_api_rs::{http, XingApi};

/// Adds a pre-obtained OAuth2 access token to every request.
struct AccessToken(String);

impl RequestFactory for AccessToken {
    fn new_request(&self, method: Method, url: &str) -> RequestData {
        RequestData::new(method, url).bearer_token(&self.0)
    }
}

fn main() {
    env_logger::init();

    let token = std::env::var("XING_ACCESS_TOKEN").unwrap();

    let client = http::ClientBuilder::new()
        .user_agent("xing-api-rs-demo/0.1.0")
        .build::<http::ureq_client::UReqClient>()
        .unwrap();

    let api = XingApi::new(client).with_request_factory(AccessToken(token));

    let spec = user_profiles::get_own_profile().unwrap();
    match api.execute(&spec) {
        Ok(user) => println!(
            "Logged in as {} ({})",
            user.display_name.unwrap_or_default(),
            user.id
        ),
        Err(CallError::Api {
            status,
            error: Some(e),
        }) => {
            eprintln!("API refused the request ({status}): {e}");
            return;
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
            return;
        }
    }

    let emails: Vec<String> = std::env::args().skip(1).collect();
    if emails.is_empty() {
        return;
    }

    let emails: Vec<&str> = emails.iter().map(String::as_str).collect();
    let spec = user_profiles::find_users_by_email(&emails).unwrap();
    let users = api.execute(&spec).unwrap();
    for (email, user) in emails.iter().zip(users) {
        match user {
            Some(u) => println!("{email}: {}", u.id),
            None => println!("{email}: no user"),
        }
    }
}
