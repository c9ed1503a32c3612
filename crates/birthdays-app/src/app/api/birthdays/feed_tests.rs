//! Unit tests for the birthday feed endpoint.

use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use crate::app::api::routes;
use crate::state::AppStateHandler;
use birthdays_core::config::{
    AddressBooksConfig, AuthConfig, LoggingConfig, ServerConfig, Settings,
};
use birthdays_core::constants::HEALTHCHECK_ROUTE_PATH;
use birthdays_service::addressbook::{AddressBook, AddressBooks};
use birthdays_service::carddav::CardDavClient;
use birthdays_service::feed::BirthdayFeed;

const API_KEY: &str = "s3cret";

fn settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        auth: AuthConfig {
            api_key: API_KEY.to_string(),
        },
        address_books: AddressBooksConfig {
            file: "address-books.json".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

fn service() -> Service {
    let books = AddressBooks::from_books([AddressBook {
        name: "family".to_string(),
        url: "http://127.0.0.1:1/addressbooks/family/".to_string(),
        username: "user".to_string(),
        password: "pass".to_string(),
    }]);

    let router = Router::new()
        .hoop(AppStateHandler::new(
            settings(),
            books,
            BirthdayFeed::new(CardDavClient::default()),
        ))
        .push(routes());

    Service::new(router)
}

#[test_log::test(tokio::test)]
async fn healthcheck_needs_no_api_key() {
    let mut resp = TestClient::get(format!("http://127.0.0.1:5800{HEALTHCHECK_ROUTE_PATH}"))
        .send(&service())
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    assert_eq!(resp.take_string().await.unwrap(), "OK");
}

#[test_log::test(tokio::test)]
async fn missing_api_key_is_unauthorized() {
    let resp = TestClient::get("http://127.0.0.1:5800/family")
        .send(&service())
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::UNAUTHORIZED));
}

#[test_log::test(tokio::test)]
async fn wrong_api_key_is_unauthorized() {
    let resp = TestClient::get("http://127.0.0.1:5800/family?apiKey=nope")
        .send(&service())
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::UNAUTHORIZED));
}

#[test_log::test(tokio::test)]
async fn wrong_api_key_is_checked_before_lookup() {
    let resp = TestClient::get("http://127.0.0.1:5800/strangers?apiKey=nope")
        .send(&service())
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::UNAUTHORIZED));
}

#[test_log::test(tokio::test)]
async fn unknown_address_book_is_not_found() {
    let resp = TestClient::get(format!(
        "http://127.0.0.1:5800/strangers?apiKey={API_KEY}"
    ))
    .send(&service())
    .await;

    assert_eq!(resp.status_code, Some(StatusCode::NOT_FOUND));
}

#[test_log::test(tokio::test)]
async fn unreachable_carddav_server_is_bad_gateway() {
    let resp = TestClient::get(format!("http://127.0.0.1:5800/family?apiKey={API_KEY}"))
        .send(&service())
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_GATEWAY));
}

#[test_log::test(tokio::test)]
async fn form_api_key_takes_precedence_over_query() {
    let service = service();

    let form_wins = TestClient::get("http://127.0.0.1:5800/strangers?apiKey=nope")
        .raw_form(format!("apiKey={API_KEY}"))
        .send(&service)
        .await;
    assert_eq!(form_wins.status_code, Some(StatusCode::NOT_FOUND));

    let form_rejects = TestClient::get(format!(
        "http://127.0.0.1:5800/strangers?apiKey={API_KEY}"
    ))
    .raw_form("apiKey=nope")
    .send(&service)
    .await;
    assert_eq!(form_rejects.status_code, Some(StatusCode::UNAUTHORIZED));
}
