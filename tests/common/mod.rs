#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use futures::future::{self, BoxFuture, FutureExt};
use serde_json::{json, Value};

use drtv_source::{
    DrtvError, HttpRequest, HttpResponse, HttpTransport, SessionState, Token, TokenType,
};

pub const TOKEN_URL: &str = "https://production-cdn.dr-massive.com/api/authorization/anonymous-sso";
pub const ACCOUNT_URL: &str = "https://production-cdn.dr-massive.com/api/account";
pub const PAGE_URL: &str = "https://production-cdn.dr-massive.com/api/page";
pub const ITEMS_URL: &str = "https://production-cdn.dr-massive.com/api/items/";
pub const VIDEOS_URL: &str = "https://production-cdn.dr-massive.com/api/account/items/";
pub const SEARCH_URL: &str = "https://production-cdn.dr-massive.com/api/v2/search";

struct Route {
    prefix: String,
    status: u16,
    body: String,
}

/// Scripted stand-in for the host transport.
///
/// Answers each request with the most specific registered prefix and records
/// everything it was sent. Unknown URLs get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, prefix: &str, status: u16, body: Value) -> &Self {
        self.respond_raw(prefix, status, &body.to_string())
    }

    pub fn respond_raw(&self, prefix: &str, status: u16, body: &str) -> &Self {
        self.routes.lock().unwrap().push(Route {
            prefix: prefix.to_string(),
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests whose URL starts with `prefix`.
    pub fn requests_to(&self, prefix: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.url.starts_with(prefix))
            .collect()
    }
}

impl HttpTransport for FakeTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, DrtvError>> {
        let response = {
            let routes = self.routes.lock().unwrap();
            match routes
                .iter()
                .filter(|r| request.url.starts_with(&r.prefix))
                .max_by_key(|r| r.prefix.len())
            {
                Some(route) => HttpResponse {
                    code: route.status,
                    url: request.url.clone(),
                    body: Bytes::from(route.body.clone()),
                },
                None => HttpResponse {
                    code: 404,
                    url: request.url.clone(),
                    body: Bytes::from_static(b"not found"),
                },
            }
        };
        self.requests.lock().unwrap().push(request);
        future::ready(Ok(response)).boxed()
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    "2024-06-01T12:00:00Z".parse().unwrap()
}

pub fn token_expiring_at(expiration_date: DateTime<Utc>, value: &str) -> Token {
    Token {
        value: value.to_string(),
        expiration_date,
        refreshable: true,
        token_type: TokenType::UserAccount,
    }
}

pub fn session_with(token: Token, user_id: Option<&str>) -> SessionState {
    SessionState {
        token: Some(token),
        user_id: user_id.map(str::to_string),
    }
}

/// A session that will not need refreshing for a long time.
pub fn fresh_session() -> SessionState {
    session_with(
        token_expiring_at(Utc::now() + Duration::days(30), "fresh-token"),
        Some("user-1"),
    )
}

pub fn token_response(value: &str) -> Value {
    json!([
        {
            "value": value,
            "expirationDate": "2030-01-01T00:00:00Z",
            "refreshable": true,
            "type": "UserAccount"
        },
        {
            "value": "profile-token",
            "expirationDate": "2030-01-01T00:00:00Z",
            "refreshable": true,
            "type": "UserProfile"
        }
    ])
}

pub fn account_response(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Anonymous",
        "pinEnabled": false,
        "segments": []
    })
}

pub fn show_json() -> Value {
    json!({
        "id": "52418",
        "type": "show",
        "path": "/serie/matador_52419",
        "title": "Matador",
        "shortDescription": "Danmarks mest elskede tv-serie.",
        "images": {
            "wallpaper": "https://img.example/wallpaper.jpg",
            "poster": "https://img.example/poster.jpg",
            "tile": "https://img.example/tile.jpg"
        },
        "customFields": { "PathIdSegment": "matador_52419" },
        "availableSeasonCount": 1
    })
}

pub fn episode_json(id: &str, offers: Value) -> Value {
    json!({
        "id": id,
        "type": "episode",
        "path": format!("/episode/matador_{}", id),
        "watchPath": format!("/se/matador_{}", id),
        "title": "Matador (1)",
        "contextualTitle": "Komme fremmed",
        "description": "Mads Skjern kommer til Korsbæk.",
        "showId": "52418",
        "seasonId": "52420",
        "duration": 3600,
        "images": { "tile": format!("https://img.example/{}.jpg", id) },
        "offers": offers,
        "customFields": { "AvailableFrom": "2024-01-02T03:04:05.678Z" }
    })
}

pub fn page_json() -> Value {
    json!({
        "id": "page-1",
        "path": "/serie/matador_52419",
        "title": "Matador",
        "entries": [
            {
                "id": "entry-1",
                "type": "ItemDetailEntry",
                "item": {
                    "id": "52420",
                    "title": "Sæson 1",
                    "show": show_json(),
                    "episodes": {
                        "id": "episodes-1",
                        "items": [
                            episode_json("100001", json!([])),
                            episode_json("100002", json!([]))
                        ]
                    }
                }
            }
        ]
    })
}
