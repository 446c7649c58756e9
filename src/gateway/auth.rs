use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum_extra::headers::{self, HeaderMapExt};

use crate::config::Credentials;

pub fn credential_headers(credentials: &Credentials) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.typed_insert(headers::ContentType::json());
    map.typed_insert(headers::CacheControl::new().with_no_cache());
    map.insert(
        HeaderName::from_static("x-pp-clientid"),
        HeaderValue::from_str(&credentials.client_id).expect("header value is ascii"),
    );
    map.insert(
        HeaderName::from_static("x-pp-clientsecret"),
        HeaderValue::from_str(&credentials.client_secret).expect("header value is ascii"),
    );
    map
}
