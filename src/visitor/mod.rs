// src/visitor/mod.rs
mod token;

pub use token::{generate_visitor_token, hash_token};

use astra::Request;

pub const VISITOR_COOKIE: &str = "visitor";

/// Who is browsing. `issued` is set when the request carried no usable
/// cookie and a new token was minted for this response.
#[derive(Debug, Clone)]
pub struct Visitor {
    pub token: String,
    pub issued: bool,
}

impl Visitor {
    pub fn from_request(req: &Request) -> Self {
        match cookie_value(req, VISITOR_COOKIE).filter(|t| token::is_well_formed(t)) {
            Some(token) => Self {
                token,
                issued: false,
            },
            None => Self {
                token: generate_visitor_token(),
                issued: true,
            },
        }
    }

    pub fn storage_key(&self) -> [u8; 32] {
        hash_token(&self.token)
    }

    pub fn set_cookie_header(&self) -> String {
        format!(
            "{VISITOR_COOKIE}={}; Path=/; Max-Age=31536000; HttpOnly; SameSite=Lax",
            self.token
        )
    }
}

/// Value of a named cookie from the `Cookie` header(s).
pub fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
}
