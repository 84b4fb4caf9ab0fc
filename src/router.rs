use crate::domain::contact::{ContactField, ContactForm};
use crate::domain::filter::{filter_listings, FilterCriteria, PriceBounds};
use crate::domain::listing::find_listing;
use crate::errors::ServerError;
use crate::responses::{
    css_response, html_response, html_response_with_status, is_htmx, redirect_response, ResultResp,
};
use crate::state::AppState;
use crate::templates;
use crate::templates::pages::{HomeVm, PropertyVm};
use crate::visitor::Visitor;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;
const FILTER_KEYS: [&str; 5] = ["bedrooms", "bathrooms", "parking", "min_price", "max_price"];

pub const LISTINGS_FETCH_FAILED: &str = "Failed to load listings. Please try again later.";
pub const PROPERTY_FETCH_FAILED: &str = "Failed to load property details. Please try again later.";

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let visitor = Visitor::from_request(&req);
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let mut resp = route(req, state, &visitor, &method, &path)?;
    tracing::debug!(%method, %path, status = resp.status().as_u16(), "handled");

    if visitor.issued {
        resp.headers_mut().insert(
            "Set-Cookie",
            visitor
                .set_cookie_header()
                .parse()
                .map_err(|_| ServerError::InternalError)?,
        );
    }

    Ok(resp)
}

fn route(req: Request, state: &AppState, visitor: &Visitor, method: &str, path: &str) -> ResultResp {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        ("GET", []) => browse(&req, state, visitor),
        ("GET", ["property", id]) => property_detail(id, state, visitor),
        ("POST", ["property", id, "save"]) => toggle_saved(&req, id, state, visitor),
        ("POST", ["property", id, "contact"]) => submit_contact(req, id, state, visitor),
        ("GET", ["saved"]) => {
            let saved = state.saved_properties(visitor)?;
            html_response(templates::pages::saved_page(saved.all()))
        }
        ("POST", ["saved", id, "remove"]) => {
            if let Ok(id) = id.parse::<i64>() {
                state.saved_properties(visitor)?.remove(id)?;
            }
            redirect_response("/saved")
        }
        ("GET", ["not-found"]) => {
            let saved = state.saved_properties(visitor)?;
            html_response_with_status(404, templates::pages::not_found_page(saved.len()))
        }
        ("GET", ["static", "main.css"]) => css_response(),
        _ => Err(ServerError::NotFound),
    }
}

fn browse(req: &Request, state: &AppState, visitor: &Visitor) -> ResultResp {
    let params = parse_query(req);
    let saved = state.saved_properties(visitor)?;

    let all = match state.listings.fetch_all() {
        Ok(all) => all,
        Err(_) => {
            return html_response(templates::pages::home_page(&HomeVm {
                results: &[],
                total: 0,
                criteria: FilterCriteria::reset(None),
                bounds: None,
                error: Some(LISTINGS_FETCH_FAILED),
                saved_count: saved.len(),
            }));
        }
    };

    let bounds = PriceBounds::observe(&all);
    let action = params.get("action").map(String::as_str);
    let wants_search = action.is_some() || FILTER_KEYS.iter().any(|k| params.contains_key(*k));

    let (criteria, results) = match action {
        Some("reset") => {
            let criteria = FilterCriteria::reset(bounds);
            (criteria, filter_listings(&all, &criteria))
        }
        _ if wants_search => {
            let criteria = FilterCriteria::from_params(&params, bounds);
            (criteria, filter_listings(&all, &criteria))
        }
        // First visit: everything, with the default criteria shown in the form.
        _ => (FilterCriteria::reset(bounds), all.clone()),
    };

    html_response(templates::pages::home_page(&HomeVm {
        results: &results,
        total: all.len(),
        criteria,
        bounds,
        error: None,
        saved_count: saved.len(),
    }))
}

fn property_detail(id: &str, state: &AppState, visitor: &Visitor) -> ResultResp {
    let Ok(id) = id.parse::<i64>() else {
        return redirect_response("/not-found");
    };
    let saved = state.saved_properties(visitor)?;

    let all = match state.listings.fetch_all() {
        Ok(all) => all,
        Err(_) => {
            return html_response(templates::pages::property_error_page(
                PROPERTY_FETCH_FAILED,
                saved.len(),
            ))
        }
    };

    let Some(listing) = find_listing(&all, id) else {
        return redirect_response("/not-found");
    };

    html_response(templates::pages::property_page(&PropertyVm {
        listing,
        is_saved: saved.contains(id),
        form: &ContactForm::new(),
        saved_count: saved.len(),
    }))
}

fn toggle_saved(req: &Request, id: &str, state: &AppState, visitor: &Visitor) -> ResultResp {
    let Ok(id) = id.parse::<i64>() else {
        return redirect_response("/not-found");
    };
    let mut saved = state.saved_properties(visitor)?;

    let message = if saved.contains(id) {
        saved.remove(id)?;
        "Property removed from saved properties"
    } else {
        let all = state.listings.fetch_all()?;
        let Some(listing) = find_listing(&all, id) else {
            return redirect_response("/not-found");
        };
        saved.add(listing)?;
        "Property saved successfully"
    };

    tracing::info!(listing_id = id, saved = saved.contains(id), "saved set toggled");

    if is_htmx(req) {
        html_response(templates::save_button(id, saved.contains(id), Some(message)))
    } else {
        redirect_response(&format!("/property/{id}"))
    }
}

fn submit_contact(req: Request, id: &str, state: &AppState, visitor: &Visitor) -> ResultResp {
    let Ok(id) = id.parse::<i64>() else {
        return redirect_response("/not-found");
    };
    let htmx = is_htmx(&req);
    let fields = read_form(req)?;

    let all = state.listings.fetch_all()?;
    let Some(listing) = find_listing(&all, id) else {
        return redirect_response("/not-found");
    };

    let mut form = ContactForm::new();
    for (name, value) in &fields {
        if let Some(field) = ContactField::from_name(name) {
            form.edit(field, value);
        }
    }
    let status = form.submit(state.submitter.as_ref()).clone();
    tracing::info!(
        listing_id = id,
        ?status,
        invalid_fields = form.errors().count(),
        "contact form submitted"
    );

    if htmx {
        return html_response(templates::contact_form(id, &form));
    }

    let saved = state.saved_properties(visitor)?;
    html_response(templates::pages::property_page(&PropertyVm {
        listing,
        is_saved: saved.contains(id),
        form: &form,
        saved_count: saved.len(),
    }))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = req.into_body();
    let mut raw = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}
