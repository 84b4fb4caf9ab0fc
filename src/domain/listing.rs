// src/domain/listing.rs

use chrono::{DateTime, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};

/// One property record as published in the listings data file.
/// Field names mirror the JSON keys of the data file, which is also the
/// shape the saved-properties slot is written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Sale Price", deserialize_with = "whole_dollars")]
    pub sale_price: u64,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: u32,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: u32,
    #[serde(rename = "Parking")]
    pub parking: u32,
    #[serde(rename = "Sqft")]
    pub sqft: u32,
    #[serde(rename = "YearBuilt")]
    pub year_built: i32,
    #[serde(rename = "DateListed")]
    pub date_listed: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "ThumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "PictureURL")]
    pub picture_url: String,
}

impl Listing {
    /// Listing date as "Month D, YYYY". Falls back to the raw string
    /// when it is neither a plain date nor RFC 3339.
    pub fn listed_on(&self) -> String {
        let raw = self.date_listed.trim();
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

        match date {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => raw.to_string(),
        }
    }
}

/// Accepts any non-negative JSON number and rounds it to whole dollars.
fn whole_dollars<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 {
        return Err(de::Error::custom(format!(
            "sale price must be a non-negative number, got {raw}"
        )));
    }
    Ok(raw.round() as u64)
}

/// "$1,234,567"
pub fn format_price(value: u64) -> String {
    format!("${}", group_thousands(value))
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Finds a listing by id. Ids are assumed unique; the first match wins.
pub fn find_listing(listings: &[Listing], id: i64) -> Option<&Listing> {
    listings.iter().find(|l| l.id == id)
}

#[cfg(test)]
pub(crate) fn sample_listing(id: i64, sale_price: u64, beds: u32, baths: u32, parking: u32) -> Listing {
    Listing {
        id,
        title: format!("Listing {id}"),
        location: "Springfield".to_string(),
        sale_price,
        bedrooms: beds,
        bathrooms: baths,
        parking,
        sqft: 1450,
        year_built: 1998,
        date_listed: "2024-03-05".to_string(),
        description: "A quiet family home.".to_string(),
        thumbnail_url: format!("/img/{id}-thumb.jpg"),
        picture_url: format!("/img/{id}.jpg"),
    }
}
