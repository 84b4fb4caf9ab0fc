// src/domain/filter.rs

use crate::domain::listing::Listing;
use std::collections::HashMap;

/// Minimum amenity count the reset criteria start from.
pub const DEFAULT_MIN_AMENITY: u32 = 1;

/// Thresholds narrowing the listing grid. Every bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub min_bedrooms: u32,
    pub min_bathrooms: u32,
    pub min_parking: u32,
    pub min_price: u64,
    pub max_price: u64,
}

/// Observed sale price range over a listing set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}

impl PriceBounds {
    /// `None` for an empty set.
    pub fn observe(listings: &[Listing]) -> Option<Self> {
        let mut prices = listings.iter().map(|l| l.sale_price);
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }
}

impl FilterCriteria {
    /// Default criteria: one of each amenity, price spanning the observed range.
    pub fn reset(bounds: Option<PriceBounds>) -> Self {
        let (min_price, max_price) = match bounds {
            Some(b) => (b.min, b.max),
            None => (0, u64::MAX),
        };

        Self {
            min_bedrooms: DEFAULT_MIN_AMENITY,
            min_bathrooms: DEFAULT_MIN_AMENITY,
            min_parking: DEFAULT_MIN_AMENITY,
            min_price,
            max_price,
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        listing.bedrooms >= self.min_bedrooms
            && listing.bathrooms >= self.min_bathrooms
            && listing.parking >= self.min_parking
            && listing.sale_price >= self.min_price
            && listing.sale_price <= self.max_price
    }

    /// Reads criteria from query parameters (`bedrooms`, `bathrooms`, `parking`,
    /// `min_price`, `max_price`). Missing or unparsable values fall back to the
    /// reset value; an inverted price range is swapped.
    pub fn from_params(params: &HashMap<String, String>, bounds: Option<PriceBounds>) -> Self {
        let defaults = Self::reset(bounds);

        fn read<T: std::str::FromStr>(params: &HashMap<String, String>, key: &str) -> Option<T> {
            params.get(key).and_then(|v| v.trim().parse().ok())
        }

        let mut criteria = Self {
            min_bedrooms: read(params, "bedrooms").unwrap_or(defaults.min_bedrooms),
            min_bathrooms: read(params, "bathrooms").unwrap_or(defaults.min_bathrooms),
            min_parking: read(params, "parking").unwrap_or(defaults.min_parking),
            min_price: read(params, "min_price").unwrap_or(defaults.min_price),
            max_price: read(params, "max_price").unwrap_or(defaults.max_price),
        };

        if criteria.min_price > criteria.max_price {
            std::mem::swap(&mut criteria.min_price, &mut criteria.max_price);
        }

        criteria
    }
}

/// Order-preserving subsequence of `listings` matching every threshold.
pub fn filter_listings(listings: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| criteria.matches(l))
        .cloned()
        .collect()
}
