//! Scrapers for [Telex](https://telex.hu).
//!
//! Two independent operations, each taking any [`Fetch`](crate::fetch::Fetch)
//! implementation:
//!
//! | Operation | Module | Method | Notes |
//! |-----------|--------|--------|-------|
//! | Archive search | [`search`] | RSS feed pagination | 10 items per page, sequential |
//! | Article text | [`article`] | HTML scraping | Fixed selectors under `#cikk-content` |
//!
//! Neither keeps state between calls. Requests are issued one at a time with
//! no retries; a failed request ends a search early and makes an article
//! fetch fall back to defaults.

pub mod article;
pub mod search;
