//! Signal classification core
//!
//! Takes raw, heterogeneous evidence (locale codes, URL lists, filename
//! strings) and turns it into ranked, deduplicated conclusions:
//! - `languages` - ISO-639 normalization of locale codes
//! - `domains` - registrable-domain/TLD classification of visited URLs
//! - `scripts` - Unicode script detection over entry names
//! - `bucket` - the shared bounded top-K frequency aggregator
//!
//! Everything here is a pure, synchronous transformation over in-memory
//! lists; all I/O lives in `crate::sources`.

pub mod bucket;
pub mod domains;
pub mod languages;
pub mod scripts;
