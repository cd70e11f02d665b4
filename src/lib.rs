//! Stringscope – analyzes strings, keeps them by content hash and answers
//! filtered queries about them.
//!
//! A submitted string is analyzed once into a set of derived properties:
//! * its length in Unicode code points,
//! * whether it is a palindrome (ignoring case and anything that is not a letter or a digit),
//! * its number of distinct characters and its character frequency histogram,
//! * its number of whitespace separated words,
//! * its SHA-256 content hash, which doubles as the record id.
//!
//! ## Modules
//! * [`analysis`] – Pure derivation of [`analysis::StringProperties`].
//! * [`construct`] – The [`construct::AnalyzedString`] record and the
//!   [`construct::ContentStore`] that keeps records by id behind a reader/writer lock.
//! * [`filter`] – The [`filter::FilterSet`] of structured predicates and its evaluation.
//! * [`translator`] – Rule based translation of English phrases such as
//!   "strings longer than 10 characters" into a filter set.
//! * [`engine`] – The [`engine::QueryEngine`] running filters over a store snapshot.
//! * [`server`] – The HTTP surface built on axum.
//! * [`settings`] – Layered configuration for the binary.
//!
//! ## Quick Start
//! ```
//! use stringscope::{construct::ContentStore, engine::QueryEngine};
//! let store = ContentStore::new();
//! store.create("racecar").unwrap();
//! store.create("hello world").unwrap();
//! let found = QueryEngine::new(&store)
//!     .filter_by_natural_language("palindromic strings")
//!     .unwrap();
//! assert_eq!(found.count, 1);
//! assert_eq!(found.data[0].value(), "racecar");
//! ```
//!
//! Records live only as long as the store: nothing is persisted.

pub mod analysis;
pub mod construct;
pub mod engine;
pub mod error;
pub mod filter;
pub mod server;
pub mod settings;
pub mod translator;

pub use error::{Result, StringscopeError};
