//! The access-scoped search engine: ports, scope resolution, query
//! matching, result assembly, and the presenter contract.

#![forbid(unsafe_code)]

mod matcher;
mod ports;
mod presenter;
mod scope;
mod search_service;

pub use matcher::{normalize_query, record_matches};
pub use ports::CollectionRepository;
pub use presenter::{EmptyState, ResultRow, SearchPresenter, SelectionSink, empty_state};
pub use scope::is_visible;
pub use search_service::SearchService;
