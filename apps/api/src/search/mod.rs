// Boolean job search: query parsing, filtering, navigation links, HTTP handlers.

pub mod filter;
pub mod handlers;
pub mod navigation;
pub mod query_parser;
