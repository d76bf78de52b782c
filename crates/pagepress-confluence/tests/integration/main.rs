//! Integration tests for the Confluence REST adapter
//!
//! Each module exercises the client/store pair against a wiremock server.

mod common;
mod test_content_operations;
mod test_errors;
mod test_search;
