//! Parser tests.
//!
//! - `parser`: successful transforms, from single tags to mixed documents
//! - `errors`: structural failures and where they are reported
