//! Grammar productions.
//!
//! Each submodule adds one group of productions to [`Parser`](crate::Parser):
//!
//! - `body`: host code, copied through, and `{...}` expression containers
//! - `tag`: a whole element, from `<` to its closing `>`
//! - `attributes`: the attribute list and attribute values
//! - `children`: text, nested elements, and containers between the tags

mod attributes;
mod body;
mod children;
mod tag;
