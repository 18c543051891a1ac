//! Division-free product-except-self and stable merging of sorted arrays.
//!
//! - [`product_except_self`]: for every index, the product of all other
//!   elements, in two linear passes and without division
//! - [`merge_sorted`]: two-pointer merge of two non-decreasing slices
//!
//! The [`check`] and [`report`] modules back the `array-transforms` binary,
//! which runs the built-in check cases and times both transforms.

pub mod check;
pub mod merge_sorted;
pub mod product_except_self;
pub mod report;

pub use merge_sorted::{is_sorted, merge_sorted};
pub use product_except_self::{
    checked_product_except_self, product_except_self, verify_products, ProductError,
};
