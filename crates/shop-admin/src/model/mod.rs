//! Wire-format data structures implementing [`ApiResource`](admin_framework::ApiResource).

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;
