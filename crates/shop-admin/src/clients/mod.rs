pub mod image_client;
pub mod order_client;
pub mod product_client;
pub mod session_client;

pub use image_client::{ImageClient, ImageHostConfig};
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use session_client::SessionClient;
