pub mod admin;
pub mod cart;
pub mod home;
pub mod quote;
pub mod sell;
pub mod shop;

pub use admin::AdminPage;
pub use cart::CartPage;
pub use home::HomePage;
pub use sell::SellPage;
pub use shop::ShopPage;
