pub mod market;
pub mod news;
pub mod recommendation;

pub use market::{MarketSnapshot, PricePoint, Symbol};
pub use news::NewsItem;
pub use recommendation::{Action, Recommendation, SearchReport};
