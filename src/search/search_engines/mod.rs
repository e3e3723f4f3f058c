mod astar;
mod error;
mod search_engine;

pub use astar::{solve, AStar, ExpansionRecord};
pub use error::{InvalidInput, MalformedEnvironment, SearchError};
pub use search_engine::SearchResult;
