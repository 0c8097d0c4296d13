//! Bookfind core: pure search state machine and query-parameter codec.
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use query::{encode_query, parse_query, QueryParams};
pub use state::{CurrentSearch, SearchConfig, SearchState};
pub use update::update;
pub use view_model::SearchViewModel;
