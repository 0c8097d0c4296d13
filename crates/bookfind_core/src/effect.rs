use crate::query::QueryParams;
use crate::state::CurrentSearch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PublishSearch(CurrentSearch),
    PersistQuery(QueryParams),
}
