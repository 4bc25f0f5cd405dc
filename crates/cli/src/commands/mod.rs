pub(crate) mod catalog;
pub(crate) mod schema;
pub(crate) mod serve;
pub(crate) mod update;
