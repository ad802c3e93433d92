pub mod frontline;
pub mod query;
pub mod shared_border;
