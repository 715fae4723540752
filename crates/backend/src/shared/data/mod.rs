pub mod db;
pub mod paging;
