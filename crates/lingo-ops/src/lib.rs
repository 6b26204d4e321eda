pub mod ops_dir;
pub mod ops_info;
pub mod ops_list;
pub mod ops_which;
