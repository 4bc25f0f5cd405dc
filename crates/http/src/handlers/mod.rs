pub mod objectives;
pub mod update;
pub mod work_orders;
