pub mod gitee;
