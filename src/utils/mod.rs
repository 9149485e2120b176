pub mod cookies;
pub mod leptos_owner;
pub mod panic_hook;
