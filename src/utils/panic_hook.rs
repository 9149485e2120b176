use std::panic;
use leptos::logging::log;

/// Chains a hook after `console_error_panic_hook` that flags panics raised
/// while a reaction result was being applied to a disposed component.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A reaction response arrived after its review was unmounted.");
            log!("[PANIC] Update the summary through utils::leptos_owner::with_owner_safe instead.");
        }
    }));
}

/// Call in main.rs or app initialization
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
