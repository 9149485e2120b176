use leptos::Owner;

/// Runs `f` under `owner` if it is still alive. Reaction responses arrive
/// asynchronously and the review they belong to may be gone by then.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => leptos::try_with_owner(owner, f).ok(),
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
            None
        }
    }
}
