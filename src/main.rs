#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(feature = "csr")]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use review_reactions::app::*;
    use review_reactions::utils::panic_hook;

    panic_hook::init();

    leptos::mount_to_body(App);
}
