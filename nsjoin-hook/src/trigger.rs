//! Constructor registered in `.init_array`

use std::sync::atomic::{AtomicBool, Ordering};

static FIRED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_load() {
    if FIRED.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Some(code) = crate::run_from_env() {
        std::process::exit(code);
    }
}

#[used]
#[unsafe(link_section = ".init_array")]
static ON_LOAD: extern "C" fn() = on_load;

/// Whether the load-time constructor has run in this process.
///
/// True after a no-op pass as well; when the join did happen the process
/// never gets to call this.
#[must_use]
pub fn has_run() -> bool {
    FIRED.load(Ordering::SeqCst)
}
