use dyna_common::prelude::*;
use dyna_logging::{log_error, log_info, set_logger, LogCategory, LogLevel, Logger};

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

struct GlobalState {
    logger : Logger,
}

fn create_global_state() -> GlobalState {
    GlobalState {
        logger: Logger::new(),
    }
}

fn setup_globals(state: &'static GlobalState) {
    set_logger(&state.logger);
}

fn main() {
    let global_state: &'static GlobalState = Box::leak(Box::new(create_global_state()));
    setup_globals(global_state);

    if let Some(level) = std::env::args().nth(1) {
        match level.parse::<LogLevel>() {
            Ok(level) => global_state.logger.set_max_level(level),
            Err(err) => log_error!(LOG_CAT, "{err}, keeping log level {}", global_state.logger.max_level()),
        }
    }

    actual_main();

    global_state.logger.flush();
}

fn actual_main() {
    let arr = DynArr::<Option<&str>>::new();
    log_info!(LOG_CAT, "new: capacity {}, len {}", arr.capacity(), arr.len());

    let mut named = DynArr::new();
    named.add(Some("first"));
    named.add(Some("second"));
    named.add(Some("third"));
    named.add(None);
    named.add(None);
    named.add(Some("last"));
    log_info!(LOG_CAT, "added: {named}");

    let mut inserted = named.clone();
    match inserted.add_all_at(2, [Some("first"), Some("second")]) {
        Ok(_) => log_info!(LOG_CAT, "add_all_at(2): {inserted} (len {})", inserted.len()),
        Err(err) => log_error!(LOG_CAT, "add_all_at(2) failed: {err}"),
    }

    let mut reversed = named.clone();
    reversed.reverse();
    log_info!(LOG_CAT, "reversed: {reversed}");

    let mut from_zero = DynArr::with_capacity(0);
    from_zero.add("first");
    log_info!(LOG_CAT, "add on empty capacity: capacity {}", from_zero.capacity());

    let mut removed = named.clone();
    removed.remove_item(&None);
    log_info!(LOG_CAT, "remove_item(null): {removed} (len {})", removed.len());

    if let Err(err) = removed.get(removed.len()) {
        log_info!(LOG_CAT, "get past the end: {err}");
    }
}
