// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteStore;
use crate::domain::Label;

/// Build a store with one unlabeled note per title, ids starting at 1.
pub fn store_with_titles(titles: &[&str]) -> NoteStore {
    let mut store = NoteStore::new();
    for title in titles {
        store
            .add(title, "", vec![])
            .expect("test titles must not be blank");
    }
    store
}

/// Build a store where the given ids (out of `count` notes) are pinned.
pub fn store_with_pins(count: usize, pinned_ids: &[u64]) -> NoteStore {
    let mut store = NoteStore::new();
    for i in 0..count {
        store
            .add(&format!("note {}", i + 1), "", vec![Label::NotImportant])
            .expect("generated titles are never blank");
    }
    for id in pinned_ids {
        store.toggle_pin(*id);
    }
    store
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
