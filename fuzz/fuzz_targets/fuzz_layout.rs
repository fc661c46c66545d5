#![no_main]

//! Layout parser fuzzer.
//!
//! Any text either fails with a `LayoutError` or yields a board whose opening
//! snapshot satisfies every invariant.

use blastgrid::game::{check_invariants, Rules};
use blastgrid::Layout;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Ok(layout) = Layout::parse(text) {
        let state = layout.new_game(&Rules::default());
        let violations = check_invariants(&state);
        assert!(
            violations.is_empty(),
            "Invariants violated for parsed layout: {:?}",
            violations
        );
        assert_eq!(state.enemies.len(), layout.enemies.len());
    }
});
