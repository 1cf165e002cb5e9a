#![no_main]

use libfuzzer_sys::fuzz_target;
use snapping_stepper::script::{ScriptRunner, parse_script};

fuzz_target!(|data: &[u8]| {
    // Parsed scripts must run without panicking and keep the range invariants
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(commands) = parse_script(s)
    {
        let mut runner = ScriptRunner::default();
        for (index, command) in commands.iter().enumerate() {
            let _ = runner.apply(index + 1, command);
            let stepper = runner.controller();
            assert!(stepper.minimum_value() <= stepper.maximum_value());
            assert!(stepper.minimum_value() <= stepper.value());
            assert!(stepper.value() <= stepper.maximum_value());
        }
    }
});
