#![no_main]

use libfuzzer_sys::fuzz_target;
use snapping_stepper::ValueController;
use snapping_stepper::config::ConfigManager;

fuzz_target!(|data: &[u8]| {
    // Any configuration that validates must build a controller within its bounds
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(config) = ConfigManager::from_json_str(s)
    {
        let stepper = ValueController::from_config(&config);
        assert!(stepper.minimum_value() <= stepper.maximum_value());
        assert!(stepper.minimum_value() <= stepper.value());
        assert!(stepper.value() <= stepper.maximum_value());
        let _ = stepper.display_text();
    }
});
