#![no_main]

use errsig::comparison::{analyze, AnalysisConfig};
use errsig::loader::parse_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and analysis must return errors, never panic
    let config = AnalysisConfig::default();
    let Ok(table) = parse_table(data, &config.reference_column) else {
        return;
    };
    if let Ok(registry) = table.into_registry(&config) {
        let _ = analyze(&registry, &config);
    }
});
