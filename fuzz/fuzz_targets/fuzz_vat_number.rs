#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (number, country) = input;
    let _ = artisanflow::vat::check_vat_number(number, country);
});
