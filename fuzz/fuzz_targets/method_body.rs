#![no_main]

use backscope::{metadata::body::MethodBody, prelude::*};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let body = MethodBody::parse(data).unwrap_or_else(|_| MethodBody::new(data));
    let method = MethodBuilder::new("Fuzz").body(body).build();

    let mut output = RecordingOutput::new();
    Backlang::default().decompile_method(&method, &mut output);
    assert!(output.is_balanced());
});
