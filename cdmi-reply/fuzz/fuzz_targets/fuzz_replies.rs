#![no_main]

use cdmi_reply::{
    metadata_from_json_metadata, parse_metadata, sysmd_from_json_metadata, Listing, ReplyContext,
    SysMd,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let ctx = ReplyContext::default();

    let _ = Listing::parse(&ctx, data, Some("fuzz/"));

    if let Ok(json_metadata) = parse_metadata(&ctx, data) {
        let _ = metadata_from_json_metadata(&json_metadata);
        let mut sysmd = SysMd::default();
        let _ = sysmd_from_json_metadata(&json_metadata, Some(&mut sysmd));
    }
});
