use storefront::gst::*;

fn main() {
    println!("=== GST Number Resolution ===\n");

    let inputs = [
        "07AAAAA0000A1Z5",
        "27aapfu0939f1zv",
        "25AAAAA0000A1Z5", // no fixed state
        "99AAAAA0000A1Z5", // reserved prefix
        "07AAAAA",         // still typing
        "29ABCDE1234F1Z5 (branch office)",
    ];

    for raw in &inputs {
        let r = resolve(raw);
        match r.error {
            None if r.state.is_empty() => println!("  {raw} => {} (state unknown)", r.normalized),
            None => println!("  {raw} => {} state={} code={}", r.normalized, r.state, r.state_code),
            Some(err) => println!("  {raw} => ERROR: {err}"),
        }
    }
}
