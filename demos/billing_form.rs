use storefront::billing::*;
use storefront::core::*;

fn main() {
    let on_file = BillingAddressBuilder::new("Asha Traders", "12 MG Road", "New Delhi")
        .zip("110001")
        .gst_no("07AAAAA0000A1Z5")
        .build();

    let mut form = BillingForm::new(on_file);
    println!("Opened form: state={} ({})", form.draft().state, form.draft().state_code);

    for keystrokes in ["2", "27", "27AAPFU", "27AAPFU0939F1ZV"] {
        form.on_field_change(BillingField::GstNo, keystrokes)
            .expect("gst_no is editable");
        let status = match form.gst_error() {
            Some(err) => err.to_string(),
            None => format!("state={}", form.draft().state),
        };
        println!("  typed {keystrokes:<16} valid={} {status}", form.is_valid());
    }

    let mut offline = |_: &BillingAddressDraft, _: &str| -> Result<(), PersistError> {
        Err(PersistError::Network("connection refused".into()))
    };
    match form.save(&mut offline) {
        Ok(saved) => println!("Saved: {saved:?}"),
        Err(e) => println!(
            "Save failed ({e}); notice: {}; state back to {}",
            form.notice().unwrap_or_default(),
            form.draft().state
        ),
    }

    let mut backend = |address: &BillingAddressDraft, gst_no: &str| -> Result<(), PersistError> {
        println!("  backend stores {gst_no} for {}", address.attention);
        Ok(())
    };
    form.on_field_change(BillingField::GstNo, "27AAPFU0939F1ZV")
        .expect("gst_no is editable");
    match form.save(&mut backend) {
        Ok(saved) => println!("Saved: state={} ({})", saved.state, saved.state_code),
        Err(e) => println!("Save failed: {e}"),
    }
}
