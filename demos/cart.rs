use rust_decimal_macros::dec;
use storefront::cart::*;
use storefront::core::*;

fn main() {
    let catalog = Catalog::new(vec![
        Product::new("PUR-01", "RO water purifier", dec!(14990)),
        Product::new("FLT-01", "Sediment filter", dec!(450)),
    ])
    .expect("catalog is valid");

    let mut cart = Cart::default();
    for product in catalog.iter() {
        cart = reduce(
            cart,
            CartAction::Add {
                product: product.clone(),
                quantity: 2,
            },
        );
    }
    cart = reduce(cart, CartAction::Decrement("PUR-01".into()));

    for line in cart.lines() {
        println!(
            "  {:<20} {:>3} x {:>10} = {:>10}",
            line.name,
            line.quantity,
            line.unit_price,
            line.line_total()
        );
    }
    println!("  {} items, subtotal {}", cart.item_count(), cart.subtotal());
}
