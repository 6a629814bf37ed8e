//! Pizza Fractions entry point
//!
//! The browser build initializes logging here and hands control to the UI,
//! which drives the game through the `PizzaGame` bindings. The native build
//! runs a scripted kitchen session as a smoke demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Pizza Fractions ready");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pizza_fractions::config::OrderConfig;
    use pizza_fractions::game::{Kitchen, OrderKind};

    env_logger::init();
    log::info!("Pizza Fractions (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let mut kitchen = Kitchen::new(OrderConfig::default(), seed).expect("default config is valid");

    run_demo_order(&mut kitchen, OrderKind::Proper);
    run_demo_order(&mut kitchen, OrderKind::Improper);

    println!("\nTips earned: {}", kitchen.tips_total());
}

/// Generate one order, fill the board exactly as asked, and submit
#[cfg(not(target_arch = "wasm32"))]
fn run_demo_order(
    kitchen: &mut pizza_fractions::game::Kitchen,
    kind: pizza_fractions::game::OrderKind,
) {
    use pizza_fractions::game::PlaceOutcome;

    let order = match kitchen.next_order(kind) {
        Ok(order) => order.clone(),
        Err(e) => {
            eprintln!("order generation failed: {e}");
            return;
        }
    };
    println!("\nOrder #{}: {}", kitchen.order_number(), order.label);

    kitchen.select_pizza_count(order.pizzas_required());
    kitchen.select_slice_count(order.fraction.denominator);

    let mut next_slice = 0u32;
    for (topping, count) in order.counts.iter() {
        for _ in 0..count {
            let Some(pos) = kitchen.layout().slice_center(next_slice) else {
                eprintln!("ran out of slices at {next_slice}");
                return;
            };
            let id = kitchen.spawn_topping(topping);
            let outcome = kitchen.drop_topping(id, pos);
            if !matches!(outcome, PlaceOutcome::Placed { .. }) {
                eprintln!("unexpected drop outcome: {outcome:?}");
                return;
            }
            next_slice += 1;
        }
    }

    match kitchen.submit() {
        Some(result) => {
            println!("{}", result.details);
            println!("{}", if result.success { "Order fulfilled!" } else { "Order not fulfilled" });
        }
        None => eprintln!("submit rejected"),
    }
}
