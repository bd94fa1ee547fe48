//! Order Workflow
//!
//! Drives an order through draft → checkout → paid with lifecycle hooks,
//! then shows a failed payment rolling back and a cancellation chosen by the
//! order's current state.
//!
//! Run with: cargo run --example order_workflow

use turnstile::core::{StateField, Stater};
use turnstile::impl_stater;
use turnstile::machine::StateMachine;

#[derive(Debug, Default)]
struct Order {
    id: u64,
    amount_cents: u64,
    address: String,
    transition: StateField,
}

impl_stater!(Order, transition);

fn order_machine() -> StateMachine<Order> {
    let mut machine = StateMachine::<Order>::new();
    machine.initial("draft");

    machine.state("checkout").enter(|order| {
        if order.address.is_empty() {
            order.address = "pending".to_string();
        }
        Ok(())
    });
    machine.state("paid").enter(|order| {
        println!("  order {} paid {} cents", order.id, order.amount_cents);
        Ok(())
    });

    machine.event("checkout").to("checkout").from(["draft"]);
    machine
        .event("pay")
        .to("paid")
        .from(["checkout"])
        .before(|order| {
            if order.amount_cents == 0 {
                return Err("cannot pay an empty order".into());
            }
            Ok(())
        });

    let cancel = machine.event("cancel");
    cancel.to("cancelled").from(["draft", "checkout"]);
    cancel.to("paid_cancelled").from(["paid"]);

    machine
}

fn main() {
    println!("=== Order Workflow Example ===\n");

    let machine = order_machine();

    let mut order = Order {
        id: 1,
        amount_cents: 4_200,
        ..Default::default()
    };

    for event in ["checkout", "pay", "cancel"] {
        println!("{} --{event}-->", current(&order, &machine));
        match machine.trigger(event, &mut order) {
            Ok(()) => println!("  now {}", order.state()),
            Err(err) => println!("  rejected: {err}"),
        }
    }

    println!("\n--- Empty order ---");
    let mut empty = Order {
        id: 2,
        ..Default::default()
    };
    machine.trigger("checkout", &mut empty).ok();
    if let Err(err) = machine.trigger("pay", &mut empty) {
        println!("  pay rejected: {err}");
    }
    println!("  still {}", empty.state());
    println!("  available: {:?}", machine.available_events(&empty));

    println!("\n=== Example Complete ===");
}

fn current<'a>(order: &'a Order, machine: &'a StateMachine<Order>) -> &'a str {
    match order.state() {
        "" => machine.initial_state(),
        state => state,
    }
}
