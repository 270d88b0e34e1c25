use dual::{smooth_step, DualNumber};

fn main() {
    let x = DualNumber::variable(3.0); // x = 3.0
    let y = DualNumber::constant(4.0); // y = 4.0

    let z = x * y; // z = x * y = 12.0
    println!("z = {}", z.real); // 12.0
    println!("dz/dx = {}", z.dual); // 4.0

    let s = smooth_step(DualNumber::variable(0.5));
    println!("smoothstep(0.5) = {s}"); // 0.5 + 1.5ε
}
