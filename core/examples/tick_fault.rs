use fix64_core::{FaultContext, Fix64, TracingSignalSink};

// Steps a falling body through a few ticks. The drag divisor reaches zero
// on tick 3; that step keeps the previous velocity and logs a fault.
fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let dt = Fix64::from_f64(0.25);
    let gravity = Fix64::from_f64(-9.75);
    let mut velocity = Fix64::ZERO;
    let mut height = Fix64::from_int(100);
    let mut sink = TracingSignalSink::default();

    for tick_id in 0..6u64 {
        let drag = Fix64::from_int(3 - tick_id as i64).abs();
        velocity = velocity + gravity * dt;
        velocity.div_assign_det(
            drag * Fix64::HALF,
            FaultContext {
                tick_id,
                location: "tick_fault:drag",
            },
            &mut sink,
        );
        height = height.saturating_add(velocity * dt);
        println!("tick={tick_id} velocity={velocity:.6} height={height:.6} raw={}", height.raw());
    }

    println!("faults={}", sink.emitted());
}
