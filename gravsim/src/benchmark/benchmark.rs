use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

const STEPS: usize = 200;

/// Time full engine steps (force pass + integration) for growing body counts
pub fn bench_step() {
    // Different system sizes to test
    let ns = [25, 50, 100, 200, 400];

    for n in ns {
        let mut engine = Engine::new(Parameters {
            collision_enabled: false,
            ..Parameters::default()
        });

        for i in 0..n {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            let x = NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
            engine.add_body(x, NVec2::zeros(), 10.0);
        }
        engine.start();

        // Warm up
        engine.step(1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..STEPS {
            engine.step(1.0 / 60.0);
        }
        let per_step = t0.elapsed().as_secs_f64() / STEPS as f64;

        println!("N = {n:4}, step = {:10.3} us", per_step * 1e6);
    }
}
