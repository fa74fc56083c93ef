use math_audio_particle_swarm::plot::write_scatter;
use math_audio_particle_swarm::render::render_result;
use math_audio_particle_swarm::{Bounds, PSOConfigBuilder, ParticleSwarm, RunResult};

fn main() {
    env_logger::init();

    let config = PSOConfigBuilder::new()
        .particles(300)
        .iterations(100)
        .inertia(0.3)
        .cognitive(2.0)
        .social(5.0)
        .constriction(0.5)
        .seed(42)
        .disp(true)
        .build()
        .expect("invalid config");

    let swarm =
        ParticleSwarm::new(Bounds::default_search_box(), &config).expect("invalid bounds");
    let (x0, f0) = swarm.global_best();
    eprintln!("initial best f={:.6e} at {:?}", f0, x0.to_vec());

    let result: RunResult = swarm.optimize().into();
    println!("{}", render_result(&result));

    let path = std::env::temp_dir().join("pso_basic.html");
    match write_scatter(&result.final_positions, &path) {
        Ok(()) => eprintln!("scatter written to {}", path.display()),
        Err(e) => eprintln!("could not write scatter: {}", e),
    }
}
