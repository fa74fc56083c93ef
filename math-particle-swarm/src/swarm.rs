use crate::bounds::Bounds;
use crate::objective::{DIMENSION, objective};
use crate::particle::{Coefficients, Particle};
use crate::{PSOConfig, PSOError, PSOReport, Result};
use log::Level;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Particle swarm optimizer.
///
/// Owns the particles and the global best record. Use [`ParticleSwarm::new`]
/// (or [`ParticleSwarm::with_rng`] to inject the random source), then call
/// [`optimize`](Self::optimize), which consumes the swarm: a new run needs a
/// freshly seeded swarm.
pub struct ParticleSwarm<R: Rng = StdRng> {
    bounds: Bounds,
    coefficients: Coefficients,
    iterations: usize,
    disp: bool,
    particles: Vec<Particle>,
    global_best_position: Array1<f64>,
    global_best_score: f64,
    nfev: usize,
    rng: R,
}

impl ParticleSwarm<StdRng> {
    /// Creates a swarm whose random source comes from `config.seed`, or from
    /// the thread RNG when no seed is set.
    ///
    /// # Errors
    ///
    /// See [`ParticleSwarm::with_rng`].
    pub fn new(bounds: Bounds, config: &PSOConfig) -> Result<Self> {
        let rng: StdRng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };
        Self::with_rng(bounds, config, rng)
    }
}

impl<R: Rng> ParticleSwarm<R> {
    /// Creates a swarm drawing every random number from `rng`.
    ///
    /// Particles are seeded in order; the first particle holding the lowest
    /// initial score becomes the global best.
    ///
    /// # Errors
    ///
    /// Returns `PSOError::DimensionMismatch` if `bounds` is not 3-dimensional.
    /// Returns `PSOError::EmptySwarm` if `config.particles == 0`.
    pub fn with_rng(bounds: Bounds, config: &PSOConfig, mut rng: R) -> Result<Self> {
        if bounds.dim() != DIMENSION {
            return Err(PSOError::DimensionMismatch {
                expected: DIMENSION,
                got: bounds.dim(),
            });
        }
        if config.particles == 0 {
            return Err(PSOError::EmptySwarm);
        }

        let particles: Vec<Particle> = (0..config.particles)
            .map(|_| Particle::new(&bounds, &mut rng))
            .collect();
        Ok(Self::from_particles(bounds, config, particles, rng))
    }

    /// Assembles a swarm around already seeded particles.
    pub(crate) fn from_particles(
        bounds: Bounds,
        config: &PSOConfig,
        particles: Vec<Particle>,
        rng: R,
    ) -> Self {
        // strict `<` keeps the first particle on ties
        let mut best_i = 0usize;
        let mut best_v = particles[0].best_score();
        for (i, p) in particles.iter().enumerate() {
            if p.best_score() < best_v {
                best_v = p.best_score();
                best_i = i;
            }
        }
        let global_best_position = particles[best_i].best_position().clone();
        let global_best_score = objective(&global_best_position);

        Self {
            bounds,
            coefficients: config.coefficients,
            iterations: config.iterations,
            disp: config.disp,
            nfev: particles.len() + 1,
            particles,
            global_best_position,
            global_best_score,
            rng,
        }
    }

    /// Current global best position and score.
    pub fn global_best(&self) -> (&Array1<f64>, f64) {
        (&self.global_best_position, self.global_best_score)
    }

    /// The particles, in update order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The search box.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Moves particle `i` against the live global best, then folds its
    /// personal best into the global best. Returns `true` on improvement.
    pub(crate) fn step_particle(&mut self, i: usize) -> bool {
        let particle = &mut self.particles[i];
        particle.update_velocity(
            &self.global_best_position,
            &self.coefficients,
            &mut self.rng,
        );
        particle.update_position(&self.bounds);
        self.nfev += 1;

        if particle.best_score() < self.global_best_score {
            self.global_best_position.assign(particle.best_position());
            self.global_best_score = particle.best_score();
            true
        } else {
            false
        }
    }

    /// One full sweep over the swarm in construction order.
    pub(crate) fn sweep(&mut self) -> bool {
        let mut improved = false;
        for i in 0..self.particles.len() {
            improved |= self.step_particle(i);
        }
        improved
    }

    /// Final positions as an (n_particles x dim) matrix.
    pub fn positions(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.particles.len(), self.bounds.dim()), |(i, j)| {
            self.particles[i].position()[j]
        })
    }

    /// Runs every configured iteration and returns the report.
    ///
    /// There is no convergence check: the full iteration budget is always spent.
    pub fn optimize(mut self) -> PSOReport {
        let level = if self.disp { Level::Info } else { Level::Debug };

        log::info!(
            "PSO init: {} particles, {} iterations, w={}, c1={}, c2={}, k={}",
            self.particles.len(),
            self.iterations,
            self.coefficients.inertia,
            self.coefficients.cognitive,
            self.coefficients.social,
            self.coefficients.constriction
        );
        log::log!(level, "PSO iter {:4}  best_f={:.6e}", 0, self.global_best_score);

        for iter in 1..=self.iterations {
            if self.sweep() {
                log::log!(
                    level,
                    "PSO iter {:4}  best_f={:.6e}",
                    iter,
                    self.global_best_score
                );
            }
        }

        let message = format!("Completed {} iterations", self.iterations);
        log::info!(
            "PSO finished: {} best_f={:.6e} nfev={}",
            message,
            self.global_best_score,
            self.nfev
        );

        PSOReport {
            final_positions: self.positions(),
            x: self.global_best_position,
            fun: self.global_best_score,
            message,
            nit: self.iterations,
            nfev: self.nfev,
        }
    }
}
