//! Particle Swarm Optimization library.
//!
//! This crate provides a Particle Swarm Optimization (PSO) with a constriction
//! coefficient that minimises a fixed weighted quadratic over a bounded
//! 3-dimensional box. Particles are updated one after the other and always see
//! the freshest global best.
//!
//! # Features
//!
//! - Constricted velocity update with inertia, cognitive and social weights
//! - Hard clamping of positions into the search box
//! - Reproducible runs from a seed, or from any injected random source
//! - Free-form text run requests with a single generic input error
//! - Text rendering of the optimum and a scatter plot of the final swarm
//!
//! # Example
//!
//! ```rust
//! use math_audio_particle_swarm::{particle_swarm, PSOConfigBuilder, DEFAULT_BOUNDS};
//!
//! let config = PSOConfigBuilder::new()
//!     .particles(300)
//!     .iterations(100)
//!     .seed(42)
//!     .build()
//!     .expect("invalid config");
//!
//! let report = particle_swarm(&DEFAULT_BOUNDS, config).expect("valid bounds");
//!
//! assert!(report.fun < 1e-3);
//! ```
#![warn(missing_docs)]

pub mod error;
pub use error::{PSOError, Result};

use std::fmt;

use ndarray::{Array1, Array2};
use serde::Serialize;

/// Box constraints and the default search box.
pub mod bounds;
/// The fixed quadratic objective.
pub mod objective;
/// A single particle and the velocity update weights.
pub mod particle;
/// Main particle swarm algorithm implementation.
pub mod particle_swarm;
/// Scatter plot of the final particle positions.
pub mod plot;
/// Text rendering of a run result.
pub mod render;
/// Parsing of free-form run requests.
pub mod request;
/// The swarm optimizer driving the iteration loop.
pub mod swarm;


pub use bounds::{Bounds, DEFAULT_BOUNDS};
pub use objective::objective;
pub use particle::{Coefficients, Particle};
pub use particle_swarm::particle_swarm;
pub use request::{RunForm, RunRequest, RunResult};
pub use swarm::ParticleSwarm;

/// Configuration for the particle swarm optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct PSOConfig {
    /// Number of particles in the swarm.
    pub particles: usize,
    /// Number of full sweeps over the swarm.
    pub iterations: usize,
    /// Velocity update weights.
    pub coefficients: Coefficients,
    /// Optional random seed for reproducibility.
    pub seed: Option<u64>,
    /// Log progress at `info` level instead of `debug`.
    pub disp: bool,
}

impl Default for PSOConfig {
    fn default() -> Self {
        Self {
            particles: 300,
            iterations: 100,
            coefficients: Coefficients::default(),
            seed: None,
            disp: false,
        }
    }
}

/// Fluent builder for `PSOConfig`.
///
/// # Example
///
/// ```rust
/// use math_audio_particle_swarm::PSOConfigBuilder;
///
/// let config = PSOConfigBuilder::new()
///     .particles(50)
///     .iterations(200)
///     .inertia(0.7)
///     .cognitive(1.5)
///     .social(1.5)
///     .constriction(0.73)
///     .seed(7)
///     .build();
/// ```
pub struct PSOConfigBuilder {
    cfg: PSOConfig,
}

impl Default for PSOConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PSOConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: PSOConfig::default(),
        }
    }
    /// Sets the number of particles.
    pub fn particles(mut self, v: usize) -> Self {
        self.cfg.particles = v;
        self
    }
    /// Sets the number of iterations.
    pub fn iterations(mut self, v: usize) -> Self {
        self.cfg.iterations = v;
        self
    }
    /// Sets all velocity weights at once.
    pub fn coefficients(mut self, v: Coefficients) -> Self {
        self.cfg.coefficients = v;
        self
    }
    /// Sets the inertia weight.
    pub fn inertia(mut self, v: f64) -> Self {
        self.cfg.coefficients.inertia = v;
        self
    }
    /// Sets the personal-best (cognitive) weight.
    pub fn cognitive(mut self, v: f64) -> Self {
        self.cfg.coefficients.cognitive = v;
        self
    }
    /// Sets the global-best (social) weight.
    pub fn social(mut self, v: f64) -> Self {
        self.cfg.coefficients.social = v;
        self
    }
    /// Sets the constriction coefficient.
    pub fn constriction(mut self, v: f64) -> Self {
        self.cfg.coefficients.constriction = v;
        self
    }
    /// Sets the random seed for reproducibility.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    /// Enables/disables progress display.
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    /// Builds and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PSOError::EmptySwarm` if `particles == 0`.
    pub fn build(self) -> Result<PSOConfig> {
        if self.cfg.particles == 0 {
            return Err(PSOError::EmptySwarm);
        }
        Ok(self.cfg)
    }
}

/// Result/report of a PSO run.
#[derive(Clone, Serialize)]
pub struct PSOReport {
    /// Best position found by the swarm.
    pub x: Array1<f64>,
    /// Objective value at `x`.
    pub fun: f64,
    /// Human-readable status message.
    pub message: String,
    /// Number of iterations performed.
    pub nit: usize,
    /// Number of objective evaluations performed.
    pub nfev: usize,
    /// Final particle positions (n_particles x dim).
    pub final_positions: Array2<f64>,
}

impl fmt::Debug for PSOReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PSOReport")
            .field("x", &self.x.to_vec())
            .field("fun", &self.fun)
            .field("message", &self.message)
            .field("nit", &self.nit)
            .field("nfev", &self.nfev)
            .field(
                "final_positions",
                &format!(
                    "{}x{}",
                    self.final_positions.nrows(),
                    self.final_positions.ncols()
                ),
            )
            .finish()
    }
}
