use crate::bounds::Bounds;
use crate::objective::objective;
use ndarray::{Array1, Zip};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Weights of the constricted velocity update.
///
/// `v' = constriction * (inertia * v + cognitive * r1 * (pbest - x) + social * r2 * (gbest - x))`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Inertia weight applied to the previous velocity.
    pub inertia: f64,
    /// Pull towards the particle's own best position.
    pub cognitive: f64,
    /// Pull towards the swarm's best position.
    pub social: f64,
    /// Constriction coefficient scaling the whole update.
    pub constriction: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            inertia: 0.3,
            cognitive: 2.0,
            social: 5.0,
            constriction: 0.5,
        }
    }
}

/// One candidate solution with its velocity and personal best record.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Array1<f64>,
    velocity: Array1<f64>,
    best_position: Array1<f64>,
    best_score: f64,
}

impl Particle {
    /// Seeds a particle uniformly inside `bounds` with zero velocity.
    pub fn new<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Self {
        Self::at(bounds.sample(rng))
    }

    /// Places a particle at `position` with zero velocity.
    pub fn at(position: Array1<f64>) -> Self {
        let best_score = objective(&position);
        Self {
            velocity: Array1::zeros(position.len()),
            best_position: position.clone(),
            position,
            best_score,
        }
    }

    /// Current position.
    pub fn position(&self) -> &Array1<f64> {
        &self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> &Array1<f64> {
        &self.velocity
    }

    /// Best position visited so far.
    pub fn best_position(&self) -> &Array1<f64> {
        &self.best_position
    }

    /// Objective value at [`best_position`](Self::best_position).
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Applies the constricted velocity update towards `global_best`.
    ///
    /// A single `r1` and a single `r2` are drawn per call and shared by every
    /// dimension. Velocity magnitude is not limited.
    pub fn update_velocity<R: Rng + ?Sized>(
        &mut self,
        global_best: &Array1<f64>,
        coeffs: &Coefficients,
        rng: &mut R,
    ) {
        let r1: f64 = rng.random::<f64>();
        let r2: f64 = rng.random::<f64>();
        let cognitive = coeffs.cognitive * r1;
        let social = coeffs.social * r2;

        Zip::from(&mut self.velocity)
            .and(&self.position)
            .and(&self.best_position)
            .and(global_best)
            .for_each(|v, &x, &p, &g| {
                let inertia = coeffs.inertia * *v;
                *v = (inertia + cognitive * (p - x) + social * (g - x)) * coeffs.constriction;
            });
    }

    /// Moves by the current velocity, clamps into `bounds` and refreshes the
    /// personal best. Ties keep the older best.
    pub fn update_position(&mut self, bounds: &Bounds) {
        self.position += &self.velocity;
        bounds.clamp(&mut self.position);

        let score = objective(&self.position);
        if score < self.best_score {
            self.best_score = score;
            self.best_position.assign(&self.position);
        }
    }
}
