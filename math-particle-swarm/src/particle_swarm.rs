use crate::{Bounds, PSOConfig, PSOReport, ParticleSwarm, Result};

/// Runs Particle Swarm Optimization on the weighted quadratic objective.
///
/// Builds a swarm with the given bounds and configuration, then runs it for
/// the configured number of iterations.
///
/// # Arguments
///
/// * `bounds` - Vector of (lower, upper) bound pairs, one per dimension (3 dimensions)
/// * `config` - PSO configuration (use `PSOConfigBuilder` to construct)
///
/// # Errors
///
/// Returns `PSOError::InvalidBounds` if any bound pair has upper < lower,
/// `PSOError::DimensionMismatch` if there are not exactly 3 pairs and
/// `PSOError::EmptySwarm` if the configuration has no particles.
///
/// # Example
///
/// ```rust
/// use math_audio_particle_swarm::{particle_swarm, PSOConfigBuilder};
///
/// let result = particle_swarm(
///     &[(0.0, 10.0), (-10.0, 10.0), (-5.0, 5.0)],
///     PSOConfigBuilder::new().particles(50).iterations(50).seed(42).build().unwrap(),
/// ).expect("optimization failed");
///
/// assert_eq!(result.final_positions.nrows(), 50);
/// ```
pub fn particle_swarm(bounds: &[(f64, f64)], config: PSOConfig) -> Result<PSOReport> {
    let bounds = Bounds::from_pairs(bounds)?;
    let swarm = ParticleSwarm::new(bounds, &config)?;
    Ok(swarm.optimize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PSOConfigBuilder, PSOError};

    #[test]
    fn test_rejects_inverted_bounds() {
        let cfg = PSOConfigBuilder::new().particles(4).build().unwrap();
        let err = particle_swarm(&[(0.0, 10.0), (10.0, -10.0), (-5.0, 5.0)], cfg).unwrap_err();
        assert!(matches!(err, PSOError::InvalidBounds { index: 1, .. }));
    }

    #[test]
    fn test_rejects_wrong_dimension() {
        let cfg = PSOConfigBuilder::new().particles(4).build().unwrap();
        let err = particle_swarm(&[(0.0, 10.0), (-10.0, 10.0)], cfg).unwrap_err();
        assert!(matches!(
            err,
            PSOError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_rejects_empty_swarm_config() {
        let cfg = crate::PSOConfig {
            particles: 0,
            ..Default::default()
        };
        let err = particle_swarm(&crate::DEFAULT_BOUNDS, cfg).unwrap_err();
        assert!(matches!(err, PSOError::EmptySwarm));
    }
}
