use std::sync::{Arc, Once};

use rand::Rng;
use tokio::time::Duration;

/// Colors a particle may take.
pub const PALETTE: [&str; 4] = ["#00d4ff", "#00b4d8", "#ffffff", "#00c853"];

/// Particles released by one celebration.
const PARTICLE_COUNT: usize = 50;
/// How long a particle stays on the page before the stage removes it.
const PARTICLE_TTL: Duration = Duration::from_secs(4);
/// Bounds of the random fall animation duration, in seconds.
const MIN_FALL_SECONDS: f64 = 2.0;
const MAX_FALL_SECONDS: f64 = 4.0;

/// The keyframes every particle animates with. Installed once per stage.
const FALL_STYLESHEET: &str =
    "@keyframes fall { to { transform: translateY(100vh) rotate(720deg); opacity: 0; } }";

/// One confetti particle, fully described so the stage only has to place it.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub color: String,
    /// Horizontal starting position across the viewport, in percent.
    pub left_percent: f64,
    /// Duration of the fall animation.
    pub fall_seconds: f64,
    /// How long the particle should stay before removal.
    pub ttl: Duration,
}

/// A public port for placing confetti onto the page.
pub trait ConfettiStage: Send + Sync + 'static {
    /// Install the shared animation stylesheet. Called at most once per
    /// [`Celebration`].
    fn install_stylesheet(&self, css: &str);

    /// Add one particle to the page and remove it after its TTL.
    fn spawn_particle(&self, particle: Particle);
}

/// The pass-a-quiz celebration: a burst of falling confetti.
pub struct Celebration {
    stage: Arc<dyn ConfettiStage>,
    styles: Once,
}

impl Celebration {
    /// Creates a new [`Celebration`] on the given stage.
    pub fn new(stage: Arc<dyn ConfettiStage>) -> Self {
        Self {
            stage,
            styles: Once::new(),
        }
    }

    /// Install the fall animation stylesheet. Idempotent, so the host can
    /// call it during setup; the first celebration falls back to it
    /// otherwise.
    pub fn install_styles(&self) {
        let stage = &self.stage;
        self.styles.call_once(|| stage.install_stylesheet(FALL_STYLESHEET));
    }

    /// Release one burst of [`PARTICLE_COUNT`] particles with random colors,
    /// positions and fall durations.
    pub fn celebrate(&self) {
        self.install_styles();

        let mut rng = rand::thread_rng();
        for _ in 0..PARTICLE_COUNT {
            self.stage.spawn_particle(random_particle(&mut rng));
        }
    }
}

fn random_particle<R: Rng>(rng: &mut R) -> Particle {
    Particle {
        color: PALETTE[rng.gen_range(0..PALETTE.len())].to_owned(),
        left_percent: rng.gen_range(0.0..100.0),
        fall_seconds: rng.gen_range(MIN_FALL_SECONDS..MAX_FALL_SECONDS),
        ttl: PARTICLE_TTL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    #[test]
    fn celebrate_releases_a_full_burst() {
        let (stage, recorded) = MockStage::new();
        let celebration = Celebration::new(stage);

        celebration.celebrate();

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.particles.len(), PARTICLE_COUNT);
        for particle in &recorded.particles {
            assert!(PALETTE.contains(&particle.color.as_str()));
            assert!((0.0..100.0).contains(&particle.left_percent));
            assert!((MIN_FALL_SECONDS..MAX_FALL_SECONDS).contains(&particle.fall_seconds));
            assert_eq!(particle.ttl, PARTICLE_TTL);
        }
    }

    #[test]
    fn stylesheet_installed_once() {
        let (stage, recorded) = MockStage::new();
        let celebration = Celebration::new(stage);

        celebration.install_styles();
        celebration.celebrate();
        celebration.celebrate();

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.stylesheets, vec![FALL_STYLESHEET.to_owned()]);
        assert_eq!(recorded.particles.len(), 2 * PARTICLE_COUNT);
    }

    #[derive(Default)]
    struct Recorded {
        stylesheets: Vec<String>,
        particles: Vec<Particle>,
    }

    struct MockStage {
        recorded: Arc<Mutex<Recorded>>,
    }

    impl MockStage {
        fn new() -> (Arc<dyn ConfettiStage>, Arc<Mutex<Recorded>>) {
            let recorded = Arc::new(Mutex::new(Recorded::default()));
            let res = Self {
                recorded: Arc::clone(&recorded),
            };
            (Arc::new(res), recorded)
        }
    }

    impl ConfettiStage for MockStage {
        fn install_stylesheet(&self, css: &str) {
            self.recorded.lock().unwrap().stylesheets.push(css.to_owned());
        }

        fn spawn_particle(&self, particle: Particle) {
            self.recorded.lock().unwrap().particles.push(particle);
        }
    }
}
