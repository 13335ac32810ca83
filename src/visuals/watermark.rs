use std::sync::Arc;

use rand::Rng;
use tokio::sync::oneshot::{self, Sender};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::ui::element::Element;

/// Delay between two watermark repositions.
const MOVE_PERIOD: Duration = Duration::from_secs(5);
/// Bounds of the random `top`/`right` offsets, in percent.
const POSITION_MIN: f64 = 10.0;
const POSITION_MAX: f64 = 80.0;

/// Periodically moves the anti-screenshot watermark to a random position so
/// it cannot be cropped out reliably.
pub struct WatermarkMover;

impl WatermarkMover {
    /// Spawn a background task repositioning the element every
    /// [`MOVE_PERIOD`]. The first move happens after one full period.
    pub fn spawn(watermark: Arc<dyn Element>) -> WatermarkHandle {
        let (stop, mut stopped) = oneshot::channel::<()>();

        let routine = tokio::spawn(async move {
            let mut timer = tokio::time::interval(MOVE_PERIOD);
            timer.tick().await;

            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        reposition(watermark.as_ref(), &mut rand::thread_rng());
                    }
                    _ = &mut stopped => break,
                }
            }
        });

        WatermarkHandle { stop, routine }
    }
}

/// Handle that stops a running [`WatermarkMover`]. Dropping the handle stops
/// the mover as well.
#[derive(Debug)]
pub struct WatermarkHandle {
    stop: Sender<()>,
    routine: JoinHandle<()>,
}

impl WatermarkHandle {
    /// Stop repositioning. The element keeps its last position.
    pub async fn stop(self) {
        let _ = self.stop.send(());
        let _ = self.routine.await;
    }
}

fn reposition<R: Rng>(watermark: &dyn Element, rng: &mut R) {
    let top = rng.gen_range(POSITION_MIN..POSITION_MAX);
    let right = rng.gen_range(POSITION_MIN..POSITION_MAX);
    watermark.set_style("top", &format!("{top:.2}%"));
    watermark.set_style("right", &format!("{right:.2}%"));
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::ui::element::fake::FakeElement;

    #[test]
    fn reposition_stays_in_bounds() {
        let element = FakeElement::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            reposition(&element, &mut rng);

            for property in ["top", "right"] {
                let value = element.style(property).unwrap();
                let percent: f64 = value.strip_suffix('%').unwrap().parse().unwrap();
                assert!((POSITION_MIN..POSITION_MAX).contains(&percent));
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn mover_waits_one_period_before_moving() {
        let element = Arc::new(FakeElement::new());
        let handle = WatermarkMover::spawn(Arc::clone(&element) as Arc<dyn Element>);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(element.style("top"), None);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(element.style("top").is_some());
        assert!(element.style("right").is_some());

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stop_freezes_position() {
        let element = Arc::new(FakeElement::new());
        let handle = WatermarkMover::spawn(Arc::clone(&element) as Arc<dyn Element>);

        tokio::time::sleep(Duration::from_secs(6)).await;
        handle.stop().await;
        let frozen = (element.style("top"), element.style("right"));

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!((element.style("top"), element.style("right")), frozen);
    }
}
