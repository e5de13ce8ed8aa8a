//! One-shot capture delivery channel.

use std::sync::mpsc;

use crate::{AcquisitionError, AcquisitionResult};
use inspect_types::PointCloud;

/// Producer half of the capture boundary.
///
/// Held by the acquisition collaborator's worker thread. Delivering
/// consumes the sender, so exactly one result can ever be sent.
#[derive(Debug)]
pub struct CaptureSender {
    tx: mpsc::Sender<AcquisitionResult<PointCloud>>,
}

impl CaptureSender {
    /// Delivers the capture result, consuming the sender.
    ///
    /// A receiver that has already been dropped is not an error from the
    /// worker's perspective; the result is simply discarded.
    pub fn deliver(self, result: AcquisitionResult<PointCloud>) {
        let _ = self.tx.send(result);
    }
}

/// Consumer half of the capture boundary.
#[derive(Debug)]
pub struct CaptureReceiver {
    rx: mpsc::Receiver<AcquisitionResult<PointCloud>>,
}

impl CaptureReceiver {
    /// Blocks until the worker delivers its result, then returns it.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's [`AcquisitionError`] unchanged, or
    /// [`AcquisitionError::Disconnected`] if the worker dropped its sender
    /// without delivering.
    pub fn wait(self) -> AcquisitionResult<PointCloud> {
        match self.rx.recv() {
            Ok(result) => result,
            Err(mpsc::RecvError) => Err(AcquisitionError::Disconnected),
        }
    }

    /// Checks for a delivered result without blocking.
    ///
    /// Returns `None` while the capture is still in flight. Once a value is
    /// returned the capture is finished; the receiver should then be
    /// dropped.
    pub fn poll(&self) -> Option<AcquisitionResult<PointCloud>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                Some(Err(AcquisitionError::Disconnected))
            }
        }
    }
}

/// Creates the one-shot channel connecting an acquisition worker to the
/// synchronous inspection pipeline.
///
/// # Example
///
/// ```
/// use inspect_acquire::{capture_channel, collect_points, CalibrationParams};
///
/// let (sender, receiver) = capture_channel();
/// let calibration = CalibrationParams::default();
///
/// // The collaborator's worker thread decodes the transmission and
/// // delivers once.
/// std::thread::spawn(move || {
///     let lines = ["1|3.44|0|0.0".to_string(), "FIM".to_string()];
///     sender.deliver(Ok(collect_points(lines, &calibration)));
/// });
///
/// let cloud = receiver.wait().unwrap();
/// assert_eq!(cloud.len(), 1);
/// ```
#[must_use]
pub fn capture_channel() -> (CaptureSender, CaptureReceiver) {
    let (tx, rx) = mpsc::channel();
    (CaptureSender { tx }, CaptureReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::thread;

    #[test]
    fn test_delivery_of_cloud() {
        let (sender, receiver) = capture_channel();

        let worker = thread::spawn(move || {
            let cloud = PointCloud::from_positions(&[Point3::new(1.0, 2.0, 3.0)]);
            sender.deliver(Ok(cloud));
        });

        let cloud = receiver.wait().unwrap();
        assert_eq!(cloud.len(), 1);
        worker.join().unwrap();
    }

    #[test]
    fn test_delivery_of_failure() {
        let (sender, receiver) = capture_channel();

        sender.deliver(Err(AcquisitionError::Failed {
            reason: "port vanished".to_string(),
        }));

        match receiver.wait() {
            Err(AcquisitionError::Failed { reason }) => assert_eq!(reason, "port vanished"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_dropped_sender_is_disconnected() {
        let (sender, receiver) = capture_channel();
        drop(sender);
        assert_eq!(receiver.wait(), Err(AcquisitionError::Disconnected));
    }

    #[test]
    fn test_poll_in_flight_then_delivered() {
        let (sender, receiver) = capture_channel();
        assert!(receiver.poll().is_none());

        sender.deliver(Ok(PointCloud::new()));
        match receiver.poll() {
            Some(Ok(cloud)) => assert!(cloud.is_empty()),
            other => panic!("expected delivered cloud, got {other:?}"),
        }
    }
}
